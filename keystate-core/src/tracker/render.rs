use crate::KeyRecord;

/// Separator placed between key names when rendering a tracker.
pub const KEY_SEPARATOR: &str = "+";

/// Joins the names of `records`, in order, with [`KEY_SEPARATOR`].
pub fn join_key_text(records: &[KeyRecord], with_location: bool) -> String {
    records
        .iter()
        .map(|record| {
            if with_location {
                record.key_text_with_location()
            } else {
                record.key_text()
            }
        })
        .collect::<Vec<_>>()
        .join(KEY_SEPARATOR)
}
