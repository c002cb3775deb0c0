//! Built-in script used when no script file is given.

/// Three text fields, each with its own tracker.
///
/// Shift is pressed in the first field and Ctrl in the second; both follow
/// the focus to the third field where they are finally released.
pub const DEMO_SCRIPT: &str = r#"# Three text fields, each listening with its own tracker
source field1, field2, field3
tracker t1, t2, t3
attach t1 to field1
attach t2 to field2
attach t3 to field3

focus field1
press LShift a
type a
expect t1 "Shift+A"
release a
expect t1 "Shift"

// Move to the next field while Shift is still held
focus field2
expect t1 ""
expect t2 "Shift"
press RCtrl
expect t2 "Shift+Ctrl"

focus field3
expect t2 ""
expect t3 "Shift+Ctrl"
release RCtrl LShift
expect t3 ""
show
"#;
