pub mod key_code;
pub mod location;
pub mod record;

pub use key_code::*;
pub use location::*;
pub use record::*;
