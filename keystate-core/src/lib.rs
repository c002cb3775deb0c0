pub mod types;
pub mod error;
pub mod key_spec;
pub mod tracker;
pub mod hub;

pub use types::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use key_spec::KeySpec;
pub use tracker::KeyStateTracker;
pub use hub::{
    FocusEvent, InputEvent, InputHub, KeyObserver, Listener, ObserverId, Propagation, SourceId,
    TrackerId,
};
