//! Pressed-key tracking
//!
//! [`KeyStateTracker`] keeps the keys currently held down, in the order they
//! were pressed. It is driven by press, release and focus notifications and
//! can be queried at any time.

mod key_state;
mod render;

pub use key_state::KeyStateTracker;
pub use render::{join_key_text, KEY_SEPARATOR};
