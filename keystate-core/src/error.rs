//! Error types for the key state core

use thiserror::Error;

use crate::hub::{ObserverId, SourceId, TrackerId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown source: {0:?}")]
    UnknownSource(SourceId),

    #[error("Unknown tracker: {0:?}")]
    UnknownTracker(TrackerId),

    #[error("Unknown observer: {0:?}")]
    UnknownObserver(ObserverId),

    #[error("No source currently owns the keyboard focus")]
    NoFocusOwner,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unknown key: {0}")]
    UnknownKey(String),
}

pub type Result<T> = std::result::Result<T, Error>;
