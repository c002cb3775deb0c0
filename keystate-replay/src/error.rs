use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Line {line}: undefined {kind} '{name}'")]
    Undefined {
        line: usize,
        kind: &'static str,
        name: String,
    },

    #[error("Line {line}: {kind} '{name}' is already defined")]
    Duplicate {
        line: usize,
        kind: &'static str,
        name: String,
    },

    #[error("Line {line}: no source has the keyboard focus")]
    NoFocus { line: usize },

    #[error("Line {line}: expected {tracker} to be \"{expected}\", found \"{actual}\"")]
    ExpectationFailed {
        line: usize,
        tracker: String,
        expected: String,
        actual: String,
    },

    #[error("Line {line}: {source}")]
    Core {
        line: usize,
        source: keystate_core::Error,
    },
}

impl ScriptError {
    /// Line the error was reported at, when known.
    pub fn line(&self) -> Option<usize> {
        match self {
            ScriptError::Io(_) => None,
            ScriptError::Parse { line, .. }
            | ScriptError::Undefined { line, .. }
            | ScriptError::Duplicate { line, .. }
            | ScriptError::NoFocus { line }
            | ScriptError::ExpectationFailed { line, .. }
            | ScriptError::Core { line, .. } => Some(*line),
        }
    }
}
