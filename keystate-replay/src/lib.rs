pub mod lexer;
pub mod parser;
pub mod error;
pub mod session;
pub mod demo;

pub use keystate_core::{
    Error, InputEvent, InputHub, KeyCode, KeyLocation, KeyRecord, KeySpec, KeyStateTracker,
    Propagation, SourceId, TrackerId,
};
pub use error::ScriptError;
pub use session::{ReplayOptions, Session};

/// Parse and replay `input`, returning the report lines.
pub fn run_script(input: &str, options: ReplayOptions) -> Result<Vec<String>, ScriptError> {
    let script = parser::Parser::new(input).parse()?;

    let mut session = Session::new(options);
    session.run(&script)?;
    Ok(session.output())
}
