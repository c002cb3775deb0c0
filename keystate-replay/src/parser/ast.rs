use keystate_core::KeySpec;

// AST nodes for replay scripts
#[derive(Debug, Default)]
pub struct Script {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone)]
pub struct Statement {
    pub line: usize,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Sources(Vec<String>),
    Trackers(Vec<String>),
    Attach { tracker: String, sources: Vec<String> },
    Focus(Option<String>),    // focus none
    Press(Vec<KeySpec>),
    Release(Vec<KeySpec>),
    Type(Vec<KeySpec>),
    Clear(String),
    Show(Option<String>),     // all trackers when empty
    Expect { tracker: String, text: String },
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.statements.iter().map(|statement| &statement.command)
    }
}
