use keystate_core::KeySpec;

use super::ast::*;
use crate::lexer::{Lexer, Token};
use crate::ScriptError;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Option<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            current: None,
        }
    }

    pub fn parse(&mut self) -> Result<Script, ScriptError> {
        let mut script = Script::new();
        self.advance()?;

        while let Some(token) = &self.current {
            if *token == Token::Newline {
                self.advance()?;
                continue;
            }

            let line = self.lexer.current_line();
            let command = self.parse_command()?;
            script.statements.push(Statement { line, command });
            self.expect_end_of_command()?;
        }

        Ok(script)
    }

    fn advance(&mut self) -> Result<(), ScriptError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn error(&self, message: String) -> ScriptError {
        ScriptError::Parse {
            line: self.lexer.current_line(),
            message,
        }
    }

    fn at_end_of_command(&self) -> bool {
        matches!(self.current, None | Some(Token::Newline))
    }

    fn expect(&mut self, expected: Token) -> Result<(), ScriptError> {
        if self.current.as_ref() != Some(&expected) {
            return Err(self.error(format!("Expected {:?}, found {:?}", expected, self.current)));
        }
        self.advance()
    }

    fn expect_end_of_command(&mut self) -> Result<(), ScriptError> {
        if !self.at_end_of_command() {
            return Err(self.error(format!("Unexpected {:?} after command", self.current)));
        }
        Ok(())
    }

    fn parse_command(&mut self) -> Result<Command, ScriptError> {
        let keyword = self.current.clone();
        self.advance()?;

        match keyword {
            Some(Token::Source) => Ok(Command::Sources(self.parse_names()?)),
            Some(Token::Tracker) => Ok(Command::Trackers(self.parse_names()?)),
            Some(Token::Attach) => {
                let tracker = self.expect_name()?;
                self.expect(Token::To)?;
                let sources = self.parse_names()?;
                Ok(Command::Attach { tracker, sources })
            }
            Some(Token::Focus) => {
                if self.current == Some(Token::None) {
                    self.advance()?;
                    Ok(Command::Focus(None))
                } else {
                    Ok(Command::Focus(Some(self.expect_name()?)))
                }
            }
            Some(Token::Press) => Ok(Command::Press(self.parse_keys()?)),
            Some(Token::Release) => Ok(Command::Release(self.parse_keys()?)),
            Some(Token::Type) => Ok(Command::Type(self.parse_keys()?)),
            Some(Token::Clear) => Ok(Command::Clear(self.expect_name()?)),
            Some(Token::Show) => {
                if self.at_end_of_command() {
                    Ok(Command::Show(None))
                } else {
                    Ok(Command::Show(Some(self.expect_name()?)))
                }
            }
            Some(Token::Expect) => {
                let tracker = self.expect_name()?;
                match self.current.clone() {
                    Some(Token::String(text)) => {
                        self.advance()?;
                        Ok(Command::Expect { tracker, text })
                    }
                    other => Err(self.error(format!(
                        "Expected quoted text after 'expect {}', found {:?}",
                        tracker, other
                    ))),
                }
            }
            other => Err(self.error(format!("Expected a command, found {:?}", other))),
        }
    }

    fn expect_name(&mut self) -> Result<String, ScriptError> {
        match self.current.clone() {
            Some(Token::Name(name)) => {
                self.advance()?;
                Ok(name)
            }
            other => Err(self.error(format!("Expected a name, found {:?}", other))),
        }
    }

    /// One or more names, optionally separated by commas
    fn parse_names(&mut self) -> Result<Vec<String>, ScriptError> {
        let mut names = vec![self.expect_name()?];
        while !self.at_end_of_command() {
            if self.current == Some(Token::Comma) {
                self.advance()?;
            }
            names.push(self.expect_name()?);
        }
        Ok(names)
    }

    fn parse_keys(&mut self) -> Result<Vec<KeySpec>, ScriptError> {
        let line = self.lexer.current_line();
        self.parse_names()?
            .iter()
            .map(|name| {
                KeySpec::parse(name).map_err(|e| ScriptError::Parse {
                    line,
                    message: e.to_string(),
                })
            })
            .collect()
    }
}
