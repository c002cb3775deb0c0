use logos::{Lexer as LogosLexer, Logos};

use super::Token;
use crate::ScriptError;

pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
    current_line: usize,
    next_line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            current_line: 1,
            next_line: 1,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, ScriptError> {
        self.current_line = self.next_line;

        match self.inner.next() {
            Some(Ok(Token::Newline)) => {
                // The newline belongs to the line it terminates
                self.next_line += 1;
                Ok(Some(Token::Newline))
            }
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(_)) => Err(ScriptError::Parse {
                line: self.current_line,
                message: format!("Unexpected token: '{}'", self.inner.slice()),
            }),
            None => Ok(None),
        }
    }

    /// Line of the token most recently returned
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn collect_all(mut self) -> Result<Vec<Token>, ScriptError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}
