//! Tag path parser.
//!
//! ```text
//! path      := '<' step+ '>'
//! step      := tagstep | indexstep
//! tagstep   := '(' hex ',' (hex | '"' owner '"' ',' hex) ')'
//! indexstep := '[' (digits | '<' digits '>') ']'
//! ```
//!
//! Stray `<`, `>`, `"` and whitespace between steps are ignored; record
//! sources routinely leave them behind.

use thiserror::Error;

use crate::types::*;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Path must be wrapped in '<' and '>'")]
    MissingDelimiters,
    #[error("Unexpected character {0:?} at {1}")]
    UnexpectedChar(char, usize),
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Invalid hex number: {0:?}")]
    InvalidHex(String),
    #[error("Invalid item index: {0:?}")]
    InvalidIndex(String),
    #[error("Unclosed owner string")]
    UnclosedOwner,
    #[error("Private element offset {0:#X} exceeds 0xFF")]
    PrivateOffsetRange(u16),
    #[error("Owner string on even group {0:04X}")]
    OwnerOnPublicGroup(u16),
    #[error("Path has no steps")]
    Empty,
}

/// Tag path parser.
pub struct TagPathParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TagPathParser<'a> {
    /// Parse a path expression such as `<(0008,1115)[<0>](0008,1150)>`.
    pub fn parse(input: &'a str) -> Result<TagPath, ParseError> {
        let trimmed = input.trim();
        if !(trimmed.len() >= 2 && trimmed.starts_with('<') && trimmed.ends_with('>')) {
            return Err(ParseError::MissingDelimiters);
        }
        let mut parser = Self { input: &trimmed[..trimmed.len() - 1], pos: 1 };
        parser.parse_path()
    }

    fn parse_path(&mut self) -> Result<TagPath, ParseError> {
        let mut steps = Vec::new();

        loop {
            self.skip_stray();
            match self.peek() {
                None => break,
                Some('(') => steps.push(Step::Tag(self.parse_tag_step()?)),
                Some('[') => steps.push(Step::Index(self.parse_index_step()?)),
                Some(c) => return Err(ParseError::UnexpectedChar(c, self.pos)),
            }
        }

        if steps.is_empty() {
            return Err(ParseError::Empty);
        }
        // Step order is checked when the path is walked, not here.
        Ok(TagPath::new(steps))
    }

    fn parse_tag_step(&mut self) -> Result<TagStep, ParseError> {
        self.expect('(')?;
        self.skip_whitespace();
        let group = self.parse_hex()?;
        self.skip_whitespace();
        self.expect(',')?;
        self.skip_whitespace();

        let owner = if self.peek() == Some('"') {
            let owner = self.parse_owner()?;
            self.skip_whitespace();
            self.expect(',')?;
            self.skip_whitespace();
            Some(owner)
        } else {
            None
        };

        let element = self.parse_hex()?;
        self.skip_whitespace();
        self.expect(')')?;

        if owner.is_some() {
            if group % 2 == 0 {
                return Err(ParseError::OwnerOnPublicGroup(group));
            }
            if element > 0xFF {
                return Err(ParseError::PrivateOffsetRange(element));
            }
        }
        Ok(TagStep { group, element, owner })
    }

    fn parse_index_step(&mut self) -> Result<IndexStep, ParseError> {
        self.expect('[')?;
        self.skip_whitespace();
        let step = if self.peek() == Some('<') {
            self.advance();
            let marker = self.parse_index()?;
            self.expect('>')?;
            IndexStep::Wildcard { marker }
        } else {
            IndexStep::Exact(self.parse_index()?)
        };
        self.skip_whitespace();
        self.expect(']')?;
        Ok(step)
    }

    fn parse_owner(&mut self) -> Result<String, ParseError> {
        self.expect('"')?;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '"' {
                let owner = self.input[start..self.pos].to_string();
                self.advance();
                return Ok(owner);
            }
            self.advance();
        }
        Err(ParseError::UnclosedOwner)
    }

    fn parse_hex(&mut self) -> Result<u16, ParseError> {
        let token = self.take_while(|c| c.is_ascii_alphanumeric());
        if token.is_empty() {
            return match self.peek() {
                Some(c) => Err(ParseError::UnexpectedChar(c, self.pos)),
                None => Err(ParseError::UnexpectedEnd),
            };
        }
        if token.len() > 4 || !token.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidHex(token.to_string()));
        }
        u16::from_str_radix(token, 16).map_err(|_| ParseError::InvalidHex(token.to_string()))
    }

    fn parse_index(&mut self) -> Result<usize, ParseError> {
        let token = self.take_while(|c| c.is_ascii_alphanumeric() || c == '-' || c == '+');
        if token.is_empty() {
            return match self.peek() {
                Some(c) => Err(ParseError::UnexpectedChar(c, self.pos)),
                None => Err(ParseError::UnexpectedEnd),
            };
        }
        if !token.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::InvalidIndex(token.to_string()));
        }
        token.parse().map_err(|_| ParseError::InvalidIndex(token.to_string()))
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let input = self.input;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
        &input[start..self.pos]
    }

    fn skip_stray(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, '<' | '>' | '"') {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            Some(c) => Err(ParseError::UnexpectedChar(c, self.pos)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }
}
