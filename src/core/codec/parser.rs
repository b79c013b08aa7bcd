//! Parser turning PHP array-return files into [`Translations`].
//!
//! Grammar (subset of PHP):
//!
//! ```text
//! document := [<?php] {declare(...);} return array [;] [?>]
//! array    := '[' entries ']' | array '(' entries ')'
//! entries  := [entry {',' entry} [',']]
//! entry    := value ['=>' value]
//! value    := string | number | true | false | null | array
//! ```
//!
//! Entries without a key are numbered like PHP lists. Scalars other than
//! strings are kept as their string form.

use super::{
    CodecError,
    lexer::{Spanned, Token, tokenize},
};
use crate::core::data::{Entry, Translations};

pub fn parse(source: &str) -> Result<Translations, CodecError> {
    let tokens = tokenize(source)?;
    Parser { tokens, pos: 0 }.document()
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

enum Scalar {
    Key(String),
    Value(Entry),
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|s| &s.token)
    }

    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|s| s.line)
            .unwrap_or(1)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|s| s.token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: &Token, what: &str) -> Result<(), CodecError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn is_word(&self, word: &str) -> bool {
        matches!(self.peek(), Some(Token::Word(w)) if w.eq_ignore_ascii_case(word))
    }

    fn unexpected(&self, what: &str) -> CodecError {
        let found = match self.peek() {
            Some(token) => format!("{:?}", token),
            None => "end of file".to_string(),
        };
        CodecError::new(self.line(), format!("expected {}, found {}", what, found))
    }

    fn document(mut self) -> Result<Translations, CodecError> {
        self.eat(&Token::OpenTag);

        while self.is_word("declare") {
            self.skip_declare()?;
        }

        if !self.is_word("return") {
            return Err(self.unexpected("'return'"));
        }
        self.pos += 1;

        let translations = self.array()?;
        self.eat(&Token::Semicolon);
        self.eat(&Token::CloseTag);

        if self.peek().is_some() {
            return Err(self.unexpected("end of file"));
        }
        Ok(translations)
    }

    fn skip_declare(&mut self) -> Result<(), CodecError> {
        self.pos += 1;
        self.expect(&Token::LParen, "'(' after declare")?;
        loop {
            match self.next() {
                Some(Token::RParen) => break,
                Some(_) => {}
                None => return Err(self.unexpected("')'")),
            }
        }
        self.eat(&Token::Semicolon);
        Ok(())
    }

    fn array(&mut self) -> Result<Translations, CodecError> {
        let close = if self.eat(&Token::LBracket) {
            Token::RBracket
        } else if self.is_word("array") {
            self.pos += 1;
            self.expect(&Token::LParen, "'(' after array")?;
            Token::RParen
        } else {
            return Err(self.unexpected("an array"));
        };

        let mut translations = Translations::new();
        let mut next_index: i64 = 0;

        loop {
            if self.eat(&close) {
                return Ok(translations);
            }

            let first = self.value()?;
            let (key, entry) = if self.eat(&Token::Arrow) {
                let key = match first {
                    Scalar::Key(key) => key,
                    Scalar::Value(_) => {
                        return Err(CodecError::new(self.line(), "array used as a key"));
                    }
                };
                let entry = match self.value()? {
                    Scalar::Key(value) => Entry::Leaf(value),
                    Scalar::Value(entry) => entry,
                };
                (key, entry)
            } else {
                let entry = match first {
                    Scalar::Key(value) => Entry::Leaf(value),
                    Scalar::Value(entry) => entry,
                };
                (next_index.to_string(), entry)
            };

            if let Ok(index) = key.parse::<i64>()
                && index.to_string() == key
                && index >= next_index
            {
                next_index = index + 1;
            }
            translations.insert(key, entry);

            if !self.eat(&Token::Comma) {
                if self.eat(&close) {
                    return Ok(translations);
                }
                return Err(self.unexpected("',' or end of array"));
            }
        }
    }

    fn value(&mut self) -> Result<Scalar, CodecError> {
        if self.peek() == Some(&Token::LBracket) || self.is_word("array") {
            return Ok(Scalar::Value(Entry::Node(self.array()?)));
        }

        match self.peek().cloned() {
            Some(Token::Str(text)) | Some(Token::Number(text)) => {
                self.pos += 1;
                Ok(Scalar::Key(text))
            }
            Some(Token::Word(word)) => {
                let text = match word.to_ascii_lowercase().as_str() {
                    "true" => "1",
                    "false" | "null" => "",
                    _ => return Err(self.unexpected("a value")),
                };
                self.pos += 1;
                Ok(Scalar::Key(text.to_string()))
            }
            _ => Err(self.unexpected("a value")),
        }
    }
}
