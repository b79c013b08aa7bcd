//! Tokenizer for PHP array-return files.
//!
//! Only the subset of PHP that translation files use is recognized:
//! open/close tags, comments, string and number literals, bare words,
//! `=>` and punctuation.

use super::CodecError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    OpenTag,
    CloseTag,
    Str(String),
    Number(String),
    Word(String),
    Arrow,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Comma,
    Semicolon,
    Equals,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub line: usize,
}

pub fn tokenize(source: &str) -> Result<Vec<Spanned>, CodecError> {
    Lexer::new(source).run()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn starts_with(&self, text: &str) -> bool {
        text.chars()
            .enumerate()
            .all(|(i, c)| self.peek_at(i) == Some(c))
    }

    fn error(&self, message: impl Into<String>) -> CodecError {
        CodecError::new(self.line, message)
    }

    fn run(mut self) -> Result<Vec<Spanned>, CodecError> {
        let mut tokens = Vec::new();

        while let Some(c) = self.peek() {
            let line = self.line;

            if c.is_whitespace() {
                self.bump();
                continue;
            }
            if self.starts_with("<?php") {
                self.pos += "<?php".len();
                tokens.push(Spanned {
                    token: Token::OpenTag,
                    line,
                });
                continue;
            }
            if self.starts_with("?>") {
                self.pos += 2;
                tokens.push(Spanned {
                    token: Token::CloseTag,
                    line,
                });
                continue;
            }
            if c == '#' || self.starts_with("//") {
                self.skip_line_comment();
                continue;
            }
            if self.starts_with("/*") {
                self.skip_block_comment()?;
                continue;
            }

            let token = match c {
                '\'' => Token::Str(self.single_quoted()?),
                '"' => Token::Str(self.double_quoted()?),
                '=' if self.peek_at(1) == Some('>') => {
                    self.pos += 2;
                    Token::Arrow
                }
                '=' => {
                    self.bump();
                    Token::Equals
                }
                '[' | ']' | '(' | ')' | ',' | ';' => {
                    self.bump();
                    match c {
                        '[' => Token::LBracket,
                        ']' => Token::RBracket,
                        '(' => Token::LParen,
                        ')' => Token::RParen,
                        ',' => Token::Comma,
                        _ => Token::Semicolon,
                    }
                }
                c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                    Token::Number(self.number()?)
                }
                c if c.is_alphabetic() || c == '_' || c == '\\' => Token::Word(self.word()),
                other => return Err(self.error(format!("unexpected character '{}'", other))),
            };
            tokens.push(Spanned { token, line });
        }

        Ok(tokens)
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            // `?>` ends a line comment in PHP
            if c == '\n' || self.starts_with("?>") {
                break;
            }
            self.bump();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), CodecError> {
        self.pos += 2;
        loop {
            if self.starts_with("*/") {
                self.pos += 2;
                return Ok(());
            }
            if self.bump().is_none() {
                return Err(self.error("unterminated comment"));
            }
        }
    }

    fn single_quoted(&mut self) -> Result<String, CodecError> {
        let start_line = self.line;
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('\'') => return Ok(value),
                Some('\\') => match self.peek() {
                    Some(c @ ('\'' | '\\')) => {
                        self.bump();
                        value.push(c);
                    }
                    _ => value.push('\\'),
                },
                Some(c) => value.push(c),
                None => {
                    return Err(CodecError::new(start_line, "unterminated string literal"));
                }
            }
        }
    }

    fn double_quoted(&mut self) -> Result<String, CodecError> {
        let start_line = self.line;
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(value),
                Some('\\') => {
                    let escaped = match self.peek() {
                        Some('n') => Some('\n'),
                        Some('t') => Some('\t'),
                        Some('r') => Some('\r'),
                        Some('v') => Some('\u{0B}'),
                        Some('e') => Some('\u{1B}'),
                        Some('f') => Some('\u{0C}'),
                        Some('0') => Some('\0'),
                        Some(c @ ('\\' | '$' | '"')) => Some(c),
                        _ => None,
                    };
                    match escaped {
                        Some(c) => {
                            self.bump();
                            value.push(c);
                        }
                        None => value.push('\\'),
                    }
                }
                Some(c) => value.push(c),
                None => {
                    return Err(CodecError::new(start_line, "unterminated string literal"));
                }
            }
        }
    }

    fn number(&mut self) -> Result<String, CodecError> {
        let mut text = String::new();
        if let Some(sign @ ('-' | '+')) = self.peek() {
            self.bump();
            text.push(sign);
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if !text.chars().any(|c| c.is_ascii_digit()) {
            return Err(self.error(format!("invalid number literal '{}'", text)));
        }
        Ok(text)
    }

    fn word(&mut self) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '\\' {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        text
    }
}
