//! SQL Tokenizer implementation.

use std::borrow::Cow;

use thiserror::Error;

use super::{Keyword, Span, Token, TokenFlags};
use crate::grammar::{tk, Symbol};

/// Raised for input the lexer cannot turn into a terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized token: \"{text}\"")]
pub struct LexError {
    /// The offending lexeme.
    pub text: String,
    /// Where it starts and ends.
    pub span: Span,
}

/// A lexer that tokenizes SQL input into parser terminals.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.advance_while(char::is_whitespace);

            // -- to end of line
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                self.advance_while(|c| c != '\n');
                continue;
            }

            // /* ... */, an unterminated comment runs to end of input
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => break,
                        _ => {}
                    }
                }
                continue;
            }

            break;
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    const fn make_token(&self, code: Symbol) -> Token {
        Token::new(code, self.make_span())
    }

    fn illegal(&self) -> LexError {
        LexError {
            text: self.input[self.start..self.pos].to_string(),
            span: self.make_span(),
        }
    }

    const fn is_ident_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '$' || !c.is_ascii()
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        self.advance_while(Self::is_ident_char);
        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(kw) if kw.reserved => {
                Token::with_flags(kw.code, self.make_span(), TokenFlags::RESERVED)
            }
            Some(kw) => self.make_token(kw.code),
            None => self.make_token(tk::ID),
        }
    }

    /// Scans a quoted run ending with `close`; a doubled `close` is an
    /// escaped quote. Produces `code` spanning the quotes.
    fn scan_quoted(&mut self, close: char, code: Symbol) -> Result<Token, LexError> {
        self.advance(); // opening quote
        loop {
            match self.advance() {
                Some(c) if c == close => {
                    if close != ']' && self.peek() == Some(close) {
                        self.advance();
                    } else {
                        return Ok(self.make_token(code));
                    }
                }
                Some(_) => {}
                None => return Err(self.illegal()),
            }
        }
    }

    /// Scans a number (integer or float). Hex integers are accepted.
    fn scan_number(&mut self) -> Result<Token, LexError> {
        let mut code = tk::INTEGER;

        if self.peek() == Some('0')
            && matches!(self.peek_next(), Some('x' | 'X'))
            && self.input[self.pos + 2..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_hexdigit())
        {
            self.advance();
            self.advance();
            self.advance_while(|c| c.is_ascii_hexdigit());
        } else {
            self.advance_while(|c| c.is_ascii_digit());
            if self.peek() == Some('.') {
                code = tk::FLOAT;
                self.advance();
                self.advance_while(|c| c.is_ascii_digit());
            }
            if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
                let exp_digit = match self.peek_next() {
                    Some('+' | '-') => self.input[self.pos + 2..]
                        .chars()
                        .next()
                        .is_some_and(|c| c.is_ascii_digit()),
                    Some(c) => c.is_ascii_digit(),
                    None => false,
                };
                if exp_digit {
                    code = tk::FLOAT;
                    self.advance();
                    if self.peek().is_some_and(|c| c == '+' || c == '-') {
                        self.advance();
                    }
                    self.advance_while(|c| c.is_ascii_digit());
                }
            }
        }

        // 123abc is not two tokens
        if self.peek().is_some_and(Self::is_ident_char) {
            self.advance_while(Self::is_ident_char);
            return Err(self.illegal());
        }
        Ok(self.make_token(code))
    }

    /// Scans a blob literal (X'...' or x'...'). The body must be an even
    /// number of hex digits.
    fn scan_blob(&mut self) -> Result<Token, LexError> {
        self.advance(); // X
        self.advance(); // '
        let body = self.pos;
        self.advance_while(|c| c.is_ascii_hexdigit());
        let digits = self.pos - body;
        if self.peek() != Some('\'') || digits % 2 == 1 {
            self.advance_while(|c| c != '\'');
            self.advance();
            return Err(self.illegal());
        }
        self.advance();
        Ok(self.make_token(tk::BLOB))
    }

    /// Scans `?NNN`, `:name`, `@name`, `$name` and `#NNN` parameters.
    fn scan_variable(&mut self, sigil: char) -> Result<Token, LexError> {
        self.advance();
        if sigil == '?' {
            self.advance_while(|c| c.is_ascii_digit());
            return Ok(self.make_token(tk::VARIABLE));
        }
        self.advance_while(Self::is_ident_char);
        if self.pos - self.start == 1 {
            return Err(self.illegal());
        }
        Ok(self.make_token(tk::VARIABLE))
    }

    /// Scans the next token. Returns an EOF token once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`LexError`] on characters that start no terminal and on
    /// unterminated quotes.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();
        self.start = self.pos;

        let Some(c) = self.peek() else {
            return Ok(self.make_token(tk::EOF));
        };

        let two = |lexer: &mut Self, code: Symbol| -> Result<Token, LexError> {
            lexer.advance();
            lexer.advance();
            Ok(lexer.make_token(code))
        };
        let one = |lexer: &mut Self, code: Symbol| -> Result<Token, LexError> {
            lexer.advance();
            Ok(lexer.make_token(code))
        };

        match c {
            '(' => one(self, tk::LP),
            ')' => one(self, tk::RP),
            ',' => one(self, tk::COMMA),
            ';' => one(self, tk::SEMI),
            '+' => one(self, tk::PLUS),
            '-' => one(self, tk::MINUS),
            '*' => one(self, tk::STAR),
            '/' => one(self, tk::SLASH),
            '%' => one(self, tk::REM),
            '~' => one(self, tk::BITNOT),
            '&' => one(self, tk::BITAND),
            '=' if self.peek_next() == Some('=') => two(self, tk::EQ),
            '=' => one(self, tk::EQ),
            '<' => match self.peek_next() {
                Some('=') => two(self, tk::LE),
                Some('>') => two(self, tk::NE),
                Some('<') => two(self, tk::LSHIFT),
                _ => one(self, tk::LT),
            },
            '>' => match self.peek_next() {
                Some('=') => two(self, tk::GE),
                Some('>') => two(self, tk::RSHIFT),
                _ => one(self, tk::GT),
            },
            '!' if self.peek_next() == Some('=') => two(self, tk::NE),
            '|' if self.peek_next() == Some('|') => two(self, tk::CONCAT),
            '|' => one(self, tk::BITOR),
            '.' if self.peek_next().is_some_and(|d| d.is_ascii_digit()) => self.scan_number(),
            '.' => one(self, tk::DOT),
            '\'' => self.scan_quoted('\'', tk::STRING),
            '"' => self.scan_quoted('"', tk::ID),
            '`' => self.scan_quoted('`', tk::ID),
            '[' => self.scan_quoted(']', tk::ID),
            'x' | 'X' if self.peek_next() == Some('\'') => self.scan_blob(),
            '?' | ':' | '@' | '$' | '#' => self.scan_variable(c),
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() || c == '_' || !c.is_ascii() => Ok(self.scan_identifier()),
            _ => {
                self.advance();
                Err(self.illegal())
            }
        }
    }

    /// Tokenizes the entire input. The last token is always EOF.
    ///
    /// # Errors
    ///
    /// Stops at the first [`LexError`].
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

/// Strips the quotes from a quoted identifier or string. A doubled
/// closing quote inside stands for one. Unquoted text is returned as is.
#[must_use]
pub fn dequote(text: &str) -> Cow<'_, str> {
    let mut chars = text.chars();
    let close = match chars.next() {
        Some(q @ ('\'' | '"' | '`')) => q,
        Some('[') => ']',
        _ => return Cow::Borrowed(text),
    };
    let mut out = String::with_capacity(text.len());
    let mut chars = chars.peekable();
    while let Some(c) = chars.next() {
        if c == close {
            if chars.peek() == Some(&close) {
                chars.next();
                out.push(close);
            } else {
                break;
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequote() {
        assert_eq!(dequote("abc"), "abc");
        assert_eq!(dequote("'it''s'"), "it's");
        assert_eq!(dequote("\"a\"\"b\""), "a\"b");
        assert_eq!(dequote("[col name]"), "col name");
        assert_eq!(dequote("`x`"), "x");
    }

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input)
            .tokenize()
            .unwrap_or_else(|e| panic!("lex failed for {input}: {e}"))
    }

    fn codes(input: &str) -> Vec<Symbol> {
        tokenize(input).into_iter().map(|t| t.code).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(codes(""), vec![tk::EOF]);
        assert_eq!(codes("   \n\t  "), vec![tk::EOF]);
    }

    #[test]
    fn test_comments() {
        assert_eq!(codes("SELECT -- comment\nFROM"), vec![tk::SELECT, tk::FROM, tk::EOF]);
        assert_eq!(codes("SELECT /* c */ FROM"), vec![tk::SELECT, tk::FROM, tk::EOF]);
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            codes("select FROM wHeRe"),
            vec![tk::SELECT, tk::FROM, tk::WHERE, tk::EOF]
        );
    }

    #[test]
    fn test_reserved_flag() {
        let tokens = tokenize("SELECT key foo");
        assert!(tokens[0].is_reserved());
        assert_eq!(tokens[1].code, tk::KEY);
        assert!(!tokens[1].is_reserved());
        assert_eq!(tokens[2].code, tk::ID);
        assert!(!tokens[2].is_reserved());
    }

    #[test]
    fn test_quoted_identifiers() {
        let sql = "\"column name\" `another` [third]";
        let tokens = tokenize(sql);
        assert_eq!(codes(sql), vec![tk::ID, tk::ID, tk::ID, tk::EOF]);
        assert_eq!(tokens[0].text(sql), "\"column name\"");
        assert_eq!(tokens[2].text(sql), "[third]");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            codes("42 0x1F 3.14 .5 1. 1e10 2.5e-3"),
            vec![
                tk::INTEGER,
                tk::INTEGER,
                tk::FLOAT,
                tk::FLOAT,
                tk::FLOAT,
                tk::FLOAT,
                tk::FLOAT,
                tk::EOF
            ]
        );
    }

    #[test]
    fn test_strings() {
        let sql = "'it''s' 'x'";
        let tokens = tokenize(sql);
        assert_eq!(tokens[0].code, tk::STRING);
        assert_eq!(tokens[0].text(sql), "'it''s'");
        assert_eq!(tokens[1].code, tk::STRING);
    }

    #[test]
    fn test_blob() {
        assert_eq!(codes("X'48454C4C4F'"), vec![tk::BLOB, tk::EOF]);
        assert!(Lexer::new("x'abc'").tokenize().is_err());
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            codes("+ - * / % = == != <> < <= > >= || & | ~ << >>"),
            vec![
                tk::PLUS,
                tk::MINUS,
                tk::STAR,
                tk::SLASH,
                tk::REM,
                tk::EQ,
                tk::EQ,
                tk::NE,
                tk::NE,
                tk::LT,
                tk::LE,
                tk::GT,
                tk::GE,
                tk::CONCAT,
                tk::BITAND,
                tk::BITOR,
                tk::BITNOT,
                tk::LSHIFT,
                tk::RSHIFT,
                tk::EOF,
            ]
        );
    }

    #[test]
    fn test_variables() {
        assert_eq!(
            codes("? ?1 :name @p $v #3"),
            vec![
                tk::VARIABLE,
                tk::VARIABLE,
                tk::VARIABLE,
                tk::VARIABLE,
                tk::VARIABLE,
                tk::VARIABLE,
                tk::EOF
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("SELECT id");
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(7, 9));
        assert_eq!(tokens[2].span, Span::empty_at(9));
    }

    #[test]
    fn test_illegal_input() {
        let err = Lexer::new("SELECT !").tokenize().unwrap_err();
        assert_eq!(err.text, "!");
        assert_eq!(err.to_string(), "unrecognized token: \"!\"");
        assert!(Lexer::new("'open").tokenize().is_err());
        assert!(Lexer::new("12ab").tokenize().is_err());
    }
}
