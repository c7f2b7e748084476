//! Token and keyword definitions.

use super::Span;
use crate::grammar::{tk, Symbol, SQL_GRAMMAR};

/// A SQL keyword: the terminal it lexes to and whether it is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    /// Canonical upper-case spelling.
    pub text: &'static str,
    /// Terminal code fed to the parser.
    pub code: Symbol,
    /// Reserved words cannot be used as identifiers.
    pub reserved: bool,
}

impl Keyword {
    const fn new(text: &'static str, code: Symbol, reserved: bool) -> Self {
        Self {
            text,
            code,
            reserved,
        }
    }

    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait, clippy::too_many_lines)]
    pub fn from_str(s: &str) -> Option<Self> {
        // Longest keyword is CURRENT_TIMESTAMP.
        if s.len() > 17 {
            return None;
        }
        let kw = match s.to_ascii_uppercase().as_str() {
            "ABORT" => Self::new("ABORT", tk::ABORT, false),
            "ACTION" => Self::new("ACTION", tk::ACTION, false),
            "ADD" => Self::new("ADD", tk::ADD, false),
            "AFTER" => Self::new("AFTER", tk::AFTER, false),
            "ALL" => Self::new("ALL", tk::ALL, true),
            "ALTER" => Self::new("ALTER", tk::ALTER, true),
            "ANALYZE" => Self::new("ANALYZE", tk::ANALYZE, true),
            "AND" => Self::new("AND", tk::AND, true),
            "AS" => Self::new("AS", tk::AS, true),
            "ASC" => Self::new("ASC", tk::ASC, true),
            "AUTOINCREMENT" => Self::new("AUTOINCREMENT", tk::AUTOINCR, false),
            "BEFORE" => Self::new("BEFORE", tk::BEFORE, false),
            "BEGIN" => Self::new("BEGIN", tk::BEGIN, true),
            "BETWEEN" => Self::new("BETWEEN", tk::BETWEEN, true),
            "BY" => Self::new("BY", tk::BY, true),
            "CASCADE" => Self::new("CASCADE", tk::CASCADE, false),
            "CASE" => Self::new("CASE", tk::CASE, true),
            "CAST" => Self::new("CAST", tk::CAST, true),
            "CHECK" => Self::new("CHECK", tk::CHECK, true),
            "COLLATE" => Self::new("COLLATE", tk::COLLATE, true),
            "COLUMN" => Self::new("COLUMN", tk::COLUMNKW, true),
            "COMMIT" => Self::new("COMMIT", tk::COMMIT, true),
            "CONFLICT" => Self::new("CONFLICT", tk::CONFLICT, false),
            "CONSTRAINT" => Self::new("CONSTRAINT", tk::CONSTRAINT, true),
            "CREATE" => Self::new("CREATE", tk::CREATE, true),
            "CROSS" => Self::new("CROSS", tk::JOIN_KW, true),
            "CURRENT_DATE" => Self::new("CURRENT_DATE", tk::CTIME_KW, true),
            "CURRENT_TIME" => Self::new("CURRENT_TIME", tk::CTIME_KW, true),
            "CURRENT_TIMESTAMP" => Self::new("CURRENT_TIMESTAMP", tk::CTIME_KW, true),
            "DEFAULT" => Self::new("DEFAULT", tk::DEFAULT, true),
            "DEFERRABLE" => Self::new("DEFERRABLE", tk::DEFERRABLE, false),
            "DEFERRED" => Self::new("DEFERRED", tk::DEFERRED, false),
            "DELETE" => Self::new("DELETE", tk::DELETE, true),
            "DESC" => Self::new("DESC", tk::DESC, true),
            "DISTINCT" => Self::new("DISTINCT", tk::DISTINCT, true),
            "DROP" => Self::new("DROP", tk::DROP, true),
            "EACH" => Self::new("EACH", tk::EACH, true),
            "ELSE" => Self::new("ELSE", tk::ELSE, true),
            "END" => Self::new("END", tk::END, true),
            "ESCAPE" => Self::new("ESCAPE", tk::ESCAPE, true),
            "EXCEPT" => Self::new("EXCEPT", tk::EXCEPT, true),
            "EXISTS" => Self::new("EXISTS", tk::EXISTS, true),
            "EXPLAIN" => Self::new("EXPLAIN", tk::EXPLAIN, true),
            "FAIL" => Self::new("FAIL", tk::FAIL, false),
            "FOR" => Self::new("FOR", tk::FOR, true),
            "FOREIGN" => Self::new("FOREIGN", tk::FOREIGN, true),
            "FROM" => Self::new("FROM", tk::FROM, true),
            "FULL" => Self::new("FULL", tk::JOIN_KW, true),
            "GLOB" => Self::new("GLOB", tk::LIKE_KW, true),
            "GROUP" => Self::new("GROUP", tk::GROUP, true),
            "HAVING" => Self::new("HAVING", tk::HAVING, true),
            "IF" => Self::new("IF", tk::IF, true),
            "IGNORE" => Self::new("IGNORE", tk::IGNORE, false),
            "IMMEDIATE" => Self::new("IMMEDIATE", tk::IMMEDIATE, true),
            "IN" => Self::new("IN", tk::IN, true),
            "INDEX" => Self::new("INDEX", tk::INDEX, true),
            "INDEXED" => Self::new("INDEXED", tk::INDEXED, false),
            "INITIALLY" => Self::new("INITIALLY", tk::INITIALLY, false),
            "INNER" => Self::new("INNER", tk::JOIN_KW, true),
            "INSERT" => Self::new("INSERT", tk::INSERT, true),
            "INSTEAD" => Self::new("INSTEAD", tk::INSTEAD, false),
            "INTERSECT" => Self::new("INTERSECT", tk::INTERSECT, true),
            "INTO" => Self::new("INTO", tk::INTO, true),
            "IS" => Self::new("IS", tk::IS, true),
            "ISNULL" => Self::new("ISNULL", tk::ISNULL, true),
            "JOIN" => Self::new("JOIN", tk::JOIN, true),
            "KEY" => Self::new("KEY", tk::KEY, false),
            "LEFT" => Self::new("LEFT", tk::JOIN_KW, true),
            "LIKE" => Self::new("LIKE", tk::LIKE_KW, true),
            "LIMIT" => Self::new("LIMIT", tk::LIMIT, true),
            "MATCH" => Self::new("MATCH", tk::MATCH, true),
            "NATURAL" => Self::new("NATURAL", tk::JOIN_KW, true),
            "NO" => Self::new("NO", tk::NO, false),
            "NOT" => Self::new("NOT", tk::NOT, true),
            "NOTNULL" => Self::new("NOTNULL", tk::NOTNULL, true),
            "NULL" => Self::new("NULL", tk::NULL, true),
            "OF" => Self::new("OF", tk::OF, true),
            "OFFSET" => Self::new("OFFSET", tk::OFFSET, false),
            "ON" => Self::new("ON", tk::ON, true),
            "OR" => Self::new("OR", tk::OR, true),
            "ORDER" => Self::new("ORDER", tk::ORDER, true),
            "OUTER" => Self::new("OUTER", tk::JOIN_KW, true),
            "PLAN" => Self::new("PLAN", tk::PLAN, false),
            "PRAGMA" => Self::new("PRAGMA", tk::PRAGMA, true),
            "PRIMARY" => Self::new("PRIMARY", tk::PRIMARY, true),
            "QUERY" => Self::new("QUERY", tk::QUERY, false),
            "RAISE" => Self::new("RAISE", tk::RAISE, false),
            "RECURSIVE" => Self::new("RECURSIVE", tk::RECURSIVE, true),
            "REFERENCES" => Self::new("REFERENCES", tk::REFERENCES, true),
            "REGEXP" => Self::new("REGEXP", tk::LIKE_KW, true),
            "REINDEX" => Self::new("REINDEX", tk::REINDEX, false),
            "RELEASE" => Self::new("RELEASE", tk::RELEASE, true),
            "RENAME" => Self::new("RENAME", tk::RENAME, false),
            "REPLACE" => Self::new("REPLACE", tk::REPLACE, true),
            "RESTRICT" => Self::new("RESTRICT", tk::RESTRICT, false),
            "RIGHT" => Self::new("RIGHT", tk::JOIN_KW, true),
            "ROLLBACK" => Self::new("ROLLBACK", tk::ROLLBACK, true),
            "ROW" => Self::new("ROW", tk::ROW, true),
            "SAVEPOINT" => Self::new("SAVEPOINT", tk::SAVEPOINT, true),
            "SELECT" => Self::new("SELECT", tk::SELECT, true),
            "SET" => Self::new("SET", tk::SET, true),
            "TABLE" => Self::new("TABLE", tk::TABLE, true),
            "THEN" => Self::new("THEN", tk::THEN, true),
            "TO" => Self::new("TO", tk::TO, true),
            "TRANSACTION" => Self::new("TRANSACTION", tk::TRANSACTION, true),
            "TRIGGER" => Self::new("TRIGGER", tk::TRIGGER, true),
            "UNION" => Self::new("UNION", tk::UNION, true),
            "UNIQUE" => Self::new("UNIQUE", tk::UNIQUE, true),
            "UPDATE" => Self::new("UPDATE", tk::UPDATE, true),
            "USING" => Self::new("USING", tk::USING, true),
            "VALUES" => Self::new("VALUES", tk::VALUES, true),
            "VIEW" => Self::new("VIEW", tk::VIEW, true),
            "WHEN" => Self::new("WHEN", tk::WHEN, true),
            "WHERE" => Self::new("WHERE", tk::WHERE, true),
            "WITH" => Self::new("WITH", tk::WITH, true),
            "WITHOUT" => Self::new("WITHOUT", tk::WITHOUT, true),
            _ => return None,
        };
        Some(kw)
    }
}

/// Lexer-supplied flags on a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// The token is a reserved keyword.
    pub const RESERVED: Self = Self(1);

    /// Returns true if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of two flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// A terminal symbol with its span in the source code.
///
/// This is the unit the parser engine consumes. The lexeme itself is
/// recovered from the source text through [`Token::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Token {
    /// Terminal code (see [`tk`](crate::grammar::tk)).
    pub code: Symbol,
    /// The location in the source code.
    pub span: Span,
    /// Lexer flags.
    pub flags: TokenFlags,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(code: Symbol, span: Span) -> Self {
        Self {
            code,
            span,
            flags: TokenFlags::NONE,
        }
    }

    /// Creates a token carrying the given flags.
    #[must_use]
    pub const fn with_flags(code: Symbol, span: Span, flags: TokenFlags) -> Self {
        Self { code, span, flags }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.code == tk::EOF
    }

    /// Returns true if the lexer marked this token as a reserved word.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        self.flags.contains(TokenFlags::RESERVED)
    }

    /// The lexeme this token covers.
    #[must_use]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.text(source)
    }

    /// Grammar name of the terminal, e.g. `"SELECT"` or `"ID"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        SQL_GRAMMAR.symbol_name(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT").map(|k| k.code), Some(tk::SELECT));
        assert_eq!(Keyword::from_str("select").map(|k| k.code), Some(tk::SELECT));
        assert_eq!(Keyword::from_str("SeLeCt").map(|k| k.code), Some(tk::SELECT));
        assert_eq!(Keyword::from_str("not_a_keyword"), None);
    }

    #[test]
    fn test_keyword_families_share_a_terminal() {
        for word in ["LEFT", "natural", "Cross"] {
            assert_eq!(Keyword::from_str(word).map(|k| k.code), Some(tk::JOIN_KW));
        }
        assert_eq!(Keyword::from_str("glob").map(|k| k.code), Some(tk::LIKE_KW));
        assert_eq!(
            Keyword::from_str("current_timestamp").map(|k| k.code),
            Some(tk::CTIME_KW)
        );
    }

    #[test]
    fn test_keyword_reserved() {
        assert!(Keyword::from_str("SELECT").is_some_and(|k| k.reserved));
        assert!(Keyword::from_str("KEY").is_some_and(|k| !k.reserved));
    }

    #[test]
    fn test_token_flags() {
        let tok = Token::with_flags(tk::SELECT, Span::new(0, 6), TokenFlags::RESERVED);
        assert!(tok.is_reserved());
        assert!(!Token::new(tk::ID, Span::new(0, 1)).is_reserved());
        assert!(Token::new(tk::EOF, Span::empty_at(3)).is_eof());
    }

    #[test]
    fn test_token_name_and_text() {
        let tok = Token::new(tk::ID, Span::new(7, 10));
        assert_eq!(tok.name(), "ID");
        assert_eq!(tok.text("SELECT foo"), "foo");
    }
}
