//! The SQL grammar driver.

use std::sync::Arc;

use super::engine::{Engine, EngineState, Status};
use super::error::ParseError;
use crate::actions::SqlActions;
use crate::alloc::{NodeAllocator, SystemAllocator};
use crate::ast::Command;
use crate::config::ParserConfig;
use crate::context::ParseContext;
use crate::diagnostics::Diagnostic;
use crate::grammar::tk;
use crate::lexer::{Lexer, Span, Token};

/// A parsed statement and everything reported while building it.
#[derive(Debug)]
pub struct Parsed {
    /// The accepted command.
    pub command: Command,
    /// Non-fatal complaints, in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses one SQL statement with default limits.
///
/// A missing trailing `;` is supplied.
///
/// ```rust
/// use oxide_sql_lalr::{parse, Statement};
///
/// let parsed = parse("SELECT a FROM t WHERE a > 1").unwrap();
/// assert!(matches!(parsed.command.statement, Some(Statement::Select(_))));
/// assert!(parsed.diagnostics.is_empty());
/// ```
///
/// # Errors
///
/// Returns the first lexical or syntax error, or a fatal resource error.
pub fn parse(sql: &str) -> Result<Parsed, ParseError> {
    parse_with(sql, ParserConfig::default(), Arc::new(SystemAllocator))
}

/// Parses one SQL statement with the given limits and node allocator.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with(
    sql: &str,
    config: ParserConfig,
    allocator: Arc<dyn NodeAllocator>,
) -> Result<Parsed, ParseError> {
    let mut parser = SqlParser::new(sql, config, allocator);
    let command = parser.parse_source()?;
    Ok(Parsed {
        command,
        diagnostics: parser.take_diagnostics(),
    })
}

/// Drives the [`Engine`] with the SQL grammar over one source text.
///
/// Tokens are fed one at a time; their spans must point into the source
/// the parser was created with.
#[derive(Debug)]
pub struct SqlParser<'a> {
    engine: Engine<SqlActions<'a>>,
    source: &'a str,
    ended_with_semi: bool,
}

impl<'a> SqlParser<'a> {
    /// Creates a parser for `source`.
    #[must_use]
    pub fn new(source: &'a str, config: ParserConfig, allocator: Arc<dyn NodeAllocator>) -> Self {
        let limit = config.stack_limit;
        let trace = config.trace.clone();
        let ctx = ParseContext::new(source, config, allocator);
        let engine = Engine::new(SqlActions::new(ctx), limit).with_trace(trace);
        Self {
            engine,
            source,
            ended_with_semi: false,
        }
    }

    /// Sends every diagnostic to `reporter` as it is raised.
    pub fn set_reporter(&mut self, reporter: impl FnMut(&Diagnostic) + 'a) {
        self.context_mut().diagnostics_mut().set_reporter(reporter);
    }

    /// The shared action state.
    #[must_use]
    pub const fn context(&self) -> &ParseContext<'a> {
        self.engine.actions().context()
    }

    fn context_mut(&mut self) -> &mut ParseContext<'a> {
        self.engine.actions_mut().context_mut()
    }

    /// Diagnostics raised so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.context().diagnostics().as_slice()
    }

    /// Removes and returns the diagnostics raised so far.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.context_mut().diagnostics_mut().take()
    }

    /// The engine's lifecycle state.
    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.engine.state()
    }

    /// Stack depth, sentinel included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.engine.depth()
    }

    /// Feeds one token.
    ///
    /// # Errors
    ///
    /// See [`Engine::feed`].
    pub fn feed(&mut self, token: Token) -> Result<Status<Command>, ParseError> {
        if token.is_eof() {
            return self.finish().map(Status::Accepted);
        }
        self.ended_with_semi = token.code == tk::SEMI;
        match self.engine.feed(token.code, token)? {
            Status::Pending => Ok(Status::Pending),
            Status::Accepted(value) => Ok(Status::Accepted(
                value.into_command().unwrap_or_default(),
            )),
        }
    }

    /// Closes the input, supplying the final `;` when it is missing. An
    /// input with no tokens at all is an empty request.
    ///
    /// # Errors
    ///
    /// [`ParseError::Syntax`] when the input is incomplete, or any error
    /// of [`Engine::feed`].
    pub fn finish(&mut self) -> Result<Command, ParseError> {
        if !self.ended_with_semi {
            let semi = Token::new(tk::SEMI, Span::empty_at(self.source.len()));
            self.engine.feed(tk::SEMI, semi)?;
            self.ended_with_semi = true;
        }
        match self.engine.finish()? {
            Status::Accepted(value) => Ok(value.into_command().unwrap_or_default()),
            Status::Pending => Err(ParseError::syntax(
                "incomplete input",
                Span::empty_at(self.source.len()),
            )),
        }
    }

    /// Lexes the whole source and parses it as one statement.
    ///
    /// # Errors
    ///
    /// See [`SqlParser::finish`]. A lexical error is also reported as a
    /// syntax diagnostic.
    pub fn parse_source(&mut self) -> Result<Command, ParseError> {
        let mut lexer = Lexer::new(self.source);
        loop {
            let token = match lexer.next_token() {
                Ok(token) => token,
                Err(error) => {
                    self.context_mut()
                        .diagnostics_mut()
                        .push(Diagnostic::syntax(error.to_string(), error.span));
                    return Err(error.into());
                }
            };
            if token.is_eof() {
                return self.finish();
            }
            if let Status::Accepted(command) = self.feed(token)? {
                return Ok(command);
            }
        }
    }

    /// Drops everything built so far and starts over on the same source.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.ended_with_semi = false;
    }
}
