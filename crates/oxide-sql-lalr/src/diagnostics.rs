//! Positioned diagnostics raised while parsing.

use std::fmt;

use crate::lexer::Span;

/// What raised a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The automaton found no action for the lookahead.
    Syntax,
    /// A rule action found a problem; parsing continues.
    Semantic,
    /// The parse was terminated (stack overflow, allocation failure).
    Fatal,
}

/// A message anchored to a byte range of the statement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Origin of the message.
    pub kind: DiagnosticKind,
    /// The message.
    pub message: String,
    /// Where in the source text the problem is.
    pub span: Span,
}

impl Diagnostic {
    /// Creates a syntax diagnostic.
    #[must_use]
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: DiagnosticKind::Syntax,
            message: message.into(),
            span,
        }
    }

    /// Creates a semantic complaint.
    #[must_use]
    pub fn semantic(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: DiagnosticKind::Semantic,
            message: message.into(),
            span,
        }
    }

    /// Creates a fatal diagnostic.
    #[must_use]
    pub fn fatal(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: DiagnosticKind::Fatal,
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at position {}..{}",
            self.message, self.span.start, self.span.end
        )
    }
}

/// Caller-supplied sink that sees each diagnostic as it is raised.
pub type Reporter<'r> = Box<dyn FnMut(&Diagnostic) + 'r>;

/// Collects diagnostics and forwards them to an optional reporter.
#[derive(Default)]
pub struct Diagnostics<'r> {
    collected: Vec<Diagnostic>,
    reporter: Option<Reporter<'r>>,
}

impl<'r> Diagnostics<'r> {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a reporter, replacing any previous one.
    pub fn set_reporter(&mut self, reporter: impl FnMut(&Diagnostic) + 'r) {
        self.reporter = Some(Box::new(reporter));
    }

    /// Records a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(kind = ?diagnostic.kind, message = %diagnostic.message, "diagnostic");
        if let Some(reporter) = self.reporter.as_mut() {
            reporter(&diagnostic);
        }
        self.collected.push(diagnostic);
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.collected
    }

    /// Number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collected.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collected.is_empty()
    }

    /// Removes and returns everything recorded. The reporter stays.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.collected)
    }
}

impl fmt::Debug for Diagnostics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("collected", &self.collected)
            .field("reporter", &self.reporter.is_some())
            .finish()
    }
}
