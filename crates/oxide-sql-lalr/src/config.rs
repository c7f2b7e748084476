//! Parser configuration.

pub use crate::parser::StackLimit;

/// Limits and tracing for one parser instance.
///
/// ```rust
/// use oxide_sql_lalr::{ParserConfig, StackLimit};
///
/// let config = ParserConfig::default()
///     .with_stack_limit(StackLimit::Fixed(50))
///     .with_compound_select_limit(3)
///     .with_trace("sql> ");
/// assert_eq!(config.compound_select_limit, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// How the value stack may grow.
    pub stack_limit: StackLimit,
    /// Longest UNION/EXCEPT/INTERSECT chain accepted without complaint.
    /// Zero disables the check.
    pub compound_select_limit: usize,
    /// Most arguments a function call may take.
    pub function_arg_limit: usize,
    /// Deepest expression tree accepted.
    pub expr_depth_limit: usize,
    /// Largest `?NNN` variable number.
    pub variable_limit: usize,
    /// Most columns in a table, or assignments in an UPDATE.
    pub column_limit: usize,
    /// Prompt prefixed to engine trace events. `None` disables tracing.
    pub trace: Option<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            stack_limit: StackLimit::Growable { initial: 100 },
            compound_select_limit: 500,
            function_arg_limit: 127,
            expr_depth_limit: 1000,
            variable_limit: 999,
            column_limit: 2000,
            trace: None,
        }
    }
}

impl ParserConfig {
    /// Sets the stack growth policy.
    #[must_use]
    pub const fn with_stack_limit(mut self, limit: StackLimit) -> Self {
        self.stack_limit = limit;
        self
    }

    /// Sets the compound select limit.
    #[must_use]
    pub const fn with_compound_select_limit(mut self, limit: usize) -> Self {
        self.compound_select_limit = limit;
        self
    }

    /// Sets the function argument limit.
    #[must_use]
    pub const fn with_function_arg_limit(mut self, limit: usize) -> Self {
        self.function_arg_limit = limit;
        self
    }

    /// Sets the expression depth limit.
    #[must_use]
    pub const fn with_expr_depth_limit(mut self, limit: usize) -> Self {
        self.expr_depth_limit = limit;
        self
    }

    /// Sets the largest variable number.
    #[must_use]
    pub const fn with_variable_limit(mut self, limit: usize) -> Self {
        self.variable_limit = limit;
        self
    }

    /// Sets the column limit.
    #[must_use]
    pub const fn with_column_limit(mut self, limit: usize) -> Self {
        self.column_limit = limit;
        self
    }

    /// Enables engine tracing with the given prompt.
    #[must_use]
    pub fn with_trace(mut self, prompt: impl Into<String>) -> Self {
        self.trace = Some(prompt.into());
        self
    }
}
