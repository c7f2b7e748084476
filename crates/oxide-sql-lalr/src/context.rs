//! State shared by the grammar actions of one parse.
//!
//! [`ParseContext`] owns the source text, the limits, the node allocator
//! and the diagnostics sink. It also keeps what a statement builds
//! outside the value stack: a table or trigger under construction, the
//! bound-parameter numbering and the select arm counter.

use std::sync::Arc;

use crate::alloc::{AllocError, NodeAllocator, NodeKind, NodeLease};
use crate::ast::{
    CompoundOp, Cte, Expr, ExprFlags, ExprList, ExprOp, ExprPayload, ExprSpan, IdList, JoinType,
    Select, SelectFlags, SelectId, SrcItem, SrcList, TableDef, TriggerEvent, TriggerTime, With,
};
use crate::config::ParserConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::lexer::{dequote, Span, Token};

/// A `CREATE TABLE` or `ALTER TABLE ... ADD COLUMN` in progress.
#[derive(Debug, Default)]
pub struct PendingTable {
    /// What has been declared so far.
    pub def: TableDef,
    /// Set for `ALTER TABLE ... ADD COLUMN`.
    pub alter: bool,
}

/// A `CREATE TRIGGER` whose header has been parsed.
#[derive(Debug)]
pub struct PendingTrigger {
    pub name: String,
    pub if_not_exists: bool,
    pub time: TriggerTime,
    pub event: TriggerEvent,
    pub table: String,
    pub when: Option<Box<Expr>>,
}

/// Clauses of a new select arm. Absent clauses stay `None`.
#[derive(Debug, Default)]
pub struct SelectParts {
    pub result: Option<ExprList>,
    pub src: Option<SrcList>,
    pub where_clause: Option<Box<Expr>>,
    pub group_by: Option<ExprList>,
    pub having: Option<Box<Expr>>,
    pub order_by: Option<ExprList>,
    pub flags: SelectFlags,
    pub limit: Option<Box<Expr>>,
    pub offset: Option<Box<Expr>>,
}

/// Bound parameter numbering.
#[derive(Debug, Default)]
struct Variables {
    /// Highest number assigned.
    count: u32,
    /// Spelling of each numbered or named parameter seen.
    names: Vec<(String, u32)>,
}

impl Variables {
    fn number_of(&self, name: &str) -> Option<u32> {
        self.names
            .iter()
            .find(|(seen, _)| seen == name)
            .map(|&(_, number)| number)
    }

    fn has_number(&self, number: u32) -> bool {
        self.names.iter().any(|&(_, seen)| seen == number)
    }
}

/// Parsing context handed to every grammar action.
#[derive(Debug)]
pub struct ParseContext<'a> {
    source: &'a str,
    config: ParserConfig,
    allocator: Arc<dyn NodeAllocator>,
    diagnostics: Diagnostics<'a>,
    pub(crate) table: Option<PendingTable>,
    pub(crate) trigger: Option<PendingTrigger>,
    pub(crate) constraint_name: Option<String>,
    variables: Variables,
    next_select: u32,
    pub(crate) last_shifted: Span,
}

impl<'a> ParseContext<'a> {
    /// Creates a context over `source`.
    #[must_use]
    pub fn new(source: &'a str, config: ParserConfig, allocator: Arc<dyn NodeAllocator>) -> Self {
        Self {
            source,
            config,
            allocator,
            diagnostics: Diagnostics::new(),
            table: None,
            trigger: None,
            constraint_name: None,
            variables: Variables::default(),
            next_select: 0,
            last_shifted: Span::default(),
        }
    }

    /// The statement text.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Limits in force.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Where nodes come from.
    #[must_use]
    pub const fn allocator(&self) -> &Arc<dyn NodeAllocator> {
        &self.allocator
    }

    /// Everything reported so far.
    #[must_use]
    pub const fn diagnostics(&self) -> &Diagnostics<'a> {
        &self.diagnostics
    }

    /// The diagnostics sink, to attach a reporter or take the list.
    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics<'a> {
        &mut self.diagnostics
    }

    /// Number of bound parameters the statement uses.
    #[must_use]
    pub const fn variable_count(&self) -> u32 {
        self.variables.count
    }

    /// Source text under `span`.
    #[must_use]
    pub fn text(&self, span: Span) -> &'a str {
        span.text(self.source)
    }

    /// The dequoted name a token spells.
    #[must_use]
    pub fn name(&self, token: Token) -> String {
        dequote(self.text(token.span)).into_owned()
    }

    /// Reports a non-fatal complaint; the parse goes on.
    pub fn complain(&mut self, message: impl Into<String>, span: Span) {
        self.diagnostics.push(Diagnostic::semantic(message, span));
    }

    /// Reports a syntax error and returns its message.
    pub fn syntax_error(&mut self, token: &Token, fallback_failed: bool) -> String {
        let message = if token.is_eof() || token.span.is_empty() {
            "unexpected end of input".to_string()
        } else if fallback_failed && token.is_reserved() {
            format!("keyword \"{}\" is reserved", self.text(token.span))
        } else {
            format!("near \"{}\": syntax error", self.text(token.span))
        };
        self.diagnostics
            .push(Diagnostic::syntax(message.clone(), token.span));
        message
    }

    /// Reports an unrecoverable condition.
    pub fn fatal(&mut self, message: impl Into<String>, span: Span) {
        self.diagnostics.push(Diagnostic::fatal(message, span));
    }

    /// Drops whatever a statement built outside the stack.
    pub fn clear_pending(&mut self) {
        self.table = None;
        self.trigger = None;
        self.constraint_name = None;
    }

    /// Forgets the current statement entirely, diagnostics included.
    pub fn reset(&mut self) {
        self.clear_pending();
        self.variables = Variables::default();
        self.next_select = 0;
        self.last_shifted = Span::default();
        self.diagnostics.take();
    }

    pub(crate) fn lease(&self, kind: NodeKind) -> Result<NodeLease, AllocError> {
        NodeLease::acquire(&self.allocator, kind)
    }

    // Expressions

    /// A bare node covering `span`.
    pub(crate) fn expr(
        &self,
        op: ExprOp,
        token: Option<String>,
        span: Span,
    ) -> Result<Box<Expr>, AllocError> {
        Ok(Box::new(Expr::new(op, token, span, self.lease(NodeKind::Expr)?)))
    }

    /// A node carrying the token's text, dequoted.
    pub(crate) fn token_expr(&self, op: ExprOp, token: Token) -> Result<Box<Expr>, AllocError> {
        let text = self.text(token.span);
        if op == ExprOp::Integer {
            if let Some(value) = parse_int32(text) {
                let mut expr = self.expr(op, None, token.span)?;
                expr.flags.insert(ExprFlags::INT_VALUE);
                expr.int_value = Some(value);
                return Ok(expr);
            }
        }
        let mut expr = self.expr(op, Some(dequote(text).into_owned()), token.span)?;
        if text.starts_with('"') {
            expr.flags.insert(ExprFlags::DBL_QUOTED);
        }
        Ok(expr)
    }

    /// A leaf built from one token, spanning just that token.
    pub(crate) fn span_expr(&self, op: ExprOp, token: Token) -> Result<ExprSpan, AllocError> {
        let text = self.text(token.span);
        let mut expr = self.expr(op, Some(dequote(text).into_owned()), token.span)?;
        expr.flags.insert(ExprFlags::LEAF);
        if text.starts_with('"') {
            expr.flags.insert(ExprFlags::DBL_QUOTED);
        }
        Ok(ExprSpan::new(Some(expr), token.span))
    }

    /// The integer literal `value`.
    pub(crate) fn integer(&self, value: i32, span: Span) -> Result<Box<Expr>, AllocError> {
        let mut expr = self.expr(ExprOp::Integer, None, span)?;
        expr.flags.insert(ExprFlags::INT_VALUE);
        expr.int_value = Some(value);
        Ok(expr)
    }

    /// An operator node over `left` and `right`.
    ///
    /// `AND` with one side missing is the other side, and `AND` with a
    /// constant zero side is the constant 0.
    pub(crate) fn pexpr(
        &mut self,
        op: ExprOp,
        left: Option<Box<Expr>>,
        right: Option<Box<Expr>>,
        span: Span,
    ) -> Result<Option<Box<Expr>>, AllocError> {
        let expr = if op == ExprOp::And {
            match (left, right) {
                (None, None) => return Ok(None),
                (Some(side), None) | (None, Some(side)) => side,
                (Some(left), Some(right)) => {
                    if left.integer() == Some(0) || right.integer() == Some(0) {
                        self.integer(0, span)?
                    } else {
                        attach(self.expr(op, None, span)?, Some(left), Some(right))
                    }
                }
            }
        } else {
            attach(self.expr(op, None, span)?, left, right)
        };
        self.check_height(&expr);
        Ok(Some(expr))
    }

    /// Complains if `expr` is taller than the depth limit.
    pub(crate) fn check_height(&mut self, expr: &Expr) {
        let limit = self.config.expr_depth_limit;
        if expr.height > limit {
            self.complain(
                format!("Expression tree is too large (maximum depth {limit})"),
                expr.span,
            );
        }
    }

    /// Recomputes height and flags after the payload changed.
    pub(crate) fn set_height(&mut self, expr: &mut Expr) {
        expr.update_height();
        self.check_height(expr);
    }

    /// A function call node named by `name`.
    pub(crate) fn function(
        &mut self,
        args: Option<ExprList>,
        name: Token,
        span: Span,
    ) -> Result<Box<Expr>, AllocError> {
        let mut expr = self.token_expr(ExprOp::Function, name)?;
        expr.span = span;
        if let Some(args) = args {
            expr.x = ExprPayload::List(args);
        }
        self.set_height(&mut expr);
        Ok(expr)
    }

    /// Hangs `select` off `expr` as its subquery.
    pub(crate) fn add_select(&mut self, expr: Option<Box<Expr>>, select: Option<Box<Select>>) -> Option<Box<Expr>> {
        let mut expr = expr?;
        if let Some(select) = select {
            expr.x = ExprPayload::Select(select);
        }
        expr.flags
            .insert(ExprFlags::X_IS_SELECT.union(ExprFlags::SUBQUERY));
        self.set_height(&mut expr);
        Some(expr)
    }

    /// Wraps `expr` in a `COLLATE` node unless the name is empty.
    pub(crate) fn collate(
        &self,
        expr: Option<Box<Expr>>,
        name: Token,
        span: Span,
    ) -> Result<Option<Box<Expr>>, AllocError> {
        if name.span.is_empty() {
            return Ok(expr);
        }
        let mut node = self.token_expr(ExprOp::Collate, name)?;
        node.span = span;
        node.left = expr;
        node.flags.insert(ExprFlags::COLLATE);
        node.update_height();
        Ok(Some(node))
    }

    /// Wraps the expression in `NOT` when `negated`.
    pub(crate) fn negate(&mut self, negated: bool, value: &mut ExprSpan) -> Result<(), AllocError> {
        if negated {
            value.expr = self.pexpr(ExprOp::Not, value.expr.take(), None, value.span)?;
        }
        Ok(())
    }

    /// Numbers a bound parameter.
    ///
    /// `?` takes the next number, `?N` takes N, and a named parameter
    /// reuses the number of its first occurrence.
    pub(crate) fn assign_var_number(&mut self, expr: &mut Expr) {
        let limit = self.config.variable_limit;
        let text = self.text(expr.span);
        let number = if text.len() == 1 {
            self.variables.count += 1;
            self.variables.count
        } else if let Some(digits) = text.strip_prefix('?') {
            let number = digits
                .parse::<u32>()
                .ok()
                .filter(|&n| n >= 1 && usize::try_from(n).is_ok_and(|n| n <= limit));
            let Some(number) = number else {
                self.complain(
                    format!("variable number must be between ?1 and ?{limit}"),
                    expr.span,
                );
                return;
            };
            if number > self.variables.count {
                self.variables.count = number;
                self.variables.names.push((text.to_string(), number));
            } else if !self.variables.has_number(number) {
                self.variables.names.push((text.to_string(), number));
            }
            number
        } else if let Some(number) = self.variables.number_of(text) {
            number
        } else {
            self.variables.count += 1;
            let number = self.variables.count;
            self.variables.names.push((text.to_string(), number));
            number
        };
        expr.var_number = Some(number);
        if usize::try_from(number).map_or(true, |n| n > limit) {
            self.complain("too many SQL variables", expr.span);
        }
    }

    // Lists

    /// Appends `expr` to `list`, creating the list if needed.
    pub(crate) fn list_append(
        &self,
        list: Option<ExprList>,
        expr: Option<Box<Expr>>,
    ) -> Result<ExprList, AllocError> {
        let mut list = match list {
            Some(list) => list,
            None => ExprList::new(self.lease(NodeKind::ExprList)?),
        };
        list.push(expr);
        Ok(list)
    }

    /// Names the last item of `list` after `token`.
    pub(crate) fn set_list_name(&self, list: &mut ExprList, token: Token) {
        let name = self.name(token);
        if let Some(item) = list.last_mut() {
            item.name = Some(name);
        }
    }

    /// Complains if `list` has more items than a table has columns.
    pub(crate) fn check_list_length(&mut self, list: Option<&ExprList>, object: &str, span: Span) {
        if list.is_some_and(|list| list.len() > self.config.column_limit) {
            self.complain(format!("too many columns in {object}"), span);
        }
    }

    /// Appends one item per column of `(a, b) = expr`, each taking the
    /// matching field of `expr`.
    ///
    /// A subquery becomes one `SelectColumn` item per column; the first
    /// of them owns the subquery through `right`.
    pub(crate) fn append_vector(
        &mut self,
        mut list: Option<ExprList>,
        columns: Option<IdList>,
        expr: Option<Box<Expr>>,
        span: Span,
    ) -> Result<Option<ExprList>, AllocError> {
        let (Some(columns), Some(mut expr)) = (columns, expr) else {
            return Ok(list);
        };
        let is_select = expr.op == ExprOp::Select;
        if !is_select {
            let size = vector_size(&expr);
            if columns.len() != size {
                self.complain(
                    format!("{} columns assigned {size} values", columns.len()),
                    span,
                );
                return Ok(list);
            }
        }
        let mut fields: Vec<Option<Box<Expr>>> = Vec::with_capacity(columns.len());
        let mut select = None;
        if is_select {
            for column in 0..columns.len() {
                let mut field = self.expr(ExprOp::SelectColumn, None, expr.span)?;
                field.column = Some(column);
                fields.push(Some(field));
            }
            select = Some(expr);
        } else if expr.op == ExprOp::Vector {
            if let ExprPayload::List(elements) = &mut expr.x {
                fields.extend(elements.items.iter_mut().map(|item| item.expr.take()));
            }
        } else {
            fields.push(Some(expr));
        }
        for (field, name) in fields.into_iter().zip(columns.names.iter()) {
            let mut appended = self.list_append(list, field)?;
            if let Some(item) = appended.last_mut() {
                item.name = Some(name.clone());
            }
            list = Some(appended);
        }
        if let Some(select) = select {
            let first = list
                .as_mut()
                .and_then(|list| list.items.first_mut())
                .and_then(|item| item.expr.as_mut());
            if let Some(first) = first {
                first.right = Some(select);
            }
        }
        Ok(list)
    }

    /// Appends the name `token` to an id list.
    pub(crate) fn id_list_append(&self, list: Option<IdList>, token: Token) -> Result<IdList, AllocError> {
        let mut list = match list {
            Some(list) => list,
            None => IdList::new(self.lease(NodeKind::IdList)?),
        };
        list.names.push(self.name(token));
        Ok(list)
    }

    // FROM clauses

    /// An empty FROM list.
    pub(crate) fn src_list(&self) -> Result<SrcList, AllocError> {
        Ok(SrcList::new(self.lease(NodeKind::SrcList)?))
    }

    /// Appends a term naming `table` (if any) to `list`.
    pub(crate) fn src_list_append(
        &self,
        list: Option<SrcList>,
        table: Option<Token>,
    ) -> Result<SrcList, AllocError> {
        let mut list = match list {
            Some(list) => list,
            None => self.src_list()?,
        };
        list.items.push(SrcItem {
            name: table.map(|token| self.name(token)),
            ..SrcItem::default()
        });
        Ok(list)
    }

    /// Appends a FROM term with its alias and join constraint.
    ///
    /// `ON` and `USING` need a term to join with. Without one the
    /// complaint is reported and the new term is dropped.
    pub(crate) fn append_from_term(
        &mut self,
        prefix: Option<SrcList>,
        table: Option<Token>,
        alias: Token,
        select: Option<Box<Select>>,
        on: Option<Box<Expr>>,
        using: Option<IdList>,
    ) -> Result<Option<SrcList>, AllocError> {
        if prefix.is_none() && (on.is_some() || using.is_some()) {
            let clause = if on.is_some() { "ON" } else { "USING" };
            let span = on.as_ref().map_or(alias.span, |on| on.span);
            self.complain(format!("a JOIN clause is required before {clause}"), span);
            return Ok(None);
        }
        let mut list = self.src_list_append(prefix, table)?;
        let alias = (!alias.span.is_empty()).then(|| self.name(alias));
        if let Some(item) = list.items.last_mut() {
            item.alias = alias;
            item.select = select;
            item.on = on;
            item.using = using;
        }
        Ok(Some(list))
    }

    /// Decodes up to three join keywords.
    pub(crate) fn join_type(&mut self, a: Token, b: Option<Token>, c: Option<Token>) -> JoinType {
        const KEYWORDS: [(&str, JoinType); 7] = [
            ("natural", JoinType::NATURAL),
            ("left", JoinType::LEFT.union(JoinType::OUTER)),
            ("outer", JoinType::OUTER),
            ("right", JoinType::RIGHT.union(JoinType::OUTER)),
            ("full", JoinType::LEFT.union(JoinType::RIGHT).union(JoinType::OUTER)),
            ("inner", JoinType::INNER),
            ("cross", JoinType::INNER.union(JoinType::CROSS)),
        ];
        let words: Vec<Token> = std::iter::once(a).chain(b).chain(c).collect();
        let mut join = JoinType::NONE;
        for word in &words {
            let text = self.text(word.span);
            match KEYWORDS
                .iter()
                .find(|(keyword, _)| keyword.eq_ignore_ascii_case(text))
            {
                Some(&(_, bits)) => join = join.union(bits),
                None => {
                    join = join.union(JoinType::ERROR);
                    break;
                }
            }
        }
        let span = words
            .last()
            .map_or(a.span, |last| a.span.to(last.span));
        if join.contains(JoinType::INNER.union(JoinType::OUTER)) || join.contains(JoinType::ERROR) {
            let texts: Vec<&str> = words.iter().map(|word| self.text(word.span)).collect();
            self.complain(
                format!("unknown or unsupported join type: {}", texts.join(" ")),
                span,
            );
            return JoinType::INNER;
        }
        if join.contains(JoinType::OUTER)
            && join.intersection(JoinType::LEFT.union(JoinType::RIGHT)) != JoinType::LEFT
        {
            self.complain("RIGHT and FULL OUTER JOINs are not currently supported", span);
            return JoinType::INNER;
        }
        join
    }

    // SELECT

    /// A fresh arm identity.
    pub(crate) fn select_id(&mut self) -> SelectId {
        self.next_select += 1;
        SelectId(self.next_select)
    }

    /// A new select arm. A missing result list means `*`; a missing FROM
    /// list means an empty one.
    pub(crate) fn select_new(&mut self, parts: SelectParts) -> Result<Box<Select>, AllocError> {
        let result = match parts.result {
            Some(result) => result,
            None => {
                let star = self.expr(ExprOp::Asterisk, None, Span::default())?;
                self.list_append(None, Some(star))?
            }
        };
        let src = match parts.src {
            Some(src) => src,
            None => self.src_list()?,
        };
        let lease = self.lease(NodeKind::Select)?;
        Ok(Box::new(Select {
            id: self.select_id(),
            op: CompoundOp::Select,
            flags: parts.flags,
            result,
            src,
            where_clause: parts.where_clause,
            group_by: parts.group_by,
            having: parts.having,
            order_by: parts.order_by,
            limit: parts.limit,
            offset: parts.offset,
            with: None,
            prior: None,
            next: None,
            lease,
        }))
    }

    /// Links a compound chain both ways and checks its length.
    pub(crate) fn double_link(&mut self, select: &mut Select, span: Span) {
        if select.prior.is_none() {
            return;
        }
        let arms = select.link_compound();
        let limit = self.config.compound_select_limit;
        if !select.flags.contains(SelectFlags::MULTI_VALUE) && limit > 0 && arms > limit {
            self.complain("Too many UNION or EXCEPT or INTERSECT operations", span);
        }
    }

    /// Adds a common table expression to `with`.
    pub(crate) fn with_add(
        &mut self,
        with: Option<With>,
        name: Token,
        columns: Option<ExprList>,
        select: Option<Box<Select>>,
    ) -> Result<With, AllocError> {
        let name_text = self.name(name);
        let mut with = match with {
            Some(with) => {
                if with.ctes.iter().any(|cte| cte.name == name_text) {
                    self.complain(format!("duplicate WITH table name: {name_text}"), name.span);
                }
                with
            }
            None => With::new(self.lease(NodeKind::With)?),
        };
        with.ctes.push(Cte {
            name: name_text,
            columns,
            select,
        });
        Ok(with)
    }
}

/// Attaches operands to `expr` and recomputes its height.
pub(crate) fn attach(
    mut expr: Box<Expr>,
    left: Option<Box<Expr>>,
    right: Option<Box<Expr>>,
) -> Box<Expr> {
    expr.left = left;
    expr.right = right;
    expr.update_height();
    expr
}

/// Number of values an expression stands for.
fn vector_size(expr: &Expr) -> usize {
    match (&expr.x, expr.op) {
        (ExprPayload::List(list), ExprOp::Vector) => list.len(),
        (ExprPayload::Select(select), ExprOp::Select) => select.result.len(),
        _ => 1,
    }
}

/// Parses an integer literal that fits in 32 bits.
fn parse_int32(text: &str) -> Option<i32> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        let value = u32::from_str_radix(hex, 16).ok()?;
        return i32::try_from(value).ok();
    }
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::CountingAllocator;
    use crate::grammar::tk;

    fn context(source: &str) -> (ParseContext<'_>, Arc<CountingAllocator>) {
        let counter = Arc::new(CountingAllocator::new());
        let ctx = ParseContext::new(source, ParserConfig::default(), counter.clone());
        (ctx, counter)
    }

    fn messages(ctx: &ParseContext<'_>) -> Vec<String> {
        ctx.diagnostics()
            .as_slice()
            .iter()
            .map(|d| d.message.clone())
            .collect()
    }

    #[test]
    fn test_parse_int32() {
        assert_eq!(parse_int32("42"), Some(42));
        assert_eq!(parse_int32("0x10"), Some(16));
        assert_eq!(parse_int32("2147483647"), Some(i32::MAX));
        assert_eq!(parse_int32("2147483648"), None);
        assert_eq!(parse_int32("0xffffffff"), None);
        assert_eq!(parse_int32("1.5"), None);
    }

    #[test]
    fn test_token_expr_integer_and_quotes() {
        let (ctx, counter) = context("123 \"Col\" 99999999999");
        let int = ctx
            .token_expr(ExprOp::Integer, Token::new(tk::INTEGER, Span::new(0, 3)))
            .unwrap();
        assert_eq!(int.int_value, Some(123));
        assert!(int.token.is_none());
        let id = ctx
            .token_expr(ExprOp::Id, Token::new(tk::ID, Span::new(4, 9)))
            .unwrap();
        assert_eq!(id.text(), "Col");
        assert!(id.flags.contains(ExprFlags::DBL_QUOTED));
        let big = ctx
            .token_expr(ExprOp::Integer, Token::new(tk::INTEGER, Span::new(10, 21)))
            .unwrap();
        assert_eq!(big.text(), "99999999999");
        assert!(!big.flags.contains(ExprFlags::INT_VALUE));
        drop((int, id, big));
        assert_eq!(counter.live(), 0);
    }

    #[test]
    fn test_and_with_zero_folds() {
        let (mut ctx, counter) = context("a AND 0");
        let a = ctx
            .token_expr(ExprOp::Id, Token::new(tk::ID, Span::new(0, 1)))
            .unwrap();
        let zero = ctx.integer(0, Span::new(6, 7)).unwrap();
        let folded = ctx
            .pexpr(ExprOp::And, Some(a), Some(zero), Span::new(0, 7))
            .unwrap()
            .unwrap();
        assert_eq!(folded.op, ExprOp::Integer);
        assert_eq!(folded.int_value, Some(0));
        assert_eq!(counter.live(), 1);
        assert!(ctx.pexpr(ExprOp::And, None, None, Span::default()).unwrap().is_none());
    }

    #[test]
    fn test_depth_limit_complains() {
        let counter = Arc::new(CountingAllocator::new());
        let config = ParserConfig::default().with_expr_depth_limit(2);
        let mut ctx = ParseContext::new("1", config, counter);
        let one = ctx.integer(1, Span::new(0, 1)).unwrap();
        let neg = ctx.pexpr(ExprOp::UMinus, Some(one), None, Span::new(0, 1)).unwrap();
        assert!(ctx.diagnostics().is_empty());
        let neg = ctx.pexpr(ExprOp::UMinus, neg, None, Span::new(0, 1)).unwrap();
        assert_eq!(neg.map(|e| e.height), Some(3));
        assert_eq!(
            messages(&ctx),
            vec!["Expression tree is too large (maximum depth 2)".to_string()]
        );
    }

    #[test]
    fn test_variable_numbering() {
        let (mut ctx, _) = context("? :a ?5 :a ? ?0");
        let spans = [(0, 1), (2, 4), (5, 7), (8, 10), (11, 12)];
        let numbers: Vec<Option<u32>> = spans
            .iter()
            .map(|&(start, end)| {
                let mut expr = ctx.expr(ExprOp::Variable, None, Span::new(start, end)).unwrap();
                ctx.assign_var_number(&mut expr);
                expr.var_number
            })
            .collect();
        assert_eq!(numbers, vec![Some(1), Some(2), Some(5), Some(2), Some(6)]);
        let mut bad = ctx.expr(ExprOp::Variable, None, Span::new(13, 15)).unwrap();
        ctx.assign_var_number(&mut bad);
        assert_eq!(bad.var_number, None);
        assert_eq!(
            messages(&ctx),
            vec!["variable number must be between ?1 and ?999".to_string()]
        );
        assert_eq!(ctx.variable_count(), 6);
    }

    #[test]
    fn test_join_type_errors() {
        let (mut ctx, _) = context("LEFT OUTER RIGHT INNER bogus");
        let left = Token::new(tk::JOIN_KW, Span::new(0, 4));
        let outer = Token::new(tk::JOIN_KW, Span::new(5, 10));
        let right = Token::new(tk::JOIN_KW, Span::new(11, 16));
        let inner = Token::new(tk::JOIN_KW, Span::new(17, 22));
        let bogus = Token::new(tk::ID, Span::new(23, 28));
        assert_eq!(
            ctx.join_type(left, Some(outer), None),
            JoinType::LEFT.union(JoinType::OUTER)
        );
        assert!(ctx.diagnostics().is_empty());
        assert_eq!(ctx.join_type(right, None, None), JoinType::INNER);
        assert_eq!(ctx.join_type(inner, Some(bogus), None), JoinType::INNER);
        assert_eq!(
            messages(&ctx),
            vec![
                "RIGHT and FULL OUTER JOINs are not currently supported".to_string(),
                "unknown or unsupported join type: INNER bogus".to_string(),
            ]
        );
    }

    #[test]
    fn test_from_term_needs_a_join() {
        let (mut ctx, counter) = context("t ON x");
        let on = ctx.integer(1, Span::new(5, 6)).unwrap();
        let list = ctx
            .append_from_term(
                None,
                Some(Token::new(tk::ID, Span::new(0, 1))),
                Token::default(),
                None,
                Some(on),
                None,
            )
            .unwrap();
        assert!(list.is_none());
        assert_eq!(counter.live(), 0);
        assert_eq!(
            messages(&ctx),
            vec!["a JOIN clause is required before ON".to_string()]
        );
    }

    #[test]
    fn test_duplicate_cte_name() {
        let (mut ctx, _) = context("c c");
        let with = ctx
            .with_add(None, Token::new(tk::ID, Span::new(0, 1)), None, None)
            .unwrap();
        let with = ctx
            .with_add(Some(with), Token::new(tk::ID, Span::new(2, 3)), None, None)
            .unwrap();
        assert_eq!(with.ctes.len(), 2);
        assert_eq!(messages(&ctx), vec!["duplicate WITH table name: c".to_string()]);
    }

    #[test]
    fn test_reset_clears_pending_state() {
        let (mut ctx, _) = context("x");
        ctx.table = Some(PendingTable::default());
        ctx.constraint_name = Some("pk".into());
        ctx.complain("boom", Span::default());
        ctx.reset();
        assert!(ctx.table.is_none());
        assert!(ctx.constraint_name.is_none());
        assert!(ctx.diagnostics().is_empty());
    }
}
