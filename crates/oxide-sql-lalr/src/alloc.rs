//! Node allocation accounting.
//!
//! Every AST node owns a [`NodeLease`] obtained from a [`NodeAllocator`].
//! The lease is returned when the node is dropped, so an allocator that
//! counts leases can prove that a parse, however it ended, left nothing
//! behind.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// The kinds of AST node the parser allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// An [`Expr`](crate::ast::Expr).
    Expr,
    /// An [`ExprList`](crate::ast::ExprList).
    ExprList,
    /// A [`Select`](crate::ast::Select) arm.
    Select,
    /// A [`SrcList`](crate::ast::SrcList).
    SrcList,
    /// An [`IdList`](crate::ast::IdList).
    IdList,
    /// A [`With`](crate::ast::With) clause.
    With,
    /// A [`TriggerStep`](crate::ast::TriggerStep).
    TriggerStep,
}

impl NodeKind {
    /// Returns the node kind name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Expr => "expression",
            Self::ExprList => "expression list",
            Self::Select => "select",
            Self::SrcList => "source list",
            Self::IdList => "id list",
            Self::With => "with clause",
            Self::TriggerStep => "trigger step",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The allocator refused a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("out of memory allocating {kind}")]
pub struct AllocError {
    /// The node that could not be allocated.
    pub kind: NodeKind,
}

/// Source of node leases.
pub trait NodeAllocator: Send + Sync + fmt::Debug {
    /// Accounts for one new node of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] when the allocator refuses the node.
    fn allocate(&self, kind: NodeKind) -> Result<(), AllocError>;

    /// Returns a node previously granted by [`NodeAllocator::allocate`].
    fn release(&self, kind: NodeKind);
}

/// Proof that a node was granted by an allocator. Dropping it releases
/// the node.
pub struct NodeLease {
    allocator: Arc<dyn NodeAllocator>,
    kind: NodeKind,
}

impl NodeLease {
    /// Asks `allocator` for a node of `kind`.
    ///
    /// # Errors
    ///
    /// Propagates the allocator's refusal.
    pub fn acquire(allocator: &Arc<dyn NodeAllocator>, kind: NodeKind) -> Result<Self, AllocError> {
        allocator.allocate(kind)?;
        Ok(Self {
            allocator: Arc::clone(allocator),
            kind,
        })
    }

    /// The kind of node this lease accounts for.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }
}

impl Drop for NodeLease {
    fn drop(&mut self) {
        self.allocator.release(self.kind);
    }
}

impl fmt::Debug for NodeLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeLease({})", self.kind)
    }
}

/// Allocator that never refuses.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAllocator;

impl NodeAllocator for SystemAllocator {
    fn allocate(&self, _kind: NodeKind) -> Result<(), AllocError> {
        Ok(())
    }

    fn release(&self, _kind: NodeKind) {}
}

/// Allocator that counts outstanding nodes and can refuse past a limit.
#[derive(Debug, Default)]
pub struct CountingAllocator {
    live: AtomicUsize,
    total: AtomicUsize,
    limit: Option<usize>,
}

impl CountingAllocator {
    /// Creates an allocator without a limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            live: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
            limit: None,
        }
    }

    /// Creates an allocator that refuses once `limit` nodes are live.
    #[must_use]
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            live: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
            limit: Some(limit),
        }
    }

    /// Number of nodes currently outstanding.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Number of nodes granted since creation.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

impl NodeAllocator for CountingAllocator {
    fn allocate(&self, kind: NodeKind) -> Result<(), AllocError> {
        let granted = self
            .live
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |live| match self.limit {
                Some(limit) if live >= limit => None,
                _ => Some(live + 1),
            });
        match granted {
            Ok(_) => {
                self.total.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            Err(_) => Err(AllocError { kind }),
        }
    }

    fn release(&self, _kind: NodeKind) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lease_releases_on_drop() {
        let counter = Arc::new(CountingAllocator::new());
        let allocator: Arc<dyn NodeAllocator> = counter.clone();
        let a = NodeLease::acquire(&allocator, NodeKind::Expr).unwrap();
        let b = NodeLease::acquire(&allocator, NodeKind::Select).unwrap();
        assert_eq!(counter.live(), 2);
        drop(a);
        assert_eq!(counter.live(), 1);
        drop(b);
        assert_eq!(counter.live(), 0);
        assert_eq!(counter.total(), 2);
    }

    #[test]
    fn test_limit_refuses() {
        let counter = Arc::new(CountingAllocator::with_limit(1));
        let allocator: Arc<dyn NodeAllocator> = counter.clone();
        let held = NodeLease::acquire(&allocator, NodeKind::Expr).unwrap();
        let err = NodeLease::acquire(&allocator, NodeKind::IdList).unwrap_err();
        assert_eq!(err.kind, NodeKind::IdList);
        assert_eq!(err.to_string(), "out of memory allocating id list");
        drop(held);
        assert!(NodeLease::acquire(&allocator, NodeKind::IdList).is_ok());
        assert_eq!(counter.live(), 0);
    }

    #[test]
    fn test_system_allocator() {
        let allocator: Arc<dyn NodeAllocator> = Arc::new(SystemAllocator);
        let lease = NodeLease::acquire(&allocator, NodeKind::With).unwrap();
        assert_eq!(lease.kind(), NodeKind::With);
        assert_eq!(format!("{lease:?}"), "NodeLease(with clause)");
    }
}
