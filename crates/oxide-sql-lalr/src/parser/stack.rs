//! The parser's value stack.

use crate::grammar::{StateId, Symbol};

/// How far the value stack may grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackLimit {
    /// Start with room for `initial` entries and grow to `2 * cap + 100`
    /// whenever full. Only a failed allocation stops growth.
    Growable {
        /// Entries reserved up front.
        initial: usize,
    },
    /// Never grow past this many entries, sentinel included.
    Fixed(usize),
}

/// One level of the automaton's stack.
#[derive(Debug, Default)]
pub struct StackEntry<V> {
    /// State, or a pending reduce after a shift-reduce.
    pub state: StateId,
    /// Symbol this entry holds a value for.
    pub major: Symbol,
    /// Semantic value for `major`.
    pub value: V,
}

impl<V> StackEntry<V> {
    /// Creates an entry.
    #[must_use]
    pub const fn new(state: StateId, major: Symbol, value: V) -> Self {
        Self {
            state,
            major,
            value,
        }
    }
}

/// The stack is full and cannot grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackFull {
    /// Depth at which the push was refused.
    pub depth: usize,
}

/// What making room for one more entry did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Room {
    /// There was room already.
    Available,
    /// Capacity went from `from` to `to`.
    Grew {
        /// Old capacity.
        from: usize,
        /// New capacity.
        to: usize,
    },
}

/// Growable stack of `(state, symbol, value)` entries over a `Vec`.
///
/// The bottom entry is a sentinel in state 0 that is never popped.
#[derive(Debug)]
pub struct ValueStack<V> {
    entries: Vec<StackEntry<V>>,
    limit: StackLimit,
    capacity: usize,
}

impl<V: Default> ValueStack<V> {
    /// Creates a stack holding only the sentinel.
    #[must_use]
    pub fn new(limit: StackLimit) -> Self {
        let capacity = match limit {
            StackLimit::Growable { initial } => initial.max(1),
            StackLimit::Fixed(max) => max.max(1),
        };
        let mut entries = Vec::with_capacity(capacity);
        entries.push(StackEntry::default());
        Self {
            entries,
            limit,
            capacity,
        }
    }

    /// Drops every entry above the sentinel.
    pub fn clear(&mut self) {
        self.entries.truncate(1);
    }
}

impl<V> ValueStack<V> {
    /// Number of entries, sentinel included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries the stack can hold before it must grow.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The growth policy.
    #[must_use]
    pub const fn limit(&self) -> StackLimit {
        self.limit
    }

    /// Makes sure one more entry fits.
    ///
    /// # Errors
    ///
    /// Returns [`StackFull`] when a fixed stack is at its limit or a
    /// growable stack cannot allocate.
    pub fn reserve_one(&mut self) -> Result<Room, StackFull> {
        let depth = self.entries.len();
        if depth < self.capacity {
            return Ok(Room::Available);
        }
        match self.limit {
            StackLimit::Fixed(_) => Err(StackFull { depth }),
            StackLimit::Growable { .. } => {
                let from = self.capacity;
                let to = from.saturating_mul(2).saturating_add(100);
                self.entries
                    .try_reserve_exact(to - depth)
                    .map_err(|_| StackFull { depth })?;
                self.capacity = to;
                Ok(Room::Grew { from, to })
            }
        }
    }

    /// Pushes an entry.
    ///
    /// # Errors
    ///
    /// Returns [`StackFull`] if there is no room; the entry is dropped.
    pub fn push(&mut self, entry: StackEntry<V>) -> Result<Room, StackFull> {
        let room = self.reserve_one()?;
        self.entries.push(entry);
        Ok(room)
    }

    /// Pops the top entry. The sentinel is never popped.
    pub fn pop(&mut self) -> Option<StackEntry<V>> {
        if self.entries.len() > 1 {
            self.entries.pop()
        } else {
            None
        }
    }

    /// The top entry.
    #[must_use]
    pub fn top(&self) -> &StackEntry<V> {
        // The sentinel guarantees a top.
        &self.entries[self.entries.len() - 1]
    }

    /// The top entry, mutably.
    pub fn top_mut(&mut self) -> &mut StackEntry<V> {
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    /// The entry `n` places below the top (`0` is the top).
    #[must_use]
    pub fn peek(&self, n: usize) -> Option<&StackEntry<V>> {
        self.entries.len().checked_sub(n + 1).map(|i| &self.entries[i])
    }

    /// The top `n` entries, bottom first. `n` must leave the sentinel out.
    pub fn top_mut_slice(&mut self, n: usize) -> &mut [StackEntry<V>] {
        let start = self.entries.len().saturating_sub(n).max(1);
        &mut self.entries[start..]
    }

    /// Drops entries until `depth` remain (never below the sentinel).
    pub fn truncate(&mut self, depth: usize) {
        self.entries.truncate(depth.max(1));
    }

    /// Entries from the bottom, sentinel included.
    pub fn iter(&self) -> std::slice::Iter<'_, StackEntry<V>> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_sentinel() {
        let stack: ValueStack<u32> = ValueStack::new(StackLimit::Growable { initial: 4 });
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top().state, 0);
        assert_eq!(stack.top().major, 0);
    }

    #[test]
    fn test_sentinel_is_never_popped() {
        let mut stack: ValueStack<u32> = ValueStack::new(StackLimit::Fixed(4));
        stack.push(StackEntry::new(3, 7, 42)).unwrap();
        assert_eq!(stack.pop().map(|e| e.value), Some(42));
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 1);
        stack.truncate(0);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_growth_formula() {
        let mut stack: ValueStack<u32> = ValueStack::new(StackLimit::Growable { initial: 2 });
        assert_eq!(stack.push(StackEntry::new(1, 1, 1)), Ok(Room::Available));
        assert_eq!(
            stack.push(StackEntry::new(2, 1, 2)),
            Ok(Room::Grew { from: 2, to: 104 })
        );
        assert_eq!(stack.capacity(), 104);
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn test_fixed_overflows() {
        let mut stack: ValueStack<u32> = ValueStack::new(StackLimit::Fixed(3));
        stack.push(StackEntry::new(1, 1, 1)).unwrap();
        stack.push(StackEntry::new(2, 1, 2)).unwrap();
        assert_eq!(
            stack.push(StackEntry::new(3, 1, 3)),
            Err(StackFull { depth: 3 })
        );
        assert_eq!(stack.reserve_one(), Err(StackFull { depth: 3 }));
    }

    #[test]
    fn test_top_slice_and_peek() {
        let mut stack: ValueStack<u32> = ValueStack::new(StackLimit::Fixed(10));
        for v in 1..=4 {
            stack.push(StackEntry::new(v as u16, 1, v)).unwrap();
        }
        let top: Vec<u32> = stack.top_mut_slice(2).iter().map(|e| e.value).collect();
        assert_eq!(top, vec![3, 4]);
        assert_eq!(stack.peek(0).map(|e| e.value), Some(4));
        assert_eq!(stack.peek(3).map(|e| e.value), Some(1));
        assert_eq!(stack.peek(4).map(|e| e.state), Some(0));
        assert!(stack.peek(5).is_none());
        assert_eq!(stack.top_mut_slice(0).len(), 0);
    }

    #[test]
    fn test_iter_from_either_end() {
        let mut stack: ValueStack<u32> = ValueStack::new(StackLimit::Fixed(10));
        for v in 1..=3 {
            stack.push(StackEntry::new(v as u16, 1, v)).unwrap();
        }
        let states: Vec<u16> = stack.iter().map(|e| e.state).collect();
        assert_eq!(states, vec![0, 1, 2, 3]);
        let from_top: Vec<(usize, u32)> = stack
            .iter()
            .enumerate()
            .rev()
            .map(|(i, e)| (i, e.value))
            .take(2)
            .collect();
        assert_eq!(from_top, vec![(3, 3), (2, 2)]);
        assert_eq!(stack.iter().len(), stack.depth());
    }

    #[test]
    fn test_values_dropped_on_truncate() {
        use std::rc::Rc;
        let tracker = Rc::new(());
        let mut stack: ValueStack<Option<Rc<()>>> = ValueStack::new(StackLimit::Fixed(10));
        stack
            .push(StackEntry::new(1, 1, Some(Rc::clone(&tracker))))
            .unwrap();
        stack
            .push(StackEntry::new(2, 1, Some(Rc::clone(&tracker))))
            .unwrap();
        assert_eq!(Rc::strong_count(&tracker), 3);
        stack.clear();
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
