//! LIFO/FIFO frontier primitives driving every traversal in this crate.
//!
//! Both collections are unbounded: a path-based search on a dense graph can
//! hold many partial paths at once, and the memory cost is proportional to
//! the number of simultaneously live frontier entries. That growth is a
//! documented characteristic of the algorithms, not something the frontier
//! limits.

use std::collections::VecDeque;

/// Last-in-first-out frontier. Swapping this in for [`Queue`] turns a
/// breadth-first walk into a depth-first one without touching the loop body.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the most recently pushed item.
    ///
    /// Returns `None` on an empty stack. The traversal loops in this crate
    /// drive themselves with `while let Some(..)`, so they never observe an
    /// underflow as anything other than loop exit.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// First-in-first-out frontier.
#[derive(Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the least recently enqueued item, or `None` if the
    /// queue is empty. Same underflow contract as [`Stack::pop`].
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_lifo_order() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.size(), 3);
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn test_queue_fifo_order() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.size(), 3);
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn test_empty_checks() {
        let mut s: Stack<u64> = Stack::new();
        assert!(s.is_empty());
        assert_eq!(s.size(), 0);
        s.push(7);
        assert!(!s.is_empty());

        let mut q: Queue<u64> = Queue::new();
        assert!(q.is_empty());
        q.enqueue(7);
        assert!(!q.is_empty());
        q.dequeue();
        assert!(q.is_empty());
    }

    #[test]
    fn test_interleaved_operations() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.dequeue(), Some(1));
        q.enqueue(3);
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
        assert!(q.is_empty());
    }
}
