//! Shared exploration frontier for tree fates.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// FIFO queue of bit-masks still waiting to be explored.
///
/// Cloning a `Frontier` clones the handle, not the queue: every tree fate
/// (and every fresh copy of one) produced by a single exploration run pushes
/// its discoveries into the same queue. A mask already pending is not
/// queued again.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    queue: Rc<RefCell<VecDeque<u64>>>,
}

impl Frontier {
    /// Create an empty frontier
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frontier holding the all-zero mask, the root of every exploration
    #[must_use]
    pub fn rooted() -> Self {
        let frontier = Self::new();
        frontier.offer(0);
        frontier
    }

    /// Queue a mask unless it is already pending.
    ///
    /// Returns `true` if the mask was added.
    pub fn offer(&self, mask: u64) -> bool {
        let mut queue = self.queue.borrow_mut();
        if queue.contains(&mask) {
            return false;
        }
        queue.push_back(mask);
        true
    }

    /// Take the next mask to explore
    pub fn pop(&self) -> Option<u64> {
        self.queue.borrow_mut().pop_front()
    }

    /// Number of pending masks
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Whether no masks are pending
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Whether a mask is currently pending
    #[must_use]
    pub fn contains(&self, mask: u64) -> bool {
        self.queue.borrow().contains(&mask)
    }

    /// Whether two handles point at the same queue
    #[must_use]
    pub fn shares_queue_with(&self, other: &Frontier) -> bool {
        Rc::ptr_eq(&self.queue, &other.queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontier_rooted() {
        let frontier = Frontier::rooted();
        assert_eq!(frontier.len(), 1);
        assert!(frontier.contains(0));
        assert_eq!(frontier.pop(), Some(0));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_frontier_rejects_pending_duplicates() {
        let frontier = Frontier::new();
        assert!(frontier.offer(5));
        assert!(!frontier.offer(5));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_frontier_is_fifo() {
        let frontier = Frontier::new();
        frontier.offer(1);
        frontier.offer(2);
        frontier.offer(4);
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), Some(4));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_frontier_clone_shares_queue() {
        let frontier = Frontier::new();
        let handle = frontier.clone();
        handle.offer(3);
        assert!(frontier.contains(3));
        assert!(frontier.shares_queue_with(&handle));
        assert!(!frontier.shares_queue_with(&Frontier::new()));
    }
}
