use crate::data_structures::link_node::{ChainIter, LinkNode};

/// FIFO work-list over two chains of [`LinkNode`]s
///
/// `head` holds the oldest values in dequeue order. `tail` holds the values
/// enqueued since `head` was last refilled, newest first. Whenever the queue
/// is non-empty `head` is non-empty too; draining `head` turns the `tail`
/// chain around into a new `head`, and draining the last value leaves both
/// chains empty.
#[derive(Debug)]
pub struct Queue<V> {
    /// Oldest node first, next to be dequeued
    head: Option<Box<LinkNode<V>>>,

    /// Newest node first
    tail: Option<Box<LinkNode<V>>>,

    /// Number of nodes across both chains
    len: usize,
}

impl<V> Queue<V> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Queue {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Appends a value at the tail of the queue
    pub fn enqueue(&mut self, value: V) {
        if self.head.is_none() {
            self.head = Some(Box::new(LinkNode::new(value)));
        } else {
            let node = LinkNode::with_next(value, self.tail.take());
            self.tail = Some(Box::new(node));
        }
        self.len += 1;
    }

    /// Removes the head node and returns its value, or `None` when empty
    pub fn dequeue(&mut self) -> Option<V> {
        self.head.take().map(|mut node| {
            self.head = node.take_next();
            if self.head.is_none() {
                self.refill_head();
            }
            self.len -= 1;
            node.into_value()
        })
    }

    /// Returns the value at the head without removing it
    pub fn peek(&self) -> Option<&V> {
        self.head.as_deref().map(LinkNode::value)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterates from the head of the queue to the tail
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        let newest_first: Vec<&V> = ChainIter {
            current: self.tail.as_deref(),
        }
        .collect();

        ChainIter {
            current: self.head.as_deref(),
        }
        .chain(newest_first.into_iter().rev())
    }

    // Relinks the tail chain in reverse, oldest first, as the new head
    fn refill_head(&mut self) {
        let mut current = self.tail.take();
        while let Some(mut node) = current {
            current = node.take_next();
            if let Some(head) = self.head.take() {
                node.set_next(head);
            }
            self.head = Some(node);
        }
    }
}

impl<V> Default for Queue<V> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<V> Drop for Queue<V> {
    fn drop(&mut self) {
        for chain in [self.head.take(), self.tail.take()] {
            let mut current = chain;
            while let Some(mut node) = current {
                current = node.take_next();
            }
        }
    }
}
