/// A value-carrying link in a singly-linked chain
///
/// Each node exclusively owns the rest of the chain through `next`.
/// The optional priority is used when the node is stored in a [`BinaryHeap`](crate::BinaryHeap).
#[derive(Debug, Clone, PartialEq)]
pub struct LinkNode<V, P = ()> {
    /// Payload carried by this node
    value: V,

    /// Ordering key, present when the node lives in a heap
    priority: Option<P>,

    /// Owned remainder of the chain
    next: Option<Box<LinkNode<V, P>>>,
}

impl<V, P> LinkNode<V, P> {
    /// Creates a detached node without a priority
    pub fn new(value: V) -> Self {
        LinkNode {
            value,
            priority: None,
            next: None,
        }
    }

    /// Creates a detached node carrying a priority
    pub fn with_priority(value: V, priority: P) -> Self {
        LinkNode {
            value,
            priority: Some(priority),
            next: None,
        }
    }

    /// Creates a node in front of an existing chain
    pub fn with_next(value: V, next: Option<Box<LinkNode<V, P>>>) -> Self {
        LinkNode {
            value,
            priority: None,
            next,
        }
    }

    /// Returns the payload
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the node and returns its payload
    pub fn into_value(self) -> V {
        self.value
    }

    pub fn priority(&self) -> Option<&P> {
        self.priority.as_ref()
    }

    /// Overwrites the priority in place, keeping the node's identity
    pub fn set_priority(&mut self, priority: P) -> Option<P> {
        self.priority.replace(priority)
    }

    /// Returns the next node in the chain, if any
    pub fn next(&self) -> Option<&LinkNode<V, P>> {
        self.next.as_deref()
    }

    /// Replaces the tail of the chain, returning the previous one
    pub fn set_next(&mut self, node: Box<LinkNode<V, P>>) -> Option<Box<LinkNode<V, P>>> {
        self.next.replace(node)
    }

    /// Detaches and returns the tail of the chain
    pub fn take_next(&mut self) -> Option<Box<LinkNode<V, P>>> {
        self.next.take()
    }
}

/// Borrowing iterator over the values of a chain
#[derive(Debug)]
pub struct ChainIter<'a, V, P> {
    pub(crate) current: Option<&'a LinkNode<V, P>>,
}

impl<'a, V, P> Iterator for ChainIter<'a, V, P> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next();
            node.value()
        })
    }
}
