use crate::data_structures::link_node::{ChainIter, LinkNode};

/// LIFO work-list over a chain of [`LinkNode`]s
///
/// The top of the stack is the head of the chain; every push links the new
/// node in front of the previous top.
#[derive(Debug)]
pub struct Stack<V> {
    /// Most recently pushed node
    top: Option<Box<LinkNode<V>>>,

    /// Number of nodes in the chain
    len: usize,
}

impl<V> Stack<V> {
    /// Creates an empty stack
    pub fn new() -> Self {
        Stack { top: None, len: 0 }
    }

    /// Pushes a value on top of the stack
    pub fn push(&mut self, value: V) {
        let node = LinkNode::with_next(value, self.top.take());
        self.top = Some(Box::new(node));
        self.len += 1;
    }

    /// Removes the top node and returns its value, or `None` when empty
    pub fn pop(&mut self) -> Option<V> {
        self.top.take().map(|mut node| {
            self.top = node.take_next();
            self.len -= 1;
            node.into_value()
        })
    }

    /// Returns the top value without removing it
    pub fn top(&self) -> Option<&V> {
        self.top.as_deref().map(LinkNode::value)
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterates from the top of the stack to the bottom
    pub fn iter(&self) -> ChainIter<'_, V, ()> {
        ChainIter {
            current: self.top.as_deref(),
        }
    }
}

impl<V> Default for Stack<V> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<V> Drop for Stack<V> {
    // Unlink iteratively so a long chain does not recurse once per node
    fn drop(&mut self) {
        let mut current = self.top.take();
        while let Some(mut node) = current {
            current = node.take_next();
        }
    }
}
