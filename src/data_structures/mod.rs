pub mod binary_heap;
pub mod link_node;
pub mod queue;
pub mod stack;

pub use binary_heap::{BinaryHeap, HeapMode};
pub use link_node::LinkNode;
pub use queue::Queue;
pub use stack::Stack;
