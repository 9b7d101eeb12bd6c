use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated through Box rather than raw alloc calls, because Box has the special
// property that dereferencing it allows a value to be moved off the heap.

/// A copyable pointer to a heap-allocated [`Node`]. All accessors hand out unbounded lifetimes;
/// the list's ownership discipline is what keeps them honest.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the pointed-to node off the heap, deallocating it. The value, prev and next fields
    /// remain usable from the returned [`Node`]. Any other [`NodeRef`] to this node is left
    /// dangling, so the list must unlink it before anything dereferences it again.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by Box::leak in from_node and, per the list's ownership
        // of its nodes, has not been reclaimed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is alive for as long as the list owns it.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: The node is alive for as long as the list owns it.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is alive for as long as the list owns it.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is alive for as long as the list owns it.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is alive for as long as the list owns it.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is alive for as long as the list owns it.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
