use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// This implementation uses Box rather than alloc to allocate nodes on the heap, because Box has
// the special property that dereferencing it allows a value to be moved out of the heap.

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Link<T>,
    pub(crate) next: Link<T>,
}

/// A copyable handle to a heap-allocated [`Node`]. The list owns each node through exactly one
/// reachable NodePtr chain; splicing moves these handles between lists without touching the nodes
/// themselves, which is what keeps spliced-node identity stable.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub(crate) fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the Node back off of the heap, releasing its allocation.
    ///
    /// # Safety
    /// The caller must ensure this handle came from [`NodePtr::from_node`] and that no other copy
    /// of it is used afterwards.
    pub(crate) unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by Box::leak in from_node and the caller guarantees
        // exclusive use.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// Drops the Node and releases its allocation without reading the value out.
    ///
    /// # Safety
    /// Same contract as [`NodePtr::take_node`].
    pub(crate) unsafe fn drop_node(self) {
        // SAFETY: The pointer was created by Box::leak in from_node and the caller guarantees
        // exclusive use.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) });
    }

    // The accessors below return with a free lifetime, which the borrowing methods on LinkedList
    // immediately rebind to the lifetime of the list itself.

    pub(crate) fn value<'a>(&self) -> &'a T {
        // SAFETY: The pointer is valid for the lifetime of the list that owns the node.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub(crate) fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: The pointer is valid for the lifetime of the list that owns the node.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub(crate) fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: The pointer is valid for the lifetime of the list that owns the node.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub(crate) fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The pointer is valid for the lifetime of the list that owns the node. Link
        // mutation goes through the raw pointer, never through an & to the node.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub(crate) fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The pointer is valid for the lifetime of the list that owns the node.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub(crate) fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The pointer is valid for the lifetime of the list that owns the node. Link
        // mutation goes through the raw pointer, never through an & to the node.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
