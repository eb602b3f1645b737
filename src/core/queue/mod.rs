use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use serde::{Serialize, Deserialize};
use crate::core::container::BackingContainer;
use crate::core::error::{QueueError, QueueOp};

/// FIFO adapter over a backing sequential container.
///
/// Elements go in at the back and come out at the front. Everything is
/// delegated to `C`; the queue keeps no state of its own, so `len()` is always
/// the container's length.
///
/// Serializes as the bare container, front first.
#[derive(Serialize, Deserialize)]
#[serde(
    transparent,
    bound(serialize = "C: Serialize", deserialize = "C: Deserialize<'de>")
)]
pub struct Queue<T, C = VecDeque<T>> {
    container: C,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T, C: BackingContainer<T> + Default> Queue<T, C> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self::from_container(C::default())
    }
}

impl<T, C: BackingContainer<T>> Queue<T, C> {
    /// Adopt an existing container as the queue storage.
    ///
    /// The container's front is taken as the oldest element. Nothing checks
    /// that the caller filled it in that order. Clone the container first to
    /// keep the original.
    pub fn from_container(container: C) -> Self {
        Self { container, _marker: PhantomData }
    }

    /// Give the storage back, front first
    pub fn into_container(self) -> C {
        self.container
    }

    pub fn front(&self) -> Result<&T, QueueError> {
        self.container.front().ok_or(QueueError::empty(QueueOp::Front))
    }

    pub fn front_mut(&mut self) -> Result<&mut T, QueueError> {
        self.container.front_mut().ok_or(QueueError::empty(QueueOp::Front))
    }

    pub fn back(&self) -> Result<&T, QueueError> {
        self.container.back().ok_or(QueueError::empty(QueueOp::Back))
    }

    pub fn back_mut(&mut self) -> Result<&mut T, QueueError> {
        self.container.back_mut().ok_or(QueueError::empty(QueueOp::Back))
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Same as [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Append an item at the back. Pass `value.clone()` to keep a copy.
    pub fn push(&mut self, value: T) {
        let len_before = self.container.len();
        self.container.push_back(value);
        debug_assert_eq!(self.container.len(), len_before + 1, "push must grow the queue by one");
    }

    /// Build an item from `args` and place it at the back.
    ///
    /// The value is constructed once and moved into its slot; it is never
    /// cloned.
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.emplace_with(|| T::from(args))
    }

    /// Like [`emplace`](Self::emplace), with the item produced by `make`
    pub fn emplace_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.container.emplace_back(make())
    }

    /// Remove and return the front item.
    ///
    /// On an empty queue nothing changes and `EmptyQueueAccess` is returned.
    pub fn pop(&mut self) -> Result<T, QueueError> {
        let len_before = self.container.len();
        let item = self.container.pop_front().ok_or(QueueError::empty(QueueOp::Pop))?;
        debug_assert_eq!(self.container.len(), len_before - 1, "pop must shrink the queue by one");
        Ok(item)
    }

    /// Exchange contents with `other` without touching the elements
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.container, &mut other.container);
    }

    /// Backing container, read-only.
    ///
    /// This is the way to iterate or inspect the queue beyond front and back.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Backing container, mutable.
    ///
    /// Anything done through this reference bypasses FIFO discipline: the
    /// caller is responsible for keeping the front-to-back order meaningful.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }
}

impl<T, C: BackingContainer<T> + Default> Default for Queue<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: BackingContainer<T>> From<C> for Queue<T, C> {
    fn from(container: C) -> Self {
        Self::from_container(container)
    }
}

impl<T, C: Clone> Clone for Queue<T, C> {
    fn clone(&self) -> Self {
        Self { container: self.container.clone(), _marker: PhantomData }
    }

    fn clone_from(&mut self, source: &Self) {
        self.container.clone_from(&source.container);
    }
}

impl<T, C: PartialEq> PartialEq for Queue<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
    }
}

impl<T, C: Eq> Eq for Queue<T, C> {}

impl<T, C: Debug> Debug for Queue<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Queue").field("container", &self.container).finish()
    }
}
