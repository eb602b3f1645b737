use std::collections::{LinkedList, VecDeque};

/// Storage contract a [`Queue`](crate::core::queue::Queue) delegates to.
///
/// Only the sequence operations live here. Construction, cloning, swapping
/// and equality come from `Default`, `Clone`, `std::mem::swap` and
/// `PartialEq`, and are required by the queue only where it needs them.
pub trait BackingContainer<T> {
    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    fn front(&self) -> Option<&T>;

    fn front_mut(&mut self) -> Option<&mut T>;

    fn back(&self) -> Option<&T>;

    fn back_mut(&mut self) -> Option<&mut T>;

    /// Append an element after the current back
    fn push_back(&mut self, value: T);

    /// Remove and return the current front
    fn pop_front(&mut self) -> Option<T>;

    /// Append an element and hand back a reference to it in its final slot
    fn emplace_back(&mut self, value: T) -> &mut T {
        self.push_back(value);
        self.back_mut()
            .expect("container must hold a back element right after push_back")
    }
}

impl<T> BackingContainer<T> for VecDeque<T> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }

    fn front_mut(&mut self) -> Option<&mut T> {
        VecDeque::front_mut(self)
    }

    fn back(&self) -> Option<&T> {
        VecDeque::back(self)
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        VecDeque::back_mut(self)
    }

    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value)
    }

    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }
}

impl<T> BackingContainer<T> for LinkedList<T> {
    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn front(&self) -> Option<&T> {
        LinkedList::front(self)
    }

    fn front_mut(&mut self) -> Option<&mut T> {
        LinkedList::front_mut(self)
    }

    fn back(&self) -> Option<&T> {
        LinkedList::back(self)
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        LinkedList::back_mut(self)
    }

    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value)
    }

    fn pop_front(&mut self) -> Option<T> {
        LinkedList::pop_front(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<C: BackingContainer<u32> + Default>() {
        let mut c = C::default();
        assert!(c.is_empty());
        assert_eq!(c.front(), None);
        assert_eq!(c.back(), None);

        c.push_back(1);
        *c.emplace_back(2) += 10;
        assert_eq!(c.len(), 2);
        assert_eq!(c.front(), Some(&1));
        assert_eq!(c.back(), Some(&12));

        *c.front_mut().unwrap() = 7;
        assert_eq!(c.pop_front(), Some(7));
        assert_eq!(c.pop_front(), Some(12));
        assert_eq!(c.pop_front(), None);
        assert!(c.is_empty());
    }

    #[test]
    fn vec_deque_satisfies_contract() {
        exercise::<VecDeque<u32>>();
    }

    #[test]
    fn linked_list_satisfies_contract() {
        exercise::<LinkedList<u32>>();
    }
}
