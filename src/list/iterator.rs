use core::iter::FusedIterator;

use super::{Arena, NodeId, Payload};

/// An iterator over the values of a [`SkipList`](super::SkipList) in ascending order.
///
/// It walks the bottom level only, which holds every occurrence. The iterator
/// borrows the list, so the list cannot be changed while it is alive. The current
/// state of the iterator can be saved by cloning it.
pub struct Iter<'a, T> {
  arena: &'a Arena<T>,
  next: Option<NodeId>,
}

impl<'a, T> Iter<'a, T> {
  #[inline]
  pub(super) const fn new(arena: &'a Arena<T>, next: Option<NodeId>) -> Self {
    Self { arena, next }
  }
}

impl<T> Clone for Iter<'_, T> {
  #[inline]
  fn clone(&self) -> Self {
    Self {
      arena: self.arena,
      next: self.next,
    }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    let arena = self.arena;
    let node = arena.get(self.next?);
    self.next = node.forward;

    match &node.payload {
      Payload::Value(value) => Some(value),
      // level 0 holds tower bases only
      Payload::Head | Payload::Promoted(_) => {
        self.next = None;
        None
      }
    }
  }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for Iter<'_, T> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_list().entries(self.clone()).finish()
  }
}
