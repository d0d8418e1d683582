use core::fmt;
use std::vec::Vec;

use super::node::{Node, NodeId};

enum Slot<T> {
  Occupied(Node<T>),
  /// A released slot, threaded into the free list.
  Vacant(Option<NodeId>),
}

/// Slot storage for every node of a skiplist.
///
/// Nodes are addressed by [`NodeId`] handles instead of pointers, so a node can be
/// referenced from its predecessor and from the twin one level above without any
/// ownership ambiguity. Released slots are recycled by later allocations.
pub(crate) struct Arena<T> {
  slots: Vec<Slot<T>>,
  free: Option<NodeId>,
  occupied: usize,
}

impl<T> Arena<T> {
  #[inline]
  pub(crate) fn with_capacity(cap: usize) -> Self {
    Self {
      slots: Vec::with_capacity(cap),
      free: None,
      occupied: 0,
    }
  }

  /// Returns the number of live nodes, sentinels included.
  #[inline]
  pub(crate) const fn occupied(&self) -> usize {
    self.occupied
  }

  /// Returns the number of slots the arena can hold without reallocating.
  #[inline]
  pub(crate) fn capacity(&self) -> usize {
    self.slots.capacity()
  }

  pub(crate) fn allocate(&mut self, node: Node<T>) -> NodeId {
    self.occupied += 1;

    if let Some(id) = self.free {
      let slot = &mut self.slots[id.index()];
      self.free = match slot {
        Slot::Vacant(next) => *next,
        Slot::Occupied(_) => unreachable!("free list points at occupied slot {id:?}"),
      };
      *slot = Slot::Occupied(node);
      return id;
    }

    let index = match u32::try_from(self.slots.len()) {
      Ok(index) => index,
      Err(_) => panic!("arena cannot address more than {} nodes", u32::MAX),
    };
    self.slots.push(Slot::Occupied(node));
    NodeId::new(index)
  }

  /// Releases the slot, returning the node that lived in it.
  pub(crate) fn release(&mut self, id: NodeId) -> Node<T> {
    let slot = core::mem::replace(&mut self.slots[id.index()], Slot::Vacant(self.free));
    match slot {
      Slot::Occupied(node) => {
        self.free = Some(id);
        self.occupied -= 1;
        node
      }
      Slot::Vacant(_) => unreachable!("double release of node {id:?}"),
    }
  }

  #[inline]
  pub(crate) fn get(&self, id: NodeId) -> &Node<T> {
    match &self.slots[id.index()] {
      Slot::Occupied(node) => node,
      Slot::Vacant(_) => unreachable!("access to released node {id:?}"),
    }
  }

  #[inline]
  pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
    match &mut self.slots[id.index()] {
      Slot::Occupied(node) => node,
      Slot::Vacant(_) => unreachable!("access to released node {id:?}"),
    }
  }

  /// Drops every node while keeping the allocation around.
  #[inline]
  pub(crate) fn clear(&mut self) {
    self.slots.clear();
    self.free = None;
    self.occupied = 0;
  }
}

impl<T> fmt::Debug for Arena<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Arena")
      .field("cap", &self.capacity())
      .field("slots", &self.slots.len())
      .field("occupied", &self.occupied)
      .finish()
  }
}
