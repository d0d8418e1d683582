use core::fmt;

/// A handle to a node slot in the [`Arena`](crate::arena::Arena).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct NodeId(u32);

impl NodeId {
  #[inline]
  pub(crate) const fn new(index: u32) -> Self {
    Self(index)
  }

  #[inline]
  pub(crate) const fn index(self) -> usize {
    self.0 as usize
  }
}

impl fmt::Debug for NodeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// What a node holds in its value position.
#[derive(Debug)]
pub(crate) enum Payload<T> {
  /// The per-level sentinel. Sorts before every real value.
  Head,
  /// The base of a tower. Only level 0 nodes own their value.
  Value(T),
  /// A node above level 0, comparing through the base of its tower.
  Promoted(NodeId),
}

#[derive(Debug)]
pub(crate) struct Node<T> {
  pub(crate) payload: Payload<T>,
  /// Next node on the same level.
  pub(crate) forward: Option<NodeId>,
  /// The twin one level below. Set once at creation and never changed.
  pub(crate) down: Option<NodeId>,
}

impl<T> Node<T> {
  #[inline]
  pub(crate) const fn head(forward: Option<NodeId>, down: Option<NodeId>) -> Self {
    Self {
      payload: Payload::Head,
      forward,
      down,
    }
  }

  #[inline]
  pub(crate) const fn new(
    payload: Payload<T>,
    forward: Option<NodeId>,
    down: Option<NodeId>,
  ) -> Self {
    Self {
      payload,
      forward,
      down,
    }
  }

  #[inline]
  pub(crate) const fn is_head(&self) -> bool {
    matches!(self.payload, Payload::Head)
  }

  /// Consumes the node, returning the value if it is the base of a tower.
  #[inline]
  pub(crate) fn into_value(self) -> Option<T> {
    match self.payload {
      Payload::Value(value) => Some(value),
      Payload::Head | Payload::Promoted(_) => None,
    }
  }
}
