use core::{borrow::Borrow, cmp, fmt};

use rand::{rngs::SmallRng, Rng, RngCore};
use smallvec::SmallVec;

use super::{
  arena::Arena,
  node::{Node, NodeId, Payload},
  Options, INLINE_LEVELS, PROBABILITY,
};

mod iterator;
pub use iterator::Iter;


/// One node per level, topmost level first.
type Levels = SmallVec<[NodeId; INLINE_LEVELS]>;

/// An ordered multiset based on skiplist.
///
/// Every level is a sorted chain anchored by a head sentinel, and every level is
/// a random subset of the level below it. Searching starts at the topmost
/// sentinel and descends, giving expected `O(log n)` lookups, insertions and
/// removals without any rebalancing.
///
/// Equal values may be inserted any number of times; each insertion is a
/// separate occurrence. The element type must be totally ordered. An `Ord`
/// implementation that is inconsistent leaves the iteration order unspecified,
/// but never breaks memory safety.
///
/// The coin flips which decide how tall every tower grows come from `R`, which
/// is owned by the list. Use [`Options::with_seed`] or [`SkipList::with_rng`] to
/// get reproducible shapes.
pub struct SkipList<T, R = SmallRng> {
  arena: Arena<T>,
  /// The topmost head sentinel, `None` until the first insertion.
  top: Option<NodeId>,
  height: usize,
  len: usize,
  rng: R,
}

// --------------------------------Public Methods--------------------------------
impl<T> SkipList<T> {
  /// Creates an empty skiplist whose coin flips are seeded from the operating system.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::SkipList;
  ///
  /// let mut list = SkipList::new();
  /// list.insert("b");
  /// list.insert("a");
  /// assert_eq!(list.first(), Some(&"a"));
  /// ```
  #[inline]
  pub fn new() -> Self {
    Options::new().build()
  }
}

impl<T> Default for SkipList<T> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T, R> SkipList<T, R> {
  /// Creates an empty skiplist which draws its coin flips from `rng`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::{rand::{rngs::SmallRng, SeedableRng}, SkipList};
  ///
  /// let mut list = SkipList::with_rng(SmallRng::seed_from_u64(42));
  /// list.insert(1u64);
  /// assert!(list.contains(&1));
  /// ```
  #[inline]
  pub fn with_rng(rng: R) -> Self {
    Self::with_options_and_rng(Options::new(), rng)
  }

  #[inline]
  pub(crate) fn with_options_and_rng(opts: Options, rng: R) -> Self {
    Self {
      arena: Arena::with_capacity(opts.capacity()),
      top: None,
      height: 0,
      len: 0,
      rng,
    }
  }

  /// Returns the number of values in the skiplist, counting every occurrence.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns `true` if the skiplist holds no values.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the number of levels, which is the height of the tallest tower ever built.
  ///
  /// Levels emptied by removals are kept, so the height never decreases until
  /// [`clear`](SkipList::clear) is called.
  #[inline]
  pub const fn height(&self) -> usize {
    self.height
  }

  /// Returns the number of live nodes, head sentinels included.
  #[inline]
  pub const fn allocated(&self) -> usize {
    self.arena.occupied()
  }

  /// Returns the random source of the skiplist.
  #[inline]
  pub const fn rng(&self) -> &R {
    &self.rng
  }

  /// Returns the smallest value, or `None` if the skiplist is empty.
  #[inline]
  pub fn first(&self) -> Option<&T> {
    self.iter().next()
  }

  /// Returns the largest value, or `None` if the skiplist is empty.
  pub fn last(&self) -> Option<&T> {
    let mut last = None;
    let mut cursor = self.top;
    while let Some(mut current) = cursor {
      while let Some(next) = self.arena.get(current).forward {
        current = next;
      }
      last = Some(current);
      cursor = self.arena.get(current).down;
    }
    last.and_then(|id| self.value(id))
  }

  /// Returns an iterator over all values in ascending order.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::SkipList;
  ///
  /// let list: SkipList<_> = [5, 3, 8, 1].into_iter().collect();
  /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3, 5, 8]);
  /// ```
  pub fn iter(&self) -> Iter<'_, T> {
    let mut head = self.top;
    while let Some(down) = head.and_then(|id| self.arena.get(id).down) {
      head = Some(down);
    }
    Iter::new(&self.arena, head.and_then(|id| self.arena.get(id).forward))
  }

  /// Removes every value and every level. The random source is kept.
  pub fn clear(&mut self) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
      len = self.len,
      height = self.height,
      "clearing skiplist"
    );

    self.arena.clear();
    self.top = None;
    self.height = 0;
    self.len = 0;
  }
}

impl<T: Ord, R> SkipList<T, R> {
  /// Returns the first occurrence equal to `value`, if any.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::SkipList;
  ///
  /// let list: SkipList<String> = ["a".to_string(), "b".to_string()].into_iter().collect();
  /// assert_eq!(list.get("b").map(String::as_str), Some("b"));
  /// assert!(list.get("c").is_none());
  /// ```
  pub fn get<Q>(&self, value: &Q) -> Option<&T>
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let candidate = self.arena.get(self.boundary(value)?).forward?;
    self
      .value(candidate)
      .filter(|found| compare(*found, value).is_eq())
  }

  /// Returns `true` if at least one occurrence equal to `value` is present.
  #[inline]
  pub fn contains<Q>(&self, value: &Q) -> bool
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.get(value).is_some()
  }

  /// Returns an iterator over the values greater than or equal to `value`, in ascending order.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::SkipList;
  ///
  /// let list: SkipList<_> = [5, 3, 8, 1].into_iter().collect();
  /// assert_eq!(list.iter_from(&4).copied().collect::<Vec<_>>(), [5, 8]);
  /// ```
  pub fn iter_from<Q>(&self, value: &Q) -> Iter<'_, T>
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let start = self
      .boundary(value)
      .and_then(|id| self.arena.get(id).forward);
    Iter::new(&self.arena, start)
  }
}

impl<T: Ord, R: RngCore> SkipList<T, R> {
  /// Inserts one occurrence of `value`.
  ///
  /// The new occurrence is placed before any equal values already present.
  /// Its tower is one node high, and grows by another level for as long as a
  /// fair coin keeps landing heads, adding new levels on top of the list when
  /// it outgrows the current height.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::SkipList;
  ///
  /// let mut list = SkipList::new();
  /// list.insert(5);
  /// list.insert(5);
  /// assert_eq!(list.len(), 2);
  /// ```
  pub fn insert(&mut self, value: T) {
    let boundaries = self.boundaries(&value);
    let mut levels = boundaries.iter().rev().copied();

    let base = match levels.next() {
      Some(prev) => self.link_after(prev, Payload::Value(value), None),
      None => self.grow(Payload::Value(value), None),
    };

    let mut below = base;
    while self.coin_flip() {
      let payload = Payload::Promoted(base);
      below = match levels.next() {
        Some(prev) => self.link_after(prev, payload, Some(below)),
        None => self.grow(payload, Some(below)),
      };
    }

    self.len += 1;
  }

  /// Removes one occurrence of `value`. Returns `true` if an occurrence was removed.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::SkipList;
  ///
  /// let mut list: SkipList<_> = [1, 3, 5].into_iter().collect();
  /// assert!(list.remove(&3));
  /// assert!(!list.remove(&3));
  /// assert_eq!(list.len(), 2);
  /// ```
  #[inline]
  pub fn remove<Q>(&mut self, value: &Q) -> bool
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    self.take(value).is_some()
  }

  /// Removes one occurrence of `value` and returns it.
  ///
  /// When several equal occurrences are present, the most recently inserted one
  /// is removed, together with its whole tower.
  pub fn take<Q>(&mut self, value: &Q) -> Option<T>
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let boundaries = self.boundaries(value);
    let mut levels = boundaries.iter().rev().copied();

    let prev = levels.next()?;
    let base = self.arena.get(prev).forward?;
    match self.value(base) {
      Some(found) if compare(found, value).is_eq() => {}
      _ => return None,
    }
    self.unlink_after(prev, base);

    // The tower of `base` continues upwards only through nodes whose down link
    // is the node just removed below. Towers of equal values never cross, so
    // such a node is always the first one after the boundary.
    let mut promoted = Levels::new();
    let mut below = base;
    for prev in levels {
      match self.arena.get(prev).forward {
        Some(next) if self.arena.get(next).down == Some(below) => {
          self.unlink_after(prev, next);
          promoted.push(next);
          below = next;
        }
        _ => break,
      }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
      tower_height = promoted.len() + 1,
      "removed tower from skiplist"
    );

    for id in promoted {
      self.arena.release(id);
    }
    self.len -= 1;
    self.arena.release(base).into_value()
  }
}

impl<T, R> SkipList<T, R> {
  /// Descends from the topmost head sentinel and hands `visit` the boundary of
  /// every level, topmost level first. The boundary of a level is the rightmost
  /// node there whose value is strictly less than `target`, which is the head
  /// sentinel when no such value exists.
  fn walk<Q>(&self, target: &Q, mut visit: impl FnMut(NodeId))
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let mut cursor = self.top;
    while let Some(mut current) = cursor {
      while let Some(next) = self.arena.get(current).forward {
        match self.value(next) {
          Some(value) if compare(value, target).is_lt() => current = next,
          _ => break,
        }
      }
      visit(current);
      cursor = self.arena.get(current).down;
    }
  }

  /// Returns the boundaries of every level, topmost level first.
  #[inline]
  fn boundaries<Q>(&self, target: &Q) -> Levels
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let mut boundaries = Levels::new();
    self.walk(target, |id| boundaries.push(id));
    boundaries
  }

  /// Returns the boundary at level 0.
  #[inline]
  fn boundary<Q>(&self, target: &Q) -> Option<NodeId>
  where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
  {
    let mut bottom = None;
    self.walk(target, |id| bottom = Some(id));
    bottom
  }

  /// Returns the value a node compares by, `None` for head sentinels.
  #[inline]
  fn value(&self, id: NodeId) -> Option<&T> {
    match &self.arena.get(id).payload {
      Payload::Head => None,
      Payload::Value(value) => Some(value),
      Payload::Promoted(base) => match &self.arena.get(*base).payload {
        Payload::Value(value) => Some(value),
        Payload::Head | Payload::Promoted(_) => None,
      },
    }
  }

  /// Places a new node right after `prev`, returning it.
  fn link_after(&mut self, prev: NodeId, payload: Payload<T>, down: Option<NodeId>) -> NodeId {
    let forward = self.arena.get(prev).forward;
    let id = self.arena.allocate(Node::new(payload, forward, down));
    self.arena.get_mut(prev).forward = Some(id);
    id
  }

  /// Adds a new topmost level holding a single node, returning that node.
  fn grow(&mut self, payload: Payload<T>, down: Option<NodeId>) -> NodeId {
    let id = self.arena.allocate(Node::new(payload, None, down));
    let head = self.arena.allocate(Node::head(Some(id), self.top));
    self.top = Some(head);
    self.height += 1;

    #[cfg(feature = "tracing")]
    tracing::trace!(height = self.height, "skiplist grew a new level");

    id
  }

  /// Unlinks `node`, which must directly follow `prev`, from their level.
  #[inline]
  fn unlink_after(&mut self, prev: NodeId, node: NodeId) {
    debug_assert_eq!(self.arena.get(prev).forward, Some(node));
    let forward = self.arena.get(node).forward;
    self.arena.get_mut(prev).forward = forward;
  }
}

impl<T, R: RngCore> SkipList<T, R> {
  #[inline]
  fn coin_flip(&mut self) -> bool {
    self.rng.random_bool(PROBABILITY)
  }
}

#[inline]
fn compare<T, Q>(value: &T, target: &Q) -> cmp::Ordering
where
  T: Borrow<Q>,
  Q: Ord + ?Sized,
{
  value.borrow().cmp(target)
}

impl<'a, T, R> IntoIterator for &'a SkipList<T, R> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T: Ord, R: RngCore> Extend<T> for SkipList<T, R> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for value in iter {
      self.insert(value);
    }
  }
}

impl<T: Ord> FromIterator<T> for SkipList<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

impl<T: fmt::Debug, R> fmt::Debug for SkipList<T, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

/// Renders every level as a row, topmost level first, e.g.
///
/// ```text
/// HEAD -> 5
/// HEAD -> 1 -> 3 -> 5 -> 8
/// ```
///
/// The format is meant for humans and may change.
impl<T: fmt::Display, R> fmt::Display for SkipList<T, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut head = self.top;
    while let Some(id) = head {
      let mut cursor = Some(id);
      while let Some(node) = cursor {
        let current = self.arena.get(node);
        if current.is_head() {
          f.write_str("HEAD")?;
        } else if let Some(value) = self.value(node) {
          write!(f, " -> {value}")?;
        }
        cursor = current.forward;
      }

      head = self.arena.get(id).down;
      if head.is_some() {
        f.write_str("\n")?;
      }
    }
    Ok(())
  }
}
