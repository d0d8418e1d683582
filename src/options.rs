use rand::{rngs::SmallRng, SeedableRng};

use super::SkipList;

/// Options for constructing a [`SkipList`].
#[viewit::viewit(vis_all = "pub(crate)", getters(skip), setters(skip))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
  capacity: usize,
  seed: Option<u64>,
}

impl Default for Options {
  #[inline]
  fn default() -> Options {
    Options::new()
  }
}

impl Options {
  /// Creates a new set of options with the default values.
  #[inline]
  pub const fn new() -> Self {
    Self {
      capacity: 0,
      seed: None,
    }
  }

  /// Set the number of nodes the backing arena reserves up front.
  ///
  /// Every inserted value takes one node per level its tower reaches, plus one
  /// sentinel per level, so on average a list of `n` values uses about `2n` nodes.
  ///
  /// The default capacity is `0`.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::Options;
  ///
  /// let opts = Options::new().with_capacity(1024);
  /// ```
  #[inline]
  pub const fn with_capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  /// Seed the coin flips of the list, making tower shapes reproducible.
  ///
  /// By default every list seeds its own generator from the operating system.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::Options;
  ///
  /// let opts = Options::new().with_seed(42);
  /// ```
  #[inline]
  pub const fn with_seed(mut self, seed: u64) -> Self {
    self.seed = Some(seed);
    self
  }

  /// Returns the number of nodes the arena reserves up front.
  #[inline]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the seed of the coin flips, if any.
  #[inline]
  pub const fn seed(&self) -> Option<u64> {
    self.seed
  }

  /// Creates a [`SkipList`] with these options.
  ///
  /// ## Example
  ///
  /// ```rust
  /// use skipset::Options;
  ///
  /// let mut list = Options::new().with_capacity(16).with_seed(7).build();
  /// list.insert(3);
  /// list.insert(1);
  /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3]);
  /// ```
  pub fn build<T>(self) -> SkipList<T, SmallRng> {
    let rng = match self.seed {
      Some(seed) => SmallRng::seed_from_u64(seed),
      None => SmallRng::from_os_rng(),
    };
    SkipList::with_options_and_rng(self, rng)
  }
}
