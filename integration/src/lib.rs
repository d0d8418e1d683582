use skipset::SkipList;

/// Only used for testing
pub fn key(i: usize) -> String {
  format!("{:08}", i)
}

/// Only used for testing
pub fn assert_sorted<T: Ord + core::fmt::Debug, R>(l: &SkipList<T, R>) {
  let mut count = 0;
  let mut prev: Option<&T> = None;
  for v in l.iter() {
    if let Some(prev) = prev {
      assert!(prev <= v, "out of order: {prev:?} > {v:?}");
    }
    prev = Some(v);
    count += 1;
  }
  assert_eq!(count, l.len());
}
