use integration::{assert_sorted, key};
use rand::seq::SliceRandom;
use skipset::Options;

fn main() {
  const N: usize = 1_000_000;

  let mut keys: Vec<String> = (0..N).map(key).collect();
  keys.shuffle(&mut rand::rng());

  let mut l = Options::new().with_capacity(2 * N).build();
  for k in &keys {
    l.insert(k.clone());
  }
  assert_eq!(l.len(), N);
  assert_sorted(&l);

  for i in 0..N {
    assert!(l.contains(key(i).as_str()), "broken: {i}");
  }

  for k in keys.iter().step_by(2) {
    assert!(l.remove(k.as_str()), "broken: {k}");
  }
  assert_eq!(l.len(), N / 2);
  assert_sorted(&l);

  for k in keys.iter().step_by(2) {
    l.insert(k.clone());
  }
  assert_eq!(l.len(), N);
  assert_sorted(&l);
  assert_eq!(l.first().map(String::as_str), Some(key(0).as_str()));
  println!("{} values on {} levels", l.len(), l.height());
}
