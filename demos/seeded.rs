use skipset::{
  rand::{rngs::SmallRng, SeedableRng},
  Options, SkipList,
};

pub fn key(i: usize) -> String {
  format!("{:05}", i)
}

fn main() {
  const N: usize = 1000;

  let mut a = Options::new().with_capacity(2 * N).with_seed(42).build();
  let mut b = SkipList::with_rng(SmallRng::seed_from_u64(42));
  for i in (0..N).rev() {
    a.insert(key(i));
    b.insert(key(i));
  }

  // Same seed, same insertions: the towers come out identical.
  assert_eq!(a.to_string(), b.to_string());
  println!("{} values on {} levels", a.len(), a.height());

  for i in 0..N {
    assert_eq!(a.get(key(i).as_str()), Some(&key(i)), "broken: {i}");
  }
}
