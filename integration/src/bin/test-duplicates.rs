use integration::assert_sorted;
use rand::Rng;
use skipset::SkipList;

fn main() {
  const N: usize = 200_000;
  const DISTINCT: u32 = 64;

  let mut rng = rand::rng();
  let mut counts = [0usize; DISTINCT as usize];
  let mut l = SkipList::new();

  for _ in 0..N {
    let v = rng.random_range(0..DISTINCT);
    if rng.random_bool(0.3) {
      let removed = l.remove(&v);
      assert_eq!(removed, counts[v as usize] > 0, "broken: {v}");
      if removed {
        counts[v as usize] -= 1;
      }
    } else {
      l.insert(v);
      counts[v as usize] += 1;
    }
  }

  assert_sorted(&l);
  for v in 0..DISTINCT {
    let found = l.iter_from(&v).take_while(|&&x| x == v).count();
    assert_eq!(found, counts[v as usize], "broken: {v}");
  }

  while let Some(v) = l.first().copied() {
    assert!(l.remove(&v));
  }
  assert!(l.is_empty());
  assert_eq!(l.allocated(), l.height());
}
