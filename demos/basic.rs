use skipset::SkipList;

fn main() {
  let mut list = SkipList::new();
  for v in [5, 3, 8, 1] {
    list.insert(v);
  }

  assert_eq!(list.get(&3), Some(&3));
  assert!(list.get(&9).is_none());
  println!("{list}");

  let from_four: Vec<_> = list.iter_from(&4).collect();
  assert_eq!(from_four, [&5, &8]);

  assert!(list.remove(&3));
  assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 5, 8]);
}
