use skipset::Options;

fn main() {
  let mut list = Options::new().with_seed(7).build();
  for v in [5, 5, 5, 2, 9] {
    list.insert(v);
  }
  println!("{list}\n");

  assert!(list.remove(&5));
  assert_eq!(list.iter().filter(|&&v| v == 5).count(), 2);

  while list.remove(&5) {}
  assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 9]);

  // Levels emptied by removals stay around until the list is cleared.
  println!("{list}");
  println!("{} levels, {} live nodes", list.height(), list.allocated());
}
