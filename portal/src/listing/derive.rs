use std::cmp::Ordering;

/// Filters `master` with `keep` and stably sorts the survivors with `compare`.
///
/// Records that compare equal keep their master-list order.
///
/// # Examples
///
/// ```
/// use portal::listing::derive_list;
///
/// let master = [5, 2, 8, 3, 6];
/// let evens = derive_list(&master, |n| n % 2 == 0, |a, b| a.cmp(b));
/// assert_eq!(evens, vec![&2, &6, &8]);
/// ```
pub fn derive_list<'a, T, P, C>(master: &'a [T], keep: P, compare: C) -> Vec<&'a T>
where
    P: Fn(&T) -> bool,
    C: Fn(&T, &T) -> Ordering,
{
    let mut derived: Vec<&T> = master.iter().filter(|record| keep(record)).collect();
    derived.sort_by(|a, b| compare(a, b));
    derived
}
