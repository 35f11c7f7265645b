//! Straight insertion sort.

/// Sorts `v` in place with insertion sort.
///
/// See [`insertion_sort_by`].
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    insertion_sort_by(v, |a: &T, b: &T| a.lt(b));
}

/// Sorts `v` in place with insertion sort, using `is_less` as the ordering.
///
/// Each element is compared against its predecessors from right to left and
/// moved past every one that is strictly greater. Equal elements are never
/// moved past each other, so the sort is stable.
///
/// O(n²) comparisons in the worst case, O(n) on already sorted input. No
/// allocation.
///
/// # Examples
///
/// ```
/// use schedule_bench::sort::insertion_sort_by;
///
/// let mut v = [5, 1, 4, 2, 3];
/// insertion_sort_by(&mut v, |a, b| a < b);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
pub fn insertion_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Starting at 0 keeps the loop identical for every position; the first
    // pass finds nothing to its left.
    for i in 0..v.len() {
        let mut slot = i;
        // `a > b` is `b < a`.
        while slot > 0 && is_less(&v[i], &v[slot - 1]) {
            slot -= 1;
        }
        // Shift v[slot..i] right by one and drop v[i] into the gap.
        v[slot..=i].rotate_right(1);
    }
}
