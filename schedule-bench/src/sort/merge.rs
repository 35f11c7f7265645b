//! Top-down recursive merge sort.

/// Sorts `v` in place with merge sort.
///
/// See [`merge_sort_by`].
pub fn merge_sort<T: Ord + Clone>(v: &mut [T]) {
    merge_sort_by(v, |a: &T, b: &T| a.lt(b));
}

/// Sorts `v` with merge sort, using `is_less` as the ordering.
///
/// The index range is halved at `(low + high) / 2` until single elements
/// remain, and the halves are merged back together. Ties are taken from the
/// left half first, so the sort is stable.
///
/// O(n log n) comparisons for every input. Each merge allocates a buffer the
/// size of the range it merges, freed as soon as the merge finishes.
///
/// # Examples
///
/// ```
/// use schedule_bench::sort::merge_sort_by;
///
/// let mut v = [5, 1, 4, 2, 3];
/// merge_sort_by(&mut v, |a, b| a < b);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
pub fn merge_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.is_empty() {
        return;
    }
    let high = v.len() - 1;
    merge_sort_range(v, 0, high, &mut is_less);
}

/// Sorts the inclusive range `v[low..=high]`.
fn merge_sort_range<T, F>(v: &mut [T], low: usize, high: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if low >= high {
        return;
    }
    let mid = (low + high) / 2;
    merge_sort_range(v, low, mid, is_less);
    merge_sort_range(v, mid + 1, high, is_less);
    merge(v, low, mid, high, is_less);
}

/// Merges the sorted runs `v[low..=mid]` and `v[mid + 1..=high]`.
fn merge<T, F>(v: &mut [T], low: usize, mid: usize, high: usize, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut buf = Vec::with_capacity(high + 1 - low);
    let mut left = low;
    let mut right = mid + 1;

    while left <= mid && right <= high {
        // `left <= right` is `!(right < left)`.
        if !is_less(&v[right], &v[left]) {
            buf.push(v[left].clone());
            left += 1;
        } else {
            buf.push(v[right].clone());
            right += 1;
        }
    }

    if left > mid {
        buf.extend_from_slice(&v[right..=high]);
    } else {
        buf.extend_from_slice(&v[left..=mid]);
    }

    for (dst, src) in v[low..=high].iter_mut().zip(buf) {
        *dst = src;
    }
}
