//! Recursive quicksort with Hoare partitioning.

/// Sorts `v` in place with quicksort.
///
/// See [`quick_sort_by`].
pub fn quick_sort<T: Ord + Clone>(v: &mut [T]) {
    quick_sort_by(v, |a: &T, b: &T| a.lt(b));
}

/// Sorts `v` in place with quicksort, using `is_less` as the ordering.
///
/// The pivot is a copy of the middle element, `v[len / 2]`. Two cursors walk
/// inwards from both ends, swapping pairs that sit on the wrong side of the
/// pivot until they cross; each side is then sorted recursively.
///
/// Not stable. Recursion depth depends on the data: inputs that keep
/// producing lopsided partitions recurse up to `len` levels deep and can
/// exhaust the stack for very large slices.
///
/// # Examples
///
/// ```
/// use schedule_bench::sort::quick_sort_by;
///
/// let mut v = [5, 1, 4, 2, 3];
/// quick_sort_by(&mut v, |a, b| a < b);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
pub fn quick_sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    quick_sort_recursive(v, &mut is_less);
}

fn quick_sort_recursive<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // The pivot element may be swapped away during partitioning, so compare
    // against a captured value rather than an index.
    let pivot = v[len / 2].clone();

    // `j` steps one past the left edge when the last swap happens at index 0.
    let mut i = 0usize;
    let mut j = len as isize - 1;

    loop {
        while is_less(&v[i], &pivot) {
            i += 1;
        }
        // `v[j] > pivot` is `pivot < v[j]`.
        while is_less(&pivot, &v[j as usize]) {
            j -= 1;
        }

        if i as isize <= j {
            v.swap(i, j as usize);
            i += 1;
            j -= 1;
        }

        if i as isize > j {
            break;
        }
    }

    // Everything in [0, j] is <= pivot and everything in [i, len) is >= pivot.
    if j > 0 {
        quick_sort_recursive(&mut v[..=j as usize], is_less);
    }
    if i < len {
        quick_sort_recursive(&mut v[i..], is_less);
    }
}
