//! K-th order statistic by in-place quickselect.
//!
//! This is Wirth's selection: partition `[l, m]` around the current value at
//! `k` with two pointers that stop on elements equal to the pivot, swap, and
//! keep only the side that still contains `k`. Expected linear time,
//! quadratic in the worst case. The buffer is left partitioned around the
//! result: nothing before `k` is larger, nothing after `k` is smaller.

use log::debug;

use crate::error::KernelError;

/// Returns the `k`-th smallest element (zero-based) and leaves it at `a[k]`.
///
/// Not stable. `k` must be less than `a.len()`.
///
/// # Panics
/// Panics if `k` is out of range.
pub fn kth_min<T: Ord + Copy>(a: &mut [T], k: usize) -> T {
    precondition!(k < a.len(), "k = {k} out of range for length {}", a.len());

    let mut l = 0isize;
    let mut m = a.len() as isize - 1;
    let k_pos = k as isize;

    while l < m {
        let pivot = a[k];
        let mut i = l;
        let mut j = m;
        loop {
            while a[i as usize] < pivot {
                i += 1;
            }
            while pivot < a[j as usize] {
                j -= 1;
            }
            if i <= j {
                a.swap(i as usize, j as usize);
                i += 1;
                j -= 1;
            }
            if i > j {
                break;
            }
        }
        if j < k_pos {
            l = i;
        }
        if k_pos < i {
            m = j;
        }
    }

    a[k]
}

/// Median of `a`, taking the lower middle element for even lengths.
///
/// Reorders `a` like [`kth_min`].
///
/// # Panics
/// Panics if `a` is empty.
pub fn median<T: Ord + Copy>(a: &mut [T]) -> T {
    precondition!(!a.is_empty(), "median of an empty buffer");
    let k = (a.len() - 1) / 2;
    kth_min(a, k)
}

/// [`kth_min`] with the index checked up front.
pub fn try_kth_min<T: Ord + Copy>(a: &mut [T], k: usize) -> Result<T, KernelError> {
    if a.is_empty() {
        debug!("kth_min rejected an empty buffer");
        return Err(KernelError::EmptyInput);
    }
    if k >= a.len() {
        debug!("kth_min rejected k={k} for length {}", a.len());
        return Err(KernelError::IndexOutOfRange {
            index: k,
            len: a.len(),
        });
    }
    Ok(kth_min(a, k))
}

/// [`median`] with the empty case reported as an error.
pub fn try_median<T: Ord + Copy>(a: &mut [T]) -> Result<T, KernelError> {
    if a.is_empty() {
        debug!("median rejected an empty buffer");
        return Err(KernelError::EmptyInput);
    }
    Ok(median(a))
}

#[cfg(test)]
mod tests {
    use super::{kth_min, median, try_kth_min, try_median};
    use crate::error::KernelError;

    fn assert_partitioned(a: &[i16], k: usize) {
        let pivot = a[k];
        assert!(a[..k].iter().all(|&v| v <= pivot), "{a:?} left of {k}");
        assert!(a[k + 1..].iter().all(|&v| v >= pivot), "{a:?} right of {k}");
    }

    #[test]
    fn reference_fixture() {
        let mut data = [i16::MAX, 1_616, -1_616, i16::MIN];
        assert_eq!(kth_min(&mut data, 2), 1_616);
        assert_partitioned(&data, 2);
        assert_eq!(kth_min(&mut data, 3), i16::MAX);
        assert_partitioned(&data, 3);
        assert_eq!(kth_min(&mut data, 0), i16::MIN);
    }

    #[test]
    fn every_rank_of_a_buffer_with_duplicates() {
        let original = [5i16, -3, 5, 0, 12, -3, 7, 5, 1];
        let mut sorted = original;
        sorted.sort_unstable();
        for k in 0..original.len() {
            let mut data = original;
            assert_eq!(kth_min(&mut data, k), sorted[k], "k = {k}");
            assert_partitioned(&data, k);
        }
    }

    #[test]
    fn single_element_and_all_equal() {
        assert_eq!(kth_min(&mut [42u32], 0), 42);
        let mut same = [7i32; 6];
        assert_eq!(kth_min(&mut same, 4), 7);
    }

    #[test]
    fn median_takes_the_lower_middle() {
        assert_eq!(median(&mut [3i16, 1, 2]), 2);
        assert_eq!(median(&mut [4i16, 1, 3, 2]), 2);
        assert_eq!(median(&mut [10i32]), 10);
        assert_eq!(median(&mut [9i32, -9]), -9);
    }

    #[test]
    fn checked_entry_points_report_bad_arguments() {
        let mut data = [1i16, 2, 3];
        assert_eq!(
            try_kth_min(&mut data, 3),
            Err(KernelError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(try_kth_min::<i16>(&mut [], 0), Err(KernelError::EmptyInput));
        assert_eq!(try_median::<i32>(&mut []), Err(KernelError::EmptyInput));
        assert_eq!(try_kth_min(&mut data, 1), Ok(2));
        assert_eq!(try_median(&mut data), Ok(2));
    }
}
