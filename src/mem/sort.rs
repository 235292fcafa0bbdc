//! In-place sorting of fixed-point buffers.
//!
//! [`sort`] orders a whole buffer ascending. The partial sorts only invest
//! work into the first `k` positions: they leave the `k` smallest elements at
//! the front in ascending order and make no promise about the rest, which is
//! what top-`k` selections need.

/// Sorts `a` ascending in place. Not stable.
#[inline]
pub fn sort<T: Ord>(a: &mut [T]) {
    a.sort_unstable();
}

/// Moves the `k` smallest elements of `a` to the front, ascending.
///
/// Positions `k..` end up holding the remaining elements in unspecified
/// order.
pub fn partial_sort<T: Ord + Copy>(a: &mut [T], k: usize) {
    precondition!(k <= a.len(), "k = {k} exceeds length {}", a.len());
    if k == 0 {
        return;
    }

    for i in 1..k {
        let value = a[i];
        insert_ascending(&mut a[..=i], value);
    }

    for i in k..a.len() {
        let value = a[i];
        if value < a[k - 1] {
            a[i] = a[k - 1];
            insert_ascending(&mut a[..k], value);
        }
    }
}

/// Like [`partial_sort`] but also records in `idx[..k]` where each of the
/// selected elements originally sat.
///
/// Elements at `k..` are left untouched, so `a` is no longer a permutation of
/// its input; `idx` is the authoritative result.
///
/// # Panics
/// Panics if `idx` is shorter than `k`.
pub fn partial_sort_indexed<T: Ord + Copy>(a: &mut [T], idx: &mut [usize], k: usize) {
    precondition!(k <= a.len(), "k = {k} exceeds length {}", a.len());
    assert!(idx.len() >= k, "index buffer shorter than k");
    if k == 0 {
        return;
    }

    for i in 0..k {
        let value = a[i];
        let pos = insert_ascending(&mut a[..=i], value);
        insert_origin(&mut idx[..=i], pos, i);
    }

    for i in k..a.len() {
        let value = a[i];
        if value < a[k - 1] {
            let pos = insert_ascending(&mut a[..k], value);
            insert_origin(&mut idx[..k], pos, i);
        }
    }
}

/// Inserts `value` into the ascending `run` after any equal elements,
/// shifting the tail right and dropping the last slot. Returns the position.
#[inline]
fn insert_ascending<T: Ord + Copy>(run: &mut [T], value: T) -> usize {
    let last = run.len() - 1;
    let pos = run[..last].partition_point(|&v| v <= value);
    run.copy_within(pos..last, pos + 1);
    run[pos] = value;
    pos
}

/// Mirrors an [`insert_ascending`] at `pos` in the index buffer.
#[inline]
fn insert_origin(idx: &mut [usize], pos: usize, origin: usize) {
    let last = idx.len() - 1;
    idx.copy_within(pos..last, pos + 1);
    idx[pos] = origin;
}

#[cfg(test)]
mod tests {
    use super::{partial_sort, partial_sort_indexed, sort};

    #[test]
    fn sorts_ascending() {
        let mut values = [5i16, -3, 9, 0, 1, i16::MIN, i16::MAX, 0];
        sort(&mut values);
        assert_eq!(values, [i16::MIN, -3, 0, 0, 1, 5, 9, i16::MAX]);
    }

    #[test]
    fn partial_sort_keeps_a_permutation() {
        let mut values = [10i32, 3, 5, 7, 2, 8, 1];
        partial_sort(&mut values, 3);

        assert_eq!(&values[..3], &[1, 2, 3]);
        let mut rest = values;
        rest.sort_unstable();
        assert_eq!(rest, [1, 2, 3, 5, 7, 8, 10]);
    }

    #[test]
    fn partial_sort_of_everything_is_a_sort() {
        let mut values = [4u16, 1, 3, 2];
        partial_sort(&mut values, 4);
        assert_eq!(values, [1, 2, 3, 4]);
        partial_sort(&mut values, 0);
        assert_eq!(values, [1, 2, 3, 4]);
    }

    #[test]
    fn indexed_partial_sort_tracks_origins() {
        let mut values = [10, 3, 5, 7, 2];
        let original = values;
        let mut idx = [0usize; 3];

        partial_sort_indexed(&mut values, &mut idx, 3);

        assert_eq!(&values[..3], &[2, 3, 5]);
        assert_eq!(idx, [4, 1, 2]);
        assert_eq!(&values[3..], &original[3..]);
    }

    #[test]
    fn indexed_partial_sort_keeps_equal_elements_in_order() {
        let mut values = [4i32, 1, 4, 1, 0];
        let mut idx = [0usize; 4];

        partial_sort_indexed(&mut values, &mut idx, 4);

        assert_eq!(&values[..4], &[0, 1, 1, 4]);
        assert_eq!(idx, [4, 1, 3, 0]);
    }

    #[test]
    fn indexed_partial_sort_single_slot() {
        let mut values = [42i16, -7, 13];
        let mut idx = [0usize; 1];

        partial_sort_indexed(&mut values, &mut idx, 1);

        assert_eq!(values[0], -7);
        assert_eq!(idx[0], 1);
    }
}
