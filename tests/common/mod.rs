#![allow(dead_code)]

use core::fmt::Debug;

use qkernels::Complex;

/// Asserts two buffers are bit-identical, naming the first differing index.
#[track_caller]
pub fn assert_bit_exact<T: PartialEq + Debug>(expected: &[T], actual: &[T]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "length mismatch: expected {} values, got {}",
        expected.len(),
        actual.len()
    );
    if let Some((index, (want, got))) = expected
        .iter()
        .zip(actual)
        .enumerate()
        .find(|(_, (want, got))| want != got)
    {
        panic!("mismatch at index {index}: expected {want:?}, got {got:?}");
    }
}

/// Splits a complex buffer into interleaved `re, im` pairs for comparison.
pub fn interleave<T: Copy>(values: &[Complex<T>]) -> Vec<T> {
    values.iter().flat_map(|c| [c.re, c.im]).collect()
}

/// Real-valued view of a radix-R buffer, used for tolerance checks.
pub fn to_real(values: &[i16], radix: u32) -> Vec<f64> {
    values
        .iter()
        .map(|&v| qkernels::to_f64(v, radix))
        .collect()
}
