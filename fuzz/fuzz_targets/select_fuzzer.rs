#![no_main]

use libfuzzer_sys::fuzz_target;
use qkernels::mem::{kth_min, median, sort, try_kth_min};
use qkernels::KernelError;

const MAX_VALUES: usize = 512;

fn read_values(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .take(MAX_VALUES)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let Some((&rank, payload)) = data.split_first() else {
        return;
    };

    let values = read_values(payload);
    if values.is_empty() {
        let mut empty = values;
        assert_eq!(try_kth_min(&mut empty, 0), Err(KernelError::EmptyInput));
        return;
    }

    let mut reference = values.clone();
    sort(&mut reference);

    let k = usize::from(rank) % values.len();
    let mut buffer = values.clone();
    let selected = kth_min(&mut buffer, k);
    assert_eq!(selected, reference[k]);
    assert!(buffer[..k].iter().all(|&v| v <= selected));
    assert!(buffer[k + 1..].iter().all(|&v| v >= selected));

    let mut buffer = values.clone();
    assert_eq!(median(&mut buffer), reference[(values.len() - 1) / 2]);

    let mut buffer = values;
    let out_of_range = buffer.len();
    assert!(try_kth_min(&mut buffer, out_of_range).is_err());
});
