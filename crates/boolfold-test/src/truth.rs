//! Truth-table enumeration

/// Every boolean vector of length `width`, most significant condition first.
///
/// Yields `2^width` rows, starting from all-`false`.
pub fn truth_table(width: u32) -> impl Iterator<Item = Vec<bool>> {
    assert!(width < 64, "truth table too wide: {width}");
    (0u64..(1u64 << width)).map(move |bits| {
        (0..width)
            .rev()
            .map(|shift| (bits >> shift) & 1 == 1)
            .collect()
    })
}
