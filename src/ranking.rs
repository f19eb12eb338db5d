//! Ordering of scan results by signal strength.

use alloc::vec::Vec;

use crate::config::MAX_NETWORKS;
use crate::directory::NetworkDirectory;

/// Clamps a reported network count to what the directory actually holds and
/// to [`MAX_NETWORKS`].
pub fn clamp_count<D: NetworkDirectory + ?Sized>(directory: &D, n: usize) -> usize {
    let clamped = n.min(directory.len()).min(MAX_NETWORKS);
    if clamped != n {
        defmt::warn!(
            "network count {} clamped to {} (directory holds {})",
            n,
            clamped,
            directory.len()
        );
    }
    clamped
}

/// Returns the indices `0..n` ordered by descending signal strength.
///
/// Each strength is read once before sorting. Networks with equal strength
/// stay in discovery order, lowest index first.
pub fn rank_by_signal<D: NetworkDirectory + ?Sized>(directory: &D, n: usize) -> Vec<usize> {
    let n = clamp_count(directory, n);

    let mut keyed: Vec<(i8, usize)> = (0..n)
        .map(|index| (directory.signal_strength(index), index))
        .collect();
    keyed.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

    keyed.into_iter().map(|(_, index)| index).collect()
}
