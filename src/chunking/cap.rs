//! Per-document chunk capping.
use rand::seq::index::sample;
use rand::Rng;

/// Cap a document's chunk list at `cap` chunks (0 = unlimited).
///
/// When the list exceeds the cap, exactly `cap` chunks are kept by uniform
/// index sampling without replacement, in their original relative order.
/// Draws come from the caller's seeded rng so a fixed seed reproduces the
/// same subset. Returns the kept chunks and the number dropped.
pub fn cap_chunks<R: Rng>(chunks: Vec<String>, cap: usize, rng: &mut R) -> (Vec<String>, usize) {
    if cap == 0 || chunks.len() <= cap {
        return (chunks, 0);
    }

    let dropped = chunks.len() - cap;
    let mut keep = sample(rng, chunks.len(), cap).into_vec();
    keep.sort_unstable();

    let kept = keep.into_iter().map(|i| chunks[i].clone()).collect();
    (kept, dropped)
}
