use num_traits::Float;

/// Tentatively improves `dist[v]` through the edge `u -> v` of weight `w`.
///
/// Sets `dist[v] = dist[u] + w` and returns `true` when that is strictly
/// smaller than the current value; otherwise leaves `dist` untouched and
/// returns `false`. Every distance update in the crate goes through here, so
/// `dist` is monotonically non-increasing.
#[inline]
pub fn relax<W: Float>(u: usize, v: usize, w: W, dist: &mut [W]) -> bool {
    let candidate = dist[u] + w;
    if candidate < dist[v] {
        dist[v] = candidate;
        true
    } else {
        false
    }
}
