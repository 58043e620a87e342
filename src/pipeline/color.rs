use crate::types::Rgb;

/// Foreground color from the first three digest bytes, as R, G, B.
///
/// Panics if `hash` has fewer than three bytes. A [`Digest`](crate::types::Digest)
/// always has sixteen, so this only fires on a caller bug.
pub fn pick_color(hash: &[u8]) -> Rgb {
    assert!(
        hash.len() >= 3,
        "pick_color needs at least 3 hash bytes, got {}",
        hash.len()
    );
    Rgb::new(hash[0], hash[1], hash[2])
}
