use crate::types::Digest;
use md5::{Digest as _, Md5};

/// MD5 of the UTF-8 bytes of `input`, in digest order.
///
/// Every downstream stage depends on these exact bytes, so the algorithm is
/// fixed to MD5 and never configurable.
pub fn hash_input(input: &str) -> Digest {
    Md5::digest(input.as_bytes()).into()
}
