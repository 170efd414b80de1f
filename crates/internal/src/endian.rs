//! Big-endian unsigned integer encodings

use alloc::vec::Vec;

/// Minimal big-endian encoding of an unsigned integer.
///
/// Leading zero bytes are dropped; the value zero keeps a single `0x00`
/// byte so the result is never empty.
pub fn be_trim_leading_zeros(bytes: &[u8]) -> Vec<u8> {
    match bytes.iter().position(|&b| b != 0) {
        Some(first) => bytes[first..].to_vec(),
        None => alloc::vec![0u8],
    }
}

/// Left-pads a big-endian integer to exactly `N` bytes.
///
/// Returns `None` when the input is longer than `N`.
pub fn be_left_pad<const N: usize>(bytes: &[u8]) -> Option<[u8; N]> {
    if bytes.len() > N {
        return None;
    }
    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(bytes);
    Some(out)
}
