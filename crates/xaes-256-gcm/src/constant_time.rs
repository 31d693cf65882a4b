//! Constant-time byte operations.
//!
//! Execution time depends only on slice lengths, never on content.

/// Constant-time byte-wise XOR.
///
/// Computes `out[i] = a[i] ^ b[i]` for all i, in constant time.
///
/// # Panics
///
/// Panics if `a.len()` != `b.len()` or `a.len()` != `out.len()`.
pub fn ct_xor(a: &[u8], b: &[u8], out: &mut [u8]) {
    assert_eq!(a.len(), b.len());
    assert_eq!(a.len(), out.len());

    for ((o, x), y) in out.iter_mut().zip(a).zip(b) {
        *o = x ^ y;
    }
}
