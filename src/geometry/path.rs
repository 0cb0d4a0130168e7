//! Binary-subdivision paths for cell vertices.
//!
//! A lifted cell doubles its vertex count, so after `k` lifts a cell has up to
//! `2^k` vertices arranged as a recursive bisection. The path of a vertex
//! records which half it falls in at every bisection step; scaffolds use it
//! to tell apart stacked wire segments that share a boundary position.

/// Path of vertex `position` within a cell of `size` vertices.
///
/// Each entry is `0` (lower half) or `1` (upper half). The digit for the
/// outermost bisection comes last. The lower half of `[0, size)` is
/// `[0, ceil(size / 2))`, so every position of a given `size` gets a path
/// of length `ceil(log2(size))`.
pub fn path_of(position: usize, size: usize) -> Vec<u8> {
    let mut digits = Vec::new();
    push_digits(position, size, &mut digits);
    digits
}

fn push_digits(position: usize, size: usize, digits: &mut Vec<u8>) {
    if size < 2 {
        return;
    }
    let half = size.div_ceil(2);
    let upper = position >= half;
    let rest = if upper { position - half } else { position };
    push_digits(rest, half, digits);
    digits.push(u8::from(upper));
}
