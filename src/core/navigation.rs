//! Index arithmetic for stepping through the filtered view.
//!
//! All three operations wrap or stay within `[0, len)` and are no-ops at
//! `len == 1`. `len == 0` cannot occur while the placeholder invariant in
//! `state` holds; it is still surfaced as an error rather than a panic.

use std::fmt;

use rand::Rng;

#[derive(Debug, PartialEq, Eq)]
pub struct EmptyViewError;

impl fmt::Display for EmptyViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "navigation over an empty view")
    }
}

impl std::error::Error for EmptyViewError {}

pub fn next_index(current: usize, len: usize) -> Result<usize, EmptyViewError> {
    if len == 0 {
        return Err(EmptyViewError);
    }
    Ok((current + 1) % len)
}

pub fn prev_index(current: usize, len: usize) -> Result<usize, EmptyViewError> {
    if len == 0 {
        return Err(EmptyViewError);
    }
    Ok((current + len - 1) % len)
}

pub fn random_index(rng: &mut impl Rng, len: usize) -> Result<usize, EmptyViewError> {
    if len == 0 {
        return Err(EmptyViewError);
    }
    Ok(rng.gen_range(0..len))
}
