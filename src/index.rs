use num_traits::Unsigned;

/// Index width used for triangle and intersection storage.
///
/// Implemented for `u16`, `u32`, and `usize` so callers can pick the narrowest
/// type their vertex counts allow, the same knob the upstream earcut crate
/// exposes for its triangle buffers.
pub trait Index: Copy + Unsigned {
    /// Cast to `usize` for slab indexing.
    fn into_usize(self) -> usize;
    /// Cast from a `usize` slab index.
    fn from_usize(v: usize) -> Self;
}

impl Index for u16 {
    fn into_usize(self) -> usize {
        self as usize
    }
    fn from_usize(v: usize) -> Self {
        v as Self
    }
}

impl Index for u32 {
    fn into_usize(self) -> usize {
        self as usize
    }
    fn from_usize(v: usize) -> Self {
        v as Self
    }
}

impl Index for usize {
    fn into_usize(self) -> usize {
        self
    }
    fn from_usize(v: usize) -> Self {
        v
    }
}
