use thiserror::Error;

/// Substring start position at or beyond the end of the buffer.
///
/// The one hard, caller-facing failure in this crate: conversion always
/// degrades instead of erroring, but a bad range is a programming error and
/// surfaces as this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("substring start {pos} out of range for length {len}")]
pub struct OutOfRange {
    /// Requested start position.
    pub pos: usize,
    /// Logical length of the buffer at the time of the call.
    pub len: usize,
}
