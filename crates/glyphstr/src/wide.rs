//! The 16-bit code-unit buffer backing all user-visible text.

use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Index};

use crate::error::OutOfRange;

/// An owned, growable sequence of 16-bit code units.
///
/// Storage is an explicit-length buffer holding exactly the logical content.
/// The trailing zero terminator of classic wide-string APIs exists only at
/// the boundaries: [`WideString::from_terminated`] consumes one, and the
/// decode side of [`crate::WideCodec`] wraps one. Inside the type, position
/// `i` is storage element `i` and [`WideString::len`] is the element count,
/// with no off-by-one to maintain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WideString {
    units: Vec<u16>,
}

impl WideString {
    /// Length value returned by the search methods when no match exists.
    ///
    /// Larger than any representable length, so it can never be confused
    /// with a valid index. Callers compare against this constant instead of
    /// a magic number.
    pub const NPOS: usize = usize::MAX;

    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Copies a slice of units as logical content.
    #[must_use]
    pub fn from_units(units: &[u16]) -> Self {
        Self {
            units: units.to_vec(),
        }
    }

    /// Copies units from a zero-terminated source, stopping at (and
    /// excluding) the first zero unit.
    ///
    /// The whole slice is taken when no zero unit is present; an empty slice
    /// produces an empty buffer.
    #[must_use]
    pub fn from_terminated(source: &[u16]) -> Self {
        let end = source.iter().position(|&u| u == 0).unwrap_or(source.len());
        Self::from_units(&source[..end])
    }

    /// Number of code units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// `true` when the buffer holds no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The code units, in order.
    ///
    /// This is the accessor the rendering layer walks for glyph lookup.
    #[must_use]
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Returns the unit at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u16> {
        self.units.get(index).copied()
    }

    /// Returns a new buffer with at most `n` units starting at `pos`.
    ///
    /// `n` is clamped to the remaining length; pass [`WideString::NPOS`] for
    /// "the rest of the string".
    ///
    /// # Errors
    ///
    /// [`OutOfRange`] when `pos >= self.len()`, including any `substr` call
    /// on an empty buffer.
    pub fn substr(&self, pos: usize, n: usize) -> Result<Self, OutOfRange> {
        let len = self.len();
        if pos >= len {
            return Err(OutOfRange { pos, len });
        }
        let n = n.min(len - pos);
        Ok(Self::from_units(&self.units[pos..pos + n]))
    }

    /// Appends a single unit.
    pub fn push(&mut self, unit: u16) {
        self.units.push(unit);
    }

    /// Appends the contents of `other`. Appending an empty buffer is a
    /// no-op.
    pub fn append(&mut self, other: &WideString) {
        self.units.extend_from_slice(&other.units);
    }
}

/// Direct unit access for glyph lookup.
///
/// Checked: indexing at or past `len()` panics with the standard slice
/// bounds message. Use [`WideString::get`] for the non-panicking form.
impl Index<usize> for WideString {
    type Output = u16;

    fn index(&self, index: usize) -> &u16 {
        &self.units[index]
    }
}

impl Add<&WideString> for WideString {
    type Output = WideString;

    fn add(mut self, rhs: &WideString) -> WideString {
        self.append(rhs);
        self
    }
}

impl AddAssign<&WideString> for WideString {
    fn add_assign(&mut self, rhs: &WideString) {
        self.append(rhs);
    }
}

impl AddAssign<u16> for WideString {
    fn add_assign(&mut self, unit: u16) {
        self.push(unit);
    }
}

impl Extend<u16> for WideString {
    fn extend<I: IntoIterator<Item = u16>>(&mut self, iter: I) {
        self.units.extend(iter);
    }
}

impl FromIterator<u16> for WideString {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<u16>> for WideString {
    fn from(units: Vec<u16>) -> Self {
        Self { units }
    }
}

/// Collects the UTF-16 encoding of a string slice.
///
/// Application byte strings normally go through [`crate::WideCodec::decode`],
/// which adds mark stripping and degraded-mode fallbacks; this impl is the
/// direct encoding, convenient for literals.
impl From<&str> for WideString {
    fn from(text: &str) -> Self {
        text.encode_utf16().collect()
    }
}
