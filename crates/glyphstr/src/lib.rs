//! Fixed-width UTF-16 code-unit strings for deterministic, glyph-addressable
//! text.
//!
//! The rendering pipeline this crate serves looks text up one glyph slot at a
//! time, so it needs a string type where "position `i`" always means the same
//! storage element: [`WideString`], an owned sequence of 16-bit code units.
//! Code *units*, not code points: there is no surrogate-pair or grapheme
//! handling, by design.
//!
//! Application text arrives as UTF-8 byte strings and leaves the same way.
//! [`WideCodec`] is the bridge: [`WideCodec::decode`] turns bytes into a
//! [`WideString`] (stripping a leading byte-order mark and degrading to a
//! byte-widening fallback rather than failing when the transcoding backend is
//! unavailable or rejects the input), and [`WideCodec::encode`] narrows back
//! to a byte string, substituting `?` for anything outside the single-byte
//! range. Conversion never errors; a degraded string always beats a failure
//! propagated up through rendering code.
//!
//! ```
//! use glyphstr::{WideCodec, WideString};
//!
//! let codec = WideCodec::native();
//! let text = codec.decode("café".as_bytes());
//! assert_eq!(text.len(), 4);
//! assert_eq!(text[3], 0x00E9);
//!
//! let needle = WideString::from("fé");
//! assert_eq!(text.find(&needle, 0), 2);
//! assert_eq!(text.find_unit(b'z'.into(), 0), WideString::NPOS);
//!
//! // Narrowing keeps single-byte-range units and substitutes the rest.
//! assert_eq!(codec.encode(&text), &b"caf\xE9"[..]);
//! assert_eq!(codec.encode(&codec.decode("中文".as_bytes())), "??");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod byte_order;
mod codec;
mod error;
mod search;
mod transcode;
mod wide;


pub use byte_order::ByteOrder;
pub use codec::{BOM, BOM_SWAPPED, WideCodec};
pub use error::OutOfRange;
pub use transcode::{TranscodeError, TranscodeSession, Transcoder, Utf8Transcoder};
pub use wide::WideString;
