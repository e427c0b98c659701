//! The pluggable byte-to-unit transcoding backend.

use alloc::vec::Vec;

use thiserror::Error;

use crate::byte_order::ByteOrder;

/// Failure partway through a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid byte sequence at offset {offset}")]
pub struct TranscodeError {
    /// Byte offset of the first input byte that could not be converted.
    pub offset: usize,
}

/// A source of transcoding sessions.
///
/// Splitting `open` from the conversion itself keeps the recovery paths of
/// [`crate::WideCodec::decode`] testable: a backend may refuse to open, or
/// open and then fail mid-stream, and the codec must degrade gracefully
/// either way.
pub trait Transcoder {
    /// The scoped conversion resource produced by [`Transcoder::open`].
    type Session: TranscodeSession;

    /// Prepares a conversion producing units of the given byte order.
    ///
    /// Returns `None` when the backend cannot serve that configuration.
    fn open(&self, order: ByteOrder) -> Option<Self::Session>;
}

/// One conversion in flight.
///
/// The session is the scoped resource of the subsystem: the codec drops it
/// on every exit path, before any fallback logic runs.
pub trait TranscodeSession {
    /// Converts `input` to 16-bit units in one call.
    ///
    /// # Errors
    ///
    /// [`TranscodeError`] when the input cannot be fully converted. Any
    /// units produced before the failure are discarded by the caller.
    fn transcode(&mut self, input: &[u8]) -> Result<Vec<u16>, TranscodeError>;
}

/// The default backend: strict UTF-8 input, native-order UTF-16 output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Transcoder;

/// Session for [`Utf8Transcoder`].
#[derive(Debug)]
pub struct Utf8Session;

impl Transcoder for Utf8Transcoder {
    type Session = Utf8Session;

    fn open(&self, _order: ByteOrder) -> Option<Utf8Session> {
        // Unit values come out in native order under either configuration.
        Some(Utf8Session)
    }
}

impl TranscodeSession for Utf8Session {
    fn transcode(&mut self, input: &[u8]) -> Result<Vec<u16>, TranscodeError> {
        let mut units = Vec::with_capacity(input.len());
        let mut offset = 0;
        while offset < input.len() {
            let (ch, size) = bstr::decode_utf8(&input[offset..]);
            let Some(ch) = ch else {
                return Err(TranscodeError { offset });
            };
            let mut pair = [0u16; 2];
            units.extend_from_slice(ch.encode_utf16(&mut pair));
            offset += size;
        }
        Ok(units)
    }
}
