//! Two-way bridging between UTF-8 byte strings and [`WideString`].

use bstr::BString;

use crate::{
    byte_order::{self, ByteOrder},
    transcode::{TranscodeSession, Transcoder, Utf8Transcoder},
    wide::WideString,
};

/// Standard byte-order mark, as a 16-bit unit.
pub const BOM: u16 = 0xFEFF;

/// The mark as read from a stream of the opposite byte order.
pub const BOM_SWAPPED: u16 = 0xFFFE;

/// Converter between UTF-8 byte strings and wide strings.
///
/// Carries the process-wide byte-order configuration (detect once with
/// [`ByteOrder::native`], then reuse) and a transcoding backend. Conversion
/// never fails from the caller's point of view: when the backend is missing
/// or rejects the input, [`WideCodec::decode`] degrades to a byte-widening
/// fallback instead of returning an error.
#[derive(Debug, Clone)]
pub struct WideCodec<T = Utf8Transcoder> {
    order: ByteOrder,
    transcoder: T,
}

impl WideCodec {
    /// Codec for the host byte order with the default UTF-8 backend.
    #[must_use]
    pub fn native() -> Self {
        Self::with_transcoder(ByteOrder::native(), Utf8Transcoder)
    }
}

impl<T: Transcoder> WideCodec<T> {
    /// Codec with an explicit byte order and backend.
    #[must_use]
    pub fn with_transcoder(order: ByteOrder, transcoder: T) -> Self {
        Self { order, transcoder }
    }

    /// The byte order this codec was configured with.
    #[must_use]
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Converts a UTF-8 byte string into a wide string. Never fails:
    ///
    /// - if the backend cannot open, every input byte is zero-extended to
    ///   one unit; this loses multi-byte sequences but still yields a usable
    ///   string;
    /// - if the backend fails mid-stream, the failure goes to the log and
    ///   the same widening applies; partial backend output is never
    ///   returned.
    ///
    /// On the successful path, a leading byte-order mark (either
    /// orientation) is stripped, and on big-endian hosts non-ASCII units
    /// are byte-swapped to correct backends that ignore their declared
    /// order on that class of host. The swap must not run anywhere else.
    /// The result is the zero-terminated run of the output: units after an
    /// embedded zero are dropped, as with any terminated wide-string
    /// source.
    #[must_use]
    pub fn decode(&self, input: &[u8]) -> WideString {
        if input.is_empty() {
            return WideString::new();
        }

        let Some(mut session) = self.transcoder.open(self.order) else {
            return widen(input);
        };
        let transcoded = session.transcode(input);
        drop(session);

        let mut units = match transcoded {
            Ok(units) => units,
            Err(err) => {
                log::warn!("transcoding failed ({err}); widening bytes instead");
                return widen(input);
            }
        };

        let skip_mark = matches!(units.first(), Some(&(BOM | BOM_SWAPPED)));
        if self.order == ByteOrder::Big {
            byte_order::swap_non_ascii(&mut units);
        }

        WideString::from_terminated(&units[usize::from(skip_mark)..])
    }

    /// Narrows a wide string to a byte string.
    ///
    /// Every unit above `0xFF` becomes `?`; the rest narrow to their low
    /// byte. Deliberately not a UTF-8 encoder: the output feeds
    /// width-limited legacy consumers, and the substitution is silent,
    /// total, and deterministic. Narrowing never fails and uses no backend.
    #[must_use]
    pub fn encode(&self, text: &WideString) -> BString {
        text.as_units()
            .iter()
            .map(|&unit| u8::try_from(unit).unwrap_or(b'?'))
            .collect()
    }
}

/// Zero-extends each byte to one unit: the degraded path when no backend
/// output is available.
fn widen(input: &[u8]) -> WideString {
    input.iter().map(|&b| u16::from(b)).collect()
}
