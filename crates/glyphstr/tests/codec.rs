//! End-to-end checks of the public conversion and search surface.

#![allow(missing_docs)]

use glyphstr::{
    ByteOrder, TranscodeError, TranscodeSession, Transcoder, WideCodec, WideString,
};

/// A backend that refuses to open, standing in for a host without a usable
/// conversion facility.
struct Unavailable;

/// A backend that opens but rejects everything mid-stream.
struct Flaky;

struct FlakySession;

enum NoSession {}

impl Transcoder for Unavailable {
    type Session = NoSession;

    fn open(&self, _order: ByteOrder) -> Option<NoSession> {
        None
    }
}

impl TranscodeSession for NoSession {
    fn transcode(&mut self, _input: &[u8]) -> Result<Vec<u16>, TranscodeError> {
        match *self {}
    }
}

impl Transcoder for Flaky {
    type Session = FlakySession;

    fn open(&self, _order: ByteOrder) -> Option<FlakySession> {
        Some(FlakySession)
    }
}

impl TranscodeSession for FlakySession {
    fn transcode(&mut self, input: &[u8]) -> Result<Vec<u16>, TranscodeError> {
        Err(TranscodeError {
            offset: input.len() / 2,
        })
    }
}

#[test]
fn dialogue_line_flows_through_the_pipeline() {
    let codec = WideCodec::native();

    // Resource files hand the subsystem UTF-8, mark and all.
    let line = codec.decode("\u{FEFF}Bertrand: ★ café key".as_bytes());
    assert_eq!(line.len(), "Bertrand: ★ café key".chars().count());

    // The rendering layer addresses units directly.
    let colon = line.find_unit(u16::from(b':'), 0);
    assert_ne!(colon, WideString::NPOS);
    let speaker = line.substr(0, colon).unwrap();
    assert_eq!(speaker, WideString::from("Bertrand"));

    let rest = line.substr(colon + 2, WideString::NPOS).unwrap();
    assert_eq!(rest.len(), line.len() - colon - 2);

    // Width-limited legacy output narrows: é fits the single-byte range,
    // the star does not.
    assert_eq!(codec.encode(&rest), &b"? caf\xE9 key"[..]);
}

#[test]
fn both_degraded_paths_produce_the_same_widening() {
    let input = "naïve".as_bytes();

    let unavailable = WideCodec::with_transcoder(ByteOrder::native(), Unavailable);
    let flaky = WideCodec::with_transcoder(ByteOrder::native(), Flaky);

    let from_unavailable = unavailable.decode(input);
    let from_flaky = flaky.decode(input);

    assert_eq!(from_unavailable, from_flaky);
    // One unit per input byte, zero-extended.
    assert_eq!(from_unavailable.len(), input.len());
    for (j, &byte) in input.iter().enumerate() {
        assert_eq!(from_unavailable[j], u16::from(byte));
    }
}

#[test]
fn degraded_decode_still_searches_and_slices() {
    let codec = WideCodec::with_transcoder(ByteOrder::native(), Unavailable);
    let text = codec.decode(b"item:potion");

    let sep = text.find(&WideString::from(":"), 0);
    assert_eq!(sep, 4);
    assert_eq!(
        text.substr(sep + 1, WideString::NPOS).unwrap(),
        WideString::from("potion")
    );
}

#[test]
fn concatenated_buffers_round_trip_for_ascii() {
    let codec = WideCodec::native();
    let mut text = codec.decode(b"HP ");
    text.append(&codec.decode(b"42/50"));
    text += u16::from(b'!');

    let narrowed = codec.encode(&text);
    assert_eq!(narrowed, "HP 42/50!");
    assert_eq!(codec.decode(&narrowed), text);
}
