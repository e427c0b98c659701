#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use glyphstr::{WideCodec, WideString};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    needle: Vec<u8>,
    pos: usize,
    n: usize,
}

fn exercise(input: &Input) {
    let codec = WideCodec::native();
    let wide = codec.decode(&input.text);

    let needle = codec.decode(&input.needle);
    let from = input.pos.min(wide.len());
    let found = wide.find(&needle, from);
    if found != WideString::NPOS {
        assert!(found + needle.len() <= wide.len() || needle.is_empty());
    }

    if wide.is_empty() {
        assert!(wide.substr(input.pos, input.n).is_err());
    } else {
        let sub = wide.substr(input.pos % wide.len(), input.n).unwrap();
        assert!(sub.len() <= wide.len());
    }

    let narrow = codec.encode(&wide);
    assert_eq!(narrow.len(), wide.len());

    if input.text.iter().all(|&b| b.is_ascii() && b != 0) {
        assert_eq!(codec.decode(&narrow), wide);
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = Input::arbitrary_take_rest(Unstructured::new(data)) {
        exercise(&input);
    }
});
