//! Slide a fixed-width window across a line of text, the way a marquee
//! widget would, narrowing each frame for terminal output.

use glyphstr::{WideCodec, WideString};

const WINDOW: usize = 12;

fn main() {
    let codec = WideCodec::native();
    let banner = codec.decode("★ Valdorian Chronicles — Press Start ★".as_bytes());

    for start in 0..banner.len().saturating_sub(WINDOW) {
        let frame = banner
            .substr(start, WINDOW)
            .expect("start stays inside the banner");
        println!("|{}|", codec.encode(&frame));
    }

    let marker = WideString::from("Press");
    match banner.find(&marker, 0) {
        WideString::NPOS => println!("prompt not found"),
        at => println!("prompt begins at unit {at}"),
    }
}
