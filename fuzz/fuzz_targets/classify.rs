//! Fuzz target for line classification
//!
//! Feeds arbitrary lines to the classifier and the outbound sanitizer; both
//! must return without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        if input.len() > tmi_proto::line::MAX_LINE_LEN {
            return;
        }

        // A line no shape accepts must come back verbatim
        if let tmi_proto::Message::ParseError(err) = tmi_proto::classify(input) {
            assert_eq!(err.raw, input);
        }

        let _ = tmi_proto::TmiCodec::sanitize(input.to_string());
    }
});
