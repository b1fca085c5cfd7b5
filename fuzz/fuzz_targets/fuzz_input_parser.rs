#![no_main]

use droplet_web::input_parser::parse_input_event;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        // Must never panic on arbitrary input.
        let _ = parse_input_event(json);
    }
});
