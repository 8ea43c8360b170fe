//! Fuzz target for single-line adjacency declaration parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use polyset::loader::fuzz_parse_adjacency_line;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let _ = fuzz_parse_adjacency_line(line);
});
