//! Fuzz target for the program loader.
//!
//! This target feeds arbitrary strings to the .ls8 text loader to find
//! edge cases, panics, and crashes in parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ls8_emu::loader;

fuzz_target!(|data: &[u8]| {
    // Try to interpret the data as UTF-8
    if let Ok(source) = std::str::from_utf8(data) {
        // We don't care about errors - just ensure no panics
        let _ = loader::load_source(source);
    }

    // Also try loading with lossy UTF-8 conversion
    // This exercises more edge cases in string handling
    let lossy_source = String::from_utf8_lossy(data);
    let _ = loader::load_source(&lossy_source);
});
