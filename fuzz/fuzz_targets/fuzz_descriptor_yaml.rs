#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Bad descriptors must be rejected with an error, never a panic
        if let Ok(descriptor) =
            shepherd::infrastructure::config::parse_descriptor(content, Path::new("fuzz.yaml"))
        {
            assert!(!descriptor.name().trim().is_empty());
        }
    }
});
