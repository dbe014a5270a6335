#![no_main]

use libfuzzer_sys::fuzz_target;
use shepherd::domain::value_objects::SafePath;
use std::path::Component;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(path) = SafePath::new(s) {
            // Accepted paths never leave the project root
            assert!(path
                .as_path()
                .components()
                .all(|c| matches!(c, Component::Normal(_))));
        }
    }
});
