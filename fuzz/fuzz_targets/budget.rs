#![no_main]

use libfuzzer_sys::fuzz_target;
use unitrun::cli::{HarnessOptions, resolve_config};
use unitrun::config::parse_leading_unsigned;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the lenient number parser
        let _ = parse_leading_unsigned(s);

        // Fuzz argv handling: the input split on NUL becomes the argument list
        let args: Vec<String> = std::iter::once("fuzz")
            .chain(s.split('\0'))
            .map(str::to_string)
            .collect();
        let _ = resolve_config(HarnessOptions::new(), &args, |_| Some(s.to_string()));
    }
});
