#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok((_, remaining)) = jsonlax::parse_partial(data) {
        // The remainder must be a suffix view of the original input.
        assert!(data.ends_with(remaining));
        if remaining.is_empty() {
            assert!(jsonlax::parse(data).is_ok());
        } else {
            assert!(jsonlax::parse(data).is_err());
        }
    } else {
        assert!(jsonlax::parse(data).is_err());
    }
});
