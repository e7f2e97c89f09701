#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = redfin_scraper::domain::engagement::match_engagement(text);
        let _ = redfin_scraper::domain::engagement::diagnostic_window(text);
    }
});
