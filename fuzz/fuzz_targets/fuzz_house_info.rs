#![no_main]
use libfuzzer_sys::fuzz_target;
use url::Url;

fuzz_target!(|data: &[u8]| {
    if let Ok(markup) = std::str::from_utf8(data)
        && let Ok(origin) = Url::parse("https://www.redfin.com")
    {
        let _ = redfin_scraper::pipeline::house_info::extract_house_info(markup, &origin);
    }
});
