//! Static-snapshot page driver: each navigation is one HTTP GET and every
//! query runs against the fetched markup.

pub mod browser;
pub mod page;

pub use browser::HttpBrowser;
pub use page::HttpPage;
