pub mod browser;
pub mod reporter;
