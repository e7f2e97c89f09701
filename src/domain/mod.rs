pub mod card;
pub mod detail;
pub mod engagement;
pub mod status;
pub mod text;
