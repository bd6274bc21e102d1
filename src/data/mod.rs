//! Data module - survey loading, typing and recoding

pub mod codes;
pub mod columns;
mod loader;
mod recoder;
pub mod value;

pub use loader::{LoaderError, SurveyLoader};
pub use recoder::{RecodeError, Recoder, Recoding, RECODINGS};
pub use value::SurveyValue;
