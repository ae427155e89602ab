pub mod ascii;
pub mod case;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;

pub use case::{
    camel_case, kebab_case, pascal_case, screaming_kebab_case, screaming_snake_case, snake_case,
    split_words, Case,
};
pub use config::Config;
pub use converter::Converter;
pub use error::{ParseCaseError, ParseFormatError};

#[derive(Debug, Clone, Default)]
pub struct ConvertResult {
    pub converted_count: usize,
    pub unchanged_count: usize,
    /// Changed lines only.
    pub conversions: Vec<Conversion>,
    /// The whole converted text.
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub line: usize,
    pub input: String,
    pub output: String,
}
