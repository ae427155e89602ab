pub mod compose;
pub mod fold;
pub mod tokenizer;

pub use compose::{
    camel_case, kebab_case, pascal_case, screaming_kebab_case, screaming_snake_case, snake_case,
};
pub use tokenizer::{split_words, word_ranges};

use crate::error::ParseCaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Case {
    /// `userName`
    Camel,
    /// `UserName`
    Pascal,
    /// `user_name`
    #[default]
    Snake,
    /// `USER_NAME`
    ScreamingSnake,
    /// `user-name`
    Kebab,
    /// `USER-NAME`
    ScreamingKebab,
}

impl Case {
    pub const ALL: [Case; 6] = [
        Case::Camel,
        Case::Pascal,
        Case::Snake,
        Case::ScreamingSnake,
        Case::Kebab,
        Case::ScreamingKebab,
    ];

    pub fn apply(self, s: &str) -> String {
        match self {
            Case::Camel => camel_case(s),
            Case::Pascal => pascal_case(s),
            Case::Snake => snake_case(s),
            Case::ScreamingSnake => screaming_snake_case(s),
            Case::Kebab => kebab_case(s),
            Case::ScreamingKebab => screaming_kebab_case(s),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
            Case::ScreamingSnake => "screaming-snake",
            Case::Kebab => "kebab",
            Case::ScreamingKebab => "screaming-kebab",
        }
    }
}

impl FromStr for Case {
    type Err = ParseCaseError;

    /// Accepts the kebab-case name in any ASCII case, with `_` allowed in place
    /// of `-` (`SCREAMING_SNAKE`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = kebab_case(s);
        Case::ALL
            .into_iter()
            .find(|case| case.name() == normalized)
            .ok_or_else(|| ParseCaseError(s.to_string()))
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
