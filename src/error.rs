use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown case '{0}' (expected one of: camel, pascal, snake, screaming-snake, kebab, screaming-kebab)")]
pub struct ParseCaseError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format '{0}' (expected text or json)")]
pub struct ParseFormatError(pub String);
