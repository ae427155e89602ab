use crate::ascii::is_space;
use crate::case::Case;
use crate::{Config, ConvertResult, Conversion};
use anyhow::{Context, Result};
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Applies one [`Case`] to text, line by line.
#[derive(Debug, Clone)]
pub struct Converter {
    case: Case,
    ignore_patterns: Vec<Regex>,
}

enum Line<'a> {
    Kept(&'a str),
    Converted(Conversion, String),
}

impl Converter {
    pub fn new(config: &Config) -> Self {
        // Compile ignore patterns
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => tracing::warn!("Invalid regex pattern '{}': {}", pattern, e),
            }
        }

        Self {
            case: config.case,
            ignore_patterns,
        }
    }

    pub fn case(&self) -> Case {
        self.case
    }

    /// Convert a single line. Leading and trailing whitespace is kept; `None`
    /// when the line is blank or ignored.
    pub fn convert_line(&self, line: &str) -> Option<String> {
        let bytes = line.as_bytes();
        let start = bytes.iter().position(|&b| !is_space(b))?;
        let end = bytes.iter().rposition(|&b| !is_space(b))? + 1;

        if self.should_ignore(line) {
            return None;
        }

        let converted = self.case.apply(&line[start..end]);
        Some(format!("{}{}{}", &line[..start], converted, &line[end..]))
    }

    /// Convert every line of `content`. Line terminators are preserved.
    pub fn convert_text(&self, content: &str) -> ConvertResult {
        let lines: Vec<&str> = content.split_inclusive('\n').collect();

        let converted: Vec<Line<'_>> = lines
            .par_iter()
            .enumerate()
            .map(|(idx, &raw)| {
                let (body, terminator) = split_terminator(raw);
                match self.convert_line(body) {
                    Some(output) if output != body => Line::Converted(
                        Conversion {
                            line: idx + 1,
                            input: body.to_string(),
                            output: output.clone(),
                        },
                        output + terminator,
                    ),
                    _ => Line::Kept(raw),
                }
            })
            .collect();

        let mut result = ConvertResult {
            output: String::with_capacity(content.len()),
            ..Default::default()
        };
        for line in converted {
            match line {
                Line::Kept(raw) => {
                    result.unchanged_count += 1;
                    result.output.push_str(raw);
                }
                Line::Converted(conversion, text) => {
                    result.converted_count += 1;
                    result.output.push_str(&text);
                    result.conversions.push(conversion);
                }
            }
        }

        result
    }

    /// Convert a file, writing it back when `in_place` is set and a line
    /// changed.
    pub fn convert_file(&self, file_path: &Path, in_place: bool) -> Result<ConvertResult> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let result = self.convert_text(&content);
        tracing::debug!(
            path = %file_path.display(),
            case = %self.case,
            converted = result.converted_count,
            unchanged = result.unchanged_count,
            "converted file"
        );

        if in_place && result.converted_count > 0 {
            fs::write(file_path, &result.output)
                .with_context(|| format!("Failed to write file: {}", file_path.display()))?;
        }

        Ok(result)
    }

    fn should_ignore(&self, line: &str) -> bool {
        self.ignore_patterns.iter().any(|pattern| pattern.is_match(line))
    }
}

/// Split `"text\r\n"` into `("text", "\r\n")`.
fn split_terminator(raw: &str) -> (&str, &str) {
    let body_len = raw
        .strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .map_or(raw.len(), str::len);
    raw.split_at(body_len)
}
