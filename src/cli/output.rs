use crate::case::Case;
use crate::error::ParseFormatError;
use crate::ConvertResult;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    line: usize,
    input: String,
    output: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonReport {
    source: String,
    case: Case,
    converted: usize,
    unchanged: usize,
    conversions: Vec<JsonConversion>,
}

#[derive(Debug, Serialize)]
struct JsonWords<'a> {
    input: &'a str,
    words: Vec<&'a str>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonCase {
    case: Case,
    output: String,
}

#[derive(Debug, Serialize)]
struct JsonAllCases<'a> {
    input: &'a str,
    cases: Vec<JsonCase>,
}

/// One compact document per line, so several inputs stream as JSON Lines.
fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("failed to serialize output: {}", e),
    }
}

/// Report the lines changed in `source`.
pub fn print_report(
    source: &str,
    case: Case,
    result: &ConvertResult,
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_report(source, result, colored_output),
        OutputFormat::Json => print_json_report(source, case, result),
    }
}

fn print_text_report(source: &str, result: &ConvertResult, colored_output: bool) {
    if result.conversions.is_empty() {
        return;
    }

    if colored_output {
        println!("\n{}", source.bold().underline());
    } else {
        println!("\n{}", source);
    }

    for conversion in &result.conversions {
        let line_info = conversion.line.to_string();

        if colored_output {
            println!(
                "  {} {} {} {}",
                line_info.blue().bold(),
                conversion.input.red(),
                "→".dimmed(),
                conversion.output.green().bold()
            );
        } else {
            println!("  {} {} → {}", line_info, conversion.input, conversion.output);
        }
    }
}

fn print_json_report(source: &str, case: Case, result: &ConvertResult) {
    let conversions = result
        .conversions
        .iter()
        .map(|c| JsonConversion {
            line: c.line,
            input: c.input.clone(),
            output: c.output.clone(),
        })
        .collect();

    print_json(&JsonReport {
        source: source.to_string(),
        case,
        converted: result.converted_count,
        unchanged: result.unchanged_count,
        conversions,
    });
}

/// Print the words `input` splits into.
pub fn print_words(input: &str, words: &[&str], colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => {
            let shown = words
                .iter()
                .map(|w| {
                    if colored_output {
                        w.cyan().to_string()
                    } else {
                        w.to_string()
                    }
                })
                .collect::<Vec<_>>();
            let sep = if colored_output {
                " | ".dimmed().to_string()
            } else {
                " | ".to_string()
            };
            println!("{}", shown.join(&sep));
        }
        OutputFormat::Json => print_json(&JsonWords {
            input,
            words: words.to_vec(),
        }),
    }
}

/// Print `input` in every case.
pub fn print_all_cases(input: &str, colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => {
            for case in Case::ALL {
                let name = format!("{:<16}", case.name());
                if colored_output {
                    println!("{} {}", name.dimmed(), case.apply(input).green());
                } else {
                    println!("{} {}", name, case.apply(input));
                }
            }
        }
        OutputFormat::Json => print_json(&JsonAllCases {
            input,
            cases: Case::ALL
                .into_iter()
                .map(|case| JsonCase {
                    case,
                    output: case.apply(input),
                })
                .collect(),
        }),
    }
}

pub fn print_fix_summary(total_converted: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_converted == 0 {
        if colored {
            println!("{}", "Nothing to convert!".green().bold());
        } else {
            println!("Nothing to convert!");
        }
    } else {
        let line_word = if total_converted == 1 { "line" } else { "lines" };
        if colored {
            println!(
                "{} {} {} converted in {} {}",
                "✓".green().bold(),
                total_converted.to_string().green().bold(),
                line_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        } else {
            println!(
                "✓ {} {} converted in {} {}",
                total_converted,
                line_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!(
            "yaml".parse::<OutputFormat>(),
            Err(ParseFormatError("yaml".to_string()))
        );
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::default().to_string(), "text");
    }
}
