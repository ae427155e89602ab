use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::{self, output::OutputFormat};
use recase::{split_words, Case, Config, Converter};
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert identifiers between naming conventions", long_about = None)]
struct Cli {
    /// Words or identifiers to convert (reads stdin when none and no --file)
    #[arg(value_name = "WORDS")]
    words: Vec<String>,

    /// Target case: camel, pascal, snake, screaming-snake, kebab, screaming-kebab
    #[arg(short, long, env = "RECASE_CASE")]
    case: Option<Case>,

    /// Convert files line by line
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Rewrite files in place instead of printing them
    #[arg(short, long, requires = "files")]
    in_place: bool,

    /// Lines matching this pattern are left unchanged (regex)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print the words each input splits into
    #[arg(long, conflicts_with_all = ["all", "in_place"])]
    split: bool,

    /// Print each input in every case
    #[arg(long, conflicts_with = "in_place")]
    all: bool,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.case, cli.format, cli.ignore_pattern.clone())?;
    let use_color = !cli.no_color && config.format == OutputFormat::Text;
    if !use_color {
        colored::control::set_override(false);
    }

    if !cli.files.is_empty() {
        return convert_files(&cli, &config, use_color);
    }

    let inputs = if cli.words.is_empty() {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    } else {
        cli.words.clone()
    };

    let converter = Converter::new(&config);
    for input in &inputs {
        if cli.split {
            cli::output::print_words(input, &split_words(input), use_color, &config.format);
        } else if cli.all {
            cli::output::print_all_cases(input, use_color, &config.format);
        } else {
            match config.format {
                OutputFormat::Text => {
                    let output = converter.convert_line(input).unwrap_or_else(|| input.clone());
                    println!("{}", output);
                }
                OutputFormat::Json => {
                    let result = converter.convert_text(input);
                    cli::output::print_report(input, config.case, &result, use_color, &config.format);
                }
            }
        }
    }

    Ok(())
}

fn convert_files(cli: &Cli, config: &Config, use_color: bool) -> Result<()> {
    let converter = Converter::new(config);
    let mut total_converted = 0;
    let mut converted_files = Vec::new();
    let mut missing = Vec::new();

    for file_path in &cli.files {
        if !file_path.exists() {
            missing.push(file_path.display().to_string());
            continue;
        }

        if cli.split || cli.all {
            let content = std::fs::read_to_string(file_path)
                .with_context(|| format!("Failed to read file: {}", file_path.display()))?;
            for line in content.lines().filter(|l| !l.trim().is_empty()) {
                let line = line.trim();
                if cli.split {
                    cli::output::print_words(line, &split_words(line), use_color, &config.format);
                } else {
                    cli::output::print_all_cases(line, use_color, &config.format);
                }
            }
            continue;
        }

        let result = converter.convert_file(file_path, cli.in_place)?;
        total_converted += result.converted_count;
        converted_files.push(file_path);

        let source = file_path.display().to_string();
        if cli.in_place || config.format == OutputFormat::Json {
            cli::output::print_report(&source, config.case, &result, use_color, &config.format);
        } else {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(result.output.as_bytes())
                .context("Failed to write output")?;
        }
    }

    if cli.in_place && config.format == OutputFormat::Text && !converted_files.is_empty() {
        cli::output::print_fix_summary(total_converted, &converted_files, use_color);
    }

    if !missing.is_empty() {
        bail!("File not found: {}", missing.join(", "));
    }

    Ok(())
}
