// src/config.rs
use crate::error::AppError;
use crate::types::ValidationError;
use clap::Parser;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Input file, or "-" to read from stdin
    pub input: String,

    /// Input format: 'raw' (one block body) or 'json' (page export).
    /// Inferred from a .json extension when omitted.
    #[arg(long)]
    pub format: Option<String>,

    /// Output file for the canonical text (optional)
    #[arg(short, long)]
    pub output_file: Option<String>,

    /// Copy the canonical text to the clipboard
    #[arg(short = 'b', long, default_value_t = false)]
    pub clipboard: bool,

    /// Pipe mode - write canonical text to stdout only, no status output
    #[arg(short = 'p', long, default_value_t = false)]
    pub pipe: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Where the raw content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// A printable name for logs and parse-error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// How the input should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// The whole input is one block body.
    Raw,
    /// The input is a JSON page export.
    Json,
}

impl InputFormat {
    /// Resolves the format from an explicit flag, falling back to the
    /// file extension, then to raw.
    fn resolve(flag: Option<&str>, source: &InputSource) -> Result<Self, ValidationError> {
        match flag {
            Some("raw") => Ok(Self::Raw),
            Some("json") => Ok(Self::Json),
            Some(other) => Err(ValidationError::UnknownInputFormat(other.to_string())),
            None => match source {
                InputSource::File(path)
                    if path.extension().is_some_and(|ext| ext == "json") =>
                {
                    Ok(Self::Json)
                }
                _ => Ok(Self::Raw),
            },
        }
    }
}

/// Resolved pipeline configuration — validated and ready to drive all
/// three stages.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub source: InputSource,
    pub format: InputFormat,
    pub output_file: Option<PathBuf>,
    pub clipboard: bool,
    pub pipe: bool,
    #[allow(dead_code)] // Consumed before resolution by the logging setup
    pub verbose: bool,
}

impl PipelineConfig {
    /// Resolves a complete pipeline configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        if cli.input.trim().is_empty() {
            return Err(AppError::MissingConfiguration(
                "no input file given (use '-' for stdin)".to_string(),
            ));
        }

        let source = if cli.input == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(&cli.input))
        };

        let format = InputFormat::resolve(cli.format.as_deref(), &source)?;

        Ok(PipelineConfig {
            source,
            format,
            output_file: cli.output_file.map(PathBuf::from),
            clipboard: cli.clipboard,
            pipe: cli.pipe,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(input: &str, format: Option<&str>) -> CommandLineInput {
        CommandLineInput {
            input: input.to_string(),
            format: format.map(str::to_string),
            output_file: None,
            clipboard: false,
            pipe: false,
            verbose: false,
        }
    }

    #[test]
    fn dash_means_stdin() {
        let config = PipelineConfig::resolve(cli("-", None)).unwrap();
        assert_eq!(config.source, InputSource::Stdin);
        assert_eq!(config.format, InputFormat::Raw);
    }

    #[test]
    fn json_extension_implies_json_format() {
        let config = PipelineConfig::resolve(cli("pages.json", None)).unwrap();
        assert_eq!(config.format, InputFormat::Json);
    }

    #[test]
    fn explicit_format_wins_over_extension() {
        let config = PipelineConfig::resolve(cli("pages.json", Some("raw"))).unwrap();
        assert_eq!(config.format, InputFormat::Raw);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(PipelineConfig::resolve(cli("notes.md", Some("xml"))).is_err());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(PipelineConfig::resolve(cli("  ", None)).is_err());
    }
}
