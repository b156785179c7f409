use crate::markers;
use crate::report::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Which report to produce for the selected factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportChoice {
    /// Doctors and examinations
    Inspections,
    /// Contraindications
    Contraindications,
    /// Both reports, one after the other
    Both,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "order-lookup")]
#[command(about = "Required examinations and contraindications for occupational hazard factors")]
#[command(version)]
pub struct CliArgs {
    /// Order data document: a file path or an http(s) URL
    /// Default: $ORDER_LOOKUP_DATA, then ./orderData.json
    #[arg(long, short = 'd', value_name = "PATH|URL")]
    pub data: Option<String>,

    /// Factor keys to select, in order (e.g. "1.2 14 23" or "1.2,14,23")
    #[arg(long, short = 'f', value_name = "KEY", num_args = 1.., value_delimiter = ',')]
    pub factors: Vec<String>,

    /// Add every factor marked with these letters (А, К, Р, Ф) after selecting
    #[arg(long, value_name = "LETTER", num_args = 1..)]
    pub add_letters: Vec<String>,

    /// Report to generate
    #[arg(long, short = 'r', value_enum, default_value = "inspections")]
    pub report: ReportChoice,

    /// List all factors and exit
    #[arg(long)]
    pub list: bool,

    /// List factors whose label contains QUERY and exit
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Output format for the report
    #[arg(long, value_enum, default_value = "console")]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write a print-ready HTML page (skipped on mobile hosts)
    #[arg(long, value_name = "PATH")]
    pub print: Option<PathBuf>,

    /// User agent of the viewing device, used to decide whether printing is offered
    /// Default: $ORDER_LOOKUP_USER_AGENT
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Start an interactive session
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Override console width for wrapping (default: auto-detect)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();

        // Split factors on whitespace to support quoted lists like '1.2 14'
        args.factors = split_words(&args.factors);
        args.add_letters = split_words(&args.add_letters);

        args
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.list && self.search.is_some() {
            return Err("Cannot specify both --list and --search".to_string());
        }

        if self.interactive && (self.list || self.search.is_some()) {
            return Err("--interactive cannot be combined with --list or --search".to_string());
        }

        if let Some(width) = self.console_width {
            if width < 20 {
                return Err("--console-width must be at least 20".to_string());
            }
        }

        self.marker_letters().map(|_| ())
    }

    /// Letters passed to --add-letters, each a single marker letter
    pub fn marker_letters(&self) -> Result<Vec<char>, String> {
        self.add_letters.iter().map(|s| parse_marker_letter(s)).collect()
    }
}

/// Parse a single marker letter, accepting lowercase input
pub fn parse_marker_letter(s: &str) -> Result<char, String> {
    let upper = s.trim().to_uppercase();
    let mut chars = upper.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if markers::is_marker_letter(c) => Ok(c),
        _ => Err(format!("Invalid marker letter '{}': expected one of А, К, Р, Ф", s)),
    }
}

fn split_words(values: &[String]) -> Vec<String> {
    values.iter().flat_map(|s| s.split_whitespace().map(|v| v.to_string())).collect()
}
