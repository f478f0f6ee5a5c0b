pub mod analyze;
pub mod groups;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use oboczne_core::{AnalysisOptions, EmptyPieces, ParseOptions, CO_OCCURRENCE_THRESHOLD};

#[derive(Parser)]
#[command(
    name = "oboczne",
    about = "Find alternative word forms from a dictionary that co-occur in a document",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report dictionary variant groups with two or more forms in the document
    Analyze {
        /// Dictionary file (UTF-8 text)
        #[arg(short, long)]
        dictionary: PathBuf,
        /// Document to check (.docx or .txt)
        #[arg(short = 'i', long)]
        document: PathBuf,
        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Minimum number of forms from one group that must co-occur
        #[arg(long, default_value_t = CO_OCCURRENCE_THRESHOLD)]
        min_found: usize,
        #[command(flatten)]
        parse: ParseArgs,
    },
    /// List the variant groups parsed from a dictionary
    Groups {
        /// Dictionary file (UTF-8 text)
        #[arg(short, long)]
        dictionary: PathBuf,
        #[command(flatten)]
        parse: ParseArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, clap::Args)]
pub struct ParseArgs {
    /// Keep forms that are empty after trimming, e.g. in "(word,, )"
    #[arg(long)]
    pub keep_empty: bool,
}

impl ParseArgs {
    pub const fn options(self) -> ParseOptions {
        ParseOptions {
            empty_pieces: if self.keep_empty {
                EmptyPieces::Keep
            } else {
                EmptyPieces::Drop
            },
        }
    }
}

pub fn analysis_options(min_found: usize, parse: ParseArgs) -> AnalysisOptions {
    AnalysisOptions::default()
        .with_min_found(min_found)
        .with_parse_options(parse.options())
}
