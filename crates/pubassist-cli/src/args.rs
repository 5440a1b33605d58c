use crate::types::{LogLevel, OutputFormat, write_value_name};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use pubassist_types::RecordId;
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pubassist")]
#[command(about = "Search articles, journals and authors, and chart keyword popularity", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $PUBASSIST_CONFIG, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override api.base_url
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Suggest articles related to a text
    Articles {
        /// Text to match (title, abstract or draft)
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file
        #[arg(long)]
        file: Option<PathBuf>,

        #[arg(long, default_value = "1", value_parser = positive())]
        page: usize,
    },

    /// Suggest journals for a text, with their rankings
    Journals {
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        #[arg(long)]
        file: Option<PathBuf>,

        #[arg(long, default_value = "1", value_parser = positive())]
        page: usize,
    },

    /// Search authors by name
    Authors {
        query: String,

        #[arg(long, default_value = "1", value_parser = positive())]
        page: usize,
    },

    /// Show an author's articles and co-referrers
    Author { id: RecordId },

    /// Keyword popularity per year, optionally within some publications
    Hype {
        #[arg(long = "keyword", required = true)]
        keywords: Vec<String>,

        #[arg(long = "publication")]
        publications: Vec<String>,
    },

    /// Debounced lookup over lines read from stdin; prints the latest result
    Suggest { target: SuggestTarget },

    /// Print the page strip for a position without contacting the API
    Strip {
        #[arg(long, value_parser = positive())]
        page: usize,

        #[arg(long)]
        items: usize,

        /// Defaults to browse.page_size
        #[arg(long, value_parser = positive())]
        page_size: Option<usize>,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config file
    Init {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SuggestTarget {
    Keywords,
    Publications,
}

impl fmt::Display for SuggestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value_name(self, f)
    }
}

/// Page numbers and sizes start at 1.
fn positive() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..)
}
