use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "geoaudit",
    version,
    about = "SEO and generative-engine visibility scoring for scraped web pages"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Use this config file instead of ./geoaudit.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full audit on one scrape record
    Analyze(AnalyzeCommand),
    /// Score the twelve AI platform visibility factors
    Visibility(VisibilityCommand),
    /// Generate content suggestions
    Suggest(SuggestCommand),
    /// Compare two scrape records
    Compare(CompareCommand),
    /// Show stored reports
    History(HistoryCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Scrape record JSON file, or `-` for stdin
    pub input: String,
    /// URL recorded on the report (defaults to the input name)
    #[arg(long)]
    pub url: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long)]
    pub no_seo: bool,
    #[arg(long)]
    pub no_geo: bool,
    #[arg(long)]
    pub no_suggestions: bool,
    #[arg(long)]
    pub no_visibility: bool,
    /// Persist the report in the storage directory
    #[arg(long)]
    pub save: bool,
}

#[derive(Args)]
pub struct VisibilityCommand {
    pub input: String,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct SuggestCommand {
    pub input: String,
    /// Score the improvement tiers against this value instead of the GEO score
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub ai_score: Option<u8>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct CompareCommand {
    pub input1: String,
    pub input2: String,
    #[arg(long)]
    pub url1: Option<String>,
    #[arg(long)]
    pub url2: Option<String>,
    /// Include the twelve-factor visibility scores in the comparison
    #[arg(long)]
    pub with_visibility: bool,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct HistoryCommand {
    /// Latest report for this URL
    #[arg(long, conflicts_with = "id")]
    pub url: Option<String>,
    /// Report with this id
    #[arg(long)]
    pub id: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Sarif,
}
