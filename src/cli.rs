use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "refmatch")]
#[command(about = "Match extracted references against INSPIRE ground truth and diagnose the misses")]
#[command(version = "2.0.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare one extractor result file with its INSPIRE metadata file
    Compare(CompareArgs),

    /// Categorize unmatched INSPIRE references across many papers
    Gaps(GapsArgs),
}

#[derive(Parser, Clone)]
pub struct CompareArgs {
    /// Extractor result JSON file
    pub result: String,

    /// INSPIRE metadata JSON file
    pub metadata: String,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "WARN")]
    pub log_level: String,
}

#[derive(Parser, Clone)]
pub struct GapsArgs {
    /// Analyze a single paper by arXiv ID (e.g. 0704.1500)
    #[arg(long, value_name = "ARXIV_ID")]
    pub paper: Option<String>,

    /// Only include papers with recall >= this value
    #[arg(long, value_name = "FLOAT")]
    pub min_recall: Option<f64>,

    /// Only include papers with recall <= this value
    #[arg(long, value_name = "FLOAT")]
    pub max_recall: Option<f64>,

    /// Directory containing extractor result JSON files
    #[arg(long, value_name = "DIR", default_value = "tests/fixtures/results")]
    pub results_dir: String,

    /// Directory containing INSPIRE metadata JSON files
    #[arg(long, value_name = "DIR", default_value = "tests/fixtures/metadata")]
    pub metadata_dir: String,

    /// Min journal_with_raw misses to include a paper in the per-paper table
    #[arg(long, value_name = "N", default_value = "5")]
    pub min_actionable: usize,

    /// Number of top papers to show raw citation text for
    #[arg(long, value_name = "N", default_value = "20")]
    pub top_raw: usize,

    /// Number of threads to use (0 for auto-detect)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// Also write the analysis as JSON to this file
    #[arg(long)]
    pub output_json: Option<String>,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}
