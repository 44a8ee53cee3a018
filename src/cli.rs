use clap::Parser;
use std::path::PathBuf;

use crate::finder::FinderConfig;
use crate::model::SizeMetric;
use crate::report::OutputFormat;
use crate::selector::SelectionCriterion;

#[derive(Parser, Debug)]
#[command(name = "git-largest", version, about = "List the largest files in a git repository")]
pub struct Cli {
    /// Path to the git repository
    #[arg(default_value = ".")]
    pub repo_path: PathBuf,

    /// The number of files to return. Ignored if --files-exceeding is used
    #[arg(short = 'c', long = "match-count", value_name = "N", default_value_t = 10)]
    pub match_count: usize,

    /// The cutoff amount, in KB. Files with a pack size (or physical size, with -p)
    /// larger than this will be printed
    #[arg(long = "files-exceeding", value_name = "KB", default_value_t = 0, allow_negative_numbers = true)]
    pub files_exceeding: i64,

    /// Sort by the on-disk size of the files. Default is to sort by the pack size
    #[arg(short = 'p', long = "physical-sort")]
    pub physical_sort: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Suppress status lines and progress bars
    #[arg(short, long)]
    pub quiet: bool,

    /// Print per-phase timings
    #[arg(long)]
    pub profile: bool,
}

impl Cli {
    pub fn criterion(&self) -> SelectionCriterion {
        SelectionCriterion::from_options(self.match_count, self.files_exceeding)
    }

    pub fn metric(&self) -> SizeMetric {
        SizeMetric::from_physical_flag(self.physical_sort)
    }

    pub fn finder_config(&self) -> FinderConfig {
        FinderConfig {
            criterion: self.criterion(),
            metric: self.metric(),
            verbose: !self.quiet,
            profile: self.profile,
        }
    }
}
