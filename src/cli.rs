use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ytscan", about = "YouTube channel scanner: video discovery and transcript probing", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List a channel's most recent videos via the Data API
    Videos {
        /// Channel ID (falls back to config, then the built-in default)
        #[arg(short, long)]
        channel: Option<String>,

        /// Maximum number of results (upstream cap is 50)
        #[arg(short = 'n', long, default_value_t = 5)]
        max_results: u32,

        /// Print records as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },

    /// Scrape video IDs from a channel's public /videos page
    Scrape {
        #[arg(short, long)]
        channel: Option<String>,
    },

    /// Check whether a video has an English transcript
    Check {
        /// Video URL or bare 11-character video ID
        video: String,
    },

    /// Fetch a video's English transcript as plain text
    Fetch {
        /// Video URL or bare 11-character video ID
        video: String,
    },

    /// Run the full demonstration: compare discovery methods, count
    /// transcripts, fetch an example, and stress-test the scrape path
    Demo {
        #[arg(short, long)]
        channel: Option<String>,
    },
}
