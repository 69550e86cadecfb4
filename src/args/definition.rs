//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// launchgrid - A paged launcher grid for your web apps
#[derive(Parser, Debug)]
#[command(name = "launchgrid")]
#[command(version)]
#[command(about = "A paged launcher grid for your web apps", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Fetch the catalog from this URL instead of the configured one
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Filter the grid by name, description, or tag
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show this page of the grid (1-based)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Viewport width in px used to choose between compact and paged layout
    #[arg(long)]
    pub viewport_width: Option<u32>,

    /// Force the compact single-page layout
    #[arg(short, long)]
    pub compact: bool,

    /// Hide entries by id (comma-separated or space-separated)
    #[arg(long, num_args = 1..)]
    pub hide: Vec<String>,

    /// Show previously hidden entries by id (comma-separated or space-separated)
    #[arg(long, num_args = 1..)]
    pub show: Vec<String>,

    /// Open the entry with this id in the browser
    #[arg(short, long)]
    pub open: Option<String>,

    /// List hidden entries instead of the grid
    #[arg(long)]
    pub list_hidden: bool,

    /// Skip the catalog reload and show your own apps only
    #[arg(long)]
    pub offline: bool,

    /// Directory holding settings and user data (default: ~/.config/launchgrid/data)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Normalize list arguments after parsing.
    ///
    /// Output:
    /// - `hide` and `show` split on commas with blanks dropped.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.hide = super::parse_id_list(&self.hide);
        self.show = super::parse_id_list(&self.show);
        self
    }
}
