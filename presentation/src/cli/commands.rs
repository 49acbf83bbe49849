//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the rendered section
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only the cohorts fragment (node content)
    Html,
    /// The whole profile tree as HTML sections
    Tree,
    /// The resolved listing as JSON
    Json,
}

/// CLI arguments for cohort-profile
#[derive(Parser, Debug)]
#[command(name = "cohort-profile")]
#[command(author, version, about = "Render the Cohorts section of a user profile")]
#[command(long_about = r#"
Lists the cohorts a user belongs to, as shown on their profile page.

Hidden cohorts are only listed for site admins, dimmed. Unless the full
list is requested, at most `listing.limit` cohorts are shown followed by
a "View more" link.

Configuration files are loaded from (in priority order):
1. COHORT_PROFILE_* environment variables
2. --config <path>                         Explicit config file
3. ./cohort-profile.toml                   Project-level config
4. ~/.config/cohort-profile/config.toml    Global config

Example:
  cohort-profile --db moodle.sqlite --user 42
  cohort-profile --db moodle.sqlite --user 42 --viewer 2 --query 'showallcohorts=1'
  cohort-profile --fixture cohorts.json --user 42 --format json
"#)]
pub struct Cli {
    /// Id of the user whose profile is shown
    #[arg(short, long, value_name = "ID", required_unless_present = "show_config")]
    pub user: Option<i64>,

    /// Id of the viewing user (omit for an anonymous viewer)
    #[arg(long, value_name = "ID")]
    pub viewer: Option<i64>,

    /// Request query string, e.g. 'id=42&showallcohorts=1'
    #[arg(long, value_name = "QUERY", conflicts_with = "show_all")]
    pub query: Option<String>,

    /// Shorthand for --query 'showallcohorts=1'
    #[arg(long)]
    pub show_all: bool,

    /// SQLite database of the site (overrides database.path)
    #[arg(long, value_name = "PATH", conflicts_with = "fixture")]
    pub db: Option<PathBuf>,

    /// JSON fixture of cohorts and memberships instead of a database
    #[arg(long, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
