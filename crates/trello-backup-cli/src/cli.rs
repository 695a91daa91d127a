use clap::{Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TRELLO_BACKUP_COMMIT"),
    ")"
);

#[derive(Parser)]
#[command(name = "trello-backup")]
#[command(about = "Back up every Trello board of the configured member", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// Credentials file (default: ~/.trello_backup.yml)
    #[arg(long, value_name = "FILE", env = "TRELLO_BACKUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory the backup is written into
    #[arg(
        long,
        value_name = "DIR",
        env = "TRELLO_BACKUP_OUTPUT",
        default_value = "."
    )]
    pub output: PathBuf,

    /// Write into a subdirectory named after today's date (YYYY-MM-DD)
    #[arg(long)]
    pub dated: bool,

    /// Inline each board's action log (up to 1000 entries) into the board file
    #[arg(long)]
    pub with_actions: bool,

    /// Only back up the board with this id (repeatable)
    #[arg(long = "board", value_name = "ID")]
    pub boards: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
