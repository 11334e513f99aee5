use clap::{Parser, Subcommand};

/// Command-line interface definition for bdreminder
#[derive(Parser)]
#[command(
    name = "bdreminder",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small birthday reminder: record birth dates in SQLite and get notified on the day",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update, logs to stderr)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a birthday
    Add {
        /// Person's name
        name: String,
        /// Birth date (YYYY-MM-DD or YYYYMMDD)
        date: String,
    },

    /// List stored birthdays ordered by month and day
    List {
        /// Only names containing this text (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Only birth dates on or after this date
        #[arg(long)]
        from: Option<String>,

        /// Only birth dates on or before this date
        #[arg(long)]
        to: Option<String>,
    },

    /// Change the birth date of a stored birthday
    Edit {
        /// Person's name
        name: String,
        /// Currently stored birth date
        old_date: String,
        /// New birth date
        new_date: String,
    },

    /// Delete a stored birthday
    Del {
        /// Person's name
        name: String,
        /// Stored birth date
        date: String,

        /// Do not ask for confirmation
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Show birthdays that still need a reminder today
    Due {
        /// Check another day instead of today
        #[arg(long)]
        date: Option<String>,
    },

    /// Mark a birthday as reminded for today
    Ack {
        /// Person's name
        name: String,
        /// Stored birth date
        date: String,
    },

    /// Run the reminder loop
    Watch {
        /// Seconds between two checks (default from configuration)
        #[arg(long)]
        interval: Option<u64>,

        /// Check once, notify and exit
        #[arg(long)]
        once: bool,
    },

    /// Print the number of stored birthdays
    Count,

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup as a zip archive
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Check for a newer version and optionally download it
    Update {
        /// Only report whether an update is available
        #[arg(long, conflicts_with = "download")]
        check: bool,

        /// Download the files listed in the manifest
        #[arg(long)]
        download: bool,

        /// Manifest URL or local file (default from configuration)
        #[arg(long)]
        source: Option<String>,

        /// Directory the downloaded files are written to
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,
    },
}
