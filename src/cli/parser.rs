use clap::{Parser, Subcommand};

/// Command-line interface definition for rClocklog
/// CLI application to clock in/out and summarize worked hours with SQLite
#[derive(Parser)]
#[command(
    name = "rclocklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in/out and track worked hours per day, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print results as JSON instead of text
    #[arg(global = true, long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show whether you are currently clocked in
    Status,

    /// Clock in now
    In,

    /// Clock out now
    Out,

    /// Record an event: without --at it behaves like `in` / `out`,
    /// with --at it inserts a past event without checking alternation
    Add {
        /// Event type (IN or OUT)
        kind: String,

        /// When it happened (RFC 3339, or local "YYYY-MM-DD HH:MM")
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// List recorded events
    List {
        #[arg(long, value_name = "YYYY-MM-DD", help = "First day to include")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Last day to include")]
        to: Option<String>,
    },

    /// Worked hours per day over a range
    Summary {
        #[arg(long, value_name = "YYYY-MM-DD", help = "First day of the range")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Last day of the range")]
        to: Option<String>,

        #[arg(
            long,
            short,
            value_name = "PERIOD",
            help = "Year, month or day (2025, 2025-03, 2025-03-01) or a range A:B"
        )]
        period: Option<String>,

        #[arg(
            long,
            short,
            value_name = "YYYY-MM-DD",
            num_args = 0..=1,
            conflicts_with = "period",
            help = "Monday-Sunday week containing the given day (default: today)"
        )]
        week: Option<Option<String>>,
    },

    /// Show how deleting an event would change your status
    Impact {
        /// Event id
        id: i64,
    },

    /// Delete an event by id
    Del {
        /// Event id
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Replace type and timestamp of an event
    Edit {
        /// Event id
        id: i64,

        #[arg(long = "type", value_name = "IN|OUT")]
        kind: String,

        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: String,
    },
}
