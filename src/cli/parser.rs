use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for mobilog
#[derive(Parser)]
#[command(
    name = "mobilog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance tracker for mobilographers: check-in/out, lunch breaks and a live status board on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Who and when for a session action.
#[derive(Args, Debug, Clone)]
pub struct SessionTarget {
    /// Person id or exact name
    pub person: String,

    #[arg(long = "date", help = "Day of the session (YYYY-MM-DD), default today")]
    pub date: Option<String>,

    #[arg(long = "at", help = "Time of the action (HH:MM), default now")]
    pub at: Option<String>,
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

    /// Manage mobilographers
    Person {
        #[command(subcommand)]
        action: PersonAction,
    },

    /// Check in: open today's session
    In(SessionTarget),

    /// Check out: close today's session
    Out(SessionTarget),

    /// Start or end the lunch break
    Lunch {
        #[command(subcommand)]
        action: LunchAction,
    },

    /// Show the status board for a day
    Status {
        #[arg(long = "date", help = "Day to show (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "at", help = "Reference time for elapsed durations (HH:MM)")]
        at: Option<String>,

        #[arg(long = "json", help = "Print the board as JSON")]
        json: bool,
    },

    /// Show the status board and refresh it periodically
    Watch {
        #[arg(long = "interval", help = "Seconds between refreshes (default from config)")]
        interval: Option<u64>,

        #[arg(long = "ticks", help = "Stop after this many refreshes")]
        ticks: Option<usize>,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks, info)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}

#[derive(Subcommand)]
pub enum PersonAction {
    /// Register a new mobilographer
    Add { name: String },

    /// List registered mobilographers
    List,
}

#[derive(Subcommand)]
pub enum LunchAction {
    /// Start the lunch break
    Start(SessionTarget),

    /// End the lunch break
    End(SessionTarget),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_lunch_end_with_options() {
        let cli = Cli::parse_from([
            "mobilog", "lunch", "end", "Aziz", "--date", "2025-03-10", "--at", "13:45",
        ]);
        match cli.command {
            Commands::Lunch {
                action: LunchAction::End(t),
            } => {
                assert_eq!(t.person, "Aziz");
                assert_eq!(t.date.as_deref(), Some("2025-03-10"));
                assert_eq!(t.at.as_deref(), Some("13:45"));
            }
            _ => panic!("expected lunch end"),
        }
    }
}
