use clap::{Parser, Subcommand, ValueEnum};

/// Output rendering for read commands.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Command-line interface for the `conneqt` application.
#[derive(Debug, Parser)]
#[command(
    name = "conneqt",
    about = "Connection recommendations from your external contact graph"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `conneqt` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Syncs the contact graph into stored recommendations.
    Sync {
        /// Platform user id to sync for.
        #[arg(long)]
        user: String,
        /// Contact page size (overrides `CONNEQT_PAGE_SIZE`, default 100).
        #[arg(long, value_name = "COUNT")]
        page_size: Option<u32>,
    },
    /// Lists stored recommendations, highest similarity first.
    Recommendations {
        /// Platform user id.
        #[arg(long)]
        user: String,
        /// Maximum number of recommendations shown.
        #[arg(long, default_value_t = 20)]
        limit: usize,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Shows connection statistics.
    Stats {
        /// Platform user id.
        #[arg(long)]
        user: String,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Searches stored recommendations for mentor candidates.
    Mentors {
        /// Platform user id.
        #[arg(long)]
        user: String,
        /// Required skill (repeatable; any may match).
        #[arg(long = "skill", value_name = "SKILL")]
        skills: Vec<String>,
        /// Required location substring.
        #[arg(long)]
        location: Option<String>,
        /// Required organization-name substring.
        #[arg(long)]
        industry: Option<String>,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Shows the synced enhanced profile.
    Profile {
        /// Platform user id.
        #[arg(long)]
        user: String,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Manages the platform user directory.
    Users {
        #[command(subcommand)]
        command: UsersCommands,
    },
}

/// Directory management subcommands.
#[derive(Debug, Subcommand)]
pub enum UsersCommands {
    /// Adds (or replaces) a platform user.
    Add {
        /// Platform user id.
        #[arg(long)]
        id: String,
        /// Display name.
        #[arg(long)]
        name: String,
        /// Account email; the matching key.
        #[arg(long)]
        email: String,
    },
    /// Lists every platform user.
    List {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sync() {
        let cli = Cli::parse_from(["conneqt", "sync", "--user", "u1", "--page-size", "50"]);
        match cli.command {
            Commands::Sync { user, page_size } => {
                assert_eq!(user, "u1");
                assert_eq!(page_size, Some(50));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_mentors_with_repeated_skills() {
        let cli = Cli::parse_from([
            "conneqt", "mentors", "--user", "u1", "--skill", "go", "--skill", "sql",
            "--location", "chennai",
        ]);
        match cli.command {
            Commands::Mentors {
                skills, location, industry, ..
            } => {
                assert_eq!(skills, vec!["go", "sql"]);
                assert_eq!(location.as_deref(), Some("chennai"));
                assert!(industry.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_users_add() {
        let cli = Cli::parse_from([
            "conneqt", "users", "add", "--id", "u1", "--name", "Asha", "--email",
            "asha@example.com",
        ]);
        match cli.command {
            Commands::Users {
                command: UsersCommands::Add { id, name, email },
            } => {
                assert_eq!(id, "u1");
                assert_eq!(name, "Asha");
                assert_eq!(email, "asha@example.com");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_format_defaults_to_text() {
        let cli = Cli::parse_from(["conneqt", "stats", "--user", "u1"]);
        match cli.command {
            Commands::Stats { format, .. } => assert!(matches!(format, OutputFormat::Text)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
