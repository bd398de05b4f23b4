use clap::{Parser, Subcommand, ValueEnum};
use hornbook_enrichment::FactSource;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Enrichment source selector for `enrich`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    /// Wikipedia article summary
    Wikipedia,
    /// Dictionary definition
    Dictionary,
    /// NASA Astronomy Picture of the Day
    Nasa,
    /// Open Trivia Database question
    Trivia,
}

impl From<SourceArg> for FactSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Wikipedia => FactSource::Wikipedia,
            SourceArg::Dictionary => FactSource::Dictionary,
            SourceArg::Nasa => FactSource::Nasa,
            SourceArg::Trivia => FactSource::Trivia,
        }
    }
}

#[derive(Parser)]
#[command(name = "hornbook")]
#[command(about = "hornbook - curriculum database for a homeschool tutoring app")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database file path (overrides config file and HORNBOOK_DB_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Config file path (defaults to ~/.config/hornbook/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set output format (table, json)
    #[arg(short = 'f', long, global = true, default_value = "table")]
    pub format: String,
}

impl Cli {
    /// Effective log filter: explicit `-l` wins, then `--verbose`, then warn
    pub fn log_filter(&self) -> LevelFilter {
        match self.log_level {
            Some(level) => level.into(),
            None if self.verbose => LevelFilter::DEBUG,
            None => LevelFilter::WARN,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database file and bring the schema up to date
    InitDb,

    /// Seed the compact builtin curriculum (idempotent)
    SeedCurriculum,

    /// Seed the full builtin curriculum plus standards (idempotent)
    SeedMassiveCurriculum,

    /// Show row counts and per-subject content totals
    CheckDb,

    /// Convert a worksheet file into a lesson with practice problems
    Ingest {
        /// Worksheet file (.txt or .md)
        file: PathBuf,

        /// File the lesson under an existing topic id instead of the
        /// subject's Worksheets topic
        #[arg(short, long, value_name = "ID")]
        topic: Option<i64>,
    },

    /// Fetch a supplementary fact about a term
    Enrich {
        /// Term to look up
        term: String,

        /// Which source to ask
        #[arg(short, long, value_enum, default_value = "wikipedia")]
        source: SourceArg,
    },

    /// Student progress tracking
    #[command(subcommand)]
    Progress(ProgressCommands),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Create a starter config file with commented defaults
    Init {
        /// Where to write the file (defaults to ~/.config/hornbook/config.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration after all overrides
    Show,
}

#[derive(Subcommand)]
pub enum ProgressCommands {
    /// Overall summary and per-lesson mastery
    Show,

    /// Record one attempt on a lesson or problem
    Record {
        /// Lesson id
        #[arg(long, value_name = "ID")]
        lesson: i64,

        /// Problem id within the lesson (omit to record against the
        /// lesson as a whole)
        #[arg(long, value_name = "ID")]
        problem: Option<i64>,

        #[command(flatten)]
        outcome: OutcomeArgs,
    },
}

/// Attempt outcome; exactly one flag must be given
#[derive(clap::Args)]
#[group(required = true, multiple = false)]
pub struct OutcomeArgs {
    /// The attempt was answered correctly
    #[arg(long)]
    pub correct: bool,

    /// The attempt was answered incorrectly
    #[arg(long)]
    pub incorrect: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_init_db_parses() {
        let cli = Cli::try_parse_from(["hornbook", "init-db"]).unwrap();
        assert!(matches!(cli.command, Commands::InitDb));
    }

    #[test]
    fn test_seed_commands_parse() {
        let cli = Cli::try_parse_from(["hornbook", "seed-curriculum"]).unwrap();
        assert!(matches!(cli.command, Commands::SeedCurriculum));

        let cli = Cli::try_parse_from(["hornbook", "seed-massive-curriculum"]).unwrap();
        assert!(matches!(cli.command, Commands::SeedMassiveCurriculum));
    }

    #[test]
    fn test_check_db_with_json_format() {
        let cli = Cli::try_parse_from(["hornbook", "check-db", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::CheckDb));
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_ingest_parses_file_and_topic() {
        let cli =
            Cli::try_parse_from(["hornbook", "ingest", "worksheet.txt", "--topic", "4"]).unwrap();
        if let Commands::Ingest { file, topic } = cli.command {
            assert_eq!(file, PathBuf::from("worksheet.txt"));
            assert_eq!(topic, Some(4));
        } else {
            panic!("Expected Ingest command");
        }
    }

    #[test]
    fn test_ingest_requires_file() {
        assert!(Cli::try_parse_from(["hornbook", "ingest"]).is_err());
    }

    #[test]
    fn test_enrich_defaults_to_wikipedia() {
        let cli = Cli::try_parse_from(["hornbook", "enrich", "gravity"]).unwrap();
        if let Commands::Enrich { term, source } = cli.command {
            assert_eq!(term, "gravity");
            assert_eq!(source, SourceArg::Wikipedia);
        } else {
            panic!("Expected Enrich command");
        }
    }

    #[test]
    fn test_enrich_with_source() {
        let cli =
            Cli::try_parse_from(["hornbook", "enrich", "planet", "--source", "dictionary"])
                .unwrap();
        if let Commands::Enrich { source, .. } = cli.command {
            assert_eq!(FactSource::from(source), FactSource::Dictionary);
        } else {
            panic!("Expected Enrich command");
        }
    }

    #[test]
    fn test_progress_record_correct() {
        let cli = Cli::try_parse_from([
            "hornbook", "progress", "record", "--lesson", "3", "--correct",
        ])
        .unwrap();
        if let Commands::Progress(ProgressCommands::Record {
            lesson,
            problem,
            outcome,
        }) = cli.command
        {
            assert_eq!(lesson, 3);
            assert_eq!(problem, None);
            assert!(outcome.correct);
            assert!(!outcome.incorrect);
        } else {
            panic!("Expected Progress Record command");
        }
    }

    #[test]
    fn test_progress_record_incorrect_with_problem() {
        let cli = Cli::try_parse_from([
            "hornbook", "progress", "record", "--lesson", "3", "--problem", "7", "--incorrect",
        ])
        .unwrap();
        if let Commands::Progress(ProgressCommands::Record {
            problem, outcome, ..
        }) = cli.command
        {
            assert_eq!(problem, Some(7));
            assert!(outcome.incorrect);
        } else {
            panic!("Expected Progress Record command");
        }
    }

    #[test]
    fn test_progress_record_needs_an_outcome() {
        let result =
            Cli::try_parse_from(["hornbook", "progress", "record", "--lesson", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_progress_record_rejects_both_outcomes() {
        let result = Cli::try_parse_from([
            "hornbook", "progress", "record", "--lesson", "3", "--correct", "--incorrect",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_init_with_force() {
        let cli =
            Cli::try_parse_from(["hornbook", "config", "init", "/tmp/conf.toml", "--force"])
                .unwrap();
        if let Commands::Config(ConfigCommands::Init { path, force }) = cli.command {
            assert_eq!(path, Some(PathBuf::from("/tmp/conf.toml")));
            assert!(force);
        } else {
            panic!("Expected Config Init command");
        }
    }

    #[test]
    fn test_config_show_parses() {
        let cli = Cli::try_parse_from(["hornbook", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Show)
        ));
    }

    #[test]
    fn test_global_db_override_after_subcommand() {
        let cli =
            Cli::try_parse_from(["hornbook", "check-db", "--db", "/tmp/other.db"]).unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/other.db")));
    }

    #[test]
    fn test_log_filter_precedence() {
        let cli = Cli::try_parse_from(["hornbook", "init-db"]).unwrap();
        assert_eq!(cli.log_filter(), LevelFilter::WARN);

        let cli = Cli::try_parse_from(["hornbook", "init-db", "--verbose"]).unwrap();
        assert_eq!(cli.log_filter(), LevelFilter::DEBUG);

        let cli =
            Cli::try_parse_from(["hornbook", "init-db", "-v", "--log-level", "trace"]).unwrap();
        assert_eq!(cli.log_filter(), LevelFilter::TRACE);
    }
}
