use anyhow::Result;
use clap::Parser;

use hornbook_cli::{
    cli::{Cli, Commands, ProgressCommands},
    commands,
    config::AppConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = cli.log_filter();
    let env_filter = format!(
        "hornbook_cli={0},hornbook_sqlite={0},hornbook_ingest={0},hornbook_enrichment={0},hornbook_curriculum={0}",
        level
    );
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .init();

    // Load configuration with CLI overrides
    let config = AppConfig::load(cli.config.clone(), cli.db.clone())?;
    let format = cli.format.clone();

    match cli.command {
        Commands::InitDb => commands::init_db::execute(&config)?,

        Commands::SeedCurriculum => commands::seed::execute(&config, false)?,

        Commands::SeedMassiveCurriculum => commands::seed::execute(&config, true)?,

        Commands::CheckDb => commands::check_db::execute(&config, &format)?,

        Commands::Ingest { file, topic } => commands::ingest::execute(&config, &file, topic)?,

        Commands::Enrich { term, source } => {
            commands::enrich::execute(&config, &term, source.into()).await?
        }

        Commands::Progress(ProgressCommands::Show) => commands::progress::show(&config, &format)?,

        Commands::Progress(ProgressCommands::Record {
            lesson,
            problem,
            outcome,
        }) => commands::progress::record(&config, lesson, problem, outcome.correct)?,

        Commands::Config(cmd) => commands::config::execute(cmd, &config, &format)?,
    }

    Ok(())
}
