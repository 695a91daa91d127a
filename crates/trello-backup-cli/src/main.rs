mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::BackupContext;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::output_error(&e.to_string());
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            "trello-backup",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    trello_backup_core::logging::init()?;

    let ctx = BackupContext::load(&cli).await?;
    handlers::export::handle_export(&ctx).await
}
