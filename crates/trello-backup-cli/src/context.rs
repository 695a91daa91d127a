use crate::cli::Cli;
use chrono::Local;
use std::path::{Path, PathBuf};
use trello_backup_client::HttpTrelloClient;
use trello_backup_core::{BackupResult, Credentials};
use trello_backup_domain::BackupLayout;
use trello_backup_export::ExportOptions;
use trello_backup_persistence::{create_dir, DirectoryPolicy};

/// Everything a backup run needs, resolved once at startup.
pub struct BackupContext {
    pub credentials: Credentials,
    pub output_root: PathBuf,
    pub options: ExportOptions,
}

impl BackupContext {
    pub async fn load(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => Credentials::default_path()
                .ok_or_else(|| anyhow::anyhow!("Cannot locate home directory for credentials"))?,
        };
        let credentials = Credentials::load(&config_path)?;

        let output_root = resolve_output_root(&cli.output, cli.dated, &Local::now().date_naive());
        create_dir(&output_root, DirectoryPolicy::CreateIfMissing).await?;
        tracing::info!("Writing backup to {}", output_root.display());

        Ok(Self {
            credentials,
            output_root,
            options: ExportOptions {
                with_actions: cli.with_actions,
                board_ids: cli.boards.clone(),
            },
        })
    }

    pub fn client(&self) -> BackupResult<HttpTrelloClient> {
        HttpTrelloClient::new(&self.credentials)
    }

    pub fn layout(&self) -> BackupLayout {
        BackupLayout::new(&self.output_root)
    }
}

fn resolve_output_root(output: &Path, dated: bool, today: &chrono::NaiveDate) -> PathBuf {
    if dated {
        output.join(today.format("%Y-%m-%d").to_string())
    } else {
        output.to_path_buf()
    }
}
