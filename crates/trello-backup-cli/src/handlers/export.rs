use crate::context::BackupContext;
use crate::output;
use trello_backup_export::BoardExporter;

pub async fn handle_export(ctx: &BackupContext) -> anyhow::Result<()> {
    let client = ctx.client()?;
    let exporter = BoardExporter::new(&client, ctx.layout(), ctx.options.clone());

    let summaries = exporter.export_all().await?;
    tracing::info!(
        "Backed up {} boards into {}",
        summaries.len(),
        ctx.output_root.display()
    );

    output::output_list(summaries);
    Ok(())
}
