use crate::models::CardSummary;
use std::path::Path;
use std::time::Duration;
use trello_backup_core::BackupResult;
use trello_backup_domain::models::decode;
use trello_backup_domain::{
    resources, ApiQuery, Attachment, BackupLayout, Card, EntryNames, TrelloApi,
};
use trello_backup_persistence::{create_dir, AtomicWriter, DirectoryPolicy};

/// Pause after each comment-history request to stay under Trello's rate limit.
///
/// Fixed, not driven by rate-limit response headers.
pub const COMMENT_FETCH_DELAY: Duration = Duration::from_millis(100);

/// Writes the comment history and attachments of a single card.
pub struct CardExporter<'a, A: TrelloApi + ?Sized> {
    api: &'a A,
}

impl<'a, A: TrelloApi + ?Sized> CardExporter<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Cards whose badges report neither comments nor attachments issue no
    /// requests, get no directory and claim no name in `card_names`.
    pub async fn export(
        &self,
        card: &Card,
        board_dir: &Path,
        card_names: &mut EntryNames,
    ) -> BackupResult<CardSummary> {
        if !card.has_comments() && !card.has_attachments() {
            return Ok(CardSummary::default());
        }

        let card_dir = BackupLayout::card_dir(board_dir, &card_names.card(&card.name, &card.id));
        create_dir(&card_dir, DirectoryPolicy::CreateIfMissing).await?;

        if card.has_comments() {
            self.export_actions(card, &card_dir).await?;
        }

        let mut uploads_downloaded = 0;
        if card.has_attachments() {
            uploads_downloaded = self.export_attachments(card, &card_dir).await?;
        }

        Ok(CardSummary {
            directory: Some(card_dir),
            uploads_downloaded,
        })
    }

    async fn export_actions(&self, card: &Card, card_dir: &Path) -> BackupResult<()> {
        let actions = self
            .api
            .request(&resources::card_actions(&card.id), &ApiQuery::new())
            .await?;
        AtomicWriter::write_json(&BackupLayout::actions_file(card_dir), &actions).await?;

        tokio::time::sleep(COMMENT_FETCH_DELAY).await;
        Ok(())
    }

    async fn export_attachments(&self, card: &Card, card_dir: &Path) -> BackupResult<usize> {
        let path = resources::card_attachments(&card.id);
        let response = self.api.request(&path, &ApiQuery::new()).await?;
        AtomicWriter::write_json(&BackupLayout::attachments_file(card_dir), &response).await?;

        let attachments: Vec<Attachment> = decode(&path, &response)?;
        let mut file_names = EntryNames::for_card();
        let mut downloaded = 0;
        for attachment in attachments.iter().filter(|a| a.is_upload) {
            let bytes = self.api.download(&attachment.url).await?;
            let entry = file_names.attachment(&attachment.name, &attachment.id);
            let file = BackupLayout::attachment_file(card_dir, &entry);
            AtomicWriter::write_atomic(&file, &bytes).await?;
            tracing::debug!(
                "Saved attachment {} ({} bytes) of card {}",
                attachment.id,
                bytes.len(),
                card.id
            );
            downloaded += 1;
        }

        Ok(downloaded)
    }
}
