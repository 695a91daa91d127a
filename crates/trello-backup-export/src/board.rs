use crate::card::CardExporter;
use crate::models::{BoardSummary, ExportOptions};
use trello_backup_core::BackupResult;
use trello_backup_domain::models::decode;
use trello_backup_domain::{
    resources, ApiQuery, BackupLayout, Board, BoardRef, EntryNames, TrelloApi,
};
use trello_backup_persistence::{create_dir, AtomicWriter, DirectoryPolicy};

/// Boards visible to the authenticated member.
pub async fn list_boards<A: TrelloApi + ?Sized>(api: &A) -> BackupResult<Vec<BoardRef>> {
    let path = resources::member_boards();
    let response = api.request(&path, &ApiQuery::new()).await?;
    decode(&path, &response)
}

/// Writes boards below one output root.
pub struct BoardExporter<'a, A: TrelloApi + ?Sized> {
    api: &'a A,
    layout: BackupLayout,
    options: ExportOptions,
}

impl<'a, A: TrelloApi + ?Sized> BoardExporter<'a, A> {
    pub fn new(api: &'a A, layout: BackupLayout, options: ExportOptions) -> Self {
        Self {
            api,
            layout,
            options,
        }
    }

    /// Exports every board in API order, stopping at the first failure.
    pub async fn export_all(&self) -> BackupResult<Vec<BoardSummary>> {
        let boards = list_boards(self.api).await?;
        tracing::info!("Found {} boards", boards.len());

        for wanted in &self.options.board_ids {
            if !boards.iter().any(|b| &b.id == wanted) {
                tracing::warn!("Board {} is not visible to this member, skipping", wanted);
            }
        }

        let mut summaries = Vec::new();
        for board_ref in boards.iter().filter(|b| self.options.includes(&b.id)) {
            let summary = self
                .export_board(board_ref)
                .await
                .map_err(|e| e.within(format!("board {}", board_ref.id)))?;
            summaries.push(summary);
        }

        Ok(summaries)
    }

    /// Writes `{root}/{board}.json` and the card tree under `{root}/{board}/`.
    ///
    /// The board directory must not exist yet, so a second run into the same
    /// root fails instead of mixing two backups.
    pub async fn export_board(&self, board_ref: &BoardRef) -> BackupResult<BoardSummary> {
        let path = resources::board(&board_ref.id);
        let response = self
            .api
            .request(&path, &ApiQuery::board_detail(self.options.with_actions))
            .await?;
        let board: Board = decode(&path, &response)?;

        let board_dir = self.layout.board_dir(&board.name);
        create_dir(&board_dir, DirectoryPolicy::Strict).await?;

        let board_file = self.layout.board_file(&board.name);
        AtomicWriter::write_json(&board_file, &response).await?;
        tracing::info!(
            "Exporting board {} ({}) with {} cards",
            board.id,
            board.name,
            board.cards.len()
        );

        let card_exporter = CardExporter::new(self.api);
        let mut card_names = EntryNames::for_board();
        let mut card_directories = 0;
        let mut uploads_downloaded = 0;
        for card in &board.cards {
            let summary = card_exporter
                .export(card, &board_dir, &mut card_names)
                .await
                .map_err(|e| e.within(format!("card {} ({})", card.id, card.name)))?;
            if summary.wrote_files() {
                card_directories += 1;
            }
            uploads_downloaded += summary.uploads_downloaded;
        }

        Ok(BoardSummary {
            id: board.id,
            name: board.name,
            file: board_file,
            directory: board_dir,
            cards: board.cards.len(),
            card_directories,
            uploads_downloaded,
        })
    }
}
