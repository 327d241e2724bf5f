//! Content builder
//!
//! Editing session over one page's block collection. The builder owns the
//! authoritative in-memory list until an explicit save hands the whole list
//! to a [`BlockPersistence`] implementation.
//!
//! After every add, delete, duplicate and move the `order` fields read
//! `0..N-1` in sequence.

use super::library::BlockTemplate;
use super::renderer::{render_blocks, Fidelity, RenderedBlock};
use super::{renumber, sort_by_order, Block, BlockType};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuilderError {
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("No template for block type: {0}")]
    UnknownTemplate(String),

    #[error("Exit preview before changing blocks")]
    Previewing,

    #[error("Add at least one block before previewing")]
    NothingToPreview,

    #[error("Add at least one block before saving")]
    EmptyLayout,

    #[error("A save is already in progress")]
    SaveInFlight,

    #[error("No save is in progress")]
    NoSaveInFlight,

    #[error("No block is being edited")]
    NoActiveEdit,

    #[error("Block {0} is not the block being edited")]
    EditMismatch(String),

    #[error("Failed to save content: {0}")]
    SaveFailed(String),
}

type Result<T> = std::result::Result<T, BuilderError>;

/// Destination for a saved block list
#[async_trait]
pub trait BlockPersistence: Send + Sync {
    async fn save_blocks(&self, blocks: &[Block]) -> crate::error::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuilderMode {
    Editing,
    Previewing,
}

/// Where a block is in its lifecycle within this session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockState {
    /// Added or duplicated since the last successful save
    UnsavedNew,
    Editable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Acknowledgment shown to the operator after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Editor card for one block in editing mode
#[derive(Debug, Clone, Serialize)]
pub struct BlockCard {
    pub id: String,
    pub icon: &'static str,
    pub title: String,
    pub type_label: String,
    pub order_label: String,
    pub background_color: Option<String>,
    pub padding: Option<String>,
    pub state: BlockState,
    pub selected: bool,
}

/// Snapshot handed out by [`ContentBuilder::begin_save`]
#[derive(Debug, Clone)]
pub struct SaveTicket {
    revision: u64,
    blocks: Vec<Block>,
}

impl SaveTicket {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

#[derive(Debug)]
pub struct ContentBuilder {
    blocks: Vec<Block>,
    mode: BuilderMode,
    editing: Option<String>,
    saving: bool,
    unsaved: HashSet<String>,
    revision: u64,
    saved_revision: u64,
    source_fingerprint: Option<String>,
    notices: Vec<Notice>,
}

impl Default for ContentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            mode: BuilderMode::Editing,
            editing: None,
            saving: false,
            unsaved: HashSet::new(),
            revision: 0,
            saved_revision: 0,
            source_fingerprint: None,
            notices: Vec::new(),
        }
    }

    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        let mut builder = Self::new();
        builder.load(blocks);
        builder
    }

    // ===== Accessors =====

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn mode(&self) -> BuilderMode {
        self.mode
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// True when the collection changed since the last load or save
    pub fn is_dirty(&self) -> bool {
        self.revision != self.saved_revision
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn block_state(&self, id: &str) -> Option<BlockState> {
        self.get(id).map(|_| {
            if self.unsaved.contains(id) {
                BlockState::UnsavedNew
            } else {
                BlockState::Editable
            }
        })
    }

    /// Drain pending operator notices
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ===== Loading =====

    /// Replace the session's collection with an external one.
    pub fn load(&mut self, mut blocks: Vec<Block>) {
        self.source_fingerprint = Some(fingerprint(&blocks));
        sort_by_order(&mut blocks);
        renumber(&mut blocks);

        tracing::debug!("Loaded {} blocks into builder", blocks.len());

        self.blocks = blocks;
        self.editing = None;
        self.unsaved.clear();
        self.revision += 1;
        self.saved_revision = self.revision;
        if self.blocks.is_empty() {
            self.mode = BuilderMode::Editing;
        }
    }

    /// Reload only when the external collection differs from the one last
    /// loaded. Returns whether a reload happened.
    pub fn sync(&mut self, external: &[Block]) -> bool {
        if self.source_fingerprint.as_deref() == Some(fingerprint(external).as_str()) {
            return false;
        }
        self.load(external.to_vec());
        true
    }

    // ===== Mutations =====

    /// Append a block built from `template`. Returns the new id.
    pub fn add_from_template(&mut self, template: &BlockTemplate) -> Result<String> {
        self.ensure_editing()?;

        let mut block = template.instantiate(new_block_id());
        block.order = self.blocks.len() as i64;
        let id = block.id.clone();

        self.unsaved.insert(id.clone());
        self.blocks.push(block);
        self.touch();
        self.notify(
            NoticeKind::Success,
            format!("{} added to page!", template.title),
        );

        Ok(id)
    }

    /// Append a block from the library template for `block_type`.
    pub fn add(&mut self, block_type: &BlockType) -> Result<String> {
        let template = BlockTemplate::for_type(block_type)
            .ok_or_else(|| BuilderError::UnknownTemplate(block_type.to_string()))?;
        self.add_from_template(&template)
    }

    /// Remove a block once `confirm` approves it. Returns whether the block
    /// was removed.
    pub fn delete<F>(&mut self, id: &str, confirm: F) -> Result<bool>
    where
        F: FnOnce(&Block) -> bool,
    {
        self.ensure_editing()?;

        let index = self.index_of(id)?;
        if !confirm(&self.blocks[index]) {
            return Ok(false);
        }

        self.blocks.remove(index);
        renumber(&mut self.blocks);
        self.unsaved.remove(id);
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        self.touch();
        self.notify(NoticeKind::Success, "Block deleted");

        Ok(true)
    }

    /// Append a copy of a block under a new id. Returns the new id.
    pub fn duplicate(&mut self, id: &str) -> Result<String> {
        self.ensure_editing()?;

        let original = &self.blocks[self.index_of(id)?];
        let copy = Block {
            id: new_block_id(),
            block_type: original.block_type.clone(),
            title: Some(format!("{} (Copy)", original.display_title())),
            content: original.content.clone(),
            settings: original.settings.clone(),
            order: self.blocks.len() as i64,
        };
        let new_id = copy.id.clone();

        self.unsaved.insert(new_id.clone());
        self.blocks.push(copy);
        self.touch();
        self.notify(NoticeKind::Success, "Block duplicated");

        Ok(new_id)
    }

    /// Drop `active` onto the position held by `over`.
    ///
    /// Returns whether anything moved: no target, an unknown id, or a drop
    /// onto itself leave the collection untouched.
    pub fn move_block(&mut self, active: &str, over: Option<&str>) -> Result<bool> {
        self.ensure_editing()?;

        let Some(over) = over else {
            return Ok(false);
        };
        if active == over {
            return Ok(false);
        }
        let (Some(from), Some(to)) = (self.position(active), self.position(over)) else {
            return Ok(false);
        };

        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        renumber(&mut self.blocks);
        self.touch();

        tracing::debug!("Moved block {} from {} to {}", active, from, to);
        Ok(true)
    }

    /// Keyboard equivalent: swap with the previous block.
    pub fn move_up(&mut self, id: &str) -> Result<bool> {
        let index = self.index_of(id)?;
        let target = index.checked_sub(1).map(|i| self.blocks[i].id.clone());
        self.move_block(id, target.as_deref())
    }

    /// Keyboard equivalent: swap with the next block.
    pub fn move_down(&mut self, id: &str) -> Result<bool> {
        let index = self.index_of(id)?;
        let target = self.blocks.get(index + 1).map(|b| b.id.clone());
        self.move_block(id, target.as_deref())
    }

    // ===== Editing =====

    /// Open an edit on one block and hand back a draft copy of it.
    pub fn begin_edit(&mut self, id: &str) -> Result<Block> {
        self.ensure_editing()?;
        let draft = self.blocks[self.index_of(id)?].clone();
        self.editing = Some(id.to_string());
        Ok(draft)
    }

    /// Replace the block being edited. Its id, type and order are kept.
    pub fn commit_edit(&mut self, edited: Block) -> Result<()> {
        self.ensure_editing()?;

        match self.editing.as_deref() {
            None => return Err(BuilderError::NoActiveEdit),
            Some(current) if current != edited.id => {
                return Err(BuilderError::EditMismatch(edited.id))
            }
            Some(_) => {}
        }

        let index = self.index_of(&edited.id)?;
        let slot = &mut self.blocks[index];
        slot.title = edited.title;
        slot.content = edited.content;
        slot.settings = edited.settings;

        self.editing = None;
        self.touch();
        self.notify(NoticeKind::Success, "Block updated successfully!");

        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // ===== Preview =====

    /// Switch between editing and previewing. Previewing needs at least one
    /// block. The collection is never touched.
    pub fn toggle_preview(&mut self) -> Result<BuilderMode> {
        self.mode = match self.mode {
            BuilderMode::Editing if self.blocks.is_empty() => {
                return Err(BuilderError::NothingToPreview)
            }
            BuilderMode::Editing => {
                self.editing = None;
                BuilderMode::Previewing
            }
            BuilderMode::Previewing => BuilderMode::Editing,
        };
        Ok(self.mode)
    }

    /// Read-only rendering of the current collection
    pub fn render_preview(&self) -> Vec<RenderedBlock> {
        render_blocks(&self.blocks, Fidelity::Preview)
    }

    /// Cards shown in editing mode
    pub fn cards(&self) -> Vec<BlockCard> {
        self.blocks
            .iter()
            .map(|block| {
                let settings = block.settings.clone().unwrap_or_default();
                BlockCard {
                    id: block.id.clone(),
                    icon: block_icon(&block.block_type),
                    title: block.display_title(),
                    type_label: block.block_type.label(),
                    order_label: format!("Order: {}", block.order + 1),
                    background_color: settings.background_color,
                    padding: settings.padding,
                    state: self.block_state(&block.id).unwrap_or(BlockState::Editable),
                    selected: self.editing.as_deref() == Some(block.id.as_str()),
                }
            })
            .collect()
    }

    // ===== Saving =====

    /// Start a save. Further saves are refused until
    /// [`complete_save`](Self::complete_save) runs.
    pub fn begin_save(&mut self) -> Result<SaveTicket> {
        if self.saving {
            return Err(BuilderError::SaveInFlight);
        }
        if self.blocks.is_empty() {
            return Err(BuilderError::EmptyLayout);
        }

        self.saving = true;
        Ok(SaveTicket {
            revision: self.revision,
            blocks: self.blocks.clone(),
        })
    }

    /// Finish a save started by [`begin_save`](Self::begin_save). A failed
    /// save leaves the collection exactly as it is.
    pub fn complete_save(
        &mut self,
        ticket: SaveTicket,
        outcome: std::result::Result<(), String>,
    ) -> Result<()> {
        if !self.saving {
            return Err(BuilderError::NoSaveInFlight);
        }
        self.saving = false;

        match outcome {
            Ok(()) => {
                for block in &ticket.blocks {
                    self.unsaved.remove(&block.id);
                }
                // Edits made while the save was in flight stay dirty.
                if self.revision == ticket.revision {
                    self.saved_revision = ticket.revision;
                }
                self.notify(NoticeKind::Success, "Content saved successfully!");
                tracing::info!("Saved {} blocks", ticket.blocks.len());
                Ok(())
            }
            Err(message) => {
                tracing::error!("Save error: {}", message);
                self.notify(NoticeKind::Error, "Failed to save content");
                Err(BuilderError::SaveFailed(message))
            }
        }
    }

    /// Save the full collection through `persistence`.
    pub async fn save<P>(&mut self, persistence: &P) -> Result<()>
    where
        P: BlockPersistence + ?Sized,
    {
        let ticket = self.begin_save()?;
        let outcome = persistence
            .save_blocks(ticket.blocks())
            .await
            .map_err(|e| e.to_string());
        self.complete_save(ticket, outcome)
    }

    // ===== Internals =====

    fn ensure_editing(&self) -> Result<()> {
        match self.mode {
            BuilderMode::Editing => Ok(()),
            BuilderMode::Previewing => Err(BuilderError::Previewing),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.position(id)
            .ok_or_else(|| BuilderError::BlockNotFound(id.to_string()))
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notices.push(Notice {
            kind,
            message: message.into(),
        });
    }
}

fn new_block_id() -> String {
    format!("block-{}", Uuid::new_v4())
}

fn fingerprint(blocks: &[Block]) -> String {
    serde_json::to_string(blocks).unwrap_or_default()
}

/// Icon shown on editor cards
pub fn block_icon(block_type: &BlockType) -> &'static str {
    match block_type {
        BlockType::Hero => "🎯",
        BlockType::Features => "⭐",
        BlockType::Cta => "📢",
        BlockType::Faq => "❓",
        BlockType::Testimonials => "💬",
        BlockType::Text => "📄",
        BlockType::Image => "🖼️",
        BlockType::Video => "🎥",
        BlockType::Cards => "🃏",
        BlockType::Steps => "📝",
        _ => "📦",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::json;
    use std::sync::Mutex;

    fn ids(builder: &ContentBuilder) -> Vec<String> {
        builder.blocks().iter().map(|b| b.id.clone()).collect()
    }

    fn assert_contiguous(builder: &ContentBuilder) {
        for (index, block) in builder.blocks().iter().enumerate() {
            assert_eq!(block.order, index as i64);
        }
    }

    fn sample() -> ContentBuilder {
        ContentBuilder::with_blocks(vec![
            Block::new("a", BlockType::Hero).with_title("Hero").with_order(0),
            Block::new("b", BlockType::Text).with_title("Intro").with_order(1),
            Block::new("c", BlockType::Cta).with_title("Apply").with_order(2),
            Block::new("d", BlockType::Faq).with_title("FAQ").with_order(3),
        ])
    }

    struct RecordingStore {
        saved: Mutex<Vec<Vec<Block>>>,
        fail: bool,
    }

    #[async_trait]
    impl BlockPersistence for RecordingStore {
        async fn save_blocks(&self, blocks: &[Block]) -> crate::error::Result<()> {
            if self.fail {
                return Err(AppError::Generic("store unavailable".into()));
            }
            self.saved.lock().unwrap().push(blocks.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_load_sorts_and_renumbers() {
        let builder = ContentBuilder::with_blocks(vec![
            Block::new("a", BlockType::Hero).with_order(5),
            Block::new("b", BlockType::Text).with_order(2),
        ]);
        assert_eq!(ids(&builder), vec!["b", "a"]);
        assert_contiguous(&builder);
        assert!(!builder.is_dirty());
    }

    #[test]
    fn test_sync_reloads_only_on_change() {
        let external = vec![Block::new("a", BlockType::Hero)];
        let mut builder = ContentBuilder::new();

        assert!(builder.sync(&external));
        builder.add(&BlockType::Cta).unwrap();
        assert!(!builder.sync(&external));
        assert_eq!(builder.len(), 2);

        let other_page = vec![Block::new("x", BlockType::Text)];
        assert!(builder.sync(&other_page));
        assert_eq!(ids(&builder), vec!["x"]);
    }

    #[test]
    fn test_add_appends_with_next_order() {
        let mut builder = sample();
        let id = builder.add(&BlockType::Steps).unwrap();

        let added = builder.get(&id).unwrap();
        assert_eq!(added.order, 4);
        assert_eq!(added.block_type, BlockType::Steps);
        assert_eq!(builder.block_state(&id), Some(BlockState::UnsavedNew));
        assert_eq!(builder.block_state("a"), Some(BlockState::Editable));
        assert!(builder.is_dirty());
        assert_contiguous(&builder);
    }

    #[test]
    fn test_add_unknown_type_has_no_template() {
        let mut builder = sample();
        let err = builder.add(&BlockType::Unknown("carousel".into())).unwrap_err();
        assert_eq!(err, BuilderError::UnknownTemplate("carousel".into()));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut builder = sample();

        assert!(!builder.delete("b", |_| false).unwrap());
        assert_eq!(builder.len(), 4);

        assert!(builder.delete("b", |block| block.id == "b").unwrap());
        assert_eq!(ids(&builder), vec!["a", "c", "d"]);
        assert_contiguous(&builder);
    }

    #[test]
    fn test_delete_then_add_never_reuses_id() {
        let mut builder = sample();
        let added = builder.add(&BlockType::Hero).unwrap();
        builder.delete(&added, |_| true).unwrap();

        let len_before = builder.len();
        let again = builder.add(&BlockType::Hero).unwrap();
        assert_eq!(builder.len(), len_before + 1);
        assert_ne!(again, added);

        builder.delete("a", |_| true).unwrap();
        let replacement = builder.add(&BlockType::Hero).unwrap();
        assert_eq!(builder.len(), 4);
        assert_ne!(replacement, "a");
    }

    #[test]
    fn test_duplicate_copies_payload_under_new_id() {
        let mut builder = ContentBuilder::with_blocks(vec![Block::new("a", BlockType::Cards)
            .with_title("Products")
            .with_content(json!({ "cards": [{ "title": "Fixed" }] }))
            .with_settings(crate::blocks::BlockSettings {
                padding: Some("2rem".into()),
                ..Default::default()
            })]);

        let id = builder.duplicate("a").unwrap();
        let original = builder.get("a").unwrap().clone();
        let copy = builder.get(&id).unwrap();

        assert_ne!(copy.id, original.id);
        assert_eq!(copy.block_type, original.block_type);
        assert_eq!(copy.content, original.content);
        assert_eq!(copy.settings, original.settings);
        assert_eq!(copy.title.as_deref(), Some("Products (Copy)"));
        assert_eq!(copy.order, 1);
    }

    #[test]
    fn test_move_splices_to_target_index() {
        let mut builder = sample();

        assert!(builder.move_block("a", Some("c")).unwrap());
        assert_eq!(ids(&builder), vec!["b", "c", "a", "d"]);
        assert_contiguous(&builder);

        assert!(builder.move_block("d", Some("b")).unwrap());
        assert_eq!(ids(&builder), vec!["d", "b", "c", "a"]);
        assert_contiguous(&builder);
    }

    #[test]
    fn test_move_noops_leave_collection_unchanged() {
        let mut builder = sample();
        let before = serde_json::to_string(builder.blocks()).unwrap();

        assert!(!builder.move_block("b", Some("b")).unwrap());
        assert!(!builder.move_block("b", None).unwrap());
        assert!(!builder.move_block("b", Some("zzz")).unwrap());
        assert!(!builder.move_block("zzz", Some("b")).unwrap());

        assert_eq!(serde_json::to_string(builder.blocks()).unwrap(), before);
        assert!(!builder.is_dirty());
    }

    #[test]
    fn test_keyboard_moves() {
        let mut builder = sample();
        assert!(builder.move_down("a").unwrap());
        assert_eq!(ids(&builder), vec!["b", "a", "c", "d"]);
        assert!(builder.move_up("d").unwrap());
        assert_eq!(ids(&builder), vec!["b", "a", "d", "c"]);
        assert!(!builder.move_up("b").unwrap());
        assert!(!builder.move_down("c").unwrap());
    }

    #[test]
    fn test_edit_replaces_record_but_keeps_identity() {
        let mut builder = sample();
        let mut draft = builder.begin_edit("b").unwrap();
        assert_eq!(builder.editing(), Some("b"));

        draft.title = Some("Welcome".into());
        draft.content = json!({ "body": "<p>Hi</p>" });
        draft.order = 99;
        draft.block_type = BlockType::Hero;
        builder.commit_edit(draft).unwrap();

        let edited = builder.get("b").unwrap();
        assert_eq!(edited.title.as_deref(), Some("Welcome"));
        assert_eq!(edited.content, json!({ "body": "<p>Hi</p>" }));
        assert_eq!(edited.order, 1);
        assert_eq!(edited.block_type, BlockType::Text);
        assert_eq!(builder.editing(), None);
    }

    #[test]
    fn test_commit_without_matching_edit_fails() {
        let mut builder = sample();
        let draft = builder.get("a").unwrap().clone();
        assert_eq!(builder.commit_edit(draft.clone()), Err(BuilderError::NoActiveEdit));

        builder.begin_edit("b").unwrap();
        assert_eq!(
            builder.commit_edit(draft),
            Err(BuilderError::EditMismatch("a".into()))
        );
    }

    #[test]
    fn test_preview_toggle_does_not_mutate() {
        let mut builder = sample();
        let before = builder.blocks().to_vec();

        assert_eq!(builder.toggle_preview().unwrap(), BuilderMode::Previewing);
        assert_eq!(builder.render_preview().len(), 4);
        assert_eq!(builder.add(&BlockType::Hero), Err(BuilderError::Previewing));
        assert_eq!(builder.toggle_preview().unwrap(), BuilderMode::Editing);

        assert_eq!(builder.blocks(), before.as_slice());
    }

    #[test]
    fn test_preview_refused_when_empty() {
        let mut builder = ContentBuilder::new();
        assert_eq!(builder.toggle_preview(), Err(BuilderError::NothingToPreview));
        assert_eq!(builder.mode(), BuilderMode::Editing);
    }

    #[test]
    fn test_renders_loaded_blocks_by_order() {
        let builder = ContentBuilder::with_blocks(vec![
            Block::new("a", BlockType::Hero).with_order(1),
            Block::new("b", BlockType::Text).with_order(0),
        ]);
        let rendered: Vec<String> = builder.render_preview().into_iter().map(|r| r.id).collect();
        assert_eq!(rendered, vec!["b", "a"]);
    }

    #[test]
    fn test_save_refuses_empty_and_concurrent() {
        let mut empty = ContentBuilder::new();
        assert_eq!(empty.begin_save().unwrap_err(), BuilderError::EmptyLayout);

        let mut builder = sample();
        let ticket = builder.begin_save().unwrap();
        assert!(builder.is_saving());
        assert_eq!(builder.begin_save().unwrap_err(), BuilderError::SaveInFlight);

        builder.complete_save(ticket, Ok(())).unwrap();
        assert!(!builder.is_saving());
    }

    #[test]
    fn test_failed_save_keeps_collection() {
        let mut builder = sample();
        builder.add(&BlockType::Cta).unwrap();
        builder.take_notices();
        let before = builder.blocks().to_vec();

        let ticket = builder.begin_save().unwrap();
        let err = builder
            .complete_save(ticket, Err("connection reset".into()))
            .unwrap_err();

        assert_eq!(err, BuilderError::SaveFailed("connection reset".into()));
        assert_eq!(builder.blocks(), before.as_slice());
        assert!(builder.is_dirty());
        assert_eq!(
            builder.take_notices(),
            vec![Notice {
                kind: NoticeKind::Error,
                message: "Failed to save content".into()
            }]
        );
    }

    #[test]
    fn test_edits_during_save_stay_dirty() {
        let mut builder = sample();
        builder.add(&BlockType::Hero).unwrap();
        let ticket = builder.begin_save().unwrap();
        let late = builder.add(&BlockType::Cta).unwrap();

        builder.complete_save(ticket, Ok(())).unwrap();
        assert!(builder.is_dirty());
        assert_eq!(builder.block_state(&late), Some(BlockState::UnsavedNew));
    }

    #[tokio::test]
    async fn test_save_through_persistence() {
        let store = RecordingStore {
            saved: Mutex::new(Vec::new()),
            fail: false,
        };
        let mut builder = sample();
        let added = builder.add(&BlockType::Steps).unwrap();

        builder.save(&store).await.unwrap();

        let saved = store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].len(), 5);
        assert!(!builder.is_dirty());
        assert_eq!(builder.block_state(&added), Some(BlockState::Editable));
        assert_eq!(
            builder.take_notices().last().map(|n| n.kind),
            Some(NoticeKind::Success)
        );
    }

    #[tokio::test]
    async fn test_save_failure_surfaces_error() {
        let store = RecordingStore {
            saved: Mutex::new(Vec::new()),
            fail: true,
        };
        let mut builder = sample();

        let err = builder.save(&store).await.unwrap_err();
        assert!(matches!(err, BuilderError::SaveFailed(_)));
        assert!(!builder.is_saving());
        assert_eq!(builder.len(), 4);
    }

    #[test]
    fn test_cards_describe_blocks() {
        let mut builder = sample();
        builder.begin_edit("c").unwrap();
        let cards = builder.cards();

        assert_eq!(cards[0].icon, "🎯");
        assert_eq!(cards[2].order_label, "Order: 3");
        assert!(cards[2].selected);
        assert_eq!(cards[3].type_label, "FAQ");
    }

    #[test]
    fn test_renumber_holds_for_any_length() {
        for n in 0..6 {
            let blocks = (0..n)
                .map(|i| Block::new(format!("b{}", i), BlockType::Text).with_order((n - i) as i64 * 7))
                .collect();
            let mut builder = ContentBuilder::with_blocks(blocks);
            assert_contiguous(&builder);
            if n > 1 {
                let first = builder.blocks()[0].id.clone();
                let last = builder.blocks()[n - 1].id.clone();
                builder.move_block(&first, Some(&last)).unwrap();
                assert_contiguous(&builder);
                builder.delete(&last, |_| true).unwrap();
                assert_contiguous(&builder);
            }
        }
    }
}
