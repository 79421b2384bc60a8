//! # Page document model
//!
//! [`PageDocument`] is the editor's copy of one page. Every mutation is
//! applied locally first and returns a [`PendingSave`] carrying the same
//! partial fields; the caller sends it with [`PendingSave::send`] and then
//! calls [`PageDocument::finish_save`]. A failed save is logged and the local
//! copy is kept as-is (no rollback), so the document can drift from the
//! backend until the next load.
//!
//! Block list mutations (`add_block`, `update_block`, `toggle_block`,
//! `reorder`, `remove_block`) always send the full block sequence.

use std::future::Future;

use api::{ApiClient, ApiResult};
use store::{Block, BlockId, BlockType, BlockUpdate, Page, PagePatch};

/// Glyphs offered by the icon picker, in cycling order.
pub const PAGE_ICONS: [&str; 8] = [
    "\u{1F4DD}",
    "\u{1F3E0}",
    "\u{1F680}",
    "\u{1F4A1}",
    "\u{2705}",
    "\u{1F4C5}",
    "\u{1F3A8}",
    "\u{2699}\u{FE0F}",
];

/// The icon after `current` in [`PAGE_ICONS`]; the first one when `current`
/// is unset or not in the set.
pub fn next_icon(current: Option<&str>) -> &'static str {
    let position = current.and_then(|c| PAGE_ICONS.iter().position(|i| *i == c));
    match position {
        Some(i) => PAGE_ICONS[(i + 1) % PAGE_ICONS.len()],
        None => PAGE_ICONS[0],
    }
}

/// Where pages are read from and saved to.
pub trait PageBackend {
    fn fetch_page(&self, id: &str) -> impl Future<Output = ApiResult<Page>>;
    fn save_page(&self, id: &str, patch: &PagePatch) -> impl Future<Output = ApiResult<()>>;
}

impl PageBackend for ApiClient {
    async fn fetch_page(&self, id: &str) -> ApiResult<Page> {
        self.get_page(id).await
    }

    async fn save_page(&self, id: &str, patch: &PagePatch) -> ApiResult<()> {
        self.update_page(id, patch).await
    }
}

/// A save the document has already applied locally.
#[derive(Clone, Debug, PartialEq)]
#[must_use = "a pending save does nothing until it is sent"]
pub struct PendingSave {
    pub page_id: String,
    pub patch: PagePatch,
}

impl PendingSave {
    /// Issue the PATCH. Failures are logged, never returned.
    pub async fn send(self, backend: &impl PageBackend) {
        if let Err(e) = backend.save_page(&self.page_id, &self.patch).await {
            tracing::error!("Failed to update page {}: {}", self.page_id, e);
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageDocument {
    page_id: String,
    page: Option<Page>,
    loading: bool,
    in_flight: usize,
}

impl PageDocument {
    /// A document waiting for `page_id` to load.
    pub fn loading(page_id: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            page: None,
            loading: true,
            in_flight: 0,
        }
    }

    /// Fetch `page_id` and build a loaded document. A failed fetch is logged
    /// and yields a document with no page.
    pub async fn load(page_id: &str, backend: &impl PageBackend) -> Self {
        let mut doc = Self::loading(page_id);
        doc.finish_load(backend.fetch_page(page_id).await);
        doc
    }

    pub fn finish_load(&mut self, result: ApiResult<Page>) {
        self.loading = false;
        match result {
            Ok(mut page) => {
                let renamed = page.normalize_blocks();
                if renamed > 0 {
                    tracing::warn!("Page {} had {} duplicate block ids", page.id, renamed);
                }
                self.page = Some(page);
            }
            Err(e) => {
                tracing::error!("Failed to fetch page {}: {}", self.page_id, e);
                self.page = None;
            }
        }
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    pub fn blocks(&self) -> &[Block] {
        self.page.as_ref().map(|p| p.content.as_slice()).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True while at least one save has not finished.
    pub fn is_saving(&self) -> bool {
        self.in_flight > 0
    }

    pub fn finish_save(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Merge `patch` into the local page and hand it back for sending.
    /// `None` when no page is loaded or the patch is empty.
    pub fn update(&mut self, patch: PagePatch) -> Option<PendingSave> {
        if patch.is_empty() {
            return None;
        }
        let page = self.page.as_mut()?;
        page.apply(&patch);
        self.in_flight += 1;
        Some(PendingSave {
            page_id: self.page_id.clone(),
            patch,
        })
    }

    fn save_content(&mut self, content: Vec<Block>) -> Option<PendingSave> {
        self.update(PagePatch::content(content))
    }

    pub fn add_block(&mut self, block_type: BlockType) -> Option<PendingSave> {
        let mut content = self.page.as_ref()?.content.clone();
        content.push(Block::new(block_type));
        self.save_content(content)
    }

    pub fn update_block(&mut self, index: usize, update: &BlockUpdate) -> Option<PendingSave> {
        let mut content = self.page.as_ref()?.content.clone();
        content.get_mut(index)?.apply(update);
        self.save_content(content)
    }

    /// Flip the completion flag of the todo block at `index`.
    pub fn toggle_block(&mut self, index: usize) -> Option<PendingSave> {
        let mut content = self.page.as_ref()?.content.clone();
        content.get_mut(index)?.toggle_checked()?;
        self.save_content(content)
    }

    /// Move block `from` to the position `to` currently occupies.
    pub fn reorder(&mut self, from: &BlockId, to: &BlockId) -> Option<PendingSave> {
        if from == to {
            return None;
        }
        let page = self.page.as_ref()?;
        let old_index = page.position(from)?;
        let new_index = page.position(to)?;

        let mut content = page.content.clone();
        let block = content.remove(old_index);
        content.insert(new_index, block);
        self.save_content(content)
    }

    pub fn remove_block(&mut self, id: &BlockId) -> Option<PendingSave> {
        let page = self.page.as_ref()?;
        let index = page.position(id)?;
        let mut content = page.content.clone();
        content.remove(index);
        self.save_content(content)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Option<PendingSave> {
        self.update(PagePatch::title(title))
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) -> Option<PendingSave> {
        self.update(PagePatch {
            icon: Some(Some(icon.into())),
            ..PagePatch::default()
        })
    }

    /// Advance the icon through [`PAGE_ICONS`].
    pub fn cycle_icon(&mut self) -> Option<PendingSave> {
        let current = self.page.as_ref()?.icon.clone();
        self.set_icon(next_icon(current.as_deref()))
    }

    pub fn remove_icon(&mut self) -> Option<PendingSave> {
        self.update(PagePatch {
            icon: Some(None),
            ..PagePatch::default()
        })
    }

    pub fn set_cover(&mut self, cover: Option<String>) -> Option<PendingSave> {
        self.update(PagePatch {
            cover_image: Some(cover),
            ..PagePatch::default()
        })
    }

    pub fn toggle_public(&mut self) -> Option<PendingSave> {
        let is_public = !self.page.as_ref()?.is_public;
        self.update(PagePatch {
            is_public: Some(is_public),
            ..PagePatch::default()
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use api::ApiError;
    use store::{BlockKind, TaskStatus};

    /// Records every save; optionally fails them.
    #[derive(Clone, Default)]
    pub(crate) struct FakeBackend {
        pub page: Option<Page>,
        pub fail_saves: bool,
        pub saves: Arc<Mutex<Vec<(String, PagePatch)>>>,
    }

    impl PageBackend for FakeBackend {
        async fn fetch_page(&self, id: &str) -> ApiResult<Page> {
            self.page.clone().ok_or(ApiError::Status {
                status: 404,
                message: format!("no page {id}"),
            })
        }

        async fn save_page(&self, id: &str, patch: &PagePatch) -> ApiResult<()> {
            self.saves.lock().unwrap().push((id.to_string(), patch.clone()));
            if self.fail_saves {
                return Err(ApiError::Status {
                    status: 500,
                    message: "boom".into(),
                });
            }
            Ok(())
        }
    }

    pub(crate) fn todo(id: &str, content: &str) -> Block {
        Block::with_content(
            id,
            BlockKind::Todo {
                content: content.into(),
                checked: false,
                status: TaskStatus::NotStarted,
                due_date: None,
            },
        )
    }

    pub(crate) fn page_with(blocks: Vec<Block>) -> Page {
        Page {
            id: "p1".into(),
            title: "Plan".into(),
            icon: None,
            cover_image: None,
            is_public: false,
            content: blocks,
            created_at: None,
            updated_at: None,
        }
    }

    pub(crate) fn loaded(blocks: Vec<Block>) -> PageDocument {
        let mut doc = PageDocument::loading("p1");
        doc.finish_load(Ok(page_with(blocks)));
        doc
    }

    fn ids(doc: &PageDocument) -> Vec<&str> {
        doc.blocks().iter().map(|b| b.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_load_normalizes_duplicate_ids() {
        let backend = FakeBackend {
            page: Some(page_with(vec![todo("a", "1"), todo("a", "2")])),
            ..FakeBackend::default()
        };
        let doc = PageDocument::load("p1", &backend).await;
        assert!(!doc.is_loading());
        assert_eq!(doc.blocks()[0].id.as_str(), "a");
        assert_ne!(doc.blocks()[1].id.as_str(), "a");
    }

    #[tokio::test]
    async fn test_failed_load_clears_loading() {
        let doc = PageDocument::load("missing", &FakeBackend::default()).await;
        assert!(!doc.is_loading());
        assert!(doc.page().is_none());
    }

    #[test]
    fn test_reorder_swaps_two_blocks() {
        let mut doc = loaded(vec![todo("b1", "first"), todo("b2", "second")]);
        let save = doc.reorder(&"b2".into(), &"b1".into()).unwrap();
        assert_eq!(ids(&doc), ["b2", "b1"]);
        assert_eq!(save.patch, PagePatch::content(doc.blocks().to_vec()));
        assert!(doc.is_saving());
    }

    #[test]
    fn test_reorder_onto_itself_is_noop() {
        let mut doc = loaded(vec![todo("a", ""), todo("b", "")]);
        assert!(doc.reorder(&"a".into(), &"a".into()).is_none());
        assert!(doc.reorder(&"a".into(), &"zz".into()).is_none());
        assert_eq!(ids(&doc), ["a", "b"]);
        assert!(!doc.is_saving());
    }

    #[test]
    fn test_reorder_sequences_keep_a_permutation() {
        let original: Vec<Block> = (0..6).map(|i| todo(&format!("b{i}"), &format!("text {i}"))).collect();
        let mut doc = loaded(original.clone());
        let moves = [("b0", "b5"), ("b3", "b1"), ("b5", "b0"), ("b2", "b2"), ("b4", "b3")];
        for (from, to) in moves {
            let _ = doc.reorder(&from.into(), &to.into());
        }

        let mut after = doc.blocks().to_vec();
        assert_eq!(after.len(), original.len());
        after.sort_by(|a, b| a.id.cmp(&b.id));
        let mut before = original;
        before.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(after, before);
    }

    #[test]
    fn test_reorder_moves_down_like_array_move() {
        let mut doc = loaded(vec![todo("a", ""), todo("b", ""), todo("c", ""), todo("d", "")]);
        let _ = doc.reorder(&"a".into(), &"c".into());
        assert_eq!(ids(&doc), ["b", "c", "a", "d"]);
    }

    #[test]
    fn test_add_block_defaults() {
        let mut doc = loaded(vec![]);
        let _ = doc.add_block(BlockType::default());
        let block = &doc.blocks()[0];
        assert_eq!(
            block.kind,
            BlockKind::Todo {
                content: String::new(),
                checked: false,
                status: TaskStatus::NotStarted,
                due_date: None,
            }
        );
        assert!(!block.id.as_str().is_empty());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut doc = loaded(vec![todo("a", "x")]);
        let _ = doc.toggle_block(0);
        assert!(matches!(
            doc.blocks()[0].kind,
            BlockKind::Todo { checked: true, status: TaskStatus::Done, .. }
        ));
        let _ = doc.toggle_block(0);
        assert_eq!(doc.blocks()[0], todo("a", "x"));
    }

    #[test]
    fn test_update_block_out_of_range_is_noop() {
        let mut doc = loaded(vec![todo("a", "x")]);
        assert!(doc.update_block(3, &BlockUpdate::content("y")).is_none());
        assert_eq!(doc.blocks()[0].content(), "x");
    }

    #[test]
    fn test_remove_block_sends_full_content() {
        let mut doc = loaded(vec![todo("a", ""), todo("b", "")]);
        let save = doc.remove_block(&"a".into()).unwrap();
        assert_eq!(ids(&doc), ["b"]);
        assert_eq!(save.patch.content.map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_mutations_without_page_do_nothing() {
        let mut doc = PageDocument::loading("p1");
        assert!(doc.set_title("x").is_none());
        assert!(doc.add_block(BlockType::Todo).is_none());
        assert!(!doc.is_saving());
    }

    #[test]
    fn test_icon_cycle_and_remove() {
        let mut doc = loaded(vec![]);
        let _ = doc.cycle_icon();
        assert_eq!(doc.page().unwrap().icon.as_deref(), Some(PAGE_ICONS[0]));
        let _ = doc.cycle_icon();
        assert_eq!(doc.page().unwrap().icon.as_deref(), Some(PAGE_ICONS[1]));
        let save = doc.remove_icon().unwrap();
        assert_eq!(save.patch.icon, Some(None));
        assert!(doc.page().unwrap().icon.is_none());
        assert_eq!(next_icon(Some(PAGE_ICONS[7])), PAGE_ICONS[0]);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_optimistic_state() {
        let backend = FakeBackend {
            fail_saves: true,
            ..FakeBackend::default()
        };
        let mut doc = loaded(vec![]);
        let save = doc.set_title("Renamed").unwrap();
        save.send(&backend).await;
        doc.finish_save();

        assert_eq!(doc.page().unwrap().title, "Renamed");
        assert!(!doc.is_saving());
        let saves = backend.saves.lock().unwrap();
        assert_eq!(saves.len(), 1);
        assert_eq!(saves[0].1, PagePatch::title("Renamed"));
    }

    #[test]
    fn test_toggle_public() {
        let mut doc = loaded(vec![]);
        let save = doc.toggle_public().unwrap();
        assert_eq!(save.patch.is_public, Some(true));
        assert!(doc.page().unwrap().is_public);
    }
}
