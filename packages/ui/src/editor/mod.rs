pub mod document;
pub mod reorder;

mod block_row;
mod page_editor;
mod task_detail;

pub use block_row::BlockRow;
pub use document::{PageBackend, PageDocument, PendingSave};
pub use page_editor::PageEditor;
pub use reorder::{DragAndDrop, DropOutcome, SortableBlocks};
pub use task_detail::TaskDetail;
