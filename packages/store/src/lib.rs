pub mod config;
pub mod models;
pub mod storage;
pub mod templates;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::ClientConfig;
pub use models::{
    Block, BlockId, BlockKind, BlockType, BlockUpdate, Page, PagePatch, PageSummary, TaskStatus,
    UserInfo,
};
pub use storage::{KeyValueStore, StorageError};
pub use templates::PageTemplate;
