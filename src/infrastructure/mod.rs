mod browser;
mod storage;

pub use browser::http::{HttpBrowser, HttpPage, NodeSnapshot};
pub use storage::sqlite_store::SqliteStore;
