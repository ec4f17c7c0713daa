//! Dataset loading and the in-memory price table

pub mod catalog;
pub mod loader;
pub mod sample;
pub mod table;

pub use catalog::SymbolCatalog;
pub use loader::{fetch_remote, load_path, load_reader, load_source, LoadError, LoadReport};
pub use sample::{sample_bars, sample_dataset};
pub use table::PriceTable;
