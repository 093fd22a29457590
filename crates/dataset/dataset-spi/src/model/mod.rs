//! Model module containing the dataset's data structures

mod clean_record;
mod clean_table;
mod column_mapping;
mod raw_record;
mod selection;
mod source_fingerprint;

pub use clean_record::CleanRecord;
pub use clean_table::CleanTable;
pub use column_mapping::ColumnMapping;
pub use raw_record::RawRecord;
pub use selection::Selection;
pub use source_fingerprint::SourceFingerprint;
