//! Contract module containing trait definitions for record sources

mod record_source;

pub use record_source::RecordSource;
