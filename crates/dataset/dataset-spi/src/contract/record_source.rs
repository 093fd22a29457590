//! Record source trait definition.

use crate::error::Result;
use crate::model::{RawRecord, SourceFingerprint};

/// Anything that can supply the raw record set.
///
/// Implementations read synchronously; a read either returns every record
/// or fails as a whole.
pub trait RecordSource: Send + Sync {
    /// Human-readable source name, used in logs and the UI.
    fn name(&self) -> &str;

    /// Read every raw record.
    fn read_records(&self) -> Result<Vec<RawRecord>>;

    /// Current identity of the underlying data.
    ///
    /// `None` means the source cannot change after construction.
    fn fingerprint(&self) -> Result<Option<SourceFingerprint>> {
        Ok(None)
    }
}
