//! JSON batch decoding.

use crate::core::Result;
use crate::ingest::record::RawRecord;

/// Decode a JSON array of event objects into raw rows.
///
/// A file that is not a valid JSON sequence of records fails as a whole; no
/// partial batch is returned.
pub fn parse_json(input: &[u8]) -> Result<Vec<RawRecord>> {
    let rows: Vec<RawRecord> = serde_json::from_slice(input)?;
    Ok(rows)
}
