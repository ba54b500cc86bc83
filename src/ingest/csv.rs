//! CSV batch decoding.

use crate::core::Result;
use crate::ingest::record::RawRecord;

/// Decode a CSV table (header row with the event field names) into raw rows.
///
/// Columns the schema does not know are ignored, which makes re-ingesting an
/// already-annotated report harmless. Empty cells become absent fields.
pub fn parse_csv(input: &[u8]) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: RawRecord = result?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_batch() {
        let input = b"sla_type,expected_sla,actual_value,retry_count,infra_status,third_party_status,endpoint,partner,timestamp\n\
            response_time,200,350,3,high_load,normal,/api/pay,payu,2024-06-01T10:00:00Z\n\
            success_rate,99.9,99.95,0,normal,normal,/api/status,mindgate,2024-06-01T10:05:00Z\n";
        let rows = parse_csv(input).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].expected_sla, Some(200.0));
        assert_eq!(rows[1].sla_type.as_deref(), Some("success_rate"));
    }

    #[test]
    fn test_parse_csv_empty_cells_are_absent() {
        let input = b"sla_type,expected_sla,actual_value,retry_count\nresponse_time,200,350,\n";
        let rows = parse_csv(input).unwrap();
        assert_eq!(rows[0].retry_count, None);
    }

    #[test]
    fn test_parse_csv_malformed_is_fatal() {
        let input = b"sla_type,expected_sla,actual_value\nresponse_time,not_a_number,350\n";
        assert!(parse_csv(input).is_err());
    }
}
