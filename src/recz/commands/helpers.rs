use crate::model::Record;

/// Linear scan for a record id, first match wins.
pub fn find_index(id: &str, records: &[Record]) -> Option<usize> {
    records.iter().position(|r| r.id == id)
}
