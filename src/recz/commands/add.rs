use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ReczError, Result};
use crate::model::Record;
use crate::store::DataStore;

use super::helpers::find_index;

pub fn run<S: DataStore>(store: &mut S, payload: &str) -> Result<CmdResult> {
    if payload.is_empty() {
        return Err(ReczError::MissingArgument("item"));
    }

    let record: Record = serde_json::from_str(payload)?;
    if record.id.is_empty() {
        return Err(ReczError::EmptyId);
    }

    let mut records = store.load()?;
    let mut result = CmdResult::default();

    if find_index(&record.id, &records).is_some() {
        result.add_message(CmdMessage::warning(format!(
            "Item with id {} already exists",
            record.id
        )));
        return Ok(result);
    }

    records.push(record);
    store.save(&records)?;
    Ok(result.with_collection(records))
}
