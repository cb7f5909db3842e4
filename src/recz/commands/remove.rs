use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ReczError, Result};
use crate::store::DataStore;

use super::helpers::find_index;

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    if id.is_empty() {
        return Err(ReczError::MissingArgument("id"));
    }

    let mut records = store.load()?;
    let mut result = CmdResult::default();

    match find_index(id, &records) {
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Item with id {} not found",
                id
            )));
            Ok(result)
        }
        Some(i) => {
            records.remove(i);
            store.save(&records)?;
            Ok(result.with_collection(records))
        }
    }
}
