use crate::commands::CmdResult;
use crate::error::{ReczError, Result};
use crate::store::DataStore;

use super::helpers::find_index;

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    if id.is_empty() {
        return Err(ReczError::MissingArgument("id"));
    }

    let mut records = store.load()?;
    match find_index(id, &records) {
        // No match is a silent success: no payload, no message.
        None => Ok(CmdResult::default()),
        Some(i) => Ok(CmdResult::default().with_record(records.swap_remove(i))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_matching_record() {
        let mut fixture = StoreFixture::new()
            .with_record("1", "a@x.com", 30)
            .with_record("2", "b@x.com", 41);

        let result = run(&mut fixture.store, "2").unwrap();
        assert_eq!(result.record.unwrap(), Record::new("2", "b@x.com", 41));
    }

    #[test]
    fn no_match_is_silent() {
        let mut fixture = StoreFixture::new().with_record("1", "a@x.com", 30);

        let result = run(&mut fixture.store, "2").unwrap();
        assert!(result.record.is_none());
        assert!(result.collection.is_none());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn repeated_lookup_yields_identical_result() {
        let mut fixture = StoreFixture::new().with_record("1", "a@x.com", 30);

        let first = run(&mut fixture.store, "1").unwrap().record;
        let second = run(&mut fixture.store, "1").unwrap().record;
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_empty_id() {
        let mut fixture = StoreFixture::new();
        assert!(matches!(
            run(&mut fixture.store, ""),
            Err(ReczError::MissingArgument("id"))
        ));
    }
}
