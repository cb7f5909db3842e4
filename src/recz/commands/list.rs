use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

// Read-only: the loaded collection is echoed, never saved back.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let records = store.load()?;
    Ok(CmdResult::default().with_collection(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn echoes_full_collection_in_stored_order() {
        let mut fixture = StoreFixture::new()
            .with_record("2", "b@x.com", 41)
            .with_record("1", "a@x.com", 30);

        let result = run(&mut fixture.store).unwrap();
        assert_eq!(
            result.collection.unwrap(),
            vec![Record::new("2", "b@x.com", 41), Record::new("1", "a@x.com", 30)]
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_lists_as_empty_array() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store).unwrap();
        assert_eq!(result.collection.unwrap(), Vec::<Record>::new());
    }
}
