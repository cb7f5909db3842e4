use super::DataStore;
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&mut self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            let mut records = self.store.load().unwrap();
            for i in 0..count {
                records.push(Record::new(
                    format!("{}", i + 1),
                    format!("user{}@example.com", i + 1),
                    20 + i as u64,
                ));
            }
            self.store.save(&records).unwrap();
            self
        }

        pub fn with_record(mut self, id: &str, email: &str, age: u64) -> Self {
            let mut records = self.store.load().unwrap();
            records.push(Record::new(id, email, age));
            self.store.save(&records).unwrap();
            self
        }
    }
}
