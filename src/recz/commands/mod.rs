use crate::model::Record;

pub mod add;
pub mod find;
pub mod helpers;
pub mod list;
pub mod remove;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command.
///
/// Commands never print; the CLI layer renders `collection`/`record` as
/// JSON and the messages as leveled diagnostics. Mutating commands echo
/// the updated collection, `list` echoes the loaded one, `find` carries
/// at most a single record.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub collection: Option<Vec<Record>>,
    pub record: Option<Record>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_collection(mut self, records: Vec<Record>) -> Self {
        self.collection = Some(records);
        self
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.record = Some(record);
        self
    }
}
