use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use recz::error::ReczError;

#[derive(Parser, Debug)]
#[command(name = "recz")]
#[command(about = "Command-line store for user records in a single JSON file", long_about = None)]
pub struct Cli {
    /// Path to the JSON storage file (created if absent)
    #[arg(long)]
    pub file_name: PathBuf,

    /// Operation to perform: add, list, findById or remove
    #[arg(long)]
    pub operation: String,

    /// Record identifier (required by findById and remove)
    #[arg(long)]
    pub id: Option<String>,

    /// Record payload as a JSON object with id, email and age fields
    /// (required by add)
    #[arg(long)]
    pub item: Option<String>,
}

/// The four supported operations.
///
/// Parsed up front so an unknown operation fails before the storage file
/// is even opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    List,
    FindById,
    Remove,
}

impl FromStr for Operation {
    type Err = ReczError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "list" => Ok(Operation::List),
            "findById" => Ok(Operation::FindById),
            "remove" => Ok(Operation::Remove),
            other => Err(ReczError::UnsupportedOperation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_operations() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("list".parse::<Operation>().unwrap(), Operation::List);
        assert_eq!(
            "findById".parse::<Operation>().unwrap(),
            Operation::FindById
        );
        assert_eq!("remove".parse::<Operation>().unwrap(), Operation::Remove);
    }

    #[test]
    fn rejects_unknown_operation() {
        assert!(matches!(
            "bogus".parse::<Operation>(),
            Err(ReczError::UnsupportedOperation(op)) if op == "bogus"
        ));
    }

    #[test]
    fn operation_names_are_case_sensitive() {
        assert!("findbyid".parse::<Operation>().is_err());
        assert!("Add".parse::<Operation>().is_err());
    }
}
