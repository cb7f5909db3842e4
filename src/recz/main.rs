use clap::Parser;
use colored::*;
use recz::api::{CmdMessage, CmdResult, MessageLevel, ReczApi};
use recz::error::Result;
use recz::store::fs::FileStore;

mod args;
use args::{Cli, Operation};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Validate the operation before touching storage so a bogus
    // operation never creates the file.
    let operation: Operation = cli.operation.parse()?;

    let store = FileStore::open(&cli.file_name)?;
    let mut api = ReczApi::new(store);

    // An absent conditional flag is equivalent to an empty one; the
    // command layer rejects both.
    let id = cli.id.unwrap_or_default();
    let item = cli.item.unwrap_or_default();

    let result = match operation {
        Operation::Add => api.add_record(&item)?,
        Operation::List => api.list_records()?,
        Operation::FindById => api.find_by_id(&id)?,
        Operation::Remove => api.remove_record(&id)?,
    };

    render(&result)
}

fn render(result: &CmdResult) -> Result<()> {
    if let Some(record) = &result.record {
        println!("{}", serde_json::to_string(record)?);
    }
    if let Some(collection) = &result.collection {
        println!("{}", serde_json::to_string(collection)?);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
