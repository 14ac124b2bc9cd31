//! Clear command implementation.

use crate::cli::ClearArgs;
use crate::error::Result;
use crate::output::Formatter;
use rfpdesk_domain::traits::DocumentPersistence;
use rfpdesk_store::JsonFileStore;
use std::io::{self, Write};

/// Execute the clear command.
pub fn execute_clear(args: ClearArgs, store: &JsonFileStore, formatter: &Formatter) -> Result<()> {
    let count = store.load()?.len();
    if count == 0 {
        println!("{}", formatter.info("No documents to delete"));
        return Ok(());
    }

    // Confirm deletion unless --yes is specified
    if !args.yes {
        print!("{} ", confirmation_prompt(count, store, formatter));
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;

        if !response.trim().eq_ignore_ascii_case("y") {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(());
        }
    }

    store.clear()?;
    println!("{}", formatter.success(&format!("Deleted {} document(s)", count)));
    Ok(())
}

fn confirmation_prompt(count: usize, store: &JsonFileStore, formatter: &Formatter) -> String {
    formatter.warning(&format!(
        "About to delete {} document(s) from {}. Continue? [y/N]",
        count,
        store.path().display()
    ))
}
