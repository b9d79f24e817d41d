//! Stockroom CLI - interactive menu shell for the inventory store

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use stockroom::validation::{prompt_line, prompt_nonempty_line, prompt_positive_number};
use stockroom::{Inventory, InventoryError, Item};

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(version)]
#[command(about = "Single-user inventory tracker with SQLite storage")]
struct Cli {
    /// Path to the inventory database file
    #[arg(short, long, default_value = stockroom::DATABASE_FILENAME)]
    database: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// One menu action, dispatched from the operator's numeric choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddItem,
    DeleteItem,
    SearchItem,
    EditItem,
    DisplayInventory,
    Exit,
}

impl MenuChoice {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::AddItem),
            "2" => Some(Self::DeleteItem),
            "3" => Some(Self::SearchItem),
            "4" => Some(Self::EditItem),
            "5" => Some(Self::DisplayInventory),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let mut inventory = Inventory::open(&cli.database).with_context(|| {
        format!(
            "failed to open inventory database at {}",
            cli.database.display()
        )
    })?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(&inventory, &mut stdin.lock(), &mut stdout.lock())?;

    inventory.close();
    Ok(())
}

/// Display the menu and dispatch choices until the operator exits
///
/// Storage errors end the current operation and return to the menu;
/// IO errors on the terminal end the session.
fn run_menu<R: BufRead, W: Write>(
    inventory: &Inventory,
    input: &mut R,
    output: &mut W,
) -> stockroom::Result<()> {
    loop {
        print_menu(output)?;

        let raw = prompt_line(input, output, "Enter your choice: ")?;
        let Some(choice) = MenuChoice::parse(&raw) else {
            writeln!(output, "Invalid choice.")?;
            continue;
        };

        if choice == MenuChoice::Exit {
            return Ok(());
        }

        match dispatch(choice, inventory, input, output) {
            Ok(()) => {}
            Err(err @ InventoryError::IoError(_)) => return Err(err),
            Err(err) => writeln!(output, "Error: {err}")?,
        }
    }
}

fn print_menu<W: Write>(output: &mut W) -> stockroom::Result<()> {
    writeln!(output)?;
    writeln!(output, "Inventory Management System")?;
    writeln!(output, "1. Add item")?;
    writeln!(output, "2. Delete item")?;
    writeln!(output, "3. Search item")?;
    writeln!(output, "4. Edit item")?;
    writeln!(output, "5. Display inventory")?;
    writeln!(output, "6. Exit")?;
    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    inventory: &Inventory,
    input: &mut R,
    output: &mut W,
) -> stockroom::Result<()> {
    match choice {
        MenuChoice::AddItem => add_item(inventory, input, output),
        MenuChoice::DeleteItem => delete_item(inventory, input, output),
        MenuChoice::SearchItem => search_item(inventory, input, output),
        MenuChoice::EditItem => edit_item(inventory, input, output),
        MenuChoice::DisplayInventory => display_inventory(inventory, output),
        MenuChoice::Exit => Ok(()),
    }
}

fn add_item<R: BufRead, W: Write>(
    inventory: &Inventory,
    input: &mut R,
    output: &mut W,
) -> stockroom::Result<()> {
    let name = prompt_nonempty_line(input, output, "Enter item name: ")?;
    let quantity = prompt_positive_number(input, output, "Enter quantity: ")?;
    let price = prompt_positive_number(input, output, "Enter price: ")?;
    let category = prompt_line(input, output, "Enter item category (optional): ")?;

    inventory.upsert(&Item::new(&name, quantity, price, &category))?;
    writeln!(output, "{name} added to inventory.")?;
    Ok(())
}

fn delete_item<R: BufRead, W: Write>(
    inventory: &Inventory,
    input: &mut R,
    output: &mut W,
) -> stockroom::Result<()> {
    let name = prompt_nonempty_line(input, output, "Enter item name to delete: ")?;

    if inventory.delete(&name)? == 0 {
        writeln!(output, "{name} not found in inventory.")?;
    } else {
        writeln!(output, "{name} deleted from inventory.")?;
    }
    Ok(())
}

fn search_item<R: BufRead, W: Write>(
    inventory: &Inventory,
    input: &mut R,
    output: &mut W,
) -> stockroom::Result<()> {
    let term = prompt_line(input, output, "Enter item name or category to search: ")?;
    let found = inventory.search(&term)?;

    if found.is_empty() {
        writeln!(output, "Item not found.")?;
        return Ok(());
    }

    writeln!(output, "Search results:")?;
    for item in &found {
        print_item(output, item)?;
    }
    Ok(())
}

fn edit_item<R: BufRead, W: Write>(
    inventory: &Inventory,
    input: &mut R,
    output: &mut W,
) -> stockroom::Result<()> {
    let name = prompt_nonempty_line(input, output, "Enter item name to edit: ")?;

    // Report a missing item before asking for the new values
    if inventory.get(&name)?.is_none() {
        writeln!(output, "{name} not found in inventory.")?;
        return Ok(());
    }

    let quantity = prompt_positive_number(input, output, "Enter new quantity: ")?;
    let price = prompt_positive_number(input, output, "Enter new price: ")?;

    if inventory.edit(&name, quantity, price)? {
        writeln!(output, "{name} updated.")?;
    } else {
        writeln!(output, "{name} not found in inventory.")?;
    }
    Ok(())
}

fn display_inventory<W: Write>(inventory: &Inventory, output: &mut W) -> stockroom::Result<()> {
    let report = inventory.list_all()?;

    if report.is_empty() {
        writeln!(output, "Inventory is empty.")?;
        return Ok(());
    }

    writeln!(output, "Inventory:")?;
    for item in &report.items {
        print_item(output, item)?;
    }
    writeln!(output, "Total inventory value: ${:.2}", report.total_value)?;
    Ok(())
}

fn print_item<W: Write>(output: &mut W, item: &Item) -> stockroom::Result<()> {
    writeln!(
        output,
        "- {} (Category: {}): Quantity {}, Price {}",
        item.name, item.category, item.quantity, item.price
    )?;
    Ok(())
}
