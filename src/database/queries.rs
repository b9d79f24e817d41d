//! SQL query operations for database access
//!
//! This module provides low-level query functions over a raw connection.
//! For business-level operations, use the Inventory API.

use rusqlite::{Connection, OptionalExtension, Row, params};
use crate::database::models::Item;
use crate::error::Result;

fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    Ok(Item {
        name: row.get(0)?,
        quantity: row.get(1)?,
        price: row.get(2)?,
        category: row.get(3)?,
    })
}

/// Insert a new item or fully replace an existing row with the same name
pub fn upsert_item(conn: &Connection, item: &Item) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO inventory (name, quantity, price, category)
         VALUES (?, ?, ?, ?)",
        params![item.name, item.quantity, item.price, item.category],
    )?;
    Ok(())
}

/// Get a single item by exact name
pub fn get_item(conn: &Connection, name: &str) -> Result<Option<Item>> {
    conn.query_row(
        "SELECT name, quantity, price, category FROM inventory WHERE name = ?",
        params![name],
        row_to_item,
    )
    .optional()
    .map_err(Into::into)
}

/// Delete the row matching `name` exactly
///
/// Returns the number of rows removed (0 or 1).
pub fn delete_item(conn: &Connection, name: &str) -> Result<usize> {
    let rows = conn.execute("DELETE FROM inventory WHERE name = ?", params![name])?;
    Ok(rows)
}

/// Build a LIKE pattern that matches `term` as a literal substring
///
/// Escapes `\`, `%` and `_` so wildcards in the term do not widen the match.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Find all items whose name or category contains `term` as a substring
///
/// Matching is ASCII-case-insensitive, SQLite's LIKE default. Rows come
/// back in storage order.
pub fn search_items(conn: &Connection, term: &str) -> Result<Vec<Item>> {
    let mut stmt = conn.prepare(
        "SELECT name, quantity, price, category FROM inventory
         WHERE name LIKE ?1 ESCAPE '\\' OR category LIKE ?1 ESCAPE '\\'",
    )?;

    let items = stmt.query_map(params![like_pattern(term)], row_to_item)?;

    items.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

/// Replace quantity and price for the row matching `name`
///
/// Name and category are untouched. Returns the number of rows updated
/// (0 when the item does not exist).
pub fn update_item(conn: &Connection, name: &str, quantity: f64, price: f64) -> Result<usize> {
    let rows = conn.execute(
        "UPDATE inventory SET quantity = ?, price = ? WHERE name = ?",
        params![quantity, price, name],
    )?;
    Ok(rows)
}

/// Get every item in storage order
pub fn get_all_items(conn: &Connection) -> Result<Vec<Item>> {
    let mut stmt = conn.prepare("SELECT name, quantity, price, category FROM inventory")?;

    let items = stmt.query_map([], row_to_item)?;

    items.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}
