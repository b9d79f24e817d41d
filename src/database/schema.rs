//! Database schema definitions

/// SQL to create the inventory table
pub const CREATE_INVENTORY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS inventory (
    name            TEXT NOT NULL PRIMARY KEY,
    quantity        REAL,
    price           REAL,
    category        TEXT
)
"#;

/// All table creation statements in order
pub const CREATE_ALL_TABLES: &[&str] = &[
    CREATE_INVENTORY_TABLE,
];
