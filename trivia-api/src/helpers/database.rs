use crate::storage::migrations::run_migrations;
use crate::DbConnection;
use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

/// SQL function folding case with Unicode rules; SQLite's own `lower()` only
/// folds ASCII letters.
pub const UNICODE_LOWER_FN: &str = "unicode_lower";

/// Opens (creating if needed) the SQLite database at `db_path` and brings its
/// schema up to date.
pub fn initialize_database(db_path: &Path) -> anyhow::Result<DbConnection> {
    // Ensure directory exists
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = Connection::open(db_path)?;
    info!(path = %db_path.display(), "Opened trivia database");
    prepare(conn)
}

pub fn open_in_memory() -> anyhow::Result<DbConnection> {
    prepare(Connection::open_in_memory()?)
}

fn prepare(mut conn: Connection) -> anyhow::Result<DbConnection> {
    // Questions reference categories; SQLite leaves FK checks off by default
    conn.execute("PRAGMA foreign_keys = ON", [])?;

    // Search compares both sides through this function
    conn.create_scalar_function(
        UNICODE_LOWER_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )?;

    run_migrations(&mut conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_lower_folds_non_ascii_letters() {
        let conn = open_in_memory().unwrap();
        let conn = conn.lock().unwrap();
        let folded: String = conn
            .query_row("SELECT unicode_lower('ÉTUDE Ñandú')", [], |row| row.get(0))
            .unwrap();
        assert_eq!(folded, "étude ñandú");

        let null: Option<String> = conn
            .query_row("SELECT unicode_lower(NULL)", [], |row| row.get(0))
            .unwrap();
        assert_eq!(null, None);
    }
}
