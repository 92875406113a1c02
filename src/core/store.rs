//! Persistent dictionary store backed by a single SQLite file.
//!
//! The table layout matches the published `Dict-Sqlite.db`, so stores
//! downloaded from an earlier release can be updated in place.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::core::{Entry, UnitScope};
use crate::error::StoreError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS dict(
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    ORIGIN_NAME     TEXT    NOT NULL,
    TRANS_NAME      TEXT    NOT NULL,
    MODID           TEXT    NOT NULL,
    KEY             TEXT    NOT NULL,
    VERSION         TEXT    NOT NULL,
    CURSEFORGE      TEXT    NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_origin_name ON dict (ORIGIN_NAME);
CREATE INDEX IF NOT EXISTS idx_lookup ON dict (MODID, KEY, VERSION, CURSEFORGE);
"#;

const SELECT_ENTRY: &str =
    "SELECT ORIGIN_NAME, TRANS_NAME, MODID, KEY, VERSION, CURSEFORGE FROM dict";

/// Row id of an entry in the store.
pub type EntryId = i64;

/// Handle to the dictionary store. Single writer; passed explicitly to the
/// reconciliation and projection steps.
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("path", &self.path).finish()
    }
}

impl Store {
    /// Open the store at `path`, creating the file and schema if needed.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let store_error = |source| StoreError {
            path: path.to_path_buf(),
            source,
        };
        let conn = Connection::open(path).map_err(store_error)?;
        conn.execute_batch(SCHEMA).map_err(store_error)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let store_error = |source| StoreError {
            path: PathBuf::from(":memory:"),
            source,
        };
        let conn = Connection::open_in_memory().map_err(store_error)?;
        conn.execute_batch(SCHEMA).map_err(store_error)?;
        Ok(Self { conn, path: None })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All `key → id` pairs within one unit scope.
    ///
    /// If the store holds duplicate identity rows, the lowest id wins.
    pub fn scoped_ids(&self, scope: &UnitScope) -> rusqlite::Result<HashMap<String, EntryId>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT ID, KEY FROM dict WHERE MODID = ?1 AND VERSION = ?2 AND CURSEFORGE = ?3 ORDER BY ID",
        )?;
        let rows = stmt.query_map(
            params![scope.source_id, scope.format_version, scope.registry_id],
            |row| Ok((row.get::<_, EntryId>(0)?, row.get::<_, String>(1)?)),
        )?;

        let mut ids = HashMap::new();
        for row in rows {
            let (id, key) = row?;
            ids.entry(key).or_insert(id);
        }
        Ok(ids)
    }

    /// Id of the entry with the same identity tuple as `entry`, if any.
    pub fn find_id(&self, entry: &Entry) -> rusqlite::Result<Option<EntryId>> {
        self.conn
            .query_row(
                "SELECT ID FROM dict WHERE MODID = ?1 AND KEY = ?2 AND VERSION = ?3 AND CURSEFORGE = ?4 ORDER BY ID LIMIT 1",
                params![
                    entry.source_id,
                    entry.key,
                    entry.format_version,
                    entry.registry_id
                ],
                |row| row.get(0),
            )
            .optional()
    }

    /// Insert new entries and update the texts of existing ones in a single transaction.
    pub fn write_batch(
        &mut self,
        inserts: &[Entry],
        updates: &[(EntryId, Entry)],
    ) -> rusqlite::Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut insert = tx.prepare_cached(
                "INSERT INTO dict (ORIGIN_NAME, TRANS_NAME, MODID, KEY, VERSION, CURSEFORGE) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for entry in inserts {
                insert.execute(params![
                    entry.origin_text,
                    entry.translated_text,
                    entry.source_id,
                    entry.key,
                    entry.format_version,
                    entry.registry_id
                ])?;
            }

            let mut update = tx
                .prepare_cached("UPDATE dict SET ORIGIN_NAME = ?1, TRANS_NAME = ?2 WHERE ID = ?3")?;
            for (id, entry) in updates {
                update.execute(params![entry.origin_text, entry.translated_text, id])?;
            }
        }
        tx.commit()
    }

    /// Every entry, in insertion (id) order.
    pub fn all_entries(&self) -> rusqlite::Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY ID", SELECT_ENTRY))?;
        let rows = stmt.query_map([], entry_from_row)?;
        rows.collect()
    }

    /// Entries whose origin text equals `origin_text`, in id order.
    pub fn find_by_origin(&self, origin_text: &str) -> rusqlite::Result<Vec<Entry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE ORIGIN_NAME = ?1 ORDER BY ID", SELECT_ENTRY))?;
        let rows = stmt.query_map(params![origin_text], entry_from_row)?;
        rows.collect()
    }

    pub fn count(&self) -> rusqlite::Result<usize> {
        self.conn
            .query_row("SELECT COUNT(*) FROM dict", [], |row| row.get::<_, usize>(0))
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry {
        origin_text: row.get(0)?,
        translated_text: row.get(1)?,
        source_id: row.get(2)?,
        key: row.get(3)?,
        format_version: row.get(4)?,
        registry_id: row.get(5)?,
    })
}
