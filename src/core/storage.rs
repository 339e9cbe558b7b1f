//! Storage - SQLite backend
//!
//! Two tables:
//! - `knowledge`: one row per topic key. The autoincrement id keeps storage
//!   order, which search uses to break ties.
//! - `interactions`: append-only log of handled commands.
//!
//! Seeding uses `INSERT OR IGNORE`, so reopening a database never duplicates
//! rows or overwrites entries the user taught.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OpenFlags};
use serde::Serialize;
use ulid::Ulid;

use super::knowledge::{topic_key, KnowledgeEntry, KnowledgeStore, USER_CATEGORY};
use super::services::{InteractionLog, InteractionRecord};

/// Database storage
pub struct Storage {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl Storage {
    /// Open or create a database
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open database {}", path.display()))?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")?;

        let storage = Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        };
        storage.init_schema()?;

        Ok(storage)
    }

    /// Open an in-memory database (for testing and `--no-store`)
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let storage = Self {
            conn: Mutex::new(conn),
            path: None,
        };
        storage.init_schema()?;
        Ok(storage)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.lock().execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS knowledge (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                topic TEXT NOT NULL UNIQUE,
                info TEXT NOT NULL,
                category TEXT NOT NULL,
                keywords TEXT NOT NULL DEFAULT '[]'  -- JSON array
            );

            CREATE INDEX IF NOT EXISTS idx_knowledge_category ON knowledge(category);

            CREATE TABLE IF NOT EXISTS interactions (
                id TEXT PRIMARY KEY,  -- ULID
                timestamp TEXT NOT NULL,
                command TEXT NOT NULL,
                response TEXT NOT NULL,
                intent TEXT NOT NULL,
                confidence REAL NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_interactions_timestamp ON interactions(timestamp);
            "#,
        )?;

        Ok(())
    }

    /// Insert entries whose topic is not stored yet. Returns how many were added.
    pub fn seed(&self, entries: &[KnowledgeEntry]) -> Result<usize> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let mut added = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO knowledge (topic, info, category, keywords)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for entry in entries {
                let keywords = serde_json::to_string(&entry.keywords)?;
                added += stmt.execute(params![
                    entry.topic,
                    entry.info,
                    entry.category,
                    keywords
                ])?;
            }
        }
        tx.commit()?;
        Ok(added)
    }

    /// Most recent interactions first
    pub fn recent_interactions(&self, limit: usize) -> Result<Vec<InteractionRecord>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, timestamp, command, response, intent, confidence
             FROM interactions ORDER BY timestamp DESC, id DESC LIMIT ?1",
        )?;

        let records = stmt
            .query_map([limit as i64], Self::row_to_interaction)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<StorageStats> {
        let conn = self.conn.lock();

        let entries: i64 = conn.query_row("SELECT COUNT(*) FROM knowledge", [], |row| row.get(0))?;

        let user_taught: i64 = conn.query_row(
            "SELECT COUNT(*) FROM knowledge WHERE category = ?1",
            [USER_CATEGORY],
            |row| row.get(0),
        )?;

        let interactions: i64 =
            conn.query_row("SELECT COUNT(*) FROM interactions", [], |row| row.get(0))?;

        let mut stmt = conn.prepare(
            "SELECT category, COUNT(*) FROM knowledge GROUP BY category ORDER BY COUNT(*) DESC, category",
        )?;
        let categories = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get::<_, i64>(1)? as usize)))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = conn.prepare(
            "SELECT intent, COUNT(*) FROM interactions GROUP BY intent ORDER BY COUNT(*) DESC, intent",
        )?;
        let intents = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get::<_, i64>(1)? as usize)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StorageStats {
            entries: entries as usize,
            user_taught: user_taught as usize,
            interactions: interactions as usize,
            categories,
            intents,
        })
    }

    /// Convert a database row to a KnowledgeEntry
    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<KnowledgeEntry> {
        let keywords_json: String = row.get("keywords")?;
        Ok(KnowledgeEntry {
            topic: row.get("topic")?,
            info: row.get("info")?,
            category: row.get("category")?,
            keywords: serde_json::from_str(&keywords_json).unwrap_or_default(),
        })
    }

    fn row_to_interaction(row: &rusqlite::Row) -> rusqlite::Result<InteractionRecord> {
        let id_str: String = row.get("id")?;
        let timestamp_str: String = row.get("timestamp")?;

        Ok(InteractionRecord {
            id: Ulid::from_string(&id_str).unwrap_or_else(|_| Ulid::new()),
            timestamp: DateTime::parse_from_rfc3339(&timestamp_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            command: row.get("command")?,
            response: row.get("response")?,
            intent: row.get("intent")?,
            confidence: row.get("confidence")?,
        })
    }
}

impl KnowledgeStore for Storage {
    fn get(&self, topic: &str) -> Result<Option<KnowledgeEntry>> {
        let conn = self.conn.lock();
        let mut stmt =
            conn.prepare("SELECT topic, info, category, keywords FROM knowledge WHERE topic = ?1")?;

        match stmt.query_row([topic_key(topic)], Self::row_to_entry) {
            Ok(entry) => Ok(Some(entry)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn entries(&self) -> Result<Vec<KnowledgeEntry>> {
        let conn = self.conn.lock();
        let mut stmt =
            conn.prepare("SELECT topic, info, category, keywords FROM knowledge ORDER BY id")?;

        let entries = stmt
            .query_map([], Self::row_to_entry)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    fn upsert(&self, entry: KnowledgeEntry) -> Result<()> {
        let keywords = serde_json::to_string(&entry.keywords)?;
        self.conn
            .lock()
            .execute(
                r#"
                INSERT INTO knowledge (topic, info, category, keywords)
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT(topic) DO UPDATE SET
                    info = excluded.info,
                    category = excluded.category,
                    keywords = excluded.keywords
                "#,
                params![entry.topic, entry.info, entry.category, keywords],
            )
            .with_context(|| format!("Failed to store topic '{}'", entry.topic))?;

        Ok(())
    }
}

impl InteractionLog for Storage {
    fn record(&self, record: &InteractionRecord) -> Result<()> {
        self.conn.lock().execute(
            r#"
            INSERT INTO interactions (id, timestamp, command, response, intent, confidence)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                record.id.to_string(),
                record.timestamp.to_rfc3339(),
                record.command,
                record.response,
                record.intent,
                record.confidence,
            ],
        )?;

        Ok(())
    }
}

/// Storage statistics
#[derive(Debug, Clone, Serialize)]
pub struct StorageStats {
    pub entries: usize,
    pub user_taught: usize,
    pub interactions: usize,
    /// `(category, entries)`, largest first
    pub categories: Vec<(String, usize)>,
    /// `(intent, interactions)`, largest first
    pub intents: Vec<(String, usize)>,
}
