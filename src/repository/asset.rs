use crate::{db::DbPool, model::Asset};
use anyhow::Result;
use rusqlite::{params, params_from_iter};

pub struct AssetRepository {
    pool: DbPool,
}

impl AssetRepository {
    pub fn new(pool: DbPool) -> AssetRepository {
        AssetRepository { pool }
    }

    /// First write wins: returns 0 when a row with the same name already exists.
    pub fn insert_or_ignore(&self, row: &Asset) -> Result<usize> {
        let query = "INSERT INTO assets (name, content, created_at) VALUES (?, ?, ?) ON CONFLICT (name) DO NOTHING";
        let params = params![&row.name, &row.content, &row.created_at];
        Ok(self.pool.get()?.execute(query, params)?)
    }

    /// Rows for the given names, newest first.
    pub fn select_by_names(&self, names: &[&str]) -> Result<Vec<Asset>> {
        let placeholders = vec!["?"; names.len()].join(", ");
        let query = format!(
            "SELECT name, content, created_at FROM assets WHERE name IN ({}) ORDER BY created_at DESC",
            placeholders
        );
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query_map(params_from_iter(names.iter()), |row| {
            Ok(Asset {
                name: row.get(0)?,
                content: row.get(1)?,
                created_at: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<Result<_, _>>()?)
    }
}
