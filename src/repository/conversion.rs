use crate::{db::DbPool, model::ConversionRecord};
use anyhow::Result;
use rusqlite::params;

pub struct ConversionRepository {
    pool: DbPool,
}

impl ConversionRepository {
    pub fn new(pool: DbPool) -> ConversionRepository {
        ConversionRepository { pool }
    }

    pub fn insert(&self, row: &ConversionRecord) -> Result<()> {
        let query = "INSERT INTO conversions (original_amount, converted_amount, country_code, currency_code, created_at) VALUES (?, ?, ?, ?, ?)";
        let params = params![
            row.original_amount,
            row.converted_amount,
            &row.country_code,
            &row.currency_code,
            &row.created_at,
        ];
        self.pool.get()?.execute(query, params)?;
        Ok(())
    }

    /// Newest first.
    pub fn select_all(&self) -> Result<Vec<ConversionRecord>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT original_amount, converted_amount, country_code, currency_code, created_at FROM conversions ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ConversionRecord {
                original_amount: row.get(0)?,
                converted_amount: row.get(1)?,
                country_code: row.get(2)?,
                currency_code: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<Result<_, _>>()?)
    }
}
