use crate::{db::DbPool, model::Certificate};
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

const COLUMNS: &str = "id, labname, medicinename, country, noofparticipants, placebo, participantbelongsto, currencytype, premiumamount, category";

pub struct CertificateRepository {
    pool: DbPool,
}

impl CertificateRepository {
    pub fn new(pool: DbPool) -> CertificateRepository {
        CertificateRepository { pool }
    }

    /// Ignores `row.id` and returns the generated one.
    pub fn insert(&self, row: &Certificate) -> Result<i64> {
        let query = "INSERT INTO worldcerts (labname, medicinename, country, noofparticipants, placebo, participantbelongsto, currencytype, premiumamount, category) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
        let params = params![
            &row.lab_name,
            &row.medicine_name,
            &row.country,
            row.participants,
            row.placebo,
            &row.participant_belongs_to,
            &row.currency_type,
            row.premium_amount,
            &row.category,
        ];
        let conn = self.pool.get()?;
        conn.execute(query, params)?;
        Ok(conn.last_insert_rowid())
    }

    pub fn select_all(&self) -> Result<Vec<Certificate>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM worldcerts", COLUMNS))?;
        let rows = stmt.query_map([], mapper)?;
        Ok(rows.collect::<Result<_, _>>()?)
    }

    pub fn select_by_id(&self, id: i64) -> Result<Option<Certificate>> {
        Ok(self
            .pool
            .get()?
            .query_row(
                &format!("SELECT {} FROM worldcerts WHERE id = ?", COLUMNS),
                params![id],
                mapper,
            )
            .optional()?)
    }

    /// Replaces every column but the id, returns the number of affected rows.
    pub fn update(&self, id: i64, row: &Certificate) -> Result<usize> {
        let query = "UPDATE worldcerts SET labname = ?, medicinename = ?, country = ?, noofparticipants = ?, placebo = ?, participantbelongsto = ?, currencytype = ?, premiumamount = ?, category = ? WHERE id = ?";
        let params = params![
            &row.lab_name,
            &row.medicine_name,
            &row.country,
            row.participants,
            row.placebo,
            &row.participant_belongs_to,
            &row.currency_type,
            row.premium_amount,
            &row.category,
            id,
        ];
        Ok(self.pool.get()?.execute(query, params)?)
    }

    pub fn delete(&self, id: i64) -> Result<usize> {
        Ok(self
            .pool
            .get()?
            .execute("DELETE FROM worldcerts WHERE id = ?", params![id])?)
    }
}

fn mapper(row: &Row) -> rusqlite::Result<Certificate> {
    Ok(Certificate {
        id: row.get(0)?,
        lab_name: row.get(1)?,
        medicine_name: row.get(2)?,
        country: row.get(3)?,
        participants: row.get(4)?,
        placebo: row.get(5)?,
        participant_belongs_to: row.get(6)?,
        currency_type: row.get(7)?,
        premium_amount: row.get(8)?,
        category: row.get(9)?,
    })
}

#[cfg(test)]
pub mod test {
    use crate::{model::Certificate, repository::CertificateRepository, test::pool};
    use anyhow::Result;

    #[test]
    fn insert() -> Result<()> {
        let repo = CertificateRepository::new(pool());
        let first = repo.insert(&cert())?;
        let second = repo.insert(&cert())?;
        assert!(second > first);
        Ok(())
    }

    #[test]
    fn select_by_id() -> Result<()> {
        let repo = CertificateRepository::new(pool());
        assert!(repo.select_by_id(1)?.is_none());
        let id = repo.insert(&cert())?;
        let res = repo.select_by_id(id)?;
        assert_eq!(Some(Certificate { id, ..cert() }), res);
        Ok(())
    }

    #[test]
    fn select_all() -> Result<()> {
        let repo = CertificateRepository::new(pool());
        assert!(repo.select_all()?.is_empty());
        repo.insert(&cert())?;
        repo.insert(&cert())?;
        assert_eq!(2, repo.select_all()?.len());
        Ok(())
    }

    #[test]
    fn update() -> Result<()> {
        let repo = CertificateRepository::new(pool());
        assert_eq!(0, repo.update(7, &cert())?);
        let id = repo.insert(&cert())?;
        let replacement = Certificate {
            id: 0,
            placebo: false,
            premium_amount: 12.5,
            ..cert()
        };
        assert_eq!(1, repo.update(id, &replacement)?);
        assert_eq!(
            Some(Certificate { id, ..replacement }),
            repo.select_by_id(id)?
        );
        Ok(())
    }

    #[test]
    fn delete() -> Result<()> {
        let repo = CertificateRepository::new(pool());
        let id = repo.insert(&cert())?;
        assert_eq!(1, repo.delete(id)?);
        assert_eq!(0, repo.delete(id)?);
        assert!(repo.select_by_id(id)?.is_none());
        Ok(())
    }

    pub fn cert() -> Certificate {
        Certificate {
            id: 0,
            lab_name: "Northfield Labs".into(),
            medicine_name: "Arvexa".into(),
            country: "in".into(),
            participants: 120,
            placebo: true,
            participant_belongs_to: "Adults".into(),
            currency_type: "INR".into(),
            premium_amount: 100.0,
            category: "Phase II".into(),
        }
    }
}
