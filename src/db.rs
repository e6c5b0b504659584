use crate::conf::Conf;
use anyhow::Result;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::{fs::remove_file, process::exit};
use tracing::{error, info, warn};

pub type DbPool = Pool<SqliteConnectionManager>;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS conversions (
    id INTEGER PRIMARY KEY,
    original_amount REAL NOT NULL,
    converted_amount REAL NOT NULL,
    country_code TEXT NOT NULL,
    currency_code TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS assets (
    name TEXT PRIMARY KEY,
    content BLOB NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS worldcerts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    labname TEXT NOT NULL,
    medicinename TEXT NOT NULL,
    country TEXT NOT NULL,
    noofparticipants INTEGER NOT NULL,
    placebo INTEGER NOT NULL,
    participantbelongsto TEXT NOT NULL,
    currencytype TEXT NOT NULL,
    premiumamount REAL NOT NULL,
    category TEXT NOT NULL
);
"#;

pub fn cli(args: &[String]) {
    let first_arg = args.first().unwrap_or_else(|| {
        error!("No args provided");
        exit(1);
    });

    let res = match first_arg.as_str() {
        "init" => Conf::new().and_then(|conf| pool(&conf)).map(|_| ()),
        "drop" => drop(),
        _ => {
            error!(?args, "Unknown argument");
            exit(1);
        }
    };

    if let Err(e) = res {
        error!(%e, command = %first_arg, "Database command failed");
        exit(1);
    }
}

fn drop() -> Result<()> {
    warn!("Dropping database...");
    let db_url = Conf::new()?.db_url;
    info!(%db_url);
    remove_file(db_url)?;
    warn!("Database has been dropped");
    Ok(())
}

/// Opens the pool and makes sure every table exists.
pub fn pool(conf: &Conf) -> Result<DbPool> {
    info!(db_url = %conf.db_url, "Opening database");
    let manager = SqliteConnectionManager::file(&conf.db_url);
    let pool = Pool::new(manager)?;
    init_schema(&*pool.get()?)?;
    Ok(pool)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
