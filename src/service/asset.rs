use crate::{
    model::{Asset, ASSET_NAMES},
    repository::AssetRepository,
};
use anyhow::Result;
use std::{collections::BTreeMap, path::Path};
use tracing::{info, warn};

/// Stores every readable upload. Failures are logged and skipped, so the
/// returned count may be lower than the number of uploads.
pub fn upload(uploads: Vec<(&str, Vec<u8>)>, repo: &AssetRepository) -> usize {
    let mut saved = 0;

    for (name, content) in uploads {
        let size = content.len();
        match repo.insert_or_ignore(&Asset::new(name, content)) {
            Ok(0) => info!(%name, size, "Asset already exists, keeping the stored one"),
            Ok(_) => {
                info!(%name, size, "Saved asset");
                saved += 1;
            }
            Err(e) => warn!(%name, %e, "Failed to save asset"),
        }
    }

    saved
}

/// Data URIs of the known assets. The newest row wins if a name has several.
pub fn latest(repo: &AssetRepository) -> Result<BTreeMap<String, String>> {
    let mut assets = BTreeMap::new();

    for asset in repo.select_by_names(&ASSET_NAMES)? {
        let uri = asset.data_uri();
        assets.entry(asset.name).or_insert(uri);
    }

    Ok(assets)
}

/// Seeds the store from `<dir>/<name>.png` for every known asset name.
pub async fn load_dir(dir: &Path, repo: &AssetRepository) -> usize {
    let mut uploads = vec![];

    for name in ASSET_NAMES.iter() {
        let path = dir.join(format!("{}.png", name));

        if !path.is_file() {
            warn!(path = %path.display(), "Skipping missing asset file");
            continue;
        }

        match tokio::fs::read(&path).await {
            Ok(content) => uploads.push((*name, content)),
            Err(e) => warn!(path = %path.display(), %e, "Failed to read asset file"),
        }
    }

    upload(uploads, repo)
}

#[cfg(test)]
mod test {
    use super::{latest, load_dir, upload};
    use crate::{repository::AssetRepository, test::pool};
    use chrono::{Duration, Utc};
    use rusqlite::params;
    use std::{env, fs};

    #[test]
    fn upload_first_write_wins() {
        let repo = AssetRepository::new(pool());
        assert_eq!(1, upload(vec![("logo", b"A".to_vec())], &repo));
        assert_eq!(0, upload(vec![("logo", b"B".to_vec())], &repo));
        let assets = latest(&repo).unwrap();
        assert_eq!("data:image/png;base64,QQ==", assets["logo"]);
    }

    #[test]
    fn upload_survives_failed_insert() {
        let pool = pool();
        pool.get().unwrap().execute_batch("DROP TABLE assets").unwrap();
        let repo = AssetRepository::new(pool);
        assert_eq!(0, upload(vec![("logo", b"A".to_vec())], &repo));
    }

    #[test]
    fn latest_only_known_names() {
        let repo = AssetRepository::new(pool());
        upload(
            vec![("watermark", vec![0]), ("md_signature", vec![1]), ("favicon", vec![2])],
            &repo,
        );
        let assets = latest(&repo).unwrap();
        assert_eq!(vec!["md_signature", "watermark"], assets.keys().collect::<Vec<_>>());
    }

    #[test]
    fn latest_prefers_newest_row() {
        let pool = pool();
        let conn = pool.get().unwrap();
        conn.execute_batch(
            "DROP TABLE assets; CREATE TABLE assets (name TEXT NOT NULL, content BLOB NOT NULL, created_at TEXT NOT NULL)",
        )
        .unwrap();
        let insert = "INSERT INTO assets (name, content, created_at) VALUES (?, ?, ?)";
        let old = Utc::now() - Duration::hours(1);
        conn.execute(insert, params!["logo", b"new".to_vec(), Utc::now()]).unwrap();
        conn.execute(insert, params!["logo", b"old".to_vec(), old]).unwrap();

        let repo = AssetRepository::new(pool.clone());
        assert_eq!(2, repo.select_by_names(&["logo"]).unwrap().len());
        assert_eq!("data:image/png;base64,bmV3", latest(&repo).unwrap()["logo"]);
    }

    #[test]
    fn latest_fails_without_table() {
        let pool = pool();
        pool.get().unwrap().execute_batch("DROP TABLE assets").unwrap();
        assert!(latest(&AssetRepository::new(pool)).is_err());
    }

    #[rocket::async_test]
    async fn load_dir_skips_missing_files() {
        let dir = env::temp_dir().join(format!("worldcert-assets-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("logo.png"), b"logo").unwrap();
        let _ = fs::remove_file(dir.join("watermark.png"));
        let _ = fs::remove_file(dir.join("md_signature.png"));

        let repo = AssetRepository::new(pool());
        assert_eq!(1, load_dir(&dir, &repo).await);
        let assets = latest(&repo).unwrap();
        assert_eq!(1, assets.len());
        assert_eq!("data:image/png;base64,bG9nbw==", assets["logo"]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
