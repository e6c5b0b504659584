use rocket::{fs::NamedFile, get, State};
use std::path::PathBuf;

pub struct StaticDir(pub PathBuf);

#[get("/")]
pub async fn index(dir: &State<StaticDir>) -> Option<NamedFile> {
    NamedFile::open(dir.0.join("home.html")).await.ok()
}

#[get("/ping")]
pub fn ping() -> &'static str {
    "pong"
}
