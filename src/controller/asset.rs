use crate::{
    model::{ApiError, ApiResult, ASSET_NAMES},
    repository::AssetRepository,
    service::asset,
};
use rocket::{
    form::{Errors, Form},
    fs::TempFile,
    get, post,
    serde::json::Json,
    FromForm, State,
};
use std::{collections::BTreeMap, io};
use tokio::io::AsyncReadExt;
use tracing::warn;

#[derive(FromForm)]
pub struct AssetUpload<'r> {
    watermark: Option<TempFile<'r>>,
    md_signature: Option<TempFile<'r>>,
    logo: Option<TempFile<'r>>,
}

impl<'r> AssetUpload<'r> {
    fn field(&self, name: &str) -> Option<&TempFile<'r>> {
        match name {
            "watermark" => self.watermark.as_ref(),
            "md_signature" => self.md_signature.as_ref(),
            "logo" => self.logo.as_ref(),
            _ => None,
        }
    }
}

async fn read(file: &TempFile<'_>) -> io::Result<Vec<u8>> {
    let reader = file.open().await?;
    tokio::pin!(reader);
    let mut content = Vec::with_capacity(file.len() as usize);
    reader.read_to_end(&mut content).await?;
    Ok(content)
}

#[post("/api/upload-asset", data = "<form>")]
pub async fn upload(
    form: Result<Form<AssetUpload<'_>>, Errors<'_>>,
    repo: &State<AssetRepository>,
) -> Result<&'static str, ApiError> {
    let form = form.map_err(|e| {
        warn!(%e, "Unable to parse asset form");
        ApiError::bad_request("Unable to parse form")
    })?;

    let mut uploads = vec![];

    for name in ASSET_NAMES.iter() {
        let file = match form.field(name) {
            Some(file) => file,
            None => {
                warn!(%name, "Asset field is missing");
                continue;
            }
        };

        match read(file).await {
            Ok(content) => uploads.push((*name, content)),
            Err(e) => warn!(%name, %e, "Failed to read asset field"),
        }
    }

    asset::upload(uploads, repo);
    Ok("Files uploaded successfully")
}

#[get("/api/upload-asset")]
pub fn latest(repo: &State<AssetRepository>) -> ApiResult<BTreeMap<String, String>> {
    asset::latest(repo)
        .map(Json)
        .map_err(|e| ApiError::context(500, "Error fetching assets", e))
}
