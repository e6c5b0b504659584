use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};

/// Multipart field names accepted by the asset store, which are also the asset keys.
pub const ASSET_NAMES: [&str; 3] = ["watermark", "md_signature", "logo"];

#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub name: String,
    pub content: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

impl Asset {
    pub fn new(name: &str, content: Vec<u8>) -> Asset {
        Asset {
            name: name.to_string(),
            content,
            created_at: Utc::now(),
        }
    }

    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", BASE64.encode(&self.content))
    }
}
