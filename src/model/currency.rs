use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

impl Currency {
    pub fn new(code: &str, name: &str) -> Currency {
        Currency {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}
