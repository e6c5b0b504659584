use crate::model::Currency;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    env,
    path::{Path, PathBuf},
};

const DEFAULT_CONF: &str = include_str!("../worldcert.conf");

#[derive(Debug, Deserialize)]
pub struct Conf {
    pub db_url: String,
    pub converter: ServerConf,
    pub rates: RatesConf,
    pub certs: CertsConf,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
}

#[derive(Debug, Deserialize)]
pub struct ServerConf {
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatesConf {
    pub url: String,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CertsConf {
    pub address: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub converter_url: String,
    pub accept_invalid_certs: bool,
    pub timeout_secs: Option<u64>,
}

impl CertsConf {
    pub fn server(&self) -> ServerConf {
        ServerConf {
            address: self.address.clone(),
            port: self.port,
        }
    }
}

impl Conf {
    pub fn new() -> Result<Conf> {
        let custom_conf_path = data_dir().join("worldcert.conf");

        let conf: Conf = Self::figment()
            .merge(Toml::file(custom_conf_path))
            .merge(Env::prefixed("WORLDCERT_").split("__"))
            .extract()?;

        Ok(conf)
    }

    fn figment() -> Figment {
        Figment::new().merge(Toml::string(DEFAULT_CONF))
    }

    #[cfg(test)]
    pub fn builtin() -> Conf {
        Self::figment().extract().unwrap()
    }
}

fn data_dir() -> PathBuf {
    match env::var("DATA_DIR") {
        Ok(dir) => Path::new(&dir).to_path_buf(),
        Err(_) => dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("worldcert"),
    }
}
