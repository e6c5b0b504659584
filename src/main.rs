mod conf;
mod controller;
mod db;
mod model;
mod provider;
mod repository;
mod service;

use crate::{
    conf::{Conf, ServerConf},
    controller::home::StaticDir,
    db::DbPool,
    model::ApiError,
    provider::{Converter, ConverterClient, Frankfurter, RateProvider},
    repository::{AssetRepository, CertificateRepository, ConversionRepository},
    service::{asset, CurrencyTable},
};
use anyhow::{anyhow, bail, Result};
use rocket::{
    catch, catchers,
    data::{Limits, ToByteUnit},
    figment::Figment,
    fs::FileServer,
    http::Status,
    routes, Build, Request, Rocket,
};
use std::{env, path::PathBuf, process::exit};
use tracing::{error, info, warn};

#[catch(default)]
fn default_catcher(status: Status, req: &Request) -> ApiError {
    ApiError::custom(status.code, &format!("Failed to handle URI {}", req.uri()))
}

pub fn converter(
    rocket: Rocket<Build>,
    conf: &Conf,
    pool: DbPool,
    rates: Box<dyn RateProvider>,
) -> Rocket<Build> {
    let currencies = CurrencyTable::new(&conf.currencies);
    info!(currencies = currencies.len(), provider = %rates.name(), "Preparing currency converter");

    rocket
        .mount(
            "/",
            routes![
                controller::conversion::convert,
                controller::conversion::history,
                controller::asset::upload,
                controller::asset::latest,
            ],
        )
        .register("/", catchers![default_catcher])
        .manage(currencies)
        .manage(rates)
        .manage(ConversionRepository::new(pool.clone()))
        .manage(AssetRepository::new(pool))
}

pub fn certs(
    rocket: Rocket<Build>,
    conf: &Conf,
    pool: DbPool,
    converter: Box<dyn Converter>,
) -> Rocket<Build> {
    let static_dir = conf.certs.static_dir.clone();

    let rocket = rocket
        .mount("/", routes![controller::home::index, controller::home::ping])
        .mount(
            "/worldcert",
            routes![
                controller::certificate::create,
                controller::certificate::list,
                controller::certificate::get_by_id,
                controller::certificate::update_by_id,
                controller::certificate::delete_by_id,
            ],
        )
        .register("/", catchers![default_catcher])
        .manage(converter)
        .manage(CertificateRepository::new(pool));

    if static_dir.is_dir() {
        rocket
            .mount("/static", FileServer::from(&static_dir))
            .manage(StaticDir(static_dir))
    } else {
        warn!(static_dir = %static_dir.display(), "Static dir not found, not serving static files");
        rocket.manage(StaticDir(static_dir))
    }
}

fn server_figment(server: &ServerConf) -> Figment {
    let limits = Limits::default()
        .limit("data-form", 10.mebibytes())
        .limit("file", 10.mebibytes());

    rocket::Config::figment()
        .merge(("address", &server.address))
        .merge(("port", server.port))
        .merge(("limits", limits))
}

async fn launch(rocket: Rocket<Build>) -> Result<()> {
    rocket.launch().await.map_err(|e| anyhow!("{}", e))?;
    Ok(())
}

async fn serve(service: Option<&str>) -> Result<()> {
    let conf = Conf::new()?;
    let pool = db::pool(&conf)?;

    let converter_rocket = || -> Result<Rocket<Build>> {
        let rates = Frankfurter::new(conf.rates.clone())?;
        Ok(converter(
            rocket::custom(server_figment(&conf.converter)),
            &conf,
            pool.clone(),
            Box::new(rates),
        ))
    };

    let certs_rocket = || -> Result<Rocket<Build>> {
        let client = ConverterClient::new(&conf.certs)?;
        Ok(certs(
            rocket::custom(server_figment(&conf.certs.server())),
            &conf,
            pool.clone(),
            Box::new(client),
        ))
    };

    match service {
        Some("converter") => launch(converter_rocket()?).await,
        Some("certs") => launch(certs_rocket()?).await,
        None => {
            let (converter_app, certs_app) = (converter_rocket()?, certs_rocket()?);
            let (converter_res, certs_res) = futures::join!(launch(converter_app), launch(certs_app));
            converter_res.and(certs_res)
        }
        Some(other) => bail!("Unknown service {}", other),
    }
}

async fn assets(args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("load") => {
            let dir = args
                .get(1)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("assets"));
            let conf = Conf::new()?;
            let repo = AssetRepository::new(db::pool(&conf)?);
            let saved = asset::load_dir(&dir, &repo).await;
            info!(saved, dir = %dir.display(), "Loaded assets");
            Ok(())
        }
        _ => bail!("Unknown assets command {:?}", args),
    }
}

#[rocket::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let res = match args.first().map(String::as_str) {
        Some("db") => {
            db::cli(&args[1..]);
            Ok(())
        }
        Some("assets") => assets(&args[1..]).await,
        service => serve(service).await,
    };

    if let Err(e) = res {
        error!(?args, "{:#}", e);
        exit(1);
    }
}
