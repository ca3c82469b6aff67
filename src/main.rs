mod api;
mod capability;
mod db;
mod domain;
mod migrations;
mod nice_display;
mod worker;

use crate::nice_display::NiceDisplay;
use crate::worker::Worker;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Parser, Clone)]
#[clap(version = "0.1", about = "Commands for the phonebook backend")]
enum Cmd {
    Run,
    NewMigration { migration_name: String },
    RunMigrations,
}

enum Error {
    ActixWeb(WebServerError),
    Config(ConfigError),
    NewMigration(migrations::NewMigrationError),
    RunMigrations(migrations::RunError),
    EnvVars(dotenv::Error),
}

impl NiceDisplay for Error {
    fn message(&self) -> String {
        match self {
            Error::ActixWeb(err) => err.message(),
            Error::Config(err) => err.message(),
            Error::NewMigration(err) => err.message(),
            Error::RunMigrations(err) => err.message(),
            Error::EnvVars(err) => {
                format!("Error loading environment variables: {}", err)
            }
        }
    }
}

struct Config {
    port: u16,
    db: db::Config,
}

enum ConfigError {
    Db(db::ConfigError),
    ParsingPort {
        value: String,
        err: std::num::ParseIntError,
    },
}

impl NiceDisplay for ConfigError {
    fn message(&self) -> String {
        match self {
            ConfigError::Db(err) => err.message(),
            ConfigError::ParsingPort { value, err } => {
                format!("Error parsing PORT value '{}': {}", value, err)
            }
        }
    }
}

impl Config {
    async fn load() -> Result<Config, ConfigError> {
        let port = match dotenv::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|err| ConfigError::ParsingPort { value, err })?,
            Err(_) => DEFAULT_PORT,
        };

        let db = db::Config::load().await.map_err(ConfigError::Db)?;

        Ok(Config { port, db })
    }
}

#[actix_web::main]
async fn main() -> Result<(), String> {
    nice_main().await.map_err(|err| err.message())
}

async fn nice_main() -> Result<(), Error> {
    dotenv::dotenv().map_err(Error::EnvVars)?;

    let cmd = Cmd::parse();

    match cmd {
        Cmd::Run => {
            let config = Config::load().await.map_err(Error::Config)?;
            run_server(config).await.map_err(Error::ActixWeb)
        }
        Cmd::NewMigration { migration_name } => migrations::new(migration_name)
            .await
            .map_err(Error::NewMigration),
        Cmd::RunMigrations => migrations::run().await.map_err(Error::RunMigrations),
    }
}

enum WebServerError {
    Worker(worker::InitError),
    Bind(std::io::Error),
    Run(std::io::Error),
}

impl NiceDisplay for WebServerError {
    fn message(&self) -> String {
        match self {
            WebServerError::Worker(err) => {
                format!("Worker initialization error\n{}", err.message())
            }
            WebServerError::Bind(err) => {
                format!("Error binding server: {}", err)
            }
            WebServerError::Run(err) => format!("Error running server: {}", err),
        }
    }
}

async fn run_server(config: Config) -> Result<(), WebServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let worker = Worker::new(&config.db)
        .await
        .map_err(WebServerError::Worker)?;

    tracing::info!("Running server on port {}", config.port);

    let r = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(worker.clone()))
            .configure(api::routes::<Worker>)
            .default_service(web::route().to(api::unknown_endpoint))
    })
    .bind(("127.0.0.1", config.port))
    .map_err(WebServerError::Bind)?
    .run()
    .await
    .map_err(WebServerError::Run)?;

    Ok(r)
}
