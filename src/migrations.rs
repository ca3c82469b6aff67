use crate::db;
use crate::nice_display::NiceDisplay;
use chrono::NaiveDateTime;
use std::{fs, io};
use tokio_postgres::NoTls;

const SEPARATOR: &str = "____";
const DATE_FORMAT: &str = "%Y-%m-%d-%H:%M:%S";

struct Migration {
    name: String,
    timestamp: i64,
}

pub enum NewMigrationError {
    WritingFile(io::Error),
}

impl NiceDisplay for NewMigrationError {
    fn message(&self) -> String {
        match self {
            NewMigrationError::WritingFile(err) => {
                format!("Error writing migration file: {}", err)
            }
        }
    }
}

pub enum RunError {
    GettingMigrations(io::Error),
    ParsingDateFromFileName {
        file_name: String,
        err: chrono::ParseError,
    },
    SplittingFileName {
        file_name: String,
    },
    DbConfig(db::ConfigError),
    ConnectingToDb(tokio_postgres::Error),
    ReadingMigrationFile(io::Error),
    ExecutingMigration(tokio_postgres::Error),
    ReadingConfirmation(io::Error),
}

impl NiceDisplay for RunError {
    fn message(&self) -> String {
        match self {
            RunError::GettingMigrations(err) => format!("Error getting migrations: {}", err),
            RunError::ParsingDateFromFileName { file_name, err } => {
                format!("Error parsing date from file name '{}': {}", file_name, err)
            }
            RunError::SplittingFileName { file_name } => {
                format!("Error splitting file name '{}'", file_name)
            }
            RunError::DbConfig(err) => {
                format!("Database configuration error: {}", err.message())
            }
            RunError::ConnectingToDb(err) => format!("Error connecting to database: {}", err),
            RunError::ReadingMigrationFile(err) => {
                format!("Error reading migration file: {}", err)
            }
            RunError::ExecutingMigration(err) => format!("Error executing migration: {}", err),
            RunError::ReadingConfirmation(err) => {
                format!("Error reading confirmation from stdin: {}", err)
            }
        }
    }
}

pub async fn new(name: String) -> Result<(), NewMigrationError> {
    let now = chrono::Utc::now().format(DATE_FORMAT).to_string();

    let new_migration_file_name = format!("{}{}{}.sql", now, SEPARATOR, name);

    fs::write(
        format!("./db/migrations/{}", new_migration_file_name),
        r#"-- ${name}

BEGIN;
-- Write your migration here
COMMIT;"#
            .replace("${name}", name.as_str()),
    )
    .map_err(NewMigrationError::WritingFile)?;

    Ok(())
}

pub async fn run() -> Result<(), RunError> {
    let migrations: Vec<Migration> = get_migrations()?;
    let migrations_len = migrations.len();

    let config = db::Config::load().await.map_err(RunError::DbConfig)?;

    println!(
        "Should I run {} migrations against {} at host {}? (Y/n): ",
        migrations_len, config.database, config.host
    );

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(RunError::ReadingConfirmation)?;

    if input.trim().to_uppercase() != "Y" {
        println!("Okay, I won't run the migrations");
        return Ok(());
    }

    let (client, connection) =
        tokio_postgres::connect(config.client_params().as_str(), NoTls)
            .await
            .map_err(RunError::ConnectingToDb)?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("connection error: {}", e);
        }
    });

    // Useful for the print statements below
    let mut ran_at_least_one_migration = false;

    for (index, migration) in migrations.into_iter().enumerate() {
        let human_migration_name = {
            let without_timestamp = migration
                .name
                .split(SEPARATOR)
                .last()
                .unwrap_or(migration.name.as_str());

            without_timestamp.trim_end_matches(".sql").to_string()
        };

        println!(
            "Running {}/{}, {}",
            index + 1,
            migrations_len,
            human_migration_name
        );

        let migration_file_path = format!("./db/migrations/{}", migration.name);

        let migration_file_content =
            fs::read_to_string(migration_file_path).map_err(RunError::ReadingMigrationFile)?;

        client
            .batch_execute(migration_file_content.as_str())
            .await
            .map_err(RunError::ExecutingMigration)?;

        ran_at_least_one_migration = true;
    }

    let finish_msg = if ran_at_least_one_migration {
        "Done!"
    } else {
        "You are already up to date, no migrations run!"
    };

    println!("{}", finish_msg);

    Ok(())
}

fn get_migrations() -> Result<Vec<Migration>, RunError> {
    let migration_dir =
        fs::read_dir("./db/migrations").map_err(RunError::GettingMigrations)?;

    let mut migrations: Vec<Migration> = Vec::new();

    for entry in migration_dir {
        let entry = entry.map_err(RunError::GettingMigrations)?;

        let file_name = entry.file_name();
        let file_name = match file_name.to_str() {
            Some(name) => name.to_string(),
            None => continue,
        };

        if !file_name.ends_with(".sql") {
            continue;
        }

        let timestamp = match file_name.split(SEPARATOR).collect::<Vec<&str>>().first() {
            Some(prefix) => NaiveDateTime::parse_from_str(prefix, DATE_FORMAT)
                .map_err(|err| RunError::ParsingDateFromFileName {
                    file_name: file_name.clone(),
                    err,
                })?
                .and_utc()
                .timestamp(),
            None => return Err(RunError::SplittingFileName { file_name }),
        };

        migrations.push(Migration {
            name: file_name,
            timestamp,
        });
    }

    migrations.sort_by(|m0, m1| m0.timestamp.cmp(&m1.timestamp));

    Ok(migrations)
}
