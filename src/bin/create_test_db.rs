use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use pocketbook::{
    models::{Currency, PasswordHash, Room, TransactionBuilder},
    stores::{TransactionStore, UserStore, sqlite::create_stores},
};

/// A utility for creating a pocketbook database populated with test data.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;
    let (mut users, mut transactions) = create_stores(conn)?;

    println!("Creating test user...");

    let password_hash =
        PasswordHash::from_raw_password("indigo-walrus-94-kettle", PasswordHash::DEFAULT_COST)?;
    users.create("test", password_hash)?;

    println!("Recording sample transactions...");

    transactions.create(
        "test",
        TransactionBuilder::new("1000")?
            .description("Monthly salary")
            .category("Salary")
            .currency(Currency::Usd)
            .room(Room::parse("General"))
            .income(true),
    )?;
    transactions.create(
        "test",
        TransactionBuilder::new("200")?
            .description("Weekly shop")
            .category("Groceries")
            .currency(Currency::Usd)
            .room(Room::parse("Food")),
    )?;
    transactions.create(
        "test",
        TransactionBuilder::new("450")?
            .description("Auto rickshaw")
            .category("Transport")
            .currency(Currency::Inr),
    )?;

    println!("Success!");

    Ok(())
}
