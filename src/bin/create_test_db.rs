use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use sacco_ledger::{
    models::{ContributionInterval, NewSavingsType, SavingsCategory},
    stores::{MemberStore, SavingsTypeStore, sqlite::create_app_state},
};

/// A utility for creating a test database for the REST API server of sacco_ledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
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
    let mut state = create_app_state(conn)?;

    println!("Creating test groups and members...");

    let group = state.member_store.create_group("Umoja group")?;
    let amina = state
        .member_store
        .create("Amina Wanjiru", Some(group.id))?;
    let baraka = state
        .member_store
        .create("Baraka Mwangi", Some(group.id))?;
    let chausiku = state.member_store.create("Chausiku Njeri", None)?;

    println!("Creating test savings types...");

    let ordinary = state.savings_type_store.create(NewSavingsType {
        name: "Ordinary savings".to_owned(),
        category: SavingsCategory::Fixed,
        compulsory: true,
        interval: ContributionInterval::Month,
        minimum_amount: 1_000,
        maximum_amount: 100_000,
        interest: 3,
    })?;
    let holiday = state.savings_type_store.create(NewSavingsType {
        name: "Holiday savings".to_owned(),
        category: SavingsCategory::Target,
        compulsory: false,
        interval: ContributionInterval::Week,
        minimum_amount: 500,
        maximum_amount: 50_000,
        interest: 5,
    })?;

    println!("Recording test deposits and withdrawals...");

    for member_id in [amina.id, baraka.id, chausiku.id] {
        state.ledger.deposit(member_id, ordinary.id, 10_000, None)?;
    }
    state.ledger.deposit(amina.id, holiday.id, 2_500, None)?;
    state.ledger.withdraw(baraka.id, ordinary.id, 4_000)?;

    println!("Success!");

    Ok(())
}
