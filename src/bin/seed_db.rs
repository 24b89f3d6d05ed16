use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use spendtrace::{NewTransaction, create_transaction, initialize_db};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const CATEGORIES: [(&str, f64, f64); 7] = [
    ("Housing", 100.0, 200.0),
    ("Food", 50.0, 300.0),
    ("Transportation", 30.0, 150.0),
    ("Entertainment", 50.0, 400.0),
    ("Healthcare", 40.0, 250.0),
    ("Shopping", 30.0, 200.0),
    ("Others", 10.0, 100.0),
];

const DESCRIPTIONS: [[&str; 4]; 7] = [
    [
        "Rent payment",
        "Home renovation",
        "Utility bills",
        "Mortgage payment",
    ],
    [
        "Groceries",
        "Restaurant bill",
        "Takeout",
        "Fresh produce purchase",
    ],
    [
        "Fuel purchase",
        "Taxi fare",
        "Public transport pass",
        "Car maintenance",
    ],
    [
        "Movie tickets",
        "Concert tickets",
        "Theme park visit",
        "Game purchase",
    ],
    [
        "Doctor consultation",
        "Medical prescription",
        "Health insurance premium",
        "Dental visit",
    ],
    [
        "Clothing purchase",
        "Electronics purchase",
        "Gift shopping",
        "Online shopping",
    ],
    [
        "Miscellaneous expenses",
        "Uncategorized spending",
        "Unexpected purchase",
        "Gift for someone",
    ],
];

/// A utility for creating and seeding a test database for the spendtrace
/// server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The first date to insert transactions for.
    #[arg(long, default_value = "2025-03-28")]
    start_date: String,

    /// The last date to insert transactions for (inclusive).
    #[arg(long, default_value = "2025-04-15")]
    end_date: String,
}

/// Create and populate a database for manual testing of the charts.
///
/// Inserts one transaction per category per day over the date range, with
/// amounts spread over each category's typical range.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    let start_date = parse_date_arg(&args.start_date);
    let end_date = parse_date_arg(&args.end_date);

    if end_date < start_date {
        eprintln!("End date {end_date} is before start date {start_date}.");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    let mut inserted = 0;
    let mut date = start_date;
    let mut day_index = 0;

    while date <= end_date {
        for (category_index, (category, min_amount, max_amount)) in CATEGORIES.iter().enumerate() {
            let spread = ((day_index * 7 + category_index * 3) % 10) as f64 / 10.0;
            let amount =
                ((min_amount + (max_amount - min_amount) * spread) * 100.0).round() / 100.0;
            let description = DESCRIPTIONS[category_index][(day_index + category_index) % 4];

            create_transaction(
                NewTransaction {
                    description: description.to_owned(),
                    amount,
                    category: (*category).to_owned(),
                    date: date.format(DATE_FORMAT)?,
                },
                &conn,
            )?;

            inserted += 1;
        }

        date = match date.next_day() {
            Some(next) => next,
            None => break,
        };
        day_index += 1;
    }

    println!("Inserted {inserted} transactions between {start_date} and {end_date}.");
    println!("Success!");

    Ok(())
}

fn parse_date_arg(text: &str) -> Date {
    match Date::parse(text, DATE_FORMAT) {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("Could not parse date \"{text}\": {error}");
            exit(1);
        }
    }
}
