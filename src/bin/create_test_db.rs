use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use financeiro_rs::{
    AppState, Cdb, Goal, GoalCategory, RateType, Transaction, TransactionKind,
};

/// A utility for creating a demo database for the financeiro_rs web server.
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
    let state = AppState::new(conn, "Etc/UTC")?;

    let today = OffsetDateTime::now_utc().date();
    let transactions = demo_transactions(today);
    let goals = demo_goals(today);
    let cdbs = demo_cdbs(today);

    println!(
        "Adding {} transactions, {} goals and {} CDBs...",
        transactions.len(),
        goals.len(),
        cdbs.len()
    );

    state.store.save_all(|batch| {
        batch.save(&transactions)?;
        batch.save(&goals)?;
        batch.save(&cdbs)?;
        Ok(())
    })?;

    println!("Success!");

    Ok(())
}

/// Income and expenses spread over the last four months, newest first.
fn demo_transactions(today: time::Date) -> Vec<Transaction> {
    let entries = [
        ("Salário", 5200.0, TransactionKind::Income, "Salário", 2),
        ("Supermercado", 420.35, TransactionKind::Expense, "Alimentação", 4),
        ("Aluguel", 1800.0, TransactionKind::Expense, "Moradia", 6),
        ("Uber", 38.9, TransactionKind::Expense, "Transporte", 9),
        ("Projeto de site", 1500.0, TransactionKind::Income, "Freelance", 15),
        ("Cinema", 64.0, TransactionKind::Expense, "Lazer", 20),
        ("Salário", 5200.0, TransactionKind::Income, "Salário", 33),
        ("Farmácia", 87.4, TransactionKind::Expense, "Saúde", 37),
        ("Aluguel", 1800.0, TransactionKind::Expense, "Moradia", 36),
        ("Curso online", 199.9, TransactionKind::Expense, "Educação", 50),
        ("Salário", 5200.0, TransactionKind::Income, "Salário", 63),
        ("Aluguel", 1800.0, TransactionKind::Expense, "Moradia", 66),
        ("Tênis", 349.99, TransactionKind::Expense, "Compras", 80),
        ("Salário", 5200.0, TransactionKind::Income, "Salário", 94),
        ("Aluguel", 1800.0, TransactionKind::Expense, "Moradia", 97),
        ("Restaurante", 132.5, TransactionKind::Expense, "Alimentação", 110),
    ];

    let count = entries.len() as i64;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (description, amount, kind, category, days_ago))| Transaction {
            id: count - index as i64,
            description: description.to_owned(),
            amount,
            kind,
            category: category.to_owned(),
            date: today - Duration::days(days_ago),
        })
        .collect()
}

fn demo_goals(today: time::Date) -> Vec<Goal> {
    vec![
        Goal {
            id: 3,
            name: "Reserva de emergência".to_owned(),
            description: Some("Seis meses de despesas".to_owned()),
            target_amount: 18000.0,
            current_amount: 7250.0,
            deadline: today + Duration::days(300),
            category: GoalCategory::Emergency,
            created_on: today - Duration::days(120),
        },
        Goal {
            id: 2,
            name: "Viagem para o Chile".to_owned(),
            description: None,
            target_amount: 8000.0,
            current_amount: 2100.0,
            deadline: today + Duration::days(20),
            category: GoalCategory::Travel,
            created_on: today - Duration::days(90),
        },
        Goal {
            id: 1,
            name: "Notebook novo".to_owned(),
            description: None,
            target_amount: 4500.0,
            current_amount: 4500.0,
            deadline: today - Duration::days(10),
            category: GoalCategory::Education,
            created_on: today - Duration::days(200),
        },
    ]
}

fn demo_cdbs(today: time::Date) -> Vec<Cdb> {
    vec![
        Cdb {
            id: 2,
            name: "CDB Liquidez Diária".to_owned(),
            bank: "Nubank".to_owned(),
            invested_amount: 10000.0,
            benchmark_rate: 100.0,
            start_date: today - Duration::days(180),
            maturity_date: today + Duration::days(550),
            rate_type: RateType::FloatingRate,
        },
        Cdb {
            id: 1,
            name: "CDB 2 anos".to_owned(),
            bank: "Banco Inter".to_owned(),
            invested_amount: 5000.0,
            benchmark_rate: 12.5,
            start_date: today - Duration::days(400),
            maturity_date: today + Duration::days(330),
            rate_type: RateType::FixedRate,
        },
    ]
}
