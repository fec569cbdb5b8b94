use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use time::{Date, macros::date};

use crate::{
    cdb::{Cdb, RateType},
    db::initialize,
    goal::{Goal, GoalCategory},
    store::Store,
    transaction::{Transaction, TransactionKind},
};

/// An empty store backed by an in-memory database.
pub(crate) fn get_test_store() -> Store {
    let connection = Connection::open_in_memory().expect("could not open in-memory database");
    initialize(&connection).expect("could not initialize database");

    Store::new(Arc::new(Mutex::new(connection)))
}

/// A transaction dated 2025-01-15.
pub(crate) fn sample_transaction(
    id: i64,
    description: &str,
    amount: f64,
    kind: TransactionKind,
    category: &str,
) -> Transaction {
    Transaction {
        id,
        description: description.to_owned(),
        amount,
        kind,
        category: category.to_owned(),
        date: date!(2025 - 01 - 15),
    }
}

/// A savings goal created on 2025-01-01.
pub(crate) fn sample_goal(
    id: i64,
    name: &str,
    target_amount: f64,
    current_amount: f64,
    deadline: Date,
) -> Goal {
    Goal {
        id,
        name: name.to_owned(),
        description: None,
        target_amount,
        current_amount,
        deadline,
        category: GoalCategory::Savings,
        created_on: date!(2025 - 01 - 01),
    }
}

/// A post-fixed CDB paying 100% of the benchmark rate.
pub(crate) fn sample_cdb(
    id: i64,
    name: &str,
    invested_amount: f64,
    start_date: Date,
    maturity_date: Date,
) -> Cdb {
    Cdb {
        id,
        name: name.to_owned(),
        bank: "Banco Inter".to_owned(),
        invested_amount,
        benchmark_rate: 100.0,
        start_date,
        maturity_date,
        rate_type: RateType::FloatingRate,
    }
}
