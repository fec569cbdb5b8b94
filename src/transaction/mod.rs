//! Income and expense records.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the fixed list of categories
//! - The endpoint for recording a new transaction
//! - The page that lists, filters and totals transactions

mod core;
mod create_endpoint;
mod transactions_page;
mod view;

pub use core::{CATEGORIES, Transaction, TransactionKind};
pub use create_endpoint::create_transaction_endpoint;
pub use transactions_page::get_transactions_page;
pub use view::transaction_list_item;
