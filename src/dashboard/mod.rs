//! Dashboard module
//!
//! Provides an overview page with the balance of every transaction, the
//! amount invested in CDBs, the latest transactions and the first goals.

mod handlers;

pub use handlers::get_dashboard_page;
