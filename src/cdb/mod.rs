//! Fixed-income positions (CDBs) and their estimated growth.

mod cdbs_page;
mod core;
mod create_endpoint;
mod view;

pub use cdbs_page::get_cdbs_page;
pub use core::{Cdb, RateType};
pub use create_endpoint::create_cdb_endpoint;
