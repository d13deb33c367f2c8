//! SeaORM entities for the five submission collections.

pub mod contact;
pub mod crawl_host;
pub mod lead;
pub mod newsletter;
pub mod tableworthy;
