//! Downloads the ATF "Complete listing" Federal Firearms Licensee data files
//! for a range of years.

pub mod config;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod page;
pub mod pipeline;
pub mod saver;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{Error, ListingError, Result};
pub use fetch::{Fetched, Fetcher, HttpFetcher};
pub use pipeline::{Pipeline, RunSummary};
pub use saver::{DirStore, FileStore, SaveMode};
