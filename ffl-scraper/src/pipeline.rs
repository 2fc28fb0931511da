use std::path::PathBuf;

use crate::config::Config;
use crate::error::{ListingError, Result};
use crate::fetch::Fetcher;
use crate::listing::extract_links;
use crate::page::fetch_landing_page;
use crate::saver::{fetch_and_save, FileStore};

/// What a finished run did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub years: usize,
    /// Years whose listing row had no links.
    pub empty_years: Vec<i32>,
    /// Every path written, in download order. Duplicate links show up twice.
    pub files: Vec<PathBuf>,
}

/// Walks the configured years one by one: landing page, links, files.
///
/// Nothing runs concurrently and nothing is retried. The first error ends
/// the run, except for a listing row without links, which skips the year.
pub struct Pipeline<F, S> {
    config: Config,
    fetcher: F,
    store: S,
}

impl<F: Fetcher, S: FileStore> Pipeline<F, S> {
    pub fn new(config: Config, fetcher: F, store: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, fetcher, store })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn run(&self) -> Result<RunSummary> {
        self.store.prepare().await?;

        let mut summary = RunSummary::default();
        for year in self.config.years() {
            self.run_year(year, &mut summary).await?;
            summary.years += 1;
        }
        Ok(summary)
    }

    async fn run_year(&self, year: i32, summary: &mut RunSummary) -> Result<()> {
        let html = fetch_landing_page(&self.fetcher, &self.config, year).await?;

        let urls = match extract_links(&html, &self.config.base_url) {
            Ok(urls) => urls,
            Err(ListingError::EmptyListing) => {
                log::warn!("no data files listed for {}, skipping", year);
                summary.empty_years.push(year);
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        for url in urls {
            log::info!("\tdownloading data file: {}", url);
            let path = fetch_and_save(&self.fetcher, &self.store, &url).await?;
            log::info!("\tsaving to: {}", path.display());
            summary.files.push(path);
        }
        Ok(())
    }
}
