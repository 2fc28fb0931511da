use std::ops::RangeInclusive;
use std::path::PathBuf;
use url::Url;

use crate::error::{Error, Result};

pub const MIN_YEAR: i32 = 2013;
pub const MAX_YEAR: i32 = 2016;
pub const BASE_URL: &str = "https://www.atf.gov/firearms/";
pub const PAGE_PATTERN: &str = "listing-federal-firearms-licensees-ffls-{year}";
pub const DEST_DIR: &str = "wrangle/corral/fetched/complete";

const YEAR_PLACEHOLDER: &str = "{year}";

/// Everything a run needs to know: which years, where from, where to.
#[derive(Debug, Clone)]
pub struct Config {
    pub min_year: i32,
    pub max_year: i32,
    /// Links in the listing table are resolved against this.
    pub base_url: Url,
    /// Landing page location, relative to `base_url` or absolute.
    pub page_pattern: String,
    pub dest_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_year: MIN_YEAR,
            max_year: MAX_YEAR,
            base_url: Url::parse(BASE_URL).expect("BASE_URL is a valid url"),
            page_pattern: PAGE_PATTERN.to_string(),
            dest_dir: PathBuf::from(DEST_DIR),
        }
    }
}

impl Config {
    pub fn with_years(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Sets the base url, adding a trailing slash so relative links land
    /// under its last path segment instead of replacing it.
    pub fn with_base_url(mut self, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        self.base_url = base_url;
        self
    }

    pub fn with_page_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.page_pattern = pattern.into();
        self
    }

    pub fn with_dest_dir(mut self, dest_dir: impl Into<PathBuf>) -> Self {
        self.dest_dir = dest_dir.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year {
            return Err(Error::Config(format!(
                "min year {} is after max year {}",
                self.min_year, self.max_year
            )));
        }
        if !self.page_pattern.contains(YEAR_PLACEHOLDER) {
            return Err(Error::Config(format!(
                "page pattern {} has no {} placeholder",
                self.page_pattern, YEAR_PLACEHOLDER
            )));
        }
        Ok(())
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }

    pub fn page_url(&self, year: i32) -> Result<Url> {
        let page = self.page_pattern.replace(YEAR_PLACEHOLDER, &year.to_string());
        Ok(self.base_url.join(&page)?)
    }
}
