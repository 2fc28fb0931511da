use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::error::{Error, Result};
use crate::fetch::Fetcher;

/// Generic endpoint the site serves files from; the real name is one level up.
const DOWNLOAD_SEGMENT: &str = "download";

/// Endings the site uses for spreadsheets and archives, with or without a dot
/// (`0415-ffl-list.xlsx`, `0213-ffl-listxls`).
const BINARY_EXTENSIONS: &[&str] = &["xlsx", "xls", "zip", "pdf"];
const TEXT_EXTENSION: &str = "txt";

/// How a downloaded body is written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Decoded with the response charset and written as utf-8.
    Text,
    /// Written byte for byte.
    Binary,
}

impl SaveMode {
    /// Picks the mode from the file name's ending, falling back to the
    /// response content type when the name doesn't say.
    pub fn for_file(slug: &str, content_type: Option<&str>) -> Self {
        let slug = slug.to_ascii_lowercase();
        if slug.ends_with(TEXT_EXTENSION) {
            return SaveMode::Text;
        }
        if BINARY_EXTENSIONS.iter().any(|ext| slug.ends_with(ext)) {
            return SaveMode::Binary;
        }
        match content_type {
            Some(ct) if ct.trim_start().to_ascii_lowercase().starts_with("text/") => SaveMode::Text,
            _ => SaveMode::Binary,
        }
    }
}

/// Derives the local file name from a data file url.
///
/// ```
/// use ffl_scraper::saver::slug_for;
/// use url::Url;
///
/// let url = Url::parse("https://www.atf.gov/firearms/docs/1215-ffl-listtxt/download").unwrap();
/// assert_eq!(slug_for(&url).unwrap(), "1215-ffl-listtxt");
/// ```
pub fn slug_for(url: &Url) -> Result<String> {
    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let slug = match segments.as_slice() {
        [.., parent, last] if *last == DOWNLOAD_SEGMENT => Some(*parent),
        [.., last] => Some(*last),
        [] => None,
    };

    slug.map(str::to_owned).ok_or_else(|| Error::Slug { url: url.clone() })
}

/// Where downloaded files end up.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Called once before the first write.
    async fn prepare(&self) -> Result<()>;

    /// Writes `contents` under `name`, replacing whatever was there.
    async fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf>;
}

/// A flat directory on disk.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl FileStore for DirStore {
    async fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    async fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.dir.join(name);
        let mut file = File::create(&path).await?;
        file.write_all(contents).await?;
        file.flush().await?;
        Ok(path)
    }
}

/// Downloads `url` and saves it into `store` under its slug.
pub async fn fetch_and_save<F, S>(fetcher: &F, store: &S, url: &Url) -> Result<PathBuf>
where
    F: Fetcher + ?Sized,
    S: FileStore + ?Sized,
{
    let slug = slug_for(url)?;
    let fetched = fetcher.get(url).await?.ensure_success()?;

    let path = match SaveMode::for_file(&slug, fetched.content_type.as_deref()) {
        SaveMode::Text => {
            let text = fetched.text().into_owned();
            store.write(&slug, text.as_bytes()).await?
        }
        SaveMode::Binary => store.write(&slug, &fetched.body).await?,
    };
    Ok(path)
}
