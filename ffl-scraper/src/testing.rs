use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use url::Url;

use crate::error::Result;
use crate::fetch::{Fetched, Fetcher};
use crate::saver::FileStore;

struct Canned {
    status: u16,
    content_type: Option<String>,
    body: Vec<u8>,
}

/// Serves canned responses by url, 404 for anything else.
#[derive(Default)]
pub struct StubFetcher {
    responses: HashMap<String, Canned>,
    requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn page(self, url: &str, html: &str) -> Self {
        self.respond(url, 200, Some("text/html; charset=utf-8"), html.as_bytes())
    }

    pub fn file(self, url: &str, content_type: &str, body: &[u8]) -> Self {
        self.respond(url, 200, Some(content_type), body)
    }

    pub fn respond(mut self, url: &str, status: u16, content_type: Option<&str>, body: &[u8]) -> Self {
        let canned = Canned {
            status,
            content_type: content_type.map(str::to_owned),
            body: body.to_vec(),
        };
        self.responses.insert(url.to_string(), canned);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn get(&self, url: &Url) -> Result<Fetched> {
        self.requested.lock().unwrap().push(url.to_string());
        let fetched = match self.responses.get(url.as_str()) {
            Some(canned) => Fetched {
                url: url.clone(),
                status: canned.status,
                content_type: canned.content_type.clone(),
                body: canned.body.clone(),
            },
            None => Fetched {
                url: url.clone(),
                status: 404,
                content_type: Some("text/html".to_string()),
                body: b"<html><body>Page not found</body></html>".to_vec(),
            },
        };
        Ok(fetched)
    }
}

/// Keeps written files in memory, keyed by name.
#[derive(Default)]
pub struct MemoryStore {
    files: Mutex<BTreeMap<String, Vec<u8>>>,
    prepared: Mutex<usize>,
}

impl MemoryStore {
    pub fn files(&self) -> BTreeMap<String, Vec<u8>> {
        self.files.lock().unwrap().clone()
    }

    pub fn prepared(&self) -> usize {
        *self.prepared.lock().unwrap()
    }
}

#[async_trait]
impl FileStore for MemoryStore {
    async fn prepare(&self) -> Result<()> {
        *self.prepared.lock().unwrap() += 1;
        Ok(())
    }

    async fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        self.files.lock().unwrap().insert(name.to_string(), contents.to_vec());
        Ok(PathBuf::from("memory").join(name))
    }
}
