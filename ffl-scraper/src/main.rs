use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

use ffl_scraper::config::{BASE_URL, DEST_DIR, MAX_YEAR, MIN_YEAR};
use ffl_scraper::{Config, DirStore, HttpFetcher, Pipeline};

#[derive(Parser, Debug)]
#[clap(name = "ffl-scraper", about = "downloads the atf complete ffl listings")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "info")]
    log_level: String,

    #[clap(long = "min-year", env = "FFL_MIN_YEAR", default_value_t = MIN_YEAR)]
    min_year: i32,

    #[clap(long = "max-year", env = "FFL_MAX_YEAR", default_value_t = MAX_YEAR)]
    max_year: i32,

    /// Landing pages and relative links are resolved against this
    #[clap(long = "base-url", env = "FFL_BASE_URL", default_value = BASE_URL)]
    base_url: String,

    #[clap(long = "dest", env = "FFL_DEST_DIR", default_value = DEST_DIR)]
    dest_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let opt = Opt::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},hyper=info,reqwest=info", opt.log_level)));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::default()
        .with_years(opt.min_year, opt.max_year)
        .with_base_url(Url::parse(&opt.base_url)?)
        .with_dest_dir(opt.dest_dir);
    let store = DirStore::new(config.dest_dir.clone());
    let pipeline = Pipeline::new(config, HttpFetcher::new()?, store)?;

    let summary = pipeline.run().await?;
    log::info!(
        "wrote {} files for {} years into {}",
        summary.files.len(),
        summary.years,
        pipeline.config().dest_dir.display()
    );
    Ok(())
}
