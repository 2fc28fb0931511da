use crate::config::Config;
use crate::error::Result;
use crate::fetch::Fetcher;

/// Downloads the landing page for `year` and returns its html.
pub async fn fetch_landing_page<F>(fetcher: &F, config: &Config, year: i32) -> Result<String>
where
    F: Fetcher + ?Sized,
{
    let url = config.page_url(year)?;
    log::info!("downloading landing page: {}", url);
    let page = fetcher.get(&url).await?.ensure_success()?;
    Ok(page.text().into_owned())
}
