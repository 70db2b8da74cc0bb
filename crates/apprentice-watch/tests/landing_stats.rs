use std::sync::Arc;
use std::time::Duration;

use apprentice_watch::directory::{CompanyDirectory, LogoResolver};
use apprentice_watch::listings::{Listing, ListingCatalog, VacancySource, VacancySourceError};
use apprentice_watch::pages::landing::{render, LandingView};
use apprentice_watch::stats::{AggregateStat, StatCell};
use async_trait::async_trait;

struct DownSource;

#[async_trait]
impl VacancySource for DownSource {
    async fn total_active_vacancies(&self) -> Result<u64, VacancySourceError> {
        Err(VacancySourceError::Unavailable("connection refused".to_string()))
    }

    async fn listings(&self) -> Result<Vec<Listing>, VacancySourceError> {
        Ok(Vec::new())
    }

    async fn listing(&self, _listing_id: &str) -> Result<Option<Listing>, VacancySourceError> {
        Ok(None)
    }
}

struct StalledSource;

#[async_trait]
impl VacancySource for StalledSource {
    async fn total_active_vacancies(&self) -> Result<u64, VacancySourceError> {
        std::future::pending().await
    }

    async fn listings(&self) -> Result<Vec<Listing>, VacancySourceError> {
        Ok(Vec::new())
    }

    async fn listing(&self, _listing_id: &str) -> Result<Option<Listing>, VacancySourceError> {
        Ok(None)
    }
}

fn resolver() -> LogoResolver {
    let directory = CompanyDirectory::builtin().expect("bundled directory parses");
    LogoResolver::new(Arc::new(directory), "pk_live_example")
}

async fn landing_html(source: Arc<dyn VacancySource>) -> (AggregateStat, String) {
    let mut cell = StatCell::spawn(source);
    let stat = cell.settle(Duration::from_millis(200)).await;
    (stat, render(&LandingView::build(&resolver(), stat)))
}

#[tokio::test]
async fn landing_shows_count_from_catalog() {
    let catalog = ListingCatalog::sample().expect("bundled listings parse");
    let expected = catalog.total_active_vacancies().await.expect("catalog count");

    let (stat, html) = landing_html(Arc::new(catalog)).await;

    assert_eq!(stat, AggregateStat::Loaded(expected));
    assert!(html.contains(&format!(
        "data-stat=\"Active Apprenticeships\">{expected}+</div>"
    )));
    assert!(html.contains("data-stat=\"AI CV Optimisation\">FREE</div>"));
    assert!(html.contains("data-stat=\"Real-Time Notifications\">24/7</div>"));
}

#[tokio::test]
async fn landing_shows_error_when_source_fails() {
    let (stat, html) = landing_html(Arc::new(DownSource)).await;

    assert_eq!(stat, AggregateStat::Failed);
    assert!(html.contains("data-stat=\"Active Apprenticeships\">Error</div>"));
}

#[tokio::test]
async fn landing_shows_loading_when_source_stalls() {
    let (stat, html) = landing_html(Arc::new(StalledSource)).await;

    assert!(stat.is_loading());
    assert!(html.contains("data-stat=\"Active Apprenticeships\">Loading...</div>"));
}

#[tokio::test]
async fn logo_strip_lists_only_directory_entries_with_domains() {
    let resolver = resolver();
    let view = LandingView::build(&resolver, AggregateStat::Loading);

    let with_domain = resolver
        .directory()
        .entries()
        .iter()
        .filter(|entry| !entry.domain.is_empty())
        .count();
    assert_eq!(view.logos.len(), with_domain);
    assert!(view
        .logos
        .iter()
        .all(|tile| tile.logo.src.starts_with("https://img.logo.dev/")));
}
