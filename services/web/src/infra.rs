use apprentice_watch::analytics::{AnalyticsSink, TracingAnalytics};
use apprentice_watch::config::SiteConfig;
use apprentice_watch::directory::{CompanyDirectory, LogoResolver};
use apprentice_watch::error::AppError;
use apprentice_watch::listings::{ListingCatalog, VacancySource};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared, read-only collaborators for the page handlers.
#[derive(Clone)]
pub(crate) struct SiteState {
    pub(crate) source: Arc<dyn VacancySource>,
    pub(crate) logos: Arc<LogoResolver>,
    pub(crate) analytics: Arc<dyn AnalyticsSink>,
    pub(crate) site_url: String,
    pub(crate) stat_deadline: Duration,
}

impl SiteState {
    pub(crate) fn from_config(config: &SiteConfig) -> Result<Self, AppError> {
        let catalog = load_catalog(config)?;
        let logos = load_logo_resolver(config)?;

        Ok(Self {
            source: Arc::new(catalog),
            logos: Arc::new(logos),
            analytics: Arc::new(TracingAnalytics),
            site_url: config.site_url.clone(),
            stat_deadline: config.stat_deadline,
        })
    }
}

pub(crate) fn load_catalog(config: &SiteConfig) -> Result<ListingCatalog, AppError> {
    let catalog = match &config.listings_path {
        Some(path) => {
            let catalog = ListingCatalog::from_path(path)?;
            info!(path = %path.display(), listings = catalog.len(), "loaded listing export");
            catalog
        }
        None => {
            let catalog = ListingCatalog::sample()?;
            info!(listings = catalog.len(), "no listing export configured, using bundled sample");
            catalog
        }
    };
    Ok(catalog)
}

pub(crate) fn load_logo_resolver(config: &SiteConfig) -> Result<LogoResolver, AppError> {
    let directory = match &config.companies_path {
        Some(path) => CompanyDirectory::from_path(path)?,
        None => CompanyDirectory::builtin()?,
    };

    if config.logo_dev_key.is_empty() {
        warn!("LOGODEV_KEY is not set; matched employer logos will fail over to avatars");
    }

    Ok(LogoResolver::new(
        Arc::new(directory),
        config.logo_dev_key.clone(),
    ))
}
