use std::io::Read;
use std::path::Path;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};

use super::domain::Listing;

const SAMPLE_LISTINGS: &str = include_str!("../../data/listings.json");

/// Boundary to the vacancy data service consumed by the page handlers.
#[async_trait]
pub trait VacancySource: Send + Sync {
    async fn total_active_vacancies(&self) -> Result<u64, VacancySourceError>;
    async fn listings(&self) -> Result<Vec<Listing>, VacancySourceError>;
    async fn listing(&self, id: &str) -> Result<Option<Listing>, VacancySourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum VacancySourceError {
    #[error("vacancy service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read listing export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listing export: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only listing set hydrated from a JSON export.
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    listings: Vec<Listing>,
}

impl ListingCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_reader(reader)?;
        Ok(Self::new(listings))
    }

    /// Listings shipped with the crate for local runs and demos.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_reader(SAMPLE_LISTINGS.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn find(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    pub fn active_count_on(&self, today: NaiveDate) -> u64 {
        self.listings
            .iter()
            .filter(|listing| listing.is_active_on(today))
            .count() as u64
    }
}

#[async_trait]
impl VacancySource for ListingCatalog {
    async fn total_active_vacancies(&self) -> Result<u64, VacancySourceError> {
        Ok(self.active_count_on(Local::now().date_naive()))
    }

    async fn listings(&self) -> Result<Vec<Listing>, VacancySourceError> {
        Ok(self.listings.clone())
    }

    async fn listing(&self, id: &str) -> Result<Option<Listing>, VacancySourceError> {
        Ok(self.find(id).cloned())
    }
}
