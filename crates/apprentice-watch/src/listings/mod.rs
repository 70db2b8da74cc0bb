mod catalog;
pub mod domain;
pub mod format;
pub mod views;

pub use catalog::{CatalogError, ListingCatalog, VacancySource, VacancySourceError};
pub use domain::{Address, Course, Listing, Wage};
pub use views::{ListingCardView, ListingDetailView, ShareLinks};
