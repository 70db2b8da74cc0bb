//! Employer directory and logo URL resolution.
//!
//! The directory maps employer display names to web domains. Lookups are
//! exact after lower-casing both sides, so naming variants such as a trailing
//! "Ltd" fall through to the generated avatar.

mod parser;

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

pub use parser::CompanyEntry;

const BUILTIN_COMPANIES: &str = include_str!("../../data/companies.csv");

const LOGO_PROXY_BASE: &str = "https://img.logo.dev";
const AVATAR_BASE: &str = "https://ui-avatars.com/api/";

#[derive(Debug)]
pub enum DirectoryError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::Io(err) => write!(f, "failed to read company directory: {}", err),
            DirectoryError::Csv(err) => write!(f, "invalid company directory CSV: {}", err),
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryError::Io(err) => Some(err),
            DirectoryError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DirectoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DirectoryError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory {
    entries: Vec<CompanyEntry>,
}

impl CompanyDirectory {
    pub fn new(entries: Vec<CompanyEntry>) -> Self {
        Self { entries }
    }

    /// Directory compiled into the binary.
    pub fn builtin() -> Result<Self, DirectoryError> {
        Self::from_reader(BUILTIN_COMPANIES.as_bytes())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        Ok(Self::new(parser::parse_entries(reader)?))
    }

    pub fn entries(&self) -> &[CompanyEntry] {
        &self.entries
    }

    /// First entry whose lower-cased name equals the lower-cased input.
    pub fn find(&self, employer_name: &str) -> Option<&CompanyEntry> {
        let normalized = employer_name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.name.to_lowercase() == normalized)
    }
}

/// Logo sources for one employer: the preferred image plus the avatar used when it fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLogo {
    pub src: String,
    pub fallback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_domain: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LogoResolver {
    directory: Arc<CompanyDirectory>,
    api_key: String,
}

impl LogoResolver {
    pub fn new(directory: Arc<CompanyDirectory>, api_key: impl Into<String>) -> Self {
        Self {
            directory,
            api_key: api_key.into(),
        }
    }

    pub fn directory(&self) -> &CompanyDirectory {
        &self.directory
    }

    pub fn resolve(&self, employer_name: &str) -> ResolvedLogo {
        let fallback = placeholder_avatar_url(employer_name);
        let matched = self
            .directory
            .find(employer_name)
            .filter(|entry| !entry.domain.is_empty());

        match matched {
            Some(entry) => ResolvedLogo {
                src: self.logo_url(&entry.domain),
                fallback,
                matched_domain: Some(entry.domain.clone()),
            },
            None => ResolvedLogo {
                src: fallback.clone(),
                fallback,
                matched_domain: None,
            },
        }
    }

    pub fn logo_url(&self, domain: &str) -> String {
        format!("{LOGO_PROXY_BASE}/{domain}?token={}", self.api_key)
    }
}

pub fn placeholder_avatar_url(employer_name: &str) -> String {
    format!(
        "{AVATAR_BASE}?name={}&background=random",
        urlencoding::encode(employer_name)
    )
}
