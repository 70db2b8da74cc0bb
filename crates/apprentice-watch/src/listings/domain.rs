use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Wage type reported by the vacancy feed for undisclosed salaries.
pub const COMPETITIVE_SALARY: &str = "CompetitiveSalary";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub employer_name: String,
    #[serde(default)]
    pub provider_name: String,
    pub address: Address,
    pub course: Course,
    #[serde(default)]
    pub apprenticeship_level: String,
    pub wage: Wage,
    #[serde(deserialize_with = "deserialize_feed_date")]
    pub posted_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_feed_date")]
    pub closing_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_feed_date")]
    pub start_date: NaiveDate,
    #[serde(default)]
    pub expected_duration: String,
    pub hours_per_week: f64,
    #[serde(default)]
    pub working_week_description: String,
    pub number_of_positions: u32,
    #[serde(default)]
    pub is_disability_confident: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub employer_contact_email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub employer_contact_phone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub employer_website_url: Option<String>,
    pub vacancy_url: String,
}

impl Listing {
    /// A listing stays active through the end of its closing date.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.closing_date >= today
    }

    pub fn has_contact_channels(&self) -> bool {
        self.employer_contact_email.is_some()
            || self.employer_contact_phone.is_some()
            || self.employer_website_url.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub address_line1: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub address_line3: String,
    #[serde(default)]
    pub postcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub level: u8,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wage {
    pub wage_type: String,
    #[serde(default)]
    pub wage_unit: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub wage_additional_information: Option<String>,
}

impl Wage {
    pub fn is_competitive_salary(&self) -> bool {
        self.wage_type == COMPETITIVE_SALARY
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Only the empty string is absent; whitespace-only text is kept as given.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.is_empty()))
}

fn deserialize_feed_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_feed_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognised date '{raw}'")))
}

/// Accepts plain `YYYY-MM-DD` dates and RFC 3339 timestamps.
pub(crate) fn parse_feed_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}
