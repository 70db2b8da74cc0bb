use serde::Serialize;

use super::domain::{Address, Listing};
use super::format::{
    format_date, format_hours, format_wage, positions_label, truncate_description,
    DEFAULT_DESCRIPTION_LIMIT,
};
use crate::directory::{LogoResolver, ResolvedLogo};

pub const LISTINGS_ROUTE: &str = "/apprenticeships";

pub fn detail_path(listing_id: &str) -> String {
    format!("{LISTINGS_ROUTE}/{}", urlencoding::encode(listing_id))
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingCardView {
    pub id: String,
    pub title: String,
    pub employer_name: String,
    pub logo: ResolvedLogo,
    pub town: String,
    pub level_label: String,
    pub closing_label: String,
    pub wage_label: String,
    pub summary: String,
    pub detail_href: String,
    pub positions_label: String,
}

impl ListingCardView {
    pub fn build(listing: &Listing, logos: &LogoResolver) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            employer_name: listing.employer_name.clone(),
            logo: logos.resolve(&listing.employer_name),
            town: listing.address.address_line3.clone(),
            level_label: format!("Level {}", listing.course.level),
            closing_label: format!("Closes {}", format_date(listing.closing_date)),
            wage_label: format_wage(&listing.wage),
            summary: truncate_description(&listing.description, DEFAULT_DESCRIPTION_LIMIT),
            detail_href: detail_path(&listing.id),
            positions_label: positions_label(listing.number_of_positions),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub copy_link: String,
    pub whatsapp: String,
    pub linkedin: String,
}

impl ShareLinks {
    pub fn for_url(vacancy_url: &str) -> Self {
        let encoded = urlencoding::encode(vacancy_url);
        Self {
            copy_link: vacancy_url.to_string(),
            whatsapp: format!("https://api.whatsapp.com/send?text={encoded}"),
            linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={encoded}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub href: String,
    pub text: String,
    pub aria_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Website,
}

impl ContactKind {
    /// Website links leave the site; the others hand off to a local client.
    pub const fn opens_new_tab(self) -> bool {
        matches!(self, Self::Website)
    }
}

/// One tile in the "Key Information" grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoTile {
    pub title: &'static str,
    pub headline: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingDetailView {
    pub id: String,
    pub title: String,
    pub employer_name: String,
    pub provider_name: String,
    pub logo: ResolvedLogo,
    pub description: String,
    pub key_information: Vec<InfoTile>,
    pub disability_confident: bool,
    pub posted_label: String,
    pub closing_label: String,
    pub apply_url: String,
    pub address_lines: Vec<String>,
    pub contacts: Vec<ContactLink>,
    pub share: ShareLinks,
}

impl ListingDetailView {
    pub fn build(listing: &Listing, logos: &LogoResolver) -> Self {
        let key_information = vec![
            InfoTile {
                title: "Apprenticeship Level",
                headline: format!(
                    "Level {} - {}",
                    listing.course.level, listing.apprenticeship_level
                ),
                detail: format!("{} - {}", listing.course.route, listing.course.title),
            },
            InfoTile {
                title: "Working Hours",
                headline: format_hours(listing.hours_per_week),
                detail: listing.working_week_description.clone(),
            },
            InfoTile {
                title: "Duration",
                headline: listing.expected_duration.clone(),
                detail: format!("Start Date: {}", format_date(listing.start_date)),
            },
            InfoTile {
                title: "Positions",
                headline: positions_label(listing.number_of_positions),
                detail: if listing.is_disability_confident {
                    "Disability Confident Employer".to_string()
                } else {
                    "Not Disability Confident".to_string()
                },
            },
        ];

        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            employer_name: listing.employer_name.clone(),
            provider_name: listing.provider_name.clone(),
            logo: logos.resolve(&listing.employer_name),
            description: listing.description.clone(),
            key_information,
            disability_confident: listing.is_disability_confident,
            posted_label: format_date(listing.posted_date),
            closing_label: format_date(listing.closing_date),
            apply_url: listing.vacancy_url.clone(),
            address_lines: address_lines(&listing.address),
            contacts: contact_links(listing),
            share: ShareLinks::for_url(&listing.vacancy_url),
        }
    }

    pub fn analytics_label(&self) -> String {
        format!("{} - {}", self.title, self.employer_name)
    }
}

fn address_lines(address: &Address) -> Vec<String> {
    let mut lines = vec![address.address_line1.clone()];
    if let Some(line2) = &address.address_line2 {
        lines.push(line2.clone());
    }
    lines.push(address.address_line3.clone());
    lines.push(address.postcode.clone());
    lines
}

fn contact_links(listing: &Listing) -> Vec<ContactLink> {
    let mut links = Vec::new();

    if let Some(email) = &listing.employer_contact_email {
        links.push(ContactLink {
            kind: ContactKind::Email,
            href: format!("mailto:{email}"),
            text: email.clone(),
            aria_label: format!("Email {email}"),
        });
    }
    if let Some(phone) = &listing.employer_contact_phone {
        links.push(ContactLink {
            kind: ContactKind::Phone,
            href: format!("tel:{phone}"),
            text: phone.clone(),
            aria_label: format!("Call {phone}"),
        });
    }
    if let Some(website) = &listing.employer_website_url {
        links.push(ContactLink {
            kind: ContactKind::Website,
            href: website.clone(),
            text: "Company Website".to_string(),
            aria_label: "Company Website".to_string(),
        });
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::CompanyDirectory;
    use crate::listings::ListingCatalog;
    use std::sync::Arc;

    fn resolver() -> LogoResolver {
        let directory = CompanyDirectory::builtin().expect("builtin directory parses");
        LogoResolver::new(Arc::new(directory), "pk_test")
    }

    fn sample(id: &str) -> Listing {
        ListingCatalog::sample()
            .expect("sample parses")
            .find(id)
            .cloned()
            .expect("sample listing present")
    }

    #[test]
    fn card_view_summarises_listing() {
        let card = ListingCardView::build(&sample("VAC1000012345"), &resolver());
        assert_eq!(card.town, "Welwyn Garden City");
        assert_eq!(card.level_label, "Level 6");
        assert_eq!(card.closing_label, "Closes 14 December 2026");
        assert_eq!(card.wage_label, "£24,000 a year");
        assert_eq!(card.detail_href, "/apprenticeships/VAC1000012345");
        assert_eq!(card.positions_label, "12 positions available");
        assert!(card.summary.ends_with("..."));
        assert!(card.logo.src.contains("tesco.com"));
    }

    #[test]
    fn detail_view_collects_contact_channels_in_order() {
        let detail = ListingDetailView::build(&sample("VAC1000012345"), &resolver());
        let kinds: Vec<ContactKind> = detail.contacts.iter().map(|link| link.kind).collect();
        assert_eq!(
            kinds,
            vec![ContactKind::Email, ContactKind::Phone, ContactKind::Website]
        );
        assert_eq!(detail.contacts[0].href, "mailto:early.careers@tesco.com");
        assert_eq!(detail.contacts[1].aria_label, "Call 0800 505 555");
        assert_eq!(
            detail.analytics_label(),
            "Software Engineering Degree Apprentice - Tesco"
        );
    }

    #[test]
    fn detail_view_omits_missing_address_line_and_contacts() {
        let detail = ListingDetailView::build(&sample("VAC1000023456"), &resolver());
        assert_eq!(
            detail.address_lines,
            vec!["Unit 4, Canal Works", "Manchester", "M4 6FA"]
        );
        assert!(detail.contacts.is_empty());
        assert_eq!(detail.key_information[3].headline, "1 position available");
        assert_eq!(detail.key_information[3].detail, "Not Disability Confident");
    }

    #[test]
    fn share_links_encode_vacancy_url() {
        let links = ShareLinks::for_url("https://example.org/v?id=1&ref=aw");
        assert_eq!(
            links.whatsapp,
            "https://api.whatsapp.com/send?text=https%3A%2F%2Fexample.org%2Fv%3Fid%3D1%26ref%3Daw"
        );
        assert!(links
            .linkedin
            .starts_with("https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2F"));
        assert_eq!(links.copy_link, "https://example.org/v?id=1&ref=aw");
    }
}
