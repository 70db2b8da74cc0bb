use std::sync::Arc;

use apprentice_watch::directory::{CompanyDirectory, LogoResolver};
use apprentice_watch::listings::format::{truncate_description, DEFAULT_DESCRIPTION_LIMIT, ELLIPSIS};
use apprentice_watch::listings::{Listing, ListingCardView, ListingCatalog, ListingDetailView};
use apprentice_watch::pages::listings::{render_detail, render_index};

fn resolver() -> LogoResolver {
    let directory = CompanyDirectory::builtin().expect("bundled directory parses");
    LogoResolver::new(Arc::new(directory), "pk_live_example")
}

fn sample_listing(id: &str) -> Listing {
    ListingCatalog::sample()
        .expect("bundled listings parse")
        .find(id)
        .cloned()
        .expect("sample listing present")
}

#[test]
fn index_renders_every_sample_listing_with_resolved_logos() {
    let catalog = ListingCatalog::sample().expect("bundled listings parse");
    let resolver = resolver();
    let cards: Vec<ListingCardView> = catalog
        .all()
        .iter()
        .map(|listing| ListingCardView::build(listing, &resolver))
        .collect();

    let html = render_index(&cards);

    assert_eq!(cards.len(), 3);
    assert!(html.contains("https://img.logo.dev/tesco.com?token=pk_live_example"));
    assert!(html.contains("https://img.logo.dev/rolls-royce.com?token=pk_live_example"));
    assert!(html.contains("name=Unknown%20Startup%20Ltd"));
    assert!(html.contains("href=\"/apprenticeships/VAC1000023456\""));
    assert!(html.contains("Competitive Salary"));
    assert!(html.contains("1 position available"));
    assert!(html.contains("20 positions available"));
}

#[test]
fn card_summary_never_exceeds_limit_plus_ellipsis() {
    let catalog = ListingCatalog::sample().expect("bundled listings parse");
    let resolver = resolver();

    for listing in catalog.all() {
        let card = ListingCardView::build(listing, &resolver);
        let limit = DEFAULT_DESCRIPTION_LIMIT + ELLIPSIS.chars().count();
        assert!(card.summary.chars().count() <= limit, "{} too long", listing.id);

        if listing.description.chars().count() > DEFAULT_DESCRIPTION_LIMIT {
            assert!(card.summary.ends_with(ELLIPSIS));
        } else {
            assert_eq!(card.summary, listing.description);
        }
    }
}

#[test]
fn truncation_respects_multibyte_characters() {
    let text = "£".repeat(200);
    let truncated = truncate_description(&text, DEFAULT_DESCRIPTION_LIMIT);
    assert_eq!(truncated.chars().count(), DEFAULT_DESCRIPTION_LIMIT + 3);
    assert!(truncated.starts_with("£££"));
}

#[test]
fn detail_for_fully_contactable_employer() {
    let listing = sample_listing("VAC1000012345");
    let detail = ListingDetailView::build(&listing, &resolver());
    let html = render_detail(&detail);

    assert_eq!(
        detail.analytics_label(),
        "Software Engineering Degree Apprentice - Tesco"
    );
    assert!(html.contains("Contact Information"));
    assert!(html.contains("href=\"mailto:"));
    assert!(html.contains("href=\"tel:"));
    assert!(html.contains("https://api.whatsapp.com/send?text="));
    assert!(html.contains("https://www.linkedin.com/sharing/share-offsite/?url="));
    assert!(html.contains("Apprenticeship Level"));
    assert!(html.contains("Working Hours"));
}

#[test]
fn detail_without_contacts_omits_contact_section() {
    let listing = sample_listing("VAC1000023456");
    assert!(!listing.has_contact_channels());

    let detail = ListingDetailView::build(&listing, &resolver());
    let html = render_detail(&detail);

    assert!(detail.contacts.is_empty());
    assert!(!html.contains("Contact Information"));
    assert!(html.contains("Not Disability Confident"));
    assert_eq!(detail.address_lines.first().map(String::as_str), Some("Unit 4, Canal Works"));
    assert!(detail.logo.matched_domain.is_none());
}
