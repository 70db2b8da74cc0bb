use super::html::{escape_html, external_link, logo_img, render_document, PageHead, SITE_NAME};
use crate::listings::views::{ContactLink, InfoTile, ListingCardView, ListingDetailView};

const CARD_CLASS: &str =
    "bg-white dark:bg-gray-800 rounded-xl shadow-lg hover:shadow-xl transition-all duration-300 p-6";
const SECTION_CLASS: &str = "bg-white dark:bg-gray-800 rounded-xl p-4 sm:p-6 shadow-lg";
const LOGO_CLASS: &str = "w-16 h-16 rounded-lg object-contain bg-white";
const ACCENT_LINK_CLASS: &str = "flex items-center space-x-2 text-orange-500 hover:text-orange-600";

pub fn render_card(card: &ListingCardView) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<article class=\"{CARD_CLASS}\" data-listing-id=\"{}\"><div class=\"flex items-start space-x-4\">",
        escape_html(&card.id)
    ));
    html.push_str(&logo_img(&card.logo, &card.employer_name, LOGO_CLASS));
    html.push_str("<div class=\"flex-1\">");
    html.push_str(&format!(
        "<h3 class=\"text-xl font-semibold mb-2\">{}</h3>",
        escape_html(&card.title)
    ));

    html.push_str("<ul class=\"flex flex-wrap gap-4 mt-2 text-sm\">");
    for (icon, text) in [
        ("building", &card.employer_name),
        ("map-pin", &card.town),
        ("graduation-cap", &card.level_label),
        ("clock", &card.closing_label),
        ("pound-sterling", &card.wage_label),
    ] {
        html.push_str(&format!(
            "<li data-icon=\"{icon}\"><span>{}</span></li>",
            escape_html(text)
        ));
    }
    html.push_str("</ul>");

    html.push_str(&format!(
        "<p class=\"mt-3 line-clamp-2\">{}</p>",
        escape_html(&card.summary)
    ));
    html.push_str(&format!(
        "<div class=\"mt-4 flex items-center justify-between\">\
<a href=\"{}\" class=\"px-4 py-2 bg-orange-500 text-white rounded-lg\">View Details</a>\
<span class=\"text-sm\">{}</span></div>",
        escape_html(&card.detail_href),
        escape_html(&card.positions_label)
    ));
    html.push_str("</div></div></article>");
    html
}

pub fn render_index(cards: &[ListingCardView]) -> String {
    let mut body = String::from("<div class=\"max-w-5xl mx-auto px-4 pt-24 pb-12\">");
    body.push_str("<h1 class=\"text-3xl font-bold mb-8\">Apprenticeships</h1>");

    if cards.is_empty() {
        body.push_str("<p class=\"text-gray-600\">No apprenticeships are open right now. Check back soon.</p>");
    } else {
        body.push_str("<div class=\"space-y-6\">");
        for card in cards {
            body.push_str(&render_card(card));
        }
        body.push_str("</div>");
    }
    body.push_str("</div>");

    let head = PageHead {
        title: format!("Apprenticeships - {SITE_NAME}"),
        description: Some("Browse live UK apprenticeship vacancies tracked by ApprenticeWatch.".to_string()),
        extra: String::new(),
    };
    render_document(&head, &body)
}

pub fn render_detail(detail: &ListingDetailView) -> String {
    let mut body = String::from("<div class=\"max-w-4xl mx-auto px-4 sm:px-6 pt-24 pb-12\">");

    body.push_str("<div class=\"flex items-center justify-between mb-6 sm:mb-8\">");
    body.push_str(
        "<a href=\"/apprenticeships\" aria-label=\"Back to Apprenticeships\"><span>Back to Apprenticeships</span></a>",
    );
    body.push_str(&render_share_menu(detail));
    body.push_str("</div>");

    body.push_str(&format!("<header class=\"{SECTION_CLASS} mb-6 sm:mb-8\"><div class=\"flex flex-col sm:flex-row sm:items-start sm:space-x-4\">"));
    body.push_str(&logo_img(&detail.logo, &detail.employer_name, LOGO_CLASS));
    body.push_str(&format!(
        "<div><h1 class=\"text-xl sm:text-3xl font-bold mb-2\">{}</h1>\
<div class=\"space-y-2\"><div data-icon=\"building\"><span>{}</span></div>\
<div data-icon=\"briefcase\"><span>Training Provider: {}</span></div></div></div>",
        escape_html(&detail.title),
        escape_html(&detail.employer_name),
        escape_html(&detail.provider_name)
    ));
    body.push_str("</div></header>");

    body.push_str("<div class=\"grid grid-cols-1 lg:grid-cols-3 gap-6 sm:gap-8\">");

    body.push_str("<div class=\"lg:col-span-2 space-y-6 sm:space-y-8\">");
    body.push_str(&format!(
        "<section class=\"{SECTION_CLASS}\"><h2>Description</h2><p class=\"whitespace-pre-line\">{}</p></section>",
        escape_html(&detail.description)
    ));
    body.push_str(&format!(
        "<section class=\"{SECTION_CLASS}\"><h2>Key Information</h2><div class=\"grid grid-cols-1 sm:grid-cols-2 gap-6\">"
    ));
    for tile in &detail.key_information {
        body.push_str(&render_info_tile(tile, detail.disability_confident));
    }
    body.push_str("</div></section></div>");

    body.push_str("<aside class=\"space-y-6 sm:space-y-8\">");
    body.push_str(&format!(
        "<section class=\"{SECTION_CLASS}\"><h2>Application Details</h2><div class=\"space-y-4\">\
<div><div class=\"text-sm\">Posted</div><div>{}</div></div>\
<div><div class=\"text-sm\">Closing Date</div><div>{}</div></div>{}</div></section>",
        escape_html(&detail.posted_label),
        escape_html(&detail.closing_label),
        external_link(
            &detail.apply_url,
            "block w-full bg-orange-500 text-white text-center py-3 rounded-lg",
            "Apply Now",
            "Apply Now"
        )
    ));

    let address = detail
        .address_lines
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("<br>");
    body.push_str(&format!(
        "<section class=\"{SECTION_CLASS}\"><h2 data-icon=\"map-pin\">Location</h2><address class=\"not-italic\">{address}</address></section>"
    ));

    if !detail.contacts.is_empty() {
        body.push_str(&format!(
            "<section class=\"{SECTION_CLASS}\"><h2>Contact Information</h2><div class=\"space-y-3\">"
        ));
        for contact in &detail.contacts {
            body.push_str(&render_contact(contact));
        }
        body.push_str("</div></section>");
    }
    body.push_str("</aside></div></div>");

    let head = PageHead {
        title: format!("{} at {} - {SITE_NAME}", detail.title, detail.employer_name),
        description: Some(format!(
            "{} apprenticeship with {}. Closes {}.",
            detail.title, detail.employer_name, detail.closing_label
        )),
        extra: String::new(),
    };
    render_document(&head, &body)
}

pub fn render_not_found(listing_id: &str) -> String {
    let body = format!(
        "<div class=\"max-w-4xl mx-auto px-4 pt-24 pb-12 text-center\">\
<h1 class=\"text-3xl font-bold mb-4\">Apprenticeship not found</h1>\
<p>We couldn't find a vacancy with reference <code>{}</code>. It may have closed.</p>\
<a href=\"/apprenticeships\" class=\"text-orange-500\">Back to Apprenticeships</a></div>",
        escape_html(listing_id)
    );
    render_document(&PageHead::titled(format!("Not found - {SITE_NAME}")), &body)
}

fn render_share_menu(detail: &ListingDetailView) -> String {
    let item_class = "flex items-center space-x-2";
    format!(
        "<details class=\"relative\"><summary aria-label=\"Share\"><span>Share</span></summary>\
<div class=\"absolute top-full mt-2 bg-white dark:bg-gray-800 shadow-lg rounded-lg p-4 space-y-2\">\
<button type=\"button\" class=\"{item_class}\" aria-label=\"Copy Link\" data-copy=\"{}\" \
onclick=\"navigator.clipboard.writeText(this.dataset.copy)\"><span>Copy Link</span></button>\
{}{}</div></details>",
        escape_html(&detail.share.copy_link),
        external_link(
            &detail.share.whatsapp,
            item_class,
            "Share on WhatsApp",
            "<span>WhatsApp</span>"
        ),
        external_link(
            &detail.share.linkedin,
            item_class,
            "Share on LinkedIn",
            "<span>LinkedIn</span>"
        ),
    )
}

fn render_info_tile(tile: &InfoTile, disability_confident: bool) -> String {
    let detail = if tile.title == "Positions" {
        let (icon, class) = if disability_confident {
            ("check", "text-green-600")
        } else {
            ("x", "text-gray-600")
        };
        format!(
            "<span data-icon=\"{icon}\" class=\"flex items-center {class}\">{}</span>",
            escape_html(&tile.detail)
        )
    } else {
        escape_html(&tile.detail)
    };

    format!(
        "<div class=\"bg-gray-50 dark:bg-gray-700/50 rounded-xl p-4\"><h3 class=\"text-lg font-semibold\">{}</h3>\
<div>{}</div><div class=\"text-sm mt-1\">{}</div></div>",
        escape_html(tile.title),
        escape_html(&tile.headline),
        detail
    )
}

fn render_contact(contact: &ContactLink) -> String {
    let inner = format!("<span>{}</span>", escape_html(&contact.text));
    if contact.kind.opens_new_tab() {
        external_link(&contact.href, ACCENT_LINK_CLASS, &contact.aria_label, &inner)
    } else {
        format!(
            "<a href=\"{}\" class=\"{ACCENT_LINK_CLASS} break-all\" aria-label=\"{}\">{inner}</a>",
            escape_html(&contact.href),
            escape_html(&contact.aria_label)
        )
    }
}
