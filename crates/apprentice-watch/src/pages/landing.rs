use super::html::{escape_html, logo_img, render_document, PageHead, SITE_NAME};
use crate::directory::{placeholder_avatar_url, LogoResolver, ResolvedLogo};
use crate::stats::{stat_cards, AggregateStat, StatCard};

pub const SEARCH_ROUTE: &str = "/search";

#[derive(Debug, Clone)]
pub struct LogoTile {
    pub name: String,
    pub logo: ResolvedLogo,
}

#[derive(Debug, Clone)]
pub struct LandingView {
    pub logos: Vec<LogoTile>,
    pub stats: Vec<StatCard>,
}

impl LandingView {
    pub fn build(logos: &LogoResolver, active_vacancies: AggregateStat) -> Self {
        let tiles = logos
            .directory()
            .entries()
            .iter()
            .filter(|entry| !entry.domain.is_empty())
            .map(|entry| LogoTile {
                name: entry.name.clone(),
                logo: ResolvedLogo {
                    src: logos.logo_url(&entry.domain),
                    fallback: placeholder_avatar_url(&entry.name),
                    matched_domain: Some(entry.domain.clone()),
                },
            })
            .collect();

        Self {
            logos: tiles,
            stats: stat_cards(active_vacancies),
        }
    }
}

pub fn render(view: &LandingView) -> String {
    let mut body = String::from("<div class=\"max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-36 text-center\">");

    body.push_str(
        "<h1 class=\"text-4xl sm:text-5xl md:text-6xl font-bold mb-4\">Let AI <span class=\"line-through\">Replace</span> \
<span class=\"font-serif italic text-orange-500\">Help</span> You</h1>",
    );
    body.push_str(
        "<p class=\"text-xl sm:text-2xl mb-8\">We Track Apprenticeships So You Don't Have to.</p>",
    );
    body.push_str(&format!(
        "<form method=\"post\" action=\"{SEARCH_ROUTE}\" class=\"max-w-3xl mx-auto mb-12\" role=\"search\">\
<input type=\"search\" name=\"q\" placeholder=\"Search apprenticeships\" aria-label=\"Search apprenticeships\">\
<button type=\"submit\">Search</button></form>"
    ));

    body.push_str("<section class=\"mt-16\"><h3 class=\"text-2xl font-bold mb-8 tracking-tight\">Top Companies Hiring Apprentices</h3>");
    body.push_str("<div class=\"relative w-full overflow-hidden py-8\"><div class=\"flex overflow-hidden whitespace-nowrap\">");
    for tile in &view.logos {
        body.push_str(&logo_img(&tile.logo, &tile.name, "h-12 mx-8 object-contain"));
    }
    body.push_str("</div></div>");

    body.push_str("<div class=\"mt-16 grid grid-cols-1 md:grid-cols-3 gap-8 max-w-6xl mx-auto px-4\">");
    for stat in &view.stats {
        body.push_str(&render_stat_card(stat));
    }
    body.push_str("</div></section></div>");

    let head = PageHead {
        title: format!("{SITE_NAME} - Track UK Apprenticeships"),
        description: Some(
            "ApprenticeWatch tracks apprenticeship vacancies from companies across the UK so you don't have to."
                .to_string(),
        ),
        extra: String::new(),
    };
    render_document(&head, &body)
}

fn render_stat_card(stat: &StatCard) -> String {
    format!(
        "<div class=\"bg-white dark:bg-gray-800 rounded-xl p-6 shadow-lg\">\
<div class=\"text-4xl font-bold text-orange-500\" data-stat=\"{}\">{}</div>\
<div class=\"text-lg font-semibold mt-2\">{}</div><p class=\"text-sm mt-2\">{}</p></div>",
        escape_html(stat.label),
        escape_html(&stat.value),
        escape_html(stat.label),
        escape_html(stat.description)
    )
}
