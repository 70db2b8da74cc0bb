use serde_json::Value;

use super::html::{
    escape_html, external_link, json_ld_script, meta_name, meta_property, render_document,
    PageHead,
};
use crate::team::{TeamMember, TeamRoster};

const PAGE_TITLE: &str = "Our Team - Apprenticewatch";
const PAGE_DESCRIPTION: &str = "Meet the visionary team behind ApprenticeWatch working to revolutionise how apprenticeships are discovered and accessed in the UK.";
const PAGE_KEYWORDS: &str = "ApprenticeWatch team, apprenticeship experts, UK apprenticeship leaders, apprenticeship innovators";
const OG_IMAGE: &str = "/media/team-og-image.png";

const SOCIAL_CLASS: &str = "text-gray-600 hover:text-orange-500 transition-colors";

pub fn render(team: &TeamRoster, organization: &Value) -> String {
    let mut body = String::from("<div class=\"max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-24 pb-12\">");
    body.push_str(
        "<div class=\"text-center mb-16\"><h1 class=\"text-4xl font-bold mb-4\">Meet the <span class=\"text-orange-500\">Team</span></h1>\
<p class=\"text-lg max-w-2xl mx-auto\">The minds behind ApprenticeWatch, working to revolutionise how apprenticeships are discovered and accessed.</p></div>",
    );

    body.push_str("<section class=\"relative mb-24\" data-tier=\"founder\"><div class=\"grid md:grid-cols-2 gap-12\">");
    for member in &team.founders {
        body.push_str(&render_founder(member));
    }
    body.push_str("</div></section>");

    body.push_str("<section class=\"mb-24\" data-tier=\"senior-lead\">");
    for member in &team.senior_leads {
        body.push_str(&render_senior_lead(member));
    }
    body.push_str("</section>");

    if team.has_ambassadors() {
        body.push_str(
            "<section class=\"mt-16\" data-tier=\"ambassador\"><h2 class=\"text-2xl font-bold text-center mb-8\">Our <span class=\"text-orange-500\">Brand Ambassadors</span></h2>\
<div class=\"grid sm:grid-cols-2 lg:grid-cols-3 gap-6\">",
        );
        for member in &team.ambassadors {
            body.push_str(&render_ambassador(member));
        }
        body.push_str("</div></section>");
    }
    body.push_str("</div>");

    render_document(&team_head(organization), &body)
}

fn team_head(organization: &Value) -> PageHead {
    let mut extra = String::new();
    extra.push_str(&meta_name("keywords", PAGE_KEYWORDS));
    extra.push_str(&meta_property("og:type", "website"));
    extra.push_str(&meta_property("og:title", PAGE_TITLE));
    extra.push_str(&meta_property("og:description", PAGE_DESCRIPTION));
    extra.push_str(&meta_property("og:image", OG_IMAGE));
    extra.push_str(&meta_name("twitter:title", PAGE_TITLE));
    extra.push_str(&meta_name("twitter:description", PAGE_DESCRIPTION));
    extra.push_str(&json_ld_script(organization));

    PageHead {
        title: PAGE_TITLE.to_string(),
        description: Some(PAGE_DESCRIPTION.to_string()),
        extra,
    }
}

fn render_founder(member: &TeamMember) -> String {
    format!(
        "<article class=\"relative group bg-white/90 dark:bg-gray-800/90 rounded-2xl p-8 shadow-xl\"><div class=\"flex flex-col items-center\">\
<div class=\"relative mb-6\"><img src=\"{}\" alt=\"{}\" class=\"w-32 h-32 rounded-full object-cover\">\
<div class=\"rounded-full text-sm font-medium\">{}</div></div>\
<h2 class=\"text-2xl font-bold mb-3\">{}</h2>{}<p class=\"text-center mb-6\">{}</p>\
<div class=\"flex items-center space-x-4\">{}</div></div></article>",
        escape_html(member.image),
        escape_html(member.name),
        escape_html(member.role),
        escape_html(member.name),
        render_email(member, "font-medium mb-4"),
        escape_html(member.description),
        render_socials(member, &[Social::GitHub, Social::LinkedIn]),
    )
}

fn render_senior_lead(member: &TeamMember) -> String {
    format!(
        "<article class=\"relative group max-w-3xl mx-auto bg-white/90 dark:bg-gray-800/90 rounded-xl p-8 shadow-lg\"><div class=\"flex flex-col md:flex-row md:items-start gap-8\">\
<div class=\"relative flex-shrink-0\"><img src=\"{}\" alt=\"{}\" class=\"w-28 h-28 rounded-full object-cover\">\
<div class=\"rounded-full text-xs font-medium\">{}</div></div>\
<div class=\"flex-1 space-y-3\"><h3 class=\"text-2xl font-bold\">{}</h3>{}<p class=\"text-sm\">{}</p>\
<div class=\"flex space-x-3 pt-2\">{}</div></div></div></article>",
        escape_html(member.image),
        escape_html(member.name),
        escape_html(member.role),
        escape_html(member.name),
        render_email(member, "font-medium block"),
        escape_html(member.description),
        render_socials(member, &[Social::GitHub, Social::LinkedIn]),
    )
}

fn render_ambassador(member: &TeamMember) -> String {
    format!(
        "<article class=\"bg-white/80 dark:bg-gray-800/80 rounded-xl p-4 shadow-lg\"><div class=\"flex items-center space-x-4\">\
<img src=\"{}\" alt=\"{}\" class=\"w-16 h-16 rounded-full object-cover\">\
<div class=\"flex-1 min-w-0\"><h3 class=\"text-lg font-semibold truncate\">{}</h3>\
<p class=\"text-sm text-orange-500 mb-1\">{}</p><p class=\"text-sm line-clamp-2\">{}</p>\
<div class=\"flex space-x-2 mt-2\">{}</div></div></div></article>",
        escape_html(member.image),
        escape_html(member.name),
        escape_html(member.name),
        escape_html(member.role),
        escape_html(member.description),
        render_socials(member, &[Social::LinkedIn, Social::Twitter]),
    )
}

fn render_email(member: &TeamMember, class: &str) -> String {
    match member.email {
        Some(email) => format!(
            "<a href=\"mailto:{}\" class=\"text-orange-500 hover:text-orange-600 {class}\">{}</a>",
            escape_html(email),
            escape_html(email)
        ),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy)]
enum Social {
    GitHub,
    LinkedIn,
    Twitter,
}

impl Social {
    const fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter",
        }
    }

    fn href(self, member: &TeamMember) -> Option<&'static str> {
        match self {
            Self::GitHub => member.links.github,
            Self::LinkedIn => member.links.linkedin,
            Self::Twitter => member.links.twitter,
        }
    }
}

/// Each card variant shows its own subset of profiles.
fn render_socials(member: &TeamMember, shown: &[Social]) -> String {
    shown
        .iter()
        .filter_map(|social| {
            social.href(member).map(|href| {
                let label = format!("{} {}", member.name, social.label());
                external_link(href, SOCIAL_CLASS, &label, social.label())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::{organization_json_ld, roster, RoleTier, SocialLinks};

    fn page(members: &[TeamMember]) -> String {
        let team = TeamRoster::partition(members);
        render(&team, &organization_json_ld("https://apprenticewatch.com", members))
    }

    #[test]
    fn static_roster_page_has_no_ambassador_section() {
        let html = page(&roster());
        assert!(html.contains("Farrukh Ahmad"));
        assert!(html.contains("Chief Technical Officer"));
        assert!(html.contains("href=\"mailto:humza@apprenticewatch.com\""));
        assert!(!html.contains("Brand Ambassadors"));
    }

    #[test]
    fn head_carries_seo_and_json_ld() {
        let html = page(&roster());
        assert!(html.contains("<title>Our Team - Apprenticewatch</title>"));
        assert!(html.contains("<meta property=\"og:image\" content=\"/media/team-og-image.png\">"));
        assert!(html.contains("<script type=\"application/ld+json\">"));
        assert!(html.contains("\"@type\":\"Organization\""));
    }

    #[test]
    fn ambassador_cards_show_twitter_not_github() {
        let mut members = roster();
        members.push(TeamMember {
            name: "Aisha",
            role: "Brand Ambassador",
            image: "/media/aisha.png",
            description: "Campus outreach.",
            tier: RoleTier::Ambassador,
            links: SocialLinks {
                github: Some("https://github.com/aisha"),
                linkedin: None,
                twitter: Some("https://twitter.com/aisha"),
            },
            email: None,
        });

        let html = page(&members);
        assert!(html.contains("Brand Ambassadors"));
        assert!(html.contains("https://twitter.com/aisha"));
        assert!(!html.contains("aria-label=\"Aisha GitHub\""));
    }
}
