use crate::directory::ResolvedLogo;

pub const SITE_NAME: &str = "ApprenticeWatch";

const PAGE_BACKGROUND: &str =
    "min-h-screen bg-gradient-to-b from-orange-50 to-white dark:from-gray-900 dark:to-gray-800";

/// Head metadata for one page.
#[derive(Debug, Clone, Default)]
pub struct PageHead {
    pub title: String,
    pub description: Option<String>,
    /// Pre-rendered markup appended inside `<head>`.
    pub extra: String,
}

impl PageHead {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

pub fn render_document(head: &PageHead, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 1024);
    html.push_str("<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    html.push_str(&format!("<title>{}</title>", escape_html(&head.title)));
    if let Some(description) = &head.description {
        html.push_str(&meta_name("description", description));
    }
    html.push_str(&head.extra);
    html.push_str("</head><body>");
    html.push_str(&render_nav());
    html.push_str(&format!("<main class=\"{PAGE_BACKGROUND}\">"));
    html.push_str(body);
    html.push_str("</main></body></html>");
    html
}

fn render_nav() -> String {
    format!(
        "<nav class=\"fixed top-0 w-full\"><a href=\"/\" class=\"font-bold\">{SITE_NAME}</a>\
<a href=\"/apprenticeships\">Apprenticeships</a>\
<a href=\"/team\">Team</a>\
<a href=\"/signin\">Sign In</a></nav>"
    )
}

pub fn meta_name(name: &str, content: &str) -> String {
    format!(
        "<meta name=\"{}\" content=\"{}\">",
        escape_html(name),
        escape_html(content)
    )
}

pub fn meta_property(property: &str, content: &str) -> String {
    format!(
        "<meta property=\"{}\" content=\"{}\">",
        escape_html(property),
        escape_html(content)
    )
}

/// Logo `<img>` that swaps to the avatar fallback if the primary source fails to load.
pub fn logo_img(logo: &ResolvedLogo, alt: &str, class: &str) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\" class=\"{}\" onerror=\"this.onerror=null;this.src='{}'\">",
        escape_html(&logo.src),
        escape_html(alt),
        class,
        escape_html(&logo.fallback)
    )
}

pub fn external_link(href: &str, class: &str, aria_label: &str, inner: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"{}\" aria-label=\"{}\">{}</a>",
        escape_html(href),
        class,
        escape_html(aria_label),
        inner
    )
}

/// Serialises a JSON-LD document so it cannot terminate its `<script>` element early.
pub fn json_ld_script(document: &serde_json::Value) -> String {
    let body = document.to_string().replace("</", "<\\/");
    format!("<script type=\"application/ld+json\">{body}</script>")
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn escapes_markup_significant_characters() {
        assert_eq!(
            escape_html("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn document_carries_title_and_description() {
        let head = PageHead {
            title: "Jobs & More".to_string(),
            description: Some("Find work".to_string()),
            extra: String::new(),
        };
        let html = render_document(&head, "<p>body</p>");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Jobs &amp; More</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"Find work\">"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn logo_img_wires_fallback() {
        let logo = ResolvedLogo {
            src: "https://img.logo.dev/bt.com?token=k".to_string(),
            fallback: "https://ui-avatars.com/api/?name=BT&background=random".to_string(),
            matched_domain: Some("bt.com".to_string()),
        };
        let img = logo_img(&logo, "BT", "w-16 h-16");
        assert!(img.contains("src=\"https://img.logo.dev/bt.com?token=k\""));
        assert!(img.contains(
            "this.src='https://ui-avatars.com/api/?name=BT&amp;background=random'"
        ));
    }

    #[test]
    fn json_ld_cannot_close_script_tag() {
        let script = json_ld_script(&json!({ "name": "</script><script>alert(1)" }));
        assert!(!script.contains("</script><script>"));
        assert!(script.ends_with("</script>"));
    }
}
