use super::html::{render_document, PageHead, SITE_NAME};

/// Mount point picked up by the Google Identity client script.
pub const SIGN_IN_WIDGET_ID: &str = "google-signin";

pub fn render() -> String {
    let body = format!(
        "<div class=\"pt-16 flex items-center justify-center\">\
<div class=\"w-full max-w-md mx-auto p-8 bg-white dark:bg-gray-900 rounded-2xl shadow-xl\">\
<h2 class=\"text-3xl font-bold text-center mb-8\">Welcome to {SITE_NAME}</h2>\
<div class=\"space-y-6 flex flex-col items-center\">\
<div id=\"{SIGN_IN_WIDGET_ID}\" data-provider=\"google\"></div>\
<p class=\"text-center text-sm\">By continuing, you agree to our \
<a href=\"/terms\" class=\"text-orange-600\">Terms of Service</a> and \
<a href=\"/privacy\" class=\"text-orange-600\">Privacy Policy</a></p>\
</div></div></div>"
    );

    let head = PageHead {
        title: format!("Sign In - {SITE_NAME}"),
        description: None,
        extra: "<script src=\"https://accounts.google.com/gsi/client\" async defer></script>"
            .to_string(),
    };
    render_document(&head, &body)
}
