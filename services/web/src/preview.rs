use crate::infra::{load_catalog, load_logo_resolver};
use apprentice_watch::config::AppConfig;
use apprentice_watch::directory::LogoResolver;
use apprentice_watch::error::AppError;
use apprentice_watch::listings::{ListingCardView, ListingCatalog};
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct LogoArgs {
    /// Employer display name exactly as it appears on a listing
    pub(crate) employer: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ListingsArgs {
    /// Only print the first N listings
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

pub(crate) fn run_logo_lookup(args: LogoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let resolver = load_logo_resolver(&config.site)?;
    println!("{}", describe_logo(&resolver, &args.employer));
    Ok(())
}

pub(crate) fn run_listings_preview(args: ListingsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = load_catalog(&config.site)?;
    let resolver = load_logo_resolver(&config.site)?;

    for line in preview_lines(&catalog, &resolver, args.limit) {
        println!("{line}");
    }
    Ok(())
}

fn describe_logo(resolver: &LogoResolver, employer: &str) -> String {
    let logo = resolver.resolve(employer);
    match logo.matched_domain {
        Some(domain) => format!("{employer}: {} (directory match: {domain})", logo.src),
        None => format!("{employer}: {} (no directory match)", logo.src),
    }
}

fn preview_lines(
    catalog: &ListingCatalog,
    resolver: &LogoResolver,
    limit: Option<usize>,
) -> Vec<String> {
    let limit = limit.unwrap_or(catalog.len());
    if catalog.is_empty() {
        return vec!["No listings loaded".to_string()];
    }

    catalog
        .all()
        .iter()
        .take(limit)
        .map(|listing| {
            let card = ListingCardView::build(listing, resolver);
            format!(
                "- {} | {} | {} | {} | {} | {} | {}",
                card.title,
                card.employer_name,
                card.town,
                card.level_label,
                card.closing_label,
                card.wage_label,
                card.positions_label
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use apprentice_watch::directory::CompanyDirectory;
    use std::sync::Arc;

    fn resolver() -> LogoResolver {
        let directory = CompanyDirectory::builtin().expect("builtin directory parses");
        LogoResolver::new(Arc::new(directory), "pk_test")
    }

    #[test]
    fn describes_match_and_miss() {
        let resolver = resolver();
        assert!(describe_logo(&resolver, "Tesco").contains("directory match: tesco.com"));
        assert!(describe_logo(&resolver, "Tesco Stores Ltd").contains("no directory match"));
    }

    #[test]
    fn preview_honours_limit() {
        let catalog = ListingCatalog::sample().expect("sample parses");
        let lines = preview_lines(&catalog, &resolver(), Some(1));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Software Engineering Degree Apprentice"));
        assert!(lines[0].contains("£24,000 a year"));
    }

    #[test]
    fn empty_catalog_prints_notice() {
        let lines = preview_lines(&ListingCatalog::default(), &resolver(), None);
        assert_eq!(lines, vec!["No listings loaded".to_string()]);
    }
}
