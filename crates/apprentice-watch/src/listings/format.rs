use chrono::NaiveDate;

use super::domain::Wage;

pub const DEFAULT_DESCRIPTION_LIMIT: usize = 150;
pub const ELLIPSIS: &str = "...";

/// Cuts `text` to `max_length` characters and appends an ellipsis. May split a word.
pub fn truncate_description(text: &str, max_length: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    match text.char_indices().nth(max_length) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
    }
}

pub fn format_wage(wage: &Wage) -> String {
    if wage.is_competitive_salary() {
        return "Competitive Salary".to_string();
    }

    match &wage.wage_additional_information {
        Some(info) => info.clone(),
        None => format!("{} ({})", wage.wage_type, wage.wage_unit),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

pub fn positions_label(count: u32) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} position{plural} available")
}

pub fn format_hours(hours: f64) -> String {
    format!("{hours} hours per week")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wage(kind: &str, unit: &str, info: Option<&str>) -> Wage {
        Wage {
            wage_type: kind.to_string(),
            wage_unit: unit.to_string(),
            wage_additional_information: info.map(str::to_string),
        }
    }

    #[test]
    fn short_text_is_returned_unchanged() {
        let text = "a".repeat(DEFAULT_DESCRIPTION_LIMIT);
        assert_eq!(truncate_description(&text, DEFAULT_DESCRIPTION_LIMIT), text);
        assert_eq!(truncate_description("", DEFAULT_DESCRIPTION_LIMIT), "");
    }

    #[test]
    fn long_text_keeps_prefix_and_gains_ellipsis() {
        let text: String = ('a'..='z').cycle().take(400).collect();
        let truncated = truncate_description(&text, DEFAULT_DESCRIPTION_LIMIT);
        assert_eq!(truncated.chars().count(), DEFAULT_DESCRIPTION_LIMIT + ELLIPSIS.len());
        assert!(truncated.starts_with(&text[..DEFAULT_DESCRIPTION_LIMIT]));
        assert!(truncated.ends_with(ELLIPSIS));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "£".repeat(10);
        assert_eq!(truncate_description(&text, 4), "££££...");
    }

    #[test]
    fn competitive_salary_ignores_other_fields() {
        let formatted = format_wage(&wage("CompetitiveSalary", "Annually", Some("£30k")));
        assert_eq!(formatted, "Competitive Salary");
    }

    #[test]
    fn additional_information_wins_over_type_and_unit() {
        let formatted = format_wage(&wage("Custom", "Annually", Some("£21,000 a year")));
        assert_eq!(formatted, "£21,000 a year");
    }

    #[test]
    fn whitespace_information_is_still_shown() {
        assert_eq!(format_wage(&wage("Custom", "Weekly", Some("   "))), "   ");
    }

    #[test]
    fn falls_back_to_type_and_unit() {
        let formatted = format_wage(&wage("ApprenticeshipMinimum", "Weekly", None));
        assert_eq!(formatted, "ApprenticeshipMinimum (Weekly)");
    }

    #[test]
    fn dates_render_in_long_uk_form() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).expect("valid date");
        assert_eq!(format_date(date), "5 March 2025");
    }

    #[test]
    fn positions_label_pluralises() {
        assert_eq!(positions_label(1), "1 position available");
        assert_eq!(positions_label(0), "0 positions available");
        assert_eq!(positions_label(3), "3 positions available");
    }

    #[test]
    fn hours_drop_trailing_zero() {
        assert_eq!(format_hours(37.0), "37 hours per week");
        assert_eq!(format_hours(37.5), "37.5 hours per week");
        assert_eq!(format_hours(37.25), "37.25 hours per week");
        assert_eq!(format_hours(22.75), "22.75 hours per week");
    }
}
