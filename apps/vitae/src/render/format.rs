//! Shared formatting helpers used by every layout and by the PDF exporter.

use chrono::NaiveDate;

use crate::models::PersonalInfo;

/// Formats a stored date string as abbreviated month + full year
/// ("Jan 2022"). Accepts full dates (`2022-01-15`) and month inputs
/// (`2022-01`). Empty or unparsable input formats as the empty string,
/// never an "Invalid Date" artifact.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    // Month inputs carry no day component.
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    String::new()
}

/// Renders a date range. The start date always renders; the end renders as
/// the literal "Present" when `current` is set (a stored end date is
/// ignored), else the formatted end date, else nothing.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let start = format_date(start);
    let end = if current {
        "Present".to_string()
    } else {
        format_date(end)
    };
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start} - {end}"),
        (false, true) => start,
        (true, false) => end,
        (true, true) => String::new(),
    }
}

/// Contact values in display order, absent fields suppressed.
pub fn contact_items(info: &PersonalInfo) -> Vec<&str> {
    [
        info.email.as_str(),
        info.phone.as_str(),
        info.location.as_str(),
    ]
    .into_iter()
    .filter(|v| !v.is_empty())
    .collect()
}

/// Link values (website, LinkedIn, GitHub) in display order, absent fields
/// suppressed.
pub fn link_items(info: &PersonalInfo) -> Vec<&str> {
    [
        info.website.as_str(),
        info.linkedin.as_str(),
        info.github.as_str(),
    ]
    .into_iter()
    .filter(|v| !v.is_empty())
    .collect()
}

/// "Degree in Field" with either part optional.
pub fn degree_line(degree: &str, field_of_study: &str) -> String {
    match (degree.is_empty(), field_of_study.is_empty()) {
        (false, false) => format!("{degree} in {field_of_study}"),
        (false, true) => degree.to_string(),
        (true, false) => field_of_study.to_string(),
        (true, true) => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_empty_is_empty() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("   "), "");
    }

    #[test]
    fn test_format_date_full_date() {
        assert_eq!(format_date("2022-01-15"), "Jan 2022");
        assert_eq!(format_date("2019-12-01"), "Dec 2019");
    }

    #[test]
    fn test_format_date_month_input() {
        assert_eq!(format_date("2022-01"), "Jan 2022");
        assert_eq!(format_date("2023-09"), "Sep 2023");
    }

    #[test]
    fn test_format_date_unparsable_is_empty() {
        assert_eq!(format_date("garbage"), "");
        assert_eq!(format_date("2022-13-40"), "");
        assert_eq!(format_date("15/01/2022"), "");
    }

    #[test]
    fn test_date_range_current_wins_over_stored_end() {
        assert_eq!(
            date_range("2020-03", "2022-06", true),
            "Mar 2020 - Present"
        );
    }

    #[test]
    fn test_date_range_formatted_end_when_not_current() {
        assert_eq!(date_range("2020-03", "2022-06", false), "Mar 2020 - Jun 2022");
    }

    #[test]
    fn test_date_range_start_only() {
        assert_eq!(date_range("2020-03", "", false), "Mar 2020");
    }

    #[test]
    fn test_date_range_nothing_set_is_empty() {
        assert_eq!(date_range("", "", false), "");
    }

    #[test]
    fn test_date_range_present_without_start() {
        assert_eq!(date_range("", "", true), "Present");
    }

    #[test]
    fn test_contact_items_suppress_absent_fields() {
        let info = PersonalInfo {
            email: "ada@example.com".to_string(),
            location: "London".to_string(),
            ..PersonalInfo::default()
        };
        assert_eq!(contact_items(&info), vec!["ada@example.com", "London"]);
        assert!(link_items(&info).is_empty());
    }

    #[test]
    fn test_degree_line_either_part_optional() {
        assert_eq!(degree_line("BSc", "Mathematics"), "BSc in Mathematics");
        assert_eq!(degree_line("BSc", ""), "BSc");
        assert_eq!(degree_line("", "Mathematics"), "Mathematics");
        assert_eq!(degree_line("", ""), "");
    }
}
