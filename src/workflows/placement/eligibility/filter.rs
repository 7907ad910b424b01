use chrono::NaiveDate;

use super::super::domain::{FilterPrefs, Internship, InternshipLevel, InternshipStatus};

/// Close-date criterion parsed from free text. A `<` or `>` prefix
/// means strictly before/after; no prefix means exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CloseDateFilter {
    Any,
    On(NaiveDate),
    Before(NaiveDate),
    After(NaiveDate),
}

impl CloseDateFilter {
    /// Unparsable text degrades to a wildcard rather than an error;
    /// filter input is free text from the user.
    pub(crate) fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Any;
        }

        let (op, rest) = if let Some(rest) = trimmed.strip_prefix('<') {
            (Some('<'), rest)
        } else if let Some(rest) = trimmed.strip_prefix('>') {
            (Some('>'), rest)
        } else {
            (None, trimmed)
        };

        match NaiveDate::parse_from_str(rest.trim(), "%Y-%m-%d") {
            Ok(date) => match op {
                Some('<') => Self::Before(date),
                Some('>') => Self::After(date),
                _ => Self::On(date),
            },
            Err(_) => Self::Any,
        }
    }

    fn matches(self, close_date: Option<NaiveDate>) -> bool {
        match self {
            Self::Any => true,
            Self::On(date) => close_date == Some(date),
            Self::Before(date) => close_date.is_some_and(|close| close < date),
            Self::After(date) => close_date.is_some_and(|close| close > date),
        }
    }
}

fn matches_text(filter: &str, value: &str) -> bool {
    filter.trim().is_empty() || value.eq_ignore_ascii_case(filter.trim())
}

fn matches_visibility(filter: &str, visible: bool) -> bool {
    let trimmed = filter.trim();
    if trimmed.is_empty() {
        return true;
    }
    visible == trimmed.eq_ignore_ascii_case("visible")
}

/// Whether one posting satisfies every provided criterion. Blank
/// criteria are wildcards.
pub fn matches(internship: &Internship, criteria: &FilterPrefs) -> bool {
    if !criteria.status.trim().is_empty() {
        match InternshipStatus::parse(&criteria.status) {
            Some(status) if internship.status == status => {}
            _ => return false,
        }
    }

    if !criteria.level.trim().is_empty() {
        match InternshipLevel::parse(&criteria.level) {
            Some(level) if internship.level == level => {}
            _ => return false,
        }
    }

    matches_text(&criteria.major, &internship.preferred_major)
        && matches_text(&criteria.company, &internship.company_name)
        && matches_visibility(&criteria.visibility, internship.visible)
        && CloseDateFilter::parse(&criteria.close_date).matches(internship.close_date)
}

/// Filters postings on all provided criteria and sorts by title,
/// ascending and case-insensitive. The sort is stable, so equal titles
/// keep store order.
pub fn apply<'a, I>(internships: I, criteria: &FilterPrefs) -> Vec<&'a Internship>
where
    I: IntoIterator<Item = &'a Internship>,
{
    let mut hits: Vec<&Internship> = internships
        .into_iter()
        .filter(|internship| matches(internship, criteria))
        .collect();
    hits.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
    hits
}
