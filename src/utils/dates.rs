use chrono::{Datelike, Local};

/// Human-relative label for a duration in days.
///
/// Zero maps to "today"; callers that treat zero as "no data" substitute
/// their own placeholder before reaching this function.
pub fn relative_days(days: u32) -> String {
    match days {
        0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        n => format!("{} days ago", n),
    }
}

/// Today's date formatted like "January 5, 2026" for the page header.
pub fn current_date_label() -> String {
    let today = Local::now();
    format!(
        "{} {}, {}",
        month_name(today.month()),
        today.day(),
        today.year()
    )
}

fn month_name(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    MONTHS[(month as usize - 1).min(11)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_days_is_today() {
        assert_eq!(relative_days(0), "today");
    }

    #[test]
    fn one_day_is_singular() {
        assert_eq!(relative_days(1), "1 day ago");
    }

    #[test]
    fn many_days_are_plural() {
        assert_eq!(relative_days(14), "14 days ago");
    }

    #[test]
    fn current_date_label_has_month_day_year() {
        let label = current_date_label();
        let parts: Vec<&str> = label.split(' ').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].ends_with(','));
    }
}
