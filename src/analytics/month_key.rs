use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// Short month names used for chart labels, January first.
const MONTH_NAMES: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// A calendar month used as a filter and grouping key, serialized `MM-YYYY`.
/// Derived on demand from transaction dates and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    month: u32,
    year: i32,
}

impl MonthKey {
    pub fn new(month: u32, year: i32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { month, year })
        } else {
            None
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Parses a `MM-YYYY` key such as `"12-2024"`.
    pub fn parse(key: &str) -> Option<Self> {
        let (month, year) = key.split_once('-')?;
        Self::new(month.parse().ok()?, year.parse().ok()?)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    /// Derives the month key from a date string in either storage
    /// (`YYYY-MM-DD`) or display (`DD/MM/YYYY`) form. Returns `None` when the
    /// string has fewer than three `/`- or `-`-delimited components or the
    /// month/year fields do not parse; callers drop such records from their
    /// buckets instead of failing.
    pub fn from_date_str(date: &str) -> Option<Self> {
        let (parts, iso) = split_date(date)?;
        let (month, year) = if iso {
            (parts[1], parts[0])
        } else {
            (parts[1], parts[2])
        };
        Self::new(month.parse().ok()?, year.parse().ok()?)
    }

    /// First day of this month and first day of the following month, a
    /// half-open bound for date-range queries. December rolls over into
    /// January of the next year.
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        let start = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month key holds a valid month");
        let end = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
        .expect("month key holds a valid month");
        (start, end)
    }

    /// Short month name for chart labels, e.g. `"Dic"` for month 12.
    pub fn short_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Display label for month selectors, e.g. `"Dic 2024"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.short_name(), self.year)
    }
}

/// Month keys order chronologically: by year, then month.
impl Ord for MonthKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for MonthKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{}", self.month, self.year)
    }
}

fn split_date(date: &str) -> Option<([&str; 3], bool)> {
    let iso = !date.contains('/');
    let separator = if iso { '-' } else { '/' };
    let mut parts = date.splitn(3, separator);
    let result = [parts.next()?, parts.next()?, parts.next()?];
    if result.iter().any(|p| p.is_empty()) {
        return None;
    }
    Some((result, iso))
}

/// Rewrites a stored `YYYY-MM-DD` date into the `DD/MM/YYYY` display form.
/// Pure string rewrite with no calendar validation; anything that does not
/// split into three parts passes through unchanged.
pub fn to_display_date(iso_date: &str) -> String {
    match split_date(iso_date) {
        Some(([year, month, day], true)) => format!("{}/{}/{}", day, month, year),
        _ => iso_date.to_string(),
    }
}

/// Rewrites a `DD/MM/YYYY` display date back into `YYYY-MM-DD` storage form.
/// The inverse of [`to_display_date`], with the same pass-through behavior.
pub fn to_iso_date(display_date: &str) -> String {
    match split_date(display_date) {
        Some(([day, month, year], false)) => format!("{}-{}-{}", year, month, day),
        _ => display_date.to_string(),
    }
}

/// Extracts the 1-based day of month from a date string in either storage or
/// display form.
pub fn day_of_month(date: &str) -> Option<u32> {
    let (parts, iso) = split_date(date)?;
    let day = if iso { parts[2] } else { parts[0] };
    day.parse().ok()
}
