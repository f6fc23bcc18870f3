//! Filter selection: which city to load and which month/weekday to keep.
//!
//! Parsing is kept free of terminal I/O. Every `parse_*` function takes the raw user answer and
//! returns either the typed choice or an [`InputRejection`] explaining why it was refused; the
//! prompt layer decides what to do with a rejection (it re-asks).

use std::fmt;

use chrono::{Month, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Months the trip files cover, in calendar order.
pub const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub const CITY_CHOICES: &[&str] = &["chicago", "new york city", "washington"];
pub const MONTH_CHOICES: &[&str] = &["all", "january", "february", "march", "april", "may", "june"];
pub const DAY_CHOICES: &[&str] = &[
    "all",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];
pub const YES_NO_CHOICES: &[&str] = &["yes", "no"];

/// Cities with a trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum City {
    #[serde(rename = "chicago")]
    Chicago,
    #[serde(rename = "new york city")]
    NewYorkCity,
    #[serde(rename = "washington")]
    Washington,
}

impl City {
    /// Every city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase name, as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Month restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

/// Weekday restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

// Both render as the answer that selects them ("all", "june", "monday").
impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(month) => f.write_str(&month.name().to_lowercase()),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(day) => f.write_str(&weekday_name(*day).to_lowercase()),
        }
    }
}

/// The three validated choices that govern one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    /// Select a whole city dataset with no time filters.
    pub fn unfiltered(city: City) -> Self {
        Self {
            city,
            month: MonthFilter::All,
            day: DayFilter::All,
        }
    }
}

/// Reason an answer was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputRejection {
    #[error("no answer given; choose one of: {}", .allowed.join(", "))]
    Empty { allowed: &'static [&'static str] },
    #[error("'{input}' is not one of: {}", .allowed.join(", "))]
    NotAllowed {
        input: String,
        allowed: &'static [&'static str],
    },
}

/// Yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Title-cased weekday name ("Monday").
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn choose<T: Copy>(
    raw: &str,
    allowed: &'static [&'static str],
    values: &[T],
) -> Result<T, InputRejection> {
    let input = normalize(raw);
    if input.is_empty() {
        return Err(InputRejection::Empty { allowed });
    }
    allowed
        .iter()
        .position(|choice| *choice == input)
        .and_then(|idx| values.get(idx).copied())
        .ok_or(InputRejection::NotAllowed { input, allowed })
}

/// Accept one of [`CITY_CHOICES`], ignoring case and surrounding whitespace.
pub fn parse_city(raw: &str) -> Result<City, InputRejection> {
    choose(raw, CITY_CHOICES, &City::ALL)
}

/// Accept "all" or a month from January to June.
pub fn parse_month(raw: &str) -> Result<MonthFilter, InputRejection> {
    let mut values = vec![MonthFilter::All];
    values.extend(MONTHS.iter().copied().map(MonthFilter::Only));
    choose(raw, MONTH_CHOICES, &values)
}

/// Accept "all" or a full weekday name.
pub fn parse_day(raw: &str) -> Result<DayFilter, InputRejection> {
    let mut values = vec![DayFilter::All];
    values.extend(WEEKDAYS.iter().copied().map(DayFilter::Only));
    choose(raw, DAY_CHOICES, &values)
}

/// Accept exactly "yes" or "no" (any case).
pub fn parse_yes_no(raw: &str) -> Result<Answer, InputRejection> {
    choose(raw, YES_NO_CHOICES, &[Answer::Yes, Answer::No])
}
