//! Rider demographics: user types, gender, birth years.

use super::{Section, Stat, banner, dotted, push_stat};
use crate::processing::{ReduceOp, mode, reduce, value_counts};
use crate::types::{TripTable, Value, columns};

/// Label that null genders are counted under.
pub const NOT_DISCLOSED: &str = "not disclosed";

/// Birth year bounds and mode, truncated to whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i64,
    pub latest: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    /// Distinct user types with their counts, most frequent first. Nulls are not counted.
    pub user_types: Stat<Vec<(String, usize)>>,
    /// Distinct genders with their counts; nulls are counted as [`NOT_DISCLOSED`].
    pub genders: Stat<Vec<(String, usize)>>,
    pub birth_years: Stat<BirthYears>,
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

fn birth_years(table: &TripTable) -> Stat<BirthYears> {
    let Some(values) = table.column(columns::BIRTH_YEAR) else {
        return Stat::Missing;
    };
    // Mode over exact values; truncation happens after.
    let most_common = mode(values.filter_map(Value::as_f64).map(f64::to_bits)).map(f64::from_bits);
    let bound = |op| reduce(table, columns::BIRTH_YEAR, op).and_then(|v| v.as_f64());

    let years = match (bound(ReduceOp::Min), bound(ReduceOp::Max), most_common) {
        (Some(earliest), Some(latest), Some(most_common)) => Some(BirthYears {
            earliest: earliest as i64,
            latest: latest as i64,
            most_common: most_common as i64,
        }),
        _ => None,
    };
    Stat::gated(true, years)
}

/// Rider statistics; each part is `Missing` when its column is absent.
pub fn users(table: &TripTable) -> UserStats {
    let user_types = match table.column(columns::USER_TYPE) {
        None => Stat::Missing,
        Some(values) => Stat::gated(
            true,
            non_empty(value_counts(values.filter_map(Value::as_str).map(str::to_owned))),
        ),
    };

    let genders = match table.column(columns::GENDER) {
        None => Stat::Missing,
        Some(values) => Stat::gated(
            true,
            non_empty(value_counts(values.map(|v| match v {
                Value::Null => NOT_DISCLOSED.to_string(),
                other => other.to_string(),
            }))),
        ),
    };

    UserStats {
        user_types,
        genders,
        birth_years: birth_years(table),
    }
}

fn push_counts(lines: &mut Vec<String>, title: &str, counts: Stat<Vec<(String, usize)>>) {
    match counts {
        Stat::Missing => {}
        Stat::NoData => {
            lines.push(banner(title, '-'));
            lines.push("no data".to_string());
        }
        Stat::Value(counts) => {
            lines.push(banner(title, '-'));
            lines.extend(counts.iter().map(|(value, count)| dotted(value, count)));
        }
    }
}

/// Rider section: user types, genders, then birth years.
pub fn user_stats(table: &TripTable) -> Section {
    Section::timed("User Stats", |lines| {
        let stats = users(table);
        push_counts(lines, "User type stats", stats.user_types);
        push_counts(lines, "Gender stats", stats.genders);

        if !stats.birth_years.is_missing() {
            lines.push(banner("Age stats", '-'));
            let years = stats.birth_years;
            push_stat(lines, "Earliest Birth Year", years.as_ref().map(|y| y.earliest));
            push_stat(lines, "Most recent Birth Year", years.as_ref().map(|y| y.latest));
            push_stat(lines, "Most common Birth Year", years.map(|y| y.most_common));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{BirthYears, NOT_DISCLOSED, user_stats, users};
    use crate::report::Stat;
    use crate::types::{DataType, Field, Schema, TripTable, Value};

    fn text(s: &str) -> Value {
        Value::Utf8(s.to_string())
    }

    fn riders() -> TripTable {
        let schema = Schema::new(vec![
            Field::new("User Type", DataType::Utf8),
            Field::new("Gender", DataType::Utf8),
            Field::new("Birth Year", DataType::Float64),
        ]);
        TripTable::new(
            schema,
            vec![
                vec![text("Subscriber"), text("Male"), Value::Float64(1989.0)],
                vec![text("Customer"), Value::Null, Value::Null],
                vec![text("Subscriber"), text("Female"), Value::Float64(1960.0)],
                vec![Value::Null, Value::Null, Value::Float64(1989.0)],
                vec![text("Subscriber"), text("Male"), Value::Float64(2001.0)],
            ],
        )
    }

    #[test]
    fn user_type_counts_skip_nulls() {
        let stats = users(&riders());
        assert_eq!(
            stats.user_types,
            Stat::Value(vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 1)])
        );
    }

    #[test]
    fn null_genders_count_as_not_disclosed() {
        let stats = users(&riders());
        assert_eq!(
            stats.genders,
            Stat::Value(vec![
                ("Male".to_string(), 2),
                (NOT_DISCLOSED.to_string(), 2),
                ("Female".to_string(), 1),
            ])
        );
    }

    #[test]
    fn birth_year_bounds_and_mode_are_whole_numbers() {
        let stats = users(&riders());
        assert_eq!(
            stats.birth_years,
            Stat::Value(BirthYears {
                earliest: 1960,
                latest: 2001,
                most_common: 1989,
            })
        );
        let lines = user_stats(&riders()).lines;
        assert!(lines.iter().any(|l| l.starts_with("Most common Birth Year") && l.ends_with(" 1989")));
    }

    #[test]
    fn absent_columns_are_skipped() {
        let schema = Schema::new(vec![Field::new("User Type", DataType::Utf8)]);
        let t = TripTable::new(schema, vec![vec![text("Subscriber")]]);
        let stats = users(&t);
        assert_eq!(stats.genders, Stat::Missing);
        assert_eq!(stats.birth_years, Stat::Missing);

        let lines = user_stats(&t).lines;
        assert!(lines.iter().any(|l| l.contains(" User type stats ")));
        assert!(!lines.iter().any(|l| l.contains("Gender") || l.contains("Age")));
    }

    #[test]
    fn empty_table_reports_no_data() {
        let t = riders().filter_rows(|_| false);
        let stats = users(&t);
        assert_eq!(stats.user_types, Stat::NoData);
        assert_eq!(stats.genders, Stat::NoData);
        assert_eq!(stats.birth_years, Stat::NoData);
    }
}
