use crate::models::{LifeMetrics, SceneBucket, UserProfile};
use crate::scenes::{quotes_for, QUOTES_PER_BUCKET};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use tracing::debug;

const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;
const DAYS_PER_YEAR: i64 = 365;

const NOON_STARTS_AT: u32 = 11;
const EVENING_STARTS_AT: u32 = 17;

/// Derives every displayed figure from a profile and a local reference time.
///
/// Day counts are raw millisecond differences floored to whole days, with the
/// birth date taken at midnight. A year is always 365 days here, so the
/// progress percentage drifts slightly from a leap-aware count.
pub fn compute_life_metrics(profile: &UserProfile, reference: NaiveDateTime) -> LifeMetrics {
    let birth = profile.birth_date().and_time(NaiveTime::MIN);
    let days_since_birth = floor_days_between(birth, reference);

    let total_days_expected = i64::from(profile.expected_lifespan()) * DAYS_PER_YEAR;
    let life_progress_percent = days_since_birth as f64 / total_days_expected as f64 * 100.0;

    let end_of_life_date = end_of_life_date(profile.birth_date(), profile.expected_lifespan());
    let days_remaining = floor_days_between(reference, end_of_life_date.and_time(NaiveTime::MIN));

    let scene = scene_for_hour(reference.hour());
    let quote = quotes_for(scene)[quote_index(reference.date())];

    debug!(
        user = %profile.id(),
        %reference,
        days_since_birth,
        days_remaining,
        "computed life metrics"
    );

    LifeMetrics {
        reference,
        days_since_birth,
        total_days_expected,
        life_progress_percent,
        end_of_life_date,
        days_remaining,
        formatted_date: format_long_date(reference),
        scene,
        quote,
    }
}

/// Same month and day as the birth date, `lifespan` years later.
///
/// A day that does not exist in the target month rolls into the next one, so
/// a Feb 29 birthday lands on Mar 1 of a non-leap year.
pub fn end_of_life_date(birth_date: NaiveDate, lifespan: u32) -> NaiveDate {
    let year = birth_date.year().saturating_add_unsigned(lifespan);
    NaiveDate::from_ymd_opt(year, birth_date.month(), 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(birth_date.day() - 1))))
        .unwrap_or(NaiveDate::MAX)
}

pub fn scene_for_hour(hour: u32) -> SceneBucket {
    if hour < NOON_STARTS_AT {
        SceneBucket::Morning
    } else if hour < EVENING_STARTS_AT {
        SceneBucket::Noon
    } else {
        SceneBucket::Evening
    }
}

/// Index into a bucket's quote list, stable for a whole calendar day.
pub fn quote_index(date: NaiveDate) -> usize {
    let seed = i64::from(date.year()) + i64::from(date.month()) + i64::from(date.day());
    seed.rem_euclid(QUOTES_PER_BUCKET as i64) as usize
}

/// Long zh-CN calendar date, e.g. `2024年3月15日星期五`.
pub fn format_long_date(reference: NaiveDateTime) -> String {
    format!(
        "{}年{}月{}日{}",
        reference.year(),
        reference.month(),
        reference.day(),
        weekday_name(reference.weekday())
    )
}

/// Remaining-days label with grouped thousands, e.g. `12,345 天`.
pub fn format_days_left(days: i64) -> String {
    format!("{} 天", group_thousands(days))
}

fn floor_days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_milliseconds().div_euclid(MS_PER_DAY)
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}

pub(crate) fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileForm;
    use crate::profile::validate_profile;

    fn profile(birth_date: &str, lifespan: u32) -> UserProfile {
        validate_profile(&ProfileForm {
            name: "tester".to_string(),
            birth_date: birth_date.to_string(),
            expected_lifespan: lifespan.to_string(),
            id: None,
        })
        .unwrap()
    }

    fn at(date: &str, hour: u32) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn reference_example_figures() {
        let metrics = compute_life_metrics(&profile("2000-01-01", 80), at("2024-01-01", 12));
        assert_eq!(metrics.days_since_birth, 8766);
        assert_eq!(metrics.total_days_expected, 29200);
        assert!((metrics.life_progress_percent - 30.02).abs() < 0.01);
        assert_eq!(
            metrics.end_of_life_date,
            NaiveDate::from_ymd_opt(2080, 1, 1).unwrap()
        );
        assert_eq!(metrics.days_remaining, 20453);
        assert_eq!(metrics.scene, SceneBucket::Noon);
        assert_eq!(metrics.formatted_date, "2024年1月1日星期一");
    }

    #[test]
    fn progress_matches_formula_exactly() {
        let metrics = compute_life_metrics(&profile("1987-07-19", 73), at("2031-11-02", 8));
        let expected = metrics.days_since_birth as f64 / (73.0 * 365.0) * 100.0;
        assert_eq!(metrics.life_progress_percent, expected);
    }

    #[test]
    fn day_counts_floor_toward_negative_infinity() {
        let metrics = compute_life_metrics(&profile("2000-01-02", 80), at("2000-01-01", 12));
        assert_eq!(metrics.days_since_birth, -1);
        assert!(metrics.life_progress_percent < 0.0);

        let past_end = compute_life_metrics(&profile("2000-01-01", 1), at("2001-01-01", 6));
        assert_eq!(past_end.days_remaining, -1);
    }

    #[test]
    fn days_since_birth_is_zero_on_birth_day() {
        let metrics = compute_life_metrics(&profile("2010-05-05", 90), at("2010-05-05", 23));
        assert_eq!(metrics.days_since_birth, 0);
    }

    #[test]
    fn leap_day_birthday_rolls_into_march() {
        let birth = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        assert_eq!(
            end_of_life_date(birth, 1),
            NaiveDate::from_ymd_opt(2001, 3, 1).unwrap()
        );
        assert_eq!(
            end_of_life_date(birth, 4),
            NaiveDate::from_ymd_opt(2004, 2, 29).unwrap()
        );
    }

    #[test]
    fn scene_boundaries() {
        assert_eq!(scene_for_hour(0), SceneBucket::Morning);
        assert_eq!(scene_for_hour(10), SceneBucket::Morning);
        assert_eq!(scene_for_hour(11), SceneBucket::Noon);
        assert_eq!(scene_for_hour(16), SceneBucket::Noon);
        assert_eq!(scene_for_hour(17), SceneBucket::Evening);
        assert_eq!(scene_for_hour(23), SceneBucket::Evening);
    }

    #[test]
    fn quote_is_stable_within_a_bucket_for_the_day() {
        let user = profile("1995-03-03", 85);
        let early = compute_life_metrics(&user, at("2024-03-15", 11));
        let late = compute_life_metrics(&user, at("2024-03-15", 16));
        assert_eq!(early.quote, late.quote);

        // 2024 + 3 + 15 = 2042
        assert_eq!(quote_index(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()), 2);
        assert_eq!(early.quote, quotes_for(SceneBucket::Noon)[2]);
    }

    #[test]
    fn quote_list_follows_the_hour() {
        let user = profile("1995-03-03", 85);
        let morning = compute_life_metrics(&user, at("2024-03-15", 7));
        let evening = compute_life_metrics(&user, at("2024-03-15", 20));
        assert_eq!(morning.quote, quotes_for(SceneBucket::Morning)[2]);
        assert_eq!(evening.quote, quotes_for(SceneBucket::Evening)[2]);
    }

    #[test]
    fn long_date_uses_chinese_weekday() {
        assert_eq!(format_long_date(at("2024-03-15", 9)), "2024年3月15日星期五");
        assert_eq!(format_long_date(at("2026-10-18", 9)), "2026年10月18日星期日");
    }

    #[test]
    fn days_left_label_groups_thousands() {
        assert_eq!(format_days_left(20453), "20,453 天");
        assert_eq!(format_days_left(999), "999 天");
        assert_eq!(format_days_left(1_000_000), "1,000,000 天");
        assert_eq!(format_days_left(-1234), "-1,234 天");
        assert_eq!(format_days_left(0), "0 天");
    }
}
