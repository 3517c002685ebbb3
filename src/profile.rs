use crate::models::{ProfileForm, UserProfile};
use chrono::{Datelike, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub const MIN_LIFESPAN_YEARS: u32 = 1;
pub const MAX_LIFESPAN_YEARS: u32 = 150;

const MAX_BIRTH_YEAR: i32 = 9999;

/// One rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Error for ValidationError {}

/// Every problem found in a submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|err| err.message.clone()).collect()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "invalid profile: {joined}")
    }
}

impl Error for ValidationErrors {}

/// Turns raw form input into a [`UserProfile`], or reports every failing field.
///
/// The name is trimmed before the emptiness check and stored trimmed.
/// A missing `id` gets a fresh v4 UUID.
pub fn validate_profile(form: &ProfileForm) -> Result<UserProfile, ValidationErrors> {
    let mut errors = Vec::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.push(ValidationError::new("name", "请输入你的名字"));
    }

    let birth_date = match parse_birth_date(&form.birth_date) {
        Ok(date) => Some(date),
        Err(err) => {
            errors.push(err);
            None
        }
    };

    let lifespan = match parse_lifespan(&form.expected_lifespan) {
        Ok(years) => Some(years),
        Err(err) => {
            errors.push(err);
            None
        }
    };

    let id = match form.id.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) {
        None => Some(Uuid::new_v4()),
        Some(raw) => match Uuid::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(ValidationError::new("id", "标识符格式无效"));
                None
            }
        },
    };

    match (errors.is_empty(), id, birth_date, lifespan) {
        (true, Some(id), Some(birth_date), Some(lifespan)) => Ok(UserProfile::from_parts(
            id,
            name.to_string(),
            birth_date,
            lifespan,
        )),
        _ => Err(ValidationErrors(errors)),
    }
}

fn parse_birth_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::new("birth_date", "请选择出生日期"));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::new("birth_date", "出生日期无效"))?;
    if date.year() < 1 || date.year() > MAX_BIRTH_YEAR {
        return Err(ValidationError::new("birth_date", "出生日期超出范围"));
    }
    Ok(date)
}

fn parse_lifespan(raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::new("expected_lifespan", "请输入预期寿命"));
    }

    let years: i64 = raw
        .parse()
        .map_err(|_| ValidationError::new("expected_lifespan", "预期寿命必须是整数"))?;
    if years < i64::from(MIN_LIFESPAN_YEARS) {
        return Err(ValidationError::new("expected_lifespan", "预期寿命必须大于 0"));
    }
    if years > i64::from(MAX_LIFESPAN_YEARS) {
        return Err(ValidationError::new(
            "expected_lifespan",
            format!("预期寿命不能超过 {MAX_LIFESPAN_YEARS} 年"),
        ));
    }
    Ok(years as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, birth_date: &str, lifespan: &str) -> ProfileForm {
        ProfileForm {
            name: name.to_string(),
            birth_date: birth_date.to_string(),
            expected_lifespan: lifespan.to_string(),
            id: None,
        }
    }

    #[test]
    fn valid_form_builds_profile() {
        let profile = validate_profile(&form("  小明 ", "2000-01-01", "80")).unwrap();
        assert_eq!(profile.name(), "小明");
        assert_eq!(
            profile.birth_date(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
        assert_eq!(profile.expected_lifespan(), 80);
        assert!(!profile.id().is_nil());
    }

    #[test]
    fn supplied_id_is_kept() {
        let mut input = form("a", "1990-06-15", "90");
        input.id = Some("11111111-2222-4333-8444-555555555555".to_string());
        let profile = validate_profile(&input).unwrap();
        assert_eq!(
            profile.id().to_string(),
            "11111111-2222-4333-8444-555555555555"
        );
    }

    #[test]
    fn every_bad_field_is_reported() {
        let errors = validate_profile(&form("   ", "2023-02-30", "abc")).unwrap_err();
        let fields: Vec<_> = errors.0.iter().map(|err| err.field).collect();
        assert_eq!(fields, vec!["name", "birth_date", "expected_lifespan"]);
        assert_eq!(errors.messages().len(), 3);
    }

    #[test]
    fn lifespan_bounds_are_enforced() {
        assert!(validate_profile(&form("a", "2000-01-01", "0")).is_err());
        assert!(validate_profile(&form("a", "2000-01-01", "-5")).is_err());
        assert!(validate_profile(&form("a", "2000-01-01", "151")).is_err());
        assert!(validate_profile(&form("a", "2000-01-01", "80.5")).is_err());
        assert!(validate_profile(&form("a", "2000-01-01", "1")).is_ok());
        assert!(validate_profile(&form("a", "2000-01-01", "150")).is_ok());
    }

    #[test]
    fn missing_birth_date_is_rejected() {
        let errors = validate_profile(&form("a", "", "80")).unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0[0].field, "birth_date");
    }

    #[test]
    fn malformed_id_is_rejected() {
        let mut input = form("a", "2000-01-01", "80");
        input.id = Some("not-a-uuid".to_string());
        let errors = validate_profile(&input).unwrap_err();
        assert_eq!(errors.0[0].field, "id");
    }
}
