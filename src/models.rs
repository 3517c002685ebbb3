use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// The one profile a session holds.
///
/// Only built through [`crate::profile::validate_profile`], so a value of this
/// type always has a non-empty name and a lifespan in `1..=150`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    id: Uuid,
    name: String,
    birth_date: NaiveDate,
    expected_lifespan: u32,
}

impl UserProfile {
    pub(crate) fn from_parts(
        id: Uuid,
        name: String,
        birth_date: NaiveDate,
        expected_lifespan: u32,
    ) -> Self {
        Self {
            id,
            name,
            birth_date,
            expected_lifespan,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Expected lifespan in whole years.
    pub fn expected_lifespan(&self) -> u32 {
        self.expected_lifespan
    }
}

/// Raw field values as they arrive from the setup form or a JSON client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub name: String,
    pub birth_date: String,
    #[serde(deserialize_with = "text_or_number")]
    pub expected_lifespan: String,
    pub id: Option<String>,
}

// JSON clients send the lifespan as a number, the HTML form as text.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneBucket {
    Morning,
    Noon,
    Evening,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeMetrics {
    pub reference: NaiveDateTime,
    pub days_since_birth: i64,
    pub total_days_expected: i64,
    pub life_progress_percent: f64,
    pub end_of_life_date: NaiveDate,
    pub days_remaining: i64,
    pub formatted_date: String,
    pub scene: SceneBucket,
    pub quote: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub user: UserProfile,
    pub metrics: LifeMetrics,
    pub days_left_label: String,
    pub day_offset: i64,
}

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    pub at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorListResponse {
    pub errors: Vec<String>,
}
