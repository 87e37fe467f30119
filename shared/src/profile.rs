//! Health profile domain types
//!
//! A `HealthProfile` is a snapshot of a user's self-reported attributes.
//! It is a read-only input to the scoring pipeline: missing fields mean
//! "unknown" and are excluded from scoring rather than defaulted, so an
//! incomplete profile is never penalized for what it does not say.

use serde::{Deserialize, Deserializer, Serialize};

/// Gender as reported on the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "м" | "мужской" => Ok(Gender::Male),
            "female" | "ж" | "женский" => Ok(Gender::Female),
            "other" | "другой" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Smoking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokingStatus {
    Never,
    Occasional,
    Regular,
}

impl std::str::FromStr for SmokingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "never" | "не курю" | "никогда" => Ok(SmokingStatus::Never),
            "occasional" | "иногда" => Ok(SmokingStatus::Occasional),
            "regular" | "регулярно" => Ok(SmokingStatus::Regular),
            _ => Err(format!("Unknown smoking status: {}", s)),
        }
    }
}

/// Physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalActivity {
    Sedentary,
    Moderate,
    Active,
    VeryActive,
}

impl std::str::FromStr for PhysicalActivity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" | "сидячий" => Ok(PhysicalActivity::Sedentary),
            "moderate" | "умеренный" => Ok(PhysicalActivity::Moderate),
            "active" | "активный" => Ok(PhysicalActivity::Active),
            "very_active" | "очень активный" => Ok(PhysicalActivity::VeryActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

/// Alcohol consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholUse {
    None,
    Moderate,
    Heavy,
}

impl std::str::FromStr for AlcoholUse {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "не употребляю" | "нет" => Ok(AlcoholUse::None),
            "moderate" | "умеренно" => Ok(AlcoholUse::Moderate),
            "heavy" | "часто" | "много" => Ok(AlcoholUse::Heavy),
            _ => Err(format!("Unknown alcohol use: {}", s)),
        }
    }
}

/// Snapshot of a user's self-reported health attributes
///
/// Every field is optional: the form can be partially filled and the
/// scoring pipeline treats absent fields as no-effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HealthProfile {
    /// Age in whole years
    pub age: Option<i32>,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub gender: Option<Gender>,
    /// Height in centimeters (stored in SI)
    pub height_cm: Option<f64>,
    /// Weight in kilograms (stored in SI)
    pub weight_kg: Option<f64>,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub smoking: Option<SmokingStatus>,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub physical_activity: Option<PhysicalActivity>,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub alcohol: Option<AlcoholUse>,
    /// Average sleep duration, hours
    pub sleep_hours: Option<f64>,
    /// Self-assessed stress level, 0-10
    pub stress_level: Option<i32>,
    /// Diagnosed conditions, free text normalized at lookup time
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    /// Conditions present in close family
    #[serde(default)]
    pub family_history: Vec<String>,
    /// Mental wellbeing questionnaire score, 0-100
    pub mental_health_score: Option<i32>,
}

/// Deserialize an enum field from a string, degrading unknown values to
/// `None` instead of failing the whole profile
fn lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

impl HealthProfile {
    /// BMI derived from height and weight, if both are known
    ///
    /// Formula: BMI = weight(kg) / height(m)²
    pub fn bmi(&self) -> Option<f64> {
        match (self.weight_kg, self.height_cm) {
            (Some(w), Some(h)) if h > 0.0 => {
                let height_m = h / 100.0;
                Some(w / (height_m * height_m))
            }
            _ => None,
        }
    }
}
