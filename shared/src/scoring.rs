//! Composite health-score aggregation
//!
//! Six independent rule groups (age, lifestyle, medical conditions,
//! family history, lab results, mental health) each return an immutable
//! outcome; the aggregator merges them by list concatenation and numeric
//! summation onto a baseline of 85, then clamps to [20, 100].
//!
//! The pipeline is a pure, synchronous computation over in-memory data:
//! no I/O, no hidden state, deterministic for a fixed input. It never
//! fails: unknown values contribute nothing instead of being rejected,
//! so a partially filled profile still gets a best-effort score.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::labs::LabAnalysis;
use crate::normalize::{normalize, MarkerReading, NormalizedInputs};
use crate::profile::{AlcoholUse, HealthProfile, PhysicalActivity, SmokingStatus};
use crate::recommend::{rank_recommendations, Priority, Recommendation, MAX_RECOMMENDATIONS};
use crate::weights::{condition_weight, family_history_weight, normalize_name, MarkerBucket};

/// Score every profile starts from before rule deltas apply
pub const BASELINE_SCORE: f64 = 85.0;

/// Lower clamp for the composite score
pub const MIN_SCORE: i32 = 20;

/// Upper clamp for the composite score
pub const MAX_SCORE: i32 = 100;

/// Lab-result penalties are capped at this total regardless of how many
/// markers are abnormal
pub const MAX_LAB_PENALTY: f64 = 30.0;

/// Categorical risk tier, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "низкий")]
    Low,
    #[serde(rename = "средний")]
    Medium,
    #[serde(rename = "высокий")]
    High,
    #[serde(rename = "критический")]
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "низкий",
            RiskLevel::Medium => "средний",
            RiskLevel::High => "высокий",
            RiskLevel::Critical => "критический",
        }
    }
}

/// Per-factor-family score deltas
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub age: f64,
    pub lifestyle: f64,
    pub medical_conditions: f64,
    pub family_history: f64,
    pub lab_results: f64,
    pub mental_health: f64,
}

impl ScoreBreakdown {
    pub fn total_delta(&self) -> f64 {
        self.age
            + self.lifestyle
            + self.medical_conditions
            + self.family_history
            + self.lab_results
            + self.mental_health
    }
}

/// Composite scoring result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedHealthScore {
    /// Integer score clamped to [20, 100]
    pub total_score: i32,
    pub breakdown: ScoreBreakdown,
    pub risk_level: RiskLevel,
    /// Deduplicated, in emission order
    pub risk_factors: Vec<String>,
    /// Deduplicated, in emission order
    pub protective_factors: Vec<String>,
    /// Top candidates by impact, at most `MAX_RECOMMENDATIONS`
    pub recommendations: Vec<Recommendation>,
}

/// Result of evaluating one rule group
#[derive(Debug, Clone, Default)]
struct RuleOutcome {
    delta: f64,
    risk_factors: Vec<String>,
    protective_factors: Vec<String>,
    candidates: Vec<Recommendation>,
}

/// Compute the composite health score for a profile and its lab history
///
/// This is the crate's main entry point: normalization, aggregation and
/// recommendation ranking in one call.
pub fn compute_health_score(profile: &HealthProfile, analyses: &[LabAnalysis]) -> EnhancedHealthScore {
    score_normalized(&normalize(profile, analyses))
}

/// Run the aggregator over already-normalized inputs
pub fn score_normalized(inputs: &NormalizedInputs) -> EnhancedHealthScore {
    let profile = &inputs.profile;

    let age = age_rule(profile.age);
    let lifestyle = lifestyle_rule(profile);
    let conditions = conditions_rule(&profile.medical_conditions);
    let family = family_history_rule(&profile.family_history);
    let labs = lab_rule(&inputs.markers, inputs.has_lab_data);
    let mental = mental_health_rule(profile.mental_health_score);

    let breakdown = ScoreBreakdown {
        age: age.delta,
        lifestyle: lifestyle.delta,
        medical_conditions: conditions.delta,
        family_history: family.delta,
        lab_results: labs.delta,
        mental_health: mental.delta,
    };

    let groups = [age, lifestyle, conditions, family, labs, mental];

    let mut risk_factors = Vec::new();
    let mut protective_factors = Vec::new();
    let mut candidates = Vec::new();
    for group in groups {
        risk_factors.extend(group.risk_factors);
        protective_factors.extend(group.protective_factors);
        candidates.extend(group.candidates);
    }
    let risk_factors = dedup_preserving_order(risk_factors);
    let protective_factors = dedup_preserving_order(protective_factors);

    let total_score = clamp_score(BASELINE_SCORE + breakdown.total_delta());
    let risk_level = derive_risk_level(total_score, risk_factors.len());
    let recommendations = rank_recommendations(candidates, MAX_RECOMMENDATIONS);

    EnhancedHealthScore {
        total_score,
        breakdown,
        risk_level,
        risk_factors,
        protective_factors,
        recommendations,
    }
}

fn clamp_score(raw: f64) -> i32 {
    (raw.round() as i32).clamp(MIN_SCORE, MAX_SCORE)
}

/// Risk tier from score and risk-factor count; first match wins
fn derive_risk_level(score: i32, risk_factor_count: usize) -> RiskLevel {
    if score < 40 || risk_factor_count >= 5 {
        RiskLevel::Critical
    } else if score < 60 || risk_factor_count >= 3 {
        RiskLevel::High
    } else if score < 75 || risk_factor_count >= 1 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.clone())).collect()
}

/// Age adjustment: fixed step table, no recommendations
fn age_rule(age: Option<i32>) -> RuleOutcome {
    let Some(age) = age else {
        return RuleOutcome::default();
    };
    let delta = if age < 25 {
        5.0
    } else if age < 35 {
        2.0
    } else if age < 45 {
        0.0
    } else if age < 55 {
        -3.0
    } else if age < 65 {
        -6.0
    } else if age < 75 {
        -10.0
    } else {
        -15.0
    };
    RuleOutcome {
        delta,
        ..Default::default()
    }
}

/// Lifestyle: five independent sub-rules, summed
fn lifestyle_rule(profile: &HealthProfile) -> RuleOutcome {
    let mut out = RuleOutcome::default();

    match profile.smoking {
        Some(SmokingStatus::Regular) => {
            out.delta -= 20.0;
            out.risk_factors.push("Регулярное курение".to_string());
            out.candidates.push(Recommendation::new(
                Priority::High,
                "Вредные привычки",
                "Обратитесь в программу отказа от курения",
                "1-3 месяца",
                20.0,
            ));
        }
        Some(SmokingStatus::Occasional) => {
            out.delta -= 10.0;
            out.risk_factors.push("Эпизодическое курение".to_string());
            out.candidates.push(Recommendation::new(
                Priority::Medium,
                "Вредные привычки",
                "Сократите эпизодическое курение до полного отказа",
                "3-6 месяцев",
                10.0,
            ));
        }
        Some(SmokingStatus::Never) => {
            out.protective_factors.push("Не курит".to_string());
        }
        None => {}
    }

    match profile.physical_activity {
        Some(PhysicalActivity::Sedentary) => {
            out.delta -= 15.0;
            out.risk_factors.push("Малоподвижный образ жизни".to_string());
            out.candidates.push(Recommendation::new(
                Priority::High,
                "Физическая активность",
                "Добавьте 150 минут умеренной активности в неделю",
                "2-4 недели",
                15.0,
            ));
        }
        Some(PhysicalActivity::Active) => {
            out.delta += 8.0;
            out.protective_factors.push("Регулярная физическая активность".to_string());
        }
        Some(PhysicalActivity::VeryActive) => {
            out.delta += 12.0;
            out.protective_factors.push("Высокая физическая активность".to_string());
        }
        Some(PhysicalActivity::Moderate) | None => {}
    }

    if let Some(sleep) = profile.sleep_hours {
        if sleep < 6.0 {
            out.delta -= 12.0;
            out.risk_factors.push("Выраженный недостаток сна".to_string());
            out.candidates.push(Recommendation::new(
                Priority::High,
                "Сон",
                "Увеличьте продолжительность сна до 7-9 часов",
                "2-4 недели",
                12.0,
            ));
        } else if sleep < 7.0 {
            out.delta -= 6.0;
            out.risk_factors.push("Недостаток сна".to_string());
            out.candidates.push(Recommendation::new(
                Priority::Medium,
                "Сон",
                "Добавьте 30-60 минут сна ежедневно",
                "2-4 недели",
                6.0,
            ));
        } else if sleep <= 9.0 {
            out.delta += 5.0;
            out.protective_factors.push("Здоровый сон (7-9 часов)".to_string());
        }
    }

    if let Some(stress) = profile.stress_level {
        if stress > 8 {
            out.delta -= 12.0;
            out.risk_factors.push("Очень высокий уровень стресса".to_string());
            out.candidates.push(Recommendation::new(
                Priority::High,
                "Стресс",
                "Освойте техники управления стрессом, при необходимости обратитесь к психологу",
                "1-2 месяца",
                12.0,
            ));
        } else if stress > 6 {
            out.delta -= 6.0;
            out.risk_factors.push("Повышенный уровень стресса".to_string());
            out.candidates.push(Recommendation::new(
                Priority::Medium,
                "Стресс",
                "Практикуйте дыхательные упражнения и регулярные перерывы",
                "1-2 месяца",
                6.0,
            ));
        }
    }

    match profile.alcohol {
        Some(AlcoholUse::Heavy) => {
            out.delta -= 15.0;
            out.risk_factors.push("Чрезмерное употребление алкоголя".to_string());
            out.candidates.push(Recommendation::new(
                Priority::High,
                "Вредные привычки",
                "Сократите употребление алкоголя, при необходимости обратитесь за помощью",
                "1-3 месяца",
                15.0,
            ));
        }
        Some(AlcoholUse::Moderate) => {
            out.delta -= 3.0;
            out.candidates.push(Recommendation::new(
                Priority::Medium,
                "Вредные привычки",
                "Снизьте употребление алкоголя до минимума",
                "3-6 месяцев",
                3.0,
            ));
        }
        Some(AlcoholUse::None) => {
            out.protective_factors.push("Не употребляет алкоголь".to_string());
        }
        None => {}
    }

    out
}

/// Medical conditions: table lookup with a default for unknown entries
fn conditions_rule(conditions: &[String]) -> RuleOutcome {
    let mut out = RuleOutcome::default();

    for condition in conditions {
        let weight = condition_weight(condition);
        out.delta += weight;
        out.risk_factors
            .push(format!("Хроническое заболевание: {}", condition.trim()));

        match normalize_name(condition).as_str() {
            "диабет" | "сахарный диабет" => {
                out.candidates.push(Recommendation::new(
                    Priority::High,
                    "Хронические заболевания",
                    "Наблюдайтесь у эндокринолога и контролируйте гликированный гемоглобин",
                    "постоянно",
                    weight.abs(),
                ));
            }
            "гипертония" | "артериальная гипертензия" => {
                out.candidates.push(Recommendation::new(
                    Priority::High,
                    "Хронические заболевания",
                    "Наблюдайтесь у кардиолога и контролируйте артериальное давление",
                    "постоянно",
                    weight.abs(),
                ));
            }
            _ => {}
        }
    }

    out
}

/// Family history: same pattern as conditions, lighter weights
fn family_history_rule(entries: &[String]) -> RuleOutcome {
    let mut out = RuleOutcome::default();

    for entry in entries {
        let weight = family_history_weight(entry);
        out.delta += weight;
        out.risk_factors
            .push(format!("Наследственность: {}", entry.trim()));

        if matches!(normalize_name(entry).as_str(), "онкология" | "рак") {
            out.candidates.push(Recommendation::new(
                Priority::High,
                "Профилактика",
                "Пройдите онкологический скрининг согласно возрастным рекомендациям",
                "6-12 месяцев",
                weight.abs(),
            ));
        }
    }

    out
}

/// Lab results: deviation-proportional penalties, capped at -30 total
fn lab_rule(markers: &[MarkerReading], has_lab_data: bool) -> RuleOutcome {
    let mut out = RuleOutcome::default();
    if !has_lab_data {
        return out;
    }

    let mut total_impact = 0.0;
    let mut metabolic = Vec::new();
    let mut inflammatory = Vec::new();

    for reading in markers {
        let impact = reading.impact();
        total_impact += impact;

        match reading.bucket() {
            MarkerBucket::Metabolic => metabolic.push(impact),
            MarkerBucket::Inflammatory => inflammatory.push(impact),
            MarkerBucket::Other => {
                if impact > 2.0 {
                    out.risk_factors
                        .push(format!("Отклонение показателя: {}", reading.spec.label));
                }
            }
        }
    }

    if total_impact > 0.0 {
        out.delta = (-total_impact).max(-MAX_LAB_PENALTY);
    }

    let metabolic_avg = average(&metabolic);
    if metabolic_avg > 5.0 {
        out.risk_factors
            .push("Отклонения метаболических показателей".to_string());
        out.candidates.push(Recommendation::new(
            Priority::High,
            "Метаболизм",
            "Запишитесь на консультацию эндокринолога",
            "2-4 недели",
            metabolic_avg,
        ));
    }

    let inflammatory_avg = average(&inflammatory);
    if inflammatory_avg > 3.0 {
        out.risk_factors
            .push("Признаки воспалительного процесса".to_string());
        out.candidates.push(Recommendation::new(
            Priority::Medium,
            "Воспаление",
            "Перейдите на противовоспалительную диету",
            "4-8 недель",
            inflammatory_avg,
        ));
    }

    out
}

fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Mental health: threshold steps over the 0-100 questionnaire score
fn mental_health_rule(score: Option<i32>) -> RuleOutcome {
    let mut out = RuleOutcome::default();
    let Some(score) = score else {
        return out;
    };

    if score >= 80 {
        out.delta += 8.0;
        out.protective_factors.push("Хорошее ментальное здоровье".to_string());
    } else if score >= 60 {
        out.delta += 3.0;
    } else if score < 40 {
        out.delta -= 10.0;
        out.risk_factors
            .push("Низкий показатель ментального здоровья".to_string());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labs::LabMarker;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn analysis(markers: Vec<(&str, &str)>) -> LabAnalysis {
        LabAnalysis {
            performed_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            markers: markers
                .into_iter()
                .map(|(name, value)| LabMarker {
                    name: name.to_string(),
                    value: value.to_string(),
                    unit: None,
                    status: None,
                })
                .collect(),
        }
    }

    fn healthy_profile() -> HealthProfile {
        HealthProfile {
            age: Some(30),
            smoking: Some(SmokingStatus::Never),
            physical_activity: Some(PhysicalActivity::Active),
            sleep_hours: Some(8.0),
            stress_level: Some(3),
            alcohol: Some(AlcoholUse::None),
            medical_conditions: vec![],
            family_history: vec![],
            ..Default::default()
        }
    }

    fn burdened_profile() -> HealthProfile {
        HealthProfile {
            age: Some(60),
            smoking: Some(SmokingStatus::Regular),
            physical_activity: Some(PhysicalActivity::Sedentary),
            sleep_hours: Some(5.0),
            stress_level: Some(9),
            alcohol: Some(AlcoholUse::Heavy),
            medical_conditions: vec!["диабет".into(), "гипертония".into()],
            family_history: vec!["онкология".into()],
            ..Default::default()
        }
    }

    // Scenario A: healthy profile clamps at the 100 ceiling
    #[test]
    fn test_healthy_profile_scores_maximum() {
        let score = compute_health_score(&healthy_profile(), &[]);
        assert_eq!(score.total_score, MAX_SCORE);
        assert_eq!(score.risk_level, RiskLevel::Low);
        assert!(score.recommendations.is_empty());
        assert!(score.risk_factors.is_empty());
        assert!(score.protective_factors.len() >= 3);
    }

    // Scenario B: heavily burdened profile hits the 20 floor
    #[test]
    fn test_burdened_profile_hits_floor() {
        let score = compute_health_score(&burdened_profile(), &[]);
        assert_eq!(score.total_score, MIN_SCORE);
        assert_eq!(score.risk_level, RiskLevel::Critical);
        assert!(score.recommendations.len() <= MAX_RECOMMENDATIONS);
        // Smoking, activity, sleep, stress, alcohol, two conditions, screening
        assert_eq!(score.recommendations.len(), 8);
        // Sorted by descending impact
        for pair in score.recommendations.windows(2) {
            assert!(pair[0].impact >= pair[1].impact);
        }
        assert_eq!(score.recommendations[0].impact, 20.0);
    }

    // Scenario C: a marker at its optimal value contributes zero penalty
    #[test]
    fn test_optimal_marker_contributes_nothing() {
        let analyses = vec![analysis(vec![("Глюкоза", "5.0")])];
        let score = compute_health_score(&healthy_profile(), &analyses);
        assert_eq!(score.breakdown.lab_results, 0.0);
        assert_eq!(score.total_score, MAX_SCORE);
    }

    // Scenario D: unrecognized condition gets the default weight, once
    #[test]
    fn test_unknown_condition_default_weight() {
        let profile = HealthProfile {
            age: Some(40),
            medical_conditions: vec!["редкая_болезнь_xyz".into()],
            ..Default::default()
        };
        let score = compute_health_score(&profile, &[]);
        assert_eq!(score.breakdown.medical_conditions, -5.0);
        let matching: Vec<_> = score
            .risk_factors
            .iter()
            .filter(|f| f.contains("редкая_болезнь_xyz"))
            .collect();
        assert_eq!(matching.len(), 1);
    }

    #[test]
    fn test_age_step_table() {
        let delta = |age| age_rule(Some(age)).delta;
        assert_eq!(delta(20), 5.0);
        assert_eq!(delta(25), 2.0);
        assert_eq!(delta(34), 2.0);
        assert_eq!(delta(40), 0.0);
        assert_eq!(delta(50), -3.0);
        assert_eq!(delta(60), -6.0);
        assert_eq!(delta(70), -10.0);
        assert_eq!(delta(80), -15.0);
        assert_eq!(age_rule(None).delta, 0.0);
    }

    #[test]
    fn test_lab_penalty_capped() {
        // Every marker far from optimal; raw penalty would exceed 30
        let analyses = vec![analysis(vec![
            ("Глюкоза", "15.0"),
            ("Холестерин общий", "12.0"),
            ("ЛПНП", "9.0"),
            ("Триглицериды", "6.0"),
            ("СРБ", "25.0"),
            ("СОЭ", "60"),
        ])];
        let score = compute_health_score(&HealthProfile::default(), &analyses);
        assert_eq!(score.breakdown.lab_results, -MAX_LAB_PENALTY);
    }

    #[test]
    fn test_lab_bucket_recommendations() {
        let analyses = vec![analysis(vec![("Глюкоза", "25.0")])];
        let score = compute_health_score(&HealthProfile::default(), &analyses);
        assert!(score
            .recommendations
            .iter()
            .any(|r| r.category == "Метаболизм"));

        let analyses = vec![analysis(vec![("СРБ", "5.0")])];
        let score = compute_health_score(&HealthProfile::default(), &analyses);
        assert!(score
            .recommendations
            .iter()
            .any(|r| r.category == "Воспаление"));
    }

    #[test]
    fn test_no_labs_means_no_lab_delta() {
        let score = compute_health_score(&HealthProfile::default(), &[]);
        assert_eq!(score.breakdown.lab_results, 0.0);
    }

    #[test]
    fn test_mental_health_thresholds() {
        assert_eq!(mental_health_rule(Some(85)).delta, 8.0);
        assert_eq!(mental_health_rule(Some(70)).delta, 3.0);
        assert_eq!(mental_health_rule(Some(50)).delta, 0.0);
        assert_eq!(mental_health_rule(Some(30)).delta, -10.0);
        assert_eq!(mental_health_rule(None).delta, 0.0);
    }

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(derive_risk_level(90, 0), RiskLevel::Low);
        assert_eq!(derive_risk_level(90, 1), RiskLevel::Medium);
        assert_eq!(derive_risk_level(70, 0), RiskLevel::Medium);
        assert_eq!(derive_risk_level(90, 3), RiskLevel::High);
        assert_eq!(derive_risk_level(55, 0), RiskLevel::High);
        assert_eq!(derive_risk_level(90, 5), RiskLevel::Critical);
        assert_eq!(derive_risk_level(35, 0), RiskLevel::Critical);
    }

    #[test]
    fn test_duplicate_conditions_dedup_in_risk_factors() {
        let profile = HealthProfile {
            medical_conditions: vec!["диабет".into(), "диабет".into()],
            ..Default::default()
        };
        let score = compute_health_score(&profile, &[]);
        // Delta applies twice, the risk-factor string appears once
        assert_eq!(score.breakdown.medical_conditions, -24.0);
        assert_eq!(
            score
                .risk_factors
                .iter()
                .filter(|f| f.contains("диабет"))
                .count(),
            1
        );
    }

    #[test]
    fn test_determinism() {
        let profile = burdened_profile();
        let analyses = vec![analysis(vec![("глюкоза", "7,2"), ("соэ", "22")])];
        let first = compute_health_score(&profile, &analyses);
        let second = compute_health_score(&profile, &analyses);
        assert_eq!(first, second);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: score is always within [20, 100]
        #[test]
        fn prop_score_bounds(
            age in proptest::option::of(-10i32..150),
            sleep in proptest::option::of(0.0f64..30.0),
            stress in proptest::option::of(-5i32..20),
            mental in proptest::option::of(-20i32..150),
            n_conditions in 0usize..12,
        ) {
            let profile = HealthProfile {
                age,
                sleep_hours: sleep,
                stress_level: stress,
                mental_health_score: mental,
                smoking: Some(SmokingStatus::Regular),
                physical_activity: Some(PhysicalActivity::Sedentary),
                alcohol: Some(AlcoholUse::Heavy),
                medical_conditions: (0..n_conditions).map(|i| format!("болезнь{}", i)).collect(),
                ..Default::default()
            };
            let score = compute_health_score(&profile, &[]);
            prop_assert!(score.total_score >= MIN_SCORE && score.total_score <= MAX_SCORE);
        }

        /// Property: an older age never yields a higher age delta
        #[test]
        fn prop_age_monotone(younger in 1i32..130, older in 1i32..130) {
            prop_assume!(younger <= older);
            let young_delta = age_rule(Some(younger)).delta;
            let old_delta = age_rule(Some(older)).delta;
            prop_assert!(old_delta <= young_delta);
        }

        /// Property: lab delta never drops below the -30 cap
        #[test]
        fn prop_lab_penalty_cap(values in proptest::collection::vec(0.1f64..500.0, 0..25)) {
            let markers: Vec<(String, String)> = values
                .iter()
                .map(|v| ("глюкоза".to_string(), format!("{:.2}", v)))
                .collect();
            let analyses = vec![LabAnalysis {
                performed_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
                markers: markers
                    .into_iter()
                    .map(|(name, value)| LabMarker { name, value, unit: None, status: None })
                    .collect(),
            }];
            let score = compute_health_score(&HealthProfile::default(), &analyses);
            prop_assert!(score.breakdown.lab_results >= -MAX_LAB_PENALTY);
            prop_assert!(score.breakdown.lab_results <= 0.0);
        }

        /// Property: more risk factors never lower the risk level at equal score
        #[test]
        fn prop_risk_level_monotone_in_factors(score in 20i32..=100, a in 0usize..8, b in 0usize..8) {
            prop_assume!(a <= b);
            let fewer = derive_risk_level(score, a);
            let more = derive_risk_level(score, b);
            prop_assert!(more >= fewer);
        }
    }
}
