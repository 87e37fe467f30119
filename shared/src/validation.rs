//! Input validation functions
//!
//! Validation here guards the API boundary (profile forms, lab uploads).
//! The scoring pipeline itself never validates; it silently excludes
//! anything the normalizer cannot use.

/// Validate age in years
pub fn validate_age(age: i32) -> Result<(), String> {
    if age < 1 {
        return Err("Age must be at least 1".to_string());
    }
    if age > 130 {
        return Err("Age must be at most 130".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate sleep duration in hours
pub fn validate_sleep_hours(hours: f64) -> Result<(), String> {
    if hours.is_nan() || hours.is_infinite() {
        return Err("Sleep hours must be a valid number".to_string());
    }
    if !(0.0..=24.0).contains(&hours) {
        return Err("Sleep hours must be between 0 and 24".to_string());
    }
    Ok(())
}

/// Validate stress level (0-10 scale)
pub fn validate_stress_level(level: i32) -> Result<(), String> {
    if !(0..=10).contains(&level) {
        return Err("Stress level must be between 0 and 10".to_string());
    }
    Ok(())
}

/// Validate mental health questionnaire score (0-100)
pub fn validate_mental_health_score(score: i32) -> Result<(), String> {
    if !(0..=100).contains(&score) {
        return Err("Mental health score must be between 0 and 100".to_string());
    }
    Ok(())
}

/// Validate a lab marker name
pub fn validate_marker_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Marker name cannot be empty".to_string());
    }
    if name.len() > 255 {
        return Err("Marker name too long".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bounds() {
        assert!(validate_age(30).is_ok());
        assert!(validate_age(0).is_err());
        assert!(validate_age(131).is_err());
    }

    #[test]
    fn test_height_rejects_non_finite() {
        assert!(validate_height_cm(175.0).is_ok());
        assert!(validate_height_cm(f64::NAN).is_err());
        assert!(validate_height_cm(f64::INFINITY).is_err());
        assert!(validate_height_cm(30.0).is_err());
    }

    #[test]
    fn test_sleep_hours_range() {
        assert!(validate_sleep_hours(7.5).is_ok());
        assert!(validate_sleep_hours(0.0).is_ok());
        assert!(validate_sleep_hours(24.0).is_ok());
        assert!(validate_sleep_hours(-1.0).is_err());
        assert!(validate_sleep_hours(25.0).is_err());
    }

    #[test]
    fn test_stress_and_mental_ranges() {
        assert!(validate_stress_level(10).is_ok());
        assert!(validate_stress_level(11).is_err());
        assert!(validate_mental_health_score(100).is_ok());
        assert!(validate_mental_health_score(-1).is_err());
    }

    #[test]
    fn test_marker_name() {
        assert!(validate_marker_name("Глюкоза").is_ok());
        assert!(validate_marker_name("   ").is_err());
    }
}
