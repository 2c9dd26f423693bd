//! Training record types
//!
//! A training entry is one row of the weekly log:
//! - `week_number`: which week of the programme
//! - `day_of_week`: free-form day label ("Mon", "Tuesday", ...)
//! - `training_content`: what was trained
//! - `sets`: number of sets
//! - `completed`: whether the session was done

use serde::{Deserialize, Deserializer, Serialize};

/// Accepts integers, whole floats and numeric strings (`"3"`, `" 3 "`).
fn deserialize_lax_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LaxInt {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match LaxInt::deserialize(deserializer)? {
        LaxInt::Int(i) => Ok(i),
        LaxInt::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        LaxInt::Float(f) => Err(Error::custom(format!("invalid integer: {}", f))),
        LaxInt::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| Error::custom(format!("invalid integer: {:?}", s))),
    }
}

/// Accepts booleans, `0`/`1`, common boolean words, and `null` as `false`.
fn deserialize_lax_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LaxBool {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    match Option::<LaxBool>::deserialize(deserializer)? {
        None => Ok(false),
        Some(LaxBool::Bool(b)) => Ok(b),
        Some(LaxBool::Int(0)) => Ok(false),
        Some(LaxBool::Int(1)) => Ok(true),
        Some(LaxBool::Int(i)) => Err(Error::custom(format!("invalid boolean: {}", i))),
        Some(LaxBool::Text(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Ok(true),
            "false" | "f" | "no" | "n" | "off" | "0" => Ok(false),
            _ => Err(Error::custom(format!("invalid boolean: {:?}", s))),
        },
    }
}

/// Request body for create and update. Carries every field except `id`.
///
/// `completed` may be omitted or `null` and then defaults to `false`.
/// Numeric fields take numeric strings; `completed` takes `0`/`1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingInput {
    #[serde(deserialize_with = "deserialize_lax_int")]
    pub week_number: i64,
    pub day_of_week: String,
    pub training_content: String,
    #[serde(deserialize_with = "deserialize_lax_int")]
    pub sets: i64,
    #[serde(default, deserialize_with = "deserialize_lax_bool")]
    pub completed: bool,
}

impl TrainingInput {
    pub fn new(
        week_number: i64,
        day_of_week: impl Into<String>,
        training_content: impl Into<String>,
        sets: i64,
    ) -> Self {
        Self {
            week_number,
            day_of_week: day_of_week.into(),
            training_content: training_content.into(),
            sets,
            completed: false,
        }
    }

    /// Builder-style setter for the completion flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Attach a store-assigned id, producing the full record
    pub fn into_training(self, id: i64) -> Training {
        Training {
            id,
            week_number: self.week_number,
            day_of_week: self.day_of_week,
            training_content: self.training_content,
            sets: self.sets,
            completed: self.completed,
        }
    }
}

/// A stored training record.
///
/// The `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Training {
    pub id: i64,
    pub week_number: i64,
    pub day_of_week: String,
    pub training_content: String,
    pub sets: i64,
    pub completed: bool,
}

impl std::fmt::Display for Training {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} week {} {}: {} x{}{}",
            self.id,
            self.week_number,
            self.day_of_week,
            self.training_content,
            self.sets,
            if self.completed { " (done)" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_defaults_to_false() {
        let input: TrainingInput = serde_json::from_str(
            r#"{"week_number":1,"day_of_week":"Mon","training_content":"Squat","sets":5}"#,
        )
        .unwrap();
        assert!(!input.completed);
        assert_eq!(input, TrainingInput::new(1, "Mon", "Squat", 5));
    }

    #[test]
    fn test_missing_field_rejected() {
        let result: Result<TrainingInput, _> =
            serde_json::from_str(r#"{"week_number":1,"day_of_week":"Mon","sets":5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let result: Result<TrainingInput, _> = serde_json::from_str(
            r#"{"week_number":"one","day_of_week":"Mon","training_content":"Squat","sets":5}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_lenient_field_coercion() {
        let input: TrainingInput = serde_json::from_str(
            r#"{"week_number":"1","day_of_week":"Mon","training_content":"Squat","sets":5.0,"completed":null}"#,
        )
        .unwrap();
        assert_eq!(input, TrainingInput::new(1, "Mon", "Squat", 5));

        let input: TrainingInput = serde_json::from_str(
            r#"{"week_number":2,"day_of_week":"Tue","training_content":"Bench","sets":" 3 ","completed":1}"#,
        )
        .unwrap();
        assert_eq!(input.sets, 3);
        assert!(input.completed);
    }

    #[test]
    fn test_unparseable_values_rejected() {
        for body in [
            r#"{"week_number":1.5,"day_of_week":"Mon","training_content":"Squat","sets":5}"#,
            r#"{"week_number":1,"day_of_week":"Mon","training_content":"Squat","sets":5,"completed":2}"#,
            r#"{"week_number":1,"day_of_week":"Mon","training_content":"Squat","sets":5,"completed":"maybe"}"#,
            r#"{"week_number":null,"day_of_week":"Mon","training_content":"Squat","sets":5}"#,
        ] {
            assert!(serde_json::from_str::<TrainingInput>(body).is_err(), "{}", body);
        }
    }

    #[test]
    fn test_display() {
        let training = TrainingInput::new(1, "Mon", "Squat", 5).into_training(3);
        assert_eq!(training.to_string(), "#3 week 1 Mon: Squat x5");
        let done = TrainingInput::new(1, "Mon", "Squat", 5).with_completed(true).into_training(3);
        assert_eq!(done.to_string(), "#3 week 1 Mon: Squat x5 (done)");
    }

    #[test]
    fn test_into_training_keeps_fields() {
        let training = TrainingInput::new(2, "Tue", "Bench", 3)
            .with_completed(true)
            .into_training(7);
        assert_eq!(training.id, 7);
        assert_eq!(training.day_of_week, "Tue");
        assert!(training.completed);

        let json = serde_json::to_value(&training).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["completed"], true);
    }
}
