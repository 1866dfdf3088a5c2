//! Form boundary: drafts as submitted, validated into records.
//!
//! Numeric fields accept JSON numbers or numeric text, since HTML inputs
//! post strings. Text that is not a number fails validation; it is never
//! coerced into a value.

use crate::errors::ValidationError;
use crate::ids::IdGenerator;
use crate::models::{HealthEntry, Intensity, Mood, WeightEntry, WorkoutEntry};
use chrono::NaiveDate;
use serde::Deserialize;

const MAX_BODY_FAT: f64 = 75.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    fn is_blank(&self) -> bool {
        matches!(self, NumericInput::Text(text) if text.trim().is_empty())
    }

    fn parse(&self, field: &'static str) -> Result<f64, ValidationError> {
        let value = match self {
            NumericInput::Number(n) => Some(*n),
            NumericInput::Text(text) => text.trim().parse::<f64>().ok(),
        };
        value
            .filter(|v| v.is_finite())
            .ok_or_else(|| ValidationError::new(field, "must be a number"))
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDraft {
    #[serde(default)]
    pub date: Option<String>,
    pub sleep_hours: NumericInput,
    pub water_liters: NumericInput,
    pub calories: NumericInput,
    pub mood: Mood,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDraft {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration_minutes: NumericInput,
    pub intensity: Intensity,
    pub calories_burned: NumericInput,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightDraft {
    #[serde(default)]
    pub date: Option<String>,
    pub weight_kg: NumericInput,
    #[serde(default)]
    pub body_fat: Option<NumericInput>,
}

impl HealthDraft {
    pub fn into_entry(
        self,
        today: NaiveDate,
        ids: &dyn IdGenerator,
    ) -> Result<HealthEntry, ValidationError> {
        let date = entry_date(self.date.as_deref(), today)?;
        let sleep_hours = non_negative("sleepHours", &self.sleep_hours)?;
        let water_liters = non_negative("waterLiters", &self.water_liters)?;
        let calories = whole("calories", &self.calories, 0)?;

        Ok(HealthEntry {
            id: ids.next_id(),
            date,
            sleep_hours,
            water_liters,
            calories,
            mood: self.mood,
            notes: clean_notes(self.notes),
        })
    }
}

impl WorkoutDraft {
    pub fn into_entry(
        self,
        today: NaiveDate,
        ids: &dyn IdGenerator,
    ) -> Result<WorkoutEntry, ValidationError> {
        let date = entry_date(self.date.as_deref(), today)?;
        let kind = self.kind.trim().to_string();
        if kind.is_empty() {
            return Err(ValidationError::new("type", "must not be empty"));
        }
        let duration_minutes = whole("durationMinutes", &self.duration_minutes, 1)?;
        let calories_burned = whole("caloriesBurned", &self.calories_burned, 0)?;

        Ok(WorkoutEntry {
            id: ids.next_id(),
            date,
            kind,
            duration_minutes,
            intensity: self.intensity,
            calories_burned,
            notes: clean_notes(self.notes),
        })
    }
}

impl WeightDraft {
    pub fn into_entry(
        self,
        today: NaiveDate,
        ids: &dyn IdGenerator,
    ) -> Result<WeightEntry, ValidationError> {
        let date = entry_date(self.date.as_deref(), today)?;
        let weight_kg = self.weight_kg.parse("weightKg")?;
        if weight_kg <= 0.0 {
            return Err(ValidationError::new("weightKg", "must be greater than 0"));
        }
        let body_fat = match self.body_fat {
            Some(input) if !input.is_blank() => {
                let value = input.parse("bodyFat")?;
                if !(0.0..=MAX_BODY_FAT).contains(&value) {
                    return Err(ValidationError::new("bodyFat", "must be between 0 and 75"));
                }
                Some(value)
            }
            _ => None,
        };

        Ok(WeightEntry {
            id: ids.next_id(),
            date,
            weight_kg,
            body_fat,
        })
    }
}

fn entry_date(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(today),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|_| ValidationError::new("date", "must be a YYYY-MM-DD date")),
    }
}

fn non_negative(field: &'static str, input: &NumericInput) -> Result<f64, ValidationError> {
    let value = input.parse(field)?;
    if value < 0.0 {
        return Err(ValidationError::new(field, "must not be negative"));
    }
    Ok(value)
}

fn whole(field: &'static str, input: &NumericInput, min: u32) -> Result<u32, ValidationError> {
    let value = input.parse(field)?;
    if value.fract() != 0.0 {
        return Err(ValidationError::new(field, "must be a whole number"));
    }
    if value < f64::from(min) {
        return Err(ValidationError::new(field, format!("must be at least {min}")));
    }
    if value > f64::from(u32::MAX) {
        return Err(ValidationError::new(field, "is too large"));
    }
    Ok(value as u32)
}

fn clean_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
