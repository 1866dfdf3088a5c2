use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Anything that lives on a calendar day. Display order is always derived
/// from this date, never from insertion order.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Energized,
    Steady,
    Tired,
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Energized => "energized",
            Mood::Steady => "steady",
            Mood::Tired => "tired",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntry {
    pub id: String,
    pub date: NaiveDate,
    pub sleep_hours: f64,
    pub water_liters: f64,
    pub calories: u32,
    pub mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration_minutes: u32,
    pub intensity: Intensity,
    pub calories_burned: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    pub id: String,
    pub date: NaiveDate,
    pub weight_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
}

impl Dated for HealthEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for WorkoutEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for WeightEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// The whole persisted document. Collections are independent of each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardState {
    #[serde(default)]
    pub health: Vec<HealthEntry>,
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
    #[serde(default)]
    pub weight: Vec<WeightEntry>,
}

impl DashboardState {
    pub fn is_empty(&self) -> bool {
        self.health.is_empty() && self.workouts.is_empty() && self.weight.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn sample_state() -> DashboardState {
        DashboardState {
            health: vec![HealthEntry {
                id: "h-1".into(),
                date: day(2),
                sleep_hours: 7.5,
                water_liters: 2.4,
                calories: 2150,
                mood: Mood::Energized,
                notes: Some("long walk".into()),
            }],
            workouts: vec![WorkoutEntry {
                id: "w-1".into(),
                date: day(1),
                kind: "Strength".into(),
                duration_minutes: 45,
                intensity: Intensity::High,
                calories_burned: 450,
                notes: None,
            }],
            weight: vec![
                WeightEntry {
                    id: "kg-2".into(),
                    date: day(2),
                    weight_kg: 71.4,
                    body_fat: None,
                },
                WeightEntry {
                    id: "kg-1".into(),
                    date: day(1),
                    weight_kg: 72.0,
                    body_fat: Some(18.5),
                },
            ],
        }
    }

    #[test]
    fn state_round_trips_through_storage_format() {
        let state = sample_state();
        let text = serde_json::to_string(&state).unwrap();
        let restored: DashboardState = serde_json::from_str(&text).unwrap();

        let by_id = |s: &DashboardState| {
            let mut ids = BTreeMap::new();
            for entry in &s.health {
                ids.insert(entry.id.clone(), serde_json::to_value(entry).unwrap());
            }
            for entry in &s.workouts {
                ids.insert(entry.id.clone(), serde_json::to_value(entry).unwrap());
            }
            for entry in &s.weight {
                ids.insert(entry.id.clone(), serde_json::to_value(entry).unwrap());
            }
            ids
        };
        assert_eq!(by_id(&state), by_id(&restored));
    }

    #[test]
    fn storage_format_uses_camel_case_fields() {
        let value = serde_json::to_value(sample_state()).unwrap();
        let health = &value["health"][0];
        assert_eq!(health["date"], "2026-03-02");
        assert_eq!(health["sleepHours"], 7.5);
        assert_eq!(health["mood"], "energized");
        assert_eq!(value["workouts"][0]["type"], "Strength");
        assert_eq!(value["workouts"][0]["durationMinutes"], 45);
        assert!(value["workouts"][0].get("notes").is_none());
        assert_eq!(value["weight"][1]["bodyFat"], 18.5);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let state: DashboardState =
            serde_json::from_str(r#"{"weight":[{"id":"a","date":"2026-03-01","weightKg":70}]}"#)
                .unwrap();
        assert!(state.health.is_empty());
        assert!(state.workouts.is_empty());
        assert_eq!(state.weight.len(), 1);
        assert!(!state.is_empty());
    }
}
