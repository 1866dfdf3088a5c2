use crate::metrics::{
    average, delta, latest_by, sort_by_date, sum, top_n, trailing_window, window_start,
};
use crate::models::{DashboardState, HealthEntry, Mood, WeightEntry, WorkoutEntry};
use crate::trend::{ChartFrame, TrendProjection, TrendSeries};
use chrono::{Local, NaiveDate};
use serde::Serialize;

pub const SLEEP_TARGET_HOURS: f64 = 7.0;
pub const HYDRATION_TARGET_LITERS: f64 = 2.0;
pub const MIN_WORKOUT_GOAL: usize = 4;
pub const RECENT_HEALTH_ROWS: usize = 8;
pub const RECENT_WORKOUT_ROWS: usize = 12;

#[derive(Debug, Clone, Serialize)]
pub struct CheckinSummary {
    pub date: NaiveDate,
    pub relative: String,
    pub mood: Mood,
    pub sleep_hours: f64,
    pub sleep_on_target: bool,
    pub water_liters: f64,
    pub hydration_on_target: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightChange {
    pub change: f64,
    pub latest_kg: f64,
    pub previous_kg: f64,
    pub previous_date: NaiveDate,
    pub label: String,
    /// A loss (or no change) counts in the user's favour.
    pub favorable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub today: NaiveDate,
    pub window_start: NaiveDate,
    pub average_sleep: f64,
    pub average_water: f64,
    pub total_calories: u64,
    pub daily_calorie_target: u64,
    pub workouts_this_week: usize,
    pub workout_goal: usize,
    pub latest_checkin: Option<CheckinSummary>,
    pub last_workout: Option<NaiveDate>,
    pub latest_weight: Option<WeightEntry>,
    pub weight_change: Option<WeightChange>,
    pub recent_health: Vec<HealthEntry>,
    pub recent_workouts: Vec<WorkoutEntry>,
    pub weight_trend: TrendProjection,
}

pub fn build_summary(data: &DashboardState) -> DashboardSummary {
    build_summary_at(Local::now().date_naive(), data)
}

pub fn build_summary_at(today: NaiveDate, data: &DashboardState) -> DashboardSummary {
    let start = window_start(today);
    let week_health = sort_by_date(&trailing_window(&data.health, start));
    let week_workouts = sort_by_date(&trailing_window(&data.workouts, start));

    let total_calories = sum(&week_health, |e| f64::from(e.calories)) as u64;
    let daily_calorie_target =
        (total_calories as f64 / week_health.len().max(1) as f64).round() as u64;

    let latest_checkin = latest_by(&week_health).map(|entry| CheckinSummary {
        date: entry.date,
        relative: relative_day_label(entry.date, today),
        mood: entry.mood,
        sleep_hours: entry.sleep_hours,
        sleep_on_target: entry.sleep_hours >= SLEEP_TARGET_HOURS,
        water_liters: entry.water_liters,
        hydration_on_target: entry.water_liters >= HYDRATION_TARGET_LITERS,
    });

    let recent_weight = top_n(&data.weight, TrendSeries::MAX_POINTS);
    let weight_change = delta(&recent_weight, |w| w.weight_kg).map(|d| WeightChange {
        change: d.change,
        latest_kg: d.latest.weight_kg,
        previous_kg: d.previous.weight_kg,
        previous_date: d.previous.date,
        label: weight_change_label(d.change, d.previous.date),
        favorable: d.change <= 0.0,
    });

    DashboardSummary {
        today,
        window_start: start,
        average_sleep: average(&week_health, |e| e.sleep_hours),
        average_water: average(&week_health, |e| e.water_liters),
        total_calories,
        daily_calorie_target,
        workouts_this_week: week_workouts.len(),
        workout_goal: week_workouts.len().max(MIN_WORKOUT_GOAL),
        latest_checkin,
        last_workout: latest_by(&week_workouts).map(|w| w.date),
        latest_weight: latest_by(&data.weight).cloned(),
        weight_change,
        recent_health: top_n(&data.health, RECENT_HEALTH_ROWS),
        recent_workouts: top_n(&data.workouts, RECENT_WORKOUT_ROWS),
        weight_trend: TrendSeries::from_weight(&data.weight)
            .project(ChartFrame::default(), Some("kg")),
    }
}

pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
    match (today - date).num_days() {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        -1 => "tomorrow".to_string(),
        n if n > 1 => format!("{n} days ago"),
        n => format!("in {} days", -n),
    }
}

pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

fn weight_change_label(change: f64, previous: NaiveDate) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{sign}{change:.1} kg vs {}", short_date(previous))
}
