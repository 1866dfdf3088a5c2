//! Projection of a dated numeric series into line-chart coordinates.

use crate::metrics::top_n;
use crate::models::WeightEntry;
use chrono::NaiveDate;
use serde::Serialize;

/// Logical canvas the series is drawn into. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 460.0,
            height: 140.0,
            padding: 24.0,
        }
    }
}

impl ChartFrame {
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    fn plot_width(&self) -> f64 {
        self.width - self.padding * 2.0
    }

    fn plot_height(&self) -> f64 {
        self.height - self.padding * 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Date-ascending series holding at most [`TrendSeries::MAX_POINTS`] points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendSeries {
    points: Vec<TrendPoint>,
}

impl TrendSeries {
    pub const MAX_POINTS: usize = 14;

    /// Orders `points` by date and keeps the most recent ones.
    pub fn new(mut points: Vec<TrendPoint>) -> Self {
        points.sort_by(|a, b| a.date.cmp(&b.date));
        let excess = points.len().saturating_sub(Self::MAX_POINTS);
        points.drain(..excess);
        Self { points }
    }

    /// Weight trajectory: the most recent measurements, kilograms rounded
    /// to one decimal.
    pub fn from_weight(entries: &[WeightEntry]) -> Self {
        let mut points: Vec<TrendPoint> = top_n(entries, Self::MAX_POINTS)
            .into_iter()
            .map(|entry| TrendPoint {
                date: entry.date,
                value: round_one_decimal(entry.weight_kg),
            })
            .collect();
        points.reverse();
        Self { points }
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.points
    }

    pub fn project(&self, frame: ChartFrame, unit: Option<&str>) -> TrendProjection {
        if self.points.is_empty() {
            return TrendProjection::Empty;
        }

        let min_value = self
            .points
            .iter()
            .map(|p| p.value)
            .fold(f64::INFINITY, f64::min);
        let max_value = self
            .points
            .iter()
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max);
        let spread = max_value - min_value;
        let range = if spread == 0.0 { 1.0 } else { spread };
        let steps = self.points.len().saturating_sub(1).max(1) as f64;

        let points: Vec<PlotPoint> = self
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let x = frame.padding + (index as f64 / steps) * frame.plot_width();
                let offset = (point.value - min_value) / range;
                let y = frame.baseline() - offset * frame.plot_height();
                PlotPoint {
                    x,
                    y,
                    value: point.value,
                    value_label: value_label(point.value, unit),
                    date_label: point.date.format("%m/%d").to_string(),
                }
            })
            .collect();

        let line_path = points
            .iter()
            .enumerate()
            .map(|(index, p)| format!("{} {},{}", if index == 0 { "M" } else { "L" }, p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let area_path = format!(
            "{line_path} L {} {} L {} {} Z",
            frame.padding + frame.plot_width(),
            frame.baseline(),
            frame.padding,
            frame.baseline()
        );

        TrendProjection::Plotted(TrendChart {
            frame,
            min_value,
            max_value,
            points,
            line_path,
            area_path,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub value_label: String,
    pub date_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub frame: ChartFrame,
    pub min_value: f64,
    pub max_value: f64,
    pub points: Vec<PlotPoint>,
    pub line_path: String,
    pub area_path: String,
}

/// An empty series is its own state, never a zero-size chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendProjection {
    Empty,
    Plotted(TrendChart),
}

impl TrendProjection {
    pub fn chart(&self) -> Option<&TrendChart> {
        match self {
            TrendProjection::Empty => None,
            TrendProjection::Plotted(chart) => Some(chart),
        }
    }
}

fn value_label(value: f64, unit: Option<&str>) -> String {
    match unit {
        Some(unit) => format!("{value}{unit}"),
        None => value.to_string(),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    fn series(values: &[f64]) -> TrendSeries {
        TrendSeries::new(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| TrendPoint {
                    date: day(i as u32 + 1),
                    value: *v,
                })
                .collect(),
        )
    }

    fn plotted(projection: TrendProjection) -> TrendChart {
        match projection {
            TrendProjection::Plotted(chart) => chart,
            TrendProjection::Empty => panic!("expected a chart"),
        }
    }

    #[test]
    fn empty_series_projects_to_empty() {
        let projection = TrendSeries::default().project(ChartFrame::default(), Some("kg"));
        assert_eq!(projection, TrendProjection::Empty);
        assert!(projection.chart().is_none());
    }

    #[test]
    fn extremes_map_to_top_and_baseline() {
        let frame = ChartFrame::default();
        let chart = plotted(series(&[71.0, 73.5, 70.2, 72.0]).project(frame, Some("kg")));

        let top = chart
            .points
            .iter()
            .min_by(|a, b| a.y.total_cmp(&b.y))
            .unwrap();
        let bottom = chart
            .points
            .iter()
            .max_by(|a, b| a.y.total_cmp(&b.y))
            .unwrap();
        assert_eq!(top.value, 73.5);
        assert_eq!(bottom.value, 70.2);
        assert!((top.y - frame.padding).abs() < 1e-9);
        assert!((bottom.y - frame.baseline()).abs() < 1e-9);
    }

    #[test]
    fn x_coordinates_increase_with_index() {
        let frame = ChartFrame::default();
        let chart = plotted(series(&[3.0, 1.0, 2.0, 5.0, 4.0]).project(frame, None));
        for pair in chart.points.windows(2) {
            assert!(pair[1].x > pair[0].x);
        }
        assert_eq!(chart.points[0].x, frame.padding);
        assert!((chart.points[4].x - (frame.width - frame.padding)).abs() < 1e-9);
    }

    #[test]
    fn flat_series_sits_on_the_baseline() {
        let frame = ChartFrame::default();
        let chart = plotted(series(&[70.0, 70.0, 70.0]).project(frame, Some("kg")));
        for point in &chart.points {
            assert!(point.y.is_finite());
            assert!((point.y - frame.baseline()).abs() < 1e-9);
        }
    }

    #[test]
    fn single_point_starts_at_left_padding() {
        let frame = ChartFrame::default();
        let chart = plotted(series(&[68.3]).project(frame, Some("kg")));
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.points[0].x, frame.padding);
        assert_eq!(chart.points[0].y, frame.baseline());
    }

    #[test]
    fn paths_close_along_the_baseline() {
        let frame = ChartFrame::default();
        let chart = plotted(series(&[1.0, 2.0]).project(frame, None));
        assert_eq!(chart.line_path, "M 24,116 L 436,24");
        assert_eq!(chart.area_path, "M 24,116 L 436,24 L 436 116 L 24 116 Z");
    }

    #[test]
    fn labels_carry_unit_and_short_date() {
        let chart = plotted(series(&[72.0, 71.4]).project(ChartFrame::default(), Some("kg")));
        assert_eq!(chart.points[0].value_label, "72kg");
        assert_eq!(chart.points[1].value_label, "71.4kg");
        assert_eq!(chart.points[0].date_label, "02/01");

        let bare = plotted(series(&[5.5]).project(ChartFrame::default(), None));
        assert_eq!(bare.points[0].value_label, "5.5");
    }

    #[test]
    fn series_keeps_most_recent_fourteen_in_ascending_order() {
        let points: Vec<TrendPoint> = (1..=20)
            .rev()
            .map(|d| TrendPoint {
                date: day(d),
                value: d as f64,
            })
            .collect();
        let series = TrendSeries::new(points);
        assert_eq!(series.points().len(), TrendSeries::MAX_POINTS);
        assert_eq!(series.points()[0].date, day(7));
        assert_eq!(series.points()[13].date, day(20));
    }

    #[test]
    fn weight_series_rounds_and_orders() {
        let entries: Vec<WeightEntry> = (1..=16)
            .map(|d| WeightEntry {
                id: format!("w{d}"),
                date: day(d),
                weight_kg: 70.0 + d as f64 * 0.04,
                body_fat: None,
            })
            .collect();
        let series = TrendSeries::from_weight(&entries);
        assert_eq!(series.points().len(), 14);
        assert_eq!(series.points()[0].date, day(3));
        assert_eq!(series.points()[13].date, day(16));
        assert_eq!(series.points()[13].value, 70.6);
    }
}
