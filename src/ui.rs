use crate::models::{HealthEntry, WorkoutEntry};
use crate::stats::{DashboardSummary, short_date};
use crate::trend::{TrendChart, TrendProjection};
use maud::html;
use std::fmt::Write;

pub fn render_dashboard(summary: &DashboardSummary) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", &summary.today.format("%Y-%m-%d").to_string())
        .replace("{{CHECKIN}}", &render_checkin(summary))
        .replace("{{CARDS}}", &render_cards(summary))
        .replace("{{CHART}}", &render_chart("Weight trajectory", &summary.weight_trend))
        .replace("{{FOCUS}}", &render_focus(summary))
        .replace("{{HEALTH_ROWS}}", &render_health_rows(&summary.recent_health))
        .replace("{{WORKOUT_ROWS}}", &render_workout_rows(&summary.recent_workouts))
}

fn render_checkin(summary: &DashboardSummary) -> String {
    match &summary.latest_checkin {
        Some(checkin) => format!(
            r#"<div class="checkin"><span class="eyebrow">Last check-in</span><strong>{}</strong><span>Mood: {}</span></div>"#,
            checkin.relative,
            checkin.mood.as_str()
        ),
        None => r#"<div class="checkin empty">Log your first check-in to unlock insights.</div>"#
            .to_string(),
    }
}

struct Card<'a> {
    label: &'a str,
    value: String,
    change: Option<(String, bool)>,
}

fn render_cards(summary: &DashboardSummary) -> String {
    let checkin = summary.latest_checkin.as_ref();
    let cards = [
        Card {
            label: "Average Sleep (7d)",
            value: format!("{:.1} hrs", summary.average_sleep),
            change: checkin.map(|c| {
                (format!("Last night {} hrs", c.sleep_hours), c.sleep_on_target)
            }),
        },
        Card {
            label: "Hydration (7d avg)",
            value: format!("{:.1} L", summary.average_water),
            change: checkin.map(|c| {
                (format!("Latest {} L", c.water_liters), c.hydration_on_target)
            }),
        },
        Card {
            label: "Workouts Completed",
            value: format!("{} / 7 days", summary.workouts_this_week),
            change: summary
                .last_workout
                .map(|date| (format!("Last: {}", short_date(date)), true)),
        },
        Card {
            label: "Weight Change",
            value: summary
                .latest_weight
                .as_ref()
                .map(|w| format!("{:.1} kg", w.weight_kg))
                .unwrap_or_else(|| "Add weight log".to_string()),
            change: summary
                .weight_change
                .as_ref()
                .map(|c| (c.label.clone(), c.favorable)),
        },
    ];

    let mut html = String::new();
    for card in cards {
        let _ = write!(
            html,
            r#"<article class="card"><span class="label">{}</span><span class="value">{}</span>"#,
            card.label,
            escape(&card.value)
        );
        if let Some((label, positive)) = card.change {
            let tone = if positive { "good" } else { "bad" };
            let _ = write!(html, r#"<span class="change {tone}">{}</span>"#, escape(&label));
        }
        html.push_str("</article>");
    }
    html
}

fn render_chart(title: &str, projection: &TrendProjection) -> String {
    match projection {
        TrendProjection::Empty => format!(
            r#"<section class="panel chart empty"><h3>{title}</h3><p>Add entries to see your trend.</p></section>"#
        ),
        TrendProjection::Plotted(chart) => format!(
            r#"<section class="panel chart"><h3>{title}</h3>{}</section>"#,
            render_svg(title, chart)
        ),
    }
}

fn render_svg(title: &str, chart: &TrendChart) -> String {
    let frame = chart.frame;
    let mut svg = format!(
        r#"<svg viewBox="0 0 {w} {h}" role="img" aria-label="{title} trend"><path class="area" d="{area}"/><path class="line" d="{line}"/>"#,
        w = frame.width,
        h = frame.height,
        area = chart.area_path,
        line = chart.line_path,
    );
    for point in &chart.points {
        let _ = write!(
            svg,
            r#"<g><circle cx="{x}" cy="{y}" r="5"/><text class="value" x="{x}" y="{ly}">{value}</text><text class="date" x="{x}" y="{dy}">{date}</text></g>"#,
            x = point.x,
            y = point.y,
            ly = point.y - 12.0,
            dy = frame.height - 4.0,
            value = escape(&point.value_label),
            date = point.date_label,
        );
    }
    svg.push_str("</svg>");
    svg
}

fn render_focus(summary: &DashboardSummary) -> String {
    format!(
        r#"<li class="highlight">Fuel consistency: target {} kcal daily average.</li><li>Commit to <strong>{}</strong> sessions. Add deload notes when intensity is "high".</li><li>Prioritize sleep before heavy training days to keep the readiness score green.</li>"#,
        summary.daily_calorie_target, summary.workout_goal
    )
}

fn render_health_rows(rows: &[HealthEntry]) -> String {
    if rows.is_empty() {
        return r#"<tr><td colspan="5" class="empty">No daily check-ins yet. Log your first entry to see it here.</td></tr>"#
            .to_string();
    }
    let mut html = String::new();
    for entry in rows {
        let _ = write!(
            html,
            r#"<tr><td>{}</td><td>{:.1} h</td><td>{:.1} L</td><td>{} kcal</td><td><span class="pill">{}</span></td></tr>"#,
            entry.date.format("%a &bull; %b %-d"),
            entry.sleep_hours,
            entry.water_liters,
            entry.calories,
            entry.mood.as_str()
        );
    }
    html
}

fn render_workout_rows(rows: &[WorkoutEntry]) -> String {
    if rows.is_empty() {
        return r#"<tr><td colspan="5" class="empty">No workouts logged. Add your training sessions above.</td></tr>"#
            .to_string();
    }
    let mut html = String::new();
    for entry in rows {
        let _ = write!(
            html,
            r#"<tr><td>{}</td><td>{}</td><td class="center">{} min</td><td class="center"><span class="pill">{}</span></td><td class="right">{} kcal</td></tr>"#,
            entry.date.format("%b %-d, %Y"),
            escape(&entry.kind),
            entry.duration_minutes,
            entry.intensity.as_str(),
            entry.calories_burned
        );
    }
    html
}

fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>VitalTrack</title>
  <style>
    :root {
      --ink: #0f172a;
      --muted: #64748b;
      --accent: #10b981;
      --bad: #e11d48;
      --card: #ffffff;
      --line: #e2e8f0;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      font-family: "Inter", "Segoe UI", sans-serif;
      color: var(--ink);
      background: linear-gradient(135deg, #ecfdf5, #f1f5f9 50%, #e0f2fe);
      padding: 48px 18px 64px;
    }

    main {
      width: min(1100px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 28px;
    }

    header, .panel, .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 24px;
    }

    header {
      display: flex;
      justify-content: space-between;
      gap: 24px;
      flex-wrap: wrap;
    }

    .eyebrow, .label {
      font-size: 0.75rem;
      font-weight: 600;
      letter-spacing: 0.06em;
      text-transform: uppercase;
      color: var(--muted);
    }

    .checkin {
      display: grid;
      gap: 6px;
      padding: 16px 20px;
      border-radius: 16px;
      background: #ecfdf5;
      color: #047857;
    }

    .cards, .split {
      display: grid;
      gap: 20px;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    }

    .card {
      display: grid;
      gap: 10px;
    }

    .value {
      font-size: 1.8rem;
      font-weight: 600;
    }

    .change {
      font-size: 0.8rem;
      border-radius: 999px;
      padding: 4px 12px;
      width: fit-content;
    }

    .change.good {
      background: #d1fae5;
      color: #047857;
    }

    .change.bad {
      background: #ffe4e6;
      color: var(--bad);
    }

    svg .area {
      fill: rgba(16, 185, 129, 0.2);
    }

    svg .line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
      stroke-linecap: round;
    }

    svg circle {
      fill: #fff;
      stroke: var(--accent);
      stroke-width: 2;
    }

    svg text {
      text-anchor: middle;
      font-size: 10px;
      fill: var(--muted);
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.9rem;
    }

    td, th {
      padding: 10px 8px;
      border-bottom: 1px solid var(--line);
      text-align: left;
    }

    .center {
      text-align: center;
    }

    .right {
      text-align: right;
    }

    .pill {
      background: #f1f5f9;
      border-radius: 999px;
      padding: 2px 10px;
      text-transform: capitalize;
    }

    form {
      display: grid;
      gap: 12px;
    }

    input, select, textarea, button {
      font: inherit;
      border-radius: 12px;
      border: 1px solid var(--line);
      padding: 8px 12px;
    }

    button {
      background: var(--accent);
      color: #fff;
      border: none;
      font-weight: 600;
      cursor: pointer;
    }

    .status {
      min-height: 1.2em;
      color: var(--bad);
      font-size: 0.85rem;
    }
  </style>
</head>
<body>
  <main>
    <header>
      <div>
        <span class="eyebrow">VitalTrack</span>
        <h1>Your Health &amp; Training Command Center</h1>
        <p>Today is {{TODAY}}.</p>
      </div>
      {{CHECKIN}}
    </header>

    <section class="cards">{{CARDS}}</section>

    <section class="split">
      {{CHART}}
      <section class="panel">
        <h3>Weekly focus</h3>
        <ul>{{FOCUS}}</ul>
      </section>
    </section>

    <section class="split">
      <section class="panel">
        <h3>Daily Health Check-in</h3>
        <form data-endpoint="/api/health">
          <input type="date" name="date" value="{{TODAY}}" />
          <input type="number" name="sleepHours" min="0" step="0.5" value="7" placeholder="Sleep (hrs)" />
          <input type="number" name="waterLiters" min="0" step="0.1" value="2.5" placeholder="Water (L)" />
          <input type="number" name="calories" min="0" step="25" value="2100" placeholder="Calories" />
          <select name="mood">
            <option value="energized">Energized</option>
            <option value="steady" selected>Steady</option>
            <option value="tired">Tired</option>
          </select>
          <textarea name="notes" rows="2" placeholder="How did you feel today?"></textarea>
          <button type="submit">Save daily check-in</button>
          <div class="status"></div>
        </form>
      </section>
      <section class="panel">
        <h3>Workout Session</h3>
        <form data-endpoint="/api/workouts">
          <input type="date" name="date" value="{{TODAY}}" />
          <input type="text" name="type" value="Strength" placeholder="Strength, run, yoga..." />
          <input type="number" name="durationMinutes" min="5" step="5" value="45" placeholder="Duration (min)" />
          <select name="intensity">
            <option value="low">Low</option>
            <option value="medium" selected>Medium</option>
            <option value="high">High</option>
          </select>
          <input type="number" name="caloriesBurned" min="0" step="25" value="450" placeholder="Calories burned" />
          <textarea name="notes" rows="2" placeholder="Key lifts, pace, how you felt..."></textarea>
          <button type="submit">Log workout</button>
          <div class="status"></div>
        </form>
      </section>
      <section class="panel">
        <h3>Weight Check</h3>
        <form data-endpoint="/api/weight">
          <input type="date" name="date" value="{{TODAY}}" />
          <input type="number" name="weightKg" min="20" step="0.1" value="70" placeholder="Weight (kg)" />
          <input type="number" name="bodyFat" min="0" max="75" step="0.1" placeholder="Body fat % (optional)" />
          <button type="submit">Record measurement</button>
          <div class="status"></div>
        </form>
      </section>
    </section>

    <section class="panel">
      <h3>Recent health log</h3>
      <table>
        <thead><tr><th>Date</th><th>Sleep</th><th>Water</th><th>Calories</th><th>Mood</th></tr></thead>
        <tbody>{{HEALTH_ROWS}}</tbody>
      </table>
    </section>

    <section class="panel">
      <h3>Training sessions</h3>
      <table>
        <thead><tr><th>Date</th><th>Session</th><th class="center">Duration</th><th class="center">Intensity</th><th class="right">Calories</th></tr></thead>
        <tbody>{{WORKOUT_ROWS}}</tbody>
      </table>
    </section>
  </main>

  <script>
    document.querySelectorAll('form[data-endpoint]').forEach((form) => {
      const statusEl = form.querySelector('.status');
      form.addEventListener('submit', async (event) => {
        event.preventDefault();
        statusEl.textContent = '';
        const payload = Object.fromEntries(new FormData(form).entries());
        const res = await fetch(form.dataset.endpoint, {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify(payload)
        });
        if (!res.ok) {
          statusEl.textContent = (await res.text()) || 'Request failed';
          return;
        }
        window.location.reload();
      });
    });
  </script>
</body>
</html>
"#;
