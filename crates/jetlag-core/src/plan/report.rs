//! Plain-text rendering of a plan.

use super::JetLagPlan;
use crate::light::LightExposureRecommendation;

const RULE_WIDTH: usize = 60;

impl JetLagPlan {
    /// Render the plan as a human-readable report.
    pub fn render_text(&self) -> String {
        let rule = "─".repeat(RULE_WIDTH);
        let mut output = String::from("\nJet Lag Plan\n");
        output.push_str(&rule);
        output.push('\n');

        output.push_str(&format!(
            "Direction: {} ({} time zone{})\n",
            self.direction,
            format_hours(self.time_zones_difference),
            if self.time_zones_difference == 1.0 { "" } else { "s" }
        ));
        output.push_str(&format!(
            "Flight: {}, arriving {} local time\n",
            format_duration(self.flight_duration_hours),
            self.arrival_local_time
        ));
        output.push_str(&format!(
            "Estimated adjustment: {} day{}\n",
            self.estimated_adjustment_days,
            if self.estimated_adjustment_days == 1 { "" } else { "s" }
        ));

        output.push_str(&format!(
            "\nSleep schedule ({})\n  Bedtime: {}\n  Wake:    {}\n",
            self.sleep_schedule.adjustment_phase,
            self.sleep_schedule.new_bedtime,
            self.sleep_schedule.new_wake_time
        ));

        if !self.pre_travel_days.is_empty() {
            output.push_str("\nBefore departure\n");
            let total = self.pre_travel_days.len();
            for (i, day) in self.pre_travel_days.iter().enumerate() {
                output.push_str(&format!("  {} day{} before:\n", total - i, if total - i == 1 { "" } else { "s" }));
                push_entries(&mut output, day);
            }
        }

        output.push_str("\nTravel day\n");
        push_entries(&mut output, &self.travel_day);

        if !self.post_travel_days.is_empty() {
            output.push_str("\nAfter arrival\n");
            for (i, day) in self.post_travel_days.iter().enumerate() {
                output.push_str(&format!("  Day {}:\n", i + 1));
                push_entries(&mut output, day);
            }
        }

        output.push_str(&rule);
        output.push('\n');
        output
    }
}

fn push_entries(output: &mut String, entries: &[LightExposureRecommendation]) {
    for rec in entries {
        output.push_str(&format!("    {:<22} {:<13} {}", rec.time, rec.action, rec.description));
        if let Some(intensity) = &rec.intensity {
            output.push_str(&format!(" [{intensity}]"));
        }
        output.push('\n');
    }
}

/// Whole numbers without a trailing ".0", halves as "5.5".
fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{hours:.0}")
    } else {
        format!("{hours:.1}")
    }
}

/// "11h" or "10h20m", to the nearest minute.
fn format_duration(hours: f64) -> String {
    let minutes = (hours * 60.0).round() as i64;
    match (minutes / 60, minutes % 60) {
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h{m:02}m"),
    }
}
