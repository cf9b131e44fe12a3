use super::plural::{TimeUnit, LESS_THAN_A_MINUTE};

/// Whole units left in a positive delta, after the 12-hour carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Breakdown {
    /// `None` when the delta is zero or negative.
    pub fn from_millis(delta_ms: i64) -> Option<Self> {
        if delta_ms <= 0 {
            return None;
        }

        let total_seconds = delta_ms / 1000;
        let total_minutes = total_seconds / 60;
        let total_hours = total_minutes / 60;

        let mut days = total_hours / 24;
        let mut hours = total_hours % 24;

        // Single pass: more than 12 leftover hours count as one more day.
        if hours > 12 {
            days += 1;
            hours -= 12;
        }

        Some(Self {
            days,
            hours,
            minutes: total_minutes % 60,
            seconds: total_seconds % 60,
        })
    }

    /// Units that make it into the output, largest first, zeros dropped.
    ///
    /// Minutes only show without days; seconds only refine a minutes
    /// reading with no days or hours in front of it.
    pub fn visible_units(&self) -> Vec<(TimeUnit, i64)> {
        let mut units = Vec::with_capacity(4);

        if self.days > 0 {
            units.push((TimeUnit::Day, self.days));
        }
        if self.hours > 0 {
            units.push((TimeUnit::Hour, self.hours));
        }
        if self.days == 0 && self.minutes > 0 {
            units.push((TimeUnit::Minute, self.minutes));
            if self.hours == 0 && self.seconds > 0 {
                units.push((TimeUnit::Second, self.seconds));
            }
        }

        units
    }

    pub fn render(&self) -> String {
        let parts: Vec<String> = self
            .visible_units()
            .into_iter()
            .map(|(unit, n)| unit.label(n))
            .collect();

        if parts.is_empty() {
            LESS_THAN_A_MINUTE.to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// Localized remaining time for a millisecond delta.
///
/// Returns `None` when nothing is left (`delta_ms <= 0`).
pub fn format_remaining(delta_ms: i64) -> Option<String> {
    Breakdown::from_millis(delta_ms).map(|b| b.render())
}
