use crate::workout::{Metrics, Workout, WorkoutKind};

/// One detail cell of a list item.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// What the list shows for a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    pub id: String,
    pub kind: WorkoutKind,
    pub title: String,
    pub details: Vec<Detail>,
}

impl WorkoutSummary {
    pub fn new(workout: &Workout) -> Self {
        let mut details = vec![
            Detail { icon: workout.kind().icon(), value: workout.distance().to_string(), unit: "km" },
            Detail { icon: "⏱", value: workout.duration().to_string(), unit: "min" },
        ];

        match workout.metrics() {
            Metrics::Running { cadence, pace } => {
                details.push(Detail { icon: "⚡️", value: to_fixed1(*pace), unit: "min/km" });
                details.push(Detail { icon: "🦶🏼", value: cadence.to_string(), unit: "spm" });
            }
            Metrics::Cycling { elevation_gain, speed } => {
                details.push(Detail { icon: "⚡️", value: to_fixed1(*speed), unit: "km/h" });
                details.push(Detail { icon: "⛰", value: elevation_gain.to_string(), unit: "m" });
            }
        }

        Self {
            id: workout.id().to_string(),
            kind: workout.kind(),
            title: workout.description().to_string(),
            details,
        }
    }

    /// CSS class of the list item.
    pub fn class(&self) -> String {
        format!("workout workout--{}", self.kind)
    }
}

/// Newest first, the way items stack under the form.
pub fn summaries(workouts: &[Workout]) -> Vec<WorkoutSummary> {
    workouts.iter().rev().map(WorkoutSummary::new).collect()
}

/// One decimal, exact ties going to the larger neighbour.
pub fn to_fixed1(value: f64) -> String {
    if value < 0.0 {
        return format!("-{}", to_fixed1(-value));
    }
    let scaled = value * 10.0;
    // Only a tie if the product was exact.
    let exact = value.mul_add(10.0, -scaled) == 0.0;
    if exact && scaled - scaled.floor() == 0.5 {
        format!("{:.1}", (scaled + 0.5).floor() / 10.0)
    } else {
        format!("{value:.1}")
    }
}

pub fn popup_content(workout: &Workout) -> String {
    format!("{} {}", workout.kind().icon(), workout.description())
}
