use chrono::{DateTime, Utc};

use crate::{
    workout::{Coordinate, Workout, WorkoutKind},
    TrackerError,
};

/// Reads a form field the way a browser number coercion does:
/// blank is zero, anything unparsable is NaN.
pub fn parse_input(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse::<f64>().unwrap_or(f64::NAN)
}

pub fn all_finite(inputs: &[f64]) -> bool {
    inputs.iter().all(|input| input.is_finite())
}

pub fn all_positive(inputs: &[f64]) -> bool {
    inputs.iter().all(|input| *input > 0.0)
}

/// Which of the two type specific rows is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    Cadence,
    Elevation,
}

/// Raw text of the entry form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutForm {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl WorkoutForm {
    pub fn set_kind(&mut self, kind: WorkoutKind) {
        self.kind = kind;
    }

    pub fn visible_field(&self) -> MetricField {
        match self.kind {
            WorkoutKind::Running => MetricField::Cadence,
            WorkoutKind::Cycling => MetricField::Elevation,
        }
    }

    /// Empties the numeric inputs. The selected type stays.
    pub fn clear(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation.clear();
    }

    /// Cycling elevation is only required to be finite, it may be zero or negative.
    pub fn validate(&self) -> Result<Entry, TrackerError> {
        let distance = parse_input(&self.distance);
        let duration = parse_input(&self.duration);

        match self.kind {
            WorkoutKind::Running => {
                let cadence = parse_input(&self.cadence);
                if !all_finite(&[distance, duration, cadence]) || !all_positive(&[duration, distance, cadence]) {
                    return Err(TrackerError::InvalidInput);
                }
                Ok(Entry::Running { distance, duration, cadence })
            }
            WorkoutKind::Cycling => {
                let elevation_gain = parse_input(&self.elevation);
                if !all_finite(&[distance, duration, elevation_gain]) || !all_positive(&[duration, distance]) {
                    return Err(TrackerError::InvalidInput);
                }
                Ok(Entry::Cycling { distance, duration, elevation_gain })
            }
        }
    }
}

/// Input that passed the gates for its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry {
    Running { distance: f64, duration: f64, cadence: f64 },
    Cycling { distance: f64, duration: f64, elevation_gain: f64 },
}

impl Entry {
    pub fn into_workout(self, coords: Coordinate, created_at: DateTime<Utc>) -> Workout {
        match self {
            Entry::Running { distance, duration, cadence } => Workout::running(coords, distance, duration, cadence, created_at),
            Entry::Cycling { distance, duration, elevation_gain } => {
                Workout::cycling(coords, distance, duration, elevation_gain, created_at)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(kind: WorkoutKind, distance: &str, duration: &str, metric: &str) -> WorkoutForm {
        let mut form = WorkoutForm {
            kind,
            distance: distance.into(),
            duration: duration.into(),
            ..Default::default()
        };
        match kind {
            WorkoutKind::Running => form.cadence = metric.into(),
            WorkoutKind::Cycling => form.elevation = metric.into(),
        }
        form
    }

    #[test]
    fn parse_input_coerces_like_a_number_field() {
        assert_eq!(parse_input("5.2"), 5.2);
        assert_eq!(parse_input(" 24 "), 24.0);
        assert_eq!(parse_input(""), 0.0);
        assert!(parse_input("abc").is_nan());
        assert!(parse_input("5km").is_nan());
    }

    #[test]
    fn gates() {
        assert!(all_finite(&[1.0, -2.0, 0.0]));
        assert!(!all_finite(&[1.0, f64::NAN]));
        assert!(!all_finite(&[f64::INFINITY]));
        assert!(!all_finite(&[f64::NEG_INFINITY, 1.0]));
        assert!(all_positive(&[0.1, 3.0]));
        assert!(!all_positive(&[1.0, 0.0]));
        assert!(!all_positive(&[-1.0]));
        assert!(!all_positive(&[f64::NAN]));
        assert!(all_finite(&[]) && all_positive(&[]));
    }

    #[test]
    fn running_requires_positive_cadence() {
        assert_eq!(
            form(WorkoutKind::Running, "5", "30", "150").validate(),
            Ok(Entry::Running { distance: 5.0, duration: 30.0, cadence: 150.0 })
        );
        assert_eq!(form(WorkoutKind::Running, "5", "30", "-150").validate(), Err(TrackerError::InvalidInput));
        assert_eq!(form(WorkoutKind::Running, "5", "30", "").validate(), Err(TrackerError::InvalidInput));
        assert_eq!(form(WorkoutKind::Running, "abc", "30", "150").validate(), Err(TrackerError::InvalidInput));
        assert_eq!(form(WorkoutKind::Running, "5", "0", "150").validate(), Err(TrackerError::InvalidInput));
    }

    #[test]
    fn cycling_accepts_negative_elevation() {
        assert_eq!(
            form(WorkoutKind::Cycling, "20", "60", "-5").validate(),
            Ok(Entry::Cycling { distance: 20.0, duration: 60.0, elevation_gain: -5.0 })
        );
        assert!(form(WorkoutKind::Cycling, "20", "60", "").validate().is_ok());
        assert_eq!(form(WorkoutKind::Cycling, "20", "60", "x").validate(), Err(TrackerError::InvalidInput));
        assert_eq!(form(WorkoutKind::Cycling, "-20", "60", "400").validate(), Err(TrackerError::InvalidInput));
    }

    #[test]
    fn only_the_selected_metric_is_checked() {
        let mut form = form(WorkoutKind::Running, "5", "30", "150");
        form.elevation = "garbage".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn kind_switches_visible_field_and_clear_keeps_it() {
        let mut form = form(WorkoutKind::Running, "5", "30", "150");
        assert_eq!(form.visible_field(), MetricField::Cadence);

        form.set_kind(WorkoutKind::Cycling);
        assert_eq!(form.visible_field(), MetricField::Elevation);

        form.clear();
        assert_eq!(form.kind, WorkoutKind::Cycling);
        assert!(form.distance.is_empty() && form.duration.is_empty() && form.cadence.is_empty());
    }
}
