use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Digits of the millisecond timestamp kept in an id.
const ID_DIGITS: usize = 10;

/// A point on the map. Stored as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self { latitude, longitude }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.latitude, coord.longitude]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkoutKind {
    #[default]
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(format!("unknown workout type: {other}")),
        }
    }
}

/// The variant specific part of a workout, tagged by `type` when stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Metrics {
    Running {
        /// steps per minute
        cadence: f64,
        /// min/km
        pace: f64,
    },
    Cycling {
        #[serde(rename = "elevationGain", alias = "elevationGainee")]
        elevation_gain: f64,
        /// km/h
        speed: f64,
    },
}

/// One logged session. Derived values are computed once in the constructors
/// and carried as data from then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: String,
    #[serde(rename = "date")]
    created_at: DateTime<Utc>,
    coords: Coordinate,
    /// km
    distance: f64,
    /// min
    duration: f64,
    description: String,
    #[serde(flatten)]
    metrics: Metrics,
}

impl Workout {
    pub fn running(coords: Coordinate, distance: f64, duration: f64, cadence: f64, created_at: DateTime<Utc>) -> Self {
        let metrics = Metrics::Running {
            cadence,
            pace: duration / distance,
        };
        Self::new(coords, distance, duration, metrics, created_at)
    }

    pub fn cycling(coords: Coordinate, distance: f64, duration: f64, elevation_gain: f64, created_at: DateTime<Utc>) -> Self {
        let metrics = Metrics::Cycling {
            elevation_gain,
            speed: distance / (duration / 60.0),
        };
        Self::new(coords, distance, duration, metrics, created_at)
    }

    fn new(coords: Coordinate, distance: f64, duration: f64, metrics: Metrics, created_at: DateTime<Utc>) -> Self {
        let mut workout = Self {
            id: stamp_id(created_at),
            created_at,
            coords,
            distance,
            duration,
            description: String::new(),
            metrics,
        };
        workout.description = describe(workout.kind(), created_at.with_timezone(&Local));
        workout
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coordinate {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.metrics {
            Metrics::Running { .. } => WorkoutKind::Running,
            Metrics::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Pace in min/km, running only.
    pub fn pace(&self) -> Option<f64> {
        match self.metrics {
            Metrics::Running { pace, .. } => Some(pace),
            Metrics::Cycling { .. } => None,
        }
    }

    /// Speed in km/h, cycling only.
    pub fn speed(&self) -> Option<f64> {
        match self.metrics {
            Metrics::Cycling { speed, .. } => Some(speed),
            Metrics::Running { .. } => None,
        }
    }

    /// Moves the id to the next number. Used by the tracker when two workouts
    /// are stamped in the same millisecond.
    pub(crate) fn bump_id(&mut self) {
        let next = self.id.parse::<u64>().map(|n| n.wrapping_add(1)).unwrap_or_default();
        self.id = format!("{:0width$}", next % 10u64.pow(ID_DIGITS as u32), width = ID_DIGITS);
    }
}

/// "Running on April 14"
pub fn describe(kind: WorkoutKind, date: impl Datelike) -> String {
    let tag = kind.as_str();
    let mut chars = tag.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };

    format!("{} on {} {}", capitalized, MONTHS[date.month0() as usize], date.day())
}

/// The last ten digits of the creation time in milliseconds.
pub fn stamp_id(created_at: DateTime<Utc>) -> String {
    let millis = created_at.timestamp_millis().to_string();
    millis[millis.len().saturating_sub(ID_DIGITS)..].to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use super::*;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn running_pace_is_duration_over_distance() {
        let run = Workout::running(Coordinate::new(39.0, -12.0), 5.2, 24.0, 178.0, Utc::now());
        assert_eq!(run.pace(), Some(24.0 / 5.2));
        assert_eq!(run.speed(), None);
        assert_eq!(run.kind(), WorkoutKind::Running);
    }

    #[test]
    fn cycling_speed_is_km_per_hour() {
        let ride = Workout::cycling(Coordinate::new(39.0, -12.0), 27.0, 95.0, 523.0, Utc::now());
        assert_eq!(ride.speed(), Some(27.0 / (95.0 / 60.0)));
        assert_eq!(ride.pace(), None);

        let ride = Workout::cycling(Coordinate::new(0.0, 0.0), 20.0, 60.0, 400.0, Utc::now());
        assert_eq!(ride.speed(), Some(20.0));
    }

    #[test]
    fn description_uses_month_name_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 14).unwrap();
        assert_eq!(describe(WorkoutKind::Running, date), "Running on April 14");
        assert_eq!(describe(WorkoutKind::Cycling, date), "Cycling on April 14");

        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(describe(WorkoutKind::Running, date), "Running on December 1");
    }

    #[test]
    fn description_is_stable_within_a_day() {
        let now = Utc::now();
        let a = Workout::running(Coordinate::new(1.0, 2.0), 5.0, 30.0, 150.0, now);
        let b = Workout::running(Coordinate::new(3.0, 4.0), 8.0, 45.0, 170.0, now);
        assert_eq!(a.description(), b.description());

        let local = now.with_timezone(&Local);
        assert_eq!(a.description(), format!("Running on {} {}", MONTHS[local.month0() as usize], local.day()));
    }

    #[test]
    fn id_keeps_last_ten_digits() {
        assert_eq!(stamp_id(at(1_713_100_000_123)), "3100000123");
        assert_eq!(stamp_id(at(42)), "42");
    }

    #[test]
    fn bump_id_wraps_within_ten_digits() {
        let mut run = Workout::running(Coordinate::new(0.0, 0.0), 1.0, 1.0, 1.0, at(1_713_100_000_123));
        run.bump_id();
        assert_eq!(run.id(), "3100000124");

        let mut run = Workout::running(Coordinate::new(0.0, 0.0), 1.0, 1.0, 1.0, at(19_999_999_999));
        run.bump_id();
        assert_eq!(run.id(), "0000000000");
    }

    #[test]
    fn kind_parses_select_values() {
        assert_eq!("running".parse::<WorkoutKind>(), Ok(WorkoutKind::Running));
        assert_eq!("cycling".parse::<WorkoutKind>(), Ok(WorkoutKind::Cycling));
        assert!("swimming".parse::<WorkoutKind>().is_err());
    }
}
