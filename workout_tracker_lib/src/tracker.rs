use chrono::{DateTime, Utc};

use crate::{
    config::TrackerConfig,
    map::{MapSurface, Marker, PanAnimation},
    storage::{KeyValueStore, WorkoutStore},
    validation::WorkoutForm,
    workout::{Coordinate, Workout},
    TrackerError,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    AwaitingLocation,
    /// The position request failed. There is no map and no retry.
    NoMap,
    Idle,
    FormOpen { at: Coordinate },
}

/// Owns the workout list for the page session and drives the map and the
/// persisted copy of the list.
pub struct Tracker<S, M> {
    config: TrackerConfig,
    store: WorkoutStore<S>,
    workouts: Vec<Workout>,
    map: Option<M>,
    phase: Phase,
}

impl<S: KeyValueStore, M: MapSurface> Tracker<S, M> {
    /// Starts waiting for the position with whatever was stored last time.
    pub fn new(store: S, config: TrackerConfig) -> Self {
        let store = WorkoutStore::new(store, config.storage_key.clone());
        let workouts = match store.load() {
            Ok(workouts) => workouts,
            Err(err) => {
                tracing::warn!("Ignoring stored workouts: {err}");
                Vec::new()
            }
        };

        tracing::info!(count = workouts.len(), "Tracker started");

        Self {
            config,
            store,
            workouts,
            map: None,
            phase: Phase::AwaitingLocation,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn storage(&self) -> &WorkoutStore<S> {
        &self.store
    }

    /// Centers the map on the user and draws everything already in memory.
    pub fn location_found(&mut self, position: Coordinate, mut map: M) {
        if self.phase != Phase::AwaitingLocation {
            tracing::warn!("Position arrived twice, ignoring");
            return;
        }

        tracing::info!(lat = position.latitude, lng = position.longitude, "Position found");
        map.set_view(position, self.config.zoom, None);
        for workout in &self.workouts {
            map.add_marker(&Marker::for_workout(workout, &self.config));
        }

        self.map = Some(map);
        self.phase = Phase::Idle;
    }

    pub fn location_failed(&mut self) -> TrackerError {
        tracing::warn!("Position unavailable");
        if self.phase == Phase::AwaitingLocation {
            self.phase = Phase::NoMap;
        }
        TrackerError::LocationUnavailable
    }

    /// Opens the form for a point on the map. A later click replaces the point.
    pub fn map_clicked(&mut self, at: Coordinate) {
        match self.phase {
            Phase::Idle | Phase::FormOpen { .. } => {
                tracing::debug!(lat = at.latitude, lng = at.longitude, "Form opened");
                self.phase = Phase::FormOpen { at };
            }
            Phase::AwaitingLocation | Phase::NoMap => {}
        }
    }

    /// Validates the form and logs a workout at the clicked point. On invalid
    /// input nothing changes and the form stays open.
    pub fn submit(&mut self, form: &WorkoutForm, now: DateTime<Utc>) -> Result<&Workout, TrackerError> {
        let Phase::FormOpen { at } = self.phase else {
            return Err(TrackerError::NoLocationSelected);
        };

        let entry = form.validate().inspect_err(|_| {
            tracing::debug!(?form, "Rejected workout input");
        })?;

        let mut workout = entry.into_workout(at, now);
        while self.workouts.iter().any(|w| w.id() == workout.id()) {
            workout.bump_id();
        }

        if let Some(map) = self.map.as_mut() {
            map.add_marker(&Marker::for_workout(&workout, &self.config));
        }

        tracing::info!(id = workout.id(), description = workout.description(), "Workout logged");
        self.workouts.push(workout);
        self.phase = Phase::Idle;

        self.store.save(&self.workouts)?;

        Ok(&self.workouts[self.workouts.len() - 1])
    }

    /// Pans to a listed workout. Unknown ids and a missing map do nothing.
    pub fn focus(&mut self, id: &str) -> bool {
        let Some(workout) = self.workouts.iter().find(|w| w.id() == id) else {
            return false;
        };
        let Some(map) = self.map.as_mut() else {
            return false;
        };

        let animation = PanAnimation {
            duration_secs: self.config.pan_duration_secs,
        };
        map.set_view(workout.coords(), self.config.zoom, Some(animation));
        true
    }

    /// Drops the stored list. The caller is expected to reload the page, the
    /// in-memory session is left as it is.
    pub fn reset(&mut self) -> Result<(), TrackerError> {
        self.store.clear()?;
        Ok(())
    }
}
