use crate::{config::TrackerConfig, display::popup_content, workout::{Coordinate, Workout}};

/// How the map moves to a new center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanAnimation {
    pub duration_secs: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupOptions {
    pub max_width: f64,
    pub min_width: f64,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

/// A pin with a popup that stays open.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Coordinate,
    pub popup: PopupOptions,
    pub content: String,
}

impl Marker {
    pub fn for_workout(workout: &Workout, config: &TrackerConfig) -> Self {
        Self {
            position: workout.coords(),
            popup: PopupOptions {
                max_width: config.popup_max_width,
                min_width: config.popup_min_width,
                auto_close: false,
                close_on_click: false,
                class_name: format!("{}-popup", workout.kind()),
            },
            content: popup_content(workout),
        }
    }
}

/// The map widget as the tracker sees it. Tiles, projection and click
/// detection belong to the implementation.
pub trait MapSurface {
    fn set_view(&mut self, center: Coordinate, zoom: f64, animation: Option<PanAnimation>);
    fn add_marker(&mut self, marker: &Marker);
}
