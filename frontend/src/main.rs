use crate::components::{
    map_component::{LeafletMap, MapComponent},
    workout_form::WorkoutFormView,
    workout_list::WorkoutList,
};
use chrono::Utc;
use gloo_console::{error, info};
use gloo_timers::callback::Timeout;
use gloo_utils::window;
use local_store::LocalStore;
use wasm_bindgen_futures::spawn_local;
use workout_tracker_lib::{
    config::TrackerConfig,
    display::summaries,
    tracker::{Phase, Tracker},
    validation::WorkoutForm,
    workout::Coordinate,
    TrackerError,
};
use yew::prelude::*;

mod components;
mod geolocation;
mod local_store;

enum MainMsg {
    PositionFound(Coordinate),
    PositionFailed,
    MapClicked(Coordinate),
    FormChanged(WorkoutForm),
    Submit,
    RestoreFormDisplay,
    SelectWorkout(String),
    Reset,
}

struct Model {
    tracker: Tracker<LocalStore, LeafletMap>,
    form: WorkoutForm,
    form_displayed: bool,
}

fn alert(err: &TrackerError) {
    if err.is_user_facing() {
        let _ = window().alert_with_message(&err.to_string());
    } else {
        error!(format!("{err}"));
    }
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let tracker = Tracker::new(LocalStore::open(), TrackerConfig::default());
        info!(format!("Loaded {} workouts", tracker.workouts().len()));

        let link = ctx.link().clone();
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok(position) => link.send_message(MainMsg::PositionFound(position)),
                Err(_) => link.send_message(MainMsg::PositionFailed),
            }
        });

        Self {
            tracker,
            form: WorkoutForm::default(),
            form_displayed: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::PositionFound(position) => {
                let on_click = ctx.link().callback(MainMsg::MapClicked);
                match LeafletMap::new(self.tracker.config(), on_click) {
                    Ok(map) => self.tracker.location_found(position, map),
                    Err(err) => error!("Failed to create map", err),
                }
            }
            MainMsg::PositionFailed => {
                let err = self.tracker.location_failed();
                alert(&err);
            }
            MainMsg::MapClicked(at) => {
                self.tracker.map_clicked(at);
            }
            MainMsg::FormChanged(form) => {
                self.form = form;
            }
            MainMsg::Submit => {
                let result = self.tracker.submit(&self.form, Utc::now()).map(|w| w.description().to_string());
                match result {
                    Ok(description) => info!(format!("Logged {description}")),
                    Err(err) => alert(&err),
                }

                if self.tracker.phase() == Phase::Idle {
                    self.form.clear();
                    self.form_displayed = false;
                    let link = ctx.link().clone();
                    Timeout::new(self.tracker.config().form_display_delay_ms, move || {
                        link.send_message(MainMsg::RestoreFormDisplay);
                    })
                    .forget();
                }
            }
            MainMsg::RestoreFormDisplay => {
                self.form_displayed = true;
            }
            MainMsg::SelectWorkout(id) => {
                if !self.tracker.focus(&id) {
                    info!(format!("No workout to focus for {id}"));
                }
                return false;
            }
            MainMsg::Reset => {
                match self.tracker.reset() {
                    Ok(()) => {
                        let _ = window().location().reload();
                    }
                    Err(err) => alert(&err),
                }
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let pending = match self.tracker.phase() {
            Phase::FormOpen { at } => Some(at),
            _ => None,
        };

        html! {
            <>
                <div class="sidebar">
                    <ul class="workouts">
                        <WorkoutFormView
                            form={self.form.clone()}
                            pending={pending}
                            displayed={self.form_displayed}
                            on_change={link.callback(MainMsg::FormChanged)}
                            on_submit={link.callback(|()| MainMsg::Submit)}
                        />
                        <WorkoutList
                            workouts={summaries(self.tracker.workouts())}
                            on_select={link.callback(MainMsg::SelectWorkout)}
                        />
                    </ul>
                    if !self.tracker.workouts().is_empty() {
                        <button class="reset-btn" onclick={link.callback(|_| MainMsg::Reset)}>
                            {"Reset"}
                        </button>
                    }
                </div>
                <MapComponent map={self.tracker.map().cloned()} />
            </>
        }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
