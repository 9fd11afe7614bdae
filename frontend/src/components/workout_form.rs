use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::{
    validation::{MetricField, WorkoutForm},
    workout::{Coordinate, WorkoutKind},
};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub form: WorkoutForm,
    /// The clicked point the form is open for, None while hidden.
    pub pending: Option<Coordinate>,
    /// False for a moment after hiding so the slide in does not replay.
    pub displayed: bool,
    pub on_change: Callback<WorkoutForm>,
    pub on_submit: Callback<()>,
}

#[function_component]
pub fn WorkoutFormView(props: &Props) -> Html {
    let distance_ref = use_node_ref();

    {
        let distance_ref = distance_ref.clone();
        // Every new point refocuses, also while the form is already open.
        use_effect_with(props.pending, move |pending| {
            if pending.is_some() {
                if let Some(input) = distance_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
        });
    }

    let field = |update: fn(&mut WorkoutForm, String)| {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut form = form.clone();
            update(&mut form, input.value());
            on_change.emit(form);
        })
    };

    let on_type_change = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(kind) = select.value().parse::<WorkoutKind>() {
                let mut form = form.clone();
                form.set_kind(kind);
                on_change.emit(form);
            }
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let form = &props.form;
    let hidden = props.pending.is_none();
    let visible = form.visible_field();
    let row_class = |field: MetricField| classes!("form__row", (visible != field).then_some("form__row--hidden"));

    html! {
        <form
            class={classes!("form", hidden.then_some("hidden"))}
            style={if props.displayed { "display: grid" } else { "display: none" }}
            {onsubmit}
        >
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" onchange={on_type_change}>
                    <option value="running" selected={form.kind == WorkoutKind::Running}>{"Running"}</option>
                    <option value="cycling" selected={form.kind == WorkoutKind::Cycling}>{"Cycling"}</option>
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">{"Distance"}</label>
                <input
                    ref={distance_ref}
                    class="form__input form__input--distance"
                    placeholder="km"
                    value={form.distance.clone()}
                    oninput={field(|f, v| f.distance = v)}
                />
            </div>
            <div class="form__row">
                <label class="form__label">{"Duration"}</label>
                <input
                    class="form__input form__input--duration"
                    placeholder="min"
                    value={form.duration.clone()}
                    oninput={field(|f, v| f.duration = v)}
                />
            </div>
            <div class={row_class(MetricField::Cadence)}>
                <label class="form__label">{"Cadence"}</label>
                <input
                    class="form__input form__input--cadence"
                    placeholder="step/min"
                    value={form.cadence.clone()}
                    oninput={field(|f, v| f.cadence = v)}
                />
            </div>
            <div class={row_class(MetricField::Elevation)}>
                <label class="form__label">{"Elev Gain"}</label>
                <input
                    class="form__input form__input--elevation"
                    placeholder="meters"
                    value={form.elevation.clone()}
                    oninput={field(|f, v| f.elevation = v)}
                />
            </div>
            <button class="form__btn">{"OK"}</button>
        </form>
    }
}
