use workout_tracker_lib::display::WorkoutSummary;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    /// Already in display order.
    pub workouts: Vec<WorkoutSummary>,
    pub on_select: Callback<String>,
}

#[function_component]
pub fn WorkoutList(props: &Props) -> Html {
    props
        .workouts
        .iter()
        .map(|summary| {
            let onclick = {
                let on_select = props.on_select.clone();
                let id = summary.id.clone();
                Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
            };

            html! {
                <li key={summary.id.clone()} class={summary.class()} data-id={summary.id.clone()} {onclick}>
                    <h2 class="workout__title">{summary.title.clone()}</h2>
                    { for summary.details.iter().map(|detail| html! {
                        <div class="workout__details">
                            <span class="workout__icon">{detail.icon}</span>
                            <span class="workout__value">{detail.value.clone()}</span>
                            <span class="workout__unit">{detail.unit}</span>
                        </div>
                    }) }
                </li>
            }
        })
        .collect::<Html>()
}
