use gloo::console;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::{self, MutationOutcome};
use crate::model::{Activities, Activity, StatusMessage};

const MESSAGE_VISIBLE_MS: u32 = 5_000;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: String,
    pub activity: Activity,
    /// Emits `(activity name, email)` once the user has confirmed the removal.
    pub on_remove: Callback<(String, String)>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let roster = if props.activity.participants.is_empty() {
        html! {
            <div class="participants">
                <h5>{ "Participants" }</h5>
                <p class="no-participants">{ "No participants yet" }</p>
            </div>
        }
    } else {
        html! {
            <div class="participants">
                <h5>{ "Participants" }</h5>
                <ul>
                    { for props.activity.participants.iter().map(|email| {
                        let onclick = {
                            let name = props.name.clone();
                            let email = email.clone();
                            let on_remove = props.on_remove.clone();
                            Callback::from(move |e: MouseEvent| {
                                // Keep the click from reaching the card.
                                e.stop_propagation();
                                let prompt = format!("Remove {} from {}?", email, name);
                                let confirmed = web_sys::window()
                                    .map(|w| w.confirm_with_message(&prompt).unwrap_or(false))
                                    .unwrap_or(false);
                                if confirmed {
                                    on_remove.emit((name.clone(), email.clone()));
                                }
                            })
                        };
                        html! {
                            <li>
                                <span class="participant-badge">{ email.clone() }</span>
                                <button
                                    class="delete-participant"
                                    title="Remove"
                                    aria-label={format!("Remove {} from {}", email, props.name)}
                                    {onclick}
                                >
                                    <svg width="14" height="14" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                                        <path d="M3 6h18" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                                        <path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                                        <path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                                        <path d="M10 11v6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                                        <path d="M14 11v6" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                                    </svg>
                                </button>
                            </li>
                        }
                    })}
                </ul>
            </div>
        }
    };

    html! {
        <div class="activity-card">
            <h4>{ props.name.clone() }</h4>
            <p>{ props.activity.description.clone() }</p>
            <p><strong>{ "Schedule:" }</strong>{ format!(" {}", props.activity.schedule) }</p>
            <p><strong>{ "Availability:" }</strong>{ format!(" {} spots left", props.activity.spots_left()) }</p>
            { roster }
        </div>
    }
}

/// Status region; always present so the page never reflows when a message appears.
pub fn view_message(message: &Option<StatusMessage>) -> Html {
    match message {
        Some(msg) => html! {
            <div id="message" class={classes!("message", msg.kind.css_class())}>
                { msg.text.clone() }
            </div>
        },
        None => html! {
            <div id="message" class="message hidden"></div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // Last successful load; kept across a failed refresh so the select
    // still offers the previous options.
    let activities = use_state(|| None::<Activities>);
    let load_failed = use_state(|| false);
    let message = use_state(|| None::<StatusMessage>);
    let email = use_state(String::new);
    let selected = use_state(String::new);

    let refresh = {
        let activities = activities.clone();
        let load_failed = load_failed.clone();
        Callback::from(move |_: ()| {
            let activities = activities.clone();
            let load_failed = load_failed.clone();
            spawn_local(async move {
                match api::fetch_activities().await {
                    Ok(map) => {
                        activities.set(Some(map));
                        load_failed.set(false);
                    }
                    Err(e) => {
                        console::error!("Error fetching activities:", e);
                        load_failed.set(true);
                    }
                }
            });
        })
    };

    let show_message = {
        let message = message.clone();
        move |msg: StatusMessage| {
            message.set(Some(msg));
            let message = message.clone();
            // The source never cancels a pending hide, so a message shown
            // within five seconds of the previous one disappears when the
            // earlier timer fires. Kept as-is.
            Timeout::new(MESSAGE_VISIBLE_MS, move || message.set(None)).forget();
        }
    };

    // Initial load.
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_activity_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            selected.set(sel.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let selected = selected.clone();
        let refresh = refresh.clone();
        let show_message = show_message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let activity = (*selected).clone();
            let address = (*email).clone();
            let email = email.clone();
            let selected = selected.clone();
            let refresh = refresh.clone();
            let show_message = show_message.clone();
            spawn_local(async move {
                match api::sign_up(&activity, &address).await {
                    MutationOutcome::Accepted(text) => {
                        email.set(String::new());
                        selected.set(String::new());
                        refresh.emit(());
                        show_message(StatusMessage::success(text));
                    }
                    MutationOutcome::Rejected(text) => {
                        show_message(StatusMessage::error(text));
                    }
                    MutationOutcome::Unreachable => {
                        show_message(StatusMessage::error(
                            "Failed to sign up. Please try again.",
                        ));
                    }
                }
            });
        })
    };

    let on_remove = {
        let refresh = refresh.clone();
        let show_message = show_message.clone();
        Callback::from(move |(activity, address): (String, String)| {
            let refresh = refresh.clone();
            let show_message = show_message.clone();
            spawn_local(async move {
                match api::remove_participant(&activity, &address).await {
                    MutationOutcome::Accepted(text) => {
                        refresh.emit(());
                        show_message(StatusMessage::success(text));
                    }
                    MutationOutcome::Rejected(text) => {
                        show_message(StatusMessage::error(text));
                    }
                    MutationOutcome::Unreachable => {
                        show_message(StatusMessage::error(
                            "Failed to remove participant. Please try again.",
                        ));
                    }
                }
            });
        })
    };

    let list = if *load_failed {
        html! { <p>{ "Failed to load activities. Please try again later." }</p> }
    } else if let Some(map) = (*activities).clone() {
        html! {
            <>
                { for map.iter().map(|(name, activity)| html! {
                    <ActivityCard
                        key={name.clone()}
                        name={name.clone()}
                        activity={activity.clone()}
                        on_remove={on_remove.clone()}
                    />
                })}
            </>
        }
    } else {
        html! { <p>{ "Loading activities..." }</p> }
    };

    // Options come from the last successful load, like the list does on
    // a good day, so a failed refresh leaves them alone.
    let options = (*activities)
        .clone()
        .unwrap_or_default();

    html! {
        <main class="board">
            <section id="activities-container">
                <h3>{ "Current Activities" }</h3>
                <div id="activities-list">
                    { list }
                </div>
            </section>

            <section id="signup-container">
                <h3>{ "Sign Up for an Activity" }</h3>
                <form id="signup-form" onsubmit={onsubmit}>
                    <label for="email">{ "Student Email:" }</label>
                    <input
                        id="email"
                        type="email"
                        required={true}
                        placeholder="your-email@mergington.edu"
                        value={(*email).clone()}
                        oninput={on_email_input}
                    />

                    <label for="activity">{ "Select Activity:" }</label>
                    <select id="activity" required={true} onchange={on_activity_change}>
                        <option value="" selected={selected.is_empty()}>
                            { "-- Select an activity --" }
                        </option>
                        { for options.keys().map(|name| html! {
                            <option value={name.clone()} selected={*selected == *name}>
                                { name.clone() }
                            </option>
                        })}
                    </select>

                    <button type="submit">{ "Sign Up" }</button>
                </form>

                { view_message(&message) }
            </section>
        </main>
    }
}
