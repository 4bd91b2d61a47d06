//! Previous / next controls and progress label.

use leptos::prelude::*;

use crate::pages::questionnaire::run_nav_action;
use crate::state::questionnaire::{QuestionnaireState, SubmitStatus};

#[component]
pub fn QuestionNav() -> impl IntoView {
    let state = expect_context::<RwSignal<QuestionnaireState>>();

    let on_prev = move |_| {
        if let Some(action) = state.try_update(QuestionnaireState::prev) {
            run_nav_action(state, action);
        }
    };
    let on_next = move |_| {
        if let Some(action) = state.try_update(QuestionnaireState::next) {
            run_nav_action(state, action);
        }
    };

    let submit_error = move || {
        state.with(|s| match s.submit_status() {
            SubmitStatus::Failed(reason) => Some(reason.clone()),
            _ => None,
        })
    };

    view! {
        <div class="question-nav">
            <button
                id="prev-question"
                class="btn question-nav__prev"
                type="button"
                style:visibility=move || if state.with(QuestionnaireState::prev_visible) { "visible" } else { "hidden" }
                on:click=on_prev
            >
                "←"
            </button>
            <span class="question-nav__progress">{move || state.with(QuestionnaireState::progress_label)}</span>
            <button
                id="next-question"
                class="btn btn--primary question-nav__next"
                type="button"
                disabled=move || !state.with(QuestionnaireState::next_enabled)
                on:click=on_next
            >
                {move || state.with(QuestionnaireState::next_label)}
            </button>
            {move || submit_error().map(|reason| view! { <p class="question-nav__error">{reason}</p> })}
        </div>
    }
}
