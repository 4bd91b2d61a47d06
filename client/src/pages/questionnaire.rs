//! Questionnaire page and its async drivers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `QuestionnaireState` decides what to fetch or submit; the drivers here run
//! those requests and feed the results back. Stale question responses are
//! dropped by the state's sequence check, so in-flight fetches are never
//! aborted.

use leptos::prelude::*;

use crate::components::answer_bubbles::AnswerBubbles;
use crate::components::heart_background::HeartBackground;
use crate::components::question_nav::QuestionNav;
use crate::net::api::{fetch_question, submit_answers};
use crate::state::page::QuestionnairePageConfig;
use crate::state::questionnaire::{LoadTicket, NavAction, QuestionnaireState};
use crate::util::audio::start_background_music;
use crate::util::dom::navigate;

/// Fetch the question named by `ticket` and apply the result.
pub(crate) fn run_load(state: RwSignal<QuestionnaireState>, ticket: LoadTicket) {
    leptos::task::spawn_local(async move {
        let result = fetch_question(ticket.index).await;
        if let Err(err) = &result {
            log::warn!("question {} failed to load: {err}", ticket.index);
        }
        let applied = state.try_update(|s| s.finish_load(ticket, result)).unwrap_or(false);
        if !applied {
            log::debug!("discarded stale response for question {}", ticket.index);
        }
    });
}

/// Carry out a navigation decision from `QuestionnaireState::{next, prev}`.
pub(crate) fn run_nav_action(state: RwSignal<QuestionnaireState>, action: NavAction) {
    match action {
        NavAction::Load(ticket) => run_load(state, ticket),
        NavAction::Submit(answers) => {
            log::info!("submitting answers for {} questions", answers.len());
            leptos::task::spawn_local(async move {
                let result = submit_answers(&answers).await;
                if let Err(err) = &result {
                    log::warn!("answer submission failed: {err}");
                }
                if let Some(path) = state.try_update(|s| s.finish_submit(result)).flatten() {
                    navigate(path);
                }
            });
        }
        NavAction::None => {}
    }
}

/// Questionnaire controller with the decorative heart background.
#[component]
pub fn QuestionnairePage(config: QuestionnairePageConfig) -> impl IntoView {
    log::info!("mounting questionnaire with {} questions", config.total_questions);

    let state = RwSignal::new(QuestionnaireState::new(config.total_questions));
    provide_context(state);

    if let Some(ticket) = state.try_update(QuestionnaireState::start) {
        run_load(state, ticket);
    }

    let music = StoredValue::new_local(start_background_music());
    on_cleanup(move || {
        music.update_value(|slot| {
            if let Some(audio) = slot.take() {
                if let Err(err) = audio.pause() {
                    log::warn!("could not pause music: {}", crate::error::describe_js(&err));
                }
            }
        });
    });

    view! {
        <HeartBackground/>
        <div class="questionnaire">
            <AnswerBubbles/>
            <QuestionNav/>
        </div>
    }
}
