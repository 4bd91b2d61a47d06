//! Current question text and its multi-select answer bubbles.

use leptos::prelude::*;

use crate::pages::questionnaire::run_load;
use crate::state::questionnaire::{QuestionView, QuestionnaireState};
use crate::util::audio::{Cue, play_cue};

#[component]
pub fn AnswerBubbles() -> impl IntoView {
    let state = expect_context::<RwSignal<QuestionnaireState>>();

    let on_retry = move |_| {
        if let Some(ticket) = state.try_update(QuestionnaireState::retry_load) {
            run_load(state, ticket);
        }
    };

    let question_view = Memo::new(move |_| state.with(|s| s.view().clone()));

    move || match question_view.get() {
        QuestionView::Loading => view! { <p id="question-text" class="question-text question-text--loading">"Loading..."</p> }.into_any(),
        QuestionView::Failed(reason) => view! {
            <div class="question-error">
                <p id="question-text" class="question-text">"Could not load this question."</p>
                <p class="question-error__detail">{reason}</p>
                <button class="btn" type="button" on:click=on_retry>"Try Again"</button>
            </div>
        }
        .into_any(),
        QuestionView::Ready(question) => {
            let bubbles = question
                .options
                .into_iter()
                .map(|option| {
                    let label = option.clone();
                    let selected = {
                        let option = option.clone();
                        move || state.with(|s| s.is_selected(&option))
                    };
                    let on_click = move |_| {
                        play_cue(Cue::Pop);
                        state.update(|s| {
                            s.toggle(&option);
                        });
                    };
                    view! {
                        <div class="answer-bubble" class:selected=selected on:click=on_click>
                            {label}
                        </div>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <h2 id="question-text" class="question-text">{question.text}</h2>
                <div id="options-container" class="options-container">{bubbles}</div>
            }
            .into_any()
        }
    }
}
