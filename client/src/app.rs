//! Page discovery and mounting.
//!
//! The host pages are server rendered. Each controller attaches only if its
//! container is present, reads its configuration from the container's
//! `data-*` attributes, and mounts into that container.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::pages::chat::ChatPage;
use crate::pages::questionnaire::QuestionnairePage;
use crate::state::page::{ChatPageConfig, QuestionnairePageConfig};

const CHAT_CONTAINER: &str = ".chat-container";
const QUESTIONNAIRE_CONTAINER: &str = ".questionnaire-container";

fn find_container(selector: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

fn dataset_getter(el: &web_sys::HtmlElement) -> impl Fn(&str) -> Option<String> {
    let dataset = el.dataset();
    move |key| dataset.get(key)
}

/// Mount every page controller whose container exists.
pub fn mount_pages() {
    if let Some(el) = find_container(CHAT_CONTAINER) {
        match ChatPageConfig::from_dataset(dataset_getter(&el)) {
            Ok(config) => {
                if let Err(err) = el.class_list().remove_1("hidden") {
                    log::warn!("could not show chat container: {}", crate::error::describe_js(&err));
                }
                leptos::mount::mount_to(el, move || view! { <ChatPage config/> }).forget();
            }
            Err(err) => log::error!("chat not started: {err}"),
        }
    }

    if let Some(el) = find_container(QUESTIONNAIRE_CONTAINER) {
        match QuestionnairePageConfig::from_dataset(dataset_getter(&el)) {
            Ok(config) => {
                leptos::mount::mount_to(el, move || view! { <QuestionnairePage config/> }).forget();
            }
            Err(err) => log::error!("questionnaire not started: {err}"),
        }
    }
}
