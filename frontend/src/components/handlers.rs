use super::results::Section;
use super::utils::first_file;
use crate::api;
use crate::{Model, Msg};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::{ApiConfig, DetectionRequest, Effect, Intent, RequestToken};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

const SUCCESS_FLASH_MS: u32 = 3_000;

/// Runs an intent through the controller and carries out its effects.
pub fn handle_intent(model: &mut Model, ctx: &Context<Model>, intent: Intent<GlooFile>) -> bool {
    for effect in model.controller.dispatch(intent) {
        match effect {
            Effect::Submit { token, request } => {
                send_detection_request(ctx, &model.config.api, token, request)
            }
            Effect::ResultShown => {
                if let Some(timeout) = model.success_timeout.take() {
                    timeout.cancel();
                }
                let link = ctx.link().clone();
                model.success_timeout = Some(Timeout::new(SUCCESS_FLASH_MS, move || {
                    link.send_message(Msg::Intent(Intent::SuccessExpired));
                }));
                model.scroll_to_results = true;
            }
        }
    }
    true
}

pub fn handle_toggle_section(model: &mut Model, section: Section) -> bool {
    if !model.expanded.remove(&section) {
        model.expanded.insert(section);
    }
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let dropped = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list));

    if let Some(file) = dropped {
        ctx.link().send_message(Msg::Intent(Intent::ChooseFile(file)));
    }

    true
}

pub fn send_detection_request(
    ctx: &Context<Model>,
    api: &ApiConfig,
    token: RequestToken,
    request: DetectionRequest<GlooFile>,
) {
    spawn_local({
        let link = ctx.link().clone();
        let api = api.clone();

        async move {
            let outcome = api::submit(&api, request).await;
            if let Err(e) = &outcome {
                log::warn!("Request #{} ({}) failed: {:?}", token.seq, token.control, e);
            }
            link.send_message(Msg::Intent(Intent::Completed(token, outcome)));
        }
    });
}

pub fn check_api_health(ctx: &Context<Model>, api: &ApiConfig) {
    spawn_local({
        let link = ctx.link().clone();
        let api = api.clone();

        async move {
            match api::probe_health(&api).await {
                Ok(body) => log::info!("API connection successful: {}", body),
                Err(e) => {
                    log::warn!("API not reachable: {:?}", e);
                    link.send_message(Msg::Intent(Intent::ApiUnreachable));
                }
            }
        }
    });
}

pub fn scroll_to_results() {
    let results = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("results-section"));
    if let Some(element) = results {
        element.scroll_into_view();
    }
}
