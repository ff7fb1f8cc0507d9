use super::upload_section::render_upload_section;
use super::utils::{render_option_toggles, render_submit_button};
use crate::{Model, Msg};
use shared::validate::{MIN_TEXT_CHARS, text_length};
use shared::{Intent, Sample, SourceKind};
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

pub fn render_input_tabs(model: &Model, ctx: &Context<Model>) -> Html {
    let active = model.controller.active_tab();
    let link = ctx.link();
    let tab = |kind: SourceKind, icon: &'static str, label: &'static str| {
        html! {
            <button
                class={classes!("tab", (active == kind).then_some("active"))}
                onclick={link.callback(move |_| Msg::Intent(Intent::SwitchTab(kind)))}
            >
                <i class={classes!("fa-solid", icon)}></i>{ label }
            </button>
        }
    };

    html! {
        <>
            <div class="tabs">
                { tab(SourceKind::Text, "fa-keyboard", " Text Input") }
                { tab(SourceKind::File, "fa-file-arrow-up", " File Upload") }
            </div>
            {
                match active {
                    SourceKind::Text => render_text_section(model, ctx),
                    SourceKind::File => render_upload_section(model, ctx),
                }
            }
        </>
    }
}

fn render_text_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_input = link.callback(|e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::Intent(Intent::EditText(textarea.value()))
    });

    let trimmed_chars = text_length(model.controller.text().trim());

    html! {
        <div class="text-input-section">
            <textarea
                id="text-input"
                placeholder="Paste or type at least 50 characters of text..."
                value={model.controller.text().to_string()}
                oninput={handle_input}
            />
            <div class="text-meta">
                <span class={classes!("char-count", (trimmed_chars < MIN_TEXT_CHARS).then_some("too-short"))}>
                    { format!("{} / {} characters minimum", trimmed_chars, MIN_TEXT_CHARS) }
                </span>
                <span class="samples">
                    { for [Sample::Ai, Sample::Human].into_iter().map(|sample| html! {
                        <button
                            class="sample-btn"
                            onclick={link.callback(move |_| Msg::Intent(Intent::LoadSample(sample)))}
                        >
                            { sample.to_string() }
                        </button>
                    })}
                </span>
            </div>
            { render_option_toggles(model, ctx, SourceKind::Text) }
            <div class="button-container">
                { render_submit_button(model, ctx, SourceKind::Text) }
            </div>
        </div>
    }
}
