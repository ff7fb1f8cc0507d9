use super::utils::{debounce, first_file, render_option_toggles, render_submit_button};
use crate::{Model, Msg};
use shared::validate::format_file_size;
use shared::{Intent, SourceKind};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            { render_file_input_area(model, ctx) }
            { render_selected_file(model, ctx) }
            { render_option_toggles(model, ctx, SourceKind::File) }
            <div class="button-container">
                { render_submit_button(model, ctx, SourceKind::File) }
            </div>
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let selected = input.files().as_ref().and_then(first_file);

        // Lets the same file be picked again after removing it.
        input.set_value("");

        selected.map(|file| Msg::Intent(Intent::ChooseFile(file)))
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"));
        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept=".txt,.pdf,.doc,.docx"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, move || trigger_file_input.emit(()))}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag & drop a document here, or click to browse"}</p>
                    <p class="file-types">{"Supported formats: TXT, PDF, DOC, DOCX (max 10MB)"}</p>
                </div>
            </div>
        </>
    }
}

fn render_selected_file(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(selected) = model.controller.selected_file() else {
        return html! {};
    };

    html! {
        <div class="selected-file">
            <i class="fa-solid fa-file-lines"></i>
            <span class="file-name" title={selected.name.clone()}>{ &selected.name }</span>
            <span class="file-size">{ format_file_size(selected.size) }</span>
            <button
                class="remove-btn"
                title="Remove this file"
                disabled={model.controller.is_loading(SourceKind::File)}
                onclick={ctx.link().callback(|e: MouseEvent| {
                    e.stop_propagation();
                    Msg::Intent(Intent::RemoveFile)
                })}
            >
                <i class="fa-solid fa-times" style="font-size: 10px;"></i>
            </button>
        </div>
    }
}
