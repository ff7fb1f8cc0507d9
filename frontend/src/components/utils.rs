use crate::{Model, Msg};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::controller::OptionKind;
use shared::{Intent, SelectedFile, SourceKind};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{FileList, HtmlInputElement};
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || inner_callback()));
    })
}

/// Only the first file counts; a new pick replaces the old one.
pub fn first_file(file_list: &FileList) -> Option<SelectedFile<GlooFile>> {
    file_list.item(0).map(|file| {
        let file = GlooFile::from(file);
        SelectedFile {
            name: file.name(),
            size: file.size(),
            file,
        }
    })
}

pub fn render_option_toggles(model: &Model, ctx: &Context<Model>, control: SourceKind) -> Html {
    let options = model.controller.options(control);
    let toggle = |kind: OptionKind| {
        ctx.link().callback(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Intent(Intent::SetOption(control, kind, input.checked()))
        })
    };

    html! {
        <div class="analysis-options">
            <label>
                <input type="checkbox" checked={options.detailed} onchange={toggle(OptionKind::Detailed)} />
                {" Detailed analysis"}
            </label>
            <label>
                <input type="checkbox" checked={options.explain} onchange={toggle(OptionKind::Explain)} />
                {" Show explanation"}
            </label>
        </div>
    }
}

pub fn render_submit_button(model: &Model, ctx: &Context<Model>, control: SourceKind) -> Html {
    let loading = model.controller.is_loading(control);
    let label = match control {
        SourceKind::Text => " Analyze Text",
        SourceKind::File => " Analyze File",
    };

    html! {
        <button
            class={classes!("analyze-btn", loading.then_some("loading"))}
            disabled={!model.controller.can_submit(control)}
            onclick={ctx.link().callback(move |_| Msg::Intent(Intent::Submit(control)))}
        >
            {
                if loading {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-magnifying-glass"></i>{ label }</> }
                }
            }
        </button>
    }
}

pub fn render_notices(model: &Model, ctx: &Context<Model>) -> Html {
    let controller = &model.controller;

    html! {
        <>
            if let Some(warning) = controller.warning() {
                <div class="warning-message">
                    <i class="fa-solid fa-triangle-exclamation"></i>
                    <p>{ warning }</p>
                </div>
            }
            if let Some(error_msg) = controller.error() {
                <div class="error-message">
                    <i class="fa-solid fa-circle-exclamation"></i>
                    <p>{ error_msg }</p>
                    <button
                        class="dismiss-btn"
                        title="Dismiss"
                        onclick={ctx.link().callback(|_| Msg::Intent(Intent::DismissError))}
                    >
                        <i class="fa-solid fa-times"></i>
                    </button>
                </div>
            }
            if controller.success_visible() {
                <div class="success-message">
                    <i class="fa-solid fa-circle-check"></i>
                    <p>{"Analysis complete!"}</p>
                </div>
            }
        </>
    }
}
