mod api;
mod components;
mod config;
mod session;

use components::handlers;
use components::results::Section;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::{AppConfig, Controller, Intent, Layout, SessionId};
use std::collections::HashSet;
use web_sys::DragEvent;
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // Everything that changes page state goes through the controller
    Intent(Intent<GlooFile>),

    // UI states
    SetDragging(bool),
    ToggleSection(Section),

    // Input events
    HandleDrop(DragEvent),
}

// Main component
pub struct Model {
    pub(crate) config: AppConfig,
    pub(crate) session_id: SessionId,
    pub(crate) controller: Controller<GlooFile>,
    pub(crate) is_dragging: bool,
    pub(crate) expanded: HashSet<Section>,
    pub(crate) success_timeout: Option<Timeout>,
    pub(crate) scroll_to_results: bool,
    _window_listeners: Vec<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = config::load();
        let session_id = session::load_or_create();
        log::info!("Session {}", session_id);

        let mut model = Self {
            config,
            session_id,
            controller: Controller::new(),
            is_dragging: false,
            expanded: HashSet::from([Section::Methods]),
            success_timeout: None,
            scroll_to_results: false,
            _window_listeners: Vec::new(),
        };

        // A file dropped outside the drop zone would otherwise replace the page.
        let window = web_sys::window().expect("no global `window` exists");
        let options = EventListenerOptions::enable_prevent_default();
        for event in ["dragover", "drop"] {
            model._window_listeners.push(EventListener::new_with_options(
                &window,
                event,
                options,
                |event| event.prevent_default(),
            ));
        }

        handlers::check_api_health(ctx, &model.config.api);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Intent(intent) => handlers::handle_intent(self, ctx, intent),

            Msg::SetDragging(is_dragging) => {
                let changed = self.is_dragging != is_dragging;
                self.is_dragging = is_dragging;
                changed
            }
            Msg::ToggleSection(section) => handlers::handle_toggle_section(self, section),

            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let full = self.config.layout == Layout::Full;

        html! {
            <div class={classes!("container", full.then_some("layout-full"))}>
                { components::header::render_header(self.config.layout) }

                <main class="main-content">
                    <section class="input-panel">
                        { components::input_tabs::render_input_tabs(self, ctx) }
                        { components::utils::render_notices(self, ctx) }
                        { components::results::render_results(self, ctx) }
                    </section>
                    {
                        if full {
                            components::history_panel::render_history_panel(self)
                        } else {
                            html! {}
                        }
                    }
                </main>

                <footer class="app-footer">
                    <p>{"AI Text Detector | Fullstack Rust WASM"}</p>
                    {
                        if full {
                            html! { <p class="session-id">{ format!("Session: {}", self.session_id) }</p> }
                        } else {
                            html! {}
                        }
                    }
                </footer>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if std::mem::take(&mut self.scroll_to_results) {
            handlers::scroll_to_results();
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("AI Text Detector starting...");
    yew::Renderer::<Model>::new().render();
}
