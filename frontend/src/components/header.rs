use shared::Layout;
use yew::prelude::*;

/// Renders the application header
pub fn render_header(layout: Layout) -> Html {
    let subtitle = match layout {
        Layout::Full => "Paste text or upload a document to check whether it was written by AI",
        Layout::Compact => "Check whether text was written by AI",
    };

    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-robot"></i> {" AI Text Detector"}</h1>
            <p class="subtitle">{ subtitle }</p>
        </header>
    }
}
