use crate::Model;
use chrono::Local;
use shared::format::percent;
use shared::{HistoryEntry, SourceKind};
use yew::prelude::*;

const HISTORY_SHOWN: usize = 5;

pub fn render_history_panel(model: &Model) -> Html {
    let history = model.controller.history();
    let stats = history.stats();
    let average = history
        .average_confidence()
        .map(percent)
        .unwrap_or_else(|| "N/A".to_string());

    html! {
        <aside class="history-panel">
            <div class="session-stats">
                <h3>{"Session Stats"}</h3>
                <div class="stat">
                    <div class="stat-label">{"Total Detections"}</div>
                    <div class="stat-value">{ stats.total_detections.to_string() }</div>
                </div>
                <div class="stat">
                    <div class="stat-label">{"Average Confidence"}</div>
                    <div class="stat-value">{ average }</div>
                </div>
            </div>

            <h3>{"Recent Analyses"}</h3>
            if history.is_empty() {
                <p class="empty-state">{"No analyses yet"}</p>
            } else {
                <ul class="history-list">
                    { for history.recent(HISTORY_SHOWN).iter().map(render_history_item) }
                </ul>
            }
        </aside>
    }
}

fn render_history_item(entry: &HistoryEntry) -> Html {
    let category = entry.result.category();
    let source = match (entry.source, &entry.filename) {
        (SourceKind::File, Some(name)) => name.clone(),
        (SourceKind::File, None) => "File upload".to_string(),
        (SourceKind::Text, _) => "Text input".to_string(),
    };
    let time = entry.submitted_at.with_timezone(&Local).format("%H:%M:%S").to_string();

    html! {
        <li class={classes!("history-item", category.color_token())}>
            <span class={classes!("verdict-icon", category.color_token())}>{ category.icon() }</span>
            <div class="history-details">
                <span class="history-verdict">{ &entry.result.verdict }</span>
                <span class="history-source" title={source.clone()}>{ source }</span>
            </div>
            <div class="history-meta">
                <span class="history-confidence">{ percent(entry.result.confidence_score) }</span>
                <span class="history-time">{ time }</span>
            </div>
        </li>
    }
}
