use crate::{Model, Msg};
use shared::format::DisplayModel;
use shared::{DisplayedResult, Explanation, Layout};
use yew::prelude::*;

/// Collapsible parts of the full layout's result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Methods,
    Traits,
    Metrics,
    Explanation,
}

impl Section {
    fn title(self) -> &'static str {
        match self {
            Section::Methods => "Detection Methods",
            Section::Traits => "Traits Detected",
            Section::Metrics => "Detailed Analysis",
            Section::Explanation => "Explanation",
        }
    }
}

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(shown) = model.controller.displayed() else {
        return html! {};
    };
    let display = &shown.model;

    html! {
        <div id="results-section" class={classes!("results-container", format!("verdict-{}", display.color))}>
            { render_verdict(display) }
            { render_probability_bar(display) }
            { render_stats(display) }
            {
                match model.config.layout {
                    Layout::Full => render_accordion(model, ctx, shown),
                    Layout::Compact => render_compact_details(shown),
                }
            }
        </div>
    }
}

fn render_verdict(display: &DisplayModel) -> Html {
    html! {
        <div class="result-header">
            <div class={classes!("verdict-badge", display.color)}>
                <span class={classes!("verdict-icon", display.color)}>{ display.icon }</span>
                <h2 class="verdict-text">{ &display.verdict_label }</h2>
            </div>
        </div>
    }
}

fn render_probability_bar(display: &DisplayModel) -> Html {
    html! {
        <div class="probability-bar">
            <div class="bar-labels">
                <span>{"Human"}</span>
                <span>{"AI"}</span>
            </div>
            <div class="bar">
                <div class="bar-fill" style={format!("width: {}%", display.human_bar_width)}></div>
            </div>
        </div>
    }
}

fn render_stats(display: &DisplayModel) -> Html {
    let stat = |label: &'static str, value: String| {
        html! {
            <div class="stat">
                <div class="stat-label">{ label }</div>
                <div class="stat-value">{ value }</div>
            </div>
        }
    };

    html! {
        <div class="stats-grid">
            { stat("Human Probability", display.human_percent.clone()) }
            { stat("AI Probability", display.ai_percent.clone()) }
            { stat("Confidence", display.confidence.clone()) }
            { stat("Word Count", display.word_count_label()) }
        </div>
    }
}

fn render_accordion(model: &Model, ctx: &Context<Model>, shown: &DisplayedResult) -> Html {
    let display = &shown.model;
    let mut sections = vec![
        (Section::Methods, render_methods(display)),
        (Section::Traits, render_traits(display)),
    ];
    if shown.options.detailed && !display.metrics.is_empty() {
        sections.push((Section::Metrics, render_metrics(display)));
    }
    if let Some(explanation) = &shown.explanation {
        sections.push((Section::Explanation, render_explanation(explanation)));
    }

    html! {
        <div class="accordion">
            { for sections.into_iter().map(|(section, body)| {
                let open = model.expanded.contains(&section);
                html! {
                    <div class={classes!("accordion-item", open.then_some("open"))} key={section.title()}>
                        <button
                            class="accordion-header"
                            onclick={ctx.link().callback(move |_| Msg::ToggleSection(section))}
                        >
                            { section.title() }
                            <i class={classes!("fa-solid", if open { "fa-chevron-up" } else { "fa-chevron-down" })}></i>
                        </button>
                        if open {
                            <div class="accordion-body">{ body }</div>
                        }
                    </div>
                }
            })}
        </div>
    }
}

fn render_compact_details(shown: &DisplayedResult) -> Html {
    let display = &shown.model;

    html! {
        <>
            if shown.options.detailed && !display.metrics.is_empty() {
                <div class="detailed-section">
                    <h3>{ Section::Metrics.title() }</h3>
                    { render_metrics(display) }
                </div>
            }
            if let Some(explanation) = &shown.explanation {
                <div class="explanation-section">
                    <h3>{ Section::Explanation.title() }</h3>
                    { render_explanation(explanation) }
                </div>
            }
        </>
    }
}

fn render_methods(display: &DisplayModel) -> Html {
    if display.method_labels.is_empty() {
        return html! { <p class="empty-state">{"No detection methods reported"}</p> };
    }

    html! {
        <ul class="method-list">
            { for display.method_labels.iter().map(|label| html! { <li class="method-tag">{ label }</li> }) }
        </ul>
    }
}

fn render_traits(display: &DisplayModel) -> Html {
    if let Some(placeholder) = display.traits_placeholder() {
        return html! { <p class="empty-state">{ placeholder }</p> };
    }

    html! {
        <ul class="trait-list">
            { for display.traits.iter().map(|t| html! { <li>{ t }</li> }) }
        </ul>
    }
}

fn render_metrics(display: &DisplayModel) -> Html {
    html! {
        <div class="analysis-details">
            { for display.metrics.iter().map(|row| html! {
                <div class="analysis-item">
                    <span class="analysis-key">{ format!("{}:", row.label) }</span>
                    <span class="analysis-value">{ &row.value }</span>
                </div>
            })}
        </div>
    }
}

fn render_explanation(explanation: &Explanation) -> Html {
    html! {
        <div class="explanation-content">
            <p><strong>{"Analysis Result: "}</strong>{ &explanation.summary }</p>
            <p><strong>{"Probability Breakdown:"}</strong></p>
            <ul>
                <li>{ format!("AI-Generated: {}", explanation.ai_percent) }</li>
                <li>{ format!("Human-Written: {}", explanation.human_percent) }</li>
            </ul>
            if !explanation.indicators.is_empty() {
                <p><strong>{"Key Indicators:"}</strong></p>
                <ul>
                    { for explanation.indicators.iter().map(|i| html! { <li>{ i }</li> }) }
                </ul>
            }
            <p><strong>{"Detection Methods: "}</strong>{ &explanation.methods_note }</p>
            <p>{ explanation.closing }</p>
        </div>
    }
}
