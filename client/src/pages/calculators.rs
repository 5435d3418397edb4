//! Main view: the embedded calculators behind a tab list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable with a valid subscription. Each configured calculator is
//! a page served by the host and framed into its own tab panel.
//!
//! ERROR HANDLING
//! ==============
//! `init_calculators` checks the configured list before anything renders. A
//! bad list replaces the whole view with the reload screen rather than
//! showing empty tabs.

#[cfg(test)]
#[path = "calculators_test.rs"]
mod calculators_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::components::calculator_frame::CalculatorFrame;
use crate::config::{AppConfig, CalculatorConfig};
use crate::pages::error::ErrorScreen;
use crate::state::ui::UiState;

/// Why the calculator list cannot be shown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    #[error("no calculators configured")]
    NoneConfigured,

    #[error("calculator {0:?} has no source page")]
    MissingSource(String),

    #[error("calculator id {0:?} is used more than once")]
    DuplicateId(String),
}

/// Validate the configured calculators and return them in tab order.
pub fn init_calculators(configured: &[CalculatorConfig]) -> Result<Vec<CalculatorConfig>, CalculatorError> {
    if configured.is_empty() {
        return Err(CalculatorError::NoneConfigured);
    }
    let mut seen = HashSet::new();
    for calc in configured {
        if calc.src.trim().is_empty() {
            return Err(CalculatorError::MissingSource(calc.id.clone()));
        }
        if !seen.insert(calc.id.as_str()) {
            return Err(CalculatorError::DuplicateId(calc.id.clone()));
        }
    }
    Ok(configured.to_vec())
}

fn tab_id(index: usize) -> String {
    format!("tabBtn{}", index + 1)
}

fn panel_id(index: usize) -> String {
    format!("panel-{}", index + 1)
}

#[component]
pub fn CalculatorsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    match init_calculators(&config.calculators) {
        Ok(calculators) => view! { <CalculatorTabs calculators/> }.into_any(),
        Err(e) => {
            log::error!("calculator setup failed: {e}");
            view! { <ErrorScreen message="Failed to load the calculators."/> }.into_any()
        }
    }
}

#[component]
fn CalculatorTabs(calculators: Vec<CalculatorConfig>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let count = calculators.len();
    let active = Memo::new(move |_| ui.with(|u| u.active_tab.min(count - 1)));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "ArrowRight" => ui.update(|u| u.step_tab(true, count)),
        "ArrowLeft" => ui.update(|u| u.step_tab(false, count)),
        _ => {}
    };

    let tabs = calculators
        .iter()
        .enumerate()
        .map(|(i, calc)| {
            let title = calc.title.clone();
            view! {
                <button
                    id=tab_id(i)
                    class="tab-btn"
                    class:active=move || active.get() == i
                    role="tab"
                    aria-controls=panel_id(i)
                    aria-selected=move || (active.get() == i).to_string()
                    tabindex=move || if active.get() == i { "0" } else { "-1" }
                    on:click=move |_| {
                        ui.update(|u| {
                            u.select_tab(i, count);
                        });
                    }
                >
                    {title}
                </button>
            }
        })
        .collect_view();

    let panels = calculators
        .into_iter()
        .enumerate()
        .map(|(i, calculator)| {
            view! {
                <section
                    id=panel_id(i)
                    class="tab-panel"
                    role="tabpanel"
                    aria-labelledby=tab_id(i)
                    hidden=move || active.get() != i
                >
                    <CalculatorFrame calculator/>
                </section>
            }
        })
        .collect_view();

    view! {
        <div class="calculators">
            <div class="tab-list" role="tablist" aria-label="Calculators" on:keydown=on_keydown>
                {tabs}
            </div>
            {panels}
        </div>
    }
}
