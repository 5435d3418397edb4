//! Frame hosting one calculator page.

use leptos::prelude::*;

use crate::config::CalculatorConfig;

#[component]
pub fn CalculatorFrame(calculator: CalculatorConfig) -> impl IntoView {
    view! {
        <div class="panel">
            <iframe
                id=format!("calc-{}", calculator.id)
                class="calculator-frame"
                title=calculator.title
                src=calculator.src
                {..leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
            ></iframe>
        </div>
    }
}
