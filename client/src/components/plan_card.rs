//! One subscription plan with its price and a buy button.

#[cfg(test)]
#[path = "plan_card_test.rs"]
mod plan_card_test;

use leptos::prelude::*;

use crate::state::plans::Plan;

fn card_class(plan: Plan) -> &'static str {
    if plan.is_popular() { "plan-card plan-card--popular" } else { "plan-card" }
}

#[component]
pub fn PlanCard(plan: Plan, on_select: Callback<Plan>) -> impl IntoView {
    view! {
        <div class=card_class(plan) data-plan=plan.key()>
            {plan.is_popular().then(|| view! { <span class="plan-card__badge">"Most popular"</span> })}
            <h3 class="plan-card__name">{plan.name()}</h3>
            <p class="plan-card__price">
                {plan.price()}
                <span class="plan-card__period">{plan.period()}</span>
            </p>
            {plan.discount().map(|d| view! { <p class="plan-card__discount">{d}</p> })}
            <button class="btn btn-primary btn-block" type="button" on:click=move |_| on_select.run(plan)>
                "Subscribe"
            </button>
        </div>
    }
}
