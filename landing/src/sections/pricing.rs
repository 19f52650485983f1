use crate::hooks::use_entered;
use leptos::html::Section;
use leptos::prelude::*;
use made_core::content::{BillingPeriod, Plan, content};

#[component]
pub fn Pricing() -> impl IntoView {
    let (period, set_period) = signal(BillingPeriod::Monthly);
    let section = NodeRef::<Section>::new();
    let entered = use_entered(section);

    let toggle_class = move |p: BillingPeriod| {
        if period.get() == p { "billing-option active" } else { "billing-option" }
    };

    let plans = content()
        .plans
        .iter()
        .map(|plan| view! { <PlanCard plan=plan period=period /> })
        .collect::<Vec<_>>();

    view! {
        <section
            id="pricing"
            class=move || if entered.get() { "pricing snap-section entered" } else { "pricing snap-section" }
            node_ref=section
        >
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Pricing"</p>
                    <h2 class="section-title">"Start free. Scale when you're ready."</h2>
                </div>
                <div class="billing-toggle">
                    <button
                        class=move || toggle_class(BillingPeriod::Monthly)
                        on:click=move |_| set_period.set(BillingPeriod::Monthly)
                    >
                        "Monthly"
                    </button>
                    <button
                        class=move || toggle_class(BillingPeriod::Annual)
                        on:click=move |_| set_period.set(BillingPeriod::Annual)
                    >
                        "Annual"
                        <span class="billing-discount">"-20%"</span>
                    </button>
                </div>
                <div class="plans-grid">{plans}</div>
            </div>
        </section>
    }
}

#[component]
fn PlanCard(plan: &'static Plan, period: ReadSignal<BillingPeriod>) -> impl IntoView {
    let class = if plan.popular { "plan popular" } else { "plan" };
    view! {
        <article class=class>
            {plan.popular.then(|| view! { <span class="plan-badge">"Most Popular"</span> })}
            <div class=format!("plan-icon bg-gradient-to-r {}", plan.gradient)>{plan.icon.clone()}</div>
            <h3 class="plan-name">{plan.name.clone()}</h3>
            <p class="plan-description">{plan.description.clone()}</p>
            <p class="plan-price">
                <span class="plan-amount">{move || plan.display_price(period.get())}</span>
                {(!plan.is_free()).then(|| view! { <span class="plan-period">{plan.price_label.clone()}</span> })}
            </p>
            {move || plan.savings_for(period.get()).map(|s| view! { <p class="plan-savings">{s.to_string()}</p> })}
            <ul class="plan-features">
                {plan.features.iter().map(|f| view! { <li class="plan-feature">{f.clone()}</li> }).collect::<Vec<_>>()}
                {plan.limitations.iter().map(|l| view! { <li class="plan-limitation">{l.clone()}</li> }).collect::<Vec<_>>()}
            </ul>
            <a href="#cta" class="plan-cta">{plan.cta.clone()}</a>
        </article>
    }
}
