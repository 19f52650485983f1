use crate::hooks::use_entered;
use leptos::html::Section;
use leptos::prelude::*;
use made_core::content::{Metric, Testimonial, content};

#[component]
pub fn Testimonials() -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let entered = use_entered(section);

    let metrics = content()
        .metrics
        .iter()
        .map(|metric| view! { <MetricTile metric=metric /> })
        .collect::<Vec<_>>();
    let cards = content()
        .testimonials
        .iter()
        .enumerate()
        .map(|(i, t)| view! { <TestimonialCard testimonial=t order=i /> })
        .collect::<Vec<_>>();

    view! {
        <section
            id="testimonials"
            class=move || if entered.get() { "testimonials snap-section entered" } else { "testimonials snap-section" }
            node_ref=section
        >
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Success stories"</p>
                    <h2 class="section-title">"Creators who made it"</h2>
                </div>
                <div class="metrics-grid">{metrics}</div>
                <div class="testimonials-grid">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn MetricTile(metric: &'static Metric) -> impl IntoView {
    view! {
        <div class="metric">
            <span class="metric-icon">{metric.icon.clone()}</span>
            <span class="metric-value">{metric.value.clone()}</span>
            <span class="metric-label">{metric.label.clone()}</span>
        </div>
    }
}

#[component]
fn TestimonialCard(testimonial: &'static Testimonial, order: usize) -> impl IntoView {
    let t = testimonial;
    view! {
        <article class="testimonial" style=format!("animation-delay: {:.1}s;", order as f64 * 0.1)>
            <header class="testimonial-author">
                <span class="testimonial-avatar">{t.avatar.clone()}</span>
                <div>
                    <p class="testimonial-name">
                        {t.name.clone()}
                        {t.verified.then(|| view! { <span class="testimonial-verified" title="Verified">"✓"</span> })}
                    </p>
                    <p class="testimonial-handle">{format!("{} · {}", t.handle, t.platform)}</p>
                </div>
            </header>
            <blockquote class="testimonial-quote">{format!("\"{}\"", t.quote)}</blockquote>
            <dl class="testimonial-stats">
                <div><dt>"Growth"</dt><dd>{t.growth.clone()}</dd></div>
                <div><dt>"Revenue"</dt><dd>{t.revenue.clone()}</dd></div>
                <div><dt>"Time"</dt><dd>{t.time.clone()}</dd></div>
            </dl>
        </article>
    }
}
