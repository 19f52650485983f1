use crate::hooks::use_entered;
use leptos::html::Section;
use leptos::prelude::*;
use made_core::LandingConfig;
use made_core::content::content;
use made_core::countdown::Countdown;
use std::time::Duration;

/// Launch offer with a live countdown. The countdown stops at 00:00:00 and
/// its interval is released on unmount.
#[component]
pub fn CallToAction() -> impl IntoView {
    let cfg = use_context::<LandingConfig>().unwrap_or_default().cta;
    let (countdown, set_countdown) = signal(Countdown::from_hours(cfg.countdown_hours));
    let timer: StoredValue<Option<IntervalHandle>> = StoredValue::new(None);
    let section = NodeRef::<Section>::new();
    let entered = use_entered(section);

    let stop = move || {
        if let Some(handle) = timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    let tick = move || {
        set_countdown.update(|c| {
            c.tick();
        });
        if countdown.get_untracked().is_finished() {
            tracing::debug!("launch countdown finished");
            stop();
        }
    };

    match set_interval_with_handle(tick, Duration::from_secs(1)) {
        Ok(handle) => timer.set_value(Some(handle)),
        Err(e) => tracing::warn!(?e, "countdown timer unavailable"),
    }
    on_cleanup(stop);

    let cta = &content().cta;
    let props = cta
        .value_props
        .iter()
        .map(|p| {
            view! {
                <li class="cta-prop">
                    <span class="cta-prop-icon">{p.icon.clone()}</span>
                    {p.text.clone()}
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section
            id="cta"
            class=move || if entered.get() { "cta snap-section entered" } else { "cta snap-section" }
            node_ref=section
        >
            <div class="container">
                <span class="cta-badge">{cta.badge.clone()}</span>
                <h2 class="cta-headline">{cta.headline.clone()}</h2>
                <p class="cta-body">{cta.body.clone()}</p>
                <div class="cta-offer">
                    <span class="cta-countdown">{move || countdown.get().to_string()}</span>
                    <span class="cta-spots">{format!("Only {} spots left today", cfg.spots_left)}</span>
                </div>
                <ul class="cta-props">{props}</ul>
                <a href="#pricing" class="cta-button">{cta.button.clone()}</a>
                <p class="cta-proof">{cta.social_proof.clone()}</p>
                <p class="cta-rating">"★★★★★ " {cta.rating.clone()}</p>
            </div>
        </section>
    }
}
