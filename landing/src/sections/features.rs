use crate::hooks::use_entered;
use leptos::html::Section;
use leptos::prelude::*;
use made_core::LandingConfig;
use made_core::content::{Feature, FeatureDemo, content};

#[component]
pub fn Features() -> impl IntoView {
    let interval = use_context::<LandingConfig>()
        .unwrap_or_default()
        .features
        .typing_interval();
    let demo = StoredValue::new(FeatureDemo::new(content().features.clone(), interval));
    let (active, set_active) = signal(0usize);
    let (response, set_response) = signal(demo.with_value(|d| d.response().to_string()));
    let (typing, set_typing) = signal(false);
    let timer: StoredValue<Option<IntervalHandle>> = StoredValue::new(None);
    let section = NodeRef::<Section>::new();
    let entered = use_entered(section);

    let stop = move || {
        if let Some(handle) = timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
        set_typing.set(false);
    };

    let on_tick = move || {
        let Some((text, running)) = demo.try_update_value(|d| {
            d.tick();
            (d.response().to_string(), d.is_typing())
        }) else {
            return;
        };
        set_response.set(text);
        if !running {
            stop();
        }
    };

    let select = move |index: usize| {
        if !demo.try_update_value(|d| d.select(index)).unwrap_or(false) {
            return;
        }
        stop();
        set_active.set(index);
        set_response.set(String::new());
        match set_interval_with_handle(on_tick, interval) {
            Ok(handle) => {
                timer.set_value(Some(handle));
                set_typing.set(true);
            }
            Err(e) => {
                // Without a timer, show the answer at once.
                tracing::warn!(?e, "feature typing timer unavailable");
                if let Some(text) = demo.with_value(|d| d.active().map(|f| f.response.clone())) {
                    set_response.set(text);
                }
            }
        }
    };

    on_cleanup(stop);

    let cards = content()
        .features
        .iter()
        .enumerate()
        .map(|(i, feature)| {
            view! {
                <FeatureCard
                    feature=feature
                    active=Signal::derive(move || active.get() == i)
                    on_select=Callback::new(move |_| select(i))
                />
            }
        })
        .collect::<Vec<_>>();

    let prompt = move || {
        demo.with_value(|d| d.features().get(active.get()).map(|f| f.prompt.clone()))
            .unwrap_or_default()
    };

    view! {
        <section
            id="features"
            class=move || if entered.get() { "features snap-section entered" } else { "features snap-section" }
            node_ref=section
        >
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Features"</p>
                    <h2 class="section-title">"Everything a creator needs"</h2>
                    <p class="section-description">
                        "Pick a capability and watch your team answer."
                    </p>
                </div>
                <div class="features-layout">
                    <div class="features-grid">{cards}</div>
                    <div class="feature-chat">
                        <div class="chat-bubble chat-prompt">{prompt}</div>
                        <div class="chat-bubble chat-response">
                            {move || response.get()}
                            <Show when=move || typing.get()>
                                <span class="caret">"|"</span>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    feature: &'static Feature,
    active: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    let gradient = feature.gradient.clone();
    view! {
        <button
            class=move || if active.get() { format!("feature-card active {gradient}") } else { "feature-card".to_string() }
            on:click=move |_| on_select.run(())
        >
            <div class="feature-icon">{feature.icon.clone()}</div>
            <h3 class="feature-title">{feature.title.clone()}</h3>
            <p class="feature-description">{feature.description.clone()}</p>
        </button>
    }
}
