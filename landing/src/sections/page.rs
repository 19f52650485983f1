use super::{AgentShowcase, CallToAction, Features, Footer, Hero, Nav, Pricing, Testimonials};
use leptos::html::Main;
use leptos::prelude::*;
use made_core::scroll::{Backdrop, PageSection, SectionTracker, Theme};
use made_core::showcase::showcases;
use made_core::{LandingConfig, catalog};

/// Scroll container, section-bound background and the palette toggle.
#[component]
pub fn Page() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let sections = PageSection::all(catalog());
    let backdrop = StoredValue::new(Backdrop::new(catalog()));
    let tracker = StoredValue::new(SectionTracker::new(sections.len()));
    let (current, set_current) = signal(0usize);
    let (theme, set_theme) = signal(Theme::default());
    let container = NodeRef::<Main>::new();

    let on_scroll = move |_| {
        let Some(el) = container.get() else {
            return;
        };
        let moved = tracker
            .try_update_value(|t| {
                t.on_scroll(
                    f64::from(el.scroll_top()),
                    f64::from(el.scroll_height()),
                    f64::from(el.client_height()),
                )
            })
            .flatten();
        if let Some(index) = moved {
            set_current.set(index);
        }
    };

    let background = move || {
        let (section, theme) = (current.get(), theme.get());
        backdrop.with_value(|b| format!("background: {};", b.gradient(section, theme)))
    };

    let agents = catalog().agents();
    let total = agents.len();
    let agent_sections = agents
        .iter()
        .enumerate()
        .map(|(index, agent)| {
            let profile = showcases().profile(&agent.id).cloned();
            view! { <AgentShowcase agent=agent profile=profile index=index total=total /> }
        })
        .collect::<Vec<_>>();

    let main_class = if config.scroll.section_snap { "page snap" } else { "page" };

    view! {
        <div class="backdrop" style=background></div>
        <button
            class="theme-toggle"
            on:click=move |_| set_theme.update(|t| *t = t.toggled())
        >
            {move || theme.get().toggle_label()}
        </button>
        <Nav />
        <main class=main_class node_ref=container on:scroll=on_scroll>
            <Hero />
            {agent_sections}
            <Features />
            <Testimonials />
            <Pricing />
            <CallToAction />
            <Footer />
        </main>
    }
}
