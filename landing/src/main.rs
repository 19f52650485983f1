// Made Landing Page, Leptos 0.8 Edition
// Developed with 💀 by The Made Team (c)2025

mod hooks;
mod sections;

use leptos::prelude::*;
use made_core::LandingConfig;
use sections::*;

const CONFIG_TOML: &str = include_str!("../config/landing.toml");

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = LandingConfig::load(CONFIG_TOML);
    tracing::debug!(?config, "landing config loaded");
    provide_context(config);

    view! {
        <Page />
    }
}
