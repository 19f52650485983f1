use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#hero" class="nav-brand">
                    <img class="nav-logo" src="assets/made-logo.svg" alt="Made" />
                    <span class="nav-title">"Made"</span>
                </a>
                <a href="#pricing" class="nav-cta">"Get Started"</a>
            </div>
        </nav>
    }
}
