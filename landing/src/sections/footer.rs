use leptos::prelude::*;
use made_core::content::content;

#[component]
pub fn Footer() -> impl IntoView {
    let footer = &content().footer;
    let links = footer
        .links
        .iter()
        .map(|l| view! { <a href=l.href.clone() class="footer-link">{l.label.clone()}</a> })
        .collect::<Vec<_>>();

    view! {
        <footer id="footer" class="footer snap-section">
            <div class="container">
                <h2 class="footer-headline">{footer.headline.clone()}</h2>
                <p class="footer-tagline">{footer.tagline.clone()}</p>
                <a href="#pricing" class="footer-cta">{footer.button.clone()}</a>
                <div class="footer-brand">
                    <img class="footer-logo" src="assets/made-logo.svg" alt="Made" />
                    <span class="footer-title">"Made"</span>
                </div>
                <nav class="footer-links">{links}</nav>
                <p class="footer-copyright">{footer.copyright.clone()}</p>
            </div>
        </footer>
    }
}
