//! Browser glue shared by the sections: viewport visibility through an
//! `IntersectionObserver`, released when the owning component unmounts.

use leptos::html::Section;
use leptos::prelude::*;
use made_core::LandingConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

fn visibility_threshold() -> f64 {
    use_context::<LandingConfig>()
        .map(|c| c.visibility.threshold)
        .unwrap_or(0.3)
}

/// Tracks whether `target` intersects the viewport.
pub fn use_in_view(target: NodeRef<Section>) -> ReadSignal<bool> {
    let (in_view, set_in_view) = signal(false);
    let threshold = visibility_threshold();
    let observer: StoredValue<Option<IntersectionObserver>, LocalStorage> =
        StoredValue::new_local(None);

    Effect::new(move || {
        let Some(element) = target.get() else {
            return;
        };
        if observer.with_value(Option::is_some) {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    set_in_view.set(entry.is_intersecting());
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&threshold.into());
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(created) => {
                created.observe(&element);
                observer.set_value(Some(created));
                callback.forget(); // owned by the observer from here on
            }
            // No observer holds the closure, so it is dropped here.
            Err(e) => tracing::warn!(?e, "IntersectionObserver unavailable"),
        }
    });

    on_cleanup(move || {
        observer.try_with_value(|o| {
            if let Some(o) = o {
                o.disconnect();
            }
        });
    });

    in_view
}

/// Latches to true the first time `target` enters the viewport. Drives the
/// one-shot entrance animations.
pub fn use_entered(target: NodeRef<Section>) -> Signal<bool> {
    let in_view = use_in_view(target);
    let (entered, set_entered) = signal(false);
    Effect::new(move || {
        if in_view.get() && !entered.get_untracked() {
            set_entered.set(true);
        }
    });
    entered.into()
}
