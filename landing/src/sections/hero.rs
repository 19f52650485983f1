use crate::hooks::use_entered;
use leptos::html::Section;
use leptos::prelude::*;
use made_core::hover::{AvatarMedia, AvatarSlot, HoverRoster, lineup, parallax, slot_for};
use made_core::{Agent, LandingConfig, catalog};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlVideoElement, MouseEvent};

#[component]
pub fn Hero() -> impl IntoView {
    let strength = use_context::<LandingConfig>()
        .unwrap_or_default()
        .hero
        .parallax_strength;
    let roster = RwSignal::new(HoverRoster::new());
    let (offset, set_offset) = signal((0.0, 0.0));
    let section = NodeRef::<Section>::new();
    let entered = use_entered(section);

    // No tracked reads: runs once after mount.
    Effect::new(move || preload_videos(roster));

    let on_mouse_move = move |ev: MouseEvent| {
        let Some((w, h)) = viewport_size() else {
            return;
        };
        set_offset.set(parallax(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            w,
            h,
            strength,
        ));
    };

    let scene_style = move || {
        let (x, y) = offset.get();
        format!("transform: translate({x:.2}px, {y:.2}px);")
    };

    let avatars = lineup()
        .filter_map(|id| catalog().get(id))
        .map(|agent| view! { <Avatar agent=agent roster=roster /> })
        .collect::<Vec<_>>();

    view! {
        <section
            id="hero"
            class=move || if entered.get() { "hero snap-section entered" } else { "hero snap-section" }
            node_ref=section
            on:mousemove=on_mouse_move
        >
            <div class="hero-content">
                <span class="hero-eyebrow">"Introducing Made"</span>
                <h1 class="hero-title">
                    <span class="hero-title-primary">"Your AI creative team."</span>
                    <span class="hero-title-secondary">"Six agents. One mission."</span>
                </h1>
                <p class="hero-description">
                    "Professional creators powered by AI. From ideation to publication."
                </p>
                <div class="hero-scene" style=scene_style>
                    <div class="hero-burst"></div>
                    {avatars}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Avatar(agent: &'static Agent, roster: RwSignal<HoverRoster>) -> impl IntoView {
    let id = agent.id.as_str();
    let slot = slot_for(id);
    let hovered = move || roster.with(|r| r.is_hovered(id));

    let media = move || {
        roster.with(|r| match r.media_for(agent) {
            AvatarMedia::Video(src) => view! {
                <video class="avatar-media" src=src autoplay=true muted=true loop=true playsinline=true></video>
            }
            .into_any(),
            AvatarMedia::Image(src) => view! {
                <img class="avatar-media" src=src alt=agent.name.clone() />
            }
            .into_any(),
            AvatarMedia::Glyph(glyph) => view! {
                <span class="avatar-glyph">{glyph}</span>
            }
            .into_any(),
        })
    };

    view! {
        <div
            class=move || if hovered() { "avatar hovered" } else { "avatar" }
            style=slot_style(&slot)
            on:mouseenter=move |_| roster.update(|r| r.enter(id))
            on:mouseleave=move |_| roster.update(|r| r.leave(id))
        >
            <Show when=hovered>
                <div class="avatar-glow" style=format!("background: {};", agent.glow)></div>
            </Show>
            {media}
            <Show when=hovered>
                <div class="avatar-caption">
                    <span class="avatar-name">{agent.name.clone()}</span>
                    <span class="avatar-role">{agent.role.clone()}</span>
                </div>
            </Show>
        </div>
    }
}

fn slot_style(slot: &AvatarSlot) -> String {
    format!(
        "width: {}px; height: {}px; left: calc(50% + {}px); bottom: {}px; \
         z-index: {}; animation-delay: {:.2}s;",
        slot.width,
        slot.height,
        slot.offset_x,
        slot.offset_bottom,
        slot.z_index,
        slot.delay_s
    )
}

fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w, h))
}

/// Start loading every hover video once. Completion is recorded on the
/// roster; an agent without a video, or whose video never loads, keeps
/// showing its image.
fn preload_videos(roster: RwSignal<HoverRoster>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    for agent in catalog().agents() {
        let Some(src) = agent.showcase_video() else {
            continue;
        };
        let video = match document.create_element("video") {
            Ok(el) => match el.dyn_into::<HtmlVideoElement>() {
                Ok(video) => video,
                Err(_) => continue,
            },
            Err(e) => {
                tracing::warn!(agent = %agent.id, ?e, "cannot create preload element");
                continue;
            }
        };
        video.set_preload("auto");
        video.set_muted(true);
        video.set_src(src);

        let id = agent.id.clone();
        // canplaythrough can fire more than once; marking is idempotent.
        let on_ready = Closure::<dyn FnMut()>::new(move || {
            if roster.try_update(|r| r.mark_preloaded(&id)).is_some() {
                tracing::debug!(agent = %id, "hover video preloaded");
            }
        });
        let _ = video
            .add_event_listener_with_callback("canplaythrough", on_ready.as_ref().unchecked_ref());
        on_ready.forget();
        video.load();
    }
}
