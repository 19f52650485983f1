//! One agent section: header, skill tabs and the animated demo panel.
//!
//! All timing decisions live in [`ShowcaseCycler`]; this module only runs
//! the intervals it asks for and copies its snapshot into a signal.

use crate::hooks::use_in_view;
use leptos::html::Section;
use leptos::prelude::*;
use made_core::Agent;
use made_core::showcase::{
    DemoRow, ShowcaseCycler, ShowcaseProfile, ShowcaseState, TabProfile, TimerRequest,
};
use made_core::timers::{TimerHost, TimerSet};

/// Reactive handle over one cycler and its live intervals. `Copy`, so
/// event handlers and interval callbacks can all hold it.
#[derive(Clone, Copy)]
struct ShowcaseHandle {
    cycler: StoredValue<ShowcaseCycler>,
    timers: StoredValue<TimerSet<IntervalHandle>>,
    state: RwSignal<ShowcaseState>,
}

/// Runs [`TimerRequest`]s as Leptos intervals feeding back into the handle.
struct IntervalHost(ShowcaseHandle);

impl TimerHost for IntervalHost {
    type Handle = IntervalHandle;

    fn start(&mut self, request: TimerRequest) -> Option<IntervalHandle> {
        let handle = self.0;
        match set_interval_with_handle(move || handle.on_tick(request), request.interval) {
            Ok(interval) => Some(interval),
            Err(e) => {
                tracing::warn!(kind = %request.kind, ?e, "failed to start interval");
                None
            }
        }
    }

    fn cancel(&mut self, handle: IntervalHandle) {
        handle.clear();
    }
}

impl ShowcaseHandle {
    fn new(cycler: ShowcaseCycler) -> Self {
        let state = RwSignal::new(cycler.snapshot());
        Self {
            cycler: StoredValue::new(cycler),
            timers: StoredValue::new(TimerSet::new()),
            state,
        }
    }

    fn refresh(self) {
        if let Some(snapshot) = self.cycler.try_with_value(ShowcaseCycler::snapshot) {
            self.state.set(snapshot);
        }
    }

    /// Replace the live intervals with what the cycler wants now.
    fn sync(self) {
        let requests = self
            .cycler
            .try_with_value(ShowcaseCycler::timer_requests)
            .unwrap_or_default();
        let mut host = IntervalHost(self);
        self.timers.try_update_value(|t| t.replace(&mut host, &requests));
        tracing::debug!(timers = requests.len(), "showcase timers synced");
        self.refresh();
    }

    fn select(self, index: usize) {
        if self
            .cycler
            .try_update_value(|c| c.select_index(index))
            .unwrap_or(false)
        {
            self.sync();
        }
    }

    fn set_visible(self, visible: bool) {
        let changed = self
            .cycler
            .try_update_value(|c| {
                let before = c.is_visible();
                c.set_visible(visible);
                before != c.is_visible()
            })
            .unwrap_or(false);
        if changed {
            self.sync();
        }
    }

    fn unmount(self) {
        self.cycler.try_update_value(ShowcaseCycler::unmount);
        let mut host = IntervalHost(self);
        self.timers.try_update_value(|t| t.clear(&mut host));
    }

    fn on_tick(self, request: TimerRequest) {
        let Some((changed, current, running)) = self.cycler.try_update_value(|c| {
            let changed = c.tick(request.kind, request.generation);
            (changed, c.generation() == request.generation, c.is_running(request.kind))
        }) else {
            return;
        };
        if changed {
            self.refresh();
        }
        // Only the current generation may release its own timer.
        if current && !running {
            let mut host = IntervalHost(self);
            self.timers
                .try_update_value(|t| t.cancel_kind(&mut host, request.kind));
        }
    }
}

#[component]
pub fn AgentShowcase(
    agent: &'static Agent,
    profile: Option<ShowcaseProfile>,
    index: usize,
    total: usize,
) -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let in_view = use_in_view(section);

    let cycler = profile.and_then(|p| match ShowcaseCycler::new(p) {
        Ok(c) => Some(c),
        Err(e) => {
            tracing::warn!(agent = %agent.id, "showcase disabled: {e}");
            None
        }
    });

    let body = cycler.map(|cycler| {
        let handle = ShowcaseHandle::new(cycler);
        Effect::new(move || handle.set_visible(in_view.get()));
        on_cleanup(move || handle.unmount());
        view! { <ShowcaseBody agent=agent handle=handle /> }
    });

    let dots = (0..total)
        .map(|i| {
            let class = if i == index { "section-dot active" } else { "section-dot" };
            view! { <span class=class></span> }
        })
        .collect::<Vec<_>>();

    view! {
        <section
            id=agent.id.clone()
            class="agent-section snap-section"
            style=format!("--agent-accent: {};", agent.accent)
            node_ref=section
        >
            <div class="agent-indicator">{dots}</div>
            <div class="agent-grid">
                <div class="agent-intro">
                    <span class="agent-avatar">{agent.avatar.clone()}</span>
                    <h2 class="agent-name">{agent.name.clone()}</h2>
                    <p class="agent-role">{agent.role.clone()}</p>
                    <p class="agent-tagline">{agent.tagline.clone()}</p>
                    <blockquote class="agent-catchphrase">{format!("\"{}\"", agent.catchphrase)}</blockquote>
                    <p class="agent-description">{agent.description.clone()}</p>
                    {agent.showcase_video().map(|src| view! {
                        <video class="agent-video" src=src autoplay=true muted=true loop=true playsinline=true></video>
                    })}
                </div>
                {body}
            </div>
        </section>
    }
}

#[component]
fn ShowcaseBody(agent: &'static Agent, handle: ShowcaseHandle) -> impl IntoView {
    let tabs: Vec<TabProfile> = handle
        .cycler
        .with_value(|c| c.tabs().to_vec());
    let active = Memo::new(move |_| handle.state.with(|s| s.active_index));

    let buttons = tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let gradient = tab.gradient.clone();
            let class = move || {
                if active.get() == i {
                    format!("skill-tab active bg-gradient-to-r {gradient}")
                } else {
                    "skill-tab".to_string()
                }
            };
            view! {
                <button class=class on:click=move |_| handle.select(i)>
                    <span class="skill-tab-icon">{tab.icon.clone()}</span>
                    <span class="skill-tab-text">
                        <span class="skill-tab-name">{tab.name.clone()}</span>
                        <span class="skill-tab-description">{tab.description.clone()}</span>
                    </span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    let tabs = StoredValue::new(tabs);
    let panel = move || {
        let i = active.get();
        tabs.with_value(|tabs| tabs.get(i).cloned())
            .map(|tab| view! { <DemoPanel tab=tab state=handle.state /> })
    };

    view! {
        <div class="showcase" style=format!("--agent-glow: {};", agent.glow)>
            <div class="skill-tabs">{buttons}</div>
            {panel}
        </div>
    }
}

#[component]
fn DemoPanel(tab: TabProfile, state: RwSignal<ShowcaseState>) -> impl IntoView {
    let anim = tab.animation.clone();
    let cycled = anim.cycle.is_some();
    let scripted = anim.script.is_some();

    let counter = anim.counter.map(|spec| {
        let label = spec.label;
        view! {
            <div class="demo-counter">
                <span class="demo-counter-value">
                    {move || state.with(|s| s.counter_text.clone().unwrap_or_default())}
                </span>
                <span class="demo-counter-label">{label}</span>
                <div class="demo-progress">
                    <div
                        class="demo-progress-fill"
                        style=move || {
                            let pct = state.with(|s| s.counter_fraction.unwrap_or(0.0)) * 100.0;
                            format!("width: {pct:.1}%;")
                        }
                    ></div>
                </div>
            </div>
        }
    });

    let sweep = anim.sweep.map(|_| {
        view! {
            <div class="demo-radar">
                <div
                    class="demo-radar-beam"
                    style=move || format!("transform: rotate({}deg);", state.with(|s| s.sweep.unwrap_or(0)))
                ></div>
            </div>
        }
    });

    let typing = anim.typing.map(|_| {
        view! {
            <p class="demo-typing">
                {move || state.with(|s| s.typed.clone())}
                <span class=move || {
                    if state.with(|s| s.typing_complete) { "caret done" } else { "caret" }
                }>"|"</span>
            </p>
        }
    });

    let chart = (!tab.demo.chart.is_empty()).then(|| view! { <DemoChart state=state /> });

    let rows = tab
        .demo
        .rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let highlighted = move || cycled && state.with(|s| s.cycle_index) == i;
            let shown = move || !scripted || state.with(|s| s.script_visible) > i;
            let reply = move || state.with(|s| s.replies.get(i).cloned().unwrap_or_default());
            let replying = move || state.with(|s| s.typing_slot) == Some(i);
            view! {
                <Show when=shown>
                    <DemoRowView row=row.clone() highlighted=Signal::derive(highlighted) />
                    <Show when=move || scripted && !reply().is_empty()>
                        <div class="demo-reply">
                            {reply}
                            <Show when=replying>
                                <span class="caret">"|"</span>
                            </Show>
                        </div>
                    </Show>
                </Show>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="demo-panel">
            <h3 class="demo-headline">{tab.demo.headline}</h3>
            {counter}
            {sweep}
            {typing}
            {chart}
            <div class="demo-rows">{rows}</div>
            {tab.demo.footnote.map(|note| view! { <p class="demo-footnote">{note}</p> })}
        </div>
    }
}

/// Bars plus a trend line over the same series, drawn in a 100x100 box.
#[component]
fn DemoChart(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let series = Memo::new(move |_| state.with(|s| s.chart.clone()));

    let points = move || {
        series.with(|values| {
            let last = values.len().saturating_sub(1).max(1) as f64;
            values
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{:.1},{}", i as f64 / last * 100.0, 100 - (*v).min(100)))
                .collect::<Vec<_>>()
                .join(" ")
        })
    };

    let bars = move || {
        series
            .get()
            .into_iter()
            .map(|v| view! { <div class="demo-chart-bar" style=format!("height: {v}%;")></div> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="demo-chart">
            <div class="demo-chart-bars">{bars}</div>
            <svg class="demo-chart-line" viewBox="0 0 100 100" preserveAspectRatio="none">
                <polyline points=points fill="none" stroke="currentColor" stroke-width="2" />
            </svg>
        </div>
    }
}

#[component]
fn DemoRowView(row: DemoRow, highlighted: Signal<bool>) -> impl IntoView {
    let tone = row.tone.unwrap_or_default().class();
    let class = move || {
        if highlighted.get() {
            format!("demo-row tone-{tone} highlighted")
        } else {
            format!("demo-row tone-{tone}")
        }
    };
    view! {
        <div class=class>
            <div class="demo-row-main">
                <span class="demo-row-title">{row.title}</span>
                {row.detail.map(|d| view! { <span class="demo-row-detail">{d}</span> })}
            </div>
            {row.badge.map(|b| view! { <span class="demo-row-badge">{b}</span> })}
            {row.metric.map(|m| view! { <span class="demo-row-metric">{m}</span> })}
        </div>
    }
}
