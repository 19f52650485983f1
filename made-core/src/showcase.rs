//! Per-agent showcase profiles and the timed tab cycler.
//!
//! Every agent section on the page is the same component: a row of skill
//! tabs, a mock demo panel and a handful of cosmetic animations. What
//! differs is data, so each agent gets a [`ShowcaseProfile`] (compiled in
//! from `data/showcases.json`) and one [`ShowcaseCycler`] drives it.
//!
//! The cycler owns no timers. It tells the host which intervals it wants
//! ([`ShowcaseCycler::timer_requests`]) and the host calls back with
//! [`ShowcaseCycler::tick`]. Each request carries a generation number; any
//! teardown (tab switch, visibility loss, unmount) bumps it, so a callback
//! that outlives its timer cannot touch the new state.

use crate::animation::{
    Animation, Cycle, Ramp, RampSpec, Script, ScriptSpec, Typewriter, remainder,
};
use crate::catalog::{Catalog, catalog};
use crate::error::ShowcaseError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

const SHOWCASES_JSON: &str = include_str!("../data/showcases.json");

static SHOWCASES: LazyLock<ShowcaseTable> =
    LazyLock::new(|| ShowcaseTable::lenient(SHOWCASES_JSON, catalog()));

/// Read-only access to the compiled-in showcase profiles.
pub fn showcases() -> &'static ShowcaseTable {
    &SHOWCASES
}

/// Color hint for a demo row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// No emphasis
    #[default]
    Neutral,
    /// Good news (green)
    Positive,
    /// Needs attention (amber)
    Warning,
    /// Bad news (red)
    Negative,
}

impl Tone {
    /// CSS class suffix.
    pub fn class(self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Positive => "positive",
            Tone::Warning => "warning",
            Tone::Negative => "negative",
        }
    }
}

/// One line of mock data in a demo panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoRow {
    /// Main label
    pub title: String,
    /// Secondary text
    #[serde(default)]
    pub detail: Option<String>,
    /// Figure shown on the right
    #[serde(default)]
    pub metric: Option<String>,
    /// Small pill
    #[serde(default)]
    pub badge: Option<String>,
    /// Color hint
    #[serde(default)]
    pub tone: Option<Tone>,
}

/// Mock content of one tab.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoContent {
    /// Panel heading
    pub headline: String,
    /// Rows, also the items a cycle rotates over
    #[serde(default)]
    pub rows: Vec<DemoRow>,
    /// Caption under the rows
    #[serde(default)]
    pub footnote: Option<String>,
    /// Fake chart series, each point in `0..=100`
    #[serde(default)]
    pub chart: Vec<u32>,
}

/// How a counter value is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterFormat {
    /// `45,200`
    #[default]
    Plain,
    /// `94%`
    Percent,
    /// `$45,200`
    Currency,
}

impl CounterFormat {
    /// Render `value` in this format.
    pub fn render(self, value: u32) -> String {
        match self {
            CounterFormat::Plain => grouped(value),
            CounterFormat::Percent => format!("{value}%"),
            CounterFormat::Currency => format!("${}", grouped(value)),
        }
    }
}

fn grouped(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Animated headline figure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSpec {
    /// Caption next to the figure
    pub label: String,
    /// Display format
    #[serde(default)]
    pub format: CounterFormat,
    /// Ramp parameters
    pub ramp: RampSpec,
}

/// Rotation over the demo rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSpec {
    /// Time each row stays highlighted
    pub interval_ms: u64,
}

/// What the typewriter types.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypingSource {
    /// A fixed string
    Fixed {
        /// Text to type
        text: String,
    },
    /// Title of the row the cycle currently highlights
    CycledTitle,
}

/// Typewriter effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingSpec {
    /// Time per character
    pub interval_ms: u64,
    /// Text source
    pub source: TypingSource,
}

/// Which animations a tab runs. Every field is optional; a tab with none is
/// a static panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationProfile {
    /// Headline counter
    #[serde(default)]
    pub counter: Option<CounterSpec>,
    /// Radar sweep angle
    #[serde(default)]
    pub sweep: Option<RampSpec>,
    /// Row rotation
    #[serde(default)]
    pub cycle: Option<CycleSpec>,
    /// Typewriter
    #[serde(default)]
    pub typing: Option<TypingSpec>,
    /// Conversation script
    #[serde(default)]
    pub script: Option<ScriptSpec>,
}

/// One skill tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabProfile {
    /// Stable id, unique within the profile
    pub id: String,
    /// Tab label
    pub name: String,
    /// Emoji icon
    pub icon: String,
    /// One-line description under the label
    pub description: String,
    /// Gradient classes of the active tab
    pub gradient: String,
    /// Mock content
    pub demo: DemoContent,
    /// Animations
    #[serde(default)]
    pub animation: AnimationProfile,
}

/// The tabs of one agent's showcase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcaseProfile {
    /// Agent id in the catalog
    pub agent: String,
    /// Tabs in display order
    pub tabs: Vec<TabProfile>,
}

fn check_interval(tab: &str, kind: &'static str, interval_ms: u64) -> Result<(), ShowcaseError> {
    if interval_ms == 0 {
        return Err(ShowcaseError::ZeroInterval {
            tab: tab.to_string(),
            kind,
        });
    }
    Ok(())
}

fn check_ramp(tab: &str, kind: &'static str, ramp: &RampSpec) -> Result<(), ShowcaseError> {
    check_interval(tab, kind, ramp.interval_ms)?;
    if ramp.step == 0 {
        return Err(ShowcaseError::ZeroStep(tab.to_string()));
    }
    if ramp.target < ramp.start {
        return Err(ShowcaseError::InvertedRange {
            tab: tab.to_string(),
            start: ramp.start,
            target: ramp.target,
        });
    }
    Ok(())
}

/// Structural checks that do not need the catalog.
pub fn validate_profile(profile: &ShowcaseProfile) -> Result<(), ShowcaseError> {
    if profile.tabs.is_empty() {
        return Err(ShowcaseError::NoTabs(profile.agent.clone()));
    }

    let mut seen = HashSet::new();
    for tab in &profile.tabs {
        if !seen.insert(tab.id.as_str()) {
            return Err(ShowcaseError::DuplicateTab {
                agent: profile.agent.clone(),
                tab: tab.id.clone(),
            });
        }

        validate_tab(tab)?;
    }
    Ok(())
}

/// Checks the animation settings of one tab.
pub fn validate_tab(tab: &TabProfile) -> Result<(), ShowcaseError> {
    let anim = &tab.animation;
    if let Some(counter) = &anim.counter {
        check_ramp(&tab.id, "counter", &counter.ramp)?;
    }
    if let Some(sweep) = &anim.sweep {
        check_ramp(&tab.id, "sweep", sweep)?;
    }
    if let Some(cycle) = &anim.cycle {
        check_interval(&tab.id, "cycle", cycle.interval_ms)?;
    }
    if let Some(typing) = &anim.typing {
        check_interval(&tab.id, "typing", typing.interval_ms)?;
    }
    if let Some(script) = &anim.script {
        check_interval(&tab.id, "script", script.interval_ms)?;
        if script.steps.is_empty() {
            return Err(ShowcaseError::EmptyScript(tab.id.clone()));
        }
    }
    Ok(())
}

/// All showcase profiles, keyed by agent id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowcaseTable {
    profiles: Vec<ShowcaseProfile>,
}

impl ShowcaseTable {
    /// Parse and validate; the first bad profile fails the whole table.
    pub fn from_json(json: &str, catalog: &Catalog) -> Result<Self, ShowcaseError> {
        let profiles: Vec<ShowcaseProfile> = serde_json::from_str(json)?;
        for profile in &profiles {
            Self::check(profile, catalog)?;
        }
        Ok(Self { profiles })
    }

    /// Parse and validate, repairing what can be repaired with a warning.
    ///
    /// A tab with unusable animation settings keeps its content but runs no
    /// animation; a repeated tab id is dropped. A profile is dropped only
    /// when its agent is unknown or no tab is left, and that agent then
    /// renders no showcase.
    pub fn lenient(json: &str, catalog: &Catalog) -> Self {
        let parsed: Vec<ShowcaseProfile> = match serde_json::from_str(json) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!("{}", ShowcaseError::from(e));
                return Self::default();
            }
        };

        let profiles: Vec<ShowcaseProfile> = parsed
            .into_iter()
            .filter_map(|profile| Self::salvage(profile, catalog))
            .collect();
        tracing::debug!(profiles = profiles.len(), "showcase profiles loaded");
        Self { profiles }
    }

    fn salvage(mut profile: ShowcaseProfile, catalog: &Catalog) -> Option<ShowcaseProfile> {
        if catalog.get(&profile.agent).is_none() {
            let err = ShowcaseError::UnknownAgent(profile.agent);
            tracing::warn!("dropping showcase profile: {err}");
            return None;
        }

        let mut seen = HashSet::new();
        profile.tabs.retain(|tab| {
            let fresh = seen.insert(tab.id.clone());
            if !fresh {
                tracing::warn!(agent = %profile.agent, tab = %tab.id, "dropping repeated tab");
            }
            fresh
        });
        for tab in &mut profile.tabs {
            if let Err(e) = validate_tab(tab) {
                tracing::warn!(agent = %profile.agent, tab = %tab.id, "animation disabled: {e}");
                tab.animation = AnimationProfile::default();
            }
        }

        if profile.tabs.is_empty() {
            tracing::warn!(agent = %profile.agent, "dropping showcase profile without tabs");
            return None;
        }
        Some(profile)
    }

    fn check(profile: &ShowcaseProfile, catalog: &Catalog) -> Result<(), ShowcaseError> {
        if catalog.get(&profile.agent).is_none() {
            return Err(ShowcaseError::UnknownAgent(profile.agent.clone()));
        }
        validate_profile(profile)
    }

    /// Profile of one agent.
    pub fn profile(&self, agent: &str) -> Option<&ShowcaseProfile> {
        self.profiles.iter().find(|p| p.agent == agent)
    }

    /// All profiles in file order.
    pub fn profiles(&self) -> &[ShowcaseProfile] {
        &self.profiles
    }

    /// Number of profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True when no profile survived validation.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// The animation a timer drives. A cycler holds at most one timer per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKind {
    /// Headline counter
    Counter,
    /// Radar sweep
    Sweep,
    /// Row rotation
    Cycle,
    /// Typewriter
    Typing,
    /// Conversation script
    Script,
}

impl TimerKind {
    /// Every kind, in a fixed order.
    pub const ALL: [TimerKind; 5] = [
        TimerKind::Counter,
        TimerKind::Sweep,
        TimerKind::Cycle,
        TimerKind::Typing,
        TimerKind::Script,
    ];
}

impl fmt::Display for TimerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerKind::Counter => "counter",
            TimerKind::Sweep => "sweep",
            TimerKind::Cycle => "cycle",
            TimerKind::Typing => "typing",
            TimerKind::Script => "script",
        };
        f.write_str(name)
    }
}

/// An interval the host should run, calling
/// [`ShowcaseCycler::tick`]`(kind, generation)` each time it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    /// What to tick
    pub kind: TimerKind,
    /// Period
    pub interval: Duration,
    /// Generation the request belongs to
    pub generation: u64,
}

/// Everything the demo panel renders, copied out of the cycler.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowcaseState {
    /// Active tab position
    pub active_index: usize,
    /// Active tab id
    pub active_tab: String,
    /// Whether the section is on screen
    pub visible: bool,
    /// Raw counter value
    pub counter: Option<u32>,
    /// Counter formatted for display
    pub counter_text: Option<String>,
    /// Counter progress in `0.0..=1.0`
    pub counter_fraction: Option<f64>,
    /// Sweep angle
    pub sweep: Option<u32>,
    /// Highlighted row
    pub cycle_index: usize,
    /// Typed prefix
    pub typed: String,
    /// Whether the typewriter reached the end
    pub typing_complete: bool,
    /// Script items revealed
    pub script_visible: usize,
    /// Script replies typed so far
    pub replies: Vec<String>,
    /// Reply slot currently typing
    pub typing_slot: Option<usize>,
    /// Chart series; empty until the tab first runs on screen
    pub chart: Vec<u32>,
}

/// Live animations of the active tab.
#[derive(Debug)]
struct TabRuntime {
    counter: Option<(CounterFormat, Ramp)>,
    sweep: Option<Ramp>,
    cycle: Option<Cycle>,
    typing: Option<Typewriter>,
    follows_cycle: bool,
    script: Option<Script>,
    titles: Vec<String>,
    chart: Vec<u32>,
    chart_shown: bool,
}

impl TabRuntime {
    fn new(tab: &TabProfile) -> Self {
        let anim = &tab.animation;
        let titles: Vec<String> = tab.demo.rows.iter().map(|r| r.title.clone()).collect();
        let follows_cycle = matches!(
            anim.typing,
            Some(TypingSpec {
                source: TypingSource::CycledTitle,
                ..
            })
        );
        let typing = anim.typing.as_ref().map(|t| {
            let text = match &t.source {
                TypingSource::Fixed { text } => text.clone(),
                TypingSource::CycledTitle => titles.first().cloned().unwrap_or_default(),
            };
            Typewriter::new(text, Duration::from_millis(t.interval_ms))
        });

        Self {
            counter: anim
                .counter
                .as_ref()
                .map(|c| (c.format, Ramp::new(c.ramp.clone()))),
            sweep: anim.sweep.clone().map(Ramp::new),
            cycle: anim
                .cycle
                .as_ref()
                .map(|c| Cycle::new(titles.len(), Duration::from_millis(c.interval_ms))),
            typing,
            follows_cycle,
            script: anim.script.clone().map(Script::new),
            titles,
            chart: tab.demo.chart.iter().map(|&v| v.min(100)).collect(),
            chart_shown: false,
        }
    }

    /// Restart every animation from its start value.
    fn start(&mut self) {
        self.chart_shown = !self.chart.is_empty();
        if let Some((_, ramp)) = &mut self.counter {
            ramp.start();
        }
        if let Some(sweep) = &mut self.sweep {
            sweep.start();
        }
        if let Some(cycle) = &mut self.cycle {
            cycle.start();
        }
        if self.follows_cycle {
            self.retarget_typing();
        } else if let Some(typing) = &mut self.typing {
            typing.start();
        }
        if let Some(script) = &mut self.script {
            script.start();
        }
    }

    fn cycle_index(&self) -> usize {
        self.cycle.as_ref().map_or(0, Cycle::index)
    }

    fn retarget_typing(&mut self) {
        let title = self
            .titles
            .get(self.cycle_index())
            .cloned()
            .unwrap_or_default();
        if let Some(typing) = &mut self.typing {
            typing.retarget(title);
        }
    }

    fn is_running(&self, kind: TimerKind) -> bool {
        match kind {
            TimerKind::Counter => self.counter.as_ref().is_some_and(|(_, r)| r.is_running()),
            TimerKind::Sweep => self.sweep.as_ref().is_some_and(Ramp::is_running),
            TimerKind::Cycle => self.cycle.as_ref().is_some_and(Cycle::is_running),
            TimerKind::Typing => {
                self.typing.as_ref().is_some_and(Typewriter::is_running)
                    || (self.follows_cycle && self.is_running(TimerKind::Cycle))
            }
            TimerKind::Script => self.script.as_ref().is_some_and(Script::is_running),
        }
    }

    fn interval(&self, kind: TimerKind) -> Option<Duration> {
        let interval = match kind {
            TimerKind::Counter => self.counter.as_ref().map(|(_, r)| r.interval()),
            TimerKind::Sweep => self.sweep.as_ref().map(Animation::interval),
            TimerKind::Cycle => self.cycle.as_ref().map(Animation::interval),
            TimerKind::Typing => self.typing.as_ref().map(Animation::interval),
            TimerKind::Script => self.script.as_ref().map(Animation::interval),
        };
        interval.filter(|i| !i.is_zero())
    }

    fn tick(&mut self, kind: TimerKind) -> bool {
        match kind {
            TimerKind::Counter => self.counter.as_mut().is_some_and(|(_, r)| r.tick()),
            TimerKind::Sweep => self.sweep.as_mut().is_some_and(Ramp::tick),
            TimerKind::Cycle => {
                let moved = self.cycle.as_mut().is_some_and(Cycle::tick);
                if moved && self.follows_cycle {
                    self.retarget_typing();
                }
                moved
            }
            TimerKind::Typing => self.typing.as_mut().is_some_and(Typewriter::tick),
            TimerKind::Script => self.script.as_mut().is_some_and(Script::tick),
        }
    }

    /// Feed elapsed wall time to every animation. A typewriter that follows
    /// the cycle restarts at the last cycle boundary inside `elapsed`, so
    /// only the time since that boundary is typed.
    fn advance(&mut self, elapsed: Duration) -> bool {
        let mut changed = false;
        if let Some((_, ramp)) = &mut self.counter {
            changed |= ramp.advance(elapsed);
        }
        if let Some(sweep) = &mut self.sweep {
            changed |= sweep.advance(elapsed);
        }
        if let Some(script) = &mut self.script {
            changed |= script.advance(elapsed);
        }

        let boundary = match &self.cycle {
            Some(cycle) if self.follows_cycle && cycle.is_running() => {
                Some((cycle.until_next(), cycle.interval()))
            }
            _ => None,
        };
        let moved = self.cycle.as_mut().is_some_and(|c| c.advance(elapsed));
        match boundary {
            Some((first, interval)) if elapsed >= first => {
                self.retarget_typing();
                if let Some(typing) = &mut self.typing {
                    typing.advance(remainder(elapsed - first, interval));
                }
                changed = true;
            }
            _ => {
                if let Some(typing) = &mut self.typing {
                    changed |= typing.advance(elapsed);
                }
            }
        }
        changed | moved
    }
}

/// Drives one agent's showcase: active tab, visibility gating and the
/// animations of the active tab.
#[derive(Debug)]
pub struct ShowcaseCycler {
    profile: ShowcaseProfile,
    active: usize,
    runtime: TabRuntime,
    visible: bool,
    mounted: bool,
    generation: u64,
}

impl ShowcaseCycler {
    /// Mounted, hidden cycler on the first tab.
    pub fn new(profile: ShowcaseProfile) -> Result<Self, ShowcaseError> {
        validate_profile(&profile)?;
        let runtime = TabRuntime::new(&profile.tabs[0]);
        Ok(Self {
            profile,
            active: 0,
            runtime,
            visible: false,
            mounted: true,
            generation: 0,
        })
    }

    /// Agent id.
    pub fn agent(&self) -> &str {
        &self.profile.agent
    }

    /// Tabs in display order.
    pub fn tabs(&self) -> &[TabProfile] {
        &self.profile.tabs
    }

    /// Position of the active tab.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active tab.
    pub fn active_tab(&self) -> &TabProfile {
        &self.profile.tabs[self.active]
    }

    /// Row the cycle currently highlights, if the tab has rows.
    pub fn active_row(&self) -> Option<&DemoRow> {
        self.active_tab().demo.rows.get(self.runtime.cycle_index())
    }

    /// Activate the tab with this id. Unknown ids and the already active
    /// tab are no-ops.
    pub fn select(&mut self, tab_id: &str) -> bool {
        match self.profile.tabs.iter().position(|t| t.id == tab_id) {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    /// Activate the tab at `index`. Out of range and the already active tab
    /// are no-ops.
    pub fn select_index(&mut self, index: usize) -> bool {
        if !self.mounted || index >= self.profile.tabs.len() || index == self.active {
            return false;
        }
        self.teardown();
        self.active = index;
        self.runtime = TabRuntime::new(&self.profile.tabs[index]);
        if self.visible {
            self.runtime.start();
        }
        tracing::debug!(
            agent = %self.profile.agent,
            tab = %self.profile.tabs[index].id,
            generation = self.generation,
            "showcase tab selected"
        );
        true
    }

    /// Record whether the section intersects the viewport.
    ///
    /// Hiding freezes the displayed values; showing again restarts the
    /// active tab's animations from their start values.
    pub fn set_visible(&mut self, visible: bool) {
        if !self.mounted || visible == self.visible {
            return;
        }
        self.teardown();
        self.visible = visible;
        if visible {
            self.runtime.start();
        }
        tracing::debug!(agent = %self.profile.agent, visible, "showcase visibility changed");
    }

    /// Whether the section is on screen.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Stop for good. Every outstanding tick becomes stale.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.teardown();
        self.mounted = false;
        self.visible = false;
    }

    /// False after [`ShowcaseCycler::unmount`].
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn teardown(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn is_live(&self) -> bool {
        self.mounted && self.visible
    }

    /// Whether the timer of `kind` still has work to do.
    pub fn is_running(&self, kind: TimerKind) -> bool {
        self.is_live() && self.runtime.is_running(kind)
    }

    /// Timers the host should run for the current generation. Empty while
    /// hidden or unmounted.
    pub fn timer_requests(&self) -> Vec<TimerRequest> {
        if !self.is_live() {
            return Vec::new();
        }
        TimerKind::ALL
            .into_iter()
            .filter(|&kind| self.runtime.is_running(kind))
            .filter_map(|kind| {
                self.runtime.interval(kind).map(|interval| TimerRequest {
                    kind,
                    interval,
                    generation: self.generation,
                })
            })
            .collect()
    }

    /// Apply one timer tick. Ticks from an older generation, or arriving
    /// while hidden or unmounted, change nothing.
    pub fn tick(&mut self, kind: TimerKind, generation: u64) -> bool {
        if generation != self.generation || !self.is_live() {
            return false;
        }
        self.runtime.tick(kind)
    }

    /// Drive every animation from elapsed wall time instead of per-kind
    /// timers.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.is_live() {
            return false;
        }
        self.runtime.advance(elapsed)
    }

    /// Copy of everything the panel renders.
    pub fn snapshot(&self) -> ShowcaseState {
        let rt = &self.runtime;
        let (typed, typing_complete) = match &rt.typing {
            Some(t) => (t.revealed().to_string(), t.is_complete()),
            None => (String::new(), false),
        };
        let (script_visible, replies, typing_slot) = match &rt.script {
            Some(s) => (s.visible(), s.replies().to_vec(), s.typing()),
            None => (0, Vec::new(), None),
        };

        ShowcaseState {
            active_index: self.active,
            active_tab: self.active_tab().id.clone(),
            visible: self.visible,
            counter: rt.counter.as_ref().map(|(_, r)| r.value()),
            counter_text: rt.counter.as_ref().map(|(f, r)| f.render(r.value())),
            counter_fraction: rt.counter.as_ref().map(|(_, r)| r.fraction()),
            sweep: rt.sweep.as_ref().map(Ramp::value),
            cycle_index: rt.cycle_index(),
            typed,
            typing_complete,
            script_visible,
            replies,
            typing_slot,
            chart: if rt.chart_shown { rt.chart.clone() } else { Vec::new() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Completion;
    use pretty_assertions::assert_eq;

    fn row(title: &str) -> DemoRow {
        DemoRow {
            title: title.into(),
            ..Default::default()
        }
    }

    fn tab(id: &str, rows: &[&str], animation: AnimationProfile) -> TabProfile {
        TabProfile {
            id: id.into(),
            name: id.into(),
            icon: "*".into(),
            description: String::new(),
            gradient: String::new(),
            demo: DemoContent {
                headline: id.into(),
                rows: rows.iter().map(|t| row(t)).collect(),
                ..Default::default()
            },
            animation,
        }
    }

    fn counter(target: u32, step: u32) -> AnimationProfile {
        AnimationProfile {
            counter: Some(CounterSpec {
                label: "score".into(),
                format: CounterFormat::Percent,
                ramp: RampSpec {
                    start: 0,
                    target,
                    step,
                    interval_ms: 20,
                    completion: Completion::Settle,
                },
            }),
            ..Default::default()
        }
    }

    fn typed_cycle() -> AnimationProfile {
        AnimationProfile {
            cycle: Some(CycleSpec { interval_ms: 3000 }),
            typing: Some(TypingSpec {
                interval_ms: 30,
                source: TypingSource::CycledTitle,
            }),
            ..Default::default()
        }
    }

    fn profile() -> ShowcaseProfile {
        ShowcaseProfile {
            agent: "milo".into(),
            tabs: vec![
                tab("ideas", &["Alpha", "Beta", "Gamma"], typed_cycle()),
                tab("viral", &["Hook"], counter(94, 3)),
                tab("static", &[], AnimationProfile::default()),
            ],
        }
    }

    fn visible_cycler() -> ShowcaseCycler {
        let mut c = ShowcaseCycler::new(profile()).unwrap();
        c.set_visible(true);
        c
    }

    #[test]
    fn embedded_profiles_cover_every_agent() {
        let table = showcases();
        assert_eq!(table.len(), catalog().len());
        for agent in catalog().agents() {
            let profile = table.profile(&agent.id).unwrap();
            assert_eq!(profile.tabs.len(), 5, "{}", agent.id);
        }
    }

    #[test]
    fn embedded_table_passes_strict_validation() {
        assert!(ShowcaseTable::from_json(SHOWCASES_JSON, catalog()).is_ok());
    }

    #[test]
    fn strict_load_rejects_unknown_agent() {
        let json = r#"[{ "agent": "nobody", "tabs": [] }]"#;
        let err = ShowcaseTable::from_json(json, catalog()).unwrap_err();
        assert!(matches!(err, ShowcaseError::UnknownAgent(a) if a == "nobody"));
    }

    #[test]
    fn lenient_load_drops_bad_profiles() {
        let json = r#"[
            { "agent": "milo", "tabs": [] },
            { "agent": "zara", "tabs": [
                { "id": "a", "name": "A", "icon": "x", "description": "", "gradient": "",
                  "demo": { "headline": "h" } }
            ] }
        ]"#;
        let table = ShowcaseTable::lenient(json, catalog());
        assert_eq!(table.len(), 1);
        assert!(table.profile("milo").is_none());
        assert!(table.profile("zara").is_some());
    }

    #[test]
    fn lenient_load_keeps_profile_with_one_broken_tab() {
        let json = r#"[
            { "agent": "zara", "tabs": [
                { "id": "good", "name": "Good", "icon": "x", "description": "", "gradient": "",
                  "demo": { "headline": "h", "rows": [{ "title": "a" }, { "title": "b" }] },
                  "animation": { "cycle": { "interval_ms": 1500 } } },
                { "id": "broken", "name": "Broken", "icon": "y", "description": "", "gradient": "",
                  "demo": { "headline": "still here", "rows": [{ "title": "c" }] },
                  "animation": { "cycle": { "interval_ms": 0 } } },
                { "id": "good", "name": "Again", "icon": "z", "description": "", "gradient": "",
                  "demo": { "headline": "dup" } }
            ] }
        ]"#;
        let table = ShowcaseTable::lenient(json, catalog());
        assert_eq!(table.len(), 1);

        let zara = table.profile("zara").unwrap();
        let ids: Vec<&str> = zara.tabs.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["good", "broken"]);
        assert!(zara.tabs[0].animation.cycle.is_some());
        assert_eq!(zara.tabs[1].animation, AnimationProfile::default());
        assert_eq!(zara.tabs[1].demo.headline, "still here");

        // The repaired profile passes strict validation and runs.
        assert!(validate_profile(zara).is_ok());
        let mut c = ShowcaseCycler::new(zara.clone()).unwrap();
        c.set_visible(true);
        assert!(c.select_index(1));
        assert!(c.timer_requests().is_empty());
    }

    #[test]
    fn validation_rejects_unusable_animation() {
        let mut p = profile();
        p.tabs[1].animation = counter(94, 0);
        assert!(matches!(validate_profile(&p), Err(ShowcaseError::ZeroStep(t)) if t == "viral"));

        let mut p = profile();
        p.tabs[0].animation.cycle = Some(CycleSpec { interval_ms: 0 });
        assert!(matches!(
            validate_profile(&p),
            Err(ShowcaseError::ZeroInterval { kind: "cycle", .. })
        ));

        let mut p = profile();
        p.tabs.push(tab("ideas", &[], AnimationProfile::default()));
        assert!(matches!(validate_profile(&p), Err(ShowcaseError::DuplicateTab { .. })));
    }

    #[test]
    fn hidden_cycler_requests_nothing_and_ignores_time() {
        let mut c = ShowcaseCycler::new(profile()).unwrap();
        assert!(c.timer_requests().is_empty());
        assert!(!c.advance(Duration::from_secs(3600)));
        assert!(!c.tick(TimerKind::Cycle, c.generation()));
        assert_eq!(c.snapshot().cycle_index, 0);
        assert_eq!(c.snapshot().typed, "");
    }

    #[test]
    fn visible_cycler_requests_one_timer_per_kind() {
        let c = visible_cycler();
        let kinds: Vec<TimerKind> = c.timer_requests().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![TimerKind::Cycle, TimerKind::Typing]);
        assert!(c.timer_requests().iter().all(|r| r.generation == c.generation()));
    }

    #[test]
    fn typing_follows_the_cycled_row() {
        let mut c = visible_cycler();
        let g = c.generation();
        for _ in 0..3 {
            c.tick(TimerKind::Typing, g);
        }
        assert_eq!(c.snapshot().typed, "Alp");

        assert!(c.tick(TimerKind::Cycle, g));
        assert_eq!(c.active_row().map(|r| r.title.as_str()), Some("Beta"));
        assert_eq!(c.snapshot().typed, "");
        for _ in 0..4 {
            c.tick(TimerKind::Typing, g);
        }
        let s = c.snapshot();
        assert_eq!(s.typed, "Beta");
        assert!(s.typing_complete);
        // Still wanted: the next cycle step will retarget it.
        assert!(c.is_running(TimerKind::Typing));
    }

    #[test]
    fn switching_tabs_resets_and_invalidates_old_ticks() {
        let mut c = visible_cycler();
        let old = c.generation();
        c.tick(TimerKind::Cycle, old);
        c.tick(TimerKind::Typing, old);

        assert!(c.select("viral"));
        let s = c.snapshot();
        assert_eq!(s.active_tab, "viral");
        assert_eq!(s.cycle_index, 0);
        assert_eq!(s.typed, "");
        assert_eq!(s.counter, Some(0));
        assert_ne!(c.generation(), old);

        assert!(!c.tick(TimerKind::Counter, old));
        assert_eq!(c.snapshot().counter, Some(0));
        assert!(c.tick(TimerKind::Counter, c.generation()));
        assert_eq!(c.snapshot().counter_text.as_deref(), Some("3%"));
    }

    #[test]
    fn reselecting_or_out_of_range_is_a_noop() {
        let mut c = visible_cycler();
        let g = c.generation();
        assert!(!c.select_index(0));
        assert!(!c.select_index(7));
        assert!(!c.select("missing"));
        assert_eq!(c.generation(), g);
    }

    #[test]
    fn counter_is_monotonic_and_bounded() {
        let mut c = visible_cycler();
        c.select("viral");
        let g = c.generation();
        let mut last = 0;
        for _ in 0..64 {
            c.tick(TimerKind::Counter, g);
            let v = c.snapshot().counter.unwrap();
            assert!(v >= last && v <= 94);
            last = v;
        }
        assert_eq!(last, 94);
        assert!(c.timer_requests().is_empty());
    }

    #[test]
    fn hiding_freezes_and_showing_restarts() {
        let mut c = visible_cycler();
        c.select("viral");
        c.advance(Duration::from_millis(200));
        assert_eq!(c.snapshot().counter, Some(30));

        c.set_visible(false);
        assert!(c.timer_requests().is_empty());
        assert!(!c.advance(Duration::from_secs(5)));
        assert_eq!(c.snapshot().counter, Some(30));

        c.set_visible(true);
        assert_eq!(c.snapshot().counter, Some(0));
    }

    #[test]
    fn unmount_makes_every_tick_stale() {
        let mut c = visible_cycler();
        let g = c.generation();
        c.unmount();
        assert!(!c.is_mounted());
        assert!(c.timer_requests().is_empty());
        assert!(!c.tick(TimerKind::Cycle, g));
        assert!(!c.tick(TimerKind::Cycle, c.generation()));
        c.set_visible(true);
        assert!(!c.is_visible());
    }

    #[test]
    fn advance_retargets_typing_at_cycle_boundaries() {
        let mut c = visible_cycler();
        // 3000ms reaches the first boundary; 30ms more types one char of "Beta".
        c.advance(Duration::from_millis(3030));
        let s = c.snapshot();
        assert_eq!(s.cycle_index, 1);
        assert_eq!(s.typed, "B");
    }

    #[test]
    fn static_tab_has_no_timers() {
        let mut c = visible_cycler();
        c.select("static");
        assert!(c.timer_requests().is_empty());
        assert_eq!(c.active_row(), None);
        assert_eq!(c.snapshot().counter, None);
    }

    #[test]
    fn huge_gaps_settle_without_overflow() {
        let lila = showcases().profile("lila").unwrap().clone();
        let mut c = ShowcaseCycler::new(lila).unwrap();
        c.set_visible(true);
        assert!(c.select("monitoring"));
        c.advance(Duration::from_millis(10));
        assert!(c.advance(Duration::MAX));
        let s = c.snapshot();
        assert!(s.sweep.unwrap() < 360);
        assert!(s.counter.unwrap() <= 100);

        let mut c = visible_cycler();
        c.advance(Duration::from_millis(10));
        c.advance(Duration::MAX);
        let s = c.snapshot();
        assert!(s.cycle_index < 3);
        assert!(s.typed.len() <= "Alpha".len().max("Gamma".len()));
    }

    #[test]
    fn chart_appears_on_screen_and_follows_the_tab() {
        let mut p = profile();
        p.tabs[0].demo.chart = vec![10, 250, 40];
        let mut c = ShowcaseCycler::new(p).unwrap();
        assert!(c.snapshot().chart.is_empty());

        c.set_visible(true);
        assert_eq!(c.snapshot().chart, vec![10, 100, 40]);

        c.select("viral");
        assert!(c.snapshot().chart.is_empty());
        c.select("ideas");
        assert_eq!(c.snapshot().chart, vec![10, 100, 40]);

        // Hiding freezes what is shown.
        c.set_visible(false);
        assert_eq!(c.snapshot().chart, vec![10, 100, 40]);
    }

    #[test]
    fn counter_formats() {
        assert_eq!(CounterFormat::Plain.render(1_234_567), "1,234,567");
        assert_eq!(CounterFormat::Currency.render(45_200), "$45,200");
        assert_eq!(CounterFormat::Percent.render(94), "94%");
        assert_eq!(CounterFormat::Plain.render(999), "999");
    }
}
