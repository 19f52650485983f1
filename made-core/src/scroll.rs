//! Which full-screen section the visitor is looking at, and the page
//! background that goes with it.

use crate::catalog::Catalog;
use std::fmt;

/// Index of the section under the viewport.
///
/// `floor(progress * count)` clamped to `0..count`, with
/// `progress = scroll_top / (scroll_height - client_height)`. A container
/// that cannot scroll, non-finite input or `count == 0` gives 0.
pub fn compute_section(
    scroll_top: f64,
    scroll_height: f64,
    client_height: f64,
    count: usize,
) -> usize {
    if count == 0
        || !scroll_top.is_finite()
        || !scroll_height.is_finite()
        || !client_height.is_finite()
    {
        return 0;
    }
    let range = scroll_height - client_height;
    if range <= 0.0 {
        return 0;
    }
    let progress = (scroll_top / range).clamp(0.0, 1.0);
    let index = (progress * count as f64).floor() as usize;
    index.min(count - 1)
}

/// Remembers the current section and reports changes only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionTracker {
    current: usize,
    count: usize,
}

impl SectionTracker {
    /// Tracker over `count` sections, starting at the first.
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    /// Current section index.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of sections.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Recompute from a scroll event. Returns the new index if it changed.
    pub fn on_scroll(
        &mut self,
        scroll_top: f64,
        scroll_height: f64,
        client_height: f64,
    ) -> Option<usize> {
        let next = compute_section(scroll_top, scroll_height, client_height, self.count);
        if next == self.current {
            return None;
        }
        tracing::debug!(from = self.current, to = next, "section changed");
        self.current = next;
        Some(next)
    }
}

/// Background palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Saturated gradients
    #[default]
    Bright,
    /// Deep, mostly black gradients
    Dark,
}

impl Theme {
    /// The other palette.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Bright => Theme::Dark,
            Theme::Dark => Theme::Bright,
        }
    }

    /// Label of the toggle button (names the palette it switches to).
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Bright => "🌙 Dark",
            Theme::Dark => "☀️ Bright",
        }
    }
}

/// One snap-scroll section of the page, in page order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageSection {
    /// Opening section with the avatar line-up
    Hero,
    /// One agent showcase, by agent id
    Agent(String),
    /// Feature cards
    Features,
    /// Testimonials and metrics
    Testimonials,
    /// Plans
    Pricing,
    /// Countdown call to action
    CallToAction,
    /// Closing section
    Footer,
}

impl PageSection {
    /// Every section for this roster, in page order.
    pub fn all(catalog: &Catalog) -> Vec<PageSection> {
        let mut sections = Vec::with_capacity(catalog.len() + 6);
        sections.push(PageSection::Hero);
        sections.extend(catalog.agents().iter().map(|a| PageSection::Agent(a.id.clone())));
        sections.extend([
            PageSection::Features,
            PageSection::Testimonials,
            PageSection::Pricing,
            PageSection::CallToAction,
            PageSection::Footer,
        ]);
        sections
    }
}

impl fmt::Display for PageSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSection::Hero => f.write_str("hero"),
            PageSection::Agent(id) => f.write_str(id),
            PageSection::Features => f.write_str("features"),
            PageSection::Testimonials => f.write_str("testimonials"),
            PageSection::Pricing => f.write_str("pricing"),
            PageSection::CallToAction => f.write_str("cta"),
            PageSection::Footer => f.write_str("footer"),
        }
    }
}

const HERO_BRIGHT: &str =
    "radial-gradient(ellipse 800px 600px at 25% 40%, #06b6d460, transparent), \
radial-gradient(ellipse 700px 500px at 75% 30%, #facc1550, transparent), \
radial-gradient(ellipse 650px 450px at 50% 70%, #ec489950, transparent), \
radial-gradient(ellipse 600px 500px at 85% 60%, #10b98140, transparent), \
radial-gradient(ellipse 700px 550px at 15% 80%, #ef444440, transparent), \
radial-gradient(ellipse 550px 400px at 65% 85%, #f9731645, transparent), \
linear-gradient(180deg, #000000 0%, #0a0a0a 100%)";

const HERO_DARK: &str =
    "radial-gradient(ellipse 800px 600px at 25% 40%, #06b6d430, transparent), \
radial-gradient(ellipse 700px 500px at 75% 30%, #facc1525, transparent), \
radial-gradient(ellipse 650px 450px at 50% 70%, #ec489925, transparent), \
radial-gradient(ellipse 600px 500px at 85% 60%, #10b98120, transparent), \
radial-gradient(ellipse 700px 550px at 15% 80%, #ef444420, transparent), \
radial-gradient(ellipse 550px 400px at 65% 85%, #f9731622, transparent), \
linear-gradient(180deg, #000000 0%, #050505 100%)";

fn static_gradients(section: &PageSection) -> (&'static str, &'static str) {
    match section {
        PageSection::Hero => (HERO_BRIGHT, HERO_DARK),
        PageSection::Features => (
            "linear-gradient(135deg, #6366f1 0%, #06b6d4 100%)",
            "linear-gradient(to bottom right, #1e1b4b, #0c4a6e, #000000)",
        ),
        PageSection::Testimonials => (
            "linear-gradient(135deg, #a855f7 0%, #ec4899 100%)",
            "linear-gradient(to bottom right, #3b0764, #500724, #000000)",
        ),
        PageSection::Pricing => (
            "linear-gradient(135deg, #0ea5e9 0%, #10b981 100%)",
            "linear-gradient(to bottom right, #082f49, #022c22, #000000)",
        ),
        PageSection::CallToAction => (
            "linear-gradient(135deg, #f43f5e 0%, #f97316 100%)",
            "linear-gradient(to bottom right, #4c0519, #431407, #000000)",
        ),
        PageSection::Footer | PageSection::Agent(_) => (
            "linear-gradient(135deg, #000000 0%, #111111 100%)",
            "linear-gradient(to bottom right, #000000, #020617, #000000)",
        ),
    }
}

/// Precomputed page background per section and palette.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Backdrop {
    bright: Vec<String>,
    dark: Vec<String>,
}

impl Backdrop {
    /// Gradients for every section of [`PageSection::all`].
    pub fn new(catalog: &Catalog) -> Self {
        let (bright, dark) = PageSection::all(catalog)
            .iter()
            .map(|section| match section {
                PageSection::Agent(id) => match catalog.get(id) {
                    Some(agent) => (agent.backdrop_bright.clone(), agent.backdrop_dark.clone()),
                    None => {
                        let (b, d) = static_gradients(section);
                        (b.to_string(), d.to_string())
                    }
                },
                other => {
                    let (b, d) = static_gradients(other);
                    (b.to_string(), d.to_string())
                }
            })
            .unzip();
        Self { bright, dark }
    }

    /// Gradient for `section` in `theme`; out of range falls back to the
    /// first section.
    pub fn gradient(&self, section: usize, theme: Theme) -> &str {
        let palette = match theme {
            Theme::Bright => &self.bright,
            Theme::Dark => &self.dark,
        };
        palette
            .get(section)
            .or_else(|| palette.first())
            .map_or("", String::as_str)
    }

    /// Number of sections covered.
    pub fn len(&self) -> usize {
        self.bright.len()
    }

    /// True when built from an empty section list.
    pub fn is_empty(&self) -> bool {
        self.bright.is_empty()
    }
}
