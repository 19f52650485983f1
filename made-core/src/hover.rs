//! Hero avatar line-up: which agent is hovered, which media to show, where
//! each avatar sits and how far the scene drifts with the mouse.

use crate::catalog::Agent;
use std::collections::HashSet;

/// Media to render for one avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarMedia<'a> {
    /// Looping muted video
    Video(&'a str),
    /// Transparent still image
    Image(&'a str),
    /// Emoji glyph
    Glyph(&'a str),
}

/// Exclusive hover state over the roster plus the preload ledger.
#[derive(Clone, Debug, Default)]
pub struct HoverRoster {
    hovered: Option<String>,
    preloaded: HashSet<String>,
}

impl HoverRoster {
    /// Nothing hovered, nothing preloaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered `id`. It becomes the only hovered agent.
    pub fn enter(&mut self, id: &str) {
        if self.hovered.as_deref() != Some(id) {
            tracing::debug!(agent = id, "avatar hovered");
            self.hovered = Some(id.to_string());
        }
    }

    /// Pointer left `id`. A late leave of an agent that is no longer the
    /// hovered one changes nothing.
    pub fn leave(&mut self, id: &str) {
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    /// The preload of `id`'s video finished.
    pub fn mark_preloaded(&mut self, id: &str) {
        self.preloaded.insert(id.to_string());
    }

    /// Whether `id`'s video is ready to play.
    pub fn is_preloaded(&self, id: &str) -> bool {
        self.preloaded.contains(id)
    }

    /// Whether `id` is hovered.
    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id)
    }

    /// Currently hovered agent.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Video while hovered and preloaded, otherwise the image, otherwise
    /// the glyph.
    pub fn media_for<'a>(&self, agent: &'a Agent) -> AvatarMedia<'a> {
        if self.is_hovered(&agent.id) && self.is_preloaded(&agent.id) {
            if let Some(video) = agent.showcase_video() {
                return AvatarMedia::Video(video);
            }
        }
        match agent.hero_image.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(image) => AvatarMedia::Image(image),
            None => AvatarMedia::Glyph(&agent.avatar),
        }
    }
}

/// Fixed bounding box of one avatar in the hero line-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvatarSlot {
    /// Box width in px
    pub width: u32,
    /// Box height in px
    pub height: u32,
    /// Horizontal offset from the center in px
    pub offset_x: i32,
    /// Lift above the baseline in px
    pub offset_bottom: u32,
    /// Stacking order (higher is in front)
    pub z_index: u32,
    /// Entrance animation delay in seconds
    pub delay_s: f64,
}

// Left to right as laid out in the hero artwork: (id, width, height, x, bottom).
const LINEUP: [(&str, u32, u32, i32, u32); 6] = [
    ("enzo", 201, 206, -380, 2),
    ("lila", 184, 185, -210, 23),
    ("amie", 189, 191, -50, 17),
    ("milo", 227, 208, 120, 0),
    ("zara", 151, 175, 310, 33),
    ("remi", 213, 195, 430, 13),
];

const ENTRANCE_STAGGER_S: f64 = 0.08;

/// Agent ids in hero line-up order.
pub fn lineup() -> impl Iterator<Item = &'static str> {
    LINEUP.iter().map(|(id, ..)| *id)
}

/// Slot of `id`; unknown ids get a 200x200 box at the center.
pub fn slot_for(id: &str) -> AvatarSlot {
    match LINEUP.iter().position(|(slot_id, ..)| *slot_id == id) {
        Some(pos) => {
            let (_, width, height, offset_x, offset_bottom) = LINEUP[pos];
            AvatarSlot {
                width,
                height,
                offset_x,
                offset_bottom,
                z_index: (LINEUP.len() - pos) as u32,
                delay_s: pos as f64 * ENTRANCE_STAGGER_S,
            }
        }
        None => AvatarSlot {
            width: 200,
            height: 200,
            offset_x: 0,
            offset_bottom: 0,
            z_index: 0,
            delay_s: 0.0,
        },
    }
}

/// Default parallax strength in px.
pub const DEFAULT_PARALLAX_STRENGTH: f64 = 10.0;

/// Scene offset for a pointer at (`x`, `y`) in a `w` x `h` viewport.
pub fn parallax(x: f64, y: f64, w: f64, h: f64, strength: f64) -> (f64, f64) {
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(w) || !usable(h) || !x.is_finite() || !y.is_finite() || !strength.is_finite() {
        return (0.0, 0.0);
    }
    ((x / w - 0.5) * strength, (y / h - 0.5) * strength)
}
