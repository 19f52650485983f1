//! Agent roster.
//!
//! The six agents are compiled in from `data/agents.json`, parsed and
//! validated on first access, and handed out as a `&'static Catalog`.
//! Components never see a half-filled record: every field the page renders
//! is either required here or an explicit `Option`.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

const AGENTS_JSON: &str = include_str!("../data/agents.json");

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| match Catalog::from_json(AGENTS_JSON) {
    Ok(catalog) => {
        tracing::debug!(agents = catalog.len(), "agent catalog loaded");
        catalog
    }
    Err(e) => {
        tracing::error!("agent catalog rejected: {e}");
        Catalog::default()
    }
});

/// Read-only access to the compiled-in roster.
///
/// Falls back to an empty catalog if the embedded data fails validation, so
/// the page renders no agents rather than panicking.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// One capability attributed to an agent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name
    pub name: String,
    /// One-line pitch
    pub description: String,
    /// Emoji icon
    pub icon: String,
    /// Illustrative outcome, quoted under the description
    #[serde(default)]
    pub example: Option<String>,
}

/// A marketing persona.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Stable lowercase id (`milo`, `zara`, ...)
    pub id: String,
    /// Display name
    pub name: String,
    /// Job title shown under the name
    pub role: String,
    /// Short two-verb tagline
    pub tagline: String,
    /// Personality blurb
    pub personality: String,
    /// Quote shown in the showcase
    pub catchphrase: String,
    /// Longer description
    pub description: String,
    /// Accent CSS color
    pub accent: String,
    /// Gradient utility classes for buttons and glows
    pub gradient: String,
    /// Glow CSS color
    pub glow: String,
    /// Glyph used when no image or video is available
    pub avatar: String,
    /// Transparent still image
    #[serde(default)]
    pub hero_image: Option<String>,
    /// Idle loop video
    #[serde(default)]
    pub video_idle: Option<String>,
    /// Welcome loop video, played on hover
    #[serde(default)]
    pub video_welcome: Option<String>,
    /// Page background while this agent's section is current (bright palette)
    pub backdrop_bright: String,
    /// Page background while this agent's section is current (dark palette)
    pub backdrop_dark: String,
    /// Ordered skills
    pub skills: Vec<Skill>,
}

impl Agent {
    /// Video to show in the showcase, preferring the welcome loop.
    pub fn showcase_video(&self) -> Option<&str> {
        let usable = |v: &&str| !v.trim().is_empty();
        self.video_welcome
            .as_deref()
            .filter(usable)
            .or_else(|| self.video_idle.as_deref().filter(usable))
    }
}

/// Validated, ordered agent roster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    agents: Vec<Agent>,
}

impl Catalog {
    /// Parse and validate a JSON array of agents.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let agents: Vec<Agent> = serde_json::from_str(json)?;
        Self::new(agents)
    }

    /// Validate an agent list.
    pub fn new(agents: Vec<Agent>) -> Result<Self, CatalogError> {
        if agents.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for (position, agent) in agents.iter().enumerate() {
            if agent.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(agent.id.as_str()) {
                return Err(CatalogError::DuplicateId(agent.id.clone()));
            }
            if agent.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(agent.id.clone()));
            }
            if agent.skills.is_empty() {
                return Err(CatalogError::NoSkills(agent.id.clone()));
            }
            if let Some(index) = agent.skills.iter().position(|s| s.name.trim().is_empty()) {
                return Err(CatalogError::EmptySkillName {
                    agent: agent.id.clone(),
                    index,
                });
            }
        }

        Ok(Self { agents })
    }

    /// All agents in page order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Look an agent up by id.
    pub fn get(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Position of an agent in page order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.agents.iter().position(|a| a.id == id)
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// True when no agents are loaded.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
