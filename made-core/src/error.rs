//! Error types for the compiled-in data tables and configuration.
//!
//! None of these ever reach the visitor: loaders log them and fall back to
//! an empty table or the default configuration.

use thiserror::Error;

/// Agent roster failed to load or validate.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The embedded JSON could not be parsed.
    #[error("failed to parse agent catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// The roster has no agents.
    #[error("agent catalog is empty")]
    Empty,
    /// An agent has a blank id.
    #[error("agent at position {0} has an empty id")]
    EmptyId(usize),
    /// Two agents share an id.
    #[error("duplicate agent id `{0}`")]
    DuplicateId(String),
    /// An agent has a blank display name.
    #[error("agent `{0}` has an empty name")]
    EmptyName(String),
    /// An agent lists no skills.
    #[error("agent `{0}` has no skills")]
    NoSkills(String),
    /// A skill has a blank name.
    #[error("agent `{agent}` has a skill with an empty name at position {index}")]
    EmptySkillName {
        /// Owning agent id.
        agent: String,
        /// Position of the skill in the agent's list.
        index: usize,
    },
}

/// Showcase profile table failed to load or validate.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// The embedded JSON could not be parsed.
    #[error("failed to parse showcase profiles: {0}")]
    Parse(#[from] serde_json::Error),
    /// A profile references an agent the catalog does not know.
    #[error("showcase profile references unknown agent `{0}`")]
    UnknownAgent(String),
    /// A profile has no tabs.
    #[error("showcase `{0}` has no tabs")]
    NoTabs(String),
    /// Two tabs of one profile share an id.
    #[error("showcase `{agent}` has duplicate tab id `{tab}`")]
    DuplicateTab {
        /// Owning agent id.
        agent: String,
        /// Offending tab id.
        tab: String,
    },
    /// An animation interval of zero milliseconds.
    #[error("tab `{tab}`: {kind} interval must be greater than zero")]
    ZeroInterval {
        /// Offending tab id.
        tab: String,
        /// Animation kind name.
        kind: &'static str,
    },
    /// A ramp with a step of zero would never move.
    #[error("tab `{0}`: ramp step must be greater than zero")]
    ZeroStep(String),
    /// A ramp whose target is below its start.
    #[error("tab `{tab}`: ramp target {target} is below start {start}")]
    InvertedRange {
        /// Offending tab id.
        tab: String,
        /// Ramp start value.
        start: u32,
        /// Ramp target value.
        target: u32,
    },
    /// A script with nothing to play.
    #[error("tab `{0}`: script has no steps")]
    EmptyScript(String),
}

/// Landing configuration failed to load or validate.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse landing config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is outside its accepted range.
    #[error("invalid value for `{key}`: {reason}")]
    Invalid {
        /// Dotted key of the offending value.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}
