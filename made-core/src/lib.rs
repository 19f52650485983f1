//! # made-core
//!
//! Logic behind the Made landing page, kept free of any browser dependency so
//! it can be exercised on the host with plain `cargo test`.
//!
//! The page itself is a Leptos client-side app (see the `landing` crate). It
//! owns the DOM, the timers and the event listeners; everything those
//! callbacks mutate lives here:
//!
//! - [`catalog`] - the six agents and their skills, validated once
//! - [`animation`] - ramp / cycle / typewriter / script state machines
//! - [`showcase`] - per-agent showcase profiles and the timed tab cycler
//! - [`timers`] - bookkeeping for live interval handles
//! - [`scroll`] - section index, section tracker, background palettes
//! - [`hover`] - hero avatar hover roster, layout slots, parallax
//! - [`content`] - features, testimonials, pricing
//! - [`countdown`] - call-to-action countdown
//! - [`config`] - landing configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use made_core::showcase::{showcases, ShowcaseCycler, TimerKind};
//!
//! let profile = showcases().profile("enzo").expect("enzo profile").clone();
//! let mut cycler = ShowcaseCycler::new(profile).unwrap();
//!
//! // Nothing runs until the section is on screen.
//! assert!(cycler.timer_requests().is_empty());
//!
//! cycler.set_visible(true);
//! let generation = cycler.generation();
//! cycler.tick(TimerKind::Cycle, generation);
//! assert_eq!(cycler.snapshot().cycle_index, 1);
//! ```
//!
//! ---
//!
//! Developed with 💀 by The Made Team (c)2025

#![warn(missing_docs)]

pub mod animation;
pub mod catalog;
pub mod config;
#[allow(missing_docs)] // plain copy records, field names say it all
pub mod content;
pub mod countdown;
pub mod error;
pub mod hover;
pub mod scroll;
pub mod showcase;
pub mod timers;

pub use catalog::{Agent, Catalog, Skill, catalog};
pub use config::LandingConfig;
pub use error::{CatalogError, ConfigError, ShowcaseError};
pub use scroll::{Theme, compute_section};
pub use showcase::{ShowcaseCycler, ShowcaseState, TimerKind, TimerRequest};
