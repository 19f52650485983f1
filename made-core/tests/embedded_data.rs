//! Everything compiled into the page loads and agrees with itself.

use made_core::content::content;
use made_core::hover::lineup;
use made_core::scroll::{Backdrop, PageSection, Theme};
use made_core::showcase::{ShowcaseCycler, ShowcaseTable, showcases};
use made_core::{LandingConfig, catalog};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

const SHOWCASES_JSON: &str = include_str!("../data/showcases.json");
const LANDING_TOML: &str = include_str!("../../landing/config/landing.toml");

#[test]
fn every_agent_has_a_valid_showcase() {
    let strict = ShowcaseTable::from_json(SHOWCASES_JSON, catalog()).expect("strict load");
    assert_eq!(strict.len(), catalog().len());
    assert_eq!(showcases().len(), strict.len());

    for agent in catalog().agents() {
        let profile = showcases().profile(&agent.id).expect("profile per agent");
        assert_eq!(profile.tabs.len(), 5, "{}", agent.id);
        ShowcaseCycler::new(profile.clone()).expect("cycler accepts profile");
    }
}

#[test]
fn shipped_config_parses_and_matches_defaults() {
    let config = LandingConfig::from_toml(LANDING_TOML).expect("landing.toml");
    assert_eq!(config, LandingConfig::default());
}

#[test]
fn sections_and_backdrops_line_up() {
    let sections = PageSection::all(catalog());
    let backdrop = Backdrop::new(catalog());
    assert_eq!(sections.len(), 12);
    assert_eq!(backdrop.len(), sections.len());

    for i in 0..sections.len() {
        assert!(!backdrop.gradient(i, Theme::Bright).is_empty());
        assert!(!backdrop.gradient(i, Theme::Dark).is_empty());
    }
}

#[test]
fn hero_lineup_covers_the_roster() {
    let lineup: BTreeSet<&str> = lineup().collect();
    let roster: BTreeSet<&str> = catalog().agents().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(lineup, roster);
}

#[test]
fn pricing_has_exactly_one_free_and_one_popular_plan() {
    let plans = &content().plans;
    assert_eq!(plans.iter().filter(|p| p.is_free()).count(), 1);
    assert_eq!(plans.iter().filter(|p| p.popular).count(), 1);
}

#[test]
fn enzo_charts_carry_twelve_points() {
    let enzo = showcases().profile("enzo").expect("enzo profile");
    for id in ["forecast", "revenue"] {
        let tab = enzo.tabs.iter().find(|t| t.id == id).expect(id);
        assert_eq!(tab.demo.chart.len(), 12, "{id}");
        assert!(tab.demo.chart.iter().all(|&v| v <= 100), "{id}");
    }
}
