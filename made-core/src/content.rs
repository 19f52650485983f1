//! Static copy of the non-agent sections: features, testimonials, pricing,
//! call to action and footer.

use crate::animation::{Animation, Typewriter};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Duration;

const CONTENT_JSON: &str = include_str!("../data/content.json");

static CONTENT: LazyLock<Content> = LazyLock::new(|| match Content::from_json(CONTENT_JSON) {
    Ok(content) => content,
    Err(e) => {
        tracing::error!("page content rejected: {e}");
        Content::default()
    }
});

/// Read-only access to the compiled-in page copy.
pub fn content() -> &'static Content {
    &CONTENT
}

/// One feature card with its chat demo.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub gradient: String,
    /// What the visitor "asks"
    pub prompt: String,
    /// What the agent "answers", typed out
    pub response: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub handle: String,
    pub avatar: String,
    pub quote: String,
    pub growth: String,
    pub revenue: String,
    pub time: String,
    pub platform: String,
    #[serde(default)]
    pub verified: bool,
}

/// Headline figure above the testimonials.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub icon: String,
    pub value: String,
    pub label: String,
}

/// Monthly or annual billing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl BillingPeriod {
    /// Annual pricing takes 20% off, rounded down.
    pub fn price(self, monthly: u32) -> u32 {
        match self {
            BillingPeriod::Monthly => monthly,
            BillingPeriod::Annual => monthly * 4 / 5,
        }
    }
}

/// One pricing plan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Monthly price in whole dollars; 0 is free
    pub price: u32,
    /// Label printed after (or instead of) the price
    pub price_label: String,
    pub icon: String,
    pub gradient: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub limitations: Vec<String>,
    /// Button text
    pub cta: String,
    #[serde(default)]
    pub popular: bool,
    /// Shown only with annual billing
    #[serde(default)]
    pub savings: Option<String>,
}

impl Plan {
    /// True for the free tier.
    pub fn is_free(&self) -> bool {
        self.price == 0
    }

    /// Price text for the selected period: `Free Forever`, `$39`, ...
    pub fn display_price(&self, period: BillingPeriod) -> String {
        if self.is_free() {
            return self.price_label.clone();
        }
        format!("${}", period.price(self.price))
    }

    /// Savings line, annual billing only.
    pub fn savings_for(&self, period: BillingPeriod) -> Option<&str> {
        match period {
            BillingPeriod::Annual => self.savings.as_deref(),
            BillingPeriod::Monthly => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueProp {
    pub icon: String,
    pub text: String,
}

/// Call-to-action copy. The countdown itself lives in [`crate::countdown`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub badge: String,
    pub headline: String,
    pub body: String,
    pub value_props: Vec<ValueProp>,
    pub button: String,
    pub social_proof: String,
    pub rating: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub headline: String,
    pub tagline: String,
    pub button: String,
    pub links: Vec<FooterLink>,
    pub copyright: String,
}

/// Everything outside the hero and the agent showcases.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub features: Vec<Feature>,
    pub testimonials: Vec<Testimonial>,
    pub metrics: Vec<Metric>,
    pub plans: Vec<Plan>,
    pub cta: CallToAction,
    pub footer: Footer,
}

impl Content {
    /// Parse the page copy.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Active feature card and its typed answer.
///
/// The first card starts fully revealed; clicking another card types its
/// response from scratch.
#[derive(Clone, Debug)]
pub struct FeatureDemo {
    features: Vec<Feature>,
    active: usize,
    typewriter: Typewriter,
    typed_once: bool,
}

impl FeatureDemo {
    /// Demo over `features`, typing one character per `interval`.
    pub fn new(features: Vec<Feature>, interval: Duration) -> Self {
        let first = features.first().map(|f| f.response.clone()).unwrap_or_default();
        Self {
            features,
            active: 0,
            typewriter: Typewriter::new(first, interval),
            typed_once: false,
        }
    }

    /// Feature cards.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Active card position.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Active card.
    pub fn active(&self) -> Option<&Feature> {
        self.features.get(self.active)
    }

    /// Make card `index` active and start typing its response. Returns
    /// false for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(feature) = self.features.get(index) else {
            return false;
        };
        self.active = index;
        self.typewriter.retarget(feature.response.clone());
        self.typed_once = true;
        true
    }

    /// One typing step.
    pub fn tick(&mut self) -> bool {
        self.typewriter.tick()
    }

    /// True while characters are still coming.
    pub fn is_typing(&self) -> bool {
        self.typewriter.is_running()
    }

    /// Response text shown right now.
    pub fn response(&self) -> &str {
        if self.typed_once {
            self.typewriter.revealed()
        } else {
            self.typewriter.target()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_content_is_complete() {
        let c = content();
        assert_eq!(c.features.len(), 6);
        assert_eq!(c.testimonials.len(), 3);
        let metrics: Vec<&str> = c.metrics.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(metrics, ["50K+", "2.5B+", "$180M+", "10M+"]);
        assert_eq!(c.plans.len(), 3);
        assert!(!c.footer.links.is_empty());
    }

    #[test]
    fn annual_pricing_takes_twenty_percent_rounded_down() {
        let plans = &content().plans;
        let prices: Vec<String> = plans
            .iter()
            .map(|p| p.display_price(BillingPeriod::Annual))
            .collect();
        assert_eq!(prices, ["Free Forever", "$39", "$159"]);
        assert_eq!(plans[1].display_price(BillingPeriod::Monthly), "$49");
        assert_eq!(BillingPeriod::Annual.price(0), 0);
        assert_eq!(BillingPeriod::Annual.price(1), 0);
        assert_eq!(BillingPeriod::Annual.price(11), 8);
    }

    #[test]
    fn savings_only_with_annual_billing() {
        let pro = &content().plans[1];
        assert_eq!(pro.savings_for(BillingPeriod::Monthly), None);
        assert_eq!(
            pro.savings_for(BillingPeriod::Annual),
            Some("Save $240/year with annual")
        );
        assert_eq!(content().plans[0].savings_for(BillingPeriod::Annual), None);
    }

    #[test]
    fn feature_demo_types_selected_response() {
        let mut demo = FeatureDemo::new(content().features.clone(), Duration::from_millis(20));
        assert_eq!(demo.response(), content().features[0].response);
        assert!(!demo.is_typing());

        assert!(demo.select(2));
        assert_eq!(demo.response(), "");
        assert!(demo.is_typing());
        for _ in 0..5 {
            demo.tick();
        }
        assert_eq!(demo.response(), "Thumb");
        assert!(!demo.select(6));
        assert_eq!(demo.active_index(), 2);
    }
}
