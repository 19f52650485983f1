// Landing page sections
// Developed with 💀 by The Made Team (c)2025

mod cta;
mod features;
mod footer;
mod hero;
mod nav;
mod page;
mod pricing;
mod showcase;
mod testimonials;

pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use page::Page;
pub use pricing::Pricing;
pub use showcase::AgentShowcase;
pub use testimonials::Testimonials;
