//! UI Components

pub mod cta;
pub mod features;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod pricing;
pub mod splash;
pub mod splash_gate;
pub mod stats;
pub mod testimonials;

pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use pricing::Pricing;
pub use splash::Splash;
pub use splash_gate::SplashGate;
pub use stats::StatsBand;
pub use testimonials::Testimonials;
