//! Page modules

pub mod landing;

pub use landing::LandingPage;
