//! Display content for the landing page
//!
//! Hard-coded marketing copy. Everything here is immutable for the lifetime
//! of a page view; there is no backing store.

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub static FEATURES: [Feature; 6] = [
    Feature {
        icon: "📱",
        title: "Mobile-First Broadcasting",
        description: "Turn your Android phone into a professional broadcasting studio instantly",
        color: "text-purple-400",
    },
    Feature {
        icon: "☁️",
        title: "Cloud-Powered Processing",
        description: "Advanced video processing handled by our powerful cloud servers",
        color: "text-indigo-400",
    },
    Feature {
        icon: "⚡",
        title: "Lightning Setup",
        description: "From download to live streaming in under 5 minutes - no technical expertise needed",
        color: "text-purple-500",
    },
    Feature {
        icon: "👥",
        title: "Team Collaboration",
        description: "Multiple cameras, seamless switching, professional overlays - all controlled by your team",
        color: "text-purple-600",
    },
    Feature {
        icon: "📺",
        title: "Multi-Platform Streaming",
        description: "Stream directly to Facebook Live, YouTube Live, and other major platforms",
        color: "text-indigo-600",
    },
    Feature {
        icon: "📊",
        title: "Professional Controls",
        description: "Match widgets, lineups, substitutions, replays, and advertisements - all at your fingertips",
        color: "text-purple-700",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub club: &'static str,
    pub text: &'static str,
    /// Star rating, 1 through 5.
    pub rating: u8,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Coach Michael",
        club: "Nairobi FC",
        text: "Transformed how we broadcast our matches. Our fans love watching from anywhere!",
        rating: 5,
    },
    Testimonial {
        name: "Sarah K.",
        club: "Mombasa United",
        text: "Setup took 5 minutes. Now we stream every match professionally.",
        rating: 5,
    },
    Testimonial {
        name: "David M.",
        club: "Kisumu Warriors",
        text: "Amazing quality and so affordable. Game changer for amateur clubs!",
        rating: 5,
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: [Stat; 3] = [
    Stat { value: "5 min", label: "Setup Time" },
    Stat { value: "99%", label: "Cost Savings" },
    Stat { value: "24/7", label: "Support" },
];

pub static GLOBAL_STATS: [Stat; 4] = [
    Stat { value: "10,000+", label: "Matches Streamed" },
    Stat { value: "500+", label: "Active Clubs" },
    Stat { value: "50+", label: "Countries" },
    Stat { value: "1M+", label: "Viewers Reached" },
];

pub const PLAN_NAME: &str = "Pro Plan";
pub const PLAN_PRICE: &str = "$1";
pub const PLAN_PRICE_NOTE: &str = "+ 50 KSH per additional match";

pub static PLAN_FEATURES: [&str; 7] = [
    "Up to 8 matches per month",
    "Professional overlays & controls",
    "Multi-platform streaming",
    "Cloud video processing",
    "Real-time scene switching",
    "Web dashboard access",
    "24/7 customer support",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonial_ratings_are_in_range() {
        for testimonial in &TESTIMONIALS {
            assert!((1..=5).contains(&testimonial.rating));
        }
    }

    #[test]
    fn rotator_content_count_matches_the_page() {
        assert_eq!(TESTIMONIALS.len(), 3);
    }
}
