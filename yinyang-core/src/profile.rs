//! Static per-group content: themes, copy, and outbound links.

use crate::group::Group;

/// Theme color attached to each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Blue,
    Red,
}

/// Static profile content for one group.
#[derive(Debug, Clone, Copy)]
pub struct GroupProfile {
    pub theme: Theme,
    pub tagline: &'static str,
    pub about: &'static str,
    pub specialty: &'static str,
    pub instagram: &'static str,
    pub youtube: &'static str,
}

impl Group {
    pub fn profile(&self) -> GroupProfile {
        match self {
            Group::Yashika => GroupProfile {
                theme: Theme::Blue,
                tagline: "Thunder and Precision",
                about: "Yashika brings together traditional Japanese taiko drumming \
                        with modern energy. Our ensemble combines powerful rhythms \
                        with graceful choreography, creating performances that \
                        resonate with audiences worldwide.",
                specialty: "Traditional Wadaiko & Contemporary Fusion",
                instagram: "https://www.instagram.com/yashikadaiko/",
                youtube: "https://www.youtube.com/@yashikadaiko",
            },
            Group::Ryuu => GroupProfile {
                theme: Theme::Red,
                tagline: "Dragon's Heartbeat",
                about: "Ryuu embodies the spirit of the dragon through thunderous \
                        taiko performances. With roots in ancient traditions and \
                        eyes toward the future, we channel raw power and spiritual \
                        depth into every beat.",
                specialty: "High-Energy Performance & Traditional Kumi-Daiko",
                instagram: "https://instagram.com/ryuu_taiko",
                youtube: "https://youtube.com/@ryuu_taiko",
            },
        }
    }

    /// Booking contact for this group. Passed through unchanged, like the
    /// other outbound links.
    pub fn booking_email(&self) -> String {
        format!("booking@{}.com", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_match_the_site() {
        assert_eq!(Group::Yashika.profile().theme, Theme::Blue);
        assert_eq!(Group::Ryuu.profile().theme, Theme::Red);
    }

    #[test]
    fn booking_email_uses_group_literal() {
        assert_eq!(Group::Yashika.booking_email(), "booking@yashika.com");
        assert_eq!(Group::Ryuu.booking_email(), "booking@ryuu.com");
    }
}
