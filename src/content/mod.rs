// src/content/mod.rs
pub mod cache;
pub mod decode;
pub mod fetch;

use std::collections::HashMap;

pub use cache::ContentService;
pub use fetch::ContentFetcher;

/// Final key-value text content used to populate page copy.
pub type ContentMap = HashMap<String, String>;

const DEFAULT_ENTRIES: [(&str, &str); 25] = [
        ("heroTitle", "Join the Hundred. Change Lives"),
        ("heroSubtext", "Join an exclusive circle of changemakers funding confidence and self-worth for young people who need it most."),
        ("impact1", "Personalized Mentorship"),
        ("impact2", "Confidence Building Workshops"),
        ("impact3", "Leadership Development"),
        ("investmentFunds", "Your $25/month directly funds program materials, workshop supplies, mentorship resources, and mental wellness tools for young people who need them most. Based on current costs this supports about 2 participants each month."),
        ("changemakerBenefit1", "Personalized welcome kit & digital badge"),
        ("changemakerBenefit2", "Featured on Impact Wall & quarterly spotlights"),
        ("changemakerBenefit3", "Early access to events & volunteer opportunities"),
        ("changemakerBenefit4", "Annual celebration invitation"),
        ("changemakerBenefit5", "Quarterly impact reports & member updates"),
        ("changemakerBenefit6", "Free digital event access"),
        ("changemakerBenefit7", "Founding changemaker recognition"),
        ("testimonial1Quote", "\"The confidence workshops helped me find my voice. I never thought I could speak in front of my class, but now I'm mentoring others.\""),
        ("testimonial1Author", "Alex Johnson"),
        ("testimonial1Role", "Workshop Participant, Age 16"),
        ("testimonial1Initials", "AJ"),
        ("testimonial2Quote", "\"Giving $25 a month is the easiest high-impact habit I have. Seeing the monthly updates makes me feel connected to the change.\""),
        ("testimonial2Author", "Sarah Martinez"),
        ("testimonial2Role", "Monthly Supporter"),
        ("testimonial2Initials", "SM"),
        ("testimonial3Quote", "\"The mentorship program gave me the tools to believe in myself. Now I'm applying to college with confidence I never had before.\""),
        ("testimonial3Author", "Taylor Kim"),
        ("testimonial3Role", "Mentorship Graduate, Age 17"),
        ("testimonial3Initials", "TK"),
];

lazy_static::lazy_static! {
    static ref DEFAULT_CONTENT: ContentMap = DEFAULT_ENTRIES
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
}

/// Hardcoded fallback copy. Always available, never empty.
pub fn default_content() -> ContentMap {
    DEFAULT_CONTENT.clone()
}

/// Merge remote overrides on top of the defaults. Override values win for
/// matching keys; keys unknown to the defaults are still carried through.
pub fn merge_overrides(overrides: HashMap<String, String>) -> ContentMap {
    let mut content = default_content();
    content.extend(overrides);
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_page_copy() {
        let content = default_content();
        assert_eq!(content.len(), 25);
        assert_eq!(
            content.get("heroTitle").map(String::as_str),
            Some("Join the Hundred. Change Lives")
        );
        assert!(content.contains_key("changemakerBenefit7"));
        assert!(content.contains_key("testimonial3Initials"));
    }

    #[test]
    fn overrides_replace_matching_defaults() {
        let mut overrides = HashMap::new();
        overrides.insert("heroTitle".to_string(), "New title".to_string());

        let content = merge_overrides(overrides);
        assert_eq!(content.get("heroTitle").map(String::as_str), Some("New title"));
        // Untouched keys keep their default values
        assert_eq!(
            content.get("impact1").map(String::as_str),
            Some("Personalized Mentorship")
        );
    }

    #[test]
    fn unknown_override_keys_are_kept() {
        let mut overrides = HashMap::new();
        overrides.insert("bannerText".to_string(), "Matching gift week!".to_string());

        let content = merge_overrides(overrides);
        assert_eq!(content.len(), 26);
        assert_eq!(
            content.get("bannerText").map(String::as_str),
            Some("Matching gift week!")
        );
    }

    #[test]
    fn merge_is_idempotent() {
        let mut overrides = HashMap::new();
        overrides.insert("heroTitle".to_string(), "X".to_string());
        overrides.insert("extra".to_string(), "Y".to_string());

        let once = merge_overrides(overrides.clone());
        let twice = {
            let mut content = merge_overrides(overrides.clone());
            content.extend(overrides);
            content
        };
        assert_eq!(once, twice);
    }
}
