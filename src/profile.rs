use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::contributor::DriverOptions;
use crate::options::{self, SafariOptions};

pub const BROWSER_NAME: &str = "browserName";

/// Per-driver-kind record: the fixed browser name, the concrete options type
/// the driver accepts, and the alias table that maps snake_case and bare
/// camelCase spellings to canonical wire keys.
pub struct DriverProfile {
    pub browser_name: &'static str,
    pub options_type: &'static str,
    accepts: fn(&dyn DriverOptions) -> bool,
    aliases: &'static Lazy<HashMap<&'static str, &'static str>>,
}

impl DriverProfile {
    pub fn accepts(&self, options: &dyn DriverOptions) -> bool {
        (self.accepts)(options)
    }

    /// Total: table hit resolves to the canonical wire key, anything else
    /// passes through verbatim so custom and vendor keys survive unchanged.
    pub fn normalize_key<'k>(&self, key: &'k str) -> &'k str {
        match self.aliases.get(key) {
            Some(wire) => wire,
            None => key,
        }
    }
}

static SAFARI_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let pairs: &[(&str, &str)] = &[
        ("automatic_inspection", options::AUTOMATIC_INSPECTION),
        ("automaticInspection", options::AUTOMATIC_INSPECTION),
        ("automatic_profiling", options::AUTOMATIC_PROFILING),
        ("automaticProfiling", options::AUTOMATIC_PROFILING),
        ("browser_name", BROWSER_NAME),
        ("browser_version", "browserVersion"),
        ("platform_name", "platformName"),
        ("accept_insecure_certs", "acceptInsecureCerts"),
        ("page_load_strategy", "pageLoadStrategy"),
        ("strict_file_interactability", "strictFileInteractability"),
        ("unhandled_prompt_behavior", "unhandledPromptBehavior"),
        ("set_window_rect", "setWindowRect"),
    ];
    pairs.iter().copied().collect()
});

fn accepts_safari(options: &dyn DriverOptions) -> bool {
    options.as_any().is::<SafariOptions>()
}

static SAFARI: DriverProfile = DriverProfile {
    browser_name: options::SAFARI,
    options_type: "SafariOptions",
    accepts: accepts_safari,
    aliases: &SAFARI_ALIASES,
};

pub fn safari() -> &'static DriverProfile {
    &SAFARI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_aliases_resolve_to_wire_keys() {
        let profile = safari();
        assert_eq!(
            profile.normalize_key("automatic_inspection"),
            "safari:automaticInspection"
        );
        assert_eq!(profile.normalize_key("browser_name"), "browserName");
        assert_eq!(
            profile.normalize_key("accept_insecure_certs"),
            "acceptInsecureCerts"
        );
    }

    #[test]
    fn bare_camel_case_gains_vendor_prefix() {
        assert_eq!(
            safari().normalize_key("automaticInspection"),
            "safari:automaticInspection"
        );
    }

    #[test]
    fn canonical_and_unknown_keys_pass_through() {
        let profile = safari();
        assert_eq!(profile.normalize_key("browserName"), "browserName");
        assert_eq!(
            profile.normalize_key("safari:automaticInspection"),
            "safari:automaticInspection"
        );
        assert_eq!(profile.normalize_key("company:key"), "company:key");
        assert_eq!(profile.normalize_key("invalid"), "invalid");
    }

    #[test]
    fn safari_profile_accepts_only_safari_options() {
        assert!(safari().accepts(&SafariOptions::new()));
    }
}
