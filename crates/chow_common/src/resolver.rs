//! Free-text location → state / city / LGA.
//!
//! A best-effort classifier over an ordered rule list. The first rule with a
//! marker substring in the text decides the state; inside that rule the area
//! table is scanned in declaration order and the first hit decides the LGA.
//! Declaration order is behavior: "Victoria Island" must be tested before
//! "vi", and a text naming two areas resolves to whichever is listed first.
//! Substring hits inside unrelated words are accepted.

use serde::{Deserialize, Serialize};

/// A state-level rule
#[derive(Debug, Clone, Copy)]
pub struct LocationRule {
    pub state: &'static str,
    pub city: &'static str,
    /// Lowercase substrings that place a text in this state
    pub markers: &'static [&'static str],
    /// Ordered `(pattern, lga)` pairs
    pub areas: &'static [(&'static str, &'static str)],
    /// LGA used when no area pattern matches
    pub fallback_lga: &'static str,
}

/// Result of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub state: String,
    pub city: String,
    pub lga: String,
}

pub static RULES: &[LocationRule] = &[
    LocationRule {
        state: "Lagos",
        city: "Lagos",
        markers: &[
            "lagos",
            "ikeja",
            "lekki",
            "yaba",
            "surulere",
            "ikoyi",
            "victoria island",
        ],
        areas: &[
            ("ikeja", "Ikeja"),
            ("allen", "Ikeja"),
            ("ogba", "Ikeja"),
            ("alausa", "Ikeja"),
            ("lekki", "Eti-Osa"),
            ("victoria island", "Eti-Osa"),
            ("vi", "Eti-Osa"),
            ("ikoyi", "Eti-Osa"),
            ("ajah", "Eti-Osa"),
            ("yaba", "Lagos Mainland"),
            ("ebute metta", "Lagos Mainland"),
            ("surulere", "Surulere"),
            ("gbagada", "Kosofe"),
            ("ogudu", "Kosofe"),
            ("maryland", "Kosofe"),
            ("ojota", "Kosofe"),
            ("oshodi", "Oshodi-Isolo"),
            ("isolo", "Oshodi-Isolo"),
            ("mushin", "Mushin"),
            ("shomolu", "Shomolu"),
            ("festac", "Amuwo-Odofin"),
        ],
        fallback_lga: "Ikeja",
    },
    LocationRule {
        state: "FCT",
        city: "Abuja",
        markers: &[
            "abuja",
            "garki",
            "wuse",
            "gwarinpa",
            "maitama",
            "asokoro",
            "jabi",
            "utako",
            "kubwa",
            "nyanya",
            "karu",
            "lugbe",
            "gwagwalada",
        ],
        areas: &[
            ("gwagwalada", "Gwagwalada"),
            ("kuje", "Kuje"),
            ("abaji", "Abaji"),
        ],
        fallback_lga: "Abuja Municipal",
    },
    LocationRule {
        state: "Oyo",
        city: "Ibadan",
        markers: &["ibadan"],
        areas: &[
            ("bodija", "Ibadan North"),
            ("agodi", "Ibadan North"),
            ("mokola", "Ibadan North"),
            ("ring road", "Ibadan South-West"),
            ("oke-ado", "Ibadan South-West"),
            ("iwo road", "Ibadan North-East"),
            ("mapo", "Ibadan South-East"),
        ],
        fallback_lga: "Ibadan North",
    },
    LocationRule {
        state: "Rivers",
        city: "Port Harcourt",
        markers: &["port harcourt"],
        areas: &[
            ("rumuokoro", "Obio-Akpor"),
            ("choba", "Obio-Akpor"),
            ("eliozu", "Obio-Akpor"),
        ],
        fallback_lga: "Port Harcourt",
    },
    LocationRule {
        state: "Edo",
        city: "Benin City",
        markers: &["benin"],
        areas: &[("ugbor", "Egor")],
        fallback_lga: "Oredo",
    },
];

impl LocationRule {
    fn matches(&self, text: &str) -> bool {
        self.markers.iter().any(|m| text.contains(m))
    }

    fn lga_for(&self, text: &str) -> &'static str {
        self.areas
            .iter()
            .find(|(pattern, _)| text.contains(pattern))
            .map(|(_, lga)| *lga)
            .unwrap_or(self.fallback_lga)
    }
}

/// Resolve free text against [`RULES`]. `None` when no marker is present.
pub fn resolve(text: &str) -> Option<ResolvedLocation> {
    resolve_with(RULES, text)
}

/// Resolve against an explicit rule list
pub fn resolve_with(rules: &[LocationRule], text: &str) -> Option<ResolvedLocation> {
    let text = text.to_lowercase();
    let rule = rules.iter().find(|r| r.matches(&text))?;

    Some(ResolvedLocation {
        state: rule.state.to_string(),
        city: rule.city.to_string(),
        lga: rule.lga_for(&text).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations;

    #[test]
    fn test_lekki_resolves_to_eti_osa() {
        let r = resolve("Lekki Phase 1, Lagos").unwrap();
        assert_eq!(r.state, "Lagos");
        assert_eq!(r.city, "Lagos");
        assert_eq!(r.lga, "Eti-Osa");
    }

    #[test]
    fn test_abuja() {
        let r = resolve("Wuse 2, Abuja").unwrap();
        assert_eq!(r.state, "FCT");
        assert_eq!(r.city, "Abuja");
        assert_eq!(r.lga, "Abuja Municipal");
    }

    #[test]
    fn test_unknown_text() {
        assert!(resolve("Somewhere in Kano").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn test_state_without_area_uses_fallback() {
        let r = resolve("Lagos").unwrap();
        assert_eq!(r.lga, "Ikeja");
        let r = resolve("Port Harcourt").unwrap();
        assert_eq!(r.lga, "Port Harcourt");
    }

    #[test]
    fn test_first_listed_area_wins() {
        // Both ikoyi and surulere appear; ikoyi is declared first
        let r = resolve("Balawa, Ikoyi, Surulere").unwrap();
        assert_eq!(r.lga, "Eti-Osa");
        // ikeja is declared before yaba
        let r = resolve("Yaba via Ikeja").unwrap();
        assert_eq!(r.lga, "Ikeja");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Lagos is tested before FCT
        let r = resolve("Ikeja, not Abuja").unwrap();
        assert_eq!(r.state, "Lagos");
    }

    #[test]
    fn test_case_insensitive() {
        let r = resolve("ADMIRALTY WAY, LEKKI").unwrap();
        assert_eq!(r.lga, "Eti-Osa");
    }

    #[test]
    fn test_fallbacks_are_primary_lgas() {
        for rule in RULES {
            assert_eq!(locations::primary_lga(rule.state), Some(rule.fallback_lga));
        }
    }

    #[test]
    fn test_area_lgas_exist_in_table() {
        for rule in RULES {
            let lgas = locations::lgas_for_state(rule.state).unwrap();
            for (_, lga) in rule.areas {
                assert!(lgas.contains(lga), "{} missing from {}", lga, rule.state);
            }
        }
    }
}
