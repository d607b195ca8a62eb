//! Deterministic vendor name generation from curated word lists.
//!
//! All generation is deterministic (same RNG seed = same names).

use crate::rng::DeskRng;

pub struct VendorNameGenerator;

impl VendorNameGenerator {
    /// Generate a vendor trade name: "Prefix Sector Suffix".
    pub fn generate(rng: &mut DeskRng) -> String {
        let prefix = rng.pick(Self::prefixes());
        let sector = rng.pick(Self::sectors());
        let suffix = rng.pick(Self::suffixes());
        format!("{prefix} {sector} {suffix}")
    }

    fn prefixes() -> &'static [&'static str] {
        &[
            "Bharat", "Sunrise", "Greenfield", "National", "Apex", "Pioneer", "Shree", "Unity",
            "Golden", "Eastern", "Western", "Capital", "Summit", "Heritage", "Prime", "Sterling",
            "Horizon", "Crescent", "Everest", "Lotus",
        ]
    }

    fn sectors() -> &'static [&'static str] {
        &[
            "Infrastructure",
            "Constructions",
            "IT Solutions",
            "Engineering",
            "Logistics",
            "Consultants",
            "Supplies",
            "Utilities",
            "Fabricators",
            "Projects",
        ]
    }

    fn suffixes() -> &'static [&'static str] {
        &["Ltd", "Pvt Ltd", "LLP", "& Co", "Enterprises"]
    }
}
