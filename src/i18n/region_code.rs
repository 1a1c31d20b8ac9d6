pub struct RegionCode {}

impl RegionCode {
    /// Returns the region code string representing the "unknown" region,
    /// used whenever a locale carries no resolvable country.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }

    /// Whether `region` is the unknown-region sentinel.
    pub fn is_unknown(region: &str) -> bool {
        region == Self::zz()
    }
}
