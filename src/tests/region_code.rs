pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn au() -> &'static str {
        "AU"
    }

    pub fn br() -> &'static str {
        "BR"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn fr() -> &'static str {
        "FR"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn jp() -> &'static str {
        "JP"
    }

    pub fn ru() -> &'static str {
        "RU"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }
}
