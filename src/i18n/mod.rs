mod locale;
mod region_code;

pub use locale::Locale;
pub use region_code::RegionCode;
