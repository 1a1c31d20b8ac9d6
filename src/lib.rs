mod phoneformatter;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// I decided to create this module because there are many
/// boilerplate places in the code that can be replaced with macros,
/// the name of which will describe what is happening more
/// clearly than a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

pub use i18n::Locale;
pub use phoneformatter::{
    PHONE_NUMBER_FORMATTER,
    errors::FormatTableError,
    format_table::{FormatTable, FormatTemplate},
    phone_number_formatter::PhoneNumberFormatter,
};
