mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod format_table;
pub mod phone_number_formatter;

use std::sync::LazyLock;

use crate::phoneformatter::phone_number_formatter::PhoneNumberFormatter;

/// Process-wide formatter over the bundled format table, initialized
/// lazily on first use and shared read-only across threads.
pub static PHONE_NUMBER_FORMATTER: LazyLock<PhoneNumberFormatter> =
    LazyLock::new(|| PhoneNumberFormatter::new());
