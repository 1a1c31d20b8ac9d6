/// The character marking a digit slot inside a display format template.
/// This matches the placeholder used by the bundled property list.
pub const DIGIT_SLOT: char = '#';

/// Character class of everything a display format template may contain:
/// digit slots plus the literal separators seen in the bundled table
/// (spaces, hyphens, parentheses, dots, slashes and a plus sign).
/// Literal digits are deliberately absent so that stripping a formatted
/// number always yields exactly the digits that were rendered into it.
pub const TEMPLATE_CHARS: &str = r"#()+\-\. /";

/// Generic grouping used when no region template applies: the trailing
/// seven digits form the local-number block, split three-then-four.
pub const FALLBACK_LOCAL_NUMBER_LENGTH: usize = 7;
pub const FALLBACK_EXCHANGE_LENGTH: usize = 3;

/// The bundled region-to-display-formats property list, compiled into
/// the library and parsed once at startup.
pub const PHONE_FORMATS_PLIST: &[u8] = include_bytes!("../../resources/phone_formats.plist");
