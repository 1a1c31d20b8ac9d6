/// Extracts the owned value from a `Cow`, or evaluates the given
/// fallback when the cow is borrowed.
///
/// Useful for functions returning `Cow<'_, str>` where `Cow::Borrowed`
/// marks "input was already in the wanted shape": the caller can then
/// build the owned value straight from its original input instead of
/// copying the borrowed slice.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;
