//! Currency marker escaping
//!
//! The normalizer escapes every `$` so that markdown renderers do not read it
//! as a math delimiter. Renderers that print plain text turn it back.

use std::borrow::Cow;

/// HTML numeric character reference for `$`
pub const DOLLAR_ENTITY: &str = "&#36;";

/// Replace every [`DOLLAR_ENTITY`] with a literal `$`.
#[must_use]
pub fn unescape_currency(text: &str) -> Cow<'_, str> {
    if text.contains(DOLLAR_ENTITY) {
        Cow::Owned(text.replace(DOLLAR_ENTITY, "$"))
    } else {
        Cow::Borrowed(text)
    }
}
