// Copyright (C) 2025 rphoneformat developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

/// Strips every non-digit character from `raw`, preserving digit order.
///
/// Non-ASCII decimal digits (e.g. full-width `６`) are normalized to their
/// ASCII form and kept; `+`, whitespace, letters and punctuation are
/// dropped. Returns `Cow::Borrowed` when the input already consists of
/// ASCII digits only, so the common "already bare" case does not allocate.
pub fn extract_digits(raw: &str) -> Cow<'_, str> {
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(raw);
    }

    let normalized = dec_from_char::normalize_decimals(raw);
    let mut digits = String::with_capacity(raw.len());
    for c in normalized.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        }
    }
    Cow::Owned(digits)
}
