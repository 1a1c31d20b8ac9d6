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

use std::env;

/// Environment variables consulted for the process-wide locale, in
/// POSIX precedence order.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// A locale identifier, e.g. `en_US.UTF-8`, `en-US` or `de`.
///
/// The only piece of a locale this crate cares about is the two-letter
/// region subtag; everything else in the tag is carried verbatim and
/// ignored. A `Locale` is read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
}

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// Reads the process-wide locale from the environment, consulting
    /// `LC_ALL`, `LC_MESSAGES` and `LANG` in that order. An unset or
    /// empty environment yields a locale with no region, which callers
    /// downstream treat as the unknown region.
    pub fn current() -> Self {
        let tag = LOCALE_ENV_VARS
            .iter()
            .find_map(|name| env::var(name).ok().filter(|value| !value.is_empty()))
            .unwrap_or_default();
        Self { tag }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Derives the upper-case two-letter region code from the tag, if
    /// present. Both POSIX (`en_US.UTF-8`, `sv_SE@euro`) and BCP 47
    /// (`en-US`) spellings are understood. Plain language tags (`de`,
    /// `C`, `POSIX`) have no region and return `None`.
    pub fn region_code(&self) -> Option<String> {
        // Cut the codeset/modifier suffix first, then walk the subtags
        // after the language looking for a two-letter alphabetic one.
        let tag = self.tag.split(['.', '@']).next().unwrap_or("");
        tag.split(['_', '-'])
            .skip(1)
            .find(|subtag| subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()))
            .map(str::to_ascii_uppercase)
    }
}
