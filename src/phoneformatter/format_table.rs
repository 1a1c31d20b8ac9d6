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

use std::{
    collections::{BTreeMap, HashMap},
    sync::LazyLock,
};

use regex::Regex;
use serde::Deserialize;

use crate::regex_util::RegexFullMatch;

use super::{
    errors::FormatTableError,
    helper_constants::{DIGIT_SLOT, TEMPLATE_CHARS},
};

/// Pattern accepting exactly the characters a template may contain.
/// The template set ships with the library, so this cannot fail to compile.
static VALID_TEMPLATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{}]+", TEMPLATE_CHARS)).expect("Invalid constant pattern!")
});

/// Wire shape of the bundled property list: a dictionary from a
/// lower-case region identifier to its display format strings.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct PhoneFormatsFile(BTreeMap<String, Vec<String>>);

/// A single display format: literal separators interleaved with `#`
/// digit slots, e.g. `(###) ###-####`. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    pattern: String,
    slot_count: usize,
}

impl FormatTemplate {
    pub(in crate::phoneformatter) fn parse(
        region: &str,
        pattern: &str,
    ) -> Result<Self, FormatTableError> {
        let slot_count = pattern.chars().filter(|c| *c == DIGIT_SLOT).count();
        if slot_count == 0 || !VALID_TEMPLATE_PATTERN.full_match(pattern) {
            return Err(FormatTableError::InvalidTemplate {
                region: region.to_owned(),
                format: pattern.to_owned(),
            });
        }
        Ok(Self {
            pattern: pattern.to_owned(),
            slot_count,
        })
    }

    /// Number of digit slots this template can hold.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Interleaves `digits` into the template skeleton.
    ///
    /// Walks the tokens in order: literals are copied verbatim, each slot
    /// consumes the next digit. Digits beyond the last slot are dropped.
    /// If the digits run out early, the output stops at the last filled
    /// slot; literals that would trail an unfilled slot are not emitted.
    pub fn render(&self, digits: &str) -> String {
        let mut out = String::with_capacity(self.pattern.len());
        let mut digits_iter = digits.chars();
        // Literals are staged here and only committed once a following
        // slot actually gets a digit.
        let mut pending_literals = String::new();
        let mut ran_out_of_digits = false;

        for token in self.pattern.chars() {
            if token != DIGIT_SLOT {
                pending_literals.push(token);
                continue;
            }
            let Some(digit) = digits_iter.next() else {
                ran_out_of_digits = true;
                break;
            };
            if !pending_literals.is_empty() {
                out.push_str(&pending_literals);
                pending_literals.clear();
            }
            out.push(digit);
        }

        if !ran_out_of_digits {
            // Every slot was filled; a literal tail like a closing
            // parenthesis still belongs to the output.
            out.push_str(&pending_literals);
        }
        out
    }
}

/// Read-only mapping from a region code to its display format
/// templates, pre-sorted by slot count ascending.
#[derive(Debug, Clone, Default)]
pub struct FormatTable {
    region_to_templates_map: HashMap<String, Vec<FormatTemplate>>,
}

impl FormatTable {
    /// Builds a table from property list bytes (XML or binary form).
    pub fn from_plist_bytes(bytes: &[u8]) -> Result<Self, FormatTableError> {
        let PhoneFormatsFile(regions) = plist::from_bytes(bytes)?;

        let mut region_to_templates_map = HashMap::with_capacity(regions.len());
        for (region, formats) in regions {
            if formats.is_empty() {
                return Err(FormatTableError::EmptyRegion { region });
            }
            let mut templates = Vec::with_capacity(formats.len());
            for format in &formats {
                templates.push(FormatTemplate::parse(&region, format)?);
            }
            // Sorted ascending so the best-match search in the formatter
            // is deterministic.
            templates.sort_by_key(|template| template.slot_count());
            region_to_templates_map.insert(region.to_ascii_lowercase(), templates);
        }
        Ok(Self {
            region_to_templates_map,
        })
    }

    /// Returns the templates registered for `region_code`, sorted by
    /// slot count ascending. An unknown region yields an empty slice;
    /// that is the designed fallback trigger, not an error.
    pub fn templates_for(&self, region_code: &str) -> &[FormatTemplate] {
        self.region_to_templates_map
            .get(&region_code.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &str> {
        self.region_to_templates_map.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use crate::phoneformatter::{
        errors::FormatTableError,
        format_table::{FormatTable, FormatTemplate},
        helper_constants::PHONE_FORMATS_PLIST,
    };

    #[test]
    fn bundled_table_parses() {
        let table = FormatTable::from_plist_bytes(PHONE_FORMATS_PLIST).unwrap();
        assert!(table.supported_regions().count() > 0);
        assert!(!table.templates_for("US").is_empty());
    }

    #[test]
    fn templates_are_sorted_by_slot_count() {
        let table = FormatTable::from_plist_bytes(PHONE_FORMATS_PLIST).unwrap();
        for region in ["US", "GB", "RU", "BR"] {
            let templates = table.templates_for(region);
            assert!(
                templates
                    .windows(2)
                    .all(|pair| pair[0].slot_count() <= pair[1].slot_count()),
                "templates for {} are not sorted",
                region
            );
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = FormatTable::from_plist_bytes(PHONE_FORMATS_PLIST).unwrap();
        assert_eq!(table.templates_for("us"), table.templates_for("US"));
    }

    #[test]
    fn unknown_region_yields_empty_slice() {
        let table = FormatTable::from_plist_bytes(PHONE_FORMATS_PLIST).unwrap();
        assert!(table.templates_for("ZZ").is_empty());
    }

    #[test]
    fn rejects_template_without_slots() {
        let err = FormatTemplate::parse("us", "---").unwrap_err();
        assert!(matches!(err, FormatTableError::InvalidTemplate { .. }));
    }

    #[test]
    fn rejects_region_without_formats() {
        let plist = br#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>us</key>
	<array/>
</dict>
</plist>
"#;
        let err = FormatTable::from_plist_bytes(plist).unwrap_err();
        assert!(matches!(
            err,
            FormatTableError::EmptyRegion { ref region } if region == "us"
        ));
    }

    #[test]
    fn rejects_template_with_literal_digits() {
        // A literal digit would leak into round-trip extraction.
        let err = FormatTemplate::parse("us", "+1 (###) ###-####").unwrap_err();
        assert!(matches!(err, FormatTableError::InvalidTemplate { .. }));
    }

    #[test]
    fn render_fills_all_slots() {
        let template = FormatTemplate::parse("us", "(###) ###-####").unwrap();
        assert_eq!(template.render("4155551234"), "(415) 555-1234");
    }

    #[test]
    fn render_drops_excess_digits() {
        let template = FormatTemplate::parse("us", "###-####").unwrap();
        assert_eq!(template.render("555123499"), "555-1234");
    }

    #[test]
    fn render_trims_literals_after_unfilled_slot() {
        let template = FormatTemplate::parse("fr", "## ## ## ## ##").unwrap();
        assert_eq!(template.render("12345"), "12 34 5");
        assert_eq!(template.render("1234"), "12 34");
        assert_eq!(template.render(""), "");
    }

    #[test]
    fn render_keeps_literal_tail_when_full() {
        let template = FormatTemplate::parse("zz", "(####)").unwrap();
        assert_eq!(template.render("1234"), "(1234)");
        assert_eq!(template.render("123"), "(123");
    }
}
