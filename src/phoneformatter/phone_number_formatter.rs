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

use log::trace;

use crate::{
    i18n::{Locale, RegionCode},
    macros::owned_from_cow_or,
    string_util::extract_digits,
};

use super::{
    format_table::FormatTable,
    helper_constants::PHONE_FORMATS_PLIST,
    helper_functions::{choose_template, fallback_grouping},
};

/// Renders phone numbers into a locale-appropriate display form and
/// strips formatted numbers back down to bare digits.
///
/// Every method is a pure function of its inputs and the immutable
/// format table: no-digit inputs, unknown locales and empty strings are
/// valid and degrade to an empty or generically grouped output, never
/// an error. The crate-wide instance lives in
/// [`crate::PHONE_NUMBER_FORMATTER`].
pub struct PhoneNumberFormatter {
    format_table: FormatTable,
}

impl PhoneNumberFormatter {
    /// Builds a formatter over the bundled format table.
    pub(super) fn new() -> Self {
        let format_table = match FormatTable::from_plist_bytes(PHONE_FORMATS_PLIST) {
            Ok(table) => table,
            Err(err) => {
                let err_message = format!("Could not parse bundled format table: {}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        };
        Self { format_table }
    }

    /// Builds a formatter over a caller-supplied table. Mostly useful
    /// for tests and benchmarks that need a fixed set of templates.
    pub fn for_table(format_table: FormatTable) -> Self {
        Self { format_table }
    }

    /// Formats `phone_number` for the process-wide current locale.
    ///
    /// The locale is read from the environment once, here at the edge;
    /// everything below receives it as an explicit parameter.
    pub fn format_for_current_locale(&self, phone_number: &str) -> String {
        self.format_for_locale(phone_number, &Locale::current())
    }

    /// Formats `phone_number` for an explicitly supplied locale.
    pub fn format_for_locale(&self, phone_number: &str, locale: &Locale) -> String {
        let digits = extract_digits(phone_number);
        let region_code = locale.region_code();
        if region_code.is_none() {
            trace!(
                "locale `{}` resolves to no region, formatting generically",
                locale.tag()
            );
        }
        let region_code = region_code.as_deref().unwrap_or(RegionCode::get_unknown());
        self.format_digits(&digits, region_code)
    }

    /// Strips `phone_number` of everything but its digits.
    pub fn unformatted(&self, phone_number: &str) -> String {
        owned_from_cow_or!(extract_digits(phone_number), phone_number.to_owned())
    }

    /// Renders an already-extracted digit string for `region_code`.
    ///
    /// Selects the best-matching template for the digit count, or falls
    /// back to generic grouping when the region is unknown or owns no
    /// templates.
    pub fn format_digits(&self, digits: &str, region_code: &str) -> String {
        let templates = self.format_table.templates_for(region_code);
        match choose_template(templates, digits.chars().count()) {
            Some(template) => {
                trace!(
                    "formatting {} digits for region {} with template `{}`",
                    digits.len(),
                    region_code,
                    template.pattern()
                );
                template.render(digits)
            }
            None => {
                if !RegionCode::is_unknown(region_code) {
                    trace!(
                        "no display formats for region {}, using generic grouping",
                        region_code
                    );
                }
                fallback_grouping(digits)
            }
        }
    }
}
