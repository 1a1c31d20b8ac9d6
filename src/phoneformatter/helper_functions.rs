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

use super::{
    format_table::FormatTemplate,
    helper_constants::{FALLBACK_EXCHANGE_LENGTH, FALLBACK_LOCAL_NUMBER_LENGTH},
};

/// Picks the template whose slot count best matches `digit_count`.
///
/// An exact slot-count match wins. Otherwise the largest template whose
/// slot count does not exceed `digit_count` is chosen, so excess digits
/// get truncated rather than the number being squeezed into a too-small
/// skeleton. When the digits are shorter than every template, the
/// smallest template is used and rendered partially filled.
///
/// `templates` must be sorted by slot count ascending, which the format
/// table guarantees.
pub(super) fn choose_template(
    templates: &[FormatTemplate],
    digit_count: usize,
) -> Option<&FormatTemplate> {
    let mut largest_that_fits = None;
    for template in templates {
        if template.slot_count() == digit_count {
            return Some(template);
        }
        if template.slot_count() < digit_count {
            // Ascending order: the last one seen is the largest so far.
            largest_that_fits = Some(template);
        }
    }
    largest_that_fits.or_else(|| templates.first())
}

/// Generic NANP-like grouping for numbers with no region template.
///
/// Up to three digits pass through unchanged; four to seven digits are
/// split three-then-rest with a hyphen; anything longer keeps its
/// trailing seven digits as the hyphenated local block and puts all
/// remaining leading digits in one space-separated block in front.
/// `digits` must contain ASCII digits only.
pub(super) fn fallback_grouping(digits: &str) -> String {
    if digits.len() <= FALLBACK_EXCHANGE_LENGTH {
        return digits.to_owned();
    }
    if digits.len() <= FALLBACK_LOCAL_NUMBER_LENGTH {
        let (exchange, subscriber) = digits.split_at(FALLBACK_EXCHANGE_LENGTH);
        return fast_cat::concat_str!(exchange, "-", subscriber);
    }
    let (lead, local) = digits.split_at(digits.len() - FALLBACK_LOCAL_NUMBER_LENGTH);
    let (exchange, subscriber) = local.split_at(FALLBACK_EXCHANGE_LENGTH);
    fast_cat::concat_str!(lead, " ", exchange, "-", subscriber)
}

#[cfg(test)]
mod tests {
    use crate::phoneformatter::{
        format_table::FormatTemplate,
        helper_functions::{choose_template, fallback_grouping},
    };

    fn templates(patterns: &[&str]) -> Vec<FormatTemplate> {
        patterns
            .iter()
            .map(|pattern| FormatTemplate::parse("zz", pattern).unwrap())
            .collect()
    }

    #[test]
    fn exact_slot_count_wins() {
        let templates = templates(&["###-####", "(###) ###-####"]);
        let chosen = choose_template(&templates, 10).unwrap();
        assert_eq!(chosen.slot_count(), 10);
    }

    #[test]
    fn longer_numbers_pick_largest_fitting_template() {
        let templates = templates(&["###-####", "(###) ###-####"]);
        let chosen = choose_template(&templates, 9).unwrap();
        assert_eq!(chosen.slot_count(), 7);
        let chosen = choose_template(&templates, 12).unwrap();
        assert_eq!(chosen.slot_count(), 10);
    }

    #[test]
    fn shorter_numbers_pick_smallest_template() {
        let templates = templates(&["###-####", "(###) ###-####"]);
        let chosen = choose_template(&templates, 5).unwrap();
        assert_eq!(chosen.slot_count(), 7);
    }

    #[test]
    fn empty_template_set_yields_none() {
        assert!(choose_template(&[], 10).is_none());
    }

    #[test]
    fn fallback_grouping_by_length() {
        assert_eq!(fallback_grouping(""), "");
        assert_eq!(fallback_grouping("911"), "911");
        assert_eq!(fallback_grouping("1234"), "123-4");
        assert_eq!(fallback_grouping("5551234"), "555-1234");
        assert_eq!(fallback_grouping("55512345"), "5 551-2345");
        assert_eq!(fallback_grouping("5551234567"), "555 123-4567");
        assert_eq!(fallback_grouping("445558675309"), "44555 867-5309");
    }
}
