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

use regex::Regex;

pub trait RegexFullMatch {
    /// Returns `true` only when the pattern matches the whole of `s`,
    /// not just a substring of it.
    fn full_match(&self, s: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        if let Some(matched) = self.find(s) {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use crate::regex_util::RegexFullMatch;

    #[test]
    fn full_match_rejects_partial_matches() {
        let pattern = Regex::new(r"[#\- ]+").unwrap();
        assert!(pattern.full_match("##-# #"));
        assert!(!pattern.full_match("##1#"));
        assert!(!pattern.full_match("x##"));
        assert!(!pattern.full_match(""));
    }
}
