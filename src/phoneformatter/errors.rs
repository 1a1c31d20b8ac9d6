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

use thiserror::Error;

/// Errors raised while building a [`crate::FormatTable`] from property
/// list data.
///
/// Formatting itself is total and never fails; the table loader is the
/// only fallible path in the crate, and for the bundled table a failure
/// here indicates a corrupt asset compiled into the library.
#[derive(Debug, Error)]
pub enum FormatTableError {
    #[error("could not parse the phone format property list: {0}")]
    Plist(#[from] plist::Error),

    #[error("region `{region}` declares an invalid display format `{format}`")]
    InvalidTemplate { region: String, format: String },

    #[error("region `{region}` declares no display formats")]
    EmptyRegion { region: String },
}
