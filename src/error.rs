// Copyright (c) 2025 Sean McNamara <smcnam@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io;
use thiserror::Error;

/// Result type alias using LogError
pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, Error)]
pub enum LogError {
    /// A non-empty log file path could not be opened for append.
    #[error("failed to open log file {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("unknown print stream: {0} (expected stdout, stderr or null)")]
    UnknownPrintStream(String),
}
