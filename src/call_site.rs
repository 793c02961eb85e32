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

use std::fmt;
use std::panic::Location;

/// Source location of a logging expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of whoever called the outermost `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(loc: &'static Location<'static>) -> Self {
        Self::new(loc.file(), loc.line())
    }
}

/// Renders as `<file>: <line>`, the text inside the parentheses of a log line.
impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.line)
    }
}
