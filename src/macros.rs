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

//! Call-site capturing logging macros.
//!
//! Each macro takes the logger expression followed by `format!`-style
//! arguments, so a placeholder/argument mismatch is a compile error.
//!
//! ```rust,ignore
//! let mut logger = teelog::Logger::with_file("test.log")?;
//! teelog::log_info!(logger, "testing {:>4}", "just checking");
//! ```

/// Logs at an explicit [`Severity`](crate::Severity).
#[macro_export]
macro_rules! log_line {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log(
            $severity,
            $crate::CallSite::new(file!(), line!()),
            format_args!($($arg)+),
        )
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_line!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_line!($logger, $crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_line!($logger, $crate::Severity::Error, $($arg)+)
    };
}
