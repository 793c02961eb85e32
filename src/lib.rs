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

//! Dual-sink logging: each call writes one timestamped, severity-tagged line
//! to a print stream (stdout by default) and to an optional append-mode file.
//!
//! ```rust,no_run
//! use teelog::{Logger, log_info};
//!
//! let mut logger = Logger::with_file("out.log")?;
//! log_info!(logger, "value={}", 42);
//! logger.error(format_args!("code={} msg={}", 500, "bad"));
//! # Ok::<(), teelog::LogError>(())
//! ```

pub mod call_site;
pub mod error;
pub mod logger;
mod macros;
pub mod severity;
pub mod timestamp;

pub use call_site::CallSite;
pub use error::{LogError, Result};
pub use logger::{LogWriter, Logger, PrintStream};
pub use severity::Severity;
