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

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use teelog::{PrintStream, Severity};

#[derive(Parser)]
#[command(name = "teelog")]
#[command(about = "Append timestamped, severity-tagged lines to the console and a log file")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (nothing is loaded unless given)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file to append to; an empty string disables file logging
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    /// Where to mirror each line on the console
    #[arg(long, global = true, value_enum)]
    pub print_stream: Option<StreamTarget>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum StreamTarget {
    Stdout,
    Stderr,
    Null,
}

impl From<StreamTarget> for PrintStream {
    fn from(target: StreamTarget) -> Self {
        match target {
            StreamTarget::Stdout => PrintStream::Stdout,
            StreamTarget::Stderr => PrintStream::Stderr,
            StreamTarget::Null => PrintStream::Null,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a DEBUG line
    Debug {
        /// Message words, joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Log an INFO line
    Info {
        /// Message words, joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Log an ERROR line
    Error {
        /// Message words, joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },
}

impl Commands {
    pub fn into_entry(self) -> (Severity, String) {
        match self {
            Self::Debug { message } => (Severity::Debug, message.join(" ")),
            Self::Info { message } => (Severity::Info, message.join(" ")),
            Self::Error { message } => (Severity::Error, message.join(" ")),
        }
    }
}
