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

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use teelog::PrintStream;

/// Configuration file structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Log file to append to (empty disables file logging)
    pub log_file: Option<String>,

    /// Console mirror: stdout, stderr or null
    pub print_stream: Option<String>,
}

impl Config {
    /// Load config from a file the caller named explicitly
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Configured print stream, if any
    pub fn print_stream(&self) -> Result<Option<PrintStream>> {
        self.print_stream
            .as_deref()
            .map(|name| name.parse::<PrintStream>())
            .transpose()
            .context("Invalid print_stream in config file")
    }

    /// Log file to use, where the CLI value takes precedence
    pub fn merge_log_file(&self, cli_value: Option<String>) -> String {
        cli_value
            .or_else(|| self.log_file.clone())
            .unwrap_or_default()
    }

    /// Print stream to use, where the CLI value takes precedence.
    /// The config value is only parsed when the CLI leaves it unset.
    pub fn merge_print_stream(&self, cli_value: Option<PrintStream>) -> Result<PrintStream> {
        match cli_value {
            Some(stream) => Ok(stream),
            None => Ok(self.print_stream()?.unwrap_or_default()),
        }
    }
}
