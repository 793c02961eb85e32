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

mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;

use teelog::{Logger, PrintStream, log_line};

use crate::cli::Cli;
use crate::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let log_file = config.merge_log_file(cli.log_file);
    let print_stream = config.merge_print_stream(cli.print_stream.map(PrintStream::from))?;

    let mut logger = Logger::with_file(log_file.as_str())
        .with_context(|| format!("Error opening log file: {}", log_file))?;
    logger.set_print_stream(print_stream);

    let (severity, message) = cli.command.into_entry();
    log_line!(logger, severity, "{}", message);

    Ok(())
}
