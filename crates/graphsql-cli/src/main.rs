// Dweve GraphSQL - Property Graph to SQL Exporter
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! GraphSQL Command Line Interface

use clap::Parser;
use graphsql_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// GraphSQL - export labeled property graphs as SQL dumps
///
/// # Examples
///
/// ```bash
/// # Dump a workspace graph for PostgreSQL into schema "bio"
/// graphsql create ./workspace --target postgresql --schema-name bio
///
/// # Preview table names and alias gaps
/// graphsql inspect ./workspace --target mysql
/// ```
#[derive(Parser)]
#[command(name = "graphsql")]
#[command(author, version, about = "GraphSQL - export labeled property graphs as SQL dumps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("graphsql=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
