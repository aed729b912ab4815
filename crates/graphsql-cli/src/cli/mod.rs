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


//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use graphsql_dump::{DumpConfig, NamingStrategy, Target, DEFAULT_BATCH_SIZE};
use std::path::PathBuf;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use graphsql_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the SQL dump of a workspace graph
    ///
    /// Reads <WORKSPACE>/sources/graph.json, keeps table name aliases in
    /// <WORKSPACE>/sql/sql_config.json and writes <WORKSPACE>/sql/dump.sql.
    Create {
        /// Workspace directory
        #[arg(value_name = "WORKSPACE")]
        workspace: PathBuf,

        /// Rows per INSERT statement
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE, value_parser = parse_batch_size)]
        insert_batch_size: usize,

        /// Schema to create and qualify tables with (blank for none)
        #[arg(long, default_value = "")]
        schema_name: String,

        /// Target dialect (mysql, mariadb, sqlite, postgresql, mssql)
        #[arg(short, long, default_value = "mysql")]
        target: Target,

        /// Table name shortening strategy (alias, acronym)
        #[arg(long, default_value = "alias")]
        naming: NamingStrategy,

        /// Fail on missing aliases and unmapped property types
        #[arg(long)]
        strict: bool,

        /// Omit section comments from the script
        #[arg(long)]
        no_comments: bool,

        /// Output file (defaults to <WORKSPACE>/sql/dump.sql)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the tables a dump would create, and any alias gaps
    Inspect {
        /// Workspace directory
        #[arg(value_name = "WORKSPACE")]
        workspace: PathBuf,

        /// Target dialect (mysql, mariadb, sqlite, postgresql, mssql)
        #[arg(short, long, default_value = "mysql")]
        target: Target,

        /// Table name shortening strategy (alias, acronym)
        #[arg(long, default_value = "alias")]
        naming: NamingStrategy,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command fails; see [`commands::create`] and
    /// [`commands::inspect`].
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Create {
                workspace,
                insert_batch_size,
                schema_name,
                target,
                naming,
                strict,
                no_comments,
                output,
            } => {
                let config = DumpConfig::builder()
                    .batch_size(insert_batch_size)
                    .schema_name(schema_name)
                    .target(target)
                    .naming(naming)
                    .strict(strict)
                    .include_comments(!no_comments)
                    .build();
                commands::create(&workspace, &config, output.as_deref()).map(|_| ())
            }
            Commands::Inspect {
                workspace,
                target,
                naming,
            } => {
                let config = DumpConfig::new().with_target(target).with_naming(naming);
                commands::inspect(&workspace, &config)
            }
        }
    }
}

fn parse_batch_size(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("insert batch size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid insert batch size '{}': {}", s, e)),
    }
}
