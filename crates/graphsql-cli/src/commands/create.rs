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


//! Create command - SQL dump generation for a workspace

use super::load_graph;
use crate::error::CliError;
use crate::workspace::Workspace;
use colored::Colorize;
use graphsql_dump::{AliasConfig, DumpConfig, DumpError, DumpReport, SqlDump, TableNameResolver};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Generate the SQL dump of a workspace graph.
///
/// Loads `<workspace>/sources/graph.json` and the alias configuration in
/// `<workspace>/sql/sql_config.json` (created when missing), resolves table
/// names, saves the configuration with any identity aliases recorded for
/// over-long names, then writes the script to `output` or
/// `<workspace>/sql/dump.sql`.
///
/// # Errors
///
/// Returns `Err` if:
/// - The workspace or its graph document does not exist
/// - The graph document or alias configuration is malformed
/// - Strict mode is on and a name lacks an alias or a type has no mapping
/// - Writing the configuration or the dump fails
///
/// # Examples
///
/// ```no_run
/// use graphsql_cli::commands::create;
/// use graphsql_dump::{DumpConfig, Target};
///
/// # fn main() -> Result<(), graphsql_cli::error::CliError> {
/// let config = DumpConfig::new().with_target(Target::PostgreSql);
/// let report = create("workspace", &config, None)?;
/// println!("{} tables", report.tables);
/// # Ok(())
/// # }
/// ```
pub fn create(
    workspace: impl AsRef<Path>,
    config: &DumpConfig,
    output: Option<&Path>,
) -> Result<DumpReport, CliError> {
    let workspace = Workspace::open(workspace)?;
    workspace.ensure_sql_dir()?;

    let config_path = workspace.config_path();
    let mut aliases = AliasConfig::load_or_default(&config_path)?;
    let graph = load_graph(&workspace)?;

    let names = TableNameResolver::new(&graph, &mut aliases, config)?;
    aliases.save(&config_path)?;
    tracing::info!(path = %config_path.display(), "alias configuration saved");

    let output: PathBuf = output.map_or_else(|| workspace.dump_path(), Path::to_path_buf);
    let file = File::create(&output).map_err(|e| CliError::io_error(&output, e))?;
    let report = SqlDump::new(&graph, &names, config)
        .write(BufWriter::new(file))
        .map_err(|e: DumpError| e.with_path(&output))?;

    tracing::info!(
        path = %output.display(),
        tables = report.tables,
        rows = report.node_rows + report.edge_rows,
        statements = report.insert_statements,
        lines = report.lines,
        "dump written"
    );

    println!(
        "{} {} ({} tables, {} node rows, {} edge rows)",
        "Wrote".green().bold(),
        output.display(),
        report.tables,
        report.node_rows,
        report.edge_rows
    );
    if !report.is_clean() {
        println!(
            "{} {} diagnostic(s), see log output",
            "Warning:".yellow().bold(),
            report.diagnostics.len()
        );
    }
    Ok(report)
}
