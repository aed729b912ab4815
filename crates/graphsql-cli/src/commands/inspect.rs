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


//! Inspect command - table name preview

use super::load_graph;
use crate::error::CliError;
use crate::workspace::Workspace;
use colored::Colorize;
use graphsql_dump::{AliasConfig, Diagnostic, DumpConfig, TableNameResolver};
use std::path::Path;

/// Print the tables a dump of the workspace would create.
///
/// Node tables, edge tables (after aliasing) and every alias gap are
/// listed. Nothing is written: identity aliases are recorded into a scratch
/// copy of the alias configuration only.
///
/// # Errors
///
/// Returns `Err` if the workspace, graph document or alias configuration
/// cannot be read.
pub fn inspect(workspace: impl AsRef<Path>, config: &DumpConfig) -> Result<(), CliError> {
    let workspace = Workspace::open(workspace)?;
    let mut aliases = AliasConfig::load_or_default(workspace.config_path())?;
    let graph = load_graph(&workspace)?;

    let config = DumpConfig {
        strict: false,
        ..config.clone()
    };
    let names = TableNameResolver::new(&graph, &mut aliases, &config)?;

    println!("{}", "GraphSQL Tables".bold().underline());
    println!();
    println!("{}  {}", "Target:".cyan(), config.target);
    match names.limit() {
        Some(limit) => println!("{}  {} characters", "Limit:".cyan(), limit),
        None => println!("{}  none", "Limit:".cyan()),
    }

    println!();
    println!("{}", "Node tables:".cyan());
    for label in names.node_labels() {
        print_table(label, names.node_table(label));
    }

    println!();
    println!("{}", "Edge tables:".cyan());
    for (label, from, to) in names.edge_tables().triples() {
        let raw = graphsql_dump::edge_table_name(label, from, to);
        print_table(&raw, &names.edge_table(label, from, to));
    }

    let gaps: Vec<&Diagnostic> = names
        .diagnostics()
        .iter()
        .filter(|d| matches!(d, Diagnostic::MissingAlias { .. }))
        .collect();
    println!();
    if gaps.is_empty() {
        println!("{}", "No alias gaps".green());
    } else {
        println!("{}", "Alias gaps:".yellow());
        for gap in gaps {
            println!("  {}", gap);
        }
    }

    let other: Vec<&Diagnostic> = names
        .diagnostics()
        .iter()
        .filter(|d| !matches!(d, Diagnostic::MissingAlias { .. }))
        .collect();
    if !other.is_empty() {
        println!();
        println!("{}", "Diagnostics:".yellow());
        for diagnostic in other {
            println!("  {}", diagnostic);
        }
    }
    Ok(())
}

fn print_table(raw: &str, identifier: &str) {
    if raw == identifier {
        println!("  {}", identifier.green());
    } else {
        println!("  {} -> {}", raw, identifier.green());
    }
}
