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

//! Dump orchestration.
//!
//! A dump runs through fixed phases in order:
//!
//! ```text
//! DisableForeignKeys -> Schema -> Data -> EnableForeignKeys -> Done
//! ```
//!
//! `Schema` writes node tables then edge tables, `Data` writes node rows
//! then edge rows. Soft problems become diagnostics and never stop the run;
//! an I/O error stops it at once and leaves the partial script as written.

use crate::alias::TableNameResolver;
use crate::config::{AliasStore, DumpConfig};
use crate::data::DataEmitter;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::dialect::SqlDialect;
use crate::error::{DumpError, Result};
use crate::schema::{IndexCounters, SchemaEmitter};
use crate::writer::SqlWriter;
use graphsql_core::GraphSource;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Phase of a dump run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DumpPhase {
    /// Turn foreign key enforcement off.
    DisableForeignKeys,
    /// Create schema, node tables and edge tables.
    Schema,
    /// Insert node rows and edge rows.
    Data,
    /// Turn foreign key enforcement back on.
    EnableForeignKeys,
    /// Finished.
    Done,
}

impl DumpPhase {
    /// The phase that follows this one. `Done` is terminal.
    pub fn next(self) -> Self {
        match self {
            Self::DisableForeignKeys => Self::Schema,
            Self::Schema => Self::Data,
            Self::Data => Self::EnableForeignKeys,
            Self::EnableForeignKeys | Self::Done => Self::Done,
        }
    }
}

/// Summary of a finished dump.
#[derive(Debug, Clone, Default)]
pub struct DumpReport {
    /// Tables created (node and edge).
    pub tables: usize,
    /// Node rows written.
    pub node_rows: usize,
    /// Edge rows written.
    pub edge_rows: usize,
    /// INSERT statements written.
    pub insert_statements: usize,
    /// Script lines written, comment lines excluded when comments are off.
    pub lines: usize,
    /// Soft problems in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

impl DumpReport {
    /// Whether the run raised no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// One dump of a graph to a SQL script.
///
/// # Examples
///
/// ```
/// use graphsql_core::{MemoryGraph, Node};
/// use graphsql_dump::{AliasConfig, DumpConfig, SqlDump, TableNameResolver};
///
/// let graph = MemoryGraph::builder()
///     .node(Node::new(1, "Gene").with_property("symbol", "BRCA1"))
///     .build()
///     .unwrap();
/// let config = DumpConfig::default();
/// let mut aliases = AliasConfig::new();
/// let names = TableNameResolver::new(&graph, &mut aliases, &config).unwrap();
///
/// let mut out = Vec::new();
/// let report = SqlDump::new(&graph, &names, &config).write(&mut out).unwrap();
/// let sql = String::from_utf8(out).unwrap();
///
/// assert!(sql.contains("INSERT INTO `Gene` (`__id`, `symbol`) VALUES (1, 'BRCA1');"));
/// assert_eq!(report.node_rows, 1);
/// ```
pub struct SqlDump<'a, G: ?Sized> {
    graph: &'a G,
    names: &'a TableNameResolver,
    config: &'a DumpConfig,
    dialect: &'static dyn SqlDialect,
    phase: DumpPhase,
}

impl<'a, G: GraphSource + ?Sized> SqlDump<'a, G> {
    /// Prepare a dump.
    pub fn new(graph: &'a G, names: &'a TableNameResolver, config: &'a DumpConfig) -> Self {
        Self {
            graph,
            names,
            config,
            dialect: config.target.dialect(),
            phase: DumpPhase::DisableForeignKeys,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> DumpPhase {
        self.phase
    }

    /// Write the whole script.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors, and in strict mode on unmapped property types.
    pub fn write<W: Write>(&mut self, writer: W) -> Result<DumpReport> {
        let mut out = SqlWriter::new(writer, self.config.include_comments);
        let mut report = DumpReport::default();
        let mut diagnostics = self.names.diagnostics().clone();

        tracing::info!(
            dialect = %self.config.target,
            batch_size = self.config.effective_batch_size(),
            "starting SQL dump"
        );
        while self.phase != DumpPhase::Done {
            match self.phase {
                DumpPhase::DisableForeignKeys => out.line(self.dialect.disable_foreign_keys())?,
                DumpPhase::Schema => self.write_schema(&mut out, &mut report, &mut diagnostics)?,
                DumpPhase::Data => self.write_data(&mut out, &mut report)?,
                DumpPhase::EnableForeignKeys => out.line(self.dialect.enable_foreign_keys())?,
                DumpPhase::Done => {}
            }
            self.phase = self.phase.next();
        }
        out.flush()?;

        report.lines = out.line_count();
        report.diagnostics = diagnostics.into_vec();
        tracing::info!(
            tables = report.tables,
            node_rows = report.node_rows,
            edge_rows = report.edge_rows,
            statements = report.insert_statements,
            lines = report.lines,
            diagnostics = report.diagnostics.len(),
            "SQL dump finished"
        );
        Ok(report)
    }

    fn write_schema<W: Write>(
        &self,
        out: &mut SqlWriter<W>,
        report: &mut DumpReport,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        tracing::info!("exporting schema");
        if let Some(schema) = self.config.schema_name() {
            out.lines(self.dialect.schema_statements(schema))?;
        }
        out.blank()?;

        let emitter = SchemaEmitter::new(self.graph, self.names, self.config);
        let mut counters = IndexCounters::new();

        out.banner("Node tables")?;
        for label in self.names.node_labels() {
            out.lines(emitter.node_table(label, &mut counters, diagnostics)?)?;
            out.blank()?;
            report.tables += 1;
        }

        out.banner("Edge tables")?;
        for (label, from, to) in self.names.edge_tables().triples() {
            out.lines(emitter.edge_table(label, from, to, &mut counters, diagnostics)?)?;
            out.blank()?;
            report.tables += 1;
        }
        Ok(())
    }

    fn write_data<W: Write>(&self, out: &mut SqlWriter<W>, report: &mut DumpReport) -> Result<()> {
        tracing::info!("exporting data");
        let emitter = DataEmitter::new(self.graph, self.names, self.config);

        out.banner("Node data")?;
        out.blank()?;
        for label in self.names.node_labels() {
            tracing::info!(label = %label, "exporting nodes");
            out.banner(&format!("Node data for label {}", label))?;
            emitter.write_nodes(label, out, report)?;
            out.blank()?;
        }

        out.banner("Edge data")?;
        out.blank()?;
        for label in self.names.edge_tables().labels() {
            tracing::info!(label, "exporting edges");
            out.banner(&format!("Edge data for label {}", label))?;
            emitter.write_edges(label, out, report)?;
            out.blank()?;
        }
        Ok(())
    }
}

/// Resolve table names and dump a graph to a writer.
///
/// Identity aliases for over-long names are recorded in `aliases`; persist
/// it afterwards to keep later runs stable.
pub fn dump_to_writer<G, S, W>(
    graph: &G,
    aliases: &mut S,
    config: &DumpConfig,
    writer: W,
) -> Result<DumpReport>
where
    G: GraphSource + ?Sized,
    S: AliasStore + ?Sized,
    W: Write,
{
    let names = TableNameResolver::new(graph, aliases, config)?;
    SqlDump::new(graph, &names, config).write(writer)
}

/// Dump a graph into a string.
pub fn dump_to_string<G, S>(
    graph: &G,
    aliases: &mut S,
    config: &DumpConfig,
) -> Result<(String, DumpReport)>
where
    G: GraphSource + ?Sized,
    S: AliasStore + ?Sized,
{
    let mut buffer = Vec::new();
    let report = dump_to_writer(graph, aliases, config, &mut buffer)?;
    let sql = String::from_utf8(buffer)
        .map_err(|e| DumpError::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    Ok((sql, report))
}

/// Dump a graph into a file, creating or truncating it.
///
/// I/O errors carry the file path. A failed run leaves the partial file.
pub fn dump_to_file<G, S>(
    graph: &G,
    aliases: &mut S,
    config: &DumpConfig,
    path: impl AsRef<Path>,
) -> Result<DumpReport>
where
    G: GraphSource + ?Sized,
    S: AliasStore + ?Sized,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| DumpError::from(e).with_path(path))?;
    dump_to_writer(graph, aliases, config, BufWriter::new(file)).map_err(|e| e.with_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Target;
    use graphsql_core::{Edge, MemoryGraph, Node};
    use std::collections::BTreeMap;

    fn graph() -> MemoryGraph {
        MemoryGraph::builder()
            .node(Node::new(1, "Gene").with_property("symbol", "BRCA1"))
            .node(Node::new(2, "Protein").with_property("name", "P38398"))
            .edge(Edge::new(3, "ENCODES", 1, 2))
            .build()
            .unwrap()
    }

    fn dump(config: &DumpConfig) -> (String, DumpReport) {
        let mut aliases: BTreeMap<String, String> = BTreeMap::new();
        dump_to_string(&graph(), &mut aliases, config).unwrap()
    }

    #[test]
    fn test_phase_sequence() {
        let mut phase = DumpPhase::DisableForeignKeys;
        let mut seen = vec![phase];
        while phase != DumpPhase::Done {
            phase = phase.next();
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![
                DumpPhase::DisableForeignKeys,
                DumpPhase::Schema,
                DumpPhase::Data,
                DumpPhase::EnableForeignKeys,
                DumpPhase::Done,
            ]
        );
        assert_eq!(DumpPhase::Done.next(), DumpPhase::Done);
    }

    #[test]
    fn test_write_reaches_done() {
        let g = graph();
        let config = DumpConfig::default();
        let mut aliases = BTreeMap::<String, String>::new();
        let names = TableNameResolver::new(&g, &mut aliases, &config).unwrap();
        let mut dump = SqlDump::new(&g, &names, &config);
        assert_eq!(dump.phase(), DumpPhase::DisableForeignKeys);
        dump.write(Vec::new()).unwrap();
        assert_eq!(dump.phase(), DumpPhase::Done);
    }

    #[test]
    fn test_script_order() {
        let (sql, report) = dump(&DumpConfig::default());
        let pos = |needle: &str| sql.find(needle).unwrap_or_else(|| panic!("missing {}", needle));
        assert!(sql.starts_with("SET FOREIGN_KEY_CHECKS = 0;\n"));
        assert!(sql.ends_with("SET FOREIGN_KEY_CHECKS = 1;\n"));
        assert!(pos("-- Node tables") < pos("-- Edge tables"));
        assert!(pos("CREATE TABLE IF NOT EXISTS `Gene__ENCODES__Protein`") < pos("-- Node data"));
        assert!(pos("INSERT INTO `Gene`") < pos("INSERT INTO `Gene__ENCODES__Protein`"));
        assert_eq!(report.tables, 3);
        assert_eq!(report.node_rows, 2);
        assert_eq!(report.edge_rows, 1);
        assert_eq!(report.insert_statements, 3);
        assert!(report.is_clean());
    }

    #[test]
    fn test_schema_prefix_statements() {
        let (sql, _) = dump(&DumpConfig::new().with_schema_name("bio"));
        assert!(sql.contains("-- Schema bio\n"));
        assert!(sql.contains("USE `bio`;\n"));
        assert!(sql.contains("INSERT INTO `bio`.`Gene`"));
    }

    #[test]
    fn test_without_comments() {
        let (full, full_report) = dump(&DumpConfig::new());
        let (sql, report) = dump(&DumpConfig::new().without_comments());
        assert!(!sql.lines().any(|l| l.starts_with("--")));
        assert!(sql.contains("INSERT INTO `Protein`"));

        assert_eq!(full_report.lines, full.lines().count());
        assert_eq!(report.lines, sql.lines().count());
        assert!(report.lines < full_report.lines);
    }

    #[test]
    fn test_foreign_key_statements_per_target() {
        let (sql, _) = dump(&DumpConfig::new().with_target(Target::PostgreSql));
        assert!(sql.starts_with("SET session_replication_role = 'replica';\n"));
        assert!(sql.ends_with("SET session_replication_role = 'origin';\n"));
        let (sql, _) = dump(&DumpConfig::new().with_target(Target::Sqlite));
        assert!(sql.starts_with("PRAGMA foreign_keys = 0;\n"));
        assert!(sql.ends_with("PRAGMA foreign_keys = 1;\n"));
    }

    #[test]
    fn test_dump_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.sql");
        let mut aliases = BTreeMap::<String, String>::new();
        let report = dump_to_file(&graph(), &mut aliases, &DumpConfig::default(), &path).unwrap();
        let sql = std::fs::read_to_string(&path).unwrap();
        assert!(sql.contains("INSERT INTO `Gene`"));
        assert_eq!(report.node_rows, 2);
    }

    #[test]
    fn test_dump_to_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("dump.sql");
        let mut aliases = BTreeMap::<String, String>::new();
        let err = dump_to_file(&graph(), &mut aliases, &DumpConfig::default(), &path).unwrap_err();
        match err {
            DumpError::Io { path: Some(p), .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {}", other),
        }
    }
}
