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


//! End-to-end dumps of fixture graphs.

use graphsql_core::{Edge, MemoryGraph, Node, PropertySchema};
use graphsql_dump::{
    dump_to_file, dump_to_string, AliasConfig, Diagnostic, DumpConfig, DumpError, DumpReport,
    NamingStrategy, Target,
};
use graphsql_test::fixtures::{self, LONG_EDGE_LABEL, LONG_FROM_LABEL, LONG_TO_LABEL};
use graphsql_test::sql::{insert_statements, line_of, row_count, rows, LiteralStyle};
use std::collections::BTreeMap;

fn dump(graph: &MemoryGraph, config: &DumpConfig) -> (String, DumpReport) {
    let mut aliases: BTreeMap<String, String> = BTreeMap::new();
    dump_to_string(graph, &mut aliases, config).unwrap()
}

fn long_edge_table() -> String {
    format!("{}__{}__{}", LONG_FROM_LABEL, LONG_EDGE_LABEL, LONG_TO_LABEL)
}

// ============================================================================
// Data Emission
// ============================================================================

#[test]
fn test_gene_row_mysql() {
    let config = DumpConfig::new().with_target(Target::MySql).with_batch_size(1);
    let (sql, report) = dump(&fixtures::gene_graph(), &config);

    let inserts = insert_statements(&sql, "`Gene`");
    assert_eq!(
        inserts,
        vec![r#"INSERT INTO `Gene` (`symbol`, `aliases`) VALUES ('BRCA1', '["BRCA1", "BRCA2"]');"#]
    );
    assert_eq!(report.node_rows, 1);
    assert_eq!(report.insert_statements, 1);
}

#[test]
fn test_gene_columns_mysql() {
    let (sql, _) = dump(&fixtures::gene_graph(), &DumpConfig::new());
    assert!(sql.contains("  `symbol` MEDIUMTEXT NULL,\n"));
    assert!(sql.contains("  `aliases` JSON NULL,\n"));
}

#[test]
fn test_scalar_literals_mysql() {
    let (sql, _) = dump(&fixtures::scalars_graph(), &DumpConfig::new());
    let inserts = insert_statements(&sql, "`Sample`");
    assert_eq!(inserts.len(), 1);
    assert_eq!(
        rows(inserts[0], LiteralStyle::Backslash),
        vec![r#"(1, 9007199254740993, 42, TRUE, 'it\'s "quoted" \\ here', 0.5, -12, '[]', 7, 1.25)"#]
    );
}

#[test]
fn test_scalar_literals_postgres() {
    let config = DumpConfig::new().with_target(Target::PostgreSql);
    let (sql, _) = dump(&fixtures::scalars_graph(), &config);
    let inserts = insert_statements(&sql, "\"Sample\"");
    assert_eq!(
        rows(inserts[0], LiteralStyle::Doubled),
        vec![r#"(1, 9007199254740993, 42, TRUE, 'it''s "quoted" \ here', 0.5, -12, '[]', 7, 1.25)"#]
    );
}

#[test]
fn test_scalar_literals_mssql() {
    let config = DumpConfig::new().with_target(Target::MsSql);
    let (sql, _) = dump(&fixtures::scalars_graph(), &config);
    let inserts = insert_statements(&sql, "\"Sample\"");
    assert_eq!(
        rows(inserts[0], LiteralStyle::Doubled),
        vec![r#"(1, 9007199254740993, 42, 1, N'it''s "quoted" \ here', 0.5, -12, N'[]', 7, 1.25)"#]
    );
}

#[test]
fn test_batches_preserve_row_order() {
    let graph = fixtures::sized_gene_graph(250);
    let (sql, report) = dump(&graph, &DumpConfig::new().with_batch_size(100));

    let inserts = insert_statements(&sql, "`Gene`");
    let counts: Vec<usize> = inserts
        .iter()
        .map(|s| row_count(s, LiteralStyle::Backslash))
        .collect();
    assert_eq!(counts, vec![100, 100, 50]);
    assert!(inserts[0].contains("VALUES (1, 'GENE1'), (2, 'GENE2')"));
    assert!(inserts[2].ends_with("(250, 'GENE250');"));
    assert_eq!(report.node_rows, 250);
}

#[test]
fn test_exact_multiple_has_no_empty_insert() {
    let graph = fixtures::sized_gene_graph(200);
    let (sql, report) = dump(&graph, &DumpConfig::new().with_batch_size(100));
    assert_eq!(insert_statements(&sql, "`Gene`").len(), 2);
    assert!(!sql.contains("VALUES ;"));
    assert_eq!(report.insert_statements, 2);
}

#[test]
fn test_mssql_caps_rows_per_insert() {
    let graph = fixtures::sized_gene_graph(2500);
    let config = DumpConfig::new()
        .with_target(Target::MsSql)
        .with_batch_size(5000);
    let (sql, _) = dump(&graph, &config);

    let counts: Vec<usize> = insert_statements(&sql, "\"Gene\"")
        .iter()
        .map(|s| row_count(s, LiteralStyle::Doubled))
        .collect();
    assert_eq!(counts, vec![1000, 1000, 500]);
}

#[test]
fn test_edge_batches_per_pair() {
    let graph = fixtures::sized_fan_in_graph(5);
    let (sql, report) = dump(&graph, &DumpConfig::new().with_batch_size(2));

    let counts: Vec<usize> = insert_statements(&sql, "`Gene__REGULATES__Gene`")
        .iter()
        .map(|s| row_count(s, LiteralStyle::Backslash))
        .collect();
    assert_eq!(counts, vec![2, 2, 1]);
    assert_eq!(report.edge_rows, 5);
}

#[test]
fn test_interleaved_pairs_batch_independently() {
    // Even ids run Gene -> Gene, odd ids Protein -> Gene.
    let graph = MemoryGraph::builder()
        .node(Node::new(1, "Gene"))
        .node(Node::new(2, "Gene"))
        .node(Node::new(3, "Protein"))
        .edges((100..110).map(|id| {
            let from = if id % 2 == 0 { 1 } else { 3 };
            Edge::new(id, "REGULATES", from, 2)
        }))
        .build()
        .unwrap();
    let (sql, report) = dump(&graph, &DumpConfig::new().with_batch_size(2));

    let batches: Vec<(&str, Vec<u64>)> = sql
        .lines()
        .filter(|line| line.starts_with("INSERT INTO `") && line.contains("__REGULATES__"))
        .map(|line| {
            let table = if line.starts_with("INSERT INTO `Gene__") { "A" } else { "B" };
            let ids = rows(line, LiteralStyle::Backslash)
                .iter()
                .map(|row| {
                    let first = row.trim_start_matches('(').split(',').next().unwrap_or("");
                    first.trim().parse().unwrap()
                })
                .collect();
            (table, ids)
        })
        .collect();

    assert_eq!(
        batches,
        vec![
            ("A", vec![100, 102]),
            ("B", vec![101, 103]),
            ("A", vec![104, 106]),
            ("B", vec![105, 107]),
            ("A", vec![108]),
            ("B", vec![109]),
        ]
    );
    assert_eq!(report.edge_rows, 10);
}

// ============================================================================
// Edge Tables
// ============================================================================

#[test]
fn test_edge_label_fans_out_by_endpoint_labels() {
    let (sql, report) = dump(&fixtures::regulates_graph(), &DumpConfig::new());

    assert!(sql.contains("CREATE TABLE IF NOT EXISTS `Gene__REGULATES__Gene` ("));
    assert!(sql.contains("CREATE TABLE IF NOT EXISTS `Protein__REGULATES__Gene` ("));
    assert!(sql.contains("CREATE TABLE IF NOT EXISTS `Gene__ENCODES__Protein` ("));
    assert!(sql.contains("  FOREIGN KEY (`__from_id`) REFERENCES `Protein`(`__id`),"));
    assert!(sql.contains("  FOREIGN KEY (`__to_id`) REFERENCES `Protein`(`__id`)\n"));

    assert_eq!(
        insert_statements(&sql, "`Gene__REGULATES__Gene`"),
        vec!["INSERT INTO `Gene__REGULATES__Gene` (`__id`, `__from_id`, `__to_id`, `score`) VALUES (10, 1, 2, 0.9);"]
    );
    assert_eq!(
        insert_statements(&sql, "`Protein__REGULATES__Gene`"),
        vec!["INSERT INTO `Protein__REGULATES__Gene` (`__id`, `__from_id`, `__to_id`, `score`) VALUES (11, 3, 1, 0.4);"]
    );
    assert_eq!(report.tables, 5);
    assert_eq!(report.edge_rows, 3);
    assert!(report.is_clean());
}

#[test]
fn test_dangling_edges_are_reported_and_skipped() {
    let (sql, report) = dump(&fixtures::dangling_edge_graph(), &DumpConfig::new());

    assert_eq!(report.edge_rows, 1);
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::DanglingEdge {
            label: "BINDS".to_string(),
            edge_id: 11,
            node_id: 99,
        }]
    );
    let inserts = insert_statements(&sql, "`Gene__BINDS__Gene`");
    assert_eq!(row_count(inserts[0], LiteralStyle::Backslash), 1);
}

// ============================================================================
// Indexes
// ============================================================================

#[test]
fn test_array_index_skipped_on_mysql() {
    let (sql, _) = dump(&fixtures::indexed_list_graph(), &DumpConfig::new());

    assert!(sql.contains("CREATE UNIQUE INDEX `index_n1_UNIQUE` ON `Gene`(`symbol` ASC);"));
    assert!(!sql.contains("(`aliases` ASC)"));
    assert!(sql.contains("CREATE UNIQUE INDEX `index_n2_UNIQUE` ON `Gene`(`__id` ASC);"));
    assert!(sql.contains("  `symbol` VARCHAR(1024) NULL,"));
    assert!(sql.contains("  `summary` MEDIUMTEXT NULL,"));
}

#[test]
fn test_array_index_emitted_on_postgres() {
    let config = DumpConfig::new().with_target(Target::PostgreSql);
    let (sql, _) = dump(&fixtures::indexed_list_graph(), &config);

    assert!(sql.contains("CREATE UNIQUE INDEX \"index_n1_UNIQUE\" ON \"Gene\"(\"symbol\" ASC);"));
    assert!(sql.contains("CREATE INDEX \"index_n2\" ON \"Gene\"(\"aliases\" ASC);"));
    assert!(sql.contains("CREATE UNIQUE INDEX \"index_n3_UNIQUE\" ON \"Gene\"(\"__id\" ASC);"));
    assert!(sql.contains("  \"aliases\" JSONB NULL,"));
}

#[test]
fn test_array_index_emitted_on_mariadb() {
    let config = DumpConfig::new().with_target(Target::MariaDb);
    let (sql, _) = dump(&fixtures::indexed_list_graph(), &config);
    assert!(sql.contains("CREATE INDEX `index_n2` ON `Gene`(`aliases` ASC);"));
}

#[test]
fn test_edge_index_numbering_is_global() {
    let (sql, _) = dump(&fixtures::regulates_graph(), &DumpConfig::new());

    assert!(sql.contains("`index_n1_UNIQUE` ON `Gene`(`__id` ASC)"));
    assert!(sql.contains("`index_n2_UNIQUE` ON `Protein`(`__id` ASC)"));
    assert!(sql.contains("`index_e1_UNIQUE` ON `Gene__REGULATES__Gene`(`__id` ASC)"));
    assert!(sql.contains("`index_e2_UNIQUE` ON `Protein__REGULATES__Gene`(`__id` ASC)"));
    assert!(sql.contains("`index_e3_UNIQUE` ON `Gene__ENCODES__Protein`(`__id` ASC)"));
}

#[test]
fn test_edge_property_index() {
    let (sql, _) = dump(&fixtures::indexed_list_graph(), &DumpConfig::new());
    assert!(sql.contains("CREATE INDEX `index_e1` ON `Gene__PARALOG__Gene`(`source` ASC);"));
    assert!(sql.contains("CREATE UNIQUE INDEX `index_e2_UNIQUE` ON `Gene__PARALOG__Gene`(`__id` ASC);"));
}

// ============================================================================
// Script Layout
// ============================================================================

#[test]
fn test_statement_order() {
    let config = DumpConfig::new().with_schema_name("bio");
    let (sql, _) = dump(&fixtures::regulates_graph(), &config);

    let order = [
        "SET FOREIGN_KEY_CHECKS = 0;",
        "CREATE SCHEMA IF NOT EXISTS `bio`",
        "USE `bio`;",
        "-- Node tables",
        "CREATE TABLE IF NOT EXISTS `bio`.`Gene` (",
        "-- Edge tables",
        "CREATE TABLE IF NOT EXISTS `bio`.`Gene__REGULATES__Gene` (",
        "-- Node data",
        "INSERT INTO `bio`.`Gene` (",
        "-- Edge data",
        "INSERT INTO `bio`.`Gene__REGULATES__Gene` (",
        "SET FOREIGN_KEY_CHECKS = 1;",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|needle| line_of(&sql, needle).unwrap_or_else(|| panic!("missing {}", needle)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
}

#[test]
fn test_foreign_key_guards_per_target() {
    let expected = [
        (Target::MySql, "SET FOREIGN_KEY_CHECKS = 0;", "SET FOREIGN_KEY_CHECKS = 1;"),
        (Target::MariaDb, "SET FOREIGN_KEY_CHECKS = 0;", "SET FOREIGN_KEY_CHECKS = 1;"),
        (
            Target::PostgreSql,
            "SET session_replication_role = 'replica';",
            "SET session_replication_role = 'origin';",
        ),
        (Target::Sqlite, "PRAGMA foreign_keys = 0;", "PRAGMA foreign_keys = 1;"),
        (
            Target::MsSql,
            "EXEC sp_MSforeachtable 'ALTER TABLE ? NOCHECK CONSTRAINT ALL';",
            "EXEC sp_MSforeachtable 'ALTER TABLE ? WITH CHECK CHECK CONSTRAINT ALL';",
        ),
    ];
    for (target, first, last) in expected {
        let (sql, _) = dump(&fixtures::regulates_graph(), &DumpConfig::new().with_target(target));
        let lines: Vec<&str> = sql.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.first(), Some(&first), "{}", target);
        assert_eq!(lines.last(), Some(&last), "{}", target);
    }
}

#[test]
fn test_sqlite_ignores_schema_qualification() {
    let config = DumpConfig::new()
        .with_target(Target::Sqlite)
        .with_schema_name("bio");
    let (sql, _) = dump(&fixtures::regulates_graph(), &config);

    assert!(sql.contains("PRAGMA encoding = 'UTF-8';"));
    assert!(sql.contains("CREATE TABLE IF NOT EXISTS `Gene` ("));
    assert!(!sql.contains("`bio`."));
}

#[test]
fn test_mssql_schema_and_tables() {
    let config = DumpConfig::new()
        .with_target(Target::MsSql)
        .with_schema_name("bio");
    let (sql, _) = dump(&fixtures::regulates_graph(), &config);

    assert!(sql.contains("IF SCHEMA_ID(N'bio') IS NULL EXEC(N'CREATE SCHEMA \"bio\"');"));
    assert!(sql.contains("CREATE TABLE \"bio\".\"Gene\" ("));
    assert!(sql.contains("DROP TABLE IF EXISTS \"bio\".\"Gene\";"));
}

#[test]
fn test_comments_can_be_disabled() {
    let config = DumpConfig::new().without_comments();
    let (sql, _) = dump(&fixtures::regulates_graph(), &config);
    assert!(!sql.lines().any(|l| l.starts_with("--")));
    assert!(sql.contains("INSERT INTO `Gene` ("));
}

#[test]
fn test_empty_graph() {
    let (sql, report) = dump(&fixtures::empty(), &DumpConfig::new());
    assert!(sql.contains("-- Node tables"));
    assert!(!sql.contains("INSERT INTO"));
    assert_eq!(report.tables, 0);
    assert_eq!(report.insert_statements, 0);
}

#[test]
fn test_dump_is_deterministic() {
    let graph = fixtures::regulates_graph();
    for target in Target::ALL {
        let config = DumpConfig::new().with_target(target);
        assert_eq!(dump(&graph, &config).0, dump(&graph, &config).0, "{}", target);
    }
}

// ============================================================================
// Table Names
// ============================================================================

#[test]
fn test_missing_alias_recorded_as_identity() {
    let mut aliases = AliasConfig::new();
    let (sql, report) =
        dump_to_string(&fixtures::long_label_graph(), &mut aliases, &DumpConfig::new()).unwrap();

    let raw = long_edge_table();
    assert_eq!(aliases.table_name_alias.get(&raw), Some(&raw));
    assert!(sql.contains(&format!("CREATE TABLE IF NOT EXISTS `{}` (", raw)));
    assert!(matches!(
        &report.diagnostics[..],
        [Diagnostic::MissingAlias { name, limit: 63 }] if *name == raw
    ));
}

#[test]
fn test_alias_used_everywhere() {
    let raw = long_edge_table();
    let mut aliases = AliasConfig::new();
    aliases
        .table_name_alias
        .insert(raw.clone(), "drug_assoc_gene".to_string());

    let (sql, report) =
        dump_to_string(&fixtures::long_label_graph(), &mut aliases, &DumpConfig::new()).unwrap();
    assert!(sql.contains("CREATE TABLE IF NOT EXISTS `drug_assoc_gene` ("));
    assert!(sql.contains("`index_e1_UNIQUE` ON `drug_assoc_gene`(`__id` ASC)"));
    assert_eq!(insert_statements(&sql, "`drug_assoc_gene`").len(), 1);
    assert!(!sql.contains(&raw));
    assert!(report.is_clean());
}

#[test]
fn test_strict_mode_requires_alias() {
    let mut aliases = AliasConfig::new();
    let config = DumpConfig::new().with_strict();
    let err = dump_to_string(&fixtures::long_label_graph(), &mut aliases, &config).unwrap_err();

    match err {
        DumpError::MissingAlias { name, limit, target } => {
            assert_eq!(name, long_edge_table());
            assert_eq!(limit, 63);
            assert_eq!(target, Target::MySql);
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(aliases.table_name_alias.is_empty());
}

#[test]
fn test_acronym_naming() {
    let config = DumpConfig::new().with_naming(NamingStrategy::Acronym);
    let (sql, report) = dump(&fixtures::long_label_graph(), &config);

    let short = "DBCC_Drug__ASSOCIATED_WITH__HGO_Gene";
    assert!(sql.contains(&format!("CREATE TABLE IF NOT EXISTS `{}` (", short)));
    assert_eq!(insert_statements(&sql, &format!("`{}`", short)).len(), 1);
    assert!(report.is_clean());
}

#[test]
fn test_unlimited_and_wide_targets_need_no_alias() {
    for target in [Target::Sqlite, Target::MsSql] {
        let mut aliases = AliasConfig::new();
        let config = DumpConfig::new().with_target(target).with_strict();
        let (_, report) =
            dump_to_string(&fixtures::long_label_graph(), &mut aliases, &config).unwrap();
        assert!(report.is_clean(), "{}", target);
        assert!(aliases.table_name_alias.is_empty());
    }
}

// ============================================================================
// Unmapped Types
// ============================================================================

fn shape_graph() -> MemoryGraph {
    MemoryGraph::builder()
        .node_schema(
            "Region",
            PropertySchema::new()
                .with("__id", "int64")
                .with("shape", "geometry"),
        )
        .node(Node::new(1, "Region").with_property("shape", "POLYGON((0 0))"))
        .build()
        .unwrap()
}

#[test]
fn test_unmapped_type_reported() {
    let (sql, report) = dump(&shape_graph(), &DumpConfig::new());
    assert!(sql.contains("  `shape`  NULL,"));
    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::UnmappedType {
            table: "Region".to_string(),
            key: "shape".to_string(),
            property_type: "geometry".to_string(),
        }]
    );
}

#[test]
fn test_unmapped_type_strict() {
    let err = dump_to_string(
        &shape_graph(),
        &mut AliasConfig::new(),
        &DumpConfig::new().with_strict(),
    )
    .unwrap_err();
    assert!(matches!(err, DumpError::UnmappedType { ref key, .. } if key == "shape"));
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_dump_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.sql");
    let mut aliases = AliasConfig::new();

    let report = dump_to_file(&fixtures::gene_graph(), &mut aliases, &DumpConfig::new(), &path)
        .unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("SET FOREIGN_KEY_CHECKS = 0;\n"));
    assert_eq!(report.node_rows, 1);
}

// ============================================================================
// Custom Graph Sources
// ============================================================================

/// A chain of generated nodes, produced on demand.
struct ChainGraph {
    len: u64,
}

impl graphsql_core::GraphSource for ChainGraph {
    fn node_labels(&self) -> Vec<String> {
        vec!["Step".to_string()]
    }

    fn edge_labels(&self) -> Vec<String> {
        vec!["NEXT".to_string()]
    }

    fn nodes<'a>(
        &'a self,
        label: &str,
    ) -> Box<dyn Iterator<Item = std::borrow::Cow<'a, Node>> + 'a> {
        if label != "Step" {
            return Box::new(std::iter::empty());
        }
        Box::new((1..=self.len).map(|id| {
            std::borrow::Cow::Owned(Node::new(id, "Step").with_property("rank", id as i64))
        }))
    }

    fn edges<'a>(
        &'a self,
        label: &str,
    ) -> Box<dyn Iterator<Item = std::borrow::Cow<'a, graphsql_core::Edge>> + 'a> {
        if label != "NEXT" {
            return Box::new(std::iter::empty());
        }
        let offset = self.len;
        Box::new((1..self.len).map(move |id| {
            std::borrow::Cow::Owned(graphsql_core::Edge::new(offset + id, "NEXT", id, id + 1))
        }))
    }

    fn node_label(&self, id: u64) -> Option<std::borrow::Cow<'_, str>> {
        (1..=self.len)
            .contains(&id)
            .then_some(std::borrow::Cow::Borrowed("Step"))
    }

    fn node_property_types(&self, _label: &str) -> PropertySchema {
        PropertySchema::new().with("__id", "int64").with("rank", "int64")
    }

    fn edge_property_types(&self, _label: &str) -> PropertySchema {
        PropertySchema::new()
            .with("__id", "int64")
            .with("__from_id", "int64")
            .with("__to_id", "int64")
    }

    fn index_descriptions(&self) -> Vec<graphsql_core::IndexDescription> {
        vec![graphsql_core::IndexDescription::node("Step", "rank").unique()]
    }
}

#[test]
fn test_generated_graph_source() {
    let graph = ChainGraph { len: 1_000 };
    let mut aliases = AliasConfig::new();
    let config = DumpConfig::new()
        .with_target(Target::PostgreSql)
        .with_batch_size(300);
    let (sql, report) = dump_to_string(&graph, &mut aliases, &config).unwrap();

    assert_eq!(report.node_rows, 1_000);
    assert_eq!(report.edge_rows, 999);
    assert_eq!(insert_statements(&sql, "\"Step\"").len(), 4);
    assert_eq!(insert_statements(&sql, "\"Step__NEXT__Step\"").len(), 4);
    assert!(sql.contains("  \"rank\" BIGINT NULL,"));
    assert!(sql.contains("CREATE UNIQUE INDEX \"index_n1_UNIQUE\" ON \"Step\"(\"rank\" ASC);"));
    assert!(sql.contains("VALUES (1001, 1, 2), (1002, 2, 3)"));
}
