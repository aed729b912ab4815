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

//! INSERT generation for node and edge rows.
//!
//! Rows are buffered per target table and flushed as one multi-row INSERT
//! each time the buffer reaches the batch size, so memory use is bounded by
//! the batch size rather than by the size of the graph.

use crate::alias::TableNameResolver;
use crate::config::DumpConfig;
use crate::dialect::SqlDialect;
use crate::dump::DumpReport;
use crate::error::Result;
use crate::schema::{qualified_table, table_columns};
use crate::writer::SqlWriter;
use graphsql_core::{GraphSource, PropertyContainer, PropertyType, ScalarKind, Value};
use std::collections::BTreeMap;
use std::io::Write;

/// Formats property values as SQL literals.
#[derive(Clone, Copy)]
pub struct ValueFormatter {
    dialect: &'static dyn SqlDialect,
}

impl ValueFormatter {
    /// Create a formatter for a dialect.
    pub fn new(dialect: &'static dyn SqlDialect) -> Self {
        Self { dialect }
    }

    /// Format a value of the given property type. `None` means missing.
    ///
    /// ```
    /// # use graphsql_dump::{data::ValueFormatter, Target};
    /// # use graphsql_core::{PropertyType, Value};
    /// let f = ValueFormatter::new(Target::MySql.dialect());
    /// let list = Value::from(vec!["BRCA1", "BRCA2"]);
    /// assert_eq!(f.format(&"string[]".into(), Some(&list)), r#"'["BRCA1", "BRCA2"]'"#);
    /// assert_eq!(f.format(&"int32".into(), None), "NULL");
    /// ```
    pub fn format(&self, property_type: &PropertyType, value: Option<&Value>) -> String {
        let value = match value {
            None | Some(Value::Null) => return "NULL".to_string(),
            Some(value) => value,
        };
        match property_type {
            PropertyType::List(_) => {
                let json = match value {
                    Value::List(items) => json_array(items),
                    scalar => json_array(std::slice::from_ref(scalar)),
                };
                self.dialect.string_literal(&json)
            }
            PropertyType::Scalar(kind) => self.scalar(kind, value),
        }
    }

    fn scalar(&self, kind: &ScalarKind, value: &Value) -> String {
        match value {
            Value::Float32(f) if kind.is_numeric() => float_literal(f64::from(*f), *f),
            Value::Float64(f) if kind.is_numeric() => float_literal(*f, *f),
            v if kind.is_numeric() && v.is_numeric() => v.to_string(),
            Value::Bool(b) if *kind == ScalarKind::Boolean => {
                self.dialect.boolean_literal(*b).to_string()
            }
            Value::String(s) => self.dialect.string_literal(s),
            Value::List(items) => self.dialect.string_literal(&json_array(items)),
            other => self.dialect.string_literal(&other.to_string()),
        }
    }

    /// Format one row as `(v1, v2, ...)` in column order.
    pub fn row<P: PropertyContainer + ?Sized>(
        &self,
        columns: &[(String, PropertyType)],
        entity: &P,
    ) -> String {
        let mut row = String::from("(");
        for (i, (key, ty)) in columns.iter().enumerate() {
            if i > 0 {
                row.push_str(", ");
            }
            row.push_str(&self.format(ty, entity.property(key).as_deref()));
        }
        row.push(')');
        row
    }
}

fn float_literal<T: std::fmt::Display>(check: f64, value: T) -> String {
    if check.is_finite() {
        value.to_string()
    } else {
        "NULL".to_string()
    }
}

/// JSON text of a list, elements separated by `", "`.
fn json_array(items: &[Value]) -> String {
    let mut json = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            json.push_str(", ");
        }
        json_element(item, &mut json);
    }
    json.push(']');
    json
}

fn json_element(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Float32(f) if !f.is_finite() => out.push_str("null"),
        Value::Float64(f) if !f.is_finite() => out.push_str("null"),
        Value::String(s) => out.push_str(&serde_json::Value::from(s.as_str()).to_string()),
        Value::List(items) => out.push_str(&json_array(items)),
        other => out.push_str(&other.to_string()),
    }
}

/// Rows waiting to be written to one table.
#[derive(Debug)]
struct InsertBatch {
    prefix: String,
    rows: Vec<String>,
    capacity: usize,
}

impl InsertBatch {
    fn new(prefix: String, capacity: usize) -> Self {
        Self {
            prefix,
            rows: Vec::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, row: String) -> bool {
        self.rows.push(row);
        self.rows.len() >= self.capacity
    }

    fn flush<W: Write>(&mut self, out: &mut SqlWriter<W>, report: &mut DumpReport) -> Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let statement = format!("{}{};", self.prefix, self.rows.join(", "));
        tracing::debug!(rows = self.rows.len(), "flushing insert batch");
        self.rows.clear();
        report.insert_statements += 1;
        out.line(&statement)
    }
}

/// Emits INSERT statements for every label.
pub struct DataEmitter<'a, G: ?Sized> {
    graph: &'a G,
    names: &'a TableNameResolver,
    config: &'a DumpConfig,
    dialect: &'static dyn SqlDialect,
    formatter: ValueFormatter,
    batch_size: usize,
}

impl<'a, G: GraphSource + ?Sized> DataEmitter<'a, G> {
    /// Create an emitter for one run.
    pub fn new(graph: &'a G, names: &'a TableNameResolver, config: &'a DumpConfig) -> Self {
        let dialect = config.target.dialect();
        Self {
            graph,
            names,
            config,
            dialect,
            formatter: ValueFormatter::new(dialect),
            batch_size: config.effective_batch_size(),
        }
    }

    fn insert_prefix(&self, table: &str, columns: &[(String, PropertyType)]) -> String {
        let names: Vec<String> = columns
            .iter()
            .map(|(key, _)| self.dialect.quote_identifier(key))
            .collect();
        format!(
            "INSERT INTO {} ({}) VALUES ",
            qualified_table(self.dialect, self.config, table),
            names.join(", ")
        )
    }

    /// Write all rows of a node label.
    pub fn write_nodes<W: Write>(
        &self,
        label: &str,
        out: &mut SqlWriter<W>,
        report: &mut DumpReport,
    ) -> Result<()> {
        let columns = table_columns(&self.graph.node_property_types(label));
        let prefix = self.insert_prefix(self.names.node_table(label), &columns);
        let mut batch = InsertBatch::new(prefix, self.batch_size);
        for node in self.graph.nodes(label) {
            report.node_rows += 1;
            if batch.push(self.formatter.row(&columns, node.as_ref())) {
                batch.flush(out, report)?;
            }
        }
        batch.flush(out, report)
    }

    /// Write all rows of an edge label, split by (from-label, to-label).
    ///
    /// Each pair has its own buffer, flushed independently. Edges with an
    /// unknown endpoint are skipped.
    pub fn write_edges<W: Write>(
        &self,
        label: &str,
        out: &mut SqlWriter<W>,
        report: &mut DumpReport,
    ) -> Result<()> {
        let columns = table_columns(&self.graph.edge_property_types(label));
        let mut batches: BTreeMap<(String, String), InsertBatch> = BTreeMap::new();
        for edge in self.graph.edges(label) {
            let pair = match (
                self.graph.node_label(edge.from_id),
                self.graph.node_label(edge.to_id),
            ) {
                (Some(from), Some(to)) => (from.into_owned(), to.into_owned()),
                _ => {
                    tracing::debug!(edge = edge.id, label, "skipping dangling edge");
                    continue;
                }
            };
            let batch = batches.entry(pair).or_insert_with_key(|(from, to)| {
                let table = self.names.edge_table(label, from, to);
                InsertBatch::new(self.insert_prefix(&table, &columns), self.batch_size)
            });
            report.edge_rows += 1;
            if batch.push(self.formatter.row(&columns, edge.as_ref())) {
                batch.flush(out, report)?;
            }
        }
        for batch in batches.values_mut() {
            batch.flush(out, report)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Target;
    use graphsql_core::Node;

    fn fmt(target: Target, ty: &str, value: Value) -> String {
        ValueFormatter::new(target.dialect()).format(&PropertyType::from(ty), Some(&value))
    }

    #[test]
    fn test_numbers_unquoted() {
        assert_eq!(fmt(Target::MySql, "int32", Value::Int32(-7)), "-7");
        assert_eq!(fmt(Target::MySql, "int64", Value::UInt64(42)), "42");
        assert_eq!(fmt(Target::MySql, "byte", Value::Byte(3)), "3");
        assert_eq!(fmt(Target::MySql, "float64", Value::Float64(2.5)), "2.5");
        assert_eq!(fmt(Target::MySql, "float32", Value::Float32(0.25)), "0.25");
    }

    #[test]
    fn test_non_finite_floats_are_null() {
        assert_eq!(fmt(Target::PostgreSql, "float64", Value::Float64(f64::NAN)), "NULL");
        assert_eq!(fmt(Target::PostgreSql, "float32", Value::Float32(f32::INFINITY)), "NULL");
    }

    #[test]
    fn test_booleans_per_dialect() {
        assert_eq!(fmt(Target::MySql, "boolean", Value::Bool(true)), "TRUE");
        assert_eq!(fmt(Target::Sqlite, "boolean", Value::Bool(false)), "FALSE");
        assert_eq!(fmt(Target::MsSql, "boolean", Value::Bool(true)), "1");
    }

    #[test]
    fn test_strings_escaped_per_dialect() {
        assert_eq!(fmt(Target::MySql, "string", Value::from("it's")), r"'it\'s'");
        assert_eq!(fmt(Target::MariaDb, "string", Value::from(r"C:\x")), r"'C:\\x'");
        assert_eq!(fmt(Target::PostgreSql, "string", Value::from("it's")), "'it''s'");
        assert_eq!(fmt(Target::Sqlite, "string", Value::from("it's")), "'it''s'");
        assert_eq!(fmt(Target::MsSql, "string", Value::from("it's")), "N'it''s'");
    }

    #[test]
    fn test_mismatched_values_are_quoted() {
        assert_eq!(fmt(Target::MySql, "int32", Value::from("12a")), "'12a'");
        assert_eq!(fmt(Target::MySql, "string", Value::Int32(5)), "'5'");
        assert_eq!(fmt(Target::MySql, "string", Value::Bool(true)), "'true'");
    }

    #[test]
    fn test_missing_and_null() {
        let f = ValueFormatter::new(Target::MySql.dialect());
        assert_eq!(f.format(&"string".into(), None), "NULL");
        assert_eq!(f.format(&"string[]".into(), Some(&Value::Null)), "NULL");
    }

    #[test]
    fn test_list_literals() {
        assert_eq!(
            fmt(Target::MySql, "string[]", Value::from(vec!["BRCA1", "BRCA2"])),
            r#"'["BRCA1", "BRCA2"]'"#
        );
        assert_eq!(
            fmt(Target::PostgreSql, "int32[]", Value::from(vec![1i32, 2, 3])),
            "'[1, 2, 3]'"
        );
        assert_eq!(
            fmt(Target::MySql, "boolean[]", Value::from(vec![true, false])),
            "'[true, false]'"
        );
        assert_eq!(fmt(Target::MySql, "string[]", Value::List(vec![])), "'[]'");
    }

    #[test]
    fn test_list_two_layer_escaping() {
        let value = Value::from(vec![r#"it's "quoted""#]);
        assert_eq!(
            fmt(Target::MySql, "string[]", value.clone()),
            r#"'["it\'s \\"quoted\\""]'"#
        );
        assert_eq!(
            fmt(Target::PostgreSql, "string[]", value),
            r#"'["it''s \"quoted\""]'"#
        );
    }

    #[test]
    fn test_list_nulls_and_scalars() {
        let value = Value::List(vec![Value::from("a"), Value::Null, Value::Float64(f64::NAN)]);
        assert_eq!(fmt(Target::Sqlite, "string[]", value), r#"'["a", null, null]'"#);
        assert_eq!(fmt(Target::Sqlite, "string[]", Value::from("solo")), r#"'["solo"]'"#);
    }

    #[test]
    fn test_row() {
        let f = ValueFormatter::new(Target::MySql.dialect());
        let node = Node::new(7, "Gene").with_property("symbol", "TP53");
        let columns = vec![
            ("__id".to_string(), PropertyType::from("int64")),
            ("symbol".to_string(), PropertyType::from("string")),
            ("missing".to_string(), PropertyType::from("int32")),
        ];
        assert_eq!(f.row(&columns, &node), "(7, 'TP53', NULL)");
    }
}
