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

//! DDL generation for node and edge tables.

use crate::alias::TableNameResolver;
use crate::config::DumpConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::dialect::SqlDialect;
use crate::error::{DumpError, Result};
use crate::types::map_type;
use graphsql_core::{
    GraphSource, IndexDescription, IndexTarget, PropertySchema, PropertyType, FROM_ID_KEY, ID_KEY,
    LABEL_KEY, TO_ID_KEY,
};

/// Run-wide index name counters.
///
/// Node indexes are named `index_n<N>` and edge indexes `index_e<N>`. Both
/// sequences start at 1 and continue across all tables of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexCounters {
    node: usize,
    edge: usize,
}

impl Default for IndexCounters {
    fn default() -> Self {
        Self { node: 1, edge: 1 }
    }
}

impl IndexCounters {
    /// Counters starting at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next index name for a target.
    pub fn next_name(&mut self, target: IndexTarget, unique: bool) -> String {
        let (prefix, counter) = match target {
            IndexTarget::Node => ("index_n", &mut self.node),
            IndexTarget::Edge => ("index_e", &mut self.edge),
        };
        let name = format!("{}{}{}", prefix, counter, if unique { "_UNIQUE" } else { "" });
        *counter += 1;
        name
    }
}

/// Table name with the schema prefix when the dialect qualifies tables.
pub fn qualified_table(dialect: &dyn SqlDialect, config: &DumpConfig, table: &str) -> String {
    match config.schema_name() {
        Some(schema) if dialect.qualifies_tables() => format!(
            "{}.{}",
            dialect.quote_identifier(schema),
            dialect.quote_identifier(table)
        ),
        _ => dialect.quote_identifier(table),
    }
}

/// Columns of a label in declared key order, `__label` excluded.
pub fn table_columns(schema: &PropertySchema) -> Vec<(String, PropertyType)> {
    schema
        .iter()
        .filter(|(key, _)| *key != LABEL_KEY)
        .map(|(key, ty)| (key.to_string(), ty.clone()))
        .collect()
}

/// Emits DROP/CREATE TABLE and index statements.
pub struct SchemaEmitter<'a, G: ?Sized> {
    graph: &'a G,
    names: &'a TableNameResolver,
    config: &'a DumpConfig,
    dialect: &'static dyn SqlDialect,
    indexes: Vec<IndexDescription>,
}

impl<'a, G: GraphSource + ?Sized> SchemaEmitter<'a, G> {
    /// Create an emitter for one run.
    pub fn new(graph: &'a G, names: &'a TableNameResolver, config: &'a DumpConfig) -> Self {
        Self {
            graph,
            names,
            config,
            dialect: config.target.dialect(),
            indexes: graph.index_descriptions(),
        }
    }

    /// Statements for the table of a node label.
    pub fn node_table(
        &self,
        label: &str,
        counters: &mut IndexCounters,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<String>> {
        let schema = self.graph.node_property_types(label);
        let table = self.names.node_table(label);
        self.table(
            table,
            label,
            IndexTarget::Node,
            &schema,
            None,
            counters,
            diagnostics,
        )
    }

    /// Statements for the table of one edge triple.
    pub fn edge_table(
        &self,
        label: &str,
        from_label: &str,
        to_label: &str,
        counters: &mut IndexCounters,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<String>> {
        let schema = self.graph.edge_property_types(label);
        let table = self.names.edge_table(label, from_label, to_label);
        let references = (
            self.names.node_table(from_label),
            self.names.node_table(to_label),
        );
        self.table(
            &table,
            label,
            IndexTarget::Edge,
            &schema,
            Some(references),
            counters,
            diagnostics,
        )
    }

    fn is_indexed(&self, target: IndexTarget, label: &str, key: &str) -> bool {
        self.indexes.iter().any(|i| i.covers(target, label, key))
    }

    #[allow(clippy::too_many_arguments)]
    fn table(
        &self,
        table: &str,
        label: &str,
        target: IndexTarget,
        schema: &PropertySchema,
        references: Option<(&str, &str)>,
        counters: &mut IndexCounters,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<String>> {
        let d = self.dialect;
        let name = qualified_table(d, self.config, table);
        let id = d.quote_identifier(ID_KEY);
        let mut lines = vec![
            format!("{} {};", d.drop_table(), name),
            format!("{} {} (", d.create_table(), name),
        ];

        for (key, ty) in table_columns(schema) {
            let column = map_type(d, &key, &ty, self.is_indexed(target, label, &key));
            if !column.is_mapped() {
                if self.config.strict {
                    return Err(DumpError::UnmappedType {
                        key,
                        property_type: ty.to_string(),
                        target: d.target(),
                    });
                }
                diagnostics.push(Diagnostic::UnmappedType {
                    table: table.to_string(),
                    key: key.clone(),
                    property_type: ty.to_string(),
                });
            }
            lines.push(format!(
                "  {} {} {},",
                d.quote_identifier(&key),
                column.sql_type,
                column.attributes()
            ));
        }

        match references {
            None => lines.push(format!("  PRIMARY KEY ({})", id)),
            Some((from_table, to_table)) => {
                lines.push(format!("  PRIMARY KEY ({}),", id));
                lines.push(format!(
                    "  FOREIGN KEY ({}) REFERENCES {}({}),",
                    d.quote_identifier(FROM_ID_KEY),
                    qualified_table(d, self.config, from_table),
                    id
                ));
                lines.push(format!(
                    "  FOREIGN KEY ({}) REFERENCES {}({})",
                    d.quote_identifier(TO_ID_KEY),
                    qualified_table(d, self.config, to_table),
                    id
                ));
            }
        }
        lines.push(");".to_string());

        for index in self
            .indexes
            .iter()
            .filter(|i| i.target == target && i.label == label)
        {
            if index.array && !d.supports_array_index() {
                tracing::debug!(
                    table,
                    property = %index.property,
                    dialect = %d.target(),
                    "skipping array index"
                );
                continue;
            }
            let index_name = counters.next_name(target, index.unique);
            lines.push(format!(
                "CREATE {}INDEX {} ON {}({} ASC);",
                if index.unique { "UNIQUE " } else { "" },
                d.quote_identifier(&index_name),
                name,
                d.quote_identifier(&index.property)
            ));
        }

        let id_index = counters.next_name(target, true);
        lines.push(format!(
            "CREATE UNIQUE INDEX {} ON {}({} ASC);",
            d.quote_identifier(&id_index),
            name,
            id
        ));
        Ok(lines)
    }
}
