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

//! In-memory graph implementation.

use crate::error::{GraphError, Result};
use crate::graph::{
    Edge, GraphSource, IndexDescription, Node, PropertySchema, FROM_ID_KEY, ID_KEY, LABEL_KEY,
    TO_ID_KEY,
};
use crate::types::ScalarKind;
use crate::value::Value;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// Entities of one kind grouped by label, labels kept in first-seen order.
#[derive(Debug, Clone)]
struct LabelTable<T> {
    labels: Vec<String>,
    positions: HashMap<String, usize>,
    rows: Vec<Vec<T>>,
    schemas: Vec<PropertySchema>,
}

impl<T> Default for LabelTable<T> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            positions: HashMap::new(),
            rows: Vec::new(),
            schemas: Vec::new(),
        }
    }
}

impl<T> LabelTable<T> {
    fn slot(&mut self, label: &str, base: &PropertySchema) -> usize {
        if let Some(&pos) = self.positions.get(label) {
            return pos;
        }
        let pos = self.labels.len();
        self.labels.push(label.to_string());
        self.positions.insert(label.to_string(), pos);
        self.rows.push(Vec::new());
        self.schemas.push(base.clone());
        pos
    }

    fn rows(&self, label: &str) -> &[T] {
        match self.positions.get(label) {
            Some(&pos) => &self.rows[pos],
            None => &[],
        }
    }

    fn schema(&self, label: &str) -> PropertySchema {
        self.positions
            .get(label)
            .map(|&pos| self.schemas[pos].clone())
            .unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// A [`GraphSource`] that keeps every node and edge in memory.
///
/// Labels are enumerated in the order they were first seen. The schema of a
/// label is inferred from its entities (synthetic keys first, then every
/// other key with the type of its first non-null value) unless a schema was
/// declared for it explicitly.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    nodes: LabelTable<Node>,
    edges: LabelTable<Edge>,
    node_labels_by_id: HashMap<u64, usize>,
    indexes: Vec<IndexDescription>,
}

impl MemoryGraph {
    /// Start building a graph.
    pub fn builder() -> MemoryGraphBuilder {
        MemoryGraphBuilder::default()
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl GraphSource for MemoryGraph {
    fn node_labels(&self) -> Vec<String> {
        self.nodes.labels.clone()
    }

    fn edge_labels(&self) -> Vec<String> {
        self.edges.labels.clone()
    }

    fn nodes<'a>(&'a self, label: &str) -> Box<dyn Iterator<Item = Cow<'a, Node>> + 'a> {
        Box::new(self.nodes.rows(label).iter().map(Cow::Borrowed))
    }

    fn edges<'a>(&'a self, label: &str) -> Box<dyn Iterator<Item = Cow<'a, Edge>> + 'a> {
        Box::new(self.edges.rows(label).iter().map(Cow::Borrowed))
    }

    fn node_label(&self, id: u64) -> Option<Cow<'_, str>> {
        self.node_labels_by_id
            .get(&id)
            .map(|&pos| Cow::Borrowed(self.nodes.labels[pos].as_str()))
    }

    fn node_property_types(&self, label: &str) -> PropertySchema {
        self.nodes.schema(label)
    }

    fn edge_property_types(&self, label: &str) -> PropertySchema {
        self.edges.schema(label)
    }

    fn index_descriptions(&self) -> Vec<IndexDescription> {
        self.indexes.clone()
    }
}

/// Builder for [`MemoryGraph`].
///
/// ```
/// use graphsql_core::{GraphSource, IndexDescription, MemoryGraph, Node, PropertySchema};
///
/// let graph = MemoryGraph::builder()
///     .node_schema("Gene", PropertySchema::new().with("symbol", "string"))
///     .node(Node::new(1, "Gene").with_property("symbol", "TP53"))
///     .index(IndexDescription::node("Gene", "symbol").unique())
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.node_property_types("Gene").len(), 1);
/// assert_eq!(graph.index_descriptions().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryGraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    indexes: Vec<IndexDescription>,
    node_schemas: Vec<(String, PropertySchema)>,
    edge_schemas: Vec<(String, PropertySchema)>,
}

impl MemoryGraphBuilder {
    /// Add a node.
    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Add several nodes.
    pub fn nodes(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Add an edge.
    pub fn edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Add several edges.
    pub fn edges(mut self, edges: impl IntoIterator<Item = Edge>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Add an index description.
    pub fn index(mut self, index: IndexDescription) -> Self {
        self.indexes.push(index);
        self
    }

    /// Declare the schema of a node label, replacing inference.
    pub fn node_schema(mut self, label: impl Into<String>, schema: PropertySchema) -> Self {
        self.node_schemas.push((label.into(), schema));
        self
    }

    /// Declare the schema of an edge label, replacing inference.
    pub fn edge_schema(mut self, label: impl Into<String>, schema: PropertySchema) -> Self {
        self.edge_schemas.push((label.into(), schema));
        self
    }

    /// Build the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateId`] if two entities share an id.
    pub fn build(self) -> Result<MemoryGraph> {
        let mut graph = MemoryGraph {
            indexes: self.indexes,
            ..MemoryGraph::default()
        };
        let mut seen = HashSet::new();
        let mut declared_nodes = HashSet::new();
        let mut declared_edges = HashSet::new();

        let node_base = PropertySchema::new()
            .with(ID_KEY, ScalarKind::Int64)
            .with(LABEL_KEY, ScalarKind::String);
        let edge_base = node_base
            .clone()
            .with(FROM_ID_KEY, ScalarKind::Int64)
            .with(TO_ID_KEY, ScalarKind::Int64);

        for (label, schema) in self.node_schemas {
            let pos = graph.nodes.slot(&label, &node_base);
            graph.nodes.schemas[pos] = schema;
            declared_nodes.insert(pos);
        }
        for (label, schema) in self.edge_schemas {
            let pos = graph.edges.slot(&label, &edge_base);
            graph.edges.schemas[pos] = schema;
            declared_edges.insert(pos);
        }

        for node in self.nodes {
            if !seen.insert(node.id) {
                return Err(GraphError::DuplicateId(node.id));
            }
            let pos = graph.nodes.slot(&node.label, &node_base);
            if !declared_nodes.contains(&pos) {
                infer(&mut graph.nodes.schemas[pos], node.properties.iter());
            }
            graph.node_labels_by_id.insert(node.id, pos);
            graph.nodes.rows[pos].push(node);
        }

        for edge in self.edges {
            if !seen.insert(edge.id) {
                return Err(GraphError::DuplicateId(edge.id));
            }
            let pos = graph.edges.slot(&edge.label, &edge_base);
            if !declared_edges.contains(&pos) {
                infer(&mut graph.edges.schemas[pos], edge.properties.iter());
            }
            graph.edges.rows[pos].push(edge);
        }

        Ok(graph)
    }
}

fn infer<'a>(
    schema: &mut PropertySchema,
    properties: impl Iterator<Item = (&'a String, &'a Value)>,
) {
    for (key, value) in properties {
        if let Some(ty) = value.property_type() {
            schema.insert_if_absent(key, ty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PropertyType;

    fn sample() -> MemoryGraph {
        MemoryGraph::builder()
            .node(Node::new(1, "Gene").with_property("symbol", "BRCA1"))
            .node(Node::new(2, "Protein").with_property("mass", 12.5f64))
            .node(Node::new(3, "Gene").with_property("length", 81_189i64))
            .edge(Edge::new(10, "REGULATES", 1, 3))
            .edge(Edge::new(11, "REGULATES", 2, 1).with_property("score", 0.9f64))
            .build()
            .unwrap()
    }

    #[test]
    fn test_labels_in_first_seen_order() {
        let graph = MemoryGraph::builder()
            .node(Node::new(1, "Zebra"))
            .node(Node::new(2, "Apple"))
            .node(Node::new(3, "Zebra"))
            .build()
            .unwrap();
        assert_eq!(graph.node_labels(), vec!["Zebra", "Apple"]);
    }

    #[test]
    fn test_nodes_natural_order() {
        let graph = sample();
        let ids: Vec<u64> = graph.nodes("Gene").map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(graph.nodes("Missing").count(), 0);
    }

    #[test]
    fn test_node_label_lookup() {
        let graph = sample();
        assert_eq!(graph.node_label(2).as_deref(), Some("Protein"));
        assert!(graph.node_label(99).is_none());
    }

    #[test]
    fn test_inferred_node_schema() {
        let graph = sample();
        let schema = graph.node_property_types("Gene");
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec![ID_KEY, LABEL_KEY, "symbol", "length"]);
        assert_eq!(
            schema.get("length"),
            Some(&PropertyType::Scalar(ScalarKind::Int64))
        );
    }

    #[test]
    fn test_inferred_edge_schema() {
        let graph = sample();
        let schema = graph.edge_property_types("REGULATES");
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec![ID_KEY, LABEL_KEY, FROM_ID_KEY, TO_ID_KEY, "score"]);
    }

    #[test]
    fn test_null_values_do_not_fix_type() {
        let graph = MemoryGraph::builder()
            .node(Node::new(1, "Gene").with_property("note", Value::Null))
            .node(Node::new(2, "Gene").with_property("note", "text"))
            .build()
            .unwrap();
        assert_eq!(
            graph.node_property_types("Gene").get("note"),
            Some(&PropertyType::Scalar(ScalarKind::String))
        );
    }

    #[test]
    fn test_declared_schema_replaces_inference() {
        let graph = MemoryGraph::builder()
            .node_schema(
                "Gene",
                PropertySchema::new()
                    .with("symbol", "string")
                    .with("aliases", "string[]"),
            )
            .node(Node::new(1, "Gene").with_property("extra", 1i32))
            .build()
            .unwrap();
        let schema = graph.node_property_types("Gene");
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec!["symbol", "aliases"]);
    }

    #[test]
    fn test_declared_schema_registers_empty_label() {
        let graph = MemoryGraph::builder()
            .edge_schema("BINDS", PropertySchema::new().with(ID_KEY, "int64"))
            .build()
            .unwrap();
        assert_eq!(graph.edge_labels(), vec!["BINDS"]);
        assert_eq!(graph.edges("BINDS").count(), 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = MemoryGraph::builder()
            .node(Node::new(1, "Gene"))
            .edge(Edge::new(1, "SELF", 1, 1))
            .build();
        assert!(matches!(result, Err(GraphError::DuplicateId(1))));
    }

    #[test]
    fn test_counts() {
        let graph = sample();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_unknown_label_schema_is_empty() {
        assert!(sample().node_property_types("Nope").is_empty());
    }
}
