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

//! Nodes, edges, index metadata and the graph source contract.

use crate::types::PropertyType;
use crate::value::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Synthetic key holding the graph-wide unique id of a node or edge.
pub const ID_KEY: &str = "__id";
/// Internal key holding the label; never exported as a column.
pub const LABEL_KEY: &str = "__label";
/// Synthetic key holding the source node id of an edge.
pub const FROM_ID_KEY: &str = "__from_id";
/// Synthetic key holding the target node id of an edge.
pub const TO_ID_KEY: &str = "__to_id";

/// Read access to the properties of a node or edge, synthetic keys included.
pub trait PropertyContainer {
    /// Look up a property value by key.
    fn property(&self, key: &str) -> Option<Cow<'_, Value>>;
}

/// A labeled node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Graph-wide unique id (`__id`).
    pub id: u64,
    /// The node label (`__label`).
    pub label: String,
    /// Non-synthetic properties.
    pub properties: BTreeMap<String, Value>,
}

impl Node {
    /// Create a node without properties.
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Add a property to the node.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl PropertyContainer for Node {
    fn property(&self, key: &str) -> Option<Cow<'_, Value>> {
        match key {
            ID_KEY => Some(Cow::Owned(Value::UInt64(self.id))),
            LABEL_KEY => Some(Cow::Owned(Value::String(self.label.clone()))),
            _ => self.properties.get(key).map(Cow::Borrowed),
        }
    }
}

/// A labeled, directed edge between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Graph-wide unique id (`__id`).
    pub id: u64,
    /// The edge label (`__label`).
    pub label: String,
    /// Id of the source node (`__from_id`).
    pub from_id: u64,
    /// Id of the target node (`__to_id`).
    pub to_id: u64,
    /// Non-synthetic properties.
    pub properties: BTreeMap<String, Value>,
}

impl Edge {
    /// Create an edge without properties.
    pub fn new(id: u64, label: impl Into<String>, from_id: u64, to_id: u64) -> Self {
        Self {
            id,
            label: label.into(),
            from_id,
            to_id,
            properties: BTreeMap::new(),
        }
    }

    /// Add a property to the edge.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl PropertyContainer for Edge {
    fn property(&self, key: &str) -> Option<Cow<'_, Value>> {
        match key {
            ID_KEY => Some(Cow::Owned(Value::UInt64(self.id))),
            LABEL_KEY => Some(Cow::Owned(Value::String(self.label.clone()))),
            FROM_ID_KEY => Some(Cow::Owned(Value::UInt64(self.from_id))),
            TO_ID_KEY => Some(Cow::Owned(Value::UInt64(self.to_id))),
            _ => self.properties.get(key).map(Cow::Borrowed),
        }
    }
}

/// Ordered mapping from property key to property type.
///
/// Iteration follows declaration order. Inserting a key that is already
/// present replaces its type but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySchema {
    entries: Vec<(String, PropertyType)>,
}

impl PropertySchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key, builder style.
    pub fn with(mut self, key: impl Into<String>, ty: impl Into<PropertyType>) -> Self {
        self.insert(key, ty);
        self
    }

    /// Add or replace a key.
    pub fn insert(&mut self, key: impl Into<String>, ty: impl Into<PropertyType>) {
        let key = key.into();
        let ty = ty.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = ty,
            None => self.entries.push((key, ty)),
        }
    }

    /// Add a key only if it is not present yet.
    pub fn insert_if_absent(&mut self, key: &str, ty: PropertyType) {
        if !self.contains(key) {
            self.entries.push((key.to_string(), ty));
        }
    }

    /// Type of a key.
    pub fn get(&self, key: &str) -> Option<&PropertyType> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, ty)| ty)
    }

    /// Whether the key is declared.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over `(key, type)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyType)> {
        self.entries.iter().map(|(k, ty)| (k.as_str(), ty))
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schema has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, T: Into<PropertyType>> FromIterator<(K, T)> for PropertySchema {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut schema = Self::new();
        for (key, ty) in iter {
            schema.insert(key, ty);
        }
        schema
    }
}

/// Whether an index targets node or edge properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum IndexTarget {
    /// Node property index.
    Node,
    /// Edge property index.
    Edge,
}

/// Index metadata reported by the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexDescription {
    /// Node or edge index.
    pub target: IndexTarget,
    /// Label owning the indexed property.
    pub label: String,
    /// Indexed property key.
    pub property: String,
    /// Unique index.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unique: bool,
    /// The indexed property is a list.
    #[cfg_attr(feature = "serde", serde(default))]
    pub array: bool,
}

impl IndexDescription {
    /// Create a non-unique index over a node property.
    pub fn node(label: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            target: IndexTarget::Node,
            label: label.into(),
            property: property.into(),
            unique: false,
            array: false,
        }
    }

    /// Create a non-unique index over an edge property.
    pub fn edge(label: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            target: IndexTarget::Edge,
            ..Self::node(label, property)
        }
    }

    /// Mark the index as unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Mark the indexed property as a list.
    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    /// Whether this index covers `(target, label, property)`.
    pub fn covers(&self, target: IndexTarget, label: &str, property: &str) -> bool {
        self.target == target && self.label == label && self.property == property
    }
}

/// Read-only access to a labeled property graph.
///
/// Implementations must enumerate labels in a stable order so that
/// repeated exports of the same graph produce identical scripts. The graph
/// is treated as immutable for the lifetime of any borrow.
pub trait GraphSource {
    /// Node labels in stable order.
    fn node_labels(&self) -> Vec<String>;

    /// Edge labels in stable order.
    fn edge_labels(&self) -> Vec<String>;

    /// All nodes of a label in the graph's natural order.
    fn nodes<'a>(&'a self, label: &str) -> Box<dyn Iterator<Item = Cow<'a, Node>> + 'a>;

    /// All edges of a label in the graph's natural order.
    fn edges<'a>(&'a self, label: &str) -> Box<dyn Iterator<Item = Cow<'a, Edge>> + 'a>;

    /// Label of the node with the given id.
    fn node_label(&self, id: u64) -> Option<Cow<'_, str>>;

    /// Property key → type mapping of a node label.
    fn node_property_types(&self, label: &str) -> PropertySchema;

    /// Property key → type mapping of an edge label.
    fn edge_property_types(&self, label: &str) -> PropertySchema;

    /// All index descriptions.
    fn index_descriptions(&self) -> Vec<IndexDescription>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScalarKind;

    #[test]
    fn test_node_synthetic_properties() {
        let node = Node::new(7, "Gene").with_property("symbol", "BRCA1");
        assert_eq!(node.property(ID_KEY).as_deref(), Some(&Value::UInt64(7)));
        assert_eq!(
            node.property(LABEL_KEY).as_deref(),
            Some(&Value::from("Gene"))
        );
        assert_eq!(
            node.property("symbol").as_deref(),
            Some(&Value::from("BRCA1"))
        );
        assert!(node.property("missing").is_none());
    }

    #[test]
    fn test_edge_synthetic_properties() {
        let edge = Edge::new(9, "REGULATES", 1, 2).with_property("score", 0.5f64);
        assert_eq!(edge.property(FROM_ID_KEY).as_deref(), Some(&Value::UInt64(1)));
        assert_eq!(edge.property(TO_ID_KEY).as_deref(), Some(&Value::UInt64(2)));
        assert_eq!(edge.property(ID_KEY).as_deref(), Some(&Value::UInt64(9)));
        assert_eq!(edge.property("score").as_deref(), Some(&Value::Float64(0.5)));
    }

    #[test]
    fn test_schema_preserves_declaration_order() {
        let schema = PropertySchema::new()
            .with("zeta", "string")
            .with("alpha", "int32")
            .with("mid", "boolean");
        let keys: Vec<&str> = schema.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_schema_replace_keeps_position() {
        let mut schema = PropertySchema::new().with("a", "string").with("b", "string");
        schema.insert("a", "int64");
        let entries: Vec<(&str, String)> =
            schema.iter().map(|(k, t)| (k, t.to_string())).collect();
        assert_eq!(
            entries,
            vec![("a", "int64".to_string()), ("b", "string".to_string())]
        );
    }

    #[test]
    fn test_schema_insert_if_absent() {
        let mut schema = PropertySchema::new().with("a", "string");
        schema.insert_if_absent("a", PropertyType::Scalar(ScalarKind::Int32));
        schema.insert_if_absent("b", PropertyType::Scalar(ScalarKind::Int32));
        assert_eq!(schema.get("a"), Some(&PropertyType::Scalar(ScalarKind::String)));
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_index_description_builders() {
        let index = IndexDescription::edge("REGULATES", "source").unique().array();
        assert_eq!(index.target, IndexTarget::Edge);
        assert!(index.unique);
        assert!(index.array);
        assert!(index.covers(IndexTarget::Edge, "REGULATES", "source"));
        assert!(!index.covers(IndexTarget::Node, "REGULATES", "source"));
    }
}
