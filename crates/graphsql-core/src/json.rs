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

//! JSON graph document loader.
//!
//! A graph document is a single JSON object:
//!
//! ```json
//! {
//!   "nodes": [{"__id": 1, "__label": "Gene", "symbol": "BRCA1"}],
//!   "edges": [{"__id": 2, "__label": "ENCODES", "__from_id": 1, "__to_id": 1}],
//!   "indexes": [{"target": "node", "label": "Gene", "property": "symbol", "unique": true}],
//!   "schema": {"nodes": {"Gene": [["__id", "int64"], ["symbol", "string"]]}}
//! }
//! ```
//!
//! Every section is optional. Schemas are lists of `[key, type]` pairs so
//! the declared key order survives parsing. Labels without a declared
//! schema get their columns in the order keys first appear in the
//! document.

use crate::error::{GraphError, Result};
use crate::graph::{
    Edge, IndexDescription, Node, PropertySchema, FROM_ID_KEY, ID_KEY, LABEL_KEY, TO_ID_KEY,
};
use crate::memory::MemoryGraph;
use crate::types::{PropertyType, ScalarKind};
use crate::value::Value;
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GraphDocument {
    nodes: Vec<Map<String, JsonValue>>,
    edges: Vec<Map<String, JsonValue>>,
    indexes: Vec<IndexDescription>,
    schema: SchemaSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SchemaSection {
    nodes: BTreeMap<String, Vec<(String, PropertyType)>>,
    edges: BTreeMap<String, Vec<(String, PropertyType)>>,
}

impl MemoryGraph {
    /// Parse a graph document from a string.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, missing or malformed synthetic keys and
    /// duplicate ids.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let document: GraphDocument = serde_json::from_str(input)?;
        document.into_graph()
    }

    /// Parse a graph document from a reader.
    ///
    /// # Errors
    ///
    /// See [`MemoryGraph::from_json_str`].
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let document: GraphDocument = serde_json::from_reader(reader)?;
        document.into_graph()
    }

    /// Read and parse a graph document file.
    ///
    /// # Errors
    ///
    /// See [`MemoryGraph::from_json_str`]; I/O failures surface as
    /// [`GraphError::Io`].
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}

impl GraphDocument {
    fn into_graph(self) -> Result<MemoryGraph> {
        let mut builder = MemoryGraph::builder();
        let mut node_order = KeyOrder::new(false);
        let mut edge_order = KeyOrder::new(true);

        for (label, pairs) in self.schema.nodes {
            node_order.declare(&label);
            builder = builder.node_schema(label, pairs.into_iter().collect::<PropertySchema>());
        }
        for (label, pairs) in self.schema.edges {
            edge_order.declare(&label);
            builder = builder.edge_schema(label, pairs.into_iter().collect::<PropertySchema>());
        }

        for mut object in self.nodes {
            let id = take_id(&mut object, ID_KEY, "node")?;
            let label = take_label(&mut object, "node")?;
            let properties = convert_object(object);
            node_order.observe(&label, &properties);
            let mut node = Node::new(id, label);
            node.properties = properties.into_iter().collect();
            builder = builder.node(node);
        }

        for mut object in self.edges {
            let id = take_id(&mut object, ID_KEY, "edge")?;
            let label = take_label(&mut object, "edge")?;
            let from_id = take_id(&mut object, FROM_ID_KEY, "edge")?;
            let to_id = take_id(&mut object, TO_ID_KEY, "edge")?;
            let properties = convert_object(object);
            edge_order.observe(&label, &properties);
            let mut edge = Edge::new(id, label, from_id, to_id);
            edge.properties = properties.into_iter().collect();
            builder = builder.edge(edge);
        }

        for (label, schema) in node_order.into_schemas() {
            builder = builder.node_schema(label, schema);
        }
        for (label, schema) in edge_order.into_schemas() {
            builder = builder.edge_schema(label, schema);
        }
        for index in self.indexes {
            builder = builder.index(index);
        }

        builder.build()
    }
}

/// Column order of undeclared labels, following the order in which keys
/// first carry a typed value in the document.
struct KeyOrder {
    base: PropertySchema,
    declared: HashSet<String>,
    positions: HashMap<String, usize>,
    schemas: Vec<(String, PropertySchema)>,
}

impl KeyOrder {
    fn new(edges: bool) -> Self {
        let mut base = PropertySchema::new()
            .with(ID_KEY, ScalarKind::Int64)
            .with(LABEL_KEY, ScalarKind::String);
        if edges {
            base = base
                .with(FROM_ID_KEY, ScalarKind::Int64)
                .with(TO_ID_KEY, ScalarKind::Int64);
        }
        Self {
            base,
            declared: HashSet::new(),
            positions: HashMap::new(),
            schemas: Vec::new(),
        }
    }

    fn declare(&mut self, label: &str) {
        self.declared.insert(label.to_string());
    }

    fn observe(&mut self, label: &str, properties: &[(String, Value)]) {
        if self.declared.contains(label) {
            return;
        }
        let pos = match self.positions.get(label) {
            Some(&pos) => pos,
            None => {
                self.schemas.push((label.to_string(), self.base.clone()));
                self.positions.insert(label.to_string(), self.schemas.len() - 1);
                self.schemas.len() - 1
            }
        };
        let schema = &mut self.schemas[pos].1;
        for (key, value) in properties {
            if let Some(ty) = value.property_type() {
                schema.insert_if_absent(key, ty);
            }
        }
    }

    fn into_schemas(self) -> Vec<(String, PropertySchema)> {
        self.schemas
    }
}

fn convert_object(object: Map<String, JsonValue>) -> Vec<(String, Value)> {
    object.into_iter().map(|(k, v)| (k, convert(v))).collect()
}

fn take_id(object: &mut Map<String, JsonValue>, key: &str, entity: &'static str) -> Result<u64> {
    let value = object.remove(key).ok_or_else(|| GraphError::MissingKey {
        key: key.to_string(),
        entity,
    })?;
    value.as_u64().ok_or_else(|| GraphError::InvalidKey {
        key: key.to_string(),
        message: format!("expected an unsigned integer, found {}", value),
    })
}

fn take_label(object: &mut Map<String, JsonValue>, entity: &'static str) -> Result<String> {
    match object.remove(LABEL_KEY) {
        Some(JsonValue::String(label)) => Ok(label),
        Some(other) => Err(GraphError::InvalidKey {
            key: LABEL_KEY.to_string(),
            message: format!("expected a string, found {}", other),
        }),
        None => Err(GraphError::MissingKey {
            key: LABEL_KEY.to_string(),
            entity,
        }),
    }
}

fn convert(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int64(i)
            } else if let Some(u) = n.as_u64() {
                Value::UInt64(u)
            } else {
                Value::Float64(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        JsonValue::String(s) => Value::String(s),
        JsonValue::Array(items) => Value::List(items.into_iter().map(convert).collect()),
        // Nested objects have no column form; keep their JSON text.
        object @ JsonValue::Object(_) => Value::String(object.to_string()),
    }
}
