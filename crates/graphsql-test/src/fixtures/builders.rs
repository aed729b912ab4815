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


//! Builders for bulk fixture data.

use graphsql_core::{Edge, Node, Value};

/// Generates a property value from a node's id.
pub type ValueFn = fn(u64) -> Value;

/// Builder for a run of nodes sharing one label.
///
/// # Examples
///
/// ```
/// use graphsql_test::fixtures::builders::NodeBatchBuilder;
/// use graphsql_core::Value;
///
/// let nodes = NodeBatchBuilder::new("Gene")
///     .first_id(100)
///     .count(3)
///     .property("symbol", |id| Value::from(format!("G{}", id)))
///     .build();
///
/// assert_eq!(nodes.len(), 3);
/// assert_eq!(nodes[2].id, 102);
/// assert_eq!(nodes[0].properties["symbol"], Value::from("G100"));
/// ```
#[derive(Debug, Clone)]
pub struct NodeBatchBuilder {
    label: String,
    first_id: u64,
    count: usize,
    properties: Vec<(String, ValueFn)>,
}

impl NodeBatchBuilder {
    /// Creates a builder for nodes of `label`, starting at id 1.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            first_id: 1,
            count: 0,
            properties: Vec::new(),
        }
    }

    /// Sets the id of the first node.
    pub fn first_id(mut self, id: u64) -> Self {
        self.first_id = id;
        self
    }

    /// Sets how many nodes to generate.
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Adds a generated property.
    pub fn property(mut self, key: impl Into<String>, value: ValueFn) -> Self {
        self.properties.push((key.into(), value));
        self
    }

    /// Builds the nodes, ids ascending.
    pub fn build(self) -> Vec<Node> {
        (0..self.count as u64)
            .map(|offset| {
                let id = self.first_id + offset;
                self.properties
                    .iter()
                    .fold(Node::new(id, self.label.clone()), |node, (key, value)| {
                        node.with_property(key.clone(), value(id))
                    })
            })
            .collect()
    }
}

/// Edges of `label` from every id in `from` to `to`, ids starting at
/// `first_id`.
pub fn fan_in(label: &str, first_id: u64, from: &[u64], to: u64) -> Vec<Edge> {
    from.iter()
        .enumerate()
        .map(|(i, &from_id)| Edge::new(first_id + i as u64, label, from_id, to))
        .collect()
}
