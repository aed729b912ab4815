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

//! Labeled property graph model for GraphSQL.
//!
//! This crate describes the graph that the SQL exporter reads from. It does
//! not store or query graphs on its own; it defines the contract a graph
//! store must fulfil ([`GraphSource`]) and ships [`MemoryGraph`], an
//! in-memory implementation used by the command-line tool and the tests.
//!
//! # Data Model
//!
//! | Concept | Type |
//! |---------|------|
//! | Property type (scalar kind + list flag) | [`PropertyType`], [`ScalarKind`] |
//! | Property value | [`Value`] |
//! | Node (`__id`, `__label`, properties) | [`Node`] |
//! | Edge (`__id`, `__label`, `__from_id`, `__to_id`, properties) | [`Edge`] |
//! | Ordered key → type mapping of a label | [`PropertySchema`] |
//! | Index metadata | [`IndexDescription`] |
//!
//! # Example
//!
//! ```rust
//! use graphsql_core::{Edge, GraphSource, MemoryGraph, Node, Value};
//!
//! let graph = MemoryGraph::builder()
//!     .node(Node::new(1, "Gene").with_property("symbol", "BRCA1"))
//!     .node(Node::new(2, "Protein").with_property("name", "P38398"))
//!     .edge(Edge::new(3, "ENCODES", 1, 2))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.node_labels(), vec!["Gene", "Protein"]);
//! assert_eq!(graph.node_label(2).as_deref(), Some("Protein"));
//! assert_eq!(
//!     graph.nodes("Gene").next().unwrap().properties.get("symbol"),
//!     Some(&Value::from("BRCA1"))
//! );
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod graph;
#[cfg(feature = "json")]
pub mod json;
pub mod memory;
pub mod types;
pub mod value;

pub use error::{GraphError, Result};
pub use graph::{
    Edge, GraphSource, IndexDescription, IndexTarget, Node, PropertyContainer, PropertySchema,
    FROM_ID_KEY, ID_KEY, LABEL_KEY, TO_ID_KEY,
};
pub use memory::{MemoryGraph, MemoryGraphBuilder};
pub use types::{PropertyType, ScalarKind};
pub use value::Value;
