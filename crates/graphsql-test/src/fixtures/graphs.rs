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


//! Fixture graphs.

use super::builders::{fan_in, NodeBatchBuilder};
use graphsql_core::{
    Edge, IndexDescription, MemoryGraph, MemoryGraphBuilder, Node, PropertySchema, Value,
};

/// Source label of the long edge fixture.
pub const LONG_FROM_LABEL: &str = "DrugBankClinicalCompound_Drug";
/// Target label of the long edge fixture.
pub const LONG_TO_LABEL: &str = "HumanGenomeOrganisation_Gene";
/// Edge label of the long edge fixture.
pub const LONG_EDGE_LABEL: &str = "ASSOCIATED_WITH";

fn build(builder: MemoryGraphBuilder) -> MemoryGraph {
    builder.build().expect("fixture graph is valid")
}

/// One `Gene` node with a declared `symbol` / `aliases` schema.
pub fn gene_graph() -> MemoryGraph {
    build(
        MemoryGraph::builder()
            .node_schema(
                "Gene",
                PropertySchema::new()
                    .with("symbol", "string")
                    .with("aliases", "string[]"),
            )
            .node(
                Node::new(1, "Gene")
                    .with_property("symbol", "BRCA1")
                    .with_property("aliases", vec!["BRCA1", "BRCA2"]),
            ),
    )
}

/// `REGULATES` edges leaving both `Gene` and `Protein` nodes, plus an
/// `ENCODES` edge.
pub fn regulates_graph() -> MemoryGraph {
    build(
        MemoryGraph::builder()
            .node(Node::new(1, "Gene").with_property("symbol", "TP53"))
            .node(Node::new(2, "Gene").with_property("symbol", "MDM2"))
            .node(Node::new(3, "Protein").with_property("mass", 43.7f64))
            .edge(Edge::new(10, "REGULATES", 1, 2).with_property("score", 0.9f64))
            .edge(Edge::new(11, "REGULATES", 3, 1).with_property("score", 0.4f64))
            .edge(Edge::new(12, "ENCODES", 1, 3)),
    )
}

/// A `Gene` label with indexed scalar and list properties, and an
/// indexed edge property.
pub fn indexed_list_graph() -> MemoryGraph {
    build(
        MemoryGraph::builder()
            .node(
                Node::new(1, "Gene")
                    .with_property("symbol", "BRCA1")
                    .with_property("aliases", vec!["RNF53"])
                    .with_property("summary", "DNA repair"),
            )
            .node(Node::new(2, "Gene").with_property("symbol", "BRCA2"))
            .edge(Edge::new(3, "PARALOG", 1, 2).with_property("source", "ensembl"))
            .index(IndexDescription::node("Gene", "symbol").unique())
            .index(IndexDescription::node("Gene", "aliases").array())
            .index(IndexDescription::edge("PARALOG", "source")),
    )
}

/// An edge whose table name exceeds the 63 character identifier limit.
pub fn long_label_graph() -> MemoryGraph {
    build(
        MemoryGraph::builder()
            .node(Node::new(1, LONG_FROM_LABEL).with_property("name", "aspirin"))
            .node(Node::new(2, LONG_TO_LABEL).with_property("symbol", "PTGS1"))
            .edge(Edge::new(3, LONG_EDGE_LABEL, 1, 2)),
    )
}

/// One node carrying every scalar kind, a null and an empty list.
pub fn scalars_graph() -> MemoryGraph {
    build(
        MemoryGraph::builder().node(
            Node::new(1, "Sample")
                .with_property("flag", true)
                .with_property("tiny", 7i8)
                .with_property("short", -12i16)
                .with_property("count", 42i32)
                .with_property("big", 9_007_199_254_740_993i64)
                .with_property("ratio", 0.5f32)
                .with_property("weight", 1.25f64)
                .with_property("note", "it's \"quoted\" \\ here")
                .with_property("tags", Vec::<Value>::new())
                .with_property("missing", Value::Null),
        ),
    )
}

/// A `BINDS` edge whose target node does not exist.
pub fn dangling_edge_graph() -> MemoryGraph {
    build(
        MemoryGraph::builder()
            .node(Node::new(1, "Gene").with_property("symbol", "TP53"))
            .node(Node::new(2, "Gene").with_property("symbol", "MDM2"))
            .edge(Edge::new(10, "BINDS", 1, 2))
            .edge(Edge::new(11, "BINDS", 1, 99)),
    )
}

/// A graph without nodes or edges.
pub fn empty() -> MemoryGraph {
    build(MemoryGraph::builder())
}

/// `count` `Gene` nodes with ids `1..=count` and a `symbol` property.
pub fn sized_gene_graph(count: usize) -> MemoryGraph {
    build(
        MemoryGraph::builder().nodes(
            NodeBatchBuilder::new("Gene")
                .count(count)
                .property("symbol", |id| Value::from(format!("GENE{}", id)))
                .build(),
        ),
    )
}

/// `count` `Gene` nodes all regulating node 1, with edge ids from 1_000_000.
pub fn sized_fan_in_graph(count: usize) -> MemoryGraph {
    let from: Vec<u64> = (2..=count as u64 + 1).collect();
    build(
        MemoryGraph::builder()
            .nodes(
                NodeBatchBuilder::new("Gene")
                    .count(count + 1)
                    .property("symbol", |id| Value::from(format!("GENE{}", id)))
                    .build(),
            )
            .edges(fan_in("REGULATES", 1_000_000, &from, 1)),
    )
}
