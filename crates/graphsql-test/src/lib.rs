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


//! Shared test fixtures and utilities for GraphSQL.
//!
//! # Quick Start
//!
//! ```rust
//! use graphsql_test::fixtures;
//! use graphsql_test::sql::{insert_statements, row_count, LiteralStyle};
//!
//! let graph = fixtures::gene_graph();
//! assert_eq!(graph.node_count(), 1);
//!
//! let dump = "INSERT INTO `Gene` (`symbol`) VALUES ('a'), ('b');";
//! let inserts = insert_statements(dump, "`Gene`");
//! assert_eq!(row_count(inserts[0], LiteralStyle::Backslash), 2);
//! ```

pub mod fixtures;
pub mod sql;

use graphsql_core::MemoryGraph;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> MemoryGraph)>;

/// Count the rows of every INSERT statement in a dump.
pub fn count_rows(dump: &str, style: sql::LiteralStyle) -> usize {
    dump.lines()
        .filter(|line| line.starts_with("INSERT INTO "))
        .map(|line| sql::row_count(line, style))
        .sum()
}
