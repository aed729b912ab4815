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

//! Dialect-aware SQL dumps of labeled property graphs.
//!
//! This crate turns any [`GraphSource`](graphsql_core::GraphSource) into a
//! SQL script that recreates the graph as relational tables in MySQL,
//! MariaDB, PostgreSQL, SQLite or SQL Server.
//!
//! # Mapping Strategy
//!
//! | Graph Concept | SQL Representation |
//! |---------------|--------------------|
//! | Node label | Table named after the label |
//! | Edge label connecting (A, B) | Table `A__label__B`, one per observed pair |
//! | `__id` | `PRIMARY KEY` plus a trailing unique index |
//! | `__from_id` / `__to_id` | Foreign keys to the node tables |
//! | `__label` | Not exported |
//! | List property | JSON column holding a JSON array |
//! | Index description | `index_n<N>` / `index_e<N>` index, numbered per run |
//!
//! Table names longer than the target's identifier limit are replaced by
//! aliases from an [`AliasStore`], or shortened with label acronyms (see
//! [`NamingStrategy`]).
//!
//! # Example
//!
//! ```rust
//! use graphsql_core::{Edge, MemoryGraph, Node};
//! use graphsql_dump::{dump_to_string, AliasConfig, DumpConfig, Target};
//!
//! let graph = MemoryGraph::builder()
//!     .node(Node::new(1, "Gene").with_property("symbol", "BRCA1"))
//!     .node(Node::new(2, "Gene").with_property("symbol", "BRCA2"))
//!     .edge(Edge::new(3, "REGULATES", 1, 2))
//!     .build()
//!     .unwrap();
//!
//! let config = DumpConfig::new()
//!     .with_target(Target::PostgreSql)
//!     .with_batch_size(500);
//! let mut aliases = AliasConfig::new();
//! let (sql, report) = dump_to_string(&graph, &mut aliases, &config).unwrap();
//!
//! assert!(sql.contains("CREATE TABLE IF NOT EXISTS \"Gene__REGULATES__Gene\" ("));
//! assert_eq!(report.insert_statements, 2);
//! ```
//!
//! # Generated SQL Format
//!
//! ```sql
//! SET FOREIGN_KEY_CHECKS = 0;
//!
//! -- -----------------------------------------------------
//! -- Node tables
//! -- -----------------------------------------------------
//! DROP TABLE IF EXISTS `Gene`;
//! CREATE TABLE IF NOT EXISTS `Gene` (
//!   `__id` BIGINT UNSIGNED NOT NULL,
//!   `symbol` MEDIUMTEXT NULL,
//!   PRIMARY KEY (`__id`)
//! );
//! CREATE UNIQUE INDEX `index_n1_UNIQUE` ON `Gene`(`__id` ASC);
//!
//! -- ...
//! INSERT INTO `Gene` (`__id`, `symbol`) VALUES (1, 'BRCA1'), (2, 'BRCA2');
//! -- ...
//! SET FOREIGN_KEY_CHECKS = 1;
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alias;
pub mod config;
pub mod data;
pub mod diagnostics;
pub mod dialect;
pub mod dump;
pub mod error;
pub mod schema;
pub mod types;
pub mod writer;

// Re-export main types at crate root for convenience
pub use alias::{acronym_table_name, edge_table_name, EdgeTables, TableNameResolver};
pub use config::{
    AliasConfig, AliasStore, DumpConfig, DumpConfigBuilder, NamingStrategy, DEFAULT_BATCH_SIZE,
};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use dialect::{ParseTargetError, SqlDialect, Target};
pub use dump::{dump_to_file, dump_to_string, dump_to_writer, DumpPhase, DumpReport, SqlDump};
pub use error::{DumpError, Result};
pub use types::{map_type, ColumnType};
