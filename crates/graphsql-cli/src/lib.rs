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


//! GraphSQL CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **create**: generate `<WORKSPACE>/sql/dump.sql` from
//!   `<WORKSPACE>/sources/graph.json`, keeping table name aliases in
//!   `<WORKSPACE>/sql/sql_config.json`
//! - **inspect**: list node and edge tables and alias gaps without writing
//!
//! # Examples
//!
//! ```no_run
//! use graphsql_cli::commands::{create, inspect};
//! use graphsql_dump::{DumpConfig, Target};
//!
//! # fn main() -> Result<(), graphsql_cli::error::CliError> {
//! let config = DumpConfig::new()
//!     .with_target(Target::MariaDb)
//!     .with_batch_size(500);
//! inspect("workspace", &config)?;
//! create("workspace", &config, None)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The binary logs to stderr through `tracing-subscriber`; the default
//! filter is `graphsql=info` and `RUST_LOG` overrides it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod workspace;
