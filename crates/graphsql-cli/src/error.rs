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


//! Structured error types for the GraphSQL CLI.

use graphsql_core::GraphError;
use graphsql_dump::DumpError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for GraphSQL CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use graphsql_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O operation failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The workspace directory does not exist.
    #[error("Workspace '{path}' does not exist or is not a directory")]
    WorkspaceNotFound {
        /// The workspace path given on the command line
        path: PathBuf,
    },

    /// The workspace has no graph document.
    #[error("Graph source '{path}' not found")]
    GraphNotFound {
        /// Expected location of the graph document
        path: PathBuf,
    },

    /// The graph document could not be loaded.
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Generating the dump failed.
    #[error("Dump error: {0}")]
    Dump(#[from] DumpError),
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl AsRef<Path>, err: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}
