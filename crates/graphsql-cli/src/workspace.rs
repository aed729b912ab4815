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


//! Workspace directory layout.
//!
//! ```text
//! <workspace>/
//! ├── sources/graph.json     graph document
//! └── sql/
//!     ├── sql_config.json    table name aliases
//!     └── dump.sql           generated script
//! ```

use crate::error::CliError;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the graph document.
pub const SOURCES_DIR: &str = "sources";
/// Graph document file name.
pub const GRAPH_FILE: &str = "graph.json";
/// Directory holding SQL artifacts.
pub const SQL_DIR: &str = "sql";
/// Alias configuration file name.
pub const CONFIG_FILE: &str = "sql_config.json";
/// Default dump file name.
pub const DUMP_FILE: &str = "dump.sql";

/// An existing workspace directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Open a workspace, verifying that the directory exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let root = path.as_ref();
        if !root.is_dir() {
            return Err(CliError::WorkspaceNotFound {
                path: root.to_path_buf(),
            });
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the graph document.
    pub fn graph_path(&self) -> PathBuf {
        self.root.join(SOURCES_DIR).join(GRAPH_FILE)
    }

    /// Path of the SQL directory.
    pub fn sql_dir(&self) -> PathBuf {
        self.root.join(SQL_DIR)
    }

    /// Path of the alias configuration.
    pub fn config_path(&self) -> PathBuf {
        self.sql_dir().join(CONFIG_FILE)
    }

    /// Default path of the dump.
    pub fn dump_path(&self) -> PathBuf {
        self.sql_dir().join(DUMP_FILE)
    }

    /// Create the SQL directory if needed.
    pub fn ensure_sql_dir(&self) -> Result<PathBuf, CliError> {
        let dir = self.sql_dir();
        fs::create_dir_all(&dir).map_err(|e| CliError::io_error(&dir, e))?;
        Ok(dir)
    }
}
