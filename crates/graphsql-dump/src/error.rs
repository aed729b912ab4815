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

//! Error types for SQL dump generation.

use crate::dialect::Target;
use graphsql_core::GraphError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for dump operations.
///
/// Soft conditions (unmapped types, missing aliases) are only raised as
/// errors in strict mode; otherwise they are reported as
/// [`Diagnostic`](crate::Diagnostic)s and the dump continues.
#[derive(Debug, Error)]
pub enum DumpError {
    /// Writing the script or reading/writing a config file failed.
    #[error("I/O error{}: {source}", display_path(.path))]
    Io {
        /// File involved, if known.
        path: Option<PathBuf>,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A property type has no SQL column type for the target.
    #[error("no {target} column type for property '{key}' of type '{property_type}'")]
    UnmappedType {
        /// Property key.
        key: String,
        /// Textual form of the property type.
        property_type: String,
        /// Target dialect.
        target: Target,
    },

    /// A table name exceeds the identifier limit and no alias is configured.
    #[error("table name '{name}' exceeds the {limit} character identifier limit of {target} and has no alias")]
    MissingAlias {
        /// The raw table name.
        name: String,
        /// Identifier limit of the target.
        limit: usize,
        /// Target dialect.
        target: Target,
    },

    /// Graph loading error.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// Alias configuration (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DumpError {
    /// Attach a file path to an I/O error that has none.
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io { path: None, source } => Self::Io {
                path: Some(file.into()),
                source,
            },
            other => other,
        }
    }
}

impl From<std::io::Error> for DumpError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" on '{}'", p.display()))
        .unwrap_or_default()
}

/// Result type alias for dump operations.
pub type Result<T> = std::result::Result<T, DumpError>;
