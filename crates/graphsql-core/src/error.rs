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

//! Error types for graph construction and loading.

use thiserror::Error;

/// Error type for building or loading a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Two entities share the same `__id`.
    #[error("duplicate id {0}: node and edge ids must be unique within the graph")]
    DuplicateId(u64),

    /// A synthetic key required by the data model is absent.
    #[error("missing '{key}' on {entity}")]
    MissingKey {
        /// The missing key (`__id`, `__label`, ...).
        key: String,
        /// `"node"` or `"edge"`.
        entity: &'static str,
    },

    /// A synthetic key carries a value of the wrong shape.
    #[error("invalid value for '{key}': {message}")]
    InvalidKey {
        /// The offending key.
        key: String,
        /// What was expected.
        message: String,
    },

    /// Malformed JSON graph document.
    #[cfg(feature = "json")]
    #[error("JSON graph document error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O failure while reading a graph document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
