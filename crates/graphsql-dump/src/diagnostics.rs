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

//! Non-fatal conditions reported by a dump run.

use std::fmt;

/// A soft problem found while generating a dump.
///
/// The dump still completes; the affected statement is emitted in a form the
/// target database will most likely reject, so the operator notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A column was emitted without a type.
    UnmappedType {
        /// Table the column belongs to.
        table: String,
        /// Property key.
        key: String,
        /// Textual form of the property type.
        property_type: String,
    },
    /// A table name is over the identifier limit and has no alias.
    /// The raw name was recorded as its own alias.
    MissingAlias {
        /// The raw table name.
        name: String,
        /// Identifier limit of the target.
        limit: usize,
    },
    /// A shortened name is still over the identifier limit.
    AliasTooLong {
        /// The raw table name.
        name: String,
        /// The configured or derived alias.
        alias: String,
        /// Identifier limit of the target.
        limit: usize,
    },
    /// Two different names resolve to the same table identifier.
    NameCollision {
        /// The shared identifier.
        identifier: String,
        /// First raw name resolving to it.
        first: String,
        /// Second raw name resolving to it.
        second: String,
    },
    /// An edge references a node id that does not exist; the edge is skipped.
    DanglingEdge {
        /// Edge label.
        label: String,
        /// Edge id.
        edge_id: u64,
        /// The unknown node id.
        node_id: u64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmappedType {
                table,
                key,
                property_type,
            } => write!(
                f,
                "failed to map type '{}' of column '{}' in table '{}'",
                property_type, key, table
            ),
            Self::MissingAlias { name, limit } => write!(
                f,
                "no alias provided for table name '{}' exceeding identifier limit of {}",
                name, limit
            ),
            Self::AliasTooLong { name, alias, limit } => write!(
                f,
                "alias '{}' for table name '{}' exceeds identifier limit of {}",
                alias, name, limit
            ),
            Self::NameCollision {
                identifier,
                first,
                second,
            } => write!(
                f,
                "table names '{}' and '{}' both resolve to '{}'",
                first, second, identifier
            ),
            Self::DanglingEdge {
                label,
                edge_id,
                node_id,
            } => write!(
                f,
                "edge {} with label '{}' references unknown node {}",
                edge_id, label, node_id
            ),
        }
    }
}

/// Collects diagnostics and logs each one as it arrives.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record and log a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.items.push(diagnostic);
    }

    /// Recorded diagnostics in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Number of diagnostics.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append all diagnostics of another collection without logging again.
    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    /// Consume into a vector.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
