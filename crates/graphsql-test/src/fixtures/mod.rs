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


//! Canonical graph fixtures.
//!
//! - **graphs**: small graphs exercising one dump feature each
//! - **documents**: the same graphs as JSON graph documents
//! - **builders**: bulk node and edge generation

pub mod builders;
mod documents;
mod graphs;

pub use documents::*;
pub use graphs::*;

use crate::FixtureList;

/// Returns all fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("gene", gene_graph),
        ("regulates", regulates_graph),
        ("indexed_list", indexed_list_graph),
        ("long_labels", long_label_graph),
        ("scalars", scalars_graph),
        ("dangling_edge", dangling_edge_graph),
        ("empty", empty),
    ]
}
