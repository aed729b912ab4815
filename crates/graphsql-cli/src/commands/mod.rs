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


//! CLI command implementations

mod create;
mod inspect;

pub use create::create;
pub use inspect::inspect;

use crate::error::CliError;
use crate::workspace::Workspace;
use graphsql_core::MemoryGraph;

/// Load the graph document of a workspace.
fn load_graph(workspace: &Workspace) -> Result<MemoryGraph, CliError> {
    let path = workspace.graph_path();
    if !path.is_file() {
        return Err(CliError::GraphNotFound { path });
    }
    tracing::info!(path = %path.display(), "loading graph");
    let graph = MemoryGraph::from_json_path(&path)?;
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}
