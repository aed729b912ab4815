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


//! JSON graph documents.

/// The gene graph as a JSON graph document.
pub const GENE_DOCUMENT: &str = r#"{
  "nodes": [
    {"__id": 1, "__label": "Gene", "symbol": "BRCA1", "aliases": ["BRCA1", "BRCA2"]}
  ],
  "schema": {
    "nodes": {"Gene": [["symbol", "string"], ["aliases", "string[]"]]}
  }
}"#;

/// Genes, a protein and two edge labels, with a unique index.
pub const REGULATES_DOCUMENT: &str = r#"{
  "nodes": [
    {"__id": 1, "__label": "Gene", "symbol": "TP53"},
    {"__id": 2, "__label": "Gene", "symbol": "MDM2"},
    {"__id": 3, "__label": "Protein", "mass": 43.7}
  ],
  "edges": [
    {"__id": 10, "__label": "REGULATES", "__from_id": 1, "__to_id": 2, "score": 0.9},
    {"__id": 11, "__label": "REGULATES", "__from_id": 3, "__to_id": 1, "score": 0.4},
    {"__id": 12, "__label": "ENCODES", "__from_id": 1, "__to_id": 3}
  ],
  "indexes": [
    {"target": "node", "label": "Gene", "property": "symbol", "unique": true}
  ]
}"#;

/// An edge table name over the 63 character limit.
pub const LONG_LABEL_DOCUMENT: &str = r#"{
  "nodes": [
    {"__id": 1, "__label": "DrugBankClinicalCompound_Drug", "name": "aspirin"},
    {"__id": 2, "__label": "HumanGenomeOrganisation_Gene", "symbol": "PTGS1"}
  ],
  "edges": [
    {"__id": 3, "__label": "ASSOCIATED_WITH", "__from_id": 1, "__to_id": 2}
  ]
}"#;

/// Not a graph document.
pub const MALFORMED_DOCUMENT: &str = r#"{"nodes": [{"__label": "Gene"}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use graphsql_core::{GraphSource, MemoryGraph};

    #[test]
    fn test_documents_load() {
        let gene = MemoryGraph::from_json_str(GENE_DOCUMENT).unwrap();
        assert_eq!(gene.node_count(), 1);

        let regulates = MemoryGraph::from_json_str(REGULATES_DOCUMENT).unwrap();
        assert_eq!(regulates.edge_count(), 3);
        assert_eq!(regulates.index_descriptions().len(), 1);

        let long = MemoryGraph::from_json_str(LONG_LABEL_DOCUMENT).unwrap();
        assert_eq!(long.edge_labels(), vec!["ASSOCIATED_WITH"]);
    }

    #[test]
    fn test_malformed_document_fails() {
        assert!(MemoryGraph::from_json_str(MALFORMED_DOCUMENT).is_err());
    }
}
