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

//! Table naming: edge fan-out discovery and identifier length enforcement.
//!
//! One edge label can connect several (from-label, to-label) pairs. Each pair
//! gets its own table named `fromLabel__edgeLabel__toLabel`, so foreign keys
//! always point at a single parent table. The pairs are discovered once per
//! run by [`EdgeTables::discover`] and shared by schema and data emission.

use crate::config::{AliasStore, DumpConfig, NamingStrategy};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::dialect::Target;
use crate::error::{DumpError, Result};
use graphsql_core::GraphSource;
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};

/// Raw table name of an edge triple.
pub fn edge_table_name(label: &str, from_label: &str, to_label: &str) -> String {
    format!("{}__{}__{}", from_label, label, to_label)
}

/// Shortened edge table name built from label acronyms.
///
/// Each node label with an underscore keeps only the uppercase characters
/// of its first segment followed by `_` and the rest. Labels without an
/// underscore are kept as they are.
///
/// ```
/// # use graphsql_dump::alias::acronym_table_name;
/// assert_eq!(
///     acronym_table_name("ASSOCIATED_WITH", "DrugBank_Drug", "HGNC_Gene"),
///     "DB_Drug__ASSOCIATED_WITH__HGNC_Gene"
/// );
/// ```
pub fn acronym_table_name(label: &str, from_label: &str, to_label: &str) -> String {
    format!(
        "{}__{}__{}",
        acronym_label(from_label),
        label,
        acronym_label(to_label)
    )
}

fn acronym_label(label: &str) -> Cow<'_, str> {
    match label.split_once('_') {
        Some((head, rest)) => {
            let acronym: String = head.chars().filter(|c| c.is_uppercase()).collect();
            Cow::Owned(format!("{}_{}", acronym, rest))
        }
        None => Cow::Borrowed(label),
    }
}

/// Distinct (from-label, to-label) pairs observed per edge label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeTables {
    labels: Vec<(String, BTreeSet<(String, String)>)>,
}

impl EdgeTables {
    /// Scan every edge once and collect the label pairs it connects.
    ///
    /// Edges whose endpoints are unknown are reported and left out.
    pub fn discover<G: GraphSource + ?Sized>(graph: &G, diagnostics: &mut Diagnostics) -> Self {
        let mut labels = Vec::new();
        for label in graph.edge_labels() {
            let mut pairs = BTreeSet::new();
            for edge in graph.edges(&label) {
                let from = graph.node_label(edge.from_id);
                let to = graph.node_label(edge.to_id);
                match (from, to) {
                    (Some(from), Some(to)) => {
                        pairs.insert((from.into_owned(), to.into_owned()));
                    }
                    (from, _) => diagnostics.push(Diagnostic::DanglingEdge {
                        label: label.clone(),
                        edge_id: edge.id,
                        node_id: if from.is_none() {
                            edge.from_id
                        } else {
                            edge.to_id
                        },
                    }),
                }
            }
            labels.push((label, pairs));
        }
        Self { labels }
    }

    /// Edge labels in graph order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|(label, _)| label.as_str())
    }

    /// Label pairs of one edge label, sorted.
    pub fn pairs<'a>(&'a self, label: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.labels
            .iter()
            .filter(move |(l, _)| l == label)
            .flat_map(|(_, pairs)| pairs.iter())
            .map(|(from, to)| (from.as_str(), to.as_str()))
    }

    /// Every `(edge label, from label, to label)` triple.
    pub fn triples(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.labels.iter().flat_map(|(label, pairs)| {
            pairs
                .iter()
                .map(move |(from, to)| (label.as_str(), from.as_str(), to.as_str()))
        })
    }

    /// Number of edge tables.
    pub fn len(&self) -> usize {
        self.labels.iter().map(|(_, pairs)| pairs.len()).sum()
    }

    /// Whether no edge table exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Maps node labels and edge triples to legal table identifiers.
///
/// Built once per run. Names within the target's identifier limit are used
/// as they are. Longer names are looked up in the alias store; a missing
/// alias is recorded as an identity alias and reported, or fails the run in
/// strict mode. With [`NamingStrategy::Acronym`], long edge table names are
/// shortened by [`acronym_table_name`] instead, while node labels still go
/// through the alias store.
#[derive(Debug, Clone)]
pub struct TableNameResolver {
    target: Target,
    limit: Option<usize>,
    aliases: HashMap<String, String>,
    node_labels: Vec<String>,
    edge_tables: EdgeTables,
    diagnostics: Diagnostics,
}

impl TableNameResolver {
    /// Discover every table of the graph and resolve its name.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`DumpError::MissingAlias`] for the first
    /// over-long name without an alias.
    pub fn new<G, S>(graph: &G, store: &mut S, config: &DumpConfig) -> Result<Self>
    where
        G: GraphSource + ?Sized,
        S: AliasStore + ?Sized,
    {
        let mut diagnostics = Diagnostics::new();
        let edge_tables = EdgeTables::discover(graph, &mut diagnostics);
        let mut resolver = Self {
            target: config.target,
            limit: config.target.dialect().identifier_limit(),
            aliases: HashMap::new(),
            node_labels: graph.node_labels(),
            edge_tables,
            diagnostics,
        };

        let node_labels = resolver.node_labels.clone();
        for label in &node_labels {
            resolver.check_alias(label, store, config.strict)?;
        }

        let raw_edge_names: Vec<String> = resolver
            .edge_tables
            .triples()
            .map(|(label, from, to)| edge_table_name(label, from, to))
            .collect();
        let triples: Vec<(String, String, String)> = resolver
            .edge_tables
            .triples()
            .map(|(l, f, t)| (l.to_string(), f.to_string(), t.to_string()))
            .collect();
        for (raw, (label, from, to)) in raw_edge_names.iter().zip(&triples) {
            match config.naming {
                NamingStrategy::AliasMap => resolver.check_alias(raw, store, config.strict)?,
                NamingStrategy::Acronym => resolver.shorten(raw, label, from, to),
            }
        }

        resolver.check_collisions(node_labels.iter().chain(&raw_edge_names));
        tracing::debug!(
            node_tables = resolver.node_labels.len(),
            edge_tables = resolver.edge_tables.len(),
            aliases = resolver.aliases.len(),
            "resolved table names"
        );
        Ok(resolver)
    }

    fn over_limit(&self, name: &str) -> Option<usize> {
        self.limit.filter(|&limit| name.chars().count() > limit)
    }

    fn check_alias<S: AliasStore + ?Sized>(
        &mut self,
        name: &str,
        store: &mut S,
        strict: bool,
    ) -> Result<()> {
        let limit = match self.over_limit(name) {
            Some(limit) => limit,
            None => return Ok(()),
        };
        let existing = store.get(name).map(str::to_string);
        match existing {
            Some(alias) if alias != name => {
                if alias.chars().count() > limit {
                    self.diagnostics.push(Diagnostic::AliasTooLong {
                        name: name.to_string(),
                        alias: alias.clone(),
                        limit,
                    });
                }
                self.aliases.insert(name.to_string(), alias);
            }
            _ if strict => {
                return Err(DumpError::MissingAlias {
                    name: name.to_string(),
                    limit,
                    target: self.target,
                })
            }
            existing => {
                if existing.is_none() {
                    store.record(name, name);
                }
                self.diagnostics.push(Diagnostic::MissingAlias {
                    name: name.to_string(),
                    limit,
                });
            }
        }
        Ok(())
    }

    fn shorten(&mut self, raw: &str, label: &str, from: &str, to: &str) {
        let limit = match self.over_limit(raw) {
            Some(limit) => limit,
            None => return,
        };
        let short = acronym_table_name(label, from, to);
        if short.chars().count() > limit {
            self.diagnostics.push(Diagnostic::AliasTooLong {
                name: raw.to_string(),
                alias: short.clone(),
                limit,
            });
        }
        if short != raw {
            self.aliases.insert(raw.to_string(), short);
        }
    }

    fn check_collisions<'a>(&mut self, names: impl Iterator<Item = &'a String>) {
        let mut seen: HashMap<String, String> = HashMap::new();
        let mut collisions = Vec::new();
        for raw in names {
            let identifier = self.resolve(raw).to_string();
            match seen.get(&identifier) {
                Some(first) if first != raw => collisions.push(Diagnostic::NameCollision {
                    identifier,
                    first: first.clone(),
                    second: raw.clone(),
                }),
                Some(_) => {}
                None => {
                    seen.insert(identifier, raw.clone());
                }
            }
        }
        for collision in collisions {
            self.diagnostics.push(collision);
        }
    }

    /// The identifier for a raw name: its alias when one applies, otherwise
    /// the name itself.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Table identifier of a node label.
    pub fn node_table<'a>(&'a self, label: &'a str) -> &'a str {
        self.resolve(label)
    }

    /// Table identifier of an edge triple.
    pub fn edge_table(&self, label: &str, from_label: &str, to_label: &str) -> String {
        let raw = edge_table_name(label, from_label, to_label);
        self.resolve(&raw).to_string()
    }

    /// Node labels in graph order.
    pub fn node_labels(&self) -> &[String] {
        &self.node_labels
    }

    /// The discovered edge tables.
    pub fn edge_tables(&self) -> &EdgeTables {
        &self.edge_tables
    }

    /// Identifier limit in force, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Diagnostics raised while resolving names.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}
