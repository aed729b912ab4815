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

//! Configuration types for SQL dump generation.

use crate::dialect::Target;
use crate::error::{DumpError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default number of rows per INSERT statement.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// How over-long table names are shortened.
///
/// Exactly one strategy runs per dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NamingStrategy {
    /// Look names up in the persisted alias table (default).
    #[default]
    #[serde(rename = "alias")]
    AliasMap,
    /// Derive edge table names from label acronyms.
    #[serde(rename = "acronym")]
    Acronym,
}

impl fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AliasMap => "alias",
            Self::Acronym => "acronym",
        })
    }
}

impl FromStr for NamingStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alias" => Ok(Self::AliasMap),
            "acronym" => Ok(Self::Acronym),
            other => Err(format!(
                "unknown naming strategy '{}', expected 'alias' or 'acronym'",
                other
            )),
        }
    }
}

/// Configuration for one dump run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    /// Rows per INSERT statement (default: 100, minimum 1).
    pub batch_size: usize,

    /// Schema to create and select; `None` writes unqualified tables.
    pub schema_name: Option<String>,

    /// Target dialect (default: MySQL).
    pub target: Target,

    /// Table name shortening strategy.
    pub naming: NamingStrategy,

    /// Fail on unmapped types and missing aliases instead of reporting them.
    pub strict: bool,

    /// Emit `-- ...` section banners (default: true).
    pub include_comments: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            schema_name: None,
            target: Target::MySql,
            naming: NamingStrategy::AliasMap,
            strict: false,
            include_comments: true,
        }
    }
}

/// Builder for DumpConfig.
///
/// # Examples
///
/// ```
/// # use graphsql_dump::{DumpConfig, Target};
/// let config = DumpConfig::builder()
///     .target(Target::PostgreSql)
///     .schema_name("graph")
///     .batch_size(500)
///     .build();
/// assert_eq!(config.schema_name(), Some("graph"));
/// ```
#[derive(Debug, Default)]
pub struct DumpConfigBuilder {
    batch_size: Option<usize>,
    schema_name: Option<Option<String>>,
    target: Option<Target>,
    naming: Option<NamingStrategy>,
    strict: Option<bool>,
    include_comments: Option<bool>,
}

impl DumpConfigBuilder {
    /// Create a new builder with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rows per INSERT statement.
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }

    /// Set the schema name. Blank names disable schema handling.
    pub fn schema_name(mut self, name: impl Into<String>) -> Self {
        self.schema_name = Some(normalize_schema_name(name.into()));
        self
    }

    /// Set the target dialect.
    pub fn target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the naming strategy.
    pub fn naming(mut self, naming: NamingStrategy) -> Self {
        self.naming = Some(naming);
        self
    }

    /// Set strict mode.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = Some(strict);
        self
    }

    /// Set whether section banners are emitted.
    pub fn include_comments(mut self, include: bool) -> Self {
        self.include_comments = Some(include);
        self
    }

    /// Build the DumpConfig instance.
    ///
    /// All unset fields use their default values.
    pub fn build(self) -> DumpConfig {
        let defaults = DumpConfig::default();
        DumpConfig {
            batch_size: self.batch_size.unwrap_or(defaults.batch_size).max(1),
            schema_name: self.schema_name.unwrap_or(defaults.schema_name),
            target: self.target.unwrap_or(defaults.target),
            naming: self.naming.unwrap_or(defaults.naming),
            strict: self.strict.unwrap_or(defaults.strict),
            include_comments: self.include_comments.unwrap_or(defaults.include_comments),
        }
    }
}

impl DumpConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for DumpConfig.
    pub fn builder() -> DumpConfigBuilder {
        DumpConfigBuilder::default()
    }

    /// Set the rows per INSERT statement; values below 1 become 1.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Set the schema name. The name is trimmed; a blank name means none.
    pub fn with_schema_name(mut self, name: impl Into<String>) -> Self {
        self.schema_name = normalize_schema_name(name.into());
        self
    }

    /// Set the target dialect.
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Set the naming strategy.
    pub fn with_naming(mut self, naming: NamingStrategy) -> Self {
        self.naming = naming;
        self
    }

    /// Enable strict mode.
    pub fn with_strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Disable section banners.
    pub fn without_comments(mut self) -> Self {
        self.include_comments = false;
        self
    }

    /// The schema name, if one is set and not blank.
    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Rows per INSERT after applying the minimum and the dialect cap.
    pub fn effective_batch_size(&self) -> usize {
        let size = self.batch_size.max(1);
        match self.target.dialect().max_insert_rows() {
            Some(cap) => size.min(cap),
            None => size,
        }
    }
}

fn normalize_schema_name(name: String) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Key-value store for table name aliases.
///
/// The dump reads aliases through it and records identity aliases for
/// names that lack one; loading and persisting are up to the caller.
pub trait AliasStore {
    /// The alias recorded for a raw name.
    fn get(&self, name: &str) -> Option<&str>;

    /// Record an alias for a raw name.
    fn record(&mut self, name: &str, alias: &str);
}

impl AliasStore for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        BTreeMap::get(self, name).map(String::as_str)
    }

    fn record(&mut self, name: &str, alias: &str) {
        self.insert(name.to_string(), alias.to_string());
    }
}

/// Persisted alias configuration (`sql_config.json`).
///
/// ```
/// # use graphsql_dump::{AliasConfig, AliasStore};
/// let config = AliasConfig::from_json_str(r#"{"tableNameAlias": {"LongName": "Short"}}"#).unwrap();
/// assert_eq!(config.get("LongName"), Some("Short"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasConfig {
    /// Raw table name to alias.
    #[serde(rename = "tableNameAlias", default)]
    pub table_name_alias: BTreeMap<String, String>,
}

impl AliasConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from JSON. Unknown keys are ignored.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a file, or return an empty configuration if it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| DumpError::from(e).with_path(path))?;
        Self::from_json_str(&text)
    }

    /// Write to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_json_string()?;
        std::fs::write(path, text).map_err(|e| DumpError::from(e).with_path(path))
    }
}

impl AliasStore for AliasConfig {
    fn get(&self, name: &str) -> Option<&str> {
        self.table_name_alias.get(name).map(String::as_str)
    }

    fn record(&mut self, name: &str, alias: &str) {
        self.table_name_alias
            .insert(name.to_string(), alias.to_string());
    }
}
