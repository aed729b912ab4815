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

//! SQLite.

use super::{banner, escape_doubled, ColumnTypes, SqlDialect, Target};
use std::borrow::Cow;

static COLUMN_TYPES: ColumnTypes = ColumnTypes {
    id: "INTEGER",
    label: "TEXT",
    list: "TEXT",
    indexed_string: "TEXT",
    text: "TEXT",
    int32: "INTEGER",
    int64: "INTEGER",
    int16: "INTEGER",
    byte: "INTEGER",
    float32: "REAL",
    float64: "REAL",
    boolean: "INTEGER",
};

/// SQLite policy: one database per file, so no schema selection and no
/// table qualification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl SqlDialect for SqliteDialect {
    fn target(&self) -> Target {
        Target::Sqlite
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn identifier_limit(&self) -> Option<usize> {
        None
    }

    fn schema_statements(&self, schema: &str) -> Vec<String> {
        let mut lines = banner(&format!("Schema {}", schema)).to_vec();
        lines.push("PRAGMA encoding = 'UTF-8';".to_string());
        lines
    }

    fn qualifies_tables(&self) -> bool {
        false
    }

    fn disable_foreign_keys(&self) -> &'static str {
        "PRAGMA foreign_keys = 0;"
    }

    fn enable_foreign_keys(&self) -> &'static str {
        "PRAGMA foreign_keys = 1;"
    }

    fn escape_literal<'a>(&self, value: &'a str, quote: char) -> Cow<'a, str> {
        escape_doubled(value, quote)
    }

    fn column_types(&self) -> &'static ColumnTypes {
        &COLUMN_TYPES
    }
}
