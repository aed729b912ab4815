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

//! PostgreSQL.

use super::{banner, escape_doubled, ColumnTypes, SqlDialect, Target};
use std::borrow::Cow;

static COLUMN_TYPES: ColumnTypes = ColumnTypes {
    id: "BIGINT",
    label: "VARCHAR(128)",
    list: "JSONB",
    indexed_string: "VARCHAR(1024)",
    text: "TEXT",
    int32: "INTEGER",
    int64: "BIGINT",
    int16: "SMALLINT",
    byte: "SMALLINT",
    float32: "REAL",
    float64: "DOUBLE PRECISION",
    boolean: "BOOLEAN",
};

/// PostgreSQL policy.
///
/// PostgreSQL has no unsigned integers, so ids use `BIGINT`; it also
/// refuses `TRUE` in integer columns, so booleans keep their own type.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl SqlDialect for PostgresDialect {
    fn target(&self) -> Target {
        Target::PostgreSql
    }

    fn identifier_quote(&self) -> char {
        '"'
    }

    fn schema_statements(&self, schema: &str) -> Vec<String> {
        let name = self.quote_identifier(schema);
        let mut lines = banner(&format!("Schema {}", schema)).to_vec();
        lines.push(format!("CREATE SCHEMA IF NOT EXISTS {};", name));
        lines.push(format!("SET search_path TO {};", name));
        lines
    }

    fn disable_foreign_keys(&self) -> &'static str {
        "SET session_replication_role = 'replica';"
    }

    fn enable_foreign_keys(&self) -> &'static str {
        "SET session_replication_role = 'origin';"
    }

    fn escape_literal<'a>(&self, value: &'a str, quote: char) -> Cow<'a, str> {
        escape_doubled(value, quote)
    }

    fn column_types(&self) -> &'static ColumnTypes {
        &COLUMN_TYPES
    }
}
