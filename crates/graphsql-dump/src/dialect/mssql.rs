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

//! Microsoft SQL Server.

use super::{banner, escape_doubled, ColumnTypes, SqlDialect, Target};
use std::borrow::Cow;

/// Rows per `VALUES` list accepted by SQL Server.
pub const MSSQL_MAX_INSERT_ROWS: usize = 1000;

static COLUMN_TYPES: ColumnTypes = ColumnTypes {
    id: "BIGINT",
    label: "NVARCHAR(128)",
    list: "NVARCHAR(MAX)",
    indexed_string: "NVARCHAR(1024)",
    text: "NVARCHAR(MAX)",
    int32: "INT",
    int64: "BIGINT",
    int16: "SMALLINT",
    byte: "SMALLINT",
    float32: "REAL",
    float64: "FLOAT",
    boolean: "TINYINT",
};

/// SQL Server policy using ANSI double-quoted identifiers
/// (`QUOTED_IDENTIFIER ON`).
///
/// Unlike the MySQL family, string literals escape `'` by doubling it.
/// T-SQL has no backslash escape, so a backslash is written as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsSqlDialect;

impl SqlDialect for MsSqlDialect {
    fn target(&self) -> Target {
        Target::MsSql
    }

    fn identifier_quote(&self) -> char {
        '"'
    }

    fn identifier_limit(&self) -> Option<usize> {
        Some(128)
    }

    fn schema_statements(&self, schema: &str) -> Vec<String> {
        let name = self.quote_identifier(schema);
        let mut lines = banner(&format!("Schema {}", schema)).to_vec();
        lines.push(format!(
            "IF SCHEMA_ID({}) IS NULL EXEC({});",
            self.string_literal(schema),
            self.string_literal(&format!("CREATE SCHEMA {}", name))
        ));
        lines
    }

    fn disable_foreign_keys(&self) -> &'static str {
        "EXEC sp_MSforeachtable 'ALTER TABLE ? NOCHECK CONSTRAINT ALL';"
    }

    fn enable_foreign_keys(&self) -> &'static str {
        "EXEC sp_MSforeachtable 'ALTER TABLE ? WITH CHECK CHECK CONSTRAINT ALL';"
    }

    fn supports_array_index(&self) -> bool {
        false
    }

    fn escape_literal<'a>(&self, value: &'a str, quote: char) -> Cow<'a, str> {
        escape_doubled(value, quote)
    }

    // NVARCHAR columns need national literals to keep non-Latin text.
    fn string_literal(&self, value: &str) -> String {
        format!("N'{}'", self.escape_literal(value, '\''))
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }

    fn max_insert_rows(&self) -> Option<usize> {
        Some(MSSQL_MAX_INSERT_ROWS)
    }

    fn column_types(&self) -> &'static ColumnTypes {
        &COLUMN_TYPES
    }

    fn create_table(&self) -> &'static str {
        "CREATE TABLE"
    }
}
