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

//! MySQL and MariaDB.

use super::{banner, escape_backslash, ColumnTypes, SqlDialect, Target};
use std::borrow::Cow;

pub(super) static MYSQL: MySqlDialect = MySqlDialect {
    target: Target::MySql,
};

pub(super) static MARIADB: MySqlDialect = MySqlDialect {
    target: Target::MariaDb,
};

static COLUMN_TYPES: ColumnTypes = ColumnTypes {
    id: "BIGINT UNSIGNED",
    label: "VARCHAR(128)",
    list: "JSON",
    indexed_string: "VARCHAR(1024)",
    text: "MEDIUMTEXT",
    int32: "INT",
    int64: "BIGINT",
    int16: "SMALLINT",
    byte: "TINYINT",
    float32: "FLOAT",
    float64: "DOUBLE",
    boolean: "TINYINT",
};

/// MySQL family policy. MariaDB differs only in accepting indexes on
/// JSON columns.
#[derive(Debug, Clone, Copy)]
pub struct MySqlDialect {
    target: Target,
}

impl SqlDialect for MySqlDialect {
    fn target(&self) -> Target {
        self.target
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn schema_statements(&self, schema: &str) -> Vec<String> {
        let name = self.quote_identifier(schema);
        let mut lines = banner(&format!("Schema {}", schema)).to_vec();
        lines.push(format!(
            "CREATE SCHEMA IF NOT EXISTS {} DEFAULT CHARACTER SET utf8mb4 COLLATE utf8mb4_unicode_ci;",
            name
        ));
        lines.push(format!("USE {};", name));
        lines
    }

    fn disable_foreign_keys(&self) -> &'static str {
        "SET FOREIGN_KEY_CHECKS = 0;"
    }

    fn enable_foreign_keys(&self) -> &'static str {
        "SET FOREIGN_KEY_CHECKS = 1;"
    }

    fn supports_array_index(&self) -> bool {
        self.target != Target::MySql
    }

    fn escape_literal<'a>(&self, value: &'a str, quote: char) -> Cow<'a, str> {
        escape_backslash(value, quote)
    }

    fn column_types(&self) -> &'static ColumnTypes {
        &COLUMN_TYPES
    }
}
