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

//! SQL dialect policies.
//!
//! Every syntax difference between the supported engines lives behind the
//! [`SqlDialect`] trait. A [`Target`] selects one policy; the emitters never
//! branch on the target themselves.
//!
//! | | MySQL | MariaDB | PostgreSQL | SQLite | MSSQL |
//! |---|---|---|---|---|---|
//! | identifier quote | `` ` `` | `` ` `` | `"` | `` ` `` | `"` |
//! | literal escape | backslash | backslash | doubled | doubled | doubled |
//! | identifier limit | 63 | 63 | 63 | none | 128 |
//! | array index | no | yes | yes | yes | no |

mod mssql;
mod mysql;
mod postgres;
mod sqlite;

pub use mssql::MsSqlDialect;
pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Identifier limit shared by MySQL, MariaDB and PostgreSQL.
pub const DEFAULT_IDENTIFIER_LIMIT: usize = 63;

/// Target database engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// MySQL 8.
    #[default]
    #[serde(rename = "mysql")]
    MySql,
    /// MariaDB.
    #[serde(rename = "mariadb")]
    MariaDb,
    /// PostgreSQL.
    #[serde(rename = "postgresql", alias = "postgres")]
    PostgreSql,
    /// SQLite 3.
    Sqlite,
    /// Microsoft SQL Server.
    #[serde(rename = "mssql")]
    MsSql,
}

impl Target {
    /// All targets in declaration order.
    pub const ALL: [Target; 5] = [
        Target::MySql,
        Target::MariaDb,
        Target::PostgreSql,
        Target::Sqlite,
        Target::MsSql,
    ];

    /// Canonical lowercase token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::MariaDb => "mariadb",
            Self::PostgreSql => "postgresql",
            Self::Sqlite => "sqlite",
            Self::MsSql => "mssql",
        }
    }

    /// The dialect policy for this target.
    pub fn dialect(self) -> &'static dyn SqlDialect {
        match self {
            Self::MySql => &mysql::MYSQL,
            Self::MariaDb => &mysql::MARIADB,
            Self::PostgreSql => &PostgresDialect,
            Self::Sqlite => &SqliteDialect,
            Self::MsSql => &MsSqlDialect,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown target token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown target '{0}', expected one of: mysql, mariadb, sqlite, postgresql, mssql")]
pub struct ParseTargetError(pub String);

impl FromStr for Target {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::MySql),
            "mariadb" => Ok(Self::MariaDb),
            "postgresql" | "postgres" => Ok(Self::PostgreSql),
            "sqlite" => Ok(Self::Sqlite),
            "mssql" => Ok(Self::MsSql),
            _ => Err(ParseTargetError(s.to_string())),
        }
    }
}

/// Column types a dialect uses for each property category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnTypes {
    /// `__id`, `__from_id`, `__to_id`.
    pub id: &'static str,
    /// `__label`.
    pub label: &'static str,
    /// Any list property.
    pub list: &'static str,
    /// String property that participates in an index.
    pub indexed_string: &'static str,
    /// Any other string property.
    pub text: &'static str,
    /// `int32`.
    pub int32: &'static str,
    /// `int64`.
    pub int64: &'static str,
    /// `int16`.
    pub int16: &'static str,
    /// `byte`.
    pub byte: &'static str,
    /// `float32`.
    pub float32: &'static str,
    /// `float64`.
    pub float64: &'static str,
    /// `boolean`.
    pub boolean: &'static str,
}

/// Syntax policy of one target engine.
pub trait SqlDialect: Send + Sync {
    /// The target this policy implements.
    fn target(&self) -> Target;

    /// Character used to quote identifiers.
    fn identifier_quote(&self) -> char;

    /// Quote an identifier.
    ///
    /// The name is NFC-normalized, control and invisible formatting
    /// characters are dropped, and embedded quote characters are doubled.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push(quote);
        for c in name.nfc().filter(|c| !is_dangerous_unicode(*c)) {
            if c == quote {
                quoted.push(quote);
            }
            quoted.push(c);
        }
        quoted.push(quote);
        quoted
    }

    /// Maximum identifier length in characters, `None` when unchecked.
    fn identifier_limit(&self) -> Option<usize> {
        Some(DEFAULT_IDENTIFIER_LIMIT)
    }

    /// Statements that create and select the schema, banner included.
    fn schema_statements(&self, schema: &str) -> Vec<String>;

    /// Whether table names are prefixed with the schema name.
    fn qualifies_tables(&self) -> bool {
        true
    }

    /// Statement that turns foreign key enforcement off.
    fn disable_foreign_keys(&self) -> &'static str;

    /// Statement that turns foreign key enforcement back on.
    fn enable_foreign_keys(&self) -> &'static str;

    /// Whether list (JSON) columns can be indexed.
    fn supports_array_index(&self) -> bool {
        true
    }

    /// Escape `quote` inside a string literal body.
    fn escape_literal<'a>(&self, value: &'a str, quote: char) -> Cow<'a, str>;

    /// A complete single-quoted string literal.
    fn string_literal(&self, value: &str) -> String {
        format!("'{}'", self.escape_literal(value, '\''))
    }

    /// Boolean literal token.
    fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            "TRUE"
        } else {
            "FALSE"
        }
    }

    /// Row cap of a single multi-row INSERT.
    fn max_insert_rows(&self) -> Option<usize> {
        None
    }

    /// Column types per property category.
    fn column_types(&self) -> &'static ColumnTypes;

    /// Leading clause of a CREATE TABLE statement.
    fn create_table(&self) -> &'static str {
        "CREATE TABLE IF NOT EXISTS"
    }

    /// Leading clause of a DROP TABLE statement.
    fn drop_table(&self) -> &'static str {
        "DROP TABLE IF EXISTS"
    }
}

/// Section banner lines.
pub(crate) fn banner(title: &str) -> [String; 3] {
    [
        BANNER_RULE.to_string(),
        format!("-- {}", title),
        BANNER_RULE.to_string(),
    ]
}

pub(crate) const BANNER_RULE: &str = "-- -----------------------------------------------------";

/// Escape by doubling the quote character.
pub fn escape_doubled(value: &str, quote: char) -> Cow<'_, str> {
    if !value.contains(quote) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if c == quote {
            escaped.push(quote);
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Escape the quote character and backslash with a backslash.
pub fn escape_backslash(value: &str, quote: char) -> Cow<'_, str> {
    if !value.chars().any(|c| c == quote || c == '\\') {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if c == quote || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Control characters plus invisible formatting characters.
fn is_dangerous_unicode(c: char) -> bool {
    c.is_control()
        || matches!(
            c,
            '\u{200B}'
                | '\u{200C}'
                | '\u{200D}'
                | '\u{FEFF}'
                | '\u{202A}'..='\u{202E}'
                | '\u{2066}'..='\u{2069}'
                | '\u{00AD}'
                | '\u{061C}'
                | '\u{180E}'
        )
}
