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


//! Small scanners over generated SQL text.
//!
//! These only understand the subset of SQL that GraphSQL writes: single
//! line statements, single-quoted literals and parenthesized row tuples.

/// How a quote character is escaped inside a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralStyle {
    /// `\'` and `\\` (MySQL, MariaDB).
    Backslash,
    /// `''` (PostgreSQL, SQLite, SQL Server).
    Doubled,
}

/// INSERT statements into the given quoted (and possibly qualified) table.
pub fn insert_statements<'a>(dump: &'a str, table: &str) -> Vec<&'a str> {
    let prefix = format!("INSERT INTO {} (", table);
    dump.lines().filter(|line| line.starts_with(&prefix)).collect()
}

/// Zero-based line number of the first line containing `needle`.
pub fn line_of(dump: &str, needle: &str) -> Option<usize> {
    dump.lines().position(|line| line.contains(needle))
}

/// Row tuples of an INSERT statement, parentheses included.
pub fn rows(statement: &str, style: LiteralStyle) -> Vec<&str> {
    let body = match statement.find(" VALUES ") {
        Some(at) => &statement[at + " VALUES ".len()..],
        None => return Vec::new(),
    };

    let mut found = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut in_string = false;
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        if in_string {
            match c {
                '\\' if style == LiteralStyle::Backslash => {
                    chars.next();
                }
                '\'' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '\'' => in_string = true,
            '(' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    found.push(&body[start..=i]);
                }
            }
            _ => {}
        }
    }
    found
}

/// Number of row tuples in an INSERT statement.
pub fn row_count(statement: &str, style: LiteralStyle) -> usize {
    rows(statement, style).len()
}

/// Decode a complete string literal such as `'it\'s'` or `N'it''s'`.
///
/// Returns `None` when the text is not exactly one well-formed literal.
pub fn parse_literal(literal: &str, style: LiteralStyle) -> Option<String> {
    let literal = literal.strip_prefix('N').unwrap_or(literal);
    let body = literal.strip_prefix('\'')?.strip_suffix('\'')?;

    let mut decoded = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, style) {
            ('\\', LiteralStyle::Backslash) => decoded.push(chars.next()?),
            ('\'', LiteralStyle::Doubled) => {
                if chars.next()? != '\'' {
                    return None;
                }
                decoded.push('\'');
            }
            // An unescaped quote would have ended the literal.
            ('\'', LiteralStyle::Backslash) => return None,
            (c, _) => decoded.push(c),
        }
    }
    Some(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_ignore_parens_in_literals() {
        let stmt = r"INSERT INTO `t` (`a`, `b`) VALUES (1, 'x)'), (2, 'it\'s (ok)');";
        assert_eq!(
            rows(stmt, LiteralStyle::Backslash),
            vec!["(1, 'x)')", r"(2, 'it\'s (ok)')"]
        );
    }

    #[test]
    fn test_rows_doubled_quotes() {
        let stmt = "INSERT INTO \"t\" (\"a\") VALUES ('it''s'), ('(');";
        assert_eq!(row_count(stmt, LiteralStyle::Doubled), 2);
    }

    #[test]
    fn test_rows_without_values() {
        assert!(rows("DROP TABLE t;", LiteralStyle::Doubled).is_empty());
    }

    #[test]
    fn test_parse_literal_backslash() {
        assert_eq!(
            parse_literal(r"'a\'b\\c'", LiteralStyle::Backslash).as_deref(),
            Some(r"a'b\c")
        );
        assert_eq!(parse_literal("'a'b'", LiteralStyle::Backslash), None);
    }

    #[test]
    fn test_parse_literal_doubled() {
        assert_eq!(
            parse_literal("N'it''s'", LiteralStyle::Doubled).as_deref(),
            Some("it's")
        );
        assert_eq!(parse_literal("'a'b'", LiteralStyle::Doubled), None);
        assert_eq!(parse_literal("plain", LiteralStyle::Doubled), None);
    }

    #[test]
    fn test_insert_statements_by_table() {
        let dump = "INSERT INTO `a` (`x`) VALUES (1);\nINSERT INTO `ab` (`x`) VALUES (2);\n";
        assert_eq!(insert_statements(dump, "`a`").len(), 1);
        assert_eq!(line_of(dump, "`ab`"), Some(1));
    }
}
