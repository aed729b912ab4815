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

//! Property type to SQL column type mapping.

use crate::dialect::SqlDialect;
use graphsql_core::{PropertyType, ScalarKind, FROM_ID_KEY, ID_KEY, LABEL_KEY, TO_ID_KEY};

/// A column type and its nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnType {
    /// SQL type; empty when the property type has no mapping.
    pub sql_type: &'static str,
    /// Whether the column accepts NULL.
    pub nullable: bool,
}

impl ColumnType {
    /// The `NULL` / `NOT NULL` attribute.
    pub fn attributes(&self) -> &'static str {
        if self.nullable {
            "NULL"
        } else {
            "NOT NULL"
        }
    }

    /// Whether a type was found.
    pub fn is_mapped(&self) -> bool {
        !self.sql_type.is_empty()
    }
}

/// Whether a key is one of the synthetic id keys.
pub fn is_id_key(key: &str) -> bool {
    key == ID_KEY || key == FROM_ID_KEY || key == TO_ID_KEY
}

/// Map a property to its column type for a dialect.
///
/// Returns a column with an empty type when the scalar kind is unknown; the
/// caller decides whether that is an error.
pub fn map_type(
    dialect: &dyn SqlDialect,
    key: &str,
    property_type: &PropertyType,
    indexed: bool,
) -> ColumnType {
    let types = dialect.column_types();
    if is_id_key(key) {
        return ColumnType {
            sql_type: types.id,
            nullable: false,
        };
    }
    if key == LABEL_KEY {
        return nullable(types.label);
    }
    let kind = match property_type {
        PropertyType::List(_) => return nullable(types.list),
        PropertyType::Scalar(kind) => kind,
    };
    nullable(match kind {
        ScalarKind::String if indexed => types.indexed_string,
        ScalarKind::String => types.text,
        ScalarKind::Int32 => types.int32,
        ScalarKind::Int64 => types.int64,
        ScalarKind::Int16 => types.int16,
        ScalarKind::Byte => types.byte,
        ScalarKind::Float32 => types.float32,
        ScalarKind::Float64 => types.float64,
        ScalarKind::Boolean => types.boolean,
        ScalarKind::Other(_) => "",
    })
}

fn nullable(sql_type: &'static str) -> ColumnType {
    ColumnType {
        sql_type,
        nullable: true,
    }
}
