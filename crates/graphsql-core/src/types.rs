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

//! Abstract property types reported by the graph.

use std::fmt;

/// Scalar kind of a property, or the component kind of a list property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// UTF-8 text.
    String,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 16-bit signed integer.
    Int16,
    /// 8-bit signed integer.
    Byte,
    /// Single precision float.
    Float32,
    /// Double precision float.
    Float64,
    /// Boolean.
    Boolean,
    /// A type the graph reports that GraphSQL has no mapping for.
    Other(String),
}

impl ScalarKind {
    /// Parse a kind name. Unknown names yield [`ScalarKind::Other`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "string" | "str" | "text" => Self::String,
            "int32" | "int" | "integer" => Self::Int32,
            "int64" | "long" => Self::Int64,
            "int16" | "short" => Self::Int16,
            "byte" | "int8" => Self::Byte,
            "float32" | "float" => Self::Float32,
            "float64" | "double" => Self::Float64,
            "boolean" | "bool" => Self::Boolean,
            _ => Self::Other(name.trim().to_string()),
        }
    }

    /// Canonical name of this kind.
    pub fn name(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Int16 => "int16",
            Self::Byte => "byte",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Boolean => "boolean",
            Self::Other(name) => name,
        }
    }

    /// Integer kinds of any width.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Int32 | Self::Int64 | Self::Int16 | Self::Byte)
    }

    /// Integer and floating point kinds.
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || matches!(self, Self::Float32 | Self::Float64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type of a property: a scalar, or a list of scalars.
///
/// Lists always carry a scalar component kind, so list-of-list is not
/// representable.
///
/// The textual form is the kind name, with a `[]` suffix for lists:
///
/// ```
/// use graphsql_core::{PropertyType, ScalarKind};
///
/// let ty = PropertyType::from("string[]");
/// assert_eq!(ty, PropertyType::List(ScalarKind::String));
/// assert_eq!(ty.to_string(), "string[]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum PropertyType {
    /// A single value.
    Scalar(ScalarKind),
    /// A list of values of the component kind.
    List(ScalarKind),
}

impl PropertyType {
    /// Create a scalar type.
    pub fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }

    /// Create a list type with the given component kind.
    pub fn list(kind: ScalarKind) -> Self {
        Self::List(kind)
    }

    /// Whether this is a list type.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The scalar kind, or the component kind for lists.
    pub fn kind(&self) -> &ScalarKind {
        match self {
            Self::Scalar(kind) | Self::List(kind) => kind,
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{}", kind),
            Self::List(kind) => write!(f, "{}[]", kind),
        }
    }
}

impl From<&str> for PropertyType {
    fn from(s: &str) -> Self {
        let s = s.trim();
        match s.strip_suffix("[]") {
            Some(component) => Self::List(ScalarKind::parse(component)),
            None => Self::Scalar(ScalarKind::parse(s)),
        }
    }
}

impl From<String> for PropertyType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<PropertyType> for String {
    fn from(ty: PropertyType) -> Self {
        ty.to_string()
    }
}

impl From<ScalarKind> for PropertyType {
    fn from(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }
}
