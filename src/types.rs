//! Semantic parameter types
//!
//! The generator targets Java parameters, so types are the Java numeric
//! primitives. Boxed names are accepted when resolving a type from its
//! source spelling.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared type of a method parameter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl ParamType {
    /// Java spelling of the primitive type
    pub fn java_name(self) -> &'static str {
        match self {
            ParamType::Byte => "byte",
            ParamType::Short => "short",
            ParamType::Int => "int",
            ParamType::Long => "long",
            ParamType::Float => "float",
            ParamType::Double => "double",
        }
    }

    pub fn is_integral(self) -> bool {
        matches!(
            self,
            ParamType::Byte | ParamType::Short | ParamType::Int | ParamType::Long
        )
    }

    pub fn is_floating(self) -> bool {
        matches!(self, ParamType::Float | ParamType::Double)
    }

    /// Resolve a type from its source spelling (`int`, `Integer`,
    /// `java.lang.Integer`, ...)
    pub fn resolve(name: &str) -> Option<Self> {
        let name = name.trim();
        let simple = name.strip_prefix("java.lang.").unwrap_or(name);
        match simple {
            "byte" | "Byte" => Some(ParamType::Byte),
            "short" | "Short" => Some(ParamType::Short),
            "int" | "Integer" => Some(ParamType::Int),
            "long" | "Long" => Some(ParamType::Long),
            "float" | "Float" => Some(ParamType::Float),
            "double" | "Double" => Some(ParamType::Double),
            _ => None,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.java_name())
    }
}

impl FromStr for ParamType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ParamType::resolve(s).ok_or_else(|| Error::SpecParse(format!("Unknown parameter type: {}", s)))
    }
}
