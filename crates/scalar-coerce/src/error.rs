//! Coercion errors and configuration errors.

#![allow(missing_docs)]

use std::fmt;

use smol_str::SmolStr;
use thiserror::Error;

/// Primitive target of a coercion or enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int,
    Float,
    Bool,
    String,
}

impl ScalarType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarType::Int => "int",
            ScalarType::Float => "float",
            ScalarType::Bool => "bool",
            ScalarType::String => "string",
        }
    }

    /// Types an enforcement gate accepts, as worded in its error message.
    #[must_use]
    pub fn enforced_types(self) -> &'static str {
        match self {
            ScalarType::Float => "int or float",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation family that rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Coerce,
    Enforce,
}

/// Rejection of a value by a coercion or enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeMismatch {
    /// Value is not a scalar (and, for strings, not stringable).
    #[error("Non-scalar type {type_name} cannot be coerced to {target}")]
    NonScalar {
        target: ScalarType,
        type_name: &'static str,
    },

    /// String that is not numeric was asked to become a number.
    #[error("Non-numeric value \"{value}\" cannot be coerced to {target}")]
    NonNumeric { target: ScalarType, value: SmolStr },

    /// Enforcement gate received a value of another type.
    #[error(
        "Value passed to enforce_{target} does not contain {}: {rendered}",
        .target.enforced_types()
    )]
    NotExactType { target: ScalarType, rendered: String },
}

impl TypeMismatch {
    #[must_use]
    pub fn target(&self) -> ScalarType {
        match self {
            TypeMismatch::NonScalar { target, .. }
            | TypeMismatch::NonNumeric { target, .. }
            | TypeMismatch::NotExactType { target, .. } => *target,
        }
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            TypeMismatch::NonScalar { .. } | TypeMismatch::NonNumeric { .. } => {
                Operation::Coerce
            }
            TypeMismatch::NotExactType { .. } => Operation::Enforce,
        }
    }
}

/// Warning configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("cannot read config '{path}': {reason}")]
    Io { path: SmolStr, reason: SmolStr },

    /// Configuration text is not valid TOML for the schema.
    #[error("invalid config: {0}")]
    Parse(SmolStr),

    /// Unknown warning category name.
    #[error("unknown warning category '{0}'")]
    UnknownCategory(SmolStr),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_messages() {
        let err = TypeMismatch::NonScalar {
            target: ScalarType::Int,
            type_name: "NULL",
        };
        assert_eq!(err.to_string(), "Non-scalar type NULL cannot be coerced to int");
        assert_eq!(err.operation(), Operation::Coerce);

        let err = TypeMismatch::NonNumeric {
            target: ScalarType::Float,
            value: "39hello".into(),
        };
        assert_eq!(
            err.to_string(),
            "Non-numeric value \"39hello\" cannot be coerced to float"
        );
        assert_eq!(err.target(), ScalarType::Float);
    }

    #[test]
    fn enforcement_messages() {
        let err = TypeMismatch::NotExactType {
            target: ScalarType::Float,
            rendered: "'0'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Value passed to enforce_float does not contain int or float: '0'"
        );
        assert_eq!(err.operation(), Operation::Enforce);

        let err = TypeMismatch::NotExactType {
            target: ScalarType::Bool,
            rendered: "NULL".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Value passed to enforce_bool does not contain bool: NULL"
        );
    }
}
