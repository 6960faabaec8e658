//! Module type value object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{MODULE_TYPE_BACKEND, MODULE_TYPE_FRONTEND};
use crate::errors::AppError;

/// Module types enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Backend,
    Frontend,
}

impl ModuleType {
    /// Get the canonical string form
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::Backend => MODULE_TYPE_BACKEND,
            ModuleType::Frontend => MODULE_TYPE_FRONTEND,
        }
    }

    /// All module types, in listing order
    pub fn all() -> [ModuleType; 2] {
        [ModuleType::Backend, ModuleType::Frontend]
    }
}

impl FromStr for ModuleType {
    type Err = AppError;

    /// Parse a raw path segment. Anything outside the known set is rejected,
    /// there is no fallback value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MODULE_TYPE_BACKEND => Ok(ModuleType::Backend),
            MODULE_TYPE_FRONTEND => Ok(ModuleType::Frontend),
            _ => Err(AppError::InvalidModuleType),
        }
    }
}

impl fmt::Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!("backend".parse::<ModuleType>().unwrap(), ModuleType::Backend);
        assert_eq!("frontend".parse::<ModuleType>().unwrap(), ModuleType::Frontend);
    }

    #[test]
    fn test_parse_rejects_unknown_types() {
        assert!("middleware".parse::<ModuleType>().is_err());
        assert!("".parse::<ModuleType>().is_err());
        // Case matters, the accepted values are lowercase
        assert!("Backend".parse::<ModuleType>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for module_type in ModuleType::all() {
            let parsed = module_type.to_string().parse::<ModuleType>().unwrap();
            assert_eq!(parsed, module_type);
        }
    }
}
