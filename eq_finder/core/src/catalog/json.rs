//! JSON catalog format

use super::{CatalogResult, Constant, ConstantCatalog, LoadedCatalog};
use serde::{Deserialize, Serialize};

/// On-disk JSON layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_exponent: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude_deviation: Option<f64>,

    pub constants: Vec<Constant>,
}

/// Parse a catalog from JSON
pub fn parse(input: &str) -> CatalogResult<LoadedCatalog> {
    let file: CatalogFile = serde_json::from_str(input)?;

    Ok(LoadedCatalog {
        catalog: ConstantCatalog::new(file.constants)?,
        max_exponent: file.max_exponent,
        magnitude_deviation: file.magnitude_deviation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;

    #[test]
    fn test_parse_json_catalog() {
        let json = r#"{
            "max_exponent": 3,
            "constants": [
                { "symbol": "c", "magnitude": 2.998e8, "units": [1, 0, -1, 0], "description": "Speed of light" },
                { "symbol": "G", "magnitude": 6.674e-11, "units": [3, -1, -2, 0] }
            ]
        }"#;

        let loaded = parse(json).unwrap();
        assert_eq!(loaded.max_exponent, Some(3));
        assert_eq!(loaded.magnitude_deviation, None);
        assert_eq!(loaded.catalog.len(), 2);
        assert_eq!(loaded.catalog.by_symbol("G").unwrap().description, "");
    }

    #[test]
    fn test_wrong_unit_count() {
        let json = r#"{ "constants": [ { "symbol": "c", "magnitude": 2.998e8, "units": [1, 0, -1] } ] }"#;
        assert!(matches!(parse(json), Err(CatalogError::Json(_))));
    }
}
