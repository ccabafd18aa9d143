//! In-memory CUPS catalog and its three query shapes.
//!
//! The record table keeps source order. Exact lookups go through a code
//! index built once at construction; description lookups scan a
//! lower-cased copy of every description in order.

use crate::domain::model::CupsRecord;
use crate::utils::error::{CatalogError, Result};
use std::collections::HashMap;

#[derive(Debug)]
pub struct Catalog {
    records: Vec<CupsRecord>,
    by_code: HashMap<String, usize>,
    lowered_descriptions: Vec<String>,
}

impl Catalog {
    pub fn new(records: Vec<CupsRecord>) -> Self {
        let mut by_code = HashMap::with_capacity(records.len() * 2);
        for (position, record) in records.iter().enumerate() {
            // 只保留第一次出現的代碼
            by_code.entry(record.code_plain.clone()).or_insert(position);
            by_code.entry(record.code_dotted.clone()).or_insert(position);
        }

        let lowered_descriptions = records
            .iter()
            .map(|record| record.description.to_lowercase())
            .collect();

        Self {
            records,
            by_code,
            lowered_descriptions,
        }
    }

    /// Parse a JSON array of records, failing on the first shape mismatch.
    pub fn from_json_slice(source_name: &str, bytes: &[u8]) -> Result<Self> {
        let records: Vec<CupsRecord> =
            serde_json::from_slice(bytes).map_err(|e| CatalogError::CatalogMalformed {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[CupsRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact match against either the plain or the dotted code.
    pub fn find_by_code(&self, codigo: &str) -> Result<&CupsRecord> {
        self.by_code
            .get(codigo)
            .map(|&position| &self.records[position])
            .ok_or_else(|| CatalogError::code_not_found(codigo))
    }

    /// First record whose description contains `fragment`, ignoring case.
    pub fn find_by_description(&self, fragment: &str) -> Result<&CupsRecord> {
        if fragment.is_empty() {
            return Err(CatalogError::description_not_found(fragment));
        }

        let needle = fragment.to_lowercase();
        self.lowered_descriptions
            .iter()
            .position(|description| description.contains(&needle))
            .map(|position| &self.records[position])
            .ok_or_else(|| CatalogError::description_not_found(fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::NotFoundKind;

    fn record(plain: &str, dotted: &str, description: &str, traceability: &str) -> CupsRecord {
        CupsRecord {
            code_plain: plain.to_string(),
            code_dotted: dotted.to_string(),
            description: description.to_string(),
            traceability: traceability.to_string(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            record("010101", "01.01.01", "Consulta medica general", "v1"),
            record("010102", "01.01.02", "Consulta médica especializada", "v1"),
            record("871121", "87.1.1.21", "Radiografía de tórax", "v2"),
        ])
    }

    #[test]
    fn test_find_by_plain_and_dotted_code() {
        let catalog = sample_catalog();
        let by_plain = catalog.find_by_code("010101").unwrap();
        let by_dotted = catalog.find_by_code("01.01.01").unwrap();
        assert_eq!(by_plain, by_dotted);
        assert_eq!(by_plain.description, "Consulta medica general");
    }

    #[test]
    fn test_every_code_resolves_to_its_record() {
        let catalog = sample_catalog();
        for record in catalog.records() {
            assert_eq!(catalog.find_by_code(&record.code_plain).unwrap(), record);
            assert_eq!(catalog.find_by_code(&record.code_dotted).unwrap(), record);
        }
    }

    #[test]
    fn test_missing_code_is_not_found() {
        let catalog = sample_catalog();
        match catalog.find_by_code("999999") {
            Err(CatalogError::NotFound(NotFoundKind::Code(code))) => assert_eq!(code, "999999"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        // partial codes do not match
        assert!(catalog.find_by_code("0101").is_err());
    }

    #[test]
    fn test_duplicate_codes_return_first_in_order() {
        let catalog = Catalog::new(vec![
            record("010101", "01.01.01", "primero", "v1"),
            record("010101", "01.01.01", "segundo", "v2"),
        ]);
        assert_eq!(catalog.find_by_code("010101").unwrap().description, "primero");
        assert_eq!(catalog.find_by_code("01.01.01").unwrap().description, "primero");
    }

    #[test]
    fn test_description_search_ignores_case() {
        let catalog = sample_catalog();
        for query in ["MEDICA", "medica", "Medica General"] {
            let found = catalog.find_by_description(query).unwrap();
            assert_eq!(found.code_plain, "010101");
        }
    }

    #[test]
    fn test_description_search_handles_accents() {
        let catalog = sample_catalog();
        let found = catalog.find_by_description("TÓRAX").unwrap();
        assert_eq!(found.code_plain, "871121");
    }

    #[test]
    fn test_description_search_returns_first_match() {
        let catalog = sample_catalog();
        // both consultations contain "consulta"; the earlier one wins
        let found = catalog.find_by_description("consulta").unwrap();
        assert_eq!(found.code_plain, "010101");
    }

    #[test]
    fn test_every_description_substring_finds_a_record() {
        let catalog = sample_catalog();
        for record in catalog.records() {
            let chars: Vec<char> = record.description.chars().collect();
            for start in 0..chars.len() {
                let fragment: String = chars[start..].iter().take(4).collect();
                assert!(catalog.find_by_description(&fragment.to_uppercase()).is_ok());
            }
        }
    }

    #[test]
    fn test_empty_or_absent_description_is_not_found() {
        let catalog = sample_catalog();
        assert!(matches!(
            catalog.find_by_description(""),
            Err(CatalogError::NotFound(NotFoundKind::Description(_)))
        ));
        assert!(catalog.find_by_description("ecografía obstétrica").is_err());
    }

    #[test]
    fn test_from_json_slice_preserves_order() {
        let json = br#"[
            {"codigo_sin_puntos":"2","codigo_con_puntos":"0.2","descripcion":"b","trazabilidad":"t"},
            {"codigo_sin_puntos":"1","codigo_con_puntos":"0.1","descripcion":"a","trazabilidad":"t","extra":1}
        ]"#;
        let catalog = Catalog::from_json_slice("inline", json).unwrap();
        let codes: Vec<&str> = catalog
            .records()
            .iter()
            .map(|r| r.code_plain.as_str())
            .collect();
        assert_eq!(codes, vec!["2", "1"]);
    }

    #[test]
    fn test_from_json_slice_rejects_wrong_shape() {
        for payload in [
            &br#"{"codigo_sin_puntos":"1"}"#[..],
            &br#"[{"codigo_sin_puntos":"1","codigo_con_puntos":"0.1","descripcion":"a"}]"#[..],
            &br#"[{"codigo_sin_puntos":1,"codigo_con_puntos":"0.1","descripcion":"a","trazabilidad":"t"}]"#[..],
            &b"not json"[..],
        ] {
            assert!(matches!(
                Catalog::from_json_slice("inline", payload),
                Err(CatalogError::CatalogMalformed { .. })
            ));
        }
    }
}
