#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub const SAMPLE_CATALOG: &str = include_str!("../../data/cups_sample.json");

pub const SCENARIO_RECORD: &str = r#"[{"codigo_sin_puntos":"010101","codigo_con_puntos":"01.01.01","descripcion":"Consulta medica general","trazabilidad":"v1"}]"#;

pub fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}
