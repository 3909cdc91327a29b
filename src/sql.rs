//! Rendering of the `short_urls` seed script.
//!
//! The emitted text mirrors the script the backend's JMeter test plan
//! consumes: a fixed comment header, one multi-row `INSERT`, and a
//! `setval` call that reseeds `short_urls_id_seq`. The `setval` argument
//! is the processed row count, not `MAX(id)`; datasets with gaps or ids
//! not starting at 1 can still collide on later inserts.

use itertools::Itertools;

use crate::record::UrlRecord;

const SCRIPT_HEADER: &str = "\
-- Script para poblar la tabla short_urls con datos de prueba para JMeter
-- Generado automáticamente desde test_urls.csv

-- Limpiar datos existentes (opcional)
-- TRUNCATE TABLE short_urls CASCADE;

-- Insertar datos de prueba
INSERT INTO short_urls (id, url, short_code, created_at, updated_at, access_count) VALUES
";

/// Doubles single quotes, the only escaping the script performs.
pub fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', "''")
}

/// Formats one `(id, 'url', 'short_code', 'created_at', 'updated_at', access_count)`
/// tuple. `id` and `access_count` are emitted unquoted; only `url` and
/// `short_code` are escaped, matching the original generator.
pub fn format_tuple(record: &UrlRecord) -> String {
    format!(
        "({}, '{}', '{}', '{}', '{}', {})",
        record.id,
        escape_single_quotes(&record.url),
        escape_single_quotes(&record.short_code),
        record.created_at,
        record.updated_at,
        record.access_count,
    )
}

/// Assembles the complete script text for `records`, in input order.
pub fn render_script(records: &[UrlRecord]) -> String {
    let mut script = String::from(SCRIPT_HEADER);
    script.push_str(&records.iter().map(format_tuple).join(",\n"));
    script.push_str(";\n");
    script.push_str(&format!(
        "\n-- Actualizar la secuencia para evitar conflictos de ID\nSELECT setval('short_urls_id_seq', {}, true);\n",
        records.len()
    ));
    script
}
