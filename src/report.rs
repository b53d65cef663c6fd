//! Informe en texto plano de las fichas extraídas.

use std::io::{self, Write};

use anyhow::Result;

use crate::models::{FieldRule, PlantRecord};

const SEPARATOR_WIDTH: usize = 50;

/// Orden fijo de las líneas de cada ficha.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule::always("name", "Name"),
    FieldRule::always("type", "Type"),
    FieldRule::always("scientific_name", "Scientific Name"),
    FieldRule::always("family", "Family"),
    FieldRule::always("native_to", "Native To"),
    FieldRule::if_present("blooming_season", "Blooming Season"),
    FieldRule::if_present("colors", "Colors"),
    FieldRule::if_present("height", "Height"),
    FieldRule::if_present("lifespan", "Lifespan"),
    FieldRule::always("sunlight", "Sunlight"),
    FieldRule::always("water_needs", "Water Needs"),
    FieldRule::always("hardiness_zones", "Hardiness Zones"),
];

/// Ordena por `name` (ordinal, sensible a mayúsculas). Estable: los empates
/// y las fichas sin nombre conservan el orden de entrada.
pub fn sort_records(records: &mut [PlantRecord]) {
    records.sort_by_cached_key(PlantRecord::sort_key);
}

/// Escribe el bloque de una ficha: separador, campos y línea en blanco.
pub fn render_record<W: Write>(record: &PlantRecord, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    for rule in FIELD_RULES {
        if let Some(value) = rule.resolve(record) {
            writeln!(out, "{}: {}", rule.label, value)?;
        }
    }
    writeln!(out)
}

/// Cuenta, ordena y escribe todas las fichas.
pub fn write_report<W: Write>(mut records: Vec<PlantRecord>, out: &mut W) -> io::Result<()> {
    writeln!(out, "Found {} plants:", records.len())?;
    sort_records(&mut records);
    for record in &records {
        render_record(record, out)?;
    }
    Ok(())
}

/// Imprime el informe por la salida estándar.
pub fn print_report(records: Vec<PlantRecord>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(records, &mut out)?;
    out.flush()?;
    Ok(())
}
