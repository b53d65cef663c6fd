//! Lectura de un directorio de fichas Markdown y extracción de su front
//! matter YAML (el bloque delimitado por `---` al principio del fichero).

use std::{fs, path::Path, sync::LazyLock};

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde_yaml::Value;
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::models::PlantRecord;

/// Extensión de los documentos que se procesan.
const DOCUMENT_EXTENSION: &str = ".md";
/// Documentación del propio directorio; nunca es una ficha.
const EXCLUDED_FILENAME: &str = "README.md";

// Bloque `---` ... `---` anclado al inicio del fichero, no codicioso.
static HEADER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n|\z)")
        .expect("header block regex should compile")
});

/// El bloque de cabecera existe pero no es un mapa YAML válido.
#[derive(Debug, Error)]
pub enum MalformedHeader {
    /// YAML mal formado (incluye claves duplicadas).
    #[error("cabecera YAML inválida: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// YAML válido pero no es un mapa: vacío, sólo comentarios, `~`, lista...
    #[error("la cabecera no es un mapa clave/valor")]
    NotAMapping,
}

/// Resumen de los resultados de un escaneo.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestionSummary {
    pub files_scanned: u32,
    pub files_ingested: u32,
    pub files_skipped: u32,
}

impl std::fmt::Display for IngestionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Resumen: {} fichas escaneadas, {} con cabecera, {} omitidas.",
            self.files_scanned, self.files_ingested, self.files_skipped
        )
    }
}

/// Fichas extraídas junto con el resumen del escaneo.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub records: Vec<PlantRecord>,
    pub summary: IngestionSummary,
}

/// Recorre (sin recursión) el directorio y devuelve una ficha por cada
/// documento elegible con cabecera válida, en el orden del sistema de
/// archivos. Los errores de E/S se propagan.
pub fn scan_directory(root: &Path) -> Result<ScanOutcome> {
    if !root.is_dir() {
        return Err(anyhow!("La ruta no es un directorio: {}", root.display()));
    }

    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("No se pudo listar {}", root.display()))?;
        // Sigue enlaces simbólicos: un enlace a directorio tampoco es ficha.
        if !entry.path().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        if !is_eligible(&file_name) {
            continue;
        }

        outcome.summary.files_scanned += 1;
        let path = entry.path();
        let text = fs::read_to_string(path)
            .with_context(|| format!("No se pudo leer {}", path.display()))?;

        match parse_record(&file_name, &text) {
            Ok(Some(record)) => {
                outcome.summary.files_ingested += 1;
                debug!(
                    "Ficha '{}' extraída de {}",
                    record.sort_key(),
                    record.source_file().unwrap_or_default()
                );
                outcome.records.push(record);
            }
            Ok(None) => {
                outcome.summary.files_skipped += 1;
                debug!("Sin cabecera, se omite: {}", path.display());
            }
            Err(err) => {
                outcome.summary.files_skipped += 1;
                warn!("Saltando {}: {err}", path.display());
            }
        }
    }

    info!("{}", outcome.summary);
    Ok(outcome)
}

/// `true` para los `.md` salvo el `README.md` (comparación exacta).
pub fn is_eligible(file_name: &str) -> bool {
    file_name.ends_with(DOCUMENT_EXTENSION) && file_name != EXCLUDED_FILENAME
}

/// Devuelve el texto entre los delimitadores `---`, si el fichero empieza
/// por un bloque de cabecera.
pub fn extract_header_block(text: &str) -> Option<&str> {
    HEADER_BLOCK
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Convierte el contenido de un documento en ficha.
///
/// - `Ok(None)`: no hay bloque de cabecera.
/// - `Err(MalformedHeader)`: el bloque no es YAML o no es un mapa (un
///   bloque vacío o con sólo comentarios se lee como `null`).
pub fn parse_record(file_name: &str, text: &str) -> Result<Option<PlantRecord>, MalformedHeader> {
    let Some(block) = extract_header_block(text) else {
        return Ok(None);
    };
    match serde_yaml::from_str::<Value>(block)? {
        Value::Mapping(fields) => Ok(Some(PlantRecord::new(file_name, fields))),
        _ => Err(MalformedHeader::NotAMapping),
    }
}
