//! Modelos de dominio: la ficha de metadatos de cada planta y las reglas
//! con las que se muestran sus campos.

use serde_yaml::{Mapping, Value};

/// Clave reservada donde se guarda el nombre del fichero de origen.
/// Sólo sirve para trazabilidad; nunca se imprime.
pub const RESERVED_SOURCE_KEY: &str = "filename";

/// Metadatos extraídos del front matter de un documento.
/// No hay esquema fijo: todos los campos se consultan como opcionales.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantRecord {
    fields: Mapping,
}

impl PlantRecord {
    /// Construye la ficha e inyecta el nombre del fichero bajo la clave
    /// reservada, sobrescribiendo cualquier valor previo.
    pub fn new(file_name: &str, mut fields: Mapping) -> Self {
        fields.insert(
            Value::String(RESERVED_SOURCE_KEY.to_string()),
            Value::String(file_name.to_string()),
        );
        Self { fields }
    }

    /// Valor crudo de un campo. Un `null` explícito cuenta como ausente.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// Valor de un campo ya convertido a texto para mostrarlo.
    pub fn display_value(&self, key: &str) -> Option<String> {
        self.get(key).map(render_value)
    }

    /// Clave de ordenación: el `name` como texto, o cadena vacía si falta.
    pub fn sort_key(&self) -> String {
        self.display_value("name").unwrap_or_default()
    }

    pub fn source_file(&self) -> Option<&str> {
        self.fields.get(RESERVED_SOURCE_KEY).and_then(Value::as_str)
    }
}

/// Cómo se comporta un campo cuando falta en la ficha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDisplay {
    /// Siempre se imprime; si falta se usa el texto de respaldo.
    Always { fallback: &'static str },
    /// Sólo se imprime si el campo existe.
    IfPresent,
}

/// Una línea del bloque de salida: clave YAML, etiqueta y política.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub key: &'static str,
    pub label: &'static str,
    pub display: FieldDisplay,
}

impl FieldRule {
    pub const fn always(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            display: FieldDisplay::Always { fallback: "Unknown" },
        }
    }

    pub const fn if_present(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            display: FieldDisplay::IfPresent,
        }
    }

    /// Texto a mostrar para esta regla, o `None` si la línea se omite.
    pub fn resolve(&self, record: &PlantRecord) -> Option<String> {
        match (record.display_value(self.key), self.display) {
            (Some(value), _) => Some(value),
            (None, FieldDisplay::Always { fallback }) => Some(fallback.to_string()),
            (None, FieldDisplay::IfPresent) => None,
        }
    }
}

/// Convierte un valor YAML arbitrario en texto legible.
/// Las secuencias y los mapas anidados se aplanan separados por comas.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Mapping(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", render_value(k), render_value(v)))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Tagged(tagged) => render_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(yaml: &str) -> PlantRecord {
        let fields: Mapping = serde_yaml::from_str(yaml).unwrap();
        PlantRecord::new("ficha.md", fields)
    }

    #[test]
    fn reserved_key_overwrites_existing_value() {
        let r = record("name: Rose\nfilename: otro.md\n");
        assert_eq!(r.source_file(), Some("ficha.md"));
        assert_eq!(r.display_value("name").as_deref(), Some("Rose"));
    }

    #[test]
    fn null_counts_as_missing() {
        let r = record("name: ~\nheight: null\n");
        assert!(r.get("height").is_none());
        assert_eq!(r.sort_key(), "");
    }

    #[test]
    fn renders_scalars_sequences_and_maps() {
        let r = record(
            "colors: [Red, White]\nlifespan: 3\nheight:\n  min: 1m\n  max: 2m\nedible: true\n",
        );
        assert_eq!(r.display_value("colors").as_deref(), Some("Red, White"));
        assert_eq!(r.display_value("lifespan").as_deref(), Some("3"));
        assert_eq!(
            r.display_value("height").as_deref(),
            Some("min: 1m, max: 2m")
        );
        assert_eq!(r.display_value("edible").as_deref(), Some("true"));
    }

    #[test]
    fn numeric_name_sorts_by_its_text() {
        assert_eq!(record("name: 42\n").sort_key(), "42");
    }

    #[test]
    fn field_rules_apply_fallback_or_omit() {
        let r = record("name: Oak\n");
        assert_eq!(
            FieldRule::always("type", "Type").resolve(&r).as_deref(),
            Some("Unknown")
        );
        assert_eq!(FieldRule::if_present("height", "Height").resolve(&r), None);
        assert_eq!(
            FieldRule::always("name", "Name").resolve(&r).as_deref(),
            Some("Oak")
        );
    }
}
