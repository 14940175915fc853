//! Form field schema - the single source of truth for what the advisory
//! server expects in a prediction request

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Sent as the raw string the user picked
    Text,
    /// Parsed as f64 before sending, unparseable input becomes NaN
    Number,
}

/// One form field. `name` is the exact key used in the request payload.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub unit: &'static str,
    pub default: &'static str,
}

/// Every field the prediction endpoint accepts, in display order.
/// Payload keys mirror the server's training columns verbatim, including
/// the `%` suffixes and mixed casing.
pub const FIELD_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: "soil_moisture_%",
        label: "Soil Moisture",
        kind: FieldKind::Number,
        unit: "%",
        default: "25.5",
    },
    FieldSpec {
        name: "soil_pH",
        label: "Soil pH",
        kind: FieldKind::Number,
        unit: "",
        default: "6.5",
    },
    FieldSpec {
        name: "temperature_C",
        label: "Temperature",
        kind: FieldKind::Number,
        unit: "\u{b0}C",
        default: "28.0",
    },
    FieldSpec {
        name: "rainfall_mm",
        label: "Rainfall",
        kind: FieldKind::Number,
        unit: "mm",
        default: "150.0",
    },
    FieldSpec {
        name: "humidity_%",
        label: "Humidity",
        kind: FieldKind::Number,
        unit: "%",
        default: "65.0",
    },
    FieldSpec {
        name: "sunlight_hours",
        label: "Sunlight",
        kind: FieldKind::Number,
        unit: "h/day",
        default: "7.5",
    },
    FieldSpec {
        name: "total_days",
        label: "Growing Days",
        kind: FieldKind::Number,
        unit: "days",
        default: "120",
    },
    FieldSpec {
        name: "NDVI_index",
        label: "NDVI Index",
        kind: FieldKind::Number,
        unit: "",
        default: "0.65",
    },
    FieldSpec {
        name: "region",
        label: "Region",
        kind: FieldKind::Text,
        unit: "",
        default: "North India",
    },
    FieldSpec {
        name: "crop_type",
        label: "Crop Type",
        kind: FieldKind::Text,
        unit: "",
        default: "Wheat",
    },
    FieldSpec {
        name: "irrigation_type",
        label: "Irrigation",
        kind: FieldKind::Text,
        unit: "",
        default: "Drip",
    },
    FieldSpec {
        name: "fertilizer_type",
        label: "Fertilizer",
        kind: FieldKind::Text,
        unit: "",
        default: "Organic",
    },
    FieldSpec {
        name: "crop_disease_status",
        label: "Disease Status",
        kind: FieldKind::Text,
        unit: "",
        default: "Healthy",
    },
];

/// Look up a field by its payload name
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELD_SCHEMA.iter().find(|f| f.name == name)
}

/// Choices offered for the categorical fields. The server tolerates values
/// outside these lists, they are what its training data contained.
pub fn options(name: &str) -> &'static [&'static str] {
    match name {
        "region" => &["North India", "South India", "Central USA"],
        "crop_type" => &["Wheat", "Rice", "Maize"],
        "irrigation_type" => &["Drip", "Sprinkler", "None"],
        "fertilizer_type" => &["Organic", "Urea", "NPK"],
        "crop_disease_status" => &["Healthy", "Mild", "Severe"],
        _ => &[],
    }
}

/// Current form values, keyed by payload name
#[derive(Debug, Clone)]
pub struct FarmForm {
    values: HashMap<&'static str, String>,
}

impl Default for FarmForm {
    fn default() -> Self {
        Self {
            values: FIELD_SCHEMA
                .iter()
                .map(|f| (f.name, f.default.to_string()))
                .collect(),
        }
    }
}

impl FarmForm {
    pub fn value_mut(&mut self, name: &'static str) -> &mut String {
        self.values.entry(name).or_default()
    }

    /// (name, raw value) pairs in schema order, ready for payload building
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        FIELD_SCHEMA
            .iter()
            .map(|f| {
                let value = self.values.get(f.name).map(String::as_str).unwrap_or("");
                (f.name, value)
            })
            .collect()
    }

    /// Restore every field to its reference default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn schema_covers_all_server_columns() {
        assert_eq!(FIELD_SCHEMA.len(), 13);
        let text: Vec<&str> = FIELD_SCHEMA
            .iter()
            .filter(|f| f.kind == FieldKind::Text)
            .map(|f| f.name)
            .collect();
        assert_eq!(
            text,
            vec![
                "region",
                "crop_type",
                "irrigation_type",
                "fertilizer_type",
                "crop_disease_status"
            ]
        );
    }

    #[test]
    fn field_names_are_unique() {
        for (i, a) in FIELD_SCHEMA.iter().enumerate() {
            for b in &FIELD_SCHEMA[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn numeric_defaults_parse() {
        for f in FIELD_SCHEMA.iter().filter(|f| f.kind == FieldKind::Number) {
            assert!(
                f.default.parse::<f64>().is_ok(),
                "default for {} does not parse",
                f.name
            );
        }
    }

    #[test]
    fn text_fields_offer_their_default() {
        for f in FIELD_SCHEMA.iter().filter(|f| f.kind == FieldKind::Text) {
            assert!(options(f.name).contains(&f.default));
        }
        assert!(options("soil_pH").is_empty());
        assert!(options("not_a_field").is_empty());
    }

    #[test]
    fn form_starts_at_reference_defaults() {
        let form = FarmForm::default();
        let entries = form.entries();
        assert_eq!(entries.len(), FIELD_SCHEMA.len());
        for ((name, value), spec) in entries.iter().zip(FIELD_SCHEMA) {
            assert_eq!(*name, spec.name);
            assert_eq!(*value, spec.default);
        }
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = FarmForm::default();
        *form.value_mut("soil_pH") = "9.9".into();
        *form.value_mut("crop_type") = "Rice".into();
        form.reset();
        assert_eq!(form.entries(), FarmForm::default().entries());
    }
}
