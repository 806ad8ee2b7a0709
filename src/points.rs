//! Points calculator: maps (material, quantity) to reward points.
//!
//! Points are never stored. Every read path recomputes them from the rate
//! table, so a rate change retroactively applies to all historical records.

use serde::Deserialize;

use crate::constants::DEFAULT_RATE;

/// Points per kilogram, keyed by normalized (lowercased, accent-folded)
/// material name. Accented spellings like "plástico" normalize onto these
/// entries before lookup.
const POINTS_PER_KG: &[(&str, i64)] = &[
    ("plastico", 10),
    ("papel", 8),
    ("vidrio", 5),
    ("metal", 12),
    ("organico", 4),
    ("otros", 1),
];

/// A quantity as it arrives off the wire: clients send either a JSON number
/// or a free-form string. Anything that does not parse as a number counts
/// as zero kilograms, never as an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawQuantity {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawQuantity {
    /// Kilogram value, if the quantity parses as a number.
    pub fn as_kg(&self) -> Option<f64> {
        match self {
            RawQuantity::Number(n) => Some(*n),
            RawQuantity::Text(s) => s.trim().parse().ok(),
            RawQuantity::Other(_) => None,
        }
    }
}

impl From<f64> for RawQuantity {
    fn from(kg: f64) -> Self {
        RawQuantity::Number(kg)
    }
}

/// Normalize a material name: trim, lowercase, and fold Spanish accented
/// vowels so "Plástico" and "plastico" classify identically.
pub fn normalize_material(material: &str) -> String {
    material
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            other => other,
        })
        .collect()
}

/// Points-per-kg rate for a material. Unrecognized names earn the default
/// rate of 1.
pub fn rate_for(material: &str) -> i64 {
    let normalized = normalize_material(material);
    POINTS_PER_KG
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_RATE)
}

/// Compute the points a single submission earns.
///
/// Pure and infallible: a missing material yields 0, an unparsable quantity
/// counts as 0 kg, and unknown materials fall back to the default rate.
pub fn compute_points(material: Option<&str>, quantity: &RawQuantity) -> i64 {
    let Some(material) = material else {
        return 0;
    };
    if material.trim().is_empty() {
        return 0;
    }
    let kg = quantity.as_kg().unwrap_or(0.0);
    (kg * rate_for(material) as f64).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qty(kg: f64) -> RawQuantity {
        RawQuantity::Number(kg)
    }

    #[test]
    fn missing_material_earns_nothing() {
        assert_eq!(compute_points(None, &qty(5.0)), 0);
        assert_eq!(compute_points(Some(""), &qty(5.0)), 0);
        assert_eq!(compute_points(Some("   "), &qty(5.0)), 0);
    }

    #[test]
    fn accented_and_plain_spellings_match() {
        assert_eq!(compute_points(Some("plastico"), &qty(2.0)), 20);
        assert_eq!(compute_points(Some("plástico"), &qty(2.0)), 20);
        assert_eq!(compute_points(Some("orgánico"), &qty(3.0)), 12);
        assert_eq!(compute_points(Some("organico"), &qty(3.0)), 12);
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(compute_points(Some("  Papel "), &qty(1.0)), 8);
        assert_eq!(compute_points(Some("VIDRIO"), &qty(2.0)), 10);
    }

    #[test]
    fn unknown_material_uses_default_rate() {
        assert_eq!(compute_points(Some("unknown_material"), &qty(3.0)), 3);
        assert_eq!(rate_for("styrofoam"), 1);
    }

    #[test]
    fn unparsable_quantity_counts_as_zero() {
        let bad = RawQuantity::Text("not_a_number".to_string());
        assert_eq!(compute_points(Some("metal"), &bad), 0);
        assert_eq!(compute_points(Some("plastico"), &bad), 0);

        let arr = RawQuantity::Other(serde_json::json!([1, 2]));
        assert_eq!(compute_points(Some("papel"), &arr), 0);
    }

    #[test]
    fn numeric_strings_parse() {
        let s = RawQuantity::Text(" 2.5 ".to_string());
        assert_eq!(compute_points(Some("metal"), &s), 30);
    }

    #[test]
    fn fractional_points_floor() {
        assert_eq!(compute_points(Some("vidrio"), &qty(0.5)), 2);
        assert_eq!(compute_points(Some("otros"), &qty(0.9)), 0);
    }
}
