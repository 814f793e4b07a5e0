//! Textdarstellung des Ausgabe-Arrays für das Ausgabefeld des Hosts.

use super::options::OutputFormat;

/// Verbindet die Werte mit dem konfigurierten Trennzeichen.
///
/// Ganzzahlige Werte erscheinen ohne Nachkommastellen; mit `hex` werden
/// nicht-negative Ganzzahlen als Großbuchstaben-Hex ausgegeben.
pub fn format_output(values: &[f32], format: &OutputFormat) -> String {
    values
        .iter()
        .map(|&v| format_value(v, format.hex))
        .collect::<Vec<_>>()
        .join(&format.separator)
}

fn format_value(value: f32, hex: bool) -> String {
    let is_integer = value.fract() == 0.0 && value.is_finite();
    match (is_integer, hex) {
        (true, true) if value >= 0.0 => format!("{:X}", value as u64),
        (true, _) => format!("{}", value as i64),
        (false, _) => format!("{:.3}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dezimal() {
        let format = OutputFormat::default();
        assert_eq!(format_output(&[0.0, 8.0, 15.0], &format), "0, 8, 15");
        assert_eq!(format_output(&[1.5], &format), "1.500");
        assert_eq!(format_output(&[-2.0], &format), "-2");
    }

    #[test]
    fn test_hex_ohne_trennzeichen() {
        let format = OutputFormat {
            separator: String::new(),
            hex: true,
        };
        assert_eq!(format_output(&[0.0, 10.0, 15.0, 7.0], &format), "0AF7");
    }

    #[test]
    fn test_leere_liste() {
        assert_eq!(format_output(&[], &OutputFormat::default()), "");
    }
}
