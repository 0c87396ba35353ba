use crate::utils::error::{HrError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(HrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(HrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HrError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_formats(field_name: &str, formats: &[String], allowed: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed.iter().copied().collect();

    for format in formats {
        if !allowed_set.contains(format.as_str()) {
            return Err(HrError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!("Unsupported format. Valid formats: {}", allowed.join(", ")),
            });
        }
    }

    Ok(())
}

pub fn validate_unique_codes(field_name: &str, codes: impl IntoIterator<Item = i32>) -> Result<()> {
    let mut seen = HashSet::new();
    for code in codes {
        if !seen.insert(code) {
            return Err(HrError::ConfigValidationError {
                field: field_name.to_string(),
                message: format!("worker code {} appears more than once", code),
            });
        }
    }
    Ok(())
}

/// Parses a decimal typed by an operator, accepting `,` as the decimal separator.
pub fn parse_decimal(field_name: &str, raw: &str) -> Result<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err(HrError::input(format!(
            "Entrada vazia para {}. Informe um número válido.",
            field_name
        )));
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| HrError::input(format!("Número inválido para {}: {}", field_name, raw.trim())))
}

pub fn parse_code(field_name: &str, raw: &str) -> Result<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HrError::input(format!(
            "Entrada vazia para {}. Informe um número válido.",
            field_name
        )));
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| HrError::input(format!("Número inválido para {}: {}", field_name, trimmed)))
}

/// Required operator text, trimmed.
pub fn required_text(field_name: &str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HrError::input(format!("Entrada vazia para {}.", field_name)));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("report.output_path", "./output").is_ok());
        assert!(validate_path("report.output_path", "").is_err());
        assert!(validate_path("report.output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_formats() {
        let formats = vec!["txt".to_string(), "csv".to_string()];
        assert!(validate_formats("report.output_formats", &formats, &["txt", "csv", "json"]).is_ok());

        let invalid = vec!["xlsx".to_string()];
        assert!(validate_formats("report.output_formats", &invalid, &["txt", "csv", "json"]).is_err());
    }

    #[test]
    fn test_validate_unique_codes() {
        assert!(validate_unique_codes("workers", [1, 2, 3]).is_ok());
        assert!(matches!(
            validate_unique_codes("workers", [1, 2, 1]),
            Err(HrError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_parse_decimal_accepts_comma() {
        assert_eq!(parse_decimal("salário", "2500,50").unwrap(), 2500.5);
        assert_eq!(parse_decimal("salário", " 3000.00 ").unwrap(), 3000.0);
        assert!(parse_decimal("salário", "").is_err());
        assert!(parse_decimal("salário", "abc").is_err());
        assert!(parse_decimal("salário", "NaN").is_err());
    }

    #[test]
    fn test_parse_code_and_required_text() {
        assert_eq!(parse_code("código", " 42 ").unwrap(), 42);
        assert!(parse_code("código", "4.2").is_err());
        assert_eq!(required_text("nome", "  Ana ").unwrap(), "Ana");
        assert!(required_text("nome", "   ").is_err());
    }
}
