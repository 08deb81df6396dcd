use validator::ValidationErrors;

/// Flattens validator output into `field: message` lines, ordered by field name.
pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut result = Vec::new();

    for (field, field_errors) in fields {
        for err in field_errors {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match err.code.as_ref() {
                    "length" => "invalid length".to_string(),
                    "range" => "value out of range".to_string(),
                    "required" => "required".to_string(),
                    _ => "invalid value".to_string(),
                });

            result.push(format!("{field}: {message}"));
        }
    }

    if result.is_empty() {
        result.push("Validation failed".to_string());
    }

    result
}
