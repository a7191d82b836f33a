//! Identifier casing helpers shared by all generators.

/// Convert a string to PascalCase (e.g., "order_items" -> "OrderItems")
///
/// Splits on `_`, upper-cases the first character of every segment and
/// lower-cases the rest, so `orderItems` becomes `Orderitems`.
/// Empty segments contribute nothing, so `""` stays `""`.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
            }
        })
        .collect()
}

/// Convert a camelCase string to snake_case (e.g., "tenantId" -> "tenant_id")
///
/// The first character is always lowercased. Every later uppercase character
/// is replaced by `_` followed by its lowercase form.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// Inverse of [`to_pascal_case`] for identifiers made of lowercase segments.
pub fn pascal_to_snake(s: &str) -> String {
    to_snake_case(s)
}

/// Turn an identifier into a human readable label
/// (e.g., "created_at" -> "Created At", "firstName" -> "First Name").
pub fn humanize(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| to_pascal_case(part))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a PascalCase name from free text by keeping only its alphanumeric
/// words (e.g., "Customer list" -> "CustomerList").
pub fn words_to_pascal(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(to_pascal_case)
        .collect()
}

/// Reduce arbitrary text to a snake-ish identifier body.
///
/// Every run of characters that are not ASCII alphanumerics becomes a single
/// `_`; leading and trailing separators are trimmed.
/// `"/reports/{id}/export"` becomes `"reports_id_export"`.
pub fn to_identifier(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut pending_sep = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !result.is_empty() {
                result.push('_');
            }
            pending_sep = false;
            result.push(c);
        } else {
            pending_sep = true;
        }
    }
    result
}
