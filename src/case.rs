//! Case conversion between JSON property names (camelCase) and column names (snake_case).

/// Convert a single identifier from camelCase to snake_case.
/// e.g. "contactName" -> "contact_name", "id" -> "id"
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
