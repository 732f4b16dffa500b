//! Shared string utilities.

/// Convert a kebab-case string to PascalCase (e.g., "navigation-menu" -> "NavigationMenu").
///
/// Only the first character of each segment is uppercased; the remainder is
/// kept as-is. Empty segments (from repeated, leading or trailing hyphens)
/// contribute nothing.
pub fn to_pascal_case(s: &str) -> String {
    s.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}
