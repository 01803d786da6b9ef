use crate::PathMappingRule;

/// Apply the first rule whose `from` prefixes `path`.
///
/// Prefixes compare with `/` and `\` treated alike and ASCII case ignored.
/// Unmatched paths are returned unchanged.
pub fn map_path(rules: &[PathMappingRule], path: &str) -> String {
    let normalized = path.replace('\\', "/");
    for rule in rules {
        let from = rule.from.replace('\\', "/");
        if from.is_empty() || !normalized.is_char_boundary(from.len()) {
            continue;
        }
        if normalized.len() >= from.len() && normalized[..from.len()].eq_ignore_ascii_case(&from) {
            return format!("{}{}", rule.to, &normalized[from.len()..]);
        }
    }
    path.to_string()
}
