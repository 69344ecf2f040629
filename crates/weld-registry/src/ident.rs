//! JavaScript identifier rules shared by the registry and the emitter.

/// Words that cannot be bound with `const` or `import` inside a module.
///
/// Modules are always strict, so the strict-mode future reserved words and
/// `eval`/`arguments` are included alongside the keywords.
const RESERVED: &[&str] = &[
    "arguments",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "eval",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Returns true when `name` is a reserved word in module code.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// Returns true when `name` can be used as a binding in an ES module.
///
/// # Examples
///
/// ```
/// use weld_registry::is_valid_identifier;
///
/// assert!(is_valid_identifier("useState"));
/// assert!(is_valid_identifier("$store"));
/// assert!(!is_valid_identifier("default"));
/// assert!(!is_valid_identifier("jsx-runtime"));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return false;
    }

    !is_reserved_word(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_exports() {
        for name in ["React", "createElement", "_internal", "$x", "Fragment", "jsx"] {
            assert!(is_valid_identifier(name), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_names() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1st"));
        assert!(!is_valid_identifier("react-dom"));
        assert!(!is_valid_identifier("a b"));
    }

    #[test]
    fn rejects_reserved_words() {
        assert!(!is_valid_identifier("class"));
        assert!(!is_valid_identifier("let"));
        assert!(!is_valid_identifier("eval"));
        assert!(is_reserved_word("default"));
        assert!(!is_reserved_word("Component"));
    }
}
