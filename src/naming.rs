//! Identifier re-casing between the Godot naming convention and the target
//! convention used in emitted references.
//!
//! These are pure, total functions: no input makes them fail, unknown names
//! pass through unchanged.

/// Words that collide with target-language keywords and need escaping when
/// they appear as identifiers inside a doc reference.
const RESERVED: &[&str] = &[
    "associatedtype",
    "case",
    "class",
    "continue",
    "default",
    "enum",
    "extension",
    "for",
    "func",
    "import",
    "in",
    "internal",
    "let",
    "operator",
    "private",
    "protocol",
    "public",
    "repeat",
    "self",
    "static",
    "struct",
    "var",
    "where",
];

/// Escape an identifier that collides with a reserved word by wrapping it in
/// backticks. Already-escaped identifiers pass through unchanged.
pub fn escape_ident(name: &str) -> String {
    if name.starts_with('`') {
        return name.to_string();
    }
    if RESERVED.contains(&name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

/// Re-case a method name for reference emission. Callables keep their
/// snake_case spelling; only keyword escaping applies.
pub fn method_name(name: &str) -> String {
    escape_ident(name)
}

/// Re-case a member/property name for reference emission.
pub fn property_name(name: &str) -> String {
    escape_ident(name)
}

/// Re-case a parameter name for reference emission.
pub fn argument_name(name: &str) -> String {
    escape_ident(name)
}

/// Re-case a class constant name: SCREAMING_SNAKE to lowerCamel.
pub fn constant_name(name: &str) -> String {
    snake_to_camel(name)
}

/// Convert a snake_case (or SCREAMING_SNAKE) identifier to lowerCamelCase.
pub fn snake_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, word) in name.split('_').filter(|w| !w.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            push_capitalized(&mut out, word);
        }
    }
    out
}

/// Re-case an enum value name, stripping the leading words it shares with
/// its owning enum: `("Notification", "NOTIFICATION_READY")` yields `ready`.
///
/// Falls back to plain camel-casing when stripping would leave nothing or
/// would leave an identifier starting with a digit.
pub fn enum_value_name(enum_name: &str, value: &str) -> String {
    // The enum name may be namespace-qualified ("Node.Notification").
    let short = enum_name.rsplit('.').next().unwrap_or(enum_name);
    let enum_words = camel_words(short);
    let value_words: Vec<&str> = value.split('_').filter(|w| !w.is_empty()).collect();

    let mut matched = 0;
    while matched < enum_words.len()
        && matched < value_words.len()
        && value_words[matched].eq_ignore_ascii_case(&enum_words[matched])
    {
        matched += 1;
    }

    let rest = &value_words[matched..];
    if rest.is_empty() || rest[0].starts_with(|c: char| c.is_ascii_digit()) {
        return snake_to_camel(value);
    }

    let mut out = String::new();
    for (i, word) in rest.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            push_capitalized(&mut out, word);
        }
    }
    out
}

/// Map a Godot type name to its target spelling. Scalar primitives get their
/// target names; everything else passes through.
pub fn map_type_name(name: &str) -> String {
    match name {
        "int" => "Int".to_string(),
        "float" => "Double".to_string(),
        "bool" => "Bool".to_string(),
        _ => name.to_string(),
    }
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}

/// Split a CamelCase name into uppercase words: "ProcessMode" → ["PROCESS", "MODE"].
fn camel_words(name: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for c in name.chars() {
        if c.is_uppercase() || words.is_empty() {
            words.push(String::new());
        }
        let last = words.last_mut().unwrap();
        last.extend(c.to_uppercase());
    }
    words
}
