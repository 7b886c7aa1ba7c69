//! Name derivation from resource types.

use heck::{ToPascalCase, ToSnakeCase};

/// Plural guesses for a resource type, used for exact comparison against
/// lower-cased operation names.
///
/// The provider prefix is stripped and the remainder split on `_`. Every
/// contiguous suffix of tokens is joined into one word, and each word yields
/// `word + "s"`, `word + "es"` and, for words ending in `y`, `word[..-1] + "ies"`.
/// Longer suffixes come first.
#[must_use]
pub fn plural_candidates(resource_type: &str, prefix: &str) -> Vec<String> {
    let stripped = resource_type.strip_prefix(prefix).unwrap_or(resource_type);
    let tokens: Vec<&str> = stripped.split('_').collect();

    let mut result = Vec::with_capacity(tokens.len() * 3);
    for start in 0..tokens.len() {
        let word = tokens[start..].concat().to_lowercase();
        result.push(format!("{word}s"));
        result.push(format!("{word}es"));
        if let Some(stem) = word.strip_suffix('y') {
            result.push(format!("{stem}ies"));
        }
    }
    result
}

/// Name of the generated list function, without the `List` verb.
///
/// `aws_devicefarm_project` becomes `DevicefarmProject`.
#[must_use]
pub fn list_function_name(resource_type: &str, prefix: &str) -> String {
    resource_type
        .strip_prefix(prefix)
        .unwrap_or(resource_type)
        .to_pascal_case()
}

/// Convert an exported member or operation name to a Rust identifier.
#[must_use]
pub fn rust_ident(name: &str) -> String {
    let snake = name.to_snake_case();
    match snake.as_str() {
        "type" | "match" | "return" | "use" | "ref" | "mod" | "fn" | "in" | "as" | "where" => {
            format!("r#{snake}")
        }
        _ => snake,
    }
}
