//! Reference resolution — turns markup tokens into cross-reference paths.
//!
//! Every function here degrades to a literal fallback instead of failing:
//! unresolved references are common (forward references, external modules)
//! and must never block generation.

use crate::naming;
use crate::symbols::{Context, MethodSig, SymbolEntry, SymbolKind, SymbolTable};

fn wrap(path: &str) -> String {
    format!("`{path}`")
}

/// Resolve a `[constant X]` token.
///
/// Lookup priority: the context's own enums, then its constants (full
/// classes only), then the global enum registry, then a foreign
/// `Type.NAME` split at the *last* dot, then a literal fallback.
pub fn resolve_constant(token: &str, ctx: Context, table: &SymbolTable) -> String {
    if let Some(entry) = ctx.entry() {
        if let Some(frag) = search_entry(entry, token, true) {
            return wrap(&frag);
        }
    }

    for ed in table.global_enums() {
        for value in &ed.values {
            if value == token {
                let name = naming::escape_ident(&naming::enum_value_name(&ed.name, value));
                // The owning type is the text before the enum's last separator.
                let path = match ed.name.rsplit_once('.') {
                    Some((owner, lookup)) => format!(
                        "{}/{}/{}",
                        naming::map_type_name(owner),
                        naming::map_type_name(lookup),
                        name
                    ),
                    None => format!("{}/{}", naming::map_type_name(&ed.name), name),
                };
                return wrap(&path);
            }
        }
    }

    if let Some((ty, name)) = token.rsplit_once('.') {
        if !ty.is_empty() {
            if let Some(entry) = table.lookup(ty) {
                if let Some(frag) = search_entry(entry, name, false) {
                    return wrap(&format!("{}/{}", naming::map_type_name(ty), frag));
                }
            }
        }
    }

    wrap(token)
}

/// Search one symbol entry for an enum value or constant match. Returns the
/// reference fragment relative to the entry, or `None`.
fn search_entry(entry: &SymbolEntry, token: &str, local: bool) -> Option<String> {
    for ed in &entry.enums {
        for value in &ed.values {
            if value == token {
                let name = naming::escape_ident(&naming::enum_value_name(&ed.name, value));
                return Some(if local {
                    format!(".{name}")
                } else {
                    format!("{}/{}", naming::map_type_name(&ed.name), name)
                });
            }
        }
    }

    // Plain constants exist only on full classes.
    if entry.kind == SymbolKind::Class {
        for c in &entry.constants {
            if c.name == token {
                return Some(naming::constant_name(token));
            }
        }
    }

    None
}

/// Resolve a `[TypeName]` token. Unknown names still produce a valid, if
/// dangling, reference.
pub fn resolve_type(token: &str) -> String {
    wrap(&naming::map_type_name(token))
}

/// Resolve an `[enum X]` token: context-qualified when the context declares
/// it, foreign doubly-namespaced otherwise.
pub fn resolve_enum_tag(token: &str, ctx: Context) -> String {
    if let Some(entry) = ctx.entry() {
        if entry.declares_enum(token) {
            return wrap(&format!("{}/{}", entry.name, token));
        }
    }
    match token.rsplit_once('.') {
        Some((owner, name)) => wrap(&format!("{}/{}", naming::map_type_name(owner), name)),
        None => wrap(&naming::map_type_name(token)),
    }
}

/// Rebuild a `[method X]` token as a call-style reference with reconstructed
/// parameter labels. The token splits at the *first* dot.
pub fn convert_method(token: &str, ctx: Context, table: &SymbolTable) -> String {
    if token.starts_with('@') {
        // @GlobalScope.remap and friends have no table entry to reconstruct from.
        return wrap(token);
    }

    let (ty, member) = type_split(token);
    let labels = match ty {
        Some(ty) => method_labels(table.lookup(ty), member),
        None => method_labels(ctx.entry(), member),
    };

    match ty {
        Some(ty) => wrap(&format!("{}/{}({})", ty, naming::method_name(member), labels)),
        None => wrap(&format!("{}({})", naming::method_name(member), labels)),
    }
}

/// Rebuild a `[member X]` token, split at the *first* dot.
pub fn convert_member(token: &str) -> String {
    match type_split(token) {
        (Some(ty), member) => wrap(&format!("{}/{}", ty, naming::property_name(member))),
        (None, member) => wrap(&naming::property_name(member)),
    }
}

/// `Type.rest` at the first dot, or `(None, token)` when there is none.
fn type_split(token: &str) -> (Option<&str>, &str) {
    match token.split_once('.') {
        Some((ty, rest)) => (Some(ty), rest),
        None => (None, token),
    }
}

fn method_labels(entry: Option<&SymbolEntry>, name: &str) -> String {
    let Some(entry) = entry else {
        return String::new();
    };
    let Some(sig) = entry.find_method(name) else {
        return String::new();
    };
    match entry.kind {
        SymbolKind::Class => assemble_args(Some(sig), &sig.args),
        SymbolKind::Builtin => assemble_args(None, &sig.args),
    }
}

/// Reconstruct the parameter-label portion of a call-style reference.
///
/// The first label becomes the `_` placeholder when the overload's own name
/// ends with that parameter's name, which would otherwise read as a
/// self-referential label.
pub fn assemble_args(overload: Option<&MethodSig>, args: &[String]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i == 0 && overload.is_some_and(|m| m.name.ends_with(arg.as_str())) {
            out.push('_');
        } else {
            out.push_str(&naming::argument_name(arg));
        }
        out.push(':');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ExtensionApi;

    fn table() -> SymbolTable {
        let api: ExtensionApi = serde_json::from_str(
            r#"{
                "classes": [
                    {
                        "name": "Node2D",
                        "enums": [
                            { "name": "ProcessMode",
                              "values": [
                                { "name": "PROCESS_MODE_INHERIT", "value": 0 },
                                { "name": "NOTIFICATION_PAUSED", "value": 14 }
                              ] }
                        ],
                        "constants": [ { "name": "MAX_DEPTH", "value": 32 } ],
                        "methods": [
                            { "name": "get_position" },
                            { "name": "set_position",
                              "arguments": [ { "name": "position", "type": "Vector2" } ] },
                            { "name": "move_toward",
                              "arguments": [
                                { "name": "target", "type": "Vector2" },
                                { "name": "delta", "type": "float" }
                              ] }
                        ]
                    }
                ],
                "builtin_classes": [
                    { "name": "Vector2",
                      "methods": [ { "name": "angle_to",
                                     "arguments": [ { "name": "to", "type": "Vector2" } ] } ] }
                ],
                "global_enums": [
                    { "name": "Node.Notification",
                      "values": [
                        { "name": "NOTIFICATION_READY", "value": 13 },
                        { "name": "NOTIFICATION_PAUSED", "value": 14 }
                      ] },
                    { "name": "Error",
                      "values": [ { "name": "FAILED", "value": 1 } ] }
                ]
            }"#,
        )
        .unwrap();
        SymbolTable::build(&api)
    }

    #[test]
    fn local_enum_value_resolves_without_qualifier() {
        let table = table();
        let ctx = table.context_for("Node2D");
        assert_eq!(
            resolve_constant("PROCESS_MODE_INHERIT", ctx, &table),
            "`.inherit`"
        );
    }

    #[test]
    fn local_enum_wins_over_global() {
        // NOTIFICATION_PAUSED exists both on Node2D's own enum and in the
        // global registry; the local match must win.
        let table = table();
        let ctx = table.context_for("Node2D");
        assert_eq!(
            resolve_constant("NOTIFICATION_PAUSED", ctx, &table),
            "`.notificationPaused`"
        );
    }

    #[test]
    fn local_class_constant() {
        let table = table();
        let ctx = table.context_for("Node2D");
        assert_eq!(resolve_constant("MAX_DEPTH", ctx, &table), "`maxDepth`");
    }

    #[test]
    fn global_enum_owner_derived_from_namespace() {
        let table = table();
        let ctx = table.context_for("Node2D");
        assert_eq!(
            resolve_constant("NOTIFICATION_READY", ctx, &table),
            "`Node/Notification/ready`"
        );
    }

    #[test]
    fn global_enum_without_namespace() {
        let table = table();
        assert_eq!(
            resolve_constant("FAILED", Context::None, &table),
            "`Error/failed`"
        );
    }

    #[test]
    fn foreign_constant_split_at_last_dot() {
        let table = table();
        assert_eq!(
            resolve_constant("Node2D.PROCESS_MODE_INHERIT", Context::None, &table),
            "`Node2D/ProcessMode/inherit`"
        );
        assert_eq!(
            resolve_constant("Node2D.MAX_DEPTH", Context::None, &table),
            "`Node2D/maxDepth`"
        );
    }

    #[test]
    fn fallback_is_deterministic() {
        let table = table();
        let first = resolve_constant("NO_SUCH_THING", Context::None, &table);
        let second = resolve_constant("NO_SUCH_THING", Context::None, &table);
        assert_eq!(first, "`NO_SUCH_THING`");
        assert_eq!(first, second);
    }

    #[test]
    fn type_resolution_never_fails() {
        assert_eq!(resolve_type("Node2D"), "`Node2D`");
        assert_eq!(resolve_type("Imaginary"), "`Imaginary`");
    }

    #[test]
    fn enum_tag_local_and_foreign() {
        let table = table();
        let ctx = table.context_for("Node2D");
        assert_eq!(resolve_enum_tag("ProcessMode", ctx), "`Node2D/ProcessMode`");
        assert_eq!(
            resolve_enum_tag("Mesh.ArrayType", ctx),
            "`Mesh/ArrayType`"
        );
        assert_eq!(resolve_enum_tag("Error", Context::None), "`Error`");
    }

    #[test]
    fn self_referential_first_label_gets_placeholder() {
        let table = table();
        let entry = table.lookup("Node2D").unwrap();
        let sig = entry.find_method("set_position").unwrap();
        assert_eq!(assemble_args(Some(sig), &sig.args), "_:");
        // Without a known overload there is no disambiguation to apply.
        assert_eq!(assemble_args(None, &sig.args), "position:");
    }

    #[test]
    fn later_labels_keep_their_names() {
        let table = table();
        let entry = table.lookup("Node2D").unwrap();
        let sig = entry.find_method("move_toward").unwrap();
        assert_eq!(assemble_args(Some(sig), &sig.args), "target:delta:");
    }

    #[test]
    fn method_in_context() {
        let table = table();
        let ctx = table.context_for("Node2D");
        assert_eq!(convert_method("get_position", ctx, &table), "`get_position()`");
        assert_eq!(convert_method("set_position", ctx, &table), "`set_position(_:)`");
    }

    #[test]
    fn method_with_type_prefix() {
        let table = table();
        assert_eq!(
            convert_method("Node2D.set_position", Context::None, &table),
            "`Node2D/set_position(_:)`"
        );
        // Builtin overloads never get the placeholder, even on a suffix match.
        assert_eq!(
            convert_method("Vector2.angle_to", Context::None, &table),
            "`Vector2/angle_to(to:)`"
        );
    }

    #[test]
    fn unknown_method_keeps_empty_labels() {
        let table = table();
        let ctx = table.context_for("Node2D");
        assert_eq!(convert_method("vanish", ctx, &table), "`vanish()`");
        assert_eq!(
            convert_method("Ghost.vanish", Context::None, &table),
            "`Ghost/vanish()`"
        );
    }

    #[test]
    fn global_scope_methods_pass_through() {
        let table = table();
        assert_eq!(
            convert_method("@GlobalScope.remap", Context::None, &table),
            "`@GlobalScope.remap`"
        );
    }

    #[test]
    fn member_references() {
        assert_eq!(convert_member("position"), "`position`");
        assert_eq!(convert_member("Node2D.position"), "`Node2D/position`");
    }
}
