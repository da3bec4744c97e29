//! Tag scanner & transform pipeline.
//!
//! Walks a text field line by line, skipping verbatim `[codeblock]` regions,
//! and rewrites every recognized bracketed tag in a single left-to-right
//! scan into a fresh buffer. Unrecognized bracket content survives
//! untouched.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use crate::emit::Printer;
use crate::naming;
use crate::resolve;
use crate::symbols::{Context, SymbolTable};

/// `<kind> <argument>` shape inside a bracketed tag.
static RE_KIND_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+) ([\w.@_/]+)$").unwrap());

/// Bare capitalized identifier: a type reference.
static RE_TYPE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]\w+$").unwrap());

/// Transform one text field and emit it as `/// ` comment lines through the
/// printer. Absent text emits nothing; the printer's indent is untouched
/// either way.
pub fn transform(p: &mut Printer, ctx: Context, table: &SymbolTable, text: Option<&str>) {
    let Some(text) = text else { return };

    p.with_suffix("/// ", |p| {
        let lines: Vec<&str> = text.split('\n').collect();
        let multi = lines.len() > 1;
        let mut in_code_block = false;

        for line in lines {
            if line.contains("[codeblock") {
                in_code_block = true;
                continue;
            }
            if line.contains("[/codeblock") {
                in_code_block = false;
                continue;
            }
            // Verbatim bodies are dropped, not reproduced.
            if in_code_block {
                continue;
            }

            let rewritten = rewrite_line(line, ctx, table);
            let rewritten = rewritten.trim_start();
            if multi {
                p.line(rewritten);
            } else {
                p.write(rewritten);
            }
        }
    });
}

/// Rewrite all tags in one line.
fn rewrite_line(line: &str, ctx: Context, table: &SymbolTable) -> String {
    // Notice markers span two tags plus text, so they are rewritten before
    // the tag scan sees the individual [b] pieces.
    let line = line.replace("[b]Note:[/b]", "> Note:");
    let line = line.replace("[b]Warning:[/b]", "> Warning:");

    let mut out = String::with_capacity(line.len());
    let mut rest = line.as_str();
    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find(']') else {
            // No closing bracket: everything left is literal text.
            out.push_str(&rest[open..]);
            return out;
        };
        out.push_str(&replace_tag(&after[..close], ctx, table));
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Produce the replacement text for the content of one `[...]` tag.
fn replace_tag(tag: &str, ctx: Context, table: &SymbolTable) -> String {
    match tag {
        "int" => return "integer".to_string(),
        "float" => return "float".to_string(),
        "i" | "/i" => return "_".to_string(),
        "b" | "/b" => return "**".to_string(),
        "code" | "/code" => return "`".to_string(),
        _ => {}
    }

    if let Some(caps) = RE_KIND_ARG.captures(tag) {
        let kind = &caps[1];
        let value = &caps[2];
        return match kind {
            "param" => {
                let name = naming::argument_name(value);
                // Escaped parameter names already carry their backticks.
                if name.starts_with('`') {
                    name
                } else {
                    format!("`{name}`")
                }
            }
            "constant" => resolve::resolve_constant(value, ctx, table),
            "method" => resolve::convert_method(value, ctx, table),
            "member" => resolve::convert_member(value),
            "enum" => resolve::resolve_enum_tag(value, ctx),
            _ => {
                warn!("unexpected {kind} tag in documentation");
                format!("[{tag}]")
            }
        };
    }

    if RE_TYPE_NAME.is_match(tag) {
        return resolve::resolve_type(tag);
    }

    // Not a recognized tag; pass it through unchanged.
    format!("[{tag}]")
}
