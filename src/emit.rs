//! Output formatting: an indentation-aware printer plus the per-entity
//! comment layout. Only comment lines are ever emitted.

use crate::markup;
use crate::model::{DocBuiltinClass, DocClass, DocMethod, DocTutorial};
use crate::symbols::{Context, SymbolTable};

/// Accumulates emitted text, prefixing every line with the current indent.
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
    indent: String,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `suffix` to the indent for the duration of `f`, restoring the
    /// prior indent afterwards even when `f` emits nothing.
    pub fn with_suffix<F: FnOnce(&mut Printer)>(&mut self, suffix: &str, f: F) {
        let saved = self.indent.len();
        self.indent.push_str(suffix);
        f(self);
        self.indent.truncate(saved);
    }

    /// Emit `text` at the current indent without a trailing line break.
    pub fn write(&mut self, text: &str) {
        self.out.push_str(&self.indent);
        self.out.push_str(text);
    }

    /// Emit one full line at the current indent.
    pub fn line(&mut self, text: &str) {
        self.write(text);
        self.out.push('\n');
    }

    /// Unindented blank line.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Terminate the current line if the buffer does not already end in one.
    pub fn ensure_newline(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}

fn non_empty(text: &str) -> Option<&str> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Emit the brief/description/tutorials comment block for a class or builtin.
fn head_comment(
    p: &mut Printer,
    ctx: Context,
    table: &SymbolTable,
    brief: &str,
    description: &str,
    tutorials: &[DocTutorial],
) {
    markup::transform(p, ctx, table, non_empty(brief));
    p.ensure_newline();
    if !description.is_empty() {
        if !brief.is_empty() {
            p.with_suffix("///", |p| p.line(""));
        }
        markup::transform(p, ctx, table, non_empty(description));
        p.ensure_newline();
    }
    if !tutorials.is_empty() {
        p.with_suffix("/// ", |p| {
            p.line("");
            p.line("Tutorials:");
            for t in tutorials {
                p.line(&format!("- [{}]({})", t.title, t.link));
            }
        });
    }
}

/// Emit one member's comment block at member indentation.
fn member_comment(p: &mut Printer, ctx: Context, table: &SymbolTable, text: &str) {
    if text.is_empty() {
        return;
    }
    p.with_suffix("    ", |p| {
        markup::transform(p, ctx, table, Some(text));
        p.ensure_newline();
    });
}

fn callable_block(
    p: &mut Printer,
    ctx: Context,
    table: &SymbolTable,
    kind: &str,
    items: &[DocMethod],
) {
    for m in items {
        p.blank();
        p.line(&format!("// {kind} {}", m.name));
        member_comment(p, ctx, table, &m.description);
    }
}

/// Emit the full comment set for a documented class.
pub fn emit_class(p: &mut Printer, table: &SymbolTable, doc: &DocClass) {
    let ctx = table.context_for(&doc.name);
    p.line(&format!("// class {}", doc.name));
    head_comment(
        p,
        ctx,
        table,
        &doc.brief_description,
        &doc.description,
        &doc.tutorials,
    );

    callable_block(p, ctx, table, "method", &doc.methods);
    for m in &doc.members {
        p.blank();
        p.line(&format!("// member {}", m.name));
        member_comment(p, ctx, table, &m.description);
    }
    for s in &doc.signals {
        p.blank();
        p.line(&format!("// signal {}", s.name));
        member_comment(p, ctx, table, &s.description);
    }
    for c in &doc.constants {
        p.blank();
        p.line(&format!("// constant {}", c.name));
        member_comment(p, ctx, table, &c.description);
    }
}

/// Emit the full comment set for a documented builtin value type.
pub fn emit_builtin(p: &mut Printer, table: &SymbolTable, doc: &DocBuiltinClass) {
    let ctx = table.context_for(&doc.name);
    p.line(&format!("// builtin {}", doc.name));
    head_comment(
        p,
        ctx,
        table,
        &doc.brief_description,
        &doc.description,
        &doc.tutorials,
    );

    callable_block(p, ctx, table, "constructor", &doc.constructors);
    callable_block(p, ctx, table, "method", &doc.methods);
    for m in &doc.members {
        p.blank();
        p.line(&format!("// member {}", m.name));
        member_comment(p, ctx, table, &m.description);
    }
    for c in &doc.constants {
        p.blank();
        p.line(&format!("// constant {}", c.name));
        member_comment(p, ctx, table, &c.description);
    }
    callable_block(p, ctx, table, "operator", &doc.operators);
}
