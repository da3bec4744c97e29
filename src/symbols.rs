//! Symbol table — immutable registry of every known class and builtin, plus
//! the global enum registry.
//!
//! Built once from the extension API before any documentation is processed;
//! strictly read-only afterwards, so it can be shared freely across
//! transformations.

use std::collections::HashMap;

use crate::api::ExtensionApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Class,
    Builtin,
}

/// One enum declaration: qualified name plus its value names, in order.
#[derive(Debug)]
pub struct EnumDef {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug)]
pub struct ConstantDef {
    pub name: String,
}

/// Method signature reduced to what reference reconstruction needs: the name
/// and the ordered parameter names.
#[derive(Debug)]
pub struct MethodSig {
    pub name: String,
    pub args: Vec<String>,
}

#[derive(Debug)]
pub struct SymbolEntry {
    pub name: String,
    pub kind: SymbolKind,
    pub enums: Vec<EnumDef>,
    pub constants: Vec<ConstantDef>,
    pub methods: Vec<MethodSig>,
}

impl SymbolEntry {
    pub fn find_method(&self, name: &str) -> Option<&MethodSig> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn declares_enum(&self, name: &str) -> bool {
        self.enums.iter().any(|e| e.name == name)
    }
}

/// The resolution context for one documented entity. Scopes "local" lookups;
/// the builtin variant skips the class-constants search path.
#[derive(Debug, Clone, Copy)]
pub enum Context<'a> {
    Class(&'a SymbolEntry),
    Builtin(&'a SymbolEntry),
    None,
}

impl<'a> Context<'a> {
    pub fn entry(self) -> Option<&'a SymbolEntry> {
        match self {
            Context::Class(e) | Context::Builtin(e) => Some(e),
            Context::None => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<String, SymbolEntry>,
    global_enums: Vec<EnumDef>,
}

impl SymbolTable {
    /// One-time construction pass over the API model.
    pub fn build(api: &ExtensionApi) -> Self {
        let mut entries = HashMap::new();

        for class in &api.classes {
            entries.insert(class.name.clone(), SymbolEntry {
                name: class.name.clone(),
                kind: SymbolKind::Class,
                enums: convert_enums(&class.enums),
                constants: class
                    .constants
                    .iter()
                    .map(|c| ConstantDef { name: c.name.clone() })
                    .collect(),
                methods: convert_methods(&class.methods),
            });
        }

        for builtin in &api.builtin_classes {
            entries.insert(builtin.name.clone(), SymbolEntry {
                name: builtin.name.clone(),
                kind: SymbolKind::Builtin,
                enums: convert_enums(&builtin.enums),
                constants: builtin
                    .constants
                    .iter()
                    .map(|c| ConstantDef { name: c.name.clone() })
                    .collect(),
                methods: convert_methods(&builtin.methods),
            });
        }

        SymbolTable {
            entries,
            global_enums: convert_enums(&api.global_enums),
        }
    }

    /// Querying an unknown name returns `None`, never an error.
    pub fn lookup(&self, name: &str) -> Option<&SymbolEntry> {
        self.entries.get(name)
    }

    pub fn global_enums(&self) -> &[EnumDef] {
        &self.global_enums
    }

    /// Resolution context for a symbol; unknown names get `Context::None`.
    pub fn context_for(&self, name: &str) -> Context<'_> {
        match self.lookup(name) {
            Some(entry) => match entry.kind {
                SymbolKind::Class => Context::Class(entry),
                SymbolKind::Builtin => Context::Builtin(entry),
            },
            None => Context::None,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn convert_enums(enums: &[crate::api::ApiEnum]) -> Vec<EnumDef> {
    enums
        .iter()
        .map(|e| EnumDef {
            name: e.name.clone(),
            values: e.values.iter().map(|v| v.name.clone()).collect(),
        })
        .collect()
}

fn convert_methods(methods: &[crate::api::ApiMethod]) -> Vec<MethodSig> {
    methods
        .iter()
        .map(|m| MethodSig {
            name: m.name.clone(),
            args: m.arguments.iter().map(|a| a.name.clone()).collect(),
        })
        .collect()
}
