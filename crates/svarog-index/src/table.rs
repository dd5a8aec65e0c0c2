use std::collections::HashMap;

use smol_str::SmolStr;
use svarog_ast::{AstNode, SourceFile};
use svarog_source::FileId;

use crate::ports::{ModulePorts, collect_module_ports};

/// One source file's content, addressed by URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub uri: String,
    pub text: String,
}

impl SourceText {
    pub fn new(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            text: text.into(),
        }
    }
}

/// Project-wide module index.
///
/// Rebuilt per expansion pass: assign the project file set, push the open
/// buffer's current content, then `build_project_symbol_table` to
/// (re)extract every module's ports. Lookups are by module name; a name
/// defined more than once resolves to the first definition in scan order
/// (tracked file first, then project files as given).
#[derive(Debug, Default)]
pub struct SymbolTable {
    tracked: Option<SourceText>,
    project: Vec<SourceText>,
    modules: Vec<ModulePorts>,
    by_name: HashMap<SmolStr, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the project file set. Does not rebuild the index.
    pub fn set_project(&mut self, files: Vec<SourceText>) {
        self.project = files;
    }

    /// Refresh (or introduce) the tracked open buffer's content.
    /// Does not rebuild the index.
    pub fn update_file_content(&mut self, uri: &str, text: &str) {
        self.tracked = Some(SourceText::new(uri, text));
    }

    /// Re-extract module ports from every known file.
    pub fn build_project_symbol_table(&mut self) {
        self.modules.clear();
        self.by_name.clear();

        let tracked_uri = self.tracked.as_ref().map(|f| f.uri.clone());
        let files = self
            .tracked
            .iter()
            .chain(
                self.project
                    .iter()
                    .filter(|f| Some(&f.uri) != tracked_uri.as_ref()),
            )
            .cloned()
            .collect::<Vec<_>>();

        for (idx, file) in files.iter().enumerate() {
            let file_id = FileId(idx as u32);
            let parse = svarog_parser::parse_source(&file.text);
            let Some(root) = SourceFile::cast(parse.syntax()) else {
                continue;
            };
            for module in root.modules() {
                let Some(ports) = collect_module_ports(file_id, &module) else {
                    continue;
                };
                let slot = self.modules.len();
                self.by_name
                    .entry(SmolStr::new(ports.name()))
                    .or_insert(slot);
                self.modules.push(ports);
            }
        }
    }

    /// Resolve a module by name. A duplicated name yields its first
    /// definition; an unknown name yields `None`.
    pub fn lookup_module(&self, name: &str) -> Option<&ModulePorts> {
        self.by_name.get(name).map(|&idx| &self.modules[idx])
    }

    /// All module definitions in scan order (duplicates included).
    pub fn modules(&self) -> &[ModulePorts] {
        &self.modules
    }
}
