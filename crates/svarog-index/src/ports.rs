use std::collections::HashMap;

use smol_str::SmolStr;
use svarog_ast::{ModuleDecl, PortDirection};
use svarog_source::FileId;

/// A single declared port of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    pub name: SmolStr,
    /// Effective direction after merging header and body declarations.
    /// `None` when no declaration supplies one (plain-name header lists
    /// with no matching body declaration).
    pub direction: Option<PortDirection>,
}

/// A module's ports in declaration order.
///
/// Built from the module AST; independent of who instantiates the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePorts {
    name: SmolStr,
    file: FileId,
    ports: Box<[Port]>,
}

impl ModulePorts {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file whose scan produced this definition.
    pub fn defined_in(&self) -> FileId {
        self.file
    }

    /// All ports, first-appearance order.
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Ports with the given direction, declaration order preserved.
    pub fn directed(&self, direction: PortDirection) -> impl Iterator<Item = &Port> {
        self.ports
            .iter()
            .filter(move |p| p.direction == Some(direction))
    }
}

/// Extract the effective port set of one module.
///
/// Ports come from two places: the header list (`module m(input a, ...)`)
/// and body declarations (`input a;`). The union defines the port set,
/// deduplicated by name with the first appearance winning the position.
/// Direction precedence: a header port carrying its own direction keyword
/// wins over a body redeclaration; a bare header name takes its direction
/// from the first body declaration. Direction does NOT carry over from
/// one header port to the next: a bare name after `input a,` stays
/// direction-less until the body declares it. Expanded headers list
/// generated names bare, so inheriting here would reassign their
/// direction on the next pass and break idempotence.
///
/// Returns `None` for an unnamed (unparseable) module.
pub fn collect_module_ports(file: FileId, module: &ModuleDecl) -> Option<ModulePorts> {
    let name = SmolStr::new(module.name()?.text());

    let mut ports: Vec<Port> = Vec::new();
    let mut by_name: HashMap<SmolStr, usize> = HashMap::new();

    if let Some(list) = module.port_list() {
        for port in list.ports() {
            let Some(tok) = port.name() else { continue };
            let name = SmolStr::new(tok.text());
            if !by_name.contains_key(&name) {
                by_name.insert(name.clone(), ports.len());
                ports.push(Port {
                    name,
                    direction: port.direction(),
                });
            }
        }
    }

    if let Some(body) = module.body() {
        for decl in body.port_decls() {
            let dir = decl.direction();
            for declarator in decl.declarators() {
                let Some(tok) = declarator.name() else { continue };
                let name = SmolStr::new(tok.text());
                match by_name.get(&name) {
                    Some(&idx) => {
                        if ports[idx].direction.is_none() {
                            ports[idx].direction = dir;
                        }
                    }
                    None => {
                        by_name.insert(name.clone(), ports.len());
                        ports.push(Port {
                            name,
                            direction: dir,
                        });
                    }
                }
            }
        }
    }

    Some(ModulePorts {
        name,
        file,
        ports: ports.into_boxed_slice(),
    })
}
