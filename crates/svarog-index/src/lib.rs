mod ports;
mod table;

pub use ports::{ModulePorts, Port, collect_module_ports};
pub use table::{SourceText, SymbolTable};

pub use svarog_ast::PortDirection;
