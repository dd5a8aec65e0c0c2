mod node;
mod nodes;
mod port;
mod support;

pub use node::AstNode;
pub use nodes::{
    Declarator, InstancePort, InstancePortList, ModuleBody, ModuleDecl, ModuleInstantiation,
    Port, PortDecl, PortList, SourceFile,
};
pub use port::PortDirection;
pub use support::AstChildren;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_file(src: &str) -> SourceFile {
        let parse = svarog_parser::parse_source(src);
        SourceFile::cast(parse.syntax()).expect("root is SourceFile")
    }

    #[test]
    fn module_name_and_ports() {
        let file = parse_file("module counter(input clk, output logic [3:0] q); endmodule");
        let m = file.modules().next().expect("one module");
        assert_eq!(m.name().expect("named").text(), "counter");

        let ports: Vec<_> = m
            .port_list()
            .expect("has port list")
            .ports()
            .filter_map(|p| p.name().map(|t| t.text().to_string()))
            .collect();
        assert_eq!(ports, ["clk", "q"]);
    }

    #[test]
    fn port_name_skips_type_identifiers() {
        let file = parse_file("module m(input my_pkg_t data); endmodule");
        let m = file.modules().next().expect("one module");
        let port = m.port_list().expect("ports").ports().next().expect("port");
        assert_eq!(port.name().expect("named").text(), "data");
        assert_eq!(port.direction(), Some(PortDirection::Input));
    }

    #[test]
    fn body_port_decl_declarators() {
        let file = parse_file("module m; input clk, rst; output reg o; endmodule");
        let m = file.modules().next().expect("one module");
        let body = m.body().expect("body");
        let decls: Vec<_> = body.port_decls().collect();
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].direction(), Some(PortDirection::Input));
        let names: Vec<_> = decls[0]
            .declarators()
            .filter_map(|d| d.name().map(|t| t.text().to_string()))
            .collect();
        assert_eq!(names, ["clk", "rst"]);
        assert_eq!(decls[1].direction(), Some(PortDirection::Output));
    }

    #[test]
    fn instantiation_names_and_pins() {
        let file = parse_file(
            "module top; adder u1(.a(x), .b(y)), u2(.a(z)); endmodule",
        );
        let m = file.modules().next().expect("one module");
        let inst = m
            .body()
            .expect("body")
            .module_instantiations()
            .next()
            .expect("instantiation");
        assert_eq!(inst.module_name().expect("name").text(), "adder");

        let entries: Vec<_> = inst.instances().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0.text(), "u1");
        assert_eq!(entries[1].0.text(), "u2");

        let pins: Vec<_> = entries[0]
            .1
            .as_ref()
            .expect("port list")
            .ports()
            .filter_map(|p| p.port_name().map(|t| t.text().to_string()))
            .collect();
        assert_eq!(pins, ["a", "b"]);
    }

    #[test]
    fn wildcard_connection_has_no_pin_name() {
        let file = parse_file("module top; adder u(.*, .b(y)); endmodule");
        let m = file.modules().next().expect("one module");
        let inst = m
            .body()
            .expect("body")
            .module_instantiations()
            .next()
            .expect("instantiation");
        let (_, ports) = inst.instances().next().expect("instance");
        let ports: Vec<_> = ports.expect("port list").ports().collect();
        assert!(ports[0].is_wildcard());
        assert!(!ports[0].is_named());
        assert!(ports[1].is_named());
    }
}
