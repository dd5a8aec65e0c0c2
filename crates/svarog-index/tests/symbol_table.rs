use svarog_index::{PortDirection, SourceText, SymbolTable};
use svarog_source::FileId;

fn build(tracked: &str, project: &[&str]) -> SymbolTable {
    let mut table = SymbolTable::new();
    table.set_project(
        project
            .iter()
            .enumerate()
            .map(|(i, text)| SourceText::new(format!("file:///project-{i}.sv"), *text))
            .collect(),
    );
    table.update_file_content("file:///tested.sv", tracked);
    table.build_project_symbol_table();
    table
}

fn port_names(table: &SymbolTable, module: &str) -> Vec<String> {
    table
        .lookup_module(module)
        .expect("module should resolve")
        .ports()
        .iter()
        .map(|p| p.name.to_string())
        .collect()
}

#[test]
fn header_ports_in_declaration_order() {
    let table = build("module bar(input i1, output o1); endmodule", &[]);
    assert_eq!(port_names(&table, "bar"), ["i1", "o1"]);
}

#[test]
fn bare_header_names_do_not_inherit_direction() {
    // `b` carries no direction keyword of its own. It stays undirected
    // until (unless) the body declares it -- a generated header lists
    // names bare, and re-expansion must not fold them into the bucket of
    // the last explicit keyword before the directive.
    let table = build("module m(input a, b, output c); endmodule", &[]);
    let m = table.lookup_module("m").expect("resolves");
    let dirs: Vec<_> = m.ports().iter().map(|p| p.direction).collect();
    assert_eq!(
        dirs,
        [Some(PortDirection::Input), None, Some(PortDirection::Output)]
    );
}

#[test]
fn body_declarations_extend_the_header() {
    let table = build(
        "module bar(input i1, output o1);\n  input i2;\n  inout io;\n  output o2;\nendmodule",
        &[],
    );
    assert_eq!(port_names(&table, "bar"), ["i1", "o1", "i2", "io", "o2"]);
    let m = table.lookup_module("bar").expect("resolves");
    assert_eq!(
        m.directed(PortDirection::Input)
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>(),
        ["i1", "i2"]
    );
    assert_eq!(
        m.directed(PortDirection::Output)
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>(),
        ["o1", "o2"]
    );
}

#[test]
fn body_fills_direction_of_plain_header_name() {
    // Non-ANSI style: names in the header, directions in the body
    let table = build(
        "module m(a, b);\n  input a;\n  output b;\nendmodule",
        &[],
    );
    let m = table.lookup_module("m").expect("resolves");
    assert_eq!(m.ports()[0].direction, Some(PortDirection::Input));
    assert_eq!(m.ports()[1].direction, Some(PortDirection::Output));
}

#[test]
fn header_direction_wins_over_body_redeclaration() {
    let table = build(
        "module m(input a);\n  output a;\nendmodule",
        &[],
    );
    let m = table.lookup_module("m").expect("resolves");
    assert_eq!(m.ports()[0].direction, Some(PortDirection::Input));
}

#[test]
fn duplicate_port_names_deduplicated_first_wins() {
    let table = build(
        "module m(input a);\n  input a;\n  input a;\nendmodule",
        &[],
    );
    assert_eq!(port_names(&table, "m"), ["a"]);
}

#[test]
fn missing_module_is_none() {
    let table = build("module m; endmodule", &[]);
    assert!(table.lookup_module("nonexistent").is_none());
}

#[test]
fn duplicate_module_resolves_to_first_definition() {
    let table = build(
        "module bar(input i1, output o1); endmodule\nmodule bar(input i2, output o2); endmodule",
        &[],
    );
    // Both definitions are scanned, lookup deterministically picks the first
    assert_eq!(table.modules().len(), 2);
    assert_eq!(port_names(&table, "bar"), ["i1", "o1"]);
}

#[test]
fn tracked_file_shadows_project_files() {
    let table = build(
        "module bar(input from_tracked); endmodule",
        &["module bar(input from_project); endmodule"],
    );
    let m = table.lookup_module("bar").expect("resolves");
    assert_eq!(m.defined_in(), FileId(0));
    assert_eq!(port_names(&table, "bar"), ["from_tracked"]);
}

#[test]
fn cross_file_modules_resolve() {
    let table = build(
        "module foo; bar b(); endmodule",
        &[
            "module bar(input i1, output o1);\n  inout io;\nendmodule",
            "module qux;\n  input i1;\nendmodule",
        ],
    );
    assert_eq!(port_names(&table, "bar"), ["i1", "o1", "io"]);
    assert_eq!(port_names(&table, "qux"), ["i1"]);
}

#[test]
fn function_ports_do_not_leak_into_module_ports() {
    let table = build(
        "module m(input clk);\n  function automatic int f;\n    input int x;\n    f = x;\n  endfunction\nendmodule",
        &[],
    );
    assert_eq!(port_names(&table, "m"), ["clk"]);
}

#[test]
fn rebuild_reflects_updated_content() {
    let mut table = SymbolTable::new();
    table.update_file_content("file:///tested.sv", "module m(input a); endmodule");
    table.build_project_symbol_table();
    assert_eq!(port_names(&table, "m"), ["a"]);

    table.update_file_content("file:///tested.sv", "module m(input a, input b); endmodule");
    table.build_project_symbol_table();
    assert_eq!(port_names(&table, "m"), ["a", "b"]);
}
