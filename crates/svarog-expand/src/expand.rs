use svarog_index::{ModulePorts, Port, PortDirection, SymbolTable};

use crate::locate::{DirectiveKind, DirectiveSite};
use crate::template::TemplateRegistry;

const BUCKETS: [(PortDirection, &str); 3] = [
    (PortDirection::Input, "Inputs"),
    (PortDirection::Inout, "Inouts"),
    (PortDirection::Output, "Outputs"),
];

/// Produce the replacement text for one directive site, or `None` when
/// nothing should change: unknown module, or every port already written
/// by the user. The text replaces the whole region between the directive
/// and the port list's closing `)`.
pub(crate) fn generate(
    site: &DirectiveSite,
    symbols: &SymbolTable,
    templates: &TemplateRegistry,
) -> Option<String> {
    let module = symbols.lookup_module(&site.target_module)?;
    let buckets = partition(module, site);
    if buckets.is_empty() {
        return None;
    }
    let member_indent = format!("{}  ", site.indent);
    match site.kind {
        DirectiveKind::AutoArg => Some(autoarg_text(&buckets, &member_indent)),
        DirectiveKind::AutoInst => Some(autoinst_text(site, templates, &buckets, &member_indent)),
    }
}

// Remaining ports grouped Inputs -> Inouts -> Outputs, declaration order
// within each group, empty groups dropped. Ports the user already bound
// are subtracted; ports with no resolvable direction cannot be grouped
// and are left alone.
fn partition<'m>(module: &'m ModulePorts, site: &DirectiveSite) -> Vec<(&'static str, Vec<&'m Port>)> {
    BUCKETS
        .iter()
        .filter_map(|&(direction, label)| {
            let ports: Vec<&Port> = module
                .directed(direction)
                .filter(|p| !site.preexisting.contains(&p.name))
                .collect();
            (!ports.is_empty()).then_some((label, ports))
        })
        .collect()
}

// Port-name list for a module header:
//
//   // Inputs
//   clk, rst,
//   // Outputs
//   o
//   )            <- host `)`; the text ends with the closing indent
fn autoarg_text(buckets: &[(&str, Vec<&Port>)], member_indent: &str) -> String {
    let mut out = String::from("\n");
    for (i, (label, ports)) in buckets.iter().enumerate() {
        out.push_str(member_indent);
        out.push_str("// ");
        out.push_str(label);
        out.push('\n');
        out.push_str(member_indent);
        let names: Vec<&str> = ports.iter().map(|p| p.name.as_str()).collect();
        out.push_str(&names.join(", "));
        if i + 1 < buckets.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str(member_indent);
    out
}

// Named connections for an instance:
//
//   // Inputs
//   .i1(in_a),
//   .i2(i2),
//   // Outputs
//   .o1(o1),
//   .o2(o2)      <- host `)` attaches directly
//
// Connections default to the pin's own name; a matching template binding
// replaces the right-hand side verbatim.
fn autoinst_text(
    site: &DirectiveSite,
    templates: &TemplateRegistry,
    buckets: &[(&str, Vec<&Port>)],
    member_indent: &str,
) -> String {
    let template = templates.lookup(site.site_offset, &site.target_module);

    let mut lines: Vec<(String, bool)> = Vec::new();
    for (label, ports) in buckets {
        lines.push((format!("{member_indent}// {label}"), false));
        for port in ports {
            let connection = template
                .and_then(|t| t.binding(&port.name))
                .unwrap_or(port.name.as_str());
            lines.push((format!("{member_indent}.{}({})", port.name, connection), true));
        }
    }

    let last_connection = lines.iter().rposition(|(_, is_conn)| *is_conn);
    let mut out = String::new();
    for (i, (line, is_conn)) in lines.iter().enumerate() {
        out.push('\n');
        out.push_str(line);
        if *is_conn && Some(i) != last_connection {
            out.push(',');
        }
    }
    out
}
