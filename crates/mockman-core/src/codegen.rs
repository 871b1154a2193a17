use crate::builder::{ComponentElement, ElementKind};

/// Renders the builder canvas as a JSX function component. Spacers have no
/// template and are left out.
pub fn component_code(name: &str, elements: &[ComponentElement]) -> String {
    let mut code = format!("function {name}() {{\n  return (\n    <div className=\"component\">\n");

    for element in elements {
        match &element.kind {
            ElementKind::Container(props) => {
                code.push_str(&format!(
                    "      <div style={{{{ padding: '{}', backgroundColor: '{}', borderRadius: '{}' }}}}>\n",
                    props.padding, props.background_color, props.border_radius
                ));
                code.push_str("      </div>\n");
            }
            ElementKind::Text(props) => {
                code.push_str(&format!(
                    "      <p style={{{{ fontSize: '{}', color: '{}' }}}}>\n",
                    props.font_size, props.color
                ));
                code.push_str(&format!("        {}\n", props.content));
                code.push_str("      </p>\n");
            }
            ElementKind::Button(props) => {
                code.push_str(&format!("      <button>{}</button>\n", props.text));
            }
            ElementKind::Divider(_) => code.push_str("      <hr />\n"),
            ElementKind::Spacer(_) => {}
        }
    }

    code.push_str("    </div>\n  )\n}");
    code
}
