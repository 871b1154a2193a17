use crate::builder::{ComponentElement, ElementKind, Orientation};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewNode {
    pub tag: &'static str,
    pub styles: Vec<(&'static str, String)>,
    pub content: Option<String>,
    pub selected: bool,
}

impl PreviewNode {
    fn new(tag: &'static str, selected: bool) -> Self {
        Self {
            tag,
            styles: Vec::new(),
            content: None,
            selected,
        }
    }

    fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((property, value.into()));
        self
    }

    fn style_opt(self, property: &'static str, value: Option<&String>) -> Self {
        match value {
            Some(value) => self.style(property, value.clone()),
            None => self,
        }
    }

    fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn to_html(&self) -> String {
        let style = self
            .styles
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        let class = if self.selected {
            " class=\"selected\""
        } else {
            ""
        };
        format!(
            "<{tag} style=\"{style}\"{class}>{content}</{tag}>",
            tag = self.tag,
            content = self.content.as_deref().unwrap_or_default()
        )
    }
}

/// Visual preview of a single builder element. Spacers have no preview.
pub fn render(element: &ComponentElement, selected: bool) -> Option<PreviewNode> {
    let margin_top = element.spacing.margin_top.as_ref();
    let margin_bottom = element.spacing.margin_bottom.as_ref();

    let node = match &element.kind {
        ElementKind::Container(props) => PreviewNode::new("div", selected)
            .style("background-color", props.background_color.clone())
            .style("padding", props.padding.clone())
            .style("border-radius", props.border_radius.clone())
            .style_opt("border", props.border.as_ref())
            .style("display", "flex")
            .style("flex-direction", props.direction.as_str())
            .style("gap", props.gap.clone())
            .content("Container"),
        ElementKind::Text(props) => {
            let content = if props.content.is_empty() {
                "Sample text".to_string()
            } else {
                props.content.clone()
            };
            PreviewNode::new("div", selected)
                .style("font-size", props.font_size.clone())
                .style("font-weight", props.font_weight.clone())
                .style("color", props.color.clone())
                .style_opt(
                    "text-align",
                    props.text_align.map(|align| align.as_str().to_string()).as_ref(),
                )
                .content(content)
        }
        ElementKind::Button(props) => {
            let primary = props.variant == "primary";
            let text = if props.text.is_empty() {
                "Button".to_string()
            } else {
                props.text.clone()
            };
            PreviewNode::new("button", selected)
                .style("padding", "10px 16px")
                .style("border-radius", "8px")
                .style("background-color", if primary { "#18181b" } else { "#f4f4f5" })
                .style("color", if primary { "#ffffff" } else { "#18181b" })
                .style(
                    "border",
                    if props.variant == "outline" {
                        "1px solid #e4e4e7"
                    } else {
                        "none"
                    },
                )
                .style("font-weight", "500")
                .content(text)
        }
        ElementKind::Divider(props) => {
            let horizontal = props.orientation == Orientation::Horizontal;
            PreviewNode::new("div", selected)
                .style("height", if horizontal { "1px" } else { "100%" })
                .style("width", if horizontal { "100%" } else { "1px" })
                .style("background-color", "#e4e4e7")
        }
        ElementKind::Spacer(_) => return None,
    };

    Some(
        node.style_opt("margin-top", margin_top)
            .style_opt("margin-bottom", margin_bottom),
    )
}

pub fn render_all(elements: &[ComponentElement], selected: Option<&str>) -> Vec<PreviewNode> {
    elements
        .iter()
        .filter_map(|element| render(element, selected == Some(element.id.as_str())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{render, render_all};
    use crate::builder::{
        ButtonProps, ComponentElement, ElementKind, ElementType, Orientation, Spacing,
    };
    use crate::tokens::TokenSet;

    fn element(element_type: ElementType) -> ComponentElement {
        ComponentElement::new(ElementKind::defaults(element_type, &TokenSet::default()))
    }

    #[test]
    fn container_preview_is_flex_box_with_label() {
        let node = render(&element(ElementType::Container), false).expect("node");
        assert_eq!(node.tag, "div");
        assert_eq!(node.style_value("display"), Some("flex"));
        assert_eq!(node.style_value("flex-direction"), Some("column"));
        assert_eq!(node.content.as_deref(), Some("Container"));
    }

    #[test]
    fn button_preview_follows_variant() {
        let mut outline = element(ElementType::Button);
        outline.kind = ElementKind::Button(ButtonProps {
            text: String::new(),
            variant: "outline".into(),
            size: "md".into(),
        });
        let node = render(&outline, true).expect("node");
        assert_eq!(node.style_value("border"), Some("1px solid #e4e4e7"));
        assert_eq!(node.style_value("background-color"), Some("#f4f4f5"));
        assert_eq!(node.content.as_deref(), Some("Button"));
        assert!(node.selected);

        let primary = render(&element(ElementType::Button), false).expect("node");
        assert_eq!(primary.style_value("background-color"), Some("#18181b"));
        assert_eq!(primary.style_value("color"), Some("#ffffff"));
    }

    #[test]
    fn vertical_divider_is_one_pixel_wide() {
        let mut divider = element(ElementType::Divider);
        if let ElementKind::Divider(props) = &mut divider.kind {
            props.orientation = Orientation::Vertical;
        }
        let node = render(&divider, false).expect("node");
        assert_eq!(node.style_value("width"), Some("1px"));
        assert_eq!(node.style_value("height"), Some("100%"));
    }

    #[test]
    fn spacer_has_no_preview() {
        assert!(render(&element(ElementType::Spacer), false).is_none());
        let elements = vec![element(ElementType::Spacer), element(ElementType::Text)];
        assert_eq!(render_all(&elements, None).len(), 1);
    }

    #[test]
    fn margins_are_appended_and_serialized() {
        let mut text = element(ElementType::Text);
        text.spacing = Spacing {
            margin_top: Some("8px".into()),
            margin_bottom: None,
        };
        let node = render(&text, false).expect("node");
        assert_eq!(node.style_value("margin-top"), Some("8px"));
        assert_eq!(
            node.to_html(),
            "<div style=\"font-size: 16px; font-weight: 400; color: #18181b; margin-top: 8px\">Sample text</div>"
        );
    }
}
