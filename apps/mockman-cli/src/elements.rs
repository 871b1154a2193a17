use anyhow::{anyhow, bail, Result};
use mockman_core::builder::{
    ButtonPatch, ContainerPatch, Direction, ElementPatch, ElementType, Orientation, Spacing,
    TextAlign, TextPatch,
};

/// One `--element` argument: the element type plus the patches to apply on
/// top of its defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementArg {
    pub element_type: ElementType,
    pub patches: Vec<ElementPatch>,
}

/// Parses `type[:key=value,...]`. Margins (`mt`, `mb`) work on every type.
pub fn parse_element(raw: &str) -> Result<ElementArg> {
    let (kind, rest) = raw.split_once(':').unwrap_or((raw, ""));
    let element_type = ElementType::from_str(kind.trim())
        .ok_or_else(|| anyhow!("unknown element type `{kind}`"))?;

    let mut container = ContainerPatch::default();
    let mut text = TextPatch::default();
    let mut button = ButtonPatch::default();
    let mut orientation = None;
    let mut height = None;
    let mut spacing = Spacing::default();

    for pair in rest.split(',').filter(|pair| !pair.trim().is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("expected key=value, got `{pair}`"))?;
        let (key, value) = (key.trim(), value.trim().to_string());
        match (element_type, key) {
            (_, "mt" | "margin-top") => spacing.margin_top = Some(value),
            (_, "mb" | "margin-bottom") => spacing.margin_bottom = Some(value),
            (ElementType::Container, "background" | "bg") => {
                container.background_color = Some(value)
            }
            (ElementType::Container, "padding") => container.padding = Some(value),
            (ElementType::Container, "radius") => container.border_radius = Some(value),
            (ElementType::Container, "border") => container.border = Some(Some(value)),
            (ElementType::Container, "width") => container.width = Some(Some(value)),
            (ElementType::Container, "height") => container.height = Some(Some(value)),
            (ElementType::Container, "gap") => container.gap = Some(value),
            (ElementType::Container, "direction") => {
                container.direction = Some(
                    Direction::from_str(&value)
                        .ok_or_else(|| anyhow!("direction must be row or column"))?,
                )
            }
            (ElementType::Text, "content") => text.content = Some(value),
            (ElementType::Text, "token") => text.typography_token = Some(Some(value)),
            (ElementType::Text, "size") => text.font_size = Some(value),
            (ElementType::Text, "weight") => text.font_weight = Some(value),
            (ElementType::Text, "color") => text.color = Some(value),
            (ElementType::Text, "align") => {
                text.text_align = Some(Some(
                    TextAlign::from_str(&value)
                        .ok_or_else(|| anyhow!("align must be left, center or right"))?,
                ))
            }
            (ElementType::Button, "text") => button.text = Some(value),
            (ElementType::Button, "variant") => button.variant = Some(value),
            (ElementType::Button, "size") => button.size = Some(value),
            (ElementType::Divider, "orientation") => {
                orientation = Some(
                    Orientation::from_str(&value)
                        .ok_or_else(|| anyhow!("orientation must be horizontal or vertical"))?,
                )
            }
            (ElementType::Spacer, "height") => height = Some(value),
            _ => bail!("`{key}` is not a {} property", element_type.as_str()),
        }
    }

    let kind_patch = match element_type {
        ElementType::Container => ElementPatch::Container(container),
        ElementType::Text => ElementPatch::Text(text),
        ElementType::Button => ElementPatch::Button(button),
        ElementType::Divider => ElementPatch::Divider { orientation },
        ElementType::Spacer => ElementPatch::Spacer { height },
    };
    let mut patches = vec![kind_patch];
    if spacing != Spacing::default() {
        patches.push(ElementPatch::Spacing(spacing));
    }
    Ok(ElementArg {
        element_type,
        patches,
    })
}
