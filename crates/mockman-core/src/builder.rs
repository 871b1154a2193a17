use crate::codegen::component_code;
use crate::design_system::DesignSystemStore;
use crate::ids::new_id;
use crate::tokens::{
    ComponentDefinition, ComponentKind, ComponentPatch, NewComponent, SavedElements, TokenSet,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPONENT_NAME: &str = "MyComponent";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Container,
    Text,
    Button,
    Divider,
    Spacer,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Container => "container",
            ElementType::Text => "text",
            ElementType::Button => "button",
            ElementType::Divider => "divider",
            ElementType::Spacer => "spacer",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "container" => Some(ElementType::Container),
            "text" => Some(ElementType::Text),
            "button" => Some(ElementType::Button),
            "divider" => Some(ElementType::Divider),
            "spacer" => Some(ElementType::Spacer),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ElementType::Container => "Container",
            ElementType::Text => "Text",
            ElementType::Button => "Button",
            ElementType::Divider => "Divider",
            ElementType::Spacer => "Spacer",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Row,
    #[default]
    Column,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "row" => Some(Direction::Row),
            "column" => Some(Direction::Column),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "left" => Some(TextAlign::Left),
            "center" => Some(TextAlign::Center),
            "right" => Some(TextAlign::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "horizontal" => Some(Orientation::Horizontal),
            "vertical" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// Vertical margins every element kind accepts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProps {
    pub background_color: String,
    pub padding: String,
    pub border_radius: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    pub gap: String,
    pub direction: Direction,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography_token: Option<String>,
    pub font_size: String,
    pub font_weight: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
    pub text: String,
    pub variant: String,
    pub size: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerProps {
    pub orientation: Orientation,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerProps {
    pub height: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props", rename_all = "snake_case")]
pub enum ElementKind {
    Container(ContainerProps),
    Text(TextProps),
    Button(ButtonProps),
    Divider(DividerProps),
    Spacer(SpacerProps),
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Container(_) => ElementType::Container,
            ElementKind::Text(_) => ElementType::Text,
            ElementKind::Button(_) => ElementType::Button,
            ElementKind::Divider(_) => ElementType::Divider,
            ElementKind::Spacer(_) => ElementType::Spacer,
        }
    }

    /// Properties a freshly dropped element starts with. Container and text
    /// defaults borrow from the current palette and type scale when present.
    pub fn defaults(element_type: ElementType, tokens: &TokenSet) -> Self {
        match element_type {
            ElementType::Container => ElementKind::Container(ContainerProps {
                background_color: tokens
                    .colors
                    .first()
                    .map(|color| color.value.clone())
                    .unwrap_or_else(|| "#ffffff".to_string()),
                padding: "16px".to_string(),
                border_radius: "8px".to_string(),
                border: None,
                width: None,
                height: None,
                gap: "8px".to_string(),
                direction: Direction::Column,
            }),
            ElementType::Text => {
                let token = tokens.typography.get(2);
                ElementKind::Text(TextProps {
                    content: "Sample text".to_string(),
                    typography_token: None,
                    font_size: token
                        .map(|token| token.font_size.clone())
                        .unwrap_or_else(|| "16px".to_string()),
                    font_weight: token
                        .map(|token| token.font_weight.clone())
                        .unwrap_or_else(|| "400".to_string()),
                    color: "#18181b".to_string(),
                    text_align: None,
                })
            }
            ElementType::Button => ElementKind::Button(ButtonProps {
                text: "Click me".to_string(),
                variant: "primary".to_string(),
                size: "md".to_string(),
            }),
            ElementType::Divider => ElementKind::Divider(DividerProps {
                orientation: Orientation::Horizontal,
            }),
            ElementType::Spacer => ElementKind::Spacer(SpacerProps {
                height: "16px".to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentElement {
    pub id: String,
    pub kind: ElementKind,
    #[serde(default)]
    pub spacing: Spacing,
}

impl ComponentElement {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: new_id(),
            kind,
            spacing: Spacing::default(),
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContainerPatch {
    pub background_color: Option<String>,
    pub padding: Option<String>,
    pub border_radius: Option<String>,
    pub border: Option<Option<String>>,
    pub width: Option<Option<String>>,
    pub height: Option<Option<String>>,
    pub gap: Option<String>,
    pub direction: Option<Direction>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextPatch {
    pub content: Option<String>,
    pub typography_token: Option<Option<String>>,
    pub font_size: Option<String>,
    pub font_weight: Option<String>,
    pub color: Option<String>,
    pub text_align: Option<Option<TextAlign>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ButtonPatch {
    pub text: Option<String>,
    pub variant: Option<String>,
    pub size: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ElementPatch {
    Container(ContainerPatch),
    Text(TextPatch),
    Button(ButtonPatch),
    Divider { orientation: Option<Orientation> },
    Spacer { height: Option<String> },
    Spacing(Spacing),
}

fn merge<T>(slot: &mut T, value: &Option<T>)
where
    T: Clone,
{
    if let Some(value) = value {
        *slot = value.clone();
    }
}

impl ElementPatch {
    /// Shallow-merges into `element`. Returns false when the patch targets a
    /// different element kind, in which case nothing changes.
    fn apply(&self, element: &mut ComponentElement) -> bool {
        match (self, &mut element.kind) {
            (ElementPatch::Container(patch), ElementKind::Container(props)) => {
                merge(&mut props.background_color, &patch.background_color);
                merge(&mut props.padding, &patch.padding);
                merge(&mut props.border_radius, &patch.border_radius);
                merge(&mut props.border, &patch.border);
                merge(&mut props.width, &patch.width);
                merge(&mut props.height, &patch.height);
                merge(&mut props.gap, &patch.gap);
                merge(&mut props.direction, &patch.direction);
                true
            }
            (ElementPatch::Text(patch), ElementKind::Text(props)) => {
                merge(&mut props.content, &patch.content);
                merge(&mut props.typography_token, &patch.typography_token);
                merge(&mut props.font_size, &patch.font_size);
                merge(&mut props.font_weight, &patch.font_weight);
                merge(&mut props.color, &patch.color);
                merge(&mut props.text_align, &patch.text_align);
                true
            }
            (ElementPatch::Button(patch), ElementKind::Button(props)) => {
                merge(&mut props.text, &patch.text);
                merge(&mut props.variant, &patch.variant);
                merge(&mut props.size, &patch.size);
                true
            }
            (ElementPatch::Divider { orientation }, ElementKind::Divider(props)) => {
                merge(&mut props.orientation, orientation);
                true
            }
            (ElementPatch::Spacer { height }, ElementKind::Spacer(props)) => {
                merge(&mut props.height, height);
                true
            }
            (ElementPatch::Spacing(spacing), _) => {
                if spacing.margin_top.is_some() {
                    element.spacing.margin_top = spacing.margin_top.clone();
                }
                if spacing.margin_bottom.is_some() {
                    element.spacing.margin_bottom = spacing.margin_bottom.clone();
                }
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Page-local component builder. Nothing here touches the design system until
/// [`Canvas::save`].
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    pub elements: Vec<ComponentElement>,
    pub selected: Option<String>,
    pub component_name: String,
    pub editing_id: Option<String>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            selected: None,
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            editing_id: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, id: &str) -> Option<&ComponentElement> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub fn selected_element(&self) -> Option<&ComponentElement> {
        self.selected.as_deref().and_then(|id| self.element(id))
    }

    pub fn set_name(&mut self, name: &str) {
        self.component_name = name.to_string();
    }

    pub fn add_element(&mut self, element_type: ElementType, tokens: &TokenSet) -> String {
        let element = ComponentElement::new(ElementKind::defaults(element_type, tokens));
        let id = element.id.clone();
        self.elements.push(element);
        self.selected = Some(id.clone());
        id
    }

    pub fn update_element(&mut self, id: &str, patch: &ElementPatch) -> bool {
        let Some(element) = self.elements.iter_mut().find(|element| element.id == id) else {
            return false;
        };
        let applied = patch.apply(element);
        if !applied {
            tracing::debug!(element = id, "patch kind does not match element; ignored");
        }
        applied
    }

    pub fn delete_element(&mut self, id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|element| element.id != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.elements.len() != before
    }

    pub fn move_element(&mut self, id: &str, direction: MoveDirection) -> bool {
        let Some(ix) = self.elements.iter().position(|element| element.id == id) else {
            return false;
        };
        let target = match direction {
            MoveDirection::Up if ix > 0 => ix - 1,
            MoveDirection::Down if ix + 1 < self.elements.len() => ix + 1,
            _ => return false,
        };
        self.elements.swap(ix, target);
        true
    }

    pub fn code(&self) -> String {
        component_code(&self.component_name, &self.elements)
    }

    /// Reopens a saved component. Components without stored builder elements
    /// leave the canvas untouched.
    pub fn load(&mut self, component: &ComponentDefinition) -> bool {
        let Some(saved) = component.builder.as_ref() else {
            return false;
        };
        self.elements = saved.elements.clone();
        self.component_name = component.name.clone();
        self.editing_id = Some(component.id.clone());
        self.selected = None;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Writes the canvas into the design system as a custom component, then
    /// resets. Blank names and empty canvases are refused.
    pub fn save(&mut self, store: &mut DesignSystemStore) -> Option<String> {
        let name = self.component_name.trim();
        if name.is_empty() || self.elements.is_empty() {
            return None;
        }
        let code = self.code();
        let builder = SavedElements::new(self.elements.clone());

        let editing = self
            .editing_id
            .clone()
            .filter(|id| store.component(id).is_some());
        let id = match editing {
            Some(id) => {
                store.update_component(
                    &id,
                    ComponentPatch {
                        name: Some(self.component_name.clone()),
                        kind: Some(ComponentKind::Custom),
                        code: Some(Some(code)),
                        builder: Some(Some(builder)),
                    },
                );
                id
            }
            None => store.add_component(NewComponent {
                name: self.component_name.clone(),
                kind: ComponentKind::Custom,
                code: Some(code),
                builder: Some(builder),
            })?,
        };
        tracing::info!(component = %id, elements = self.elements.len(), "saved component");
        self.reset();
        Some(id)
    }

    /// Delete a saved component; resets the canvas if it was being edited.
    pub fn delete_saved(&mut self, store: &mut DesignSystemStore, id: &str) {
        store.delete_component(id);
        if self.editing_id.as_deref() == Some(id) {
            self.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design_system::DesignSystemState;
    use crate::tokens::{ColorToken, TypographyToken};

    fn canvas_with(types: &[ElementType]) -> (Canvas, Vec<String>) {
        let mut canvas = Canvas::new();
        let tokens = TokenSet::default();
        let ids = types
            .iter()
            .map(|element_type| canvas.add_element(*element_type, &tokens))
            .collect();
        (canvas, ids)
    }

    fn order(canvas: &Canvas) -> Vec<&str> {
        canvas
            .elements
            .iter()
            .map(|element| element.id.as_str())
            .collect()
    }

    #[test]
    fn add_element_uses_fallback_defaults_and_selects() {
        let (canvas, ids) = canvas_with(&[ElementType::Container, ElementType::Text]);
        assert_eq!(canvas.selected.as_deref(), Some(ids[1].as_str()));
        match &canvas.elements[0].kind {
            ElementKind::Container(props) => {
                assert_eq!(props.background_color, "#ffffff");
                assert_eq!(props.padding, "16px");
                assert_eq!(props.direction, Direction::Column);
            }
            other => panic!("unexpected kind {other:?}"),
        }
        match &canvas.elements[1].kind {
            ElementKind::Text(props) => {
                assert_eq!(props.font_size, "16px");
                assert_eq!(props.font_weight, "400");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn defaults_follow_tokens() {
        let tokens = TokenSet {
            colors: vec![ColorToken {
                id: "c".into(),
                name: "brand".into(),
                value: "#3B82F6".into(),
                description: None,
            }],
            semantic_colors: Vec::new(),
            typography: ["xs", "sm", "base"]
                .iter()
                .enumerate()
                .map(|(ix, name)| TypographyToken {
                    id: name.to_string(),
                    name: name.to_string(),
                    font_size: format!("{}px", 12 + ix * 2),
                    line_height: "1.5".into(),
                    font_weight: "500".into(),
                    letter_spacing: None,
                    description: None,
                })
                .collect(),
        };
        let ElementKind::Container(container) = ElementKind::defaults(ElementType::Container, &tokens)
        else {
            panic!("container");
        };
        assert_eq!(container.background_color, "#3B82F6");
        let ElementKind::Text(text) = ElementKind::defaults(ElementType::Text, &tokens) else {
            panic!("text");
        };
        assert_eq!(text.font_size, "16px");
        assert_eq!(text.font_weight, "500");
    }

    #[test]
    fn update_element_merges_matching_kind() {
        let (mut canvas, ids) = canvas_with(&[ElementType::Button]);
        let updated = canvas.update_element(
            &ids[0],
            &ElementPatch::Button(ButtonPatch {
                text: Some("Buy".into()),
                ..Default::default()
            }),
        );
        assert!(updated);
        let ElementKind::Button(props) = &canvas.elements[0].kind else {
            panic!("button");
        };
        assert_eq!(props.text, "Buy");
        assert_eq!(props.variant, "primary");
    }

    #[test]
    fn update_element_ignores_mismatched_kind() {
        let (mut canvas, ids) = canvas_with(&[ElementType::Divider]);
        let before = canvas.clone();
        let updated = canvas.update_element(
            &ids[0],
            &ElementPatch::Text(TextPatch {
                content: Some("nope".into()),
                ..Default::default()
            }),
        );
        assert!(!updated);
        assert_eq!(canvas, before);
    }

    #[test]
    fn spacing_patch_applies_to_any_kind() {
        let (mut canvas, ids) = canvas_with(&[ElementType::Spacer]);
        canvas.update_element(
            &ids[0],
            &ElementPatch::Spacing(Spacing {
                margin_top: Some("4px".into()),
                margin_bottom: None,
            }),
        );
        assert_eq!(canvas.elements[0].spacing.margin_top.as_deref(), Some("4px"));
        assert_eq!(canvas.elements[0].spacing.margin_bottom, None);
    }

    #[test]
    fn delete_element_clears_selection() {
        let (mut canvas, ids) = canvas_with(&[ElementType::Text, ElementType::Button]);
        assert!(canvas.delete_element(&ids[1]));
        assert_eq!(canvas.selected, None);
        assert_eq!(order(&canvas), vec![ids[0].as_str()]);
        assert!(!canvas.delete_element("missing"));
    }

    #[test]
    fn move_up_at_top_is_noop() {
        let (mut canvas, ids) = canvas_with(&[
            ElementType::Text,
            ElementType::Button,
            ElementType::Divider,
        ]);
        let before = canvas.clone();
        assert!(!canvas.move_element(&ids[0], MoveDirection::Up));
        assert_eq!(canvas, before);
    }

    #[test]
    fn move_down_at_bottom_is_noop() {
        let (mut canvas, ids) = canvas_with(&[ElementType::Text, ElementType::Button]);
        let before = canvas.clone();
        assert!(!canvas.move_element(&ids[1], MoveDirection::Down));
        assert_eq!(canvas, before);
    }

    #[test]
    fn move_swaps_adjacent_elements() {
        let (mut canvas, ids) = canvas_with(&[
            ElementType::Text,
            ElementType::Button,
            ElementType::Divider,
        ]);
        assert!(canvas.move_element(&ids[2], MoveDirection::Up));
        assert_eq!(
            order(&canvas),
            vec![ids[0].as_str(), ids[2].as_str(), ids[1].as_str()]
        );
        assert!(canvas.move_element(&ids[0], MoveDirection::Down));
        assert_eq!(
            order(&canvas),
            vec![ids[2].as_str(), ids[0].as_str(), ids[1].as_str()]
        );
    }

    #[test]
    fn save_adds_then_updates_component() {
        let mut store = DesignSystemStore::new(DesignSystemState::default());
        store.initialize("Brand", None);

        let (mut canvas, _) = canvas_with(&[ElementType::Text, ElementType::Button]);
        canvas.set_name("Hero");
        let id = canvas.save(&mut store).expect("saved");
        assert!(canvas.is_empty());
        assert_eq!(canvas.component_name, DEFAULT_COMPONENT_NAME);

        let saved = store.component(&id).expect("component").clone();
        assert_eq!(saved.kind, ComponentKind::Custom);
        assert_eq!(saved.builder.as_ref().map(|b| b.count), Some(2));
        assert!(saved.code.as_deref().expect("code").starts_with("function Hero()"));

        assert!(canvas.load(&saved));
        assert_eq!(canvas.editing_id.as_deref(), Some(id.as_str()));
        canvas.add_element(ElementType::Divider, &TokenSet::default());
        let again = canvas.save(&mut store).expect("updated");
        assert_eq!(again, id);

        let system = store.design_system().expect("system");
        assert_eq!(system.components.len(), 1);
        assert_eq!(
            system.components[0].builder.as_ref().map(|b| b.count),
            Some(3)
        );
    }

    #[test]
    fn save_refuses_blank_name_or_empty_canvas() {
        let mut store = DesignSystemStore::new(DesignSystemState::default());
        store.initialize("Brand", None);

        let mut empty = Canvas::new();
        assert_eq!(empty.save(&mut store), None);

        let (mut unnamed, _) = canvas_with(&[ElementType::Text]);
        unnamed.set_name("   ");
        assert_eq!(unnamed.save(&mut store), None);
        assert_eq!(unnamed.elements.len(), 1);
        assert!(store.design_system().expect("system").components.is_empty());
    }

    #[test]
    fn load_without_saved_elements_keeps_canvas() {
        let (mut canvas, _) = canvas_with(&[ElementType::Text]);
        let before = canvas.clone();
        let plain = ComponentDefinition {
            id: "x".into(),
            name: "Plain".into(),
            kind: ComponentKind::Button,
            code: None,
            builder: None,
        };
        assert!(!canvas.load(&plain));
        assert_eq!(canvas, before);
    }

    #[test]
    fn deleting_edited_component_resets_canvas() {
        let mut store = DesignSystemStore::new(DesignSystemState::default());
        store.initialize("Brand", None);
        let (mut canvas, _) = canvas_with(&[ElementType::Text]);
        let id = canvas.save(&mut store).expect("saved");
        let saved = store.component(&id).expect("component").clone();
        canvas.load(&saved);

        canvas.delete_saved(&mut store, &id);

        assert!(canvas.is_empty());
        assert_eq!(canvas.editing_id, None);
        assert!(store.component(&id).is_none());
    }

    #[test]
    fn element_type_round_trips_through_str() {
        for element_type in [
            ElementType::Container,
            ElementType::Text,
            ElementType::Button,
            ElementType::Divider,
            ElementType::Spacer,
        ] {
            assert_eq!(ElementType::from_str(element_type.as_str()), Some(element_type));
        }
    }
}
