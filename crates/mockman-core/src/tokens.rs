use crate::builder::ComponentElement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColorToken {
    pub id: String,
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// What a semantic color points at. References are never checked against the
/// base palette, so a deleted base token leaves the reference dangling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SemanticColorValue {
    Color(String),
    Token(String),
}

impl SemanticColorValue {
    pub fn resolve<'a>(&'a self, colors: &'a [ColorToken]) -> Option<&'a str> {
        match self {
            SemanticColorValue::Color(value) => Some(value.as_str()),
            SemanticColorValue::Token(id) => colors
                .iter()
                .find(|color| &color.id == id)
                .map(|color| color.value.as_str()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SemanticColorToken {
    pub id: String,
    pub name: String,
    pub value: SemanticColorValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypographyToken {
    pub id: String,
    pub name: String,
    pub font_size: String,
    pub line_height: String,
    pub font_weight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    pub colors: Vec<ColorToken>,
    pub semantic_colors: Vec<SemanticColorToken>,
    pub typography: Vec<TypographyToken>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub tokens: TokenSet,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Button,
    Input,
    Card,
    #[default]
    Custom,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::Input => "input",
            ComponentKind::Card => "card",
            ComponentKind::Custom => "custom",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "button" => Some(ComponentKind::Button),
            "input" => Some(ComponentKind::Input),
            "card" => Some(ComponentKind::Card),
            "custom" => Some(ComponentKind::Custom),
            _ => None,
        }
    }
}

/// Builder elements stashed on a saved component so it can be reopened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedElements {
    pub count: usize,
    pub elements: Vec<ComponentElement>,
}

impl SavedElements {
    pub fn new(elements: Vec<ComponentElement>) -> Self {
        Self {
            count: elements.len(),
            elements,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder: Option<SavedElements>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub theme: Theme,
    pub components: Vec<ComponentDefinition>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewColorToken {
    pub name: String,
    pub value: String,
    pub description: Option<String>,
}

impl NewColorToken {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn into_token(self, id: String) -> ColorToken {
        ColorToken {
            id,
            name: self.name,
            value: self.value,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSemanticColorToken {
    pub name: String,
    pub value: SemanticColorValue,
    pub description: Option<String>,
}

impl NewSemanticColorToken {
    pub(crate) fn into_token(self, id: String) -> SemanticColorToken {
        SemanticColorToken {
            id,
            name: self.name,
            value: self.value,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTypographyToken {
    pub name: String,
    pub font_size: String,
    pub line_height: String,
    pub font_weight: String,
    pub letter_spacing: Option<String>,
    pub description: Option<String>,
}

impl NewTypographyToken {
    pub fn new(
        name: impl Into<String>,
        font_size: impl Into<String>,
        line_height: impl Into<String>,
        font_weight: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            font_size: font_size.into(),
            line_height: line_height.into(),
            font_weight: font_weight.into(),
            letter_spacing: None,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn into_token(self, id: String) -> TypographyToken {
        TypographyToken {
            id,
            name: self.name,
            font_size: self.font_size,
            line_height: self.line_height,
            font_weight: self.font_weight,
            letter_spacing: self.letter_spacing,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewComponent {
    pub name: String,
    pub kind: ComponentKind,
    pub code: Option<String>,
    pub builder: Option<SavedElements>,
}

impl NewComponent {
    pub(crate) fn into_definition(self, id: String) -> ComponentDefinition {
        ComponentDefinition {
            id,
            name: self.name,
            kind: self.kind,
            code: self.code,
            builder: self.builder,
        }
    }
}

// Patches merge shallowly: `None` keeps the current value. Optional fields
// take `Some(None)` to clear.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTokenPatch {
    pub name: Option<String>,
    pub value: Option<String>,
    pub description: Option<Option<String>>,
}

impl ColorTokenPatch {
    pub(crate) fn apply(&self, token: &ColorToken) -> ColorToken {
        ColorToken {
            id: token.id.clone(),
            name: self.name.clone().unwrap_or_else(|| token.name.clone()),
            value: self.value.clone().unwrap_or_else(|| token.value.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| token.description.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SemanticColorTokenPatch {
    pub name: Option<String>,
    pub value: Option<SemanticColorValue>,
    pub description: Option<Option<String>>,
}

impl SemanticColorTokenPatch {
    pub(crate) fn apply(&self, token: &SemanticColorToken) -> SemanticColorToken {
        SemanticColorToken {
            id: token.id.clone(),
            name: self.name.clone().unwrap_or_else(|| token.name.clone()),
            value: self.value.clone().unwrap_or_else(|| token.value.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| token.description.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypographyTokenPatch {
    pub name: Option<String>,
    pub font_size: Option<String>,
    pub line_height: Option<String>,
    pub font_weight: Option<String>,
    pub letter_spacing: Option<Option<String>>,
    pub description: Option<Option<String>>,
}

impl TypographyTokenPatch {
    pub(crate) fn apply(&self, token: &TypographyToken) -> TypographyToken {
        TypographyToken {
            id: token.id.clone(),
            name: self.name.clone().unwrap_or_else(|| token.name.clone()),
            font_size: self
                .font_size
                .clone()
                .unwrap_or_else(|| token.font_size.clone()),
            line_height: self
                .line_height
                .clone()
                .unwrap_or_else(|| token.line_height.clone()),
            font_weight: self
                .font_weight
                .clone()
                .unwrap_or_else(|| token.font_weight.clone()),
            letter_spacing: self
                .letter_spacing
                .clone()
                .unwrap_or_else(|| token.letter_spacing.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| token.description.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentPatch {
    pub name: Option<String>,
    pub kind: Option<ComponentKind>,
    pub code: Option<Option<String>>,
    pub builder: Option<Option<SavedElements>>,
}

impl ComponentPatch {
    pub(crate) fn apply(&self, component: &ComponentDefinition) -> ComponentDefinition {
        ComponentDefinition {
            id: component.id.clone(),
            name: self.name.clone().unwrap_or_else(|| component.name.clone()),
            kind: self.kind.unwrap_or(component.kind),
            code: self.code.clone().unwrap_or_else(|| component.code.clone()),
            builder: self
                .builder
                .clone()
                .unwrap_or_else(|| component.builder.clone()),
        }
    }
}
