use crate::clock::{Clock, SystemClock};
use crate::ids::new_id;
use crate::tokens::{
    ColorToken, ColorTokenPatch, ComponentDefinition, ComponentPatch, DesignSystem,
    NewColorToken, NewComponent, NewSemanticColorToken, NewTypographyToken, SemanticColorToken,
    SemanticColorTokenPatch, Theme, TokenSet, TypographyToken, TypographyTokenPatch,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

pub const DEFAULT_THEME_NAME: &str = "Default Theme";
pub const PLACEHOLDER_NAME: &str = "My Design System";
pub const PLACEHOLDER_DESCRIPTION: &str = "A beautiful design system built with Mockman";
pub const UNTITLED_NAME: &str = "Untitled Design System";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemState {
    pub design_system: Option<DesignSystem>,
}

/// Every mutation of the design system store. Identifiers for new entries are
/// minted before dispatch so that [`reduce`] stays deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignSystemAction {
    Initialize {
        id: String,
        theme_id: String,
        name: String,
        description: Option<String>,
    },
    UpdateInfo {
        name: String,
        description: Option<String>,
    },
    Delete,
    AddColor(ColorToken),
    UpdateColor(String, ColorTokenPatch),
    DeleteColor(String),
    AddSemanticColor(SemanticColorToken),
    UpdateSemanticColor(String, SemanticColorTokenPatch),
    DeleteSemanticColor(String),
    AddTypography(TypographyToken),
    UpdateTypography(String, TypographyTokenPatch),
    DeleteTypography(String),
    AddComponent(ComponentDefinition),
    UpdateComponent(String, ComponentPatch),
    DeleteComponent(String),
}

impl DesignSystemAction {
    pub fn name(&self) -> &'static str {
        match self {
            DesignSystemAction::Initialize { .. } => "initialize",
            DesignSystemAction::UpdateInfo { .. } => "update_info",
            DesignSystemAction::Delete => "delete",
            DesignSystemAction::AddColor(_) => "add_color",
            DesignSystemAction::UpdateColor(..) => "update_color",
            DesignSystemAction::DeleteColor(_) => "delete_color",
            DesignSystemAction::AddSemanticColor(_) => "add_semantic_color",
            DesignSystemAction::UpdateSemanticColor(..) => "update_semantic_color",
            DesignSystemAction::DeleteSemanticColor(_) => "delete_semantic_color",
            DesignSystemAction::AddTypography(_) => "add_typography",
            DesignSystemAction::UpdateTypography(..) => "update_typography",
            DesignSystemAction::DeleteTypography(_) => "delete_typography",
            DesignSystemAction::AddComponent(_) => "add_component",
            DesignSystemAction::UpdateComponent(..) => "update_component",
            DesignSystemAction::DeleteComponent(_) => "delete_component",
        }
    }
}

fn updated<T: Clone>(items: &[T], id: &str, id_of: fn(&T) -> &str, f: impl Fn(&T) -> T) -> Vec<T> {
    items
        .iter()
        .map(|item| if id_of(item) == id { f(item) } else { item.clone() })
        .collect()
}

fn removed<T: Clone>(items: &[T], id: &str, id_of: fn(&T) -> &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| id_of(item) != id)
        .cloned()
        .collect()
}

fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

fn with_tokens(system: &DesignSystem, tokens: TokenSet, now: DateTime<Utc>) -> DesignSystem {
    DesignSystem {
        theme: Theme {
            tokens,
            ..system.theme.clone()
        },
        updated_at: now,
        ..system.clone()
    }
}

/// Applies one action and returns the next state. The input is never mutated.
/// Actions other than `Initialize` and `Delete` leave a missing design system
/// missing.
pub fn reduce(
    state: &DesignSystemState,
    action: DesignSystemAction,
    now: DateTime<Utc>,
) -> DesignSystemState {
    let system = match action {
        DesignSystemAction::Initialize {
            id,
            theme_id,
            name,
            description,
        } => {
            return DesignSystemState {
                design_system: Some(DesignSystem {
                    id,
                    name,
                    description,
                    theme: Theme {
                        id: theme_id,
                        name: DEFAULT_THEME_NAME.to_string(),
                        tokens: TokenSet::default(),
                    },
                    components: Vec::new(),
                    created_at: now,
                    updated_at: now,
                }),
            };
        }
        DesignSystemAction::Delete => return DesignSystemState::default(),
        action => {
            let Some(system) = state.design_system.as_ref() else {
                return state.clone();
            };
            reduce_existing(system, action, now)
        }
    };

    DesignSystemState {
        design_system: Some(system),
    }
}

fn reduce_existing(
    system: &DesignSystem,
    action: DesignSystemAction,
    now: DateTime<Utc>,
) -> DesignSystem {
    let tokens = &system.theme.tokens;
    match action {
        DesignSystemAction::UpdateInfo { name, description } => DesignSystem {
            name,
            description,
            updated_at: now,
            ..system.clone()
        },
        DesignSystemAction::AddColor(token) => with_tokens(
            system,
            TokenSet {
                colors: appended(&tokens.colors, token),
                ..tokens.clone()
            },
            now,
        ),
        DesignSystemAction::UpdateColor(id, patch) => with_tokens(
            system,
            TokenSet {
                colors: updated(&tokens.colors, &id, |c| c.id.as_str(), |c| patch.apply(c)),
                ..tokens.clone()
            },
            now,
        ),
        DesignSystemAction::DeleteColor(id) => with_tokens(
            system,
            TokenSet {
                colors: removed(&tokens.colors, &id, |c| c.id.as_str()),
                ..tokens.clone()
            },
            now,
        ),
        DesignSystemAction::AddSemanticColor(token) => with_tokens(
            system,
            TokenSet {
                semantic_colors: appended(&tokens.semantic_colors, token),
                ..tokens.clone()
            },
            now,
        ),
        DesignSystemAction::UpdateSemanticColor(id, patch) => with_tokens(
            system,
            TokenSet {
                semantic_colors: updated(
                    &tokens.semantic_colors,
                    &id,
                    |c| c.id.as_str(),
                    |c| patch.apply(c),
                ),
                ..tokens.clone()
            },
            now,
        ),
        DesignSystemAction::DeleteSemanticColor(id) => with_tokens(
            system,
            TokenSet {
                semantic_colors: removed(&tokens.semantic_colors, &id, |c| c.id.as_str()),
                ..tokens.clone()
            },
            now,
        ),
        DesignSystemAction::AddTypography(token) => with_tokens(
            system,
            TokenSet {
                typography: appended(&tokens.typography, token),
                ..tokens.clone()
            },
            now,
        ),
        DesignSystemAction::UpdateTypography(id, patch) => with_tokens(
            system,
            TokenSet {
                typography: updated(&tokens.typography, &id, |t| t.id.as_str(), |t| patch.apply(t)),
                ..tokens.clone()
            },
            now,
        ),
        DesignSystemAction::DeleteTypography(id) => with_tokens(
            system,
            TokenSet {
                typography: removed(&tokens.typography, &id, |t| t.id.as_str()),
                ..tokens.clone()
            },
            now,
        ),
        DesignSystemAction::AddComponent(component) => DesignSystem {
            components: appended(&system.components, component),
            updated_at: now,
            ..system.clone()
        },
        DesignSystemAction::UpdateComponent(id, patch) => DesignSystem {
            components: updated(&system.components, &id, |c| c.id.as_str(), |c| patch.apply(c)),
            updated_at: now,
            ..system.clone()
        },
        DesignSystemAction::DeleteComponent(id) => DesignSystem {
            components: removed(&system.components, &id, |c| c.id.as_str()),
            updated_at: now,
            ..system.clone()
        },
        DesignSystemAction::Initialize { .. } | DesignSystemAction::Delete => system.clone(),
    }
}

/// Holds the design system singleton and dispatches actions through [`reduce`].
pub struct DesignSystemStore {
    state: DesignSystemState,
    clock: Rc<dyn Clock>,
}

impl DesignSystemStore {
    pub fn new(state: DesignSystemState) -> Self {
        Self::with_clock(state, Rc::new(SystemClock))
    }

    pub fn with_clock(state: DesignSystemState, clock: Rc<dyn Clock>) -> Self {
        Self { state, clock }
    }

    pub fn state(&self) -> &DesignSystemState {
        &self.state
    }

    pub fn design_system(&self) -> Option<&DesignSystem> {
        self.state.design_system.as_ref()
    }

    pub fn tokens(&self) -> Option<&TokenSet> {
        self.design_system().map(|system| &system.theme.tokens)
    }

    pub fn component(&self, id: &str) -> Option<&ComponentDefinition> {
        self.design_system()?
            .components
            .iter()
            .find(|component| component.id == id)
    }

    pub fn dispatch(&mut self, action: DesignSystemAction) {
        let name = action.name();
        let missing = self.state.design_system.is_none();
        if missing
            && !matches!(
                action,
                DesignSystemAction::Initialize { .. } | DesignSystemAction::Delete
            )
        {
            tracing::warn!(action = name, "no design system; action ignored");
            return;
        }
        self.state = reduce(&self.state, action, self.clock.now());
        tracing::debug!(action = name, "design system updated");
    }

    /// Creates a fresh design system, replacing any existing one.
    pub fn initialize(&mut self, name: &str, description: Option<&str>) -> String {
        let id = new_id();
        self.dispatch(DesignSystemAction::Initialize {
            id: id.clone(),
            theme_id: new_id(),
            name: name.to_string(),
            description: description.map(str::to_string),
        });
        id
    }

    /// Creates the placeholder design system only when none exists.
    pub fn ensure_initialized(&mut self) -> bool {
        if self.state.design_system.is_some() {
            return false;
        }
        self.initialize(PLACEHOLDER_NAME, Some(PLACEHOLDER_DESCRIPTION));
        tracing::info!("initialized placeholder design system");
        true
    }

    pub fn create_manually(&mut self) -> String {
        self.initialize(UNTITLED_NAME, Some(""))
    }

    pub fn update_info(&mut self, name: &str, description: Option<&str>) {
        self.dispatch(DesignSystemAction::UpdateInfo {
            name: name.to_string(),
            description: description.map(str::to_string),
        });
    }

    pub fn delete(&mut self) {
        self.dispatch(DesignSystemAction::Delete);
    }

    pub fn add_color_token(&mut self, token: NewColorToken) -> Option<String> {
        self.design_system()?;
        let id = new_id();
        self.dispatch(DesignSystemAction::AddColor(token.into_token(id.clone())));
        Some(id)
    }

    pub fn update_color_token(&mut self, id: &str, patch: ColorTokenPatch) {
        self.dispatch(DesignSystemAction::UpdateColor(id.to_string(), patch));
    }

    pub fn delete_color_token(&mut self, id: &str) {
        self.dispatch(DesignSystemAction::DeleteColor(id.to_string()));
    }

    pub fn add_semantic_color_token(&mut self, token: NewSemanticColorToken) -> Option<String> {
        self.design_system()?;
        let id = new_id();
        self.dispatch(DesignSystemAction::AddSemanticColor(
            token.into_token(id.clone()),
        ));
        Some(id)
    }

    pub fn update_semantic_color_token(&mut self, id: &str, patch: SemanticColorTokenPatch) {
        self.dispatch(DesignSystemAction::UpdateSemanticColor(id.to_string(), patch));
    }

    pub fn delete_semantic_color_token(&mut self, id: &str) {
        self.dispatch(DesignSystemAction::DeleteSemanticColor(id.to_string()));
    }

    pub fn add_typography_token(&mut self, token: NewTypographyToken) -> Option<String> {
        self.design_system()?;
        let id = new_id();
        self.dispatch(DesignSystemAction::AddTypography(token.into_token(id.clone())));
        Some(id)
    }

    pub fn update_typography_token(&mut self, id: &str, patch: TypographyTokenPatch) {
        self.dispatch(DesignSystemAction::UpdateTypography(id.to_string(), patch));
    }

    pub fn delete_typography_token(&mut self, id: &str) {
        self.dispatch(DesignSystemAction::DeleteTypography(id.to_string()));
    }

    /// Appends the full modular scale for `base`/`ratio` and returns the new ids.
    pub fn generate_type_scale(&mut self, base: f64, ratio: f64) -> Vec<String> {
        crate::typography::type_scale(base, ratio)
            .into_iter()
            .filter_map(|token| self.add_typography_token(token))
            .collect()
    }

    pub fn add_component(&mut self, component: NewComponent) -> Option<String> {
        self.design_system()?;
        let id = new_id();
        self.dispatch(DesignSystemAction::AddComponent(
            component.into_definition(id.clone()),
        ));
        Some(id)
    }

    pub fn update_component(&mut self, id: &str, patch: ComponentPatch) {
        self.dispatch(DesignSystemAction::UpdateComponent(id.to_string(), patch));
    }

    pub fn delete_component(&mut self, id: &str) {
        self.dispatch(DesignSystemAction::DeleteComponent(id.to_string()));
    }
}
