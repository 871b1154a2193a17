use crate::config::Pacing;
use crate::design_system::DesignSystemStore;
use crate::routes::Route;
use crate::tokens::DesignSystem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub name: &'static str,
    pub value: usize,
    pub route: Route,
}

pub fn stats(system: &DesignSystem) -> [Stat; 3] {
    [
        Stat {
            name: "Colors",
            value: system.theme.tokens.colors.len(),
            route: Route::CreatorColors,
        },
        Stat {
            name: "Typography Tokens",
            value: system.theme.tokens.typography.len(),
            route: Route::CreatorTypography,
        },
        Stat {
            name: "Components",
            value: system.components.len(),
            route: Route::CreatorComponents,
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecklistItem {
    pub title: &'static str,
    pub done: bool,
    pub route: Route,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GettingStarted {
    pub items: Vec<ChecklistItem>,
    pub dismissed: bool,
}

impl GettingStarted {
    pub fn all_done(&self) -> bool {
        self.items.iter().all(|item| item.done)
    }

    /// Hidden once dismissed or once every task is done.
    pub fn visible(&self) -> bool {
        !self.dismissed && !self.all_done()
    }
}

pub fn getting_started(system: &DesignSystem, dismissed: bool) -> GettingStarted {
    let tokens = &system.theme.tokens;
    GettingStarted {
        items: vec![
            ChecklistItem {
                title: "Add colors",
                done: !tokens.colors.is_empty(),
                route: Route::CreatorColors,
            },
            ChecklistItem {
                title: "Define typography",
                done: !tokens.typography.is_empty(),
                route: Route::CreatorTypography,
            },
            ChecklistItem {
                title: "Build components",
                done: !system.components.is_empty(),
                route: Route::CreatorComponents,
            },
        ],
        dismissed,
    }
}

fn touch(store: &mut DesignSystemStore) -> bool {
    let Some((name, description)) = store
        .design_system()
        .map(|system| (system.name.clone(), system.description.clone()))
    else {
        return false;
    };
    store.update_info(&name, description.as_deref());
    true
}

/// Simulated publish. Only re-stamps `updated_at`; nothing leaves the machine.
pub fn publish(store: &mut DesignSystemStore, pacing: &Pacing) -> bool {
    pacing.wait(pacing.publish);
    let done = touch(store);
    if done {
        tracing::info!("design system published");
    }
    done
}

pub fn save_draft(store: &mut DesignSystemStore, pacing: &Pacing) -> bool {
    pacing.wait(pacing.save_draft);
    let done = touch(store);
    if done {
        tracing::info!("design system draft saved");
    }
    done
}
