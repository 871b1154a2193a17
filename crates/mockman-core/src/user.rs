use crate::clock::Clock;
use crate::ids::new_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Free,
    Pro,
    Enterprise,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
            Plan::Enterprise => "enterprise",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "free" => Some(Plan::Free),
            "pro" => Some(Plan::Pro),
            "enterprise" => Some(Plan::Enterprise),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceRole {
    Owner,
    Admin,
    Member,
}

impl WorkspaceRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkspaceRole::Owner => "owner",
            WorkspaceRole::Admin => "admin",
            WorkspaceRole::Member => "member",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub plan: Plan,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub plan: Plan,
    pub role: WorkspaceRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub user: Option<User>,
    pub current_workspace: Option<Workspace>,
    pub workspaces: Vec<Workspace>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<Option<String>>,
    pub plan: Option<Plan>,
}

impl UserPatch {
    fn apply(&self, user: &User) -> User {
        User {
            id: user.id.clone(),
            name: self.name.clone().unwrap_or_else(|| user.name.clone()),
            email: self.email.clone().unwrap_or_else(|| user.email.clone()),
            avatar: self.avatar.clone().unwrap_or_else(|| user.avatar.clone()),
            plan: self.plan.unwrap_or(user.plan),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Initialize {
        user: User,
        workspaces: Vec<Workspace>,
    },
    UpdateUser(UserPatch),
    SwitchWorkspace(String),
}

impl UserAction {
    pub fn name(&self) -> &'static str {
        match self {
            UserAction::Initialize { .. } => "initialize",
            UserAction::UpdateUser(_) => "update_user",
            UserAction::SwitchWorkspace(_) => "switch_workspace",
        }
    }
}

pub fn mock_user(now: DateTime<Utc>) -> User {
    User {
        id: new_id(),
        name: "Sarah Chen".to_string(),
        email: "sarah@example.com".to_string(),
        avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Sarah".to_string()),
        plan: Plan::Pro,
        created_at: now,
    }
}

pub fn mock_workspaces() -> Vec<Workspace> {
    vec![
        Workspace {
            id: new_id(),
            name: "My Design System".to_string(),
            slug: "my-design-system".to_string(),
            plan: Plan::Pro,
            role: WorkspaceRole::Owner,
        },
        Workspace {
            id: new_id(),
            name: "Acme Corp".to_string(),
            slug: "acme-corp".to_string(),
            plan: Plan::Enterprise,
            role: WorkspaceRole::Admin,
        },
    ]
}

/// Pure user-store transition. Seeding is idempotent and a switch to an
/// unknown workspace keeps the current one.
pub fn reduce(state: &UserState, action: UserAction) -> UserState {
    match action {
        UserAction::Initialize { user, workspaces } => {
            if state.user.is_some() {
                return state.clone();
            }
            UserState {
                user: Some(user),
                current_workspace: workspaces.first().cloned(),
                workspaces,
            }
        }
        UserAction::UpdateUser(patch) => UserState {
            user: state.user.as_ref().map(|user| patch.apply(user)),
            ..state.clone()
        },
        UserAction::SwitchWorkspace(id) => UserState {
            current_workspace: state
                .workspaces
                .iter()
                .find(|workspace| workspace.id == id)
                .cloned()
                .or_else(|| state.current_workspace.clone()),
            ..state.clone()
        },
    }
}

pub struct UserStore {
    state: UserState,
    clock: Rc<dyn Clock>,
}

impl UserStore {
    pub fn new(state: UserState, clock: Rc<dyn Clock>) -> Self {
        Self { state, clock }
    }

    pub fn state(&self) -> &UserState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn current_workspace(&self) -> Option<&Workspace> {
        self.state.current_workspace.as_ref()
    }

    pub fn workspaces(&self) -> &[Workspace] {
        &self.state.workspaces
    }

    pub fn dispatch(&mut self, action: UserAction) {
        let name = action.name();
        self.state = reduce(&self.state, action);
        tracing::debug!(action = name, "user state updated");
    }

    /// Seeds the mock user and workspaces. Returns false when a user exists.
    pub fn initialize_user(&mut self) -> bool {
        if self.state.user.is_some() {
            return false;
        }
        self.dispatch(UserAction::Initialize {
            user: mock_user(self.clock.now()),
            workspaces: mock_workspaces(),
        });
        tracing::info!("seeded mock user");
        true
    }

    pub fn update_user(&mut self, patch: UserPatch) {
        if self.state.user.is_none() {
            tracing::warn!("no user; profile update ignored");
        }
        self.dispatch(UserAction::UpdateUser(patch));
    }

    /// Returns true when the active workspace is now `id`.
    pub fn switch_workspace(&mut self, id: &str) -> bool {
        self.dispatch(UserAction::SwitchWorkspace(id.to_string()));
        let switched = self
            .state
            .current_workspace
            .as_ref()
            .is_some_and(|workspace| workspace.id == id);
        if !switched {
            tracing::warn!(workspace = id, "unknown workspace; keeping current");
        }
        switched
    }
}
