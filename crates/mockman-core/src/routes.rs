#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no page at {0}")]
    NotFound(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsSection {
    General,
    Profile,
    Billing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    Analytics,
    Documentation,
    Notifications,
    Search,
    InviteTeam,
    Support,
}

impl Placeholder {
    pub fn title(&self) -> &'static str {
        match self {
            Placeholder::Analytics => "Analytics",
            Placeholder::Documentation => "Documentation",
            Placeholder::Notifications => "Notifications",
            Placeholder::Search => "Search",
            Placeholder::InviteTeam => "Invite Team",
            Placeholder::Support => "Contact Support",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Import,
    Creator,
    CreatorAi,
    CreatorOverview { imported: bool },
    CreatorColors,
    CreatorTypography,
    CreatorButtons,
    CreatorComponents,
    CreatorGuidelines,
    Settings(SettingsSection),
    Help,
    Placeholder(Placeholder),
}

impl Route {
    pub const ALL: [Route; 20] = [
        Route::Home,
        Route::Import,
        Route::Creator,
        Route::CreatorAi,
        Route::CreatorOverview { imported: false },
        Route::CreatorColors,
        Route::CreatorTypography,
        Route::CreatorButtons,
        Route::CreatorComponents,
        Route::CreatorGuidelines,
        Route::Settings(SettingsSection::General),
        Route::Settings(SettingsSection::Profile),
        Route::Settings(SettingsSection::Billing),
        Route::Help,
        Route::Placeholder(Placeholder::Analytics),
        Route::Placeholder(Placeholder::Documentation),
        Route::Placeholder(Placeholder::Notifications),
        Route::Placeholder(Placeholder::Search),
        Route::Placeholder(Placeholder::InviteTeam),
        Route::Placeholder(Placeholder::Support),
    ];

    pub fn parse(location: &str) -> Result<Self, RouteError> {
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        let route = match path {
            "/" => Route::Home,
            "/import" => Route::Import,
            "/creator" => Route::Creator,
            "/creator/ai" => Route::CreatorAi,
            "/creator/overview" => Route::CreatorOverview {
                imported: query.split('&').any(|pair| pair == "imported=true"),
            },
            "/creator/colors" => Route::CreatorColors,
            "/creator/typography" => Route::CreatorTypography,
            "/creator/buttons" => Route::CreatorButtons,
            "/creator/components" => Route::CreatorComponents,
            "/creator/guidelines" => Route::CreatorGuidelines,
            "/settings" => Route::Settings(SettingsSection::General),
            "/settings/profile" => Route::Settings(SettingsSection::Profile),
            "/settings/billing" => Route::Settings(SettingsSection::Billing),
            "/help" => Route::Help,
            "/analytics" => Route::Placeholder(Placeholder::Analytics),
            "/documentation" => Route::Placeholder(Placeholder::Documentation),
            "/notifications" => Route::Placeholder(Placeholder::Notifications),
            "/search" => Route::Placeholder(Placeholder::Search),
            "/invite-team" => Route::Placeholder(Placeholder::InviteTeam),
            "/support" => Route::Placeholder(Placeholder::Support),
            _ => return Err(RouteError::NotFound(location.to_string())),
        };
        Ok(route)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Import => "/import",
            Route::Creator => "/creator",
            Route::CreatorAi => "/creator/ai",
            Route::CreatorOverview { imported: false } => "/creator/overview",
            Route::CreatorOverview { imported: true } => "/creator/overview?imported=true",
            Route::CreatorColors => "/creator/colors",
            Route::CreatorTypography => "/creator/typography",
            Route::CreatorButtons => "/creator/buttons",
            Route::CreatorComponents => "/creator/components",
            Route::CreatorGuidelines => "/creator/guidelines",
            Route::Settings(SettingsSection::General) => "/settings",
            Route::Settings(SettingsSection::Profile) => "/settings/profile",
            Route::Settings(SettingsSection::Billing) => "/settings/billing",
            Route::Help => "/help",
            Route::Placeholder(Placeholder::Analytics) => "/analytics",
            Route::Placeholder(Placeholder::Documentation) => "/documentation",
            Route::Placeholder(Placeholder::Notifications) => "/notifications",
            Route::Placeholder(Placeholder::Search) => "/search",
            Route::Placeholder(Placeholder::InviteTeam) => "/invite-team",
            Route::Placeholder(Placeholder::Support) => "/support",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Import => "Import from Code",
            Route::Creator => "Create Your Design System",
            Route::CreatorAi => "Generate with AI",
            Route::CreatorOverview { .. } => "Design Tokens",
            Route::CreatorColors => "Colors",
            Route::CreatorTypography => "Typography",
            Route::CreatorButtons => "Buttons",
            Route::CreatorComponents => "Component Builder",
            Route::CreatorGuidelines => "Guidelines",
            Route::Settings(_) => "Settings",
            Route::Help => "Help",
            Route::Placeholder(placeholder) => placeholder.title(),
        }
    }

    /// Creator sub-pages render inside the creator layout, under the design
    /// system name.
    pub fn is_creator_subpage(&self) -> bool {
        matches!(
            self,
            Route::CreatorAi
                | Route::CreatorOverview { .. }
                | Route::CreatorColors
                | Route::CreatorTypography
                | Route::CreatorButtons
                | Route::CreatorComponents
                | Route::CreatorGuidelines
        )
    }
}
