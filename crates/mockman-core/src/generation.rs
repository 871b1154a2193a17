use crate::config::Pacing;
use crate::design_system::DesignSystemStore;
use crate::routes::Route;
use crate::tokens::{NewColorToken, NewTypographyToken};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub brand_name: String,
    pub description: String,
    pub style: String,
    pub palette: String,
    pub vibe: String,
}

impl GenerationRequest {
    pub fn new(brand_name: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            description: String::new(),
            style: "modern".to_string(),
            palette: "blue".to_string(),
            vibe: "professional".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationStep {
    CreatingDesignSystem,
    GeneratingPalette,
    CreatingTypography,
    Finalizing,
}

impl GenerationStep {
    pub const ALL: [GenerationStep; 4] = [
        GenerationStep::CreatingDesignSystem,
        GenerationStep::GeneratingPalette,
        GenerationStep::CreatingTypography,
        GenerationStep::Finalizing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GenerationStep::CreatingDesignSystem => "Creating design system...",
            GenerationStep::GeneratingPalette => "Generating color palette...",
            GenerationStep::CreatingTypography => "Creating typography scale...",
            GenerationStep::Finalizing => "Finalizing design system...",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub design_system_id: String,
    pub colors_added: usize,
    pub typography_added: usize,
    pub redirect: Route,
}

type Swatch = (&'static str, &'static str, &'static str);

pub const PALETTE_NAMES: [&str; 8] = [
    "blue", "green", "purple", "red", "orange", "neutral", "warm", "cool",
];

/// Hardcoded palettes keyed by name. Unknown names get blue.
pub fn palette(name: &str) -> Vec<NewColorToken> {
    let swatches: [Swatch; 6] = match name {
        "green" => [
            ("Primary Green", "#10B981", "Main brand color"),
            ("Green 50", "#ECFDF5", "Lightest green"),
            ("Green 100", "#D1FAE5", "Very light green"),
            ("Green 500", "#10B981", "Medium green"),
            ("Green 700", "#047857", "Dark green"),
            ("Green 900", "#064E3B", "Darkest green"),
        ],
        "purple" => [
            ("Primary Purple", "#8B5CF6", "Main brand color"),
            ("Purple 50", "#FAF5FF", "Lightest purple"),
            ("Purple 100", "#F3E8FF", "Very light purple"),
            ("Purple 500", "#8B5CF6", "Medium purple"),
            ("Purple 700", "#6D28D9", "Dark purple"),
            ("Purple 900", "#4C1D95", "Darkest purple"),
        ],
        "red" => [
            ("Primary Red", "#EF4444", "Main brand color"),
            ("Red 50", "#FEF2F2", "Lightest red"),
            ("Red 100", "#FEE2E2", "Very light red"),
            ("Red 500", "#EF4444", "Medium red"),
            ("Red 700", "#B91C1C", "Dark red"),
            ("Red 900", "#7F1D1D", "Darkest red"),
        ],
        "orange" => [
            ("Primary Orange", "#F97316", "Main brand color"),
            ("Orange 50", "#FFF7ED", "Lightest orange"),
            ("Orange 100", "#FFEDD5", "Very light orange"),
            ("Orange 500", "#F97316", "Medium orange"),
            ("Orange 700", "#C2410C", "Dark orange"),
            ("Orange 900", "#7C2D12", "Darkest orange"),
        ],
        "neutral" => [
            ("Primary Gray", "#6B7280", "Main neutral color"),
            ("Gray 50", "#F9FAFB", "Lightest gray"),
            ("Gray 100", "#F3F4F6", "Very light gray"),
            ("Gray 500", "#6B7280", "Medium gray"),
            ("Gray 700", "#374151", "Dark gray"),
            ("Gray 900", "#111827", "Darkest gray"),
        ],
        "warm" => [
            ("Primary Warm", "#EA580C", "Main warm color"),
            ("Amber 50", "#FFFBEB", "Light warm tone"),
            ("Orange 200", "#FED7AA", "Warm accent"),
            ("Orange 600", "#EA580C", "Medium warm"),
            ("Red 700", "#B91C1C", "Dark warm"),
            ("Red 900", "#7F1D1D", "Darkest warm"),
        ],
        "cool" => [
            ("Primary Cool", "#0EA5E9", "Main cool color"),
            ("Sky 50", "#F0F9FF", "Light cool tone"),
            ("Cyan 200", "#A5F3FC", "Cool accent"),
            ("Sky 500", "#0EA5E9", "Medium cool"),
            ("Blue 700", "#1D4ED8", "Dark cool"),
            ("Indigo 900", "#312E81", "Darkest cool"),
        ],
        _ => [
            ("Primary Blue", "#3B82F6", "Main brand color"),
            ("Blue 50", "#EFF6FF", "Lightest blue"),
            ("Blue 100", "#DBEAFE", "Very light blue"),
            ("Blue 500", "#3B82F6", "Medium blue"),
            ("Blue 700", "#1D4ED8", "Dark blue"),
            ("Blue 900", "#1E3A8A", "Darkest blue"),
        ],
    };
    swatches
        .iter()
        .map(|(name, value, description)| {
            NewColorToken::new(*name, *value).with_description(*description)
        })
        .collect()
}

pub fn typography_preset() -> Vec<NewTypographyToken> {
    [
        ("Display", "72px", "1.1", "700", "Hero headlines"),
        ("H1", "48px", "1.2", "700", "Page title"),
        ("H2", "36px", "1.3", "600", "Section heading"),
        ("H3", "30px", "1.4", "600", "Subsection heading"),
        ("H4", "24px", "1.4", "600", "Card title"),
        ("Body Large", "18px", "1.6", "400", "Large body text"),
        ("Body", "16px", "1.6", "400", "Default body text"),
        ("Body Small", "14px", "1.5", "400", "Small body text"),
        ("Caption", "12px", "1.4", "400", "Fine print"),
    ]
    .iter()
    .map(|(name, size, line_height, weight, description)| {
        NewTypographyToken::new(*name, *size, *line_height, *weight)
            .with_description(*description)
    })
    .collect()
}

/// Runs the canned "AI" flow: replaces the design system, then fills in a
/// palette and type ramp. Each step waits its fixed delay first.
pub fn generate(
    store: &mut DesignSystemStore,
    request: &GenerationRequest,
    pacing: &Pacing,
    mut on_step: impl FnMut(GenerationStep),
) -> GenerationOutcome {
    tracing::info!(
        brand = %request.brand_name,
        palette = %request.palette,
        style = %request.style,
        vibe = %request.vibe,
        "generating design system"
    );

    on_step(GenerationStep::CreatingDesignSystem);
    pacing.wait(pacing.create_system);
    let description = Some(request.description.as_str());
    let design_system_id = store.initialize(&request.brand_name, description);

    on_step(GenerationStep::GeneratingPalette);
    pacing.wait(pacing.generate_palette);
    let colors_added = palette(&request.palette)
        .into_iter()
        .filter_map(|color| store.add_color_token(color))
        .count();

    on_step(GenerationStep::CreatingTypography);
    pacing.wait(pacing.create_typography);
    let typography_added = typography_preset()
        .into_iter()
        .filter_map(|token| store.add_typography_token(token))
        .count();

    on_step(GenerationStep::Finalizing);
    pacing.wait(pacing.finalize);

    GenerationOutcome {
        design_system_id,
        colors_added,
        typography_added,
        redirect: Route::CreatorOverview { imported: false },
    }
}
