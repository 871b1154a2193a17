use crate::cli::{
    BuilderArgs, ButtonCommand, ColorCommand, Command, ComponentCommand, GenerateArgs,
    ImportArgs, OverviewArgs, SemanticCommand, SystemCommand, TypographyCommand, UserCommand,
};
use crate::elements::parse_element;
use anyhow::{anyhow, bail, Context, Result};
use mockman_core::app::App;
use mockman_core::builder::Canvas;
use mockman_core::buttons::{self, ButtonOptions, BUTTON_SIZES};
use mockman_core::codegen::component_code;
use mockman_core::generation::{self, GenerationRequest, PALETTE_NAMES};
use mockman_core::import::{self, ImportMethod, ImportRequest, ProcessingStep};
use mockman_core::overview;
use mockman_core::preview;
use mockman_core::routes::{Route, SettingsSection};
use mockman_core::tokens::{
    ColorToken, ColorTokenPatch, NewColorToken, NewSemanticColorToken, SemanticColorToken,
    SemanticColorValue, TokenSet,
};
use mockman_core::typography::{ratio_by_name, TYPE_SCALE_RATIOS};
use mockman_core::user::{Plan, UserPatch};
use serde::Serialize;
use serde_json::json;
use std::cell::RefCell;

/// Where command results go. Each command emits exactly one document, so
/// `--json` output stays parseable.
pub struct Output {
    json: bool,
    captured: Option<RefCell<Vec<String>>>,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            captured: None,
        }
    }

    #[cfg(test)]
    fn capture(json: bool) -> Self {
        Self {
            json,
            captured: Some(RefCell::new(Vec::new())),
        }
    }

    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        let rendered = if self.json {
            serde_json::to_string_pretty(value)?
        } else {
            text()
        };
        match &self.captured {
            Some(captured) => captured.borrow_mut().push(rendered),
            None => println!("{rendered}"),
        }
        Ok(())
    }
}

fn confirm(yes: bool, what: &str) -> Result<()> {
    if !yes {
        bail!("refusing to delete {what} without --yes");
    }
    Ok(())
}

pub fn run(app: &mut App, command: Command, out: &Output) -> Result<()> {
    match command {
        Command::Show { route } => show(app, &route, out),
        Command::Routes => {
            let routes: Vec<_> = Route::ALL
                .iter()
                .map(|route| json!({ "path": route.path(), "title": route.title() }))
                .collect();
            out.emit(&routes, || {
                Route::ALL
                    .iter()
                    .map(|route| format!("{:<32} {}", route.path(), route.title()))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        Command::User(command) => user(app, command, out),
        Command::System(command) => system(app, command, out),
        Command::Colors(command) => colors(app, command, out),
        Command::Semantic(command) => semantic(app, command, out),
        Command::Typography(command) => typography(app, command, out),
        Command::Components(command) => components(app, command, out),
        Command::Builder(args) => builder(app, args, out),
        Command::Buttons(command) => buttons_cmd(app, command, out),
        Command::Generate(args) => generate(app, args, out),
        Command::Import(args) => import_cmd(app, args, out),
        Command::Overview(args) => overview_cmd(app, args, out),
    }
}

fn show(app: &mut App, location: &str, out: &Output) -> Result<()> {
    let route = Route::parse(location)?;
    if !out.json {
        match app.design_system() {
            Ok(system) if route.is_creator_subpage() => {
                println!("# {} / {}  ({})\n", system.name, route.title(), route.path())
            }
            _ => println!("# {}  ({})\n", route.title(), route.path()),
        }
    }
    match route {
        Route::Home => {
            let user = app.users.user().map(|user| user.name.clone());
            let system = app.design_system()?;
            let payload = json!({
                "user": user,
                "workspace": app.users.current_workspace(),
                "designSystem": system.name,
            });
            out.emit(&payload, || {
                format!(
                    "Welcome back, {}\nDesign system: {}",
                    user.as_deref().unwrap_or("there"),
                    system.name
                )
            })
        }
        Route::Import => {
            let methods = [ImportMethod::File, ImportMethod::Github, ImportMethod::Url];
            let payload: Vec<_> = methods
                .iter()
                .map(|method| json!({ "method": method.as_str(), "formats": method.formats() }))
                .collect();
            out.emit(&payload, || {
                methods
                    .iter()
                    .map(|method| format!("{:<20} {}", method.title(), method.formats()))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        Route::Creator => out.emit(
            &json!(["generate", "import", "system create"]),
            || {
                [
                    "Generate with AI      mockman generate <brand>",
                    "Import from code      mockman import --project <name>",
                    "Start from scratch    mockman system create",
                ]
                .join("\n")
            },
        ),
        Route::CreatorAi => out.emit(&PALETTE_NAMES, || {
            format!("Palettes: {}", PALETTE_NAMES.join(", "))
        }),
        Route::CreatorOverview { .. } => overview_cmd(app, OverviewArgs::default(), out),
        Route::CreatorColors => {
            let tokens = palette_tokens(app)?;
            let payload = json!({
                "colors": tokens.colors,
                "semanticColors": tokens.semantic_colors,
            });
            out.emit(&payload, || {
                let mut lines = vec!["Palette".to_string()];
                lines.extend(tokens.colors.iter().map(color_line));
                lines.push(String::new());
                lines.push("Semantic".to_string());
                lines.extend(
                    tokens
                        .semantic_colors
                        .iter()
                        .map(|token| semantic_line(token, &tokens.colors)),
                );
                lines.join("\n")
            })
        }
        Route::CreatorTypography => typography(app, TypographyCommand::List, out),
        Route::CreatorButtons => {
            let variants = buttons::button_variants(&app.design_system()?.theme.tokens.colors);
            let payload: Vec<_> = variants
                .iter()
                .map(|variant| json!({ "id": variant.id, "background": variant.background }))
                .collect();
            out.emit(&payload, || {
                let mut lines: Vec<String> = variants
                    .iter()
                    .map(|variant| {
                        format!(
                            "{:<12} {:<8} {}",
                            variant.name, variant.background, variant.description
                        )
                    })
                    .collect();
                lines.extend(BUTTON_SIZES.iter().map(|size| {
                    format!("{:<12} height {} font {}", size.name, size.height, size.font_size)
                }));
                lines.join("\n")
            })
        }
        Route::CreatorComponents => components(app, ComponentCommand::List, out),
        Route::CreatorGuidelines => {
            let system = app.design_system()?;
            out.emit(&json!({ "designSystem": system.name }), || {
                format!("Usage guidelines for {}", system.name)
            })
        }
        Route::Settings(SettingsSection::Billing) => {
            let plan = app.users.user().map(|user| user.plan.as_str());
            out.emit(&json!({ "plan": plan }), || {
                format!("Plan: {}", plan.unwrap_or("none"))
            })
        }
        Route::Settings(_) => user(app, UserCommand::Show, out),
        Route::Help => out.emit(&json!({ "help": "mockman --help" }), || {
            "Run `mockman --help` for the full command list.".to_string()
        }),
        Route::Placeholder(placeholder) => {
            out.emit(&json!({ "title": placeholder.title(), "ready": false }), || {
                format!("{} is coming soon.", placeholder.title())
            })
        }
    }
}

fn user(app: &mut App, command: UserCommand, out: &Output) -> Result<()> {
    match command {
        UserCommand::Show => {
            let state = app.users.state().clone();
            out.emit(&state, || {
                let mut lines = Vec::new();
                if let Some(user) = &state.user {
                    lines.push(format!("{} <{}> ({})", user.name, user.email, user.plan.as_str()));
                }
                for workspace in &state.workspaces {
                    let marker = if state.current_workspace.as_ref() == Some(workspace) {
                        "*"
                    } else {
                        " "
                    };
                    lines.push(format!(
                        "{marker} {:<20} {:<12} {}",
                        workspace.slug,
                        workspace.role.as_str(),
                        workspace.id
                    ));
                }
                lines.join("\n")
            })
        }
        UserCommand::Update {
            name,
            email,
            avatar,
            clear_avatar,
            plan,
        } => {
            let plan = plan
                .map(|plan| Plan::from_str(&plan).ok_or_else(|| anyhow!("unknown plan `{plan}`")))
                .transpose()?;
            app.users.update_user(UserPatch {
                name,
                email,
                avatar: if clear_avatar { Some(None) } else { avatar.map(Some) },
                plan,
            });
            app.persist()?;
            user(app, UserCommand::Show, out)
        }
        UserCommand::Switch { workspace } => {
            let id = app
                .users
                .workspaces()
                .iter()
                .find(|candidate| candidate.slug == workspace)
                .map(|candidate| candidate.id.clone())
                .unwrap_or(workspace);
            if !app.users.switch_workspace(&id) {
                eprintln!("no workspace `{id}`; active workspace unchanged");
            }
            app.persist()?;
            let current = app.users.current_workspace().cloned();
            out.emit(&current, || {
                current
                    .as_ref()
                    .map(|workspace| format!("Active workspace: {}", workspace.name))
                    .unwrap_or_else(|| "No active workspace".to_string())
            })
        }
    }
}

fn system(app: &mut App, command: SystemCommand, out: &Output) -> Result<()> {
    match command {
        SystemCommand::Info => {
            let system = app.design_system()?;
            out.emit(system, || {
                let stats = overview::stats(system);
                let mut lines = vec![
                    system.name.clone(),
                    system.description.clone().unwrap_or_default(),
                    format!("id       {}", system.id),
                    format!("theme    {}", system.theme.name),
                    format!("created  {}", system.created_at.to_rfc3339()),
                    format!("updated  {}", system.updated_at.to_rfc3339()),
                ];
                lines.extend(
                    stats
                        .iter()
                        .map(|stat| format!("{:<18} {}", stat.name, stat.value)),
                );
                lines.join("\n")
            })
        }
        SystemCommand::Rename { name, description } => {
            let current = app.design_system()?.description.clone();
            app.design
                .update_info(&name, description.or(current).as_deref());
            app.persist()?;
            system(app, SystemCommand::Info, out)
        }
        SystemCommand::Delete { yes } => {
            confirm(yes, "the design system")?;
            app.design.delete();
            app.persist()?;
            out.emit(&json!({ "deleted": true }), || "Design system deleted".to_string())
        }
        SystemCommand::Create => {
            let id = app.design.create_manually();
            app.persist()?;
            out.emit(&json!({ "id": id }), || format!("Created design system {id}"))
        }
    }
}

fn palette_tokens(app: &App) -> Result<&TokenSet> {
    Ok(&app.design_system()?.theme.tokens)
}

fn color_line(color: &ColorToken) -> String {
    format!(
        "{}  {:<16} {:<9} {}",
        color.id,
        color.name,
        color.value,
        color.description.as_deref().unwrap_or_default()
    )
}

fn semantic_line(token: &SemanticColorToken, colors: &[ColorToken]) -> String {
    let resolved = token.value.resolve(colors).unwrap_or("(missing)");
    format!("{}  {:<16} {}", token.id, token.name, resolved)
}

fn colors(app: &mut App, command: ColorCommand, out: &Output) -> Result<()> {
    match command {
        ColorCommand::List => {
            let colors = &palette_tokens(app)?.colors;
            out.emit(colors, || {
                colors
                    .iter()
                    .map(color_line)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        ColorCommand::Add {
            name,
            value,
            description,
        } => {
            let token = NewColorToken {
                name,
                value,
                description,
            };
            let id = app
                .design
                .add_color_token(token)
                .ok_or_else(|| anyhow!("no design system"))?;
            app.persist()?;
            out.emit(&json!({ "id": id }), || format!("Added color {id}"))
        }
        ColorCommand::Update {
            id,
            name,
            value,
            description,
        } => {
            app.design.update_color_token(
                &id,
                ColorTokenPatch {
                    name,
                    value,
                    description: description.map(Some),
                },
            );
            app.persist()?;
            colors(app, ColorCommand::List, out)
        }
        ColorCommand::Remove { id } => {
            app.design.delete_color_token(&id);
            app.persist()?;
            colors(app, ColorCommand::List, out)
        }
    }
}

fn semantic(app: &mut App, command: SemanticCommand, out: &Output) -> Result<()> {
    match command {
        SemanticCommand::List => {
            let tokens = palette_tokens(app)?;
            out.emit(&tokens.semantic_colors, || {
                tokens
                    .semantic_colors
                    .iter()
                    .map(|token| semantic_line(token, &tokens.colors))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        SemanticCommand::Add {
            name,
            value,
            description,
        } => {
            let value = match value.strip_prefix("token:") {
                Some(id) => SemanticColorValue::Token(id.to_string()),
                None => SemanticColorValue::Color(value),
            };
            if value.resolve(&palette_tokens(app)?.colors).is_none() {
                tracing::debug!("semantic color points at a missing palette color");
            }
            let id = app
                .design
                .add_semantic_color_token(NewSemanticColorToken {
                    name,
                    value,
                    description,
                })
                .ok_or_else(|| anyhow!("no design system"))?;
            app.persist()?;
            out.emit(&json!({ "id": id }), || format!("Added semantic color {id}"))
        }
        SemanticCommand::Remove { id } => {
            app.design.delete_semantic_color_token(&id);
            app.persist()?;
            semantic(app, SemanticCommand::List, out)
        }
    }
}

fn parse_ratio(raw: &str) -> Result<f64> {
    if let Ok(value) = raw.parse::<f64>() {
        return Ok(value);
    }
    ratio_by_name(raw).map(|ratio| ratio.value).ok_or_else(|| {
        let names: Vec<_> = TYPE_SCALE_RATIOS.iter().map(|ratio| ratio.name).collect();
        anyhow!("unknown ratio `{raw}`; try one of {}", names.join(", "))
    })
}

fn typography(app: &mut App, command: TypographyCommand, out: &Output) -> Result<()> {
    match command {
        TypographyCommand::List => {
            let tokens = &palette_tokens(app)?.typography;
            out.emit(tokens, || {
                tokens
                    .iter()
                    .map(|token| {
                        format!(
                            "{}  {:<12} {:<9} lh {:<4} w {}",
                            token.id,
                            token.name,
                            token.font_size,
                            token.line_height,
                            token.font_weight
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        TypographyCommand::Scale { base, ratio } => {
            let ratio = parse_ratio(&ratio)?;
            let ids = app.design.generate_type_scale(base, ratio);
            app.persist()?;
            tracing::info!(added = ids.len(), base, ratio, "generated type scale");
            typography(app, TypographyCommand::List, out)
        }
        TypographyCommand::Remove { id } => {
            app.design.delete_typography_token(&id);
            app.persist()?;
            typography(app, TypographyCommand::List, out)
        }
    }
}

fn components(app: &mut App, command: ComponentCommand, out: &Output) -> Result<()> {
    match command {
        ComponentCommand::List => {
            let components = &app.design_system()?.components;
            out.emit(components, || {
                components
                    .iter()
                    .map(|component| {
                        let elements = component
                            .builder
                            .as_ref()
                            .map(|saved| saved.count)
                            .unwrap_or_default();
                        format!(
                            "{}  {:<20} {:<8} {} elements",
                            component.id,
                            component.name,
                            component.kind.as_str(),
                            elements
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        ComponentCommand::Remove { id, yes } => {
            confirm(yes, "a component")?;
            app.component(&id)?;
            let mut canvas = Canvas::new();
            canvas.delete_saved(&mut app.design, &id);
            app.persist()?;
            components(app, ComponentCommand::List, out)
        }
        ComponentCommand::Code { id } => {
            let component = app.component(&id)?;
            let code = match (&component.code, &component.builder) {
                (Some(code), _) => code.clone(),
                (None, Some(saved)) => component_code(&component.name, &saved.elements),
                (None, None) => String::new(),
            };
            out.emit(&json!({ "id": id, "code": code }), || code.clone())
        }
    }
}

fn builder(app: &mut App, args: BuilderArgs, out: &Output) -> Result<()> {
    let tokens = palette_tokens(app)?.clone();
    let mut canvas = Canvas::new();
    if let Some(id) = &args.edit {
        let component = app.component(id)?.clone();
        if !canvas.load(&component) {
            bail!("component {id} was not made in the builder");
        }
    }
    if let Some(name) = &args.name {
        canvas.set_name(name);
    }
    for raw in &args.elements {
        let element = parse_element(raw).with_context(|| format!("bad --element `{raw}`"))?;
        let id = canvas.add_element(element.element_type, &tokens);
        for patch in &element.patches {
            canvas.update_element(&id, patch);
        }
    }

    let code = canvas.code();
    if args.dry_run {
        let markup: Vec<String> = preview::render_all(&canvas.elements, canvas.selected.as_deref())
            .iter()
            .map(|node| node.to_html())
            .collect();
        let selected = canvas
            .selected_element()
            .map(|element| format!("Selected: {} {}", element.element_type().label(), element.id))
            .unwrap_or_default();
        return out.emit(&json!({ "preview": markup, "code": code }), || {
            format!("{}\n{}\n\n{}", markup.join("\n"), selected, code)
        });
    }

    app.config.pacing.wait(app.config.pacing.builder_save);
    let id = canvas
        .save(&mut app.design)
        .ok_or_else(|| anyhow!("nothing to save; give the component a name and at least one element"))?;
    app.persist()?;
    out.emit(&json!({ "id": id, "code": code }), || {
        format!("Saved component {id}\n\n{code}")
    })
}

fn buttons_cmd(app: &mut App, command: ButtonCommand, out: &Output) -> Result<()> {
    let ButtonCommand::Snippet {
        variant,
        size,
        text,
        icon,
        disabled,
        loading,
    } = command;
    let options = ButtonOptions {
        variant,
        size,
        text,
        show_icon: icon,
        disabled,
        loading,
    };
    let style = buttons::button_style(&palette_tokens(app)?.colors, &options);
    let snippet = buttons::button_snippet(&options);
    let style_map: serde_json::Map<String, serde_json::Value> = style
        .iter()
        .map(|(property, value)| (property.to_string(), json!(value)))
        .collect();
    out.emit(&json!({ "snippet": snippet, "style": style_map }), || {
        let css = style
            .iter()
            .map(|(property, value)| format!("  {property}: {value};"))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{snippet}\n\n{{\n{css}\n}}")
    })
}

fn generate(app: &mut App, args: GenerateArgs, out: &Output) -> Result<()> {
    let request = GenerationRequest {
        brand_name: args.brand,
        description: args.description,
        style: args.style,
        palette: args.palette,
        vibe: args.vibe,
    };
    let pacing = app.config.pacing.clone();
    let outcome = generation::generate(&mut app.design, &request, &pacing, |step| {
        eprintln!("{}", step.label())
    });
    app.persist()?;
    let payload = json!({
        "id": outcome.design_system_id,
        "colors": outcome.colors_added,
        "typography": outcome.typography_added,
        "redirect": outcome.redirect.path(),
    });
    out.emit(&payload, || {
        format!(
            "Generated {} with {} colors and {} typography tokens\nNext: mockman show {}",
            request.brand_name,
            outcome.colors_added,
            outcome.typography_added,
            outcome.redirect.path()
        )
    })
}

fn import_cmd(app: &mut App, args: ImportArgs, out: &Output) -> Result<()> {
    let method = ImportMethod::from_str(&args.method)
        .ok_or_else(|| anyhow!("unknown import method `{}`", args.method))?;
    if method != ImportMethod::File && args.source.is_none() {
        bail!("--source is required for {} imports", method.as_str());
    }
    let request = ImportRequest {
        method,
        project_name: args.project,
        source: args.source,
    };
    let total = ProcessingStep::ALL.len();
    let redirect = import::run_import(&request, &app.config.pacing, |step| {
        eprintln!("[{}/{}] {}", step.index() + 1, total, step.label())
    });
    out.emit(&json!({ "redirect": redirect.path() }), || {
        format!("Import finished. Next: mockman show {}", redirect.path())
    })
}

fn overview_cmd(app: &mut App, args: OverviewArgs, out: &Output) -> Result<()> {
    if args.dismiss || args.restore {
        app.set_getting_started_dismissed(args.dismiss)?;
    }
    let pacing = app.config.pacing.clone();
    if args.publish && overview::publish(&mut app.design, &pacing) {
        app.persist()?;
    }
    if args.save_draft && overview::save_draft(&mut app.design, &pacing) {
        app.persist()?;
    }

    let checklist = app.getting_started()?;
    let system = app.design_system()?;
    let stats = overview::stats(system);
    let payload = json!({
        "name": system.name,
        "updatedAt": system.updated_at,
        "stats": stats
            .iter()
            .map(|stat| json!({ "name": stat.name, "value": stat.value, "route": stat.route.path() }))
            .collect::<Vec<_>>(),
        "gettingStarted": checklist.visible().then(|| {
            checklist
                .items
                .iter()
                .map(|item| json!({ "title": item.title, "done": item.done }))
                .collect::<Vec<_>>()
        }),
    });
    out.emit(&payload, || {
        let mut lines = vec![format!(
            "{}  (updated {})",
            system.name,
            system.updated_at.to_rfc3339()
        )];
        lines.extend(
            stats
                .iter()
                .map(|stat| format!("{:<18} {}", stat.name, stat.value)),
        );
        if checklist.visible() {
            lines.push(String::new());
            lines.push("Getting started".to_string());
            lines.extend(checklist.items.iter().map(|item| {
                let mark = if item.done { "x" } else { " " };
                format!("[{mark}] {:<20} mockman show {}", item.title, item.route.path())
            }));
        }
        lines.join("\n")
    })
}

#[cfg(test)]
mod tests {
    use super::{run, Output};
    use crate::cli::{
        ColorCommand, Command, ComponentCommand, SemanticCommand, SystemCommand, UserCommand,
    };
    use chrono::{TimeZone, Utc};
    use mockman_core::app::App;
    use mockman_core::clock::FixedClock;
    use mockman_core::config::{MockmanConfig, Pacing};
    use mockman_core::tokens::{ComponentKind, NewColorToken, NewComponent, SemanticColorValue};
    use std::path::Path;
    use std::rc::Rc;
    use tempfile::{tempdir, TempDir};

    fn open(dir: &Path) -> App {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 9, 1, 10, 0, 0).unwrap());
        let config = MockmanConfig::new(dir).with_pacing(Pacing::instant());
        App::bootstrap_with_clock(config, Rc::new(clock)).expect("bootstrap")
    }

    fn app() -> (TempDir, App) {
        let dir = tempdir().expect("tempdir");
        let app = open(dir.path());
        (dir, app)
    }

    fn captured(out: &Output) -> Vec<String> {
        out.captured
            .as_ref()
            .map(|captured| captured.borrow().clone())
            .unwrap_or_default()
    }

    #[test]
    fn system_delete_without_yes_keeps_design_system() {
        let (_dir, mut app) = app();
        let out = Output::capture(false);

        let result = run(&mut app, Command::System(SystemCommand::Delete { yes: false }), &out);

        assert!(result.is_err());
        assert!(app.design_system().is_ok());
        assert!(captured(&out).is_empty());
    }

    #[test]
    fn system_delete_with_yes_clears_it() {
        let (_dir, mut app) = app();
        let out = Output::capture(true);

        run(&mut app, Command::System(SystemCommand::Delete { yes: true }), &out).expect("delete");

        assert!(app.design_system().is_err());
        let payload: serde_json::Value =
            serde_json::from_str(&captured(&out)[0]).expect("json");
        assert_eq!(payload["deleted"], true);
    }

    #[test]
    fn component_remove_is_gated_then_deletes() {
        let (dir, mut app) = app();
        let id = app
            .design
            .add_component(NewComponent {
                name: "Card".into(),
                kind: ComponentKind::Card,
                code: None,
                builder: None,
            })
            .expect("component");
        app.persist().expect("persist");
        let out = Output::capture(false);

        let refused = run(
            &mut app,
            Command::Components(ComponentCommand::Remove {
                id: id.clone(),
                yes: false,
            }),
            &out,
        );
        assert!(refused.is_err());
        assert!(app.component(&id).is_ok());

        run(
            &mut app,
            Command::Components(ComponentCommand::Remove {
                id: id.clone(),
                yes: true,
            }),
            &out,
        )
        .expect("remove");
        assert!(app.component(&id).is_err());
        assert!(open(dir.path()).component(&id).is_err());
    }

    #[test]
    fn token_removal_runs_without_confirmation() {
        let (_dir, mut app) = app();
        let id = app
            .design
            .add_color_token(NewColorToken::new("Brand", "#0055FF"))
            .expect("color");
        let out = Output::capture(false);

        run(&mut app, Command::Colors(ColorCommand::Remove { id }), &out).expect("remove");

        assert!(app.design_system().expect("system").theme.tokens.colors.is_empty());
    }

    #[test]
    fn creator_colors_page_emits_one_json_document() {
        let (_dir, mut app) = app();
        app.design
            .add_color_token(NewColorToken::new("Brand", "#0055FF"))
            .expect("color");
        let out = Output::capture(true);

        run(
            &mut app,
            Command::Show {
                route: "/creator/colors".into(),
            },
            &out,
        )
        .expect("show");

        let documents = captured(&out);
        assert_eq!(documents.len(), 1);
        let payload: serde_json::Value = serde_json::from_str(&documents[0]).expect("json");
        assert_eq!(payload["colors"][0]["value"], "#0055FF");
        assert!(payload["semanticColors"].is_array());
    }

    #[test]
    fn semantic_add_accepts_unknown_token_reference() {
        let (_dir, mut app) = app();
        let out = Output::capture(false);

        run(
            &mut app,
            Command::Semantic(SemanticCommand::Add {
                name: "Accent".into(),
                value: "token:gone".into(),
                description: None,
            }),
            &out,
        )
        .expect("add");

        let tokens = &app.design_system().expect("system").theme.tokens;
        assert_eq!(
            tokens.semantic_colors[0].value,
            SemanticColorValue::Token("gone".into())
        );
    }

    #[test]
    fn switch_accepts_slug_or_id_and_ignores_unknown() {
        let (_dir, mut app) = app();
        let first = app.users.workspaces()[0].id.clone();
        let out = Output::capture(true);

        run(
            &mut app,
            Command::User(UserCommand::Switch {
                workspace: "acme-corp".into(),
            }),
            &out,
        )
        .expect("switch by slug");
        assert_eq!(
            app.users.current_workspace().map(|w| w.slug.as_str()),
            Some("acme-corp")
        );

        run(
            &mut app,
            Command::User(UserCommand::Switch { workspace: first.clone() }),
            &out,
        )
        .expect("switch by id");
        assert_eq!(
            app.users.current_workspace().map(|w| w.id.as_str()),
            Some(first.as_str())
        );

        run(
            &mut app,
            Command::User(UserCommand::Switch {
                workspace: "nope".into(),
            }),
            &out,
        )
        .expect("unknown switch");
        assert_eq!(
            app.users.current_workspace().map(|w| w.id.as_str()),
            Some(first.as_str())
        );

        let last: serde_json::Value =
            serde_json::from_str(captured(&out).last().expect("output")).expect("json");
        assert_eq!(last["id"], first.as_str());
    }
}
