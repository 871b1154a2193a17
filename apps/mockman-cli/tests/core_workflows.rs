use chrono::{Duration, TimeZone, Utc};
use mockman_core::app::App;
use mockman_core::builder::{Canvas, ElementPatch, ElementType, MoveDirection, TextPatch};
use mockman_core::clock::FixedClock;
use mockman_core::config::{MockmanConfig, Pacing};
use mockman_core::design_system::PLACEHOLDER_NAME;
use mockman_core::generation::{generate, GenerationRequest};
use mockman_core::overview;
use mockman_core::routes::Route;
use mockman_core::tokens::{NewColorToken, NewSemanticColorToken, SemanticColorValue};
use std::path::Path;
use std::rc::Rc;
use tempfile::tempdir;

fn boot(dir: &Path) -> App {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 9, 1, 10, 0, 0).unwrap());
    let config = MockmanConfig::new(dir).with_pacing(Pacing::instant());
    App::bootstrap_with_clock(config, Rc::new(clock)).expect("bootstrap")
}

#[test]
fn bootstrap_is_idempotent_across_runs() {
    let dir = tempdir().expect("tempdir");

    let first = boot(dir.path());
    let user_id = first.users.user().expect("user").id.clone();
    let system_id = first.design_system().expect("system").id.clone();

    let second = boot(dir.path());
    assert_eq!(second.users.user().expect("user").id, user_id);
    assert_eq!(second.design_system().expect("system").id, system_id);
    assert_eq!(second.design_system().expect("system").name, PLACEHOLDER_NAME);
}

#[test]
fn palette_edits_survive_restart() {
    let dir = tempdir().expect("tempdir");
    let mut app = boot(dir.path());

    let brand = app
        .design
        .add_color_token(NewColorToken::new("Brand", "#0055FF"))
        .expect("color");
    app.design
        .add_semantic_color_token(NewSemanticColorToken {
            name: "Accent".into(),
            value: SemanticColorValue::Token(brand.clone()),
            description: None,
        })
        .expect("semantic");
    app.persist().expect("persist");

    let reopened = boot(dir.path());
    let tokens = &reopened.design_system().expect("system").theme.tokens;
    assert_eq!(tokens.colors[0].id, brand);
    assert_eq!(
        tokens.semantic_colors[0].value.resolve(&tokens.colors),
        Some("#0055FF")
    );
}

#[test]
fn deleting_base_color_leaves_semantic_reference_dangling() {
    let dir = tempdir().expect("tempdir");
    let mut app = boot(dir.path());

    let brand = app
        .design
        .add_color_token(NewColorToken::new("Brand", "#0055FF"))
        .expect("color");
    app.design
        .add_semantic_color_token(NewSemanticColorToken {
            name: "Accent".into(),
            value: SemanticColorValue::Token(brand.clone()),
            description: None,
        })
        .expect("semantic");
    app.design.delete_color_token(&brand);

    let tokens = &app.design_system().expect("system").theme.tokens;
    assert_eq!(tokens.semantic_colors.len(), 1);
    assert_eq!(tokens.semantic_colors[0].value.resolve(&tokens.colors), None);
}

#[test]
fn ai_generation_replaces_placeholder_and_persists() {
    let dir = tempdir().expect("tempdir");
    let mut app = boot(dir.path());
    let placeholder_id = app.design_system().expect("system").id.clone();

    let request = GenerationRequest {
        palette: "purple".into(),
        ..GenerationRequest::new("Nebula")
    };
    let pacing = app.config.pacing.clone();
    let outcome = generate(&mut app.design, &request, &pacing, |_| {});
    app.persist().expect("persist");

    assert_ne!(outcome.design_system_id, placeholder_id);
    assert_eq!(outcome.redirect, Route::CreatorOverview { imported: false });

    let reopened = boot(dir.path());
    let system = reopened.design_system().expect("system");
    assert_eq!(system.name, "Nebula");
    assert_eq!(system.theme.tokens.colors.len(), 6);
    assert_eq!(system.theme.tokens.colors[0].value, "#8B5CF6");
    assert_eq!(system.theme.tokens.typography.len(), 9);

    let checklist = reopened.getting_started().expect("checklist");
    assert!(checklist.items[0].done);
    assert!(checklist.items[1].done);
    assert!(!checklist.items[2].done);
}

#[test]
fn builder_save_then_reopen_updates_in_place() {
    let dir = tempdir().expect("tempdir");
    let mut app = boot(dir.path());
    let tokens = app.design_system().expect("system").theme.tokens.clone();

    let mut canvas = Canvas::new();
    canvas.set_name("Hero");
    canvas.add_element(ElementType::Container, &tokens);
    let title = canvas.add_element(ElementType::Text, &tokens);
    canvas.update_element(
        &title,
        &ElementPatch::Text(TextPatch {
            content: Some("Welcome".into()),
            ..Default::default()
        }),
    );
    assert!(canvas.move_element(&title, MoveDirection::Up));
    let id = canvas.save(&mut app.design).expect("saved");
    assert!(canvas.is_empty());
    app.persist().expect("persist");

    let mut reopened = boot(dir.path());
    let component = reopened.component(&id).expect("component").clone();
    assert_eq!(component.name, "Hero");
    let code = component.code.as_deref().expect("code");
    assert!(code.starts_with("function Hero() {"));
    assert!(code.contains("Welcome"));

    let mut editor = Canvas::new();
    assert!(editor.load(&component));
    assert_eq!(editor.elements[0].element_type(), ElementType::Text);
    editor.add_element(ElementType::Divider, &tokens);
    assert_eq!(editor.save(&mut reopened.design).as_deref(), Some(id.as_str()));

    let system = reopened.design_system().expect("system");
    assert_eq!(system.components.len(), 1);
    assert_eq!(
        system.components[0].builder.as_ref().map(|saved| saved.count),
        Some(3)
    );
}

#[test]
fn type_scale_uses_two_decimal_pixels() {
    let dir = tempdir().expect("tempdir");
    let mut app = boot(dir.path());

    let ids = app.design.generate_type_scale(16.0, 1.25);
    assert_eq!(ids.len(), 8);

    let typography = &app.design_system().expect("system").theme.tokens.typography;
    let base = typography
        .iter()
        .find(|token| token.name == "text-base")
        .expect("base");
    let large = typography
        .iter()
        .find(|token| token.name == "text-lg")
        .expect("lg");
    assert_eq!(base.font_size, "16.00px");
    assert_eq!(large.font_size, "20.00px");
}

#[test]
fn unknown_workspace_switch_keeps_current() {
    let dir = tempdir().expect("tempdir");
    let mut app = boot(dir.path());
    let current = app.users.current_workspace().cloned();

    assert!(!app.users.switch_workspace("nope"));
    assert_eq!(app.users.current_workspace().cloned(), current);

    let acme = app.users.workspaces()[1].id.clone();
    assert!(app.users.switch_workspace(&acme));
    app.persist().expect("persist");

    let reopened = boot(dir.path());
    assert_eq!(
        reopened.users.current_workspace().map(|w| w.slug.as_str()),
        Some("acme-corp")
    );
}

#[test]
fn publish_touches_timestamp_only() {
    let dir = tempdir().expect("tempdir");
    let clock = Rc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 9, 1, 10, 0, 0).unwrap(),
    ));
    let config = MockmanConfig::new(dir.path()).with_pacing(Pacing::instant());
    let mut app = App::bootstrap_with_clock(config, clock.clone()).expect("bootstrap");
    let before = app.design_system().expect("system").clone();

    clock.advance(Duration::minutes(30));
    assert!(overview::publish(&mut app.design, &app.config.pacing));

    let after = app.design_system().expect("system");
    assert_eq!(after.name, before.name);
    assert_eq!(after.description, before.description);
    assert_eq!(after.updated_at, before.updated_at + Duration::minutes(30));
}
