use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mockman", version, about = "Local design-system workbench")]
pub struct Cli {
    /// Directory holding the JSON snapshots. Overrides MOCKMAN_DATA_DIR.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Skip the simulated delays.
    #[arg(long, global = true)]
    pub instant: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the page at a route.
    Show {
        #[arg(default_value = "/")]
        route: String,
    },
    /// List every known route.
    Routes,
    #[command(subcommand)]
    User(UserCommand),
    #[command(subcommand)]
    System(SystemCommand),
    #[command(subcommand)]
    Colors(ColorCommand),
    #[command(subcommand)]
    Semantic(SemanticCommand),
    #[command(subcommand)]
    Typography(TypographyCommand),
    #[command(subcommand)]
    Components(ComponentCommand),
    /// Compose a component from `--element` descriptions and save it.
    Builder(BuilderArgs),
    #[command(subcommand)]
    Buttons(ButtonCommand),
    /// Generate a design system from a brand brief.
    Generate(GenerateArgs),
    /// Walk the import flow for an existing codebase.
    Import(ImportArgs),
    /// Stats, getting-started checklist and publishing.
    Overview(OverviewArgs),
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    Show,
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
        #[arg(long, conflicts_with = "avatar")]
        clear_avatar: bool,
        /// free, pro or enterprise.
        #[arg(long)]
        plan: Option<String>,
    },
    /// Switch the active workspace by id or slug.
    Switch { workspace: String },
}

#[derive(Debug, Subcommand)]
pub enum SystemCommand {
    Info,
    Rename {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete the design system. Requires --yes.
    Delete {
        #[arg(long)]
        yes: bool,
    },
    /// Start over with an untitled design system.
    Create,
}

#[derive(Debug, Subcommand)]
pub enum ColorCommand {
    List,
    Add {
        name: String,
        value: String,
        #[arg(long)]
        description: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        value: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Remove { id: String },
}

#[derive(Debug, Subcommand)]
pub enum SemanticCommand {
    List,
    Add {
        name: String,
        /// A hex color, or `token:<color-id>` to reference a palette color.
        value: String,
        #[arg(long)]
        description: Option<String>,
    },
    Remove { id: String },
}

#[derive(Debug, Subcommand)]
pub enum TypographyCommand {
    List,
    /// Append a modular type scale.
    Scale {
        #[arg(long, default_value_t = mockman_core::typography::DEFAULT_BASE_SIZE)]
        base: f64,
        /// Numeric ratio or a named one such as "Perfect Fourth".
        #[arg(long, default_value = "1.25")]
        ratio: String,
    },
    Remove { id: String },
}

#[derive(Debug, Subcommand)]
pub enum ComponentCommand {
    List,
    Remove {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Print the stored JSX for a component.
    Code { id: String },
}

#[derive(Debug, Args)]
pub struct BuilderArgs {
    /// Component name; defaults to MyComponent, or the saved name with --edit.
    #[arg(long)]
    pub name: Option<String>,
    /// `type[:key=value,...]`, e.g. `text:content=Hello,color=#111111`.
    #[arg(long = "element")]
    pub elements: Vec<String>,
    /// Reopen a saved component and append to it.
    #[arg(long)]
    pub edit: Option<String>,
    /// Print the preview markup and code without saving.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum ButtonCommand {
    /// Print the usage snippet and resolved style for a button.
    Snippet {
        #[arg(long, default_value = mockman_core::buttons::DEFAULT_VARIANT)]
        variant: String,
        #[arg(long, default_value = mockman_core::buttons::DEFAULT_SIZE)]
        size: String,
        #[arg(long, default_value = "Button")]
        text: String,
        #[arg(long)]
        icon: bool,
        #[arg(long)]
        disabled: bool,
        #[arg(long)]
        loading: bool,
    },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    pub brand: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "modern")]
    pub style: String,
    #[arg(long, default_value = "blue")]
    pub palette: String,
    #[arg(long, default_value = "professional")]
    pub vibe: String,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// file, github or url.
    #[arg(long, default_value = "file")]
    pub method: String,
    #[arg(long)]
    pub project: String,
    #[arg(long)]
    pub source: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct OverviewArgs {
    #[arg(long, conflicts_with = "restore")]
    pub dismiss: bool,
    #[arg(long)]
    pub restore: bool,
    #[arg(long, conflicts_with = "save_draft")]
    pub publish: bool,
    #[arg(long)]
    pub save_draft: bool,
}
