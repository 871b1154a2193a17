use crate::tokens::ColorToken;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonVariant {
    pub id: &'static str,
    pub name: &'static str,
    pub background: String,
    pub foreground: String,
    pub border: Option<String>,
    pub hover_background: Option<String>,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonSize {
    pub id: &'static str,
    pub name: &'static str,
    pub height: &'static str,
    pub padding_x: &'static str,
    pub padding_y: &'static str,
    pub font_size: &'static str,
    pub border_radius: &'static str,
}

pub const DEFAULT_VARIANT: &str = "primary";
pub const DEFAULT_SIZE: &str = "md";

pub const BUTTON_SIZES: [ButtonSize; 3] = [
    ButtonSize {
        id: "sm",
        name: "Small",
        height: "36px",
        padding_x: "12px",
        padding_y: "8px",
        font_size: "14px",
        border_radius: "6px",
    },
    ButtonSize {
        id: "md",
        name: "Medium",
        height: "40px",
        padding_x: "16px",
        padding_y: "10px",
        font_size: "14px",
        border_radius: "8px",
    },
    ButtonSize {
        id: "lg",
        name: "Large",
        height: "48px",
        padding_x: "24px",
        padding_y: "12px",
        font_size: "16px",
        border_radius: "8px",
    },
];

/// Button variants. Primary picks up the first palette color when one exists.
pub fn button_variants(colors: &[ColorToken]) -> Vec<ButtonVariant> {
    let brand = colors.first().map(|color| color.value.clone());
    vec![
        ButtonVariant {
            id: "primary",
            name: "Primary",
            background: brand.clone().unwrap_or_else(|| "#18181b".to_string()),
            foreground: "#ffffff".to_string(),
            border: None,
            hover_background: Some(brand.unwrap_or_else(|| "#27272a".to_string())),
            description: "Main call-to-action",
        },
        ButtonVariant {
            id: "secondary",
            name: "Secondary",
            background: "#f4f4f5".to_string(),
            foreground: "#18181b".to_string(),
            border: None,
            hover_background: Some("#e4e4e7".to_string()),
            description: "Secondary actions",
        },
        ButtonVariant {
            id: "outline",
            name: "Outline",
            background: "transparent".to_string(),
            foreground: "#18181b".to_string(),
            border: Some("1px solid #e4e4e7".to_string()),
            hover_background: Some("#f4f4f5".to_string()),
            description: "Outlined style",
        },
        ButtonVariant {
            id: "ghost",
            name: "Ghost",
            background: "transparent".to_string(),
            foreground: "#18181b".to_string(),
            border: None,
            hover_background: Some("#f4f4f5".to_string()),
            description: "Minimal style",
        },
        ButtonVariant {
            id: "destructive",
            name: "Destructive",
            background: "#ef4444".to_string(),
            foreground: "#ffffff".to_string(),
            border: None,
            hover_background: Some("#dc2626".to_string()),
            description: "Dangerous actions",
        },
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonOptions {
    pub variant: String,
    pub size: String,
    pub text: String,
    pub show_icon: bool,
    pub disabled: bool,
    pub loading: bool,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            variant: DEFAULT_VARIANT.to_string(),
            size: DEFAULT_SIZE.to_string(),
            text: "Button".to_string(),
            show_icon: false,
            disabled: false,
            loading: false,
        }
    }
}

/// Unknown ids fall back to primary / medium.
pub fn resolve(colors: &[ColorToken], options: &ButtonOptions) -> (ButtonVariant, ButtonSize) {
    let mut variants = button_variants(colors);
    let ix = variants
        .iter()
        .position(|variant| variant.id == options.variant)
        .unwrap_or(0);
    let variant = variants.swap_remove(ix);
    let size = BUTTON_SIZES
        .iter()
        .copied()
        .find(|size| size.id == options.size)
        .unwrap_or(BUTTON_SIZES[1]);
    (variant, size)
}

pub fn button_style(colors: &[ColorToken], options: &ButtonOptions) -> Vec<(&'static str, String)> {
    let (variant, size) = resolve(colors, options);
    let blocked = options.disabled || options.loading;
    vec![
        ("background", variant.background),
        ("color", variant.foreground),
        ("border", variant.border.unwrap_or_else(|| "none".to_string())),
        ("height", size.height.to_string()),
        ("padding", format!("{} {}", size.padding_y, size.padding_x)),
        ("font-size", size.font_size.to_string()),
        ("border-radius", size.border_radius.to_string()),
        ("font-weight", "500".to_string()),
        (
            "cursor",
            if blocked { "not-allowed" } else { "pointer" }.to_string(),
        ),
        (
            "opacity",
            if options.disabled { "0.5" } else { "1" }.to_string(),
        ),
    ]
}

/// JSX usage snippet; default variant and size are left implicit.
pub fn button_snippet(options: &ButtonOptions) -> String {
    let mut attrs = Vec::new();
    if options.variant != DEFAULT_VARIANT {
        attrs.push(format!("variant=\"{}\"", options.variant));
    }
    if options.size != DEFAULT_SIZE {
        attrs.push(format!("size=\"{}\"", options.size));
    }
    if options.disabled {
        attrs.push("disabled".to_string());
    }
    if options.loading {
        attrs.push("loading".to_string());
    }
    let attrs = if attrs.is_empty() {
        String::new()
    } else {
        format!(" {}", attrs.join(" "))
    };
    let icon = if options.show_icon && options.loading {
        "<Loader2 className=\"h-4 w-4 animate-spin\" />"
    } else {
        ""
    };
    format!("<Button{attrs}>\n  {icon}{}\n</Button>", options.text)
}
