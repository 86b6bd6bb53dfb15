//! Application: configuration, markup emission, attaching to the host.
//!
//! [`Application::new`] compiles the composition and writes the markup to
//! [`AppConfig::markup_path`] before the host starts. Once the host has
//! loaded that file, [`Application::attach`] binds the live graph and returns
//! the running [`Window`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::compose::Composition;
use crate::error::{Error, Result};
use crate::live::Host;
use crate::markup::compile;
use crate::style::{ParseError, StyleTable, Value};
use crate::window::Window;

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the compiled markup is written for the host to load.
    pub markup_path: PathBuf,
    /// Optional window title, overriding the frame's declared title.
    pub title: Option<String>,
    /// The style table handed to the window's style machine.
    pub style: StyleTable,
    /// Check the style table for missing selectors before compiling.
    pub validate_style: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            markup_path: default_markup_path(),
            title: None,
            style: StyleTable::builtin(),
            validate_style: true,
        }
    }
}

/// `<temp dir>/cell-ui/main.qml`
pub fn default_markup_path() -> PathBuf {
    std::env::temp_dir().join("cell-ui").join("main.qml")
}

impl AppConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the markup output path (builder).
    pub fn with_markup_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.markup_path = path.into();
        self
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the style table (builder).
    pub fn with_style(mut self, style: StyleTable) -> Self {
        self.style = style;
        self
    }

    /// Parse and set the style table from its text form.
    pub fn with_style_text(mut self, text: &str) -> Result<Self, ParseError> {
        self.style = StyleTable::parse(text)?;
        Ok(self)
    }

    /// Enable or disable load-time style validation (builder).
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_style = validate;
        self
    }
}

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

/// A compiled composition waiting for its host.
#[derive(Debug)]
pub struct Application {
    config: AppConfig,
    composition: Composition,
    markup: String,
}

impl Application {
    /// Validate the style table, compile the composition and write the
    /// markup file. Nothing is written when compilation fails.
    pub fn new(config: AppConfig, composition: Composition) -> Result<Self> {
        if config.validate_style {
            config.style.validate()?;
        }
        let markup = compile(&composition)?;
        write_markup(&config.markup_path, &markup)?;
        tracing::debug!(
            "wrote {} bytes of markup to {}",
            markup.len(),
            config.markup_path.display()
        );
        Ok(Self {
            config,
            composition,
            markup,
        })
    }

    /// The configuration the application was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The declared composition.
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// The markup written to [`markup_path`](Self::markup_path).
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Where the compiled markup was written.
    pub fn markup_path(&self) -> &Path {
        &self.config.markup_path
    }

    /// Bind to a host that has loaded the markup and apply the initial
    /// styles.
    pub fn attach<H: Host>(self, mut host: H) -> Result<Window<H>> {
        if let Some(title) = &self.config.title {
            let window = host.window();
            host.set_property(window, "title", Value::Text(title.clone()))?;
        }
        Window::attach(self.composition, host, self.config.style)
    }
}

fn write_markup(path: &Path, markup: &str) -> Result<()> {
    let io = |source: std::io::Error| Error::Io {
        path: path.to_owned(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io)?;
    }
    fs::write(path, markup).map_err(io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{Button, MainFrame, Row};
    use crate::markup::CompileError;
    use crate::style::StyleError;
    use crate::testing::HeadlessHost;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("cell-ui-test-{}", std::process::id()))
            .join(name)
            .join("main.qml")
    }

    fn demo() -> Composition {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Demo"));
        let row = ui.add(root, "row", Row::new()).unwrap();
        ui.add(row, "ok", Button::new("OK")).unwrap();
        ui
    }

    // ── AppConfig ─────────────────────────────────────────────────────

    #[test]
    fn config_defaults() {
        let config = AppConfig::new();
        assert!(config.markup_path.ends_with("cell-ui/main.qml"));
        assert!(config.title.is_none());
        assert!(config.validate_style);
        assert_eq!(config.style, StyleTable::builtin());
    }

    #[test]
    fn config_builders() {
        let config = AppConfig::new()
            .with_markup_path("/tmp/x.qml")
            .with_title("Hello")
            .with_validation(false)
            .with_style(StyleTable::new());
        assert_eq!(config.markup_path, PathBuf::from("/tmp/x.qml"));
        assert_eq!(config.title.as_deref(), Some("Hello"));
        assert!(!config.validate_style);
        assert!(config.style.is_empty());
    }

    #[test]
    fn config_style_text() {
        let config = AppConfig::new()
            .with_style_text("[Label]\nfont_color = #fff\n")
            .unwrap();
        assert_eq!(config.style.get("Label", "font_color"), Some(&Value::color("#fff")));
        assert!(AppConfig::new().with_style_text("[Label\n").is_err());
    }

    // ── Application ───────────────────────────────────────────────────

    #[test]
    fn new_writes_markup() {
        let path = scratch("writes");
        let app = Application::new(AppConfig::new().with_markup_path(&path), demo()).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, app.markup());
        assert_eq!(app.markup_path(), path.as_path());
        assert!(written.contains("objectName: \"ok\""));
    }

    #[test]
    fn invalid_style_fails_before_writing() {
        let path = scratch("invalid-style");
        let config = AppConfig::new()
            .with_markup_path(&path)
            .with_style(StyleTable::new());
        let err = Application::new(config, demo()).unwrap_err();
        assert!(matches!(err, Error::Style(StyleError::UnknownStyleSelector(_))));
        assert!(!path.exists());
    }

    #[test]
    fn empty_composition_fails_before_writing() {
        let path = scratch("empty");
        let err = Application::new(AppConfig::new().with_markup_path(&path), Composition::new())
            .unwrap_err();
        assert!(matches!(err, Error::Compile(CompileError::EmptyTree)));
        assert!(!path.exists());
    }

    #[test]
    fn attach_sets_title_and_styles() {
        let path = scratch("attach");
        let config = AppConfig::new().with_markup_path(&path).with_title("Renamed");
        let app = Application::new(config, demo()).unwrap();
        let host = HeadlessHost::from_markup(app.markup());
        let window = app.attach(host).unwrap();

        let live = window.host().window();
        assert_eq!(window.host().property(live, "title"), Some(Value::from("Renamed")));
        assert!(window.binding().is_complete());
        assert_eq!(window.machine().tracked(), 1);
    }
}
