//! cliclack theme

use crate::ui::UiContext;
use cliclack::ThemeState;
use console::Style;

/// Green accents, red on failure, dimmed when cancelled
#[derive(Debug, Clone, Default)]
pub struct GitVarsTheme;

impl GitVarsTheme {
    fn accent(state: &ThemeState) -> Style {
        match state {
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Cancel => Style::new().dim(),
            ThemeState::Active | ThemeState::Submit => Style::new().green(),
        }
    }
}

impl cliclack::Theme for GitVarsTheme {
    fn bar_color(&self, state: &ThemeState) -> Style {
        Self::accent(state)
    }

    fn state_symbol_color(&self, state: &ThemeState) -> Style {
        Self::accent(state)
    }
}

/// Install the theme when output is styled; plain output never reaches cliclack
pub fn init_theme(ctx: &UiContext) {
    if ctx.use_fancy_output() {
        cliclack::set_theme(GitVarsTheme);
    }
}
