//! Terminal output helpers
//!
//! Uses `cliclack` log lines when attached to a terminal and plain bracketed
//! status lines otherwise, so CI logs stay readable.

mod context;
mod output;
mod theme;

pub use context::UiContext;
pub use output::{
    intro, key_value, remark, step_error_detail, step_info, step_ok, step_ok_detail,
    step_warn_hint,
};
pub use theme::{init_theme, GitVarsTheme};
