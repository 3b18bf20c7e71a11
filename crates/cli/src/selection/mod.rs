//! Menu assembly and interpretation of the chosen line.
//!
//! The menu itself is an external program (see
//! [`rust_launch_core::selector`]); this module decides what it shows and
//! what to launch for the line it returns.

pub mod menu;
pub mod record;
pub mod resolve;
pub mod types;

// Re-exports for convenience
pub use menu::build_menu_items;
pub use record::act_then_record;
pub use resolve::{resolve_choice, TERMINAL_SUFFIX};
pub use types::{ChoiceKind, ResolvedChoice};
