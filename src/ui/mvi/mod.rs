//! Model-View-Intent primitives for the browser's screen state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ ViewTree ──→ Frame
//!    ↑                                           │
//!    └──────────── key / mouse / resize ─────────┘
//! ```
//!
//! - **State**: plain value describing what is on screen
//! - **Intent**: user action or host event
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
