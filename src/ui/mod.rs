//! UI states and the stack that runs them
//!
//! - `state`: the [`State`] contract, propagation and the dispatch context
//! - `stack`: [`StateStack`], routing input/update/draw and disposal
//! - `game`: a running match
//! - `menu`: selectable entry lists, including the main menu
//! - `text`: decorative animated text

pub mod game;
pub mod menu;
pub mod stack;
pub mod state;
pub mod text;

pub use game::GameState;
pub use menu::{Menu, MenuAction, MenuFlow};
pub use stack::StateStack;
pub use state::{Context, Lifecycle, Propagation, Resources, State};
pub use text::TextState;
