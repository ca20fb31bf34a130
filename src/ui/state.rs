//! The state contract shared by everything living on the [`StateStack`]
//!
//! [`StateStack`]: super::StateStack

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::platform::{Font, InputEvent, KeyboardState};
use crate::renderer::Canvas;
use crate::settings::Settings;

/// Whether a call should continue to the state below
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Forward the call to the next (lower) state
    Bubble,
    /// The call ends at this state
    Stop,
}

/// Name and disposal flag of a state. Disposal is one-way.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    name: String,
    disposed: bool,
}

impl Lifecycle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            disposed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dispose(&mut self) {
        if !self.disposed {
            log::debug!("disposing state({})", self.name);
            self.disposed = true;
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// Shared resources owned by the application loop
pub struct Resources {
    pub settings: Settings,
    pub font: Font,
    /// Randomness for decorative effects
    pub rng: Pcg32,
}

impl Resources {
    pub fn new(settings: Settings, font: Font) -> Self {
        let rng = Pcg32::seed_from_u64(settings.seed);
        Self {
            settings,
            font,
            rng,
        }
    }
}

/// Handle passed to states during input and update dispatch.
///
/// States read shared resources through it and request new states with
/// [`Context::push`]. Pushed states are appended to the stack once the
/// current pass is over.
pub struct Context<'a> {
    pub settings: &'a Settings,
    pub font: &'a Font,
    pub rng: &'a mut Pcg32,
    /// Live keyboard state, for controllers that poll keys
    pub keyboard: &'a dyn KeyboardState,
    pending: Vec<Box<dyn State>>,
}

impl<'a> Context<'a> {
    pub fn new(resources: &'a mut Resources, keyboard: &'a dyn KeyboardState) -> Self {
        Self {
            settings: &resources.settings,
            font: &resources.font,
            rng: &mut resources.rng,
            keyboard,
            pending: Vec::new(),
        }
    }

    /// Queue a state to be pushed on top of the stack
    pub fn push(&mut self, state: Box<dyn State>) {
        log::debug!("queued push of state({})", state.name());
        self.pending.push(state);
    }

    /// States queued so far, in push order
    pub fn into_pending(self) -> Vec<Box<dyn State>> {
        self.pending
    }
}

/// A state on the stack: handles input, updates, draws itself and keeps
/// track of whether it is finished.
pub trait State {
    fn lifecycle(&self) -> &Lifecycle;
    fn lifecycle_mut(&mut self) -> &mut Lifecycle;

    fn name(&self) -> &str {
        self.lifecycle().name()
    }

    /// Mark the state as finished. It is removed after the next draw pass.
    fn dispose(&mut self) {
        self.lifecycle_mut().dispose();
    }

    fn is_disposed(&self) -> bool {
        self.lifecycle().is_disposed()
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut Context<'_>) -> Propagation;

    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> Propagation;

    fn draw(&self, canvas: &mut dyn Canvas);

    /// Whether the states beneath this one are drawn at all
    fn draws_state_below(&self) -> bool {
        true
    }
}
