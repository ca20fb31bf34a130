//! State stack
//!
//! Input and update calls go to the topmost state first and travel down the
//! stack for as long as each state answers [`Propagation::Bubble`]. Drawing
//! runs the other way round: the lowest visible state is painted first so
//! the states above it end up on top. Which state is lowest visible is still
//! decided from the top, by the first state that hides what is beneath it.
//!
//! Disposed states are dropped after each draw pass, so a state disposed
//! during input or update still appears in that frame.

use super::state::{Context, Propagation, Resources, State};
use crate::platform::{InputEvent, KeyboardState};
use crate::renderer::Canvas;

/// Ordered stack of owned states, top = most recently pushed
#[derive(Default)]
pub struct StateStack {
    states: Vec<Box<dyn State>>,
}

impl StateStack {
    pub fn new() -> Self {
        log::debug!("StateStack initialized");
        Self { states: Vec::new() }
    }

    pub fn push(&mut self, state: Box<dyn State>) {
        log::debug!(
            "push state({}) onto stack (len: {})",
            state.name(),
            self.states.len()
        );
        self.states.push(state);
    }

    /// Remove and return the topmost state
    pub fn pop(&mut self) -> Option<Box<dyn State>> {
        let state = self.states.pop();
        if let Some(state) = &state {
            log::debug!("pop state({})", state.name());
        }
        state
    }

    /// No states left; the application loop should end
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// State names from bottom to top
    pub fn names(&self) -> Vec<&str> {
        self.states.iter().map(|s| s.name()).collect()
    }

    /// Route an input event from the top down.
    ///
    /// Always reports [`Propagation::Stop`]: the stack is the end of the line.
    pub fn handle_input(
        &mut self,
        event: &InputEvent,
        resources: &mut Resources,
        keyboard: &dyn KeyboardState,
    ) -> Propagation {
        log::trace!("stack handle input {:?}", event);
        self.dispatch(resources, keyboard, |state, ctx| state.handle_input(event, ctx))
    }

    /// Advance states from the top down. Same propagation rules as input.
    pub fn update(
        &mut self,
        dt: f32,
        resources: &mut Resources,
        keyboard: &dyn KeyboardState,
    ) -> Propagation {
        log::trace!("stack update dt={:.4}", dt);
        self.dispatch(resources, keyboard, |state, ctx| state.update(dt, ctx))
    }

    fn dispatch<F>(&mut self, resources: &mut Resources, keyboard: &dyn KeyboardState, mut call: F) -> Propagation
    where
        F: FnMut(&mut dyn State, &mut Context<'_>) -> Propagation,
    {
        let mut ctx = Context::new(resources, keyboard);
        for state in self.states.iter_mut().rev() {
            // Disposed states wait for removal and no longer take part
            if state.is_disposed() {
                continue;
            }
            log::trace!("   ...state({})", state.name());
            if call(state.as_mut(), &mut ctx) == Propagation::Stop {
                break;
            }
        }
        for state in ctx.into_pending() {
            self.push(state);
        }
        Propagation::Stop
    }

    /// Draw from the lowest visible state upwards, then drop disposed states
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        let lowest = self
            .states
            .iter()
            .rposition(|s| !s.draws_state_below())
            .unwrap_or(0);
        for state in &self.states[lowest..] {
            log::trace!("   ...draw state({})", state.name());
            state.draw(canvas);
        }
        self.clean_up_disposed();
    }

    fn clean_up_disposed(&mut self) {
        self.states.retain(|state| {
            if state.is_disposed() {
                log::debug!("removing disposed state({})", state.name());
                false
            } else {
                true
            }
        });
    }
}
