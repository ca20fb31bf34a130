//! Menus
//!
//! A menu is a vertical list of labelled entries, each with an action that
//! receives the menu itself plus the dispatch context, so it can push new
//! states, read settings and fonts, or dispose the menu. Up/Down move the
//! selection (wrapping both ways), Enter runs the selected action and Escape
//! disposes the menu. The selected entry pulses orange.

use glam::Vec2;

use super::game::GameState;
use super::state::{Context, Lifecycle, Propagation, State};
use super::text::TextState;
use crate::consts::CHAR_SIZE;
use crate::platform::{Font, InputEvent, Key};
use crate::renderer::{Canvas, Color, Label};
use crate::sim::PaddleMode;
use crate::{advance_pulse, pulse_opacity};

/// Action run when an entry is activated
pub type MenuAction = fn(&mut Menu, &mut Context<'_>);

/// How calls travel past the menu to the states beneath it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuFlow {
    pub input: Propagation,
    pub update: Propagation,
    pub draw_below: bool,
}

impl Default for MenuFlow {
    /// Consume input, let everything beneath keep running and stay visible
    fn default() -> Self {
        Self {
            input: Propagation::Stop,
            update: Propagation::Bubble,
            draw_below: true,
        }
    }
}

struct MenuEntry {
    label: Label,
    action: MenuAction,
}

pub struct Menu {
    life: Lifecycle,
    entries: Vec<MenuEntry>,
    selected: usize,
    /// Highlight phase, 0..HIGHLIGHT_PERIOD
    alpha: f32,
    flow: MenuFlow,
}

impl Menu {
    /// Lay entries out centred on the screen, starting 1/12 from the top with
    /// 1.5 line heights between consecutive entries
    pub fn new(
        name: impl Into<String>,
        font: &Font,
        screen_size: Vec2,
        entries: Vec<(String, MenuAction)>,
        flow: MenuFlow,
    ) -> Self {
        let mut position = Vec2::new(screen_size.x / 2.0, screen_size.y / 12.0);
        let step = font.line_height(CHAR_SIZE) * 1.5;
        let entries = entries
            .into_iter()
            .map(|(text, action)| {
                let width = font.text_width(&text, CHAR_SIZE);
                let label = Label::new(text, position - Vec2::new(width / 2.0, 0.0), CHAR_SIZE);
                position.y += step;
                MenuEntry { label, action }
            })
            .collect();

        Self {
            life: Lifecycle::new(name),
            entries,
            selected: 0,
            alpha: 0.0,
            flow,
        }
    }

    /// The title menu: start a match in one of the paddle modes, show the
    /// about screen, or quit.
    ///
    /// Five entries on purpose: besides the singleplayer, two player and exit
    /// entries it also offers the AI vs AI demo match and the about screen.
    pub fn main_menu(font: &Font, screen_size: Vec2) -> Self {
        let entries: Vec<(String, MenuAction)> = vec![
            ("Singleplayer (Up/Down)".to_string(), start_singleplayer as MenuAction),
            ("2 Player (W/S, Up/Down)".to_string(), start_two_player),
            ("Demo (AI vs AI)".to_string(), start_demo),
            ("About".to_string(), show_about),
            ("Exit".to_string(), exit_menu),
        ];
        Self::new("Menu", font, screen_size, entries, MenuFlow::default())
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_label(&self, index: usize) -> Option<&Label> {
        self.entries.get(index).map(|e| &e.label)
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.select((self.selected + 1) % self.entries.len());
        }
    }

    pub fn select_previous(&mut self) {
        let n = self.entries.len();
        if n > 0 {
            self.select((self.selected + n - 1) % n);
        }
    }

    fn select(&mut self, index: usize) {
        self.entries[self.selected].label.style.fill = Color::BLACK;
        self.selected = index;
        self.entries[self.selected].label.style.fill = Color::GREEN;
    }

    /// Run the selected entry's action
    pub fn activate(&mut self, ctx: &mut Context<'_>) {
        let Some(entry) = self.entries.get(self.selected) else {
            return;
        };
        log::info!("Selected {}", entry.label.text);
        let action = entry.action;
        action(self, ctx);
    }
}

impl State for Menu {
    fn lifecycle(&self) -> &Lifecycle {
        &self.life
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.life
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut Context<'_>) -> Propagation {
        if let InputEvent::KeyPressed(key) = *event {
            match key {
                Key::Escape => self.dispose(),
                Key::Down => self.select_next(),
                Key::Up => self.select_previous(),
                Key::Enter => self.activate(ctx),
                _ => {}
            }
        }
        self.flow.input
    }

    fn update(&mut self, dt: f32, _ctx: &mut Context<'_>) -> Propagation {
        self.alpha = advance_pulse(self.alpha, dt);
        let opacity = pulse_opacity(self.alpha);
        if let Some(entry) = self.entries.get_mut(self.selected) {
            entry.label.style.fill = Color::ORANGE.with_alpha(opacity);
        }
        self.flow.update
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        for entry in &self.entries {
            canvas.draw_label(&entry.label);
        }
    }

    fn draws_state_below(&self) -> bool {
        self.flow.draw_below
    }
}

fn start_game(ctx: &mut Context<'_>, left: PaddleMode, right: PaddleMode) {
    match GameState::new(ctx.settings, ctx.font, left, right) {
        Ok(game) => ctx.push(Box::new(game)),
        Err(e) => log::error!("Cannot start game: {}", e),
    }
}

fn start_singleplayer(_menu: &mut Menu, ctx: &mut Context<'_>) {
    start_game(ctx, PaddleMode::Ai, PaddleMode::Keyboard);
}

fn start_two_player(_menu: &mut Menu, ctx: &mut Context<'_>) {
    start_game(ctx, PaddleMode::Keyboard, PaddleMode::Keyboard);
}

fn start_demo(_menu: &mut Menu, ctx: &mut Context<'_>) {
    start_game(ctx, PaddleMode::Ai, PaddleMode::Ai);
}

fn show_about(_menu: &mut Menu, ctx: &mut Context<'_>) {
    let title = TextState::title("STACK PONG", ctx);
    ctx.push(Box::new(title));
}

fn exit_menu(menu: &mut Menu, _ctx: &mut Context<'_>) {
    menu.dispose();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeldKeys;
    use crate::renderer::RecordingCanvas;
    use crate::ui::Resources;
    use crate::ui::testing::resources;

    fn main_menu(res: &Resources) -> Menu {
        Menu::main_menu(&res.font, res.settings.screen_size)
    }

    fn press(menu: &mut Menu, key: Key, res: &mut Resources) -> (Propagation, Vec<String>) {
        let keys = HeldKeys::new();
        let mut ctx = Context::new(res, &keys);
        let flow = menu.handle_input(&InputEvent::KeyPressed(key), &mut ctx);
        let pushed = ctx
            .into_pending()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        (flow, pushed)
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut res = resources();
        let mut menu = main_menu(&res);
        let n = menu.len();
        assert_eq!(n, 5);

        press(&mut menu, Key::Up, &mut res);
        assert_eq!(menu.selected(), n - 1);
        press(&mut menu, Key::Down, &mut res);
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn test_selection_reverts_previous_highlight() {
        let mut res = resources();
        let mut menu = main_menu(&res);
        press(&mut menu, Key::Down, &mut res);
        assert_eq!(menu.entry_label(0).unwrap().style.fill, Color::BLACK);
        assert_eq!(menu.entry_label(1).unwrap().style.fill, Color::GREEN);
    }

    #[test]
    fn test_highlight_pulses() {
        let mut res = resources();
        let keys = HeldKeys::new();
        let mut menu = main_menu(&res);
        let mut ctx = Context::new(&mut res, &keys);

        assert_eq!(menu.update(0.25, &mut ctx), Propagation::Bubble);
        assert_eq!(menu.entry_label(0).unwrap().style.fill, Color::ORANGE.with_alpha(128));
        menu.update(0.25, &mut ctx);
        assert_eq!(menu.entry_label(0).unwrap().style.fill.a, 0);
        // Unselected entries keep the base colour
        assert_eq!(menu.entry_label(1).unwrap().style.fill, Color::BLACK);
    }

    #[test]
    fn test_enter_starts_selected_game() {
        let mut res = resources();
        let mut menu = main_menu(&res);
        let (flow, pushed) = press(&mut menu, Key::Enter, &mut res);
        assert_eq!(flow, Propagation::Stop);
        assert_eq!(pushed, vec!["GameState"]);
        assert!(!menu.is_disposed());
    }

    #[test]
    fn test_about_pushes_title_text() {
        let mut res = resources();
        let mut menu = main_menu(&res);
        press(&mut menu, Key::Up, &mut res);
        press(&mut menu, Key::Up, &mut res);
        let (_, pushed) = press(&mut menu, Key::Enter, &mut res);
        assert_eq!(pushed, vec!["TextState"]);
    }

    #[test]
    fn test_exit_entry_and_escape_dispose() {
        let mut res = resources();
        let mut menu = main_menu(&res);
        press(&mut menu, Key::Up, &mut res);
        let (_, pushed) = press(&mut menu, Key::Enter, &mut res);
        assert!(pushed.is_empty());
        assert!(menu.is_disposed());

        let mut other = main_menu(&res);
        press(&mut other, Key::Escape, &mut res);
        assert!(other.is_disposed());
    }

    #[test]
    fn test_entries_are_centred_and_stacked() {
        let res = resources();
        let menu = main_menu(&res);
        let first = menu.entry_label(0).unwrap();
        let second = menu.entry_label(1).unwrap();
        let width = res.font.text_width(&first.text, CHAR_SIZE);
        assert!((first.pos.x + width / 2.0 - 400.0).abs() < 1e-3);
        assert_eq!(first.pos.y, 50.0);
        assert!((second.pos.y - first.pos.y - res.font.line_height(CHAR_SIZE) * 1.5).abs() < 1e-3);
    }

    #[test]
    fn test_custom_flow_and_empty_menu() {
        let mut res = resources();
        let flow = MenuFlow {
            input: Propagation::Bubble,
            update: Propagation::Stop,
            draw_below: false,
        };
        let mut menu = Menu::new("Empty", &res.font, Vec2::new(800.0, 600.0), Vec::new(), flow);
        assert!(menu.is_empty());
        let (input, pushed) = press(&mut menu, Key::Enter, &mut res);
        assert_eq!(input, Propagation::Bubble);
        assert!(pushed.is_empty());
        press(&mut menu, Key::Down, &mut res);
        assert_eq!(menu.selected(), 0);
        assert!(!menu.draws_state_below());

        let mut canvas = RecordingCanvas::new();
        menu.draw(&mut canvas);
        assert!(canvas.commands.is_empty());
    }
}
