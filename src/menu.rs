use crate::input::Key;
use crate::mode::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Practice(Mode),
    Quit,
}

impl MenuItem {
    pub fn label(&self) -> String {
        match self {
            MenuItem::Practice(mode) => {
                format!("[{}] {}", mode.shortcut().to_ascii_uppercase(), mode.title())
            }
            MenuItem::Quit => "[Q] Quit".to_string(),
        }
    }
}

pub const MENU_ITEMS: [MenuItem; 5] = [
    MenuItem::Practice(Mode::Morse),
    MenuItem::Practice(Mode::Braille),
    MenuItem::Practice(Mode::Semaphore),
    MenuItem::Practice(Mode::A1z26),
    MenuItem::Quit,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Start(Mode),
    Quit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    pub fn selected_item(&self) -> MenuItem {
        MENU_ITEMS[self.selected % MENU_ITEMS.len()]
    }

    pub fn on_key(&mut self, key: Key) -> MenuAction {
        match key {
            Key::Up => {
                self.selected = (self.selected + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
                MenuAction::None
            }
            Key::Down => {
                self.selected = (self.selected + 1) % MENU_ITEMS.len();
                MenuAction::None
            }
            Key::Enter => match self.selected_item() {
                MenuItem::Practice(mode) => MenuAction::Start(mode),
                MenuItem::Quit => MenuAction::Quit,
            },
            Key::Char('q') | Key::Char('Q') | Key::Interrupt => MenuAction::Quit,
            Key::Char(c) => Mode::from_shortcut(c).map_or(MenuAction::None, MenuAction::Start),
            _ => MenuAction::None,
        }
    }
}
