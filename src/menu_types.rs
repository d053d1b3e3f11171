// Which screen the front end is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    Options,
    Game,
}

// Menu option selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    NewGame,
    Options,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsOption {
    GhostToggle,
    GridToggle,
    Back,
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub state: MenuState,
    pub selected_option: MenuOption,
    pub options_selected: OptionsOption,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            state: MenuState::MainMenu,
            selected_option: MenuOption::NewGame,
            options_selected: OptionsOption::GhostToggle,
        }
    }
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }
}
