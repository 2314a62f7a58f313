#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    Simulation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Toggle,
}

impl Screen {
    pub fn transition(self, event: ScreenEvent) -> Self {
        match (self, event) {
            (Screen::MainMenu, ScreenEvent::Toggle) => Screen::Simulation,
            (Screen::Simulation, ScreenEvent::Toggle) => Screen::MainMenu,
        }
    }

    /// Whether frames on this screen advance the board.
    pub fn runs_simulation(self) -> bool {
        self == Screen::Simulation
    }
}
