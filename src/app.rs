#![warn(clippy::all, clippy::pedantic)]

use std::time::Duration;

use anyhow::Context;
use bevy_ecs::prelude::*;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::{error, info};

use crate::Time;
use crate::components::{Cell, Color, Input, InputEvent};
use crate::config::Config;
use crate::config::loader::save_config_to_file;
use crate::menu::MenuRenderer;
use crate::menu_types::{Menu, MenuOption, MenuState, OptionsOption};
use crate::session::{Session, SessionState};
use crate::systems::{game_tick_system, input_system};

pub type AppResult<T> = anyhow::Result<T>;

pub struct App {
    pub world: World,
    pub should_quit: bool,
    pub menu: Menu,
    pub menu_renderer: MenuRenderer,
    pub config: Config,
    // Best score since the program started; never written to disk
    pub high_score: u32,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        world.insert_resource(Time::new(Duration::from_millis(
            config.gameplay.tick_ms.max(1),
        )));
        world.insert_resource(Input::default());
        world.insert_resource(Session::new(
            config.gameplay.piece_factory(),
            config.gameplay.fall_curve(),
        ));

        Self {
            world,
            should_quit: false,
            menu: Menu::new(),
            menu_renderer: MenuRenderer::new(&config.menu),
            config,
            high_score: 0,
        }
    }

    pub fn session(&self) -> &Session {
        self.world.resource::<Session>()
    }

    /// Throws away the current game and deals a new one.
    pub fn start_game(&mut self) {
        self.sync_session();
        self.world.resource_mut::<Input>().clear();
        self.world.resource_mut::<Time>().reset();
        {
            let mut session = self.world.resource_mut::<Session>();
            session.restart();
            session.start();
        }
        self.menu.state = MenuState::Game;
    }

    pub fn return_to_menu(&mut self) {
        self.sync_session();
        self.world.resource_mut::<Session>().restart();
        self.world.resource_mut::<Input>().clear();
        self.menu.state = MenuState::MainMenu;
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.world.resource_mut::<Input>().push(event);
    }

    /// One frame of simulation or menu animation.
    pub fn update(&mut self) -> AppResult<()> {
        self.world.resource_mut::<Time>().update();

        if self.menu.state == MenuState::Game {
            input_system(&mut self.world).context("applying player input")?;
            game_tick_system(&mut self.world).context("advancing the game")?;
            self.sync_session();
        } else {
            self.menu_renderer.update(&self.config.menu);
        }

        if self.session().should_quit() {
            self.should_quit = true;
        }

        Ok(())
    }

    pub fn sync_session(&mut self) {
        let score = self.session().score();
        if score > self.high_score {
            self.high_score = score;
        }
    }

    /// Settled blocks plus the falling piece, ready to draw.
    pub fn get_render_blocks(&self) -> Vec<(Cell, Color)> {
        let session = self.session();
        let mut blocks: Vec<(Cell, Color)> = session.board().iter().collect();

        if let Some(piece) = session.active() {
            let color = piece.color();
            blocks.extend(piece.cells().iter().map(|&cell| (cell, color)));
        }

        blocks
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match self.menu.state {
            MenuState::MainMenu | MenuState::Options => self.handle_menu_key(key.code),
            MenuState::Game => self.handle_game_key(key.code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('w') => self.menu_renderer.prev_option(&mut self.menu),
            KeyCode::Down | KeyCode::Char('s') => self.menu_renderer.next_option(&mut self.menu),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_menu_option(),
            KeyCode::Esc if self.menu.state == MenuState::Options => {
                self.menu.state = MenuState::MainMenu;
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        if code == KeyCode::Esc {
            self.return_to_menu();
            return;
        }

        if self.session().state() == SessionState::GameOver {
            match code {
                KeyCode::Enter => self.start_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        let event = match code {
            KeyCode::Left | KeyCode::Char('a') => InputEvent::MoveLeft,
            KeyCode::Right | KeyCode::Char('d') => InputEvent::MoveRight,
            KeyCode::Down | KeyCode::Char('s') => InputEvent::SoftDrop,
            KeyCode::Up | KeyCode::Char('z' | 'w') => InputEvent::Rotate,
            KeyCode::Char(' ') => InputEvent::HardDrop,
            KeyCode::Char('c') => InputEvent::Hold,
            KeyCode::Char('q') => InputEvent::Quit,
            _ => return,
        };
        self.push_input(event);
    }

    fn select_menu_option(&mut self) {
        match self.menu.state {
            MenuState::MainMenu => match self.menu.selected_option {
                MenuOption::NewGame => {
                    info!("Starting a new game from the title screen");
                    self.start_game();
                }
                MenuOption::Options => self.menu.state = MenuState::Options,
                MenuOption::Quit => self.should_quit = true,
            },
            MenuState::Options => match self.menu.options_selected {
                OptionsOption::GhostToggle => {
                    self.config.display.show_ghost = !self.config.display.show_ghost;
                    self.save_config();
                }
                OptionsOption::GridToggle => {
                    self.config.display.show_grid = !self.config.display.show_grid;
                    self.save_config();
                }
                OptionsOption::Back => self.menu.state = MenuState::MainMenu,
            },
            MenuState::Game => {}
        }
    }

    fn save_config(&self) {
        if let Err(err) = save_config_to_file(&self.config) {
            error!("Failed to save configuration: {err}");
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
