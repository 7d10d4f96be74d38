use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::api::PlayerApi;
use crate::app::App;
use crate::config::Config;
use crate::error::AppError;
use crate::export::ExportService;
use crate::fetch::FetchService;
use crate::tui::{restore_terminal, setup_terminal};
use crate::ui::render;

pub struct AppRuntime {
    cfg: Config,
    app: App,
    api: PlayerApi,
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    tick_rate: Duration,
    last_tick: Instant,
}

impl AppRuntime {
    pub fn new(cfg: Config) -> Result<Self, AppError> {
        let api = PlayerApi::new(&cfg).map_err(|err| AppError::runtime("build api client", err))?;
        if cfg.api_token.is_none() {
            tracing::warn!("no api token configured; fetches will fail");
        }
        let terminal = setup_terminal().map_err(AppError::TerminalSetup)?;

        Ok(Self {
            tick_rate: cfg.tick_rate,
            last_tick: Instant::now(),
            cfg,
            app: App::default(),
            api,
            terminal,
        })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        while !self.app.should_quit {
            self.terminal
                .draw(|f| render(f, &self.app, &self.cfg))
                .map_err(AppError::TerminalRender)?;
            self.app.mark_drawn();

            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout).map_err(AppError::TerminalRender)?
                && let Event::Key(key) = event::read().map_err(AppError::TerminalRender)?
            {
                crate::input::handle_key_event(&mut self.app, key);
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.tick();
                self.last_tick = Instant::now();
            }
        }

        Ok(())
    }

    pub fn shutdown(&mut self) -> Result<(), AppError> {
        restore_terminal(&mut self.terminal).map_err(AppError::TerminalRestore)
    }

    fn tick(&mut self) {
        if let Err(err) = FetchService::run(&mut self.app, &self.api) {
            tracing::warn!(error = %crate::error::render_error_message(&err), "player fetch failed");
        }
        if let Err(err) = ExportService::copy(&self.cfg, &mut self.app) {
            tracing::error!(error = %crate::error::render_error_message(&err), "copy message failed");
        }
    }
}
