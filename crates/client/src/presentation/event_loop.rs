//! Pumps user input, the deferred restore audit, and rendering.
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::time::{self, Duration};

use crate::app::App;
use crate::presentation::{terminal::Tui, ui};

const FRAME_INTERVAL_MS: u64 = 16;

pub struct EventLoop {
    app: App,
    audit_delay: Duration,
}

impl EventLoop {
    pub fn new(app: App, audit_delay: Duration) -> Self {
        Self { app, audit_delay }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        // The restored-state audit fires exactly once, shortly after the
        // first frame is on screen.
        let audit_at = time::sleep(self.audit_delay);
        tokio::pin!(audit_at);
        let mut audited = false;

        loop {
            tokio::select! {
                _ = &mut audit_at, if !audited => {
                    audited = true;
                    self.app.validate_restored_state();
                    self.render(terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.app.handle_key(key);
                self.render(terminal)?;
                Ok(self.app.should_quit())
            }
            Event::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        ui::render(terminal, &self.app.ui_frame(), self.app.mode())
    }
}
