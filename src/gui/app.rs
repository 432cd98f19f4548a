use super::Config;
use crate::{Grid, Pattern, Result, Scheduler, PATTERNS};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin};
use std::collections::HashSet;
use tokio::time::Instant;
use tracing::warn;

pub struct App {
    pub(super) scheduler: Scheduler, // Board, generation counter and pending step.
    pub(super) selected_pattern: usize, // Index into `PATTERNS`.
    pub(super) fill_rate: f64,          // Probability of a cell being alive on "Randomize".
    pub(super) last_error: Option<String>, // Shown under the controls until the next command.
    pub(super) stroke: HashSet<(i64, i64)>, // Cells already flipped by the current drag.
}

impl App {
    pub fn new(config: crate::Config) -> Result<Self> {
        Ok(Self {
            scheduler: Scheduler::new(config)?,
            selected_pattern: 0,
            fill_rate: Config::FILL_RATE,
            last_error: None,
            stroke: HashSet::new(),
        })
    }

    pub(super) fn run(&mut self) {
        self.last_error = None;
        self.scheduler.run(Instant::now());
    }

    pub(super) fn pause(&mut self) {
        self.scheduler.pause();
    }

    pub(super) fn reset(&mut self) {
        self.last_error = None;
        self.scheduler.reset();
    }

    pub(super) fn step_once(&mut self) {
        self.scheduler.step_once();
    }

    pub(super) fn toggle_cell(&mut self, x: i64, y: i64) {
        if let Err(err) = self.scheduler.toggle_cell(x, y) {
            warn!(%err, "click outside the board");
            self.last_error = Some(err.to_string());
        }
    }

    /// Flips the cell under the pointer. A drag flips every cell it crosses
    /// once, however often the pointer comes back to it.
    pub(super) fn paint_cell(&mut self, x: i64, y: i64, dragging: bool) {
        if !dragging || self.stroke.insert((x, y)) {
            self.toggle_cell(x, y);
        }
    }

    pub(super) fn end_stroke(&mut self) {
        self.stroke.clear();
    }

    pub(super) fn load_selected_pattern(&mut self) {
        let size = self.scheduler.config().size;
        let pattern: &Pattern = &PATTERNS[self.selected_pattern];
        self.load(pattern.centered(size));
    }

    pub(super) fn randomize(&mut self) {
        let size = self.scheduler.config().size;
        self.load(Grid::random(size, None, self.fill_rate));
    }

    fn load(&mut self, grid: Result<Grid>) {
        self.last_error = grid
            .and_then(|grid| self.scheduler.load(grid))
            .err()
            .map(|err| err.to_string());
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                if self.scheduler.is_running() {
                    self.pause();
                } else {
                    self.run();
                }
            }
            if input.key_pressed(Key::N) {
                self.step_once();
            }
            if input.key_pressed(Key::R) && !input.modifiers.ctrl {
                self.reset();
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.scheduler.poll(Instant::now());
        self.handle_keys(ctx);
        if !ctx.input(|input| input.pointer.any_down()) {
            self.end_stroke();
        }

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                self.draw(ui);
            });

        // no frames are needed between steps unless the user interacts
        if let Some(wait) = self.scheduler.time_until_next_step(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
