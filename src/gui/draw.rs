use super::{App, Config};
use crate::{Grid, SchedulerState, PATTERNS};
use eframe::egui::{
    pos2, vec2, Button, ComboBox, Rect, RichText, Sense, Slider, Stroke, Ui, Vec2,
};

struct BoardInput {
    cells: Vec<(i64, i64)>,
    dragging: bool,
}

/// Cell under `offset` from the top-left corner of an `n x n` board.
fn cell_at(offset: Vec2, cell_px: f32, n: usize) -> Option<(i64, i64)> {
    let (x, y) = (
        (offset.x / cell_px).floor() as i64,
        (offset.y / cell_px).floor() as i64,
    );
    let n = n as i64;
    ((0..n).contains(&x) && (0..n).contains(&y)).then_some((x, y))
}

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button<'static> {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let running = self.scheduler.is_running();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!running, Self::new_button("Run Simulation"))
                .clicked()
            {
                self.run();
            }
            if ui
                .add_enabled(running, Self::new_button("Pause Simulation"))
                .clicked()
            {
                self.pause();
            }
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Reset")).clicked() {
                self.reset();
            }
            if ui
                .add_enabled(!running, Self::new_button("Next step"))
                .clicked()
            {
                self.step_once();
            }
        });

        let state = match self.scheduler.state() {
            SchedulerState::Idle => "idle",
            SchedulerState::Running => "running",
            SchedulerState::StoppedStable => "stable",
            SchedulerState::Cancelled => "paused",
        };
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.scheduler.generation()
        )));
        ui.label(Self::new_text(&format!("State: {}", state)));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            self.scheduler.current_grid().population()
        )));
    }

    fn draw_seed_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ComboBox::from_label(Self::new_text("pattern"))
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.add(Self::new_button("Load")).clicked() {
                self.load_selected_pattern();
            }
        });

        ui.horizontal(|ui| {
            ui.add(Slider::new(&mut self.fill_rate, 0.0..=1.0));
            if ui.add(Self::new_button("Randomize")).clicked() {
                self.randomize();
            }
        });
    }

    fn draw_rules(&self, ui: &mut Ui) {
        ui.label(Self::new_text("Rules:").strong());
        for rule in Config::RULES {
            ui.label(Self::new_text(rule));
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);

            ui.group(|ui| {
                ui.vertical(|ui| self.draw_simulation_controls(ui));
            });
            ui.add_space(Config::WIDGET_GAP);

            ui.group(|ui| {
                ui.vertical(|ui| self.draw_seed_controls(ui));
            });
            ui.add_space(Config::WIDGET_GAP);

            self.draw_rules(ui);

            if let Some(err) = &self.last_error {
                ui.add_space(Config::WIDGET_GAP);
                ui.label(Self::new_text(err).color(Config::ERROR_COLOR));
            }
        });
    }

    /// Paints one board and returns the cells touched by a click or drag this frame.
    fn draw_board(ui: &mut Ui, grid: &Grid, side_px: f32, opacity: f32) -> BoardInput {
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(side_px), Sense::click_and_drag());
        let origin = response.rect.min;
        let n = grid.size();
        let cell_px = side_px / n as f32;

        for (y, row) in grid.rows().enumerate() {
            for (x, &alive) in row.iter().enumerate() {
                let rect = Rect::from_min_size(
                    pos2(origin.x + x as f32 * cell_px, origin.y + y as f32 * cell_px),
                    vec2(cell_px, cell_px),
                );
                let color = if alive {
                    Config::ALIVE_COLOR
                } else {
                    Config::DEAD_COLOR
                };
                painter.rect_filled(rect, 0., color.gamma_multiply(opacity));
                painter.rect_stroke(
                    rect,
                    0.,
                    Stroke::new(Config::CELL_STROKE_WIDTH, Config::CELL_STROKE_COLOR),
                );
            }
        }

        let mut pointer = Vec::new();
        // the drag only starts once the pointer has moved, maybe off the pressed cell
        if response.drag_started() {
            pointer.extend(ui.input(|input| input.pointer.press_origin()));
        }
        if response.clicked() || response.dragged() {
            pointer.extend(response.interact_pointer_pos());
        }
        BoardInput {
            cells: pointer
                .into_iter()
                .filter_map(|pos| cell_at(pos - origin, cell_px, n))
                .collect(),
            dragging: response.dragged(),
        }
    }

    fn draw_boards(&mut self, ui: &mut Ui) {
        let area = ui.available_size();
        let side_px = ((area.x - Config::BOARD_GAP) / 2.)
            .min(area.y - Config::BOARD_LABEL_HEIGHT)
            .max(Config::MIN_BOARD_SIZE);

        let previous = self.scheduler.previous_grid().clone();
        let current = self.scheduler.current_grid().clone();
        let mut touched = Vec::new();

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.label(Self::new_text("Previous Board"));
                touched.push(Self::draw_board(
                    ui,
                    &previous,
                    side_px,
                    Config::PREVIOUS_BOARD_OPACITY,
                ));
            });
            ui.add_space(Config::BOARD_GAP);
            ui.vertical(|ui| {
                ui.label(Self::new_text("Current Board"));
                touched.push(Self::draw_board(ui, &current, side_px, 1.));
            });
        });

        // both boards edit the current field
        for input in touched {
            for (x, y) in input.cells {
                self.paint_cell(x, y, input.dragging);
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal_top(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::FRAME_MARGIN);

            self.draw_boards(ui);
        });
    }
}
