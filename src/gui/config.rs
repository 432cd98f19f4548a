use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const ERROR_COLOR: Color32 = Color32::DARK_RED;

    pub const WIDGET_GAP: f32 = 20.;
    pub const BOARD_GAP: f32 = 40.;
    pub const BOARD_LABEL_HEIGHT: f32 = 30.;
    pub const MIN_BOARD_SIZE: f32 = 120.;

    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(30, 64, 175);
    pub const DEAD_COLOR: Color32 = Color32::WHITE;
    pub const CELL_STROKE_COLOR: Color32 = Color32::GRAY;
    pub const CELL_STROKE_WIDTH: f32 = 0.5;
    /// The previous board is drawn faded.
    pub const PREVIOUS_BOARD_OPACITY: f32 = 0.4;

    pub const FILL_RATE: f64 = 0.3;

    pub const RULES: [&'static str; 3] = [
        "Any live cell with two or three live neighbours survives.",
        "Any dead cell with three live neighbours becomes a live cell.",
        "All other live cells die in the next generation. Similarly, all other dead cells stay dead.",
    ];
}
