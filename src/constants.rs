pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Flat award per cleared row
pub const LINE_CLEAR_POINTS: u32 = 100;

// Gravity interval (in milliseconds)
pub const DEFAULT_TICK_MS: u64 = 500;
