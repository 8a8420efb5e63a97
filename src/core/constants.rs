/// Relative deviation accepted between an intended and an achieved area (0.01%).
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

// ROOT colour indices: blue, red, green, orange, magenta, cyan, yellow, violet, azure, pink
pub const DEFAULT_PALETTE: [u16; 10] = [600, 632, 416, 800, 616, 432, 400, 880, 860, 900];
