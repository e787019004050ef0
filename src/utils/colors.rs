//! ANSI color helper utilities for terminal output.

use crate::models::quality::QualityTier;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Net pay color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_net(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

pub fn color_for_quality(tier: QualityTier) -> &'static str {
    match tier {
        QualityTier::Great => GREEN,
        QualityTier::Good => CYAN,
        QualityTier::Fair => BLUE,
        QualityTier::Bad => YELLOW,
        QualityTier::Trash => RED,
    }
}

/// Wrap `value` in `color` … RESET.
pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
