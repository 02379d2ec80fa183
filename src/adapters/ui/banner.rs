//! Teal-to-blue welcome banner.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stdout};

const TITLE: &str = "N E W S D E S K";

/// Teal (#14b8a6).
const TEAL: (u8, u8, u8) = (0x14, 0xb8, 0xa6);
/// Blue (#2563eb).
const BLUE: (u8, u8, u8) = (0x25, 0x63, 0xeb);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the title with a per-character gradient, then the version line.
pub fn print_welcome() {
    let mut out = stdout();
    let chars: Vec<char> = TITLE.chars().collect();
    let last = chars.len().saturating_sub(1).max(1);

    let _ = out.execute(Print("\r\n  "));
    for (i, ch) in chars.iter().enumerate() {
        let (r, g, b) = lerp_rgb(TEAL, BLUE, i as f64 / last as f64);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(ch));
    }
    let _ = out.execute(ResetColor);

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: TEAL.0,
        g: TEAL.1,
        b: TEAL.2,
    }));
    let _ = out.execute(Print(format!("\r\n  v{} · News Aggregator\r\n\r\n", version)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(TEAL, BLUE, 0.0), TEAL);
        assert_eq!(lerp_rgb(TEAL, BLUE, 1.0), BLUE);
    }
}
