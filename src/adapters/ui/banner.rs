//! Welcome banner: "DAYPOLL" in the standard FIGlet font with a vertical gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Autumn orange (#ff8c1a).
const AUTUMN_ORANGE: (u8, u8, u8) = (0xff, 0x8c, 0x1a);
/// Calendar teal (#1ab8b0).
const CALENDAR_TEAL: (u8, u8, u8) = (0x1a, 0xb8, 0xb0);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the banner, the poll title and the version. Falls back to a plain
/// heading when the FIGlet font cannot be rendered.
pub fn print_welcome(title: &str) {
    let mut out = stdout();
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("DAYPOLL").map(|f| f.to_string()))
        .unwrap_or_else(|| "DAYPOLL\n".to_string());
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(AUTUMN_ORANGE, CALENDAR_TEAL, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: CALENDAR_TEAL.0,
        g: CALENDAR_TEAL.1,
        b: CALENDAR_TEAL.2,
    }));
    let _ = out.execute(Print(format!("{}\r\n", title)));
    let _ = out.execute(Print(format!("v{}\r\n", env!("CARGO_PKG_VERSION"))));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
