use ratatui::style::{Color, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    Truecolor,
    X256,
    X16,
}

/// Detect terminal color depth from environment.
/// Priority: PULSECHAT_COLOR override -> COLORTERM truecolor/24bit -> TERM *256color -> 16.
pub fn detect_color_depth() -> ColorDepth {
    if let Ok(force) = std::env::var("PULSECHAT_COLOR") {
        match force.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "24-bit" => return ColorDepth::Truecolor,
            "256" | "x256" | "256color" => return ColorDepth::X256,
            "16" | "ansi" | "x16" => return ColorDepth::X16,
            _ => {}
        }
    }

    if let Ok(colorterm) = std::env::var("COLORTERM") {
        let s = colorterm.to_ascii_lowercase();
        if s.contains("truecolor") || s.contains("24bit") || s.contains("24-bit") {
            return ColorDepth::Truecolor;
        }
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.to_ascii_lowercase().contains("256color") {
            return ColorDepth::X256;
        }
    }
    ColorDepth::X16
}

/// Map a Color to the nearest representable color in the chosen depth.
pub fn quantize_color(color: Color, depth: ColorDepth) -> Color {
    match (depth, color) {
        (ColorDepth::Truecolor, c) => c,
        (ColorDepth::X256, Color::Rgb(r, g, b)) => Color::Indexed(rgb_to_xterm256(r, g, b)),
        (ColorDepth::X16, Color::Rgb(r, g, b)) => nearest_ansi16(r, g, b),
        (ColorDepth::X16, Color::Indexed(i)) => {
            let (r, g, b) = xterm256_to_rgb(i);
            nearest_ansi16(r, g, b)
        }
        (_, other) => other,
    }
}

pub fn quantize_style(mut style: Style, depth: ColorDepth) -> Style {
    style.fg = style.fg.map(|c| quantize_color(c, depth));
    style.bg = style.bg.map(|c| quantize_color(c, depth));
    style
}

/// Best-effort RGB value for a terminal color. Named colors use xterm defaults.
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    let index = match color {
        Color::Rgb(r, g, b) => return Some((r, g, b)),
        Color::Indexed(i) => i,
        Color::Black => 0,
        Color::Red => 1,
        Color::Green => 2,
        Color::Yellow => 3,
        Color::Blue => 4,
        Color::Magenta => 5,
        Color::Cyan => 6,
        Color::Gray => 7,
        Color::DarkGray => 8,
        Color::LightRed => 9,
        Color::LightGreen => 10,
        Color::LightYellow => 11,
        Color::LightBlue => 12,
        Color::LightMagenta => 13,
        Color::LightCyan => 14,
        Color::White => 15,
        Color::Reset => return None,
    };
    Some(xterm256_to_rgb(index))
}

/// Parse `#rgb`, `#rrggbb`, `rgb(r,g,b)` or a named color.
pub fn parse_color(s: &str) -> Option<Color> {
    let lower = s.trim().to_ascii_lowercase();
    if let Some((r, g, b)) = parse_hex_rgb(&lower) {
        return Some(Color::Rgb(r, g, b));
    }
    if let Some(c) = parse_rgb_func(&lower) {
        return Some(c);
    }
    match lower.as_str() {
        "black" => Some(Color::Black),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark-grey" | "darkgray" => Some(Color::DarkGray),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "blue" => Some(Color::Blue),
        "light_blue" | "light-blue" => Some(Color::LightBlue),
        "cyan" => Some(Color::Cyan),
        "magenta" => Some(Color::Magenta),
        "light_magenta" | "light-magenta" => Some(Color::LightMagenta),
        "yellow" => Some(Color::Yellow),
        "reset" => Some(Color::Reset),
        _ => None,
    }
}

pub fn parse_hex_rgb(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1].repeat(2), 16).ok();
            Some((channel(0)?, channel(1)?, channel(2)?))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

fn parse_rgb_func(s: &str) -> Option<Color> {
    let content = s.strip_prefix("rgb(")?.strip_suffix(')')?;
    let parts: Vec<_> = content
        .split([',', ' '])
        .filter(|t| !t.is_empty())
        .collect();
    if parts.len() != 3 {
        return None;
    }
    let channel = |t: &str| t.parse::<u16>().ok().map(|v| v.min(255) as u8);
    Some(Color::Rgb(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
    ))
}

fn nearest_ansi16(r: u8, g: u8, b: u8) -> Color {
    const ANSI16: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::Gray,
        Color::DarkGray,
        Color::LightRed,
        Color::LightGreen,
        Color::LightYellow,
        Color::LightBlue,
        Color::LightMagenta,
        Color::LightCyan,
        Color::White,
    ];

    (0u8..16)
        .min_by_key(|&i| {
            let (cr, cg, cb) = xterm256_to_rgb(i);
            color_dist_sq((r, g, b), (cr, cg, cb))
        })
        .map(|i| ANSI16[i as usize])
        .unwrap_or(Color::Reset)
}

fn rgb_to_xterm256(r: u8, g: u8, b: u8) -> u8 {
    fn cube_component(c: u8) -> u8 {
        if c < 48 {
            0
        } else if c < 114 {
            1
        } else {
            ((c - 35) / 40).min(5)
        }
    }
    let cube = 16 + 36 * cube_component(r) + 6 * cube_component(g) + cube_component(b);

    let avg = (r as u16 + g as u16 + b as u16) / 3;
    let gray = 232 + ((avg.saturating_sub(8)) / 10).min(23) as u8;

    let dist = |i: u8| color_dist_sq((r, g, b), xterm256_to_rgb(i));
    if dist(gray) < dist(cube) {
        gray
    } else {
        cube
    }
}

fn color_dist_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = a.0 as i32 - b.0 as i32;
    let dg = a.1 as i32 - b.1 as i32;
    let db = a.2 as i32 - b.2 as i32;
    (dr * dr + dg * dg + db * db) as u32
}

pub fn xterm256_to_rgb(i: u8) -> (u8, u8, u8) {
    const BASE16: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (205, 0, 0),
        (0, 205, 0),
        (205, 205, 0),
        (0, 0, 205),
        (205, 0, 205),
        (0, 205, 205),
        (229, 229, 229),
        (127, 127, 127),
        (255, 0, 0),
        (0, 255, 0),
        (255, 255, 0),
        (92, 92, 255),
        (255, 0, 255),
        (0, 255, 255),
        (255, 255, 255),
    ];
    let cube = |c: u8| if c == 0 { 0 } else { 55 + 40 * c };
    match i {
        0..=15 => BASE16[i as usize],
        16..=231 => {
            let n = i - 16;
            (cube(n / 36), cube((n % 36) / 6), cube(n % 6))
        }
        232..=255 => {
            let v = 8 + 10 * (i - 232);
            (v, v, v)
        }
    }
}
