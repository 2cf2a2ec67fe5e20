use ratatui::style::Color;

use crate::{
    cli::ColorArg,
    domain::aqi::{AqiCategory, ColorToken, RenderVariant, render},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
    Monochrome,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub capability: ColorCapability,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub border: Color,
    pub on_swatch: Color,
    pub warning: Color,
    pub danger: Color,
}

pub fn detect_color_capability(mode: ColorArg) -> ColorCapability {
    if mode == ColorArg::Never {
        return ColorCapability::Monochrome;
    }
    if mode == ColorArg::Auto && std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Monochrome;
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

pub fn theme_for(capability: ColorCapability) -> Theme {
    let rgb = |r, g, b| quantize(Color::Rgb(r, g, b), capability);
    Theme {
        capability,
        text: rgb(226, 232, 240),
        muted_text: rgb(148, 163, 184),
        accent: rgb(56, 189, 248),
        border: rgb(71, 85, 105),
        on_swatch: rgb(15, 23, 42),
        warning: rgb(250, 204, 21),
        danger: rgb(248, 113, 113),
    }
}

/// Resolves a palette token for this terminal, `None` when nothing should be painted.
pub fn token_color(token: ColorToken, capability: ColorCapability) -> Option<Color> {
    let (r, g, b) = token.rgb?;
    match capability {
        ColorCapability::Monochrome => None,
        _ => Some(quantize(Color::Rgb(r, g, b), capability)),
    }
}

pub fn category_text_color(category: AqiCategory, capability: ColorCapability) -> Option<Color> {
    token_color(render(category, RenderVariant::Text), capability)
}

pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::Xterm256, Color::Rgb(r, g, b)) => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            Color::Indexed(16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b))
        }
        (ColorCapability::Basic16, Color::Rgb(r, g, b)) => basic16_from_rgb(r, g, b),
        (ColorCapability::Monochrome, Color::Rgb(..)) => Color::Reset,
        (_, c) => c,
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let rf = f32::from(r) / 255.0;
    let gf = f32::from(g) / 255.0;
    let bf = f32::from(b) / 255.0;

    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let delta = max - min;
    let light = (max + min) / 2.0;

    if delta < 0.08 {
        return match light {
            l if l < 0.20 => Color::Black,
            l if l < 0.40 => Color::DarkGray,
            l if l < 0.72 => Color::Gray,
            _ => Color::White,
        };
    }

    let hue = if (max - rf).abs() < f32::EPSILON {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };

    let bright = light >= 0.55;
    let pick = |dim: Color, lit: Color| if bright { lit } else { dim };
    match hue {
        h if !(30.0..330.0).contains(&h) => pick(Color::Red, Color::LightRed),
        h if h < 90.0 => pick(Color::Yellow, Color::LightYellow),
        h if h < 150.0 => pick(Color::Green, Color::LightGreen),
        h if h < 210.0 => pick(Color::Cyan, Color::LightCyan),
        h if h < 270.0 => pick(Color::Blue, Color::LightBlue),
        _ => pick(Color::Magenta, Color::LightMagenta),
    }
}
