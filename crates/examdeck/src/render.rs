#![forbid(unsafe_code)]

//! Terminal painter for the page.
//!
//! Walks the element tree in order and writes styled lines; hidden elements
//! simply produce nothing. Colors come from one of two fixed palettes
//! keyed off the root night-mode marker.

use std::io::{self, Write};

use crossterm::style::{Attribute, Color, Stylize};

use crate::page::{Element, Page, classes, ids};

/// Daylight palette.
mod light {
    use crossterm::style::Color;

    pub const TEXT: Color = Color::Rgb { r: 40, g: 40, b: 55 };
    pub const MUTED: Color = Color::Rgb { r: 130, g: 130, b: 150 };
    pub const ACCENT: Color = Color::Rgb { r: 30, g: 100, b: 200 };
    pub const LINK: Color = Color::Rgb { r: 20, g: 120, b: 180 };
    pub const CHIP_BG: Color = Color::Rgb { r: 229, g: 231, b: 235 };
    pub const CHIP_FG: Color = Color::Rgb { r: 17, g: 24, b: 39 };
}

/// Night palette.
mod night {
    use crossterm::style::Color;

    pub const TEXT: Color = Color::Rgb { r: 220, g: 220, b: 240 };
    pub const MUTED: Color = Color::Rgb { r: 120, g: 120, b: 150 };
    pub const ACCENT: Color = Color::Rgb { r: 130, g: 170, b: 255 };
    pub const LINK: Color = Color::Rgb { r: 100, g: 180, b: 255 };
    pub const CHIP_BG: Color = Color::Rgb { r: 55, g: 65, b: 81 };
    pub const CHIP_FG: Color = Color::Rgb { r: 243, g: 244, b: 246 };
}

struct Palette {
    text: Color,
    muted: Color,
    accent: Color,
    link: Color,
    chip_bg: Color,
    chip_fg: Color,
}

fn palette(night_mode: bool) -> Palette {
    if night_mode {
        Palette {
            text: night::TEXT,
            muted: night::MUTED,
            accent: night::ACCENT,
            link: night::LINK,
            chip_bg: night::CHIP_BG,
            chip_fg: night::CHIP_FG,
        }
    } else {
        Palette {
            text: light::TEXT,
            muted: light::MUTED,
            accent: light::ACCENT,
            link: light::LINK,
            chip_bg: light::CHIP_BG,
            chip_fg: light::CHIP_FG,
        }
    }
}

fn text_of<'p>(page: &'p Page, key: &str) -> Option<&'p str> {
    page.element(key)
        .filter(|e| e.visible)
        .map(|e| e.text.as_str())
}

fn toggle_chip(page: &Page, pal: &Palette) -> String {
    let Some(toggle) = page.element(ids::THEME_TOGGLE) else {
        return String::new();
    };
    let icon = [ids::THEME_DARK_ICON, ids::THEME_LIGHT_ICON]
        .iter()
        .find_map(|key| text_of(page, key))
        .unwrap_or("");
    // The chip classes were swapped by the theme routine; honor them even
    // if they disagree with the root marker.
    let (bg, fg) = if toggle.has_class(classes::CHIP_DARK) {
        (night::CHIP_BG, night::CHIP_FG)
    } else {
        (pal.chip_bg, pal.chip_fg)
    };
    format!(" {} ", format!("[{icon}] {}", toggle.text).with(fg).on(bg))
}

fn is_schedule_entry(element: &Element) -> bool {
    element.key.starts_with("jadwal-") && element.key != ids::SCHEDULE_PLACEHOLDER
}

/// Paint the whole page. The caller has already cleared the screen and
/// homed the cursor.
pub fn draw(page: &Page, out: &mut dyn Write) -> io::Result<()> {
    let pal = palette(page.night_mode());

    write!(
        out,
        "{}{}\r\n",
        "EXAMDECK · Portal Ujian"
            .with(pal.accent)
            .attribute(Attribute::Bold),
        toggle_chip(page, &pal)
    )?;

    if let Some(date) = text_of(page, ids::LIVE_DATE) {
        write!(out, "{}", date.with(pal.muted))?;
        write!(out, "  ")?;
    }
    if let Some(clock) = text_of(page, ids::LIVE_CLOCK) {
        write!(out, "{}", clock.with(pal.text).attribute(Attribute::Bold))?;
    }
    write!(out, "\r\n\r\n")?;

    if let Some(title) = text_of(page, ids::GREETING_TITLE) {
        write!(out, "{}\r\n", title.with(pal.muted))?;
    }
    for element in page.elements() {
        if element.visible && element.key.ends_with("-message") {
            write!(out, "{}\r\n", element.text.as_str().with(pal.text))?;
        }
    }
    write!(out, "\r\n")?;

    write!(
        out,
        "{}\r\n",
        "Jadwal Ujian".with(pal.accent).attribute(Attribute::Bold)
    )?;
    for element in page.elements() {
        if !element.visible || !is_schedule_entry(element) {
            continue;
        }
        write!(out, "  • {}\r\n", element.text.as_str().with(pal.text))?;
        if let Some(href) = &element.href {
            write!(out, "    ↗ {}\r\n", href.as_str().with(pal.link))?;
        }
    }
    if let Some(placeholder) = text_of(page, ids::SCHEDULE_PLACEHOLDER) {
        write!(out, "  {}\r\n", placeholder.with(pal.muted))?;
    }
    write!(out, "\r\n")?;

    if let Some(seb) = page.element(ids::SEB_LINK).filter(|e| e.visible) {
        write!(out, "{}", seb.text.as_str().with(pal.text))?;
        if let Some(href) = &seb.href {
            write!(out, " → {}", href.as_str().with(pal.link))?;
        }
        write!(out, "\r\n\r\n")?;
    }

    write!(out, "{}\r\n", "t tema · q keluar".with(pal.muted))?;
    Ok(())
}
