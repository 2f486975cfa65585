//! Text rendering for the palette, the pick history and toasts.
//!
//! Everything renders to a `String` so the CLI decides where it goes. With
//! color enabled, swatches are drawn as true-color background blocks.

use crate::catalog::{Catalog, Family};
use crate::history::PickHistory;
use crate::models::{PickRecord, RgbColor};
use crate::notation::format_color;
use crate::picker::toast_message;
use crate::theme::Theme;
use crossterm::style::{Color, Stylize};
use std::fmt;
use std::io::IsTerminal;

const SWATCH: &str = "      ";

/// Whether stdout should get ANSI colors.
///
/// Off for `--plain`, when `NO_COLOR` is set, or when stdout isn't a terminal.
#[must_use]
pub fn color_enabled(plain: bool) -> bool {
    !plain && std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Human-readable family heading: "lightBlue" becomes "Light Blue".
#[must_use]
pub fn display_name(family: &str) -> String {
    let mut name = String::with_capacity(family.len() + 2);
    for (i, c) in family.chars().enumerate() {
        if i == 0 {
            name.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            name.push(' ');
            name.push(c);
        } else {
            name.push(c);
        }
    }
    name
}

/// Renders every family of a catalog with values in `notation`.
#[must_use]
pub fn render_palette(catalog: &Catalog, notation: &str, theme: &Theme, color: bool) -> String {
    let title = format!(
        "Tailwind CSS {} palette ({} families, {} colors)",
        catalog.version(),
        catalog.family_count(),
        catalog.shade_count()
    );

    let mut out = String::new();
    if color {
        push_line(&mut out, format_args!("{}", title.with(theme.heading).bold()));
    } else {
        push_line(&mut out, format_args!("{title}"));
    }

    for family in catalog.families() {
        out.push('\n');
        out.push_str(&render_family(family, notation, theme, color));
    }
    out
}

/// Renders one family: a heading, then one line per shade.
#[must_use]
pub fn render_family(family: &Family, notation: &str, theme: &Theme, color: bool) -> String {
    let heading = display_name(&family.name);
    let mut out = String::new();

    if color {
        push_line(&mut out, format_args!("{}", heading.with(theme.heading).bold()));
    } else {
        push_line(&mut out, format_args!("{heading}"));
    }

    for shade in &family.shades {
        let value = format_color(&shade.hex, notation, &family.name, &shade.label);
        let label = format!("{:>4}", shade.label);

        if color {
            push_line(
                &mut out,
                format_args!(
                    "  {} {}",
                    labeled_swatch(&shade.hex, &label),
                    value.with(theme.text)
                ),
            );
        } else {
            push_line(&mut out, format_args!("  {label}  {value}"));
        }
    }
    out
}

/// Renders the pick history, newest first, with values in `notation`.
#[must_use]
pub fn render_history(history: &PickHistory, notation: &str, theme: &Theme, color: bool) -> String {
    if history.is_empty() {
        return "No picks yet.\n".to_string();
    }

    let mut out = String::new();
    for (index, pick) in history.picks().iter().enumerate() {
        let name = format!("{} ({})", pick.tailwind_name(), pick.version);
        let value = format_color(&pick.value, notation, &pick.name, &pick.shade);

        if color {
            push_line(
                &mut out,
                format_args!(
                    "{:>3} {} {} {}",
                    index.to_string().with(theme.text_muted),
                    swatch(&pick.value),
                    format!("{name:<20}").with(theme.heading),
                    value.with(theme.text)
                ),
            );
        } else {
            push_line(&mut out, format_args!("{index:>3}  {name:<20} {value}"));
        }
    }
    out
}

/// Renders the copy notification, accented with the picked color.
#[must_use]
pub fn render_toast(record: &PickRecord, formatted: &str, theme: &Theme, color: bool) -> String {
    let message = toast_message(record, formatted);
    if color {
        format!("{} {}", swatch(&record.value), message.with(theme.success))
    } else {
        message
    }
}

/// Appends one formatted line to `out`.
fn push_line(out: &mut String, line: fmt::Arguments<'_>) {
    out.push_str(&line.to_string());
    out.push('\n');
}

/// A swatch with `label` drawn in black or white, whichever reads better.
fn labeled_swatch(hex: &str, label: &str) -> String {
    let text = format!(" {label} ");
    match RgbColor::from_hex(hex) {
        Ok(rgb) => {
            let fg = if rgb.luma() > 0.5 {
                Color::Black
            } else {
                Color::White
            };
            text.with(fg).on(rgb.to_terminal_color()).to_string()
        }
        Err(_) => text,
    }
}

fn swatch(hex: &str) -> String {
    match RgbColor::from_hex(hex) {
        Ok(rgb) => SWATCH.on(rgb.to_terminal_color()).to_string(),
        Err(_) => SWATCH.to_string(),
    }
}
