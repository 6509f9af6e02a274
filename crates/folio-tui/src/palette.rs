// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use folio_app::display::{Tone, category_style, status_icon};
use ratatui::style::{Color, Modifier, Style};

pub(crate) fn color(tone: Tone) -> Color {
    let (r, g, b) = tone.rgb();
    Color::Rgb(r, g, b)
}

pub(crate) fn badge_style(category: &str) -> Style {
    let badge = category_style(category);
    Style::default()
        .fg(color(badge.fg))
        .bg(color(badge.bg))
        .add_modifier(Modifier::BOLD)
}

/// Icon tone when the status is known, plain text otherwise.
pub(crate) fn status_style(status: &str) -> Style {
    match status_icon(status) {
        Some(icon) => Style::default().fg(color(icon.tone)),
        None => muted_style(),
    }
}

pub(crate) fn title_style() -> Style {
    Style::default()
        .fg(color(Tone::ShellWhite))
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(color(Tone::SkyBlue))
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn muted_style() -> Style {
    Style::default().fg(color(Tone::WaveBlue))
}

pub(crate) fn link_style() -> Style {
    Style::default()
        .fg(color(Tone::Seafoam))
        .add_modifier(Modifier::UNDERLINED)
}

pub(crate) fn chip_style() -> Style {
    Style::default()
        .fg(color(Tone::ShellWhite))
        .bg(color(Tone::OceanMid))
}

pub(crate) fn bullet_style() -> Style {
    Style::default().fg(color(Tone::Lagoon))
}

pub(crate) fn focus_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn expanded_row_style() -> Style {
    Style::default().bg(color(Tone::OceanDeep))
}

pub(crate) fn status_line_style() -> Style {
    Style::default().fg(Color::Yellow)
}
