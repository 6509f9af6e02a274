// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::Date;

use crate::{CategoryKind, SortDirection, SortField, StatusKind, ViewState};

/// Named palette colors used by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    OceanDeep,
    OceanMid,
    OceanLight,
    SkyBlue,
    WaveBlue,
    Seafoam,
    Lagoon,
    CoralGreen,
    SandyBeach,
    SunsetCoral,
    ShellWhite,
}

impl Tone {
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::OceanDeep => (0x00, 0x1f, 0x3f),
            Self::OceanMid => (0x00, 0x40, 0x80),
            Self::OceanLight => (0x00, 0x7b, 0xff),
            Self::SkyBlue => (0xad, 0xd8, 0xe6),
            Self::WaveBlue => (0x64, 0x95, 0xed),
            Self::Seafoam => (0x7f, 0xff, 0xd4),
            Self::Lagoon => (0x20, 0xb2, 0xaa),
            Self::CoralGreen => (0x3c, 0xb3, 0x71),
            Self::SandyBeach => (0xf4, 0xa4, 0x60),
            Self::SunsetCoral => (0xff, 0x63, 0x47),
            Self::ShellWhite => (0xf5, 0xf5, 0xdc),
        }
    }
}

/// Badge colors for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub fg: Tone,
    pub bg: Tone,
}

pub fn category_style(category: &str) -> BadgeStyle {
    match CategoryKind::classify(category) {
        CategoryKind::Code => BadgeStyle {
            fg: Tone::Seafoam,
            bg: Tone::Lagoon,
        },
        CategoryKind::Cad => BadgeStyle {
            fg: Tone::SkyBlue,
            bg: Tone::WaveBlue,
        },
        CategoryKind::Hardware => BadgeStyle {
            fg: Tone::Seafoam,
            bg: Tone::CoralGreen,
        },
        CategoryKind::Other => BadgeStyle {
            fg: Tone::WaveBlue,
            bg: Tone::OceanMid,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusIcon {
    pub glyph: &'static str,
    pub tone: Tone,
}

/// Unrecognized statuses get no icon.
pub fn status_icon(status: &str) -> Option<StatusIcon> {
    match StatusKind::classify(status) {
        StatusKind::Completed => Some(StatusIcon {
            glyph: "✔",
            tone: Tone::CoralGreen,
        }),
        StatusKind::InProgress => Some(StatusIcon {
            glyph: "▶",
            tone: Tone::OceanLight,
        }),
        StatusKind::OnHold => Some(StatusIcon {
            glyph: "⚠",
            tone: Tone::SandyBeach,
        }),
        StatusKind::Other => None,
    }
}

/// US short form, e.g. `Jan 5, 2024`.
pub fn format_date(date: Date) -> String {
    let month = month_abbrev(date.month());
    format!("{month} {}, {}", date.day(), date.year())
}

fn month_abbrev(month: time::Month) -> &'static str {
    use time::Month;
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

pub fn category_badge(category: &str) -> String {
    category.to_uppercase()
}

/// Only the first hyphen becomes a space; every word is capitalized.
pub fn status_label(status: &str) -> String {
    status
        .replacen('-', " ", 1)
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Label for a filter option value.
pub fn option_label(value: &str) -> String {
    capitalize(value)
}

/// Status filter option: first hyphen becomes a space, only the first
/// letter is capitalized ("in-progress" is "In progress").
pub fn status_option_label(status: &str) -> String {
    capitalize(&status.replacen('-', " ", 1))
}

/// Detail link label, e.g. "live-demo" is "Live Demo".
pub fn link_label(kind: &str) -> String {
    status_label(kind)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn detail_href(base_path: &str, slug: &str) -> String {
    format!("{base_path}{slug}")
}

pub fn expand_label(title: &str, expanded: bool) -> String {
    let verb = if expanded { "Collapse" } else { "Expand" };
    format!("{verb} details for {title}")
}

pub const fn expand_marker(expanded: bool) -> &'static str {
    if expanded { "▾" } else { "▸" }
}

pub const fn direction_arrow(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "↑",
        SortDirection::Desc => "↓",
    }
}

/// Header text with an arrow when the column drives the current sort.
pub fn sort_header_label(field: SortField, view: &ViewState) -> String {
    if view.sort_field == field {
        format!("{} {}", field.header_label(), direction_arrow(view.sort_direction))
    } else {
        field.header_label().to_owned()
    }
}

pub fn results_summary(visible: usize, total: usize) -> String {
    format!("Showing {visible} of {total} projects")
}

pub const NO_RESULTS: &str = "No projects found matching your criteria.";
pub const SEARCH_PLACEHOLDER: &str = "Search projects, technologies, tags...";
