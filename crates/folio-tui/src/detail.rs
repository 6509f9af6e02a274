// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use folio_app::Project;
use folio_app::display::{format_date, link_label};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::palette;

const INDENT: &str = "    ";

/// Detail panel lines shared by both layouts. Absent sections are skipped.
pub(crate) fn detail_lines(project: &Project, href: &str, width: u16) -> Vec<Line<'static>> {
    let text_width = usize::from(width).saturating_sub(INDENT.len()).max(12);
    let mut lines = Vec::new();

    if !project.detailed_description.is_empty() {
        lines.push(heading("Detailed Description"));
        lines.extend(
            wrap_text(&project.detailed_description, text_width)
                .into_iter()
                .map(|line| body(format!("{INDENT}{line}"))),
        );
    }

    if !project.technologies().is_empty() {
        lines.push(heading("Technologies"));
        lines.push(Line::from(
            std::iter::once(Span::raw(INDENT))
                .chain(project.technologies().iter().map(|tech| {
                    Span::styled(format!(" {tech} "), palette::chip_style())
                }))
                .collect::<Vec<_>>(),
        ));
    }

    if !project.features().is_empty() {
        lines.push(heading("Key Features"));
        for feature in project.features() {
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled("• ", palette::bullet_style()),
                Span::styled(feature.clone(), palette::muted_style()),
            ]));
        }
    }

    lines.push(heading("Project Info"));
    lines.push(body(format!(
        "{INDENT}Created: {}",
        format_date(project.created_date)
    )));
    if !project.duration.is_empty() {
        lines.push(body(format!("{INDENT}Duration: {}", project.duration)));
    }

    if !project.tags().is_empty() {
        let tags = project
            .tags()
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(heading("Tags"));
        lines.push(body(format!("{INDENT}{tags}")));
    }

    if project.has_links() {
        lines.push(heading("Links"));
        for (label, url) in project.links() {
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(format!("{}: ", link_label(label)), palette::muted_style()),
                Span::styled(url.to_owned(), palette::link_style()),
            ]));
        }
    }

    lines.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled("Page: ", palette::muted_style()),
        Span::styled(href.to_owned(), palette::link_style()),
    ]));
    lines
}

fn heading(label: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {label}"),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn body(text: String) -> Line<'static> {
    Line::from(Span::styled(text, palette::muted_style()))
}

/// Greedy word wrap on whitespace. Words longer than `width` are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word = word.to_owned();
        loop {
            let word_len = word.chars().count();
            let needed = if current_len == 0 {
                word_len
            } else {
                current_len + 1 + word_len
            };
            if needed <= width {
                if current_len > 0 {
                    current.push(' ');
                }
                current.push_str(&word);
                current_len = needed;
                break;
            }
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                continue;
            }
            let head = word.chars().take(width).collect::<String>();
            let tail = word.chars().skip(width).collect::<String>();
            lines.push(head);
            if tail.is_empty() {
                break;
            }
            word = tail;
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Pads or truncates to exactly `width` characters, ending with `…` when cut.
pub(crate) fn fit(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        let mut padded = value.to_owned();
        padded.extend(std::iter::repeat_n(' ', width - count));
        return padded;
    }
    if width == 0 {
        return String::new();
    }
    let mut truncated = value.chars().take(width - 1).collect::<String>();
    truncated.push('…');
    truncated
}
