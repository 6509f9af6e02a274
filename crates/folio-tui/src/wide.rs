// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use folio_app::display::{
    category_badge, expand_marker, format_date, sort_header_label, status_icon, status_label,
};
use folio_app::{RowView, SortField, TableView};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::detail::{detail_lines, fit};
use crate::{BodyLines, Control, HitRegion, RowSpan, Target, palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Marker,
    Title,
    Category,
    Status,
    Description,
    Updated,
}

const COLUMNS: [Column; 6] = [
    Column::Marker,
    Column::Title,
    Column::Category,
    Column::Status,
    Column::Description,
    Column::Updated,
];

impl Column {
    const fn constraint(self) -> Constraint {
        match self {
            Self::Marker => Constraint::Length(3),
            Self::Title => Constraint::Percentage(24),
            Self::Category => Constraint::Length(12),
            Self::Status => Constraint::Length(15),
            Self::Description => Constraint::Min(12),
            Self::Updated => Constraint::Length(16),
        }
    }

    const fn sort_field(self) -> Option<SortField> {
        match self {
            Self::Title => Some(SortField::Title),
            Self::Category => Some(SortField::Category),
            Self::Status => Some(SortField::Status),
            Self::Updated => Some(SortField::UpdatedDate),
            Self::Marker | Self::Description => None,
        }
    }
}

fn column_rects(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(COLUMNS.map(Column::constraint))
        .split(area)
        .to_vec()
}

/// Draws the sortable header row and returns one hit region per sort trigger.
pub(crate) fn render_header(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    projection: &TableView<'_>,
    focus: &Control,
) -> Vec<HitRegion> {
    let mut hits = Vec::new();
    for (column, rect) in COLUMNS.iter().zip(column_rects(area)) {
        let width = usize::from(rect.width.saturating_sub(1));
        let (label, style) = match column.sort_field() {
            Some(field) => {
                let style = if *focus == Control::SortHeader(field) {
                    palette::focus_style()
                } else {
                    palette::header_style()
                };
                hits.push(HitRegion {
                    area: rect,
                    control: Control::SortHeader(field),
                });
                (sort_header_label(field, projection.view), style)
            }
            None if *column == Column::Description => {
                ("Description".to_owned(), palette::header_style())
            }
            None => (String::new(), Style::default()),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(fit(&label, width), style)),
            rect,
        );
    }
    hits
}

/// One line per project plus the inline detail panel under expanded rows.
pub(crate) fn body_lines(projection: &TableView<'_>, area: Rect, focus: &Control) -> BodyLines {
    let rects = column_rects(area);
    let mut body = BodyLines::default();

    for row in &projection.rows {
        let focused = *focus == Control::ToggleRow(row.project.slug.clone());
        let start = body.lines.len();
        body.lines.push(row_line(row, &rects, focused));
        if row.expanded {
            body.lines.extend(
                detail_lines(row.project, &row.href, area.width)
                    .into_iter()
                    .map(|line| line.style(palette::expanded_row_style())),
            );
        }

        let slug = row.project.slug.clone();
        let mut targets = Vec::new();
        if let Some(title) = rects.get(1) {
            targets.push(Target {
                x: title.x,
                width: title.width,
                control: Control::OpenLink(slug.clone()),
            });
        }
        targets.push(Target {
            x: area.x,
            width: area.width,
            control: Control::ToggleRow(slug.clone()),
        });
        body.rows.push(RowSpan {
            slug,
            start,
            targets,
        });
    }
    body
}

fn row_line(row: &RowView<'_>, rects: &[Rect], focused: bool) -> Line<'static> {
    let project = row.project;
    let mut spans = Vec::with_capacity(COLUMNS.len() + 1);

    for (column, rect) in COLUMNS.iter().zip(rects) {
        let width = usize::from(rect.width.saturating_sub(1));
        match column {
            Column::Marker => {
                let style = if focused {
                    palette::focus_style()
                } else {
                    palette::muted_style()
                };
                spans.push(Span::styled(fit(expand_marker(row.expanded), width), style));
            }
            Column::Title => {
                spans.push(Span::styled(fit(&project.title, width), palette::title_style()));
            }
            Column::Category => {
                let badge = format!(" {} ", category_badge(&project.category));
                let badge_len = badge.chars().count();
                if badge_len <= width {
                    spans.push(Span::styled(badge, palette::badge_style(&project.category)));
                    spans.push(Span::raw(" ".repeat(width - badge_len)));
                } else {
                    spans.push(Span::styled(
                        fit(&badge, width),
                        palette::badge_style(&project.category),
                    ));
                }
            }
            Column::Status => {
                let label = match status_icon(&project.status) {
                    Some(icon) => format!("{} {}", icon.glyph, status_label(&project.status)),
                    None => status_label(&project.status),
                };
                spans.push(Span::styled(
                    fit(&label, width),
                    palette::status_style(&project.status),
                ));
            }
            Column::Description => {
                spans.push(Span::styled(
                    fit(&project.description, width),
                    palette::muted_style(),
                ));
            }
            Column::Updated => {
                spans.push(Span::styled(
                    fit(&format_date(project.updated_date), width),
                    palette::muted_style(),
                ));
            }
        }
        spans.push(Span::raw(" "));
    }

    let line = Line::from(spans);
    if focused {
        line.style(Style::default().bg(Color::DarkGray))
    } else {
        line
    }
}
