// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use folio_app::display::{
    category_badge, direction_arrow, expand_marker, format_date, status_icon, status_label,
};
use folio_app::{SortDirection, TableView};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::detail::{detail_lines, fit, wrap_text};
use crate::{BodyLines, Control, HitRegion, RowSpan, Target, palette};

const CARD_INDENT: &str = "  ";
const SORT_LABEL: &str = "Sort by: ";

/// The "Sort by" selector and direction toggle shown above the cards.
pub(crate) fn render_sort_line(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    projection: &TableView<'_>,
    focus: &Control,
) -> Vec<HitRegion> {
    let view = projection.view;
    let selector = format!("[ {} ▾ ]", view.sort_field.label());
    let direction_name = match view.sort_direction {
        SortDirection::Asc => "Asc",
        SortDirection::Desc => "Desc",
    };
    let direction = format!("[{} {direction_name}]", direction_arrow(view.sort_direction));
    let selector_width = (SORT_LABEL.len() + selector.chars().count()) as u16;

    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(selector_width + 1),
            Constraint::Length(direction.chars().count() as u16),
            Constraint::Min(0),
        ])
        .split(area);

    let selector_style = if *focus == Control::SortSelector {
        palette::focus_style()
    } else {
        palette::chip_style()
    };
    let direction_style = if *focus == Control::SortDirection {
        palette::focus_style()
    } else {
        palette::chip_style()
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(SORT_LABEL, palette::muted_style()),
            Span::styled(selector, selector_style),
        ])),
        parts[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(direction, direction_style)),
        parts[1],
    );

    vec![
        HitRegion {
            area: parts[0],
            control: Control::SortSelector,
        },
        HitRegion {
            area: parts[1],
            control: Control::SortDirection,
        },
    ]
}

/// Stacked cards, one per project, separated by a rule.
pub(crate) fn body_lines(projection: &TableView<'_>, area: Rect, focus: &Control) -> BodyLines {
    let width = usize::from(area.width);
    let text_width = width.saturating_sub(CARD_INDENT.len()).max(8);
    let mut body = BodyLines::default();

    for row in &projection.rows {
        let project = row.project;
        let focused = *focus == Control::ToggleRow(project.slug.clone());
        let start = body.lines.len();

        let marker_style = if focused {
            palette::focus_style()
        } else {
            palette::muted_style()
        };
        body.lines.push(Line::from(vec![
            Span::styled(expand_marker(row.expanded), marker_style),
            Span::raw(" "),
            Span::styled(fit(&project.title, text_width), palette::title_style()),
        ]));

        let status = match status_icon(&project.status) {
            Some(icon) => format!("{} {}", icon.glyph, status_label(&project.status)),
            None => status_label(&project.status),
        };
        body.lines.push(Line::from(vec![
            Span::raw(CARD_INDENT),
            Span::styled(
                format!(" {} ", category_badge(&project.category)),
                palette::badge_style(&project.category),
            ),
            Span::raw(" "),
            Span::styled(status, palette::status_style(&project.status)),
        ]));

        for line in wrap_text(&project.description, text_width) {
            body.lines.push(Line::from(Span::styled(
                format!("{CARD_INDENT}{line}"),
                palette::muted_style(),
            )));
        }
        body.lines.push(Line::from(Span::styled(
            format!("{CARD_INDENT}Updated {}", format_date(project.updated_date)),
            palette::muted_style(),
        )));

        if row.expanded {
            body.lines.extend(
                detail_lines(project, &row.href, area.width)
                    .into_iter()
                    .map(|line| line.style(palette::expanded_row_style())),
            );
        }
        body.lines.push(Line::from(Span::styled(
            "─".repeat(width),
            palette::muted_style(),
        )));

        let title_width = project.title.chars().count().min(text_width) as u16;
        body.rows.push(RowSpan {
            slug: project.slug.clone(),
            start,
            targets: vec![
                Target {
                    x: area.x + 2,
                    width: title_width,
                    control: Control::OpenLink(project.slug.clone()),
                },
                Target {
                    x: area.x,
                    width: area.width,
                    control: Control::ToggleRow(project.slug.clone()),
                },
            ],
        });
    }
    body
}
