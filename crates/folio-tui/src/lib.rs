// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod detail;
mod narrow;
mod palette;
mod wide;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use folio_app::display::{
    NO_RESULTS, SEARCH_PLACEHOLDER, detail_href, expand_label, option_label, status_option_label,
};
use folio_app::{
    Dataset, Filter, Project, ProjectTable, Slug, SortField, TableCommand, TableEvent, TableView,
    cycle_filter,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_WIDE_BREAKPOINT: u16 = 100;
const WHEEL_LINES: usize = 3;

/// Where the browser gets fresh projects when asked to reload.
pub trait DatasetSource {
    fn describe(&self) -> String;
    fn reload(&mut self) -> Result<Vec<Project>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub wide_breakpoint: u16,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            wide_breakpoint: DEFAULT_WIDE_BREAKPOINT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Wide,
    Narrow,
}

impl LayoutMode {
    pub const fn for_width(width: u16, breakpoint: u16) -> Self {
        if width >= breakpoint {
            Self::Wide
        } else {
            Self::Narrow
        }
    }
}

/// Anything that can hold focus or receive a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Control {
    Search,
    CategoryFilter,
    StatusFilter,
    SortHeader(SortField),
    SortSelector,
    SortDirection,
    ToggleRow(Slug),
    OpenLink(Slug),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HitRegion {
    pub(crate) area: Rect,
    pub(crate) control: Control,
}

/// A click target on the first line of a row; `x` is absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Target {
    pub(crate) x: u16,
    pub(crate) width: u16,
    pub(crate) control: Control,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RowSpan {
    pub(crate) slug: Slug,
    pub(crate) start: usize,
    pub(crate) targets: Vec<Target>,
}

/// Scrollable body content produced by either renderer.
#[derive(Debug, Default)]
pub(crate) struct BodyLines {
    pub(crate) lines: Vec<Line<'static>>,
    pub(crate) rows: Vec<RowSpan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct FrameOutput {
    hits: Vec<HitRegion>,
    scroll: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewData {
    breakpoint: u16,
    mode: LayoutMode,
    focus: Control,
    help_visible: bool,
    status: Option<String>,
    scroll: usize,
    follow_focus: bool,
    hits: Vec<HitRegion>,
}

impl ViewData {
    fn new(options: UiOptions) -> Self {
        Self {
            breakpoint: options.wide_breakpoint,
            mode: LayoutMode::Wide,
            focus: Control::Search,
            help_visible: false,
            status: None,
            scroll: 0,
            follow_focus: true,
            hits: Vec::new(),
        }
    }

    fn set_width(&mut self, width: u16) {
        self.mode = LayoutMode::for_width(width, self.breakpoint);
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    fn focused_slug(&self) -> Option<&Slug> {
        match &self.focus {
            Control::ToggleRow(slug) | Control::OpenLink(slug) => Some(slug),
            _ => None,
        }
    }

    fn apply_frame(&mut self, output: FrameOutput) {
        self.hits = output.hits;
        self.scroll = output.scroll;
    }
}

pub fn run_app<S: DatasetSource>(
    table: &mut ProjectTable,
    source: &mut S,
    options: UiOptions,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::new(options);
    if let Some(project) = table.visible().next() {
        view_data.focus = Control::ToggleRow(project.slug.clone());
    }
    info!(
        source = %source.describe(),
        projects = table.dataset().len(),
        breakpoint = options.wide_breakpoint,
        "browser started"
    );

    let result = event_loop(&mut terminal, table, source, &mut view_data);

    disable_raw_mode().context("disable raw mode")?;
    execute!(
        io::stdout(),
        DisableMouseCapture,
        terminal::LeaveAlternateScreen
    )
    .context("leave alternate screen")?;
    result
}

fn event_loop<B: Backend, S: DatasetSource>(
    terminal: &mut Terminal<B>,
    table: &mut ProjectTable,
    source: &mut S,
    view_data: &mut ViewData,
) -> Result<()> {
    loop {
        let size = terminal.size().context("read terminal size")?;
        view_data.set_width(size.width);
        sync_focus(table, view_data);

        let mut output = FrameOutput::default();
        terminal
            .draw(|frame| output = render(frame, table, view_data))
            .context("draw frame")?;
        view_data.apply_frame(output);

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if !has_event {
            continue;
        }
        let quit = match event::read().context("read event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key_event(table, source, view_data, key)
            }
            Event::Mouse(mouse) => {
                handle_mouse_event(table, view_data, mouse);
                false
            }
            _ => false,
        };
        if quit {
            info!("browser closed");
            return Ok(());
        }
    }
}

fn handle_key_event<S: DatasetSource>(
    table: &mut ProjectTable,
    source: &mut S,
    view_data: &mut ViewData,
    key: KeyEvent,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => return true,
            KeyCode::Char('r') => {
                reload_dataset(table, source, view_data);
                return false;
            }
            _ => {}
        }
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if view_data.focus == Control::Search && handle_search_key(table, view_data, key) {
        return false;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return true,
        (KeyCode::Char('?'), _) => view_data.help_visible = true,
        (KeyCode::Tab, _) | (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            move_focus(table, view_data, 1);
        }
        (KeyCode::BackTab, _) | (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            move_focus(table, view_data, -1);
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            if let Some(project) = table.visible().next() {
                focus_control(view_data, Control::ToggleRow(project.slug.clone()));
            }
        }
        (KeyCode::Char('G'), _) => {
            if let Some(project) = table.visible().last() {
                focus_control(view_data, Control::ToggleRow(project.slug.clone()));
            }
        }
        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => {
            let control = view_data.focus.clone();
            activate(table, view_data, control);
        }
        (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
            adjust_focused(table, view_data, -1);
        }
        (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
            adjust_focused(table, view_data, 1);
        }
        (KeyCode::Char('/'), _) => focus_control(view_data, Control::Search),
        (KeyCode::Char('o'), KeyModifiers::NONE) => {
            if let Some(slug) = view_data.focused_slug().cloned() {
                activate(table, view_data, Control::OpenLink(slug));
            }
        }
        (KeyCode::Esc, _) => view_data.status = None,
        _ => {
            if let Some(command) = table_command_for_key(table, key) {
                apply_command(table, view_data, command);
            }
        }
    }
    false
}

/// Returns true when the key was consumed as text input.
fn handle_search_key(table: &mut ProjectTable, view_data: &mut ViewData, key: KeyEvent) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            apply_command(table, view_data, TableCommand::SetSearchTerm(String::new()));
            true
        }
        (KeyCode::Char(value), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            apply_command(table, view_data, TableCommand::PushSearchChar(value));
            true
        }
        (KeyCode::Backspace, _) => {
            apply_command(table, view_data, TableCommand::PopSearchChar);
            true
        }
        (KeyCode::Enter, _) | (KeyCode::Esc, _) => {
            let next = table
                .visible()
                .next()
                .map(|project| Control::ToggleRow(project.slug.clone()))
                .unwrap_or(Control::CategoryFilter);
            focus_control(view_data, next);
            true
        }
        _ => false,
    }
}

fn table_command_for_key(table: &ProjectTable, key: KeyEvent) -> Option<TableCommand> {
    let view = table.view();
    let dataset = table.dataset();
    match key.code {
        KeyCode::Char('c') => Some(TableCommand::SetCategoryFilter(cycle_filter(
            dataset.categories(),
            &view.category_filter,
            1,
        ))),
        KeyCode::Char('C') => Some(TableCommand::SetCategoryFilter(cycle_filter(
            dataset.categories(),
            &view.category_filter,
            -1,
        ))),
        KeyCode::Char('s') => Some(TableCommand::SetStatusFilter(cycle_filter(
            dataset.statuses(),
            &view.status_filter,
            1,
        ))),
        KeyCode::Char('S') => Some(TableCommand::SetStatusFilter(cycle_filter(
            dataset.statuses(),
            &view.status_filter,
            -1,
        ))),
        KeyCode::Char('r') => Some(TableCommand::FlipSortDirection),
        KeyCode::Char('x') => Some(TableCommand::ResetFilters),
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit.to_digit(10)? as usize;
            SortField::OFFERED
                .get(index.checked_sub(1)?)
                .copied()
                .map(TableCommand::SortBy)
        }
        _ => None,
    }
}

fn handle_mouse_event(table: &mut ProjectTable, view_data: &mut ViewData, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if view_data.help_visible {
                view_data.help_visible = false;
                return;
            }
            let position = Position::new(mouse.column, mouse.row);
            let Some(control) = view_data
                .hits
                .iter()
                .find(|hit| hit.area.contains(position))
                .map(|hit| hit.control.clone())
            else {
                return;
            };
            view_data.focus = match &control {
                Control::OpenLink(slug) => Control::ToggleRow(slug.clone()),
                other => other.clone(),
            };
            activate(table, view_data, control);
        }
        MouseEventKind::ScrollDown => {
            view_data.scroll = view_data.scroll.saturating_add(WHEEL_LINES);
            view_data.follow_focus = false;
        }
        MouseEventKind::ScrollUp => {
            view_data.scroll = view_data.scroll.saturating_sub(WHEEL_LINES);
            view_data.follow_focus = false;
        }
        _ => {}
    }
}

/// Runs a control's action. Never touches the scroll offset.
fn activate(table: &mut ProjectTable, view_data: &mut ViewData, control: Control) {
    debug!(control = ?control, "activate");
    let command = match control {
        Control::Search => {
            view_data.focus = Control::Search;
            return;
        }
        Control::CategoryFilter => TableCommand::SetCategoryFilter(cycle_filter(
            table.dataset().categories(),
            &table.view().category_filter,
            1,
        )),
        Control::StatusFilter => TableCommand::SetStatusFilter(cycle_filter(
            table.dataset().statuses(),
            &table.view().status_filter,
            1,
        )),
        Control::SortHeader(field) => TableCommand::SortBy(field),
        Control::SortSelector => TableCommand::SortBy(step_sort_field(table.view().sort_field, 1)),
        Control::SortDirection => TableCommand::FlipSortDirection,
        Control::ToggleRow(slug) => TableCommand::ToggleExpansion(slug),
        Control::OpenLink(slug) => {
            let href = detail_href(table.base_path(), slug.as_str());
            info!(slug = %slug, href = %href, "detail link requested");
            view_data.set_status(format!("open {href}"));
            return;
        }
    };
    apply_command(table, view_data, command);
}

/// Left/Right on a focused selector steps its value.
fn adjust_focused(table: &mut ProjectTable, view_data: &mut ViewData, delta: isize) {
    let command = match view_data.focus.clone() {
        Control::CategoryFilter => TableCommand::SetCategoryFilter(cycle_filter(
            table.dataset().categories(),
            &table.view().category_filter,
            delta,
        )),
        Control::StatusFilter => TableCommand::SetStatusFilter(cycle_filter(
            table.dataset().statuses(),
            &table.view().status_filter,
            delta,
        )),
        Control::SortSelector => {
            TableCommand::SortBy(step_sort_field(table.view().sort_field, delta))
        }
        Control::SortHeader(_) => {
            move_focus(table, view_data, delta);
            return;
        }
        _ => return,
    };
    apply_command(table, view_data, command);
}

/// Next offered sort field, wrapping. Fields outside the offered set step to
/// the first one.
fn step_sort_field(current: SortField, delta: isize) -> SortField {
    let offered = SortField::OFFERED;
    let Some(position) = offered.iter().position(|field| *field == current) else {
        return offered[0];
    };
    let len = offered.len() as isize;
    offered[(position as isize + delta).rem_euclid(len) as usize]
}

fn apply_command(table: &mut ProjectTable, view_data: &mut ViewData, command: TableCommand) {
    let origin = command_origin(&command);
    let events = table.dispatch(command);
    if !events.is_empty() {
        let messages = events.iter().filter_map(event_message).collect::<Vec<_>>();
        view_data.status = (!messages.is_empty()).then(|| messages.join("; "));
    }
    if view_data.focused_slug().is_some() && table.visible_len() == 0 {
        view_data.focus = origin;
    }
    sync_focus(table, view_data);
}

/// The control a command belongs to; focus lands there when the rows vanish.
fn command_origin(command: &TableCommand) -> Control {
    match command {
        TableCommand::SetSearchTerm(_)
        | TableCommand::PushSearchChar(_)
        | TableCommand::PopSearchChar => Control::Search,
        TableCommand::SetStatusFilter(_) => Control::StatusFilter,
        _ => Control::CategoryFilter,
    }
}

fn event_message(event: &TableEvent) -> Option<String> {
    match event {
        TableEvent::SearchChanged(_) => None,
        TableEvent::CategoryFilterChanged(filter) => {
            Some(format!("category: {}", category_filter_label(filter)))
        }
        TableEvent::StatusFilterChanged(filter) => {
            Some(format!("status: {}", status_filter_label(filter)))
        }
        TableEvent::SortChanged(field, direction) => Some(format!(
            "sort: {} {}",
            field.label(),
            direction.as_str()
        )),
        TableEvent::RowExpanded(slug) => Some(format!("expanded {slug}")),
        TableEvent::RowCollapsed(slug) => Some(format!("collapsed {slug}")),
        TableEvent::FiltersReset => Some("filters reset".to_owned()),
    }
}

fn reload_dataset<S: DatasetSource>(
    table: &mut ProjectTable,
    source: &mut S,
    view_data: &mut ViewData,
) {
    match source.reload() {
        Ok(projects) if projects.as_slice() == table.dataset().projects() => {
            view_data.set_status("catalog unchanged");
        }
        Ok(projects) => {
            let count = projects.len();
            table.replace_dataset(Arc::new(Dataset::new(projects)));
            view_data.scroll = 0;
            view_data.follow_focus = true;
            sync_focus(table, view_data);
            view_data.set_status(format!("reloaded {count} projects"));
        }
        Err(error) => {
            warn!(source = %source.describe(), error = %format!("{error:#}"), "reload failed");
            view_data.set_status(format!("reload failed: {error:#}"));
        }
    }
}

fn focus_ring(table: &ProjectTable, mode: LayoutMode) -> Vec<Control> {
    let mut ring = vec![
        Control::Search,
        Control::CategoryFilter,
        Control::StatusFilter,
    ];
    match mode {
        LayoutMode::Wide => ring.extend(SortField::OFFERED.map(Control::SortHeader)),
        LayoutMode::Narrow => ring.extend([Control::SortSelector, Control::SortDirection]),
    }
    ring.extend(
        table
            .visible()
            .map(|project| Control::ToggleRow(project.slug.clone())),
    );
    ring
}

fn move_focus(table: &ProjectTable, view_data: &mut ViewData, delta: isize) {
    let ring = focus_ring(table, view_data.mode);
    let position = ring
        .iter()
        .position(|control| *control == view_data.focus)
        .unwrap_or(0) as isize;
    let next = (position + delta).rem_euclid(ring.len() as isize) as usize;
    focus_control(view_data, ring[next].clone());
}

fn focus_control(view_data: &mut ViewData, control: Control) {
    view_data.focus = control;
    view_data.follow_focus = true;
}

/// Keeps focus on a control that exists in the current layout and dataset.
fn sync_focus(table: &ProjectTable, view_data: &mut ViewData) {
    let focus = match (&view_data.focus, view_data.mode) {
        (Control::SortHeader(_), LayoutMode::Narrow) => Control::SortSelector,
        (Control::SortSelector | Control::SortDirection, LayoutMode::Wide) => {
            let field = table.view().sort_field;
            if SortField::OFFERED.contains(&field) {
                Control::SortHeader(field)
            } else {
                Control::SortHeader(SortField::OFFERED[0])
            }
        }
        (Control::ToggleRow(slug) | Control::OpenLink(slug), _) => {
            if table.visible().any(|project| project.slug == *slug) {
                Control::ToggleRow(slug.clone())
            } else {
                table
                    .visible()
                    .next()
                    .map(|project| Control::ToggleRow(project.slug.clone()))
                    .unwrap_or(Control::CategoryFilter)
            }
        }
        (other, _) => other.clone(),
    };
    view_data.focus = focus;
}

/// Scroll offset after clamping to the content; a followed focus keeps the
/// focused row's first line on screen.
fn clamp_scroll(
    scroll: usize,
    focused_start: Option<usize>,
    height: usize,
    total: usize,
) -> usize {
    let mut scroll = scroll.min(total.saturating_sub(height));
    if let Some(start) = focused_start {
        if start < scroll {
            scroll = start;
        } else if height > 0 && start >= scroll + height {
            scroll = start + 1 - height;
        }
    }
    scroll
}

fn render(frame: &mut ratatui::Frame<'_>, table: &ProjectTable, view_data: &ViewData) -> FrameOutput {
    let projection = table.projection();
    let narrow = view_data.mode == LayoutMode::Narrow;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(u16::from(narrow)),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let mut hits = Vec::new();
    hits.extend(render_search(frame, layout[0], &projection, &view_data.focus));
    hits.extend(render_filters(frame, layout[1], &projection, &view_data.focus));
    if narrow {
        hits.extend(narrow::render_sort_line(
            frame,
            layout[2],
            &projection,
            &view_data.focus,
        ));
    }
    frame.render_widget(
        Paragraph::new(Span::styled(projection.summary(), palette::muted_style())),
        layout[3],
    );
    let scroll = render_body(frame, layout[4], &projection, view_data, &mut hits);

    let status = Paragraph::new(status_text(table, view_data)).style(palette::status_line_style());
    frame.render_widget(status, layout[5]);

    if view_data.help_visible {
        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }

    FrameOutput { hits, scroll }
}

fn render_search(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    projection: &TableView<'_>,
    focus: &Control,
) -> Vec<HitRegion> {
    let focused = *focus == Control::Search;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title("folio")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);

    let term = &projection.view.search_term;
    let text = if term.is_empty() {
        Span::styled(
            SEARCH_PLACEHOLDER,
            palette::muted_style().add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::raw(term.clone())
    };
    frame.render_widget(Paragraph::new(text).block(block), area);

    if focused && inner.width > 0 {
        let offset = u16::try_from(term.chars().count()).unwrap_or(u16::MAX);
        let x = inner
            .x
            .saturating_add(offset)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }

    vec![HitRegion {
        area,
        control: Control::Search,
    }]
}

fn render_filters(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    projection: &TableView<'_>,
    focus: &Control,
) -> Vec<HitRegion> {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let selectors = [
        (
            Control::CategoryFilter,
            "Category: ",
            category_filter_label(&projection.view.category_filter),
        ),
        (
            Control::StatusFilter,
            "Status: ",
            status_filter_label(&projection.view.status_filter),
        ),
    ];

    let mut hits = Vec::with_capacity(selectors.len());
    for ((control, label, value), rect) in selectors.into_iter().zip(parts.iter()) {
        let style = if *focus == control {
            palette::focus_style()
        } else {
            palette::chip_style()
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(label, palette::muted_style()),
                Span::styled(format!("[ {value} ▾ ]"), style),
            ])),
            *rect,
        );
        hits.push(HitRegion {
            area: *rect,
            control,
        });
    }
    hits
}

fn category_filter_label(filter: &Filter) -> String {
    match filter {
        Filter::All => "All Categories".to_owned(),
        Filter::Only(value) => option_label(value),
    }
}

fn status_filter_label(filter: &Filter) -> String {
    match filter {
        Filter::All => "All Statuses".to_owned(),
        Filter::Only(value) => status_option_label(value),
    }
}

/// Draws the rows (or the empty indicator) and returns the scroll offset used.
fn render_body(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    projection: &TableView<'_>,
    view_data: &ViewData,
    hits: &mut Vec<HitRegion>,
) -> usize {
    let block = match view_data.mode {
        LayoutMode::Wide => Block::default().title("projects").borders(Borders::ALL),
        LayoutMode::Narrow => Block::default().title("projects").borders(Borders::TOP),
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows_area = match view_data.mode {
        LayoutMode::Wide => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(inner);
            hits.extend(wide::render_header(
                frame,
                parts[0],
                projection,
                &view_data.focus,
            ));
            parts[1]
        }
        LayoutMode::Narrow => inner,
    };

    if projection.is_empty() {
        let empty = Paragraph::new(NO_RESULTS)
            .alignment(Alignment::Center)
            .style(palette::muted_style());
        frame.render_widget(empty, rows_area);
        return 0;
    }

    let body = match view_data.mode {
        LayoutMode::Wide => wide::body_lines(projection, rows_area, &view_data.focus),
        LayoutMode::Narrow => narrow::body_lines(projection, rows_area, &view_data.focus),
    };

    let height = usize::from(rows_area.height);
    let focused_start = if view_data.follow_focus {
        view_data
            .focused_slug()
            .and_then(|slug| body.rows.iter().find(|row| row.slug == *slug))
            .map(|row| row.start)
    } else {
        None
    };
    let scroll = clamp_scroll(view_data.scroll, focused_start, height, body.lines.len());

    for row in &body.rows {
        if row.start < scroll || row.start >= scroll + height {
            continue;
        }
        let y = rows_area.y + (row.start - scroll) as u16;
        hits.extend(row.targets.iter().map(|target| HitRegion {
            area: Rect::new(target.x, y, target.width, 1),
            control: target.control.clone(),
        }));
    }

    let offset = u16::try_from(scroll).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(body.lines).scroll((offset, 0)), rows_area);
    scroll
}

fn status_text(table: &ProjectTable, view_data: &ViewData) -> String {
    if let Some(message) = &view_data.status {
        return message.clone();
    }
    match &view_data.focus {
        Control::Search => {
            "type to search | enter/esc rows | ctrl+u clear | tab next | ctrl+q quit".to_owned()
        }
        Control::ToggleRow(slug) | Control::OpenLink(slug) => {
            let hint = table
                .visible()
                .find(|project| project.slug == *slug)
                .map(|project| expand_label(&project.title, table.view().is_expanded(slug.as_str())))
                .unwrap_or_default();
            format!("enter {hint} | o link | j/k move | / search | c/s filter | 1-4 sort | ? help | q quit")
        }
        _ => "tab/j/k focus | enter/space activate | h/l change | / search | x reset | ? help | q quit"
            .to_owned(),
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ctrl+r reload catalog | ? help\n\
focus: tab/shift+tab or j/k | g/G first/last row | / search\n\
activate: enter or space on the focused control | mouse click\n\
rows: enter/space expand or collapse | o show detail link\n\
filters: c/C category | s/S status | h/l on a focused selector | x reset\n\
sort: 1 title | 2 category | 3 status | 4 updated | r reverse\n\
search: type to filter | backspace | ctrl+u clear | enter/esc leave"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::{
        Control, DatasetSource, FrameOutput, LayoutMode, UiOptions, ViewData, clamp_scroll,
        focus_ring, handle_key_event, handle_mouse_event, help_overlay_text, render,
        status_text, step_sort_field, sync_focus, table_command_for_key,
    };
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use folio_app::display::NO_RESULTS;
    use folio_app::{
        Dataset, Filter, Project, ProjectTable, Slug, SortDirection, SortField, TableCommand,
    };
    use folio_testkit::{ProjectFaker, alpha_beta};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    #[derive(Debug, Default)]
    struct TestSource {
        projects: Vec<Project>,
        reloads: usize,
        fail: bool,
    }

    impl DatasetSource for TestSource {
        fn describe(&self) -> String {
            "test".to_owned()
        }

        fn reload(&mut self) -> anyhow::Result<Vec<Project>> {
            self.reloads += 1;
            if self.fail {
                anyhow::bail!("catalog vanished");
            }
            Ok(self.projects.clone())
        }
    }

    fn table_for_test() -> ProjectTable {
        ProjectTable::new(Arc::new(Dataset::new(alpha_beta())), "/projects/")
    }

    fn view_data_for_test(mode: LayoutMode) -> ViewData {
        let mut view_data = ViewData::new(UiOptions::default());
        view_data.mode = mode;
        view_data
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(value: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(value), KeyModifiers::CONTROL)
    }

    fn press(table: &mut ProjectTable, view_data: &mut ViewData, event: KeyEvent) -> bool {
        let mut source = TestSource::default();
        handle_key_event(table, &mut source, view_data, event)
    }

    fn click(table: &mut ProjectTable, view_data: &mut ViewData, column: u16, row: u16) {
        handle_mouse_event(
            table,
            view_data,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    fn draw(table: &ProjectTable, view_data: &mut ViewData, width: u16, height: u16) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal should build");
        let mut output = FrameOutput::default();
        terminal
            .draw(|frame| output = render(frame, table, view_data))
            .expect("draw should succeed");
        view_data.apply_frame(output);

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn hit_for(view_data: &ViewData, control: &Control) -> (u16, u16) {
        let hit = view_data
            .hits
            .iter()
            .find(|hit| hit.control == *control)
            .unwrap_or_else(|| panic!("no hit region for {control:?}"));
        (hit.area.x, hit.area.y)
    }

    fn visible_slugs(table: &ProjectTable) -> Vec<String> {
        table
            .visible()
            .map(|project| project.slug.as_str().to_owned())
            .collect()
    }

    #[test]
    fn layout_mode_switches_at_breakpoint() {
        assert_eq!(LayoutMode::for_width(100, 100), LayoutMode::Wide);
        assert_eq!(LayoutMode::for_width(99, 100), LayoutMode::Narrow);
        assert_eq!(LayoutMode::for_width(80, 60), LayoutMode::Wide);
    }

    #[test]
    fn focus_ring_depends_on_layout() {
        let table = table_for_test();
        let wide = focus_ring(&table, LayoutMode::Wide);
        assert_eq!(wide.len(), 3 + SortField::OFFERED.len() + 2);
        assert_eq!(wide[3], Control::SortHeader(SortField::Title));

        let narrow = focus_ring(&table, LayoutMode::Narrow);
        assert_eq!(
            narrow[3..5],
            [Control::SortSelector, Control::SortDirection]
        );
        assert_eq!(narrow.last(), Some(&Control::ToggleRow(Slug::from("beta"))));
    }

    #[test]
    fn tab_walks_the_ring_and_wraps() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        view_data.focus = Control::ToggleRow(Slug::from("beta"));

        press(&mut table, &mut view_data, key(KeyCode::Tab));
        assert_eq!(view_data.focus, Control::Search);

        press(&mut table, &mut view_data, key(KeyCode::BackTab));
        assert_eq!(view_data.focus, Control::ToggleRow(Slug::from("beta")));

        press(&mut table, &mut view_data, key(KeyCode::Char('k')));
        assert_eq!(view_data.focus, Control::ToggleRow(Slug::from("alpha")));
    }

    #[test]
    fn enter_on_sort_header_sorts_then_flips() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        view_data.focus = Control::SortHeader(SortField::UpdatedDate);

        press(&mut table, &mut view_data, key(KeyCode::Enter));
        assert_eq!(table.view().sort_field, SortField::UpdatedDate);
        assert_eq!(table.view().sort_direction, SortDirection::Asc);
        assert_eq!(visible_slugs(&table), vec!["alpha", "beta"]);

        press(&mut table, &mut view_data, key(KeyCode::Char(' ')));
        assert_eq!(table.view().sort_direction, SortDirection::Desc);
        assert_eq!(visible_slugs(&table), vec!["beta", "alpha"]);
        assert_eq!(
            view_data.status.as_deref(),
            Some("sort: Last Updated desc")
        );
    }

    #[test]
    fn space_on_row_toggles_expansion_without_scrolling() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        view_data.focus = Control::ToggleRow(Slug::from("alpha"));
        draw(&table, &mut view_data, 120, 30);
        assert_eq!(view_data.scroll, 0);

        press(&mut table, &mut view_data, key(KeyCode::Char(' ')));
        assert!(table.view().is_expanded("alpha"));
        let screen = draw(&table, &mut view_data, 120, 30);
        assert_eq!(view_data.scroll, 0);
        assert!(screen.contains("Project Info"));
        assert!(screen.contains("/projects/alpha"));

        press(&mut table, &mut view_data, key(KeyCode::Char(' ')));
        assert!(!table.view().is_expanded("alpha"));
        assert_eq!(view_data.status.as_deref(), Some("collapsed alpha"));
    }

    #[test]
    fn search_focus_captures_text_including_q() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        view_data.focus = Control::Search;

        for value in ['b', 'E', 'q'] {
            assert!(!press(&mut table, &mut view_data, key(KeyCode::Char(value))));
        }
        assert_eq!(table.view().search_term, "bEq");
        assert!(visible_slugs(&table).is_empty());

        press(&mut table, &mut view_data, key(KeyCode::Backspace));
        assert_eq!(visible_slugs(&table), vec!["beta"]);

        press(&mut table, &mut view_data, ctrl('u'));
        assert!(table.view().search_term.is_empty());

        press(&mut table, &mut view_data, key(KeyCode::Enter));
        assert_eq!(view_data.focus, Control::ToggleRow(Slug::from("alpha")));
        assert!(press(&mut table, &mut view_data, key(KeyCode::Char('q'))));
    }

    #[test]
    fn ctrl_q_quits_from_anywhere() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Narrow);
        view_data.focus = Control::Search;
        assert!(press(&mut table, &mut view_data, ctrl('q')));
        view_data.help_visible = true;
        assert!(press(&mut table, &mut view_data, ctrl('q')));
    }

    #[test]
    fn filter_keys_cycle_discovered_values() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        view_data.focus = Control::ToggleRow(Slug::from("alpha"));

        press(&mut table, &mut view_data, key(KeyCode::Char('c')));
        assert_eq!(
            table.view().category_filter,
            Filter::Only("cad".to_owned())
        );
        assert_eq!(view_data.status.as_deref(), Some("category: Cad"));
        assert_eq!(visible_slugs(&table), vec!["beta"]);
        assert_eq!(view_data.focus, Control::ToggleRow(Slug::from("beta")));

        press(&mut table, &mut view_data, key(KeyCode::Char('C')));
        assert_eq!(table.view().category_filter, Filter::All);

        press(&mut table, &mut view_data, key(KeyCode::Char('s')));
        assert_eq!(
            view_data.status.as_deref(),
            Some("status: Completed")
        );

        press(&mut table, &mut view_data, key(KeyCode::Char('x')));
        assert_eq!(table.view().status_filter, Filter::All);
        assert_eq!(view_data.status.as_deref(), Some("filters reset"));
    }

    #[test]
    fn emptying_filters_keep_keys_out_of_the_search_box() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        view_data.focus = Control::ToggleRow(Slug::from("alpha"));
        table.dispatch(TableCommand::SetSearchTerm("alp".to_owned()));

        press(&mut table, &mut view_data, key(KeyCode::Char('c')));
        assert!(visible_slugs(&table).is_empty());
        assert_eq!(view_data.focus, Control::CategoryFilter);

        press(&mut table, &mut view_data, key(KeyCode::Char('c')));
        assert_eq!(table.view().search_term, "alp");
        assert_eq!(
            table.view().category_filter,
            Filter::Only("code".to_owned())
        );
        assert_eq!(visible_slugs(&table), vec!["alpha"]);

        press(&mut table, &mut view_data, key(KeyCode::Char('x')));
        assert_eq!(table.view().search_term, "");
    }

    #[test]
    fn status_key_that_empties_rows_focuses_the_status_filter() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Narrow);
        view_data.focus = Control::ToggleRow(Slug::from("alpha"));
        table.dispatch(TableCommand::SetSearchTerm("alp".to_owned()));

        press(&mut table, &mut view_data, key(KeyCode::Char('S')));
        assert_eq!(
            table.view().status_filter,
            Filter::Only("in-progress".to_owned())
        );
        assert_eq!(view_data.focus, Control::StatusFilter);
        press(&mut table, &mut view_data, key(KeyCode::Char('r')));
        assert_eq!(table.view().search_term, "alp");
        assert_eq!(table.view().sort_direction, SortDirection::Desc);
    }

    #[test]
    fn focused_filter_steps_with_left_and_right() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        view_data.focus = Control::StatusFilter;

        press(&mut table, &mut view_data, key(KeyCode::Left));
        assert_eq!(
            table.view().status_filter,
            Filter::Only("in-progress".to_owned())
        );
        assert_eq!(view_data.status.as_deref(), Some("status: In progress"));

        press(&mut table, &mut view_data, key(KeyCode::Right));
        assert_eq!(table.view().status_filter, Filter::All);
    }

    #[test]
    fn number_keys_pick_offered_sort_fields() {
        let table = table_for_test();
        assert_eq!(
            table_command_for_key(&table, key(KeyCode::Char('2'))),
            Some(TableCommand::SortBy(SortField::Category))
        );
        assert_eq!(
            table_command_for_key(&table, key(KeyCode::Char('4'))),
            Some(TableCommand::SortBy(SortField::UpdatedDate))
        );
        assert_eq!(table_command_for_key(&table, key(KeyCode::Char('5'))), None);
        assert_eq!(
            table_command_for_key(&table, key(KeyCode::Char('r'))),
            Some(TableCommand::FlipSortDirection)
        );
    }

    #[test]
    fn narrow_selector_steps_field_and_toggle_flips_direction() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Narrow);
        view_data.focus = Control::SortSelector;

        press(&mut table, &mut view_data, key(KeyCode::Enter));
        assert_eq!(table.view().sort_field, SortField::Category);
        assert_eq!(table.view().sort_direction, SortDirection::Asc);

        press(&mut table, &mut view_data, key(KeyCode::Left));
        assert_eq!(table.view().sort_field, SortField::Title);

        view_data.focus = Control::SortDirection;
        press(&mut table, &mut view_data, key(KeyCode::Char(' ')));
        assert_eq!(table.view().sort_field, SortField::Title);
        assert_eq!(table.view().sort_direction, SortDirection::Desc);
        assert_eq!(visible_slugs(&table), vec!["beta", "alpha"]);
    }

    #[test]
    fn step_sort_field_wraps_and_recovers_from_unoffered_fields() {
        assert_eq!(
            step_sort_field(SortField::UpdatedDate, 1),
            SortField::Title
        );
        assert_eq!(
            step_sort_field(SortField::Title, -1),
            SortField::UpdatedDate
        );
        assert_eq!(
            step_sort_field(SortField::CreatedDate, 1),
            SortField::Title
        );
    }

    #[test]
    fn sort_focus_follows_layout_changes() {
        let table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        view_data.focus = Control::SortHeader(SortField::Status);

        view_data.set_width(60);
        sync_focus(&table, &mut view_data);
        assert_eq!(view_data.mode, LayoutMode::Narrow);
        assert_eq!(view_data.focus, Control::SortSelector);

        view_data.set_width(140);
        sync_focus(&table, &mut view_data);
        assert_eq!(view_data.focus, Control::SortHeader(SortField::Title));
    }

    #[test]
    fn help_overlay_opens_and_swallows_keys() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        view_data.focus = Control::ToggleRow(Slug::from("alpha"));

        press(&mut table, &mut view_data, key(KeyCode::Char('?')));
        assert!(view_data.help_visible);
        press(&mut table, &mut view_data, key(KeyCode::Char('c')));
        assert_eq!(table.view().category_filter, Filter::All);
        assert!(!press(&mut table, &mut view_data, key(KeyCode::Char('q'))));

        press(&mut table, &mut view_data, key(KeyCode::Esc));
        assert!(!view_data.help_visible);
        assert!(help_overlay_text().contains("ctrl+r reload"));
    }

    #[test]
    fn wide_render_shows_headers_rows_and_summary() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        table.dispatch(TableCommand::SortBy(SortField::UpdatedDate));

        let screen = draw(&table, &mut view_data, 120, 20);
        assert!(screen.contains("Project Title"));
        assert!(screen.contains("Last Updated ↑"));
        assert!(screen.contains("Description"));
        assert!(screen.contains("Showing 2 of 2 projects"));
        assert!(screen.contains(" CODE "));
        assert!(screen.contains("✔ Completed"));
        assert!(screen.contains("▶ In Progress"));
        assert!(screen.contains("Jan 1, 2024"));
        assert!(!screen.contains("Sort by:"));
    }

    #[test]
    fn narrow_render_shows_cards_and_sort_selector() {
        let table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Narrow);

        let screen = draw(&table, &mut view_data, 60, 30);
        assert!(screen.contains("Sort by: [ Title ▾ ]"));
        assert!(screen.contains("[↑ Asc]"));
        assert!(screen.contains("▸ Alpha"));
        assert!(screen.contains("Updated Jan 1, 2023"));
        assert!(screen.contains(" CAD "));
        assert!(screen.contains("Showing 2 of 2 projects"));
        assert!(!screen.contains("Project Title"));
    }

    #[test]
    fn both_layouts_show_the_empty_indicator() {
        let mut table = table_for_test();
        table.dispatch(TableCommand::SetSearchTerm("nothing-matches".to_owned()));

        for (mode, width) in [(LayoutMode::Wide, 120), (LayoutMode::Narrow, 60)] {
            let mut view_data = view_data_for_test(mode);
            let screen = draw(&table, &mut view_data, width, 20);
            assert!(screen.contains(NO_RESULTS), "{mode:?}");
            assert!(screen.contains("Showing 0 of 2 projects"), "{mode:?}");
        }
    }

    #[test]
    fn clicking_headers_sorts_like_keyboard_activation() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        draw(&table, &mut view_data, 120, 20);

        let (x, y) = hit_for(&view_data, &Control::SortHeader(SortField::Category));
        click(&mut table, &mut view_data, x, y);
        assert_eq!(table.view().sort_field, SortField::Category);
        assert_eq!(view_data.focus, Control::SortHeader(SortField::Category));
        assert_eq!(visible_slugs(&table), vec!["beta", "alpha"]);

        draw(&table, &mut view_data, 120, 20);
        click(&mut table, &mut view_data, x, y);
        assert_eq!(table.view().sort_direction, SortDirection::Desc);
    }

    #[test]
    fn clicking_rows_toggles_and_titles_show_links() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Narrow);
        draw(&table, &mut view_data, 60, 30);

        let (x, y) = hit_for(&view_data, &Control::ToggleRow(Slug::from("beta")));
        click(&mut table, &mut view_data, x, y);
        assert!(table.view().is_expanded("beta"));
        assert_eq!(view_data.focus, Control::ToggleRow(Slug::from("beta")));

        draw(&table, &mut view_data, 60, 30);
        let (x, y) = hit_for(&view_data, &Control::OpenLink(Slug::from("alpha")));
        click(&mut table, &mut view_data, x, y);
        assert_eq!(view_data.status.as_deref(), Some("open /projects/alpha"));
        assert!(!table.view().is_expanded("alpha"));
    }

    #[test]
    fn clicking_the_narrow_direction_toggle_flips_sort() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Narrow);
        draw(&table, &mut view_data, 60, 30);

        let (x, y) = hit_for(&view_data, &Control::SortDirection);
        click(&mut table, &mut view_data, x, y);
        assert_eq!(table.view().sort_direction, SortDirection::Desc);
    }

    #[test]
    fn clamp_scroll_keeps_focused_row_visible() {
        assert_eq!(clamp_scroll(0, Some(3), 10, 40), 0);
        assert_eq!(clamp_scroll(0, Some(15), 10, 40), 6);
        assert_eq!(clamp_scroll(20, Some(5), 10, 40), 5);
        assert_eq!(clamp_scroll(50, None, 10, 40), 30);
        assert_eq!(clamp_scroll(7, None, 10, 5), 0);
    }

    #[test]
    fn focus_moves_scroll_to_keep_rows_visible() {
        let projects = ProjectFaker::new(3).projects(40);
        let mut table = ProjectTable::new(Arc::new(Dataset::new(projects)), "/p/");
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        view_data.focus = Control::ToggleRow(Slug::from("unused"));
        sync_focus(&table, &mut view_data);

        press(&mut table, &mut view_data, key(KeyCode::Char('G')));
        draw(&table, &mut view_data, 120, 20);
        assert!(view_data.scroll > 0);
        let last = table.visible().last().map(|project| project.slug.clone());
        assert_eq!(view_data.focused_slug(), last.as_ref());

        press(&mut table, &mut view_data, key(KeyCode::Char('g')));
        draw(&table, &mut view_data, 120, 20);
        assert_eq!(view_data.scroll, 0);
    }

    #[test]
    fn reload_keeps_identical_data_and_resets_on_change() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        view_data.focus = Control::ToggleRow(Slug::from("alpha"));
        table.dispatch(TableCommand::ToggleExpansion(Slug::from("alpha")));
        let revision = table.dataset().revision();

        let mut source = TestSource {
            projects: alpha_beta(),
            ..TestSource::default()
        };
        handle_key_event(&mut table, &mut source, &mut view_data, ctrl('r'));
        assert_eq!(table.dataset().revision(), revision);
        assert!(table.view().is_expanded("alpha"));
        assert_eq!(view_data.status.as_deref(), Some("catalog unchanged"));

        source.projects.truncate(1);
        source.projects[0].title = "Alpha Prime".to_owned();
        handle_key_event(&mut table, &mut source, &mut view_data, ctrl('r'));
        assert_ne!(table.dataset().revision(), revision);
        assert!(!table.view().is_expanded("alpha"));
        assert_eq!(view_data.status.as_deref(), Some("reloaded 1 projects"));
        assert_eq!(source.reloads, 2);

        source.fail = true;
        handle_key_event(&mut table, &mut source, &mut view_data, ctrl('r'));
        assert!(
            view_data
                .status
                .as_deref()
                .is_some_and(|status| status.contains("catalog vanished"))
        );
        assert_eq!(table.dataset().len(), 1);
    }

    #[test]
    fn status_text_uses_expand_labels_for_rows() {
        let mut table = table_for_test();
        let mut view_data = view_data_for_test(LayoutMode::Wide);
        view_data.focus = Control::ToggleRow(Slug::from("beta"));
        assert!(status_text(&table, &view_data).contains("Expand details for Beta"));

        table.dispatch(TableCommand::ToggleExpansion(Slug::from("beta")));
        assert!(status_text(&table, &view_data).contains("Collapse details for Beta"));

        view_data.focus = Control::Search;
        assert!(status_text(&table, &view_data).contains("type to search"));
    }
}
