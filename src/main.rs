//! Interactive demo: a scrollable grid of selectable cells.
//!
//! Drag with the left button to select, hold ctrl to add to or toggle the
//! existing selection, and drag past the container edge to auto-scroll.
//! The terminal is the "page": crossterm mouse events become
//! `PointerEvent`s and the host traits draw through ratatui.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use indoc::indoc;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{Frame, Terminal};

use area_select::{
    AreaSelector, ContainerMetrics, GeometryProvider, PointerCapture, PointerEvent, Rect,
    ScrollDelta, ScrollRequester, SelectionRenderer, Target, TargetId, trace_log,
};

const CELL_WIDTH: i32 = 12;
const CELL_HEIGHT: i32 = 4;
const CELL_GAP: i32 = 1;
const HELP_HEIGHT: u16 = 7;

#[derive(Parser, Debug)]
#[command(
    name = "area-select",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rectangular multi-selection demo on a scrollable grid"
)]
struct DemoCli {
    /// Grid rows (content scrolls when taller than the window).
    #[arg(long = "rows", value_name = "N", default_value_t = 16)]
    rows: u16,

    /// Grid columns.
    #[arg(long = "cols", value_name = "N", default_value_t = 8)]
    cols: u16,

    /// Write gesture traces to this file (the TUI owns the terminal).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = DemoCli::parse();
    trace_log::init(cli.log_file.as_deref())?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &cli);

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, cli: &DemoCli) -> io::Result<()> {
    let mut host = GridHost::new(cli.rows as i32, cli.cols as i32);
    let committed: Rc<RefCell<Vec<TargetId>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&committed);
    let mut selector = AreaSelector::new(move |ids| {
        *sink.borrow_mut() = ids.to_vec();
    });

    loop {
        terminal.draw(|frame| draw(frame, &mut host, &committed.borrow()))?;

        if !event::poll(Duration::from_millis(16))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                _ => {}
            },
            Event::Mouse(mouse) => {
                let (x, y) = (mouse.column as f64, mouse.row as f64);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        // presses originate inside the container, like the
                        // widget's mousedown listener; moves and releases
                        // are global
                        if host.contains_viewport(mouse.column, mouse.row) {
                            let additive = mouse.modifiers.contains(KeyModifiers::CONTROL);
                            selector.handle_event(&PointerEvent::press(x, y, additive), &mut host);
                        }
                    }
                    MouseEventKind::Drag(MouseButton::Left) => {
                        selector.handle_event(&PointerEvent::moved(x, y), &mut host);
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        selector.handle_event(&PointerEvent::release(x, y), &mut host);
                    }
                    MouseEventKind::ScrollUp => host.scroll_by(ScrollDelta { dx: 0, dy: -2 }),
                    MouseEventKind::ScrollDown => host.scroll_by(ScrollDelta { dx: 0, dy: 2 }),
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

/// A grid item with content-space bounds; the id doubles as the label.
struct GridItem {
    id: TargetId,
    bounds: Rect,
}

/// Terminal-backed host: the container is a bordered region of the frame,
/// content is a grid larger than the viewport, scroll offsets are clamped
/// here when the engine requests a scroll.
struct GridHost {
    items: Vec<GridItem>,
    /// Viewport-space area of the container's interior, updated per frame.
    container: Rect,
    scroll_left: i32,
    scroll_top: i32,
    content_width: i32,
    content_height: i32,
    /// Per-frame display flags set by the reconciler.
    marked: BTreeSet<TargetId>,
    /// Content-space selection rectangle while a gesture is visible.
    selection_rect: Option<Rect>,
    rect_visible: bool,
    moves_captured: bool,
}

impl GridHost {
    fn new(rows: i32, cols: i32) -> Self {
        let mut items = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                let left = CELL_GAP + col * (CELL_WIDTH + CELL_GAP);
                let top = CELL_GAP + row * (CELL_HEIGHT + CELL_GAP);
                items.push(GridItem {
                    id: TargetId::new(format!("r{row}c{col}")),
                    bounds: Rect::new(left, top, CELL_WIDTH, CELL_HEIGHT),
                });
            }
        }
        Self {
            items,
            container: Rect::default(),
            scroll_left: 0,
            scroll_top: 0,
            content_width: CELL_GAP + cols * (CELL_WIDTH + CELL_GAP),
            content_height: CELL_GAP + rows * (CELL_HEIGHT + CELL_GAP),
            marked: BTreeSet::new(),
            selection_rect: None,
            rect_visible: false,
            moves_captured: false,
        }
    }

    fn set_viewport(&mut self, area: ratatui::layout::Rect) {
        self.container = Rect::new(
            area.x as i32,
            area.y as i32,
            area.width as i32,
            area.height as i32,
        );
        self.clamp_scroll();
    }

    fn contains_viewport(&self, column: u16, row: u16) -> bool {
        let (x, y) = (column as i32, row as i32);
        x >= self.container.left
            && x < self.container.right()
            && y >= self.container.top
            && y < self.container.bottom()
    }

    fn clamp_scroll(&mut self) {
        let max_left = (self.content_width - self.container.width).max(0);
        let max_top = (self.content_height - self.container.height).max(0);
        self.scroll_left = self.scroll_left.clamp(0, max_left);
        self.scroll_top = self.scroll_top.clamp(0, max_top);
    }
}

impl GeometryProvider for GridHost {
    fn container_metrics(&self) -> ContainerMetrics {
        ContainerMetrics {
            bounds: self.container,
            scroll_left: self.scroll_left,
            scroll_top: self.scroll_top,
            scroll_width: self.content_width,
            scroll_height: self.content_height,
        }
    }

    fn targets(&self) -> Vec<Target> {
        let metrics = self.container_metrics();
        self.items
            .iter()
            .map(|item| Target::new(item.id.clone(), metrics.to_viewport(item.bounds)))
            .collect()
    }
}

impl SelectionRenderer for GridHost {
    fn show_selection_rect(&mut self) {
        self.rect_visible = true;
    }

    fn hide_selection_rect(&mut self) {
        self.rect_visible = false;
        self.selection_rect = None;
    }

    fn position_selection_rect(&mut self, rect: Rect) {
        self.selection_rect = Some(rect);
    }

    fn set_target_selected(&mut self, id: &TargetId, selected: bool) {
        if selected {
            self.marked.insert(id.clone());
        } else {
            self.marked.remove(id);
        }
    }
}

impl ScrollRequester for GridHost {
    fn scroll_by(&mut self, delta: ScrollDelta) {
        self.scroll_left += delta.dx;
        self.scroll_top += delta.dy;
        self.clamp_scroll();
    }
}

impl PointerCapture for GridHost {
    // the terminal already reports every drag event globally; the flag is
    // only surfaced in the status line
    fn capture_moves(&mut self) {
        self.moves_captured = true;
    }

    fn release_moves(&mut self) {
        self.moves_captured = false;
    }
}

fn draw(frame: &mut Frame, host: &mut GridHost, committed: &[TargetId]) {
    let [grid_area, help_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(HELP_HEIGHT)])
            .areas(frame.area());

    let container = Block::bordered().title(" items ");
    let inner = container.inner(grid_area);
    frame.render_widget(container, grid_area);
    host.set_viewport(inner);

    let metrics = host.container_metrics();
    for item in &host.items {
        let Some(area) = clip_to_viewport(metrics.to_viewport(item.bounds), inner) else {
            continue;
        };
        let style = if host.marked.contains(&item.id) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cell = Block::bordered().title(item.id.as_str()).style(style);
        frame.render_widget(cell, area);
    }

    if host.rect_visible
        && let Some(rect) = host.selection_rect
        && let Some(area) = clip_to_viewport(metrics.to_viewport(rect), inner)
    {
        frame
            .buffer_mut()
            .set_style(area, Style::default().bg(Color::DarkGray));
    }

    let status = if committed.is_empty() {
        "selected: (none)".to_string()
    } else {
        let names: Vec<&str> = committed.iter().map(TargetId::as_str).collect();
        format!("selected ({}): {}", names.len(), names.join(", "))
    };
    let capture = if host.moves_captured {
        " [tracking moves]"
    } else {
        ""
    };
    let help = Paragraph::new(format!(
        "{status}{capture}\n{}",
        indoc! {"
            drag        select items in the rectangle
            ctrl+drag   add to / toggle the selection
            wheel       scroll; dragging past an edge auto-scrolls
            q / esc     quit
        "}
    ))
    .block(Block::bordered().title(" area-select "));
    frame.render_widget(help, help_area);
}

/// Clip a viewport-space rectangle to the container's drawn interior and
/// convert to terminal cells; `None` when fully scrolled out of view.
fn clip_to_viewport(rect: Rect, within: ratatui::layout::Rect) -> Option<ratatui::layout::Rect> {
    let left = rect.left.max(within.x as i32);
    let top = rect.top.max(within.y as i32);
    let right = rect.right().min((within.x + within.width) as i32);
    let bottom = rect.bottom().min((within.y + within.height) as i32);
    if right <= left || bottom <= top {
        return None;
    }
    Some(ratatui::layout::Rect {
        x: left as u16,
        y: top as u16,
        width: (right - left) as u16,
        height: (bottom - top) as u16,
    })
}
