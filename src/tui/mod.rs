//! Ratatui-based terminal UI.
//!
//! Renders the four demo panels as a 2×2 chart grid with a one-line status
//! bar. Keys: `q`/Esc quit, `v` toggles the classic/parabola variant, `r`
//! reseeds the generators and recomputes every panel.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use plotters::style::RGBColor;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame, Terminal,
};

use crate::app::pipeline::{self, PanelSet};
use crate::domain::{DemoConfig, ScatterKind};
use crate::error::AppError;

mod charts;

use charts::{CurveChart, HistogramChart, ScatterChart};

/// Start the TUI with the given demo configuration.
pub fn run(config: DemoConfig) -> Result<(), AppError> {
    // Compute the first panel set before touching the terminal so argument
    // errors surface as plain messages, not inside the alternate screen.
    let panels = pipeline::build_panels(&config)?;

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::render(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App {
        config,
        panels,
        status: "q: quit | v: toggle variant | r: reseed".to_string(),
    };
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::render(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::render(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    config: DemoConfig,
    panels: PanelSet,
    status: String,
}

impl App {
    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::render(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::render(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::render(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('v') => {
                self.toggle_variant()?;
                self.status = match self.config.scatter {
                    ScatterKind::LinearTrend => "Variant: classic (linear trend + normal CDF).",
                    ScatterKind::Parabola => "Variant: parabola (noisy parabola + logistic CDF).",
                }
                .to_string();
            }
            KeyCode::Char('r') => {
                self.config.scatter_seed = self.config.scatter_seed.wrapping_add(1);
                self.config.noise_seed = self.config.noise_seed.wrapping_add(1);
                self.config.gamma_seed = self.config.gamma_seed.wrapping_add(1);
                self.panels = pipeline::build_panels(&self.config)?;
                self.status = format!("Reseeded (scatter seed {}).", self.config.scatter_seed);
            }
            _ => {}
        }
        Ok(false)
    }

    /// Swap between the two demo presets, keeping the current seeds.
    fn toggle_variant(&mut self) -> Result<(), AppError> {
        let mut next = match self.config.scatter {
            ScatterKind::LinearTrend => DemoConfig::parabola(),
            ScatterKind::Parabola => DemoConfig::classic(),
        };
        next.scatter_seed = self.config.scatter_seed;
        next.noise_seed = self.config.noise_seed;
        next.gamma_seed = self.config.gamma_seed;

        self.panels = pipeline::build_panels(&next)?;
        self.config = next;
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let top = split_row(rows[0]);
        let bottom = split_row(rows[1]);

        self.draw_scatter(frame, top[0]);
        self.draw_pdf(frame, top[1]);
        self.draw_histogram(frame, bottom[0]);
        self.draw_cdf(frame, bottom[1]);

        let bar = Paragraph::new(self.status.as_str()).style(Style::default().fg(Color::Gray));
        frame.render_widget(bar, rows[2]);
    }

    fn draw_scatter(&self, frame: &mut Frame, area: Rect) {
        let inner = draw_cell(frame, area, "Scatter Plot + Best Fit");

        let points: Vec<(f64, f64)> = self.panels.scatter.points().collect();
        let [(x0, _), (x1, _)] = self.panels.scatter.fit_segment;
        let y_bounds = padded_bounds(
            points
                .iter()
                .map(|&(_, y)| y)
                .chain(self.panels.scatter.fit_segment.iter().map(|&(_, y)| y)),
        );

        ScatterChart {
            points: &points,
            fit: self.panels.scatter.fit_segment,
            x_bounds: [x0, x1],
            y_bounds,
        }
        .render(inner, frame.buffer_mut());
    }

    fn draw_pdf(&self, frame: &mut Frame, area: Rect) {
        let inner = draw_cell(frame, area, "Standard Normal PDF");

        let line: Vec<(f64, f64)> = self.panels.pdf.points().collect();
        let y_max = self.panels.pdf.y.iter().cloned().fold(0.0, f64::max);

        CurveChart {
            line: &line,
            color: RGBColor(0, 255, 255), // cyan
            x_bounds: [self.config.curve_min, self.config.curve_max],
            y_bounds: [0.0, y_max * 1.1],
        }
        .render(inner, frame.buffer_mut());
    }

    fn draw_histogram(&self, frame: &mut Frame, area: Rect) {
        let inner = draw_cell(frame, area, "Skewed Distribution");

        let hist = &self.panels.histogram;
        let x0 = hist.bins.first().map(|&(l, _)| l).unwrap_or(0.0);
        let x1 = hist
            .bins
            .last()
            .map(|&(l, _)| l + hist.bin_width)
            .unwrap_or(1.0);

        HistogramChart {
            bins: &hist.bins,
            bin_width: hist.bin_width,
            x_bounds: [x0, x1],
            y_bounds: [0.0, hist.max_density() * 1.1],
        }
        .render(inner, frame.buffer_mut());
    }

    fn draw_cdf(&self, frame: &mut Frame, area: Rect) {
        let inner = draw_cell(frame, area, self.config.cdf.display_name());

        let line: Vec<(f64, f64)> = self.panels.cdf.points().collect();

        CurveChart {
            line: &line,
            color: RGBColor(0, 255, 0), // green
            x_bounds: [self.config.curve_min, self.config.curve_max],
            y_bounds: [-0.05, 1.05],
        }
        .render(inner, frame.buffer_mut());
    }
}

fn split_row(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

/// Render a titled border block and return its inner drawing area.
fn draw_cell(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Min/max over `values` with 5% padding on each side.
fn padded_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !(min.is_finite() && max.is_finite() && max > min) {
        return [0.0, 1.0];
    }
    let pad = (max - min) * 0.05;
    [min - pad, max + pad]
}
