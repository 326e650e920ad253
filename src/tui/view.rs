//! Rendering: map App state to ratatui widgets.
//!
//! Every frame is drawn from scratch in two layers. The rain goes down
//! first and covers the whole area; the screen's own content is then drawn
//! on a cleared panel on top of it. Only the rain reads the RNG, so two
//! frames of the same state differ in rain glyphs and nothing else.

use rand::Rng;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph, Widget};

use crate::content::{
    self, BACK_HINT, MENU, MENU_HINT, MENU_TITLE, Page, SPLASH_ART, SPLASH_PROMPT,
    SPLASH_SUBTITLE,
};
use crate::rain::{self, Rain, Shade};

use super::state::{App, Screen};
use super::theme::Theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, theme: &Theme, rng: &mut impl Rng, frame: &mut Frame) {
    let area = frame.area();
    if area.is_empty() {
        return;
    }

    frame.render_widget(
        RainLayer {
            rain: &app.rain,
            theme,
            rng,
        },
        area,
    );

    match app.screen {
        Screen::Splash => render_panel(
            splash_lines(app, theme),
            None,
            Alignment::Center,
            PanelStyle::Bare,
            theme,
            frame,
            area,
        ),
        Screen::Menu => render_panel(
            menu_lines(app.cursor, theme),
            Some(Line::from(Span::styled(MENU_HINT, theme.muted))),
            Alignment::Left,
            PanelStyle::Bordered,
            theme,
            frame,
            area,
        ),
        screen => {
            if let Some(page) = content::page(screen) {
                render_panel(
                    page_lines(page, theme),
                    Some(Line::from(Span::styled(BACK_HINT, theme.glow))),
                    Alignment::Left,
                    PanelStyle::Bordered,
                    theme,
                    frame,
                    area,
                );
            }
        }
    }
}

// ============================================================================
// BACKGROUND: RAIN
// ============================================================================

/// Draws the rain into every cell of its area.
///
/// Lit cells get a fresh random glyph on every render. Blank cells are left
/// as they are, which on a fresh frame means empty.
pub struct RainLayer<'a, R> {
    pub rain: &'a Rain,
    pub theme: &'a Theme,
    pub rng: &'a mut R,
}

impl<R: Rng> Widget for RainLayer<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let style = match self.rain.cell(x - area.x, y - area.y) {
                    Shade::Bright => self.theme.rain_head,
                    Shade::Dim => self.theme.rain_trail,
                    Shade::Blank => continue,
                };
                let glyph = rain::random_glyph(&mut *self.rng);
                buf[(x, y)].set_char(glyph).set_style(style);
            }
        }
    }
}

// ============================================================================
// FOREGROUND: SHARED PANEL
// ============================================================================

/// Shown in place of the last body row when the body is cut short.
const MORE_MARKER: &str = "…";

/// Draw `body` and `footer` on a cleared panel centered in `area`.
///
/// Text is wrapped to the panel's inner width before the panel is sized, so
/// the height counts real rows. When the area is too short, the footer keeps
/// its rows at the bottom and the body loses its tail.
fn render_panel(
    body: Vec<Line<'static>>,
    footer: Option<Line<'static>>,
    alignment: Alignment,
    style: PanelStyle,
    theme: &Theme,
    frame: &mut Frame,
    area: Rect,
) {
    // Border plus one column of padding per side, only with room for text inside
    let bordered = style == PanelStyle::Bordered && area.width > 4 && area.height > 2;
    let (chrome_x, chrome_y) = if bordered { (4, 2) } else { (0, 0) };

    let footer: Vec<Line<'static>> = footer.into_iter().collect();
    let text_width = body.iter().chain(&footer).map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(text_width)
        .unwrap_or(u16::MAX)
        .saturating_add(chrome_x)
        .min(area.width);
    let inner_width = width.saturating_sub(chrome_x);

    let mut body = wrap_lines(body, inner_width);
    let footer = wrap_lines(footer, inner_width);
    let rows = u16::try_from(body.len() + footer.len()).unwrap_or(u16::MAX);
    let panel = centered_rect(area, width, rows.saturating_add(chrome_y));

    frame.render_widget(Clear, panel);
    let inner = if bordered {
        let block = Block::bordered()
            .border_style(theme.rain_trail)
            .padding(Padding::horizontal(1));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);
        inner
    } else {
        panel
    };

    let footer_rows = u16::try_from(footer.len()).unwrap_or(u16::MAX).min(inner.height);
    let body_area = Rect {
        height: inner.height - footer_rows,
        ..inner
    };
    let footer_area = Rect {
        y: body_area.bottom(),
        height: footer_rows,
        ..inner
    };

    let visible = usize::from(body_area.height);
    if body.len() > visible && visible > 0 {
        body.truncate(visible - 1);
        body.push(Line::from(Span::styled(MORE_MARKER, theme.muted)));
    }

    frame.render_widget(Paragraph::new(body).alignment(alignment), body_area);
    frame.render_widget(Paragraph::new(footer).alignment(alignment), footer_area);
}

/// Whether a panel gets a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelStyle {
    Bare,
    Bordered,
}

/// Break `lines` so that none is wider than `width` columns.
///
/// Lines that already fit pass through untouched. Longer ones are word
/// wrapped, each piece taking the style of the line's first span.
fn wrap_lines(lines: Vec<Line<'static>>, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut wrapped = Vec::with_capacity(lines.len());

    for line in lines {
        if line.width() <= width {
            wrapped.push(line);
            continue;
        }
        let style = line
            .spans
            .first()
            .map_or(line.style, |span| line.style.patch(span.style));
        let text = line.to_string();
        wrapped.extend(
            textwrap::wrap(&text, width)
                .into_iter()
                .map(|piece| Line::from(Span::styled(piece.into_owned(), style))),
        );
    }

    wrapped
}

/// A `width × height` rectangle centered in `area`, clipped to it.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ============================================================================
// SCREEN: SPLASH
// ============================================================================

fn splash_lines(app: &App, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    lines.extend(
        SPLASH_ART
            .iter()
            .map(|row| Line::from(Span::styled(*row, theme.art))),
    );

    let dots = ".".repeat(usize::from(app.loading_dot));
    let prompt_style = if app.prompt_lit() { theme.glow } else { theme.muted };

    lines.extend([
        Line::from(""),
        Line::from(Span::styled(SPLASH_SUBTITLE, theme.glow)),
        Line::from(""),
        Line::from(Span::styled(format!("loading{dots:<3}"), theme.muted)),
        Line::from(""),
        Line::from(Span::styled(SPLASH_PROMPT, prompt_style)),
        Line::from(""),
    ]);

    lines
}

// ============================================================================
// SCREEN: MENU
// ============================================================================

fn menu_lines(cursor: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(MENU_TITLE, theme.title)),
        Line::from(""),
    ];

    for (i, item) in MENU.iter().enumerate() {
        if i == cursor {
            lines.push(Line::from(Span::styled(format!(">> {}", item.label), theme.glow)));
        } else {
            lines.push(Line::from(Span::styled(format!("   {}", item.label), theme.body)));
        }
    }

    lines.push(Line::from(""));
    lines
}

// ============================================================================
// SCREEN: CONTENT PAGE
// ============================================================================

fn page_lines(page: &Page, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(page.title, theme.title)),
        Line::from(""),
    ];

    for block in page.blocks {
        match block {
            content::Block::Text(text) => {
                lines.extend(text.iter().map(|l| Line::from(Span::styled(*l, theme.body))));
            }
            content::Block::Section { heading, bullets } => {
                let rule = "-".repeat(Line::from(*heading).width());
                lines.push(Line::from(Span::styled(*heading, theme.heading)));
                lines.push(Line::from(Span::styled(rule, theme.muted)));
                lines.extend(
                    bullets
                        .iter()
                        .map(|b| Line::from(Span::styled(format!("• {b}"), theme.body))),
                );
            }
        }
        lines.push(Line::from(""));
    }

    lines
}

// ============================================================================
// TESTS
// ============================================================================
