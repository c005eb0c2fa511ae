use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use culturesphere_core::{Author, Domain, InputBuffer, InteractionState, Page};
use crate::app::{App, BackendStatus, Focus, InputMode, COMPANION_SIZE};
use crate::theme::{domain_color, Palette};

const ASSISTANT_WIDTH: u16 = 46;

/// Furthest a wrapped paragraph can scroll inside a bordered `area`.
///
/// Counts rows the way ratatui lays them out, so long unbroken words
/// and blank lines are included.
fn max_scroll(paragraph: &Paragraph, area: Rect) -> u16 {
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2) as usize;
    let rows = paragraph.line_count(inner_width);
    rows.saturating_sub(inner_height).min(u16::MAX as usize) as u16
}

fn ellipsis(frame: u8) -> String {
    ".".repeat(frame as usize + 1)
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();
    let palette = app.theme.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        area,
    );

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, &palette, frame, header_area);

    let (page_area, chat_area) = if app.show_assistant {
        let [page_area, chat_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(ASSISTANT_WIDTH.min(body_area.width / 2)),
        ])
        .areas(body_area);
        (page_area, Some(chat_area))
    } else {
        (body_area, None)
    };

    // Store areas for mouse hit-testing
    app.body_area = Some(page_area);
    app.chat_area = chat_area;

    match app.page {
        Page::Home => render_home(app, &palette, frame, page_area),
        _ => render_domain_page(app, &palette, frame, page_area),
    }

    match chat_area {
        Some(chat_area) => render_assistant(app, &palette, frame, chat_area),
        None => render_guide_bubble(app, &palette, frame, body_area),
    }

    if app.show_companion {
        render_companion(app, &palette, frame, body_area);
    }

    render_footer(app, &palette, frame, footer_area);
}

fn render_header(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(32)]).areas(area);

    let mut title = vec![
        Span::styled(" ✨ CultureSphere AI ", Style::default().fg(palette.accent).bold()),
    ];
    if app.page != Page::Home {
        title.push(Span::styled(
            format!("/ {} ", app.page.title()),
            Style::default().fg(domain_color(app.domain())),
        ));
    }
    title.push(Span::styled(
        format!("v{}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(palette.muted),
    ));

    let status = match &app.backend {
        BackendStatus::Checking => Span::styled("… checking", Style::default().fg(palette.muted)),
        BackendStatus::Online => Span::styled("● online", Style::default().fg(Color::Green)),
        BackendStatus::Offline(_) => Span::styled("● offline", Style::default().fg(palette.error)),
    };
    let right = Line::from(vec![
        status,
        Span::raw("  "),
        Span::styled(app.theme.label(), Style::default().fg(palette.muted)),
        Span::raw(" "),
    ])
    .alignment(Alignment::Right);

    let bar = Style::default().bg(palette.highlight_bg);
    frame.render_widget(Paragraph::new(Line::from(title)).style(bar), left_area);
    frame.render_widget(Paragraph::new(right).style(bar), right_area);
}

fn render_footer(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };

    let mode_text = match app.focus {
        Focus::Assistant => " GUIDE ".to_string(),
        Focus::Page => format!(" {} ", app.page.slug().to_uppercase()),
    };

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);
    let hint = |key: &'static str, label: &'static str| {
        [Span::styled(key, key_style), Span::styled(label, label_style)]
    };

    let hints: Vec<Span> = match (app.focus, app.input_mode) {
        (Focus::Page, InputMode::Normal) => {
            let mut hints = Vec::new();
            if app.page == Page::Home {
                hints.extend(hint(" j/k ", " domain "));
                hints.extend(hint(" Enter ", " open "));
            } else {
                hints.extend(hint(" j/k ", " example "));
                hints.extend(hint(" Enter ", " try it "));
                hints.extend(hint(" h ", " home "));
            }
            hints.extend(hint(" i ", " write "));
            hints.extend(hint(" 1-6 ", " pages "));
            hints.extend(hint(" J/K ", " scroll "));
            hints.extend(hint(" a ", " guide "));
            hints.extend(hint(" c ", " companion "));
            hints.extend(hint(" t ", " theme "));
            hints.extend(hint(" q ", " quit "));
            hints
        }
        (Focus::Page, InputMode::Editing) => {
            let mut hints = Vec::new();
            hints.extend(hint(" Enter ", " get recommendations "));
            hints.extend(hint(" Esc ", " stop typing "));
            hints
        }
        (Focus::Assistant, InputMode::Normal) => {
            let mut hints = Vec::new();
            hints.extend(hint(" j/k ", " scroll "));
            hints.extend(hint(" i ", " write "));
            hints.extend(hint(" Tab ", " page "));
            hints.extend(hint(" Esc ", " close "));
            hints
        }
        (Focus::Assistant, InputMode::Editing) => {
            let mut hints = Vec::new();
            hints.extend(hint(" Enter ", " send "));
            hints.extend(hint(" Tab ", " page "));
            hints.extend(hint(" Esc ", " stop typing "));
            hints
        }
    };

    let footer_content = Line::from(
        vec![
            Span::styled(mode_text, mode_style),
            Span::styled(" ", label_style),
        ]
        .into_iter()
        .chain(hints)
        .collect::<Vec<_>>(),
    );

    let footer = Paragraph::new(footer_content).style(Style::default().bg(palette.bg));
    frame.render_widget(footer, area);
}

fn render_home(app: &mut App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let card_count = Domain::cultural().len() as u16;
    let [hero_area, cards_area, input_area, result_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(card_count + 2),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let hero = Text::from(vec![
        Line::default(),
        Line::from(Span::styled(
            "Your Taste-Powered Life Navigator",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Discover what fits your soul: explore music, travel, fashion, wellness, dining, and learning based on your cultural DNA.",
            Style::default().fg(palette.muted),
        )),
    ]);
    frame.render_widget(
        Paragraph::new(hero).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        hero_area,
    );

    let items: Vec<ListItem> = Domain::cultural()
        .iter()
        .enumerate()
        .filter_map(|(i, domain)| {
            let content = domain.content()?;
            Some(ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(palette.muted)),
                Span::raw(format!("{} ", content.icon)),
                Span::styled(
                    format!("{:<10}", domain.display_name()),
                    Style::default().fg(domain_color(*domain)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(content.tagline, Style::default().fg(palette.fg)),
            ])))
        })
        .collect();

    let page_focused = app.focus == Focus::Page && app.input_mode == InputMode::Normal;
    let cards = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if page_focused { palette.accent } else { palette.border }))
                .title(" Explore a domain "),
        )
        .highlight_style(Style::default().bg(palette.highlight_bg).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    frame.render_stateful_widget(cards, cards_area, &mut app.card_state);

    render_page_input(
        app,
        palette,
        frame,
        input_area,
        " Ask for anything ",
        "Tell us what you love or how you feel...",
    );
    render_result(app, palette, frame, result_area, "Your Personalized Recommendations".to_string());
}

fn render_domain_page(app: &mut App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let domain = app.domain();
    let Some(content) = domain.content() else {
        return;
    };
    let color = domain_color(domain);

    let example_rows = content.examples.len() as u16 + 2;
    let [title_area, input_area, examples_area, result_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(example_rows),
        Constraint::Min(0),
    ])
    .areas(area);

    let title = Text::from(vec![
        Line::default(),
        Line::from(vec![
            Span::raw(format!("{} ", content.icon)),
            Span::styled(domain.display_name(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(content.description, Style::default().fg(palette.muted))),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), title_area);

    render_page_input(
        app,
        palette,
        frame,
        input_area,
        " Tell us what you love or how you feel ",
        content.placeholder,
    );

    let loading = app.page_controller.is_loading();
    let items: Vec<ListItem> = content
        .examples
        .iter()
        .map(|example| ListItem::new(format!("\"{}\"", example)))
        .collect();
    let examples = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border))
                .title(" Try: "),
        )
        .style(Style::default().fg(if loading { palette.muted } else { palette.fg }))
        .highlight_style(Style::default().bg(palette.highlight_bg).fg(color))
        .highlight_symbol("> ");
    frame.render_stateful_widget(examples, examples_area, &mut app.example_state);

    render_result(
        app,
        palette,
        frame,
        result_area,
        format!("Your Personalized {} Recommendations", domain.display_name()),
    );
}

fn render_page_input(
    app: &App,
    palette: &Palette,
    frame: &mut Frame,
    area: Rect,
    title: &str,
    placeholder: &str,
) {
    let editing = app.focus == Focus::Page && app.input_mode == InputMode::Editing;
    let border = if editing { Color::Yellow } else { palette.border };
    let title = if app.page_controller.is_loading() {
        " Generating recommendations... ".to_string()
    } else {
        title.to_string()
    };
    render_input_box(
        frame,
        palette,
        area,
        app.page_controller.input(),
        &title,
        placeholder,
        border,
        editing,
    );
}

/// Single-line input with horizontal scrolling that keeps the cursor visible.
#[allow(clippy::too_many_arguments)]
fn render_input_box(
    frame: &mut Frame,
    palette: &Palette,
    area: Rect,
    input: &InputBuffer,
    title: &str,
    placeholder: &str,
    border: Color,
    editing: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(title.to_string());

    // Inner width = total width - 2 (for borders)
    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_pos = input.cursor();

    // Calculate scroll offset to keep cursor visible
    let scroll_offset = if inner_width == 0 {
        0
    } else if cursor_pos >= inner_width {
        cursor_pos - inner_width + 1
    } else {
        0
    };

    let paragraph = if input.as_str().is_empty() && !editing {
        Paragraph::new(Span::styled(
            placeholder.to_string(),
            Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
        ))
    } else {
        let visible_text: String = input
            .as_str()
            .chars()
            .skip(scroll_offset)
            .take(inner_width)
            .collect();
        Paragraph::new(visible_text).style(Style::default().fg(palette.user))
    };
    frame.render_widget(paragraph.block(block), area);

    // Show cursor when editing
    if editing {
        let cursor_x = (cursor_pos - scroll_offset) as u16;
        frame.set_cursor_position((area.x + cursor_x + 1, area.y + 1));
    }
}

fn render_result(app: &mut App, palette: &Palette, frame: &mut Frame, area: Rect, title: String) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(format!(" ✨ {} ", title));

    let paragraph = match app.page_controller.state() {
        InteractionState::Idle => {
            let mut lines = vec![Line::from(Span::styled(
                "Your personalized recommendations will appear here.",
                Style::default().fg(palette.muted),
            ))];
            if let BackendStatus::Offline(reason) = &app.backend {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    format!("Backend at {} is not responding ({}).", app.api_url, reason),
                    Style::default().fg(palette.error),
                )));
            }
            Paragraph::new(Text::from(lines))
        }
        InteractionState::Loading => Paragraph::new(Span::styled(
            format!("Generating recommendations{}", ellipsis(app.animation_frame)),
            Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
        )),
        // Rendered verbatim, newlines included
        InteractionState::Success(text) => {
            Paragraph::new(Text::from(text.as_str())).style(Style::default().fg(palette.fg))
        }
        InteractionState::Failure(_) => Paragraph::new(Span::styled(
            app.page_controller.failure_message().unwrap_or_default(),
            Style::default().fg(palette.error),
        )),
    }
    .wrap(Wrap { trim: false });

    app.result_scroll = app.result_scroll.min(max_scroll(&paragraph, area));

    frame.render_widget(paragraph.block(block).scroll((app.result_scroll, 0)), area);
}

fn render_assistant(app: &mut App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let [chat_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

    let focused = app.focus == Focus::Assistant;
    let chat_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { palette.accent } else { palette.border }))
        .title(" 🤖 CultureSphere Guide ");

    let mut lines: Vec<Line> = Vec::new();

    for msg in app.assistant.messages() {
        let (label, color) = match msg.author {
            Author::User => ("You:", palette.user),
            Author::Assistant => ("Guide:", palette.accent),
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for line in msg.text.split('\n') {
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(if msg.author == Author::User { palette.user } else { palette.assistant }),
            )));
        }
        lines.push(Line::default());
    }

    if app.assistant.is_composing() {
        lines.push(Line::from(Span::styled(
            "Guide:",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )));
        // Animated ellipsis: cycles through ".", "..", "..."
        lines.push(Line::from(Span::styled(
            format!("AI is thinking{}", ellipsis(app.animation_frame)),
            Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
        )));
    }

    let chat = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    let bottom = max_scroll(&chat, chat_area);
    app.chat_scroll = if app.chat_follow { bottom } else { app.chat_scroll.min(bottom) };

    frame.render_widget(chat.block(chat_block).scroll((app.chat_scroll, 0)), chat_area);

    let editing = focused && app.input_mode == InputMode::Editing;
    let border = if editing { Color::Yellow } else { palette.border };
    render_input_box(
        frame,
        palette,
        input_area,
        app.assistant.input(),
        " Ask ",
        "Ask about CultureSphere AI...",
        border,
        editing,
    );
}

/// Speech bubble in the bottom-right corner while the guide panel is closed.
fn render_guide_bubble(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let text = Line::from(vec![
        Span::raw("🤖 "),
        Span::styled(app.guide_hints.current(), Style::default().fg(palette.fg)),
    ]);
    let width = (text.width() as u16 + 4).min(area.width);
    let height = 3u16.min(area.height);
    let bubble = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.bottom().saturating_sub(height),
        width,
        height,
    }
    .intersection(area);

    frame.render_widget(Clear, bubble);
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().bg(palette.bubble_bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.accent))
                    .title(" Ask AI (a) "),
            ),
        bubble,
    );
}

/// The wandering companion; purely decorative.
fn render_companion(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let bubble = Rect {
        x: app.companion.x,
        y: app.companion.y,
        width: COMPANION_SIZE.0,
        height: COMPANION_SIZE.1,
    }
    .intersection(area);
    if bubble.width < 6 || bubble.height < 3 {
        return;
    }

    frame.render_widget(Clear, bubble);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("✨ "),
            Span::styled(app.companion_hints.current(), Style::default().fg(palette.muted)),
        ]))
        .style(Style::default().bg(palette.bubble_bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border)),
        ),
        bubble,
    );
}
