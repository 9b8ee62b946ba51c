use std::fs::File;
use std::io;
use std::time::Duration;

use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui_dropdown::crossterm_input::input_event_from_crossterm;
use ratatui_dropdown::dropdown::DropdownAction;
use ratatui_dropdown::markup::Element;
use ratatui_dropdown::prelude::*;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

const FIELD_W: u16 = 28;
const FIELD_GAP: u16 = 3;

fn main() -> io::Result<()> {
    let log_file = File::create("dropdown-form.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .map_err(|e| io::Error::other(e.to_string()))?;

    let mut router = InputRouter::new();
    build_form(&mut router).map_err(|e| io::Error::other(e.to_string()))?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::default();
    let res = run(&mut terminal, &theme, &mut router);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    res
}

fn build_form(router: &mut InputRouter) -> Result<(), DropdownError> {
    // Attached from host markup, with a default selection.
    let size = Element::new("custom-dropdown")
        .with_child(Element::new("label").with_text("Size"))
        .with_child(
            Element::new("select")
                .with_attr("name", "size")
                .with_child(Element::new("option").with_attr("value", "s").with_text("Small"))
                .with_child(
                    Element::new("option")
                        .with_attr("value", "m")
                        .with_attr("selected", "")
                        .with_text("Medium"),
                )
                .with_child(Element::new("option").with_attr("value", "l").with_text("Large")),
        );
    router.attach(size, DropdownOptions::default())?;

    let mut colors = NativeSelect::new().with_name("color").with_required(true);
    for c in [
        "Red", "Orange", "Yellow", "Green", "Cyan", "Blue", "Indigo", "Violet", "Black", "White",
    ] {
        colors.push_option(NativeOption::new(c.to_lowercase(), c));
    }
    let options = DropdownOptions {
        max_visible_items: 5,
        bindings: DropdownBindings::with_vim_keys(),
        ..Default::default()
    };
    router.register(Dropdown::from_parts_with_options("Color (required)", colors, options));

    let shipping = NativeSelect::new()
        .with_name("shipping")
        .with_option(NativeOption::new("std", "Standard"))
        .with_option(NativeOption::new("exp", "Express"))
        .with_option(NativeOption::new("pickup", "Pick up in store"));
    router.register(Dropdown::from_parts("Shipping", shipping));
    Ok(())
}

fn field_area(inner: Rect, n: usize, open: bool) -> Rect {
    let y = inner.y + n as u16 * FIELD_GAP;
    let bottom = inner.bottom();
    let h = if open { bottom.saturating_sub(y) } else { 2 };
    Rect::new(
        inner.x + 1,
        y,
        FIELD_W.min(inner.width.saturating_sub(1)),
        h.min(bottom.saturating_sub(y)),
    )
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    theme: &Theme,
    router: &mut InputRouter,
) -> io::Result<()> {
    let mut status = String::from("click or open a field, ↑/↓ Enter Esc, s submit, q quit");
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let block = Block::default()
                .title("Dropdown form")
                .borders(Borders::ALL);
            let inner = block.inner(area);
            f.render_widget(block, area);

            let buf = f.buffer_mut();
            let open = router.open_id();
            // Closed fields first so the open list is drawn over them.
            for (n, (id, d)) in router.iter_mut().enumerate() {
                if Some(id) != open {
                    d.render(field_area(inner, n, false), buf, theme);
                }
            }
            for (n, (id, d)) in router.iter_mut().enumerate() {
                if Some(id) == open {
                    d.render(field_area(inner, n, true), buf, theme);
                }
            }

            let status_span = Span::styled(status.as_str(), Style::default());
            let y = inner.bottom().saturating_sub(1);
            buf.set_span(inner.x, y, &status_span, inner.width);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let ev = crossterm::event::read()?;
        if let Event::Key(key) = &ev {
            if key.kind == KeyEventKind::Press && router.open_id().is_none() {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('s') => {
                        status = submit(router);
                        continue;
                    }
                    KeyCode::Tab => {
                        if let Some(id) = router.ids().first().copied() {
                            if let Some(d) = router.get_mut(id) {
                                d.open();
                            }
                        }
                        continue;
                    }
                    _ => {}
                }
            }
        }

        let Some(ev) = input_event_from_crossterm(ev) else {
            continue;
        };
        for (id, action) in router.handle_event(&ev) {
            if let DropdownAction::Committed(_) = action {
                if let Some(d) = router.get(id) {
                    status = format!("{id}: {}", d.selected_label().unwrap_or(""));
                }
            }
        }
    }
}

/// Validates every field the way form submission would and collects the submitted pairs.
fn submit(router: &mut InputRouter) -> String {
    let mut invalid = 0;
    for (_, d) in router.iter_mut() {
        if !d.check_validity() {
            invalid += 1;
        }
    }
    if invalid > 0 {
        log::info!("[form] submit blocked: {invalid} invalid field(s)");
        return format!("{invalid} field(s) need a value");
    }
    let pairs: Vec<String> = router
        .iter()
        .filter_map(|(_, d)| d.native().form_value())
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    log::info!("[form] submitted {}", pairs.join("&"));
    format!("submitted {}", pairs.join("&"))
}
