use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    terminal,
};
use ghostfield::prelude::*;
use tui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Terminal,
};

struct RawModeGuard;
impl RawModeGuard {
    pub fn new() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        terminal::disable_raw_mode().unwrap();
    }
}

fn main() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    let _g = RawModeGuard::new()?;

    crossterm::execute!(stdout, terminal::Clear(terminal::ClearType::All))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let languages = [
        "C",
        "C#",
        "C++",
        "CSS",
        "HTML",
        "Java",
        "JavaScript",
        "Kotlin",
        "Objective-C",
        "Python",
        "Ruby",
        "Swift",
    ];
    let field = SuggestionField::with_words("Programming Language", languages).divide(true);
    let mut input = FieldView::new(field);

    let mut focused = true;
    let mut submitted = String::new();

    loop {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(f.size());

            let status = Paragraph::new(format!(
                "submitted: {:?}   Tab toggles focus, Enter submits, Ctrl-C quits",
                submitted
            ));
            f.render_widget(status, chunks[0]);
            input.render(f, chunks[1], focused);
        })?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        let evt = event::read()?;
        if let Event::Key(key) = &evt {
            if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
                break;
            }
            if key.code == KeyCode::Tab {
                focused = !focused;
                continue;
            }
            if focused && key.code == KeyCode::Enter {
                input.submit();
                submitted = input.text().to_string();
                continue;
            }
        }
        if focused {
            input.handle(&evt);
        }
    }

    Ok(())
}
