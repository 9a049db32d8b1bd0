use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lume_core::components::counter::{CounterAnimation, CounterSpec};
use lume_core::components::nav::NavMenu;
use lume_core::components::reveal::{RevealTracker, COUNTER_FALLBACK_DELAY_MS, REVEAL_CLASS};
use lume_core::components::scroll::{ScrollMetrics, ScrollTracker, Section, ACTIVE_CLASS};
use lume_core::components::theme::ThemeManager;
use lume_core::components::typewriter::Typewriter;
use lume_core::config;
use lume_core::page::PageModel;
use lume_protocol::{DomCommand, Target};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Terminal,
};

const VIEWPORT_HEIGHT: f64 = 800.0;
const CONTENT_HEIGHT: f64 = 2600.0;
const SCROLL_STEP: f64 = 80.0;

/// Synthetic page driven through the real components: three sections, two
/// reveal blocks (the first hosts the counters), three counters.
struct Preview {
    page: PageModel,
    theme: ThemeManager,
    nav: NavMenu,
    typewriter: Typewriter,
    reveals: RevealTracker,
    scroll: ScrollTracker,
    sections: Vec<Section>,
    reveal_tops: Vec<f64>,
    specs: Vec<CounterSpec>,
    counters: Vec<Option<CounterAnimation>>,
    scroll_y: f64,
    system_dark: bool,
    started: Instant,
    next_tick_ms: f64,
    fallback_fired: bool,
}

impl Preview {
    fn new(roles: Vec<String>) -> Option<Self> {
        let typewriter = Typewriter::new(roles)?;
        let specs = vec![
            config::counter_spec(Some("250"), None, Some("+"), None),
            config::counter_spec(Some("125"), Some("10"), Some("k"), None),
            config::counter_spec(Some("12"), None, None, None),
        ];
        let mut page = PageModel::new();

        let system_dark = true;
        let (theme, cmds) = ThemeManager::init(None, system_dark);
        page.apply_all(&cmds);

        let reveals = RevealTracker::new(2, &specs);
        let scroll = ScrollTracker::new(vec![
            Some("home".to_string()),
            Some("work".to_string()),
            Some("contact".to_string()),
        ]);
        let sections = vec![
            Section::new("home", 0.0),
            Section::new("work", 900.0),
            Section::new("contact", 1800.0),
        ];

        let mut preview = Self {
            page,
            theme,
            nav: NavMenu::new(),
            typewriter,
            reveals,
            scroll,
            sections,
            reveal_tops: vec![900.0, 1800.0],
            specs,
            counters: vec![None, None, None],
            scroll_y: 0.0,
            system_dark,
            started: Instant::now(),
            next_tick_ms: 0.0,
            fallback_fired: false,
        };
        preview.update_scroll();
        Some(preview)
    }

    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    fn update_scroll(&mut self) {
        let metrics = ScrollMetrics {
            scroll_y: self.scroll_y,
            viewport_height: VIEWPORT_HEIGHT,
            content_height: CONTENT_HEIGHT,
        };
        let cmds = self.scroll.update(&metrics, &self.sections);
        self.page.apply_all(&cmds);

        // Reveal blocks whose top entered the viewport; the first hosts the
        // counters, matching the global-trigger behavior of the page.
        for (index, top) in self.reveal_tops.clone().into_iter().enumerate() {
            if self.scroll_y + VIEWPORT_HEIGHT >= top && !self.reveals.is_revealed(index) {
                let update = self.reveals.on_intersection(index, index == 0);
                self.page.apply_all(&update.commands);
                self.start_counters(&update.start_counters);
            }
        }
    }

    fn start_counters(&mut self, indices: &[usize]) {
        let now = self.now_ms();
        for &index in indices {
            if let (Some(slot), Some(spec)) = (self.counters.get_mut(index), self.specs.get(index))
            {
                *slot = Some(CounterAnimation::new(spec.clone(), now));
            }
        }
    }

    /// Advance the timer- and frame-driven pieces to `now`.
    fn advance(&mut self) {
        let now = self.now_ms();

        while now >= self.next_tick_ms {
            let tick = self.typewriter.tick();
            self.page
                .apply(&DomCommand::text(Target::RoleText, tick.text));
            self.next_tick_ms += tick.delay_ms as f64;
        }

        if !self.fallback_fired && now >= COUNTER_FALLBACK_DELAY_MS as f64 {
            self.fallback_fired = true;
            let update = self.reveals.on_fallback();
            self.page.apply_all(&update.commands);
            self.start_counters(&update.start_counters);
        }

        for (index, slot) in self.counters.iter_mut().enumerate() {
            if let Some(anim) = slot {
                let frame = anim.frame(now);
                self.page
                    .apply(&DomCommand::text(Target::Counter(index), frame.text));
                if frame.done {
                    *slot = None;
                }
            }
        }
    }

    fn progress_ratio(&self) -> f64 {
        self.page
            .style(Target::ProgressBar, "width")
            .and_then(|w| w.strip_suffix('%'))
            .and_then(|w| w.parse::<f64>().ok())
            .map_or(0.0, |pct| (pct / 100.0).clamp(0.0, 1.0))
    }
}

pub fn run_preview(roles: Vec<String>) -> Result<()> {
    let Some(mut preview) = Preview::new(roles) else {
        eprintln!("lume: no usable roles");
        std::process::exit(1);
    };

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    loop {
        preview.advance();

        let dark = preview.page.attr(Target::Root, "data-theme") == Some("dark");
        let (fg, bg) = if dark {
            (Color::White, Color::Black)
        } else {
            (Color::Black, Color::Gray)
        };
        let base = Style::default().fg(fg).bg(bg);

        terminal.draw(|frame| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Min(0),
                ])
                .split(frame.area());

            let header = Line::from(vec![
                Span::styled(" lume ", base.add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!(
                        "| theme: {} (stored: {}) | nav: {} | t theme  s system  n nav  l link  ↑↓ scroll  q quit ",
                        preview.page.attr(Target::Root, "data-theme").unwrap_or("?"),
                        preview
                            .page
                            .stored_theme()
                            .map_or("none", |t| t.as_str()),
                        preview
                            .page
                            .attr(Target::NavToggle, "aria-expanded")
                            .unwrap_or("false"),
                    ),
                    base,
                ),
            ]);
            frame.render_widget(Paragraph::new(header).style(base), rows[0]);

            let role = Paragraph::new(format!("▌{}", preview.page.text(Target::RoleText)))
                .style(base)
                .block(Block::default().borders(Borders::ALL).title(" role "));
            frame.render_widget(role, rows[1]);

            let counters = (0..3)
                .map(|i| {
                    let text = preview.page.text(Target::Counter(i));
                    if text.is_empty() { "·".to_string() } else { text.to_string() }
                })
                .collect::<Vec<_>>()
                .join("   ");
            let revealed = (0..2)
                .filter(|&i| preview.page.has_class(Target::Reveal(i), REVEAL_CLASS))
                .count();
            let stats = Paragraph::new(format!("{counters}   ({revealed}/2 revealed)"))
                .style(base)
                .block(Block::default().borders(Borders::ALL).title(" counters "));
            frame.render_widget(stats, rows[2]);

            let links: Vec<Span> = ["home", "work", "contact"]
                .iter()
                .enumerate()
                .flat_map(|(i, name)| {
                    let style = if preview.page.has_class(Target::NavLink(i), ACTIVE_CLASS) {
                        base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                    } else {
                        base
                    };
                    [Span::styled(format!(" {name} "), style), Span::raw(" ")]
                })
                .collect();
            let nav = Paragraph::new(Line::from(links))
                .style(base)
                .block(Block::default().borders(Borders::ALL).title(" nav "));
            frame.render_widget(nav, rows[3]);

            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::ALL).title(" scroll "))
                .gauge_style(Style::default().fg(Color::Blue).bg(bg))
                .ratio(preview.progress_ratio());
            frame.render_widget(gauge, rows[4]);
        })?;

        if event::poll(Duration::from_millis(33))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('t') => {
                        let cmds = preview.theme.toggle();
                        preview.page.apply_all(&cmds);
                    }
                    KeyCode::Char('s') => {
                        preview.system_dark = !preview.system_dark;
                        let cmds = preview.theme.system_changed(preview.system_dark);
                        preview.page.apply_all(&cmds);
                    }
                    KeyCode::Char('n') => {
                        let cmds = preview.nav.toggle();
                        preview.page.apply_all(&cmds);
                    }
                    KeyCode::Char('l') => {
                        let cmds = preview.nav.link_clicked();
                        preview.page.apply_all(&cmds);
                    }
                    KeyCode::Up => {
                        preview.scroll_y = (preview.scroll_y - SCROLL_STEP).max(0.0);
                        preview.update_scroll();
                    }
                    KeyCode::Down => {
                        let max = CONTENT_HEIGHT - VIEWPORT_HEIGHT;
                        preview.scroll_y = (preview.scroll_y + SCROLL_STEP).min(max);
                        preview.update_scroll();
                    }
                    _ => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
