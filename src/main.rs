mod ui;

use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use hintword::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    game::{GameError, GameEvent, GameState, ToastKind},
    logging,
    random::{RandomSource, SeededRandom, ThreadRandom},
    runtime::{CrosstermEventSource, FixedTicker, Runner, TermEvent},
    words::PoolError,
    Game, Session, WordPool,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::{Duration, Instant},
};

const TICK_RATE_MS: u64 = 100;
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// guess the hidden words from their hints before your lives run out
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A word-guessing game: read the hints, type the hidden word, and find enough words before the timer and your lives run out."
)]
pub struct Cli {
    /// word pool file to play with (JSON: {"wordLists": [{"words": [{"word", "hints"}]}]})
    #[clap(short = 'w', long)]
    words: Option<PathBuf>,

    /// bundled word pack to play with
    #[clap(short = 'p', long, value_enum)]
    pack: Option<Pack>,

    /// number of lives
    #[clap(short = 'l', long)]
    lives: Option<u8>,

    /// seconds allowed per word
    #[clap(short = 's', long)]
    seconds: Option<u32>,

    /// number of words to find to win
    #[clap(short = 't', long)]
    target: Option<usize>,

    /// number of words that may be passed
    #[clap(long)]
    passes: Option<usize>,

    /// seed for reproducible word order
    #[clap(long)]
    seed: Option<u64>,

    /// where to write logs
    #[clap(long, env = "HINTWORD_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// more log output (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// store the effective settings as the new defaults
    #[clap(long)]
    save_config: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, ValueEnum, strum_macros::Display)]
pub enum Pack {
    English,
    French,
}

impl Pack {
    fn name(&self) -> String {
        self.to_string().to_lowercase()
    }
}

impl Cli {
    /// Command line flags layered over the stored config
    fn merge(&self, mut cfg: Config) -> Config {
        if let Some(pack) = self.pack {
            cfg.pack = pack.name();
            cfg.word_file = None;
        }
        if let Some(words) = &self.words {
            cfg.word_file = Some(words.clone());
        }
        if let Some(lives) = self.lives {
            cfg.lives = lives;
        }
        if let Some(seconds) = self.seconds {
            cfg.seconds_per_word = seconds;
        }
        if let Some(target) = self.target {
            cfg.words_to_find = target;
        }
        if let Some(passes) = self.passes {
            cfg.max_passes = passes;
        }
        cfg
    }
}

fn load_pool(cfg: &Config) -> Result<WordPool, PoolError> {
    match &cfg.word_file {
        Some(path) => WordPool::from_file(path),
        None => WordPool::bundled(&cfg.pack),
    }
}

fn build_session(
    cfg: &Config,
    pool: WordPool,
    seed: Option<u64>,
) -> Session<Box<dyn RandomSource>> {
    let rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    Session::new(Game::with_random(pool, cfg.rules(), rng))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    pub shown_at: Instant,
}

/// What the screen shows, rebuilt from game events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hud {
    pub hint: String,
    pub hint_index: usize,
    pub hint_total: usize,
    pub lives: u8,
    pub max_lives: u8,
    pub timer: u32,
    pub found: usize,
    pub target: usize,
    pub passes_used: usize,
    pub passes_max: usize,
    pub mascot: u8,
    pub finished: Option<GameState>,
}

impl Hud {
    fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Started => self.finished = None,
            GameEvent::HintChanged { hint, index, total } => {
                self.hint = hint.clone();
                self.hint_index = *index;
                self.hint_total = *total;
            }
            GameEvent::LivesChanged(lives) => self.lives = *lives,
            GameEvent::TimerChanged(secs) => self.timer = *secs,
            GameEvent::PassesChanged { used, max } => {
                self.passes_used = *used;
                self.passes_max = *max;
            }
            GameEvent::FoundChanged { found, target } => {
                self.found = *found;
                self.target = *target;
            }
            GameEvent::MascotChanged(stage) => self.mascot = *stage,
            GameEvent::Won => self.finished = Some(GameState::Won),
            GameEvent::Lost => self.finished = Some(GameState::Lost),
            GameEvent::Toast { .. } => {}
        }
    }

    pub fn passes_left(&self) -> usize {
        self.passes_max.saturating_sub(self.passes_used)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Control {
    Continue,
    Quit,
}

pub struct App {
    pub session: Session<Box<dyn RandomSource>>,
    pub input: String,
    pub hud: Hud,
    pub toast: Option<Toast>,
}

impl App {
    pub fn new(mut session: Session<Box<dyn RandomSource>>, now: Instant) -> Result<Self, GameError> {
        session.start(now)?;
        let max_lives = session.game().rules().lives;
        let mut app = Self {
            session,
            input: String::new(),
            hud: Hud {
                max_lives,
                ..Hud::default()
            },
            toast: None,
        };
        app.drain_events(now);
        Ok(app)
    }

    fn drain_events(&mut self, now: Instant) {
        for event in self.session.take_events() {
            if let GameEvent::Toast { kind, text } = &event {
                self.toast = Some(Toast {
                    kind: *kind,
                    text: text.clone(),
                    shown_at: now,
                });
            }
            if event == GameEvent::Started {
                self.toast = None;
                self.input.clear();
            }
            self.hud.apply(&event);
        }
    }

    fn on_tick(&mut self, now: Instant) {
        self.session.advance(now);
        self.drain_events(now);
        if self
            .toast
            .as_ref()
            .is_some_and(|t| now.duration_since(t.shown_at) >= TOAST_DURATION)
        {
            self.toast = None;
        }
    }

    fn on_key(&mut self, key: KeyEvent, now: Instant) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if ctrl => return Control::Quit,
            _ => {}
        }

        if self.hud.finished.is_some() {
            if let KeyCode::Char('r') = key.code {
                if let Err(err) = self.session.restart(now) {
                    tracing::error!(%err, "restart failed");
                }
            }
        } else {
            match key.code {
                KeyCode::Enter => {
                    let guess = std::mem::take(&mut self.input);
                    if let Err(err) = self.session.submit_guess(&guess, now) {
                        tracing::debug!(%err, "guess rejected");
                    }
                }
                KeyCode::Tab => self.session.next_hint(),
                KeyCode::Char('p') if ctrl => {
                    if let Err(err) = self.session.pass_word(now) {
                        tracing::debug!(%err, "pass rejected");
                    }
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char(c) if !ctrl => self.input.push(c),
                _ => {}
            }
        }

        self.drain_events(now);
        Control::Continue
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let store = FileConfigStore::new();
    let cfg = cli.merge(store.load());

    let log_path = cli.log_file.clone().unwrap_or_else(AppDirs::log_path);
    logging::init_logging(&log_path, cli.verbose)?;

    if cli.save_config {
        store.save(&cfg)?;
        tracing::info!(path = %store.path().display(), "config saved");
    }

    let pool = load_pool(&cfg)?;

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let mut app = App::new(build_session(&cfg, pool, cli.seed), Instant::now())?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    loop {
        terminal.draw(|f| ui(app, f))?;

        let now = Instant::now();
        match runner.step() {
            TermEvent::Tick => app.on_tick(now),
            TermEvent::Resize => {}
            TermEvent::Key(key) => {
                if app.on_key(key, now) == Control::Quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
