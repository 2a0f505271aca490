use crate::api::Api;
use crate::config::Config;
use crate::error::AppError;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::{handle as handle_terminal_event, Handler as TerminalEventHandler};
use crate::logger::CustomLogger;
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;
type LogReceiver = std::sync::mpsc::Receiver<String>;

/// Fails any submission still waiting for a reply once the network thread
/// stops, including when it unwinds.
///
struct NetworkShutdown {
    state: Arc<Mutex<State>>,
}

impl Drop for NetworkShutdown {
    fn drop(&mut self) {
        warn!("Network thread stopped.");
        if let Ok(mut state) = self.state.try_lock() {
            state.abandon_submission();
        }
    }
}

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config, log_level: LevelFilter) -> Result<()> {
        let (log_tx, log_rx) = std::sync::mpsc::channel::<String>();
        let logger = CustomLogger::new(log_level);
        logger.set_log_callback(Box::new(move |entry| {
            let _ = log_tx.send(entry);
        }));
        logger.install()?;

        info!("Starting application...");
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', available: {}",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(tx, config.navigation_delay(), theme))),
            config,
        };
        app.start_network(rx);
        app.start_ui(log_rx).await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        let api_url = self.config.api_url.clone();
        let access_token = self.config.access_token.clone();
        std::thread::spawn(move || {
            let _shutdown = NetworkShutdown {
                state: Arc::clone(&cloned_state),
            };
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("{}", AppError::RuntimeCreation(e.to_string()));
                    return;
                }
            };
            runtime.block_on(async {
                let mut api = Api::new(&api_url, access_token.as_deref());
                let mut network_event_handler = NetworkEventHandler::new(&cloned_state, &mut api);
                while let Ok(network_event) = net_receiver.recv() {
                    if let Err(e) = network_event_handler.handle(network_event).await {
                        error!("Failed to handle network event: {}", e);
                    }
                }
            })
        });
    }

    /// Set up the terminal, run the render loop on the main thread and
    /// restore the terminal whatever the loop returned.
    ///
    async fn start_ui(&self, log_receiver: LogReceiver) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.render_loop(&mut terminal, log_receiver).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    /// Draw, wait for the next terminal event, apply it. Returns following
    /// an exit request or unrecoverable error.
    ///
    async fn render_loop<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        log_receiver: LogReceiver,
    ) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            {
                let mut state = self.state.lock().await;
                for entry in log_receiver.try_iter() {
                    state.push_log_entry(entry);
                }
                terminal.draw(|frame| crate::ui::render(frame, &state))?;
            }

            // Lock is released while waiting so the network thread can apply outcomes
            let event = terminal_event_handler.next()?;
            let mut state = self.state.lock().await;
            if !handle_terminal_event(event, &mut state) {
                debug!("Received application exit request.");
                return Ok(());
            }
        }
    }
}
