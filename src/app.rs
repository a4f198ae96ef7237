use crate::config::Config;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::{self as terminal_events, Handler as TerminalEventHandler};
use crate::logger::LogBuffer;
use crate::state::{State, ThemeMode};
use crate::todos::Todos;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
    log_buffer: LogBuffer,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config, log_buffer: LogBuffer) -> Result<()> {
        info!("Starting application against {}...", config.api_url);
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let theme = ThemeMode::from(config.dark_mode);
        let mut app = App {
            state: Arc::new(Mutex::new(State::new(tx.clone(), theme))),
            config,
            log_buffer,
        };
        app.start_network(rx)?;
        app.start_ui(tx).await?;
        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations. Events are
    /// processed one at a time in the order they were sent.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> Result<()> {
        debug!("Creating new thread for asynchronous networking...");
        let todos = Todos::new(&self.config.api_url)?;
        let cloned_state = Arc::clone(&self.state);
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to create network runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async {
                let mut network_event_handler = NetworkEventHandler::new(&cloned_state, &todos);
                while let Ok(network_event) = net_receiver.recv() {
                    network_event_handler.process(network_event).await;
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&mut self, net_sender: NetworkEventSender) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let result = self.run_ui(net_sender, stdout).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        result
    }

    async fn run_ui(&mut self, net_sender: NetworkEventSender, stdout: io::Stdout) -> Result<()> {
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        net_sender.send(NetworkEvent::Refresh)?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            {
                let state = self.state.lock().await;
                terminal.draw(|frame| crate::ui::render(frame, &state, &self.log_buffer))?;
            }
            // Wait for input without holding the lock so network results land
            // between frames.
            let event = terminal_event_handler.next()?;
            let mut state = self.state.lock().await;
            if !terminal_events::handle(event, &mut state) {
                debug!("Received application exit request.");
                break;
            }
        }

        terminal.show_cursor()?;
        Ok(())
    }
}
