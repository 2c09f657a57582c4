//! Launch catalogue state

use eframe::egui;

use crate::api::{FetchError, Launch, SpaceXClient};
use crate::state::StateEvent;
use crate::task::{BackgroundTask, PollResult};

/// Loading state of the launch catalogue.
///
/// The catalogue is fetched once per application run. A failure is final
/// for that run; there is no retry.
pub struct LaunchesState {
    /// Joined launch records, empty until loaded
    pub launches: Vec<Launch>,
    /// True until the fetch resolves or fails
    pub loading: bool,
    /// Error message from the fetch
    pub error: Option<String>,
    /// Whether the fetch has been started
    started: bool,
    /// Async task for the fetch
    task: BackgroundTask<Result<Vec<Launch>, FetchError>>,
}

impl Default for LaunchesState {
    fn default() -> Self {
        Self {
            launches: Vec::new(),
            loading: true,
            error: None,
            started: false,
            task: BackgroundTask::default(),
        }
    }
}

impl LaunchesState {
    /// Start the one-time fetch. Later calls are ignored.
    pub fn start(&mut self, client: &SpaceXClient) -> Option<StateEvent> {
        if self.started {
            return None;
        }
        self.started = true;
        self.loading = true;
        self.error = None;

        let client = client.clone();
        self.task.spawn(async move { client.fetch_launches().await });

        Some(StateEvent::StatusMessage("Loading launches...".to_string()))
    }

    /// Poll the fetch task for completion
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        match self.task.poll() {
            PollResult::Complete(Ok(result)) => self.finish(result),
            PollResult::Complete(Err(e)) => {
                let msg = format!("Launch fetch task failed: {}", e);
                self.loading = false;
                self.error = Some(msg.clone());
                vec![StateEvent::LogError(msg.clone()), StateEvent::StatusMessage(msg)]
            }
            PollResult::Pending => {
                ctx.request_repaint();
                Vec::new()
            }
            PollResult::NoTask => Vec::new(),
        }
    }

    /// Apply the outcome of a fetch. Nothing is kept from a failed fetch.
    pub fn finish(&mut self, result: Result<Vec<Launch>, FetchError>) -> Vec<StateEvent> {
        self.loading = false;

        match result {
            Ok(launches) => {
                let count = launches.len();
                self.launches = launches;
                self.error = None;
                vec![
                    StateEvent::StatusMessage(format!("Loaded {} launches", count)),
                    StateEvent::LogInfo(format!("Loaded {} launches from SpaceX API", count)),
                ]
            }
            Err(e) => {
                let msg = e.to_string();
                self.launches.clear();
                self.error = Some(msg.clone());
                vec![
                    StateEvent::LogError(format!("Failed to fetch launches: {:?}", e)),
                    StateEvent::StatusMessage(format!("Error: {}", msg)),
                ]
            }
        }
    }
}
