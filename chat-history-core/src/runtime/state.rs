use crate::classify::{LineClassifier, MinecraftLogClassifier};
use crate::conf::{CONFIG_FILE_NAME, ConfigError, HistoryConfig, load_config, load_or_init};
use crate::dispatch::{ConnectedPlayer, JoinDispatcher, may_view_history};
use crate::history::{AggregateOptions, HistoryBuffer, SessionBuffer, aggregate_history};
use crate::render::{DeliverySink, PresentSummary, Presenter, StyledText};
use crate::runtime::decoration::ChatDecoration;
use crate::runtime::error::StartupError;
use std::path::{Path, PathBuf};

/// Where the runtime finds its inputs.
#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    /// Root the configured log folder is resolved against.
    pub game_dir: PathBuf,
    pub config_path: PathBuf,
    pub aggregate: AggregateOptions,
}

impl RuntimeOptions {
    /// Uses `<config_dir>/chat_history.json`.
    pub fn new(game_dir: impl Into<PathBuf>, config_dir: &Path) -> Self {
        Self {
            game_dir: game_dir.into(),
            config_path: config_dir.join(CONFIG_FILE_NAME),
            aggregate: AggregateOptions::default(),
        }
    }
}

/// Owns all chat history state for one server run.
///
/// Host callbacks arrive one at a time on the server thread, so every entry point takes
/// `&mut self` and nothing is shared.
pub struct ChatHistoryRuntime {
    options: RuntimeOptions,
    config: HistoryConfig,
    history: HistoryBuffer,
    session: SessionBuffer,
    dispatcher: JoinDispatcher,
}

impl ChatHistoryRuntime {
    /// Loads the config and builds the history with the default classifier.
    pub fn start(options: RuntimeOptions) -> Result<Self, StartupError> {
        Self::start_with_classifier(options, &MinecraftLogClassifier::new())
    }

    pub fn start_with_classifier(
        options: RuntimeOptions,
        classifier: &dyn LineClassifier,
    ) -> Result<Self, StartupError> {
        let config = load_or_init(&options.config_path)?;

        let log_dir = config.log_dir(&options.game_dir);
        let (history, _) = aggregate_history(&log_dir, classifier, options.aggregate);

        Ok(Self {
            options,
            config,
            history,
            session: SessionBuffer::new(),
            dispatcher: JoinDispatcher::new(),
        })
    }

    /// End-of-tick hook: replays history to at most one newly seen player.
    pub fn on_tick<S: DeliverySink + ?Sized>(
        &mut self,
        players: &[ConnectedPlayer],
        sink: &mut S,
    ) -> Option<PresentSummary> {
        let newcomer = self.dispatcher.tick(players)?;
        self.present_to(newcomer, sink)
    }

    /// Replays history to `player` if they are allowed to see it.
    pub fn present_to<S: DeliverySink + ?Sized>(
        &self,
        player: &ConnectedPlayer,
        sink: &mut S,
    ) -> Option<PresentSummary> {
        if !may_view_history(player, &self.config) {
            tracing::debug!(player = %player.name, "history not shown, operator required");
            return None;
        }

        let summary = Presenter::new(&self.history, &self.session).present(
            &player.id,
            self.config.history_limit(),
            sink,
        );

        tracing::info!(
            player = %player.name,
            history = summary.history,
            session = summary.session,
            "chat history presented"
        );

        Some(summary)
    }

    /// Player chat, already signed and about to be broadcast.
    pub fn on_chat_message<D: ChatDecoration + ?Sized>(&mut self, content: &str, decoration: &D) {
        self.session.push_chat(decoration.decorate(content));
    }

    /// Chat-like command output such as `/me` and `/say`.
    pub fn on_command_message<D: ChatDecoration + ?Sized>(
        &mut self,
        content: &str,
        decoration: &D,
    ) {
        self.session.push_chat(decoration.decorate(content));
    }

    /// Join/leave, advancement and death announcements. Action bar messages are ignored.
    pub fn on_game_message(&mut self, message: StyledText, overlay: bool) {
        if overlay {
            return;
        }
        self.session.push_game(message);
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Swaps the active config. The history is not rebuilt.
    pub fn replace_config(&mut self, config: HistoryConfig) {
        self.config = config;
    }

    /// Re-reads the config file; on failure the current config stays active.
    pub fn reload_config(&mut self) -> Result<(), ConfigError> {
        match load_config(&self.options.config_path) {
            Ok(config) => {
                tracing::info!(
                    old_max_messages = self.config.max_messages,
                    new_max_messages = config.max_messages,
                    "chat history config reloaded"
                );
                self.config = config;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "config reload failed, keeping current config");
                Err(e)
            }
        }
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn session(&self) -> &SessionBuffer {
        &self.session
    }

    pub fn options(&self) -> &RuntimeOptions {
        &self.options
    }
}
