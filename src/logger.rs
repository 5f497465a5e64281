// Logger module - named output channels for game events
//
// Players never print directly. They ask a LoggerFactory for a channel
// (normally "screen") and write formatted lines to it.

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::ordered_hashmap::OrderedHashMap;

/// Channel used for human-readable game output
pub const SCREEN_CHANNEL: &str = "screen";

pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

pub trait LoggerFactory: Send + Sync {
    /// Returns the logger registered for `channel`
    fn provide(&self, channel: &str) -> Arc<dyn Logger>;
}

/// Writes messages to stdout exactly as given.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        let mut out = std::io::stdout().lock();
        let written = out.write_all(message.as_bytes());
        if let Err(err) = written.and_then(|()| out.flush()) {
            log::error!("Failed to write to console: {}", err);
        }
    }
}

/// Forwards messages to the `log` facade, using the channel as the target.
#[derive(Debug, Clone)]
pub struct LogCrateLogger {
    channel: String,
}

impl LogCrateLogger {
    pub fn new(channel: impl Into<String>) -> Self {
        LogCrateLogger {
            channel: channel.into(),
        }
    }
}

impl Logger for LogCrateLogger {
    fn log(&self, message: &str) {
        log::info!(target: self.channel.as_str(), "{}", message.trim_end());
    }
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

/// LoggerFactory backed by explicitly registered channels.
///
/// Channels that were never registered fall back to a [`LogCrateLogger`]
/// for that channel name, so nothing is silently dropped.
#[derive(Default)]
pub struct LoggerRegistry {
    channels: OrderedHashMap<String, Arc<dyn Logger>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose screen channel writes to stdout
    pub fn console() -> Self {
        Self::new().with_channel(SCREEN_CHANNEL, Arc::new(ConsoleLogger))
    }

    pub fn with_channel(mut self, channel: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        self.register(channel, logger);
        self
    }

    pub fn register(&mut self, channel: impl Into<String>, logger: Arc<dyn Logger>) {
        let channel = channel.into();
        log::debug!("Registering logger channel '{}'", channel);
        self.channels.insert(channel, logger);
    }

    pub fn channels(&self) -> Vec<&str> {
        self.channels.keys().map(String::as_str).collect()
    }
}

impl LoggerFactory for LoggerRegistry {
    fn provide(&self, channel: &str) -> Arc<dyn Logger> {
        match self.channels.get(channel) {
            Some(logger) => Arc::clone(logger),
            None => Arc::new(LogCrateLogger::new(channel)),
        }
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("channels", &self.channels())
            .finish()
    }
}
