/// Umbra3D - Singleton manager for global shadow state
///
/// This module provides global singleton management for the pieces of
/// shadow state that are shared with the host engine: the logger, the
/// render-quality settings, and an optional debug-draw sink. It uses
/// thread-safe static storage with RwLock for safe concurrent access.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::debug::DebugSink;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine singletons
struct EngineState {
    /// Debug-draw sink singleton (wrapped in Mutex for thread-safe mutable access)
    debug_sink: RwLock<Option<Arc<Mutex<dyn DebugSink>>>>,
    /// Render-quality settings shared with the host renderer
    quality: RwLock<QualitySettings>,
}

impl EngineState {
    /// Create a new empty engine state
    fn new() -> Self {
        Self {
            debug_sink: RwLock::new(None),
            quality: RwLock::new(QualitySettings::default()),
        }
    }
}

// ===== QUALITY SETTINGS =====

/// Global render-quality settings.
///
/// `shadow_distance` is pinned every frame by
/// `ShadowFrustumFitter::update_frustum` to the same value written into
/// the camera's far clip. The two must never diverge: the frustum box is
/// computed with the same distance the renderer draws with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualitySettings {
    /// Maximum world distance from the camera beyond which shadows are not computed
    pub shadow_distance: f32,
}

impl Default for QualitySettings {
    fn default() -> Self {
        Self { shadow_distance: 0.0 }
    }
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// Manages the lifecycle of the global shadow state (quality settings,
/// debug sink, logger) using a singleton pattern with thread-safe access.
///
/// # Example
///
/// ```no_run
/// use umbra_3d_shadow::umbra3d::Engine;
/// use umbra_3d_shadow::umbra3d::debug::WireframeBuffer;
///
/// // Initialize engine
/// Engine::initialize()?;
///
/// // Create debug sink singleton
/// Engine::create_debug_sink(WireframeBuffer::new())?;
///
/// // Access shared quality settings
/// Engine::set_shadow_distance(50.0)?;
/// assert_eq!(Engine::shadow_distance()?, 50.0);
///
/// // Cleanup
/// Engine::shutdown();
/// # Ok::<(), umbra_3d_shadow::umbra3d::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Helper to log errors before returning them (internal use)
    ///
    /// This ensures all Engine errors are automatically logged with proper severity
    /// and source information, enabling better debugging and monitoring.
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!("umbra3d::Engine", "Initialization failed: {}", msg);
            }
            Error::LockPoisoned(msg) => {
                crate::engine_error!("umbra3d::Engine", "Lock poisoned: {}", msg);
            }
            _ => {
                crate::engine_error!("umbra3d::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    /// Initialize the engine
    ///
    /// This must be called once at application startup before creating any subsystems.
    ///
    /// # Errors
    ///
    /// Currently always succeeds, but returns Result for future extensibility.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Shutdown the entire engine and destroy all singletons
    ///
    /// This should be called at application shutdown to properly cleanup all
    /// subsystems. After calling this, you must call `initialize()` again
    /// before creating new subsystems.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut sink) = state.debug_sink.write() {
                *sink = None;
            }
            if let Ok(mut quality) = state.quality.write() {
                *quality = QualitySettings::default();
            }
        }
    }

    // ===== DEBUG SINK API =====

    /// Create and register the debug-draw sink singleton
    ///
    /// This is a simplified API that automatically wraps the sink in Arc
    /// and registers it as a global singleton.
    ///
    /// # Arguments
    ///
    /// * `sink` - Any type implementing the DebugSink trait
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A debug sink already exists
    /// - The debug sink lock is poisoned
    ///
    /// # Example
    ///
    /// ```no_run
    /// use umbra_3d_shadow::umbra3d::Engine;
    /// use umbra_3d_shadow::umbra3d::debug::WireframeBuffer;
    ///
    /// Engine::initialize()?;
    /// Engine::create_debug_sink(WireframeBuffer::new())?;
    /// # Ok::<(), umbra_3d_shadow::umbra3d::Error>(())
    /// ```
    pub fn create_debug_sink<S: DebugSink + 'static>(sink: S) -> Result<()> {
        // Wrap in Arc<Mutex<dyn DebugSink>>
        let arc_sink: Arc<Mutex<dyn DebugSink>> = Arc::new(Mutex::new(sink));

        // Register as singleton
        Self::register_debug_sink(arc_sink)?;

        // Log successful creation
        crate::engine_info!("umbra3d::Engine", "Debug sink singleton created successfully");

        Ok(())
    }

    /// Register a debug sink singleton (internal use)
    ///
    /// This is called internally by create_debug_sink(). Marked pub(crate) to
    /// allow access from other modules if needed.
    pub(crate) fn register_debug_sink(sink: Arc<Mutex<dyn DebugSink>>) -> Result<()> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))?;

        let mut lock = state.debug_sink.write()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("DebugSink lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::SubsystemExists("DebugSink already exists. Call Engine::destroy_debug_sink() first.".to_string())
            ));
        }

        *lock = Some(sink);
        Ok(())
    }

    /// Get the debug sink singleton
    ///
    /// This provides global access to the debug sink after it has been created.
    ///
    /// # Returns
    ///
    /// A shared pointer to the sink wrapped in a Mutex for thread-safe access
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - The debug sink has not been created
    pub fn debug_sink() -> Result<Arc<Mutex<dyn DebugSink>>> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))?;

        let lock = state.debug_sink.read()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("DebugSink lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::SubsystemMissing("DebugSink not created. Call Engine::create_debug_sink() first.".to_string())
            ))
    }

    /// Destroy the debug sink singleton
    ///
    /// Removes the debug sink singleton, allowing a new one to be created.
    /// All existing sink references will remain valid until dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized
    pub fn destroy_debug_sink() -> Result<()> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized".to_string())
            ))?;

        let mut lock = state.debug_sink.write()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("DebugSink lock poisoned".to_string())
            ))?;

        *lock = None;

        crate::engine_info!("umbra3d::Engine", "Debug sink singleton destroyed");

        Ok(())
    }

    // ===== QUALITY SETTINGS API =====

    /// Set the global shadow distance
    ///
    /// Called every frame by `ShadowFrustumFitter::update_frustum` with the
    /// same value written into the camera's far clip, keeping the visual far
    /// clip and the shadow-relevant frustum in sync.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or the lock is poisoned
    pub fn set_shadow_distance(distance: f32) -> Result<()> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Error::InitializationFailed(
                "Engine not initialized. Call Engine::initialize() first.".to_string()
            ))?;

        let mut quality = state.quality.write()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("QualitySettings lock poisoned".to_string())
            ))?;

        quality.shadow_distance = distance;
        Ok(())
    }

    /// Get the global shadow distance
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or the lock is poisoned
    pub fn shadow_distance() -> Result<f32> {
        Ok(Self::quality_settings()?.shadow_distance)
    }

    /// Get a snapshot of the global quality settings
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or the lock is poisoned
    pub fn quality_settings() -> Result<QualitySettings> {
        let state = ENGINE_STATE.get()
            .ok_or_else(|| Error::InitializationFailed(
                "Engine not initialized. Call Engine::initialize() first.".to_string()
            ))?;

        let quality = state.quality.read()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("QualitySettings lock poisoned".to_string())
            ))?;

        Ok(*quality)
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation (file logger,
    /// network logger, etc.)
    ///
    /// # Arguments
    ///
    /// * `logger` - Any type implementing the Logger trait
    ///
    /// # Example
    ///
    /// ```no_run
    /// use umbra_3d_shadow::umbra3d::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct FileLogger;
    /// impl Logger for FileLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Write to file...
    ///     }
    /// }
    ///
    /// Engine::set_logger(FileLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level
    /// * `source` - Source module (e.g., "umbra3d::Engine")
    /// * `message` - Log message
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by engine_error! macro to include source location.
    ///
    /// # Arguments
    ///
    /// * `severity` - Log severity level (typically Error)
    /// * `source` - Source module (e.g., "umbra3d::Engine")
    /// * `message` - Log message
    /// * `file` - Source file path
    /// * `line` - Source line number
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
