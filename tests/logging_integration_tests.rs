//! Integration tests for the Engine logging system
//!
//! These tests verify the logging system functionality.
//!
//! Run with: cargo test --test logging_integration_tests

use serial_test::serial;
use std::sync::{Arc, Mutex};
use umbra_3d_shadow::umbra3d::Engine;
use umbra_3d_shadow::umbra3d::log::{Logger, LogEntry, LogSeverity};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push(entry.clone());
    }
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Engine::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());
    Engine::log(LogSeverity::Error, "test::module", "Test error message".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 3);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "test::module");
        assert_eq!(captured[0].message, "Test info message");
        assert_eq!(captured[1].severity, LogSeverity::Warn);
        assert_eq!(captured[2].severity, LogSeverity::Error);
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_log_detailed_carries_file_line() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log_detailed(
        LogSeverity::Error,
        "umbra3d::Engine",
        "Detailed error".to_string(),
        "src/engine.rs",
        123,
    );

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].file, Some("src/engine.rs"));
        assert_eq!(captured[0].line, Some(123));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_logging_macros_route_through_engine() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    umbra_3d_shadow::engine_info!("umbra3d::Test", "value is {}", 7);
    umbra_3d_shadow::engine_error!("umbra3d::Test", "failure {}", "case");

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].message, "value is 7");
        // The error macro records its call site
        assert_eq!(captured[1].severity, LogSeverity::Error);
        assert!(captured[1].file.is_some());
        assert!(captured[1].line.is_some());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_reset_logger_restores_default() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);
    Engine::reset_logger();

    // Entries after the reset go to the default console logger instead
    Engine::log(LogSeverity::Info, "test::module", "after reset".to_string());

    let captured = entries.lock().unwrap();
    assert!(captured.is_empty());
}
