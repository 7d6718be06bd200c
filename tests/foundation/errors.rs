//! Integration tests for Error types
//!
//! Tests error construction, display, origins and error kinds.

use wayfarer_foundation::{Error, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_definition() {
    let err = Error::invalid_definition(12, "expected 'location'");
    assert!(matches!(err.kind, ErrorKind::InvalidDefinition { line: 12, .. }));
    assert_eq!(err.line(), Some(12));
    let msg = format!("{err}");
    assert!(msg.contains("12"));
    assert!(msg.contains("expected 'location'"));
}

#[test]
fn error_invalid_config() {
    let err = Error::invalid_config("limit.commandHistorySize", "many");
    assert!(matches!(err.kind, ErrorKind::InvalidConfig { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("limit.commandHistorySize"));
    assert!(msg.contains("many"));
    assert_eq!(err.line(), None);
}

#[test]
fn error_unknown_location() {
    let err = Error::unknown_location("cellar");
    assert_eq!(err.kind, ErrorKind::UnknownLocation("cellar".into()));
    assert!(format!("{err}").contains("cellar"));
}

#[test]
fn error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io.into();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert!(format!("{err}").contains("gone"));
}

#[test]
fn error_from_kind() {
    let err: Error = ErrorKind::NoExecutedCommands.into();
    assert_eq!(err.kind, ErrorKind::NoExecutedCommands);
    assert!(err.origin.is_none());
}

// =============================================================================
// Origins
// =============================================================================

#[test]
fn origin_is_appended_to_display() {
    let err = Error::invalid_definition(3, "bad").with_origin("castle.adv");
    let msg = format!("{err}");
    assert!(msg.contains("castle.adv"));
    assert!(msg.contains("bad"));
}

#[test]
fn domain_kinds_are_distinct() {
    let kinds = [
        ErrorKind::UnparsedCommand,
        ErrorKind::UnexecutedCommand,
        ErrorKind::CommandAlreadyUndone,
        ErrorKind::IrreversibleCommand,
        ErrorKind::ItemAlreadyInRepository,
        ErrorKind::ItemNotInRepository,
        ErrorKind::NoConnectedLocation,
        ErrorKind::NoExitThreshold,
        ErrorKind::NoGameEvents,
        ErrorKind::NoExecutedCommands,
    ];
    for (i, a) in kinds.iter().enumerate() {
        for b in &kinds[i + 1..] {
            assert_ne!(a, b);
            assert_ne!(a.to_string(), b.to_string());
        }
    }
}
