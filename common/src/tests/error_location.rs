use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every client error carries an ErrorLocation. If capture breaks,
/// a failed Asana call can no longer be traced back to the method that issued it.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops being propagated or
/// the line number is taken from the wrong frame.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN / WHEN: Capturing the current position
    let expected_line = line!() + 1;
    let location = ErrorLocation::from(Location::caller());

    // THEN: File, line and column are populated
    assert!(location.file.contains("error_location.rs"));
    assert_eq!(location.line, expected_line);
    assert!(location.column > 0);
}

/// **VALUE**: Verifies the `[file:line:column]` Display format.
///
/// **WHY THIS MATTERS**: Every error message in the workspace ends with this suffix;
/// log scraping depends on it being stable.
///
/// **BUG THIS CATCHES**: Would catch a changed bracket or separator layout.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    let location = ErrorLocation::here();

    let formatted = format!("{}", location);

    assert!(formatted.starts_with('['));
    assert!(formatted.ends_with(']'));
    assert!(formatted.contains("error_location.rs"));
    assert!(formatted.contains(&location.line.to_string()));
    assert_eq!(formatted.matches(':').count(), 2);
}

/// **VALUE**: Verifies `#[track_caller]` propagation through helper constructors.
///
/// **WHY THIS MATTERS**: Error helpers such as `AsanaClientError::validation()` rely on
/// this so the reported line is the call site, not the helper.
///
/// **BUG THIS CATCHES**: Would catch if `here()` lost its `#[track_caller]` attribute.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::here()
    }

    let loc1 = capture_location();
    let loc2 = capture_location();

    assert_eq!(loc1.file, loc2.file);
    assert_eq!(loc1.line + 1, loc2.line);
}
