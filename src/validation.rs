//! Board integrity validation.
//!
//! Checks structural integrity of a board, typically right after seeding
//! or deserializing external data. Detects:
//! - Duplicate tour IDs
//! - Duplicate operation IDs (across tours and the pool — exclusive
//!   ownership means an ID may appear in exactly one container)
//! - Inverted time windows (`end < begin`)
//! - A tour counter that would reissue an existing ID
//!
//! Runtime mutation paths do not validate; unresolved identifiers there
//! are silent no-ops.

use std::collections::HashSet;

use crate::board::TimelineBoard;
use crate::models::TimeWindow;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tours share the same ID.
    DuplicateTourId,
    /// An operation ID appears in more than one place.
    DuplicateOperationId,
    /// A time window ends before it begins.
    InvertedInterval,
    /// The tour counter is not past every existing tour ID.
    StaleTourCounter,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn check_window(errors: &mut Vec<ValidationError>, window: &TimeWindow, owner: &str) {
    if window.end < window.begin {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedInterval,
            format!("{owner} ends before it begins"),
        ));
    }
}

/// Validates a board's structural integrity.
///
/// Checks:
/// 1. No duplicate tour IDs
/// 2. No duplicate operation IDs across all tours and the pool
/// 3. No inverted tour or operation windows
/// 4. The tour counter exceeds every existing tour ID
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_board(board: &TimelineBoard) -> ValidationResult {
    let mut errors = Vec::new();

    let mut tour_ids = HashSet::new();
    let mut operation_ids = HashSet::new();

    for tour in &board.tours {
        if !tour_ids.insert(tour.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTourId,
                format!("Duplicate tour ID: {}", tour.id),
            ));
        }
        check_window(&mut errors, &tour.window, &format!("Tour {}", tour.id));

        for op in &tour.operations {
            if !operation_ids.insert(op.id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateOperationId,
                    format!("Operation {} appears more than once", op.id),
                ));
            }
            check_window(&mut errors, &op.window, &format!("Operation {}", op.id));
        }
    }

    for op in &board.pool {
        if !operation_ids.insert(op.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateOperationId,
                format!("Operation {} appears in a tour and the pool", op.id),
            ));
        }
        check_window(&mut errors, &op.window, &format!("Operation {}", op.id));
    }

    if let Some(max_id) = board.tours.iter().map(|t| t.id).max() {
        if board.next_tour_id() <= max_id {
            errors.push(ValidationError::new(
                ValidationErrorKind::StaleTourCounter,
                format!(
                    "Tour counter {} would reissue an ID at or below {max_id}",
                    board.next_tour_id()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{datetime, CarrierClass, Operation, Tour};

    fn day_window() -> TimeWindow {
        TimeWindow::new(datetime(2024, 4, 19, 0, 0), datetime(2024, 4, 19, 23, 59))
    }

    #[test]
    fn test_seeded_board_is_valid() {
        assert!(validate_board(&TimelineBoard::seeded()).is_ok());
    }

    #[test]
    fn test_board_stays_valid_through_mutations() {
        let mut board = TimelineBoard::seeded();
        board.toggle_mode();
        board.move_operation(2, 3);
        board.add_tour_like_first();
        board.delete_tour(4);
        board.toggle_mode();
        assert!(validate_board(&board).is_ok());
    }

    #[test]
    fn test_duplicate_tour_id() {
        let board = TimelineBoard::new(
            vec![Tour::new(1, day_window()), Tour::new(1, day_window())],
            Vec::new(),
        );
        let errors = validate_board(&board).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateTourId));
    }

    #[test]
    fn test_operation_in_tour_and_pool() {
        let op = Operation::rest(7, datetime(2024, 4, 19, 11, 0), datetime(2024, 4, 19, 12, 0));
        let board = TimelineBoard::new(
            vec![Tour::new(1, day_window()).with_operation(op.clone())],
            vec![op],
        );
        let errors = validate_board(&board).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateOperationId));
    }

    #[test]
    fn test_inverted_operation_window() {
        let board = TimelineBoard::new(
            vec![Tour::new(1, day_window()).with_operation(Operation::work(
                1,
                datetime(2024, 4, 19, 12, 0),
                datetime(2024, 4, 19, 8, 0),
                CarrierClass::Light,
            ))],
            Vec::new(),
        );
        let errors = validate_board(&board).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvertedInterval));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let bad_op = Operation::rest(9, datetime(2024, 4, 19, 12, 0), datetime(2024, 4, 19, 11, 0));
        let board = TimelineBoard::new(
            vec![
                Tour::new(3, day_window()).with_operation(bad_op.clone()),
                Tour::new(3, day_window()),
            ],
            vec![bad_op],
        );
        let errors = validate_board(&board).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
