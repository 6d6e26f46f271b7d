//! Fixed demo dataset.
//!
//! The board is recreated from these literals at process start; there is
//! no persistence and no external configuration surface. Four tours on
//! the 2024-04-19 window (two of them carrying next-day legs, plotted by
//! clock time like everything else) plus three pooled rest breaks.

use crate::models::{datetime, CarrierClass, Operation, TimeWindow, Tour};

fn display_window() -> TimeWindow {
    TimeWindow::new(datetime(2024, 4, 19, 0, 0), datetime(2024, 4, 19, 23, 59))
}

/// Seed tours 1–4 with work operations 1–5.
pub fn seed_tours() -> Vec<Tour> {
    vec![
        Tour::new(1, display_window())
            .with_operation(Operation::work(
                1,
                datetime(2024, 4, 19, 8, 0),
                datetime(2024, 4, 19, 12, 0),
                CarrierClass::Light,
            ))
            .with_operation(Operation::work(
                2,
                datetime(2024, 4, 19, 11, 0),
                datetime(2024, 4, 19, 13, 0),
                CarrierClass::Heavy,
            )),
        Tour::new(2, display_window()).with_operation(Operation::work(
            3,
            datetime(2024, 4, 20, 14, 0),
            datetime(2024, 4, 20, 16, 0),
            CarrierClass::Light,
        )),
        Tour::new(3, display_window()).with_operation(Operation::work(
            4,
            datetime(2024, 4, 20, 16, 0),
            datetime(2024, 4, 20, 18, 0),
            CarrierClass::Heavy,
        )),
        Tour::new(4, display_window()).with_operation(Operation::work(
            5,
            datetime(2024, 4, 20, 17, 0),
            datetime(2024, 4, 20, 20, 0),
            CarrierClass::Light,
        )),
    ]
}

/// Seed pool: three identical lunchtime rest breaks awaiting assignment.
pub fn seed_pool() -> Vec<Operation> {
    (100..=102)
        .map(|id| {
            Operation::rest(
                id,
                datetime(2024, 4, 19, 11, 0),
                datetime(2024, 4, 19, 12, 0),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_tour_ids_and_counts() {
        let tours = seed_tours();
        let ids: Vec<u32> = tours.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(tours[0].operation_count(), 2);
        assert_eq!(tours[1].operation_count(), 1);
    }

    #[test]
    fn test_seed_pool_is_all_rests() {
        let pool = seed_pool();
        assert_eq!(pool.len(), 3);
        assert!(pool.iter().all(Operation::is_rest));
        let ids: Vec<u32> = pool.iter().map(|op| op.id).collect();
        assert_eq!(ids, vec![100, 101, 102]);
    }

    #[test]
    fn test_seed_ids_are_globally_unique() {
        let tours = seed_tours();
        let pool = seed_pool();
        let mut ids: Vec<u32> = tours
            .iter()
            .flat_map(|t| t.operations.iter().map(|op| op.id))
            .chain(pool.iter().map(|op| op.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
