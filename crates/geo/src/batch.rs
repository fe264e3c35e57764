//! Batch distance calculations with optional parallelism.
//!
//! Used whenever the reference position changes: every item gets a fresh
//! distance, nothing is reused from the previous pass.

use crate::{distance_km, Coordinate};

/// Anything that sits at a fixed coordinate.
pub trait Located {
    /// The item's position.
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

/// Calculate rounded distances (km) from a reference coordinate to every item.
///
/// The output has one entry per input item, in input order.
///
/// # Example
/// ```
/// use schoolfinder_geo::{calculate_distances, Coordinate};
///
/// let items = vec![Coordinate::new(45.0, 5.0), Coordinate::new(45.1, 5.0)];
/// let distances = calculate_distances(&Coordinate::new(45.0, 5.0), &items);
/// assert_eq!(distances[0], 0.0);
/// assert_eq!(distances.len(), 2);
/// ```
pub fn calculate_distances<T: Located + Sync>(reference: &Coordinate, items: &[T]) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .map(|item| calculate_single_distance(reference, item))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .map(|item| calculate_single_distance(reference, item))
            .collect()
    }
}

#[inline]
fn calculate_single_distance<T: Located>(reference: &Coordinate, item: &T) -> f64 {
    let to = item.coordinate();
    distance_km(reference.latitude, reference.longitude, to.latitude, to.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_items() -> Vec<Coordinate> {
        vec![
            // Lyon
            Coordinate::new(45.7640, 4.8357),
            // Grenoble
            Coordinate::new(45.1885, 5.7245),
            // Paris
            Coordinate::new(48.8566, 2.3522),
        ]
    }

    #[test]
    fn test_batch_distances_keep_order() {
        let items = create_test_items();
        // Reference in Lyon
        let results = calculate_distances(&Coordinate::new(45.7640, 4.8357), &items);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], 0.0);
        assert!(results[1] > 80.0 && results[1] < 110.0, "Lyon-Grenoble: {}", results[1]);
        assert!(results[2] > 380.0 && results[2] < 400.0, "Lyon-Paris: {}", results[2]);
    }

    #[test]
    fn test_batch_matches_single_calls() {
        let items = create_test_items();
        let reference = Coordinate::new(46.0, 4.0);
        let results = calculate_distances(&reference, &items);

        for (item, d) in items.iter().zip(&results) {
            assert_eq!(*d, distance_km(46.0, 4.0, item.latitude, item.longitude));
        }
    }

    #[test]
    fn test_empty_batch() {
        let items: Vec<Coordinate> = Vec::new();
        assert!(calculate_distances(&Coordinate::new(0.0, 0.0), &items).is_empty());
    }
}
