//! Distance ranking.

use crate::institution::Institution;
use schoolfinder_geo::{calculate_distances, ReferencePosition};
use tracing::debug;

/// Annotate every institution with its distance to `reference` and sort
/// ascending.
///
/// Any previous distance is overwritten. The sort is stable, so institutions
/// at equal distance keep their input order.
///
/// # Example
/// ```
/// use schoolfinder_directory::{rank, Institution};
/// use schoolfinder_geo::ReferencePosition;
///
/// let schools = vec![
///     Institution::new(0, "Loin", 46.0, 5.0),
///     Institution::new(1, "Près", 45.01, 5.0),
/// ];
/// let ranked = rank(&schools, &ReferencePosition::at(45.0, 5.0));
/// assert_eq!(ranked[0].name, "Près");
/// ```
pub fn rank(institutions: &[Institution], reference: &ReferencePosition) -> Vec<Institution> {
    let distances = calculate_distances(&reference.coordinate(), institutions);

    let mut ranked: Vec<Institution> = institutions
        .iter()
        .zip(distances)
        .map(|(institution, distance)| Institution {
            distance: Some(distance),
            ..institution.clone()
        })
        .collect();

    ranked.sort_by(|a, b| {
        let a = a.distance.unwrap_or(f64::INFINITY);
        let b = b.distance.unwrap_or(f64::INFINITY);
        a.total_cmp(&b)
    });

    debug!(
        count = ranked.len(),
        latitude = reference.latitude,
        longitude = reference.longitude,
        "Ranked institutions by distance"
    );

    ranked
}
