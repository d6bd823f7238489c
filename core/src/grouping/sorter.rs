use crate::types::Study;

/// Puts every study into canonical order
///
/// Series are ordered by series number and instances by instance number.
/// Both sorts are stable: equal numbers keep their first-seen order, which
/// matters because number collisions occur in real acquisitions. Study
/// order itself is left as first seen.
pub fn sort_studies(mut studies: Vec<Study>) -> Vec<Study> {
    for study in &mut studies {
        canonicalize_study(study);
    }
    studies
}

/// Sorts one study in place
pub fn canonicalize_study(study: &mut Study) {
    study.series.sort_by_key(|series| series.series_number);
    for series in &mut study.series {
        series.instances.sort_by_key(|instance| instance.instance_number);
    }
}

/// Checks the ordering produced by [`canonicalize_study`]
pub fn is_canonical(study: &Study) -> bool {
    study
        .series
        .windows(2)
        .all(|w| w[0].series_number <= w[1].series_number)
        && study.series.iter().all(|series| {
            series
                .instances
                .windows(2)
                .all(|w| w[0].instance_number <= w[1].instance_number)
        })
}
