use super::*;

/// Sort forward segments by layout priority: highest pressure first, then the
/// segment closer to the initial edge (an unset backward coordinate sorts
/// before any real value), then the configured tie-break. The sort is stable,
/// so the incoming level order decides full ties.
pub(super) fn sort_forward_segs<C>(
    forward: &mut [usize],
    segs: &[Segment],
    states: &[SegState],
    tie_break: C,
) where
    C: Fn(&Segment, &Segment) -> Ordering,
{
    forward.sort_by(|&a, &b| {
        let sa = &states[a];
        let sb = &states[b];
        sb.forward_pressure
            .cmp(&sa.forward_pressure)
            .then_with(|| cmp_backward_coord(sa.backward_coord, sb.backward_coord))
            .then_with(|| tie_break(&segs[a], &segs[b]))
    });
}

fn cmp_backward_coord(a: Option<f32>, b: Option<f32>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        // coords are always finite once set
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

/// Assign `forward_coord` and `backward_coord` for `idx` and (recursively)
/// its whole forward closure.
///
/// The segment may belong to a "series": consecutive segments with the same
/// pressure whose width is unknown until a chain hits the far edge.
/// `series_back_pressure` is the number of segments behind this one in the
/// current series and `series_back_coord` the coordinate the series starts
/// from; the available span is divided evenly among the series.
///
/// Returns the segment's backward coordinate. Memoized on `forward_coord`:
/// a segment reachable along several paths is resolved by its first caller
/// and left untouched afterward.
pub(super) fn assign_coords<C>(
    segs: &[Segment],
    states: &mut [SegState],
    tie_break: &C,
    idx: usize,
    series_back_pressure: u32,
    series_back_coord: f32,
) -> f32
where
    C: Fn(&Segment, &Segment) -> Ordering,
{
    if states[idx].forward_coord.is_some() {
        // already computed; backward_coord is set in the same step
        return states[idx].backward_coord.unwrap_or(0.0);
    }

    let mut forward = states[idx].forward.clone();
    let forward_coord = if forward.is_empty() {
        // no forward segments: butt up against the far edge
        1.0
    } else {
        sort_forward_segs(&mut forward, segs, states, tie_break);

        // this segment's forward bound is the backward bound of its
        // highest-pressure forward segment, which extends the series
        assign_coords(
            segs,
            states,
            tie_break,
            forward[0],
            series_back_pressure + 1,
            series_back_coord,
        )
    };

    let backward_coord = forward_coord
        - (forward_coord - series_back_coord) / (series_back_pressure as f32 + 1.0);

    states[idx].forward_coord = Some(forward_coord);
    states[idx].backward_coord = Some(backward_coord);

    // every remaining forward segment starts a fresh series bounded by this
    // segment's forward edge
    for f in forward {
        assign_coords(segs, states, tie_break, f, 0, forward_coord);
    }

    backward_coord
}
