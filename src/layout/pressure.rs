use super::*;

/// For every segment, collect the segments in strictly later levels that
/// overlap it in time. Edges always point to a later level, so the resulting
/// graph is acyclic by construction.
pub(super) fn index_forward_segs(segs: &[Segment], levels: &[Vec<usize>], states: &mut [SegState]) {
    for (li, level) in levels.iter().enumerate() {
        for &idx in level {
            let seg = &segs[idx];
            let mut forward = Vec::new();
            for later in &levels[li + 1..] {
                for &other in later {
                    if collides(seg, &segs[other]) {
                        forward.push(other);
                    }
                }
            }
            states[idx].forward = forward;
        }
    }
}

/// Longest forward-collision chain starting at `idx`: zero for sinks, else one
/// more than the maximum over the forward segments. Memoized on
/// `forward_pressure`, so each segment is computed exactly once even when
/// reached along several paths.
pub(super) fn compute_pressure(states: &mut [SegState], idx: usize) -> u32 {
    if let Some(pressure) = states[idx].forward_pressure {
        return pressure;
    }

    let forward = states[idx].forward.clone();
    let mut pressure = 0;
    for f in forward {
        pressure = pressure.max(1 + compute_pressure(states, f));
    }
    states[idx].forward_pressure = Some(pressure);
    pressure
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(id: &str, top: f32, bottom: f32) -> Segment {
        Segment::new(id, top as i64, bottom as i64, top, bottom)
    }

    fn states_for(segs: &[Segment], ordered: &[usize]) -> (Vec<Vec<usize>>, Vec<SegState>) {
        let levels = build_levels(segs, ordered);
        let mut states = vec![SegState::default(); segs.len()];
        for (li, level) in levels.iter().enumerate() {
            for &idx in level {
                states[idx].level = li;
            }
        }
        index_forward_segs(segs, &levels, &mut states);
        (levels, states)
    }

    #[test]
    fn forward_edges_only_reach_later_levels() {
        let segs = vec![
            seg("a", 0.0, 300.0),
            seg("b", 0.0, 100.0),
            seg("c", 150.0, 300.0),
            seg("d", 160.0, 290.0),
        ];
        let (_, states) = states_for(&segs, &[0, 1, 2, 3]);
        for (idx, state) in states.iter().enumerate() {
            for &f in &state.forward {
                assert!(states[f].level > state.level, "{idx} -> {f} not forward");
            }
        }
    }

    #[test]
    fn sink_segments_have_zero_pressure() {
        let segs = vec![seg("a", 0.0, 100.0)];
        let (_, mut states) = states_for(&segs, &[0]);
        assert_eq!(compute_pressure(&mut states, 0), 0);
        assert_eq!(states[0].forward_pressure, Some(0));
    }

    #[test]
    fn pressure_counts_longest_chain() {
        // a overlaps b overlaps via stacking: a(0-300) -> b(0-200) -> c(0-100)
        // all mutually overlapping, so the chain is three deep.
        let segs = vec![
            seg("a", 0.0, 300.0),
            seg("b", 0.0, 200.0),
            seg("c", 0.0, 100.0),
        ];
        let (_, mut states) = states_for(&segs, &[0, 1, 2]);
        assert_eq!(compute_pressure(&mut states, 0), 2);
        assert_eq!(states[1].forward_pressure, Some(1));
        assert_eq!(states[2].forward_pressure, Some(0));
    }

    #[test]
    fn pressure_is_monotone_over_forward_edges() {
        let segs = vec![
            seg("a", 0.0, 300.0),
            seg("b", 0.0, 120.0),
            seg("c", 150.0, 300.0),
            seg("d", 0.0, 60.0),
        ];
        let (levels, mut states) = states_for(&segs, &[0, 1, 2, 3]);
        for &idx in &levels[0] {
            compute_pressure(&mut states, idx);
        }
        for state in &states {
            let p = state.forward_pressure.expect("pressure computed");
            for &f in &state.forward {
                assert!(p >= states[f].forward_pressure.unwrap() + 1);
            }
        }
    }
}
