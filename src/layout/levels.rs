use super::*;

/// Do these segments occupy the same vertical space? Half-open test: touching
/// endpoints do not collide.
pub(super) fn collides(a: &Segment, b: &Segment) -> bool {
    a.bottom > b.top && a.top < b.bottom
}

/// Partition segments into stacking levels by greedy first-fit: each segment,
/// taken in `ordered` order, lands in the lowest level none of whose occupants
/// collide with it. Returns the levels as index buckets, preserving per-level
/// insertion order.
pub(super) fn build_levels(segs: &[Segment], ordered: &[usize]) -> Vec<Vec<usize>> {
    let mut levels: Vec<Vec<usize>> = Vec::new();

    for &idx in ordered {
        let seg = &segs[idx];
        let mut placed = None;
        for (li, level) in levels.iter().enumerate() {
            if level.iter().all(|&other| !collides(seg, &segs[other])) {
                placed = Some(li);
                break;
            }
        }
        match placed {
            Some(li) => levels[li].push(idx),
            None => levels.push(vec![idx]),
        }
    }

    levels
}
