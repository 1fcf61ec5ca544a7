/// Outcome of sliding one line toward its position 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompactedLine {
    pub values: Vec<u32>,
    /// Number of tiles left in the line; they sit at positions `0..occupied`.
    pub occupied: usize,
    pub changed: bool,
    /// Sum of the tiles created by merges.
    pub merged_points: u32,
}

/// Slides and merges `line`, given in slide order.
///
/// A tile created by a merge is never merged again in the same pass, so
/// `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`. Equal tiles whose sum does not fit
/// in a `u32` stay apart.
pub fn compact_line(line: &[u32]) -> CompactedLine {
    let mut values: Vec<u32> = Vec::with_capacity(line.len());
    let mut mergeable: Option<u32> = None;
    let mut merged_points: u32 = 0;

    for &value in line.iter().filter(|&&v| v != 0) {
        if mergeable == Some(value)
            && let Some(last) = values.last_mut()
            && let Some(merged) = last.checked_add(value)
        {
            *last = merged;
            merged_points = merged_points.saturating_add(merged);
            mergeable = None;
        } else {
            values.push(value);
            mergeable = Some(value);
        }
    }

    let occupied = values.len();
    values.resize(line.len(), 0);
    let changed = values.as_slice() != line;

    CompactedLine {
        values,
        occupied,
        changed,
        merged_points,
    }
}
