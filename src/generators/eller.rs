use std::{collections::HashMap, ops::ControlFlow};

use super::{GenerationStatus, RandomSource, StepSink, check_fresh, sink::Carver};
use crate::{
    error::MazeError,
    maze::{Direction, Grid, WallCandidate},
    structures::DisjointSet,
};

/// Eller's algorithm: carve one row at a time, tracking only which columns of the
/// current row are already connected.
///
/// Columns carry a set label between rows. Labels below `cols` are roots inherited
/// through a vertical passage; fresh singletons get labels counting up from `cols`.
pub fn generate_eller<R, S>(
    grid: &mut Grid,
    rows: usize,
    cols: usize,
    rng: &mut R,
    sink: &mut S,
) -> Result<GenerationStatus, MazeError>
where
    R: RandomSource + ?Sized,
    S: StepSink + ?Sized,
{
    check_fresh(grid, rows, cols)?;

    let mut labels: Vec<usize> = (0..cols).collect();
    let mut next_label = cols;
    let mut carver = Carver::new(grid, sink);
    let mut flow = ControlFlow::Continue(());

    for row in 0..rows {
        let is_last_row = row + 1 == rows;
        let mut sets = seed_row_sets(&labels);

        flow = join_horizontally(&mut carver, &mut sets, row, is_last_row, rng);
        if flow.is_break() || is_last_row {
            break;
        }

        flow = drop_vertically(&mut carver, &mut sets, row, rng);
        if flow.is_break() {
            break;
        }

        // Only after every wall of this row is final: columns with an open bottom keep
        // their set, all others start the next row alone
        labels = (0..cols)
            .map(|col| {
                if carver.grid.has_wall((row, col), Direction::Bottom) {
                    next_label += 1;
                    next_label - 1
                } else {
                    sets.find(col)
                }
            })
            .collect();
    }
    Ok(carver.finish(flow))
}

/// Union-find over the columns of one row, with equally labeled columns pre-joined.
fn seed_row_sets(labels: &[usize]) -> DisjointSet {
    let mut sets = DisjointSet::new(labels.len());
    let mut first_with_label: HashMap<usize, usize> = HashMap::new();
    for (col, &label) in labels.iter().enumerate() {
        match first_with_label.get(&label) {
            Some(&first) => {
                sets.union(first, col);
            }
            None => {
                first_with_label.insert(label, col);
            }
        }
    }
    sets
}

/// Randomly merges adjacent sets of the row; on the last row every distinct pair is merged.
fn join_horizontally<R, S>(
    carver: &mut Carver<'_, S>,
    sets: &mut DisjointSet,
    row: usize,
    is_last_row: bool,
    rng: &mut R,
) -> ControlFlow<()>
where
    R: RandomSource + ?Sized,
    S: StepSink + ?Sized,
{
    for col in 0..sets.len().saturating_sub(1) {
        if (is_last_row || rng.flip()) && sets.union(col, col + 1) {
            carver.carve(WallCandidate {
                row,
                col,
                direction: Direction::Right,
                neighbor_row: row,
                neighbor_col: col + 1,
            })?;
        }
    }
    ControlFlow::Continue(())
}

/// Opens at least one bottom wall per set, choosing a random subset of its columns.
fn drop_vertically<R, S>(
    carver: &mut Carver<'_, S>,
    sets: &mut DisjointSet,
    row: usize,
    rng: &mut R,
) -> ControlFlow<()>
where
    R: RandomSource + ?Sized,
    S: StepSink + ?Sized,
{
    // Sets in order of their leftmost column
    let mut group_of_root: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for col in 0..sets.len() {
        let root = sets.find(col);
        let group = *group_of_root.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[group].push(col);
    }

    for mut members in groups {
        let count = rng.below(members.len()) + 1;
        rng.shuffle(&mut members);
        for &col in &members[..count] {
            carver.carve(WallCandidate {
                row,
                col,
                direction: Direction::Bottom,
                neighbor_row: row + 1,
                neighbor_col: col,
            })?;
        }
    }
    ControlFlow::Continue(())
}
