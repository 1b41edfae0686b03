use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    nom::{combinator::map, error::Error, Err, IResult},
    rayon::iter::{IntoParallelIterator, ParallelIterator},
    strum::EnumCount,
};

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum LabCell {
        #[default]
        Empty = EMPTY = b'.',
        Obstruction = OBSTRUCTION = b'#',
        Guard = GUARD = b'^',
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<LabCell>);

impl Solution {
    /// Walks the guard's patrol, recording each (cell, direction) state. Returns `None` if the
    /// patrol loops instead of leaving the grid.
    fn patrol(&self, extra_obstruction: Option<IVec2>) -> Option<BitVec> {
        let start: IVec2 = self.0.try_find_single_position_with_cell(&LabCell::Guard)?;
        let mut state_visited: BitVec = bitvec![0; Direction::COUNT * self.0.area()];
        let mut pos: IVec2 = start;
        let mut direction: Direction = Direction::North;

        loop {
            let state_index: usize =
                Direction::COUNT * self.0.index_from_pos(pos) + direction as usize;

            if state_visited[state_index] {
                return None;
            }

            state_visited.set(state_index, true);

            let next: IVec2 = pos + direction.vec();

            if !self.0.contains(next) {
                return Some(state_visited);
            }

            if self.0.get(next) == Some(&LabCell::Obstruction) || extra_obstruction == Some(next) {
                direction = direction.next();
            } else {
                pos = next;
            }
        }
    }

    fn visited_positions(&self) -> Vec<IVec2> {
        self.patrol(None)
            .map(|state_visited| {
                state_visited
                    .chunks_exact(Direction::COUNT)
                    .enumerate()
                    .filter_map(|(cell_index, cell_states)| {
                        cell_states.any().then(|| self.0.pos_from_index(cell_index))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn visited_position_count(&self) -> usize {
        self.visited_positions().len()
    }

    /// Only positions along the unobstructed patrol can change it, so those are the only
    /// obstruction candidates worth simulating.
    fn looping_obstruction_count(&self) -> usize {
        let start: Option<IVec2> = self.0.try_find_single_position_with_cell(&LabCell::Guard);

        self.visited_positions()
            .into_par_iter()
            .filter(|pos| Some(*pos) != start && self.patrol(Some(*pos)).is_none())
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.visited_position_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.looping_obstruction_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STR: &'static str = "\
        ....#.....\n\
        .........#\n\
        ..........\n\
        ..#.......\n\
        .......#..\n\
        ..........\n\
        .#..^.....\n\
        ........#.\n\
        #.........\n\
        ......#...\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| SOLUTION_STR.try_into().unwrap())
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            solution().0.try_find_single_position_with_cell(&LabCell::Guard),
            Some(IVec2::new(4_i32, 6_i32))
        );
    }

    #[test]
    fn test_visited_position_count() {
        assert_eq!(solution().visited_position_count(), 41_usize);
    }

    #[test]
    fn test_looping_obstruction_count() {
        assert_eq!(solution().looping_obstruction_count(), 6_usize);
    }
}
