use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    nom::{combinator::map, error::Error, Err, IResult},
    strum::{EnumCount, IntoEnumIterator},
};

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum ContraptionCell {
        #[default]
        Empty = EMPTY = b'.',
        ForwardMirror = FORWARD_MIRROR = b'/',
        BackwardMirror = BACKWARD_MIRROR = b'\\',
        VerticalSplitter = VERTICAL_SPLITTER = b'|',
        HorizontalSplitter = HORIZONTAL_SPLITTER = b'-',
    }
}

impl ContraptionCell {
    /// The direction(s) a beam heading `direction` leaves this cell in.
    fn outgoing(self, direction: Direction) -> (Direction, Option<Direction>) {
        match self {
            Self::Empty => (direction, None),
            Self::ForwardMirror => (
                if direction.is_north_or_south() {
                    direction.next()
                } else {
                    direction.prev()
                },
                None,
            ),
            Self::BackwardMirror => (
                if direction.is_north_or_south() {
                    direction.prev()
                } else {
                    direction.next()
                },
                None,
            ),
            Self::VerticalSplitter => {
                if direction.is_north_or_south() {
                    (direction, None)
                } else {
                    (Direction::North, Some(Direction::South))
                }
            }
            Self::HorizontalSplitter => {
                if direction.is_north_or_south() {
                    (Direction::East, Some(Direction::West))
                } else {
                    (direction, None)
                }
            }
        }
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<ContraptionCell>);

impl Solution {
    /// Follows a beam (and its splits) until every (cell, direction) state repeats, tracking
    /// visited states in a bit set with `Direction::COUNT` bits per cell.
    fn energized_cell_count(&self, start_pos: IVec2, start_direction: Direction) -> usize {
        let mut visited: BitVec = bitvec![0; Direction::COUNT * self.0.area()];
        let mut beam_stack: Vec<(IVec2, Direction)> = vec![(start_pos, start_direction)];

        while let Some((pos, direction)) = beam_stack.pop() {
            let Some(cell_index) = self.0.try_index_from_pos(pos) else {
                continue;
            };
            let state_index: usize = Direction::COUNT * cell_index + direction as usize;

            if visited[state_index] {
                continue;
            }

            visited.set(state_index, true);

            let (direction_a, direction_b): (Direction, Option<Direction>) =
                self.0.cells()[cell_index].outgoing(direction);

            beam_stack.push((pos + direction_a.vec(), direction_a));

            if let Some(direction_b) = direction_b {
                beam_stack.push((pos + direction_b.vec(), direction_b));
            }
        }

        visited
            .chunks_exact(Direction::COUNT)
            .filter(|cell_states| cell_states.any())
            .count()
    }

    fn top_left_energized_cell_count(&self) -> usize {
        self.energized_cell_count(IVec2::ZERO, Direction::East)
    }

    fn max_energized_cell_count(&self) -> usize {
        Direction::iter()
            .flat_map(|edge_direction| {
                let beam_direction: Direction = edge_direction.next();

                CellIter2D::corner(&self.0, edge_direction)
                    .map(move |start_pos| self.energized_cell_count(start_pos, beam_direction))
            })
            .max()
            .unwrap_or_default()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.top_left_energized_cell_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.max_energized_cell_count());
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
        .|...\\....\n\
        |.-.\\.....\n\
        .....|-...\n\
        ........|.\n\
        ..........\n\
        .........\\\n\
        ..../.\\\\..\n\
        .-.-/..|..\n\
        .|....-|.\\\n\
        ..//.|....\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| SOLUTION_STR.try_into().unwrap())
    }

    #[test]
    fn test_outgoing() {
        use Direction::*;

        assert_eq!(
            ContraptionCell::ForwardMirror.outgoing(East),
            (North, None)
        );
        assert_eq!(
            ContraptionCell::BackwardMirror.outgoing(East),
            (South, None)
        );
        assert_eq!(
            ContraptionCell::VerticalSplitter.outgoing(West),
            (North, Some(South))
        );
        assert_eq!(ContraptionCell::HorizontalSplitter.outgoing(West), (West, None));
    }

    #[test]
    fn test_top_left_energized_cell_count() {
        assert_eq!(solution().top_left_energized_cell_count(), 46_usize);
    }

    #[test]
    fn test_max_energized_cell_count() {
        assert_eq!(solution().max_energized_cell_count(), 51_usize);
    }
}
