use {
    crate::*,
    glam::IVec2,
    nom::{combinator::map, error::Error, Err, IResult},
    strum::IntoEnumIterator,
};

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum PipeCell {
        Vertical = VERTICAL = b'|',
        Horizontal = HORIZONTAL = b'-',
        NorthEastBend = NORTH_EAST_BEND = b'L',
        NorthWestBend = NORTH_WEST_BEND = b'J',
        SouthWestBend = SOUTH_WEST_BEND = b'7',
        SouthEastBend = SOUTH_EAST_BEND = b'F',
        #[default]
        Ground = GROUND = b'.',
        Start = START = b'S',
    }
}

impl PipeCell {
    fn connections(self) -> Option<[Direction; 2_usize]> {
        use Direction::*;

        match self {
            Self::Vertical => Some([North, South]),
            Self::Horizontal => Some([East, West]),
            Self::NorthEastBend => Some([North, East]),
            Self::NorthWestBend => Some([North, West]),
            Self::SouthWestBend => Some([South, West]),
            Self::SouthEastBend => Some([South, East]),
            _ => None,
        }
    }

    /// The direction the animal leaves this cell in, given the direction it was travelling when it
    /// entered, or `None` if the pipe doesn't connect back the way it came.
    fn exit_direction(self, entry_direction: Direction) -> Option<Direction> {
        self.connections().and_then(|connections| {
            let back: Direction = entry_direction.rev();

            if connections[0_usize] == back {
                Some(connections[1_usize])
            } else if connections[1_usize] == back {
                Some(connections[0_usize])
            } else {
                None
            }
        })
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<PipeCell>);

impl Solution {
    fn doubled_shoelace_term(a: IVec2, b: IVec2) -> i64 {
        a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
    }

    /// Walks the loop from the start cell, returning its length and twice its shoelace area.
    fn traverse_loop(&self) -> Option<(usize, i64)> {
        let start: IVec2 = self.0.try_find_single_position_with_cell(&PipeCell::Start)?;

        Direction::iter().find_map(|start_direction| {
            let mut direction: Direction = start_direction;
            let mut prev: IVec2 = start;
            let mut pos: IVec2 = start + direction.vec();
            let mut len: usize = 1_usize;
            let mut doubled_area: i64 = Self::doubled_shoelace_term(prev, pos);

            while pos != start {
                if len > self.0.area() {
                    return None;
                }

                direction = self.0.get(pos)?.exit_direction(direction)?;
                prev = pos;
                pos += direction.vec();
                len += 1_usize;
                doubled_area += Self::doubled_shoelace_term(prev, pos);
            }

            Some((len, doubled_area))
        })
    }

    fn farthest_loop_distance(&self) -> usize {
        self.traverse_loop()
            .map(|(len, _)| len / 2_usize)
            .unwrap_or_default()
    }

    /// Pick's theorem: the interior cell count is the loop's area minus half its boundary cell
    /// count, plus one.
    fn enclosed_tile_count(&self) -> i64 {
        self.traverse_loop()
            .map(|(len, doubled_area)| doubled_area.abs() / 2_i64 - len as i64 / 2_i64 + 1_i64)
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
        dbg!(self.farthest_loop_distance());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.enclosed_tile_count());
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

    const SOLUTION_STRS: &'static [&'static str] = &[
        "\
        .....\n\
        .S-7.\n\
        .|.|.\n\
        .L-J.\n\
        .....\n",
        "\
        ..F7.\n\
        .FJ|.\n\
        SJ.L7\n\
        |F--J\n\
        LJ...\n",
        "\
        ...........\n\
        .S-------7.\n\
        .|F-----7|.\n\
        .||.....||.\n\
        .||.....||.\n\
        .|L-7.F-J|.\n\
        .|..|.|..|.\n\
        .L--J.L--J.\n\
        ...........\n",
    ];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            SOLUTION_STRS
                .iter()
                .map(|solution_str| (*solution_str).try_into().unwrap())
                .collect()
        })[index]
    }

    #[test]
    fn test_exit_direction() {
        assert_eq!(
            PipeCell::NorthEastBend.exit_direction(Direction::South),
            Some(Direction::East)
        );
        assert_eq!(
            PipeCell::Horizontal.exit_direction(Direction::West),
            Some(Direction::West)
        );
        assert_eq!(PipeCell::Vertical.exit_direction(Direction::East), None);
    }

    #[test]
    fn test_traverse_loop() {
        assert_eq!(solution(0_usize).traverse_loop().map(|(len, _)| len), Some(8_usize));
    }

    #[test]
    fn test_farthest_loop_distance() {
        assert_eq!(solution(0_usize).farthest_loop_distance(), 4_usize);
        assert_eq!(solution(1_usize).farthest_loop_distance(), 8_usize);
    }

    #[test]
    fn test_enclosed_tile_count() {
        assert_eq!(solution(0_usize).enclosed_tile_count(), 1_i64);
        assert_eq!(solution(2_usize).enclosed_tile_count(), 4_i64);
    }
}
