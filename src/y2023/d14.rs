use {
    crate::*,
    glam::IVec2,
    nom::{combinator::map, error::Error, Err, IResult},
    std::collections::HashMap,
};

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum DishCell {
        #[default]
        Empty = EMPTY = b'.',
        Rounded = ROUNDED = b'O',
        Cube = CUBE = b'#',
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<DishCell>);

impl Solution {
    const SPIN_CYCLES: usize = 1_000_000_000_usize;
    const SPIN_DIRECTIONS: [Direction; 4_usize] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    /// Rolls every rounded rock as far toward `direction` as it can go. Lines are visited starting
    /// from the edge the rocks pile against, tracking the next free position per line.
    fn tilt(dish: &mut Grid2D<DishCell>, direction: Direction) {
        let dimensions: IVec2 = dish.dimensions();
        let into_line: Direction = direction.rev();

        for line_start in CellIter2D::corner_for_dimensions(dimensions, direction.next()) {
            let mut free: IVec2 = line_start;

            for pos in CellIter2D::until_boundary_for_dimensions(dimensions, line_start, into_line)
            {
                let index: usize = dish.index_from_pos(pos);

                match dish.cells()[index] {
                    DishCell::Rounded => {
                        let free_index: usize = dish.index_from_pos(free);

                        dish.cells_mut()[index] = DishCell::Empty;
                        dish.cells_mut()[free_index] = DishCell::Rounded;
                        free += into_line.vec();
                    }
                    DishCell::Cube => {
                        free = pos + into_line.vec();
                    }
                    DishCell::Empty => {}
                }
            }
        }
    }

    fn spin_cycle(dish: &mut Grid2D<DishCell>) {
        for direction in Self::SPIN_DIRECTIONS {
            Self::tilt(dish, direction);
        }
    }

    fn north_load(dish: &Grid2D<DishCell>) -> u32 {
        let height: i32 = dish.dimensions().y;

        dish.iter_positions_with_cell(&DishCell::Rounded)
            .map(|pos| (height - pos.y) as u32)
            .sum()
    }

    fn tilted_north_load(&self) -> u32 {
        let mut dish: Grid2D<DishCell> = self.0.clone();

        Self::tilt(&mut dish, Direction::North);

        Self::north_load(&dish)
    }

    /// The dish state becomes periodic quickly, so detect the cycle and only run the remainder.
    fn spun_north_load(&self, verbose: bool) -> u32 {
        let mut dish: Grid2D<DishCell> = self.0.clone();
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut cycle_index: usize = 0_usize;

        while cycle_index < Self::SPIN_CYCLES {
            let dish_string: String = (&dish).into();

            if let Some(period_start) = seen.get(&dish_string) {
                let period: usize = cycle_index - period_start;
                let remaining: usize = (Self::SPIN_CYCLES - cycle_index) % period;

                if verbose {
                    dbg!(period_start, period, remaining);
                }

                for _ in 0_usize..remaining {
                    Self::spin_cycle(&mut dish);
                }

                return Self::north_load(&dish);
            }

            seen.insert(dish_string, cycle_index);
            Self::spin_cycle(&mut dish);
            cycle_index += 1_usize;
        }

        Self::north_load(&dish)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.tilted_north_load());
    }

    fn q2_internal(&mut self, args: &QuestionArgs) {
        dbg!(self.spun_north_load(args.verbose));
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
        O....#....\n\
        O.OO#....#\n\
        .....##...\n\
        OO.#O....O\n\
        .O.....O#.\n\
        O.#..O.#.#\n\
        ..O..#O..O\n\
        .......O..\n\
        #....###..\n\
        #OO..#....\n";

    const TILTED_NORTH_STR: &'static str = "\
        OOOO.#.O..\n\
        OO..#....#\n\
        OO..O##..O\n\
        O..#.OO...\n\
        ........#.\n\
        ..#....#.#\n\
        ..O..#.O.O\n\
        ..O.......\n\
        #....###..\n\
        #....#....\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| SOLUTION_STR.try_into().unwrap())
    }

    #[test]
    fn test_tilt_north() {
        let mut dish: Grid2D<DishCell> = solution().0.clone();

        Solution::tilt(&mut dish, Direction::North);

        assert_eq!(String::from(&dish), TILTED_NORTH_STR);
    }

    #[test]
    fn test_tilted_north_load() {
        assert_eq!(solution().tilted_north_load(), 136_u32);
    }

    #[test]
    fn test_spun_north_load() {
        assert_eq!(solution().spun_north_load(false), 64_u32);
    }
}
