use {
    super::Parse,
    glam::IVec2,
    nom::{
        character::complete::line_ending,
        combinator::{map_res, opt},
        error::{Error as NomError, ErrorKind as NomErrorKind},
        multi::many1_count,
        sequence::tuple,
        Err, IResult,
    },
    static_assertions::const_assert,
    std::{
        fmt::{Debug, DebugList, Formatter, Result as FmtResult, Write},
        mem::transmute,
        ops::Range,
        str::from_utf8,
    },
    strum::{EnumCount, EnumIter},
};

#[derive(Copy, Clone, Debug, Default, EnumCount, EnumIter, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

const VECS: [IVec2; Direction::COUNT] = [
    Direction::North.vec_internal(),
    Direction::East.vec_internal(),
    Direction::South.vec_internal(),
    Direction::West.vec_internal(),
];

// This guarantees we can safely convert from `u8` to `Direction` by masking the smallest 2 bits,
// which is the same as masking by `MASK`
const_assert!(Direction::COUNT == 4_usize);

impl Direction {
    pub const COUNT_U8: u8 = Self::COUNT as u8;
    pub const MASK: u8 = Self::COUNT_U8 - 1_u8;
    pub const HALF_COUNT: u8 = Self::COUNT_U8 / 2_u8;
    pub const PREV_DELTA: u8 = Self::COUNT_U8 - 1_u8;

    #[inline]
    pub const fn vec(self) -> IVec2 {
        VECS[self as usize]
    }

    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        // SAFETY: See `const_assert` above
        unsafe { transmute(value & Self::MASK) }
    }

    #[inline]
    pub const fn next(self) -> Self {
        Self::from_u8(self as u8 + 1_u8)
    }

    #[inline]
    pub const fn rev(self) -> Self {
        Self::from_u8(self as u8 + Self::HALF_COUNT)
    }

    #[inline]
    pub const fn prev(self) -> Self {
        Self::from_u8(self as u8 + Self::PREV_DELTA)
    }

    pub const fn turn(self, left: bool) -> Self {
        if left {
            self.prev()
        } else {
            self.next()
        }
    }

    pub const fn is_north_or_south(self) -> bool {
        (self as u8 & 1_u8) == 0_u8
    }
}

impl From<Direction> for IVec2 {
    fn from(value: Direction) -> Self {
        value.vec()
    }
}

impl From<u8> for Direction {
    fn from(value: u8) -> Self {
        Self::from_u8(value)
    }
}

impl TryFrom<IVec2> for Direction {
    type Error = ();

    fn try_from(value: IVec2) -> Result<Self, Self::Error> {
        VECS.iter()
            .position(|vec| *vec == value)
            .map(|index| (index as u8).into())
            .ok_or(())
    }
}

impl Direction {
    const fn vec_internal(self) -> IVec2 {
        match self {
            Self::North => IVec2::NEG_Y,
            Self::East => IVec2::X,
            Self::South => IVec2::Y,
            Self::West => IVec2::NEG_X,
        }
    }
}

pub fn manhattan_magnitude_2d(pos: IVec2) -> i32 {
    let abs: IVec2 = pos.abs();

    abs.x + abs.y
}

pub fn manhattan_distance_2d(a: IVec2, b: IVec2) -> i32 {
    manhattan_magnitude_2d(a - b)
}

pub struct SideLen(pub usize);

impl From<SideLen> for IVec2 {
    fn from(side_len: SideLen) -> Self {
        IVec2::new(side_len.0 as i32, side_len.0 as i32)
    }
}

pub fn grid_2d_contains(pos: IVec2, dimensions: IVec2) -> bool {
    (pos.cmpge(IVec2::ZERO) & pos.cmplt(dimensions)).all()
}

pub struct Grid2D<T> {
    cells: Vec<T>,

    /// Should only contain unsigned values, but is signed for ease of use for iterating
    dimensions: IVec2,
}

impl<T> Grid2D<T> {
    pub fn try_from_cells_and_width(cells: Vec<T>, width: usize) -> Option<Self> {
        let cells_len: usize = cells.len();

        (cells_len % width == 0_usize).then(|| Self {
            cells,
            dimensions: IVec2::new(width as i32, (cells_len / width) as i32),
        })
    }

    pub fn empty(dimensions: IVec2) -> Self {
        Self {
            cells: Vec::new(),
            dimensions,
        }
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    #[inline]
    pub fn dimensions(&self) -> IVec2 {
        self.dimensions
    }

    #[inline]
    pub fn area(&self) -> usize {
        (self.dimensions.x * self.dimensions.y) as usize
    }

    #[inline]
    pub fn contains(&self, pos: IVec2) -> bool {
        grid_2d_contains(pos, self.dimensions)
    }

    #[inline]
    pub fn index_from_pos(&self, pos: IVec2) -> usize {
        pos.y as usize * self.dimensions.x as usize + pos.x as usize
    }

    pub fn try_index_from_pos(&self, pos: IVec2) -> Option<usize> {
        self.contains(pos).then(|| self.index_from_pos(pos))
    }

    pub fn pos_from_index(&self, index: usize) -> IVec2 {
        let x: usize = self.dimensions.x as usize;

        IVec2::new((index % x) as i32, (index / x) as i32)
    }

    #[inline(always)]
    pub fn max_dimensions(&self) -> IVec2 {
        self.dimensions - IVec2::ONE
    }

    pub fn get(&self, pos: IVec2) -> Option<&T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &self.cells[index])
    }

    pub fn get_mut(&mut self, pos: IVec2) -> Option<&mut T> {
        self.try_index_from_pos(pos)
            .map(|index: usize| &mut self.cells[index])
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0_usize..self.cells.len()).map(|index| self.pos_from_index(index))
    }

    pub fn iter_filtered_positions<'a, P: Fn(&T) -> bool + 'a>(
        &'a self,
        predicate: P,
    ) -> impl Iterator<Item = IVec2> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, cell)| predicate(cell).then(|| self.pos_from_index(index)))
    }

    pub fn iter_positions_with_cell<'a>(&'a self, target: &'a T) -> impl Iterator<Item = IVec2> + 'a
    where
        T: PartialEq,
    {
        self.iter_filtered_positions(|cell| *cell == *target)
    }

    pub fn try_find_single_position_with_cell(&self, target: &T) -> Option<IVec2>
    where
        T: PartialEq,
    {
        self.iter_positions_with_cell(target)
            .try_fold(None, |prev_pos, curr_pos| {
                prev_pos.is_none().then_some(Some(curr_pos))
            })
            .flatten()
    }
}

impl<T: Clone> Clone for Grid2D<T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            dimensions: self.dimensions,
        }
    }
}

impl<T: Debug> Debug for Grid2D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Grid2D")?;
        let mut y_list: DebugList = f.debug_list();

        for y in 0_i32..self.dimensions.y {
            let start: usize = (y * self.dimensions.x) as usize;

            y_list.entry(&&self.cells[start..(start + self.dimensions.x as usize)]);
        }

        y_list.finish()
    }
}

impl<T: Default> Grid2D<T> {
    pub fn default(dimensions: IVec2) -> Self {
        let capacity: usize = (dimensions.x * dimensions.y) as usize;
        let mut cells: Vec<T> = Vec::with_capacity(capacity);

        cells.resize_with(capacity, T::default);

        Self { cells, dimensions }
    }
}

impl<T: Parse> Parse for Grid2D<T> {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        let mut width: Option<usize> = None;
        let mut cells: Vec<T> = Vec::new();
        let (input, _) = many1_count(map_res(
            tuple((T::parse, opt(line_ending))),
            |(cell, opt_line_ending)| -> Result<(), ()> {
                cells.push(cell);

                if opt_line_ending.is_some() {
                    match width {
                        Some(width) => {
                            if cells.len() % width != 0_usize {
                                Err(())?;
                            }
                        }
                        None => {
                            width = Some(cells.len());
                        }
                    }
                }

                Ok(())
            },
        ))(input)?;

        let width: usize = width.unwrap_or(cells.len());

        if cells.len() % width != 0_usize {
            Err(Err::Failure(NomError::new(input, NomErrorKind::ManyMN)))
        } else {
            Ok((
                input,
                Grid2D::try_from_cells_and_width(cells, width).unwrap(),
            ))
        }
    }
}

impl<T: PartialEq> PartialEq for Grid2D<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions && self.cells == other.cells
    }
}

/// A marker trait to indicate that a type is a single byte, and any possible value is a valid
/// ASCII byte.
///
/// # Safety
///
/// Only implement this on a type that meets the following criteria:
///
/// * `std::mem::size_of::<Self>() == 1_usize`
/// * `std::str::from_utf8(std::mem::transmute::<[Self], [u8]>(value)).is_ok()` for any `value:
///   [Self]`.
pub unsafe trait IsValidAscii {}

impl<T: IsValidAscii> From<&Grid2D<T>> for String {
    fn from(value: &Grid2D<T>) -> Self {
        let width: usize = value.dimensions.x as usize;
        let height: usize = value.dimensions.y as usize;

        // SAFETY: Guaranteed by `T` implementing `IsValidAscii`
        let bytes: &[u8] = unsafe { transmute(value.cells()) };

        let mut string: String = String::with_capacity((width + 1_usize) * height);

        for y in 0_usize..height {
            let start: usize = y * width;
            let row_str: &str = from_utf8(&bytes[start..start + width]).unwrap_or_else(|e| {
                panic!("A grid of `IsValidAscii` cells contained an invalid UTF-8 slice: {e:?}");
            });

            writeln!(&mut string, "{row_str}").unwrap();
        }

        string
    }
}

#[derive(Debug)]
pub enum CellIterFromRangeError {
    PositionsIdentical,
    PositionsNotAligned,
}

pub struct CellIter2D {
    curr: IVec2,
    end: IVec2,
    dir: Direction,
}

impl CellIter2D {
    pub fn corner_for_dimensions(dimensions: IVec2, dir: Direction) -> Self {
        let dir_vec: IVec2 = dir.vec();
        let curr: IVec2 =
            (-dimensions * (dir_vec + dir_vec.perp())).clamp(IVec2::ZERO, dimensions - IVec2::ONE);

        Self::until_boundary_for_dimensions(dimensions, curr, dir)
    }

    pub fn corner<T>(grid: &Grid2D<T>, dir: Direction) -> Self {
        Self::corner_for_dimensions(grid.dimensions(), dir)
    }

    pub fn until_boundary_for_dimensions(dimensions: IVec2, curr: IVec2, dir: Direction) -> Self {
        let dir_vec: IVec2 = dir.vec();
        let end: IVec2 =
            (curr + dir_vec * dimensions).clamp(IVec2::ZERO, dimensions - IVec2::ONE) + dir_vec;

        Self { curr, end, dir }
    }

    pub fn until_boundary<T>(grid: &Grid2D<T>, curr: IVec2, dir: Direction) -> Self {
        Self::until_boundary_for_dimensions(grid.dimensions(), curr, dir)
    }
}

impl Iterator for CellIter2D {
    type Item = IVec2;

    fn next(&mut self) -> Option<Self::Item> {
        (self.curr != self.end).then(|| {
            let prev: IVec2 = self.curr;

            self.curr += self.dir.vec();

            prev
        })
    }
}

impl TryFrom<Range<IVec2>> for CellIter2D {
    type Error = CellIterFromRangeError;

    fn try_from(Range { start, end }: Range<IVec2>) -> Result<Self, Self::Error> {
        use CellIterFromRangeError::*;

        let delta: IVec2 = end - start;

        if delta == IVec2::ZERO {
            Err(PositionsIdentical)
        } else if delta.x != 0_i32 && delta.y != 0_i32 {
            Err(PositionsNotAligned)
        } else {
            let abs: IVec2 = delta.abs();
            let dir: Direction = (delta / (abs.x + abs.y)).try_into().unwrap();

            Ok(Self {
                curr: start,
                end,
                dir,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, strum::IntoEnumIterator};

    #[test]
    fn test_direction_turns() {
        assert_eq!(Direction::North.next(), Direction::East);
        assert_eq!(Direction::North.prev(), Direction::West);
        assert_eq!(Direction::West.rev(), Direction::East);
        assert_eq!(Direction::South.turn(false), Direction::West);
        assert_eq!(Direction::South.turn(true), Direction::East);
    }

    #[test]
    fn test_corner() {
        let grid: Grid2D<()> = Grid2D::empty(SideLen(5_usize).into());

        assert_eq!(
            Direction::iter()
                .flat_map(|dir: Direction| -> CellIter2D { CellIter2D::corner(&grid, dir) })
                .map(|pos: IVec2| -> usize { grid.index_from_pos(pos) })
                .collect::<Vec<usize>>(),
            vec![
                20, 15, 10, 5, 0, // North
                0, 1, 2, 3, 4, // East
                4, 9, 14, 19, 24, // South
                24, 23, 22, 21, 20 // West
            ]
        );
    }

    #[test]
    fn test_cell_iter_try_from_range() {
        assert_eq!(
            CellIter2D::try_from(IVec2::new(2_i32, 1_i32)..IVec2::new(2_i32, 4_i32))
                .unwrap()
                .collect::<Vec<IVec2>>(),
            vec![
                IVec2::new(2_i32, 1_i32),
                IVec2::new(2_i32, 2_i32),
                IVec2::new(2_i32, 3_i32)
            ]
        );
        assert!(matches!(
            CellIter2D::try_from(IVec2::ZERO..IVec2::ZERO),
            Err(CellIterFromRangeError::PositionsIdentical)
        ));
        assert!(matches!(
            CellIter2D::try_from(IVec2::ZERO..IVec2::ONE),
            Err(CellIterFromRangeError::PositionsNotAligned)
        ));
    }

    #[test]
    fn test_grid_parse() {
        let grid: Grid2D<crate::Pixel> = Grid2D::parse("##.\n.#.\n").unwrap().1;

        assert_eq!(grid.dimensions(), IVec2::new(3_i32, 2_i32));
        assert_eq!(
            grid.iter_filtered_positions(|pixel| pixel.is_light())
                .collect::<Vec<IVec2>>(),
            vec![
                IVec2::new(0_i32, 0_i32),
                IVec2::new(1_i32, 0_i32),
                IVec2::new(1_i32, 1_i32)
            ]
        );
    }
}
