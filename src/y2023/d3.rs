use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::none_of,
        combinator::map,
        error::Error,
        Err, IResult,
    },
    std::collections::{HashMap, HashSet},
};

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq)]
struct SchematicCell(u8);

impl SchematicCell {
    fn is_digit(self) -> bool {
        self.0.is_ascii_digit()
    }

    fn is_symbol(self) -> bool {
        !self.is_digit() && self.0 != b'.'
    }

    fn is_gear(self) -> bool {
        self.0 == b'*'
    }

    fn digit(self) -> u32 {
        (self.0 - b'0') as u32
    }
}

impl Parse for SchematicCell {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(none_of("\r\n"), |c: char| Self(c as u8))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<SchematicCell>);

impl Solution {
    fn iter_neighbors(pos: IVec2) -> impl Iterator<Item = IVec2> {
        (-1_i32..=1_i32).flat_map(move |y| {
            (-1_i32..=1_i32).filter_map(move |x| {
                (x != 0_i32 || y != 0_i32).then(|| pos + IVec2::new(x, y))
            })
        })
    }

    /// Groups horizontally adjacent digit cells into part numbers, returning the groups and a map
    /// from group root to part number value.
    fn part_numbers(&self) -> (DisjointSet, HashMap<usize, u32>) {
        let mut digit_groups: DisjointSet = DisjointSet::new(self.0.area());
        let mut values: HashMap<usize, u32> = HashMap::new();
        let width: usize = self.0.dimensions().x as usize;
        let height: usize = self.0.dimensions().y as usize;

        for y in 0_usize..height {
            let row_start: usize = y * width;
            let mut x: usize = 0_usize;

            while x < width {
                if self.0.cells()[row_start + x].is_digit() {
                    let run_start: usize = row_start + x;
                    let mut value: u32 = 0_u32;

                    while x < width && self.0.cells()[row_start + x].is_digit() {
                        value = value * 10_u32 + self.0.cells()[row_start + x].digit();
                        digit_groups.union(run_start, row_start + x);
                        x += 1_usize;
                    }

                    values.insert(digit_groups.find(run_start), value);
                } else {
                    x += 1_usize;
                }
            }
        }

        (digit_groups, values)
    }

    fn iter_neighboring_groups<'a>(
        &'a self,
        digit_groups: &'a mut DisjointSet,
        pos: IVec2,
    ) -> impl Iterator<Item = usize> + 'a {
        Self::iter_neighbors(pos).filter_map(|neighbor| {
            self.0
                .get(neighbor)
                .filter(|cell| cell.is_digit())
                .map(|_| digit_groups.find(self.0.index_from_pos(neighbor)))
        })
    }

    fn part_number_sum(&self) -> u32 {
        let (mut digit_groups, values): (DisjointSet, HashMap<usize, u32>) = self.part_numbers();
        let mut symbol_adjacent_roots: HashSet<usize> = HashSet::new();

        for pos in self.0.iter_filtered_positions(|cell| cell.is_symbol()) {
            for root in self.iter_neighboring_groups(&mut digit_groups, pos) {
                symbol_adjacent_roots.insert(root);
            }
        }

        symbol_adjacent_roots
            .iter()
            .filter_map(|root| values.get(root))
            .sum()
    }

    fn gear_ratio_sum(&self) -> u32 {
        let (mut digit_groups, values): (DisjointSet, HashMap<usize, u32>) = self.part_numbers();
        let mut gear_ratio_sum: u32 = 0_u32;
        let mut roots: Vec<usize> = Vec::new();

        for pos in self.0.iter_filtered_positions(|cell| cell.is_gear()) {
            roots.clear();

            for root in self.iter_neighboring_groups(&mut digit_groups, pos) {
                if !roots.contains(&root) {
                    roots.push(root);
                }
            }

            if let [root_a, root_b] = roots[..] {
                gear_ratio_sum += values[&root_a] * values[&root_b];
            }
        }

        gear_ratio_sum
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.part_number_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.gear_ratio_sum());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
