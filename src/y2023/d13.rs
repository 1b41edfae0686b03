use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::line_ending,
        combinator::map,
        error::Error,
        multi::separated_list1,
        Err, IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Grid2D<Pixel>>);

impl Solution {
    const SMUDGE_COUNT: u32 = 1_u32;

    /// The number of cell mismatches across a horizontal mirror line above row `row`.
    fn row_mismatches(pattern: &Grid2D<Pixel>, row: i32) -> u32 {
        let dimensions: IVec2 = pattern.dimensions();

        (0_i32..row.min(dimensions.y - row))
            .map(|offset| {
                let row_a: i32 = row - 1_i32 - offset;
                let row_b: i32 = row + offset;

                (0_i32..dimensions.x)
                    .filter(|x| {
                        pattern.get(IVec2::new(*x, row_a)) != pattern.get(IVec2::new(*x, row_b))
                    })
                    .count() as u32
            })
            .sum()
    }

    fn col_mismatches(pattern: &Grid2D<Pixel>, col: i32) -> u32 {
        let dimensions: IVec2 = pattern.dimensions();

        (0_i32..col.min(dimensions.x - col))
            .map(|offset| {
                let col_a: i32 = col - 1_i32 - offset;
                let col_b: i32 = col + offset;

                (0_i32..dimensions.y)
                    .filter(|y| {
                        pattern.get(IVec2::new(col_a, *y)) != pattern.get(IVec2::new(col_b, *y))
                    })
                    .count() as u32
            })
            .sum()
    }

    fn pattern_summary(pattern: &Grid2D<Pixel>, smudges: u32) -> usize {
        let dimensions: IVec2 = pattern.dimensions();

        (1_i32..dimensions.y)
            .find(|row| Self::row_mismatches(pattern, *row) == smudges)
            .map(|row| row as usize * 100_usize)
            .or_else(|| {
                (1_i32..dimensions.x)
                    .find(|col| Self::col_mismatches(pattern, *col) == smudges)
                    .map(|col| col as usize)
            })
            .unwrap_or_default()
    }

    fn summary(&self, smudges: u32) -> usize {
        self.0
            .iter()
            .map(|pattern| Self::pattern_summary(pattern, smudges))
            .sum()
    }

    fn clean_summary(&self) -> usize {
        self.summary(0_u32)
    }

    fn smudged_summary(&self) -> usize {
        self.summary(Self::SMUDGE_COUNT)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list1(line_ending, Grid2D::parse), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.clean_summary());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.smudged_summary());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
