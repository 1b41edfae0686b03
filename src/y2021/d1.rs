use {
    crate::*,
    nom::{
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::terminated,
        Err, IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u32>);

impl Solution {
    /// Counts the measurements that are deeper than the measurement `gap` positions earlier.
    ///
    /// Comparing three-measurement window sums reduces to comparing the measurements three
    /// positions apart, since the two windows share their middle measurements.
    fn count_depth_increases(&self, gap: usize) -> usize {
        self.0
            .windows(gap + 1_usize)
            .filter(|depths| depths[gap] > depths[0_usize])
            .count()
    }

    fn depth_increase_count(&self) -> usize {
        self.count_depth_increases(1_usize)
    }

    fn windowed_depth_increase_count(&self) -> usize {
        self.count_depth_increases(3_usize)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(parse_integer::<u32>, opt(line_ending))),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.depth_increase_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.windowed_depth_increase_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
