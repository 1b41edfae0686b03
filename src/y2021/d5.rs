use {
    crate::*,
    glam::IVec2,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    std::collections::HashMap,
};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct VentLine {
    start: IVec2,
    end: IVec2,
}

impl VentLine {
    fn is_axial(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }

    /// All lines are either axial or diagonal at 45 degrees, so stepping by the component-wise
    /// sign of the delta visits every covered position.
    fn iter_positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        let delta: IVec2 = self.end - self.start;
        let step: IVec2 = delta.signum();
        let len: i32 = delta.abs().max_element() + 1_i32;

        (0_i32..len).map(move |index| self.start + step * index)
    }

    fn parse_position<'i>(input: &'i str) -> IResult<&'i str, IVec2> {
        map(
            separated_pair(parse_integer::<i32>, tag(","), parse_integer::<i32>),
            |(x, y)| IVec2::new(x, y),
        )(input)
    }
}

impl Parse for VentLine {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(Self::parse_position, tag(" -> "), Self::parse_position),
            |(start, end)| Self { start, end },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<VentLine>);

impl Solution {
    fn overlap_count(&self, include_diagonals: bool) -> usize {
        let mut counts: HashMap<IVec2, u32> = HashMap::new();

        for vent_line in self
            .0
            .iter()
            .filter(|vent_line| include_diagonals || vent_line.is_axial())
        {
            for pos in vent_line.iter_positions() {
                *counts.entry(pos).or_default() += 1_u32;
            }
        }

        counts.values().filter(|count| **count > 1_u32).count()
    }

    fn axial_overlap_count(&self) -> usize {
        self.overlap_count(false)
    }

    fn full_overlap_count(&self) -> usize {
        self.overlap_count(true)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(VentLine::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.axial_overlap_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.full_overlap_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
