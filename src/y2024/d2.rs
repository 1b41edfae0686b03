use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::terminated,
        Err, IResult,
    },
    std::ops::RangeInclusive,
};

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Vec<i32>>);

impl Solution {
    const SAFE_INCREASE: RangeInclusive<i32> = 1_i32..=3_i32;
    const SAFE_DECREASE: RangeInclusive<i32> = -3_i32..=-1_i32;

    fn is_safe(levels: &[i32]) -> bool {
        let all_steps_within = |range: RangeInclusive<i32>| {
            levels
                .windows(2_usize)
                .all(|window| range.contains(&(window[1_usize] - window[0_usize])))
        };

        all_steps_within(Self::SAFE_INCREASE) || all_steps_within(Self::SAFE_DECREASE)
    }

    fn is_safe_dampened(levels: &[i32]) -> bool {
        Self::is_safe(levels)
            || (0_usize..levels.len()).any(|skip| {
                let dampened_levels: Vec<i32> = levels
                    .iter()
                    .enumerate()
                    .filter_map(|(index, level)| (index != skip).then_some(*level))
                    .collect();

                Self::is_safe(&dampened_levels)
            })
    }

    fn safe_report_count(&self) -> usize {
        self.0.iter().filter(|levels| Self::is_safe(levels)).count()
    }

    fn dampened_safe_report_count(&self) -> usize {
        self.0
            .iter()
            .filter(|levels| Self::is_safe_dampened(levels))
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(
                separated_list1(tag(" "), parse_integer::<i32>),
                opt(line_ending),
            )),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.safe_report_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.dampened_safe_report_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
