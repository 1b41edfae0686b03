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
};

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Vec<i64>>);

impl Solution {
    fn next_value(history: &[i64]) -> i64 {
        if history.iter().all(|value| *value == 0_i64) {
            0_i64
        } else {
            let differences: Vec<i64> = history
                .windows(2_usize)
                .map(|window| window[1_usize] - window[0_usize])
                .collect();

            history.last().copied().unwrap_or_default() + Self::next_value(&differences)
        }
    }

    fn previous_value(history: &[i64]) -> i64 {
        let reversed: Vec<i64> = history.iter().rev().copied().collect();

        Self::next_value(&reversed)
    }

    fn next_value_sum(&self) -> i64 {
        self.0.iter().map(|history| Self::next_value(history)).sum()
    }

    fn previous_value_sum(&self) -> i64 {
        self.0
            .iter()
            .map(|history| Self::previous_value(history))
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(
                separated_list1(tag(" "), parse_integer::<i64>),
                opt(line_ending),
            )),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.next_value_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.previous_value_sum());
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
        0 3 6 9 12 15\n\
        1 3 6 10 15 21\n\
        10 13 16 21 30 45\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            Solution(vec![
                vec![0_i64, 3_i64, 6_i64, 9_i64, 12_i64, 15_i64],
                vec![1_i64, 3_i64, 6_i64, 10_i64, 15_i64, 21_i64],
                vec![10_i64, 13_i64, 16_i64, 21_i64, 30_i64, 45_i64],
            ])
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_next_value() {
        assert_eq!(
            solution()
                .0
                .iter()
                .map(|history| Solution::next_value(history))
                .collect::<Vec<i64>>(),
            vec![18_i64, 28_i64, 68_i64]
        );
    }

    #[test]
    fn test_next_value_sum() {
        assert_eq!(solution().next_value_sum(), 114_i64);
    }

    #[test]
    fn test_previous_value() {
        assert_eq!(Solution::previous_value(&solution().0[2_usize]), 5_i64);
    }

    #[test]
    fn test_previous_value_sum() {
        assert_eq!(solution().previous_value_sum(), 2_i64);
    }
}
