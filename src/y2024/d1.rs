use {
    crate::*,
    nom::{
        character::complete::{line_ending, space1},
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    std::collections::HashMap,
};

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    left_list: Vec<u32>,
    right_list: Vec<u32>,
}

impl Solution {
    fn total_distance(&self) -> u32 {
        let mut left_list: Vec<u32> = self.left_list.clone();
        let mut right_list: Vec<u32> = self.right_list.clone();

        left_list.sort_unstable();
        right_list.sort_unstable();

        left_list
            .into_iter()
            .zip(right_list)
            .map(|(left, right)| left.abs_diff(right))
            .sum()
    }

    fn similarity_score(&self) -> u32 {
        let mut right_counts: HashMap<u32, u32> = HashMap::new();

        for right in self.right_list.iter().copied() {
            *right_counts.entry(right).or_default() += 1_u32;
        }

        self.left_list
            .iter()
            .map(|left| left * right_counts.get(left).copied().unwrap_or_default())
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(
                separated_pair(parse_integer::<u32>, space1, parse_integer::<u32>),
                opt(line_ending),
            )),
            |pairs: Vec<(u32, u32)>| {
                let (left_list, right_list): (Vec<u32>, Vec<u32>) = pairs.into_iter().unzip();

                Self {
                    left_list,
                    right_list,
                }
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.total_distance());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.similarity_score());
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
        3   4\n\
        4   3\n\
        2   5\n\
        1   3\n\
        3   9\n\
        3   3\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution {
            left_list: vec![3_u32, 4_u32, 2_u32, 1_u32, 3_u32, 3_u32],
            right_list: vec![4_u32, 3_u32, 5_u32, 3_u32, 9_u32, 3_u32],
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_total_distance() {
        assert_eq!(solution().total_distance(), 11_u32);
    }

    #[test]
    fn test_similarity_score() {
        assert_eq!(solution().similarity_score(), 31_u32);
    }
}
