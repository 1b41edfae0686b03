use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::anychar,
        combinator::{map, value},
        error::Error,
        multi::many0,
        sequence::{delimited, separated_pair},
        Err, IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
enum Instruction {
    Mul(u32, u32),
    Do,
    Dont,
}

impl Parse for Instruction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map(
                delimited(
                    tag("mul("),
                    separated_pair(parse_integer::<u32>, tag(","), parse_integer::<u32>),
                    tag(")"),
                ),
                |(a, b)| Self::Mul(a, b),
            ),
            value(Self::Dont, tag("don't()")),
            value(Self::Do, tag("do()")),
        ))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Instruction>);

impl Solution {
    fn mul_sum(&self) -> u32 {
        self.0
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(a, b) => a * b,
                _ => 0_u32,
            })
            .sum()
    }

    fn enabled_mul_sum(&self) -> u32 {
        self.0
            .iter()
            .fold((0_u32, true), |(sum, enabled), instruction| {
                match instruction {
                    Instruction::Mul(a, b) => (sum + if enabled { a * b } else { 0_u32 }, enabled),
                    Instruction::Do => (sum, true),
                    Instruction::Dont => (sum, false),
                }
            })
            .0
    }
}

impl Parse for Solution {
    /// Corrupted memory is scanned one byte at a time: anything that isn't a valid instruction at
    /// the current offset is discarded.
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(alt((
                map(Instruction::parse, Some),
                value(None, anychar),
            ))),
            |instructions: Vec<Option<Instruction>>| {
                Self(instructions.into_iter().flatten().collect())
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.mul_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.enabled_mul_sum());
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
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))\n",
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))\n",
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
    fn test_try_from_str() {
        use Instruction::*;

        assert_eq!(
            solution(0_usize).0,
            vec![Mul(2_u32, 4_u32), Mul(5_u32, 5_u32), Mul(11_u32, 8_u32), Mul(8_u32, 5_u32)]
        );
        assert_eq!(
            solution(1_usize).0,
            vec![
                Mul(2_u32, 4_u32),
                Dont,
                Mul(5_u32, 5_u32),
                Mul(11_u32, 8_u32),
                Do,
                Mul(8_u32, 5_u32),
            ]
        );
    }

    #[test]
    fn test_mul_sum() {
        assert_eq!(solution(0_usize).mul_sum(), 161_u32);
    }

    #[test]
    fn test_enabled_mul_sum() {
        assert_eq!(solution(1_usize).enabled_mul_sum(), 48_u32);
    }
}
