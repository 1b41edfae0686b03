use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::{many0, many1},
        sequence::{preceded, separated_pair, terminated},
        Err, IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Equation {
    test_value: u64,
    operands: Vec<u64>,
}

impl Equation {
    fn concat_operands(left: u64, right: u64) -> u64 {
        left * 10_u64.pow(digits(right)) + right
    }

    /// Every operator strictly increases the accumulator for positive operands, so branches that
    /// overshoot the test value are pruned.
    fn is_satisfiable_internal(&self, accumulator: u64, operands: &[u64], concat: bool) -> bool {
        match operands.first() {
            None => accumulator == self.test_value,
            Some(operand) => {
                accumulator <= self.test_value
                    && (self.is_satisfiable_internal(accumulator + operand, &operands[1_usize..], concat)
                        || self.is_satisfiable_internal(
                            accumulator * operand,
                            &operands[1_usize..],
                            concat,
                        )
                        || (concat
                            && self.is_satisfiable_internal(
                                Self::concat_operands(accumulator, *operand),
                                &operands[1_usize..],
                                concat,
                            )))
            }
        }
    }

    fn is_satisfiable(&self, concat: bool) -> bool {
        self.operands
            .first()
            .map(|operand| self.is_satisfiable_internal(*operand, &self.operands[1_usize..], concat))
            .unwrap_or_default()
    }
}

impl Parse for Equation {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                parse_integer::<u64>,
                tag(":"),
                many1(preceded(tag(" "), parse_integer::<u64>)),
            ),
            |(test_value, operands)| Self {
                test_value,
                operands,
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Equation>);

impl Solution {
    fn total_calibration_result(&self, concat: bool) -> u64 {
        self.0
            .iter()
            .filter(|equation| equation.is_satisfiable(concat))
            .map(|equation| equation.test_value)
            .sum()
    }

    fn add_mul_calibration_result(&self) -> u64 {
        self.total_calibration_result(false)
    }

    fn concat_calibration_result(&self) -> u64 {
        self.total_calibration_result(true)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Equation::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.add_mul_calibration_result());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.concat_calibration_result());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
