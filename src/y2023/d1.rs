use {
    crate::*,
    nom::{
        character::complete::{line_ending, not_line_ending},
        combinator::{map, opt, verify},
        error::Error,
        multi::many0,
        sequence::terminated,
        Err, IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<String>);

impl Solution {
    const DIGIT_NAMES: [&'static str; 9_usize] = [
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ];

    fn digit_at(line: &str, index: usize, include_names: bool) -> Option<u32> {
        let byte: u8 = line.as_bytes()[index];

        if byte.is_ascii_digit() {
            Some((byte - b'0') as u32)
        } else if include_names {
            Self::DIGIT_NAMES
                .iter()
                .position(|digit_name| line[index..].starts_with(digit_name))
                .map(|digit_name_index| digit_name_index as u32 + 1_u32)
        } else {
            None
        }
    }

    /// Spelled-out digits may overlap ("eightwo"), so every position is checked rather than
    /// consuming matched names.
    fn calibration_value(line: &str, include_names: bool) -> u32 {
        let mut digits = (0_usize..line.len())
            .filter_map(|index| Self::digit_at(line, index, include_names));
        let first: Option<u32> = digits.next();
        let last: Option<u32> = digits.last().or(first);

        first.zip(last).map_or(0_u32, |(first, last)| first * 10_u32 + last)
    }

    fn calibration_value_sum(&self, include_names: bool) -> u32 {
        self.0
            .iter()
            .map(|line| Self::calibration_value(line, include_names))
            .sum()
    }

    fn digit_calibration_value_sum(&self) -> u32 {
        self.calibration_value_sum(false)
    }

    fn full_calibration_value_sum(&self) -> u32 {
        self.calibration_value_sum(true)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(
                map(
                    verify(not_line_ending, |line: &str| !line.is_empty()),
                    String::from,
                ),
                opt(line_ending),
            )),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.digit_calibration_value_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.full_calibration_value_sum());
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
        "\
        1abc2\n\
        pqr3stu8vwx\n\
        a1b2c3d4e5f\n\
        treb7uchet\n",
        "\
        two1nine\n\
        eightwothree\n\
        abcone2threexyz\n\
        xtwone3four\n\
        4nineeightseven2\n\
        zoneight234\n\
        7pqrstsixteen\n",
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
        assert_eq!(
            solution(0_usize).0,
            vec![
                "1abc2".to_owned(),
                "pqr3stu8vwx".to_owned(),
                "a1b2c3d4e5f".to_owned(),
                "treb7uchet".to_owned(),
            ]
        );
    }

    #[test]
    fn test_digit_calibration_value_sum() {
        assert_eq!(solution(0_usize).digit_calibration_value_sum(), 142_u32);
    }

    #[test]
    fn test_calibration_value() {
        assert_eq!(Solution::calibration_value("eightwothree", true), 83_u32);
        assert_eq!(Solution::calibration_value("zoneight234", true), 14_u32);
    }

    #[test]
    fn test_full_calibration_value_sum() {
        assert_eq!(solution(1_usize).full_calibration_value_sum(), 281_u32);
    }
}
