use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{preceded, terminated},
        Err, IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
enum Command {
    Forward(i32),
    Down(i32),
    Up(i32),
}

impl Parse for Command {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map(preceded(tag("forward "), parse_integer::<i32>), Self::Forward),
            map(preceded(tag("down "), parse_integer::<i32>), Self::Down),
            map(preceded(tag("up "), parse_integer::<i32>), Self::Up),
        ))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Command>);

impl Solution {
    fn position_product(&self) -> i32 {
        let (horizontal, depth): (i32, i32) =
            self.0
                .iter()
                .fold((0_i32, 0_i32), |(horizontal, depth), command| {
                    match *command {
                        Command::Forward(distance) => (horizontal + distance, depth),
                        Command::Down(distance) => (horizontal, depth + distance),
                        Command::Up(distance) => (horizontal, depth - distance),
                    }
                });

        horizontal * depth
    }

    fn aimed_position_product(&self) -> i32 {
        let (horizontal, depth, _): (i32, i32, i32) =
            self.0
                .iter()
                .fold((0_i32, 0_i32, 0_i32), |(horizontal, depth, aim), command| {
                    match *command {
                        Command::Forward(distance) => {
                            (horizontal + distance, depth + aim * distance, aim)
                        }
                        Command::Down(distance) => (horizontal, depth, aim + distance),
                        Command::Up(distance) => (horizontal, depth, aim - distance),
                    }
                });

        horizontal * depth
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Command::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.position_product());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.aimed_position_product());
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
        forward 5\n\
        down 5\n\
        forward 8\n\
        up 3\n\
        down 8\n\
        forward 2\n";

    fn solution() -> &'static Solution {
        use Command::*;

        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| {
            Solution(vec![
                Forward(5_i32),
                Down(5_i32),
                Forward(8_i32),
                Up(3_i32),
                Down(8_i32),
                Forward(2_i32),
            ])
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_position_product() {
        assert_eq!(solution().position_product(), 150_i32);
    }

    #[test]
    fn test_aimed_position_product() {
        assert_eq!(solution().aimed_position_product(), 900_i32);
    }
}
