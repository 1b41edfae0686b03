use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::{preceded, separated_pair, terminated, tuple},
        Err, IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Default)]
struct CubeSet {
    red: u32,
    green: u32,
    blue: u32,
}

impl CubeSet {
    fn contains(&self, other: &Self) -> bool {
        self.red >= other.red && self.green >= other.green && self.blue >= other.blue
    }

    fn max(&self, other: &Self) -> Self {
        Self {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

impl Parse for CubeSet {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_list1(
                tag(", "),
                separated_pair(
                    parse_integer::<u32>,
                    tag(" "),
                    alt((tag("red"), tag("green"), tag("blue"))),
                ),
            ),
            |counts: Vec<(u32, &str)>| {
                counts
                    .into_iter()
                    .fold(Self::default(), |mut cube_set, (count, color)| {
                        match color {
                            "red" => cube_set.red = count,
                            "green" => cube_set.green = count,
                            _ => cube_set.blue = count,
                        }

                        cube_set
                    })
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Game {
    id: u32,
    cube_sets: Vec<CubeSet>,
}

impl Game {
    fn is_possible(&self, bag: &CubeSet) -> bool {
        self.cube_sets.iter().all(|cube_set| bag.contains(cube_set))
    }

    fn min_cube_set(&self) -> CubeSet {
        self.cube_sets
            .iter()
            .fold(CubeSet::default(), |min_cube_set, cube_set| {
                min_cube_set.max(cube_set)
            })
    }
}

impl Parse for Game {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                preceded(tag("Game "), parse_integer::<u32>),
                preceded(tag(": "), separated_list1(tag("; "), CubeSet::parse)),
            )),
            |(id, cube_sets)| Self { id, cube_sets },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Game>);

impl Solution {
    const BAG: CubeSet = CubeSet {
        red: 12_u32,
        green: 13_u32,
        blue: 14_u32,
    };

    fn possible_game_id_sum(&self) -> u32 {
        self.0
            .iter()
            .filter(|game| game.is_possible(&Self::BAG))
            .map(|game| game.id)
            .sum()
    }

    fn min_cube_set_power_sum(&self) -> u32 {
        self.0.iter().map(|game| game.min_cube_set().power()).sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Game::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.possible_game_id_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.min_cube_set_power_sum());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
