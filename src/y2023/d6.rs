use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::{line_ending, space1},
        combinator::{map_res, opt},
        error::Error,
        multi::many1,
        sequence::{preceded, tuple},
        Err, IResult,
    },
};

#[cfg_attr(test, derive(PartialEq))]
#[derive(Clone, Copy, Debug, Default)]
struct Race {
    time: u64,
    distance: u64,
}

impl Race {
    fn beats_record(&self, hold: u64) -> bool {
        (self.time - hold) * hold > self.distance
    }

    /// The distance travelled is unimodal in the hold time and symmetric about `time / 2`, so a
    /// binary search over the first half finds the earliest winning hold.
    fn winning_hold_count(&self) -> u64 {
        let mut low: u64 = 0_u64;
        let mut high: u64 = self.time / 2_u64;

        if !self.beats_record(high) {
            return 0_u64;
        }

        while low < high {
            let mid: u64 = (low + high) / 2_u64;

            if self.beats_record(mid) {
                high = mid;
            } else {
                low = mid + 1_u64;
            }
        }

        self.time + 1_u64 - 2_u64 * low
    }

    fn concat(self, other: Self) -> Self {
        let concat_fields = |left: u64, right: u64| left * 10_u64.pow(digits(right)) + right;

        Self {
            time: concat_fields(self.time, other.time),
            distance: concat_fields(self.distance, other.distance),
        }
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Race>);

impl Solution {
    fn winning_hold_count_product(&self) -> u64 {
        self.0.iter().map(Race::winning_hold_count).product()
    }

    /// The races read as a single race with the number columns concatenated.
    fn kerned_race(&self) -> Race {
        self.0
            .iter()
            .fold(Race::default(), |kerned_race, race| kerned_race.concat(*race))
    }

    fn kerned_winning_hold_count(&self) -> u64 {
        self.kerned_race().winning_hold_count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_res(
            tuple((
                preceded(tag("Time:"), many1(preceded(space1, parse_integer::<u64>))),
                preceded(
                    tuple((line_ending, tag("Distance:"))),
                    many1(preceded(space1, parse_integer::<u64>)),
                ),
                opt(line_ending),
            )),
            |(times, distances, _): (Vec<u64>, Vec<u64>, _)| -> Result<Self, ()> {
                (times.len() == distances.len())
                    .then(|| {
                        Self(
                            times
                                .into_iter()
                                .zip(distances)
                                .map(|(time, distance)| Race { time, distance })
                                .collect(),
                        )
                    })
                    .ok_or(())
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.winning_hold_count_product());
    }

    fn q2_internal(&mut self, args: &QuestionArgs) {
        dbg!(self.kerned_winning_hold_count());

        if args.verbose {
            dbg!(self.kerned_race());
        }
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
