use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::{line_ending, space1},
        combinator::{map, opt},
        error::Error,
        multi::{many0, many1},
        sequence::{preceded, terminated, tuple},
        Err, IResult,
    },
};

/// Numbers on scratchcards don't exceed two digits, so a `u128` bit mask per side suffices.
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Card {
    winning_numbers: u128,
    have_numbers: u128,
}

impl Card {
    fn match_count(&self) -> u32 {
        (self.winning_numbers & self.have_numbers).count_ones()
    }

    fn point_value(&self) -> u32 {
        match self.match_count() {
            0_u32 => 0_u32,
            match_count => 1_u32 << (match_count - 1_u32),
        }
    }

    fn parse_number_mask<'i>(input: &'i str) -> IResult<&'i str, u128> {
        map(many1(preceded(space1, parse_integer::<u8>)), |numbers| {
            numbers
                .into_iter()
                .fold(0_u128, |mask, number| mask | (1_u128 << number))
        })(input)
    }
}

impl Parse for Card {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                tuple((tag("Card"), space1, parse_integer::<u32>, tag(":"))),
                Self::parse_number_mask,
                preceded(tag(" |"), Self::parse_number_mask),
            )),
            |(_, winning_numbers, have_numbers)| Self {
                winning_numbers,
                have_numbers,
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Card>);

impl Solution {
    fn point_total(&self) -> u32 {
        self.0.iter().map(Card::point_value).sum()
    }

    fn card_copy_counts(&self) -> Vec<u32> {
        let mut copy_counts: Vec<u32> = vec![1_u32; self.0.len()];

        for (index, card) in self.0.iter().enumerate() {
            let copies: u32 = copy_counts[index];
            let copied_range_end: usize =
                (index + 1_usize + card.match_count() as usize).min(copy_counts.len());

            for copy_count in &mut copy_counts[index + 1_usize..copied_range_end] {
                *copy_count += copies;
            }
        }

        copy_counts
    }

    fn total_card_count(&self) -> u32 {
        self.card_copy_counts().into_iter().sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Card::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.point_total());
    }

    fn q2_internal(&mut self, args: &QuestionArgs) {
        dbg!(self.total_card_count());

        if args.verbose {
            dbg!(self.card_copy_counts());
        }
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
        Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53\n\
        Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19\n\
        Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1\n\
        Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83\n\
        Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36\n\
        Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| SOLUTION_STR.try_into().unwrap())
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            solution().0.first(),
            Some(&Card {
                winning_numbers: (1_u128 << 41_u32)
                    | (1_u128 << 48_u32)
                    | (1_u128 << 83_u32)
                    | (1_u128 << 86_u32)
                    | (1_u128 << 17_u32),
                have_numbers: (1_u128 << 83_u32)
                    | (1_u128 << 86_u32)
                    | (1_u128 << 6_u32)
                    | (1_u128 << 31_u32)
                    | (1_u128 << 17_u32)
                    | (1_u128 << 9_u32)
                    | (1_u128 << 48_u32)
                    | (1_u128 << 53_u32),
            })
        );
    }

    #[test]
    fn test_match_count() {
        assert_eq!(
            solution()
                .0
                .iter()
                .map(Card::match_count)
                .collect::<Vec<u32>>(),
            vec![4_u32, 2_u32, 2_u32, 1_u32, 0_u32, 0_u32]
        );
    }

    #[test]
    fn test_point_total() {
        assert_eq!(solution().point_total(), 13_u32);
    }

    #[test]
    fn test_card_copy_counts() {
        assert_eq!(
            solution().card_copy_counts(),
            vec![1_u32, 2_u32, 4_u32, 8_u32, 14_u32, 1_u32]
        );
    }

    #[test]
    fn test_total_card_count() {
        assert_eq!(solution().total_card_count(), 30_u32);
    }
}
