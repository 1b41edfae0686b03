use {
    crate::*,
    nom::{
        character::complete::{line_ending, one_of, space1},
        combinator::{map, map_res, opt},
        error::Error,
        multi::{many0, many_m_n},
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
};

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone)]
struct Hand {
    /// Card strengths, 2 through 14, in dealt order.
    cards: [u8; Hand::CARD_COUNT],
    bid: u32,
}

impl Hand {
    const CARD_COUNT: usize = 5_usize;
    const CARD_LABELS: &'static str = "23456789TJQKA";
    const JACK_STRENGTH: u8 = 11_u8;
    const JOKER_STRENGTH: u8 = 1_u8;
    const MAX_STRENGTH: usize = 14_usize;

    fn card_strength(label: char) -> Option<u8> {
        Self::CARD_LABELS
            .chars()
            .position(|card_label| card_label == label)
            .map(|index| index as u8 + 2_u8)
    }

    fn effective_cards(&self, jokers_wild: bool) -> [u8; Self::CARD_COUNT] {
        let mut cards: [u8; Self::CARD_COUNT] = self.cards;

        if jokers_wild {
            for card in cards.iter_mut() {
                if *card == Self::JACK_STRENGTH {
                    *card = Self::JOKER_STRENGTH;
                }
            }
        }

        cards
    }

    fn hand_type(&self, jokers_wild: bool) -> HandType {
        let mut strength_counts: [u8; Self::MAX_STRENGTH + 1_usize] =
            [0_u8; Self::MAX_STRENGTH + 1_usize];
        let mut joker_count: u8 = 0_u8;

        for card in self.effective_cards(jokers_wild) {
            if card == Self::JOKER_STRENGTH {
                joker_count += 1_u8;
            } else {
                strength_counts[card as usize] += 1_u8;
            }
        }

        strength_counts.sort_unstable_by(|a, b| b.cmp(a));

        // Jokers always strengthen the largest group.
        match (strength_counts[0_usize] + joker_count, strength_counts[1_usize]) {
            (5_u8, _) => HandType::FiveOfAKind,
            (4_u8, _) => HandType::FourOfAKind,
            (3_u8, 2_u8) => HandType::FullHouse,
            (3_u8, _) => HandType::ThreeOfAKind,
            (2_u8, 2_u8) => HandType::TwoPair,
            (2_u8, _) => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }

    fn rank_key(&self, jokers_wild: bool) -> (HandType, [u8; Self::CARD_COUNT]) {
        (self.hand_type(jokers_wild), self.effective_cards(jokers_wild))
    }
}

impl Parse for Hand {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                map_res(
                    many_m_n(
                        Self::CARD_COUNT,
                        Self::CARD_COUNT,
                        map_res(one_of(Self::CARD_LABELS), |label| {
                            Self::card_strength(label).ok_or(())
                        }),
                    ),
                    |cards: Vec<u8>| <[u8; Self::CARD_COUNT]>::try_from(cards),
                ),
                space1,
                parse_integer::<u32>,
            ),
            |(cards, bid)| Self { cards, bid },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Hand>);

impl Solution {
    fn total_winnings(&self, jokers_wild: bool) -> u32 {
        let mut hands: Vec<Hand> = self.0.clone();

        hands.sort_by_key(|hand| hand.rank_key(jokers_wild));

        hands
            .iter()
            .enumerate()
            .map(|(rank_index, hand)| (rank_index as u32 + 1_u32) * hand.bid)
            .sum()
    }

    fn jack_total_winnings(&self) -> u32 {
        self.total_winnings(false)
    }

    fn joker_total_winnings(&self) -> u32 {
        self.total_winnings(true)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Hand::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.jack_total_winnings());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.joker_total_winnings());
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
        32T3K 765\n\
        T55J5 684\n\
        KK677 28\n\
        KTJJT 220\n\
        QQQJA 483\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| SOLUTION_STR.try_into().unwrap())
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            solution().0.first(),
            Some(&Hand {
                cards: [3_u8, 2_u8, 10_u8, 3_u8, 13_u8],
                bid: 765_u32,
            })
        );
    }

    #[test]
    fn test_hand_type() {
        use HandType::*;

        assert_eq!(
            solution()
                .0
                .iter()
                .map(|hand| hand.hand_type(false))
                .collect::<Vec<HandType>>(),
            vec![OnePair, ThreeOfAKind, TwoPair, TwoPair, ThreeOfAKind]
        );
        assert_eq!(
            solution()
                .0
                .iter()
                .map(|hand| hand.hand_type(true))
                .collect::<Vec<HandType>>(),
            vec![OnePair, FourOfAKind, TwoPair, FourOfAKind, FourOfAKind]
        );
    }

    #[test]
    fn test_jack_total_winnings() {
        assert_eq!(solution().jack_total_winnings(), 6440_u32);
    }

    #[test]
    fn test_joker_total_winnings() {
        assert_eq!(solution().joker_total_winnings(), 5905_u32);
    }
}
