use {
    crate::*,
    nom::{
        bytes::complete::take_while1,
        character::complete::line_ending,
        combinator::{map_res, opt},
        error::Error,
        multi::many1,
        sequence::terminated,
        Err, IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    numbers: Vec<u16>,
    bits: u32,
}

impl Solution {
    fn one_count(numbers: &[u16], bit: u32) -> usize {
        numbers
            .iter()
            .filter(|number| (**number >> bit) & 1_u16 == 1_u16)
            .count()
    }

    fn gamma_rate(&self) -> u16 {
        (0_u32..self.bits).fold(0_u16, |gamma, bit| {
            gamma
                | (((2_usize * Self::one_count(&self.numbers, bit) >= self.numbers.len()) as u16)
                    << bit)
        })
    }

    fn power_consumption(&self) -> u32 {
        let gamma: u16 = self.gamma_rate();
        let epsilon: u16 = !gamma & ((1_u16 << self.bits) - 1_u16);

        gamma as u32 * epsilon as u32
    }

    /// Repeatedly filters the diagnostic numbers by their most (oxygen generator) or least (CO2
    /// scrubber) common bit, from the most significant bit down, until one number remains.
    fn filtered_rating(&self, most_common: bool) -> u16 {
        let mut candidates: Vec<u16> = self.numbers.clone();
        let mut bit: u32 = self.bits;

        while candidates.len() > 1_usize && bit > 0_u32 {
            bit -= 1_u32;

            let keep_ones: bool =
                (2_usize * Self::one_count(&candidates, bit) >= candidates.len()) == most_common;

            candidates.retain(|number| ((*number >> bit) & 1_u16 == 1_u16) == keep_ones);
        }

        candidates.first().copied().unwrap_or_default()
    }

    fn life_support_rating(&self) -> u32 {
        self.filtered_rating(true) as u32 * self.filtered_rating(false) as u32
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_res(
            many1(terminated(
                map_res(
                    take_while1(|c: char| c == '0' || c == '1'),
                    |bits_str: &str| {
                        u16::from_str_radix(bits_str, 2_u32)
                            .map(|number| (number, bits_str.len() as u32))
                    },
                ),
                opt(line_ending),
            )),
            |numbers_and_bits: Vec<(u16, u32)>| -> Result<Self, ()> {
                let bits: u32 = numbers_and_bits.first().ok_or(())?.1;

                numbers_and_bits
                    .iter()
                    .all(|(_, number_bits)| *number_bits == bits)
                    .then(|| Self {
                        numbers: numbers_and_bits.into_iter().map(|(number, _)| number).collect(),
                        bits,
                    })
                    .ok_or(())
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, args: &QuestionArgs) {
        dbg!(self.power_consumption());

        if args.verbose {
            dbg!(self.gamma_rate());
        }
    }

    fn q2_internal(&mut self, args: &QuestionArgs) {
        dbg!(self.life_support_rating());

        if args.verbose {
            dbg!(self.filtered_rating(true), self.filtered_rating(false));
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
        00100\n\
        11110\n\
        10110\n\
        10111\n\
        10101\n\
        01111\n\
        00111\n\
        11100\n\
        10000\n\
        11001\n\
        00010\n\
        01010\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution {
            numbers: vec![
                0b00100_u16,
                0b11110_u16,
                0b10110_u16,
                0b10111_u16,
                0b10101_u16,
                0b01111_u16,
                0b00111_u16,
                0b11100_u16,
                0b10000_u16,
                0b11001_u16,
                0b00010_u16,
                0b01010_u16,
            ],
            bits: 5_u32,
        })
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(Solution::try_from(SOLUTION_STR).as_ref(), Ok(solution()));
    }

    #[test]
    fn test_gamma_rate() {
        assert_eq!(solution().gamma_rate(), 0b10110_u16);
    }

    #[test]
    fn test_power_consumption() {
        assert_eq!(solution().power_consumption(), 198_u32);
    }

    #[test]
    fn test_filtered_rating() {
        assert_eq!(solution().filtered_rating(true), 23_u16);
        assert_eq!(solution().filtered_rating(false), 10_u16);
    }

    #[test]
    fn test_life_support_rating() {
        assert_eq!(solution().life_support_rating(), 230_u32);
    }
}
