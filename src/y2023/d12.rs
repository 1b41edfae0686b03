use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::{many0, many1, separated_list1},
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    std::collections::HashMap,
};

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum SpringCell {
        #[default]
        Operational = OPERATIONAL = b'.',
        Damaged = DAMAGED = b'#',
        Unknown = UNKNOWN = b'?',
    }
}

/// Arrangement counts only depend on the remaining suffixes, so suffix lengths make a valid memo
/// key.
type ArrangementCache = HashMap<(usize, usize), u64>;

#[cfg_attr(test, derive(Debug, PartialEq))]
struct ConditionRecord {
    springs: Vec<SpringCell>,
    damaged_group_lens: Vec<u8>,
}

impl ConditionRecord {
    const UNFOLD_FACTOR: usize = 5_usize;

    fn count_arrangements(
        springs: &[SpringCell],
        damaged_group_lens: &[u8],
        cache: &mut ArrangementCache,
    ) -> u64 {
        let Some(damaged_group_len) = damaged_group_lens.first().map(|len| *len as usize) else {
            return !springs.contains(&SpringCell::Damaged) as u64;
        };

        if springs.len() < damaged_group_len {
            return 0_u64;
        }

        let cache_key: (usize, usize) = (springs.len(), damaged_group_lens.len());

        if let Some(arrangements) = cache.get(&cache_key) {
            return *arrangements;
        }

        let mut arrangements: u64 = 0_u64;

        // The first spring stays operational.
        if springs[0_usize] != SpringCell::Damaged {
            arrangements +=
                Self::count_arrangements(&springs[1_usize..], damaged_group_lens, cache);
        }

        // The first group starts here.
        if springs[..damaged_group_len]
            .iter()
            .all(|spring| *spring != SpringCell::Operational)
        {
            if springs.len() == damaged_group_len {
                arrangements += (damaged_group_lens.len() == 1_usize) as u64;
            } else if springs[damaged_group_len] != SpringCell::Damaged {
                arrangements += Self::count_arrangements(
                    &springs[damaged_group_len + 1_usize..],
                    &damaged_group_lens[1_usize..],
                    cache,
                );
            }
        }

        cache.insert(cache_key, arrangements);

        arrangements
    }

    fn arrangements(&self) -> u64 {
        Self::count_arrangements(&self.springs, &self.damaged_group_lens, &mut HashMap::new())
    }

    fn unfolded(&self) -> Self {
        let mut springs: Vec<SpringCell> = Vec::with_capacity(
            self.springs.len() * Self::UNFOLD_FACTOR + Self::UNFOLD_FACTOR - 1_usize,
        );

        for fold in 0_usize..Self::UNFOLD_FACTOR {
            if fold > 0_usize {
                springs.push(SpringCell::Unknown);
            }

            springs.extend_from_slice(&self.springs);
        }

        Self {
            springs,
            damaged_group_lens: self.damaged_group_lens.repeat(Self::UNFOLD_FACTOR),
        }
    }
}

impl Parse for ConditionRecord {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                many1(SpringCell::parse),
                tag(" "),
                separated_list1(tag(","), parse_integer::<u8>),
            ),
            |(springs, damaged_group_lens)| Self {
                springs,
                damaged_group_lens,
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<ConditionRecord>);

impl Solution {
    fn arrangement_sum(&self) -> u64 {
        self.0
            .iter()
            .map(ConditionRecord::arrangements)
            .sum()
    }

    fn unfolded_arrangement_sum(&self) -> u64 {
        self.0
            .iter()
            .map(|condition_record| condition_record.unfolded().arrangements())
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(ConditionRecord::parse, opt(line_ending))),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.arrangement_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.unfolded_arrangement_sum());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
