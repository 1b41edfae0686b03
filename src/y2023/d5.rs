use {
    crate::*,
    nom::{
        bytes::complete::{tag, take_till1},
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::many1,
        sequence::{preceded, terminated, tuple},
        Err, IResult,
    },
    std::{mem::swap, ops::Range},
};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct MapRange {
    source: Range<i64>,
    offset: i64,
}

impl Parse for MapRange {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                parse_integer::<i64>,
                preceded(tag(" "), parse_integer::<i64>),
                preceded(tag(" "), parse_integer::<i64>),
            )),
            |(destination_start, source_start, len)| Self {
                source: source_start..source_start + len,
                offset: destination_start - source_start,
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct CategoryMap(Vec<MapRange>);

impl CategoryMap {
    fn convert(&self, value: i64) -> i64 {
        self.0
            .iter()
            .find(|map_range| map_range.source.contains(&value))
            .map_or(value, |map_range| value + map_range.offset)
    }

    /// Splits `range` over the sorted map ranges, pushing converted pieces onto `converted`.
    /// Values not covered by any map range convert to themselves.
    fn convert_range(&self, range: Range<i64>, converted: &mut Vec<Range<i64>>) {
        let mut start: i64 = range.start;

        for map_range in &self.0 {
            if start >= range.end {
                break;
            }

            if map_range.source.end <= start {
                continue;
            }

            if map_range.source.start > start {
                let gap_end: i64 = map_range.source.start.min(range.end);

                converted.push(start..gap_end);
                start = gap_end;
            }

            if start < range.end && map_range.source.contains(&start) {
                let piece_end: i64 = map_range.source.end.min(range.end);

                converted.push(start + map_range.offset..piece_end + map_range.offset);
                start = piece_end;
            }
        }

        if start < range.end {
            converted.push(start..range.end);
        }
    }
}

impl Parse for CategoryMap {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            preceded(
                tuple((take_till1(|c| c == ' '), tag(" map:"), line_ending)),
                many1(terminated(MapRange::parse, opt(line_ending))),
            ),
            |mut map_ranges: Vec<MapRange>| {
                map_ranges.sort_by_key(|map_range| map_range.source.start);

                Self(map_ranges)
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    seeds: Vec<i64>,
    category_maps: Vec<CategoryMap>,
}

impl Solution {
    fn location_for_seed(&self, seed: i64) -> i64 {
        self.category_maps
            .iter()
            .fold(seed, |value, category_map| category_map.convert(value))
    }

    fn min_location_for_seeds(&self) -> i64 {
        self.seeds
            .iter()
            .map(|seed| self.location_for_seed(*seed))
            .min()
            .unwrap_or_default()
    }

    fn min_location_for_seed_ranges(&self) -> i64 {
        let mut ranges: Vec<Range<i64>> = self
            .seeds
            .chunks_exact(2_usize)
            .map(|seed_pair| seed_pair[0_usize]..seed_pair[0_usize] + seed_pair[1_usize])
            .collect();
        let mut converted: Vec<Range<i64>> = Vec::new();

        for category_map in &self.category_maps {
            for range in ranges.drain(..) {
                category_map.convert_range(range, &mut converted);
            }

            swap(&mut ranges, &mut converted);
        }

        ranges
            .iter()
            .map(|range| range.start)
            .min()
            .unwrap_or_default()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                terminated(
                    preceded(
                        tag("seeds:"),
                        many1(preceded(tag(" "), parse_integer::<i64>)),
                    ),
                    line_ending,
                ),
                many1(preceded(line_ending, CategoryMap::parse)),
            )),
            |(seeds, category_maps)| Self {
                seeds,
                category_maps,
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.min_location_for_seeds());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.min_location_for_seed_ranges());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
