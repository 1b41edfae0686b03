use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::satisfy,
        combinator::map,
        error::Error,
        Err, IResult,
    },
    std::collections::{HashMap, HashSet},
};

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq)]
struct RoofCell(u8);

impl RoofCell {
    fn frequency(self) -> Option<u8> {
        (self.0 != b'.').then_some(self.0)
    }
}

impl Parse for RoofCell {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            satisfy(|c| c == '.' || c.is_ascii_alphanumeric()),
            |c: char| Self(c as u8),
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<RoofCell>);

impl Solution {
    fn antennas_per_frequency(&self) -> HashMap<u8, Vec<IVec2>> {
        let mut antennas: HashMap<u8, Vec<IVec2>> = HashMap::new();

        for pos in self.0.iter_positions() {
            if let Some(frequency) = self.0.cells()[self.0.index_from_pos(pos)].frequency() {
                antennas.entry(frequency).or_default().push(pos);
            }
        }

        antennas
    }

    /// Projects rays through each ordered antenna pair. Without resonant harmonics only the point
    /// one pair-delta past the second antenna counts; with them, every grid point on the ray does,
    /// antennas included.
    fn antinode_count(&self, resonant_harmonics: bool) -> usize {
        let mut antinodes: HashSet<IVec2> = HashSet::new();

        for antennas in self.antennas_per_frequency().into_values() {
            for antenna_a in antennas.iter().copied() {
                for antenna_b in antennas.iter().copied() {
                    if antenna_a == antenna_b {
                        continue;
                    }

                    let delta: IVec2 = antenna_b - antenna_a;
                    let harmonics = if resonant_harmonics {
                        0_i32..i32::MAX
                    } else {
                        1_i32..2_i32
                    };

                    for harmonic in harmonics {
                        let antinode: IVec2 = antenna_b + delta * harmonic;

                        if !self.0.contains(antinode) {
                            break;
                        }

                        antinodes.insert(antinode);
                    }
                }
            }
        }

        antinodes.len()
    }

    fn paired_antinode_count(&self) -> usize {
        self.antinode_count(false)
    }

    fn resonant_antinode_count(&self) -> usize {
        self.antinode_count(true)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.paired_antinode_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.resonant_antinode_count());
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
        ............\n\
        ........0...\n\
        .....0......\n\
        .......0....\n\
        ....0.......\n\
        ......A.....\n\
        ............\n\
        ............\n\
        ........A...\n\
        .........A..\n\
        ............\n\
        ............\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| SOLUTION_STR.try_into().unwrap())
    }

    #[test]
    fn test_antennas_per_frequency() {
        let antennas: HashMap<u8, Vec<IVec2>> = solution().antennas_per_frequency();

        assert_eq!(antennas.len(), 2_usize);
        assert_eq!(antennas[&b'0'].len(), 4_usize);
        assert_eq!(
            antennas[&b'A'],
            vec![
                IVec2::new(6_i32, 5_i32),
                IVec2::new(8_i32, 8_i32),
                IVec2::new(9_i32, 9_i32)
            ]
        );
    }

    #[test]
    fn test_paired_antinode_count() {
        assert_eq!(solution().paired_antinode_count(), 14_usize);
    }

    #[test]
    fn test_resonant_antinode_count() {
        assert_eq!(solution().resonant_antinode_count(), 34_usize);
    }
}
