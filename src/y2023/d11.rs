use {
    crate::*,
    glam::IVec2,
    nom::{combinator::map, error::Error, Err, IResult},
};

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<Pixel>);

impl Solution {
    const OLD_GALAXY_SCALE: i64 = 1_000_000_i64;

    /// Prefix counts of empty rows and columns, so each galaxy coordinate expands in constant
    /// time.
    fn empty_counts_before(&self) -> (Vec<i64>, Vec<i64>) {
        let dimensions: IVec2 = self.0.dimensions();
        let mut row_has_galaxy: Vec<bool> = vec![false; dimensions.y as usize];
        let mut col_has_galaxy: Vec<bool> = vec![false; dimensions.x as usize];

        for galaxy in self.0.iter_positions_with_cell(&Pixel::Light) {
            row_has_galaxy[galaxy.y as usize] = true;
            col_has_galaxy[galaxy.x as usize] = true;
        }

        let prefix_counts = |has_galaxy: Vec<bool>| -> Vec<i64> {
            has_galaxy
                .into_iter()
                .scan(0_i64, |empty_count, has_galaxy| {
                    let counts_before: i64 = *empty_count;

                    *empty_count += !has_galaxy as i64;

                    Some(counts_before)
                })
                .collect()
        };

        (prefix_counts(row_has_galaxy), prefix_counts(col_has_galaxy))
    }

    fn galaxy_distance_sum(&self, scale: i64) -> i64 {
        let (empty_rows_before, empty_cols_before): (Vec<i64>, Vec<i64>) =
            self.empty_counts_before();
        let expanded_galaxies: Vec<(i64, i64)> = self
            .0
            .iter_positions_with_cell(&Pixel::Light)
            .map(|galaxy| {
                (
                    galaxy.x as i64 + (scale - 1_i64) * empty_cols_before[galaxy.x as usize],
                    galaxy.y as i64 + (scale - 1_i64) * empty_rows_before[galaxy.y as usize],
                )
            })
            .collect();

        expanded_galaxies
            .iter()
            .enumerate()
            .flat_map(|(index, galaxy_a)| {
                expanded_galaxies[index + 1_usize..].iter().map(|galaxy_b| {
                    (galaxy_a.0 - galaxy_b.0).abs() + (galaxy_a.1 - galaxy_b.1).abs()
                })
            })
            .sum()
    }

    fn young_galaxy_distance_sum(&self) -> i64 {
        self.galaxy_distance_sum(2_i64)
    }

    fn old_galaxy_distance_sum(&self) -> i64 {
        self.galaxy_distance_sum(Self::OLD_GALAXY_SCALE)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.young_galaxy_distance_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.old_galaxy_distance_sum());
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
        ...#......\n\
        .......#..\n\
        #.........\n\
        ..........\n\
        ......#...\n\
        .#........\n\
        .........#\n\
        ..........\n\
        .......#..\n\
        #...#.....\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| SOLUTION_STR.try_into().unwrap())
    }

    #[test]
    fn test_empty_counts_before() {
        let (empty_rows_before, empty_cols_before): (Vec<i64>, Vec<i64>) =
            solution().empty_counts_before();

        assert_eq!(
            empty_rows_before,
            vec![0_i64, 0_i64, 0_i64, 0_i64, 1_i64, 1_i64, 1_i64, 1_i64, 2_i64, 2_i64]
        );
        assert_eq!(
            empty_cols_before,
            vec![0_i64, 0_i64, 0_i64, 1_i64, 1_i64, 1_i64, 2_i64, 2_i64, 2_i64, 3_i64]
        );
    }

    #[test]
    fn test_young_galaxy_distance_sum() {
        assert_eq!(solution().young_galaxy_distance_sum(), 374_i64);
    }

    #[test]
    fn test_galaxy_distance_sum() {
        assert_eq!(solution().galaxy_distance_sum(10_i64), 1030_i64);
        assert_eq!(solution().galaxy_distance_sum(100_i64), 8410_i64);
    }

    #[test]
    fn test_old_galaxy_distance_sum() {
        assert_eq!(solution().old_galaxy_distance_sum(), 82000210_i64);
    }
}
