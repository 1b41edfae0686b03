use {
    crate::*,
    glam::IVec2,
    nom::{
        character::complete::satisfy,
        combinator::map,
        error::Error,
        Err, IResult,
    },
    std::collections::HashMap,
};

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
struct CityBlock(u8);

impl Parse for CityBlock {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(satisfy(|c| c.is_ascii_digit()), |c| Self(c as u8 - b'0'))(input)
    }
}

#[derive(Clone, Eq, Hash, PartialEq)]
struct CrucibleState {
    pos: IVec2,
    direction: Direction,

    /// How many blocks the crucible has moved in `direction` without turning. Zero only at the
    /// start, where any direction is a fresh one.
    run: u8,
}

struct CrucibleSearch<'s> {
    solution: &'s Solution,
    start: CrucibleState,
    min_run: u8,
    max_run: u8,
    heat_losses: HashMap<CrucibleState, u32>,
    predecessors: HashMap<CrucibleState, CrucibleState>,
}

impl WeightedGraphSearch for CrucibleSearch<'_> {
    type Vertex = CrucibleState;
    type Cost = u32;

    fn start(&self) -> &CrucibleState {
        &self.start
    }

    fn is_end(&self, vertex: &CrucibleState) -> bool {
        vertex.pos == self.solution.0.max_dimensions() && vertex.run >= self.min_run
    }

    fn path_to(&self, vertex: &CrucibleState) -> Vec<CrucibleState> {
        let mut path: Vec<CrucibleState> = vec![vertex.clone()];

        while let Some(predecessor) = self.predecessors.get(path.last().unwrap_or(vertex)) {
            path.push(predecessor.clone());
        }

        path.reverse();

        path
    }

    fn cost_from_start(&self, vertex: &CrucibleState) -> u32 {
        self.heat_losses.get(vertex).copied().unwrap_or(u32::MAX)
    }

    fn heuristic(&self, vertex: &CrucibleState) -> u32 {
        manhattan_distance_2d(vertex.pos, self.solution.0.max_dimensions()) as u32
    }

    fn neighbors(&self, vertex: &CrucibleState, neighbors: &mut Vec<OpenSetElement<CrucibleState, u32>>) {
        neighbors.clear();

        for direction in [
            vertex.direction,
            vertex.direction.turn(true),
            vertex.direction.turn(false),
        ] {
            let run: u8 = if direction == vertex.direction {
                if vertex.run >= self.max_run {
                    continue;
                }

                vertex.run + 1_u8
            } else {
                if vertex.run != 0_u8 && vertex.run < self.min_run {
                    continue;
                }

                1_u8
            };
            let pos: IVec2 = vertex.pos + direction.vec();

            if let Some(city_block) = self.solution.0.get(pos) {
                neighbors.push(OpenSetElement(
                    CrucibleState {
                        pos,
                        direction,
                        run,
                    },
                    city_block.0 as u32,
                ));
            }
        }
    }

    fn update_vertex(&mut self, from: &CrucibleState, to: &CrucibleState, cost: u32) {
        self.heat_losses.insert(to.clone(), cost);
        self.predecessors.insert(to.clone(), from.clone());
    }

    fn reset(&mut self) {
        self.heat_losses.clear();
        self.predecessors.clear();
        self.heat_losses.insert(self.start.clone(), 0_u32);
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<CityBlock>);

impl Solution {
    const CRUCIBLE_MAX_RUN: u8 = 3_u8;
    const ULTRA_CRUCIBLE_MIN_RUN: u8 = 4_u8;
    const ULTRA_CRUCIBLE_MAX_RUN: u8 = 10_u8;

    fn min_heat_loss_internal(&self, min_run: u8, max_run: u8) -> Option<(u32, Vec<CrucibleState>)> {
        let mut search: CrucibleSearch = CrucibleSearch {
            solution: self,
            start: CrucibleState {
                pos: IVec2::ZERO,
                direction: Direction::East,
                run: 0_u8,
            },
            min_run,
            max_run,
            heat_losses: HashMap::new(),
            predecessors: HashMap::new(),
        };

        search.run_a_star().map(|path| {
            let heat_loss: u32 = path
                .last()
                .map(|end| search.cost_from_start(end))
                .unwrap_or_default();

            (heat_loss, path)
        })
    }

    fn print_path(&self, path: &[CrucibleState]) {
        let mut path_grid: Grid2D<Pixel> = Grid2D::default(self.0.dimensions());

        for state in path {
            if let Some(pixel) = path_grid.get_mut(state.pos) {
                *pixel = Pixel::Light;
            }
        }

        println!("{}", String::from(&path_grid));
    }

    fn min_heat_loss(&self, verbose: bool) -> u32 {
        self.min_heat_loss_internal(1_u8, Self::CRUCIBLE_MAX_RUN)
            .map(|(heat_loss, path)| {
                if verbose {
                    self.print_path(&path);
                }

                heat_loss
            })
            .unwrap_or_default()
    }

    fn min_ultra_heat_loss(&self, verbose: bool) -> u32 {
        self.min_heat_loss_internal(Self::ULTRA_CRUCIBLE_MIN_RUN, Self::ULTRA_CRUCIBLE_MAX_RUN)
            .map(|(heat_loss, path)| {
                if verbose {
                    self.print_path(&path);
                }

                heat_loss
            })
            .unwrap_or_default()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, args: &QuestionArgs) {
        dbg!(self.min_heat_loss(args.verbose));
    }

    fn q2_internal(&mut self, args: &QuestionArgs) {
        dbg!(self.min_ultra_heat_loss(args.verbose));
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

    const SOLUTION_STRS: &'static [&'static str] = &[
        "\
        2413432311323\n\
        3215453535623\n\
        3255245654254\n\
        3446585845452\n\
        4546657867536\n\
        1438598798454\n\
        4457876987766\n\
        3637877979653\n\
        4654967986887\n\
        4564679986453\n\
        1224686865563\n\
        2546548887735\n\
        4322674655533\n",
        "\
        111111111111\n\
        999999999991\n\
        999999999991\n\
        999999999991\n\
        999999999991\n",
    ];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            SOLUTION_STRS
                .iter()
                .map(|solution_str| (*solution_str).try_into().unwrap())
                .collect()
        })[index]
    }

    #[test]
    fn test_min_heat_loss() {
        assert_eq!(solution(0_usize).min_heat_loss(false), 102_u32);
    }

    #[test]
    fn test_min_ultra_heat_loss() {
        assert_eq!(solution(0_usize).min_ultra_heat_loss(false), 94_u32);
        assert_eq!(solution(1_usize).min_ultra_heat_loss(false), 71_u32);
    }
}
