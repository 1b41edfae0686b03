use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::{alpha1, line_ending},
        combinator::{map_res, opt},
        error::Error,
        multi::{many1, separated_list1},
        sequence::{preceded, terminated, tuple},
        Err, IResult,
    },
    std::collections::HashMap,
};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Valve {
    flow: u32,
    tunnels: Vec<usize>,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    valves: Vec<Valve>,
    start: usize,
}

impl Solution {
    const START_NAME: &'static str = "AA";
    const ALONE_MINUTES: u32 = 30_u32;
    const TRAINING_MINUTES: u32 = 26_u32;
    const UNREACHABLE: u32 = u32::MAX / 2_u32;

    /// All-pairs shortest path lengths between valves, via Floyd-Warshall.
    fn shortest_path_lens(&self) -> Vec<Vec<u32>> {
        let len: usize = self.valves.len();
        let mut path_lens: Vec<Vec<u32>> = vec![vec![Self::UNREACHABLE; len]; len];

        for (index, valve) in self.valves.iter().enumerate() {
            path_lens[index][index] = 0_u32;

            for tunnel in valve.tunnels.iter().copied() {
                path_lens[index][tunnel] = 1_u32;
            }
        }

        for mid in 0_usize..len {
            for from in 0_usize..len {
                for to in 0_usize..len {
                    let through_mid: u32 = path_lens[from][mid] + path_lens[mid][to];

                    if through_mid < path_lens[from][to] {
                        path_lens[from][to] = through_mid;
                    }
                }
            }
        }

        path_lens
    }

    /// Valves worth opening. These get bit indices into the open set masks.
    fn flow_valves(&self) -> Vec<usize> {
        (0_usize..self.valves.len())
            .filter(|valve| self.valves[*valve].flow > 0_u32)
            .collect()
    }

    fn record_released(
        &self,
        path_lens: &[Vec<u32>],
        flow_valves: &[usize],
        valve: usize,
        minutes_left: u32,
        open_set: u64,
        released: u32,
        best: &mut HashMap<u64, u32>,
    ) {
        let best_released: &mut u32 = best.entry(open_set).or_default();

        *best_released = (*best_released).max(released);

        for (bit, flow_valve) in flow_valves.iter().copied().enumerate() {
            if open_set & (1_u64 << bit) != 0_u64 {
                continue;
            }

            // Travelling there plus the minute spent opening the valve
            let cost: u32 = path_lens[valve][flow_valve] + 1_u32;

            if cost < minutes_left {
                let minutes_after: u32 = minutes_left - cost;

                self.record_released(
                    path_lens,
                    flow_valves,
                    flow_valve,
                    minutes_after,
                    open_set | (1_u64 << bit),
                    released + minutes_after * self.valves[flow_valve].flow,
                    best,
                );
            }
        }
    }

    /// The most pressure releasable within the time limit, for every set of valves that could end
    /// up open, keyed by open set mask.
    fn best_released_per_open_set(&self, minutes: u32) -> HashMap<u64, u32> {
        let path_lens: Vec<Vec<u32>> = self.shortest_path_lens();
        let flow_valves: Vec<usize> = self.flow_valves();
        let mut best: HashMap<u64, u32> = HashMap::new();

        self.record_released(
            &path_lens,
            &flow_valves,
            self.start,
            minutes,
            0_u64,
            0_u32,
            &mut best,
        );

        best
    }

    fn max_released_alone(&self) -> u32 {
        self.best_released_per_open_set(Self::ALONE_MINUTES)
            .into_values()
            .max()
            .unwrap_or_default()
    }

    /// Both actors operate on disjoint valve sets, so the answer is the best sum over pairs of
    /// single-actor results with non-intersecting open set masks.
    fn max_released_with_elephant(&self) -> u32 {
        let best: Vec<(u64, u32)> = self
            .best_released_per_open_set(Self::TRAINING_MINUTES)
            .into_iter()
            .collect();

        best.iter()
            .enumerate()
            .flat_map(|(index, (open_set_a, released_a))| {
                best[index..]
                    .iter()
                    .filter(move |(open_set_b, _)| open_set_a & open_set_b == 0_u64)
                    .map(move |(_, released_b)| released_a + released_b)
            })
            .max()
            .unwrap_or_default()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_res(
            many1(terminated(
                tuple((
                    preceded(tag("Valve "), alpha1),
                    preceded(tag(" has flow rate="), parse_integer::<u32>),
                    preceded(
                        tuple((
                            tag("; tunnel"),
                            opt(tag("s")),
                            tag(" lead"),
                            opt(tag("s")),
                            tag(" to valve"),
                            opt(tag("s")),
                            tag(" "),
                        )),
                        separated_list1(tag(", "), alpha1),
                    ),
                )),
                opt(line_ending),
            )),
            |scans: Vec<(&str, u32, Vec<&str>)>| -> Result<Self, ()> {
                let indices: HashMap<&str, usize> = scans
                    .iter()
                    .enumerate()
                    .map(|(index, (name, _, _))| (*name, index))
                    .collect();
                let start: usize = indices.get(Self::START_NAME).copied().ok_or(())?;
                let valves: Vec<Valve> = scans
                    .iter()
                    .map(|(_, flow, tunnel_names)| {
                        tunnel_names
                            .iter()
                            .map(|tunnel_name| indices.get(tunnel_name).copied().ok_or(()))
                            .collect::<Result<Vec<usize>, ()>>()
                            .map(|tunnels| Valve {
                                flow: *flow,
                                tunnels,
                            })
                    })
                    .collect::<Result<Vec<Valve>, ()>>()?;

                Ok(Self { valves, start })
            },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.max_released_alone());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.max_released_with_elephant());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
