use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::{tag, take_while_m_n},
        character::complete::line_ending,
        combinator::{map, map_res, opt, value},
        error::Error,
        multi::many1,
        sequence::{terminated, tuple},
        Err, IResult,
    },
    std::collections::HashMap,
};

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
enum Instruction {
    Left,
    Right,
}

impl Parse for Instruction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((value(Self::Left, tag("L")), value(Self::Right, tag("R"))))(input)
    }
}

type NodeName = [u8; 3_usize];

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Node {
    name: NodeName,
    left: usize,
    right: usize,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    instructions: Vec<Instruction>,
    nodes: Vec<Node>,
}

impl Solution {
    const START_NAME: NodeName = *b"AAA";
    const END_NAME: NodeName = *b"ZZZ";

    fn parse_node_name<'i>(input: &'i str) -> IResult<&'i str, NodeName> {
        map_res(
            take_while_m_n(3_usize, 3_usize, |c: char| c.is_ascii_alphanumeric()),
            |name: &str| NodeName::try_from(name.as_bytes()),
        )(input)
    }

    fn steps_until<F: Fn(&Node) -> bool>(&self, start: usize, is_end: F) -> u64 {
        let mut node: usize = start;
        let mut steps: u64 = 0_u64;

        for instruction in self.instructions.iter().cycle() {
            if is_end(&self.nodes[node]) {
                break;
            }

            node = match instruction {
                Instruction::Left => self.nodes[node].left,
                Instruction::Right => self.nodes[node].right,
            };
            steps += 1_u64;
        }

        steps
    }

    fn steps_from_aaa_to_zzz(&self) -> u64 {
        let start: usize = self
            .nodes
            .iter()
            .position(|node| node.name == Self::START_NAME)
            .unwrap_or_else(|| panic!("The network has no {:?} node.", Self::START_NAME));

        self.steps_until(start, |node| node.name == Self::END_NAME)
    }

    /// Each ghost's path is periodic with its first arrival at a `..Z` node, so all ghosts stand
    /// on end nodes after the least common multiple of the individual step counts.
    fn ghost_steps(&self) -> u64 {
        (0_usize..self.nodes.len())
            .filter(|node| self.nodes[*node].name[2_usize] == b'A')
            .map(|start| self.steps_until(start, |node| node.name[2_usize] == b'Z'))
            .fold(1_u64, compute_lcm)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        let (input, instructions): (&str, Vec<Instruction>) =
            terminated(many1(Instruction::parse), tuple((line_ending, line_ending)))(input)?;
        let (input, node_scans): (&str, Vec<(NodeName, NodeName, NodeName)>) =
            many1(terminated(
                map(
                    tuple((
                        Self::parse_node_name,
                        tag(" = ("),
                        Self::parse_node_name,
                        tag(", "),
                        Self::parse_node_name,
                        tag(")"),
                    )),
                    |(name, _, left_name, _, right_name, _)| (name, left_name, right_name),
                ),
                opt(line_ending),
            ))(input)?;

        let indices: HashMap<NodeName, usize> = node_scans
            .iter()
            .enumerate()
            .map(|(index, (name, _, _))| (*name, index))
            .collect();
        let mut nodes: Vec<Node> = Vec::with_capacity(node_scans.len());

        for (name, left_name, right_name) in node_scans {
            match (indices.get(&left_name), indices.get(&right_name)) {
                (Some(left), Some(right)) => nodes.push(Node {
                    name,
                    left: *left,
                    right: *right,
                }),
                _ => {
                    return Err(Err::Failure(Error::new(
                        input,
                        nom::error::ErrorKind::MapRes,
                    )))
                }
            }
        }

        Ok((
            input,
            Self {
                instructions,
                nodes,
            },
        ))
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.steps_from_aaa_to_zzz());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.ghost_steps());
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
        RL\n\
        \n\
        AAA = (BBB, CCC)\n\
        BBB = (DDD, EEE)\n\
        CCC = (ZZZ, GGG)\n\
        DDD = (DDD, DDD)\n\
        EEE = (EEE, EEE)\n\
        GGG = (GGG, GGG)\n\
        ZZZ = (ZZZ, ZZZ)\n",
        "\
        LLR\n\
        \n\
        AAA = (BBB, BBB)\n\
        BBB = (AAA, ZZZ)\n\
        ZZZ = (ZZZ, ZZZ)\n",
        "\
        LR\n\
        \n\
        11A = (11B, XXX)\n\
        11B = (XXX, 11Z)\n\
        11Z = (11B, XXX)\n\
        22A = (22B, XXX)\n\
        22B = (22C, 22C)\n\
        22C = (22Z, 22Z)\n\
        22Z = (22B, 22B)\n\
        XXX = (XXX, XXX)\n",
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
    fn test_try_from_str() {
        use Instruction::*;

        let solution: &Solution = solution(0_usize);

        assert_eq!(solution.instructions, vec![Right, Left]);
        assert_eq!(
            solution.nodes.first(),
            Some(&Node {
                name: *b"AAA",
                left: 1_usize,
                right: 2_usize,
            })
        );
    }

    #[test]
    fn test_steps_from_aaa_to_zzz() {
        assert_eq!(solution(0_usize).steps_from_aaa_to_zzz(), 2_u64);
        assert_eq!(solution(1_usize).steps_from_aaa_to_zzz(), 6_u64);
    }

    #[test]
    fn test_ghost_steps() {
        assert_eq!(solution(2_usize).ghost_steps(), 6_u64);
    }
}
