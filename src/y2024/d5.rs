use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    std::collections::{HashMap, HashSet, VecDeque},
};

/// Topologically sorts one update's pages against the ordering rules that apply to it.
struct UpdateSort<'s> {
    rules: &'s [(u8, u8)],
    pages: &'s [u8],
    edges: HashSet<(u8, u8)>,
}

impl Kahn for UpdateSort<'_> {
    type Vertex = u8;

    fn populate_initial_set(&self, initial_set: &mut VecDeque<u8>) {
        initial_set.extend(self.pages.iter().copied().filter(|page| {
            !self
                .edges
                .iter()
                .any(|(_, successor)| successor == page)
        }));
    }

    fn out_neighbors(&self, vertex: &u8, neighbors: &mut Vec<u8>) {
        neighbors.extend(
            self.edges
                .iter()
                .filter(|(predecessor, _)| predecessor == vertex)
                .map(|(_, successor)| *successor),
        );
    }

    fn remove_edge(&mut self, from: &u8, to: &u8) {
        self.edges.remove(&(*from, *to));
    }

    fn has_in_neighbors(&self, vertex: &u8) -> bool {
        self.edges.iter().any(|(_, successor)| successor == vertex)
    }

    fn any_edges_exist(&self) -> bool {
        !self.edges.is_empty()
    }

    fn reset(&mut self) {
        self.edges = self
            .rules
            .iter()
            .copied()
            .filter(|(predecessor, successor)| {
                self.pages.contains(predecessor) && self.pages.contains(successor)
            })
            .collect();
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    rules: Vec<(u8, u8)>,
    updates: Vec<Vec<u8>>,
}

impl Solution {
    fn is_ordered(&self, update: &[u8]) -> bool {
        let positions: HashMap<u8, usize> = update
            .iter()
            .enumerate()
            .map(|(position, page)| (*page, position))
            .collect();

        self.rules.iter().all(|(predecessor, successor)| {
            match (positions.get(predecessor), positions.get(successor)) {
                (Some(predecessor_position), Some(successor_position)) => {
                    predecessor_position < successor_position
                }
                _ => true,
            }
        })
    }

    fn middle_page(update: &[u8]) -> u32 {
        update.get(update.len() / 2_usize).copied().unwrap_or_default() as u32
    }

    fn ordered_middle_page_sum(&self) -> u32 {
        self.updates
            .iter()
            .filter(|update| self.is_ordered(update))
            .map(|update| Self::middle_page(update))
            .sum()
    }

    fn reordered_middle_page_sum(&self) -> u32 {
        self.updates
            .iter()
            .filter(|update| !self.is_ordered(update))
            .map(|update| {
                let mut update_sort: UpdateSort = UpdateSort {
                    rules: &self.rules,
                    pages: update,
                    edges: HashSet::new(),
                };

                update_sort
                    .run()
                    .map(|ordered_update| Self::middle_page(&ordered_update))
                    .unwrap_or_default()
            })
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                many0(terminated(
                    separated_pair(parse_integer::<u8>, tag("|"), parse_integer::<u8>),
                    line_ending,
                )),
                line_ending,
                many0(terminated(
                    separated_list1(tag(","), parse_integer::<u8>),
                    opt(line_ending),
                )),
            ),
            |(rules, updates)| Self { rules, updates },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.ordered_middle_page_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.reordered_middle_page_sum());
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
        47|53\n\
        97|13\n\
        97|61\n\
        97|47\n\
        75|29\n\
        61|13\n\
        75|53\n\
        29|13\n\
        97|29\n\
        53|29\n\
        61|53\n\
        97|53\n\
        61|29\n\
        47|13\n\
        75|47\n\
        97|75\n\
        47|61\n\
        75|61\n\
        47|29\n\
        75|13\n\
        53|13\n\
        \n\
        75,47,61,53,29\n\
        97,61,53,29,13\n\
        75,29,13\n\
        75,97,47,61,53\n\
        61,13,29\n\
        97,13,75,29,47\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| SOLUTION_STR.try_into().unwrap())
    }

    #[test]
    fn test_try_from_str() {
        let solution: &Solution = solution();

        assert_eq!(solution.rules.len(), 21_usize);
        assert_eq!(solution.rules.first(), Some(&(47_u8, 53_u8)));
        assert_eq!(solution.updates.len(), 6_usize);
    }

    #[test]
    fn test_is_ordered() {
        assert_eq!(
            solution()
                .updates
                .iter()
                .map(|update| solution().is_ordered(update))
                .collect::<Vec<bool>>(),
            vec![true, true, true, false, false, false]
        );
    }

    #[test]
    fn test_ordered_middle_page_sum() {
        assert_eq!(solution().ordered_middle_page_sum(), 143_u32);
    }

    #[test]
    fn test_update_sort() {
        let mut update_sort: UpdateSort = UpdateSort {
            rules: &solution().rules,
            pages: &solution().updates[3_usize],
            edges: HashSet::new(),
        };

        assert_eq!(
            update_sort.run(),
            Some(vec![97_u8, 75_u8, 47_u8, 61_u8, 53_u8])
        );
    }

    #[test]
    fn test_reordered_middle_page_sum() {
        assert_eq!(solution().reordered_middle_page_sum(), 123_u32);
    }
}
