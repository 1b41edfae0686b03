use {
    crate::*,
    bitvec::prelude::*,
    nom::{
        bytes::complete::tag,
        character::complete::{line_ending, space0, space1},
        combinator::{map, map_res, opt},
        error::Error,
        multi::{many1, many_m_n, separated_list1},
        sequence::{preceded, terminated, tuple},
        Err, IResult,
    },
};

type BoardMarks = BitArr!(for Board::AREA, in u32);

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone)]
struct Board(Vec<u8>);

impl Board {
    const SIDE_LEN: usize = 5_usize;
    const AREA: usize = Self::SIDE_LEN * Self::SIDE_LEN;

    fn has_won(marks: &BoardMarks) -> bool {
        (0_usize..Self::SIDE_LEN).any(|row| {
            marks[row * Self::SIDE_LEN..(row + 1_usize) * Self::SIDE_LEN].all()
        }) || (0_usize..Self::SIDE_LEN).any(|col| {
            (0_usize..Self::SIDE_LEN).all(|row| marks[row * Self::SIDE_LEN + col])
        })
    }

    fn score(&self, marks: &BoardMarks, draw: u8) -> u32 {
        self.0
            .iter()
            .enumerate()
            .filter(|(index, _)| !marks[*index])
            .map(|(_, number)| *number as u32)
            .sum::<u32>()
            * draw as u32
    }
}

impl Parse for Board {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map_res(
            many_m_n(
                Self::SIDE_LEN,
                Self::SIDE_LEN,
                terminated(
                    preceded(space0, separated_list1(space1, parse_integer::<u8>)),
                    opt(line_ending),
                ),
            ),
            |rows: Vec<Vec<u8>>| -> Result<Self, ()> {
                rows.iter()
                    .all(|row| row.len() == Self::SIDE_LEN)
                    .then(|| Self(rows.concat()))
                    .ok_or(())
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    draws: Vec<u8>,
    boards: Vec<Board>,
}

impl Solution {
    /// Plays out the full draw sequence, returning board scores in the order the boards win.
    fn winning_scores(&self) -> Vec<u32> {
        let mut marks: Vec<BoardMarks> = vec![BoardMarks::ZERO; self.boards.len()];
        let mut has_won: Vec<bool> = vec![false; self.boards.len()];
        let mut scores: Vec<u32> = Vec::new();

        for draw in self.draws.iter().copied() {
            for (board_index, board) in self.boards.iter().enumerate() {
                if has_won[board_index] {
                    continue;
                }

                if let Some(cell_index) = board.0.iter().position(|number| *number == draw) {
                    marks[board_index].set(cell_index, true);

                    if Board::has_won(&marks[board_index]) {
                        has_won[board_index] = true;
                        scores.push(board.score(&marks[board_index], draw));
                    }
                }
            }
        }

        scores
    }

    fn first_winning_score(&self) -> u32 {
        self.winning_scores().first().copied().unwrap_or_default()
    }

    fn last_winning_score(&self) -> u32 {
        self.winning_scores().last().copied().unwrap_or_default()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                terminated(separated_list1(tag(","), parse_integer::<u8>), line_ending),
                many1(preceded(line_ending, Board::parse)),
            )),
            |(draws, boards)| Self { draws, boards },
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.first_winning_score());
    }

    fn q2_internal(&mut self, args: &QuestionArgs) {
        dbg!(self.last_winning_score());

        if args.verbose {
            dbg!(self.winning_scores());
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
        7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1\n\
        \n\
        22 13 17 11  0\n \
        8  2 23  4 24\n\
        21  9 14 16  7\n \
        6 10  3 18  5\n \
        1 12 20 15 19\n\
        \n \
        3 15  0  2 22\n \
        9 18 13 17  5\n\
        19  8  7 25 23\n\
        20 11 10 24  4\n\
        14 21 16 12  6\n\
        \n\
        14 21 17 24  4\n\
        10 16 15  9 19\n\
        18  8 23 26 20\n\
        22 11 13  6  5\n \
        2  0 12  3  7\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| SOLUTION_STR.try_into().unwrap())
    }

    #[test]
    fn test_try_from_str() {
        let solution: &Solution = solution();

        assert_eq!(solution.draws.len(), 27_usize);
        assert_eq!(solution.boards.len(), 3_usize);
        assert_eq!(
            solution.boards[2_usize],
            Board(vec![
                14_u8, 21_u8, 17_u8, 24_u8, 4_u8, 10_u8, 16_u8, 15_u8, 9_u8, 19_u8, 18_u8, 8_u8,
                23_u8, 26_u8, 20_u8, 22_u8, 11_u8, 13_u8, 6_u8, 5_u8, 2_u8, 0_u8, 12_u8, 3_u8,
                7_u8,
            ])
        );
    }

    #[test]
    fn test_first_winning_score() {
        assert_eq!(solution().first_winning_score(), 4512_u32);
    }

    #[test]
    fn test_last_winning_score() {
        assert_eq!(solution().last_winning_score(), 1924_u32);
    }
}
