use {
    crate::*,
    glam::IVec2,
    nom::{combinator::map, error::Error, Err, IResult},
};

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum LetterCell {
        #[default]
        X = LETTER_X = b'X',
        M = LETTER_M = b'M',
        A = LETTER_A = b'A',
        S = LETTER_S = b'S',
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<LetterCell>);

impl Solution {
    const WORD: [LetterCell; 4_usize] = [LetterCell::X, LetterCell::M, LetterCell::A, LetterCell::S];

    fn iter_all_directions() -> impl Iterator<Item = IVec2> {
        (-1_i32..=1_i32).flat_map(move |y| {
            (-1_i32..=1_i32)
                .filter_map(move |x| (x != 0_i32 || y != 0_i32).then(|| IVec2::new(x, y)))
        })
    }

    fn word_count(&self) -> usize {
        self.0
            .iter_positions_with_cell(&LetterCell::X)
            .map(|pos| {
                Self::iter_all_directions()
                    .filter(|delta| {
                        (1_i32..Self::WORD.len() as i32).all(|step| {
                            self.0.get(pos + *delta * step)
                                == Some(&Self::WORD[step as usize])
                        })
                    })
                    .count()
            })
            .sum()
    }

    /// Both diagonals through an `A` must read `MAS` or `SAM`.
    fn cross_count(&self) -> usize {
        self.0
            .iter_positions_with_cell(&LetterCell::A)
            .filter(|pos| {
                let diagonal_matches = |delta: IVec2| {
                    matches!(
                        (
                            self.0.get(*pos - delta).copied(),
                            self.0.get(*pos + delta).copied(),
                        ),
                        (Some(LetterCell::M), Some(LetterCell::S))
                            | (Some(LetterCell::S), Some(LetterCell::M))
                    )
                };

                diagonal_matches(IVec2::ONE) && diagonal_matches(IVec2::new(1_i32, -1_i32))
            })
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.word_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.cross_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
