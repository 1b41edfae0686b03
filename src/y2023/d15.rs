use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::{alpha1, line_ending},
        combinator::{consumed, map, opt, value},
        error::Error,
        multi::separated_list1,
        sequence::{pair, preceded, terminated},
        Err, IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
enum Operation {
    Remove,
    Insert(u8),
}

impl Parse for Operation {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            value(Self::Remove, tag("-")),
            map(preceded(tag("="), parse_integer::<u8>), Self::Insert),
        ))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Step {
    /// The HASH of the full step string, for the verification sum.
    hash: u8,
    label: String,
    operation: Operation,
}

impl Parse for Step {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            consumed(pair(alpha1, Operation::parse)),
            |(step_str, (label, operation)): (&str, (&str, Operation))| Self {
                hash: hash_ascii(step_str),
                label: label.into(),
                operation,
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Step>);

impl Solution {
    const BOX_COUNT: usize = 256_usize;

    fn verification_sum(&self) -> u32 {
        self.0.iter().map(|step| step.hash as u32).sum()
    }

    fn focusing_power(&self) -> usize {
        let mut boxes: Vec<Vec<(&str, u8)>> = vec![Vec::new(); Self::BOX_COUNT];

        for step in &self.0 {
            let lenses: &mut Vec<(&str, u8)> = &mut boxes[hash_ascii(&step.label) as usize];

            match step.operation {
                Operation::Remove => lenses.retain(|(label, _)| *label != step.label),
                Operation::Insert(focal_len) => {
                    match lenses.iter_mut().find(|(label, _)| *label == step.label) {
                        Some(lens) => lens.1 = focal_len,
                        None => lenses.push((&step.label, focal_len)),
                    }
                }
            }
        }

        boxes
            .iter()
            .enumerate()
            .flat_map(|(box_index, lenses)| {
                lenses.iter().enumerate().map(move |(slot_index, (_, focal_len))| {
                    (box_index + 1_usize) * (slot_index + 1_usize) * *focal_len as usize
                })
            })
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            terminated(separated_list1(tag(","), Step::parse), opt(line_ending)),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.verification_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.focusing_power());
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

    const SOLUTION_STR: &'static str =
        "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| SOLUTION_STR.try_into().unwrap())
    }

    #[test]
    fn test_try_from_str() {
        let solution: &Solution = solution();

        assert_eq!(solution.0.len(), 11_usize);
        assert_eq!(
            solution.0.first(),
            Some(&Step {
                hash: 30_u8,
                label: "rn".to_owned(),
                operation: Operation::Insert(1_u8),
            })
        );
        assert_eq!(
            solution.0.get(1_usize),
            Some(&Step {
                hash: 253_u8,
                label: "cm".to_owned(),
                operation: Operation::Remove,
            })
        );
    }

    #[test]
    fn test_verification_sum() {
        assert_eq!(solution().verification_sum(), 1320_u32);
    }

    #[test]
    fn test_focusing_power() {
        assert_eq!(solution().focusing_power(), 145_usize);
    }
}
