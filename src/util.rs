pub use {disjoint_set::*, graph::*, grid::*};

pub use clap::Parser;

use {
    memmap::Mmap,
    nom::{
        bytes::complete::tag,
        character::complete::digit1,
        combinator::{map, map_res, opt},
        sequence::{pair, preceded},
        IResult,
    },
    num::Integer,
    std::{
        any::type_name,
        fmt::Debug,
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        str::{from_utf8, FromStr, Utf8Error},
    },
};

mod disjoint_set;
mod graph;
mod grid;

#[derive(Debug, Parser)]
pub struct QuestionArgs {
    /// Print extra information, if there is any
    #[arg(short, long, default_value_t)]
    pub verbose: bool,
}

/// Arguments for program execution
#[derive(Debug, Parser)]
pub struct Args {
    /// Input file path. Defaults to `input/y{year}/d{day}.txt`.
    #[arg(short, long, default_value_t)]
    input_file_path: String,

    /// The year to run
    #[arg(short, long)]
    pub year: u16,

    /// The day to run
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=25))]
    pub day: u8,

    /// The question to run, both if omitted
    #[arg(short, long, default_value_t, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub question: u8,

    #[command(flatten)]
    pub question_args: QuestionArgs,
}

impl Args {
    fn try_to_intermediate<I>(&self) -> Option<I>
    where
        I: for<'a> TryFrom<&'a str>,
        for<'a> <I as TryFrom<&'a str>>::Error: Debug,
    {
        let default_file_path: String;
        let file_path: &str = if self.input_file_path.is_empty() {
            default_file_path = format!("input/y{}/d{}.txt", self.year, self.day);

            &default_file_path
        } else {
            &self.input_file_path
        };

        // SAFETY: This isn't truly safe, we're just hoping nobody touches our file before we're
        // done parsing it
        unsafe {
            open_utf8_file(file_path, |s| {
                s.try_into().map_or_else(
                    |error| {
                        eprintln!(
                            "Failed to convert file \"{file_path}\" to type {}:\n{error:#?}",
                            type_name::<I>()
                        );

                        None
                    },
                    Some,
                )
            })
        }
        .unwrap_or_else(|error| {
            eprintln!("Failed to open UTF-8 file \"{file_path}\":\n{error}");

            None
        })
    }
}

/// Opens a memory-mapped UTF-8 file at a specified path, and passes a `&str` over the file to a
/// provided callback function
///
/// # Safety
///
/// `Mmap::map` is unsafe: there is no guarantee that an external process won't modify the file
/// while this function refers to it as an immutable string slice.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> IoError {
        IoError::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}

pub trait RunQuestions
where
    Self: Sized + for<'a> TryFrom<&'a str>,
    for<'a> <Self as TryFrom<&'a str>>::Error: Debug,
{
    fn q1_internal(&mut self, args: &QuestionArgs);
    fn q2_internal(&mut self, args: &QuestionArgs);

    fn q1(args: &Args) {
        if let Some(mut intermediate) = args.try_to_intermediate::<Self>() {
            intermediate.q1_internal(&args.question_args);
        }
    }

    fn q2(args: &Args) {
        if let Some(mut intermediate) = args.try_to_intermediate::<Self>() {
            intermediate.q2_internal(&args.question_args);
        }
    }

    fn both(args: &Args) {
        if let Some(mut intermediate) = args.try_to_intermediate::<Self>() {
            intermediate.q1_internal(&args.question_args);
            intermediate.q2_internal(&args.question_args);
        }
    }
}

#[derive(Clone)]
pub struct Day {
    pub q1: fn(&Args),
    pub q2: fn(&Args),
    pub both: fn(&Args),
}

impl Day {
    fn run(&self, args: &Args) {
        match args.question {
            0_u8 => (self.both)(args),
            1_u8 => (self.q1)(args),
            2_u8 => (self.q2)(args),
            question => unreachable!(
                "A valid Args will have a question value in the range 0..=2, but {question} was \
                encountered.\n\
                Args:\n\
                {args:#?}"
            ),
        }
    }
}

pub struct DayParams<'s> {
    pub string: &'s str,
    pub day: Day,
}

pub struct YearParams<'s> {
    pub string: &'s str,
    pub day_params: Vec<DayParams<'s>>,
}

fn parse_tagged_int<'i, I: FromStr>(t: &str, input: &'i str) -> IResult<&'i str, I> {
    preceded(tag(t), map_res(digit1, I::from_str))(input)
}

pub struct Year {
    days: Vec<Option<Day>>,
    min: u8,
}

impl Year {
    fn run(&self, args: &Args) {
        match args
            .day
            .checked_sub(self.min)
            .and_then(|day| self.days.get(day as usize))
        {
            None => panic!(
                "Queried day {} is out of the range of valid days, {}..{}.\n\
                Args:\n\
                {args:#?}",
                args.day,
                self.min,
                self.min as usize + self.days.len()
            ),
            Some(None) => panic!(
                "Queried day {} has no registered questions.\n\
                Args:\n\
                {args:#?}",
                args.day
            ),
            Some(Some(day)) => day.run(args),
        }
    }

    fn try_from_day_params(day_params: Vec<DayParams>) -> Option<Self> {
        let days: Vec<(u8, Day)> = day_params
            .into_iter()
            .filter_map(|DayParams { string, day }| {
                parse_tagged_int::<u8>("d", string).map_or_else(
                    |error| {
                        eprintln!("Invalid day string \"{string}\"\nError:\n{error}");

                        None
                    },
                    |(_, day_index)| Some((day_index, day)),
                )
            })
            .collect();

        let min: u8 = days.iter().map(|(day_index, _)| *day_index).min()?;
        let max: u8 = days.iter().map(|(day_index, _)| *day_index).max()?;
        let mut day_options: Vec<Option<Day>> = vec![None; (max + 1_u8 - min) as usize];

        for (day_index, day) in days {
            day_options[(day_index - min) as usize] = Some(day);
        }

        Some(Self {
            days: day_options,
            min,
        })
    }
}

#[derive(Default)]
pub struct Solutions {
    years: Vec<Option<Year>>,
    min: u16,
}

impl Solutions {
    pub fn run(&self, args: &Args) {
        match args
            .year
            .checked_sub(self.min)
            .and_then(|year| self.years.get(year as usize))
        {
            None => panic!(
                "Queried year {} is out of the range of valid years, {}..{}.\n\
                Args:\n\
                {args:#?}",
                args.year,
                self.min,
                self.min as usize + self.years.len()
            ),
            Some(None) => panic!(
                "Queried year {} has no registered days.\n\
                Args:\n\
                {args:#?}",
                args.year
            ),
            Some(Some(days)) => days.run(args),
        }
    }

    pub fn try_from_year_params(year_params: Vec<YearParams>) -> Option<Self> {
        let years: Vec<(u16, Option<Year>)> = year_params
            .into_iter()
            .filter_map(|YearParams { string, day_params }| {
                parse_tagged_int::<u16>("y", string).map_or_else(
                    |error| {
                        eprintln!("Invalid year string \"{string}\"\nError:\n{error}");

                        None
                    },
                    |(_, year_index)| Some((year_index, Year::try_from_day_params(day_params))),
                )
            })
            .collect();

        let min: u16 = years.iter().map(|(year_index, _)| *year_index).min()?;
        let max: u16 = years.iter().map(|(year_index, _)| *year_index).max()?;
        let mut year_options: Vec<Option<Year>> = Vec::with_capacity((max + 1_u16 - min) as usize);

        year_options.resize_with((max + 1_u16 - min) as usize, || None);

        for (year_index, year) in years {
            year_options[(year_index - min) as usize] = year;
        }

        Some(Solutions {
            years: year_options,
            min,
        })
    }
}

#[macro_export]
macro_rules! solutions {
    [ $( ( $year:ident, [ $( $day:ident ),* $(,)?] ) ),* $(,)? ] => {
        $(
            pub mod $year {
                $(
                    pub mod $day;
                )*
            }
        )*

        pub fn solutions() -> &'static $crate::Solutions {
            static ONCE_LOCK: std::sync::OnceLock<$crate::Solutions> = std::sync::OnceLock::new();

            ONCE_LOCK.get_or_init(|| $crate::Solutions::try_from_year_params(vec![ $(
                $crate::YearParams {
                    string: stringify!($year),
                    day_params: vec![ $(
                        $crate::DayParams {
                            string: stringify!($day),
                            day: $crate::Day {
                                q1: <$year::$day::Solution as $crate::RunQuestions>::q1,
                                q2: <$year::$day::Solution as $crate::RunQuestions>::q2,
                                both: <$year::$day::Solution as $crate::RunQuestions>::both,
                            }
                        },
                    )* ]
                },
            )* ]).unwrap_or_else($crate::Solutions::default))
        }
    };
}

pub trait Parse: Sized {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self>;
}

pub fn parse_integer<'i, I: FromStr + Integer>(input: &'i str) -> IResult<&'i str, I> {
    map(
        pair(opt(tag("-")), map_res(digit1, I::from_str)),
        |(minus, value): (Option<&str>, I)| {
            if minus.is_some() {
                I::zero() - value
            } else {
                value
            }
        },
    )(input)
}

#[macro_export]
macro_rules! define_cell {
    {
        #[repr(u8)]
        $(#[$attr:meta])*
        $pub:vis enum $cell:ident { $(
            $(#[$variant_attr:meta])*
            $variant:ident = $variant_const:ident = $variant_u8:expr
        ),* $(,)? }
    } => {
        #[repr(u8)]
        $(#[$attr])*
        $pub enum $cell { $(
            $(#[$variant_attr])*
            $variant = Self::$variant_const,
        )* }

        impl $cell {
            $(
                const $variant_const: u8 = $variant_u8;
            )*
            const STR: &'static str =
                // SAFETY: Trivial
                unsafe { ::std::str::from_utf8_unchecked(&[$(
                    $cell::$variant_const,
                )*]) };
        }

        unsafe impl IsValidAscii for $cell {}

        impl Parse for $cell {
            fn parse<'i>(input: &'i str) -> ::nom::IResult<&'i str, Self> {
                ::nom::combinator::map(
                    ::nom::character::complete::one_of($cell::STR),
                    |value: char| { $cell::try_from(value).unwrap() }
                )(input)
            }
        }

        impl TryFrom<u8> for $cell {
            type Error = ();

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $(
                        Self::$variant_const => Ok(Self::$variant),
                    )*
                    _ => Err(()),
                }
            }
        }

        impl TryFrom<char> for $cell {
            type Error = ();

            fn try_from(value: char) -> Result<Self, Self::Error> {
                (value as u8).try_into()
            }
        }
    }
}

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub enum Pixel {
        #[default]
        Dark = DARK = b'.',
        Light = LIGHT = b'#',
    }
}

impl Pixel {
    pub fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}

pub const fn digits(value: u64) -> u32 {
    if value == 0_u64 {
        1_u32
    } else {
        value.ilog10() + 1_u32
    }
}

// An implementation of https://en.wikipedia.org/wiki/Euclidean_algorithm
pub fn compute_gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b): (u64, u64) = (a, b);

    while b != 0_u64 {
        (a, b) = (b, a % b);
    }

    a
}

pub fn compute_lcm(a: u64, b: u64) -> u64 {
    a / compute_gcd(a, b) * b
}

/// The "Holiday ASCII String Helper" hash: fold each byte in with a multiply by 17, mod 256.
pub fn hash_ascii(s: &str) -> u8 {
    s.bytes()
        .fold(0_u8, |hash, byte| hash.wrapping_add(byte).wrapping_mul(17_u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(digits(0_u64), 1_u32);
        assert_eq!(digits(9_u64), 1_u32);
        assert_eq!(digits(10_u64), 2_u32);
        assert_eq!(digits(940200_u64), 6_u32);
    }

    #[test]
    fn test_compute_gcd() {
        assert_eq!(compute_gcd(2_u64, 3_u64), 1_u64);
        assert_eq!(compute_gcd(12_u64, 3_u64), 3_u64);
        assert_eq!(compute_gcd(25_u64, 10_u64), 5_u64);
    }

    #[test]
    fn test_compute_lcm() {
        assert_eq!(compute_lcm(4_u64, 6_u64), 12_u64);
        assert_eq!(compute_lcm(7_u64, 13_u64), 91_u64);
    }

    #[test]
    fn test_hash_ascii() {
        assert_eq!(hash_ascii("HASH"), 52_u8);
        assert_eq!(hash_ascii("rn"), 0_u8);
        assert_eq!(hash_ascii("qp"), 1_u8);
    }
}
