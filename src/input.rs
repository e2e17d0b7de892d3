use winnow::{
    ascii::{dec_uint, digit0, space0, space1, Caseless},
    combinator::{alt, opt, preceded, separated, separated_pair, terminated},
    error::{
        StrContext::{Expected, Label},
        StrContextValue::Description,
    },
    token::one_of,
    PResult, Parser,
};

use crate::error::{Error, Result};

/// Most dice a single `{quantity}d{sides}` entry can stand for.
pub const MAX_QUANTITY: u32 = 999;

/// What the user asked for at the console menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `1`, `once`, `one time` or `1 time`
    RollOnce,
    /// `2`, `100000`, `100,000`, `100000 times` or `100,000 times`
    RollMany,
    /// `show` or `info`
    Describe,
    /// `dice {face counts}`\
    /// Replaces the dice with new ones.
    Configure(Vec<u32>),
    /// `quit`, `q`, `exit` or `e`
    Quit,
}

/// Parses a list of face counts, one per die.
///
/// Entries are separated by commas or spaces and are either the amount of
/// sides of a die (`6`) or a group of identical dice (`3d6`, `d8`).
pub fn parse_face_counts(input: &str) -> Result<Vec<u32>> {
    face_counts
        .parse(input.trim())
        .map_err(|e| Error::Parse(e.to_string()))
}

/// Parses a number typed at a prompt, dropping its sign and decimal places.
///
/// `-6` reads as 6 and `4.9` as 4.
pub fn parse_entered_count(input: &str) -> Result<u32> {
    entered_count
        .parse(input.trim())
        .map_err(|e| Error::Parse(e.to_string()))
}

/// Parses a menu selection, ignoring case.
pub fn parse_command(input: &str) -> Result<Command> {
    command
        .parse(input.trim())
        .map_err(|e| Error::Parse(e.to_string()))
}

fn face_counts(input: &mut &str) -> PResult<Vec<u32>> {
    separated(1.., face_entry, list_separator)
        .map(|entries: Vec<Vec<u32>>| entries.concat())
        .context(Label("face counts"))
        .parse_next(input)
}

fn face_entry(input: &mut &str) -> PResult<Vec<u32>> {
    alt((
        separated_pair(opt(quantity), one_of(['d', 'D']), count)
            .map(|(quantity, sides)| vec![sides; quantity.unwrap_or(1) as usize]),
        count.map(|sides| vec![sides]),
    ))
    .context(Label("die"))
    .parse_next(input)
}

fn quantity(input: &mut &str) -> PResult<u32> {
    count
        .verify(|quantity: &u32| *quantity <= MAX_QUANTITY)
        .context(Label("dice quantity"))
        .context(Expected(Description("quantity must be at most 999")))
        .parse_next(input)
}

fn count(input: &mut &str) -> PResult<u32> {
    dec_uint.context(Label("number")).parse_next(input)
}

fn entered_count(input: &mut &str) -> PResult<u32> {
    preceded(opt(one_of(['-', '+'])), terminated(count, opt(('.', digit0))))
        .parse_next(input)
}

fn list_separator(input: &mut &str) -> PResult<()> {
    alt(((space0, ',', space0).void(), space1.void())).parse_next(input)
}

fn command(input: &mut &str) -> PResult<Command> {
    alt((
        preceded((Caseless("dice"), space1), face_counts).map(Command::Configure),
        alt((
            Caseless("100,000 times"),
            Caseless("100000 times"),
            "100,000",
            "100000",
            "2",
        ))
        .value(Command::RollMany),
        alt((Caseless("1 time"), Caseless("one time"), Caseless("once"), "1"))
            .value(Command::RollOnce),
        alt((Caseless("show"), Caseless("info"))).value(Command::Describe),
        alt((
            Caseless("quit"),
            Caseless("exit"),
            Caseless("q"),
            Caseless("e"),
        ))
        .value(Command::Quit),
    ))
    .context(Label("menu option"))
    .parse_next(input)
}
