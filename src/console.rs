//! Text front end: asks for the dice, then rolls them on demand.

use std::io::{BufRead, Write};

use log::debug;
use rand::Rng;

use crate::{
    chart::{column_chart, star_chart, ChartStyle, DEFAULT_STAR_UNIT},
    error::Result,
    histogram::Histogram,
    input::{parse_command, parse_entered_count, Command, MAX_QUANTITY},
    session::{Session, DEFAULT_TRIALS},
};

const QUIT_HINT: &str = "Enter \"[q]uit\" or \"[e]xit\" at the menu to close the program.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Trials run by a bulk roll.
    pub trials: u32,
    /// Trials represented by one `*` of the star chart.
    pub star_unit: u32,
    pub chart: ChartStyle,
    /// Height of the column chart.
    pub rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            star_unit: DEFAULT_STAR_UNIT,
            chart: ChartStyle::Stars,
            rows: 20,
        }
    }
}

pub struct Console<I, O> {
    input: I,
    output: O,
    settings: Settings,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Runs until the user quits or the input ends.
    ///
    /// The user is asked for the dice when `face_counts` is `None`.
    pub fn run(&mut self, face_counts: Option<Vec<u32>>, rng: impl Rng) -> Result<()> {
        let face_counts = match face_counts {
            Some(face_counts) => face_counts,
            None => match self.prompt_face_counts()? {
                Some(face_counts) => face_counts,
                None => return Ok(()),
            },
        };

        let mut session = Session::with_rng(&face_counts, self.settings.trials, rng)?;
        writeln!(self.output, "\n{}", session.collection())?;
        writeln!(self.output, "\n{QUIT_HINT}")?;

        loop {
            writeln!(
                self.output,
                "\nRoll Options: \t 1. Once \t 2. {} times",
                session.trials()
            )?;
            write!(
                self.output,
                "Enter an option number or type in the option to select: "
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    debug!("rejected selection {:?}: {}", line.trim(), e);
                    writeln!(self.output, "Invalid selection. Try again.")?;
                    continue;
                }
            };
            debug!("selected {:?}", command);

            match command {
                Command::RollOnce => {
                    let sum = session.roll_once();
                    writeln!(self.output, "\nRolled all dice once.")?;
                    writeln!(self.output, "The sum of all up sides is: {sum}")?;
                    for (i, die) in session.collection().dice().iter().enumerate() {
                        let up_side = die.up_side();
                        writeln!(self.output, "Current up side of Die {}: {up_side}", i + 1)?;
                    }
                }
                Command::RollMany => {
                    let trials = session.trials();
                    let histogram = session.roll_many()?;
                    self.print_histogram(histogram, trials)?;
                }
                Command::Describe => {
                    writeln!(self.output, "\n{}", session.collection())?;
                }
                Command::Configure(face_counts) => match session.reconfigure(&face_counts) {
                    Ok(_) => {
                        writeln!(self.output, "\n{}", session.collection())?;
                        // Only set when the change reran the bulk roll.
                        if let Some(histogram) = session.histogram() {
                            self.print_histogram(histogram, session.trials())?;
                        }
                    }
                    Err(e) if e.reason().is_some() => {
                        writeln!(self.output, "{e}. Try again.")?;
                    }
                    Err(e) => return Err(e),
                },
                Command::Quit => {
                    writeln!(self.output, "Bye!")?;
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_histogram(&mut self, histogram: &Histogram, trials: u32) -> Result<()> {
        writeln!(
            self.output,
            "\nHistogram of {trials} times rolling all dice: "
        )?;
        match self.settings.chart {
            ChartStyle::Stars => {
                let unit = self.settings.star_unit.max(1);
                writeln!(self.output, "{}", star_chart(histogram, unit))?;
                writeln!(self.output, "Each star represents {unit}.")?;
            }
            ChartStyle::Columns => {
                write!(self.output, "{}", column_chart(histogram, self.settings.rows))?;
            }
        }
        Ok(())
    }

    fn prompt_face_counts(&mut self) -> Result<Option<Vec<u32>>> {
        writeln!(
            self.output,
            "\n* Entries of decimal numbers get the decimal places truncated."
        )?;
        writeln!(
            self.output,
            "* Entries of negative numbers get converted into positive numbers."
        )?;
        writeln!(self.output, "* A die has at least 2 sides.")?;
        writeln!(
            self.output,
            "* Type `dice 3d6, 4` at the menu to change the dice later.\n"
        )?;

        let amount = self.prompt_number("How many dice? ", 1, "Need at least 1 die.")?;
        let Some(amount) = amount else {
            return Ok(None);
        };
        if amount > MAX_QUANTITY {
            writeln!(self.output, "Using the first {MAX_QUANTITY} dice only.")?;
        }

        let mut face_counts = Vec::new();
        for i in 1..=amount.min(MAX_QUANTITY) {
            let prompt = format!("Enter the sides for Die {i}: ");
            match self.prompt_number(&prompt, 2, "Need at least 2 sides.")? {
                Some(sides) => face_counts.push(sides),
                None => return Ok(None),
            }
        }

        Ok(Some(face_counts))
    }

    /// Asks until a number of at least `min` is entered, `None` if the input ended first.
    fn prompt_number(&mut self, prompt: &str, min: u32, too_small: &str) -> Result<Option<u32>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_entered_count(&line) {
                Ok(n) if n >= min => return Ok(Some(n)),
                Ok(_) => writeln!(self.output, "{too_small} Try again.")?,
                Err(_) => writeln!(self.output, "Only numbers are allowed. Try again.")?,
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::{rngs::StdRng, SeedableRng};
    use test_log::test;

    use super::*;

    fn run(input: &str, face_counts: Option<Vec<u32>>, settings: Settings) -> String {
        let mut console = Console::new(Cursor::new(input.to_owned()), Vec::new(), settings);
        console.run(face_counts, StdRng::seed_from_u64(1)).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    fn settings() -> Settings {
        Settings {
            trials: 1000,
            star_unit: 10,
            ..Settings::default()
        }
    }

    #[test]
    fn test_prompts_for_dice() {
        let output = run("2\n6\n4\nq\n", None, settings());

        assert!(output.contains("How many dice? "));
        assert!(output.contains("Enter the sides for Die 1: "));
        assert!(output.contains("Enter the sides for Die 2: "));
        assert!(output.contains("Die 1 has 6 sides"));
        assert!(output.contains("Die 2 has 4 sides"));
        assert!(output.contains("Min sum of roll: 2"));
        assert!(output.contains("Max sum of roll: 10"));
        assert!(output.ends_with("Bye!\n"));
    }

    #[test]
    fn test_prompts_retry_on_invalid_numbers() {
        let output = run("0\nabc\n1\n1\nsix\n3\nexit\n", None, settings());

        assert!(output.contains("Need at least 1 die. Try again."));
        assert!(output.contains("Only numbers are allowed. Try again."));
        assert!(output.contains("Need at least 2 sides. Try again."));
        assert!(output.contains("Die 1 has 3 sides"));
    }

    #[test]
    fn test_prompts_truncate_decimals_and_drop_signs() {
        let output = run("-2\n4.7\n-1.9\n-8\nq\n", None, settings());

        assert!(output.contains("decimal places truncated"));
        assert!(output.contains("Enter the sides for Die 2: "));
        assert!(output.contains("Die 1 has 4 sides"));
        assert!(output.contains("Need at least 2 sides. Try again."));
        assert!(output.contains("Die 2 has 8 sides"));
    }

    #[test]
    fn test_input_ends_while_prompting() {
        let output = run("2\n6\n", None, settings());
        assert!(!output.contains("Roll Options"));
    }

    #[test]
    fn test_roll_once() {
        let output = run("once\nq\n", Some(vec![6, 6]), settings());

        assert!(output.contains("Rolled all dice once."));
        assert!(output.contains("The sum of all up sides is: "));
        assert!(output.contains("Current up side of Die 1: "));
        assert!(output.contains("Current up side of Die 2: "));
    }

    #[test]
    fn test_roll_many_prints_star_chart() {
        let output = run("2\nq\n", Some(vec![2]), settings());

        assert!(output.contains("Histogram of 1000 times rolling all dice: "));
        assert!(output.contains("\n1: "));
        assert!(output.contains("\n2: "));
        assert!(output.contains("Each star represents 10."));
    }

    #[test]
    fn test_roll_many_prints_column_chart() {
        let settings = Settings {
            chart: ChartStyle::Columns,
            rows: 5,
            ..settings()
        };
        let output = run("100000\nq\n", Some(vec![3]), settings);

        assert!(output.contains("Histogram of 1000 times rolling all dice: "));
        assert!(output.contains("#"));
        assert!(!output.contains("Each star represents"));
    }

    #[test]
    fn test_invalid_selection() {
        let output = run("twice\nq\n", Some(vec![6]), settings());
        assert!(output.contains("Invalid selection. Try again."));
    }

    #[test]
    fn test_configure_before_bulk_roll() {
        let output = run("dice 2d8\nq\n", Some(vec![6]), settings());

        assert!(output.contains("Max sum of roll: 16"));
        assert!(!output.contains("Histogram of"));
    }

    #[test]
    fn test_configure_after_bulk_roll_reruns() {
        let output = run("2\ndice 2d8\nq\n", Some(vec![6]), settings());
        assert_eq!(output.matches("Histogram of 1000 times").count(), 2);
        assert!(output.contains("\n16: ") || output.contains("\n15: "));
    }

    #[test]
    fn test_configure_too_many_sides() {
        let output = run("dice 2d3000000000\nshow\nq\n", Some(vec![6]), settings());

        assert!(output.contains("the sides of all dice add up to more than 1000000. Try again."));
        assert_eq!(output.matches("Die 1 has 6 sides").count(), 2);
        assert!(output.ends_with("Bye!\n"));
    }

    #[test]
    fn test_configure_invalid_dice() {
        let output = run("dice 6, 1\nshow\nq\n", Some(vec![4]), settings());

        assert!(output.contains("a die needs at least 2 sides, got 1. Try again."));
        assert_eq!(output.matches("Die 1 has 4 sides").count(), 2);
    }
}
