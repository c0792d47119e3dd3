//! Interactive prompt loop over any line-oriented input.

use std::io::{self, BufRead, Write};

use secrecy::SecretString;

use crate::evaluator::evaluate;
use crate::policy::CombinationPolicy;

const PASSWORD_PROMPT: &str = "Enter some password to validate: ";
const RETRY_PROMPT: &str = "Try again? (y/n): ";

/// Prompts for passwords on `input` and prints each verdict on `output`.
///
/// The loop continues while the user answers `y` to the retry prompt and
/// stops on any other answer or at end of input.
///
/// # Returns
/// The number of passwords evaluated.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    policy: &CombinationPolicy,
) -> io::Result<usize> {
    let mut checked = 0;

    loop {
        write!(output, "{PASSWORD_PROMPT}")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let password = SecretString::new(line.into());
        let verdict = evaluate(Some(&password), policy);
        checked += 1;

        writeln!(output, "Entered password is: {verdict}")?;
        write!(output, "{RETRY_PROMPT}")?;
        output.flush()?;

        match read_line(&mut input)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }

    Ok(checked)
}

/// Reads one line without its line terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(Some(line))
}
