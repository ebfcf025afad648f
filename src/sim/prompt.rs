use std::io::{BufRead, Write};

use super::bethe::{Material, Projectile};
use super::SimError;

pub const MAX_ATTEMPTS: usize = 3;

/// A numbered list of choices read from a terminal.
#[derive(Debug)]
pub struct Menu<T: 'static> {
    pub title: &'static str,
    /// Used in the "Too many attempts at input ..." error.
    pub noun: &'static str,
    pub options: &'static [(&'static str, T)],
}

pub const MATERIAL_MENU: Menu<Material> = Menu {
    title: "Choose target material",
    noun: "material",
    options: &[("Aluminum", Material::Aluminum), ("Copper", Material::Copper)],
};

pub const PROJECTILE_MENU: Menu<Projectile> = Menu {
    title: "Choose projectile",
    noun: "projectile",
    options: &[
        ("Proton", Projectile::Proton),
        ("Alpha particle", Projectile::Alpha),
        ("Muon", Projectile::Muon),
    ],
};

impl<T: Copy + 'static> Menu<T> {
    /// "1 or 2", "1, 2 or 3"
    fn choices_hint(&self) -> String {
        let numbers: Vec<String> = (1..=self.options.len()).map(|n| n.to_string()).collect();
        match numbers.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} or {last}", rest.join(", ")),
            Some((last, _)) => last.clone(),
            None => String::new(),
        }
    }

    fn pick(&self, answer: &str) -> Option<T> {
        let n: usize = answer.trim().parse().ok()?;
        let idx = n.checked_sub(1)?;
        self.options.get(idx).map(|&(_, value)| value)
    }
}

/// Show the menu and read a choice, allowing [`MAX_ATTEMPTS`] tries.
/// End of input counts as a failed try.
pub fn choose<T, R, W>(input: &mut R, output: &mut W, menu: &Menu<T>) -> Result<T, SimError>
where
    T: Copy + 'static,
    R: BufRead,
    W: Write,
{
    for attempt in 1..=MAX_ATTEMPTS {
        if attempt > 1 {
            writeln!(output, "! Try again. Attempt: {attempt}/{MAX_ATTEMPTS}")?;
        }
        writeln!(output, "{}:", menu.title)?;
        for (i, (label, _)) in menu.options.iter().enumerate() {
            writeln!(output, "{}. {label}", i + 1)?;
        }
        write!(output, "Enter choice ({}): ", menu.choices_hint())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? > 0 {
            if let Some(value) = menu.pick(&line) {
                return Ok(value);
            }
        }
        log::warn!("invalid {} choice {:?}", menu.noun, line.trim());
    }

    Err(SimError::TooManyAttempts { what: menu.noun })
}

/// Ask a yes/no question; anything not starting with `y`/`Y` is a no.
pub fn yes_or_no<R, W>(input: &mut R, output: &mut W, question: &str) -> Result<bool, SimError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{question} (y/n): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim_start().chars().next(), Some('y' | 'Y')))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_menu<T: Copy + 'static>(answers: &str, menu: &Menu<T>) -> (Result<T, SimError>, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = choose(&mut input, &mut output, menu);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn first_valid_answer_wins() {
        let (result, output) = run_menu("2\n", &MATERIAL_MENU);
        assert_eq!(result.unwrap(), Material::Copper);
        assert!(output.contains("1. Aluminum\n2. Copper\n"));
        assert!(output.contains("Enter choice (1 or 2): "));
        assert!(!output.contains("Try again"));
    }

    #[test]
    fn invalid_answers_are_retried() {
        let (result, output) = run_menu("7\nmuon\n3\n", &PROJECTILE_MENU);
        assert_eq!(result.unwrap(), Projectile::Muon);
        assert!(output.contains("Enter choice (1, 2 or 3): "));
        assert!(output.contains("! Try again. Attempt: 2/3"));
        assert!(output.contains("! Try again. Attempt: 3/3"));
    }

    #[test]
    fn three_failures_give_up() {
        let (result, _) = run_menu("0\n\nx\n1\n", &PROJECTILE_MENU);
        match result {
            Err(SimError::TooManyAttempts { what }) => assert_eq!(what, "projectile"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn end_of_input_counts_as_failure() {
        let (result, output) = run_menu("", &MATERIAL_MENU);
        assert!(matches!(
            result,
            Err(SimError::TooManyAttempts { what: "material" })
        ));
        assert!(output.contains("Attempt: 3/3"));
    }

    #[test]
    fn yes_is_any_answer_starting_with_y() {
        for (answer, expected) in [("y\n", true), ("Yes\n", true), ("n\n", false), ("", false)] {
            let mut input = Cursor::new(answer.as_bytes().to_vec());
            let mut output = Vec::new();
            let got = yes_or_no(&mut input, &mut output, "Plot?").unwrap();
            assert_eq!(got, expected, "answer {answer:?}");
            assert_eq!(String::from_utf8(output).unwrap(), "Plot? (y/n): ");
        }
    }
}
