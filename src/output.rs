use std::io::{self, BufWriter, Write};

use itertools::Itertools;

use crate::{search::Solution, word::Word};

/// The words of `solution` in the order they were chosen, space separated.
pub fn line(words: &[Word], solution: &Solution) -> String {
    solution.iter().map(|&id| words[id as usize]).join(" ")
}

/// Writes one line per solution.
pub fn write_solutions<W: Write>(out: W, words: &[Word], solutions: &[Solution]) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for solution in solutions {
        writeln!(out, "{}", line(words, solution))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<Word> {
        ["abcde", "fghij", "klmno", "pqrst", "uvwxy"]
            .iter()
            .enumerate()
            .map(|(id, text)| Word::new(id as u32, text.as_bytes()).unwrap())
            .collect()
    }

    #[test]
    fn lines_keep_chosen_order() {
        let words = words();
        assert_eq!(line(&words, &[3, 4, 1, 0, 2]), "pqrst uvwxy fghij abcde klmno");
    }

    #[test]
    fn writes_one_line_per_solution() {
        let words = words();
        let mut out = Vec::new();
        write_solutions(&mut out, &words, &[[0, 1, 2, 3, 4], [4, 3, 2, 1, 0]]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "abcde fghij klmno pqrst uvwxy\nuvwxy pqrst klmno fghij abcde\n"
        );
    }

    #[test]
    fn write_errors_surface() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        assert!(write_solutions(Broken, &words(), &[[0, 1, 2, 3, 4]]).is_err());
    }
}
