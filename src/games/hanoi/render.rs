//! Text rendering of the towers.
//!
//! Every peg occupies a column `2n + 2` characters wide, where `n` is the
//! disk count. Rows run from height `n` down to 0, so the top row is always
//! bare rod. For a five-disk game the start position looks like:
//!
//! ```text
//!      ||          ||          ||
//!     @_1@         ||          ||
//!    @@_2@@        ||          ||
//!   @@@_3@@@       ||          ||
//!  @@@@_4@@@@      ||          ||
//! @@@@@_5@@@@@     ||          ||
//!      A          B          C
//! ```

use super::{Disk, Peg, Towers};
use tracing::instrument;

const ROD: &str = "||";
const FILL: char = '@';
const LABEL_PAD: char = '_';

/// Renders the towers as a sequence of lines (without line breaks).
///
/// The last two lines are the peg labels and a blank line. Output depends
/// only on `towers`, so rendering the same state twice gives the same text.
pub fn render_lines(towers: &Towers) -> impl Iterator<Item = String> + '_ {
    let width = usize::from(towers.disk_count().get());
    (0..=width)
        .rev()
        .map(move |level| {
            Peg::ALL
                .into_iter()
                .map(|peg| match towers.peg(peg).get(level) {
                    Some(disk) => disk_segment(*disk, width),
                    None => rod_segment(width),
                })
                .collect::<String>()
        })
        .chain([label_line(width), String::new()])
}

/// Renders the towers as one string, each line terminated by `\n`.
#[instrument(skip(towers), fields(disks = towers.disk_count().get()))]
pub fn render(towers: &Towers) -> String {
    render_lines(towers).fold(String::new(), |mut out, line| {
        out.push_str(&line);
        out.push('\n');
        out
    })
}

/// Bare rod: `n` spaces, the rod, `n` spaces.
fn rod_segment(width: usize) -> String {
    let pad = " ".repeat(width);
    format!("{pad}{ROD}{pad}")
}

/// A disk of size `s`: `n - s` spaces, `s` fill characters, the size
/// label padded to two characters, `s` fill characters, `n - s` spaces.
fn disk_segment(disk: Disk, width: usize) -> String {
    let size = usize::from(disk.size());
    let pad = " ".repeat(width.saturating_sub(size));
    let body = FILL.to_string().repeat(size);
    let label = format!("{:>2}", disk.size()).replace(' ', &LABEL_PAD.to_string());
    format!("{pad}{body}{label}{body}{pad}")
}

/// Peg letters, each preceded by `n` spaces and followed by `n` spaces
/// except the last.
fn label_line(width: usize) -> String {
    let pad = " ".repeat(width);
    let labels: Vec<String> = Peg::ALL
        .into_iter()
        .map(|peg| format!("{pad}{}", peg.label()))
        .collect();
    labels.join(&pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hanoi::test_support::disks;

    #[test]
    fn test_rod_segment() {
        assert_eq!(rod_segment(3), "   ||   ");
    }

    #[test]
    fn test_disk_segment_matches_example() {
        assert_eq!(disk_segment(Disk::new(3), 5), "  @@@_3@@@  ");
        assert_eq!(disk_segment(Disk::new(5), 5), "@@@@@_5@@@@@");
    }

    #[test]
    fn test_two_digit_label_has_no_padding() {
        let segment = disk_segment(Disk::new(10), 10);
        assert_eq!(segment, format!("{}10{}", "@".repeat(10), "@".repeat(10)));
    }

    #[test]
    fn test_every_row_has_fixed_width() {
        let towers = Towers::initialize(disks(4));
        let lines: Vec<String> = render_lines(&towers).collect();
        let rows = &lines[..lines.len() - 2];
        assert_eq!(rows.len(), 5);
        for row in rows {
            assert_eq!(row.len(), 3 * (2 * 4 + 2));
        }
    }

    #[test]
    fn test_initial_three_disk_render() {
        let towers = Towers::initialize(disks(3));
        let expected = concat!(
            "   ||      ||      ||   \n",
            "  @_1@     ||      ||   \n",
            " @@_2@@    ||      ||   \n",
            "@@@_3@@@   ||      ||   \n",
            "   A      B      C\n",
            "\n",
        );
        assert_eq!(render(&towers), expected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let towers = Towers::initialize(disks(5));
        assert_eq!(render(&towers), render(&towers));
    }
}
