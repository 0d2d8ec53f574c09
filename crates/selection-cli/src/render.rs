//! Plain-text rendering of page results

use selection_client::{AlphabetsView, User};
use selection_core::{LetterCounts, ParagraphCheck, Tile};

const COUNT_COLUMNS: usize = 4;
const TILE_COLUMNS: usize = 5;

/// Lay out cells in fixed-width rows
fn grid<I: IntoIterator<Item = String>>(cells: I, columns: usize) -> String {
    let cells: Vec<String> = cells.into_iter().collect();
    let width = cells.iter().map(|c| c.chars().count()).max().unwrap_or(0) + 2;
    let mut out = String::new();
    for row in cells.chunks(columns) {
        let line: String = row.iter().map(|c| format!("{c:<width$}")).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[must_use]
pub fn letter_grid(counts: &LetterCounts) -> String {
    grid(
        counts.iter().map(|(letter, count)| format!("{letter}: {count}")),
        COUNT_COLUMNS,
    )
}

#[must_use]
pub fn alphabets(view: &AlphabetsView) -> String {
    let mut out = String::from("Fetched Strings:\n");
    for s in &view.strings {
        out.push_str(&format!("  {s}\n"));
    }
    out.push_str("\nAlphabet Count:\n");
    out.push_str(&letter_grid(&view.counts));
    out
}

#[must_use]
pub fn users(users: &[User]) -> String {
    users
        .iter()
        .map(|user| format!("{}\n  {}\n  {}\n", user.name, user.email, user.website))
        .collect()
}

#[must_use]
pub fn tile_grid(tiles: &[Tile]) -> String {
    grid(tiles.iter().map(ToString::to_string), TILE_COLUMNS)
}

/// Verdict, the diff with a caret line under each line's mismatches, and the count
#[must_use]
pub fn paragraph_check(check: &ParagraphCheck) -> String {
    let mut out = format!("{}\n", check.verdict.message());
    for line in check.diff.lines() {
        out.push_str(&line.text);
        out.push('\n');
        if !line.markers.is_empty() {
            out.push_str(&line.markers);
            out.push('\n');
        }
    }
    out.push_str(&format!(
        "Number of different characters: {}\n",
        check.diff.mismatches()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use selection_core::domino::parse_tiles;
    use selection_core::paragraph::check;

    #[test]
    fn letter_grid_has_four_columns() {
        let grid = letter_grid(&LetterCounts::count(["AAB"]));
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "A: 2  B: 1  C: 0  D: 0");
        assert_eq!(lines[6], "Y: 0  Z: 0");
    }

    #[test]
    fn tile_grid_wraps_at_five() {
        let tiles = parse_tiles("1-1, 2-2, 3-3, 4-4, 5-5, 6-6").unwrap();
        assert_eq!(tile_grid(&tiles), "1-1  2-2  3-3  4-4  5-5\n6-6\n");
    }

    #[test]
    fn users_list_each_contact() {
        let users = vec![User {
            id: 1,
            name: "Leanne Graham".into(),
            email: "Sincere@april.biz".into(),
            website: "hildegard.org".into(),
        }];
        assert_eq!(
            super::users(&users),
            "Leanne Graham\n  Sincere@april.biz\n  hildegard.org\n"
        );
    }

    #[test]
    fn multi_line_report_marks_each_line() {
        let result = check("line one\nlinE two", "line one\nline two").unwrap();
        assert_eq!(
            paragraph_check(&result),
            "Input does not match\nline one\nline two\n   ^\nNumber of different characters: 1\n"
        );
    }

    #[test]
    fn paragraph_report() {
        let result = check("Hello wirld", "Hello world").unwrap();
        assert_eq!(
            paragraph_check(&result),
            "Input does not match\nHello world\n       ^\nNumber of different characters: 1\n"
        );
    }
}
