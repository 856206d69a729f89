//! Block-letter rendering of the timer readout.

/// Rows per glyph.
pub const DIGIT_HEIGHT: usize = 5;

/// `#` marks a filled cell.
fn pattern(c: char) -> Option<[&'static str; DIGIT_HEIGHT]> {
    Some(match c {
        '0' => ["###", "# #", "# #", "# #", "###"],
        '1' => ["  #", "  #", "  #", "  #", "  #"],
        '2' => ["###", "  #", "###", "#  ", "###"],
        '3' => ["###", "  #", "###", "  #", "###"],
        '4' => ["# #", "# #", "###", "  #", "  #"],
        '5' => ["###", "#  ", "###", "  #", "###"],
        '6' => ["###", "#  ", "###", "# #", "###"],
        '7' => ["###", "  #", "  #", "  #", "  #"],
        '8' => ["###", "# #", "###", "# #", "###"],
        '9' => ["###", "# #", "###", "  #", "###"],
        ':' => [" ", "#", " ", "#", " "],
        '.' => [" ", " ", " ", " ", "#"],
        _ => return None,
    })
}

/// Columns `text` occupies when drawn with [`big_lines`].
#[must_use]
pub fn big_width(text: &str) -> usize {
    let glyphs: Vec<usize> = text
        .chars()
        .filter_map(pattern)
        .map(|rows| rows[0].len())
        .collect();
    glyphs.iter().sum::<usize>() + glyphs.len().saturating_sub(1)
}

/// Render `text` as [`DIGIT_HEIGHT`] rows, filling with `block`.
///
/// Characters without a pattern are skipped.
#[must_use]
pub fn big_lines(text: &str, block: &str) -> Vec<String> {
    let glyphs: Vec<[&str; DIGIT_HEIGHT]> = text.chars().filter_map(pattern).collect();
    (0..DIGIT_HEIGHT)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row].replace('#', block))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
