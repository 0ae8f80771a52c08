//! Big-text glyph table and composer.
//!
//! Every supported character is a 5-row bitmap drawn with `#` (filled) and
//! space (empty). Lookup is total: anything outside the table renders as the
//! blank glyph instead of failing.

/// Number of rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Columns of padding appended after each glyph.
const GLYPH_SPACING: &str = " ";

/// Characters the big-text renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Colon,
    A,
    P,
    M,
    Space,
}

impl Glyph {
    /// All glyphs in table order.
    pub const ALL: [Glyph; 15] = [
        Glyph::Zero,
        Glyph::One,
        Glyph::Two,
        Glyph::Three,
        Glyph::Four,
        Glyph::Five,
        Glyph::Six,
        Glyph::Seven,
        Glyph::Eight,
        Glyph::Nine,
        Glyph::Colon,
        Glyph::A,
        Glyph::P,
        Glyph::M,
        Glyph::Space,
    ];

    /// Maps an upper-case character to its glyph, falling back to `Space`.
    pub fn from_char(c: char) -> Self {
        match c {
            '0' => Glyph::Zero,
            '1' => Glyph::One,
            '2' => Glyph::Two,
            '3' => Glyph::Three,
            '4' => Glyph::Four,
            '5' => Glyph::Five,
            '6' => Glyph::Six,
            '7' => Glyph::Seven,
            '8' => Glyph::Eight,
            '9' => Glyph::Nine,
            ':' => Glyph::Colon,
            'A' => Glyph::A,
            'P' => Glyph::P,
            'M' => Glyph::M,
            _ => Glyph::Space,
        }
    }

    /// The character this glyph draws.
    pub fn as_char(self) -> char {
        match self {
            Glyph::Zero => '0',
            Glyph::One => '1',
            Glyph::Two => '2',
            Glyph::Three => '3',
            Glyph::Four => '4',
            Glyph::Five => '5',
            Glyph::Six => '6',
            Glyph::Seven => '7',
            Glyph::Eight => '8',
            Glyph::Nine => '9',
            Glyph::Colon => ':',
            Glyph::A => 'A',
            Glyph::P => 'P',
            Glyph::M => 'M',
            Glyph::Space => ' ',
        }
    }

    /// Bitmap rows, top to bottom.
    pub fn rows(self) -> &'static [&'static str; GLYPH_HEIGHT] {
        match self {
            Glyph::Zero => &[" ##### ", "#     #", "#     #", "#     #", " ##### "],
            Glyph::One => &["  #    ", " ##    ", "  #    ", "  #    ", " ###   "],
            Glyph::Two => &[" ##### ", "     # ", " ##### ", "#      ", " ##### "],
            Glyph::Three => &[" ##### ", "     # ", "  #### ", "     # ", " ##### "],
            Glyph::Four => &["#   #  ", "#   #  ", "#######", "    #  ", "    #  "],
            Glyph::Five => &[" ##### ", "#      ", " ####  ", "     # ", " ##### "],
            Glyph::Six => &[" ##### ", "#      ", " ##### ", "#     #", " ##### "],
            Glyph::Seven => &[" ##### ", "    #  ", "   #   ", "  #    ", " #     "],
            Glyph::Eight => &[" ##### ", "#     #", " ##### ", "#     #", " ##### "],
            Glyph::Nine => &[" ##### ", "#     #", " ##### ", "     # ", " ##### "],
            Glyph::Colon => &[" ", "•", " ", "•", " "],
            Glyph::A => &["  ###  ", " #   # ", " ##### ", "#     #", "#     #"],
            Glyph::P => &[" ####  ", "#    # ", " ####  ", "#      ", "#      "],
            Glyph::M => &["#     #", "##   ##", "# # # #", "#  #  #", "#     #"],
            Glyph::Space => &["       ", "       ", "       ", "       ", "       "],
        }
    }

    /// Width of the glyph in columns (chars, not bytes).
    pub fn width(self) -> usize {
        self.rows()[0].chars().count()
    }
}

/// Renders `text` as 5 rows of big ASCII art joined by newlines.
///
/// Input is upper-cased first, so lookup is case-insensitive. Each glyph is
/// followed by one column of padding, including the last one.
pub fn render_big_text(text: &str) -> String {
    let mut rows: [String; GLYPH_HEIGHT] = Default::default();

    for c in text.to_uppercase().chars() {
        let glyph = Glyph::from_char(c);
        for (row, pattern) in rows.iter_mut().zip(glyph.rows()) {
            row.push_str(pattern);
            row.push_str(GLYPH_SPACING);
        }
    }

    rows.join("\n")
}
