use crossterm::style::{style, Color, Stylize};
use thiserror::Error;
use std::fmt;

// Every glyph is this many rows tall
pub const HEIGHT: usize = 7;

type Glyph = [&'static str; HEIGHT];

const ZERO: Glyph = [" ███  ", "█   █ ", "█  ██ ", "█ █ █ ", "██  █ ", "█   █ ", " ███  "];
const ONE: Glyph = ["  █   ", " ██   ", "  █   ", "  █   ", "  █   ", "  █   ", " ███  "];
const TWO: Glyph = [" ███  ", "█   █ ", "    █ ", "   █  ", "  █   ", " █    ", "█████ "];
const THREE: Glyph = [" ███  ", "█   █ ", "    █ ", "  ██  ", "    █ ", "█   █ ", " ███  "];
const FOUR: Glyph = ["   █  ", "  ██  ", " █ █  ", "█  █  ", "█████ ", "   █  ", "   █  "];
const FIVE: Glyph = ["█████ ", "█     ", "████  ", "    █ ", "    █ ", "█   █ ", " ███  "];
const SIX: Glyph = [" ███  ", "█     ", "█     ", "████  ", "█   █ ", "█   █ ", " ███  "];
const SEVEN: Glyph = ["█████ ", "    █ ", "   █  ", "  █   ", "  █   ", "  █   ", "  █   "];
const EIGHT: Glyph = [" ███  ", "█   █ ", "█   █ ", " ███  ", "█   █ ", "█   █ ", " ███  "];
const NINE: Glyph = [" ███  ", "█   █ ", "█   █ ", " ████ ", "    █ ", "    █ ", " ███  "];
const COLON: Glyph = ["   ", "   ", " █ ", "   ", " █ ", "   ", "   "];
const SPACE: Glyph = ["   ", "   ", "   ", "   ", "   ", "   ", "   "];
const LETTER_A: Glyph = [" ███  ", "█   █ ", "█   █ ", "█████ ", "█   █ ", "█   █ ", "█   █ "];
const LETTER_P: Glyph = ["████  ", "█   █ ", "█   █ ", "████  ", "█     ", "█     ", "█     "];
const LETTER_M: Glyph = ["█   █ ", "██ ██ ", "█ █ █ ", "█   █ ", "█   █ ", "█   █ ", "█   █ "];

fn glyph(c: char) -> Option<&'static Glyph> {
    match c {
        '0' => Some(&ZERO),
        '1' => Some(&ONE),
        '2' => Some(&TWO),
        '3' => Some(&THREE),
        '4' => Some(&FOUR),
        '5' => Some(&FIVE),
        '6' => Some(&SIX),
        '7' => Some(&SEVEN),
        '8' => Some(&EIGHT),
        '9' => Some(&NINE),
        ':' => Some(&COLON),
        ' ' => Some(&SPACE),
        'A' => Some(&LETTER_A),
        'P' => Some(&LETTER_P),
        'M' => Some(&LETTER_M),
        _ => None,
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GlyphError {
    #[error("No glyph for character {0:?}")]
    Unsupported(char),
    #[error("Can't concatenate blocks of {expected} and {found} rows")]
    HeightMismatch { expected: usize, found: usize },
}

/// A rectangular grid of (possibly styled) characters.
///
/// `width` is the visible width, escape sequences added by [`Block::paint`]
/// don't count towards it.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    rows: Vec<String>,
    width: usize,
}

impl Block {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    // Returns a new block with every row wrapped in the foreground color
    pub fn paint(&self, color: Color) -> Block {
        Block {
            rows: self.rows.iter().map(|row| style(row.as_str()).with(color).to_string()).collect(),
            width: self.width,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows().join("\n"))
    }
}

/// Renders `text` as glyphs placed side by side.
pub fn to_block(text: &str) -> Result<Block, GlyphError> {
    let mut rows = vec![String::new(); HEIGHT];
    let mut width = 0;

    for c in text.chars() {
        let glyph = glyph(c).ok_or(GlyphError::Unsupported(c))?;

        for (row, line) in rows.iter_mut().zip(glyph.iter()) {
            row.push_str(line);
        }

        width += glyph[0].chars().count();
    }

    Ok(Block { rows, width })
}

/// Joins blocks horizontally. All of them must have the same height.
pub fn concat(blocks: &[Block]) -> Result<Block, GlyphError> {
    let height = blocks.first().map_or(0, Block::height);
    let mut rows = vec![String::new(); height];
    let mut width = 0;

    for block in blocks {
        if block.height() != height {
            return Err(GlyphError::HeightMismatch { expected: height, found: block.height() });
        }

        for (row, line) in rows.iter_mut().zip(block.rows.iter()) {
            row.push_str(line);
        }

        width += block.width;
    }

    Ok(Block { rows, width })
}
