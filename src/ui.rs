use crossterm::style::Color;
use anyhow::{ Context, Result };

use crate::system::DisplayMode;
use crate::system::time::TimeOfDay;

pub mod glyph;

use glyph::Block;

pub const HOUR_COLOR: Color = Color::Red;
pub const MINUTE_COLOR: Color = Color::Yellow;
pub const SECOND_COLOR: Color = Color::Blue;

const SEPARATOR: &str = ":";

// Pad leading zero when necessary
pub fn pad(number: u8) -> String {
    if number < 10 {
        format!("0{}", number)
    } else {
        number.to_string()
    }
}

// 0 and 12 are both shown as 12
pub fn ampm_hour(hour: u8) -> u8 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

pub fn ampm_suffix(hour: u8) -> &'static str {
    if hour >= 12 { " PM" } else { " AM" }
}

/// The text of every field of one frame, before it is turned into glyphs.
#[derive(Debug, PartialEq)]
pub struct Fields {
    pub hour: String,
    pub minute: String,
    pub second: String,
    pub suffix: Option<&'static str>,
}

/// Turns a [`TimeOfDay`] into a colored block frame.
///
/// The mode is fixed when the clock is created.
pub struct Clock {
    mode: DisplayMode,
}

impl Clock {
    pub fn new(mode: DisplayMode) -> Self {
        Self { mode }
    }

    pub fn fields(&self, time: &TimeOfDay) -> Fields {
        match self.mode {
            DisplayMode::Hour24 => Fields {
                hour: pad(time.hour),
                minute: pad(time.minute),
                second: pad(time.second),
                suffix: None,
            },
            DisplayMode::Hour12 => Fields {
                hour: pad(ampm_hour(time.hour)),
                minute: pad(time.minute),
                second: pad(time.second),
                suffix: Some(ampm_suffix(time.hour)),
            },
        }
    }

    pub fn render(&self, time: &TimeOfDay) -> Result<Block> {
        let fields = self.fields(time);

        let separator = glyph::to_block(SEPARATOR)?;

        let mut blocks = vec![
            glyph::to_block(&fields.hour)?.paint(HOUR_COLOR),
            separator.clone(),
            glyph::to_block(&fields.minute)?.paint(MINUTE_COLOR),
            separator,
            glyph::to_block(&fields.second)?.paint(SECOND_COLOR),
        ];

        if let Some(suffix) = fields.suffix {
            blocks.push(glyph::to_block(suffix)?);
        }

        glyph::concat(&blocks).context("Can't compose clock frame")
    }
}
