use crossterm::{ cursor, queue, terminal, style::Print };
use std::io::Write;
use anyhow::Result;

/// Draws frames in place by erasing the previously written lines first.
///
/// Frames are expected to have no trailing newline so the cursor is left on
/// the last line of the frame.
pub struct Repainter<W: Write> {
    out: W,
}

impl<W: Write> Repainter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    // erase: how many lines the previous frame took, None on the first draw
    pub fn paint(&mut self, frame: &impl std::fmt::Display, erase: Option<u16>) -> Result<()> {
        if let Some(lines) = erase {
            self.erase_lines(lines)?;
        }

        queue!(self.out, Print(frame))?;
        self.out.flush()?;

        Ok(())
    }

    fn erase_lines(&mut self, lines: u16) -> Result<()> {
        for i in 0..lines {
            if i > 0 {
                queue!(self.out, cursor::MoveUp(1))?;
            }

            queue!(self.out, terminal::Clear(terminal::ClearType::CurrentLine))?;
        }

        if lines > 0 {
            queue!(self.out, cursor::MoveToColumn(0))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR_LINE: &str = "\x1b[2K";
    const UP: &str = "\x1b[1A";

    fn output(repainter: Repainter<Vec<u8>>) -> String {
        String::from_utf8(repainter.out).unwrap()
    }

    #[test]
    fn first_paint_is_verbatim() {
        let mut repainter = Repainter::new(Vec::new());
        repainter.paint(&"a\nb\nc", None).unwrap();

        assert_eq!(output(repainter), "a\nb\nc");
    }

    #[test]
    fn repaint_erases_exactly_the_given_lines() {
        let mut repainter = Repainter::new(Vec::new());
        repainter.paint(&"new\nframe\nhere", Some(3)).unwrap();

        let written = output(repainter);
        let (erase, frame) = written.split_at(written.len() - "new\nframe\nhere".len());

        assert_eq!(frame, "new\nframe\nhere");
        assert!(erase.starts_with(CLEAR_LINE));
        assert_eq!(erase.matches(CLEAR_LINE).count(), 3);
        assert_eq!(erase.matches(UP).count(), 2);
        assert!(!erase.contains('\n'));
    }

    #[test]
    fn consecutive_frames() {
        let mut repainter = Repainter::new(Vec::new());
        repainter.paint(&"1\n1", None).unwrap();
        repainter.paint(&"2\n2", Some(2)).unwrap();

        let written = output(repainter);

        assert!(written.starts_with("1\n1"));
        assert!(written.ends_with("2\n2"));
        assert_eq!(written.matches(UP).count(), 1);
    }

    #[test]
    fn erasing_zero_lines_writes_nothing_extra() {
        let mut repainter = Repainter::new(Vec::new());
        repainter.paint(&"x", Some(0)).unwrap();

        assert_eq!(output(repainter), "x");
    }
}
