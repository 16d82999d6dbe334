//! Flushes composed draw commands into the terminal frame.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::view::DrawCommand;

use super::style::Styles;

/// Main render function.
pub fn render(frame: &mut Frame, commands: &[DrawCommand]) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for cmd in commands {
        put(buf, area, cmd);
    }
}

/// Writes one command, clipped to `area`.
///
/// Returns false when the command starts outside the area and was skipped;
/// a bad cell never aborts the rest of the frame.
pub fn put(buf: &mut Buffer, area: Rect, cmd: &DrawCommand) -> bool {
    let x = area.x.saturating_add(cmd.col);
    let y = area.y.saturating_add(cmd.row);
    if x >= area.right() || y >= area.bottom() {
        return false;
    }
    let max_width = usize::from(area.right() - x);
    buf.set_stringn(
        x,
        y,
        &cmd.text,
        max_width,
        Styles::for_command(cmd.style, cmd.reversed),
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::StyleClass;
    use ratatui::style::Modifier;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_put_clips_at_right_edge() {
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);
        let cmd = DrawCommand::text(0, 5, "abcdef", StyleClass::Normal);

        assert!(put(&mut buf, area, &cmd));
        assert_eq!(row_text(&buf, 0), "     abc");
    }

    #[test]
    fn test_put_skips_out_of_bounds() {
        let area = Rect::new(0, 0, 8, 2);
        let mut buf = Buffer::empty(area);

        assert!(!put(&mut buf, area, &DrawCommand::text(2, 0, "x", StyleClass::Normal)));
        assert!(!put(&mut buf, area, &DrawCommand::text(0, 8, "x", StyleClass::Normal)));
        assert!(!put(&mut buf, area, &DrawCommand::text(u16::MAX, u16::MAX, "x", StyleClass::Normal)));
        assert_eq!(row_text(&buf, 0), "        ");
        assert_eq!(row_text(&buf, 1), "        ");
    }

    #[test]
    fn test_put_applies_reverse_video() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        let cmd = DrawCommand::text(0, 0, "ep-1", StyleClass::Accent).reversed();

        put(&mut buf, area, &cmd);
        assert!(buf[(0, 0)].modifier.contains(Modifier::REVERSED));
    }
}
