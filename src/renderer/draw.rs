//! Draw list generation for a 2D canvas backend

use glam::Vec2;

use super::Frame;
use super::font::{CHAR_PIXEL, glyph_cells};
use crate::sim::Aabb;

/// Distance from the top of the field to the score digits
pub const SCORE_TOP: f32 = 20.0;
/// Horizontal distance between consecutive score digits
pub const DIGIT_ADVANCE: f32 = CHAR_PIXEL * 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// CSS fill style
    pub fn css(self) -> &'static str {
        match self {
            Color::Black => "#000",
            Color::White => "#fff",
        }
    }
}

/// An axis-aligned filled rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Color,
}

impl FillRect {
    fn of(body: &Aabb, color: Color) -> Self {
        let size = body.size();
        Self {
            x: body.left(),
            y: body.top(),
            w: size.x,
            h: size.y,
            color,
        }
    }
}

/// Build the fill calls for one frame, in paint order
pub fn draw_list(frame: &Frame) -> Vec<FillRect> {
    let mut rects = Vec::with_capacity(64);

    rects.push(FillRect {
        x: 0.0,
        y: 0.0,
        w: frame.field.x,
        h: frame.field.y,
        color: Color::Black,
    });
    rects.push(FillRect::of(&frame.ball, Color::White));
    for paddle in &frame.paddles {
        rects.push(FillRect::of(paddle, Color::White));
    }

    for (index, score) in frame.scores.iter().enumerate() {
        score_rects(*score, index, frame.field, &mut rects);
    }

    rects
}

/// Scores sit at one and two thirds of the field width, centered on their digits
fn score_rects(score: u32, index: usize, field: Vec2, out: &mut Vec<FillRect>) {
    let digits = score.to_string();
    let align = field.x / 3.0;
    let start = align * (index + 1) as f32 - DIGIT_ADVANCE * digits.len() as f32 / 2.0
        + CHAR_PIXEL / 2.0;

    for (pos, ch) in digits.bytes().enumerate() {
        let origin_x = start + pos as f32 * DIGIT_ADVANCE;
        for (col, row) in glyph_cells(ch - b'0') {
            out.push(FillRect {
                x: origin_x + col as f32 * CHAR_PIXEL,
                y: SCORE_TOP + row as f32 * CHAR_PIXEL,
                w: CHAR_PIXEL,
                h: CHAR_PIXEL,
                color: Color::White,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(scores: [u32; 2]) -> Frame {
        Frame {
            field: Vec2::new(600.0, 400.0),
            ball: Aabb::at(Vec2::new(300.0, 200.0), Vec2::splat(10.0)),
            paddles: [
                Aabb::at(Vec2::new(40.0, 200.0), Vec2::new(20.0, 100.0)),
                Aabb::at(Vec2::new(560.0, 200.0), Vec2::new(20.0, 100.0)),
            ],
            scores,
        }
    }

    #[test]
    fn test_clear_then_entities() {
        let rects = draw_list(&frame([0, 0]));

        assert_eq!(
            rects[0],
            FillRect {
                x: 0.0,
                y: 0.0,
                w: 600.0,
                h: 400.0,
                color: Color::Black
            }
        );
        assert_eq!(
            rects[1],
            FillRect {
                x: 295.0,
                y: 195.0,
                w: 10.0,
                h: 10.0,
                color: Color::White
            }
        );
        assert_eq!((rects[2].x, rects[2].y), (30.0, 150.0));
        assert_eq!((rects[3].x, rects[3].y), (550.0, 150.0));
    }

    #[test]
    fn test_zero_scores_draw_two_glyphs() {
        let rects = draw_list(&frame([0, 0]));
        // clear + ball + 2 paddles + 12 cells per zero
        assert_eq!(rects.len(), 4 + 24);

        // First player's digit is centered on x = 200
        let first_cell = rects[4];
        assert_eq!(first_cell.x, 200.0 - DIGIT_ADVANCE / 2.0 + CHAR_PIXEL / 2.0);
        assert_eq!(first_cell.y, SCORE_TOP);
        assert_eq!(first_cell.w, CHAR_PIXEL);
    }

    #[test]
    fn test_multi_digit_score_advances() {
        let rects = draw_list(&frame([10, 0]));
        // "1" has 5 cells, "0" has 12
        let score_cells = &rects[4..4 + 17];

        let start = 200.0 - DIGIT_ADVANCE + CHAR_PIXEL / 2.0;
        // The "1" is a single column at col 1
        assert!(score_cells[..5].iter().all(|r| r.x == start + CHAR_PIXEL));
        // The "0" begins one advance later
        assert_eq!(score_cells[5].x, start + DIGIT_ADVANCE);
        assert_eq!(rects.len(), 4 + 17 + 12);
    }

    #[test]
    fn test_css_colors() {
        assert_eq!(Color::Black.css(), "#000");
        assert_eq!(Color::White.css(), "#fff");
    }
}
