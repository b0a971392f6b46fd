//! Headless platform: records draw calls and logs sounds

use glam::Vec2;

use super::{Canvas, SoundEffect, SoundSink};
use crate::sim::{Color, Rect};

/// Canvas that keeps every primitive drawn since the last `clear`
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub rects: Vec<(Rect, Color)>,
    pub balls: Vec<(Vec2, f32)>,
}

impl RecordingCanvas {
    pub fn clear(&mut self) {
        self.rects.clear();
        self.balls.clear();
    }

    pub fn primitive_count(&self) -> usize {
        self.rects.len() + self.balls.len()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rects.push((rect, color));
    }

    fn draw_ball(&mut self, center: Vec2, radius: f32) {
        self.balls.push((center, radius));
    }
}

/// Sound sink that logs effects instead of playing them; keeps only a count
#[derive(Debug, Default)]
pub struct LogSound {
    pub played: usize,
}

impl SoundSink for LogSound {
    fn play(&mut self, effect: SoundEffect) {
        log::trace!("sound: {:?}", effect);
        self.played += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_sound_counts() {
        let mut sink = LogSound::default();
        for _ in 0..1000 {
            sink.play(SoundEffect::PaddleHit);
        }
        sink.play(SoundEffect::BrickBreak);
        assert_eq!(sink.played, 1001);
    }

    #[test]
    fn test_canvas_clear() {
        let mut canvas = RecordingCanvas::default();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::new(0, 0, 0));
        canvas.draw_ball(Vec2::ZERO, 7.0);
        assert_eq!(canvas.primitive_count(), 2);
        canvas.clear();
        assert_eq!(canvas.primitive_count(), 0);
    }
}
