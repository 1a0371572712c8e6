//! Sprite resources
//!
//! A [`Sprite`] is a rectangle on a sprite sheet, optionally animated as a
//! horizontal strip of frames. `update` advances the animation by elapsed
//! time; `draw` pushes the current frame into the draw list.

use crate::render::{Blit, DrawList};
use crate::units::{Fps, Frame, Game, Ms, Pixel, game_to_pixel};

#[derive(Debug, Clone)]
pub struct Sprite {
    sheet: String,
    source_x: Pixel,
    source_y: Pixel,
    width: Pixel,
    height: Pixel,
    num_frames: Frame,
    fps: Fps,
    current_frame: Frame,
    since_last_frame: Ms,
}

impl Sprite {
    /// Single-frame sprite; `update` is a no-op.
    pub fn new(
        sheet: impl Into<String>,
        source_x: Pixel,
        source_y: Pixel,
        width: Pixel,
        height: Pixel,
    ) -> Self {
        Self {
            sheet: sheet.into(),
            source_x,
            source_y,
            width,
            height,
            num_frames: 1,
            fps: 1,
            current_frame: 0,
            since_last_frame: 0,
        }
    }

    /// Animated strip of `num_frames` frames laid out left to right.
    pub fn animated(
        sheet: impl Into<String>,
        source_x: Pixel,
        source_y: Pixel,
        width: Pixel,
        height: Pixel,
        fps: Fps,
        num_frames: Frame,
    ) -> Self {
        Self {
            sheet: sheet.into(),
            source_x,
            source_y,
            width,
            height,
            num_frames,
            fps,
            current_frame: 0,
            since_last_frame: 0,
        }
    }

    pub fn update(&mut self, elapsed_time: Ms) {
        if self.num_frames <= 1 {
            return;
        }
        let frame_time = 1000 / self.fps;
        self.since_last_frame += elapsed_time;
        if self.since_last_frame > frame_time {
            self.current_frame = (self.current_frame + 1) % self.num_frames;
            self.since_last_frame = 0;
        }
    }

    pub fn draw(&self, draw_list: &mut DrawList, x: Game, y: Game) {
        draw_list.push(Blit {
            sheet: self.sheet.clone(),
            source_x: self.source_x + self.current_frame as Pixel * self.width,
            source_y: self.source_y,
            width: self.width,
            height: self.height,
            dest_x: game_to_pixel(x),
            dest_y: game_to_pixel(y),
        });
    }
}
