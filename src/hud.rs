//! Health and floating damage numbers
//!
//! Both are pure data driven by the frame clock; drawing goes through the
//! draw list like everything else. The damage number rises away from the
//! actor for a fixed window after each hit, capped at one tile of travel.

use crate::render::{Blit, DrawList};
use crate::sim::timer::{TimerId, Timers};
use crate::units::{
    Game, Hp, Ms, Pixel, TILE_SIZE, Velocity, game_to_pixel, tile_to_pixel,
};

const GLYPH_SHEET: &str = "content/text.bmp";
/// Digit glyphs are half-tile squares laid out 0-9 on one row
const GLYPH_SIZE: Pixel = 16;
const WHITE_GLYPH_ROW: Pixel = 7;
const RED_GLYPH_ROW: Pixel = 8;
/// Minus glyph sits after the digits on the red row
const MINUS_GLYPH_INDEX: Pixel = 10;

const HUD_SHEET: &str = "content/hud.bmp";
const BAR_SOURCE_Y: Pixel = 40;
const BAR_FILL_SOURCE_Y: Pixel = 25;
const BAR_WIDTH: Pixel = 64;
const BAR_HEIGHT: Pixel = 8;

const DAMAGE_TIME: Ms = 2000;
/// Upward drift of the damage number
const DAMAGE_VELOCITY: Velocity = -(TILE_SIZE / 2.0) / 250.0;

/// Integer hit-point counter with a saturating decrement.
#[derive(Debug)]
pub struct Health {
    current: Hp,
    max: Hp,
}

impl Health {
    pub fn new(max: Hp) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> Hp {
        self.current
    }

    pub fn take_damage(&mut self, damage: Hp) {
        self.current = (self.current - damage).max(0);
        log::debug!("health now {}/{}", self.current, self.max);
    }

    /// Bar frame, proportional fill, and the numeric value.
    pub fn draw(&self, draw_list: &mut DrawList) {
        let bar_x = tile_to_pixel(1);
        let bar_y = tile_to_pixel(2);
        draw_list.push(Blit {
            sheet: HUD_SHEET.into(),
            source_x: 0,
            source_y: BAR_SOURCE_Y,
            width: BAR_WIDTH,
            height: BAR_HEIGHT,
            dest_x: bar_x,
            dest_y: bar_y,
        });
        let fill_width =
            (BAR_WIDTH as f32 * self.current as f32 / self.max as f32).round() as Pixel;
        if fill_width > 0 {
            draw_list.push(Blit {
                sheet: HUD_SHEET.into(),
                source_x: 0,
                source_y: BAR_FILL_SOURCE_Y,
                width: fill_width,
                height: BAR_HEIGHT,
                dest_x: bar_x,
                dest_y: bar_y,
            });
        }
        push_number(
            draw_list,
            self.current,
            NumberStyle::Plain,
            (bar_x - GLYPH_SIZE) as Game,
            bar_y as Game,
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    Plain,
    /// Red digits with a leading minus sign
    Damage,
}

/// Draw `value` centered horizontally on `center_x`.
pub fn push_number(
    draw_list: &mut DrawList,
    value: Hp,
    style: NumberStyle,
    center_x: Game,
    y: Game,
) {
    let row = match style {
        NumberStyle::Plain => WHITE_GLYPH_ROW,
        NumberStyle::Damage => RED_GLYPH_ROW,
    };
    let mut digits = Vec::new();
    let mut rest = value.max(0);
    loop {
        digits.push(rest % 10);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    let num_glyphs = digits.len() + usize::from(style == NumberStyle::Damage);
    let mut x = game_to_pixel(center_x) - num_glyphs as Pixel * GLYPH_SIZE / 2;
    if style == NumberStyle::Damage {
        draw_list.push(glyph(row, MINUS_GLYPH_INDEX, x, game_to_pixel(y)));
        x += GLYPH_SIZE;
    }
    for digit in digits.iter().rev() {
        draw_list.push(glyph(row, *digit as Pixel, x, game_to_pixel(y)));
        x += GLYPH_SIZE;
    }
}

fn glyph(row: Pixel, index: Pixel, dest_x: Pixel, dest_y: Pixel) -> Blit {
    Blit {
        sheet: GLYPH_SHEET.into(),
        source_x: index * GLYPH_SIZE,
        source_y: row * GLYPH_SIZE,
        width: GLYPH_SIZE,
        height: GLYPH_SIZE,
        dest_x,
        dest_y,
    }
}

/// Floating damage number shown for [`DAMAGE_TIME`] after each hit.
#[derive(Debug)]
pub struct DamageText {
    damage: Hp,
    offset_y: Game,
    timer: TimerId,
}

impl DamageText {
    pub fn new(timers: &mut Timers) -> Self {
        Self {
            damage: 0,
            offset_y: 0.0,
            timer: timers.create(DAMAGE_TIME),
        }
    }

    pub fn set_damage(&mut self, timers: &mut Timers, damage: Hp) {
        self.damage = damage;
        self.offset_y = 0.0;
        timers.reset(self.timer);
    }

    pub fn update(&mut self, elapsed_time: Ms, timers: &Timers) {
        if timers.expired(self.timer) {
            return;
        }
        self.offset_y = (self.offset_y + DAMAGE_VELOCITY * elapsed_time as Game).max(-TILE_SIZE);
    }

    pub fn draw(&self, draw_list: &mut DrawList, timers: &Timers, center_x: Game, center_y: Game) {
        if timers.expired(self.timer) {
            return;
        }
        push_number(
            draw_list,
            self.damage,
            NumberStyle::Damage,
            center_x,
            center_y + self.offset_y,
        );
    }
}
