//! Draw list built from the game state
//!
//! Backends consume the list front to back, so its order is the z-order.
//! Everything is in game pixels (640x480, y down).

use glam::Vec2;

use super::font;
use super::vertex::colors;
use crate::consts::*;
use crate::sim::{GameState, Overlay};

pub type Color = [f32; 4];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Which half of a two-pass outlined text this command draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPass {
    Outline,
    Fill,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    Text {
        /// Top left corner
        pos: Vec2,
        text: String,
        /// Game pixels per font pixel
        scale: f32,
        color: Color,
        pass: TextPass,
    },
}

const SCORE_SCALE: f32 = 5.0;
const SCORE_TOP: f32 = 16.0;
const OUTLINE_OFFSET: f32 = 2.0;
const GAME_OVER_SCALE: f32 = 6.0;
const GAME_OVER_TOP: f32 = 150.0;
const MESSAGE_SCALE: f32 = 3.0;
const FINAL_SCORE_TOP: f32 = 230.0;
const PLAY_AGAIN_TOP: f32 = 290.0;

/// Upper and lower rectangles of a pipe, in that order
pub fn pipe_rects(x: f32, gap_y: f32) -> [Rect; 2] {
    let left = x - PIPE_WIDTH / 2.0;
    let top_h = gap_y - PIPE_GAP / 2.0;
    let bottom_y = top_h + PIPE_GAP;
    [
        Rect {
            x: left,
            y: 0.0,
            w: PIPE_WIDTH,
            h: top_h,
        },
        Rect {
            x: left,
            y: bottom_y,
            w: PIPE_WIDTH,
            h: GROUND_Y - bottom_y,
        },
    ]
}

pub fn build_scene(state: &GameState) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(20);

    cmds.push(DrawCmd::Clear(colors::SKY));
    cmds.push(DrawCmd::Line {
        from: Vec2::new(0.0, FLAP_CEILING),
        to: Vec2::new(WINDOW_WIDTH, FLAP_CEILING),
        color: colors::CLOUD_LINE,
    });
    cmds.push(DrawCmd::FillRect {
        rect: Rect {
            x: 0.0,
            y: GROUND_Y,
            w: WINDOW_WIDTH,
            h: WINDOW_HEIGHT - GROUND_Y,
        },
        color: colors::GROUND,
    });

    // Parked slots are drawn too; they sit off screen
    for pipe in state.pipes.iter() {
        for rect in pipe_rects(pipe.x, pipe.gap_y) {
            cmds.push(DrawCmd::FillRect {
                rect,
                color: colors::PIPE,
            });
        }
    }

    let half = PLAYER_WIDTH / 2.0;
    cmds.push(DrawCmd::FillRect {
        rect: Rect {
            x: state.player.x - half,
            y: state.player.y - half,
            w: PLAYER_WIDTH,
            h: PLAYER_WIDTH,
        },
        color: colors::PLAYER,
    });

    push_outlined(
        &mut cmds,
        state.score.score.to_string(),
        SCORE_SCALE,
        SCORE_TOP,
    );

    if state.overlay >= Overlay::GameOver {
        push_centered(&mut cmds, "Game Over!".to_string(), GAME_OVER_SCALE, GAME_OVER_TOP);
    }
    if state.overlay >= Overlay::FinalScore {
        push_centered(
            &mut cmds,
            format!("Final Score: {}", state.score.score),
            MESSAGE_SCALE,
            FINAL_SCORE_TOP,
        );
    }
    if state.overlay >= Overlay::PlayAgain {
        push_centered(
            &mut cmds,
            "<space> to Play Again".to_string(),
            MESSAGE_SCALE,
            PLAY_AGAIN_TOP,
        );
    }

    cmds
}

fn centered_pos(text: &str, scale: f32, top: f32) -> Vec2 {
    Vec2::new((WINDOW_WIDTH - font::text_width(text, scale)) / 2.0, top)
}

fn push_centered(cmds: &mut Vec<DrawCmd>, text: String, scale: f32, top: f32) {
    cmds.push(DrawCmd::Text {
        pos: centered_pos(&text, scale, top),
        text,
        scale,
        color: colors::TEXT,
        pass: TextPass::Fill,
    });
}

/// Four offset copies in the outline color, then the fill on top
fn push_outlined(cmds: &mut Vec<DrawCmd>, text: String, scale: f32, top: f32) {
    let pos = centered_pos(&text, scale, top);
    for offset in [
        Vec2::new(-OUTLINE_OFFSET, 0.0),
        Vec2::new(OUTLINE_OFFSET, 0.0),
        Vec2::new(0.0, -OUTLINE_OFFSET),
        Vec2::new(0.0, OUTLINE_OFFSET),
    ] {
        cmds.push(DrawCmd::Text {
            pos: pos + offset,
            text: text.clone(),
            scale,
            color: colors::TEXT_OUTLINE,
            pass: TextPass::Outline,
        });
    }
    cmds.push(DrawCmd::Text {
        pos,
        text,
        scale,
        color: colors::TEXT,
        pass: TextPass::Fill,
    });
}
