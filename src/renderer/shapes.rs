//! Draw command generation for one frame

use glam::Vec2;

use crate::config::GameConfig;
use crate::sim::{MazeGrid, Position, Snapshot};

/// Baseline position of the score text (pixels)
pub const SCORE_TEXT_POS: Vec2 = Vec2::new(10.0, 30.0);

/// A single 2D drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole canvas
    Clear {
        color: String,
        width: f32,
        height: f32,
    },
    /// Axis-aligned filled rectangle, `pos` is the top-left corner
    FillRect { pos: Vec2, size: Vec2, color: String },
    /// Text drawn with its baseline starting at `pos`
    FillText {
        text: String,
        pos: Vec2,
        font: String,
        color: String,
    },
}

/// Pixel rectangle covering one grid cell
fn cell_rect(cell: Position, cell_size: f32, color: &str) -> DrawCommand {
    DrawCommand::FillRect {
        pos: cell.as_vec2() * cell_size,
        size: Vec2::splat(cell_size),
        color: color.to_owned(),
    }
}

/// Build the command list for a frame.
///
/// Draw order: background, walls, player, atom, enemies, score. Later
/// commands paint over earlier ones, so enemies hide an atom on the same cell.
pub fn build_frame(
    grid: &MazeGrid,
    snapshot: &Snapshot,
    config: &GameConfig,
) -> Vec<DrawCommand> {
    let palette = &config.palette;
    let cell = config.cell_size;

    let mut commands = Vec::with_capacity(grid.walls().count() + snapshot.enemies.len() + 4);

    commands.push(DrawCommand::Clear {
        color: palette.background.clone(),
        width: config.canvas_width as f32,
        height: config.canvas_height as f32,
    });

    commands.extend(grid.walls().map(|w| cell_rect(w, cell, &palette.wall)));
    commands.push(cell_rect(snapshot.player, cell, &palette.player));
    commands.push(cell_rect(snapshot.atom, cell, &palette.atom));
    commands.extend(
        snapshot
            .enemies
            .iter()
            .map(|e| cell_rect(*e, cell, &palette.enemy)),
    );

    commands.push(DrawCommand::FillText {
        text: format!("Score: {}", snapshot.score),
        pos: SCORE_TEXT_POS,
        font: palette.font.clone(),
        color: palette.text.clone(),
    });

    commands
}
