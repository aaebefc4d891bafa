//! Plain-text frame for terminals and logs
//!
//! `#` wall, `P` player, `A` atom, `E` enemy. Layering follows the canvas
//! draw order: enemies over the atom, the atom over the player.

use crate::sim::{MazeGrid, Position, Snapshot};

pub fn render(grid: &MazeGrid, snapshot: &Snapshot) -> String {
    let (width, height) = grid.dimensions();
    let mut out = String::with_capacity((width + 1) * height + 16);

    for y in 0..height {
        for x in 0..width {
            let pos = Position::new(x as i32, y as i32);
            let c = if snapshot.enemies.contains(&pos) {
                'E'
            } else if pos == snapshot.atom {
                'A'
            } else if pos == snapshot.player {
                'P'
            } else if grid.is_wall(pos) {
                '#'
            } else {
                ' '
            };
            out.push(c);
        }
        out.push('\n');
    }
    out.push_str(&format!("Score: {}", snapshot.score));
    out
}
