//! Plain-text renderings of mazes for terminal output

use std::fmt::Write;

use crate::maze::{CellId, Direction, Layout, Maze};

const START_MARKER: char = '@';

fn marker_for(maze: &Maze, id: CellId) -> char {
    match maze.cell(id).and_then(|cell| cell.item) {
        Some(item) => item.symbol(),
        None if id == maze.start() => START_MARKER,
        None => ' ',
    }
}

/// ASCII drawing of a grid maze, or `None` for free-form layouts
///
/// Items are drawn as `W`, `P` and `S`; the start cell as `@`.
pub fn render_grid(maze: &Maze) -> Option<String> {
    let Layout::Grid { rows, cols } = maze.layout() else {
        return None;
    };

    let open = |row: usize, col: usize, direction: Direction| {
        maze.id_at(row, col)
            .and_then(|id| maze.step(id, direction))
            .is_some()
    };

    let mut out = String::new();
    out.push('+');
    out.push_str(&"---+".repeat(cols));
    out.push('\n');

    for row in 0..rows {
        out.push('|');
        for col in 0..cols {
            let marker = maze.id_at(row, col).map_or(' ', |id| marker_for(maze, id));
            let east = if open(row, col, Direction::East) { ' ' } else { '|' };
            let _ = write!(out, " {marker} {east}");
        }
        out.push('\n');

        out.push('+');
        for col in 0..cols {
            let south = if open(row, col, Direction::South) { "   " } else { "---" };
            out.push_str(south);
            out.push('+');
        }
        out.push('\n');
    }

    Some(out)
}

/// One line per cell listing its role, item and outgoing links
pub fn describe_links(maze: &Maze) -> String {
    let mut out = String::new();
    for (id, cell) in maze.cells().iter().enumerate() {
        let _ = write!(out, "{id:>3}");
        if id == maze.start() {
            out.push_str(" (start)");
        }
        if let Some(item) = cell.item {
            let _ = write!(out, " [{item}]");
        }
        out.push(':');
        for (direction, target) in cell.links() {
            let _ = write!(out, " {}->{target}", direction.symbol());
        }
        out.push('\n');
    }
    out
}
