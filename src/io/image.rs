//! PNG export of grid mazes
//!
//! A `rows` x `cols` maze is drawn on a `(2 * rows + 1)` x `(2 * cols + 1)`
//! lattice: odd coordinates are cells, the squares between them are open
//! exactly where a link exists, and everything else is wall. Each lattice
//! square becomes a `PIXEL_SCALE` x `PIXEL_SCALE` block.

use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use crate::io::configuration::{
    FLOOR_COLOR, PIXEL_SCALE, POTION_COLOR, SPELLBOOK_COLOR, START_COLOR, WALL_COLOR, WAND_COLOR,
};
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::maze::{CellId, Direction, Item, Layout, Maze};

const fn color_of_item(item: Item) -> [u8; 4] {
    match item {
        Item::Wand => WAND_COLOR,
        Item::Potion => POTION_COLOR,
        Item::Spellbook => SPELLBOOK_COLOR,
    }
}

fn color_of_cell(maze: &Maze, id: CellId) -> [u8; 4] {
    match maze.cell(id).and_then(|cell| cell.item) {
        Some(item) => color_of_item(item),
        None if id == maze.start() => START_COLOR,
        None => FLOOR_COLOR,
    }
}

fn fill_block(img: &mut RgbaImage, lattice_x: u32, lattice_y: u32, color: [u8; 4]) {
    for dy in 0..PIXEL_SCALE {
        for dx in 0..PIXEL_SCALE {
            img.put_pixel(
                lattice_x * PIXEL_SCALE + dx,
                lattice_y * PIXEL_SCALE + dy,
                Rgba(color),
            );
        }
    }
}

/// Draw a grid maze into an in-memory image
///
/// # Errors
///
/// Returns an error if the maze does not have a grid layout
pub fn render_maze_image(maze: &Maze) -> Result<RgbaImage> {
    let Layout::Grid { rows, cols } = maze.layout() else {
        return Err(invalid_parameter(
            "layout",
            &"free",
            &"only grid mazes can be drawn as images",
        ));
    };

    let lattice_width = 2 * cols as u32 + 1;
    let lattice_height = 2 * rows as u32 + 1;
    let mut img = ImageBuffer::from_pixel(
        lattice_width * PIXEL_SCALE,
        lattice_height * PIXEL_SCALE,
        Rgba(WALL_COLOR),
    );

    for row in 0..rows {
        for col in 0..cols {
            let Some(id) = maze.id_at(row, col) else {
                continue;
            };
            let x = 2 * col as u32 + 1;
            let y = 2 * row as u32 + 1;

            fill_block(&mut img, x, y, color_of_cell(maze, id));

            if maze.step(id, Direction::East).is_some() && col + 1 < cols {
                fill_block(&mut img, x + 1, y, FLOOR_COLOR);
            }
            if maze.step(id, Direction::South).is_some() && row + 1 < rows {
                fill_block(&mut img, x, y + 1, FLOOR_COLOR);
            }
        }
    }

    Ok(img)
}

/// Render a grid maze and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The maze does not have a grid layout
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_as_png(maze: &Maze, output_path: &Path) -> Result<()> {
    let img = render_maze_image(maze)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
