//! Index-based arena of linked maze cells
//!
//! Cells never own their neighbours. Every link is the index of another cell
//! in the same [`Maze`], so the graph may be cyclic without any lifetime
//! bookkeeping. Links are directed: linking A to B leaves B untouched unless
//! the reverse link is created explicitly (see [`Maze::connect`]).

use bitvec::prelude::*;
use std::collections::VecDeque;
use std::fmt;

use crate::io::error::MazeError;

/// Index of a cell within its maze
pub type CellId = usize;

/// Collectible item that may be placed in a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Item {
    /// The wand
    Wand,
    /// The potion
    Potion,
    /// The spellbook
    Spellbook,
}

impl Item {
    /// Every item a path must collect, in reporting order
    pub const ALL: [Self; 3] = [Self::Wand, Self::Potion, Self::Spellbook];

    /// Position of this item in [`Item::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Wand => 0,
            Self::Potion => 1,
            Self::Spellbook => 2,
        }
    }

    /// Single-character marker used in text renderings
    pub const fn symbol(self) -> char {
        match self {
            Self::Wand => 'W',
            Self::Potion => 'P',
            Self::Spellbook => 'S',
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wand => "Wand",
            Self::Potion => "Potion",
            Self::Spellbook => "Spellbook",
        };
        f.write_str(name)
    }
}

/// One of the four link slots of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up
    North,
    /// Down
    South,
    /// Right
    East,
    /// Left
    West,
}

impl Direction {
    /// All directions in link-slot order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Order in which free ports are offered to random selection
    pub const FREE_PORT_ORDER: [Self; 4] = [Self::East, Self::West, Self::North, Self::South];

    /// The direction pointing back the way this one came
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Link slot used by this direction
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }

    /// Path alphabet character for this direction
    pub const fn symbol(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = MazeError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'N' => Ok(Self::North),
            'S' => Ok(Self::South),
            'E' => Ok(Self::East),
            'W' => Ok(Self::West),
            _ => Err(MazeError::InvalidDirection { symbol }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// A single maze node: optional item plus four optional outgoing links
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Item lying in this cell, if any
    pub item: Option<Item>,
    links: [Option<CellId>; 4],
}

impl Cell {
    /// Neighbour reached by leaving through `direction`
    pub fn neighbor(&self, direction: Direction) -> Option<CellId> {
        self.links.get(direction.index()).copied().flatten()
    }

    /// Iterate over the present links as `(direction, neighbour)` pairs
    pub fn links(&self) -> impl Iterator<Item = (Direction, CellId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.neighbor(direction).map(|id| (direction, id)))
    }

    /// Whether any of this cell's links points at `other`
    pub fn is_adjacent_to(&self, other: CellId) -> bool {
        self.links.iter().any(|link| *link == Some(other))
    }

    /// Unused link slots, listed in [`Direction::FREE_PORT_ORDER`]
    pub fn free_ports(&self) -> Vec<Direction> {
        Direction::FREE_PORT_ORDER
            .into_iter()
            .filter(|&direction| self.neighbor(direction).is_none())
            .collect()
    }

    fn set_link(&mut self, direction: Direction, target: Option<CellId>) {
        if let Some(slot) = self.links.get_mut(direction.index()) {
            *slot = target;
        }
    }
}

/// Spatial arrangement of a maze's cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Row-major grid; cell `row * cols + col` sits at `(row, col)`
    Grid {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },
    /// No spatial meaning beyond the links themselves
    Free,
}

/// Owning container for every cell of one generated labyrinth
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<Cell>,
    start: CellId,
    layout: Layout,
}

impl Maze {
    /// Create `cell_count` unlinked, empty cells starting at cell 0
    pub fn new(cell_count: usize, layout: Layout) -> Self {
        Self {
            cells: vec![Cell::default(); cell_count],
            start: 0,
            layout,
        }
    }

    /// Create an unlinked `rows` x `cols` grid
    pub fn grid(rows: usize, cols: usize) -> Self {
        Self::new(rows * cols, Layout::Grid { rows, cols })
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the maze has no cells at all
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in index order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `id`, if it exists
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    /// Entry point for walking the maze
    pub const fn start(&self) -> CellId {
        self.start
    }

    /// Spatial arrangement of the cells
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Move the entry point; ignored for ids outside the maze
    pub const fn set_start(&mut self, id: CellId) {
        if id < self.cells.len() {
            self.start = id;
        }
    }

    /// Put `item` into cell `id`, replacing whatever was there
    pub fn place_item(&mut self, id: CellId, item: Item) {
        if let Some(cell) = self.cells.get_mut(id) {
            cell.item = Some(item);
        }
    }

    /// Cell index for a grid position, if the layout is a grid and in range
    pub const fn id_at(&self, row: usize, col: usize) -> Option<CellId> {
        match self.layout {
            Layout::Grid { rows, cols } if row < rows && col < cols => Some(row * cols + col),
            _ => None,
        }
    }

    /// Grid position of a cell, if the layout is a grid
    pub const fn position_of(&self, id: CellId) -> Option<(usize, usize)> {
        match self.layout {
            Layout::Grid { cols, .. } if cols > 0 && id < self.cells.len() => {
                Some((id / cols, id % cols))
            }
            _ => None,
        }
    }

    /// Create the one-way link `from --direction--> to`
    ///
    /// Overwrites any previous link in that slot. Ids outside the maze are ignored.
    pub fn link(&mut self, from: CellId, to: CellId, direction: Direction) {
        if to >= self.cells.len() {
            return;
        }
        if let Some(cell) = self.cells.get_mut(from) {
            cell.set_link(direction, Some(to));
        }
    }

    /// Create `from --direction--> to` and the reverse link on the opposite side
    pub fn connect(&mut self, from: CellId, to: CellId, direction: Direction) {
        self.link(from, to, direction);
        self.link(to, from, direction.opposite());
    }

    /// Neighbour of `id` through `direction`
    pub fn step(&self, id: CellId, direction: Direction) -> Option<CellId> {
        self.cells.get(id).and_then(|cell| cell.neighbor(direction))
    }

    /// Drop every link and item, keeping the cell count and layout
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
        self.start = 0;
    }

    /// Total number of directed links
    pub fn link_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.links().count()).sum()
    }

    /// Cell holding `item`, if it was placed
    pub fn find_item(&self, item: Item) -> Option<CellId> {
        self.cells.iter().position(|cell| cell.item == Some(item))
    }

    /// Number of distinct cells reachable from `origin` by following links
    pub fn reachable_count(&self, origin: CellId) -> usize {
        if origin >= self.cells.len() {
            return 0;
        }

        let mut visited = bitvec![0; self.cells.len()];
        let mut frontier = VecDeque::from([origin]);

        while let Some(current) = frontier.pop_front() {
            if visited.get(current).as_deref() == Some(&true) {
                continue;
            }
            visited.set(current, true);

            if let Some(cell) = self.cells.get(current) {
                frontier.extend(cell.links().map(|(_, next)| next));
            }
        }

        visited.count_ones()
    }

    /// Whether every cell can be reached from cell 0
    pub fn is_connected(&self) -> bool {
        self.reachable_count(0) == self.cells.len()
    }
}
