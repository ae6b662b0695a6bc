//! Tests for plain-text maze renderings

#[cfg(test)]
mod tests {
    use linked_labyrinth::io::text::{describe_links, render_grid};
    use linked_labyrinth::maze::demo::demo_maze;
    use linked_labyrinth::maze::{Direction, Item, Layout, Maze};

    const DEMO_DRAWING: &str = "\
+---+---+---+---+
|   |     W |   |
+   +   +---+   +
|       |   |   |
+---+   +   +   +
| S |     @     |
+   +---+   +   +
|           | P |
+---+---+---+---+
";

    // Tests the demo maze drawing cell by cell
    // Verified by drawing east walls where links exist
    #[test]
    fn test_render_demo() {
        assert_eq!(render_grid(&demo_maze()).as_deref(), Some(DEMO_DRAWING));
    }

    // Tests free-form mazes have no grid drawing
    // Verified by rendering free layouts as a single row
    #[test]
    fn test_render_free_layout() {
        let maze = Maze::new(4, Layout::Free);
        assert_eq!(render_grid(&maze), None);
    }

    // Tests link descriptions list start, item and links per cell
    // Verified by omitting the start marker
    #[test]
    fn test_describe_links() {
        let mut maze = Maze::new(3, Layout::Free);
        maze.connect(0, 1, Direction::East);
        maze.connect(1, 2, Direction::North);
        maze.place_item(2, Item::Potion);
        maze.set_start(1);

        let description = describe_links(&maze);
        let lines: Vec<&str> = description.lines().collect();
        assert_eq!(
            lines,
            vec!["  0: E->1", "  1 (start): N->2 W->0", "  2 [Potion]: S->1"]
        );
    }
}
