//! Fixed 1-bit icons
//!
//! Each row is a string where `#` is a lit pixel and anything else is clear.

/// A small monochrome bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub name: &'static str,
    rows: &'static [&'static str],
}

impl Icon {
    pub const fn new(name: &'static str, rows: &'static [&'static str]) -> Self {
        Self { name, rows }
    }

    pub fn width(&self) -> i32 {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0) as i32
    }

    pub fn height(&self) -> i32 {
        self.rows.len() as i32
    }

    /// Lit pixels as offsets from the top-left corner
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'#')
                .map(move |(x, _)| (x as i32, y as i32))
        })
    }
}

pub const RED: Icon = Icon::new(
    "red",
    &[
        "......###......",
        ".....#...#.....",
        "...##.....##...",
        "..#.........#..",
        ".#...........#.",
        ".#..##...##..#.",
        "#..#..#.#..#..#",
        "#...##...##...#",
        "#......#......#",
        "#.....###.....#",
        "#.............#",
        ".#...#####...#.",
        ".#...........#.",
        "..#.........#..",
        "...##.....##...",
        ".....#####.....",
    ],
);

pub const PIG: Icon = Icon::new(
    "pig",
    &[
        "..##....##..",
        ".#..####..#.",
        ".#........#.",
        "#..#....#..#",
        "#..........#",
        "#...####...#",
        "#..#.##.#..#",
        "#...####...#",
        "#..........#",
        ".#........#.",
        "..#......#..",
        "...######...",
    ],
);

pub const SLINGSHOT: Icon = Icon::new(
    "slingshot",
    &[
        "#.......#",
        "#.......#",
        ".#.....#.",
        ".#.....#.",
        "..#...#..",
        "...#.#...",
        "....#....",
        "....#....",
        "....#....",
        "....#....",
        "....#....",
        "....#....",
        "....#....",
        "....#....",
        "...###...",
    ],
);
