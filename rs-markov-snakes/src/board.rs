//! Snakes-and-ladders board: cells, jumps and the die-roll chain

use std::cmp::Ordering;
use std::io::{self, Write};

use log::debug;
use rs_markov_core::{Capabilities, MarkovChain, Result};

/// Number of cells; the last one ends the game.
pub const BOARD_SIZE: u32 = 100;

/// Faces of the die.
pub const DICE_MAX: u32 = 6;

/// Jump pairs `(from, to)`: a ladder when `from < to`, a snake otherwise.
pub const TRANSITIONS: [(u32, u32); 20] = [
    (13, 4),
    (85, 17),
    (95, 67),
    (97, 58),
    (66, 89),
    (87, 31),
    (57, 83),
    (91, 25),
    (28, 50),
    (35, 11),
    (8, 30),
    (41, 62),
    (81, 43),
    (69, 32),
    (20, 39),
    (33, 70),
    (79, 99),
    (23, 76),
    (15, 47),
    (61, 14),
];

/// A cell of the board, numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub number: u32,
    pub ladder_to: Option<u32>,
    pub snake_to: Option<u32>,
}

impl Cell {
    pub fn new(number: u32) -> Self {
        Self { number, ladder_to: None, snake_to: None }
    }

    /// Destination of the ladder or snake starting here.
    pub fn jump(&self) -> Option<u32> {
        self.ladder_to.or(self.snake_to)
    }
}

/// Capability set for board cells: identity is the cell number.
#[derive(Debug, Default)]
pub struct Board;

impl Capabilities<Cell> for Board {
    fn compare(&self, a: &Cell, b: &Cell) -> Ordering {
        a.number.cmp(&b.number)
    }

    fn clone_state(&self, value: &Cell) -> Cell {
        *value
    }

    fn render(&self, value: &Cell, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "[{}]", value.number)?;
        if let Some(to) = value.ladder_to {
            write!(out, "-ladder to {to}")?;
        }
        if let Some(to) = value.snake_to {
            write!(out, "-snake to {to}")?;
        }
        Ok(())
    }

    fn is_terminal(&self, value: &Cell) -> bool {
        value.number == BOARD_SIZE
    }
}

/// Lays out the cells and applies the jump table.
pub fn create_board() -> Vec<Cell> {
    let mut cells: Vec<Cell> = (1..=BOARD_SIZE).map(Cell::new).collect();
    for (from, to) in TRANSITIONS {
        let cell = &mut cells[(from - 1) as usize];
        if from < to {
            cell.ladder_to = Some(to);
        } else {
            cell.snake_to = Some(to);
        }
    }
    cells
}

/// Builds the chain of the board.
///
/// # Behavior
/// - Every cell is registered in board order, so cell 1 is the first state
/// - A cell with a jump gets a single forced transition to its destination
/// - Any other cell gets one transition per die face, stopping at the board edge
pub fn build_chain() -> Result<MarkovChain<Cell, Board>> {
    let cells = create_board();
    let mut chain = MarkovChain::new(Board);
    for cell in &cells {
        chain.add(cell)?;
    }

    for cell in &cells {
        match cell.jump() {
            Some(to) => chain.observe(cell, &cells[(to - 1) as usize])?,
            None => {
                for face in 1..=DICE_MAX {
                    let to = cell.number + face;
                    if to > BOARD_SIZE {
                        break;
                    }
                    chain.observe(cell, &cells[(to - 1) as usize])?;
                }
            }
        }
    }

    debug!("board chain holds {} cell(s)", chain.len());
    Ok(chain)
}
