// life.rs - Double-buffered Game of Life session

use crate::history::CycleHistory;
use crate::patterns::Pattern;
use crate::seed::randomize;
use crate::{encode, grid, step, FrameBuffer, GridError, GridSize, Palette};
use tracing::info;

/// Result of one [`GameOfLife::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// 1-based number of the generation now held in the frame.
    pub generation: u64,
    /// The rendered generation repeats one of the last few.
    pub cycle: bool,
}

/// Two cell buffers that swap roles every generation, plus the frame they
/// render into. Nothing is allocated after [`GameOfLife::new`].
#[derive(Debug, Clone)]
pub struct GameOfLife {
    size: GridSize,
    front: Vec<u8>,
    back: Vec<u8>,
    frame: FrameBuffer,
    palette: Palette,
    generation: u64,
    history: CycleHistory,
}

impl GameOfLife {
    /// An all-dead board.
    pub fn new(size: GridSize, palette: Palette) -> Self {
        Self {
            size,
            front: vec![0; size.area()],
            back: vec![0; size.area()],
            frame: FrameBuffer::new(size),
            palette,
            generation: 0,
            history: CycleHistory::new(),
        }
    }

    /// Fill the board with seeded random cells.
    pub fn seed_random(&mut self, seed: u64) {
        randomize(&mut self.front, seed);
        self.reset();
        info!(seed, population = self.population(), "seeded random board");
    }

    /// Replace the board with `pattern`, centred.
    pub fn apply_pattern(&mut self, pattern: &Pattern) -> Result<(), GridError> {
        pattern.place_centered(&mut self.front, self.size)?;
        self.reset();
        info!(pattern = pattern.name, "applied pattern");
        Ok(())
    }

    /// Render the current generation into the frame, then compute the next.
    ///
    /// The frame shows changes relative to the generation before it. After the
    /// call [`GameOfLife::frame`] holds the rendered generation and
    /// [`GameOfLife::current`] already holds its successor.
    pub fn advance(&mut self) -> Tick {
        self.generation += 1;
        encode(&mut self.frame, &self.front, &self.back, &self.palette);
        let cycle = self.history.observe(&self.front);

        std::mem::swap(&mut self.front, &mut self.back);
        step(&mut self.front, &self.back, self.size);

        Tick { generation: self.generation, cycle }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn current(&self) -> &[u8] {
        &self.front
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        grid::population(&self.front)
    }

    // The first frame has nothing to compare against, so previous == current
    // renders it without change colors.
    fn reset(&mut self) {
        self.back.copy_from_slice(&self.front);
        self.generation = 0;
        self.history.clear();
    }
}
