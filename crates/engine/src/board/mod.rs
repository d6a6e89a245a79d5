use std::collections::{HashMap, HashSet};
use std::ops::{Deref, DerefMut};

use crate::types::{Color, Piece, PieceId, PieceKind, Square};

// Declare submodules
pub mod moves;
pub mod state;
pub mod validation;

/// Independent setup toggles for [`Board::reset`]. All default to off;
/// a square is populated only if it survives every enabled filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupOptions {
    pub no_pawns: bool,
    pub no_left_pawns: bool,
    pub no_right_pawns: bool,
    pub no_knights: bool,
    pub no_rooks: bool,
    pub no_bishops: bool,
    pub no_queens: bool,
    pub no_second_special: bool,
    pub interlace_pawns: bool,
    pub no_initial_pieces: bool,
}

impl SetupOptions {
    /// Parses a flag list into options. Unknown flag names are an
    /// error, not silently ignored.
    pub fn from_flags<'a, I>(flags: I) -> Result<SetupOptions, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut options = SetupOptions::default();
        for flag in flags {
            match flag {
                "no_pawns" => options.no_pawns = true,
                "no_left_pawns" => options.no_left_pawns = true,
                "no_right_pawns" => options.no_right_pawns = true,
                "no_knights" => options.no_knights = true,
                "no_rooks" => options.no_rooks = true,
                "no_bishops" => options.no_bishops = true,
                "no_queens" => options.no_queens = true,
                "no_second_special" => options.no_second_special = true,
                "interlace_pawns" => options.interlace_pawns = true,
                "no_initial_pieces" => options.no_initial_pieces = true,
                unknown => return Err(format!("Unknown setup flag: {}", unknown)),
            }
        }
        Ok(options)
    }
}

/// An 8x8 board owning every piece on it.
///
/// Pieces live in an arena and are addressed by [`PieceId`] handles;
/// the grid stores the handle of the occupant per square. Two derived
/// indices are kept in lockstep with the grid: active piece -> square,
/// and the active handles partitioned by color.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: [[Option<PieceId>; 8]; 8],
    pieces: Vec<Piece>,
    active: HashMap<PieceId, Square>,
    by_color: [HashSet<PieceId>; 2],
    move_history: Vec<String>,
    en_passant: Option<Square>,
    check: Option<Square>,
    checkmate: Option<Square>,
    revision: u64,
}

impl Board {
    /// A board with the standard starting position.
    pub fn new() -> Self {
        Self::with_options(&SetupOptions::default())
    }

    pub fn with_options(options: &SetupOptions) -> Self {
        let mut board = Self {
            grid: [[None; 8]; 8],
            pieces: Vec::new(),
            active: HashMap::new(),
            by_color: [HashSet::new(), HashSet::new()],
            move_history: Vec::new(),
            en_passant: None,
            check: None,
            checkmate: None,
            revision: 0,
        };
        board.reset(options);
        board
    }

    /// Rebuilds the board from the catalog's initial squares, filtered
    /// by `options`. Existing handles are invalidated.
    pub fn reset(&mut self, options: &SetupOptions) {
        self.grid = [[None; 8]; 8];
        self.pieces.clear();
        self.active.clear();
        self.by_color = [HashSet::new(), HashSet::new()];
        self.move_history.clear();
        self.en_passant = None;
        self.check = None;
        self.checkmate = None;
        self.revision += 1;

        if options.no_initial_pieces {
            return;
        }

        for kind in PieceKind::ALL {
            if options.no_pawns && kind == PieceKind::Pawn {
                continue;
            }
            if options.no_knights && kind == PieceKind::Knight {
                continue;
            }
            if options.no_rooks && kind == PieceKind::Rook {
                continue;
            }
            if options.no_bishops && kind == PieceKind::Bishop {
                continue;
            }
            if options.no_queens && kind == PieceKind::Queen {
                continue;
            }

            for color in [Color::White, Color::Black] {
                let template = crate::catalog::template(kind, color);
                for (i, &square) in template.initial_squares.iter().enumerate() {
                    if kind == PieceKind::Pawn {
                        if options.no_left_pawns && square.file < 4 {
                            continue;
                        }
                        if options.no_right_pawns && square.file > 3 {
                            continue;
                        }
                        if options.interlace_pawns && square.file % 2 == 0 {
                            continue;
                        }
                    } else if options.no_second_special && i > 0 {
                        continue;
                    }

                    self.place(Piece::new(color, kind), square);
                }
            }
        }
    }

    /// Handle of the piece at `square`. None when the square is empty
    /// or out of range; out-of-range reads are a caller bug the board
    /// tolerates rather than panics on.
    pub fn get(&self, square: Square) -> Option<PieceId> {
        if !square.in_bounds() {
            return None;
        }
        self.grid[square.rank as usize][square.file as usize]
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.get(square).map(|id| self.piece(id))
    }

    /// Installs `id` at `square`, evicting any resident piece from the
    /// grid and both indices first.
    pub fn set(&mut self, square: Square, id: PieceId) {
        if !square.in_bounds() {
            return;
        }
        if self.get(square).is_some() {
            self.remove(square);
        }

        let color = self.piece(id).color;
        self.grid[square.rank as usize][square.file as usize] = Some(id);
        self.active.insert(id, square);
        self.by_color[color.idx()].insert(id);
        self.revision += 1;
    }

    /// Deletes the piece at `square` from the grid and both indices.
    /// None signals there was nothing to remove.
    pub fn remove(&mut self, square: Square) -> Option<PieceId> {
        if !square.in_bounds() {
            return None;
        }
        let id = self.grid[square.rank as usize][square.file as usize].take()?;
        let color = self.piece(id).color;
        self.active.remove(&id);
        self.by_color[color.idx()].remove(&id);
        self.revision += 1;
        Some(id)
    }

    /// Adds a new piece to the arena and installs it at `square`.
    pub fn place(&mut self, piece: Piece, square: Square) -> PieceId {
        let id = PieceId::new(self.pieces.len());
        self.pieces.push(piece);
        self.set(square, id);
        id
    }

    /// Every active piece with its position.
    pub fn active_pieces(&self) -> &HashMap<PieceId, Square> {
        &self.active
    }

    /// Active pieces of one color with their positions.
    pub fn pieces_by_color(&self, color: Color) -> impl Iterator<Item = (PieceId, Square)> + '_ {
        self.by_color[color.idx()]
            .iter()
            .filter_map(move |&id| self.active.get(&id).map(|&square| (id, square)))
    }

    /// Append-only record of executed moves in notation form.
    pub fn move_history(&self) -> &[String] {
        &self.move_history
    }

    pub(crate) fn push_history(&mut self, notation: String) {
        self.move_history.push(notation);
    }

    /// Square of a pawn that double-stepped last move and can be
    /// captured en passant this move, if any.
    pub fn en_passant_window(&self) -> Option<Square> {
        self.en_passant
    }

    pub(crate) fn set_en_passant_window(&mut self, window: Option<Square>) {
        self.en_passant = window;
    }

    /// Square of a piece currently giving check, if any.
    pub fn check(&self) -> Option<Square> {
        self.check
    }

    pub fn checkmate(&self) -> Option<Square> {
        self.checkmate
    }

    pub(crate) fn set_check_state(&mut self, check: Option<Square>, checkmate: Option<Square>) {
        self.check = check;
        self.checkmate = checkmate;
    }

    /// Counter bumped by every indexed mutation. Callers can compare
    /// snapshots of this instead of polling board contents.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Temporarily relocates the piece at `from` onto `to` by raw grid
    /// assignment, leaving the indices and piece state untouched. Both
    /// cells are restored when the returned guard drops, on every exit
    /// path.
    pub fn simulate_move(&mut self, from: Square, to: Square) -> SimulatedMove<'_> {
        let saved_from = self.get(from);
        let saved_to = self.get(to);
        if from.in_bounds() && to.in_bounds() {
            self.grid[to.rank as usize][to.file as usize] = saved_from;
            self.grid[from.rank as usize][from.file as usize] = None;
        }
        SimulatedMove {
            board: self,
            from,
            to,
            saved_from,
            saved_to,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Scope guard for a lookahead simulation step. Dereferences to the
/// board so searches can recurse through it; dropping it puts the
/// original occupants of both touched cells back.
pub struct SimulatedMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    saved_from: Option<PieceId>,
    saved_to: Option<PieceId>,
}

impl Deref for SimulatedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for SimulatedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        if self.from.in_bounds() && self.to.in_bounds() {
            self.board.grid[self.from.rank as usize][self.from.file as usize] = self.saved_from;
            self.board.grid[self.to.rank as usize][self.to.file as usize] = self.saved_to;
        }
    }
}
