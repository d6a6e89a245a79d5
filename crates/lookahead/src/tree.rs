use engine::{Board, Color, Move, Square};

/// A node in a move tree. Owns the move that led to its board state
/// (None at the root) and every deeper node reached from it.
#[derive(Debug, Default)]
pub struct DepthNode {
    pub mv: Option<Move>,
    pub children: Vec<DepthNode>,
}

impl DepthNode {
    pub fn new(mv: Option<Move>) -> Self {
        Self {
            mv,
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: DepthNode) {
        self.children.push(child);
    }

    /// Total number of moves in this subtree, the node's own included.
    pub fn size(&self) -> usize {
        usize::from(self.mv.is_some())
            + self.children.iter().map(DepthNode::size).sum::<usize>()
    }
}

/// A tree of moves rooted at a snapshot of a board state, built per
/// lookahead request and discarded when the selection changes.
#[derive(Debug)]
pub struct MoveTree {
    starting_board: Board,
    pub root: DepthNode,
}

impl MoveTree {
    pub fn new(board: &Board) -> Self {
        Self {
            starting_board: board.clone(),
            root: DepthNode::default(),
        }
    }

    /// Explores every piece of `color` to the requested depth. One
    /// child of the root per piece; simulation follows the same raw
    /// relocate-and-restore discipline as the depth search.
    pub fn explore(board: &mut Board, color: Color, depth: i32) -> Self {
        let mut tree = Self::new(board);

        let squares: Vec<Square> = board.pieces_by_color(color).map(|(_, sq)| sq).collect();
        for square in squares {
            let mut piece_node = DepthNode::default();
            Self::grow(board, square, depth, &mut piece_node);
            tree.root.add_child(piece_node);
        }

        tree
    }

    fn grow(board: &mut Board, square: Square, depth: i32, node: &mut DepthNode) {
        if depth < 0 || board.get(square).is_none() {
            return;
        }

        for target in board.valid_moves(square) {
            let mut child = DepthNode::new(Some(Move::new(square, target)));
            {
                let mut sim = board.simulate_move(square, target);
                Self::grow(&mut sim, target, depth - 1, &mut child);
            }
            node.add_child(child);
        }
    }

    /// Replays the moves along `path` (child indices from the root)
    /// onto a copy of the starting snapshot. None if the path leaves
    /// the tree.
    pub fn board_after(&self, path: &[usize]) -> Option<Board> {
        let mut board = self.starting_board.clone();
        let mut node = &self.root;

        for &index in path {
            node = node.children.get(index)?;
            if let Some(mv) = node.mv {
                board.move_piece(mv.from, mv.to);
            }
        }

        Some(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::PieceKind;

    #[test]
    fn test_explore_counts_the_classic_opening_moves() {
        let mut board = Board::new();
        let tree = MoveTree::explore(&mut board, Color::White, 0);

        // one child per white piece
        assert_eq!(tree.root.children.len(), 16);
        // 16 pawn moves plus 4 knight moves
        assert_eq!(tree.root.size(), 20);
    }

    #[test]
    fn test_explore_leaves_the_board_untouched() {
        let mut board = Board::new();
        let before = board.clone();

        let _ = MoveTree::explore(&mut board, Color::Black, 1);
        assert_eq!(board, before);
    }

    #[test]
    fn test_board_after_replays_a_path() {
        let mut board = Board::new();
        let tree = MoveTree::explore(&mut board, Color::White, 0);

        // find some pawn's first move in the tree and replay it
        let (piece_index, move_node) = tree
            .root
            .children
            .iter()
            .enumerate()
            .find_map(|(i, node)| node.children.first().map(|child| (i, child)))
            .expect("at least one piece has a move");
        let mv = move_node.mv.expect("move nodes carry a move");

        let replayed = tree.board_after(&[piece_index, 0]).expect("valid path");
        assert_eq!(replayed.get(mv.from), None);
        let moved = replayed.piece_at(mv.to).expect("piece on destination");
        assert!(matches!(moved.kind, PieceKind::Pawn | PieceKind::Knight));
        assert_eq!(replayed.move_history().len(), 1);

        assert!(tree.board_after(&[99]).is_none());
    }
}
