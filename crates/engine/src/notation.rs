//! Pure move-notation formatting. No board access, no side effects;
//! the executor passes in everything the string needs.

use crate::types::{CastleSide, PieceKind, Square};

/// Flags qualifying a single executed move.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MoveFlags {
    pub capture: bool,
    pub en_passant: bool,
    pub check: bool,
    pub checkmate: bool,
    pub castle: Option<CastleSide>,
}

fn square_letter(square: Square) -> char {
    (b'a' + square.rank as u8) as char
}

fn square_number(square: Square) -> i8 {
    square.file + 1
}

/// Two-character coordinate half of a move string, e.g. "f2".
pub fn position_to_notation(square: Square) -> String {
    format!("{}{}", square_letter(square), square_number(square))
}

/// Inverse of [`position_to_notation`]. Returns None for anything that
/// is not a letter a-h followed by a digit 1-8.
pub fn notation_to_position(notation: &str) -> Option<Square> {
    let bytes = notation.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    if !(b'a'..=b'h').contains(&bytes[0]) || !(b'1'..=b'8').contains(&bytes[1]) {
        return None;
    }
    Some(Square::new(
        (bytes[0] - b'a') as i8,
        (bytes[1] - b'1') as i8,
    ))
}

/// Builds the history string for one move.
///
/// Pawns write `f2-f4` / `f4xe5` (plus an ` e.p.` tag), every other
/// kind prefixes its glyph, castles collapse to `O-O` / `O-O-O`, and a
/// check or checkmate appends `+` or `#`.
pub fn generate_notation(
    kind: PieceKind,
    glyph: &str,
    from: Square,
    to: Square,
    flags: MoveFlags,
) -> String {
    let mut notation = if let Some(side) = flags.castle {
        match side {
            CastleSide::Kingside => "O-O".to_string(),
            CastleSide::Queenside => "O-O-O".to_string(),
        }
    } else {
        let from = position_to_notation(from);
        let to = position_to_notation(to);
        let separator = if flags.capture { "x" } else { "-" };

        if kind == PieceKind::Pawn {
            let tag = if flags.en_passant { " e.p." } else { "" };
            format!("{}{}{}{}", from, separator, to, tag)
        } else {
            format!("{}{}{}{}", glyph, from, separator, to)
        }
    };

    if flags.checkmate {
        notation.push('#');
    } else if flags.check {
        notation.push('+');
    }

    notation
}
