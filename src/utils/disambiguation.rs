//! Notation disambiguation.
//!
//! Actions whose rendered notation collides are given extra source
//! information, decided per action against the other members of its group:
//! the source file if no other member shares it, else the source rank if no
//! other member shares that, else the full source square. The token goes right
//! after the piece letter (or first, for pawns).
//!
//! Applying it to an already unique set changes nothing, so running it twice is
//! harmless.

use std::collections::BTreeMap;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::move_descriptions::Action;

pub fn resolve_ambiguity<'a, I>(actions: I)
where
    I: IntoIterator<Item = &'a mut Action>,
{
    let mut groups = BTreeMap::<String, Vec<&'a mut Action>>::new();
    for action in actions {
        groups.entry(action.notation.clone()).or_default().push(action);
    }

    for group in groups.values_mut() {
        if group.len() < 2 {
            continue;
        }

        let sources: Vec<Square> = group.iter().map(|action| action.source()).collect();
        for (index, action) in group.iter_mut().enumerate() {
            let token = disambiguation_token(sources[index], &sources, index);
            let at = if action.piece.kind == PieceKind::Pawn { 0 } else { 1 };
            action.notation.insert_str(at, &token);
        }
    }
}

fn disambiguation_token(own: Square, sources: &[Square], own_index: usize) -> String {
    let others = || {
        sources
            .iter()
            .enumerate()
            .filter(move |(index, _)| *index != own_index)
            .map(|(_, sq)| *sq)
    };

    if others().all(|other| other.col() != own.col()) {
        own.file_char().to_string()
    } else if others().all(|other| other.row() != own.row()) {
        own.rank_char().to_string()
    } else {
        own.to_string()
    }
}
