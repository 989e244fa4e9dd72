use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cylinder_chess::game_state::board::Board;
use cylinder_chess::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind};
use cylinder_chess::move_generation::legal_move_generator::legal_moves;

/// A sparse middlegame-like position with long open wrap lines, where the
/// two-route path scans do the most work.
fn open_lines_board() -> Board {
    let mut board = Board::empty();
    let mut put = |square: (i8, i8), kind, color| {
        board.set(square, Some(Piece::new(kind, color)));
    };

    put((7, 4), PieceKind::King, Color::White);
    put((7, 0), PieceKind::Rook, Color::White);
    put((4, 6), PieceKind::Queen, Color::White);
    put((3, 2), PieceKind::Bishop, Color::White);
    put((5, 5), PieceKind::Knight, Color::White);
    put((6, 0), PieceKind::Pawn, Color::White);
    put((6, 7), PieceKind::Pawn, Color::White);

    put((0, 4), PieceKind::King, Color::Black);
    put((0, 0), PieceKind::Rook, Color::Black);
    put((2, 3), PieceKind::Queen, Color::Black);
    put((1, 1), PieceKind::Pawn, Color::Black);
    put((1, 6), PieceKind::Pawn, Color::Black);

    board
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));

    let startpos = Board::initial();
    let rights = CastlingRights::initial();

    // Correctness guard before benchmarking.
    let moves = legal_moves(&startpos, Color::White, &rights, None)
        .expect("startpos should generate");
    assert_eq!(moves.len(), 20);

    group.bench_function("startpos_white", |b| {
        b.iter(|| {
            let moves = legal_moves(
                black_box(&startpos),
                black_box(Color::White),
                black_box(&rights),
                None,
            )
            .expect("benchmark run should succeed");
            black_box(moves.len())
        });
    });

    let open = open_lines_board();
    let open_moves =
        legal_moves(&open, Color::White, &rights, None).expect("open board should generate");
    assert!(!open_moves.is_empty());

    group.bench_function("open_lines_white", |b| {
        b.iter(|| {
            let moves = legal_moves(
                black_box(&open),
                black_box(Color::White),
                black_box(&rights),
                None,
            )
            .expect("benchmark run should succeed");
            black_box(moves.len())
        });
    });

    group.finish();
}

criterion_group!(legal_move_benches, bench_legal_moves);
criterion_main!(legal_move_benches);
