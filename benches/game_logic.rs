use criterion::{black_box, criterion_group, criterion_main, Criterion};
use connect_four::core::{Board, BoardSize, Game};
use connect_four::types::Player;

/// Largest board, packed with a pattern that has no four in a row
fn crowded_board() -> Board {
    let mut board = Board::new(BoardSize::new(20, 20).unwrap());
    for row in 0..20 {
        for column in 0..20 {
            let player = if (column / 2 + row) % 2 == 1 {
                Player::One
            } else {
                Player::Two
            };
            board.drop_piece(column, player);
        }
    }
    board
}

fn bench_win_scan_miss(c: &mut Criterion) {
    let board = crowded_board();

    c.bench_function("win_scan_20x20_no_winner", |b| {
        b.iter(|| black_box(&board).has_four_in_a_row(black_box(Player::One)))
    });
}

fn bench_win_scan_empty(c: &mut Criterion) {
    let board = Board::new(BoardSize::new(20, 20).unwrap());

    c.bench_function("win_scan_20x20_empty", |b| {
        b.iter(|| black_box(&board).has_four_in_a_row(black_box(Player::Two)))
    });
}

fn bench_play_full_game(c: &mut Criterion) {
    c.bench_function("play_4x4_draw", |b| {
        b.iter(|| {
            let mut game = Game::new(BoardSize::new(4, 4).unwrap());
            for column in [1, 3, 2, 4, 3, 1, 4, 2, 1, 3, 2, 4, 3, 1, 4, 2] {
                let _ = game.play(black_box(column));
            }
            game.outcome()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let board = crowded_board();

    c.bench_function("render_20x20", |b| b.iter(|| black_box(&board).render()));
}

criterion_group!(
    benches,
    bench_win_scan_miss,
    bench_win_scan_empty,
    bench_play_full_game,
    bench_render
);
criterion_main!(benches);
