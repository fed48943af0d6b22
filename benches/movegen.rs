use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cragspider::rules::{has_legal_move, movable_pieces};
use cragspider::{Agent, AiConfig, Board, BoardScorer, Color, GameConfig, GreedyAgent, RandomAgent};

fn default_board() -> Board {
    let config = Arc::new(GameConfig::embedded().expect("embedded game config"));
    Board::new(config).expect("default board")
}

fn bench_movegen(c: &mut Criterion) {
    let board = default_board();
    let mut group = c.benchmark_group("movegen");

    group.bench_function("valid_moves_all_pieces", |b| {
        b.iter(|| {
            board
                .pieces()
                .map(|(pos, piece)| piece.valid_moves(pos, black_box(&board)).len())
                .sum::<usize>()
        })
    });
    group.bench_function("movable_pieces_white", |b| {
        b.iter(|| movable_pieces(black_box(&board), Color::White))
    });
    group.bench_function("has_legal_move_black", |b| {
        b.iter(|| has_legal_move(black_box(&board), Color::Black))
    });

    group.finish();
}

fn bench_agents(c: &mut Criterion) {
    let board = default_board();
    let ai_config = AiConfig::embedded().expect("embedded ai config");
    let scorer = BoardScorer::from_profile(&ai_config, "doofus").expect("doofus profile");
    let random = RandomAgent::new(Color::White);
    let greedy = GreedyAgent::new(Color::White, scorer);

    let mut group = c.benchmark_group("agents");
    group.bench_function("random_next_move", |b| {
        b.iter(|| random.next_move(black_box(&board)))
    });
    group.bench_function("greedy_next_move", |b| {
        b.iter(|| greedy.next_move(black_box(&board)))
    });
    group.finish();
}

fn bench_board_update(c: &mut Criterion) {
    let board = default_board();
    let (from, piece) = board
        .pieces()
        .find(|(_, piece)| piece.color() == Color::White)
        .map(|(pos, piece)| (pos, piece.clone()))
        .expect("white piece on default board");
    let to = piece.valid_moves(from, &board)[0];

    c.bench_function("board/move_piece", |b| {
        b.iter(|| board.move_piece(black_box(&piece), from, to - from))
    });
}

criterion_group!(benches, bench_movegen, bench_agents, bench_board_update);
criterion_main!(benches);
