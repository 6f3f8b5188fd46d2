//! End-to-end games driven through `GameState::apply_move`.

use gobblet_core::{Coord, GameError, GameState, Inventory, Origin, Piece, Player, Size, Status};

fn c(x: u8, y: u8) -> Coord {
    Coord::new(x, y).unwrap()
}

fn reserve(i: u8) -> Origin {
    Origin::reserve(i).unwrap()
}

fn cell(x: u8, y: u8) -> Origin {
    Origin::cell(x, y).unwrap()
}

/// Reserves of single-size stacks, handy for placing an exact size.
fn sized(player: Player, sizes: [&[Size]; 3]) -> Inventory {
    Inventory::from_sizes(player, sizes).unwrap()
}

#[test]
fn test_first_placement_snapshot() {
    let inventories = [
        sized(Player::One, [&[Size::Medium], &[Size::Medium], &[Size::Large]]),
        sized(Player::Two, [&[Size::Tiny], &[Size::Small], &[Size::Large]]),
    ];
    let mut game = GameState::new(inventories).unwrap();

    let snapshot = game.apply_move(reserve(0), c(0, 0)).unwrap();
    for at in Coord::all() {
        let expected = (at == c(0, 0)).then(|| Piece::of(Size::Medium, Player::One));
        assert_eq!(snapshot.at(at), expected, "{at}");
    }
    assert_eq!(
        serde_json::to_value(snapshot.at(c(0, 0))).unwrap(),
        serde_json::json!({ "owner": 1, "size": 2 })
    );

    game.apply_move(reserve(0), c(3, 3)).unwrap();
    let snapshot = game.apply_move(reserve(1), c(1, 1)).unwrap();
    assert_eq!(snapshot.at(c(0, 0)), Some(Piece::of(Size::Medium, Player::One)));
    assert_eq!(snapshot.at(c(1, 1)), Some(Piece::of(Size::Medium, Player::One)));
    assert_eq!(snapshot.at(c(3, 3)), Some(Piece::of(Size::Tiny, Player::Two)));
}

#[test]
fn test_equal_size_cannot_cover() {
    let inventories = [
        sized(Player::One, [&[Size::Small], &[Size::Small], &[Size::Large]]),
        sized(Player::Two, [&[Size::Small], &[], &[]]),
    ];
    let mut game = GameState::new(inventories).unwrap();
    game.apply_move(reserve(2), c(0, 0)).unwrap();
    game.apply_move(reserve(0), c(2, 2)).unwrap();

    let before = game.clone();
    let err = game.apply_move(reserve(0), c(2, 2)).unwrap_err();
    assert_eq!(err, GameError::IllegalPlacement { at: c(2, 2), size: Size::Small, top: Size::Small });
    assert_eq!(game, before);
    assert_eq!(game.board().stack_at(c(2, 2)), &[Piece::of(Size::Small, Player::Two)]);
}

#[test]
fn test_covered_piece_reappears() {
    let inventories = [
        sized(Player::One, [&[Size::Tiny], &[Size::Large], &[]]),
        sized(Player::Two, [&[Size::Tiny, Size::Small, Size::Medium], &[], &[]]),
    ];
    let mut game = GameState::new(inventories).unwrap();

    game.apply_move(reserve(0), c(1, 1)).unwrap();
    game.apply_move(reserve(0), c(0, 3)).unwrap();
    let snapshot = game.apply_move(reserve(1), c(1, 1)).unwrap();
    assert_eq!(snapshot.at(c(1, 1)), Some(Piece::of(Size::Large, Player::One)));

    game.apply_move(reserve(0), c(3, 0)).unwrap();
    let snapshot = game.apply_move(cell(1, 1), c(2, 1)).unwrap();
    assert_eq!(snapshot.at(c(1, 1)), Some(Piece::of(Size::Tiny, Player::One)));
    assert_eq!(snapshot.at(c(2, 1)), Some(Piece::of(Size::Large, Player::One)));
}

#[test]
fn test_row_win_ends_the_game() {
    let mut game = GameState::standard();
    // Player one builds row 0, player two plays along row 2
    for x in 0..3 {
        game.apply_move(reserve(0), c(x, 0)).unwrap();
        game.apply_move(reserve(0), c(x, 2)).unwrap();
    }
    let snapshot = game.apply_move(reserve(1), c(3, 0)).unwrap();

    assert_eq!(snapshot.status, Status::Won(Player::One));
    assert_eq!(game.current_player(), Player::One);
    assert_eq!(game.winning_line(), Some([c(0, 0), c(1, 0), c(2, 0), c(3, 0)]));
    assert!(game.legal_moves().is_empty());

    let before = game.clone();
    assert_eq!(game.apply_move(reserve(1), c(3, 3)), Err(GameError::GameOver(Player::One)));
    assert_eq!(game.apply_move(cell(0, 2), c(3, 3)), Err(GameError::GameOver(Player::One)));
    assert_eq!(game, before);
}

#[test]
fn test_covered_line_does_not_win() {
    // Player one fills row 1; player two covers the first piece
    let one = sized(Player::One, [&[Size::Small], &[Size::Small], &[Size::Small, Size::Medium]]);
    let two = sized(Player::Two, [&[Size::Large], &[Size::Tiny], &[Size::Tiny]]);
    let mut game = GameState::new([one, two]).unwrap();

    game.apply_move(reserve(0), c(0, 1)).unwrap();
    game.apply_move(reserve(0), c(0, 1)).unwrap();
    game.apply_move(reserve(1), c(1, 1)).unwrap();
    game.apply_move(reserve(1), c(0, 0)).unwrap();
    game.apply_move(reserve(2), c(2, 1)).unwrap();
    game.apply_move(reserve(2), c(0, 3)).unwrap();
    let snapshot = game.apply_move(reserve(2), c(3, 1)).unwrap();

    // Row 1 holds four player-one pieces, but the one at 0,1 is covered
    assert_eq!(game.board().pieces_on_board(Player::One), [0, 3, 1, 0]);
    assert_eq!(snapshot.status, Status::InProgress);
    assert_eq!(snapshot.current_player, Player::Two);
}

#[test]
fn test_board_origin_errors() {
    let mut game = GameState::standard();
    game.apply_move(reserve(0), c(0, 0)).unwrap();

    // Player two may not lift player one's piece
    assert_eq!(
        game.apply_move(cell(0, 0), c(1, 1)),
        Err(GameError::NotOwner { player: Player::Two, owner: Player::One })
    );
    assert_eq!(game.apply_move(cell(1, 1), c(2, 2)), Err(GameError::EmptyCell(c(1, 1))));
    assert_eq!(game.current_player(), Player::Two);
}

#[test]
fn test_invalid_descriptors() {
    assert_eq!(Origin::reserve(3), Err(GameError::InvalidOrigin(3)));
    assert_eq!(Coord::new(0, 4), Err(GameError::OutOfBounds { x: 0, y: 4 }));
    assert_eq!(Piece::new(4, 2), Err(GameError::InvalidPiece { size: 4, owner: 2 }));
}
