use tui_2048::core::GameState;
use tui_2048::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tui_2048::types::Phase;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let mut state = GameState::new(1);
    state.start_game();
    let view = GameView::default();

    // 4 tiles of 6 + 5 gaps + border = 31 wide; 5 tiles of 3 + 6 gaps + border = 23 tall.
    let fb = view.render(&state.snapshot(), Viewport::new(31, 23));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(30, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 22).unwrap().ch, '└');
    assert_eq!(fb.get(30, 22).unwrap().ch, '┘');
}

#[test]
fn term_view_centers_tile_value() {
    let mut snap = GameState::new(1).snapshot();
    snap.phase = Phase::Playing;
    snap.board[0][0] = 2048;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(31, 23));

    // Tile (0,0) starts inside the border plus one gap: (2,2); 6 wide, 3 tall.
    // "2048" is centred on the middle row: x = 2 + (6 - 4) / 2 = 3, y = 2 + 1.
    let row = fb.row_text(3);
    assert_eq!(&row.chars().skip(3).take(4).collect::<String>(), "2048");
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::new(1);
    gs.start_game();
    let mut snap = gs.snapshot();
    snap.score = 1234;
    snap.best_score = 5678;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(60, 23));
    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("BEST"));
    assert!(all.contains("5678"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let mut gs = GameState::new(1);
    gs.start_game();
    let fb = GameView::default().render(&gs.snapshot(), Viewport::new(31, 23));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_no_moves_notice_when_over() {
    let mut gs = GameState::new(1);
    gs.start_game();
    let mut snap = gs.snapshot();
    let playing = GameView::default().render(&snap, Viewport::new(31, 23));
    assert!(!screen_text(&playing).contains("NO MOVES LEFT"));

    snap.phase = Phase::Over;
    let fb = GameView::default().render(&snap, Viewport::new(31, 23));
    assert!(screen_text(&fb).contains("NO MOVES LEFT"));
}

#[test]
fn term_view_notice_leaves_every_tile_visible() {
    let mut snap = GameState::new(1).snapshot();
    snap.phase = Phase::Over;
    snap.board = [
        [2, 4, 8, 16],
        [32, 64, 128, 4],
        [1024, 2048, 512, 256],
        [2, 4, 8, 16],
        [32, 64, 128, 8],
    ];

    // No spare row under the frame, and one spare row.
    for height in [23, 24] {
        let fb = GameView::default().render(&snap, Viewport::new(31, height));

        // Tile rows sit at y = 2 + 4 * row; values on the middle line.
        for (row, values) in snap.board.iter().enumerate() {
            let text = fb.row_text(3 + 4 * row as u16);
            for value in values {
                assert!(
                    text.contains(&value.to_string()),
                    "row {} lost {} at height {}: {:?}",
                    row,
                    value,
                    height,
                    text
                );
            }
        }
        assert!(screen_text(&fb).contains("NO MOVES LEFT"));
    }

    // Board row 2 centred at y = 11: "1024 2048 512 256" across the four tiles.
    let fb = GameView::default().render(&snap, Viewport::new(31, 23));
    let text = fb.row_text(11);
    for value in ["1024", "2048", "512", "256"] {
        assert!(text.contains(value), "{:?}", text);
    }
}

#[test]
fn term_view_prompts_before_first_game() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(40, 23));
    assert!(screen_text(&fb).contains("PRESS R TO START"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // start_y = (33 - 23) / 2 = 5 => top-left corner at (0,5).
    let fb = view.render(&snap, Viewport::new(31, 33));
    assert_eq!(fb.get(0, 5).unwrap().ch, '┌');

    let fb = view.with_anchor_y(AnchorY::Top).render(&snap, Viewport::new(31, 33));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
