// Central constants for the board and storage limits.
pub const MIN_NUMBER: i32 = 1;
pub const MAX_NUMBER: i32 = 75;
/// Size of the draw pool; a session can never draw more than this.
pub const POOL_SIZE: usize = (MAX_NUMBER - MIN_NUMBER + 1) as usize;
// Column limits of the cards table.
pub const MAX_CARD_ID_LEN: usize = 50;
pub const MAX_CARD_NAME_LEN: usize = 100;
// Primary key of the one and only settings row.
pub const SETTINGS_ROW_ID: i32 = 1;

/// True when `n` is a number that can appear on the board.
pub fn is_board_number(n: i32) -> bool {
    (MIN_NUMBER..=MAX_NUMBER).contains(&n)
}
