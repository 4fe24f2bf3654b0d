//! Scenarios shared by the in-memory and Postgres store tests.
#![allow(dead_code)]

use bingo_hall::BingoError;
use bingo_hall::database::models::{NewCard, SettingsPatch};
use bingo_hall::store::BingoStore;
use serde_json::json;

pub fn new_card(card_id: &str, name: &str, numbers: &[i32]) -> NewCard {
    NewCard {
        card_id: card_id.to_string(),
        name: name.to_string(),
        numbers: numbers.to_vec(),
    }
}

pub fn patch(json: &str) -> SettingsPatch {
    serde_json::from_str(json).expect("valid patch json")
}

pub async fn add_then_list_keeps_order(store: &dyn BingoStore) {
    store
        .add_card(new_card("A-01", "Ana", &[12, 3, 75, 40]))
        .await
        .unwrap();
    store
        .add_card(new_card("A-02", "Bruno", &[1]))
        .await
        .unwrap();
    let cards = store.list_cards().await.unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].card_id, "A-01");
    assert_eq!(cards[0].name, "Ana");
    assert_eq!(cards[0].numbers, vec![12, 3, 75, 40]);
    assert!(!cards[0].is_winner);
    assert_eq!(cards[1].card_id, "A-02");
    assert!(cards[0].id < cards[1].id);
}

pub async fn duplicate_card_is_rejected(store: &dyn BingoStore) {
    store
        .add_card(new_card("DUP", "First", &[1, 2]))
        .await
        .unwrap();
    let err = store
        .add_card(new_card("DUP", "Second", &[3, 4]))
        .await
        .unwrap_err();
    assert!(matches!(err, BingoError::DuplicateKey(id) if id == "DUP"));
    let cards = store.list_cards().await.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "First");
}

pub async fn invalid_numbers_are_rejected(store: &dyn BingoStore) {
    for numbers in [&[][..], &[0][..], &[5, 76][..]] {
        let err = store
            .add_card(new_card("BAD", "Bad", numbers))
            .await
            .unwrap_err();
        assert!(matches!(err, BingoError::Validation(_)));
    }
    assert!(store.list_cards().await.unwrap().is_empty());
}

pub async fn delete_card_by_id(store: &dyn BingoStore) {
    let card = store
        .add_card(new_card("DEL", "Gone", &[9]))
        .await
        .unwrap();
    store.delete_card(card.id).await.unwrap();
    assert!(store.list_cards().await.unwrap().is_empty());
    let err = store.delete_card(card.id).await.unwrap_err();
    assert!(matches!(err, BingoError::NotFound(_)));
}

pub async fn start_drawing_resets_session(store: &dyn BingoStore) {
    store
        .add_card(new_card("W", "Winner", &[5]))
        .await
        .unwrap();
    store.start_drawing().await.unwrap();
    // Leave 5 as the only undrawn number so the next draw marks the card.
    let almost_all: Vec<i32> = (1..=75).filter(|n| *n != 5).collect();
    store
        .update_settings(SettingsPatch {
            drawn_numbers: Some(almost_all),
            prize_image: Some(Some("car.png".into())),
            ..SettingsPatch::default()
        })
        .await
        .unwrap();
    let outcome = store.draw_number().await.unwrap();
    assert_eq!(outcome.number, 5);
    assert!(outcome.has_winner);
    assert!(store.list_cards().await.unwrap()[0].is_winner);

    let settings = store.start_drawing().await.unwrap();
    assert!(settings.is_drawing);
    assert!(!settings.has_winner);
    assert!(settings.drawn_numbers.is_empty());
    assert_eq!(settings.prize_image.as_deref(), Some("car.png"));

    assert_eq!(store.get_settings().await.unwrap(), settings);
    assert!(store.list_cards().await.unwrap().iter().all(|c| !c.is_winner));

    // Restarting a running session is the same operation.
    store.draw_number().await.unwrap();
    let settings = store.start_drawing().await.unwrap();
    assert!(settings.drawn_numbers.is_empty());
    assert!(settings.is_drawing);
}

pub async fn draw_while_idle_changes_nothing(store: &dyn BingoStore) {
    store
        .add_card(new_card("I", "Idle", &[1, 2]))
        .await
        .unwrap();
    let before_settings = store.get_settings().await.unwrap();
    let before_cards = store.list_cards().await.unwrap();

    let err = store.draw_number().await.unwrap_err();
    assert!(matches!(err, BingoError::NotDrawing));

    assert_eq!(store.get_settings().await.unwrap(), before_settings);
    assert_eq!(store.list_cards().await.unwrap(), before_cards);
}

pub async fn exhausts_pool_without_winner(store: &dyn BingoStore) {
    store.start_drawing().await.unwrap();
    let mut seen = Vec::new();
    for _ in 0..75 {
        let outcome = store.draw_number().await.unwrap();
        assert!(!outcome.has_winner);
        assert!(outcome.winner.is_none());
        assert!((1..=75).contains(&outcome.number));
        assert!(!seen.contains(&outcome.number), "duplicate draw");
        seen.push(outcome.number);
    }
    let settings = store.get_settings().await.unwrap();
    assert_eq!(settings.drawn_numbers, seen);
    assert!(settings.is_drawing);

    let err = store.draw_number().await.unwrap_err();
    assert!(matches!(err, BingoError::PoolExhausted));
    let settings = store.get_settings().await.unwrap();
    assert!(!settings.is_drawing);
    assert_eq!(settings.drawn_numbers.len(), 75);
}

/// A = {7, 23} and B = {7, 23, 50}: A must be reported on the draw that
/// completes {7, 23}, even when B completes on the same draw.
pub async fn first_complete_card_wins(store: &dyn BingoStore) {
    store
        .add_card(new_card("A", "Alice", &[7, 23]))
        .await
        .unwrap();
    store
        .add_card(new_card("B", "Bob", &[7, 23, 50]))
        .await
        .unwrap();
    store.start_drawing().await.unwrap();

    let mut drawn = Vec::new();
    let outcome = loop {
        let outcome = store.draw_number().await.unwrap();
        drawn.push(outcome.number);
        if outcome.has_winner {
            break outcome;
        }
        assert!(!(drawn.contains(&7) && drawn.contains(&23)));
    };

    assert!(outcome.number == 7 || outcome.number == 23);
    let winner = outcome.winner.expect("winner details");
    assert_eq!(winner.card_id, "A");
    assert_eq!(winner.name, "Alice");
    assert_eq!(winner.numbers, vec![7, 23]);

    let settings = store.get_settings().await.unwrap();
    assert!(settings.has_winner);
    assert!(!settings.is_drawing);
    assert_eq!(settings.drawn_numbers, drawn);

    let cards = store.list_cards().await.unwrap();
    assert!(cards[0].is_winner);
    assert!(!cards[1].is_winner);

    // The session is over until it is started again.
    assert!(matches!(
        store.draw_number().await.unwrap_err(),
        BingoError::NotDrawing
    ));
}

pub async fn prize_patch_touches_only_prize(store: &dyn BingoStore) {
    store.start_drawing().await.unwrap();
    store.draw_number().await.unwrap();
    store
        .update_settings(patch(r#"{"sponsor_images": ["acme.png", "globex.png"]}"#))
        .await
        .unwrap();
    let before = store.get_settings().await.unwrap();

    let after = store
        .update_settings(patch(r#"{"prize_image": "trophy.png"}"#))
        .await
        .unwrap();
    assert_eq!(after.prize_image.as_deref(), Some("trophy.png"));
    assert_eq!(after.drawn_numbers, before.drawn_numbers);
    assert_eq!(after.is_drawing, before.is_drawing);
    assert_eq!(after.has_winner, before.has_winner);
    assert_eq!(after.sponsor_images, before.sponsor_images);
    assert_eq!(after.countdown_time, before.countdown_time);
    assert_eq!(store.get_settings().await.unwrap(), after);
}

pub async fn long_prize_image_is_kept(store: &dyn BingoStore) {
    let name = format!("{}.png", "p".repeat(150));
    let body = json!({ "prize_image": name }).to_string();
    let settings = store.update_settings(patch(&body)).await.unwrap();
    assert_eq!(settings.prize_image.as_deref(), Some(name.as_str()));
    assert_eq!(
        store.get_settings().await.unwrap().prize_image.as_deref(),
        Some(name.as_str())
    );
}

pub async fn bad_timestamp_is_rejected(store: &dyn BingoStore) {
    let before = store.get_settings().await.unwrap();
    let err = store
        .update_settings(patch(r#"{"countdown_time": "soon", "prize_image": "x.png"}"#))
        .await
        .unwrap_err();
    assert!(matches!(err, BingoError::Validation(_)));
    assert_eq!(store.get_settings().await.unwrap(), before);

    let settings = store
        .update_settings(patch(r#"{"countdown_time": "2030-12-24T19:00"}"#))
        .await
        .unwrap();
    assert_eq!(
        settings.countdown_time.map(|t| t.to_rfc3339()),
        Some("2030-12-24T19:00:00+00:00".to_string())
    );
}
