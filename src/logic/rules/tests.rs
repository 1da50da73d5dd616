// src/logic/rules/tests.rs
// ルールエンジン (Klondike) のシナリオテスト！

use std::collections::HashSet;

use proptest::prelude::*;

use super::*;
use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::{StackType, FOUNDATION_COUNT, TABLEAU_COUNT};

fn c(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// 指定した山以外の残りのカードを全部山札に詰めて、52 枚揃った Klondike を作る。
pub(crate) fn game_with(piles: Vec<(StackType, Vec<Card>)>, face_up: &[Card]) -> Klondike {
    let used: HashSet<Card> = piles.iter().flat_map(|(_, cards)| cards.iter().copied()).collect();
    let rest: Vec<Card> = Card::deck().into_iter().filter(|card| !used.contains(card)).collect();
    let mut all = piles;
    match all.iter_mut().find(|(stack, _)| *stack == StackType::Stock) {
        Some((_, stock)) => {
            let mut merged = rest;
            merged.append(stock);
            *stock = merged;
        }
        None => all.push((StackType::Stock, rest)),
    }
    Klondike::from_piles(all, face_up)
}

/// 52 枚がちょうど 1 回ずつ、どこかの山に入ってるか。
pub(crate) fn assert_every_card_once(game: &dyn PileQuery) {
    let mut seen = HashSet::new();
    for stack in StackType::traversal_order() {
        for &card in game.pile(stack) {
            assert!(seen.insert(card), "{:?} が 2 回出てきた！", card);
        }
    }
    assert_eq!(seen.len(), 52, "カードが足りない！");
}

#[test]
fn fresh_deal_has_klondike_shape() {
    let game = Klondike::with_seed(1);
    assert_every_card_once(&game);
    assert_eq!(game.stock().len(), 24);
    assert!(game.waste().is_empty());
    for i in 0..FOUNDATION_COUNT {
        assert!(game.foundation(i).is_empty());
    }
    for i in 0..TABLEAU_COUNT {
        let pile = game.tableau(i);
        assert_eq!(pile.len(), i + 1);
        // 一番上だけ表、それ以外は裏
        let (top, rest) = pile.split_last().unwrap();
        assert!(game.is_face_up(*top));
        assert!(rest.iter().all(|&card| !game.is_face_up(card)));
    }
    assert!(game.stock().iter().all(|&card| !game.is_face_up(card)));
}

#[test]
fn same_seed_same_deal() {
    let a = Klondike::with_seed(99);
    let b = Klondike::with_seed(99);
    assert_eq!(a.stock(), b.stock());
    assert_eq!(a.tableau(6), b.tableau(6));
}

#[test]
fn deal_moves_stock_top_face_up_onto_waste() {
    let mut game = Klondike::with_seed(3);
    let top = *game.stock().last().unwrap();
    assert!(game.can_deal());
    game.deal();
    assert_eq!(game.waste().last(), Some(&top));
    assert!(game.is_face_up(top));
    assert_eq!(game.stock().len(), 23);
    assert_every_card_once(&game);
}

#[test]
fn recycle_reverses_waste_into_stock() {
    let a = c(Suit::Club, Rank::Five);
    let b = c(Suit::Heart, Rank::Nine);
    let d = c(Suit::Spade, Rank::Two);
    let mut game = game_with(vec![(StackType::Waste, vec![a, b, d])], &[a, b, d]);
    let stock_before = game.stock().to_vec();

    game.recycle_waste_to_stock();

    assert!(game.waste().is_empty());
    let stock = game.stock();
    assert_eq!(&stock[stock.len() - 3..], &[d, b, a]);
    assert_eq!(&stock[..stock.len() - 3], stock_before.as_slice());
    assert!(!game.is_face_up(a) && !game.is_face_up(b) && !game.is_face_up(d));
}

#[test]
fn recycle_on_empty_waste_is_noop() {
    let mut game = Klondike::with_seed(5);
    let stock_before = game.stock().to_vec();
    game.recycle_waste_to_stock();
    assert_eq!(game.stock(), stock_before.as_slice());
    assert!(game.waste().is_empty());
}

#[test]
fn foundation_accepts_ace_then_same_suit_sequence() {
    let ace_s = c(Suit::Spade, Rank::Ace);
    let two_s = c(Suit::Spade, Rank::Two);
    let two_h = c(Suit::Heart, Rank::Two);
    let mut game = game_with(
        vec![
            (StackType::Waste, vec![ace_s]),
            (StackType::Tableau(0), vec![two_s]),
            (StackType::Tableau(1), vec![two_h]),
        ],
        &[ace_s, two_s, two_h],
    );

    // どの組札でも A から始められる
    assert!(game.can_drop_on_foundation(ace_s, 0));
    assert!(game.can_drop_on_foundation(ace_s, 3));
    assert!(!game.can_drop_on_foundation(two_s, 0));

    game.drop_on_foundation(ace_s, 2);
    assert_eq!(game.foundation(2), &[ace_s]);
    assert!(game.waste().is_empty());

    assert!(game.can_drop_on_foundation(two_s, 2));
    assert!(!game.can_drop_on_foundation(two_h, 2), "スート違いは置けない");
    assert!(!game.can_drop_on_foundation(two_s, 0), "空の組札に 2 は置けない");
    assert!(!game.can_drop_on_foundation(two_s, 4), "組札は 4 つまで");
}

#[test]
fn tableau_accepts_alternating_descending_and_kings_on_empty() {
    let king_s = c(Suit::Spade, Rank::King);
    let queen_h = c(Suit::Heart, Rank::Queen);
    let jack_s = c(Suit::Spade, Rank::Jack);
    let jack_d = c(Suit::Diamond, Rank::Jack);
    let ten_s = c(Suit::Spade, Rank::Ten);
    let game = game_with(
        vec![
            (StackType::Waste, vec![jack_d, jack_s]),
            (StackType::Tableau(0), vec![]),
            (StackType::Tableau(1), vec![king_s]),
            (StackType::Tableau(2), vec![queen_h]),
            (StackType::Tableau(3), vec![ten_s]),
        ],
        &[king_s, queen_h, jack_s, jack_d, ten_s],
    );

    assert!(game.can_drop_on_tableau(king_s, 0), "空の列に K は置ける");
    assert!(!game.can_drop_on_tableau(queen_h, 0), "空の列に Q は置けない");
    assert!(game.can_drop_on_tableau(jack_s, 2), "Q❤️ の上に J♠️");
    assert!(!game.can_drop_on_tableau(jack_d, 2), "J♦️ は捨て札の一番上じゃない");
    assert!(!game.can_drop_on_tableau(ten_s, 2), "ランク違い");
    assert!(game.can_drop_on_tableau(queen_h, 1), "K♠️ の上に Q❤️");
    assert!(!game.can_drop_on_tableau(queen_h, 2), "自分の列には落とせない");
}

#[test]
fn face_down_cards_flip_only_on_tableau_top() {
    let low = c(Suit::Club, Rank::Three);
    let high = c(Suit::Club, Rank::Four);
    let mut game = game_with(vec![(StackType::Tableau(4), vec![low, high])], &[]);

    assert!(game.can_flip(high));
    assert!(!game.can_flip(low), "下に埋もれてるカードはめくれない");
    let stock_top = *game.stock().last().unwrap();
    assert!(!game.can_flip(stock_top), "山札はめくるんじゃなくて配る");

    game.flip(high);
    assert!(game.is_face_up(high));
    assert!(!game.can_flip(high));
}

#[test]
fn maximal_fan_requires_ordered_face_up_run_to_top() {
    let hidden = c(Suit::Club, Rank::Two);
    let nine_h = c(Suit::Heart, Rank::Nine);
    let eight_s = c(Suit::Spade, Rank::Eight);
    let seven_d = c(Suit::Diamond, Rank::Seven);
    let game = game_with(
        vec![(StackType::Tableau(2), vec![hidden, nine_h, eight_s, seven_d])],
        &[nine_h, eight_s, seven_d],
    );

    assert_eq!(game.maximal_fan_from(nine_h), Some(vec![nine_h, eight_s, seven_d]));
    assert_eq!(game.maximal_fan_from(eight_s), Some(vec![eight_s, seven_d]));
    assert_eq!(game.maximal_fan_from(seven_d), Some(vec![seven_d]));
    assert_eq!(game.maximal_fan_from(hidden), None, "裏向きは None");

    // 色が揃っちゃってる列はダメ
    let nine_s = c(Suit::Spade, Rank::Nine);
    let eight_c = c(Suit::Club, Rank::Eight);
    let broken = game_with(vec![(StackType::Tableau(0), vec![nine_s, eight_c])], &[nine_s, eight_c]);
    assert_eq!(broken.maximal_fan_from(nine_s), None);

    // 場札以外のカードはファンにならない
    let waste_card = c(Suit::Heart, Rank::Four);
    let in_waste = game_with(vec![(StackType::Waste, vec![waste_card])], &[waste_card]);
    assert_eq!(in_waste.maximal_fan_from(waste_card), None);
}

#[test]
fn fan_drop_moves_whole_run_in_order() {
    let king_c = c(Suit::Club, Rank::King);
    let queen_d = c(Suit::Diamond, Rank::Queen);
    let jack_c = c(Suit::Club, Rank::Jack);
    let hidden = c(Suit::Heart, Rank::Five);
    let mut game = game_with(
        vec![
            (StackType::Tableau(3), vec![hidden, king_c, queen_d, jack_c]),
            (StackType::Tableau(5), vec![]),
        ],
        &[king_c, queen_d, jack_c],
    );

    let fan = game.maximal_fan_from(king_c).unwrap();
    assert!(game.can_drop_fan_on_tableau(&fan, 5));
    assert!(!game.can_drop_fan_on_tableau(&fan, 3));
    assert!(!game.can_drop_fan_on_tableau(&fan[1..2], 5), "Q は空の列に置けない");
    assert!(!game.can_drop_fan_on_tableau(&[king_c, queen_d], 5), "列の一部だけは運べない");
    assert!(!game.can_drop_fan_on_tableau(&[], 5));

    game.drop_fan_on_tableau(&fan, 5);
    assert_eq!(game.tableau(5), &[king_c, queen_d, jack_c]);
    assert_eq!(game.tableau(3), &[hidden]);
    assert!(!game.is_face_up(hidden), "自動ではめくらない");
    assert_every_card_once(&game);
}

#[test]
fn win_when_all_foundations_full() {
    let piles: Vec<(StackType, Vec<Card>)> = (0..4)
        .map(|i| {
            let suit = crate::components::card::ALL_SUITS[i];
            let run = crate::components::card::ALL_RANKS.iter().map(|&r| Card::new(suit, r)).collect();
            (StackType::Foundation(i as u8), run)
        })
        .collect();
    let game = Klondike::from_piles(piles, &Card::deck());
    assert!(game.has_won());
    assert!(!Klondike::with_seed(8).has_won());
}

#[test]
fn new_game_reshuffles_and_restores_shape() {
    let mut game = Klondike::with_seed(11);
    game.deal();
    game.deal();
    game.new_game();
    assert!(game.waste().is_empty());
    assert_eq!(game.stock().len(), 24);
    assert_every_card_once(&game);
}

/// 今の状態で判定を通る操作を全部列挙する (プロパティテスト用)。
fn legal_moves(game: &Klondike) -> Vec<Box<dyn Fn(&mut Klondike)>> {
    let mut moves: Vec<Box<dyn Fn(&mut Klondike)>> = Vec::new();
    if game.can_deal() {
        moves.push(Box::new(|g: &mut Klondike| g.deal()));
    }
    if !game.waste().is_empty() {
        moves.push(Box::new(|g: &mut Klondike| g.recycle_waste_to_stock()));
    }
    for card in Card::deck() {
        if game.can_flip(card) {
            moves.push(Box::new(move |g: &mut Klondike| g.flip(card)));
        }
        for i in 0..FOUNDATION_COUNT {
            if game.can_drop_on_foundation(card, i) {
                moves.push(Box::new(move |g: &mut Klondike| g.drop_on_foundation(card, i)));
            }
        }
        for i in 0..TABLEAU_COUNT {
            if game.can_drop_on_tableau(card, i) {
                moves.push(Box::new(move |g: &mut Klondike| g.drop_on_tableau(card, i)));
            }
            if let Some(fan) = game.maximal_fan_from(card) {
                if fan.len() > 1 && game.can_drop_fan_on_tableau(&fan, i) {
                    moves.push(Box::new(move |g: &mut Klondike| g.drop_fan_on_tableau(&fan, i)));
                }
            }
        }
    }
    moves
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// どんな合法手の並びの後でも、52 枚が 1 回ずつどこかにいる。
    #[test]
    fn legal_play_keeps_every_card_in_exactly_one_pile(seed in any::<u64>(), picks in prop::collection::vec(any::<usize>(), 0..60)) {
        let mut game = Klondike::with_seed(seed);
        for pick in picks {
            let moves = legal_moves(&game);
            if moves.is_empty() {
                break;
            }
            let mv = &moves[pick % moves.len()];
            mv(&mut game);
            assert_every_card_once(&game);
        }
        // 山札はいつでも全部裏向き
        prop_assert!(game.stock().iter().all(|&card| !game.is_face_up(card)));
    }

    /// maximal_fan_from が返す列は、必ず列の一番上まで続く正しい並び。
    #[test]
    fn maximal_fan_is_a_valid_run_to_the_top(seed in any::<u64>()) {
        let game = Klondike::with_seed(seed);
        for card in Card::deck() {
            if let Some(fan) = game.maximal_fan_from(card) {
                let (stack, index) = game.locate(card).unwrap();
                prop_assert_eq!(fan.as_slice(), &game.pile(stack)[index..]);
                prop_assert!(fan.iter().all(|&f| game.is_face_up(f)));
            } else {
                let face_down = !game.is_face_up(card);
                let not_on_tableau = !matches!(game.locate(card), Some((StackType::Tableau(_), _)));
                // 配った直後の場札は表が 1 枚だけなので、None になるのはこの 2 通りだけ
                prop_assert!(face_down || not_on_tableau);
            }
        }
    }
}
