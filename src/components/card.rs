// src/components/card.rs

// serde を使う宣言！レイヤー情報を JSON にして JS 側に渡す時に使うよ。
use serde::{Serialize, Deserialize};

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// 並び順がそのまま `CardId` の計算に使われるから、順番を入れ替えちゃダメ！🙅‍♀️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// `Ace = 1` から始まるので、`rank as u8` でそのまま 1〜13 が取れる！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
    Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King,
];

/// デッキの枚数。レイヤーのアリーナもこの数だけ作るよ。
pub const DECK_SIZE: usize = 52;

/// カードの色（赤か黒か）。場札 (Tableau) の「色違い」ルールで使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// 0..52 の小さな整数で表すカードの ID だよ。
/// レイヤーのアリーナ (`Vec<CardLayer>`) や表裏フラグの配列のインデックスになる！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// カードそのもの！🃏 スートとランクだけを持つ、変更されない「身元」だよ。
///
/// 表向きか裏向きかはルールエンジン側が持ってる (カード自身は知らない)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// スート優先 (Heart → Spade)、その中で A → K の順に 0..52 を振る。
    pub fn id(&self) -> CardId {
        let suit_index = self.suit as u8;
        CardId(suit_index * 13 + (self.rank as u8 - 1))
    }

    /// `CardId` からカードを復元する。52 以上の ID は存在しないので `None`。
    pub fn from_id(id: CardId) -> Option<Card> {
        let index = id.index();
        if index >= DECK_SIZE {
            return None;
        }
        Some(Card {
            suit: ALL_SUITS[index / 13],
            rank: ALL_RANKS[index % 13],
        })
    }

    pub fn color(&self) -> CardColor {
        CardColor::from_suit(self.suit)
    }

    /// ID 順に並んだ 52 枚。シャッフル前のデッキ！
    pub fn deck() -> Vec<Card> {
        ALL_SUITS
            .iter()
            .flat_map(|&suit| ALL_RANKS.iter().map(move |&rank| Card { suit, rank }))
            .collect()
    }
}
