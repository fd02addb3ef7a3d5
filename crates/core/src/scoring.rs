use crate::{Card, CardKind, CardType, DiscardPile, Shape};

pub type ScoreFn = fn(&Card, &[Option<Shape>]) -> f64;

/// Credits for each complete set of same-shape tops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetRule {
    pub size: usize,
    pub reward: f64,
}

pub const PAAR_RULE: SetRule = SetRule {
    size: 2,
    reward: 2.0,
};
pub const TRIPEL_RULE: SetRule = SetRule {
    size: 3,
    reward: 5.0,
};
pub const QUADRUPEL_RULE: SetRule = SetRule {
    size: 4,
    reward: 10.0,
};

pub const CHANCE_PER_PILE: f64 = 0.5;
pub const CHANCE_PER_SHAPE: f64 = 0.5;

/// Top shape of every pile in pile order; `None` for an empty pile.
pub fn top_shapes(piles: &[DiscardPile]) -> Vec<Option<Shape>> {
    piles.iter().map(DiscardPile::top_shape).collect()
}

pub fn scorer_for(kind: CardType) -> ScoreFn {
    match kind {
        CardType::Chance => score_chance,
        CardType::Paar => score_paar,
        CardType::Tripel => score_tripel,
        CardType::Quadrupel => score_quadrupel,
        CardType::Kombi => score_kombi,
    }
}

pub fn score_card(card: &Card, tops: &[Option<Shape>]) -> f64 {
    scorer_for(card.card_type())(card, tops)
}

pub fn score_against_piles(card: &Card, piles: &[DiscardPile]) -> f64 {
    score_card(card, &top_shapes(piles))
}

pub fn matching_tops(shape: Shape, tops: &[Option<Shape>]) -> usize {
    tops.iter().filter(|top| **top == Some(shape)).count()
}

fn score_chance(_card: &Card, tops: &[Option<Shape>]) -> f64 {
    let mut seen = [false; Shape::ALL.len()];
    let mut non_empty = 0usize;
    for shape in tops.iter().flatten() {
        non_empty += 1;
        seen[shape.index()] = true;
    }
    let distinct = seen.iter().filter(|seen| **seen).count();
    CHANCE_PER_PILE * non_empty as f64 + CHANCE_PER_SHAPE * distinct as f64
}

fn score_sets(card: &Card, tops: &[Option<Shape>], rule: SetRule) -> f64 {
    let sets = matching_tops(card.shape(), tops) / rule.size;
    sets as f64 * rule.reward
}

fn score_paar(card: &Card, tops: &[Option<Shape>]) -> f64 {
    score_sets(card, tops, PAAR_RULE)
}

fn score_tripel(card: &Card, tops: &[Option<Shape>]) -> f64 {
    score_sets(card, tops, TRIPEL_RULE)
}

fn score_quadrupel(card: &Card, tops: &[Option<Shape>]) -> f64 {
    score_sets(card, tops, QUADRUPEL_RULE)
}

fn score_kombi(card: &Card, tops: &[Option<Shape>]) -> f64 {
    match card.kind() {
        CardKind::Kombi(first, second) => score_card(first, tops) + score_card(second, tops),
        _ => 0.0,
    }
}
