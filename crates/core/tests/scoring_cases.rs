use cardmaster_core::{score_card, Card, CardKind, Shape};

const C: Option<Shape> = Some(Shape::Circle);
const S: Option<Shape> = Some(Shape::Star);
const Q: Option<Shape> = Some(Shape::Square);
const E: Option<Shape> = None;

fn simple(kind: CardKind, shape: Shape) -> Card {
    Card::new(kind, shape).expect("simple card")
}

fn kombi(first: Card, second: Card) -> Card {
    Card::combine(first, second).expect("same shape")
}

fn nested_circle_kombi() -> Card {
    kombi(
        kombi(
            simple(CardKind::Tripel, Shape::Circle),
            simple(CardKind::Paar, Shape::Circle),
        ),
        simple(CardKind::Chance, Shape::Circle),
    )
}

macro_rules! score_case {
    ($name:ident, $card:expr, [$($top:expr),* $(,)?], $expected:expr) => {
        #[test]
        fn $name() {
            let tops: Vec<Option<Shape>> = vec![$($top),*];
            assert_eq!(score_card(&$card, &tops), $expected);
        }
    };
}

score_case!(chance_single_pile, simple(CardKind::Chance, Shape::Circle), [C, E, E], 1.0);
score_case!(chance_two_piles_one_shape, simple(CardKind::Chance, Shape::Circle), [C, C, E], 1.5);
score_case!(chance_three_shapes, simple(CardKind::Chance, Shape::Star), [C, S, Q], 3.0);
score_case!(chance_five_piles, simple(CardKind::Chance, Shape::Star), [C, S, Q, S, E], 3.5);

score_case!(paar_alone, simple(CardKind::Paar, Shape::Star), [S, E, E], 0.0);
score_case!(paar_matched, simple(CardKind::Paar, Shape::Star), [S, S, E], 2.0);
score_case!(paar_other_shape_ignored, simple(CardKind::Paar, Shape::Star), [S, C, C], 0.0);
score_case!(paar_three_is_one_set, simple(CardKind::Paar, Shape::Star), [S, S, S], 2.0);
score_case!(paar_four_is_two_sets, simple(CardKind::Paar, Shape::Star), [S, S, S, S], 4.0);

score_case!(tripel_short, simple(CardKind::Tripel, Shape::Square), [Q, Q, C], 0.0);
score_case!(tripel_complete, simple(CardKind::Tripel, Shape::Square), [Q, Q, Q], 5.0);
score_case!(tripel_six_piles, simple(CardKind::Tripel, Shape::Square), [Q, Q, Q, Q, Q, Q], 10.0);

score_case!(quadrupel_three_of_four, simple(CardKind::Quadrupel, Shape::Circle), [C, C, C, S], 0.0);
score_case!(quadrupel_complete, simple(CardKind::Quadrupel, Shape::Circle), [C, C, C, C], 10.0);

score_case!(kombi_one_top, nested_circle_kombi(), [C, E, E, E], 1.0);
score_case!(kombi_two_tops, nested_circle_kombi(), [C, C, E, E], 3.5);
score_case!(kombi_three_tops, nested_circle_kombi(), [C, C, C, E], 9.0);
score_case!(kombi_four_tops, nested_circle_kombi(), [C, C, C, C], 11.5);
score_case!(
    kombi_of_chances_counts_both,
    kombi(simple(CardKind::Chance, Shape::Star), simple(CardKind::Chance, Shape::Star)),
    [S, C, E],
    4.0
);
