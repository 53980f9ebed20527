//! The standard kingdom set.

use crate::cards::definition::{CardEffect, CardSpec, Scoring, Tags};

/// Definitions of the standard kingdom cards, in registration order.
#[must_use]
pub(crate) fn specs() -> Vec<CardSpec> {
    vec![
        CardSpec::action("Adventurer", 6, 10)
            .with_effect(CardEffect::RevealTreasures { count: 2 }),
        CardSpec::action("Cellar", 2, 10)
            .with_actions(1)
            .with_effect(CardEffect::DiscardForDraws),
        CardSpec::action("Chancellor", 3, 10)
            .with_money(2)
            .with_effect(CardEffect::DiscardDrawPile),
        CardSpec::action("Chapel", 2, 10).with_effect(CardEffect::TrashChosen),
        CardSpec::action("Council Room", 5, 10)
            .with_buys(1)
            .with_cards(4)
            .with_effect(CardEffect::OthersDraw(1)),
        CardSpec::action("Feast", 4, 10)
            .with_effect(CardEffect::TrashSelfGain { max_cost: 5 }),
        CardSpec::action("Festival", 5, 10)
            .with_actions(2)
            .with_buys(1)
            .with_money(2),
        CardSpec::new("Gardens", 4, 12, Tags::VICTORY).with_scoring(Scoring::PerTenCards),
        CardSpec::action("Laboratory", 5, 10).with_actions(1).with_cards(2),
        CardSpec::action("Market", 5, 10)
            .with_actions(1)
            .with_buys(1)
            .with_cards(1)
            .with_money(1),
        CardSpec::action("Mine", 5, 10).with_effect(CardEffect::UpgradeTreasure { bonus: 3 }),
        CardSpec::action("Moneylender", 4, 10)
            .with_effect(CardEffect::TrashCopperForCoins { coins: 3 }),
        CardSpec::action("Remodel", 4, 10).with_effect(CardEffect::Upgrade { bonus: 2 }),
        CardSpec::action("Smithy", 4, 10).with_cards(3),
        CardSpec::action("Thief", 4, 10)
            .with_tags(Tags::ATTACK)
            .with_effect(CardEffect::StealTreasures),
        CardSpec::action("Throne Room", 4, 10).with_effect(CardEffect::PlayTwice),
        CardSpec::action("Village", 3, 10).with_actions(2).with_cards(1),
        CardSpec::action("Witch", 5, 10)
            .with_tags(Tags::ATTACK)
            .with_cards(2)
            .with_effect(CardEffect::CurseOthers),
        CardSpec::action("Woodcutter", 3, 10).with_buys(1).with_money(2),
        CardSpec::action("Workshop", 3, 10).with_effect(CardEffect::GainCard { max_cost: 4 }),
    ]
}
