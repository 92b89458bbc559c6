use crate::domain::model::Intensity;

const FUN_ROASTS: &[&str] = &[
    "That coffee could've been crypto. Oops.",
    "You chose the thing. The thing is gone. Crypto isn't.",
    "Hindsight is a brutal teacher.",
    "Well, at least you enjoyed it... right?",
    "Future you is definitely judging past you.",
    "The math doesn't lie, but you can still laugh.",
    "Could've been worse. Could've been better too.",
    "Time machines would solve this problem.",
    "Your financial advisor would like a word.",
    "At least now you know. Knowledge is... expensive.",
    "Every purchase is an investment. Some just depreciate faster.",
    "You weren't wrong. Just early. To the regret.",
    "Consider this a learning experience with receipts.",
    "Bitcoin doesn't judge. This calculator does.",
    "The universe sent signals. You bought things instead.",
];

const MEDIUM_ROASTS: &[&str] = &[
    "That coffee in 2015 just cost you a house.",
    "Hope that phone was worth generational pain.",
    "Your latte budget is now someone's retirement fund.",
    "Congrats on buying a depreciating asset like a genius.",
    "That impulse buy just became a lifetime of regret.",
    "You could've been set. You chose a gadget instead.",
    "Your purchase history reads like a tragedy in three acts.",
    "This number represents every poor decision you've made.",
    "Could've had a yacht. Got a T-shirt instead.",
    "That pizza is now worth a Lambo. Sleep well.",
    "Financial advisors study your mistakes as cautionary tales.",
    "You essentially lit money on fire but with extra steps.",
    "This is why your friends stopped asking for advice.",
    "The universe tried to help. You bought a latte.",
    "Some people invest. You collected worthless memories.",
    "Your grandkids will ask why you bought that.",
    "That purchase aged like milk. Crypto aged like wine.",
    "You had a choice. You chose poorly.",
    "The regret is real. The money is gone.",
    "Should've listened to that weird cousin at Thanksgiving.",
];

const SAVAGE_ROASTS: &[&str] = &[
    "That purchase decision haunts me and I didn't even make it.",
    "Your portfolio could've retired early. Instead you got a thing.",
    "Somewhere a financial advisor is crying and doesn't know why.",
    "You chose immediate gratification over generational wealth. Bold.",
    "This isn't regret. This is a case study in poor judgment.",
    "Your future self tried to warn you. You didn't listen.",
    "That money could've made money. You made garbage.",
    "Congratulations on funding someone else's retirement.",
    "You bought the peak of depreciation. Impressive.",
    "This calculation exists because of decisions like yours.",
    "Your checking account died so someone else's portfolio could live.",
    "Some invest. Some collect regrets. You chose violence.",
    "You weren't just wrong. You were historically wrong.",
    "The opportunity cost of your existence is staggering.",
    "You could've had everything. You have receipts instead.",
    "This is generational poverty speedrun any percent.",
    "Your descendants will study this as a warning.",
    "You played yourself and lost spectacularly.",
    "The market tried to save you. You bought a gadget.",
    "This isn't financial advice. It's a post-mortem.",
];

/// Pre-written roasts for an intensity. Every pool is non-empty.
pub fn pool_for(intensity: Intensity) -> &'static [&'static str] {
    match intensity {
        Intensity::Fun => FUN_ROASTS,
        Intensity::Medium => MEDIUM_ROASTS,
        Intensity::Savage => SAVAGE_ROASTS,
    }
}
