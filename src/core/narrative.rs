//! Narrative generator: explanation prose and balancing tips

use crate::types::{Constitution, Dosha, DoshaScores};

const VATA_TIPS: [&str; 5] = [
    "🕐 Establish consistent daily routines: wake up, eat meals, and sleep at regular times to calm your variable nature",
    "🧘‍♀️ Practice grounding activities: gentle yoga, meditation, deep breathing, or warm oil self-massage to soothe your nervous system",
    "🍲 Choose warm, cooked foods with healthy oils and avoid cold, dry, or raw foods that can increase Vata",
    "🌿 Favor sweet, sour, and salty tastes while minimizing bitter, pungent, and astringent foods",
    "💆‍♀️ Create a calming environment with warm colors, soft music, and gentle lighting to reduce overstimulation",
];

const PITTA_TIPS: [&str; 5] = [
    "🌡️ Stay cool: avoid excessive heat, hot weather, and overly spicy or acidic foods that can aggravate Pitta",
    "⚖️ Practice moderation in work and exercise - avoid overheating and competitive stress that can lead to burnout",
    "🥒 Eat cooling foods like cucumbers, melons, coconut, leafy greens, and sweet fruits to balance internal fire",
    "🧊 Favor sweet, bitter, and astringent tastes while reducing spicy, salty, and sour foods",
    "🌅 Schedule demanding activities during cooler parts of the day and take regular breaks to prevent intensity buildup",
];

const KAPHA_TIPS: [&str; 5] = [
    "🏃‍♀️ Engage in regular vigorous exercise and varied physical activities to stimulate circulation and energy flow",
    "🌶️ Choose light, warm, and well-spiced foods while reducing heavy, oily, sweet, or dairy-rich meals",
    "⏰ Avoid oversleeping and maintain an active lifestyle with varied activities to prevent stagnation",
    "🔥 Favor pungent, bitter, and astringent tastes while minimizing sweet, sour, and salty foods",
    "🌟 Seek new experiences, social connections, and mental stimulation to energize your naturally stable nature",
];

/// Closing tip for dual constitutions
pub const BALANCE_BOTH_TIP: &str =
    "⚖️ Balance both dosha needs by alternating between practices that address each constitution throughout your week";

/// The five fixed tips for one dosha
pub fn dosha_tips(dosha: Dosha) -> &'static [&'static str; 5] {
    match dosha {
        Dosha::Vata => &VATA_TIPS,
        Dosha::Pitta => &PITTA_TIPS,
        Dosha::Kapha => &KAPHA_TIPS,
    }
}

/// Balancing tips
///
/// Without a secondary dosha: the primary's five tips. With one:
/// [primary 0, secondary 0, primary 1, secondary 1, balance-both].
pub fn tips(primary: Dosha, secondary: Option<Dosha>) -> Vec<&'static str> {
    let primary_tips = dosha_tips(primary);
    match secondary {
        None => primary_tips.to_vec(),
        Some(secondary) => {
            let secondary_tips = dosha_tips(secondary);
            vec![
                primary_tips[0],
                secondary_tips[0],
                primary_tips[1],
                secondary_tips[1],
                BALANCE_BOTH_TIP,
            ]
        }
    }
}

/// Explanation prose for a constitution, quoting rounded percentages
pub fn explain(constitution: &Constitution, scores: &DoshaScores) -> String {
    match *constitution {
        Constitution::Tridoshic => format!(
            "You have a tridoshic constitution with relatively balanced doshas \
             (Vata: {}%, Pitta: {}%, Kapha: {}%). This is considered rare and indicates \
             natural balance across all three constitutional types. You may express \
             different dosha qualities at different times.",
            percent(scores.vata),
            percent(scores.pitta),
            percent(scores.kapha)
        ),
        Constitution::Dual(primary, secondary) => format!(
            "You have a dual constitution with {} as your primary dosha ({}%) and {} as \
             secondary ({}%). This means you express characteristics of both doshas, \
             with {} being more dominant.",
            primary.name(),
            percent(scores.get(primary)),
            secondary.name(),
            percent(scores.get(secondary)),
            primary.key()
        ),
        Constitution::Single(dosha) => format!(
            "You have a {} constitution ({}%). This means {} element characteristics \
             are most dominant in your physical and mental nature.",
            dosha.name(),
            percent(scores.get(dosha)),
            dosha.elements()
        ),
    }
}

/// Whole-number percentage, halves rounded up
fn percent(score: f64) -> i64 {
    score.round() as i64
}
