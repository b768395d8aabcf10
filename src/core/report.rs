//! Plain-text result report and share text

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use crate::types::{Dosha, PrakrutiResult};

const RULE: &str = "═══════════════════════════════════════";

const GENERAL_GUIDANCE: &str = "Remember that your prakruti is your natural constitution - it \
    doesn't change throughout your life. However, your current state (vikriti) can become \
    imbalanced due to lifestyle, diet, stress, and environment.\n\n\
    For personalized health advice, please consult with a qualified Ayurvedic practitioner or \
    healthcare provider.";

lazy_static! {
    /// Leading symbols (emoji, variation selectors, joiners, spaces)
    static ref LEADING_SYMBOLS: Regex = Regex::new(r"^[^\p{L}\p{N}]+").unwrap();
}

/// Tip text without its leading emoji
pub fn strip_leading_emoji(tip: &str) -> &str {
    match LEADING_SYMBOLS.find(tip) {
        Some(m) => tip[m.end()..].trim(),
        None => tip.trim(),
    }
}

/// Full report for a result, dated
pub struct ResultReport<'a> {
    result: &'a PrakrutiResult,
    date: NaiveDate,
}

impl<'a> ResultReport<'a> {
    pub fn new(result: &'a PrakrutiResult, date: NaiveDate) -> Self {
        Self { result, date }
    }

    /// Report dated today (local time)
    pub fn today(result: &'a PrakrutiResult) -> Self {
        Self::new(result, chrono::Local::now().date_naive())
    }

    /// The long-form text report
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Short shareable summary
    pub fn share_text(&self) -> String {
        let r = self.result;
        format!(
            "🌿 Just discovered my Ayurvedic Prakruti!\n\n\
             My constitution: {} ({}% confidence)\n\n\
             📊 Dosha breakdown:\n\
             • Vata: {}%\n\
             • Pitta: {}%\n\
             • Kapha: {}%\n\n\
             {}",
            r.constitution,
            r.confidence,
            r.scores.vata.round(),
            r.scores.pitta.round(),
            r.scores.kapha.round(),
            r.explanation
        )
    }
}

impl fmt::Display for ResultReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;

        writeln!(f, "AYURVEDIC PRAKRUTI ASSESSMENT RESULTS")?;
        writeln!(f, "Generated on: {}", self.date.format("%Y-%m-%d"))?;
        rule(f)?;
        writeln!(f, "🔍 YOUR CONSTITUTION: {}", r.constitution.to_string().to_uppercase())?;
        writeln!(f, "📊 CONFIDENCE LEVEL: {}%", r.confidence)?;
        rule(f)?;

        writeln!(f, "📈 DOSHA DISTRIBUTION:")?;
        for dosha in Dosha::ALL {
            writeln!(
                f,
                "• {} ({}): {}%",
                dosha.name(),
                title_elements(dosha),
                r.scores.get(dosha).round()
            )?;
        }
        rule(f)?;

        writeln!(f, "📝 CONSTITUTION EXPLANATION:")?;
        writeln!(f, "{}", r.explanation)?;
        rule(f)?;

        writeln!(f, "🌟 TOP CONTRIBUTING TRAITS:")?;
        for (i, t) in r.top_traits.iter().enumerate() {
            writeln!(f, "{}. {} (Score: {:.1})", i + 1, t.trait_def.name, t.contribution)?;
        }
        rule(f)?;

        writeln!(f, "💡 PERSONALIZED BALANCING TIPS:")?;
        for (i, tip) in r.balancing_tips.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}. {}", i + 1, strip_leading_emoji(tip))?;
        }
        rule(f)?;

        writeln!(f, "📚 GENERAL GUIDANCE:")?;
        writeln!(f, "{}", GENERAL_GUIDANCE)?;
        writeln!(f)?;
        write!(f, "{}", RULE)
    }
}

/// Blank line, rule, blank line
fn rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", RULE)?;
    writeln!(f)
}

/// "Air & Space"
fn title_elements(dosha: Dosha) -> &'static str {
    match dosha {
        Dosha::Vata => "Air & Space",
        Dosha::Pitta => "Fire & Water",
        Dosha::Kapha => "Earth & Water",
    }
}
