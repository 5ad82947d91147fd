//! Deterministic earnings categorization.
//!
//! Descriptions are free text typed by the payment platform, so category
//! assignment is an ordered rule table evaluated top-to-bottom — first
//! match wins, which makes the priority between overlapping rules explicit
//! and testable rule-by-rule. No LLM needed; prefix/keyword checks plus the
//! whole-dollar pricing signal cover the historical formats.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::currency::{cents, is_whole_dollar};

/// One earnings category per transaction.
///
/// The first six variants are the automatic set produced by [`categorize`];
/// `Custom` carries any manual-override label assigned downstream (see
/// [`MANUAL_CATEGORIES`]). Serialized as the display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Tip,
    Subscription,
    Welcome,
    Bundle,
    PpvMessage,
    Other,
    Custom(String),
}

impl Category {
    /// Display label, also the serialized form.
    pub fn label(&self) -> &str {
        match self {
            Category::Tip => "Tip",
            Category::Subscription => "Subscription",
            Category::Welcome => "Welcome",
            Category::Bundle => "Bundle",
            Category::PpvMessage => "PPV Message",
            Category::Other => "Other",
            Category::Custom(label) => label,
        }
    }

    /// Inverse of [`Category::label`]; unknown labels become `Custom`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Tip" => Category::Tip,
            "Subscription" => Category::Subscription,
            "Welcome" => Category::Welcome,
            "Bundle" => Category::Bundle,
            "PPV Message" => Category::PpvMessage,
            "Other" => Category::Other,
            other => Category::Custom(other.to_string()),
        }
    }

    /// True for the six labels the categorizer can produce on its own.
    pub fn is_automatic(&self) -> bool {
        !matches!(self, Category::Custom(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

/// Known fixed-price welcome offers. A gross hit on one of these is treated
/// as a welcome message even when the description never says so — the price
/// points are a convention baked into the historical data, kept as plain
/// constants rather than re-derived.
pub const WELCOME_PRICE_POINTS: [f64; 3] = [15.0, 12.0, 11.99];

/// Keywords that mark flat-priced bundle content.
pub const BUNDLE_KEYWORDS: [&str; 4] = ["bundle", "mass dm", "locked post", "post purchase"];

fn is_welcome_price(gross: f64) -> bool {
    WELCOME_PRICE_POINTS
        .iter()
        .any(|price| cents(*price) == cents(gross))
}

fn has_bundle_keyword(desc: &str) -> bool {
    BUNDLE_KEYWORDS.iter().any(|kw| desc.contains(kw))
}

/// One row of the decision table. `matches` receives the lowercased
/// description and the gross amount.
pub struct CategoryRule {
    pub name: &'static str,
    pub category: Category,
    pub matches: fn(&str, f64) -> bool,
}

/// The decision table, in priority order.
pub static RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "tip-prefix",
        category: Category::Tip,
        matches: |desc, _| desc.starts_with("tip from"),
    },
    CategoryRule {
        name: "subscription-prefix",
        category: Category::Subscription,
        matches: |desc, _| {
            desc.starts_with("subscription from")
                || desc.starts_with("recurring subscription from")
        },
    },
    CategoryRule {
        name: "welcome-word",
        category: Category::Welcome,
        matches: |desc, _| desc.contains("welcome"),
    },
    CategoryRule {
        name: "welcome-price-point",
        category: Category::Welcome,
        // known fixed-price welcome offers, unless the platform explicitly
        // labelled the line as a message payment
        matches: |desc, gross| is_welcome_price(gross) && !desc.contains("payment for message"),
    },
    CategoryRule {
        name: "message-payment-with-cents",
        category: Category::PpvMessage,
        matches: |desc, gross| desc.contains("payment for message") && !is_whole_dollar(gross),
    },
    CategoryRule {
        name: "message-payment-whole-dollar",
        category: Category::Bundle,
        matches: |desc, gross| desc.contains("payment for message") && is_whole_dollar(gross),
    },
    CategoryRule {
        name: "bundle-keyword-whole-dollar",
        category: Category::Bundle,
        matches: |desc, gross| has_bundle_keyword(desc) && is_whole_dollar(gross),
    },
    CategoryRule {
        name: "ppv-with-cents",
        category: Category::PpvMessage,
        matches: |desc, gross| desc.contains("ppv") && !is_whole_dollar(gross),
    },
];

/// Categorize a transaction description. Pure and deterministic; falls
/// through to `Other` when no rule fires.
pub fn categorize(description: &str, gross: f64) -> Category {
    let desc = description.to_lowercase();
    for rule in RULES {
        if (rule.matches)(&desc, gross) {
            return rule.category.clone();
        }
    }
    Category::Other
}

/// Every label the downstream editor may assign to a transaction: the
/// automatic six plus the content-specific payout labels. Presentation and
/// payout-policy data only — nothing here feeds back into [`RULES`].
pub const MANUAL_CATEGORIES: [&str; 17] = [
    "Tip",
    "Subscription",
    "Welcome",
    "Bundle",
    "PPV Message",
    "Other",
    "Custom Video",
    "Custom Photo Set",
    "Video Call",
    "Voice Note",
    "Sexting Session",
    "Rate",
    "Fan Gift",
    "Live Stream Goal",
    "Game",
    "Promo Shoutout",
    "Refund Adjustment",
];
