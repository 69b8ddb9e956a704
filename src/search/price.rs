/// Quick price range offered next to the price inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSuggestion {
    pub label: &'static str,
    pub min: u64,
    pub max: u64,
}

pub const PRICE_SUGGESTIONS: [PriceSuggestion; 5] = [
    PriceSuggestion {
        label: "Under $500K",
        min: 0,
        max: 500_000,
    },
    PriceSuggestion {
        label: "$500K - $1M",
        min: 500_000,
        max: 1_000_000,
    },
    PriceSuggestion {
        label: "$1M - $2M",
        min: 1_000_000,
        max: 2_000_000,
    },
    PriceSuggestion {
        label: "$2M - $5M",
        min: 2_000_000,
        max: 5_000_000,
    },
    PriceSuggestion {
        label: "Over $5M",
        min: 5_000_000,
        max: 10_000_000,
    },
];

pub fn find_suggestion(label: &str) -> Option<&'static PriceSuggestion> {
    PRICE_SUGGESTIONS
        .iter()
        .find(|suggestion| suggestion.label.eq_ignore_ascii_case(label))
}
