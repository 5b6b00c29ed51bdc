use serde::{Deserialize, Serialize};

/// Colour variant of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    #[default]
    White,
    Pink,
    Blue,
    Green,
    Orange,
    Purple,
    Cyan,
    Gray,
    Cream,
    /// University of Arkansas cardinal.
    Arkansas,
    /// Stanford d.school orange.
    Dschool,
}

/// Tailwind classes for one colour variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPalette {
    pub bg: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub badge: &'static str,
    pub button: &'static str,
    pub logo_bg: &'static str,
}

impl CardColor {
    pub fn palette(self) -> CardPalette {
        match self {
            Self::White => CardPalette {
                bg: "bg-white",
                text: "text-slate-900",
                text_secondary: "text-slate-600",
                badge: "bg-slate-100 text-slate-600",
                button: "bg-slate-900 text-white",
                logo_bg: "bg-slate-100",
            },
            Self::Pink => CardPalette {
                bg: "bg-pink-400",
                text: "text-pink-950",
                text_secondary: "text-pink-800",
                badge: "bg-pink-300 text-pink-900",
                button: "bg-pink-900 text-pink-100",
                logo_bg: "bg-white",
            },
            Self::Blue => CardPalette {
                bg: "bg-blue-500",
                text: "text-white",
                text_secondary: "text-blue-100",
                badge: "bg-blue-400 text-blue-950",
                button: "bg-white text-blue-900",
                logo_bg: "bg-white",
            },
            Self::Green => CardPalette {
                bg: "bg-emerald-500",
                text: "text-emerald-950",
                text_secondary: "text-emerald-800",
                badge: "bg-emerald-400 text-emerald-950",
                button: "bg-emerald-900 text-emerald-100",
                logo_bg: "bg-white",
            },
            Self::Orange => CardPalette {
                bg: "bg-orange-500",
                text: "text-orange-950",
                text_secondary: "text-orange-900",
                badge: "bg-orange-300 text-orange-900",
                button: "bg-orange-900 text-orange-100",
                logo_bg: "bg-white",
            },
            Self::Purple => CardPalette {
                bg: "bg-purple-600",
                text: "text-white",
                text_secondary: "text-purple-200",
                badge: "bg-purple-400 text-purple-950",
                button: "bg-white text-purple-900",
                logo_bg: "bg-white",
            },
            Self::Cyan => CardPalette {
                bg: "bg-cyan-300",
                text: "text-cyan-950",
                text_secondary: "text-cyan-800",
                badge: "bg-cyan-200 text-cyan-900",
                button: "bg-cyan-900 text-cyan-100",
                logo_bg: "bg-white",
            },
            Self::Gray => CardPalette {
                bg: "bg-slate-700",
                text: "text-white",
                text_secondary: "text-slate-300",
                badge: "bg-slate-600 text-slate-200",
                button: "bg-white text-slate-900",
                logo_bg: "bg-white",
            },
            Self::Cream => CardPalette {
                bg: "bg-amber-50",
                text: "text-amber-950",
                text_secondary: "text-amber-800",
                badge: "bg-amber-200 text-amber-900",
                button: "bg-amber-900 text-amber-100",
                logo_bg: "bg-white",
            },
            Self::Arkansas => CardPalette {
                bg: "bg-[#9D2235]",
                text: "text-white",
                text_secondary: "text-red-100",
                badge: "bg-red-800 text-red-100",
                button: "bg-white text-red-900",
                logo_bg: "bg-white",
            },
            Self::Dschool => CardPalette {
                bg: "bg-[#E85D25]",
                text: "text-white",
                text_secondary: "text-orange-100",
                badge: "bg-orange-700 text-orange-100",
                button: "bg-white text-orange-900",
                logo_bg: "bg-white",
            },
        }
    }
}
