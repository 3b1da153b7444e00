//! Named color reference table.
//!
//! Keys are canonical uppercase 6-digit hex without `#`. Table order is the
//! order `colors_by_category` and `all_categories` report.

use chroma_model::ColorMetadata;

use super::CatalogEntry;

const fn entry(
    hex: &'static str,
    name: &'static str,
    category: &'static str,
    psychology: &'static str,
    use_cases: &'static [&'static str],
) -> CatalogEntry {
    CatalogEntry {
        hex,
        metadata: ColorMetadata {
            name,
            category,
            psychology,
            use_cases,
        },
    }
}

pub(super) static ENTRIES: &[CatalogEntry] = &[
    // Reds
    entry(
        "FF0000",
        "Red",
        "Red",
        "Energy, urgency and passion. Raises attention and heart rate.",
        &["Calls to action", "Sale banners", "Error states"],
    ),
    entry(
        "DC143C",
        "Crimson",
        "Red",
        "Intensity and determination with a sense of luxury.",
        &["Fashion", "Premium packaging", "Headlines"],
    ),
    entry(
        "B22222",
        "Firebrick",
        "Red",
        "Strength and warmth; grounded rather than alarming.",
        &["Restaurant branding", "Warm accents"],
    ),
    entry(
        "8B0000",
        "Dark Red",
        "Red",
        "Seriousness, power and tradition.",
        &["Wine labels", "Formal invitations", "Law firms"],
    ),
    entry(
        "FF6347",
        "Tomato",
        "Red",
        "Appetite and friendliness with playful warmth.",
        &["Food delivery", "Notifications", "Kids products"],
    ),
    entry(
        "E34234",
        "Vermilion",
        "Red",
        "Vitality and celebration.",
        &["Festive campaigns", "Sports branding"],
    ),
    // Oranges
    entry(
        "FFA500",
        "Orange",
        "Orange",
        "Enthusiasm, creativity and affordability.",
        &["Calls to action", "Youth brands", "Discount tags"],
    ),
    entry(
        "FF8C00",
        "Dark Orange",
        "Orange",
        "Confidence and adventure with strong visibility.",
        &["Safety equipment", "Outdoor brands"],
    ),
    entry(
        "FF7F50",
        "Coral",
        "Orange",
        "Sociable, approachable and lively.",
        &["Lifestyle apps", "Summer campaigns", "Social media"],
    ),
    entry(
        "FFDAB9",
        "Peach Puff",
        "Orange",
        "Softness, comfort and gentle warmth.",
        &["Skincare", "Backgrounds", "Baby products"],
    ),
    entry(
        "CC5500",
        "Burnt Orange",
        "Orange",
        "Autumnal warmth and earthiness.",
        &["Seasonal themes", "Craft brands"],
    ),
    // Yellows
    entry(
        "FFFF00",
        "Yellow",
        "Yellow",
        "Optimism and alertness; the most visible hue at a distance.",
        &["Warnings", "Highlights", "Signage"],
    ),
    entry(
        "FFD700",
        "Gold",
        "Yellow",
        "Prestige, achievement and value.",
        &["Awards", "Premium tiers", "Luxury accents"],
    ),
    entry(
        "FFFACD",
        "Lemon Chiffon",
        "Yellow",
        "Light-hearted freshness and calm cheer.",
        &["Backgrounds", "Bakery branding"],
    ),
    entry(
        "F0E68C",
        "Khaki",
        "Yellow",
        "Practical, relaxed and natural.",
        &["Outdoor apparel", "Muted palettes"],
    ),
    entry(
        "FFBF00",
        "Amber",
        "Yellow",
        "Caution and warmth in equal measure.",
        &["Pending states", "Warm lighting themes"],
    ),
    // Greens
    entry(
        "00FF00",
        "Lime",
        "Green",
        "Electric energy and novelty.",
        &["Tech accents", "Gaming", "Neon themes"],
    ),
    entry(
        "008000",
        "Green",
        "Green",
        "Growth, safety and permission to proceed.",
        &["Success states", "Finance", "Environmental brands"],
    ),
    entry(
        "228B22",
        "Forest Green",
        "Green",
        "Stability, nature and endurance.",
        &["Outdoor brands", "Sustainability reports"],
    ),
    entry(
        "50C878",
        "Emerald",
        "Green",
        "Prosperity, balance and renewal.",
        &["Jewelry", "Wellness apps", "Banking"],
    ),
    entry(
        "98FF98",
        "Mint",
        "Green",
        "Freshness, cleanliness and calm.",
        &["Healthcare", "Dental products", "Backgrounds"],
    ),
    entry(
        "808000",
        "Olive",
        "Green",
        "Peace, maturity and an understated natural tone.",
        &["Military styling", "Organic food"],
    ),
    entry(
        "008080",
        "Teal",
        "Green",
        "Clarity and sophistication between blue and green.",
        &["Corporate branding", "Healthcare", "Dashboards"],
    ),
    // Blues
    entry(
        "0000FF",
        "Blue",
        "Blue",
        "Trust, dependability and focus.",
        &["Links", "Corporate identity", "Technology"],
    ),
    entry(
        "000080",
        "Navy",
        "Blue",
        "Authority, confidence and professionalism.",
        &["Finance", "Uniforms", "Formal documents"],
    ),
    entry(
        "4169E1",
        "Royal Blue",
        "Blue",
        "Richness and reliability with more energy than navy.",
        &["Primary buttons", "Education", "Sports teams"],
    ),
    entry(
        "87CEEB",
        "Sky Blue",
        "Blue",
        "Openness, serenity and freedom.",
        &["Travel", "Weather apps", "Children's products"],
    ),
    entry(
        "00FFFF",
        "Cyan",
        "Blue",
        "Clarity and modernity with a digital feel.",
        &["Tech interfaces", "Data visualization"],
    ),
    entry(
        "4682B4",
        "Steel Blue",
        "Blue",
        "Calm competence and industrial strength.",
        &["Engineering", "Enterprise software"],
    ),
    entry(
        "0F52BA",
        "Sapphire",
        "Blue",
        "Wisdom, loyalty and depth.",
        &["Luxury goods", "Insurance", "Headers"],
    ),
    // Purples
    entry(
        "800080",
        "Purple",
        "Purple",
        "Royalty, ambition and mystery.",
        &["Beauty", "Premium services", "Creative agencies"],
    ),
    entry(
        "8A2BE2",
        "Blue Violet",
        "Purple",
        "Imagination and spirituality.",
        &["Entertainment", "Fantasy themes"],
    ),
    entry(
        "E6E6FA",
        "Lavender",
        "Purple",
        "Calm, grace and nostalgia.",
        &["Spa and wellness", "Wedding stationery", "Backgrounds"],
    ),
    entry(
        "9966CC",
        "Amethyst",
        "Purple",
        "Creativity balanced with calm.",
        &["Meditation apps", "Artisan brands"],
    ),
    entry(
        "4B0082",
        "Indigo",
        "Purple",
        "Intuition, depth and perception.",
        &["Night themes", "Publishing", "Astronomy"],
    ),
    entry(
        "A05AFF",
        "Electric Violet",
        "Purple",
        "Bold creativity and futuristic energy.",
        &["Design tools", "Music apps", "Tech startups"],
    ),
    // Pinks
    entry(
        "FFC0CB",
        "Pink",
        "Pink",
        "Tenderness, kindness and romance.",
        &["Cosmetics", "Confectionery", "Greeting cards"],
    ),
    entry(
        "FF69B4",
        "Hot Pink",
        "Pink",
        "Playful confidence and fun.",
        &["Fashion", "Pop culture", "Youth campaigns"],
    ),
    entry(
        "FF00FF",
        "Magenta",
        "Pink",
        "Nonconformity, imagination and harmony.",
        &["Creative agencies", "Print proofs", "Events"],
    ),
    entry(
        "C71585",
        "Medium Violet Red",
        "Pink",
        "Passionate and assertive femininity.",
        &["Beauty brands", "Nightlife"],
    ),
    entry(
        "FFB6C1",
        "Light Pink",
        "Pink",
        "Gentleness and care.",
        &["Baby products", "Healthcare awareness"],
    ),
    // Browns
    entry(
        "A52A2A",
        "Brown",
        "Brown",
        "Reliability, warmth and earthiness.",
        &["Coffee", "Leather goods", "Rustic themes"],
    ),
    entry(
        "D2691E",
        "Chocolate",
        "Brown",
        "Comfort and indulgence.",
        &["Confectionery", "Bakeries"],
    ),
    entry(
        "8B4513",
        "Saddle Brown",
        "Brown",
        "Ruggedness and craftsmanship.",
        &["Outdoor gear", "Furniture"],
    ),
    entry(
        "D2B48C",
        "Tan",
        "Brown",
        "Neutral warmth and simplicity.",
        &["Backgrounds", "Fashion basics"],
    ),
    entry(
        "F5F5DC",
        "Beige",
        "Brown",
        "Calm, conservative and dependable.",
        &["Interior design", "Packaging", "Backgrounds"],
    ),
    // Neutrals
    entry(
        "000000",
        "Black",
        "Neutral",
        "Elegance, power and formality.",
        &["Typography", "Luxury branding", "Dark themes"],
    ),
    entry(
        "FFFFFF",
        "White",
        "Neutral",
        "Simplicity, cleanliness and space.",
        &["Backgrounds", "Minimal design", "Healthcare"],
    ),
    entry(
        "808080",
        "Gray",
        "Neutral",
        "Balance, neutrality and composure.",
        &["Secondary text", "Borders", "Disabled states"],
    ),
    entry(
        "C0C0C0",
        "Silver",
        "Neutral",
        "Modernity, sleekness and technology.",
        &["Electronics", "Automotive", "Metallic accents"],
    ),
    entry(
        "36454F",
        "Charcoal",
        "Neutral",
        "Strength and sophistication softer than black.",
        &["Body text", "Dark UI surfaces"],
    ),
    entry(
        "FFFFF0",
        "Ivory",
        "Neutral",
        "Warm purity and classic elegance.",
        &["Wedding stationery", "Paper textures"],
    ),
];
