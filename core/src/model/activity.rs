use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityCategory {
    pub name: &'static str,
    pub activities: &'static [Activity],
}

const fn activity(
    key: &'static str,
    name: &'static str,
    icon: &'static str,
    category: &'static str,
) -> Activity {
    Activity { key, name, icon, category }
}

const PHYSICAL: &str = "Physical Wellbeing";
const NUTRITION: &str = "Nutrition";
const SOCIAL: &str = "Social Relationships";
const THERAPEUTIC: &str = "Therapeutic Activities";
const WORK: &str = "Work & Study";
const GROWTH: &str = "Personal Growth";

pub const CATALOG: &[ActivityCategory] = &[
    ActivityCategory {
        name: PHYSICAL,
        activities: &[
            activity("exercise", "Exercise", "💪", PHYSICAL),
            activity("sleep", "Restful sleep", "😴", PHYSICAL),
            activity("medical", "Medical visits", "🏥", PHYSICAL),
            activity("self_care", "Self care", "🧴", PHYSICAL),
        ],
    },
    ActivityCategory {
        name: NUTRITION,
        activities: &[
            activity("cooking", "Cooking", "🍳", NUTRITION),
            activity("regular_meals", "Regular meals", "🍽️", NUTRITION),
            activity("hydration", "Hydration", "💧", NUTRITION),
            activity("healthy_eating", "Healthy eating", "🥗", NUTRITION),
        ],
    },
    ActivityCategory {
        name: SOCIAL,
        activities: &[
            activity("friends", "Time with friends", "👥", SOCIAL),
            activity("family", "Family", "👪", SOCIAL),
            activity("social_support", "Social support", "🤝", SOCIAL),
            activity("partner", "Partner", "💕", SOCIAL),
        ],
    },
    ActivityCategory {
        name: THERAPEUTIC,
        activities: &[
            activity("meditation", "Meditation", "🧘", THERAPEUTIC),
            activity("breathing", "Breathing", "🌬️", THERAPEUTIC),
            activity("journaling", "Journaling", "📝", THERAPEUTIC),
            activity("mindfulness", "Mindfulness", "🎯", THERAPEUTIC),
        ],
    },
    ActivityCategory {
        name: WORK,
        activities: &[
            activity("work", "Productivity", "💼", WORK),
            activity("goals", "Goals achieved", "✅", WORK),
            activity("work_stress", "Work stress", "😰", WORK),
            activity("break", "Break", "☕", WORK),
        ],
    },
    ActivityCategory {
        name: GROWTH,
        activities: &[
            activity("reading", "Reading", "📚", GROWTH),
            activity("learning", "Learning", "🎓", GROWTH),
            activity("creativity", "Creativity", "🎨", GROWTH),
            activity("reflection", "Reflection", "💭", GROWTH),
        ],
    },
];

pub fn all_activities() -> impl Iterator<Item = &'static Activity> {
    CATALOG.iter().flat_map(|c| c.activities.iter())
}

/// Tags stored by the first (Italian) release, mapped to catalog keys.
/// `altro` ("other") has no catalog counterpart and stays as written.
pub const TAG_ALIASES: &[(&str, &str)] = &[
    ("lavoro", "work"),
    ("famiglia", "family"),
    ("sport", "exercise"),
    ("relax", "break"),
    ("sociale", "friends"),
    ("hobby", "creativity"),
    ("studio", "learning"),
];

/// Catalog key for a tag, following legacy aliases.
pub fn canonical_key(key: &str) -> &str {
    TAG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(key, |(_, canonical)| *canonical)
}

pub fn find_activity(key: &str) -> Option<&'static Activity> {
    let key = canonical_key(key);
    all_activities().find(|a| a.key == key)
}

/// Category name of a tag, or `None` for tags outside the catalog.
pub fn category_of(key: &str) -> Option<&'static str> {
    find_activity(key).map(|a| a.category)
}

/// Display name for a tag, falling back to the tag itself.
pub fn display_name(key: &str) -> &str {
    match find_activity(key) {
        Some(a) => a.name,
        None => key,
    }
}
