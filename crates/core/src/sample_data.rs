//! Sample categories and notes used to populate an empty store.

/// A sample note; `category` refers to a sample category by name.
#[derive(Debug, Clone, Copy)]
pub struct SampleNote {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

/// Sample categories as `(name, color)`. The first one is the fallback category.
pub const SAMPLE_CATEGORIES: &[(&str, &str)] = &[
    ("Misc", "#9e9e9e"),
    ("Work", "#2196f3"),
    ("Personal", "#4caf50"),
    ("Ideas", "#9c27b0"),
    ("Shopping", "#ff9800"),
    ("Important", "#f44336"),
];

/// Sample notes, oldest first.
pub const SAMPLE_NOTES: &[SampleNote] = &[
    SampleNote {
        title: "Welcome to Notes App",
        description: "This is your first note. You can edit or delete it.",
        category: "Misc",
    },
    SampleNote {
        title: "Project Ideas",
        description: "Brainstorm ideas for the new project. Consider using React for the frontend.",
        category: "Ideas",
    },
    SampleNote {
        title: "Grocery List",
        description: "- Milk\n- Eggs\n- Bread\n- Fruits",
        category: "Shopping",
    },
    SampleNote {
        title: "Team Meeting Notes",
        description: "Discussed project timeline and assigned tasks. Next meeting on Friday.",
        category: "Work",
    },
    SampleNote {
        title: "Personal Goals",
        description: "1. Learn a new programming language\n2. Read 12 books this year\n3. Exercise 3x a week",
        category: "Personal",
    },
    SampleNote {
        title: "Important Deadlines",
        description: "- Project submission: 2025-08-15\n- Team presentation: 2025-08-20\n- Code review: 2025-08-22",
        category: "Important",
    },
    SampleNote {
        title: "Book Recommendations",
        description: "- Atomic Habits\n- Deep Work\n- The Pragmatic Programmer",
        category: "Personal",
    },
    SampleNote {
        title: "Code Refactoring",
        description: "Need to refactor the authentication module and add error handling.",
        category: "Work",
    },
    SampleNote {
        title: "Weekend Plans",
        description: "- Hiking on Saturday\n- Movie night\n- Meal prep for next week",
        category: "Personal",
    },
    SampleNote {
        title: "Learning Resources",
        description: "Check out:\n- freeCodeCamp\n- MDN Web Docs\n- Real Python",
        category: "Ideas",
    },
];
