use crate::feed::Article;

/// Business-event category an article can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Revenue,
    Acquisition,
    Funding,
    NewCompany,
}

impl Category {
    /// All categories in report order
    pub const ALL: [Category; 4] = [
        Category::Revenue,
        Category::Acquisition,
        Category::Funding,
        Category::NewCompany,
    ];

    /// Classifier label
    pub fn label(self) -> &'static str {
        match self {
            Category::Revenue => "revenue",
            Category::Acquisition => "acquisition",
            Category::Funding => "funding",
            Category::NewCompany => "new_company",
        }
    }

    /// Name of the bucket collecting this category's records
    pub fn bucket_name(self) -> &'static str {
        match self {
            Category::Revenue => "revenue",
            Category::Acquisition => "acquisitions",
            Category::Funding => "funding",
            Category::NewCompany => "new_companies",
        }
    }

    /// Worksheet title: the bucket name with underscores as spaces, title-cased
    pub fn sheet_name(self) -> &'static str {
        match self {
            Category::Revenue => "Revenue",
            Category::Acquisition => "Acquisitions",
            Category::Funding => "Funding",
            Category::NewCompany => "New Companies",
        }
    }

    /// Row label on the Summary sheet
    pub fn summary_label(self) -> &'static str {
        match self {
            Category::Revenue => "Revenue Reports",
            Category::Acquisition => "Acquisitions",
            Category::Funding => "Funding Rounds",
            Category::NewCompany => "New Companies",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        KEYWORDS
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, phrases)| *phrases)
            .unwrap_or(&[])
    }
}

/// Lowercase keyword phrases per category, matched as plain substrings
pub const KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Revenue,
        &[
            "revenue", "earnings", "quarterly results", "q1", "q2", "q3", "q4",
            "sales", "financial results", "profit",
        ],
    ),
    (
        Category::Acquisition,
        &[
            "acquisition", "merger", "acquire", "acquired", "deal", "bought",
            "takeover", "m&a", "purchase",
        ],
    ),
    (
        Category::Funding,
        &[
            "funding", "raised", "series a", "series b", "series c", "investment",
            "investors", "venture capital", "ipo", "financing",
        ],
    ),
    (
        Category::NewCompany,
        &[
            "launched", "founded", "new company", "startup", "spin-off",
            "spinout", "established", "announces formation",
        ],
    ),
];

/// Categories whose keywords occur anywhere in the article's title or summary.
/// No word boundaries: "ipo" also matches "ipod".
pub fn categorize(article: &Article) -> Vec<Category> {
    let text = format!("{} {}", article.title, article.summary).to_lowercase();

    KEYWORDS
        .iter()
        .filter(|(_, phrases)| phrases.iter().any(|phrase| text.contains(phrase)))
        .map(|(category, _)| *category)
        .collect()
}
