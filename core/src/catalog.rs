//! The built-in resource catalog.

use skillscout_types::{ResourceRecord, SkillKey};

const DATA_SCIENCE: &[ResourceRecord] = &[
    ResourceRecord::new(
        "Kaggle Learn - Data Science",
        "https://www.kaggle.com/learn/data-science",
        "Hands-on micro-courses and projects to build data science expertise.",
    ),
    ResourceRecord::new(
        "edX - Data Science Essentials",
        "https://www.edx.org/course/data-science-essentials",
        "Fundamental concepts and skills, including statistics and Python.",
    ),
    ResourceRecord::new(
        "Coursera - IBM Data Science Professional Certificate",
        "https://www.coursera.org/professional-certificates/ibm-data-science",
        "Comprehensive path covering data analysis, visualization, and machine learning.",
    ),
    ResourceRecord::new(
        "Google Data Analytics Certificate",
        "https://www.coursera.org/professional-certificates/google-data-analytics",
        "Beginner-friendly program focusing on real-world data analytics skills.",
    ),
];

const MACHINE_LEARNING: &[ResourceRecord] = &[
    ResourceRecord::new(
        "Coursera - Machine Learning by Andrew Ng",
        "https://www.coursera.org/learn/machine-learning",
        "Classic introductory course with algorithms and practical examples.",
    ),
    ResourceRecord::new(
        "fast.ai - Practical Deep Learning",
        "https://course.fast.ai/",
        "Hands-on deep learning course with a focus on real coding skills.",
    ),
    ResourceRecord::new(
        "Google AI - Crash Course",
        "https://developers.google.com/machine-learning/crash-course",
        "Google's free refresher with videos, exercises, and case studies.",
    ),
];

const WEB_DEVELOPMENT: &[ResourceRecord] = &[
    ResourceRecord::new(
        "freeCodeCamp - Web Development",
        "https://www.freecodecamp.org/learn",
        "Free, comprehensive tutorials spanning front-end and back-end technologies.",
    ),
    ResourceRecord::new(
        "The Odin Project",
        "https://www.theodinproject.com/",
        "Project-based full-stack curriculum with community support.",
    ),
    ResourceRecord::new(
        "MDN Web Docs",
        "https://developer.mozilla.org/en-US/docs/Learn",
        "Mozilla's authoritative web development documentation for all skill levels.",
    ),
];

const DEFAULT_RESOURCES: &[ResourceRecord] = &[
    ResourceRecord::new(
        "freeCodeCamp",
        "https://www.freecodecamp.org/",
        "Wide-ranging tutorials on programming, web development, and more.",
    ),
    ResourceRecord::new(
        "Coursera",
        "https://www.coursera.org/",
        "University-level courses across many disciplines, many free to audit.",
    ),
    ResourceRecord::new(
        "Khan Academy",
        "https://www.khanacademy.org/",
        "Extensive video lessons on a variety of academic and technical subjects.",
    ),
    ResourceRecord::new(
        "edX",
        "https://www.edx.org/",
        "High-quality courses from top universities and institutions.",
    ),
];

static BUILTIN: ResourceCatalog = ResourceCatalog {
    entries: &[
        ("data science", DATA_SCIENCE),
        ("machine learning", MACHINE_LEARNING),
        ("web development", WEB_DEVELOPMENT),
    ],
    default: DEFAULT_RESOURCES,
};

/// Immutable mapping from normalized skill key to an ordered resource list,
/// plus the list used when no key matches.
///
/// Keys are lowercase and trimmed; the default list is never empty. List
/// order is display order.
#[derive(Debug)]
pub struct ResourceCatalog {
    entries: &'static [(&'static str, &'static [ResourceRecord])],
    default: &'static [ResourceRecord],
}

impl ResourceCatalog {
    /// The catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Records registered under `key`, or the default list.
    #[must_use]
    pub fn lookup(&self, key: &SkillKey) -> &'static [ResourceRecord] {
        self.get(key).unwrap_or(self.default)
    }

    /// Records registered under `key`, without falling back.
    #[must_use]
    pub fn get(&self, key: &SkillKey) -> Option<&'static [ResourceRecord]> {
        self.entries
            .iter()
            .find(|(registered, _)| *registered == key.as_str())
            .map(|(_, records)| *records)
    }

    #[must_use]
    pub fn default_resources(&self) -> &'static [ResourceRecord] {
        self.default
    }

    /// Registered skill keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }
}
