use crate::domain::CommitRecord;

/// Fixed release-note sections, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Feature,
    Fix,
    FixUi,
    Performance,
}

impl Category {
    /// All categories in the order they are rendered
    pub const ALL: [Category; 4] = [
        Category::Feature,
        Category::Fix,
        Category::FixUi,
        Category::Performance,
    ];

    /// Section title shown in both documents
    pub fn title(&self) -> &'static str {
        match self {
            Category::Feature => "New Features",
            Category::Fix => "Bug Fixes",
            Category::FixUi => "UI Bug Fixes",
            Category::Performance => "Performance Improvements",
        }
    }

    /// Nested sections sit one level below the others
    pub fn is_nested(&self) -> bool {
        matches!(self, Category::FixUi)
    }

    /// Stable identifier of the bucket
    pub fn key(&self) -> &'static str {
        match self {
            Category::Feature => "feature",
            Category::Fix => "fix",
            Category::FixUi => "fix-ui",
            Category::Performance => "performance",
        }
    }

    /// Bucket a commit belongs to, or `None` when its type is not reported
    pub fn route(commit: &CommitRecord) -> Option<Category> {
        match commit.r#type.as_str() {
            "feat" | "feature" => Some(Category::Feature),
            "fix" => {
                let is_ui = commit
                    .scope
                    .as_deref()
                    .is_some_and(|scope| scope.eq_ignore_ascii_case("ui"));
                if is_ui {
                    Some(Category::FixUi)
                } else {
                    Some(Category::Fix)
                }
            }
            "perf" | "performance" => Some(Category::Performance),
            _ => None,
        }
    }

    fn index(&self) -> usize {
        match self {
            Category::Feature => 0,
            Category::Fix => 1,
            Category::FixUi => 2,
            Category::Performance => 3,
        }
    }
}

/// The four disjoint buckets of classified commits.
///
/// Each bucket keeps commit-log order (newest first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    buckets: [Vec<CommitRecord>; 4],
}

impl Buckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: Category, commit: CommitRecord) {
        self.buckets[category.index()].push(commit);
    }

    pub fn get(&self, category: Category) -> &[CommitRecord] {
        &self.buckets[category.index()]
    }

    /// Number of reportable commits across all buckets
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Non-empty buckets in render order
    pub fn non_empty(&self) -> impl Iterator<Item = (Category, &[CommitRecord])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
            .filter(|(_, commits)| !commits.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(subject: &str) -> CommitRecord {
        CommitRecord::parse("0123456789abcdef0123", subject).unwrap()
    }

    #[test]
    fn test_route_ui_fix_any_case() {
        assert_eq!(
            Category::route(&record("fix(UI): button alignment")),
            Some(Category::FixUi)
        );
        assert_eq!(
            Category::route(&record("fix(ui): spacing")),
            Some(Category::FixUi)
        );
        assert_eq!(
            Category::route(&record("fix(Ui): spacing")),
            Some(Category::FixUi)
        );
    }

    #[test]
    fn test_route_other_fix() {
        assert_eq!(
            Category::route(&record("fix(core): crash on launch")),
            Some(Category::Fix)
        );
        assert_eq!(Category::route(&record("fix: crash")), Some(Category::Fix));
        assert_eq!(
            Category::route(&record("fix(ui-kit): crash")),
            Some(Category::Fix)
        );
    }

    #[test]
    fn test_route_feature_and_performance_aliases() {
        assert_eq!(Category::route(&record("feat: a")), Some(Category::Feature));
        assert_eq!(
            Category::route(&record("feature: a")),
            Some(Category::Feature)
        );
        assert_eq!(
            Category::route(&record("perf: a")),
            Some(Category::Performance)
        );
        assert_eq!(
            Category::route(&record("performance: a")),
            Some(Category::Performance)
        );
    }

    #[test]
    fn test_route_ignored_types() {
        for subject in ["chore: bump deps", "docs: readme", "refactor(ui): tidy"] {
            assert_eq!(Category::route(&record(subject)), None, "{}", subject);
        }
    }

    #[test]
    fn test_buckets_non_empty_order() {
        let mut buckets = Buckets::new();
        buckets.push(Category::Performance, record("perf: a"));
        buckets.push(Category::Feature, record("feat: b"));

        let order: Vec<Category> = buckets.non_empty().map(|(c, _)| c).collect();
        assert_eq!(order, vec![Category::Feature, Category::Performance]);
        assert_eq!(buckets.total(), 2);
        assert!(!buckets.is_empty());
        assert!(Buckets::new().is_empty());
    }

    #[test]
    fn test_only_ui_fixes_are_nested() {
        let nested: Vec<&str> = Category::ALL
            .iter()
            .filter(|c| c.is_nested())
            .map(|c| c.key())
            .collect();
        assert_eq!(nested, vec!["fix-ui"]);
    }
}
