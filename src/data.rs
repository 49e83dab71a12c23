// src/data.rs

/// One ranked title for one platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowEntry {
    pub platform: String,
    pub rank: u32,
    pub title: String,
    pub url: String,
}

impl ShowEntry {
    /// Cells in export column order.
    pub fn to_row(&self) -> [String; 4] {
        [
            self.platform.clone(),
            self.rank.to_string(),
            self.title.clone(),
            self.url.clone(),
        ]
    }
}

/// Every entry of one run, in platform order then rank order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<ShowEntry>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, entries: Vec<ShowEntry>) {
        self.entries.extend(entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ShowEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShowEntry> {
        self.entries.iter()
    }

    pub fn head(&self, n: usize) -> &[ShowEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn count_for(&self, platform: &str) -> usize {
        self.entries.iter().filter(|e| e.platform == platform).count()
    }

    /// Row count per platform, in the given order. Platforms without rows report 0.
    pub fn counts<'a, I>(&self, platforms: I) -> Vec<(String, usize)>
    where
        I: IntoIterator<Item = &'a String>,
    {
        platforms
            .into_iter()
            .map(|p| (p.clone(), self.count_for(p)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ShowEntry;
    type IntoIter = std::slice::Iter<'a, ShowEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<ShowEntry>> for ResultSet {
    fn from(entries: Vec<ShowEntry>) -> Self {
        Self { entries }
    }
}
