//! Trigger phrases that mark a line as index-related

/// One of the SQL phrases that make a line eligible for suffix stripping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerPhrase {
    /// `CREATE INDEX`, only recognised at the start of the trimmed line
    CreateIndex,
    /// `RENAME INDEX`, recognised anywhere in the line
    RenameIndex,
    /// `DROP INDEX`, recognised anywhere in the line
    DropIndex,
}

impl TriggerPhrase {
    /// All trigger phrases, in classification order
    pub const ALL: [Self; 3] = [Self::CreateIndex, Self::RenameIndex, Self::DropIndex];

    /// The literal SQL text of the phrase
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateIndex => "CREATE INDEX",
            Self::RenameIndex => "RENAME INDEX",
            Self::DropIndex => "DROP INDEX",
        }
    }

    /// Whether this phrase triggers on `line`
    ///
    /// `CREATE INDEX` must open the line once surrounding whitespace is trimmed;
    /// the other two phrases match as plain substrings of the untrimmed line.
    #[must_use]
    pub fn matches(self, line: &str) -> bool {
        match self {
            Self::CreateIndex => line.trim().starts_with(self.as_str()),
            Self::RenameIndex | Self::DropIndex => line.contains(self.as_str()),
        }
    }
}

impl std::fmt::Display for TriggerPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
