// ==================================================
// ARABIC COUNT GRAMMAR
// ==================================================

/// Word-form bucket chosen for a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    /// Exactly one.
    Singular,
    /// Three through ten.
    Few,
    /// Two, zero, and eleven upwards.
    Other,
}

impl PluralForm {
    pub fn of(n: i64) -> Self {
        if n == 1 {
            PluralForm::Singular
        } else if n > 2 && n < 11 {
            PluralForm::Few
        } else {
            PluralForm::Other
        }
    }

    fn index(self) -> usize {
        match self {
            PluralForm::Singular => 0,
            PluralForm::Few => 1,
            PluralForm::Other => 2,
        }
    }
}

/// Display units, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
    Second,
}

/// Rows follow `TimeUnit`, columns follow `PluralForm`.
/// The `Other` column holds the words auction pages have always shown;
/// it is data, do not derive it from the other columns.
const UNIT_WORDS: [[&str; 3]; 4] = [
    ["يوم", "أيام", "أيام"],
    ["ساعة", "ساعات", "ساعات"],
    ["دقيقة", "دقائق", "دقيقة"],
    ["ثانية", "ثوان", "ثانية"],
];

/// Shown when a positive delta is too short for any unit to be displayed.
pub const LESS_THAN_A_MINUTE: &str = "أقل من دقيقة";

impl TimeUnit {
    fn index(self) -> usize {
        match self {
            TimeUnit::Day => 0,
            TimeUnit::Hour => 1,
            TimeUnit::Minute => 2,
            TimeUnit::Second => 3,
        }
    }

    pub fn word(self, form: PluralForm) -> &'static str {
        UNIT_WORDS[self.index()][form.index()]
    }

    /// `"<n> <word>"` with the word picked for `n`.
    pub fn label(self, n: i64) -> String {
        format!("{} {}", n, self.word(PluralForm::of(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_follow_count_rule() {
        assert_eq!(PluralForm::of(1), PluralForm::Singular);
        assert_eq!(PluralForm::of(2), PluralForm::Other);
        for n in 3..=10 {
            assert_eq!(PluralForm::of(n), PluralForm::Few, "n = {}", n);
        }
        assert_eq!(PluralForm::of(11), PluralForm::Other);
        assert_eq!(PluralForm::of(24), PluralForm::Other);
        assert_eq!(PluralForm::of(0), PluralForm::Other);
    }

    #[test]
    fn every_unit_has_three_words() {
        for unit in [TimeUnit::Day, TimeUnit::Hour, TimeUnit::Minute, TimeUnit::Second] {
            assert!(!unit.word(PluralForm::Singular).is_empty());
            assert!(!unit.word(PluralForm::Few).is_empty());
            assert!(!unit.word(PluralForm::Other).is_empty());
            assert_ne!(unit.word(PluralForm::Singular), unit.word(PluralForm::Few));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(TimeUnit::Day.label(1), "1 يوم");
        assert_eq!(TimeUnit::Day.label(4), "4 أيام");
        assert_eq!(TimeUnit::Hour.label(6), "6 ساعات");
        assert_eq!(TimeUnit::Minute.label(2), "2 دقيقة");
        assert_eq!(TimeUnit::Minute.label(5), "5 دقائق");
        assert_eq!(TimeUnit::Second.label(45), "45 ثانية");
    }
}
