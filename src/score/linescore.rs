use crate::espn::EspnLinescore;

pub const REGULATION_ROUNDS: i32 = 4;
pub const HOLES_PER_ROUND: usize = 18;

/// A competitor's per-period line entries split on the regulation boundary,
/// relative order preserved within each group.
#[derive(Debug, Default)]
pub struct LinescoreGroups<'a> {
    pub regulation: Vec<&'a EspnLinescore>,
    pub playoff: Vec<&'a EspnLinescore>,
}

/// Rows without a period are placeholder data and are discarded.
#[must_use]
pub fn split_linescores(linescores: &[EspnLinescore]) -> LinescoreGroups<'_> {
    let mut groups = LinescoreGroups::default();
    for entry in linescores {
        match entry.period {
            Some(period) if period <= REGULATION_ROUNDS => groups.regulation.push(entry),
            Some(_) => groups.playoff.push(entry),
            None => {}
        }
    }
    groups
}

/// Holes played within one round, inferred from the nested hole rows.
#[must_use]
pub fn holes_played(entry: &EspnLinescore) -> usize {
    entry.linescores.len()
}

impl LinescoreGroups<'_> {
    /// A competitor is in the playoff only when the event has progressed
    /// past regulation AND they have playoff holes of their own. Making the
    /// cut is not enough.
    #[must_use]
    pub fn is_playoff_participant(&self, is_playoff: bool) -> bool {
        is_playoff && !self.playoff.is_empty()
    }

    #[must_use]
    pub fn regulation_round(&self, period: i32) -> Option<&EspnLinescore> {
        self.regulation
            .iter()
            .find(|entry| entry.period == Some(period))
            .copied()
    }
}
