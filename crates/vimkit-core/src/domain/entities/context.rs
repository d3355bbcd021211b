use std::collections::HashSet;

use indexmap::IndexSet;

use crate::domain::{
    entities::{accumulator::ExtensionAccumulator, target_file::TargetFile},
    value_objects::OneShot,
};

/// Mutable state of a single generation pass.
///
/// A fresh context is created per run, so two runs never share extension
/// lists, one-shot guards or first-write bookkeeping.
#[derive(Debug, Default)]
pub struct GenerationContext {
    accumulator: ExtensionAccumulator,
    claimed: HashSet<OneShot>,
    touched: IndexSet<TargetFile>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulator(&self) -> &ExtensionAccumulator {
        &self.accumulator
    }

    pub fn accumulator_mut(&mut self) -> &mut ExtensionAccumulator {
        &mut self.accumulator
    }

    /// Claim a one-shot write. Only the first claim in a pass returns `true`.
    pub fn claim(&mut self, shot: OneShot) -> bool {
        self.claimed.insert(shot)
    }

    /// Record a write to `target`. Returns `true` on the first write of the
    /// pass, which is when the file should be truncated.
    pub fn touch(&mut self, target: TargetFile) -> bool {
        self.touched.insert(target)
    }

    pub fn was_touched(&self, target: TargetFile) -> bool {
        self.touched.contains(&target)
    }

    /// Targets written so far, in first-write order.
    pub fn touched(&self) -> impl Iterator<Item = TargetFile> + '_ {
        self.touched.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_claims_once() {
        let mut ctx = GenerationContext::new();
        assert!(ctx.claim(OneShot::Emmet));
        assert!(!ctx.claim(OneShot::Emmet));
    }

    #[test]
    fn first_touch_is_reported_once_and_order_kept() {
        let mut ctx = GenerationContext::new();
        assert!(ctx.touch(TargetFile::Languages));
        assert!(ctx.touch(TargetFile::InitVim));
        assert!(!ctx.touch(TargetFile::Languages));
        assert_eq!(
            ctx.touched().collect::<Vec<_>>(),
            vec![TargetFile::Languages, TargetFile::InitVim]
        );
    }

    #[test]
    fn fresh_contexts_share_nothing() {
        let mut first = GenerationContext::new();
        first.accumulator_mut().add("coc-css").unwrap();
        first.claim(OneShot::Emmet);

        let mut second = GenerationContext::new();
        assert!(second.accumulator().is_empty());
        assert!(second.claim(OneShot::Emmet));
    }
}
