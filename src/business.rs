//! Runs the strategies on words and arbitrates between their answers.

use crate::{
    resources::FuriganaResourceSet,
    solution::{FuriganaSolutionSet, VocabEntry},
    solvers::{default_solvers, FuriganaSolver},
};
use rayon::{iter::ParallelBridge, prelude::ParallelIterator, ThreadPool};
use std::sync::{
    mpsc::{self, SyncSender},
    Arc,
};

/// Finds the furigana of words using a shared set of dictionary resources.
///
/// Strategies are grouped in tiers by priority. Every strategy of the highest tier that finds
/// anything is run and their answers are pooled, so the result never mixes tiers.
/// A result with more than one solution means the word is ambiguous.
pub struct FuriganaBusinessLogic {
    resources: Arc<FuriganaResourceSet>,
    solvers: Vec<Box<dyn FuriganaSolver>>,
}

impl FuriganaBusinessLogic {
    /// Uses the default strategies.
    pub fn new(resources: Arc<FuriganaResourceSet>) -> Self {
        Self {
            resources,
            solvers: default_solvers(),
        }
    }

    /// Uses the given strategies. They are ordered by descending priority, ties keep their order.
    pub fn with_solvers(
        resources: Arc<FuriganaResourceSet>,
        mut solvers: Vec<Box<dyn FuriganaSolver>>,
    ) -> Self {
        solvers.sort_by_key(|solver| std::cmp::Reverse(solver.priority()));
        Self { resources, solvers }
    }

    pub fn resources(&self) -> &FuriganaResourceSet {
        &self.resources
    }

    /// Returns the solutions of the highest tier that finds any.
    /// Words with a blank kanji form or reading have no solutions.
    pub fn solve(&self, vocab: &VocabEntry) -> FuriganaSolutionSet {
        let mut solutions = FuriganaSolutionSet::new(vocab.clone());
        if vocab.is_blank() {
            return solutions;
        }
        let Some(first) = self.solvers.first() else {
            return solutions;
        };

        let mut tier = first.priority();
        for solver in &self.solvers {
            if solver.priority() < tier {
                if !solutions.is_empty() {
                    break;
                }
                tier = solver.priority();
            }
            let found = solver.solve(&self.resources, vocab);
            tracing::trace!(
                word = vocab.kanji_form(),
                solver = solver.name(),
                tier,
                found = found.len(),
                "ran solver"
            );
            solutions.extend(found);
        }
        tracing::trace!(
            word = vocab.kanji_form(),
            tier,
            solutions = solutions.len(),
            "solved"
        );
        solutions
    }

    /// Solves the entries on rayon's global thread pool.
    ///
    /// The results arrive in the order they are finished, not in the order of `entries`.
    /// Only a few results are solved ahead of the ones read from the returned iterator, and
    /// dropping it stops the remaining entries from being solved.
    pub fn solve_range<I>(
        self: &Arc<Self>,
        entries: I,
    ) -> impl Iterator<Item = FuriganaSolutionSet>
    where
        I: IntoIterator<Item = VocabEntry>,
        I::IntoIter: Send + 'static,
    {
        let (tx, rx) = mpsc::sync_channel(channel_bound(rayon::current_num_threads()));
        let logic = Arc::clone(self);
        let entries = entries.into_iter();
        rayon::spawn(move || logic.dispatch(entries, tx));
        rx.into_iter()
    }

    /// Like [`FuriganaBusinessLogic::solve_range`], but on the given thread pool.
    pub fn solve_range_in<I>(
        self: &Arc<Self>,
        pool: &ThreadPool,
        entries: I,
    ) -> impl Iterator<Item = FuriganaSolutionSet>
    where
        I: IntoIterator<Item = VocabEntry>,
        I::IntoIter: Send + 'static,
    {
        let (tx, rx) = mpsc::sync_channel(channel_bound(pool.current_num_threads()));
        let logic = Arc::clone(self);
        let entries = entries.into_iter();
        pool.spawn(move || logic.dispatch(entries, tx));
        rx.into_iter()
    }

    // workers block on a full channel until the receiver catches up or goes away
    fn dispatch<I>(&self, entries: I, tx: SyncSender<FuriganaSolutionSet>)
    where
        I: Iterator<Item = VocabEntry> + Send,
    {
        tracing::debug!(threads = rayon::current_num_threads(), "solving batch");
        let sent = entries
            .par_bridge()
            .try_for_each_with(tx, |tx, entry| tx.send(self.solve(&entry)));
        if sent.is_err() {
            tracing::debug!("receiver dropped, batch stopped early");
        }
    }
}

// results buffered ahead of the reader
fn channel_bound(threads: usize) -> usize {
    threads.max(1) * 2
}
